// crates/travelmap-core/src/model/preferences.rs
use super::TripId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Default interval the search box waits before querying, in milliseconds.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 50;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Map,
    Globe,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "map" | "2d" => Ok(ViewMode::Map),
            "globe" | "3d" => Ok(ViewMode::Globe),
            other => Err(format!("unknown view mode '{other}' (expected map or globe)")),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(format!("unknown theme '{other}' (expected light, dark or system)")),
        }
    }
}

/// View-state settings. Not part of undo/redo history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub view_mode: ViewMode,
    pub theme: Theme,
    pub animation_speed: f64,
    pub search_debounce_ms: u64,
    /// Trip used to filter the map; `None` shows every city.
    pub selected_trip_id: Option<TripId>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::default(),
            theme: Theme::default(),
            animation_speed: 1.0,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            selected_trip_id: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PreferencesPatch {
    pub view_mode: Option<ViewMode>,
    pub theme: Option<Theme>,
    pub animation_speed: Option<f64>,
    pub search_debounce_ms: Option<u64>,
    pub selected_trip_id: Option<Option<TripId>>,
}

impl PreferencesPatch {
    /// Select a trip, or `None` to show all cities again.
    pub fn select_trip(trip: Option<TripId>) -> Self {
        Self {
            selected_trip_id: Some(trip),
            ..Self::default()
        }
    }

    pub fn apply_to(&self, prefs: &mut Preferences) {
        if let Some(mode) = self.view_mode {
            prefs.view_mode = mode;
        }
        if let Some(theme) = self.theme {
            prefs.theme = theme;
        }
        if let Some(speed) = self.animation_speed {
            prefs.animation_speed = speed;
        }
        if let Some(ms) = self.search_debounce_ms {
            prefs.search_debounce_ms = ms;
        }
        if let Some(selected) = &self.selected_trip_id {
            prefs.selected_trip_id.clone_from(selected);
        }
    }
}
