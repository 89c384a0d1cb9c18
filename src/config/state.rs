// src/config/state.rs
use super::consts::ALL_SEASONS;
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Current season selector value ("all" or one season label)
    pub selected_season: String,

    /// Show/hide the map panel
    pub show_map: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            selected_season: s!(ALL_SEASONS),
            show_map: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
