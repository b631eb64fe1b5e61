use crate::config::SettingsState;
use tauri::State;

#[tauri::command]
pub fn get_zoom_factor(settings: State<SettingsState>) -> Result<f64, String> {
    settings.zoom_factor().map_err(|e| e.to_string())
}

#[tauri::command]
pub fn set_zoom_factor(settings: State<SettingsState>, factor: f64) -> Result<f64, String> {
    settings.set_zoom_factor(factor).map_err(|e| e.to_string())
}
