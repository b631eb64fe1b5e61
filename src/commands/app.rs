use crate::menu::help;
use serde::Serialize;
use tauri::{AppHandle, Manager};

/// Version and platform details surfaced to the web client
#[derive(Debug, Clone, Serialize)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub tauri_version: String,
    pub os: String,
    pub arch: String,
    pub os_release: String,
}

#[tauri::command]
pub fn get_app_info(app: AppHandle) -> AppInfo {
    let info = app.package_info();
    AppInfo {
        name: info.name.clone(),
        version: info.version.to_string(),
        tauri_version: tauri::VERSION.to_string(),
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        os_release: crate::platform::os_release().to_string(),
    }
}

#[tauri::command]
pub fn open_website(app: AppHandle) {
    help::open_website(&app);
}

#[tauri::command]
pub fn report_issue(app: AppHandle) {
    help::open_report_issue(&app);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_info_serializes_with_stable_keys() {
        let info = AppInfo {
            name: "Teal".to_string(),
            version: "0.1.0".to_string(),
            tauri_version: "2.5.0".to_string(),
            os: "linux".to_string(),
            arch: "x86_64".to_string(),
            os_release: "6.1.0".to_string(),
        };

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["name"], "Teal");
        assert_eq!(json["version"], "0.1.0");
        assert_eq!(json["tauri_version"], "2.5.0");
        assert_eq!(json["os"], "linux");
        assert_eq!(json["arch"], "x86_64");
        assert_eq!(json["os_release"], "6.1.0");
    }
}
