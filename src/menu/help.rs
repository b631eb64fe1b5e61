//! Help submenu and external links
//!
//! Both entries leave the app for the default browser: the project website
//! and a new GitHub issue prefilled with app and system versions.

use tauri::menu::{MenuItem, Submenu};
use tauri::{App, AppHandle, Manager, Wry};
use tauri_plugin_opener::OpenerExt;

/// Project home page
pub const WEBSITE_URL: &str = "https://github.com/tealapp/teal";
/// New issue form, the body template travels as a query parameter
const NEW_ISSUE_URL: &str = "https://github.com/tealapp/teal/issues/new";

/// Build the Help submenu shared by both platforms
pub fn help_submenu(app: &App) -> tauri::Result<Submenu<Wry>> {
    let website = MenuItem::with_id(
        app,
        super::ID_WEBSITE,
        "Teal Website...",
        true,
        None::<&str>,
    )?;
    let report_issue = MenuItem::with_id(
        app,
        super::ID_REPORT_ISSUE,
        "Report an Issue...",
        true,
        None::<&str>,
    )?;

    Submenu::with_items(app, "Help", true, &[&website, &report_issue])
}

/// Open the project website in the default browser
pub fn open_website(app: &AppHandle) {
    open_external(app, WEBSITE_URL);
}

/// Open a new GitHub issue prefilled with app and system versions
pub fn open_report_issue(app: &AppHandle) {
    let info = app.package_info();
    let url = issue_url(&info.name, &info.version.to_string());
    open_external(app, &url);
}

fn open_external(app: &AppHandle, url: &str) {
    tracing::debug!("opening {}", url);
    if let Err(e) = app.opener().open_url(url, None::<&str>) {
        tracing::warn!("failed to open {}: {}", url, e);
    }
}

fn issue_url(app_name: &str, app_version: &str) -> String {
    let body = issue_body(
        app_name,
        app_version,
        tauri::VERSION,
        std::env::consts::OS,
        std::env::consts::ARCH,
        crate::platform::os_release(),
    );
    format!("{}?body={}", NEW_ISSUE_URL, urlencoding::encode(&body))
}

fn issue_body(
    app_name: &str,
    app_version: &str,
    tauri_version: &str,
    os: &str,
    arch: &str,
    os_release: &str,
) -> String {
    format!(
        "\n<!-- Please succinctly describe your issue and steps to reproduce it. -->\n\n-\n\n{app_name} {app_version}\nTauri {tauri_version}\n{os} {arch} {os_release}"
    )
}
