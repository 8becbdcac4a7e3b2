//! Application menu: standard submenus plus the two inspector toggles.

use tauri::menu::{Menu, MenuItem, PredefinedMenuItem, Submenu};
use tauri::{App, Manager, webview::Webview};

use crate::controller::{BAR_WEBVIEW, CONTENT_WEBVIEW};

const RELOAD_PAGE: &str = "reload-page";
const TOGGLE_BAR_DEVTOOLS: &str = "toggle-bar-devtools";
const TOGGLE_CONTENT_DEVTOOLS: &str = "toggle-content-devtools";

pub fn install(app: &App) -> tauri::Result<()> {
    let handle = app.handle();

    #[cfg(target_os = "macos")]
    let app_menu = Submenu::with_items(
        handle,
        "Wisp",
        true,
        &[
            &PredefinedMenuItem::about(handle, None, Some(tauri::menu::AboutMetadata::default()))?,
            &PredefinedMenuItem::separator(handle)?,
            &PredefinedMenuItem::services(handle, None)?,
            &PredefinedMenuItem::separator(handle)?,
            &PredefinedMenuItem::hide(handle, None)?,
            &PredefinedMenuItem::hide_others(handle, None)?,
            &PredefinedMenuItem::show_all(handle, None)?,
            &PredefinedMenuItem::separator(handle)?,
            &PredefinedMenuItem::quit(handle, None)?,
        ],
    )?;

    let edit_menu = Submenu::with_items(
        handle,
        "Edit",
        true,
        &[
            &PredefinedMenuItem::undo(handle, None)?,
            &PredefinedMenuItem::redo(handle, None)?,
            &PredefinedMenuItem::separator(handle)?,
            &PredefinedMenuItem::cut(handle, None)?,
            &PredefinedMenuItem::copy(handle, None)?,
            &PredefinedMenuItem::paste(handle, None)?,
            &PredefinedMenuItem::select_all(handle, None)?,
        ],
    )?;

    let view_menu = Submenu::with_items(
        handle,
        "View",
        true,
        &[
            &MenuItem::with_id(handle, RELOAD_PAGE, "Reload Page", true, Some("CmdOrCtrl+R"))?,
            &PredefinedMenuItem::separator(handle)?,
            &MenuItem::with_id(
                handle,
                TOGGLE_BAR_DEVTOOLS,
                "Toggle UI Developer Tools",
                true,
                Some("Alt+CmdOrCtrl+I"),
            )?,
            &MenuItem::with_id(
                handle,
                TOGGLE_CONTENT_DEVTOOLS,
                "Toggle Web Content Developer Tools",
                true,
                Some("Shift+CmdOrCtrl+I"),
            )?,
        ],
    )?;

    let window_menu = Submenu::with_items(
        handle,
        "Window",
        true,
        &[
            &PredefinedMenuItem::minimize(handle, None)?,
            &PredefinedMenuItem::maximize(handle, None)?,
            &PredefinedMenuItem::separator(handle)?,
            &PredefinedMenuItem::close_window(handle, None)?,
        ],
    )?;

    let menu = Menu::with_items(
        handle,
        &[
            #[cfg(target_os = "macos")]
            &app_menu,
            &edit_menu,
            &view_menu,
            &window_menu,
        ],
    )?;
    app.set_menu(menu)?;

    app.on_menu_event(|app, event| match event.id.as_ref() {
        RELOAD_PAGE => {
            if let Some(content) = app.get_webview(CONTENT_WEBVIEW) {
                if let Err(e) = content.eval("location.reload()") {
                    log::warn!("reload failed: {e}");
                }
            }
        }
        TOGGLE_BAR_DEVTOOLS => {
            if let Some(bar) = app.get_webview(BAR_WEBVIEW) {
                toggle_devtools(&bar);
            }
        }
        TOGGLE_CONTENT_DEVTOOLS => {
            if let Some(content) = app.get_webview(CONTENT_WEBVIEW) {
                toggle_devtools(&content);
            }
        }
        _ => {}
    });

    Ok(())
}

fn toggle_devtools(webview: &Webview) {
    if webview.is_devtools_open() {
        webview.close_devtools();
    } else {
        webview.open_devtools();
    }
}
