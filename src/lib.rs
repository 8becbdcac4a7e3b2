use std::sync::Mutex;

use tauri::webview::{PageLoadEvent, WebviewBuilder};
use tauri::window::WindowBuilder;
use tauri::{App, LogicalPosition, LogicalSize, Manager, RunEvent, Url, WebviewUrl, WindowEvent};
use tauri_plugin_global_shortcut::GlobalShortcutExt;

pub mod config;
pub mod controller;
pub mod error;
pub mod menu;
pub mod normalize;
pub mod overlay;
pub mod shortcut;

use config::AppConfig;
use controller::Controller;

pub struct AppState {
    pub controller: Mutex<Controller>,
}

/// Presentation → controller: navigate to whatever the user typed.
#[tauri::command]
fn load_url(state: tauri::State<'_, AppState>, url: String) -> Result<(), String> {
    log::info!("load-url request: {url:?}");
    let mut controller = state.controller.lock().map_err(|e| e.to_string())?;
    controller.navigate(&url).map_err(|e| {
        log::error!("failed to load {url:?}: {e}");
        e.to_string()
    })
}

/// Presentation → controller: dismiss the bar without navigating.
#[tauri::command]
fn url_bar_escape(state: tauri::State<'_, AppState>) -> Result<(), String> {
    let mut controller = state.controller.lock().map_err(|e| e.to_string())?;
    controller.cancel();
    Ok(())
}

fn setup(app: &mut App) -> Result<(), Box<dyn std::error::Error>> {
    let handle = app.handle().clone();
    let config = AppConfig::load(&handle);
    log::info!(
        "starting: home {:?}, toggle shortcut {:?}",
        config.home_url,
        config.shortcut
    );

    let window = WindowBuilder::new(app, controller::MAIN_WINDOW)
        .title("Wisp")
        .inner_size(config.window.width, config.window.height)
        .decorations(false)
        .build()?;

    let size = LogicalSize::new(config.window.width, config.window.height);

    // Bar first, content second: the content view stacks above the bar
    // document and uncovers the input strip only when resized below it.
    window.add_child(
        WebviewBuilder::new(
            controller::BAR_WEBVIEW,
            WebviewUrl::App("index.html".into()),
        ),
        LogicalPosition::new(0.0, 0.0),
        size,
    )?;

    let home: Url = config.home_url.parse()?;
    let content = WebviewBuilder::new(controller::CONTENT_WEBVIEW, WebviewUrl::External(home))
        .on_page_load(|webview, payload| match payload.event() {
            PageLoadEvent::Started => {
                log::debug!("content load started: {}", payload.url());
            }
            PageLoadEvent::Finished => {
                log::info!("content load finished: {}", payload.url());
                let Some(state) = webview.try_state::<AppState>() else {
                    return;
                };
                let Ok(mut controller) = state.controller.lock() else {
                    return;
                };
                controller.navigation_finished();
            }
        });
    window.add_child(content, LogicalPosition::new(0.0, 0.0), size)?;

    menu::install(app)?;
    shortcut::register_toggle(&handle, &config.shortcut)?;

    let resize_handle = handle.clone();
    window.on_window_event(move |event| {
        if let WindowEvent::Resized(_) = event {
            let Some(state) = resize_handle.try_state::<AppState>() else {
                return;
            };
            let Ok(controller) = state.controller.lock() else {
                return;
            };
            controller.relayout();
        }
    });

    app.manage(AppState {
        controller: Mutex::new(Controller::new(handle, &config)),
    });
    log::info!("window ready, URL bar hidden");
    Ok(())
}

pub fn run() {
    tauri::Builder::default()
        .plugin(
            tauri_plugin_log::Builder::new()
                .targets([
                    tauri_plugin_log::Target::new(tauri_plugin_log::TargetKind::Stdout),
                    tauri_plugin_log::Target::new(tauri_plugin_log::TargetKind::LogDir {
                        file_name: Some("wisp".into()),
                    }),
                ])
                .level(log::LevelFilter::Info)
                .build(),
        )
        .plugin(tauri_plugin_global_shortcut::Builder::new().build())
        .invoke_handler(tauri::generate_handler![load_url, url_bar_escape])
        .setup(setup)
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app, event| {
            if let RunEvent::Exit = event {
                if let Err(e) = app.global_shortcut().unregister_all() {
                    log::warn!("failed to release global shortcuts: {e}");
                }
            }
        });
}
