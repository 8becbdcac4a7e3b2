use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("window {0:?} is missing")]
    MissingWindow(&'static str),

    #[error("webview {0:?} is missing")]
    MissingWebview(&'static str),

    #[error("invalid navigation target {target:?}: {source}")]
    InvalidTarget {
        target: String,
        source: url::ParseError,
    },

    #[error("unrecognized shortcut {0:?}")]
    InvalidShortcut(String),

    #[error("failed to register global shortcut: {0}")]
    Shortcut(#[from] tauri_plugin_global_shortcut::Error),

    #[error(transparent)]
    Tauri(#[from] tauri::Error),
}
