//! Status line shown under the image panels.

use crate::{AppWindow, StatusKind, global_store};
use slint::ComponentHandle;

/// Macro to show a warning on the status line
#[macro_export]
macro_rules! status_warn {
    ($ui:expr, $msg:expr) => {
        $crate::logic::set_status(&$ui, $crate::StatusKind::Warning, &$msg.to_string())
    };
}

/// Macro to show a success message on the status line
#[macro_export]
macro_rules! status_success {
    ($ui:expr, $msg:expr) => {
        $crate::logic::set_status(&$ui, $crate::StatusKind::Success, &$msg.to_string())
    };
}

/// Macro to show an informational message on the status line
#[macro_export]
macro_rules! status_info {
    ($ui:expr, $msg:expr) => {
        $crate::logic::set_status(&$ui, $crate::StatusKind::Info, &$msg.to_string())
    };
}

pub fn init(ui: &AppWindow) {
    set_status(ui, StatusKind::Info, "Load an image to begin.");
}

pub fn set_status(ui: &AppWindow, kind: StatusKind, msg: &str) {
    match kind {
        StatusKind::Warning => log::warn!("{msg}"),
        _ => log::info!("{msg}"),
    }

    let store = global_store!(ui);
    store.set_status_kind(kind);
    store.set_status_message(msg.into());
}
