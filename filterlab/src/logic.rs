//! UI logic and callback management module
//!
//! Connects the Slint `Logic` callbacks to the processing session and keeps
//! the `Store` global in sync with it.

use crate::{AppWindow, session::Session};
use std::{cell::RefCell, rc::Rc};

mod filter;
mod status;

pub use status::set_status;

/// Macro to access the global Store component
#[macro_export]
macro_rules! global_store {
    ($ui:expr) => {
        $ui.global::<$crate::Store>()
    };
}

/// Macro to access the global Logic component
#[macro_export]
macro_rules! global_logic {
    ($ui:expr) => {
        $ui.global::<$crate::Logic>()
    };
}

/// Connects a `Logic` callback to a function taking the window, the shared
/// session and the callback arguments. Only a weak window handle is captured.
#[macro_export]
macro_rules! logic_cb {
    ($callback_name:ident, $ui:expr, $session:expr, $($arg:ident),*) => {
        {{
            let ui_weak = $ui.as_weak();
            let session = $session.clone();
            paste::paste! {
                $crate::global_logic!($ui)
                    .[<on_ $callback_name>](move |$($arg),*| {
                        if let Some(ui) = ui_weak.upgrade() {
                            $callback_name(&ui, &session, $($arg),*)
                        }
                    });
            }
        }}
    };
    ($callback_name:ident, $ui:expr, $session:expr) => {
        {{
            let ui_weak = $ui.as_weak();
            let session = $session.clone();
            paste::paste! {
                $crate::global_logic!($ui)
                    .[<on_ $callback_name>](move || {
                        if let Some(ui) = ui_weak.upgrade() {
                            $callback_name(&ui, &session)
                        }
                    });
            }
        }}
    };
}

pub type SharedSession = Rc<RefCell<Session>>;

pub fn init(ui: &AppWindow, session: Session) {
    let session: SharedSession = Rc::new(RefCell::new(session));

    status::init(ui);
    filter::init(ui, &session);
}
