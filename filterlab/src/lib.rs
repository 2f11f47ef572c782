//! filterlab
//!
//! Loads an image, applies one of ten filters or enhancements at a chosen
//! intensity and shows the result next to the original.
//!
//! # Entry points
//! - `desktop_main`: Slint window with a load button, an operation list,
//!   an intensity slider and two image panels
//! - `cli_main`: text menu on stdin/stdout that presents its single result
//!   in a preview window

slint::include_modules!();

#[macro_use]
extern crate derivative;

mod config;
mod logic;

pub mod menu;
pub mod presenter;
pub mod session;

use anyhow::{Context, Result};
use image_effect::Catalog;
use menu::{Outcome, TextMenu};
use presenter::PreviewPresenter;
use session::Session;
use slint::ComponentHandle;

/// Sets up env_logger with a `[time level file line] message` format.
/// `RUST_LOG` overrides `default_level`.
pub fn init_logger(default_level: &str) {
    use std::io::Write;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

fn ui_before() {
    init_logger("info");
    config::init();

    #[cfg(target_os = "linux")]
    {
        _ = slint::set_xdg_app_id("filterlab".to_string());
    }
}

fn ui_after(ui: &AppWindow) -> Result<()> {
    let preference = config::all().preference;
    ui.window().set_size(slint::LogicalSize::new(
        preference.win_width as f32,
        preference.win_height as f32,
    ));

    let catalog = Catalog::standard().context("build operation catalog failed")?;
    logic::init(ui, Session::new(catalog));
    Ok(())
}

pub fn desktop_main() -> Result<()> {
    log::debug!("start...");

    ui_before();
    let ui = AppWindow::new().context("create main window failed")?;
    ui_after(&ui)?;

    ui.run().context("run main window failed")?;

    log::debug!("exit...");
    Ok(())
}

/// Runs the text menu once. User mistakes are reported on stdout and still
/// count as a normal exit.
pub fn cli_main() -> Result<()> {
    init_logger("warn");
    config::init();

    let preference = config::all().preference;
    let catalog = Catalog::standard().context("build operation catalog failed")?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut menu = TextMenu::new(
        stdin.lock(),
        stdout.lock(),
        PreviewPresenter::new(preference.preview_width, preference.preview_height),
        Session::new(catalog),
    );

    match menu.run().context("console i/o failed")? {
        Outcome::Presented(selection) => log::debug!("presented {selection:?}"),
        Outcome::Aborted(e) => log::debug!("aborted: {e:?}"),
    }

    Ok(())
}
