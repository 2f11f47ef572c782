//! Presentation adapters: show an original and a processed image side by side.

use crate::{AppWindow, PreviewWindow, global_store};
use image::RgbImage;
use slint::{ComponentHandle, Image, Rgb8Pixel, SharedPixelBuffer, Weak};

pub trait Presenter {
    /// Displays `original` next to `processed`, the latter captioned `label`.
    fn show(&mut self, original: &RgbImage, processed: &RgbImage, label: &str);
}

pub fn to_slint_image(image: &RgbImage) -> Image {
    let buffer = SharedPixelBuffer::<Rgb8Pixel>::clone_from_slice(
        image.as_raw(),
        image.width(),
        image.height(),
    );
    Image::from_rgb8(buffer)
}

/// Opens a separate preview window and blocks until the user closes it.
pub struct PreviewPresenter {
    width: u32,
    height: u32,
}

impl PreviewPresenter {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    fn run(&self, original: &RgbImage, processed: &RgbImage, label: &str) -> anyhow::Result<()> {
        let window = PreviewWindow::new()?;
        window.set_original_image(to_slint_image(original));
        window.set_processed_image(to_slint_image(processed));
        window.set_processed_caption(label.into());
        window
            .window()
            .set_size(slint::LogicalSize::new(self.width as f32, self.height as f32));

        window.run()?;
        Ok(())
    }
}

impl Presenter for PreviewPresenter {
    fn show(&mut self, original: &RgbImage, processed: &RgbImage, label: &str) {
        if let Err(e) = self.run(original, processed, label) {
            log::warn!("show preview window failed: {e:?}");
        }
    }
}

/// Updates the two panels of the main window.
pub struct PanelPresenter {
    ui: Weak<AppWindow>,
}

impl PanelPresenter {
    pub fn new(ui: Weak<AppWindow>) -> Self {
        Self { ui }
    }
}

impl Presenter for PanelPresenter {
    fn show(&mut self, original: &RgbImage, processed: &RgbImage, label: &str) {
        let Some(ui) = self.ui.upgrade() else {
            log::warn!("main window is gone, dropping result for {label}");
            return;
        };

        let store = global_store!(ui);
        store.set_original_image(to_slint_image(original));
        store.set_processed_image(to_slint_image(processed));
        store.set_processed_caption(label.into());
    }
}
