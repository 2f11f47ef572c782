use super::SharedSession;
use crate::{
    AppWindow, config, global_store, logic_cb,
    presenter::{PanelPresenter, Presenter, to_slint_image},
    status_info, status_success, status_warn,
};
use slint::{ComponentHandle, ModelRc, SharedString, VecModel};

pub fn init(ui: &AppWindow, session: &SharedSession) {
    inner_init(ui, session);

    logic_cb!(load_image, ui, session);
    logic_cb!(apply_operation, ui, session, index, intensity);
}

fn inner_init(ui: &AppWindow, session: &SharedSession) {
    let session = session.borrow();
    let processing = config::all().processing;

    let names = session
        .catalog()
        .entries()
        .map(|op| SharedString::from(op.name()))
        .collect::<Vec<_>>();

    let store = global_store!(ui);
    store.set_operation_names(ModelRc::new(VecModel::from(names)));
    store.set_current_operation(
        session
            .position_of(processing.operation().name())
            .unwrap_or_default(),
    );
    store.set_intensity(processing.intensity().value());
    store.set_image_loaded(session.original().is_some());
}

fn load_image(ui: &AppWindow, session: &SharedSession) {
    let path = match native_dialog::DialogBuilder::file()
        .set_title("Choose an image")
        .open_single_file()
        .show()
    {
        Ok(Some(path)) => path,
        Ok(None) => return,
        Err(e) => {
            status_warn!(ui, format!("Open file dialog failed. {e}"));
            return;
        }
    };

    status_info!(ui, format!("Loading image from: {}", path.display()));

    let mut session = session.borrow_mut();
    match session.load(&path) {
        Ok(image) => {
            let store = global_store!(ui);
            store.set_original_image(to_slint_image(image));
            store.set_processed_image(slint::Image::default());
            store.set_processed_caption("Processed Image".into());
            store.set_image_loaded(true);

            status_success!(
                ui,
                format!(
                    "Loaded {} ({}x{})",
                    path.display(),
                    image.width(),
                    image.height()
                )
            );
        }
        Err(e) => status_warn!(ui, e),
    }
}

fn apply_operation(ui: &AppWindow, session: &SharedSession, index: i32, intensity: f32) {
    let session = session.borrow();

    let selection = match session.selection_at(index, intensity) {
        Ok(selection) => selection,
        Err(e) => {
            status_warn!(ui, e);
            return;
        }
    };

    let Some(original) = session.original() else {
        status_warn!(ui, "Load an image first.");
        return;
    };

    match session.apply(&selection) {
        Ok(processed) => {
            let operation = selection.operation;
            PanelPresenter::new(ui.as_weak()).show(original, &processed, operation.name());
            global_store!(ui).set_intensity(selection.intensity.value());

            status_success!(
                ui,
                format!(
                    "Applied {operation} at {} ({})",
                    selection.intensity,
                    operation.describe(selection.intensity)
                )
            );
        }
        Err(e) => status_warn!(ui, e),
    }
}
