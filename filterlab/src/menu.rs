//! Line-oriented menu controller.
//!
//! The controller walks a small state machine: it asks for an image path,
//! a category, an operation within that category and an intensity, then
//! dispatches the selection once and hands the result to a [`Presenter`].
//! Any invalid answer ends the run after printing the reason.

use crate::{presenter::Presenter, session::Session};
use image_effect::{Category, ImageEffectError, Intensity, Operation, Selection};
use std::io::{self, BufRead, Write};

#[derive(Debug)]
pub enum MenuState {
    AwaitingImage,
    AwaitingCategory,
    AwaitingOperation(Category),
    AwaitingIntensity(Operation),
    Dispatched(Selection),
    Terminated(Outcome),
}

#[derive(Debug)]
pub enum Outcome {
    /// The selection was applied and the result presented.
    Presented(Selection),

    /// The run stopped early. The error was already reported to the user.
    Aborted(ImageEffectError),
}

pub struct TextMenu<R, W, P> {
    input: R,
    output: W,
    presenter: P,
    session: Session,
}

impl<R: BufRead, W: Write, P: Presenter> TextMenu<R, W, P> {
    pub fn new(input: R, output: W, presenter: P, session: Session) -> Self {
        Self {
            input,
            output,
            presenter,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Runs the menu to completion. Only console I/O failures are returned
    /// as errors; user mistakes end up in [`Outcome::Aborted`].
    pub fn run(&mut self) -> io::Result<Outcome> {
        let mut state = MenuState::AwaitingImage;

        loop {
            log::debug!("menu state: {state:?}");

            state = match state {
                MenuState::Terminated(outcome) => return Ok(outcome),
                state => self.step(state)?,
            };
        }
    }

    fn step(&mut self, state: MenuState) -> io::Result<MenuState> {
        let next = match state {
            MenuState::AwaitingImage => {
                let path = self.prompt("Enter the path to the image: ")?;
                writeln!(self.output, "Loading image from: {path}")?;

                match self.session.load(&path) {
                    Ok(_) => MenuState::AwaitingCategory,
                    Err(e) => self.abort(e)?,
                }
            }

            MenuState::AwaitingCategory => {
                writeln!(self.output, "Choose an operation:")?;
                for category in Category::all() {
                    writeln!(self.output, "{}: {}", category.menu_code(), category)?;
                }

                let choice = self.prompt("Enter your choice: ")?;
                match Category::parse(&choice) {
                    Ok(category) => MenuState::AwaitingOperation(category),
                    Err(e) => self.abort(e)?,
                }
            }

            MenuState::AwaitingOperation(category) => {
                let heading = match category {
                    Category::Filter => "Choose a filter to apply:",
                    Category::Enhancement => "Choose an enhancement to apply:",
                };
                writeln!(self.output, "{heading}")?;
                for (ordinal, op) in self.session.catalog().operations(category).iter().enumerate() {
                    writeln!(self.output, "{}: {}", ordinal + 1, op)?;
                }

                let choice = self.prompt("Enter your choice: ")?;
                match self.session.catalog().parse_ordinal(category, &choice) {
                    Ok(op) => MenuState::AwaitingIntensity(op),
                    Err(e) => self.abort(e)?,
                }
            }

            MenuState::AwaitingIntensity(operation) => {
                let answer = self.prompt(&format!(
                    "Enter intensity ({}-{}, default {}): ",
                    Intensity::MIN,
                    Intensity::MAX,
                    Intensity::DEFAULT.value()
                ))?;

                let intensity = if answer.is_empty() {
                    Ok(Intensity::DEFAULT)
                } else {
                    answer.parse::<Intensity>()
                };

                match intensity
                    .and_then(|intensity| Selection::new(operation.category(), operation, intensity))
                {
                    Ok(selection) => MenuState::Dispatched(selection),
                    Err(e) => self.abort(e)?,
                }
            }

            MenuState::Dispatched(selection) => self.dispatch(selection)?,

            MenuState::Terminated(outcome) => MenuState::Terminated(outcome),
        };

        Ok(next)
    }

    fn dispatch(&mut self, selection: Selection) -> io::Result<MenuState> {
        let processed = match self.session.apply(&selection) {
            Ok(processed) => processed,
            Err(e) => return self.abort(e),
        };

        let operation = selection.operation;
        writeln!(
            self.output,
            "Applied {operation} ({})",
            operation.describe(selection.intensity)
        )?;
        self.output.flush()?;

        if let Some(original) = self.session.original() {
            self.presenter.show(original, &processed, operation.name());
        }

        Ok(MenuState::Terminated(Outcome::Presented(selection)))
    }

    fn abort(&mut self, err: ImageEffectError) -> io::Result<MenuState> {
        log::warn!("{err}");
        writeln!(self.output, "Error: {err}")?;
        Ok(MenuState::Terminated(Outcome::Aborted(err)))
    }

    /// Prints `message` and reads one trimmed line. End of input reads as an
    /// empty answer.
    fn prompt(&mut self, message: &str) -> io::Result<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}
