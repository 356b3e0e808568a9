use anyhow::Result;
use crossterm::event;
use ratatui::DefaultTerminal;

use crate::app::{App, Message, Model, update};
use crate::document::read_source;

use super::terminal::TerminalContext;

impl App {
    /// Run the main event loop.
    ///
    /// The file is read before the terminal switches to the alternate
    /// screen, so a missing file is reported on a normal terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the terminal cannot be
    /// initialized, or drawing or reading input fails.
    pub fn run(&mut self) -> Result<()> {
        let source = read_source(&self.file_path)?;

        let mut context = TerminalContext::init()?;
        let terminal = context.terminal();
        let size = terminal.size()?;
        let layout_width = crate::ui::document_content_width(size.width);
        let document = crate::document::Document::parse_with_layout(&source, layout_width);
        tracing::debug!(
            path = %self.file_path.display(),
            width = size.width,
            height = size.height,
            lines = document.line_count(),
            "document loaded"
        );

        let mut model = Model::new(
            self.file_path.clone(),
            document,
            (size.width, size.height),
        )
        .with_color_support(self.color_support);

        Self::event_loop(terminal, &mut model)
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        loop {
            terminal.draw(|frame| crate::ui::render(model, frame))?;

            if let Some(msg) = Self::handle_event(&event::read()?, model) {
                tracing::trace!(?msg, "message");
                Self::dispatch(model, msg);
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Apply a message and then its side effects.
    pub(super) fn dispatch(model: &mut Model, msg: Message) {
        let side_msg = msg.clone();
        *model = update(std::mem::take(model), msg);
        Self::handle_message_side_effects(model, &side_msg);
    }
}
