use crate::app::{App, Message, Model};

impl App {
    /// Run the filesystem side of a message after `update` has applied it.
    pub(super) fn handle_message_side_effects(model: &mut Model, msg: &Message) {
        if matches!(msg, Message::ForceReload) {
            match model.reload_from_disk() {
                Ok(()) => tracing::debug!(
                    path = %model.file_path.display(),
                    lines = model.document.line_count(),
                    "reloaded"
                ),
                // The previous view stays on screen.
                Err(err) => tracing::debug!(
                    path = %model.file_path.display(),
                    error = %err,
                    "reload failed"
                ),
            }
        }
    }
}
