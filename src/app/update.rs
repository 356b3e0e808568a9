use crate::app::Model;
use crate::search::SearchDirection;

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Navigation
    /// Scroll up by n lines
    ScrollUp(usize),
    /// Scroll down by n lines
    ScrollDown(usize),
    /// Scroll up one page
    PageUp,
    /// Scroll down one page
    PageDown,
    /// Go to beginning of document
    GoToTop,
    /// Go to end of document
    GoToBottom,

    // Search
    /// Open the search prompt
    StartSearch,
    /// Replace the prompt text
    SearchInput(String),
    /// Run the prompt text as a new query
    SubmitSearch,
    /// Close the prompt without searching and forget the previous query
    CancelSearch,
    /// Go to next search match
    NextMatch,
    /// Go to previous match
    PrevMatch,

    // File
    /// Re-read the file from disk
    ForceReload,

    // Window
    /// Terminal resized
    Resize(u16, u16),

    // Application
    /// Quit the application
    Quit,
}

/// Apply a message to the model, returning the new state.
///
/// Reloading touches the filesystem and happens in the effect handler;
/// here it is a no-op.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        // Navigation
        Message::ScrollUp(n) => model.viewport.scroll_up(n),
        Message::ScrollDown(n) => model.viewport.scroll_down(n),
        Message::PageUp => model.viewport.page_up(),
        Message::PageDown => model.viewport.page_down(),
        Message::GoToTop => model.viewport.go_to_top(),
        Message::GoToBottom => model.viewport.go_to_bottom(),

        // Search
        Message::StartSearch => {
            model.prompt = Some(String::new());
        }
        Message::SearchInput(text) => {
            if model.prompt.is_some() {
                model.prompt = Some(text);
            }
        }
        Message::SubmitSearch => {
            if let Some(query) = model.prompt.take()
                && model.search.set_query(&query)
            {
                model.jump_to_match(SearchDirection::Forward);
            }
        }
        Message::CancelSearch => {
            // Same as submitting nothing
            if model.prompt.take().is_some() {
                model.search.set_query("");
            }
        }
        Message::NextMatch => model.jump_to_match(SearchDirection::Forward),
        Message::PrevMatch => model.jump_to_match(SearchDirection::Backward),

        Message::ForceReload => {}

        Message::Resize(width, height) => model.rebuild(width, height),

        Message::Quit => {
            model.should_quit = true;
        }
    }
    model
}
