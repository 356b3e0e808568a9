use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Message, Model};

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Self::handle_key(*key, model),
            Event::Resize(w, h) => Some(Message::Resize(*w, *h)),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Message::Quit);
        }

        if let Some(input) = model.prompt.as_ref() {
            return match key.code {
                KeyCode::Esc => Some(Message::CancelSearch),
                KeyCode::Enter => Some(Message::SubmitSearch),
                KeyCode::Backspace => {
                    let mut next = input.clone();
                    next.pop();
                    Some(Message::SearchInput(next))
                }
                KeyCode::Char(c)
                    if !key.modifiers.contains(KeyModifiers::CONTROL)
                        && !key.modifiers.contains(KeyModifiers::ALT) =>
                {
                    let mut next = input.clone();
                    next.push(c);
                    Some(Message::SearchInput(next))
                }
                _ => None,
            };
        }

        match key.code {
            // Navigation
            KeyCode::Char('j') | KeyCode::Down => Some(Message::ScrollDown(1)),
            KeyCode::Char('k') | KeyCode::Up => Some(Message::ScrollUp(1)),
            KeyCode::PageDown => Some(Message::PageDown),
            KeyCode::PageUp => Some(Message::PageUp),
            KeyCode::Char('g') => Some(Message::GoToTop),
            KeyCode::Char('G') => Some(Message::GoToBottom),

            // Search
            KeyCode::Char('/') => Some(Message::StartSearch),
            KeyCode::Char('n') => Some(Message::NextMatch),
            KeyCode::Char('N') => Some(Message::PrevMatch),

            // File
            KeyCode::Char('r') => Some(Message::ForceReload),

            // Application
            KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),

            _ => None,
        }
    }
}
