use anyhow::{Context, Result};
use ratatui::DefaultTerminal;

/// Owns the raw-mode alternate screen and restores the terminal on drop,
/// including when the loop returns early with an error or panics.
pub(super) struct TerminalContext {
    terminal: DefaultTerminal,
}

impl TerminalContext {
    pub(super) fn init() -> Result<Self> {
        let terminal = ratatui::try_init()
            .context("Failed to initialize terminal - mdview requires an interactive terminal")?;
        Ok(Self { terminal })
    }

    pub(super) const fn terminal(&mut self) -> &mut DefaultTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalContext {
    fn drop(&mut self) {
        ratatui::restore();
    }
}
