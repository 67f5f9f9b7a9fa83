//! # TUI Adapter
//!
//! The crossterm/ratatui-specific layer. Reads keys, keeps the edit buffer,
//! and paints frames produced by `core::render`.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Inline Rendering
//!
//! The prompt is drawn in a two-line ratatui inline viewport below the
//! current shell line, not on the alternate screen, so the answered line
//! stays in the scrollback like any other command output.

mod component;
mod event;
pub mod input;
pub mod line_editor;
pub mod screen;

use log::info;
use std::io::stdout;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use crate::core::options::PromptError;
use crate::core::validate::Answers;
use crate::prompt::MaxLengthPrompt;

pub use input::TerminalInput;
pub use screen::InlineScreen;

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (raw, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
        let _ = disable_raw_mode();
    }
}

/// Ask one question on the controlling terminal.
///
/// Raw mode is held only for the duration of the prompt and restored on every
/// exit path, including errors and interrupts.
pub async fn ask(prompt: &mut MaxLengthPrompt, answers: &mut Answers) -> Result<String, PromptError> {
    let _terminal_mode_guard = TerminalModeGuard::new()?;
    // The inline viewport queries the cursor position; do it before the event stream starts
    let mut screen = InlineScreen::new()?;
    let mut input = TerminalInput::new(prompt.question().default_value().unwrap_or_default());
    prompt.run_into(&mut input, &mut screen, answers).await
}
