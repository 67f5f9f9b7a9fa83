//! # Prompt Screen
//!
//! Paints a `PromptFrame` as two lines below the shell prompt, using a
//! ratatui inline viewport rather than the alternate screen:
//!
//! ```text
//! ? Enter your name Testing█
//! (7/20 characters)
//! ```
//!
//! `PromptView` is the component (testable with `TestBackend`);
//! `InlineScreen` owns the real terminal and implements [`Screen`].

use std::io::{Stdout, stdout};

use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal, TerminalOptions, Viewport};

use crate::core::render::PromptFrame;
use crate::prompt::Screen;
use crate::tui::component::Component;

/// Height of the inline viewport: prompt line + status line.
pub const PROMPT_HEIGHT: u16 = 2;

/// Two-line prompt view.
///
/// # Props
///
/// - `frame`: what to paint
/// - `cursor_width`: columns between the start of the value and the cursor;
///   `None` leaves the cursor hidden
pub struct PromptView<'a> {
    pub frame: &'a PromptFrame,
    pub cursor_width: Option<u16>,
}

impl Component for PromptView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [prompt_area, status_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        frame.render_widget(Paragraph::new(self.frame.prompt_line.clone()), prompt_area);
        frame.render_widget(Paragraph::new(self.frame.status_line.clone()), status_area);

        if let Some(cursor_width) = self.cursor_width {
            let max_x = prompt_area.right().saturating_sub(1);
            let x = prompt_area
                .x
                .saturating_add(self.frame.input_column)
                .saturating_add(cursor_width)
                .min(max_x);
            frame.set_cursor_position((x, prompt_area.y));
        }
    }
}

pub struct InlineScreen {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl InlineScreen {
    pub fn new() -> std::io::Result<Self> {
        let terminal = Terminal::with_options(
            CrosstermBackend::new(stdout()),
            TerminalOptions {
                viewport: Viewport::Inline(PROMPT_HEIGHT),
            },
        )?;
        Ok(Self { terminal })
    }
}

impl Screen for InlineScreen {
    fn render(&mut self, frame: &PromptFrame, cursor_width: u16) -> std::io::Result<()> {
        let mut view = PromptView {
            frame,
            cursor_width: (!frame.is_final).then_some(cursor_width),
        };
        self.terminal.draw(|f| view.render(f, f.area()))?;
        Ok(())
    }

    /// Leave the answered line in the scrollback and park the cursor on the
    /// (empty) status line so later output starts there.
    fn done(&mut self) -> std::io::Result<()> {
        let area = self.terminal.get_frame().area();
        self.terminal
            .set_cursor_position(Position::new(0, area.y.saturating_add(1)))?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Wipe both lines so nothing of an abandoned prompt stays on screen.
    fn cancel(&mut self) -> std::io::Result<()> {
        self.terminal.clear()?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}
