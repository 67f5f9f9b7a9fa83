//! Terminal-backed [`LineSource`]: crossterm's async event stream feeding a
//! [`LineEditor`].

use async_trait::async_trait;
use crossterm::event::EventStream;
use futures::StreamExt;
use log::{debug, info};

use crate::prompt::{LineEvent, LineSource};
use crate::tui::component::EventHandler;
use crate::tui::event::map_event;
use crate::tui::line_editor::{EditEvent, LineEditor};

pub struct TerminalInput {
    events: EventStream,
    editor: LineEditor,
    closed: bool,
}

impl TerminalInput {
    /// `initial` pre-fills the line (the question's default).
    pub fn new(initial: &str) -> Self {
        Self {
            events: EventStream::new(),
            editor: LineEditor::new(initial),
            closed: false,
        }
    }
}

#[async_trait]
impl LineSource for TerminalInput {
    async fn next_event(&mut self) -> std::io::Result<LineEvent> {
        if self.closed {
            return Ok(LineEvent::Interrupt);
        }
        loop {
            let Some(event) = self.events.next().await else {
                info!("Terminal event stream ended");
                return Ok(LineEvent::Interrupt);
            };
            let Some(tui_event) = map_event(event?) else {
                continue;
            };
            match self.editor.handle_event(&tui_event) {
                Some(EditEvent::Changed) => return Ok(LineEvent::Keypress),
                Some(EditEvent::Submit(line)) => {
                    debug!("Line submitted ({} bytes)", line.len());
                    return Ok(LineEvent::Line(line));
                }
                Some(EditEvent::Interrupt) => return Ok(LineEvent::Interrupt),
                None => {}
            }
        }
    }

    fn line(&self) -> &str {
        self.editor.line()
    }

    fn cursor_width(&self) -> u16 {
        self.editor.cursor_width()
    }

    fn close(&mut self) {
        self.closed = true;
    }
}
