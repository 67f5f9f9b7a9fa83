//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`). Every helper
//! builds a fresh fake; nothing here is shared between test cases.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::core::render::PromptFrame;
use crate::prompt::{LineEvent, LineSource, Screen};

#[derive(Debug)]
pub enum Key {
    Char(char),
    Backspace,
    Enter,
    Interrupt,
}

/// Test-side handle that queues keys for a [`FakeInput`].
pub struct KeySender(mpsc::UnboundedSender<Key>);

impl KeySender {
    pub fn type_str(&self, text: &str) {
        for c in text.chars() {
            self.send(Key::Char(c));
        }
    }

    pub fn backspace(&self) {
        self.send(Key::Backspace);
    }

    pub fn enter(&self) {
        self.send(Key::Enter);
    }

    pub fn interrupt(&self) {
        self.send(Key::Interrupt);
    }

    fn send(&self, key: Key) {
        self.0.send(key).expect("fake input dropped");
    }
}

/// A line source fed from a channel. Once the queue is empty it waits
/// forever, the way a terminal does when nobody types.
pub struct FakeInput {
    rx: mpsc::UnboundedReceiver<Key>,
    pub line: String,
    pub closed: bool,
}

pub fn fake_input(initial: &str) -> (KeySender, FakeInput) {
    let (tx, rx) = mpsc::unbounded_channel();
    let input = FakeInput {
        rx,
        line: initial.to_string(),
        closed: false,
    };
    (KeySender(tx), input)
}

#[async_trait]
impl LineSource for FakeInput {
    async fn next_event(&mut self) -> std::io::Result<LineEvent> {
        match self.rx.recv().await {
            Some(Key::Char(c)) => {
                self.line.push(c);
                Ok(LineEvent::Keypress)
            }
            Some(Key::Backspace) => {
                self.line.pop();
                Ok(LineEvent::Keypress)
            }
            Some(Key::Enter) => Ok(LineEvent::Line(self.line.clone())),
            Some(Key::Interrupt) => Ok(LineEvent::Interrupt),
            None => std::future::pending().await,
        }
    }

    fn line(&self) -> &str {
        &self.line
    }

    fn cursor_width(&self) -> u16 {
        u16::try_from(self.line.chars().count()).unwrap_or(u16::MAX)
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

/// Records every frame it is asked to paint.
#[derive(Default)]
pub struct RecordingScreen {
    pub frames: Vec<PromptFrame>,
    pub done_calls: usize,
    pub cancel_calls: usize,
}

impl Screen for RecordingScreen {
    fn render(&mut self, frame: &PromptFrame, _cursor_width: u16) -> std::io::Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn done(&mut self) -> std::io::Result<()> {
        self.done_calls += 1;
        Ok(())
    }

    fn cancel(&mut self) -> std::io::Result<()> {
        self.cancel_calls += 1;
        Ok(())
    }
}
