//! # LineEditor
//!
//! Single-line text buffer with a cursor. This is the source of truth for
//! the value being typed; the prompt re-reads it after every key.
//!
//! The cursor is a byte offset that always sits on a char boundary.
//! Submitting does not clear the buffer, so a rejected line stays editable.

use unicode_width::UnicodeWidthStr;

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// High-level events emitted by the LineEditor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditEvent {
    /// Buffer or cursor changed (or the screen needs a repaint)
    Changed,
    /// Enter pressed with this line
    Submit(String),
    /// Ctrl+C, or Ctrl+D on an empty line
    Interrupt,
}

#[derive(Debug, Default)]
pub struct LineEditor {
    buffer: String,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
}

impl LineEditor {
    /// Start with `initial` in the buffer and the cursor at its end.
    pub fn new(initial: &str) -> Self {
        let buffer = single_line(initial);
        let cursor = buffer.len();
        Self { buffer, cursor }
    }

    pub fn line(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display width of the text left of the cursor.
    pub fn cursor_width(&self) -> u16 {
        u16::try_from(self.buffer[..self.cursor].width()).unwrap_or(u16::MAX)
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }
}

impl EventHandler for LineEditor {
    type Event = EditEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(EditEvent::Changed)
            }
            TuiEvent::Paste(text) => {
                let text = single_line(text);
                if text.is_empty() {
                    return None;
                }
                self.insert_str(&text);
                Some(EditEvent::Changed)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(EditEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(EditEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                EditEvent::Changed
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                EditEvent::Changed
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                EditEvent::Changed
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                EditEvent::Changed
            }),
            TuiEvent::DeleteWordBack => (self.cursor > 0).then(|| {
                let start = prev_word_boundary(&self.buffer, self.cursor);
                self.buffer.drain(start..self.cursor);
                self.cursor = start;
                EditEvent::Changed
            }),
            TuiEvent::ClearLine => (!self.buffer.is_empty()).then(|| {
                self.buffer.clear();
                self.cursor = 0;
                EditEvent::Changed
            }),
            TuiEvent::Submit => Some(EditEvent::Submit(self.buffer.clone())),
            TuiEvent::Interrupt => Some(EditEvent::Interrupt),
            TuiEvent::EndOfInput => self.buffer.is_empty().then_some(EditEvent::Interrupt),
            TuiEvent::Resize => Some(EditEvent::Changed),
        }
    }
}

fn single_line(text: &str) -> String {
    text.chars().filter(|c| *c != '\n' && *c != '\r').collect()
}

fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Readline `backward-kill-word` start: skip non-word chars, then word chars.
fn prev_word_boundary(text: &str, pos: usize) -> usize {
    let mut chars = text[..pos].char_indices().rev().peekable();

    while chars.peek().is_some_and(|&(_, c)| !is_word_char(c)) {
        chars.next();
    }

    let mut boundary = 0;
    while let Some(&(i, c)) = chars.peek() {
        if !is_word_char(c) {
            boundary = i + c.len_utf8();
            break;
        }
        boundary = i;
        chars.next();
    }
    boundary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> LineEditor {
        let mut editor = LineEditor::default();
        for c in text.chars() {
            editor.handle_event(&TuiEvent::InputChar(c));
        }
        editor
    }

    #[test]
    fn test_new_places_cursor_at_end() {
        let editor = LineEditor::new("anon");
        assert_eq!(editor.line(), "anon");
        assert_eq!(editor.cursor(), 4);
    }

    #[test]
    fn test_handle_input() {
        let mut editor = LineEditor::default();

        let res = editor.handle_event(&TuiEvent::InputChar('a'));
        assert_eq!(res, Some(EditEvent::Changed));
        assert_eq!(editor.line(), "a");

        editor.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(editor.line(), "ab");

        let res = editor.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(EditEvent::Changed));
        assert_eq!(editor.line(), "a");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut editor = LineEditor::default();
        assert_eq!(editor.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut editor = typed("ac");
        editor.handle_event(&TuiEvent::CursorLeft);
        editor.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(editor.line(), "abc");
        assert_eq!(editor.cursor(), 2);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut editor = typed("café");
        editor.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(editor.cursor(), 3);
        editor.handle_event(&TuiEvent::Delete);
        assert_eq!(editor.line(), "caf");
        editor.handle_event(&TuiEvent::Backspace);
        assert_eq!(editor.line(), "ca");
    }

    #[test]
    fn test_home_end() {
        let mut editor = typed("hello");
        assert_eq!(editor.handle_event(&TuiEvent::CursorHome), Some(EditEvent::Changed));
        assert_eq!(editor.cursor(), 0);
        assert_eq!(editor.handle_event(&TuiEvent::CursorHome), None);
        editor.handle_event(&TuiEvent::CursorEnd);
        assert_eq!(editor.cursor(), 5);
    }

    #[test]
    fn test_delete_word_back() {
        let mut editor = typed("hello big world");
        editor.handle_event(&TuiEvent::DeleteWordBack);
        assert_eq!(editor.line(), "hello big ");
        editor.handle_event(&TuiEvent::DeleteWordBack);
        assert_eq!(editor.line(), "hello ");
    }

    #[test]
    fn test_clear_line() {
        let mut editor = typed("hello");
        editor.handle_event(&TuiEvent::ClearLine);
        assert_eq!(editor.line(), "");
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn test_submit_keeps_buffer() {
        let mut editor = typed("hello");
        match editor.handle_event(&TuiEvent::Submit) {
            Some(EditEvent::Submit(text)) => assert_eq!(text, "hello"),
            other => panic!("Expected Submit event, got {other:?}"),
        }
        assert_eq!(editor.line(), "hello", "Buffer should survive a submit");
    }

    #[test]
    fn test_paste_drops_newlines() {
        let mut editor = LineEditor::default();
        editor.handle_event(&TuiEvent::Paste("one\ntwo\r\n".to_string()));
        assert_eq!(editor.line(), "onetwo");
        assert_eq!(editor.cursor(), 6);
    }

    #[test]
    fn test_end_of_input_only_interrupts_empty_line() {
        let mut editor = typed("x");
        assert_eq!(editor.handle_event(&TuiEvent::EndOfInput), None);
        editor.handle_event(&TuiEvent::Backspace);
        assert_eq!(editor.handle_event(&TuiEvent::EndOfInput), Some(EditEvent::Interrupt));
    }

    #[test]
    fn test_cursor_width_counts_columns() {
        let mut editor = typed("a漢b");
        assert_eq!(editor.cursor_width(), 4);
        editor.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(editor.cursor_width(), 3);
    }

    #[test]
    fn test_prev_word_boundary_punctuation() {
        assert_eq!(prev_word_boundary("foo.bar", 7), 4);
        assert_eq!(prev_word_boundary("hello", 0), 0);
    }
}
