//! # Frame Rendering
//!
//! `render()` is a pure function of the question, the state, and the answers
//! so far. The same inputs always yield an equal `PromptFrame`.
//!
//! ```text
//! ? Enter your name Testing        ← prompt line
//! (7/20 characters)                ← status line: counter, ">> error", or empty
//! ```
//!
//! Frames are built as ratatui `Line`s so the screen can paint them directly
//! and tests can inspect span styles instead of parsing escape codes.

use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::core::counter::Counter;
use crate::core::options::Question;
use crate::core::state::PromptState;
use crate::core::validate::Answers;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptFrame {
    pub prompt_line: Line<'static>,
    pub status_line: Line<'static>,
    /// Column the line editor's cursor offset is counted from. A transformer
    /// may decorate the value, so this is the end of the displayed value minus
    /// the width of the raw line.
    pub input_column: u16,
    /// Set on the answered frame; the screen hides the cursor and stops there.
    pub is_final: bool,
}

impl PromptFrame {
    pub fn prompt_text(&self) -> String {
        line_text(&self.prompt_line)
    }

    pub fn status_text(&self) -> String {
        line_text(&self.status_line)
    }

    /// The counter span, when the status line is showing one.
    pub fn counter_style(&self) -> Option<Style> {
        match self.status_line.spans.as_slice() {
            [span] if span.content.starts_with('(') => Some(span.style),
            _ => None,
        }
    }
}

fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

pub fn render(question: &Question, state: &PromptState, answers: &Answers) -> PromptFrame {
    let is_final = state.is_answered();

    let shown = match (&state.answer, is_final) {
        (Some(answer), true) => answer.as_str(),
        _ => state.value.as_str(),
    };
    let value_span = match question.transformed(shown, answers, is_final) {
        Some(display) => Span::raw(display),
        None if is_final => shown.to_string().cyan(),
        None => Span::raw(shown.to_string()),
    };
    let display_width = value_span.content.width();

    let prompt_line = Line::from(vec![
        "?".green(),
        Span::raw(" "),
        question.message().to_string().bold(),
        Span::raw(" "),
        value_span,
    ]);

    let status_line = if is_final {
        Line::default()
    } else if let Some(error) = &state.error {
        Line::from(vec![">>".red(), Span::raw(" "), Span::raw(error.clone())])
    } else {
        let count = question.count(&state.value);
        Line::from(Counter::new(count, question.max_length()).to_span())
    };

    let prefix_width = 2 + question.message().width() + 1;
    let input_column = (prefix_width + display_width)
        .saturating_sub(state.value.width())
        .max(prefix_width);

    PromptFrame {
        prompt_line,
        status_line,
        input_column: u16::try_from(input_column).unwrap_or(u16::MAX),
        is_final,
    }
}
