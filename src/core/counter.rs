//! Character counter shown under the prompt line.
//!
//! Colors follow three bands:
//!
//! ```text
//! 0 ........ t-1 | t ........ max | max+1 ........
//!     green      |     yellow     |      red
//! ```
//!
//! where `t` is the first integer at or above 80% of `max`.

use ratatui::style::{Color, Style};
use ratatui::text::Span;

/// Counting unit: Unicode scalar values, not display columns.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// First count shown in yellow, i.e. `ceil(max * 0.8)` in integer arithmetic.
pub fn yellow_threshold(max_length: usize) -> usize {
    max_length - max_length / 5
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterColor {
    Green,
    Yellow,
    Red,
}

impl CounterColor {
    pub fn for_count(count: usize, max_length: usize) -> Self {
        if count > max_length {
            CounterColor::Red
        } else if count >= yellow_threshold(max_length) {
            CounterColor::Yellow
        } else {
            CounterColor::Green
        }
    }

    pub fn color(self) -> Color {
        match self {
            CounterColor::Green => Color::Green,
            CounterColor::Yellow => Color::Yellow,
            CounterColor::Red => Color::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    pub count: usize,
    pub max_length: usize,
}

impl Counter {
    pub fn new(count: usize, max_length: usize) -> Self {
        Self { count, max_length }
    }

    pub fn color(&self) -> CounterColor {
        CounterColor::for_count(self.count, self.max_length)
    }

    /// `"(<n>/<max> characters)"`
    pub fn label(&self) -> String {
        format!("({}/{} characters)", self.count, self.max_length)
    }

    pub fn to_span(&self) -> Span<'static> {
        Span::styled(self.label(), Style::default().fg(self.color().color()))
    }
}
