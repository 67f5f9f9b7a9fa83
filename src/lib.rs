//! A single-line text prompt with a maximum length and a live,
//! color-coded character counter.

pub mod core;
pub mod prompt;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use crate::core::options::{PromptError, PromptOptions, Question, TransformContext};
pub use crate::core::validate::{
    Answers, VALIDATION_ERROR_MESSAGE, Validator, ValidatorError, Validity, sync_validator,
};
pub use crate::prompt::{LineEvent, LineSource, MaxLengthPrompt, Screen};
