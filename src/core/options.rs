//! # Prompt Options
//!
//! What the caller configures for a single question. `PromptOptions` is the
//! loose, builder-style input; `Question` is the checked, immutable form that
//! the reducer and the renderer work from.
//!
//! ```text
//! PromptOptions ──check()──▶ Question
//!   max_length: Option        max_length: usize (> 0)
//! ```
//!
//! The only fatal error a prompt can produce is a missing `max_length`, and
//! it surfaces here, before anything is drawn.

use std::fmt;
use std::sync::Arc;

use crate::core::counter::char_count;
use crate::core::validate::{Answers, Validator};

/// Turns raw typed text into the counted and answered value.
pub type Filter = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Controls only how the value is displayed; never what is counted or returned.
pub type Transformer = Arc<dyn Fn(&str, &Answers, TransformContext) -> String + Send + Sync>;

/// Extra information handed to a [`Transformer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformContext {
    /// True once the prompt has been answered.
    pub is_final: bool,
}

/// Errors a prompt can end with.
#[derive(Debug)]
pub enum PromptError {
    /// `max_length` was not provided (or was zero). Fatal, raised at construction.
    MissingMaxLength,
    /// The terminal adapter failed to read input or paint a frame.
    Io(std::io::Error),
    /// The user aborted the prompt (Ctrl+C, end of input).
    Interrupted,
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptError::MissingMaxLength => write!(f, "You must provide a `maxLength` parameter"),
            PromptError::Io(e) => write!(f, "terminal I/O error: {e}"),
            PromptError::Interrupted => write!(f, "prompt interrupted"),
        }
    }
}

impl std::error::Error for PromptError {}

impl From<std::io::Error> for PromptError {
    fn from(e: std::io::Error) -> Self {
        PromptError::Io(e)
    }
}

/// Builder for a length-bounded text question.
///
/// ```rust,ignore
/// let question = PromptOptions::new("Enter your name")
///     .max_length(20)
///     .filter(|s| s.trim().to_string())
///     .check()?;
/// ```
#[derive(Clone, Default)]
pub struct PromptOptions {
    pub name: String,
    pub message: String,
    pub max_length: Option<usize>,
    pub default: Option<String>,
    pub validate: Option<Arc<dyn Validator>>,
    pub filter: Option<Filter>,
    pub transformer: Option<Transformer>,
}

impl PromptOptions {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    /// Key under which the answer is stored in [`Answers`].
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Text the line is pre-filled with.
    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn validate(mut self, validator: Arc<dyn Validator>) -> Self {
        self.validate = Some(validator);
        self
    }

    pub fn filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.filter = Some(Arc::new(filter));
        self
    }

    pub fn transformer<F>(mut self, transformer: F) -> Self
    where
        F: Fn(&str, &Answers, TransformContext) -> String + Send + Sync + 'static,
    {
        self.transformer = Some(Arc::new(transformer));
        self
    }

    /// Validate the options and freeze them into a [`Question`].
    pub fn check(self) -> Result<Question, PromptError> {
        let max_length = match self.max_length {
            Some(n) if n > 0 => n,
            _ => return Err(PromptError::MissingMaxLength),
        };
        Ok(Question {
            name: self.name,
            message: self.message,
            max_length,
            default: self.default,
            validate: self.validate,
            filter: self.filter,
            transformer: self.transformer,
        })
    }
}

impl fmt::Debug for PromptOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptOptions")
            .field("name", &self.name)
            .field("message", &self.message)
            .field("max_length", &self.max_length)
            .field("default", &self.default)
            .field("validate", &self.validate.is_some())
            .field("filter", &self.filter.is_some())
            .field("transformer", &self.transformer.is_some())
            .finish()
    }
}

/// Checked, immutable prompt configuration.
#[derive(Clone)]
pub struct Question {
    name: String,
    message: String,
    max_length: usize,
    default: Option<String>,
    validate: Option<Arc<dyn Validator>>,
    filter: Option<Filter>,
    transformer: Option<Transformer>,
}

impl Question {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn validator(&self) -> Option<&Arc<dyn Validator>> {
        self.validate.as_ref()
    }

    /// Apply the filter, or return the text unchanged.
    pub fn filtered(&self, value: &str) -> String {
        match &self.filter {
            Some(filter) => filter(value),
            None => value.to_string(),
        }
    }

    /// Number of characters counted against `max_length`.
    pub fn count(&self, value: &str) -> usize {
        match &self.filter {
            Some(filter) => char_count(&filter(value)),
            None => char_count(value),
        }
    }

    /// The transformed display value, or `None` when no transformer is set.
    pub fn transformed(&self, value: &str, answers: &Answers, is_final: bool) -> Option<String> {
        self.transformer
            .as_ref()
            .map(|transformer| transformer(value, answers, TransformContext { is_final }))
    }
}

impl fmt::Debug for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Question")
            .field("name", &self.name)
            .field("message", &self.message)
            .field("max_length", &self.max_length)
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}
