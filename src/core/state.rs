//! # Prompt State
//!
//! The mutable half of a prompt. Options live in `Question`; everything that
//! changes while the user types lives here.
//!
//! ```text
//! PromptState
//! ├── value: String          // raw line, re-read from the input on every key
//! ├── status: Status         // Active | Answered
//! ├── error: Option<String>  // message from the last failed submit
//! ├── answer: Option<String> // filtered answer, set once Answered
//! └── validating: bool       // a user validator is still running
//! ```
//!
//! State changes only happen through `update(state, question, action)`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Active,
    Answered,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PromptState {
    pub value: String,
    pub status: Status,
    pub error: Option<String>,
    pub answer: Option<String>,
    pub validating: bool,
}

impl PromptState {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            value: initial.into(),
            ..Default::default()
        }
    }

    pub fn is_answered(&self) -> bool {
        self.status == Status::Answered
    }
}
