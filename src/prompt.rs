//! # MaxLengthPrompt
//!
//! Drives one question from first paint to answer. The prompt owns its
//! `Question`, `PromptState` and the answers collected so far; everything it
//! talks to is behind a trait:
//!
//! - [`LineSource`]: the line editor. It owns the text being edited and tells
//!   the prompt when a key was handled or a line was submitted.
//! - [`Screen`]: paints frames and finalizes the output once answered.
//!
//! ```text
//! LineSource ──LineEvent──▶ Action ──update()──▶ Effect ──▶ Screen / Validator
//!                              ▲                               │
//!                              └──── Action::Validated ────────┘
//! ```
//!
//! User validators run as a pending future next to the input. Keys typed
//! while a validator is running are still painted; a second Enter is ignored
//! until the first validation settles.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use crate::core::action::{Action, Effect, update};
use crate::core::options::{PromptError, PromptOptions, Question};
use crate::core::render::{PromptFrame, render};
use crate::core::state::PromptState;
use crate::core::validate::{Answers, Validator, run_validator};

/// Events delivered by a [`LineSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    /// A key changed (or may have changed) the line; re-read [`LineSource::line`].
    Keypress,
    /// Enter was pressed with this line.
    Line(String),
    /// The user gave up (Ctrl+C, end of input).
    Interrupt,
}

#[async_trait]
pub trait LineSource: Send {
    async fn next_event(&mut self) -> std::io::Result<LineEvent>;

    /// The text currently being edited.
    fn line(&self) -> &str;

    /// Display width of the text left of the cursor.
    fn cursor_width(&self) -> u16;

    /// Stop listening. Called once, when the prompt is answered or interrupted.
    fn close(&mut self);
}

pub trait Screen {
    fn render(&mut self, frame: &PromptFrame, cursor_width: u16) -> std::io::Result<()>;

    /// Called after the answered frame has been rendered.
    fn done(&mut self) -> std::io::Result<()>;

    /// Called instead of [`Screen::done`] when the prompt is interrupted.
    fn cancel(&mut self) -> std::io::Result<()>;
}

type PendingValidation = Pin<Box<dyn Future<Output = (String, Result<(), String>)> + Send>>;

#[derive(Debug)]
pub struct MaxLengthPrompt {
    question: Question,
    state: PromptState,
    answers: Answers,
}

impl MaxLengthPrompt {
    /// Fails with [`PromptError::MissingMaxLength`] before anything is drawn.
    pub fn new(options: PromptOptions) -> Result<Self, PromptError> {
        let question = options.check()?;
        let state = PromptState::new(question.default_value().unwrap_or_default());
        debug!("Prompt created: {:?}", question);
        Ok(Self {
            question,
            state,
            answers: Answers::new(),
        })
    }

    /// Answers from earlier questions, handed to the validator and transformer.
    pub fn with_answers(mut self, answers: Answers) -> Self {
        self.answers = answers;
        self
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn state(&self) -> &PromptState {
        &self.state
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn render(&self) -> PromptFrame {
        render(&self.question, &self.state, &self.answers)
    }

    /// Runs until a submitted line passes validation, and resolves with the
    /// filtered answer. Validation failures never end the prompt; only I/O
    /// errors and interrupts do.
    pub async fn run<I, S>(&mut self, input: &mut I, screen: &mut S) -> Result<String, PromptError>
    where
        I: LineSource + ?Sized,
        S: Screen + ?Sized,
    {
        info!("Prompt started (max_length={})", self.question.max_length());
        screen.render(&self.render(), input.cursor_width())?;

        let mut pending: Option<PendingValidation> = None;

        loop {
            let action = tokio::select! {
                biased;
                (candidate, outcome) = settle(&mut pending) => {
                    Action::Validated { candidate, outcome }
                }
                event = input.next_event() => match event? {
                    LineEvent::Keypress => Action::Keypress(input.line().to_string()),
                    LineEvent::Line(line) => Action::Submit(line),
                    LineEvent::Interrupt => {
                        info!("Prompt interrupted");
                        input.close();
                        screen.cancel()?;
                        return Err(PromptError::Interrupted);
                    }
                },
            };

            match update(&mut self.state, &self.question, action) {
                Effect::None => {}
                Effect::Render => screen.render(&self.render(), input.cursor_width())?,
                Effect::Validate(candidate) => {
                    pending = Some(self.start_validation(candidate));
                }
                Effect::Answer(answer) => {
                    input.close();
                    screen.render(&self.render(), input.cursor_width())?;
                    screen.done()?;
                    info!("Prompt answered ({} characters)", answer.chars().count());
                    return Ok(answer);
                }
            }
        }
    }

    /// Runs the prompt and records the answer under the question's name.
    pub async fn run_into<I, S>(
        &mut self,
        input: &mut I,
        screen: &mut S,
        answers: &mut Answers,
    ) -> Result<String, PromptError>
    where
        I: LineSource + ?Sized,
        S: Screen + ?Sized,
    {
        let answer = self.run(input, screen).await?;
        answers.insert(
            self.question.name().to_string(),
            serde_json::Value::String(answer.clone()),
        );
        Ok(answer)
    }

    fn start_validation(&self, candidate: String) -> PendingValidation {
        let validator: Option<Arc<dyn Validator>> = self.question.validator().cloned();
        let answers = self.answers.clone();
        Box::pin(async move {
            let outcome = match validator {
                Some(validator) => run_validator(validator.as_ref(), &candidate, &answers).await,
                None => Ok(()),
            };
            (candidate, outcome)
        })
    }
}

/// Resolves when the in-flight validation settles; never, if there is none.
/// Dropping this future leaves the validation in place.
async fn settle(pending: &mut Option<PendingValidation>) -> (String, Result<(), String>) {
    match pending {
        Some(validation) => {
            let settled = validation.await;
            *pending = None;
            settled
        }
        None => std::future::pending().await,
    }
}
