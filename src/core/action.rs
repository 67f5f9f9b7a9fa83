//! # Actions
//!
//! Everything that can happen to a prompt becomes an `Action`.
//! User presses a key? That's `Action::Keypress(line)`.
//! User presses Enter? That's `Action::Submit(line)`.
//! A validator finishes? That's `Action::Validated { .. }`.
//!
//! `update()` applies an action to the state and returns the `Effect` the
//! run loop has to carry out. No I/O here.
//!
//! ```text
//!            Keypress / Submit (fail) / Validated (fail)
//!              ┌──────────┐
//!              ▼          │
//!          ┌────────┐     │        Submit (pass) / Validated (pass)
//!          │ Active │─────┘ ───────────────────────────────▶ ┌──────────┐
//!          └────────┘                                        │ Answered │
//!                                                            └──────────┘
//! ```

use log::debug;

use crate::core::options::Question;
use crate::core::state::{PromptState, Status};
use crate::core::validate::check_length;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A key was handled by the input; carries the input's current line.
    Keypress(String),
    /// A line was submitted.
    Submit(String),
    /// A user validator settled for `candidate`.
    Validated {
        candidate: String,
        outcome: Result<(), String>,
    },
}

/// What the run loop must do after an `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Paint the current frame.
    Render,
    /// Start the user validator for this candidate.
    Validate(String),
    /// The prompt is answered; finalize the screen and resolve with this value.
    Answer(String),
}

pub fn update(state: &mut PromptState, question: &Question, action: Action) -> Effect {
    if state.status == Status::Answered {
        debug!("Ignoring {action:?}: prompt already answered");
        return Effect::None;
    }

    match action {
        Action::Keypress(line) => {
            state.value = line;
            state.error = None;
            Effect::Render
        }
        Action::Submit(line) => {
            if state.validating {
                debug!("Ignoring submit while validation is in flight");
                return Effect::None;
            }
            state.value = line;
            let candidate = question.filtered(&state.value);
            if let Err(message) = check_length(&candidate, question.max_length()) {
                state.error = Some(message);
                return Effect::Render;
            }
            if question.validator().is_some() {
                state.validating = true;
                Effect::Validate(candidate)
            } else {
                answer(state, candidate)
            }
        }
        Action::Validated { candidate, outcome } => {
            state.validating = false;
            match outcome {
                Ok(()) => answer(state, candidate),
                Err(message) => {
                    debug!("Validation failed: {message}");
                    state.error = Some(message);
                    Effect::Render
                }
            }
        }
    }
}

fn answer(state: &mut PromptState, candidate: String) -> Effect {
    state.status = Status::Answered;
    state.error = None;
    state.answer = Some(candidate.clone());
    Effect::Answer(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::options::PromptOptions;
    use crate::core::validate::{VALIDATION_ERROR_MESSAGE, Validity, sync_validator};

    fn question(max_length: usize) -> Question {
        PromptOptions::new("Enter your name").max_length(max_length).check().unwrap()
    }

    fn validated_question(max_length: usize) -> Question {
        PromptOptions::new("Enter your name")
            .max_length(max_length)
            .validate(sync_validator(|_, _, _| Ok(Validity::Valid)))
            .check()
            .unwrap()
    }

    #[test]
    fn test_keypress_updates_value_and_renders() {
        let q = question(10);
        let mut state = PromptState::default();
        let effect = update(&mut state, &q, Action::Keypress("ab".to_string()));
        assert_eq!(effect, Effect::Render);
        assert_eq!(state.value, "ab");
        assert_eq!(state.status, Status::Active);
    }

    #[test]
    fn test_keypress_clears_error() {
        let q = question(10);
        let mut state = PromptState {
            error: Some("bad".to_string()),
            ..Default::default()
        };
        update(&mut state, &q, Action::Keypress("a".to_string()));
        assert!(state.error.is_none());
    }

    #[test]
    fn test_submit_within_limit_answers() {
        let q = question(10);
        let mut state = PromptState::default();
        let effect = update(&mut state, &q, Action::Submit("dddddddddd".to_string()));
        assert_eq!(effect, Effect::Answer("dddddddddd".to_string()));
        assert_eq!(state.status, Status::Answered);
        assert_eq!(state.answer.as_deref(), Some("dddddddddd"));
    }

    #[test]
    fn test_submit_empty_answers_empty_string() {
        let q = question(10);
        let mut state = PromptState::default();
        let effect = update(&mut state, &q, Action::Submit(String::new()));
        assert_eq!(effect, Effect::Answer(String::new()));
    }

    #[test]
    fn test_submit_over_limit_renders_error_and_stays_active() {
        let q = question(10);
        let mut state = PromptState::default();
        let effect = update(&mut state, &q, Action::Submit("d".repeat(11)));
        assert_eq!(effect, Effect::Render);
        assert_eq!(state.status, Status::Active);
        assert_eq!(state.error.as_deref(), Some(VALIDATION_ERROR_MESSAGE));
        assert_eq!(state.value, "d".repeat(11));
    }

    #[test]
    fn test_length_check_runs_on_filtered_value() {
        let q = PromptOptions::new("x")
            .max_length(4)
            .filter(|s| s.trim().to_string())
            .check()
            .unwrap();
        let mut state = PromptState::default();
        let effect = update(&mut state, &q, Action::Submit("  abcd  ".to_string()));
        assert_eq!(effect, Effect::Answer("abcd".to_string()));
        assert_eq!(state.value, "  abcd  ");
    }

    #[test]
    fn test_length_failure_skips_user_validator() {
        let q = validated_question(3);
        let mut state = PromptState::default();
        let effect = update(&mut state, &q, Action::Submit("abcd".to_string()));
        assert_eq!(effect, Effect::Render);
        assert!(!state.validating);
        assert_eq!(state.error.as_deref(), Some(VALIDATION_ERROR_MESSAGE));
    }

    #[test]
    fn test_submit_with_validator_requests_validation() {
        let q = validated_question(10);
        let mut state = PromptState::default();
        let effect = update(&mut state, &q, Action::Submit("ok".to_string()));
        assert_eq!(effect, Effect::Validate("ok".to_string()));
        assert!(state.validating);
        assert_eq!(state.status, Status::Active);
    }

    #[test]
    fn test_resubmit_while_validating_is_ignored() {
        let q = validated_question(10);
        let mut state = PromptState::default();
        update(&mut state, &q, Action::Submit("ok".to_string()));
        let effect = update(&mut state, &q, Action::Submit("other".to_string()));
        assert_eq!(effect, Effect::None);
        assert_eq!(state.value, "ok");
    }

    #[test]
    fn test_keypress_while_validating_still_renders() {
        let q = validated_question(10);
        let mut state = PromptState::default();
        update(&mut state, &q, Action::Submit("ok".to_string()));
        let effect = update(&mut state, &q, Action::Keypress("ok!".to_string()));
        assert_eq!(effect, Effect::Render);
        assert!(state.validating);
    }

    #[test]
    fn test_validated_pass_answers_with_candidate() {
        let q = validated_question(10);
        let mut state = PromptState::default();
        update(&mut state, &q, Action::Submit("ok".to_string()));
        let effect = update(
            &mut state,
            &q,
            Action::Validated {
                candidate: "ok".to_string(),
                outcome: Ok(()),
            },
        );
        assert_eq!(effect, Effect::Answer("ok".to_string()));
        assert!(state.is_answered());
    }

    #[test]
    fn test_validated_fail_renders_message() {
        let q = validated_question(10);
        let mut state = PromptState::default();
        update(&mut state, &q, Action::Submit("ok".to_string()));
        let effect = update(
            &mut state,
            &q,
            Action::Validated {
                candidate: "ok".to_string(),
                outcome: Err("Taken".to_string()),
            },
        );
        assert_eq!(effect, Effect::Render);
        assert!(!state.validating);
        assert_eq!(state.error.as_deref(), Some("Taken"));
        assert_eq!(state.status, Status::Active);
    }

    #[test]
    fn test_actions_after_answer_are_ignored() {
        let q = question(10);
        let mut state = PromptState::default();
        update(&mut state, &q, Action::Submit("done".to_string()));
        assert_eq!(update(&mut state, &q, Action::Keypress("x".to_string())), Effect::None);
        assert_eq!(update(&mut state, &q, Action::Submit("x".to_string())), Effect::None);
        assert_eq!(state.answer.as_deref(), Some("done"));
    }
}
