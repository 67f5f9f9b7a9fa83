//! # Validation
//!
//! Submitted text passes through two checks, in order:
//!
//! 1. The built-in max-length check. Failing it short-circuits: the user
//!    validator is never called.
//! 2. The optional user [`Validator`].
//!
//! User validators are always awaited, even when they are written as plain
//! closures (see [`sync_validator`]). The run loop never distinguishes the two.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::core::counter::char_count;

/// Shown when the submitted (filtered) value is longer than `max_length`.
pub const VALIDATION_ERROR_MESSAGE: &str = "Input contains too many characters!";

/// Shown when a validator rejects without giving a reason.
pub const DEFAULT_VALIDATOR_MESSAGE: &str = "Please enter a valid value";

/// Shown by [`RequiredValidator`].
pub const REQUIRED_MESSAGE: &str = "A value is required";

/// Answers collected by earlier questions, keyed by question name.
pub type Answers = serde_json::Map<String, serde_json::Value>;

pub type ValidatorError = Box<dyn std::error::Error + Send + Sync>;

/// Verdict of a user validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    Valid,
    /// Rejected, with a message for the user.
    Invalid(String),
    /// Rejected without a message; [`DEFAULT_VALIDATOR_MESSAGE`] is shown.
    Rejected,
}

impl From<bool> for Validity {
    fn from(ok: bool) -> Self {
        if ok { Validity::Valid } else { Validity::Rejected }
    }
}

impl From<Result<(), String>> for Validity {
    fn from(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Validity::Valid,
            Err(message) => Validity::Invalid(message),
        }
    }
}

#[async_trait]
pub trait Validator: Send + Sync {
    /// Called with `(candidate, answers, candidate)`: the filtered value is
    /// both the value under test and the final input.
    async fn validate(
        &self,
        value: &str,
        answers: &Answers,
        final_input: &str,
    ) -> Result<Validity, ValidatorError>;
}

/// Adapter running a synchronous closure behind the async [`Validator`] trait.
pub struct SyncValidator<F>(F);

#[async_trait]
impl<F> Validator for SyncValidator<F>
where
    F: Fn(&str, &Answers, &str) -> Result<Validity, ValidatorError> + Send + Sync,
{
    async fn validate(
        &self,
        value: &str,
        answers: &Answers,
        final_input: &str,
    ) -> Result<Validity, ValidatorError> {
        (self.0)(value, answers, final_input)
    }
}

pub fn sync_validator<F>(f: F) -> Arc<dyn Validator>
where
    F: Fn(&str, &Answers, &str) -> Result<Validity, ValidatorError> + Send + Sync + 'static,
{
    Arc::new(SyncValidator(f))
}

/// Rejects blank (whitespace-only) answers.
pub struct RequiredValidator;

#[async_trait]
impl Validator for RequiredValidator {
    async fn validate(
        &self,
        value: &str,
        _answers: &Answers,
        _final_input: &str,
    ) -> Result<Validity, ValidatorError> {
        if value.trim().is_empty() {
            Ok(Validity::Invalid(REQUIRED_MESSAGE.to_string()))
        } else {
            Ok(Validity::Valid)
        }
    }
}

/// The built-in check. Counts characters of the already-filtered candidate.
pub fn check_length(candidate: &str, max_length: usize) -> Result<(), String> {
    let count = char_count(candidate);
    if count > max_length {
        debug!("Length check failed: {count} > {max_length}");
        Err(VALIDATION_ERROR_MESSAGE.to_string())
    } else {
        Ok(())
    }
}

/// Runs a user validator and flattens every failure shape into an error message.
pub async fn run_validator(
    validator: &dyn Validator,
    candidate: &str,
    answers: &Answers,
) -> Result<(), String> {
    match validator.validate(candidate, answers, candidate).await {
        Ok(Validity::Valid) => Ok(()),
        Ok(Validity::Invalid(message)) => Err(message),
        Ok(Validity::Rejected) => Err(DEFAULT_VALIDATOR_MESSAGE.to_string()),
        Err(e) => {
            debug!("Validator raised: {e}");
            Err(e.to_string())
        }
    }
}
