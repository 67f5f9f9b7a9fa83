//! # Core Prompt Logic
//!
//! Everything the prompt decides lives here. It knows nothing about any
//! specific terminal technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Question (options)   │
//!                    │  • PromptState          │
//!                    │  • Action / update()    │
//!                    │  • render() → frame     │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │  prompt.rs │      │    TUI     │      │   Tests    │
//!     │ (run loop) │      │  Adapter   │      │  (fakes)   │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`options`]: `PromptOptions` builder and the checked `Question`
//! - [`counter`]: character counting and color thresholds
//! - [`validate`]: the `Validator` hook and the max-length check
//! - [`state`]: `PromptState`, the value being edited and the prompt status
//! - [`action`]: `Action` / `Effect` and the `update()` reducer
//! - [`render`]: pure `render()` producing a two-line `PromptFrame`
//! - [`config`]: config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod counter;
pub mod options;
pub mod render;
pub mod state;
pub mod validate;
