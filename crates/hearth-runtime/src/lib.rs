//! # hearth-runtime
//!
//! The Hearth agent and everything it drives.
//!
//! ## Architecture
//!
//! ```text
//!        user text
//!            │
//!            ▼
//!     ┌──────────────┐
//!     │    Agent     │  1. Normalize (trim, lower-case)
//!     │              │  2. Classify  ← ordered intent table
//!     │              │  3. Act       ← tool call or memory read/write
//!     │              │  4. Respond   ← { text, meta? }
//!     └──────┬───────┘
//!            │
//!     ┌──────┴──────┐
//!     ▼             ▼
//! ┌────────┐   ┌─────────┐
//! │ Tools  │   │ Memory  │
//! │ (mock) │   │  Store  │
//! └────────┘   └─────────┘
//! ```
//!
//! The [`evaluation`] module replays scripted scenarios through the same agent.

pub mod agent;
pub mod evaluation;
pub mod intent;
pub mod tools;

pub use agent::Agent;
pub use evaluation::{EvalOutcome, Evaluator, Exchange, Scenario, ScenarioResult, ScenarioTurn};
pub use intent::Intent;
pub use tools::BuiltinTools;
