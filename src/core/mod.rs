//! # Core Application Logic
//!
//! This module contains Postboard's business logic.
//! It knows nothing about any specific UI technology or HTTP client.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Controllers (state)  │
//!                    │  • Action (intents)     │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │  runtime   │
//!     │  Adapter   │                          │ (effects → │
//!     │ (ratatui)  │                          │  actions)  │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct and the currently mounted screen
//! - [`action`]: The `Action`/`Effect` enums and `update()`
//! - [`listing`]: Post list controller
//! - [`detail`]: Single post controller
//! - [`errors`]: Error types and display formatting
//! - [`config`]: Settings resolution

pub mod action;
pub mod config;
pub mod detail;
pub mod errors;
pub mod listing;
pub mod state;
