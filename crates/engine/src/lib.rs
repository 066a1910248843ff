// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Flopsight equity enumeration engine.
//!
//! Given two hole cards and whatever community cards are known, the engine
//! exactly enumerates the remaining board completions to produce the
//! probability of ending on each hand category, groups the best and worst
//! next cards by rank composition, and reports the current best hand.
//!
//! Requests are served one at a time by a dedicated task, see
//! [worker::EngineHandle]; the heavy enumerations never run on the caller.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod chart;
pub mod equity;
pub mod request;
pub mod worker;
pub use equity::{Engine, EngineConfig};

mod error;
pub use error::EngineError;

mod groups;
