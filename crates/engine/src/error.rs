// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Engine error types.
use flopsight_cards::ParseCardError;
use flopsight_eval::EvalError;

/// A recoverable analysis failure.
///
/// Every variant turns into an error reply for the request that caused it;
/// none of them is fatal to the engine task or touches the loaded chart.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// A malformed card token in the request.
    #[error(transparent)]
    Parse(#[from] ParseCardError),
    /// A malformed request shape, wrong card counts or partial streets.
    #[error("invalid request: {0}")]
    Validation(String),
    /// Fewer than 5 cards given to best hand selection.
    #[error(transparent)]
    InsufficientCards(EvalError),
    /// A hand classification failure.
    #[error(transparent)]
    Evaluation(EvalError),
    /// The starting hand chart could not be loaded.
    #[error("starting hand chart unavailable: {0}")]
    ChartLoad(String),
}

impl From<EvalError> for EngineError {
    fn from(e: EvalError) -> Self {
        match e {
            EvalError::TooFewCards(_) => EngineError::InsufficientCards(e),
            EvalError::NotFiveCards(_) => EngineError::Evaluation(e),
        }
    }
}
