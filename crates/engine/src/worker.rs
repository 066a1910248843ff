// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Engine task and its handle.
//!
//! A single task owns the [`Engine`] and serves requests in arrival order,
//! enumeration runs on the blocking pool so the runtime stays responsive.
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

use crate::{
    equity::{Engine, EngineConfig},
    request::{AnalysisReply, AnalysisRequest},
};

const CHANNEL_CAPACITY: usize = 128;

/// A cloneable handle to the engine task.
#[derive(Debug, Clone)]
pub struct EngineHandle {
    commands_tx: mpsc::Sender<EngineCommand>,
}

#[derive(Debug)]
enum EngineCommand {
    Analyze {
        request: AnalysisRequest,
        resp_tx: oneshot::Sender<AnalysisReply>,
    },
}

impl EngineHandle {
    /// Builds the engine and spawns its task.
    ///
    /// The chart load happens here, before any request is accepted.
    pub fn spawn(config: EngineConfig) -> EngineHandle {
        let engine = Arc::new(Engine::new(config));
        let (commands_tx, commands_rx) = mpsc::channel(CHANNEL_CAPACITY);

        tokio::spawn(run_engine(engine, commands_rx));

        EngineHandle { commands_tx }
    }

    /// Sends a request to the engine task and waits for its reply.
    pub async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisReply> {
        let (resp_tx, resp_rx) = oneshot::channel();
        self.commands_tx
            .send(EngineCommand::Analyze { request, resp_tx })
            .await?;
        Ok(resp_rx.await?)
    }
}

/// Engine task loop, exits when the last handle is dropped.
async fn run_engine(engine: Arc<Engine>, mut commands_rx: mpsc::Receiver<EngineCommand>) {
    while let Some(cmd) = commands_rx.recv().await {
        match cmd {
            EngineCommand::Analyze { request, resp_tx } => {
                let engine = engine.clone();
                let reply = tokio::task::spawn_blocking(move || engine.dispatch(request)).await;

                match reply {
                    Ok(reply) => {
                        let _ = resp_tx.send(reply);
                    }
                    Err(e) => log::error!("Analysis task failed: {e}"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(hole: &[&str]) -> AnalysisRequest {
        AnalysisRequest {
            id: Some(42),
            hole_cards: hole.iter().map(|t| t.to_string()).collect(),
            flop_cards: Some(vec!["As".to_string(), "Kd".to_string(), "2c".to_string()]),
            turn_card: None,
            river_card: None,
        }
    }

    #[tokio::test]
    async fn serves_analysis_requests() {
        let handle = EngineHandle::spawn(EngineConfig::default());

        let reply = handle.analyze(request(&["Ah", "Ad"])).await.unwrap();
        match reply {
            AnalysisReply::Response(resp) => {
                assert_eq!(resp.id, Some(42));
                assert_eq!(resp.current_hand_name, "Three of a Kind");
            }
            AnalysisReply::Error(err) => panic!("unexpected error reply: {}", err.error),
        }
    }

    #[tokio::test]
    async fn invalid_requests_get_error_replies() {
        let handle = EngineHandle::spawn(EngineConfig::default());

        let reply = handle.analyze(request(&["Ah", "Ah"])).await.unwrap();
        match reply {
            AnalysisReply::Error(err) => {
                assert_eq!(err.id, Some(42));
                assert!(err.error.contains("duplicate card"));
            }
            AnalysisReply::Response(_) => panic!("expected an error reply"),
        }
    }

    #[tokio::test]
    async fn handle_is_cloneable() {
        let handle = EngineHandle::spawn(EngineConfig::default());
        let other = handle.clone();

        let reply = other.analyze(request(&["7h", "2d"])).await.unwrap();
        assert!(matches!(reply, AnalysisReply::Response(_)));
    }
}
