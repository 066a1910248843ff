// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equity engine over JSON lines on stdin and stdout.
use anyhow::Result;
use clap::Parser;
use log::error;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use flopsight_engine::{
    EngineConfig,
    request::{AnalysisReply, AnalysisRequest, ErrorReply},
    worker::EngineHandle,
};
use flopsight_eval::TieBreak;

#[derive(Debug, Parser)]
struct Cli {
    /// Path to the starting hand chart file.
    #[clap(long)]
    chart: Option<PathBuf>,
    /// Break ties within a category by kicker ranks.
    #[clap(long)]
    kickers: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let config = EngineConfig {
        chart_path: cli.chart,
        tie_break: if cli.kickers {
            TieBreak::Kickers
        } else {
            TieBreak::Category
        },
    };

    let handle = EngineHandle::spawn(config);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let reply = match serde_json::from_str::<AnalysisRequest>(&line) {
            Ok(request) => handle.analyze(request).await?,
            Err(e) => {
                error!("Malformed request: {e}");
                AnalysisReply::Error(ErrorReply {
                    id: None,
                    error: format!("malformed request: {e}"),
                })
            }
        };

        let mut out = serde_json::to_vec(&reply)?;
        out.push(b'\n');
        stdout.write_all(&out).await?;
        stdout.flush().await?;
    }

    Ok(())
}
