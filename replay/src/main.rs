//! Headless replay of a recorded fight.
//!
//! Usage:
//!   horsefight-replay [transcript.json] [--expect <state-hash-hex>]
//!
//! Reads the transcript from the file argument, or stdin when none is given.
//! Logs go to stderr; the JSON summary goes to stdout.

use std::io::Read;

use anyhow::{bail, Context, Result};
use horsefight_core::{run_transcript, FighterId, ReplaySummary, Status, Transcript};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// JSON-serializable summary with hex-encoded hashes.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSummary {
    frames: usize,
    status: Status,
    winner: Option<FighterId>,
    player_health: i32,
    cpu_health: i32,
    elapsed: f64,
    transcript_hash: String,
    state_hash: String,
}

impl From<&ReplaySummary> for JsSummary {
    fn from(s: &ReplaySummary) -> Self {
        JsSummary {
            frames: s.frames,
            status: s.status,
            winner: s.winner,
            player_health: s.health[0],
            cpu_health: s.health[1],
            elapsed: s.elapsed,
            transcript_hash: hex::encode(s.transcript_hash),
            state_hash: hex::encode(s.state_hash),
        }
    }
}

struct Args {
    path: Option<String>,
    expect: Option<String>,
}

fn parse_args() -> Result<Args> {
    let mut path = None;
    let mut expect = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--expect" {
            let hash = args.next().context("--expect needs a state hash")?;
            expect = Some(hash.to_ascii_lowercase());
        } else if arg.starts_with("--") {
            bail!("unknown flag: {arg}");
        } else if path.is_none() {
            path = Some(arg);
        } else {
            bail!("unexpected argument: {arg}");
        }
    }
    Ok(Args { path, expect })
}

fn load_transcript(path: Option<&str>) -> Result<Transcript> {
    let json_str = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read transcript file {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read transcript from stdin")?;
            buf
        }
    };
    serde_json::from_str(&json_str).context("failed to parse transcript JSON")
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("horsefight=info".parse()?))
        .init();

    let args = parse_args()?;

    info!(source = args.path.as_deref().unwrap_or("stdin"), "loading transcript");
    let transcript = load_transcript(args.path.as_deref())?;
    info!(
        frames = transcript.inputs.len(),
        seed = transcript.config.seed,
        dt = transcript.dt,
        "transcript loaded"
    );

    let summary = run_transcript(&transcript).context("transcript rejected")?;
    let js = JsSummary::from(&summary);

    match summary.status {
        Status::GameOver => info!(
            winner = ?summary.winner,
            frames = summary.frames,
            elapsed = summary.elapsed,
            "match decided"
        ),
        _ => warn!(
            frames = summary.frames,
            "transcript ended before a knockout"
        ),
    }

    println!("{}", serde_json::to_string_pretty(&js)?);

    if let Some(expected) = args.expect {
        if expected != js.state_hash {
            bail!(
                "final state hash mismatch: expected {expected}, got {}",
                js.state_hash
            );
        }
        info!("final state hash verified");
    }

    Ok(())
}
