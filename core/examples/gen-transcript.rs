//! Generates test transcript JSON files for the replay tool.
//!
//! Usage:
//!   cargo run -p horsefight-core --example gen-transcript -- [idle|rush|mixed] > transcript.json

use horsefight_core::*;

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "idle".to_string());

    let config = default_config();
    let frames = 60 * 60;

    let inputs: Vec<FightInput> = match mode.as_str() {
        "idle" => {
            // Player never moves; the CPU walks over and fights
            vec![NULL_INPUT; frames]
        }
        "rush" => {
            // Walk right and mash punch
            vec![
                FightInput {
                    right: true,
                    punch: true,
                    ..NULL_INPUT
                };
                frames
            ]
        }
        "mixed" => (0..frames)
            .map(|frame| FightInput {
                right: frame % 90 < 60,
                left: frame % 90 >= 80,
                jump: frame % 150 == 0,
                punch: frame % 6 == 0,
                kick: frame % 17 == 0,
                block: frame % 40 >= 34,
            })
            .collect(),
        _ => {
            eprintln!("Unknown mode: {}. Use 'idle', 'rush', or 'mixed'", mode);
            std::process::exit(1);
        }
    };

    let transcript = Transcript {
        config,
        dt: DEFAULT_FRAME_DT,
        inputs,
    };

    // Verify by running the sim
    let summary = match run_transcript(&transcript) {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("Transcript rejected: {}", err);
            std::process::exit(1);
        }
    };

    eprintln!("=== Sim result ({} mode) ===", mode);
    eprintln!("Frames: {}", summary.frames);
    eprintln!("Status: {:?}", summary.status);
    eprintln!("Winner: {:?}", summary.winner);
    eprintln!(
        "Health: player={}, cpu={}",
        summary.health[0], summary.health[1]
    );

    println!("{}", serde_json::to_string(&transcript).unwrap());
}
