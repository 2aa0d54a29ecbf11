// Line protocol bridge for a speech-capture host.
//
//   PARTIAL <text>   -> DISPLAY <transcript + partial>
//   FINAL <text>     -> DISPLAY <transcript>
//   RECOMMEND        -> RECOMMENDATION <json>
//   RESET            -> DISPLAY
//   EXIT
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use triage_core::config::TriageConfig;
use triage_core::dataset::load_symptom_records;
use triage_core::fuzzy::matcher::SymptomMatcher;
use triage_core::transcript::Transcript;
use triage_core::{NoFallback, RecommendationEngine, SymptomIndex};

fn main() -> triage_core::Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = TriageConfig::resolve(config_path.as_deref())?;

    // stdout carries the protocol; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let records = load_symptom_records(&config.symptoms_path())?;
    let engine = RecommendationEngine::with_matcher(
        SymptomIndex::build(&records),
        SymptomMatcher::new(config.match_threshold),
    );
    tracing::info!("simulator starting");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut transcript = Transcript::new();

    for line in stdin.lock().lines() {
        let input = line?;
        tracing::debug!(input = input.as_str(), "host ->");
        let (command, payload) = input
            .split_once(' ')
            .unwrap_or((input.as_str(), ""));

        match command {
            "PARTIAL" => send(&mut stdout, &format!("DISPLAY {}", transcript.display_with_partial(payload)))?,
            "FINAL" => {
                transcript.append(payload);
                send(&mut stdout, &format!("DISPLAY {}", transcript.as_str()))?;
            }
            "RECOMMEND" => {
                let recommendation = engine.recommend(transcript.as_str(), &NoFallback);
                let json = serde_json::to_string(&recommendation)?;
                send(&mut stdout, &format!("RECOMMENDATION {}", json))?;
            }
            "RESET" => {
                transcript.reset();
                send(&mut stdout, "DISPLAY ")?;
            }
            "EXIT" => break,
            other => tracing::warn!(command = other, "unknown command"),
        }
    }

    tracing::info!("simulator shutting down");
    Ok(())
}

fn send(stdout: &mut io::Stdout, message: &str) -> io::Result<()> {
    tracing::debug!(line = message, "-> host");
    writeln!(stdout, "{}", message)?;
    stdout.flush()
}
