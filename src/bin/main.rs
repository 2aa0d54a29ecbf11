use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use triage_core::catalog::DiseaseCatalog;
use triage_core::config::{TriageConfig, APP_VERSION};
use triage_core::dataset::load_symptom_records;
use triage_core::transcript::Transcript;
use triage_core::{NoFallback, Recommendation, RecommendationEngine};

fn main() -> ExitCode {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = match TriageConfig::resolve(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &TriageConfig) -> triage_core::Result<()> {
    let records = load_symptom_records(&config.symptoms_path())?;
    let engine = RecommendationEngine::with_matcher(
        triage_core::SymptomIndex::build(&records),
        triage_core::fuzzy::matcher::SymptomMatcher::new(config.match_threshold),
    );
    let catalog = DiseaseCatalog::load_dir(&config.dataset_dir)?;
    tracing::info!("symptom-triage v{} ready", APP_VERSION);

    let mut transcript = Transcript::new();
    let mut last: Option<Recommendation> = None;

    loop {
        print_ui(&transcript, last.as_ref(), &catalog)?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        match input.trim() {
            "exit" => break,
            ":reset" => {
                transcript.reset();
                last = None;
            }
            ":r" => last = Some(engine.recommend(transcript.as_str(), &NoFallback)),
            line => {
                transcript.append(line);
            }
        }
    }
    Ok(())
}

fn print_ui(
    transcript: &Transcript,
    last: Option<&Recommendation>,
    catalog: &DiseaseCatalog,
) -> std::io::Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    writeln!(out, "{}", "Symptom Triage".bold())?;
    writeln!(out, "---------------------------------------------------------------")?;
    writeln!(out, "Describe your symptoms, one phrase per line.")?;
    writeln!(out, "':r' for a recommendation, ':reset' to start over, 'exit' to quit.\n")?;

    let shown = if transcript.is_empty() { "(nothing yet)" } else { transcript.as_str() };
    writeln!(out, "Symptoms: {}", shown.cyan())?;

    if let Some(rec) = last {
        writeln!(out)?;
        if rec.matched_symptoms.is_empty() {
            writeln!(out, "Recognized: {}", "none".dark_grey())?;
        } else {
            writeln!(out, "Recognized: {}", rec.matched_symptoms.join(", ").yellow())?;
        }
        match &rec.disease {
            Some(disease) => writeln!(out, "Likely condition: {}", disease.as_str().green().bold())?,
            None => writeln!(out, "Likely condition: {}", "not identified".red())?,
        }
        writeln!(out, "Recommended doctor: {}", rec.specialist.as_str().green())?;

        if let Some(advice) = rec.disease.as_deref().and_then(|d| catalog.advice_for(d)) {
            if let Some(description) = &advice.description {
                writeln!(out, "\n{}", description)?;
            }
            print_section(&mut out, "Precautions", &advice.precautions)?;
            print_section(&mut out, "Medications", &advice.medications)?;
            print_section(&mut out, "Diet", &advice.diets)?;
            print_section(&mut out, "Workout", &advice.workouts)?;
        }
    }

    write!(out, "\n> ")?;
    out.flush()
}

fn print_section(out: &mut impl Write, title: &str, items: &[String]) -> std::io::Result<()> {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}:", title.bold())?;
    for item in items {
        writeln!(out, "  - {}", item)?;
    }
    Ok(())
}
