use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use serde::de::DeserializeOwned;
use serde_json::json;

use datepicker::shared::{IntentRequest, PickerConfigRequest};
use datepicker::{PickerCallbacks, PickerSession};

/// Replay date picker intents against a configuration and print the outcome
#[derive(Debug, Parser)]
#[command(name = "datepicker-cli", version)]
struct Args {
    /// Picker configuration (.json, .yaml or .yml)
    #[arg(short, long)]
    config: PathBuf,

    /// List of intents to apply in order (.json, .yaml or .yml)
    #[arg(short, long)]
    intents: Option<PathBuf>,

    /// Also print the grid of the month shown at the end
    #[arg(long)]
    grid: bool,
}

/// Read a JSON or YAML document, picking the format from the file extension
fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    );
    if is_yaml {
        serde_yaml::from_str(&text).with_context(|| format!("Invalid YAML in {}", path.display()))
    } else {
        serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {}", path.display()))
    }
}

fn run(args: Args) -> Result<()> {
    let config: PickerConfigRequest = load_document(&args.config)?;
    let intents: Vec<IntentRequest> = match &args.intents {
        Some(path) => load_document(path)?,
        None => Vec::new(),
    };

    let mut session = PickerSession::from_config(config, PickerCallbacks::new())
        .context("Failed to create date picker session")?;
    info!("Replaying {} intents", intents.len());

    for intent in &intents {
        let line = match session.apply(intent) {
            Ok(notifications) => json!({ "intent": intent, "notifications": notifications }),
            Err(e) => json!({ "intent": intent, "error": e.to_string() }),
        };
        println!("{}", line);
    }

    println!("{}", json!({ "summary": session.summary() }));
    if args.grid {
        let grid = session.grid().context("Failed to build month grid")?;
        println!("{}", json!({ "grid": grid }));
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        error!("datepicker-cli failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_json_config() {
        let file = write_temp(".json", r#"{"minuteInterval": 15, "mode": "time"}"#);
        let config: PickerConfigRequest = load_document(file.path()).unwrap();
        assert_eq!(config.minute_interval, 15);
    }

    #[test]
    fn test_load_yaml_intents() {
        let file = write_temp(
            ".yaml",
            "- type: selectDate\n  date: 2024/05/01\n- type: toggleTimePanel\n",
        );
        let intents: Vec<IntentRequest> = load_document(file.path()).unwrap();
        assert_eq!(
            intents,
            vec![
                IntentRequest::SelectDate { date: "2024/05/01".to_string() },
                IntentRequest::ToggleTimePanel,
            ]
        );
    }

    #[test]
    fn test_invalid_document_reports_path() {
        let file = write_temp(".json", "{ not json");
        let err = load_document::<PickerConfigRequest>(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid JSON"));
    }

    #[test]
    fn test_run_with_invalid_configuration_fails() {
        let config = write_temp(".json", r#"{"selectorStartingYear": 3000, "selectorEndingYear": 1}"#);
        let args = Args { config: config.path().to_path_buf(), intents: None, grid: false };
        assert!(run(args).is_err());
    }
}
