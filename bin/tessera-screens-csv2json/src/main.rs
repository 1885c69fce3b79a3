//! Tessera Screens CSV to JSON
//!
//! Reads the hand-maintained screen master `screens.csv` from the working
//! directory and writes the parsed screen records to `screens.json`.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tessera_venue::screens_from_csv;

const INPUT_PATH: &str = "screens.csv";
const OUTPUT_PATH: &str = "screens.json";

fn convert(input: &Path, output: &Path) -> Result<usize> {
    let csv = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let screens = screens_from_csv(&csv)?;
    let json = serde_json::to_string_pretty(&screens)?;
    std::fs::write(output, json)
        .with_context(|| format!("writing {}", output.display()))?;
    Ok(screens.len())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let count = convert(Path::new(INPUT_PATH), Path::new(OUTPUT_PATH))?;
    info!(count, path = OUTPUT_PATH, "screen master written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_round_trips_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("screens.csv");
        let output = dir.path().join("screens.json");
        std::fs::write(&input, "118,001,0,ScreenJA,ScreenEN,0,0,10\n").unwrap();

        let count = convert(&input, &output).unwrap();
        assert_eq!(count, 1);

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(json[0]["name"]["ja"], "ScreenJA");
        assert_eq!(json[0]["name"]["en"], "ScreenEN");
        assert_eq!(json[0]["seats"].as_array().unwrap().len(), 10);
        assert_eq!(json[0]["seats"][0]["branchCode"], "0001");
        assert_eq!(json[0]["seats"][9]["branchCode"], "0010");
    }

    #[test]
    fn test_missing_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = convert(&dir.path().join("absent.csv"), &dir.path().join("out.json"));
        assert!(result.is_err());
    }
}
