use anyhow::Context;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use urania::report::{DailyTransitReport, NatalProfile, ProfileBuilder, TransitReportBuilder};
use urania::ChartPositions;
use urania_config::UraniaSettings;

const CLOUDY: &str = "The stars are cloudy today. We couldn't calculate your chart right now.";

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// JSON file with `natal` and `transit` ephemeris output.
    #[arg(long)]
    input: PathBuf,

    /// Settings file (otherwise configs/urania.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only build the natal profile.
    #[arg(long, default_value_t = false)]
    natal_only: bool,

    /// Pretty-print the JSON output.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Debug, Deserialize)]
struct ForecastInput {
    natal: ChartPositions,
    #[serde(default)]
    transit: Option<ChartPositions>,
}

#[derive(Debug, Serialize)]
struct BigThreePlaceholder {
    sun: &'static str,
    moon: &'static str,
    rising: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ForecastOutput {
    Full {
        natal_profile: NatalProfile,
        #[serde(skip_serializing_if = "Option::is_none")]
        daily_transit: Option<DailyTransitReport>,
    },
    Degraded {
        daily_reading: &'static str,
        birth_chart: BigThreePlaceholder,
    },
}

impl ForecastOutput {
    fn degraded() -> Self {
        ForecastOutput::Degraded {
            daily_reading: CLOUDY,
            birth_chart: BigThreePlaceholder {
                sun: "Unknown",
                moon: "Unknown",
                rising: "Unknown",
            },
        }
    }
}

fn load_settings(path: Option<&Path>) -> anyhow::Result<UraniaSettings> {
    match path {
        Some(p) => urania_config::load_settings_from(p)
            .with_context(|| format!("Failed to load config {}", p.display())),
        None => urania_config::load_settings().context("Failed to load configs/urania.toml"),
    }
}

fn read_input(path: &Path) -> anyhow::Result<ForecastInput> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse input {}", path.display()))
}

fn run(input: &ForecastInput, settings: &UraniaSettings, natal_only: bool) -> ForecastOutput {
    let natal_profile = match ProfileBuilder::new().build(&input.natal) {
        Ok(profile) => profile,
        Err(e) => {
            log::error!("[forecast] {}", e);
            return ForecastOutput::degraded();
        }
    };

    let daily_transit = match (&input.transit, natal_only) {
        (Some(transit), false) => {
            Some(TransitReportBuilder::new(settings.report.clone()).build(transit, &input.natal))
        }
        (None, false) => {
            log::warn!("[forecast] no transit chart in input, skipping daily report");
            None
        }
        (_, true) => None,
    };

    ForecastOutput::Full {
        natal_profile,
        daily_transit,
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = load_settings(args.config.as_deref())?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&settings.log_level))
        .init();
    match &settings.source {
        Some(path) => log::info!("[forecast] settings from {}", path.display()),
        None => log::info!("[forecast] default settings"),
    }

    let input = read_input(&args.input)?;
    let output = run(&input, &settings, args.natal_only);

    let json = if args.pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
    .context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = include_str!("../../../demos/sample_input.json");

    #[test]
    fn test_full_output() {
        let input: ForecastInput = serde_json::from_str(SAMPLE).unwrap();
        let output = run(&input, &UraniaSettings::default(), false);
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["natal_profile"]["sun"]["sign"], "leo");
        assert_eq!(value["daily_transit"]["events"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_natal_only() {
        let input: ForecastInput = serde_json::from_str(SAMPLE).unwrap();
        let value = serde_json::to_value(run(&input, &UraniaSettings::default(), true)).unwrap();
        assert!(value.get("daily_transit").is_none());
    }

    #[test]
    fn test_degraded_output() {
        let input: ForecastInput = serde_json::from_str(r#"{ "natal": { "bodies": { "sun": { "lon": 10.0 } } } }"#).unwrap();
        let value = serde_json::to_value(run(&input, &UraniaSettings::default(), false)).unwrap();
        assert_eq!(value["daily_reading"], CLOUDY);
        assert_eq!(value["birth_chart"]["rising"], "Unknown");
    }

    #[test]
    fn test_read_input_errors_carry_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = read_input(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse input"));
    }
}
