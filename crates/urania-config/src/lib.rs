use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use urania::report::ReportSettings;
use urania::western::CelestialBody;

/// Relative locations tried when no explicit path is given.
pub const DEFAULT_CONFIG_PATHS: [&str; 2] = ["configs/urania.toml", "../../configs/urania.toml"];

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq)]
pub struct UraniaSettings {
    pub report: ReportSettings,
    pub log_level: String,
    /// File the settings came from, `None` when running on defaults
    pub source: Option<PathBuf>,
}

impl Default for UraniaSettings {
    fn default() -> Self {
        Self {
            report: ReportSettings::default(),
            log_level: default_level(),
            source: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct LoggingToml {
    #[serde(default = "default_level")]
    level: String,
}

impl Default for LoggingToml {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    report: Option<ReportSettings>,
    #[serde(default)]
    logging: Option<LoggingToml>,
}

/// Try the common relative paths for `configs/urania.toml`.
///
/// `Ok(None)` when none of them exist.
pub fn read_config_text() -> anyhow::Result<Option<(PathBuf, String)>> {
    for p in &DEFAULT_CONFIG_PATHS {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(Some((PathBuf::from(p), c)));
        }
    }
    log::debug!("No urania.toml found in {:?}, using defaults", DEFAULT_CONFIG_PATHS);
    Ok(None)
}

pub fn parse_settings(text: &str) -> anyhow::Result<UraniaSettings> {
    let root: RootConfigToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse urania.toml: {e}"))?;
    let report = root.report.unwrap_or_default();
    let log_level = root.logging.unwrap_or_default().level.to_lowercase();
    validate(&report, &log_level)?;
    Ok(UraniaSettings {
        report,
        log_level,
        source: None,
    })
}

fn validate(report: &ReportSettings, log_level: &str) -> anyhow::Result<()> {
    if report.max_events == 0 {
        anyhow::bail!("report.max_events must be at least 1");
    }
    if report.transiting.is_empty() || report.natal_references.is_empty() {
        anyhow::bail!("report.transiting and report.natal_references must not be empty");
    }
    if let Some(angle) = report
        .transiting
        .iter()
        .chain(&report.natal_references)
        .find(|b: &&CelestialBody| b.is_angle())
    {
        anyhow::bail!("report bodies must not include angle points (found {})", angle.id());
    }
    if !LOG_LEVELS.contains(&log_level) {
        anyhow::bail!("logging.level must be one of {:?}, got {:?}", LOG_LEVELS, log_level);
    }
    Ok(())
}

/// Load settings from an explicit file. The file must exist.
pub fn load_settings_from(path: &Path) -> anyhow::Result<UraniaSettings> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Could not read {}: {e}", path.display()))?;
    let mut settings = parse_settings(&text)?;
    settings.source = Some(path.to_path_buf());
    Ok(settings)
}

/// Load `configs/urania.toml` from the usual places, or defaults when absent.
pub fn load_settings() -> anyhow::Result<UraniaSettings> {
    match read_config_text()? {
        Some((path, text)) => {
            let mut settings = parse_settings(&text)?;
            settings.source = Some(path);
            Ok(settings)
        }
        None => Ok(UraniaSettings::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_is_defaults() {
        let settings = parse_settings("").unwrap();
        assert_eq!(settings.report, ReportSettings::default());
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_partial_report_section() {
        let settings = parse_settings(
            r#"
            [report]
            max_events = 3
            transiting = ["saturn", "pluto"]

            [logging]
            level = "DEBUG"
            "#,
        )
        .unwrap();
        assert_eq!(settings.report.max_events, 3);
        assert_eq!(settings.report.transiting, vec![CelestialBody::Saturn, CelestialBody::Pluto]);
        assert_eq!(settings.report.natal_references, ReportSettings::default().natal_references);
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(parse_settings("[report]\nmax_events = 0").is_err());
        assert!(parse_settings("[report]\ntransiting = [\"ascendant\"]").is_err());
        assert!(parse_settings("[report]\ntransiting = [\"vulcan\"]").is_err());
        assert!(parse_settings("[logging]\nlevel = \"loud\"").is_err());
        assert!(parse_settings("[report\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[report]\nmax_events = 2").unwrap();
        let settings = load_settings_from(file.path()).unwrap();
        assert_eq!(settings.report.max_events, 2);
        assert_eq!(settings.source.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_settings_from(&dir.path().join("nope.toml")).is_err());
    }
}
