//! Settings loading for the binary.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use atcsim_core::settings::SimSettings;

/// Read settings from `path`, or defaults when no file is given.
pub fn load_settings(path: Option<&Path>) -> Result<SimSettings> {
    let Some(path) = path else {
        info!("no config file given, using defaults");
        return Ok(SimSettings::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let settings = SimSettings::from_toml_str(&text)
        .with_context(|| format!("parsing config file {}", path.display()))?;
    info!(path = %path.display(), aircraft = settings.aircraft.len(), "config loaded");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let settings = load_settings(None).unwrap();
        assert_eq!(settings, SimSettings::default());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_settings(Some(Path::new("/nonexistent/atcsim.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/atcsim.toml"));
    }

    #[test]
    fn test_demo_config_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/ksfo.toml");
        let settings = load_settings(Some(&path)).unwrap();
        assert_eq!(settings.sweep_interval_ms, 4800.0);
        assert_eq!(settings.aircraft.len(), 1);
        assert!(settings.active_runways.runway_active("KSFO", "RW28R"));
        assert!(!settings.active_runways.runway_active("KSFO", "RW01L"));
    }

    #[test]
    fn test_reads_toml_file() {
        let dir = std::env::temp_dir().join(format!("atcsim-config-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("atcsim.toml");
        fs::write(&path, "sweep_interval_ms = 4000.0\n[traffic]\ncount = 2\n").unwrap();

        let settings = load_settings(Some(&path)).unwrap();
        assert_eq!(settings.sweep_interval_ms, 4000.0);
        assert_eq!(settings.traffic.count, 2);

        fs::write(&path, "sweep_interval_ms = -1.0\n").unwrap();
        assert!(load_settings(Some(&path)).is_err());

        fs::remove_dir_all(&dir).ok();
    }
}
