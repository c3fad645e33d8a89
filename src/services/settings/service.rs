use crate::models::settings::PickerSettings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    /// Use an explicit settings file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use `settings.toml` in the platform configuration directory
    pub fn from_default_location() -> Result<Self> {
        let dirs = ProjectDirs::from("com", "Ken24T", "MonthDatePicker")
            .ok_or_else(|| anyhow!("Could not determine a configuration directory"))?;
        Ok(Self::new(dirs.config_dir().join(SETTINGS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings; a missing file yields the defaults
    pub fn load(&self) -> Result<PickerSettings> {
        if !self.path.exists() {
            log::info!("No settings at {}, using defaults", self.path.display());
            return Ok(PickerSettings::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let settings: PickerSettings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings in {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        log::info!("Loaded settings from {}", self.path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is unusable
    pub fn load_or_default(&self) -> PickerSettings {
        self.load().unwrap_or_else(|e| {
            log::warn!("{:#}; using default settings", e);
            PickerSettings::default()
        })
    }

    /// Validate and write settings, creating parent directories as needed
    pub fn save(&self, settings: &PickerSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;

        log::info!("Saved settings to {}", self.path.display());
        Ok(())
    }

    /// Reset settings to defaults
    pub fn reset(&self) -> Result<()> {
        self.save(&PickerSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn setup_test_service() -> (TempDir, SettingsService) {
        let dir = TempDir::new().unwrap();
        let service = SettingsService::new(dir.path().join("nested").join(SETTINGS_FILE));
        (dir, service)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let (_dir, service) = setup_test_service();
        let settings = service.load().unwrap();
        assert_eq!(settings, PickerSettings::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let (_dir, service) = setup_test_service();

        let mut settings = PickerSettings::default();
        settings.week_start_day = 1;
        settings.initial_date = NaiveDate::from_ymd_opt(2024, 2, 29);
        settings.layout.width = 350.0;
        settings.appearance.mark = Some("#00AA00".to_string());
        settings.appearance.background = Some("none".to_string());
        settings.appearance.text = None;

        service.save(&settings).unwrap();
        let loaded = service.load().unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.appearance.palette().background, None);
    }

    #[test]
    fn test_default_settings_round_trip() {
        let (_dir, service) = setup_test_service();

        service.save(&PickerSettings::default()).unwrap();
        assert_eq!(service.load().unwrap(), PickerSettings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let (_dir, service) = setup_test_service();
        fs::create_dir_all(service.path().parent().unwrap()).unwrap();
        fs::write(service.path(), "week_start_day = 7\n").unwrap();

        let settings = service.load().unwrap();
        assert_eq!(settings.week_start_day, 7);
        assert_eq!(settings.layout, PickerSettings::default().layout);
    }

    #[test]
    fn test_invalid_week_start_rejected_on_load() {
        let (_dir, service) = setup_test_service();
        fs::create_dir_all(service.path().parent().unwrap()).unwrap();
        fs::write(service.path(), "week_start_day = 9\n").unwrap();

        assert!(service.load().is_err());
        assert_eq!(service.load_or_default(), PickerSettings::default());
    }

    #[test]
    fn test_malformed_file_rejected() {
        let (_dir, service) = setup_test_service();
        fs::create_dir_all(service.path().parent().unwrap()).unwrap();
        fs::write(service.path(), "week_start_day = [").unwrap();

        assert!(service.load().is_err());
    }

    #[test]
    fn test_save_invalid_settings_fails() {
        let (_dir, service) = setup_test_service();
        let mut settings = PickerSettings::default();
        settings.appearance.text = Some("black".to_string());

        assert!(service.save(&settings).is_err());
        assert!(!service.path().exists());
    }

    #[test]
    fn test_reset_settings() {
        let (_dir, service) = setup_test_service();
        let mut settings = PickerSettings::default();
        settings.week_start_day = 4;
        service.save(&settings).unwrap();

        service.reset().unwrap();
        assert_eq!(service.load().unwrap(), PickerSettings::default());
    }
}
