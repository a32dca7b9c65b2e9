//! Clinic runtime configuration.
//!
//! Resolved once when the clinic is opened and then passed into the store and services, so no
//! operation reads process-wide state.

use thiserror::Error;

/// Dentist recorded on treatments when none is configured.
pub const DEFAULT_DENTIST_NAME: &str = "Dr. Anderson";

/// Number of days in the dashboard revenue chart.
pub const DEFAULT_REVENUE_SERIES_DAYS: u32 = 7;

/// Entries per page in exported reports.
pub const DEFAULT_EXPORT_PAGE_SIZE: usize = 5;

/// Configuration errors.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Core configuration resolved at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ClinicConfig {
    dentist_name: String,
    seed_defaults: bool,
    revenue_series_days: u32,
    export_page_size: usize,
}

impl ClinicConfig {
    /// Create a validated configuration.
    pub fn new(
        dentist_name: String,
        seed_defaults: bool,
        revenue_series_days: u32,
        export_page_size: usize,
    ) -> Result<Self, ConfigError> {
        if dentist_name.trim().is_empty() {
            return Err(ConfigError::Invalid("dentist_name cannot be empty".into()));
        }
        if revenue_series_days == 0 {
            return Err(ConfigError::Invalid(
                "revenue_series_days must be at least 1".into(),
            ));
        }
        if export_page_size == 0 {
            return Err(ConfigError::Invalid(
                "export_page_size must be at least 1".into(),
            ));
        }

        Ok(Self {
            dentist_name: dentist_name.trim().to_string(),
            seed_defaults,
            revenue_series_days,
            export_page_size,
        })
    }

    /// Disable or enable sample data for collections that were never saved.
    pub fn with_seed_defaults(mut self, seed_defaults: bool) -> Self {
        self.seed_defaults = seed_defaults;
        self
    }

    pub fn dentist_name(&self) -> &str {
        &self.dentist_name
    }

    pub fn seed_defaults(&self) -> bool {
        self.seed_defaults
    }

    pub fn revenue_series_days(&self) -> u32 {
        self.revenue_series_days
    }

    pub fn export_page_size(&self) -> usize {
        self.export_page_size
    }
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            dentist_name: DEFAULT_DENTIST_NAME.to_string(),
            seed_defaults: true,
            revenue_series_days: DEFAULT_REVENUE_SERIES_DAYS,
            export_page_size: DEFAULT_EXPORT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClinicConfig::default();
        assert_eq!(config.dentist_name(), "Dr. Anderson");
        assert!(config.seed_defaults());
        assert_eq!(config.revenue_series_days(), 7);
        assert_eq!(config.export_page_size(), 5);
    }

    #[test]
    fn test_rejects_blank_dentist() {
        let result = ClinicConfig::new("  ".into(), true, 7, 5);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_zero_counts() {
        assert!(ClinicConfig::new("Dr. Lee".into(), true, 0, 5).is_err());
        assert!(ClinicConfig::new("Dr. Lee".into(), true, 7, 0).is_err());
    }

    #[test]
    fn test_trims_dentist_name() {
        let config = ClinicConfig::new(" Dr. Lee ".into(), false, 14, 10).unwrap();
        assert_eq!(config.dentist_name(), "Dr. Lee");
        assert!(!config.seed_defaults());
    }

    #[test]
    fn test_with_seed_defaults() {
        let config = ClinicConfig::default().with_seed_defaults(false);
        assert!(!config.seed_defaults());
    }
}
