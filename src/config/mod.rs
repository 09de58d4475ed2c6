use crate::domain::ports::ReportConfig;
use crate::utils::error::{QueryError, Result};
use crate::utils::validation::Validate;
use chrono::{Locale, NaiveDate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "person-query")]
#[command(about = "Query and report over a fixed in-memory person dataset")]
pub struct CliConfig {
    /// CSV dataset to load instead of the built-in generated fixture
    #[arg(long)]
    pub dataset: Option<String>,

    /// Write the loaded dataset to a CSV file and exit
    #[arg(long)]
    pub export: Option<String>,

    /// Print the report as JSON instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Locale for birth date formatting, e.g. sv_SE
    #[arg(long, default_value = "sv_SE")]
    pub locale: String,

    /// Reference date for age calculations (ISO format)
    #[arg(long, default_value = "2019-12-20")]
    pub reference_date: NaiveDate,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    fn parsed_locale(&self) -> Result<Locale> {
        Locale::try_from(self.locale.as_str()).map_err(|_| QueryError::ConfigError {
            message: format!("unknown locale tag: {}", self.locale),
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.parsed_locale()?;
        if let Some(path) = &self.export {
            if path.trim().is_empty() {
                return Err(QueryError::ConfigError {
                    message: "export path cannot be empty".to_string(),
                });
            }
        }
        if let Some(path) = &self.dataset {
            if path.trim().is_empty() {
                return Err(QueryError::ConfigError {
                    message: "dataset path cannot be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

impl ReportConfig for CliConfig {
    fn locale(&self) -> Locale {
        // checked by validate() at startup
        self.parsed_locale().unwrap_or(Locale::sv_SE)
    }

    fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_locale(locale: &str) -> CliConfig {
        CliConfig {
            dataset: None,
            export: None,
            json: false,
            locale: locale.to_string(),
            reference_date: NaiveDate::from_ymd_opt(2019, 12, 20).unwrap(),
            verbose: false,
        }
    }

    #[test]
    fn test_known_locale_passes_validation() {
        assert!(config_with_locale("sv_SE").validate().is_ok());
        assert!(config_with_locale("en_US").validate().is_ok());
    }

    #[test]
    fn test_unknown_locale_is_a_config_error() {
        let err = config_with_locale("xx_XX").validate().unwrap_err();
        assert!(matches!(err, QueryError::ConfigError { .. }));
    }

    #[test]
    fn test_blank_export_path_is_rejected() {
        let mut config = config_with_locale("sv_SE");
        config.export = Some("  ".to_string());
        assert!(config.validate().is_err());
    }
}
