// ⚙️ Report configuration - the constants of the report script
//
// Defaults give the stock report. A TOML file can override any key;
// the CLI layers its own flags on top.

use crate::error::{Result, RosterError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Roster CSV file
    pub input: PathBuf,

    /// Employee removed before the raise
    pub remove_name: String,

    /// Salary multiplier (1.10 = 10% raise)
    pub raise_factor: Decimal,

    /// Birth months listed in the birthday section
    pub birthday_months: Vec<u32>,

    /// Base salary (minimum wage) used to express salaries in base units
    pub base_unit: Decimal,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            input: PathBuf::from("data/employees.csv"),
            remove_name: "João".to_string(),
            raise_factor: Decimal::new(110, 2),
            birthday_months: vec![10, 12],
            base_unit: Decimal::new(121200, 2),
        }
    }
}

impl ReportConfig {
    /// Read a TOML config file. Missing keys fall back to the defaults.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: ReportConfig =
            toml::from_str(text).map_err(|e| RosterError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_unit <= Decimal::ZERO {
            return Err(RosterError::Config(format!(
                "base_unit must be positive, got {}",
                self.base_unit
            )));
        }
        if self.raise_factor < Decimal::ZERO {
            return Err(RosterError::Config(format!(
                "raise_factor must not be negative, got {}",
                self.raise_factor
            )));
        }
        if self.remove_name.is_empty() {
            return Err(RosterError::Config("remove_name must not be empty".to_string()));
        }
        if let Some(month) = self.birthday_months.iter().find(|m| !(1..=12).contains(*m)) {
            return Err(RosterError::Config(format!(
                "birthday month {} is outside 1..=12",
                month
            )));
        }
        Ok(())
    }

    pub fn birthday_month_set(&self) -> BTreeSet<u32> {
        self.birthday_months.iter().copied().collect()
    }
}
