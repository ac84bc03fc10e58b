//! Export configuration.

use schemabone_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Which model groups an export walks.
///
/// # Example
///
/// ```
/// use schemabone_export::ExportOptions;
///
/// let options = ExportOptions::from_json(r#"{"groups": ["shop", "crm"]}"#).unwrap();
/// assert_eq!(options.groups, vec!["shop", "crm"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportOptions {
    /// App labels to export, in order.
    #[serde(default)]
    pub groups: Vec<String>,
}

impl ExportOptions {
    /// Export the given groups.
    pub fn new<I, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            groups: groups.into_iter().map(Into::into).collect(),
        }
    }

    /// Add a group.
    pub fn group(mut self, label: impl Into<String>) -> Self {
        self.groups.push(label.into());
        self
    }

    /// Parse options from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Check that every group label is usable.
    pub fn validate(&self) -> Result<()> {
        if let Some(pos) = self.groups.iter().position(|g| g.trim().is_empty()) {
            return Err(Error::InvalidConfig(format!(
                "group label at position {pos} is empty"
            )));
        }
        Ok(())
    }
}
