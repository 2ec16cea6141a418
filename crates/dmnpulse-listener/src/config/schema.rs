use serde::Deserialize;

use dmnpulse_core::{DmnPulseError, Result};

use crate::metrics::collector::is_valid_name;
use crate::tracked::DYNAMIC_LABEL_NAMES;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListenerConfig {
    pub version: u32,

    /// Ordered static label prefix, representing deployment identity.
    /// May be empty; the schema prefix is not fixed in length.
    #[serde(default)]
    pub static_labels: Vec<StaticLabel>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StaticLabel {
    pub name: String,
    pub value: String,
}

impl ListenerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(DmnPulseError::UnsupportedVersion);
        }

        for (i, label) in self.static_labels.iter().enumerate() {
            if !is_valid_name(&label.name) {
                return Err(DmnPulseError::Config(format!(
                    "static label name {:?} must match [a-zA-Z_][a-zA-Z0-9_]*",
                    label.name
                )));
            }
            if DYNAMIC_LABEL_NAMES.contains(&label.name.as_str()) {
                return Err(DmnPulseError::Config(format!(
                    "static label name {} collides with a dynamic label",
                    label.name
                )));
            }
            if self.static_labels[..i].iter().any(|l| l.name == label.name) {
                return Err(DmnPulseError::Config(format!(
                    "duplicate static label name: {}",
                    label.name
                )));
            }
        }

        Ok(())
    }
}
