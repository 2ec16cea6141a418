//! Listener config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use dmnpulse_core::{DmnPulseError, Result};

pub use schema::{ListenerConfig, StaticLabel};

pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ListenerConfig> {
    let s = fs::read_to_string(path.as_ref())
        .map_err(|e| DmnPulseError::Config(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ListenerConfig> {
    let cfg: ListenerConfig = serde_yaml::from_str(s)
        .map_err(|e| DmnPulseError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
