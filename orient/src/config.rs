use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::control::InputCommand;
use crate::core::math::Tolerance;
use crate::input::OrientationInput;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    pub app_name: String,
    /// Absolute tolerance for the engine's zero tests.
    pub tolerance: Tolerance,
    /// Input panel contents at startup.
    pub initial: OrientationInput,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            app_name: "Orientation Visualizer".to_string(),
            tolerance: Tolerance::default(),
            initial: OrientationInput::default(),
        }
    }
}

impl VisualizerConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_ron_str(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_ron_str(text: &str) -> Result<Self> {
        let config: Self = ron::from_str(text).context("failed to parse visualizer config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let epsilon = self.tolerance.value();
        if !epsilon.is_finite() || epsilon <= 0.0 {
            bail!("tolerance must be a positive finite number, got {epsilon}");
        }
        Ok(())
    }
}

/// Reads a scripted list of input edits.
pub fn load_session(path: impl AsRef<Path>) -> Result<Vec<InputCommand>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read session {}", path.display()))?;
    parse_session(&text).with_context(|| format!("invalid session {}", path.display()))
}

pub fn parse_session(text: &str) -> Result<Vec<InputCommand>> {
    ron::from_str(text).context("failed to parse session script")
}
