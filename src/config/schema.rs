// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the structures that can be loaded from commitgate.toml.

use serde::{Deserialize, Serialize};

/// The main configuration structure for commitgate.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GateConfig {
    /// UI/UX configuration.
    pub ui: UiConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

impl GateConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// UI/UX configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Whether to use colors when stdout is a terminal.
    pub color: bool,

    /// Whether to print "did you mean" hints.
    pub hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            hints: true,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Diagnostic format.
    pub format: OutputFormat,
}

/// Output format for hooks and scripting.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// JSON output for machine parsing
    Json,
}
