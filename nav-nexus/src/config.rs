//! Screen host configuration, loadable from TOML.

use crate::error::{ParseConfigSnafu, ReadConfigSnafu};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// What the host does when a screen asks to go back from the start destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootBackPolicy {
    /// Stay on the start destination.
    #[default]
    Ignore,
    /// Leave the application.
    Exit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostConfig {
    #[serde(default)]
    pub root_back: RootBackPolicy,
    /// Event poll interval in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_mouse_capture")]
    pub mouse_capture: bool,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_mouse_capture() -> bool {
    true
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            root_back: RootBackPolicy::default(),
            tick_rate_ms: default_tick_rate_ms(),
            mouse_capture: default_mouse_capture(),
        }
    }
}

impl HostConfig {
    pub fn load(path: &Path) -> crate::Result<Self> {
        log::debug!("Loading host config from: {:?}", path);
        let content = fs::read_to_string(path).context(ReadConfigSnafu { path })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        toml::from_str(content).context(ParseConfigSnafu)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}
