//! Persisted bot settings
//!
//! Settings are an explicit state object. The only way to change them is
//! [`SettingsStore::update`], which writes the file after the closure returns;
//! [`SettingsStore::save`] can also be called directly.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Channel to greet once after the next start
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hello_channel_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    settings: Settings,
}

impl SettingsStore {
    /// Load settings from `path`.
    ///
    /// A missing or unreadable file yields defaults; the file is not touched
    /// until the first save.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let settings = match read_settings(&path) {
            Ok(settings) => settings,
            Err(e) => {
                if path.exists() {
                    eprintln!("[settings] using defaults: {:#}", e);
                }
                Settings::default()
            }
        };
        Self { path, settings }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self) -> &Settings {
        &self.settings
    }

    /// Mutate the settings, then persist them.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut Settings) -> R) -> Result<R> {
        let out = f(&mut self.settings);
        self.save()?;
        Ok(out)
    }

    /// Take the pending hello channel, persisting its removal.
    pub fn take_hello_channel(&mut self) -> Result<Option<String>> {
        if self.settings.hello_channel_id.is_none() {
            return Ok(None);
        }
        self.update(|s| s.hello_channel_id.take())
    }

    /// Write the settings as 4-space indented JSON
    pub fn save(&self) -> Result<()> {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.settings
            .serialize(&mut ser)
            .context("serialize settings")?;

        fs::write(&self.path, buf)
            .with_context(|| format!("write settings to {}", self.path.display()))
    }
}

fn read_settings(path: &Path) -> Result<Settings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read settings from {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse settings in {}", path.display()))
}
