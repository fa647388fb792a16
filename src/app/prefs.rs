//! User preferences. The dashboard this replaces kept theme, language and
//! favourites as ambient browser-local state; here they are an explicit
//! value behind an injected read/write port so the rest of the app stays
//! pure and testable.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Fr,
    En,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePref {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Preferences {
    pub theme: ThemePref,
    pub lang: Lang,
    #[serde(default)]
    pub favourites: Vec<String>,
}

impl Preferences {
    pub fn toggle_favourite(&mut self, slug: &str) {
        if let Some(pos) = self.favourites.iter().position(|s| s == slug) {
            self.favourites.remove(pos);
        } else {
            self.favourites.push(slug.to_string());
        }
    }

    #[must_use]
    pub fn is_favourite(&self, slug: &str) -> bool {
        self.favourites.iter().any(|s| s == slug)
    }
}

/// Read/write port for preference storage.
pub trait PrefsStore {
    fn load(&self) -> Option<Preferences>;
    fn save(&self, prefs: &Preferences) -> anyhow::Result<()>;
}

/// JSON file under `$SWELL_TUI_CONFIG_DIR`, else `~/.config/swell-tui/`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn discover() -> Option<Self> {
        prefs_path().map(Self::at)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PrefsStore for JsonFileStore {
    fn load(&self) -> Option<Preferences> {
        let content = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&content).ok()
    }

    fn save(&self, prefs: &Preferences) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("creating preferences directory failed")?;
        }
        let payload =
            serde_json::to_string_pretty(prefs).context("serializing preferences failed")?;
        fs::write(&self.path, payload).context("writing preferences file failed")
    }
}

/// Non-persisting store for tests and `--no-prefs` runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore;

impl PrefsStore for MemoryStore {
    fn load(&self) -> Option<Preferences> {
        None
    }

    fn save(&self, _prefs: &Preferences) -> anyhow::Result<()> {
        Ok(())
    }
}

fn prefs_path() -> Option<PathBuf> {
    if let Some(base) = std::env::var_os("SWELL_TUI_CONFIG_DIR") {
        return Some(PathBuf::from(base).join("prefs.json"));
    }

    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("swell-tui")
            .join("prefs.json"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_favourite_adds_then_removes() {
        let mut prefs = Preferences::default();
        prefs.toggle_favourite("la-torche-plomeur");
        assert!(prefs.is_favourite("la-torche-plomeur"));
        prefs.toggle_favourite("la-torche-plomeur");
        assert!(!prefs.is_favourite("la-torche-plomeur"));
    }

    #[test]
    fn memory_store_never_loads() {
        let store = MemoryStore;
        assert!(store.load().is_none());
        assert!(store.save(&Preferences::default()).is_ok());
    }

    #[test]
    fn missing_favourites_field_defaults_empty() {
        let prefs: Preferences =
            serde_json::from_str(r#"{"theme":"light","lang":"en"}"#).expect("valid prefs json");
        assert_eq!(prefs.theme, ThemePref::Light);
        assert_eq!(prefs.lang, Lang::En);
        assert!(prefs.favourites.is_empty());
    }
}
