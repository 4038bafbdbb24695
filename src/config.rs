use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde::Deserialize;

use crate::http::writer::Framing;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_SERVER_ROOT: &str = "./www";

/// Whether the listener stops after the first exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServeMode {
    /// Accept one connection, answer it, exit.
    #[default]
    Once,
    /// Accept connections until interrupted, one task each.
    Forever,
}

impl ServeMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "once" => Some(ServeMode::Once),
            "forever" => Some(ServeMode::Forever),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen_addr: String,
    pub server_root: PathBuf,
    pub serve_mode: ServeMode,
    pub framing: Framing,
    pub error_hook: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            server_root: PathBuf::from(DEFAULT_SERVER_ROOT),
            serve_mode: ServeMode::Once,
            framing: Framing::Legacy,
            error_hook: true,
        }
    }
}

impl Config {
    /// Builds the configuration from, in increasing priority: defaults, the
    /// YAML file named by `CONFIG`, and the `LISTEN`, `SERVER_ROOT`,
    /// `SERVE_MODE`, `FRAMING` and `ERROR_HOOK` environment variables.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("CONFIG") {
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        cfg.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Parses YAML; missing keys keep their defaults.
    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Applies overrides from a variable lookup (the process environment in
    /// [`Config::load`]).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("LISTEN") {
            self.listen_addr = addr;
        }

        if let Some(root) = lookup("SERVER_ROOT") {
            self.server_root = PathBuf::from(root);
        }

        if let Some(mode) = lookup("SERVE_MODE") {
            self.serve_mode = ServeMode::parse(&mode)
                .with_context(|| format!("SERVE_MODE must be `once` or `forever`, got `{mode}`"))?;
        }

        if let Some(framing) = lookup("FRAMING") {
            self.framing = Framing::parse(&framing).with_context(|| {
                format!("FRAMING must be `legacy` or `standard`, got `{framing}`")
            })?;
        }

        if let Some(hook) = lookup("ERROR_HOOK") {
            self.error_hook = match hook.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => bail!("ERROR_HOOK must be a boolean, got `{hook}`"),
            };
        }

        Ok(())
    }
}
