/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::types::BruxConfig;

pub const CONFIG_FILE: &str = "brux.toml";

/// Walk upward from `start` until a `brux.toml` is found.
pub fn find_brux_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join(CONFIG_FILE);
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("{CONFIG_FILE} not found (searched upward from {})", start.display());
    }
  }
}

pub fn load_brux_config(path: &Path) -> Result<BruxConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  parse_brux_config(&content).with_context(|| format!("invalid {}", path.display()))
}

pub(super) fn parse_brux_config(content: &str) -> Result<BruxConfig> {
  let config: BruxConfig = toml::from_str(content).context("failed to parse TOML")?;
  config.engine.validate()?;
  Ok(config)
}
