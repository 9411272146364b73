/* src/cli/core/src/config/types.rs */

use brux_engine::{ShellOptions, SiteConfig};
use serde::Deserialize;

/// Contents of `brux.toml`. The site, analytics and verification tables form
/// the engine's [`SiteConfig`]; `build` and `serve` only matter to the CLI.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BruxConfig {
  #[serde(flatten)]
  pub engine: SiteConfig,
  #[serde(default)]
  pub build: BuildSection,
  #[serde(default)]
  pub serve: ServeSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuildSection {
  #[serde(default = "default_out_dir")]
  pub out_dir: String,
  /// Module script that boots the client, e.g. `/assets/main.js`.
  pub entry: Option<String>,
  #[serde(default)]
  pub stylesheets: Vec<String>,
  #[serde(default = "default_root_id")]
  pub root_id: String,
}

impl Default for BuildSection {
  fn default() -> Self {
    Self { out_dir: default_out_dir(), entry: None, stylesheets: Vec::new(), root_id: default_root_id() }
  }
}

impl BuildSection {
  pub fn shell_options(&self) -> ShellOptions {
    ShellOptions {
      root_id: self.root_id.clone(),
      entry_script: self.entry.clone(),
      stylesheets: self.stylesheets.clone(),
    }
  }
}

fn default_out_dir() -> String {
  "dist".to_string()
}

fn default_root_id() -> String {
  "root".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServeSection {
  #[serde(default = "default_port")]
  pub port: u16,
}

impl Default for ServeSection {
  fn default() -> Self {
    Self { port: default_port() }
  }
}

fn default_port() -> u16 {
  4173
}
