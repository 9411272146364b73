/* src/cli/core/src/build.rs */

//! Static export: one prerendered HTML shell per page.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use brux_engine::{PageId, export_path, render_page_shell};

use crate::config::BruxConfig;
use crate::ui;

/// A file written by [`run_build`].
#[derive(Debug)]
pub struct Exported {
  pub page: PageId,
  pub path: PathBuf,
  pub bytes: u64,
}

/// Render every page into `out_dir`, creating directories as needed.
pub fn run_build(config: &BruxConfig, out_dir: &Path) -> Result<Vec<Exported>> {
  let options = config.build.shell_options();
  let total = PageId::ALL.len();
  let mut exported = Vec::with_capacity(total);

  for (i, page) in PageId::ALL.into_iter().enumerate() {
    ui::step(i + 1, total, &format!("rendering {page}"));
    let html = render_page_shell(&config.engine, &options, page);
    let path = out_dir.join(export_path(page));
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)
        .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(&path, &html).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(page = %page, path = %path.display(), "page exported");
    exported.push(Exported { page, path, bytes: html.len() as u64 });
  }
  Ok(exported)
}
