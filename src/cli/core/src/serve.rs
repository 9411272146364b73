/* src/cli/core/src/serve.rs */

// Local static server for the export directory, with SPA fallback so
// fragment routing and unknown paths resolve to the home shell.

use std::path::Path;

use anyhow::{Context, Result, bail};
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::ui;

pub fn router(dir: &Path) -> Router {
  let index = ServeFile::new(dir.join("index.html"));
  Router::new().fallback_service(ServeDir::new(dir).fallback(index))
}

pub async fn run_serve(dir: &Path, port: u16) -> Result<()> {
  if !dir.join("index.html").is_file() {
    bail!("{} has no index.html (run `brux build` first)", dir.display());
  }
  let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
    .await
    .with_context(|| format!("failed to bind port {port}"))?;

  ui::arrow(&format!("serving {} at http://localhost:{port}", dir.display()));
  ui::detail("analytics are not injected on localhost");
  tracing::info!(port, dir = %dir.display(), "static server listening");

  axum::serve(listener, router(dir)).await.context("server error")?;
  Ok(())
}
