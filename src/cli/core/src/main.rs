/* src/cli/core/src/main.rs */

mod build;
mod check;
mod config;
mod serve;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use brux_engine::{MetadataWriter, PageId};
use brux_head::HeadDocument;
use clap::{Parser, Subcommand};
use tracing::Level;

use config::{BruxConfig, CONFIG_FILE, find_brux_config, load_brux_config};

#[derive(Parser)]
#[command(name = "brux", about = "Brux Studio site tooling", version)]
struct Cli {
  /// Print debug logs
  #[arg(short, long, global = true)]
  verbose: bool,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Prerender one HTML shell per page
  Build {
    /// Path to brux.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Output directory (overrides build.out_dir)
    #[arg(short, long)]
    out: Option<PathBuf>,
  },
  /// Print the managed head of a page
  Head {
    /// Page name: home, about, portfolio, contact, methodology
    page: PageId,
    /// Path to brux.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Emit head patches as JSON instead of HTML
    #[arg(long)]
    json: bool,
  },
  /// Serve the exported site locally
  Serve {
    /// Path to brux.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Port (overrides serve.port)
    #[arg(short, long)]
    port: Option<u16>,
  },
  /// Validate brux.toml and report which integrations would load
  Check {
    /// Path to brux.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
}

/// Resolve config path (explicit or auto-detected) and parse it. Without a
/// config file the production defaults apply and paths resolve against cwd.
fn resolve_config(explicit: Option<PathBuf>) -> Result<(PathBuf, BruxConfig)> {
  let cwd = std::env::current_dir().context("failed to get cwd")?;
  let path = match explicit {
    Some(p) => p,
    None => match find_brux_config(&cwd) {
      Ok(p) => p,
      Err(e) => {
        tracing::debug!("{e:#}");
        ui::warn(&format!("no {CONFIG_FILE} found, using defaults"));
        return Ok((cwd, BruxConfig::default()));
      }
    },
  };
  let config = load_brux_config(&path)?;
  let base_dir = path.parent().map_or_else(|| PathBuf::from("."), Path::to_path_buf);
  Ok((base_dir, config))
}

fn init_tracing(verbose: bool) {
  let level = if verbose { Level::DEBUG } else { Level::WARN };
  tracing_subscriber::fmt().with_max_level(level).with_target(false).init();
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  match cli.command {
    Command::Build { config, out } => {
      ui::banner("build");
      let (base_dir, brux_config) = resolve_config(config)?;
      let out_dir = out.unwrap_or_else(|| base_dir.join(&brux_config.build.out_dir));
      let exported = build::run_build(&brux_config, &out_dir)?;
      ui::blank();
      for file in &exported {
        let size = ui::format_size(file.bytes);
        ui::ok(&format!("{:<12} {}  {size}", file.page.as_str(), file.path.display()));
      }
    }
    Command::Head { page, config, json } => {
      let (_, brux_config) = resolve_config(config)?;
      let mut head = HeadDocument::new();
      let patches =
        MetadataWriter::new(&brux_config.engine.site).apply(&mut head, page, page.title());
      let output = if json {
        serde_json::to_string_pretty(&patches).context("failed to serialize head patches")?
      } else {
        head.render_head().replace("><", ">\n<")
      };
      println!("{output}");
    }
    Command::Serve { config, port } => {
      ui::banner("serve");
      let (base_dir, brux_config) = resolve_config(config)?;
      let port = port.unwrap_or(brux_config.serve.port);
      serve::run_serve(&base_dir.join(&brux_config.build.out_dir), port).await?;
    }
    Command::Check { config } => {
      ui::banner("check");
      let (_, brux_config) = resolve_config(config)?;
      check::run_check(&brux_config);
    }
  }

  Ok(())
}
