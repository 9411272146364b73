/* src/cli/core/src/check.rs */

//! Report what a production page load would do with the current config.

use brux_engine::{AnalyticsBootstrapper, Environment, PageId, SkipReason};
use brux_head::HeadDocument;

use crate::config::BruxConfig;
use crate::ui;

/// One line of the check report.
#[derive(Debug, PartialEq, Eq)]
pub enum IntegrationStatus {
  Loads(&'static str),
  /// Configured, but the base URL points at a development host where
  /// nothing is injected.
  DevelopmentHost(&'static str),
  Skipped(&'static str, SkipReason),
}

/// Dry-run the analytics bootstrap against the configured production host.
pub fn integration_statuses(config: &BruxConfig) -> (Vec<IntegrationStatus>, usize) {
  let host = production_host(&config.engine.site.base_url);
  let mut bootstrapper = AnalyticsBootstrapper::new(&config.engine);
  let mut doc = HeadDocument::new();
  let report = bootstrapper.bootstrap_once(&Environment::new(host), &mut doc, PageId::Home);

  let statuses = bootstrapper
    .integrations()
    .iter()
    .map(|integration| {
      let label = integration.kind.label();
      if report.injected.contains(&integration.kind) {
        return IntegrationStatus::Loads(label);
      }
      match integration.resolve_id() {
        Ok(_) => IntegrationStatus::DevelopmentHost(label),
        Err(reason) => IntegrationStatus::Skipped(label, reason),
      }
    })
    .collect();
  (statuses, report.verification_tags)
}

fn production_host(base_url: &str) -> String {
  url_host(base_url).unwrap_or_else(|| "production".to_string())
}

fn url_host(base_url: &str) -> Option<String> {
  let parsed = url::Url::parse(base_url).ok()?;
  parsed.host_str().map(str::to_string)
}

pub fn run_check(config: &BruxConfig) {
  ui::ok(&format!("site {} ({})", config.engine.site.name, config.engine.site.base_url));
  let (statuses, verification) = integration_statuses(config);
  let host = production_host(&config.engine.site.base_url);
  for status in &statuses {
    match status {
      IntegrationStatus::Loads(name) => ui::ok(&format!("{name}: loads in production")),
      IntegrationStatus::DevelopmentHost(name) => {
        ui::warn(&format!("{name}: configured, but {host} is a development host"));
      }
      IntegrationStatus::Skipped(name, reason) => ui::warn(&format!("{name}: {reason}")),
    }
  }
  ui::detail(&format!("{verification} search-engine verification tag(s)"));
}
