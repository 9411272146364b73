/* src/client/engine/rust/src/site.rs */

use brux_head::{HeadDocument, HeadPatch};
use serde_json::{Map, Value};

use crate::analytics::{
  AnalyticsBootstrapper, BootstrapReport, Environment, IntegrationKind, TrackingIntegration,
};
use crate::config::SiteConfig;
use crate::metadata::MetadataWriter;
use crate::page::PageId;
use crate::router::{NavigationState, Transition, ViewRouter, Viewport};
use crate::tracker::{CapabilityRegistry, DispatchOutcome, EventTracker};

/// Application state for one page load. Owns the head model and the router,
/// so every head mutation and every page change goes through here.
#[derive(Debug)]
pub struct Site<V: Viewport> {
  config: SiteConfig,
  writer: MetadataWriter,
  analytics: AnalyticsBootstrapper,
  tracker: EventTracker,
  router: ViewRouter,
  head: HeadDocument,
  viewport: V,
  env: Environment,
  bootstrap: BootstrapReport,
}

impl<V: Viewport> Site<V> {
  /// Start a page load: resolve the initial page from `fragment`, write its
  /// metadata, run the analytics bootstrap and record the first page view.
  ///
  /// `prerendered` is the page whose static shell the document was served
  /// from, if any. Its head is taken as the starting state, so the returned
  /// patches replace and remove what the shell ships instead of appending
  /// duplicates next to it.
  pub fn mount(
    config: SiteConfig,
    env: Environment,
    fragment: &str,
    prerendered: Option<PageId>,
    viewport: V,
    capabilities: Box<dyn CapabilityRegistry>,
  ) -> (Self, Vec<HeadPatch>) {
    let writer = MetadataWriter::new(&config.site);
    let analytics = AnalyticsBootstrapper::new(&config);
    let mut tracker = EventTracker::new(&config.site, capabilities);
    let ga =
      TrackingIntegration::new(IntegrationKind::GoogleAnalytics, &config.analytics.google_analytics);
    if let Ok(id) = ga.resolve_id() {
      tracker = tracker.with_measurement_id(id);
    }
    let mut site = Self {
      config,
      writer,
      analytics,
      tracker,
      router: ViewRouter::from_fragment(fragment),
      head: HeadDocument::new(),
      viewport,
      env,
      bootstrap: BootstrapReport::default(),
    };

    if let Some(shell) = prerendered {
      site.writer.apply(&mut site.head, shell, shell.title());
    }
    let page = site.router.current();
    let mut patches = site.writer.apply(&mut site.head, page, page.title());
    let report = site.analytics.bootstrap_once(&site.env, &mut site.head, page);
    patches.extend(report.patches.iter().cloned());
    site.bootstrap = report;
    site.tracker.track_page_view(page);

    tracing::info!(
      page = %page,
      host = site.env.hostname(),
      shell = ?prerendered,
      integrations = site.bootstrap.injected.len(),
      "site mounted"
    );
    (site, patches)
  }

  /// Fragment change from the browser. Returns no patches when the fragment
  /// names no page or the page is already shown.
  pub fn on_fragment_change(&mut self, fragment: &str) -> Vec<HeadPatch> {
    match self.router.on_fragment_change(fragment, &mut self.viewport) {
      Some(transition) => self.enter(transition),
      None => vec![],
    }
  }

  /// Programmatic navigation from a link or button.
  pub fn navigate(&mut self, page: PageId) -> Vec<HeadPatch> {
    let transition = self.router.navigate(page, &mut self.viewport);
    self.enter(transition)
  }

  fn enter(&mut self, transition: Transition) -> Vec<HeadPatch> {
    let page = transition.to;
    let patches = self.writer.apply(&mut self.head, page, page.title());
    if transition.from != transition.to {
      self.tracker.track_page_view(page);
    }
    patches
  }

  pub fn current_page(&self) -> PageId {
    self.router.current()
  }

  pub fn navigation(&self) -> NavigationState {
    self.router.state()
  }

  pub fn head(&self) -> &HeadDocument {
    &self.head
  }

  pub fn config(&self) -> &SiteConfig {
    &self.config
  }

  pub fn viewport(&self) -> &V {
    &self.viewport
  }

  /// What the analytics bootstrap did at mount.
  pub fn bootstrap_report(&self) -> &BootstrapReport {
    &self.bootstrap
  }

  /// Event reporting bound to the page currently shown.
  pub fn tracker(&self) -> PageTracker<'_> {
    PageTracker { tracker: &self.tracker, page: self.router.current() }
  }
}

/// Handle UI components use to report interactions.
#[derive(Debug, Clone, Copy)]
pub struct PageTracker<'a> {
  tracker: &'a EventTracker,
  page: PageId,
}

impl PageTracker<'_> {
  pub fn page(&self) -> PageId {
    self.page
  }

  pub fn track_event(&self, name: &str, params: &Map<String, Value>) -> DispatchOutcome {
    self.tracker.track_event(self.page, name, params)
  }

  pub fn contact(&self) -> DispatchOutcome {
    self.tracker.track_contact(self.page)
  }

  pub fn portfolio(&self) -> DispatchOutcome {
    self.tracker.track_portfolio(self.page)
  }

  pub fn methodology(&self) -> DispatchOutcome {
    self.tracker.track_methodology(self.page)
  }

  pub fn cta(&self, name: &str) -> DispatchOutcome {
    self.tracker.track_cta(self.page, name)
  }
}
