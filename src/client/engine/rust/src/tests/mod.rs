/* src/client/engine/rust/src/tests/mod.rs */

use std::collections::HashSet;

use brux_head::{ElementKey, HeadDocument, HeadElement, HeadPatch};

use crate::analytics::{AnalyticsBootstrapper, Environment, IntegrationKind, SkipReason};
use crate::config::{IntegrationConfig, SiteConfig, SiteSection};
use crate::metadata::{LOCAL_BUSINESS_SLOT, MetadataWriter, PRIMARY_SLOT};
use crate::page::PageId;
use crate::registry::PageContentRegistry;
use crate::router::Viewport;
use crate::site::Site;
use crate::tracker::{NoCapabilities, Sdk, SdkCall, StaticCapabilities};

#[derive(Debug, Default)]
struct TestViewport {
  fragments: Vec<String>,
  scrolls: usize,
}

impl Viewport for TestViewport {
  fn set_fragment(&mut self, fragment: &str) {
    self.fragments.push(fragment.to_string());
  }

  fn scroll_to_top(&mut self) {
    self.scrolls += 1;
  }
}

fn json_ld_count(doc: &HeadDocument, slot: &str) -> usize {
  doc
    .elements()
    .filter(|el| matches!(el, HeadElement::JsonLd { slot: s, .. } if s == slot))
    .count()
}

fn script_count(doc: &HeadDocument) -> usize {
  doc.elements().filter(|el| matches!(el, HeadElement::Script { .. })).count()
}

fn mount(config: SiteConfig, host: &str, fragment: &str) -> (Site<TestViewport>, Vec<HeadPatch>) {
  Site::mount(
    config,
    Environment::new(host),
    fragment,
    None,
    TestViewport::default(),
    Box::new(NoCapabilities),
  )
}

#[test]
fn every_page_payload_is_complete() {
  let registry = PageContentRegistry::new(&SiteSection::default());
  for page in PageId::ALL {
    let payload = registry.lookup(page);
    assert!(!payload.description.is_empty());
    assert!(payload.canonical_url.ends_with(&format!("#{page}")));
  }
}

#[test]
fn metadata_apply_is_idempotent() {
  let writer = MetadataWriter::new(&SiteSection::default());
  let mut doc = HeadDocument::new();
  for page in PageId::ALL {
    writer.apply(&mut doc, page, page.title());
    let before = doc.clone();
    writer.apply(&mut doc, page, page.title());
    assert_eq!(doc.len(), before.len(), "{page}");
    for el in before.elements() {
      assert_eq!(doc.get(&el.key()), Some(el), "{page}");
    }

    let keys: Vec<ElementKey> = doc.elements().map(HeadElement::key).collect();
    let unique: HashSet<_> = keys.iter().collect();
    assert_eq!(unique.len(), keys.len(), "{page}");
  }
}

#[test]
fn contact_has_one_primary_and_one_local_business() {
  let writer = MetadataWriter::new(&SiteSection::default());
  let mut doc = HeadDocument::new();
  for _ in 0..2 {
    writer.apply(&mut doc, PageId::Contact, PageId::Contact.title());
    assert_eq!(json_ld_count(&doc, PRIMARY_SLOT), 1);
    assert_eq!(json_ld_count(&doc, LOCAL_BUSINESS_SLOT), 1);
  }
}

#[test]
fn leaving_contact_drops_local_business() {
  let writer = MetadataWriter::new(&SiteSection::default());
  let mut doc = HeadDocument::new();
  writer.apply(&mut doc, PageId::Contact, "c");
  let patches = writer.apply(&mut doc, PageId::Methodology, "m");
  assert_eq!(json_ld_count(&doc, LOCAL_BUSINESS_SLOT), 0);
  assert_eq!(json_ld_count(&doc, PRIMARY_SLOT), 1);
  assert!(patches.iter().any(|p| matches!(
    p,
    HeadPatch::Remove { selector } if selector.contains("local-business")
  )));
}

#[test]
fn invalid_fragment_keeps_current_page() {
  let (mut site, _) = mount(SiteConfig::default(), "localhost", "#about");
  let patches = site.on_fragment_change("#nonexistent");
  assert!(patches.is_empty());
  assert_eq!(site.current_page(), PageId::About);
  assert_eq!(site.viewport().scrolls, 0);
}

#[test]
fn track_contact_without_sdks() {
  let (site, _) = mount(SiteConfig::default(), "bruxstudio.it", "");
  let outcome = site.tracker().contact();
  assert!(outcome.delivered.is_empty());
  assert!(outcome.failed.is_empty());
}

#[test]
fn localhost_injects_no_scripts() {
  let mut config = SiteConfig::default();
  config.analytics.google_analytics = IntegrationConfig::with_id("G-4B7QZ12K9P");
  let (site, _) = mount(config, "localhost", "");
  assert_eq!(script_count(site.head()), 0);
  assert!(site.bootstrap_report().injected.is_empty());
}

#[test]
fn production_injects_only_configured_integrations() {
  let mut config = SiteConfig::default();
  config.analytics.google_analytics = IntegrationConfig::with_id("G-4B7QZ12K9P");
  config.analytics.tag_manager = IntegrationConfig::with_id("GTM-XXXXXXX");
  config.analytics.meta_pixel = IntegrationConfig::with_id("XXXXXXXXXXXXXXXXX");
  let (site, _) = mount(config, "bruxstudio.it", "");

  assert_eq!(script_count(site.head()), 1);
  let report = site.bootstrap_report();
  assert_eq!(report.injected, vec![IntegrationKind::GoogleAnalytics]);
  assert!(report.skipped.contains(&(IntegrationKind::TagManager, SkipReason::PlaceholderId)));
  assert!(report.skipped.contains(&(IntegrationKind::MetaPixel, SkipReason::PlaceholderId)));
  assert!(report.skipped.contains(&(IntegrationKind::Clarity, SkipReason::MissingId)));
}

#[test]
fn bootstrap_runs_once() {
  let mut config = SiteConfig::default();
  config.analytics.clarity = IntegrationConfig::with_id("k2m9x1");
  let mut boot = AnalyticsBootstrapper::new(&config);
  let env = Environment::new("bruxstudio.it");
  let mut doc = HeadDocument::new();

  let first = boot.bootstrap_once(&env, &mut doc, PageId::Home);
  assert_eq!(first.injected, vec![IntegrationKind::Clarity]);
  let second = boot.bootstrap_once(&env, &mut doc, PageId::Home);
  assert!(second.injected.is_empty() && second.patches.is_empty());
  assert_eq!(script_count(&doc), 1);
}

#[test]
fn navigation_keeps_tracking_scripts() {
  let mut config = SiteConfig::default();
  config.analytics.hotjar = IntegrationConfig::with_id("3456789");
  let (mut site, _) = mount(config, "bruxstudio.it", "");
  site.navigate(PageId::Contact);
  site.navigate(PageId::Portfolio);
  assert_eq!(script_count(site.head()), 1);
}

#[test]
fn initial_portfolio_fragment_end_to_end() {
  let (site, patches) = mount(SiteConfig::default(), "localhost", "#portfolio");
  assert_eq!(site.current_page(), PageId::Portfolio);
  assert_eq!(site.head().title(), Some("Portfolio - Brux Studio | Progetti Web Innovativi"));

  let canonicals: Vec<_> =
    site.head().elements().filter(|el| matches!(el, HeadElement::Canonical { .. })).collect();
  assert_eq!(canonicals.len(), 1);
  assert_eq!(canonicals[0].value(), Some("https://bruxstudio.it/#portfolio"));
  assert!(patches.contains(&HeadPatch::SetTitle {
    title: "Portfolio - Brux Studio | Progetti Web Innovativi".into()
  }));
}

#[test]
fn canonical_follows_configured_base() {
  let mut config = SiteConfig::default();
  config.site.base_url = "https://staging.bruxstudio.it/".into();
  let (site, _) = mount(config, "localhost", "#portfolio");
  let canonical = site.head().get(&ElementKey::Canonical).and_then(HeadElement::value);
  assert_eq!(canonical, Some("https://staging.bruxstudio.it/#portfolio"));
}

#[test]
fn navigate_updates_head_and_address_bar() {
  let (mut site, _) = mount(SiteConfig::default(), "localhost", "");
  let patches = site.navigate(PageId::Methodology);
  assert!(!patches.is_empty());
  assert_eq!(site.head().title(), Some(PageId::Methodology.title()));
  assert_eq!(site.viewport().fragments, vec!["#methodology".to_string()]);
  assert_eq!(site.viewport().scrolls, 1);

  // the hashchange echo of the write above is a no-op
  assert!(site.on_fragment_change("#methodology").is_empty());
  assert_eq!(site.viewport().scrolls, 1);
}

#[test]
fn page_tracker_binds_current_page() {
  use std::cell::RefCell;
  use std::rc::Rc;

  let pushed: Rc<RefCell<Vec<serde_json::Value>>> = Rc::default();
  let sink = Rc::clone(&pushed);
  let caps = StaticCapabilities::new().with(Sdk::DataLayer, move |args| {
    sink.borrow_mut().extend(args.iter().cloned());
    Ok(())
  });
  let (mut site, _) = Site::mount(
    SiteConfig::default(),
    Environment::new("bruxstudio.it"),
    "",
    None,
    TestViewport::default(),
    Box::new(caps),
  );
  site.navigate(PageId::Contact);
  site.tracker().cta("preventivo");

  let pushed = pushed.borrow();
  let last = pushed.last().cloned().unwrap_or_default();
  assert_eq!(last["event"], "CTAClick");
  assert_eq!(last["page"], "contact");
  assert_eq!(last["cta_name"], "preventivo");
}

fn recording_site(
  config: SiteConfig,
  fragment: &str,
) -> (Site<TestViewport>, std::rc::Rc<std::cell::RefCell<Vec<SdkCall>>>) {
  use std::cell::RefCell;
  use std::rc::Rc;

  let log: Rc<RefCell<Vec<SdkCall>>> = Rc::default();
  let mut caps = StaticCapabilities::new();
  for sdk in Sdk::ALL {
    let log = Rc::clone(&log);
    caps = caps.with(sdk, move |args| {
      log.borrow_mut().push(SdkCall { sdk, args: args.to_vec() });
      Ok(())
    });
  }
  let (site, _) = Site::mount(
    config,
    Environment::new("bruxstudio.it"),
    fragment,
    None,
    TestViewport::default(),
    Box::new(caps),
  );
  (site, log)
}

#[test]
fn fragment_change_rewrites_head_and_tracks_page_view() {
  let mut config = SiteConfig::default();
  config.analytics.google_analytics = IntegrationConfig::with_id("G-4B7QZ12K9P");
  let (mut site, log) = recording_site(config, "#home");
  assert_eq!(json_ld_count(site.head(), LOCAL_BUSINESS_SLOT), 1);
  log.borrow_mut().clear();

  let patches = site.on_fragment_change("#about");
  assert!(!patches.is_empty());
  assert_eq!(site.current_page(), PageId::About);
  assert_eq!(site.head().title(), Some(PageId::About.title()));
  let canonical = site.head().get(&ElementKey::Canonical).and_then(HeadElement::value);
  assert_eq!(canonical, Some("https://bruxstudio.it/#about"));
  assert_eq!(json_ld_count(site.head(), PRIMARY_SLOT), 1);
  assert_eq!(json_ld_count(site.head(), LOCAL_BUSINESS_SLOT), 0);
  assert!(patches.iter().any(|p| matches!(
    p,
    HeadPatch::Remove { selector } if selector.contains("local-business")
  )));
  // browser-driven changes leave the address bar alone
  assert!(site.viewport().fragments.is_empty());

  let log = log.borrow();
  let gtag: Vec<_> = log.iter().filter(|c| c.sdk == Sdk::Gtag).collect();
  assert_eq!(gtag.len(), 1);
  assert_eq!(gtag[0].args[0], "config");
  assert_eq!(gtag[0].args[1], "G-4B7QZ12K9P");
  assert_eq!(gtag[0].args[2]["page_location"], "https://bruxstudio.it/#about");
  assert!(log.iter().any(|c| c.sdk == Sdk::Fbq && c.args[1] == "PageView"));
  assert!(log.iter().any(|c| c.sdk == Sdk::Lintrk && c.args[1] == "PageView"));
}

#[test]
fn mount_tracks_initial_page_view() {
  let (_, log) = recording_site(SiteConfig::default(), "#methodology");
  let log = log.borrow();
  let content = log.iter().find(|c| c.sdk == Sdk::Fbq && c.args[1] == "ViewContent");
  assert_eq!(
    content.map(|c| c.args[2]["content_name"].clone()),
    Some(serde_json::json!("Brux Studio - methodology"))
  );
}

#[test]
fn mount_over_prerendered_shell_of_other_page() {
  let (site, patches) = Site::mount(
    SiteConfig::default(),
    Environment::new("bruxstudio.it"),
    "#portfolio",
    Some(PageId::Home),
    TestViewport::default(),
    Box::new(NoCapabilities),
  );
  assert_eq!(site.current_page(), PageId::Portfolio);
  assert_eq!(site.head().count(&ElementKey::Canonical), 1);
  assert_eq!(json_ld_count(site.head(), LOCAL_BUSINESS_SLOT), 0);
  assert_eq!(json_ld_count(site.head(), PRIMARY_SLOT), 1);

  // anything the home shell already ships is updated or swapped, never appended beside itself
  let mut shell = HeadDocument::new();
  let writer = MetadataWriter::new(&SiteSection::default());
  writer.apply(&mut shell, PageId::Home, PageId::Home.title());
  for (i, patch) in patches.iter().enumerate() {
    if let HeadPatch::Append { element } = patch {
      let key = element.key();
      let swapped = patches[..i]
        .iter()
        .any(|p| matches!(p, HeadPatch::Remove { selector } if *selector == key.selector()));
      assert!(!shell.contains(&key) || swapped, "{key:?} appended twice");
    }
  }
  assert!(!patches.iter().any(|p| matches!(
    p,
    HeadPatch::Append { element } if element.key() == ElementKey::Canonical
  )));
  assert!(patches.iter().any(|p| matches!(
    p,
    HeadPatch::Remove { selector } if selector.contains("local-business")
  )));
}

#[test]
fn mount_over_matching_shell_changes_nothing() {
  let (_, patches) = Site::mount(
    SiteConfig::default(),
    Environment::new("localhost"),
    "#contact",
    Some(PageId::Contact),
    TestViewport::default(),
    Box::new(NoCapabilities),
  );
  assert!(patches.is_empty(), "{patches:?}");
}
