/* src/client/engine/rust/src/tracker.rs */

//! Best-effort fan-out of tracking events to whichever third-party SDKs are
//! loaded at call time.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::config::SiteSection;
use crate::error::SdkError;
use crate::page::PageId;

/// A third-party SDK entry point living on the page's global scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sdk {
  Gtag,
  Fbq,
  DataLayer,
  Lintrk,
}

impl Sdk {
  pub const ALL: [Sdk; 4] = [Self::Gtag, Self::Fbq, Self::DataLayer, Self::Lintrk];

  /// Name of the global the SDK installs (`window.<name>`).
  pub fn global_name(self) -> &'static str {
    match self {
      Self::Gtag => "gtag",
      Self::Fbq => "fbq",
      Self::DataLayer => "dataLayer",
      Self::Lintrk => "lintrk",
    }
  }
}

impl fmt::Display for Sdk {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.global_name())
  }
}

/// One invocation of an SDK. For [`Sdk::DataLayer`] the single argument is
/// the object to push.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SdkCall {
  pub sdk: Sdk,
  pub args: Vec<Value>,
}

impl SdkCall {
  fn new(sdk: Sdk, args: Vec<Value>) -> Self {
    Self { sdk, args }
  }
}

/// A callable SDK entry point.
pub trait SdkHandle {
  fn invoke(&self, args: &[Value]) -> Result<(), SdkError>;
}

impl<F> SdkHandle for F
where
  F: Fn(&[Value]) -> Result<(), SdkError>,
{
  fn invoke(&self, args: &[Value]) -> Result<(), SdkError> {
    self(args)
  }
}

/// Resolves SDKs at call time. SDKs load asynchronously, so a registry must
/// not cache absence.
pub trait CapabilityRegistry {
  fn resolve(&self, sdk: Sdk) -> Option<Box<dyn SdkHandle + '_>>;
}

/// Registry where nothing is loaded (development hosts, prerendering).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCapabilities;

impl CapabilityRegistry for NoCapabilities {
  fn resolve(&self, _sdk: Sdk) -> Option<Box<dyn SdkHandle + '_>> {
    None
  }
}

type SdkFn = Box<dyn Fn(&[Value]) -> Result<(), SdkError>>;

/// Registry backed by a fixed set of in-process handlers.
#[derive(Default)]
pub struct StaticCapabilities {
  handlers: HashMap<Sdk, SdkFn>,
}

impl StaticCapabilities {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with(
    mut self,
    sdk: Sdk,
    handler: impl Fn(&[Value]) -> Result<(), SdkError> + 'static,
  ) -> Self {
    self.handlers.insert(sdk, Box::new(handler));
    self
  }
}

impl fmt::Debug for StaticCapabilities {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("StaticCapabilities").field("sdks", &self.handlers.keys()).finish()
  }
}

impl CapabilityRegistry for StaticCapabilities {
  fn resolve(&self, sdk: Sdk) -> Option<Box<dyn SdkHandle + '_>> {
    let handler = self.handlers.get(&sdk)?;
    Some(Box::new(&**handler))
  }
}

/// What happened to each call of a fan-out.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DispatchOutcome {
  pub delivered: Vec<Sdk>,
  pub failed: Vec<(Sdk, String)>,
  pub absent: Vec<Sdk>,
}

impl DispatchOutcome {
  pub fn is_empty(&self) -> bool {
    self.delivered.is_empty() && self.failed.is_empty() && self.absent.is_empty()
  }
}

/// Builds SDK calls for tracking events and dispatches them. Holds no
/// current-page state: callers pass the page in.
pub struct EventTracker {
  site: SiteSection,
  measurement_id: Option<String>,
  capabilities: Box<dyn CapabilityRegistry>,
}

impl fmt::Debug for EventTracker {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("EventTracker").field("site", &self.site.name).finish_non_exhaustive()
  }
}

fn engagement() -> Map<String, Value> {
  let mut params = Map::new();
  params.insert("event_category".into(), json!("engagement"));
  params
}

impl EventTracker {
  pub fn new(site: &SiteSection, capabilities: Box<dyn CapabilityRegistry>) -> Self {
    Self { site: site.clone(), measurement_id: None, capabilities }
  }

  /// Analytics property the page-view `config` call is addressed to. Without
  /// one the analytics page view is left out.
  pub fn with_measurement_id(mut self, id: impl Into<String>) -> Self {
    self.measurement_id = Some(id.into());
    self
  }

  /// Calls a custom event expands to. Caller parameters win over the page
  /// defaults, matching object-spread order.
  pub fn calls_for_event(&self, page: PageId, name: &str, params: &Map<String, Value>) -> Vec<SdkCall> {
    let mut gtag_params = Map::new();
    gtag_params.insert("custom_parameter_1".into(), json!(page.as_str()));
    gtag_params.extend(params.clone());

    let mut push = Map::new();
    push.insert("event".into(), json!(name));
    push.insert("page".into(), json!(page.as_str()));
    push.extend(params.clone());

    vec![
      SdkCall::new(Sdk::Gtag, vec![json!("event"), json!(name), Value::Object(gtag_params)]),
      SdkCall::new(Sdk::Fbq, vec![json!("track"), json!(name), Value::Object(params.clone())]),
      SdkCall::new(Sdk::DataLayer, vec![Value::Object(push)]),
      SdkCall::new(Sdk::Lintrk, vec![json!("track"), json!({ "event": name })]),
    ]
  }

  /// Calls a page view expands to.
  pub fn calls_for_page_view(&self, page: PageId) -> Vec<SdkCall> {
    let mut calls = Vec::with_capacity(4);
    if let Some(id) = &self.measurement_id {
      calls.push(SdkCall::new(
        Sdk::Gtag,
        vec![
          json!("config"),
          json!(id),
          json!({ "page_title": page.title(), "page_location": self.site.page_url(page) }),
        ],
      ));
    }
    calls.push(SdkCall::new(Sdk::Fbq, vec![json!("track"), json!("PageView")]));
    calls.push(SdkCall::new(
      Sdk::Fbq,
      vec![
        json!("track"),
        json!("ViewContent"),
        json!({
          "content_category": "Web Development",
          "content_name": format!("{} - {page}", self.site.name),
          "content_type": "website",
        }),
      ],
    ));
    calls.push(SdkCall::new(Sdk::Lintrk, vec![json!("track"), json!("PageView")]));
    calls
  }

  /// Run every call against the registry. A failing or missing SDK never
  /// stops the remaining calls.
  pub fn dispatch(&self, calls: &[SdkCall]) -> DispatchOutcome {
    let mut outcome = DispatchOutcome::default();
    for call in calls {
      let Some(handle) = self.capabilities.resolve(call.sdk) else {
        if !outcome.absent.contains(&call.sdk) {
          outcome.absent.push(call.sdk);
        }
        continue;
      };
      match handle.invoke(&call.args) {
        Ok(()) => outcome.delivered.push(call.sdk),
        Err(e) => {
          tracing::warn!(sdk = %call.sdk, "tracking call failed: {e}");
          outcome.failed.push((call.sdk, e.to_string()));
        }
      }
    }
    outcome
  }

  pub fn track_event(&self, page: PageId, name: &str, params: &Map<String, Value>) -> DispatchOutcome {
    tracing::debug!(page = %page, event = name, "tracking event");
    self.dispatch(&self.calls_for_event(page, name, params))
  }

  pub fn track_page_view(&self, page: PageId) -> DispatchOutcome {
    tracing::debug!(page = %page, "tracking page view");
    self.dispatch(&self.calls_for_page_view(page))
  }

  pub fn track_contact(&self, page: PageId) -> DispatchOutcome {
    self.track_event(page, "Contact", &engagement())
  }

  pub fn track_portfolio(&self, page: PageId) -> DispatchOutcome {
    self.track_event(page, "PortfolioView", &engagement())
  }

  pub fn track_methodology(&self, page: PageId) -> DispatchOutcome {
    self.track_event(page, "MethodologyView", &engagement())
  }

  pub fn track_cta(&self, page: PageId, cta_name: &str) -> DispatchOutcome {
    let mut params = Map::new();
    params.insert("event_category".into(), json!("conversion"));
    params.insert("cta_name".into(), json!(cta_name));
    self.track_event(page, "CTAClick", &params)
  }
}
