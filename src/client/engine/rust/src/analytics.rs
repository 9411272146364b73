/* src/client/engine/rust/src/analytics.rs */

//! One-time injection of third-party tracking scripts.

use std::fmt;

use brux_head::{HeadDocument, HeadElement, HeadOp, HeadPatch, MetaSelector, Placement};
use serde::Serialize;

use crate::config::{IntegrationConfig, SiteConfig, is_safe_id};
use crate::page::PageId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationKind {
  GoogleAnalytics,
  TagManager,
  MetaPixel,
  Clarity,
  Hotjar,
  LinkedinInsight,
}

impl IntegrationKind {
  pub const ALL: [IntegrationKind; 6] = [
    Self::GoogleAnalytics,
    Self::TagManager,
    Self::MetaPixel,
    Self::Clarity,
    Self::Hotjar,
    Self::LinkedinInsight,
  ];

  pub fn label(self) -> &'static str {
    match self {
      Self::GoogleAnalytics => "Google Analytics",
      Self::TagManager => "Google Tag Manager",
      Self::MetaPixel => "Facebook Pixel",
      Self::Clarity => "Microsoft Clarity",
      Self::Hotjar => "Hotjar",
      Self::LinkedinInsight => "LinkedIn Insight",
    }
  }

  /// The identifier shipped in templates before anyone configured it.
  pub fn placeholder(self) -> &'static str {
    match self {
      Self::GoogleAnalytics => "G-XXXXXXXXXX",
      Self::TagManager => "GTM-XXXXXXX",
      Self::MetaPixel => "XXXXXXXXXXXXXXXXX",
      Self::Clarity => "XXXXXXXXXX",
      Self::Hotjar | Self::LinkedinInsight => "XXXXXXX",
    }
  }

  fn script_id(self) -> &'static str {
    match self {
      Self::GoogleAnalytics => "brux-ga4",
      Self::TagManager => "brux-gtm",
      Self::MetaPixel => "brux-meta-pixel",
      Self::Clarity => "brux-clarity",
      Self::Hotjar => "brux-hotjar",
      Self::LinkedinInsight => "brux-linkedin-insight",
    }
  }
}

impl fmt::Display for IntegrationKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

/// Why an integration did not load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
  Disabled,
  MissingId,
  PlaceholderId,
  InvalidId,
}

impl fmt::Display for SkipReason {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Disabled => "disabled in configuration",
      Self::MissingId => "no ID configured",
      Self::PlaceholderId => "placeholder ID detected",
      Self::InvalidId => "ID contains unsupported characters",
    })
  }
}

/// A configured (or not) third-party integration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingIntegration {
  pub kind: IntegrationKind,
  pub id: Option<String>,
  pub enabled: bool,
}

impl TrackingIntegration {
  pub fn new(kind: IntegrationKind, config: &IntegrationConfig) -> Self {
    Self { kind, id: config.id.clone(), enabled: config.enabled }
  }

  /// The usable ID, or why there is none.
  pub fn resolve_id(&self) -> Result<&str, SkipReason> {
    if !self.enabled {
      return Err(SkipReason::Disabled);
    }
    let id = self.id.as_deref().map(str::trim).filter(|id| !id.is_empty());
    let Some(id) = id else {
      return Err(SkipReason::MissingId);
    };
    if id == self.kind.placeholder() {
      return Err(SkipReason::PlaceholderId);
    }
    if !is_safe_id(id) {
      return Err(SkipReason::InvalidId);
    }
    Ok(id)
  }

  /// Elements this integration injects: exactly one script, plus an
  /// optional `<noscript>` fallback.
  ///
  /// `id` is spliced into script bodies and into `<noscript>` markup that is
  /// rendered unescaped, so it must be a value returned by
  /// [`resolve_id`](Self::resolve_id).
  pub fn elements(&self, id: &str, page: PageId, site_name: &str) -> Vec<HeadElement> {
    debug_assert!(is_safe_id(id), "unchecked integration id {id:?}");
    let script = |body: String| HeadElement::inline_script(self.kind.script_id(), body);
    let noscript = |html: String, placement: Placement| HeadElement::NoScript {
      id: self.kind.script_id().to_string(),
      html,
      placement,
    };
    match self.kind {
      IntegrationKind::GoogleAnalytics => vec![script(snippets::google_analytics(id))],
      IntegrationKind::TagManager => vec![
        script(snippets::tag_manager(id)),
        noscript(
          format!(
            r#"<iframe src="https://www.googletagmanager.com/ns.html?id={id}" height="0" width="0" style="display:none;visibility:hidden"></iframe>"#
          ),
          Placement::Body,
        ),
      ],
      IntegrationKind::MetaPixel => vec![
        script(snippets::meta_pixel(id, &format!("{site_name} - {page}"))),
        noscript(
          format!(
            r#"<img height="1" width="1" style="display:none" src="https://www.facebook.com/tr?id={id}&ev=PageView&noscript=1" alt="">"#
          ),
          Placement::Head,
        ),
      ],
      IntegrationKind::Clarity => vec![script(snippets::clarity(id))],
      IntegrationKind::Hotjar => vec![script(snippets::hotjar(id))],
      IntegrationKind::LinkedinInsight => vec![script(snippets::linkedin_insight(id))],
    }
  }
}

/// Where the page is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
  hostname: String,
}

impl Environment {
  pub fn new(hostname: impl Into<String>) -> Self {
    Self { hostname: hostname.into() }
  }

  pub fn hostname(&self) -> &str {
    &self.hostname
  }

  /// Anything but a local development host counts as production.
  pub fn is_production(&self) -> bool {
    !matches!(self.hostname.as_str(), "localhost" | "127.0.0.1")
  }
}

/// Outcome of [`AnalyticsBootstrapper::bootstrap_once`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BootstrapReport {
  pub injected: Vec<IntegrationKind>,
  pub skipped: Vec<(IntegrationKind, SkipReason)>,
  pub verification_tags: usize,
  #[serde(skip)]
  pub patches: Vec<HeadPatch>,
}

const VERIFICATION_PLACEHOLDER_PREFIX: &str = "your-";

/// Injects tracking integrations and search-engine verification tags, once
/// per page load and only on production hosts.
#[derive(Debug, Clone)]
pub struct AnalyticsBootstrapper {
  integrations: Vec<TrackingIntegration>,
  verification: Vec<(&'static str, String)>,
  site_name: String,
  done: bool,
}

impl AnalyticsBootstrapper {
  pub fn new(config: &SiteConfig) -> Self {
    let integrations = IntegrationKind::ALL
      .into_iter()
      .zip(config.analytics.entries())
      .map(|(kind, (_, cfg))| TrackingIntegration::new(kind, cfg))
      .collect();

    let v = &config.verification;
    let verification = [
      ("google-site-verification", &v.google),
      ("msvalidate.01", &v.bing),
      ("yandex-verification", &v.yandex),
    ]
    .into_iter()
    .filter_map(|(key, token)| {
      let token = token.as_deref()?.trim();
      (!token.is_empty() && !token.starts_with(VERIFICATION_PLACEHOLDER_PREFIX))
        .then(|| (key, token.to_string()))
    })
    .collect();

    Self { integrations, verification, site_name: config.site.name.clone(), done: false }
  }

  pub fn integrations(&self) -> &[TrackingIntegration] {
    &self.integrations
  }

  pub fn has_run(&self) -> bool {
    self.done
  }

  /// Inject every configured integration into `doc`. Runs at most once; a
  /// second call, or a call on a development host, changes nothing.
  pub fn bootstrap_once(
    &mut self,
    env: &Environment,
    doc: &mut HeadDocument,
    page: PageId,
  ) -> BootstrapReport {
    let mut report = BootstrapReport::default();
    if self.done {
      return report;
    }
    self.done = true;

    if !env.is_production() {
      tracing::info!(host = env.hostname(), "development host, skipping analytics");
      return report;
    }

    for integration in &self.integrations {
      let id = match integration.resolve_id() {
        Ok(id) => id,
        Err(reason) => {
          tracing::info!("{}: {reason}, skipping initialization", integration.kind);
          report.skipped.push((integration.kind, reason));
          continue;
        }
      };
      for element in integration.elements(id, page, &self.site_name) {
        report.patches.extend(doc.apply(HeadOp::Ensure(element)));
      }
      report.injected.push(integration.kind);
    }

    for (key, token) in &self.verification {
      let meta = HeadElement::meta(MetaSelector::Name, *key, token.clone());
      report.patches.extend(doc.apply(HeadOp::Upsert(meta)));
      report.verification_tags += 1;
    }

    tracing::debug!(
      injected = report.injected.len(),
      skipped = report.skipped.len(),
      "analytics bootstrap finished"
    );
    report
  }
}

mod snippets {
  //! Vendor loader snippets. IDs are validated to `[A-Za-z0-9_-]` before
  //! they reach these functions.

  pub(super) fn google_analytics(id: &str) -> String {
    format!(
      r#"(function(){{var s=document.createElement('script');s.async=true;s.src='https://www.googletagmanager.com/gtag/js?id={id}';document.head.appendChild(s);}})();
window.dataLayer=window.dataLayer||[];
function gtag(){{dataLayer.push(arguments);}}
gtag('js',new Date());
gtag('config','{id}',{{page_title:document.title,page_location:window.location.href,send_page_view:true,anonymize_ip:true,allow_google_signals:false,cookie_flags:'SameSite=None;Secure',custom_map:{{custom_parameter_1:'page_section',custom_parameter_2:'user_type'}}}});"#
    )
  }

  pub(super) fn tag_manager(id: &str) -> String {
    format!(
      r#"(function(w,d,s,l,i){{w[l]=w[l]||[];w[l].push({{'gtm.start':new Date().getTime(),event:'gtm.js'}});var f=d.getElementsByTagName(s)[0],j=d.createElement(s),dl=l!='dataLayer'?'&l='+l:'';j.async=true;j.src='https://www.googletagmanager.com/gtm.js?id='+i+dl;f.parentNode.insertBefore(j,f);}})(window,document,'script','dataLayer','{id}');"#
    )
  }

  pub(super) fn meta_pixel(id: &str, content_name: &str) -> String {
    let content_name = content_name.replace('\\', "\\\\").replace('\'', "\\'");
    format!(
      r#"!function(f,b,e,v,n,t,s){{if(f.fbq)return;n=f.fbq=function(){{n.callMethod?n.callMethod.apply(n,arguments):n.queue.push(arguments)}};if(!f._fbq)f._fbq=n;n.push=n;n.loaded=!0;n.version='2.0';n.queue=[];t=b.createElement(e);t.async=!0;t.src=v;s=b.getElementsByTagName(e)[0];s.parentNode.insertBefore(t,s)}}(window,document,'script','https://connect.facebook.net/en_US/fbevents.js');
fbq('init','{id}');
fbq('track','PageView');
fbq('track','ViewContent',{{content_category:'Web Development',content_name:'{content_name}',content_type:'website'}});"#
    )
  }

  pub(super) fn clarity(id: &str) -> String {
    format!(
      r#"(function(c,l,a,r,i,t,y){{c[a]=c[a]||function(){{(c[a].q=c[a].q||[]).push(arguments)}};t=l.createElement(r);t.async=1;t.src="https://www.clarity.ms/tag/"+i;y=l.getElementsByTagName(r)[0];y.parentNode.insertBefore(t,y);}})(window,document,"clarity","script","{id}");"#
    )
  }

  pub(super) fn hotjar(id: &str) -> String {
    format!(
      r#"(function(h,o,t,j,a,r){{h.hj=h.hj||function(){{(h.hj.q=h.hj.q||[]).push(arguments)}};h._hjSettings={{hjid:'{id}',hjsv:6}};a=o.getElementsByTagName('head')[0];r=o.createElement('script');r.async=1;r.src=t+h._hjSettings.hjid+j+h._hjSettings.hjsv;a.appendChild(r);}})(window,document,'https://static.hotjar.com/c/hotjar-','.js?sv=');"#
    )
  }

  pub(super) fn linkedin_insight(id: &str) -> String {
    format!(
      r#"window._linkedin_partner_id="{id}";
window._linkedin_data_partner_ids=window._linkedin_data_partner_ids||[];
window._linkedin_data_partner_ids.push(window._linkedin_partner_id);
(function(l){{if(!l){{window.lintrk=function(a,b){{window.lintrk.q.push([a,b])}};window.lintrk.q=[]}}var s=document.getElementsByTagName("script")[0];var b=document.createElement("script");b.type="text/javascript";b.async=true;b.src="https://snap.licdn.com/li.js";s.parentNode.insertBefore(b,s);}})(window.lintrk);"#
    )
  }
}
