/* src/client/engine/rust/src/metadata.rs */

//! Per-page head metadata: meta/OG/Twitter tags, canonical link,
//! structured data and resource hints.

use brux_head::{ElementKey, HeadDocument, HeadElement, HeadOp, HeadPatch, MetaSelector};
use serde::Serialize;

use crate::config::SiteSection;
use crate::page::PageId;
use crate::registry::{PageContentRegistry, SeoPayload};

/// JSON-LD slot holding the page's own schema.
pub const PRIMARY_SLOT: &str = "primary";
/// JSON-LD slot holding the optional local-business schema.
pub const LOCAL_BUSINESS_SLOT: &str = "local-business";

/// One `<meta>` element to upsert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaTagDescriptor {
  pub selector: MetaSelector,
  pub key: &'static str,
  pub value: String,
}

impl MetaTagDescriptor {
  fn name(key: &'static str, value: impl Into<String>) -> Self {
    Self { selector: MetaSelector::Name, key, value: value.into() }
  }

  fn http_equiv(key: &'static str, value: impl Into<String>) -> Self {
    Self { selector: MetaSelector::HttpEquiv, key, value: value.into() }
  }

  fn property(key: &'static str, value: impl Into<String>) -> Self {
    Self { selector: MetaSelector::Property, key, value: value.into() }
  }

  pub fn to_element(&self) -> HeadElement {
    HeadElement::meta(self.selector, self.key, self.value.clone())
  }
}

/// Resource hints, identical on every page.
const RESOURCE_HINTS: &[(&str, &str, Option<&str>)] = &[
  ("preconnect", "https://fonts.googleapis.com", None),
  ("preconnect", "https://fonts.gstatic.com", Some("anonymous")),
  ("dns-prefetch", "https://www.google-analytics.com", None),
  ("dns-prefetch", "https://www.googletagmanager.com", None),
];

/// Builds the desired head for a page and folds it into a [`HeadDocument`].
#[derive(Debug, Clone)]
pub struct MetadataWriter {
  site: SiteSection,
  registry: PageContentRegistry,
}

impl MetadataWriter {
  pub fn new(site: &SiteSection) -> Self {
    Self { site: site.clone(), registry: PageContentRegistry::new(site) }
  }

  pub fn registry(&self) -> &PageContentRegistry {
    &self.registry
  }

  /// The full ordered descriptor set for `page`: page-invariant tags mixed
  /// with those derived from the registry payload.
  pub fn descriptors(&self, page: PageId, title: &str) -> Vec<MetaTagDescriptor> {
    let site = &self.site;
    let payload = self.registry.lookup(page);
    let mut tags = vec![
      MetaTagDescriptor::name("description", payload.description.clone()),
      MetaTagDescriptor::name("keywords", payload.keywords_joined()),
      MetaTagDescriptor::name("author", site.author.clone()),
      MetaTagDescriptor::name("robots", "index, follow, max-image-preview:large"),
      MetaTagDescriptor::name("googlebot", "index, follow"),
      MetaTagDescriptor::name("viewport", "width=device-width, initial-scale=1.0"),
      MetaTagDescriptor::name("theme-color", site.theme_color.clone()),
      MetaTagDescriptor::name("msapplication-TileColor", site.theme_color.clone()),
      MetaTagDescriptor::name("application-name", site.name.clone()),
      MetaTagDescriptor::name("apple-mobile-web-app-title", site.name.clone()),
      MetaTagDescriptor::name("apple-mobile-web-app-capable", "yes"),
      MetaTagDescriptor::name("apple-mobile-web-app-status-bar-style", "default"),
      MetaTagDescriptor::name("format-detection", "telephone=no"),
      MetaTagDescriptor::name("mobile-web-app-capable", "yes"),
      MetaTagDescriptor::name("msapplication-config", "/browserconfig.xml"),
      MetaTagDescriptor::name("msapplication-TileImage", "/ms-icon-144x144.png"),
      MetaTagDescriptor::http_equiv("content-language", site.lang.clone()),
      MetaTagDescriptor::http_equiv("X-UA-Compatible", "IE=edge"),
    ];
    tags.extend(self.open_graph(payload, title));
    tags.extend(self.twitter(payload, title));
    tags
  }

  fn open_graph(&self, payload: &SeoPayload, title: &str) -> Vec<MetaTagDescriptor> {
    let site = &self.site;
    vec![
      MetaTagDescriptor::property("og:title", title),
      MetaTagDescriptor::property("og:description", payload.description.clone()),
      MetaTagDescriptor::property("og:type", payload.og_type.as_str()),
      MetaTagDescriptor::property("og:url", payload.canonical_url.clone()),
      MetaTagDescriptor::property("og:site_name", site.name.clone()),
      MetaTagDescriptor::property("og:locale", site.locale.clone()),
      MetaTagDescriptor::property("og:image", site.og_image.clone()),
      MetaTagDescriptor::property("og:image:width", "1200"),
      MetaTagDescriptor::property("og:image:height", "630"),
      MetaTagDescriptor::property("og:image:alt", site.og_image_alt.clone()),
    ]
  }

  fn twitter(&self, payload: &SeoPayload, title: &str) -> Vec<MetaTagDescriptor> {
    let site = &self.site;
    vec![
      MetaTagDescriptor::name("twitter:card", "summary_large_image"),
      MetaTagDescriptor::name("twitter:title", title),
      MetaTagDescriptor::name("twitter:description", payload.description.clone()),
      MetaTagDescriptor::name("twitter:image", site.og_image.clone()),
      MetaTagDescriptor::name("twitter:image:alt", site.og_image_alt.clone()),
      MetaTagDescriptor::name("twitter:site", site.twitter_handle.clone()),
      MetaTagDescriptor::name("twitter:creator", site.twitter_handle.clone()),
    ]
  }

  /// Desired state for `page` as head ops. Applying the plan to any document
  /// converges it to the same managed content.
  pub fn plan(&self, page: PageId, title: &str) -> Vec<HeadOp> {
    let payload = self.registry.lookup(page);
    let mut ops = vec![HeadOp::SetTitle(title.to_string())];

    ops.extend(self.descriptors(page, title).iter().map(|d| HeadOp::Upsert(d.to_element())));
    ops.push(HeadOp::Upsert(HeadElement::canonical(payload.canonical_url.clone())));

    ops.push(HeadOp::Replace(HeadElement::json_ld(PRIMARY_SLOT, &payload.structured_data)));
    ops.push(match &payload.secondary_structured_data {
      Some(data) => HeadOp::Replace(HeadElement::json_ld(LOCAL_BUSINESS_SLOT, data)),
      None => HeadOp::Remove(ElementKey::json_ld(LOCAL_BUSINESS_SLOT)),
    });

    ops.push(HeadOp::SetRootAttr { name: "lang".into(), value: self.site.lang.clone() });
    ops.push(HeadOp::SetRootAttr { name: "dir".into(), value: self.site.dir.clone() });

    for (rel, href, crossorigin) in RESOURCE_HINTS {
      ops.push(HeadOp::Ensure(HeadElement::Link {
        rel: (*rel).to_string(),
        href: (*href).to_string(),
        crossorigin: crossorigin.map(str::to_string),
      }));
    }
    ops
  }

  /// Bring `doc` in line with `page`, returning the DOM patches required.
  pub fn apply(&self, doc: &mut HeadDocument, page: PageId, title: &str) -> Vec<HeadPatch> {
    let patches = doc.apply_all(self.plan(page, title));
    tracing::debug!(page = %page, patches = patches.len(), "head metadata applied");
    patches
  }
}
