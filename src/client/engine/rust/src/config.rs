/* src/client/engine/rust/src/config.rs */

//! Site configuration. Every field has a default reproducing the production
//! Brux Studio deployment, so `SiteConfig::default()` is a working site.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::page::PageId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
  #[serde(default)]
  pub site: SiteSection,
  #[serde(default)]
  pub analytics: AnalyticsSection,
  #[serde(default)]
  pub verification: VerificationSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
  pub base_url: String,
  pub name: String,
  pub author: String,
  pub email: String,
  pub locale: String,
  pub lang: String,
  pub dir: String,
  pub theme_color: String,
  pub og_image: String,
  pub og_image_alt: String,
  pub twitter_handle: String,
}

impl Default for SiteSection {
  fn default() -> Self {
    Self {
      base_url: "https://bruxstudio.it/".to_string(),
      name: "Brux Studio".to_string(),
      author: "Alessandro Bruini".to_string(),
      email: "alessandro@bruxstudio.it".to_string(),
      locale: "it_IT".to_string(),
      lang: "it".to_string(),
      dir: "ltr".to_string(),
      theme_color: "#030213".to_string(),
      og_image: "https://bruxstudio.it/og-image.jpg".to_string(),
      og_image_alt: "Brux Studio - Web Agency Carpi".to_string(),
      twitter_handle: "@brux_studio".to_string(),
    }
  }
}

impl SiteSection {
  /// Site origin without a trailing slash, e.g. `https://bruxstudio.it`.
  pub fn root_url(&self) -> &str {
    self.base_url.trim_end_matches('/')
  }

  /// Canonical address of a page: `<root>/#<page>`.
  pub fn page_url(&self, page: PageId) -> String {
    format!("{}/#{}", self.root_url(), page.as_str())
  }
}

/// One third-party integration. It loads only when `enabled` is true and a
/// non-placeholder `id` is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationConfig {
  pub id: Option<String>,
  pub enabled: bool,
}

impl Default for IntegrationConfig {
  fn default() -> Self {
    Self { id: None, enabled: true }
  }
}

impl IntegrationConfig {
  pub fn with_id(id: impl Into<String>) -> Self {
    Self { id: Some(id.into()), enabled: true }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsSection {
  pub google_analytics: IntegrationConfig,
  pub tag_manager: IntegrationConfig,
  pub meta_pixel: IntegrationConfig,
  pub clarity: IntegrationConfig,
  pub hotjar: IntegrationConfig,
  pub linkedin_insight: IntegrationConfig,
}

/// Search-engine ownership tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationSection {
  pub google: Option<String>,
  pub bing: Option<String>,
  pub yandex: Option<String>,
}

pub(crate) fn is_safe_id(id: &str) -> bool {
  id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl SiteConfig {
  /// Check the fields whose values end up inside URLs or inline scripts.
  pub fn validate(&self) -> Result<(), ConfigError> {
    let parsed = url::Url::parse(&self.site.base_url).map_err(|e| ConfigError::InvalidBaseUrl {
      url: self.site.base_url.clone(),
      reason: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
      return Err(ConfigError::UnsupportedScheme(self.site.base_url.clone()));
    }

    for (integration, cfg) in self.analytics.entries() {
      if let Some(id) = &cfg.id {
        if !is_safe_id(id) {
          return Err(ConfigError::InvalidIntegrationId { integration, id: id.clone() });
        }
      }
    }
    Ok(())
  }
}

impl AnalyticsSection {
  /// `(config key, entry)` pairs in bootstrap order.
  pub fn entries(&self) -> [(&'static str, &IntegrationConfig); 6] {
    [
      ("google_analytics", &self.google_analytics),
      ("tag_manager", &self.tag_manager),
      ("meta_pixel", &self.meta_pixel),
      ("clarity", &self.clarity),
      ("hotjar", &self.hotjar),
      ("linkedin_insight", &self.linkedin_insight),
    ]
  }
}
