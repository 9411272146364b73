/* src/client/head/rust/src/element.rs */

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::escape::ascii_escape_json;
use crate::helpers::{escape_html, escape_script_body, escape_selector_value};

/// Which attribute identifies a `<meta>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetaSelector {
  Name,
  HttpEquiv,
  Property,
}

impl MetaSelector {
  pub fn attr(self) -> &'static str {
    match self {
      Self::Name => "name",
      Self::HttpEquiv => "http-equiv",
      Self::Property => "property",
    }
  }
}

/// Where an element lives. Body elements are inserted as the first children
/// of `<body>` (tag-manager `<noscript>` fallbacks).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
  #[default]
  Head,
  Body,
}

/// One managed element of the document head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "kebab-case")]
pub enum HeadElement {
  Meta {
    selector: MetaSelector,
    key: String,
    content: String,
  },
  /// `<link rel="canonical">`, keyed by its rel alone.
  Canonical {
    href: String,
  },
  /// Resource hints and other links, keyed by `(rel, href)`.
  Link {
    rel: String,
    href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    crossorigin: Option<String>,
  },
  /// `<script type="application/ld+json">`. The JSON text is stored
  /// pre-serialized so equality is textual.
  JsonLd {
    slot: String,
    json: String,
  },
  Script {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    body: Option<String>,
    #[serde(default, rename = "async")]
    is_async: bool,
  },
  NoScript {
    id: String,
    html: String,
    #[serde(default)]
    placement: Placement,
  },
}

/// Identity of a [`HeadElement`]. Two elements with the same key are the
/// same DOM node as far as the model is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ElementKey {
  Meta { selector: MetaSelector, key: String },
  Canonical,
  Link { rel: String, href: String },
  JsonLd { slot: String },
  Script { id: String },
  NoScript { id: String },
}

impl ElementKey {
  pub fn meta(selector: MetaSelector, key: impl Into<String>) -> Self {
    Self::Meta { selector, key: key.into() }
  }

  pub fn json_ld(slot: impl Into<String>) -> Self {
    Self::JsonLd { slot: slot.into() }
  }

  /// CSS selector matching the rendered element, for DOM glue code.
  pub fn selector(&self) -> String {
    match self {
      Self::Meta { selector, key } => {
        format!(r#"meta[{}="{}"]"#, selector.attr(), escape_selector_value(key))
      }
      Self::Canonical => r#"link[rel="canonical"]"#.to_string(),
      Self::Link { rel, href } => format!(
        r#"link[rel="{}"][href="{}"]"#,
        escape_selector_value(rel),
        escape_selector_value(href)
      ),
      Self::JsonLd { slot } => format!(
        r#"script[type="application/ld+json"][data-brux-slot="{}"]"#,
        escape_selector_value(slot)
      ),
      Self::Script { id } => format!(r#"script[data-brux-id="{}"]"#, escape_selector_value(id)),
      Self::NoScript { id } => format!(r#"noscript[data-brux-id="{}"]"#, escape_selector_value(id)),
    }
  }
}

impl HeadElement {
  pub fn meta(selector: MetaSelector, key: impl Into<String>, content: impl Into<String>) -> Self {
    Self::Meta { selector, key: key.into(), content: content.into() }
  }

  pub fn canonical(href: impl Into<String>) -> Self {
    Self::Canonical { href: href.into() }
  }

  pub fn link(rel: impl Into<String>, href: impl Into<String>) -> Self {
    Self::Link { rel: rel.into(), href: href.into(), crossorigin: None }
  }

  /// Serialize `data` into a JSON-LD element. Non-ASCII text is escaped so
  /// the block survives any document encoding.
  pub fn json_ld(slot: impl Into<String>, data: &Value) -> Self {
    Self::JsonLd { slot: slot.into(), json: ascii_escape_json(&data.to_string()) }
  }

  pub fn inline_script(id: impl Into<String>, body: impl Into<String>) -> Self {
    Self::Script { id: id.into(), src: None, body: Some(body.into()), is_async: false }
  }

  pub fn key(&self) -> ElementKey {
    match self {
      Self::Meta { selector, key, .. } => ElementKey::Meta { selector: *selector, key: key.clone() },
      Self::Canonical { .. } => ElementKey::Canonical,
      Self::Link { rel, href, .. } => ElementKey::Link { rel: rel.clone(), href: href.clone() },
      Self::JsonLd { slot, .. } => ElementKey::JsonLd { slot: slot.clone() },
      Self::Script { id, .. } => ElementKey::Script { id: id.clone() },
      Self::NoScript { id, .. } => ElementKey::NoScript { id: id.clone() },
    }
  }

  pub fn placement(&self) -> Placement {
    match self {
      Self::NoScript { placement, .. } => *placement,
      _ => Placement::Head,
    }
  }

  /// The value a DOM update would write: `content` for meta, `href` for
  /// links, text for scripts.
  pub fn value(&self) -> Option<&str> {
    match self {
      Self::Meta { content, .. } => Some(content),
      Self::Canonical { href } | Self::Link { href, .. } => Some(href),
      Self::JsonLd { json, .. } => Some(json),
      Self::Script { body, src, .. } => body.as_deref().or(src.as_deref()),
      Self::NoScript { html, .. } => Some(html),
    }
  }

  pub fn render(&self) -> String {
    match self {
      Self::Meta { selector, key, content } => format!(
        r#"<meta {}="{}" content="{}">"#,
        selector.attr(),
        escape_html(key),
        escape_html(content)
      ),
      Self::Canonical { href } => format!(r#"<link rel="canonical" href="{}">"#, escape_html(href)),
      Self::Link { rel, href, crossorigin } => {
        let mut out = format!(r#"<link rel="{}" href="{}""#, escape_html(rel), escape_html(href));
        if let Some(co) = crossorigin {
          out.push_str(&format!(r#" crossorigin="{}""#, escape_html(co)));
        }
        out.push('>');
        out
      }
      Self::JsonLd { slot, json } => format!(
        r#"<script type="application/ld+json" data-brux-slot="{}">{}</script>"#,
        escape_html(slot),
        escape_script_body(json)
      ),
      Self::Script { id, src, body, is_async } => {
        let mut out = format!(r#"<script data-brux-id="{}""#, escape_html(id));
        if let Some(src) = src {
          out.push_str(&format!(r#" src="{}""#, escape_html(src)));
        }
        if *is_async {
          out.push_str(" async");
        }
        out.push('>');
        if let Some(body) = body {
          out.push_str(&escape_script_body(body));
        }
        out.push_str("</script>");
        out
      }
      // Raw markup: callers only build it from validated integration ids.
      Self::NoScript { id, html, .. } => {
        format!(r#"<noscript data-brux-id="{}">{html}</noscript>"#, escape_html(id))
      }
    }
  }
}
