/* src/client/engine/rust/src/render.rs */

//! Static HTML shells, one per page, with the page's head prerendered.

use std::path::PathBuf;

use brux_head::{HeadDocument, escape_html};

use crate::config::SiteConfig;
use crate::metadata::MetadataWriter;
use crate::page::PageId;

const CHARSET: &str = r#"<meta charset="utf-8">"#;

/// Root attribute naming the page a shell was rendered for. The client reads
/// it back and passes it to `Site::mount` as the prerendered page.
pub const SHELL_PAGE_ATTR: &str = "data-brux-page";

/// What the shell loads besides the head metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOptions {
  /// `id` of the element the client app mounts into.
  pub root_id: String,
  /// Module script booting the client, if any.
  pub entry_script: Option<String>,
  pub stylesheets: Vec<String>,
}

impl Default for ShellOptions {
  fn default() -> Self {
    Self { root_id: "root".to_string(), entry_script: None, stylesheets: Vec::new() }
  }
}

/// Output path of a page relative to the export root: `index.html` for
/// home, `<page>/index.html` for the rest.
pub fn export_path(page: PageId) -> PathBuf {
  match page {
    PageId::Home => PathBuf::from("index.html"),
    other => PathBuf::from(other.as_str()).join("index.html"),
  }
}

/// Full HTML document for `page`. Tracking integrations are left out; they
/// are injected at runtime on production hosts only.
pub fn render_page_shell(config: &SiteConfig, options: &ShellOptions, page: PageId) -> String {
  let mut head = HeadDocument::new();
  MetadataWriter::new(&config.site).apply(&mut head, page, page.title());

  let mut html = format!(
    r#"<!DOCTYPE html><html{} {SHELL_PAGE_ATTR}="{page}"><head>{CHARSET}"#,
    head.render_root_attrs()
  );
  html.push_str(&head.render_head());
  for href in &options.stylesheets {
    html.push_str(&format!(r#"<link rel="stylesheet" href="{}">"#, escape_html(href)));
  }
  html.push_str("</head><body>");
  html.push_str(&head.render_body_prelude());
  html.push_str(&format!(r#"<div id="{}"></div>"#, escape_html(&options.root_id)));
  if let Some(src) = &options.entry_script {
    html.push_str(&format!(r#"<script type="module" src="{}"></script>"#, escape_html(src)));
  }
  html.push_str("</body></html>");
  html
}
