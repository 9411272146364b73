/* src/client/head/rust/src/document.rs */

use std::collections::BTreeMap;

use serde::Serialize;

use crate::element::{ElementKey, HeadElement, Placement};
use crate::helpers::escape_html;
use crate::patch::{HeadOp, HeadPatch};

/// In-memory model of the managed parts of a document: title, root
/// attributes, head elements, and elements prepended to the body.
///
/// Elements are unique by [`ElementKey`]; every mutation goes through
/// [`HeadDocument::apply`], which preserves that invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeadDocument {
  title: Option<String>,
  root_attrs: BTreeMap<String, String>,
  head: Vec<HeadElement>,
  body: Vec<HeadElement>,
}

impl HeadDocument {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn title(&self) -> Option<&str> {
    self.title.as_deref()
  }

  pub fn root_attr(&self, name: &str) -> Option<&str> {
    self.root_attrs.get(name).map(String::as_str)
  }

  pub fn head_elements(&self) -> &[HeadElement] {
    &self.head
  }

  pub fn body_elements(&self) -> &[HeadElement] {
    &self.body
  }

  /// All managed elements, head first.
  pub fn elements(&self) -> impl Iterator<Item = &HeadElement> {
    self.head.iter().chain(self.body.iter())
  }

  pub fn get(&self, key: &ElementKey) -> Option<&HeadElement> {
    self.elements().find(|el| el.key() == *key)
  }

  pub fn contains(&self, key: &ElementKey) -> bool {
    self.get(key).is_some()
  }

  /// Number of elements carrying `key`. Always 0 or 1 for a document built
  /// through `apply`.
  pub fn count(&self, key: &ElementKey) -> usize {
    self.elements().filter(|el| el.key() == *key).count()
  }

  pub fn len(&self) -> usize {
    self.head.len() + self.body.len()
  }

  pub fn is_empty(&self) -> bool {
    self.head.is_empty() && self.body.is_empty()
  }

  fn region_mut(&mut self, placement: Placement) -> &mut Vec<HeadElement> {
    match placement {
      Placement::Head => &mut self.head,
      Placement::Body => &mut self.body,
    }
  }

  fn position(&self, key: &ElementKey) -> Option<(Placement, usize)> {
    if let Some(i) = self.head.iter().position(|el| el.key() == *key) {
      return Some((Placement::Head, i));
    }
    self.body.iter().position(|el| el.key() == *key).map(|i| (Placement::Body, i))
  }

  fn insert(&mut self, element: HeadElement) {
    let placement = element.placement();
    match placement {
      Placement::Head => self.head.push(element),
      // body elements are prepended, so the newest sits first
      Placement::Body => self.body.insert(0, element),
    }
  }

  fn take(&mut self, key: &ElementKey) -> Option<HeadElement> {
    let (placement, idx) = self.position(key)?;
    Some(self.region_mut(placement).remove(idx))
  }

  /// Fold one op into the model, returning the DOM patches it implies.
  /// An op that changes nothing returns no patches.
  pub fn apply(&mut self, op: HeadOp) -> Vec<HeadPatch> {
    match op {
      HeadOp::SetTitle(title) => {
        if self.title.as_deref() == Some(title.as_str()) {
          return vec![];
        }
        self.title = Some(title.clone());
        vec![HeadPatch::SetTitle { title }]
      }
      HeadOp::SetRootAttr { name, value } => {
        if self.root_attrs.get(&name) == Some(&value) {
          return vec![];
        }
        self.root_attrs.insert(name.clone(), value.clone());
        vec![HeadPatch::SetRootAttr { name, value }]
      }
      HeadOp::Upsert(element) => match self.position(&element.key()) {
        Some((placement, idx)) => {
          let slot = &mut self.region_mut(placement)[idx];
          if *slot == element {
            return vec![];
          }
          *slot = element.clone();
          vec![HeadPatch::update(element)]
        }
        None => {
          self.insert(element.clone());
          vec![HeadPatch::append(element)]
        }
      },
      HeadOp::Replace(element) => {
        let key = element.key();
        if self.get(&key) == Some(&element) {
          return vec![];
        }
        let mut patches = Vec::with_capacity(2);
        if self.take(&key).is_some() {
          patches.push(HeadPatch::remove(&key));
        }
        self.insert(element.clone());
        patches.push(HeadPatch::append(element));
        patches
      }
      HeadOp::Ensure(element) => {
        if self.contains(&element.key()) {
          return vec![];
        }
        self.insert(element.clone());
        vec![HeadPatch::append(element)]
      }
      HeadOp::Remove(key) => match self.take(&key) {
        Some(_) => vec![HeadPatch::remove(&key)],
        None => vec![],
      },
    }
  }

  pub fn apply_all(&mut self, ops: impl IntoIterator<Item = HeadOp>) -> Vec<HeadPatch> {
    ops.into_iter().flat_map(|op| self.apply(op)).collect()
  }

  /// `<title>` followed by every head element, in insertion order.
  pub fn render_head(&self) -> String {
    let mut out = String::new();
    if let Some(title) = &self.title {
      out.push_str(&format!("<title>{}</title>", escape_html(title)));
    }
    for el in &self.head {
      out.push_str(&el.render());
    }
    out
  }

  /// Markup to place immediately after `<body>`.
  pub fn render_body_prelude(&self) -> String {
    self.body.iter().map(HeadElement::render).collect()
  }

  /// Root attributes rendered as ` name="value"` pairs, ready to splice into
  /// the `<html` start tag.
  pub fn render_root_attrs(&self) -> String {
    self
      .root_attrs
      .iter()
      .map(|(name, value)| format!(r#" {}="{}""#, escape_html(name), escape_html(value)))
      .collect()
  }
}
