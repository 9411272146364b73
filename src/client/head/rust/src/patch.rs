/* src/client/head/rust/src/patch.rs */

use serde::{Deserialize, Serialize};

use crate::element::{ElementKey, HeadElement};

/// A desired-state instruction for the head model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadOp {
  SetTitle(String),
  /// Attribute on the root `<html>` element (`lang`, `dir`).
  SetRootAttr { name: String, value: String },
  /// Create the element if its key is absent, otherwise overwrite it in place.
  Upsert(HeadElement),
  /// Remove any element with the same key, then append this one. A no-op
  /// when the existing element is identical. Used for blocks without a natural attribute key (JSON-LD).
  Replace(HeadElement),
  /// Insert only if absent; an existing element is left untouched.
  Ensure(HeadElement),
  Remove(ElementKey),
}

/// A concrete mutation a live DOM must perform to mirror the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum HeadPatch {
  SetTitle {
    title: String,
  },
  SetRootAttr {
    name: String,
    value: String,
  },
  /// Append to `<head>`, or prepend to `<body>` for body placement.
  Append {
    element: HeadElement,
  },
  /// Overwrite the element matched by `selector` with `element`'s value.
  Update {
    selector: String,
    element: HeadElement,
  },
  Remove {
    selector: String,
  },
}

impl HeadPatch {
  pub(crate) fn append(element: HeadElement) -> Self {
    Self::Append { element }
  }

  pub(crate) fn update(element: HeadElement) -> Self {
    Self::Update { selector: element.key().selector(), element }
  }

  pub(crate) fn remove(key: &ElementKey) -> Self {
    Self::Remove { selector: key.selector() }
  }
}
