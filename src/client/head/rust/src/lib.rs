/* src/client/head/rust/src/lib.rs */

//! Head document model.
//!
//! The document head is described as a list of keyed elements. Callers
//! express the state they want as [`HeadOp`]s; [`HeadDocument::apply`]
//! folds them into the model and reports the minimal [`HeadPatch`]es a
//! live DOM needs to match. Because every element has a stable key, applying
//! the same ops twice never produces duplicates.

mod document;
mod element;
mod escape;
mod helpers;
mod patch;

pub use document::HeadDocument;
pub use element::{ElementKey, HeadElement, MetaSelector, Placement};
pub use escape::ascii_escape_json;
pub use helpers::escape_html;
pub use patch::{HeadOp, HeadPatch};

#[cfg(test)]
mod tests;
