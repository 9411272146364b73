/* src/client/head/rust/src/tests/mod.rs */

use super::*;
use serde_json::json;

fn description(text: &str) -> HeadElement {
  HeadElement::meta(MetaSelector::Name, "description", text)
}

// -- upsert --

#[test]
fn upsert_appends_when_absent() {
  let mut doc = HeadDocument::new();
  let patches = doc.apply(HeadOp::Upsert(description("hello")));
  assert_eq!(patches, vec![HeadPatch::Append { element: description("hello") }]);
  assert_eq!(doc.len(), 1);
}

#[test]
fn upsert_updates_in_place() {
  let mut doc = HeadDocument::new();
  doc.apply(HeadOp::Upsert(HeadElement::meta(MetaSelector::Name, "viewport", "w")));
  doc.apply(HeadOp::Upsert(description("old")));
  let patches = doc.apply(HeadOp::Upsert(description("new")));
  assert_eq!(
    patches,
    vec![HeadPatch::Update {
      selector: r#"meta[name="description"]"#.into(),
      element: description("new"),
    }]
  );
  // position preserved
  assert_eq!(doc.head_elements()[1], description("new"));
  assert_eq!(doc.len(), 2);
}

#[test]
fn upsert_same_value_is_silent() {
  let mut doc = HeadDocument::new();
  doc.apply(HeadOp::Upsert(description("same")));
  assert!(doc.apply(HeadOp::Upsert(description("same"))).is_empty());
}

#[test]
fn repeated_upserts_never_duplicate() {
  let mut doc = HeadDocument::new();
  let ops = || {
    vec![
      HeadOp::Upsert(description("a")),
      HeadOp::Upsert(HeadElement::meta(MetaSelector::Property, "og:title", "t")),
      HeadOp::Upsert(HeadElement::canonical("https://bruxstudio.it/#home")),
    ]
  };
  doc.apply_all(ops());
  doc.apply_all(ops());
  doc.apply_all(ops());
  assert_eq!(doc.len(), 3);
  assert_eq!(doc.count(&ElementKey::Canonical), 1);
}

// -- replace --

#[test]
fn replace_removes_then_appends() {
  let mut doc = HeadDocument::new();
  doc.apply(HeadOp::Replace(HeadElement::json_ld("primary", &json!({"@type": "WebSite"}))));
  doc.apply(HeadOp::Upsert(description("d")));
  let patches =
    doc.apply(HeadOp::Replace(HeadElement::json_ld("primary", &json!({"@type": "AboutPage"}))));
  assert_eq!(patches.len(), 2);
  assert!(matches!(patches[0], HeadPatch::Remove { .. }));
  assert!(matches!(patches[1], HeadPatch::Append { .. }));
  assert_eq!(doc.count(&ElementKey::json_ld("primary")), 1);
  // moved to the end
  assert_eq!(doc.head_elements()[1].key(), ElementKey::json_ld("primary"));
}

#[test]
fn replace_distinct_slots_coexist() {
  let mut doc = HeadDocument::new();
  doc.apply(HeadOp::Replace(HeadElement::json_ld("primary", &json!({}))));
  doc.apply(HeadOp::Replace(HeadElement::json_ld("local-business", &json!({}))));
  doc.apply(HeadOp::Replace(HeadElement::json_ld("local-business", &json!({}))));
  assert_eq!(doc.count(&ElementKey::json_ld("primary")), 1);
  assert_eq!(doc.count(&ElementKey::json_ld("local-business")), 1);
}

#[test]
fn replace_with_identical_element_is_a_no_op() {
  let mut doc = HeadDocument::new();
  let el = HeadElement::json_ld("primary", &json!({"@type": "WebSite"}));
  doc.apply(HeadOp::Replace(el.clone()));
  doc.apply(HeadOp::Upsert(description("d")));
  assert!(doc.apply(HeadOp::Replace(el)).is_empty());
  assert_eq!(doc.head_elements()[0].key(), ElementKey::json_ld("primary"));
}

// -- ensure / remove --

#[test]
fn ensure_keeps_existing_element() {
  let mut doc = HeadDocument::new();
  let first = HeadElement::inline_script("ga", "one()");
  doc.apply(HeadOp::Ensure(first.clone()));
  assert!(doc.apply(HeadOp::Ensure(HeadElement::inline_script("ga", "two()"))).is_empty());
  assert_eq!(doc.get(&first.key()), Some(&first));
}

#[test]
fn remove_missing_is_silent() {
  let mut doc = HeadDocument::new();
  assert!(doc.apply(HeadOp::Remove(ElementKey::json_ld("local-business"))).is_empty());
}

#[test]
fn remove_existing_emits_selector() {
  let mut doc = HeadDocument::new();
  doc.apply(HeadOp::Replace(HeadElement::json_ld("local-business", &json!({}))));
  let patches = doc.apply(HeadOp::Remove(ElementKey::json_ld("local-business")));
  assert_eq!(
    patches,
    vec![HeadPatch::Remove {
      selector: r#"script[type="application/ld+json"][data-brux-slot="local-business"]"#.into()
    }]
  );
  assert!(doc.is_empty());
}

// -- title / root attrs --

#[test]
fn title_patch_only_on_change() {
  let mut doc = HeadDocument::new();
  assert_eq!(doc.apply(HeadOp::SetTitle("A".into())).len(), 1);
  assert!(doc.apply(HeadOp::SetTitle("A".into())).is_empty());
  assert_eq!(doc.title(), Some("A"));
}

#[test]
fn root_attrs_render_sorted() {
  let mut doc = HeadDocument::new();
  doc.apply(HeadOp::SetRootAttr { name: "lang".into(), value: "it".into() });
  doc.apply(HeadOp::SetRootAttr { name: "dir".into(), value: "ltr".into() });
  assert_eq!(doc.render_root_attrs(), r#" dir="ltr" lang="it""#);
  assert_eq!(doc.root_attr("lang"), Some("it"));
}

// -- placement --

#[test]
fn body_elements_are_prepended() {
  let mut doc = HeadDocument::new();
  let ns = |id: &str| HeadElement::NoScript {
    id: id.into(),
    html: format!("<img alt=\"{id}\">"),
    placement: Placement::Body,
  };
  doc.apply(HeadOp::Ensure(ns("first")));
  doc.apply(HeadOp::Ensure(ns("second")));
  assert!(doc.head_elements().is_empty());
  assert_eq!(doc.body_elements()[0].key(), ElementKey::NoScript { id: "second".into() });
  assert!(doc.render_body_prelude().starts_with(r#"<noscript data-brux-id="second">"#));
}

// -- rendering --

#[test]
fn render_head_orders_title_first() {
  let mut doc = HeadDocument::new();
  doc.apply(HeadOp::Upsert(description("Web Agency & Co")));
  doc.apply(HeadOp::SetTitle("Brux <Studio>".into()));
  assert_eq!(
    doc.render_head(),
    concat!(
      "<title>Brux &lt;Studio&gt;</title>",
      r#"<meta name="description" content="Web Agency &amp; Co">"#
    )
  );
}

#[test]
fn patches_serialize_for_dom_glue() {
  let mut doc = HeadDocument::new();
  let patches = doc.apply(HeadOp::Upsert(HeadElement::canonical("https://bruxstudio.it/#about")));
  let value = serde_json::to_value(&patches).unwrap();
  assert_eq!(
    value,
    json!([{"op": "append", "element": {"tag": "canonical", "href": "https://bruxstudio.it/#about"}}])
  );
}
