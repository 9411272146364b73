/* src/client/head/rust/src/helpers.rs */

pub fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#x27;"),
      c => out.push(c),
    }
  }
  out
}

// A literal `</` inside a script body would end the element early.
// `<\/` is equivalent in both JavaScript strings and JSON.
pub(crate) fn escape_script_body(s: &str) -> String {
  s.replace("</", r"<\/")
}

pub(crate) fn escape_selector_value(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '"' => out.push_str("\\\""),
      '\\' => out.push_str("\\\\"),
      c => out.push(c),
    }
  }
  out
}
