/* src/client/head/rust/src/escape.rs */

/// Rewrite non-ASCII characters inside JSON string literals as `\uXXXX`.
///
/// Structured-data blocks carry Italian copy and currency symbols; escaping
/// keeps the serialized block pure ASCII. Codepoints above the BMP become
/// surrogate pairs.
pub fn ascii_escape_json(json: &str) -> String {
  let mut out = String::with_capacity(json.len());
  let mut in_string = false;
  let mut chars = json.chars();

  while let Some(ch) = chars.next() {
    if !in_string {
      in_string = ch == '"';
      out.push(ch);
      continue;
    }
    match ch {
      '\\' => {
        // keep escape sequences intact, including `\"`
        out.push(ch);
        if let Some(next) = chars.next() {
          out.push(next);
        }
      }
      '"' => {
        in_string = false;
        out.push(ch);
      }
      c if c.is_ascii() => out.push(c),
      c => {
        let mut units = [0u16; 2];
        for unit in c.encode_utf16(&mut units) {
          out.push_str(&format!("\\u{unit:04x}"));
        }
      }
    }
  }
  out
}
