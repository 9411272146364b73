/* src/client/engine/wasm/src/lib.rs */

use brux_engine::{
  CapabilityRegistry, DispatchOutcome, Environment, MetadataWriter, PageId, Sdk, SdkError,
  SdkHandle, Site, SiteConfig, Viewport,
};
use brux_head::{HeadDocument, HeadPatch};
use serde_json::{Map, Value};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = r#"
export function brux_sdk_present(name) {
  return typeof window !== "undefined" && typeof window[name] !== "undefined";
}
export function brux_sdk_invoke(name, argsJson) {
  const args = JSON.parse(argsJson);
  const target = window[name];
  if (Array.isArray(target)) {
    target.push(...args);
  } else {
    target(...args);
  }
}
export function brux_set_fragment(fragment) {
  window.location.hash = fragment;
}
export function brux_scroll_to_top() {
  window.scrollTo(0, 0);
}
"#)]
extern "C" {
  fn brux_sdk_present(name: &str) -> bool;
  #[wasm_bindgen(catch)]
  fn brux_sdk_invoke(name: &str, args_json: &str) -> Result<(), JsValue>;
  fn brux_set_fragment(fragment: &str);
  fn brux_scroll_to_top();
}

// --- Browser adapters ---

/// SDK globals looked up on `window` at call time.
struct WindowSdks;

impl CapabilityRegistry for WindowSdks {
  fn resolve(&self, sdk: Sdk) -> Option<Box<dyn SdkHandle + '_>> {
    let name = sdk.global_name();
    if !brux_sdk_present(name) {
      return None;
    }
    Some(Box::new(move |args: &[Value]| {
      let json = serde_json::to_string(args)
        .map_err(|e| SdkError::BadArguments { sdk: name, message: e.to_string() })?;
      brux_sdk_invoke(name, &json).map_err(|e| SdkError::Threw {
        sdk: name,
        message: e.as_string().unwrap_or_else(|| format!("{e:?}")),
      })
    }))
  }
}

#[derive(Debug)]
struct BrowserViewport;

impl Viewport for BrowserViewport {
  fn set_fragment(&mut self, fragment: &str) {
    brux_set_fragment(fragment);
  }

  fn scroll_to_top(&mut self) {
    brux_scroll_to_top();
  }
}

// --- JSON helpers ---

fn error_json(message: impl std::fmt::Display) -> String {
  serde_json::json!({ "error": message.to_string() }).to_string()
}

fn patches_json(patches: &[HeadPatch]) -> String {
  serde_json::to_string(patches).unwrap_or_else(|_| "[]".to_string())
}

fn outcome_json(outcome: &DispatchOutcome) -> String {
  serde_json::to_string(outcome).unwrap_or_else(|_| "{}".to_string())
}

fn parse_config(config_json: &str) -> Result<SiteConfig, String> {
  if config_json.trim().is_empty() {
    return Ok(SiteConfig::default());
  }
  let config: SiteConfig = serde_json::from_str(config_json).map_err(|e| e.to_string())?;
  config.validate().map_err(|e| e.to_string())?;
  Ok(config)
}

fn parse_shell_page(shell_page: &str) -> Result<Option<PageId>, String> {
  match shell_page.trim() {
    "" => Ok(None),
    name => name.parse::<PageId>().map(Some).map_err(|e| e.to_string()),
  }
}

// --- Site handle ---

/// One page load. Created once at mount; the shell forwards `hashchange`
/// and click events and applies the returned head patches.
///
/// `shell_page` is the `data-brux-page` attribute of the served document,
/// empty when the head was not prerendered.
#[wasm_bindgen]
pub struct BruxSite {
  site: Site<BrowserViewport>,
  mount_patches: Vec<HeadPatch>,
}

#[wasm_bindgen]
impl BruxSite {
  #[wasm_bindgen(constructor)]
  pub fn new(
    config_json: &str,
    hostname: &str,
    fragment: &str,
    shell_page: &str,
  ) -> Result<BruxSite, JsValue> {
    let config = parse_config(config_json).map_err(|e| JsValue::from_str(&e))?;
    let prerendered = parse_shell_page(shell_page).map_err(|e| JsValue::from_str(&e))?;
    let (site, mount_patches) = Site::mount(
      config,
      Environment::new(hostname),
      fragment,
      prerendered,
      BrowserViewport,
      Box::new(WindowSdks),
    );
    Ok(Self { site, mount_patches })
  }

  /// Patches produced by the mount, as a JSON array. Empty after the first call.
  pub fn take_mount_patches(&mut self) -> String {
    patches_json(&std::mem::take(&mut self.mount_patches))
  }

  pub fn on_hash_change(&mut self, fragment: &str) -> String {
    patches_json(&self.site.on_fragment_change(fragment))
  }

  pub fn navigate(&mut self, page: &str) -> String {
    match page.parse::<PageId>() {
      Ok(page) => patches_json(&self.site.navigate(page)),
      Err(e) => error_json(e),
    }
  }

  pub fn current_page(&self) -> String {
    self.site.current_page().to_string()
  }

  pub fn head_html(&self) -> String {
    self.site.head().render_head()
  }

  pub fn track_event(&self, name: &str, params_json: &str) -> String {
    let params: Map<String, Value> = if params_json.trim().is_empty() {
      Map::new()
    } else {
      match serde_json::from_str(params_json) {
        Ok(params) => params,
        Err(e) => return error_json(e),
      }
    };
    outcome_json(&self.site.tracker().track_event(name, &params))
  }

  pub fn track_contact(&self) -> String {
    outcome_json(&self.site.tracker().contact())
  }

  pub fn track_portfolio(&self) -> String {
    outcome_json(&self.site.tracker().portfolio())
  }

  pub fn track_methodology(&self) -> String {
    outcome_json(&self.site.tracker().methodology())
  }

  pub fn track_cta(&self, cta_name: &str) -> String {
    outcome_json(&self.site.tracker().cta(cta_name))
  }
}

// --- Stateless functions ---

/// Rendered `<title>` and managed head markup for `page`, for prerendering.
#[wasm_bindgen]
pub fn render_head(config_json: &str, page: &str) -> String {
  let config = match parse_config(config_json) {
    Ok(config) => config,
    Err(e) => return error_json(e),
  };
  let page = match page.parse::<PageId>() {
    Ok(page) => page,
    Err(e) => return error_json(e),
  };
  let mut head = HeadDocument::new();
  MetadataWriter::new(&config.site).apply(&mut head, page, page.title());
  head.render_head()
}

/// Page named by `fragment`, or an empty string when it names none.
#[wasm_bindgen]
pub fn resolve_fragment(fragment: &str) -> String {
  PageId::from_fragment(fragment).map(|p| p.to_string()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn page_title(page: &str) -> String {
  page.parse::<PageId>().map(|p| p.title().to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn render_head_for_known_page() {
    let html = render_head("", "contact");
    assert!(html.starts_with("<title>Contatti - Brux Studio | Web Agency Carpi</title>"));
    assert!(html.contains(r#"data-brux-slot="local-business""#));
  }

  #[test]
  fn render_head_reports_bad_input() {
    assert_eq!(render_head("", "blog"), r#"{"error":"unknown page \"blog\""}"#);
    assert!(render_head("{not json", "home").starts_with(r#"{"error":"#));
    assert!(render_head(r#"{"site":{"base_url":"nope"}}"#, "home").contains("not a valid URL"));
  }

  #[test]
  fn shell_page_attribute() {
    assert_eq!(parse_shell_page(""), Ok(None));
    assert_eq!(parse_shell_page("portfolio"), Ok(Some(PageId::Portfolio)));
    assert!(parse_shell_page("blog").is_err());
  }

  #[test]
  fn fragment_resolution() {
    assert_eq!(resolve_fragment("#about"), "about");
    assert_eq!(resolve_fragment("#nonexistent"), "");
    assert_eq!(page_title("methodology"), "Metodologia - Brux Studio | Framework Strategico BRUX");
    assert_eq!(page_title(""), "");
  }
}
