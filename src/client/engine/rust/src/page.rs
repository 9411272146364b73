/* src/client/engine/rust/src/page.rs */

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of views the site can show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
  #[default]
  Home,
  About,
  Portfolio,
  Contact,
  Methodology,
}

/// Returned when a string names no page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page \"{0}\"")]
pub struct UnknownPage(pub String);

impl PageId {
  pub const ALL: [PageId; 5] =
    [Self::Home, Self::About, Self::Portfolio, Self::Contact, Self::Methodology];

  /// Menu order in the navigation bar.
  pub const NAV_ORDER: [PageId; 5] =
    [Self::Home, Self::About, Self::Methodology, Self::Portfolio, Self::Contact];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Home => "home",
      Self::About => "about",
      Self::Portfolio => "portfolio",
      Self::Contact => "contact",
      Self::Methodology => "methodology",
    }
  }

  pub(crate) fn index(self) -> usize {
    self as usize
  }

  /// Parse a URL fragment, with or without the leading `#`.
  /// Anything outside the five page literals yields `None`.
  pub fn from_fragment(fragment: &str) -> Option<Self> {
    fragment.strip_prefix('#').unwrap_or(fragment).parse().ok()
  }

  pub fn fragment(self) -> String {
    format!("#{}", self.as_str())
  }

  /// Literal document title for the page.
  pub fn title(self) -> &'static str {
    match self {
      Self::Home => "Brux Studio | Web Agency Carpi - Sviluppo Siti Web Professionali",
      Self::Portfolio => "Portfolio - Brux Studio | Progetti Web Innovativi",
      Self::Contact => "Contatti - Brux Studio | Web Agency Carpi",
      Self::About => "Chi Siamo - Brux Studio | Alessandro Bruini Web Developer",
      Self::Methodology => "Metodologia - Brux Studio | Framework Strategico BRUX",
    }
  }

  pub fn nav_label(self) -> &'static str {
    match self {
      Self::Home => "Home",
      Self::About => "Chi Siamo",
      Self::Methodology => "Metodologia",
      Self::Portfolio => "Portfolio",
      Self::Contact => "Contatti",
    }
  }
}

impl FromStr for PageId {
  type Err = UnknownPage;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL.into_iter().find(|p| p.as_str() == s).ok_or_else(|| UnknownPage(s.to_string()))
  }
}

impl fmt::Display for PageId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
