/* src/client/engine/rust/src/registry.rs */

use serde::Serialize;
use serde_json::Value;

use crate::config::SiteSection;
use crate::page::PageId;
use crate::schema;

/// Open Graph object type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OgType {
  Website,
  Article,
  Profile,
}

impl OgType {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Website => "website",
      Self::Article => "article",
      Self::Profile => "profile",
    }
  }
}

/// Static SEO content for one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeoPayload {
  pub description: String,
  pub keywords: Vec<String>,
  pub og_type: OgType,
  pub structured_data: Value,
  /// Additional JSON-LD block (local-business schema), if the page has one.
  pub secondary_structured_data: Option<Value>,
  pub canonical_url: String,
}

impl SeoPayload {
  pub fn keywords_joined(&self) -> String {
    self.keywords.join(", ")
  }
}

/// Lookup table from [`PageId`] to its [`SeoPayload`], built once from the
/// site section and never mutated.
#[derive(Debug, Clone)]
pub struct PageContentRegistry {
  payloads: Vec<SeoPayload>,
}

struct PageCopy {
  description: &'static str,
  keywords: &'static [&'static str],
  og_type: OgType,
}

fn copy_for(page: PageId) -> PageCopy {
  match page {
    PageId::Home => PageCopy {
      description: "Brux Studio - Web Agency a Carpi (MO) di Alessandro Bruini. Sviluppo siti web professionali, e-commerce, applicazioni web innovative. 4+ anni esperienza, 50+ progetti.",
      keywords: &[
        "brux studio",
        "web agency carpi",
        "sviluppo siti web modena",
        "alessandro bruini",
        "web developer carpi",
        "e-commerce",
        "applicazioni web",
        "siti professionali",
        "web agency emilia romagna",
      ],
      og_type: OgType::Website,
    },
    PageId::Portfolio => PageCopy {
      description: "Portfolio Brux Studio: progetti web innovativi realizzati a Carpi. Sviluppo siti web professionali, e-commerce, applicazioni web e soluzioni digitali personalizzate.",
      keywords: &[
        "portfolio web developer",
        "progetti siti web carpi",
        "brux studio portfolio",
        "sviluppo web modena",
        "e-commerce carpi",
        "applicazioni web",
        "casi studio web agency",
      ],
      og_type: OgType::Website,
    },
    PageId::Contact => PageCopy {
      description: "Contatta Brux Studio per il tuo progetto web. Web agency a Carpi (MO) specializzata in sviluppo siti web, e-commerce e consulenza digitale. Preventivo gratuito.",
      keywords: &[
        "contatti brux studio",
        "web agency carpi contatti",
        "alessandro bruini contatti",
        "preventivo sito web carpi",
        "consulenza web modena",
        "sviluppo web carpi",
      ],
      og_type: OgType::Website,
    },
    PageId::About => PageCopy {
      description: "Alessandro Bruini, founder di Brux Studio: web developer 25enne di Carpi con 4+ anni di esperienza in sviluppo web, e-commerce e applicazioni innovative.",
      keywords: &[
        "alessandro bruini",
        "brux studio founder",
        "web developer carpi",
        "programmatore modena",
        "sviluppatore web emilia romagna",
        "chi siamo brux studio",
      ],
      og_type: OgType::Profile,
    },
    PageId::Methodology => PageCopy {
      description: "Metodologia BRUX: framework strategico innovativo per sviluppo web. BRIEF, RESEARCH, UNCOVER, eXECUTION - approccio partnership-based per progetti di successo.",
      keywords: &[
        "metodologia brux",
        "framework sviluppo web",
        "strategia web development",
        "brief research uncover execution",
        "metodologia web agency",
        "processo sviluppo siti web",
      ],
      og_type: OgType::Article,
    },
  }
}

fn has_local_business(page: PageId) -> bool {
  matches!(page, PageId::Home | PageId::Contact)
}

impl PageContentRegistry {
  pub fn new(site: &SiteSection) -> Self {
    let payloads = PageId::ALL
      .into_iter()
      .map(|page| {
        let copy = copy_for(page);
        SeoPayload {
          description: copy.description.to_string(),
          keywords: copy.keywords.iter().map(|k| (*k).to_string()).collect(),
          og_type: copy.og_type,
          structured_data: schema::primary(site, page),
          secondary_structured_data: has_local_business(page)
            .then(|| schema::local_business(site)),
          canonical_url: site.page_url(page),
        }
      })
      .collect();
    Self { payloads }
  }

  /// Total over [`PageId`]: every page has a payload.
  pub fn lookup(&self, page: PageId) -> &SeoPayload {
    &self.payloads[page.index()]
  }
}
