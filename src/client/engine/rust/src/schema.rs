/* src/client/engine/rust/src/schema.rs */

//! schema.org JSON-LD trees, one builder per page type.

use serde_json::{Value, json};

use crate::config::SiteSection;
use crate::page::PageId;

const SCHEMA_CONTEXT: &str = "https://schema.org";
const FOUNDER_TITLE: &str = "Web Developer & Founder";

fn same_as() -> Value {
  json!(["https://instagram.com/brux_studio", "https://www.facebook.com/profile.php?id=61579972690233"])
}

fn areas_served() -> Value {
  json!(["Carpi", "Modena", "Emilia-Romagna", "Italia"])
}

fn founder(site: &SiteSection, with_email: bool) -> Value {
  let mut person = json!({
    "@type": "Person",
    "name": site.author,
    "jobTitle": FOUNDER_TITLE,
  });
  if with_email {
    person["email"] = json!(site.email);
  }
  person
}

pub(crate) fn primary(site: &SiteSection, page: PageId) -> Value {
  match page {
    PageId::Home => website(site),
    PageId::About => about_page(site),
    PageId::Portfolio => collection_page(site),
    PageId::Contact => contact_page(site),
    PageId::Methodology => article(site),
  }
}

fn website(site: &SiteSection) -> Value {
  let root = site.root_url();
  json!({
    "@context": SCHEMA_CONTEXT,
    "@type": "WebSite",
    "name": site.name,
    "description": "Web Agency a Carpi specializzata in sviluppo siti web professionali",
    "url": root,
    "publisher": {
      "@type": "Organization",
      "name": site.name,
      "founder": founder(site, false),
    },
    "potentialAction": {
      "@type": "SearchAction",
      "target": format!("{root}/search?q={{search_term_string}}"),
      "query-input": "required name=search_term_string",
    },
    "sameAs": same_as(),
  })
}

fn collection_page(site: &SiteSection) -> Value {
  json!({
    "@context": SCHEMA_CONTEXT,
    "@type": "CollectionPage",
    "name": format!("Portfolio - {}", site.name),
    "description": "Portfolio dei progetti web realizzati da Brux Studio a Carpi",
    "url": site.page_url(PageId::Portfolio),
    "isPartOf": {
      "@type": "WebSite",
      "name": site.name,
      "url": site.root_url(),
    },
  })
}

fn contact_page(site: &SiteSection) -> Value {
  json!({
    "@context": SCHEMA_CONTEXT,
    "@type": "ContactPage",
    "name": format!("Contatti - {}", site.name),
    "description": "Contatta Brux Studio per il tuo progetto web",
    "url": site.page_url(PageId::Contact),
    "mainEntity": {
      "@type": "LocalBusiness",
      "name": site.name,
      "description": "Web Agency specializzata in sviluppo siti web professionali",
      "address": {
        "@type": "PostalAddress",
        "addressLocality": "Carpi",
        "addressRegion": "Modena",
        "addressCountry": "IT",
        "postalCode": "41012",
      },
      "email": site.email,
      "founder": founder(site, true),
      "sameAs": same_as(),
      "serviceArea": { "@type": "Place", "name": "Italia" },
      "areaServed": areas_served(),
      "priceRange": "€€",
    },
  })
}

fn about_page(site: &SiteSection) -> Value {
  json!({
    "@context": SCHEMA_CONTEXT,
    "@type": "AboutPage",
    "name": format!("Chi Siamo - {}", site.name),
    "description": "Conosci Alessandro Bruini e il team di Brux Studio",
    "url": site.page_url(PageId::About),
    "mainEntity": {
      "@type": "Person",
      "name": site.author,
      "jobTitle": FOUNDER_TITLE,
      "worksFor": { "@type": "Organization", "name": site.name },
      "address": {
        "@type": "PostalAddress",
        "addressLocality": "Carpi",
        "addressRegion": "Modena",
        "addressCountry": "IT",
      },
      "email": site.email,
      "birthPlace": "Carpi, Italia",
      "knowsAbout": ["Web Development", "JavaScript", "React", "Node.js", "E-commerce", "SEO"],
      "alumniOf": {
        "@type": "EducationalOrganization",
        "name": "Formazione in Sviluppo Web",
      },
    },
  })
}

fn article(site: &SiteSection) -> Value {
  json!({
    "@context": SCHEMA_CONTEXT,
    "@type": "Article",
    "headline": "Metodologia BRUX - Framework Strategico",
    "description": "Il framework strategico BRUX per lo sviluppo web professionale",
    "author": { "@type": "Person", "name": site.author },
    "publisher": { "@type": "Organization", "name": site.name },
    "url": site.page_url(PageId::Methodology),
    "articleSection": "Web Development Methodology",
    "keywords": ["metodologia", "web development", "framework", "strategia"],
  })
}

fn offer(name: &str, description: &str) -> Value {
  json!({
    "@type": "Offer",
    "itemOffered": { "@type": "Service", "name": name, "description": description },
  })
}

/// Secondary block carried by pages that present the business itself.
pub(crate) fn local_business(site: &SiteSection) -> Value {
  let geo = json!({ "@type": "GeoCoordinates", "latitude": 44.7828, "longitude": 10.8834 });
  json!({
    "@context": SCHEMA_CONTEXT,
    "@type": "LocalBusiness",
    "name": site.name,
    "image": site.og_image,
    "description": "Web Agency specializzata in sviluppo siti web professionali a Carpi, Modena",
    "address": {
      "@type": "PostalAddress",
      "streetAddress": "Via principale",
      "addressLocality": "Carpi",
      "addressRegion": "MO",
      "postalCode": "41012",
      "addressCountry": "IT",
    },
    "geo": geo,
    "url": site.root_url(),
    "email": site.email,
    "priceRange": "€€",
    "openingHoursSpecification": {
      "@type": "OpeningHoursSpecification",
      "dayOfWeek": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"],
      "opens": "09:00",
      "closes": "18:00",
    },
    "serviceArea": {
      "@type": "GeoCircle",
      "geoMidpoint": geo,
      "geoRadius": "50000",
    },
    "areaServed": areas_served(),
    "hasOfferCatalog": {
      "@type": "OfferCatalog",
      "name": "Servizi Web",
      "itemListElement": [
        offer("Sviluppo Siti Web", "Sviluppo siti web professionali e responsive"),
        offer("E-commerce", "Sviluppo negozi online e piattaforme e-commerce"),
        offer("Applicazioni Web", "Sviluppo applicazioni web personalizzate"),
      ],
    },
    "founder": founder(site, true),
    "sameAs": same_as(),
  })
}
