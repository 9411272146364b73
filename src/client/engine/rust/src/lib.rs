/* src/client/engine/rust/src/lib.rs */

pub mod analytics;
pub mod config;
pub mod error;
pub mod metadata;
pub mod page;
pub mod registry;
pub mod render;
pub mod router;
mod schema;
pub mod site;
pub mod tracker;

// Public API re-exports
pub use analytics::{
  AnalyticsBootstrapper, BootstrapReport, Environment, IntegrationKind, SkipReason,
  TrackingIntegration,
};
pub use config::{AnalyticsSection, IntegrationConfig, SiteConfig, SiteSection, VerificationSection};
pub use error::{ConfigError, SdkError};
pub use metadata::{MetaTagDescriptor, MetadataWriter};
pub use page::{PageId, UnknownPage};
pub use registry::{OgType, PageContentRegistry, SeoPayload};
pub use render::{SHELL_PAGE_ATTR, ShellOptions, export_path, render_page_shell};
pub use router::{NavigationState, Transition, TransitionSource, ViewRouter, Viewport};
pub use site::{PageTracker, Site};
pub use tracker::{
  CapabilityRegistry, DispatchOutcome, EventTracker, NoCapabilities, Sdk, SdkCall, SdkHandle,
  StaticCapabilities,
};

#[cfg(test)]
mod tests;
