/* src/client/engine/rust/src/router.rs */

//! Fragment-driven view switching.

use serde::Serialize;

use crate::page::PageId;

/// The browser surface the router drives.
pub trait Viewport {
  /// Write `#<page>` into the address bar.
  fn set_fragment(&mut self, fragment: &str);
  fn scroll_to_top(&mut self);
}

/// The active page. Only [`ViewRouter`] can change it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NavigationState {
  current: PageId,
}

impl NavigationState {
  pub fn current(&self) -> PageId {
    self.current
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionSource {
  /// The address-bar fragment changed.
  Fragment,
  /// [`ViewRouter::navigate`] was called.
  Navigate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
  pub from: PageId,
  pub to: PageId,
  pub source: TransitionSource,
}

#[derive(Debug, Clone, Default)]
pub struct ViewRouter {
  state: NavigationState,
}

impl ViewRouter {
  /// Initial state from the fragment present at load; home if it names no page.
  pub fn from_fragment(fragment: &str) -> Self {
    let current = PageId::from_fragment(fragment).unwrap_or_default();
    Self { state: NavigationState { current } }
  }

  pub fn current(&self) -> PageId {
    self.state.current
  }

  pub fn state(&self) -> NavigationState {
    self.state
  }

  /// Handle a fragment change notification. Unknown fragments leave the
  /// state untouched. A change to the page already shown is also ignored:
  /// it is the echo of [`navigate`](Self::navigate) writing the fragment.
  pub fn on_fragment_change(
    &mut self,
    fragment: &str,
    viewport: &mut dyn Viewport,
  ) -> Option<Transition> {
    let Some(to) = PageId::from_fragment(fragment) else {
      tracing::debug!(fragment, "ignoring unknown fragment");
      return None;
    };
    if to == self.state.current {
      return None;
    }
    Some(self.switch(to, TransitionSource::Fragment, viewport))
  }

  /// Programmatic navigation: updates the fragment and scrolls to the top,
  /// even when `page` is already current.
  pub fn navigate(&mut self, page: PageId, viewport: &mut dyn Viewport) -> Transition {
    viewport.set_fragment(&page.fragment());
    self.switch(page, TransitionSource::Navigate, viewport)
  }

  fn switch(
    &mut self,
    to: PageId,
    source: TransitionSource,
    viewport: &mut dyn Viewport,
  ) -> Transition {
    let from = std::mem::replace(&mut self.state.current, to);
    viewport.scroll_to_top();
    tracing::debug!(%from, %to, ?source, "navigation");
    Transition { from, to, source }
  }
}
