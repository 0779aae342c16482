//! Which feature, if any, the detail overlay is showing.
//!
//! [`Selection`] is replaced wholesale on every event. Transitions are pure
//! functions of `(state, event, policy)`, so the page only needs one signal
//! and one dispatcher.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::catalog::FeatureEntry;
use crate::error::ParseVariantError;

/// Overlay state. An open overlay always carries its entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Closed,
    Open(FeatureEntry),
}

impl Selection {
    pub fn open(entry: FeatureEntry) -> Self {
        Self::Open(entry)
    }

    /// Show `entry`, replacing whatever was open.
    pub fn select(self, entry: FeatureEntry) -> Self {
        Self::Open(entry)
    }

    pub fn close(self) -> Self {
        Self::Closed
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn selected(&self) -> Option<&FeatureEntry> {
        match self {
            Self::Open(entry) => Some(entry),
            Self::Closed => None,
        }
    }

    /// Apply one user event under the given dismiss policy.
    pub fn apply(self, event: SelectionEvent, policy: DismissPolicy) -> Self {
        let next = match event {
            SelectionEvent::Activate(entry) => self.select(entry),
            SelectionEvent::Close => self.close(),
            SelectionEvent::Backdrop(ClickOrigin::Backdrop) if policy.closes_on_backdrop() => {
                self.close()
            }
            SelectionEvent::Backdrop(_) => self,
        };
        if next != self {
            debug!(
                from = self.selected().map(|e| e.title),
                to = next.selected().map(|e| e.title),
                "selection changed"
            );
        }
        next
    }
}

/// A user action that may change the [`Selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    /// A feature card was activated.
    Activate(FeatureEntry),
    /// One of the overlay's close controls was activated.
    Close,
    /// The overlay container received a click.
    Backdrop(ClickOrigin),
}

/// Where a click on the overlay container started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOrigin {
    /// Directly on the dimmed area around the panel.
    Backdrop,
    /// Inside the content panel, bubbled up to the container.
    Panel,
}

/// How the overlay may be dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DismissPolicy {
    /// Only the close controls dismiss the overlay.
    CloseControl,
    /// Close controls, or a click on the backdrop.
    #[default]
    CloseControlOrBackdrop,
}

impl DismissPolicy {
    pub fn closes_on_backdrop(self) -> bool {
        matches!(self, Self::CloseControlOrBackdrop)
    }
}

/// Page layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageVariant {
    /// Fixed nav bar; the overlay closes on backdrop clicks.
    #[default]
    Landing,
    /// Plain header bar; the overlay closes through its controls only.
    Classic,
}

impl PageVariant {
    pub fn dismiss_policy(self) -> DismissPolicy {
        match self {
            Self::Landing => DismissPolicy::CloseControlOrBackdrop,
            Self::Classic => DismissPolicy::CloseControl,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Classic => "classic",
        }
    }
}

impl fmt::Display for PageVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageVariant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "landing" => Ok(Self::Landing),
            "classic" => Ok(Self::Classic),
            _ => Err(ParseVariantError(s.to_string())),
        }
    }
}
