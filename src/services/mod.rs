//! Contracts for the external collaborators the brew card delegates to.
//!
//! This crate never performs persistence, analytics, sharing or presentation
//! I/O itself; it only invokes these interfaces. Production implementations
//! live in the app shell, recording mocks for tests in [`mock`].

pub mod mock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::ServiceResult;
use crate::models::{Bean, Brew, Settings};

/// Outcome of a confirmation dialog. Declining is normal cancellation,
/// never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Confirmed,
    Declined,
}

impl ConfirmOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, ConfirmOutcome::Confirmed)
    }
}

/// Durable brew persistence. Calls are awaited and assumed durable once
/// they return.
#[async_trait]
pub trait BrewStore: Send + Sync {
    async fn add(&self, brew: &Brew) -> ServiceResult<()>;
    async fn update(&self, brew: &Brew) -> ServiceResult<()>;
    async fn remove_by_object(&self, brew: &Brew) -> ServiceResult<()>;
}

/// Higher-level brew flows (modal edit/detail/cupping screens, repeat
/// logic, bean bookkeeping). The helper owns its own error reporting.
#[async_trait]
pub trait BrewHelper: Send + Sync {
    /// Whether brewing is currently allowed; shows its own message when not.
    async fn can_brew_or_notify(&self) -> bool;
    /// Clone a brew into a fresh entry (new id, current timestamp).
    fn copy_brew_to_repeat(&self, brew: &Brew) -> Brew;
    async fn repeat_brew(&self, brew: &Brew);
    async fn edit_brew(&self, brew: &Brew);
    async fn detail_brew(&self, brew: &Brew);
    async fn cup_brew(&self, brew: &Brew);
    /// Re-check whether the bean's package is depleted; archives it and
    /// notifies the user when it is.
    async fn check_bean_package_consumed(&self, bean: &Bean);
}

/// Toasts, confirmation dialogs and the loading indicator. Message
/// arguments are translation keys, not display text.
#[async_trait]
pub trait Notifier: Send + Sync {
    fn show_info_toast(&self, message_key: &str);
    async fn show_confirm(
        &self,
        body_key: &str,
        title_key: &str,
        destructive: bool,
    ) -> ConfirmOutcome;
    fn show_loading_spinner(&self);
    fn hide_loading_spinner(&self);
}

/// Fire-and-forget event tracking.
pub trait AnalyticsSink: Send + Sync {
    fn track_event(&self, category: &str, action: &str);
}

/// Post-persist shot upload/registration for repeated brews.
#[async_trait]
pub trait BrewTracker: Send + Sync {
    async fn track_brew(&self, brew: &Brew);
}

/// Health-data integration for caffeine intake.
#[async_trait]
pub trait HealthSink: Send + Sync {
    async fn track_caffeine_consumption(&self, amount_mg: f64, at: DateTime<Utc>);
}

/// Full-screen gallery for a brew's photo attachments.
#[async_trait]
pub trait ImageViewer: Send + Sync {
    async fn view_photos(&self, brew: &Brew);
}

/// Platform share sheet for a rendered card image.
#[async_trait]
pub trait ShareSink: Send + Sync {
    async fn share_image(&self, image: Vec<u8>) -> ServiceResult<()>;
}

/// Synchronous translation lookup.
pub trait Translator: Send + Sync {
    fn instant(&self, key: &str) -> String;
}

/// Opens external links (map coordinates) in the system browser.
pub trait LinkOpener: Send + Sync {
    fn open_external(&self, url: &str);
}

/// Read access to the active settings; `None` means no settings exist yet.
pub trait SettingsSource: Send + Sync {
    fn get_settings(&self) -> Option<Settings>;
}

/// A mounted card surface that can be rasterized for sharing.
#[async_trait]
pub trait CardRenderer: Send + Sync {
    async fn render_to_image(&self) -> ServiceResult<Vec<u8>>;
}

/// A mounted rating widget kept in sync with the brew's rating.
pub trait RatingWidget: Send + Sync {
    fn set_rating(&self, rating: f64);
}
