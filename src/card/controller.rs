use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use log::error;
use serde::Serialize;
use tokio::sync::broadcast;
use tokio::time::sleep;

use crate::models::settings::{DEFAULT_MAX_RATING, DEFAULT_RATING_STEPS};
use crate::models::{Bean, Brew, Mill, Preparation, Settings};
use crate::services::{
    AnalyticsSink, BrewHelper, BrewStore, BrewTracker, CardRenderer, ConfirmOutcome, HealthSink,
    ImageViewer, LinkOpener, Notifier, RatingWidget, SettingsSource, ShareSink, Translator,
};
use crate::tracking::{actions, BREW_CATEGORY};
use crate::visualizer::VisualizerShot;

use super::{BrewAction, Platform};

/// Delay between hiding the loading indicator and presenting the share
/// sheet, so the dismissal animation can finish first.
const SHARE_SHEET_DELAY: Duration = Duration::from_millis(50);
/// Delay before the second rasterization on double-render platforms.
const RERENDER_DELAY: Duration = Duration::from_millis(500);

const EVENT_CHANNEL_CAPACITY: usize = 16;

/// The injected collaborators a brew card delegates to.
pub struct Collaborators {
    pub store: Arc<dyn BrewStore>,
    pub helper: Arc<dyn BrewHelper>,
    pub notifier: Arc<dyn Notifier>,
    pub analytics: Arc<dyn AnalyticsSink>,
    pub tracker: Arc<dyn BrewTracker>,
    pub health: Arc<dyn HealthSink>,
    pub image_viewer: Arc<dyn ImageViewer>,
    pub share_sink: Arc<dyn ShareSink>,
    pub translator: Arc<dyn Translator>,
    pub link_opener: Arc<dyn LinkOpener>,
    pub settings: Arc<dyn SettingsSource>,
}

/// Emitted to observers after an action from the action menu was handled,
/// so a parent list can react without duplicating the action logic.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrewActionEvent {
    pub action: BrewAction,
    pub brew: Brew,
}

/// Renders one brew and translates user gestures into semantic actions,
/// each delegated to an external collaborator.
///
/// The controller resolves the brew's bean, preparation and mill once at
/// construction and snapshots the settings in effect. It never performs
/// persistence, analytics or sharing I/O beyond invoking the injected
/// services, and no error escapes an action handler; failures go to the
/// log instead.
pub struct BrewCardController {
    brew: Mutex<Brew>,
    bean: Arc<Bean>,
    preparation: Arc<Preparation>,
    mill: Option<Arc<Mill>>,
    settings: Option<Settings>,
    platform: Platform,
    services: Collaborators,
    card_surface: Mutex<Option<Arc<dyn CardRenderer>>>,
    rating_widget: Mutex<Option<Arc<dyn RatingWidget>>>,
    events: broadcast::Sender<BrewActionEvent>,
}

impl BrewCardController {
    pub fn new(brew: Brew, services: Collaborators, platform: Platform) -> Self {
        let bean = brew.bean();
        let preparation = brew.preparation();
        let mill = brew.mill();
        let settings = services.settings.get_settings();
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Self {
            brew: Mutex::new(brew),
            bean,
            preparation,
            mill,
            settings,
            platform,
            services,
            card_surface: Mutex::new(None),
            rating_widget: Mutex::new(None),
            events,
        }
    }

    /// Observe `(action, brew)` events re-emitted after menu actions.
    pub fn subscribe(&self) -> broadcast::Receiver<BrewActionEvent> {
        self.events.subscribe()
    }

    /// Snapshot of the displayed brew.
    pub fn brew(&self) -> Brew {
        self.brew.lock().unwrap().clone()
    }

    pub fn bean(&self) -> Arc<Bean> {
        Arc::clone(&self.bean)
    }

    pub fn preparation(&self) -> Arc<Preparation> {
        Arc::clone(&self.preparation)
    }

    pub fn mill(&self) -> Option<Arc<Mill>> {
        self.mill.clone()
    }

    /// Mount the renderable card surface used by the share flow.
    pub fn attach_card_surface(&self, surface: Arc<dyn CardRenderer>) {
        *self.card_surface.lock().unwrap() = Some(surface);
    }

    /// Mount the rating widget kept in sync by [`Self::on_changes`].
    pub fn attach_rating_widget(&self, widget: Arc<dyn RatingWidget>) {
        *self.rating_widget.lock().unwrap() = Some(widget);
    }

    /// True when settings exist and deviate from the default 5-step-1 scale.
    pub fn has_custom_rating_range(&self) -> bool {
        if let Some(settings) = &self.settings {
            if settings.brew_rating != DEFAULT_MAX_RATING {
                return true;
            }
            if settings.brew_rating_steps != DEFAULT_RATING_STEPS {
                return true;
            }
        }
        false
    }

    pub fn custom_max_rating(&self) -> i32 {
        self.settings
            .as_ref()
            .map_or(DEFAULT_MAX_RATING, |settings| settings.brew_rating)
    }

    /// External change notification; resynchronizes the rating widget.
    pub fn on_changes(&self) {
        self.reset_rendering_rating();
    }

    fn reset_rendering_rating(&self) {
        let widget = self.rating_widget.lock().unwrap().clone();
        if let Some(widget) = widget {
            let rating = self.brew.lock().unwrap().rating;
            if rating > 0.0 {
                widget.set_rating(rating);
            }
        }
    }

    /// Tap on the card: open the detail view and notify observers.
    pub async fn show_brew(&self) {
        self.detail_brew().await;
        self.emit(BrewAction::Detail);
    }

    /// Long press on the card: open the edit flow and notify observers.
    pub async fn long_press_edit(&self) {
        self.edit_brew().await;
        self.emit(BrewAction::Edit);
    }

    /// Handle an action chosen from the secondary action menu, then re-emit
    /// it so the parent view can react.
    pub async fn show_brew_actions(&self, action: BrewAction) {
        self.services
            .analytics
            .track_event(BREW_CATEGORY, actions::POPOVER_ACTIONS);
        self.handle_action(action).await;
        self.emit(action);
    }

    /// Dispatch one semantic action to its handler.
    pub async fn handle_action(&self, action: BrewAction) {
        match action {
            BrewAction::Repeat => self.repeat_brew().await,
            BrewAction::Detail => self.detail_brew().await,
            BrewAction::Edit => self.edit_brew().await,
            BrewAction::Delete => {
                self.delete_brew().await;
            }
            BrewAction::PhotoGallery => self.view_photos().await,
            BrewAction::Cupping => self.cup_brew().await,
            BrewAction::ShowMapCoordinates => self.show_map_coordinates().await,
            BrewAction::FastRepeat => self.fast_repeat_brew().await,
            BrewAction::ToggleFavourite => self.toggle_favourite().await,
            BrewAction::Share => self.share().await,
        }
    }

    pub async fn repeat_brew(&self) {
        if self.services.helper.can_brew_or_notify().await {
            self.services
                .analytics
                .track_event(BREW_CATEGORY, actions::REPEAT);
            self.services.helper.repeat_brew(&self.brew()).await;
        }
    }

    /// Clone the brew as a fresh entry and persist it without opening any
    /// editor. Caffeine intake is logged when tracking is enabled, the dose
    /// is non-zero and the bean carries caffeine; afterwards the source
    /// bean's package is re-checked for depletion.
    pub async fn fast_repeat_brew(&self) {
        if !self.services.helper.can_brew_or_notify().await {
            return;
        }
        self.services
            .analytics
            .track_event(BREW_CATEGORY, actions::FAST_REPEAT);

        let repeat = self.services.helper.copy_brew_to_repeat(&self.brew());
        if let Err(err) = self.services.store.add(&repeat).await {
            error!("Persisting repeated brew failed: {err}");
            return;
        }

        self.services.tracker.track_brew(&repeat).await;

        let track_caffeine = self
            .settings
            .as_ref()
            .is_some_and(|settings| settings.track_caffeine_consumption);
        if track_caffeine && repeat.grind_weight > 0.0 && !repeat.bean().decaffeinated {
            self.services
                .health
                .track_caffeine_consumption(repeat.caffeine_amount_mg(), Utc::now())
                .await;
        }

        self.services
            .notifier
            .show_info_toast("TOAST_BREW_REPEATED_SUCCESSFULLY");

        self.services
            .helper
            .check_bean_package_consumed(&self.bean)
            .await;
    }

    pub async fn edit_brew(&self) {
        self.services.helper.edit_brew(&self.brew()).await;
    }

    pub async fn detail_brew(&self) {
        self.services.helper.detail_brew(&self.brew()).await;
    }

    pub async fn cup_brew(&self) {
        self.services.helper.cup_brew(&self.brew()).await;
    }

    pub async fn view_photos(&self) {
        self.services
            .analytics
            .track_event(BREW_CATEGORY, actions::PHOTO_VIEW);
        self.services.image_viewer.view_photos(&self.brew()).await;
    }

    pub async fn show_map_coordinates(&self) {
        let Some(link) = self.brew().coordinate_map_link() else {
            return;
        };
        self.services
            .analytics
            .track_event(BREW_CATEGORY, actions::SHOW_MAP);
        self.services.link_opener.open_external(&link);
    }

    /// Flip the favourite flag, persist the brew and toast the direction.
    pub async fn toggle_favourite(&self) {
        let updated = {
            let mut brew = self.brew.lock().unwrap();
            if !brew.favourite {
                self.services
                    .analytics
                    .track_event(BREW_CATEGORY, actions::ADD_FAVOURITE);
                self.services
                    .notifier
                    .show_info_toast("TOAST_BREW_FAVOURITE_ADDED");
                brew.favourite = true;
            } else {
                self.services
                    .analytics
                    .track_event(BREW_CATEGORY, actions::REMOVE_FAVOURITE);
                brew.favourite = false;
                self.services
                    .notifier
                    .show_info_toast("TOAST_BREW_FAVOURITE_REMOVED");
            }
            brew.clone()
        };

        if let Err(err) = self.services.store.update(&updated).await {
            error!("Persisting favourite change for brew {} failed: {err}", updated.id);
        }
    }

    /// Ask for confirmation, then remove the brew from storage. Declining
    /// abandons the operation silently. Returns whether the brew was
    /// removed.
    pub async fn delete_brew(&self) -> bool {
        let outcome = self
            .services
            .notifier
            .show_confirm("DELETE_BREW_QUESTION", "SURE_QUESTION", true)
            .await;
        if outcome != ConfirmOutcome::Confirmed {
            return false;
        }

        self.services
            .analytics
            .track_event(BREW_CATEGORY, actions::DELETE);

        let brew = self.brew();
        if let Err(err) = self.services.store.remove_by_object(&brew).await {
            error!("Deleting brew {} failed: {err}", brew.id);
            return false;
        }

        self.services
            .notifier
            .show_info_toast("TOAST_BREW_DELETED_SUCCESSFULLY");
        true
    }

    /// Rasterize the mounted card surface and hand the image to the share
    /// sheet. A no-op when no surface is mounted. Render or share failures
    /// clear the loading indicator and are logged; there is no retry.
    pub async fn share(&self) {
        self.services
            .analytics
            .track_event(BREW_CATEGORY, actions::SHARE);

        let surface = self.card_surface.lock().unwrap().clone();
        let Some(surface) = surface else {
            return;
        };

        self.services.notifier.show_loading_spinner();

        // The first rasterization is visually incomplete on some platforms;
        // render again there and discard the first result.
        let rendered = if self.platform.requires_double_render {
            match surface.render_to_image().await {
                Ok(_first) => {
                    sleep(RERENDER_DELAY).await;
                    surface.render_to_image().await
                }
                Err(err) => Err(err),
            }
        } else {
            surface.render_to_image().await
        };

        let image = match rendered {
            Ok(image) => image,
            Err(err) => {
                self.services.notifier.hide_loading_spinner();
                error!("Rendering brew card failed: {err}");
                return;
            }
        };

        self.services.notifier.hide_loading_spinner();
        sleep(SHARE_SHEET_DELAY).await;
        if let Err(err) = self.services.share_sink.share_image(image).await {
            error!("Sharing brew card failed: {err}");
        }
    }

    /// Union of custom flavor strings (verbatim, first) and the localized
    /// labels of the predefined flavor keys, in mapping key order.
    pub fn cupped_brew_flavors(&self) -> Vec<String> {
        let brew = self.brew.lock().unwrap();
        let mut flavors = brew.cupped_flavor.custom_flavors.clone();
        for key in brew.cupped_flavor.predefined_flavors.keys() {
            flavors.push(self.services.translator.instant(&format!("CUPPING_{key}")));
        }
        flavors
    }

    /// Build the visualizer export record for this brew. Dormant path: no
    /// user-facing trigger writes or uploads it yet.
    pub fn visualizer_export(&self) -> VisualizerShot {
        VisualizerShot::from_brew(&self.brew())
    }

    fn emit(&self, action: BrewAction) {
        // Nobody subscribed is fine; the parent view opts in.
        let _ = self.events.send(BrewActionEvent {
            action,
            brew: self.brew(),
        });
    }
}
