//! Recording mock collaborators for tests.
//!
//! Each mock records the calls it receives behind a `Mutex` so tests can
//! assert on delegation without any real storage, UI or platform APIs.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{ServiceError, ServiceResult};
use crate::models::{Bean, Brew, Settings};

use super::{
    AnalyticsSink, BrewHelper, BrewStore, BrewTracker, CardRenderer, ConfirmOutcome, HealthSink,
    ImageViewer, LinkOpener, Notifier, RatingWidget, SettingsSource, ShareSink, Translator,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Add(String),
    Update(String),
    Remove(String),
}

#[derive(Default)]
pub struct MockBrewStore {
    pub calls: Mutex<Vec<StoreCall>>,
    pub fail_add: bool,
    pub fail_update: bool,
    pub fail_remove: bool,
}

impl MockBrewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_remove() -> Self {
        Self {
            fail_remove: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BrewStore for MockBrewStore {
    async fn add(&self, brew: &Brew) -> ServiceResult<()> {
        if self.fail_add {
            return Err(ServiceError::Storage("add rejected".into()));
        }
        self.calls.lock().unwrap().push(StoreCall::Add(brew.id.clone()));
        Ok(())
    }

    async fn update(&self, brew: &Brew) -> ServiceResult<()> {
        if self.fail_update {
            return Err(ServiceError::Storage("update rejected".into()));
        }
        self.calls
            .lock()
            .unwrap()
            .push(StoreCall::Update(brew.id.clone()));
        Ok(())
    }

    async fn remove_by_object(&self, brew: &Brew) -> ServiceResult<()> {
        if self.fail_remove {
            return Err(ServiceError::Storage("remove rejected".into()));
        }
        self.calls
            .lock()
            .unwrap()
            .push(StoreCall::Remove(brew.id.clone()));
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelperCall {
    Repeat(String),
    Edit(String),
    Detail(String),
    Cup(String),
    CheckBeanConsumed(String),
}

pub struct MockBrewHelper {
    pub allow_brewing: bool,
    pub calls: Mutex<Vec<HelperCall>>,
}

impl Default for MockBrewHelper {
    fn default() -> Self {
        Self {
            allow_brewing: true,
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl MockBrewHelper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn brewing_blocked() -> Self {
        Self {
            allow_brewing: false,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<HelperCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BrewHelper for MockBrewHelper {
    async fn can_brew_or_notify(&self) -> bool {
        self.allow_brewing
    }

    fn copy_brew_to_repeat(&self, brew: &Brew) -> Brew {
        let mut copy = brew.clone();
        copy.id = Uuid::new_v4().to_string();
        copy.created_at = Utc::now();
        copy
    }

    async fn repeat_brew(&self, brew: &Brew) {
        self.calls
            .lock()
            .unwrap()
            .push(HelperCall::Repeat(brew.id.clone()));
    }

    async fn edit_brew(&self, brew: &Brew) {
        self.calls
            .lock()
            .unwrap()
            .push(HelperCall::Edit(brew.id.clone()));
    }

    async fn detail_brew(&self, brew: &Brew) {
        self.calls
            .lock()
            .unwrap()
            .push(HelperCall::Detail(brew.id.clone()));
    }

    async fn cup_brew(&self, brew: &Brew) {
        self.calls
            .lock()
            .unwrap()
            .push(HelperCall::Cup(brew.id.clone()));
    }

    async fn check_bean_package_consumed(&self, bean: &Bean) {
        self.calls
            .lock()
            .unwrap()
            .push(HelperCall::CheckBeanConsumed(bean.id.clone()));
    }
}

pub struct MockNotifier {
    pub confirm_outcome: ConfirmOutcome,
    pub toasts: Mutex<Vec<String>>,
    pub confirms: Mutex<Vec<(String, String, bool)>>,
    pub spinner_shown: AtomicUsize,
    pub spinner_hidden: AtomicUsize,
}

impl Default for MockNotifier {
    fn default() -> Self {
        Self {
            confirm_outcome: ConfirmOutcome::Confirmed,
            toasts: Mutex::new(Vec::new()),
            confirms: Mutex::new(Vec::new()),
            spinner_shown: AtomicUsize::new(0),
            spinner_hidden: AtomicUsize::new(0),
        }
    }
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declining() -> Self {
        Self {
            confirm_outcome: ConfirmOutcome::Declined,
            ..Self::default()
        }
    }

    pub fn toasts(&self) -> Vec<String> {
        self.toasts.lock().unwrap().clone()
    }

    pub fn spinner_shown(&self) -> usize {
        self.spinner_shown.load(Ordering::SeqCst)
    }

    pub fn spinner_hidden(&self) -> usize {
        self.spinner_hidden.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    fn show_info_toast(&self, message_key: &str) {
        self.toasts.lock().unwrap().push(message_key.to_string());
    }

    async fn show_confirm(
        &self,
        body_key: &str,
        title_key: &str,
        destructive: bool,
    ) -> ConfirmOutcome {
        self.confirms
            .lock()
            .unwrap()
            .push((body_key.to_string(), title_key.to_string(), destructive));
        self.confirm_outcome
    }

    fn show_loading_spinner(&self) {
        self.spinner_shown.fetch_add(1, Ordering::SeqCst);
    }

    fn hide_loading_spinner(&self) {
        self.spinner_hidden.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
pub struct MockAnalytics {
    pub events: Mutex<Vec<(String, String)>>,
}

impl MockAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(String, String)> {
        self.events.lock().unwrap().clone()
    }
}

impl AnalyticsSink for MockAnalytics {
    fn track_event(&self, category: &str, action: &str) {
        self.events
            .lock()
            .unwrap()
            .push((category.to_string(), action.to_string()));
    }
}

#[derive(Default)]
pub struct MockBrewTracker {
    pub tracked: Mutex<Vec<String>>,
}

impl MockBrewTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tracked(&self) -> Vec<String> {
        self.tracked.lock().unwrap().clone()
    }
}

#[async_trait]
impl BrewTracker for MockBrewTracker {
    async fn track_brew(&self, brew: &Brew) {
        self.tracked.lock().unwrap().push(brew.id.clone());
    }
}

#[derive(Default)]
pub struct MockHealthSink {
    pub entries: Mutex<Vec<(f64, DateTime<Utc>)>>,
}

impl MockHealthSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(f64, DateTime<Utc>)> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl HealthSink for MockHealthSink {
    async fn track_caffeine_consumption(&self, amount_mg: f64, at: DateTime<Utc>) {
        self.entries.lock().unwrap().push((amount_mg, at));
    }
}

#[derive(Default)]
pub struct MockImageViewer {
    pub viewed: Mutex<Vec<String>>,
}

impl MockImageViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn viewed(&self) -> Vec<String> {
        self.viewed.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageViewer for MockImageViewer {
    async fn view_photos(&self, brew: &Brew) {
        self.viewed.lock().unwrap().push(brew.id.clone());
    }
}

#[derive(Default)]
pub struct MockShareSink {
    pub shared: Mutex<Vec<Vec<u8>>>,
    pub fail: bool,
}

impl MockShareSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn shared(&self) -> Vec<Vec<u8>> {
        self.shared.lock().unwrap().clone()
    }
}

#[async_trait]
impl ShareSink for MockShareSink {
    async fn share_image(&self, image: Vec<u8>) -> ServiceResult<()> {
        if self.fail {
            return Err(ServiceError::Share("share sheet unavailable".into()));
        }
        self.shared.lock().unwrap().push(image);
        Ok(())
    }
}

/// Translator backed by a fixed table; unknown keys pass through verbatim.
#[derive(Default)]
pub struct MockTranslator {
    pub translations: Mutex<HashMap<String, String>>,
}

impl MockTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_translation(self, key: &str, text: &str) -> Self {
        self.translations
            .lock()
            .unwrap()
            .insert(key.to_string(), text.to_string());
        self
    }
}

impl Translator for MockTranslator {
    fn instant(&self, key: &str) -> String {
        self.translations
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

#[derive(Default)]
pub struct MockLinkOpener {
    pub opened: Mutex<Vec<String>>,
}

impl MockLinkOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl LinkOpener for MockLinkOpener {
    fn open_external(&self, url: &str) {
        self.opened.lock().unwrap().push(url.to_string());
    }
}

#[derive(Default)]
pub struct MockSettingsSource {
    pub settings: Mutex<Option<Settings>>,
}

impl MockSettingsSource {
    pub fn new(settings: Option<Settings>) -> Self {
        Self {
            settings: Mutex::new(settings),
        }
    }

    pub fn absent() -> Self {
        Self::new(None)
    }
}

impl SettingsSource for MockSettingsSource {
    fn get_settings(&self) -> Option<Settings> {
        self.settings.lock().unwrap().clone()
    }
}

/// Card surface whose n-th render yields the single byte `n`, so tests can
/// tell which render result was shared. `fail_on_render` makes that render
/// (1-based) fail instead.
#[derive(Default)]
pub struct MockCardRenderer {
    pub renders: AtomicUsize,
    pub fail_on_render: Option<usize>,
}

impl MockCardRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(render: usize) -> Self {
        Self {
            renders: AtomicUsize::new(0),
            fail_on_render: Some(render),
        }
    }

    pub fn renders(&self) -> usize {
        self.renders.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CardRenderer for MockCardRenderer {
    async fn render_to_image(&self) -> ServiceResult<Vec<u8>> {
        let call = self.renders.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_on_render == Some(call) {
            return Err(ServiceError::Render("surface not ready".into()));
        }
        Ok(vec![call as u8])
    }
}

#[derive(Default)]
pub struct MockRatingWidget {
    pub ratings: Mutex<Vec<f64>>,
}

impl MockRatingWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ratings(&self) -> Vec<f64> {
        self.ratings.lock().unwrap().clone()
    }
}

impl RatingWidget for MockRatingWidget {
    fn set_rating(&self, rating: f64) {
        self.ratings.lock().unwrap().push(rating);
    }
}
