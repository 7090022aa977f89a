// src/application/coordinator.rs
//
// View Coordinator
//
// Owns the filter state, the selection and the two-view machine:
//
//   Catalogue ──checkout (non-empty selection)──▶ RequestForm
//   RequestForm ──back / delay after success──▶ Catalogue
//
// The cart and detail overlays are transient and only live in Catalogue.
// Leaving Catalogue closes both.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::{sleep_until, Instant};

use crate::application::config::MISSING_RELAY_NOTICE;
use crate::application::dto::{
    CatalogueViewDto, FacetGroupDto, GarmentCardDto, GarmentDetailDto, RequestFormDto,
    SelectedItemDto,
};
use crate::application::view_cache::DerivedViewCache;
use crate::domain::{
    build_item_summary, compute_facet_options, compute_filtered_products, validate_contact,
    Catalogue, ContactDetails, Facet, FacetOptions, FilterState, GarmentRecord, LoanRequest,
    SelectionState,
};
use crate::error::AppResult;
use crate::events::{EventBus, ViewChanged};
use crate::services::{FilterStateService, SelectionService, SubmissionService, SubmissionStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Catalogue,
    RequestForm,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Catalogue => "catalogue",
            View::RequestForm => "request_form",
        }
    }
}

/// Single-item overlay with its image carousel position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailOverlay {
    pub item_id: String,
    pub image_index: usize,
}

pub struct ArmarioCoordinator {
    catalogue: Arc<Catalogue>,
    filters: FilterStateService,
    selection: SelectionService,
    submission: Arc<SubmissionService>,
    event_bus: Arc<EventBus>,
    view: View,
    cart_open: bool,
    detail: Option<DetailOverlay>,
    return_deadline: Option<Instant>,
    return_delay: Duration,
    view_cache: DerivedViewCache,
}

impl ArmarioCoordinator {
    pub fn new(
        catalogue: Arc<Catalogue>,
        filters: FilterStateService,
        selection: SelectionService,
        submission: Arc<SubmissionService>,
        event_bus: Arc<EventBus>,
        return_delay: Duration,
    ) -> Self {
        Self {
            catalogue,
            filters,
            selection,
            submission,
            event_bus,
            view: View::Catalogue,
            cart_open: false,
            detail: None,
            return_deadline: None,
            return_delay,
            view_cache: DerivedViewCache::new(),
        }
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn event_bus(&self) -> &Arc<EventBus> {
        &self.event_bus
    }

    pub fn view(&self) -> View {
        self.view
    }

    // ========================================================================
    // FILTERS
    // ========================================================================

    pub fn filter_state(&self) -> &FilterState {
        self.filters.state()
    }

    pub fn filtered_products(&self) -> Vec<&GarmentRecord> {
        compute_filtered_products(&self.catalogue, self.filters.state())
    }

    pub fn facet_options(&self) -> FacetOptions {
        compute_facet_options(&self.catalogue, self.filters.state())
    }

    pub fn result_count(&self) -> usize {
        self.filtered_products().len()
    }

    pub fn toggle_facet_value(&mut self, facet: Facet, value: &str) -> bool {
        self.filters.toggle_facet_value(facet, value)
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.filters.set_query(text);
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear_all();
    }

    pub fn clear_facet(&mut self, facet: Facet) -> usize {
        self.filters.clear_facet(facet)
    }

    /// Everything the catalogue screen renders, served from the view cache
    pub fn catalogue_view(&mut self) -> CatalogueViewDto {
        let derived = self
            .view_cache
            .get_or_compute(&self.catalogue, self.filters.state());
        let state = self.filters.state();

        let products = derived
            .item_ids
            .iter()
            .filter_map(|id| self.catalogue.get(id))
            .map(|record| GarmentCardDto::from_record(record, self.selection.contains(&record.item_id)))
            .collect();

        CatalogueViewDto {
            products,
            facets: FacetGroupDto::build_all(&derived.options, state),
            result_count: derived.result_count(),
            query: state.query.clone(),
            selection_count: self.selection_count(),
        }
    }

    // ========================================================================
    // SELECTION
    // ========================================================================

    pub fn selection(&self) -> &SelectionState {
        self.selection.selection()
    }

    /// Adds a catalogue item to the selection. Unknown ids are ignored.
    pub fn add_to_selection(&mut self, item_id: &str) -> bool {
        if !self.catalogue.contains(item_id) {
            log::debug!("Ignoring selection of unknown item '{}'", item_id);
            return false;
        }
        self.selection.add(item_id)
    }

    pub fn remove_from_selection(&mut self, item_id: &str) -> bool {
        self.selection.remove(item_id)
    }

    /// Empties the selection and closes the cart overlay
    pub fn clear_selection(&mut self) -> usize {
        self.cart_open = false;
        self.selection.clear()
    }

    pub fn is_selected(&self, item_id: &str) -> bool {
        self.selection.contains(item_id)
    }

    /// Selected records that still exist in the catalogue
    pub fn selected_items(&self) -> Vec<&GarmentRecord> {
        self.selection.resolve(&self.catalogue)
    }

    pub fn selection_count(&self) -> usize {
        self.selected_items().len()
    }

    // ========================================================================
    // OVERLAYS
    // ========================================================================

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn open_cart(&mut self) -> bool {
        if self.view != View::Catalogue {
            return false;
        }
        self.cart_open = true;
        true
    }

    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }

    pub fn detail(&self) -> Option<&DetailOverlay> {
        self.detail.as_ref()
    }

    pub fn open_detail(&mut self, item_id: &str) -> bool {
        if self.view != View::Catalogue || !self.catalogue.contains(item_id) {
            return false;
        }
        self.detail = Some(DetailOverlay {
            item_id: item_id.to_string(),
            image_index: 0,
        });
        true
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    pub fn next_image(&mut self) -> Option<usize> {
        self.step_image(1)
    }

    pub fn previous_image(&mut self) -> Option<usize> {
        self.step_image(-1)
    }

    fn step_image(&mut self, step: isize) -> Option<usize> {
        let detail = self.detail.as_mut()?;
        let count = self.catalogue.get(&detail.item_id)?.image_count();
        if count == 0 {
            return Some(0);
        }
        let next = (detail.image_index as isize + step).rem_euclid(count as isize);
        detail.image_index = next as usize;
        Some(detail.image_index)
    }

    pub fn detail_view(&self) -> Option<GarmentDetailDto> {
        let detail = self.detail.as_ref()?;
        let record = self.catalogue.get(&detail.item_id)?;
        Some(GarmentDetailDto::from_record(record, detail.image_index))
    }

    // ========================================================================
    // VIEW MACHINE
    // ========================================================================

    /// Move to the request form. A no-op when nothing selected resolves.
    pub fn checkout(&mut self) -> bool {
        if self.view != View::Catalogue {
            return false;
        }
        if self.selection_count() == 0 {
            log::debug!("Checkout ignored: selection is empty");
            return false;
        }

        self.cart_open = false;
        if !self.submission.is_submitting() {
            self.submission.reset();
        }
        self.transition(View::RequestForm);
        true
    }

    /// Explicit back-navigation from the request form
    pub fn back_to_catalogue(&mut self) -> bool {
        if self.view != View::RequestForm {
            return false;
        }

        match self.submission.status() {
            SubmissionStatus::Succeeded => self.finish_successful_submission(),
            SubmissionStatus::Submitting => self.transition(View::Catalogue),
            _ => {
                self.submission.reset();
                self.transition(View::Catalogue);
            }
        }
        true
    }

    fn transition(&mut self, to: View) {
        if self.view == to {
            return;
        }
        let from = self.view;
        if from == View::Catalogue {
            self.cart_open = false;
            self.detail = None;
        }
        self.view = to;

        log::info!("View: {} -> {}", from.as_str(), to.as_str());
        self.event_bus
            .emit(ViewChanged::new(from.as_str().to_string(), to.as_str().to_string()));
    }

    // ========================================================================
    // SUBMISSION
    // ========================================================================

    pub fn submission_status(&self) -> SubmissionStatus {
        self.submission.status()
    }

    /// Static inline notice when the relay id is missing
    pub fn configuration_notice(&self) -> Option<&'static str> {
        (!self.submission.is_configured()).then_some(MISSING_RELAY_NOTICE)
    }

    /// Open only on the form, with a relay, while nothing is in flight or
    /// already confirmed
    pub fn can_submit(&self) -> bool {
        self.view == View::RequestForm
            && self.submission.is_configured()
            && !matches!(
                self.submission.status(),
                SubmissionStatus::Submitting | SubmissionStatus::Succeeded
            )
            && self.selection_count() > 0
    }

    pub fn request_summary(&self) -> String {
        build_item_summary(&self.selected_items())
    }

    pub fn request_form(&self) -> RequestFormDto {
        let items = self.selected_items();
        RequestFormDto {
            item_summary: build_item_summary(&items),
            items: items.into_iter().map(SelectedItemDto::from).collect(),
            can_submit: self.can_submit(),
            notice: self.configuration_notice().map(str::to_string),
            status: self.submission.status().as_str().to_string(),
        }
    }

    /// Validate and dispatch the request for the current selection.
    ///
    /// Inert (returns the current status, dispatches nothing) unless
    /// `can_submit()`. Field problems found locally become a `Failed`
    /// status without reaching the relay. On success the return deadline
    /// is armed; the view stays on the confirmation until it passes.
    pub async fn submit_request(&mut self, contact: ContactDetails) -> AppResult<SubmissionStatus> {
        if !self.can_submit() {
            log::debug!("Submit ignored: submission not available");
            return Ok(self.submission.status());
        }

        let items = self.selected_items();
        let item_count = items.len();

        if let Err(errors) = validate_contact(&contact) {
            log::debug!("Contact details rejected locally ({} errors)", errors.len());
            return Ok(self.submission.reject(errors, item_count));
        }

        let request = LoanRequest::new(&items, contact);
        let status = self.submission.submit(request, item_count).await?;

        if status == SubmissionStatus::Succeeded {
            self.return_deadline = Some(Instant::now() + self.return_delay);
        }
        Ok(status)
    }

    pub fn return_deadline(&self) -> Option<Instant> {
        self.return_deadline
    }

    /// Wait out the confirmation delay, then return to the catalogue.
    /// Returns false when no successful submission is pending.
    pub async fn complete_after_delay(&mut self) -> bool {
        let Some(deadline) = self.return_deadline else {
            return false;
        };
        sleep_until(deadline).await;

        if self.view == View::RequestForm && self.submission.status() == SubmissionStatus::Succeeded {
            self.finish_successful_submission();
            true
        } else {
            self.return_deadline = None;
            false
        }
    }

    /// Submit, and on success return to the catalogue after the delay
    pub async fn submit_and_return(&mut self, contact: ContactDetails) -> AppResult<SubmissionStatus> {
        let status = self.submit_request(contact).await?;
        if status == SubmissionStatus::Succeeded {
            self.complete_after_delay().await;
        }
        Ok(status)
    }

    fn finish_successful_submission(&mut self) {
        self.return_deadline = None;
        self.selection.clear();
        self.submission.reset();
        self.transition(View::Catalogue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::sample_catalogue;
    use crate::domain::request::{FIELD_EMAIL, FIELD_PHONE};
    use crate::domain::FieldError;
    use crate::integrations::{MockFormRelay, RelayOutcome};
    use crate::repositories::{
        FilterStateStore, InMemoryStateRepository, SelectionStore, StateRepository,
        SELECTION_STORAGE_KEY,
    };

    const DELAY: Duration = Duration::from_millis(5000);

    struct Harness {
        coordinator: ArmarioCoordinator,
        repo: Arc<InMemoryStateRepository>,
        bus: Arc<EventBus>,
    }

    fn harness(relay: Option<MockFormRelay>) -> Harness {
        let repo = Arc::new(InMemoryStateRepository::new());
        let bus = Arc::new(EventBus::new());
        let shared: Arc<dyn StateRepository> = repo.clone();

        let relay = relay.map(|r| Arc::new(r) as Arc<dyn crate::integrations::FormRelay>);
        let coordinator = ArmarioCoordinator::new(
            Arc::new(sample_catalogue()),
            FilterStateService::new(FilterStateStore::new(Arc::clone(&shared)), Arc::clone(&bus)),
            SelectionService::new(SelectionStore::new(shared), Arc::clone(&bus)),
            Arc::new(SubmissionService::new(relay, Arc::clone(&bus))),
            Arc::clone(&bus),
            DELAY,
        );

        Harness {
            coordinator,
            repo,
            bus,
        }
    }

    fn accepting_relay() -> MockFormRelay {
        let mut relay = MockFormRelay::new();
        relay.expect_submit().times(1).returning(|_| Ok(RelayOutcome::Accepted));
        relay
    }

    fn contact() -> ContactDetails {
        ContactDetails {
            full_name: "Marta Ruiz".to_string(),
            email: "marta@example.org".to_string(),
            phone: "600123123".to_string(),
            message: String::new(),
        }
    }

    #[test]
    fn test_add_then_remove_leaves_empty_selection_in_storage() {
        let Harness { mut coordinator, repo, .. } = harness(None);

        assert!(coordinator.add_to_selection("001"));
        assert!(coordinator.remove_from_selection("001"));

        assert!(coordinator.selection().is_empty());
        assert_eq!(repo.load(SELECTION_STORAGE_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_unknown_item_not_added() {
        let Harness { mut coordinator, .. } = harness(None);
        assert!(!coordinator.add_to_selection("999"));
        assert!(coordinator.selection().is_empty());
    }

    #[test]
    fn test_checkout_requires_selection() {
        let Harness { mut coordinator, bus, .. } = harness(None);

        assert!(!coordinator.checkout());
        assert_eq!(coordinator.view(), View::Catalogue);

        coordinator.add_to_selection("002");
        assert!(coordinator.checkout());
        assert_eq!(coordinator.view(), View::RequestForm);

        let types: Vec<String> = bus.get_event_log().into_iter().map(|e| e.event_type).collect();
        assert!(types.contains(&"ViewChanged".to_string()));
    }

    #[test]
    fn test_checkout_with_only_stale_ids_is_noop() {
        let Harness { mut coordinator, repo, .. } = harness(None);
        repo.save(SELECTION_STORAGE_KEY, r#"["gone-1","gone-2"]"#).unwrap();

        // Reload the selection from storage
        let bus = Arc::clone(coordinator.event_bus());
        let shared: Arc<dyn StateRepository> = repo.clone();
        coordinator.selection = SelectionService::new(SelectionStore::new(shared), bus);

        assert_eq!(coordinator.selection().len(), 2);
        assert_eq!(coordinator.selection_count(), 0);
        assert!(!coordinator.checkout());
        assert_eq!(coordinator.view(), View::Catalogue);
    }

    #[test]
    fn test_leaving_catalogue_closes_overlays() {
        let Harness { mut coordinator, .. } = harness(None);
        coordinator.add_to_selection("001");
        assert!(coordinator.open_cart());
        assert!(coordinator.open_detail("003"));

        coordinator.checkout();

        assert!(!coordinator.is_cart_open());
        assert!(coordinator.detail().is_none());
        assert!(!coordinator.open_cart());
        assert!(!coordinator.open_detail("003"));
    }

    #[test]
    fn test_clear_selection_closes_cart() {
        let Harness { mut coordinator, .. } = harness(None);
        coordinator.add_to_selection("001");
        coordinator.add_to_selection("004");
        coordinator.open_cart();

        assert_eq!(coordinator.clear_selection(), 2);
        assert!(!coordinator.is_cart_open());
    }

    #[test]
    fn test_detail_carousel_wraps() {
        let Harness { mut coordinator, .. } = harness(None);
        assert!(coordinator.next_image().is_none());

        coordinator.open_detail("001");
        // Single image: both directions stay on it
        assert_eq!(coordinator.next_image(), Some(0));
        assert_eq!(coordinator.previous_image(), Some(0));
        assert_eq!(coordinator.detail_view().unwrap().image_url, "/img/001.jpg");
        assert!(!coordinator.open_detail("999"));
    }

    #[test]
    fn test_catalogue_view_reflects_filters() {
        let Harness { mut coordinator, .. } = harness(None);
        coordinator.add_to_selection("003");
        coordinator.toggle_facet_value(Facet::Category, "Capa");

        let view = coordinator.catalogue_view();

        assert_eq!(view.result_count, 2);
        assert_eq!(view.result_count, coordinator.result_count());
        assert_eq!(view.selection_count, 1);
        let flagged: Vec<&str> = view
            .products
            .iter()
            .filter(|p| p.in_selection)
            .map(|p| p.item_id.as_str())
            .collect();
        assert_eq!(flagged, vec!["003"]);

        coordinator.clear_filters();
        assert_eq!(coordinator.catalogue_view().result_count, 5);
    }

    #[tokio::test]
    async fn test_unconfigured_submission_is_inert() {
        let Harness { mut coordinator, .. } = harness(None);
        coordinator.add_to_selection("001");
        coordinator.checkout();

        assert!(!coordinator.can_submit());
        assert_eq!(coordinator.configuration_notice(), Some(MISSING_RELAY_NOTICE));

        let status = coordinator.submit_request(contact()).await.unwrap();
        assert_eq!(status, SubmissionStatus::Idle);
        assert_eq!(coordinator.view(), View::RequestForm);
    }

    #[tokio::test]
    async fn test_invalid_contact_fails_locally() {
        let mut relay = MockFormRelay::new();
        relay.expect_submit().times(0);
        let Harness { mut coordinator, .. } = harness(Some(relay));
        coordinator.add_to_selection("001");
        coordinator.checkout();

        let mut details = contact();
        details.email = "not-an-email".to_string();
        let status = coordinator.submit_request(details).await.unwrap();

        assert_eq!(status.as_str(), "failed");
        assert_eq!(status.errors_for(Some(FIELD_EMAIL)).len(), 1);
        assert_eq!(coordinator.view(), View::RequestForm);
        assert_eq!(coordinator.selection_count(), 1);
    }

    #[tokio::test]
    async fn test_relay_rejection_keeps_selection_and_view() {
        let mut relay = MockFormRelay::new();
        relay.expect_submit().returning(|_| {
            Ok(RelayOutcome::Rejected(vec![FieldError::for_field(FIELD_PHONE, "too short")]))
        });
        let Harness { mut coordinator, .. } = harness(Some(relay));
        coordinator.add_to_selection("002");
        coordinator.checkout();

        let status = coordinator.submit_and_return(contact()).await.unwrap();

        assert_eq!(status.errors_for(Some(FIELD_PHONE)), vec!["too short"]);
        assert_eq!(coordinator.view(), View::RequestForm);
        assert_eq!(coordinator.selection_count(), 1);
        assert!(coordinator.return_deadline().is_none());

        // Back-navigation after a failure resets the status, keeps the selection
        assert!(coordinator.back_to_catalogue());
        assert_eq!(coordinator.submission_status(), SubmissionStatus::Idle);
        assert_eq!(coordinator.selection_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_returns_to_catalogue_after_delay() {
        let Harness { mut coordinator, repo, .. } = harness(Some(accepting_relay()));
        coordinator.add_to_selection("001");
        coordinator.add_to_selection("004");
        assert!(coordinator.checkout());

        let status = coordinator.submit_request(contact()).await.unwrap();
        assert_eq!(status, SubmissionStatus::Succeeded);
        assert_eq!(coordinator.view(), View::RequestForm);

        let started = Instant::now();
        assert!(coordinator.complete_after_delay().await);

        assert!(started.elapsed() >= DELAY);
        assert_eq!(coordinator.view(), View::Catalogue);
        assert!(coordinator.selection().is_empty());
        assert_eq!(coordinator.submission_status(), SubmissionStatus::Idle);
        assert_eq!(repo.load(SELECTION_STORAGE_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_and_return_needs_no_further_input() {
        let Harness { mut coordinator, .. } = harness(Some(accepting_relay()));
        coordinator.add_to_selection("005");
        coordinator.checkout();

        let status = coordinator.submit_and_return(contact()).await.unwrap();

        assert_eq!(status, SubmissionStatus::Succeeded);
        assert_eq!(coordinator.view(), View::Catalogue);
        assert!(coordinator.selection().is_empty());
        assert!(!coordinator.complete_after_delay().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_confirmed_request_is_not_sent_again() {
        let Harness { mut coordinator, bus, .. } = harness(Some(accepting_relay()));
        coordinator.add_to_selection("002");
        coordinator.checkout();

        let first = coordinator.submit_request(contact()).await.unwrap();
        let deadline = coordinator.return_deadline();
        assert_eq!(first, SubmissionStatus::Succeeded);
        assert!(!coordinator.can_submit());

        let second = coordinator.submit_request(contact()).await.unwrap();

        assert_eq!(second, SubmissionStatus::Succeeded);
        assert_eq!(coordinator.return_deadline(), deadline);
        let status_events = bus
            .get_event_log()
            .into_iter()
            .filter(|e| e.event_type == "SubmissionStatusChanged")
            .count();
        assert_eq!(status_events, 2);
    }

    #[tokio::test]
    async fn test_back_after_success_clears_selection() {
        let Harness { mut coordinator, .. } = harness(Some(accepting_relay()));
        coordinator.add_to_selection("001");
        coordinator.checkout();
        coordinator.submit_request(contact()).await.unwrap();

        assert!(coordinator.back_to_catalogue());

        assert_eq!(coordinator.view(), View::Catalogue);
        assert!(coordinator.selection().is_empty());
        assert!(coordinator.return_deadline().is_none());
    }

    #[test]
    fn test_request_form_summary() {
        let Harness { mut coordinator, .. } = harness(None);
        coordinator.add_to_selection("003");
        coordinator.checkout();

        let form = coordinator.request_form();
        assert_eq!(form.items.len(), 1);
        assert!(form.item_summary.starts_with("1. PRENDA: Capa corta"));
        assert_eq!(form.item_summary, coordinator.request_summary());
        assert!(!form.can_submit);
        assert!(form.notice.is_some());
        assert_eq!(form.status, "idle");
    }
}
