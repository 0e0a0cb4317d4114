//! Hub service — use-cases for appliance registration, slot binding,
//! operation, and undo.

use tokio::sync::Mutex;

use homehub_domain::appliance::ApplianceStatus;
use homehub_domain::error::HomeHubError;
use homehub_domain::id::{ApplianceName, SlotId};

use crate::error::Rejection;
use crate::messages::{Locale, MessageCatalog, MessageKey};
use crate::ports::StateStore;
use crate::response::{ApplianceOperated, ApplianceRegistered, SlotBound};

/// Application service for the hub's remote-control operations.
///
/// Owns the state store behind a single [`Mutex`]. Every operation
/// acquires the lock exactly once for its whole validate-then-mutate
/// sequence, so concurrent requests cannot interleave a check with
/// another request's write (two simultaneous binds to one slot cannot
/// both observe it as available). Nothing awaits while the lock is held.
pub struct HomeHubService<S> {
    store: Mutex<S>,
    catalog: MessageCatalog,
    locale: Locale,
}

impl<S: StateStore> HomeHubService<S> {
    /// Create a new service over the given store, rendering user-facing
    /// text from `catalog` in `locale`.
    pub fn new(store: S, catalog: MessageCatalog, locale: Locale) -> Self {
        Self {
            store: Mutex::new(store),
            catalog,
            locale,
        }
    }

    /// Pair `error` with its detail rendered in the service's locale.
    ///
    /// Boundaries use this for failures they detect before calling into
    /// the service, such as path-parameter validation.
    pub fn reject(&self, error: HomeHubError) -> Rejection {
        Rejection {
            detail: self.catalog.describe_error(&self.locale, &error),
            error,
        }
    }

    fn render(&self, key: MessageKey, args: &[&str]) -> String {
        self.catalog.render(&self.locale, key, args)
    }

    /// Register a new appliance name with the hub.
    ///
    /// # Errors
    ///
    /// Returns [`HomeHubError::ApplianceAlreadyRegistered`] when the name
    /// is already in the registry.
    #[tracing::instrument(skip(self, name), fields(appliance = %name))]
    pub async fn register_appliance(
        &self,
        name: ApplianceName,
    ) -> Result<ApplianceRegistered, Rejection> {
        let mut store = self.store.lock().await;
        if store.is_registered(&name) {
            return Err(self.reject(HomeHubError::ApplianceAlreadyRegistered { appliance: name }));
        }
        store.register(name.clone());
        drop(store);

        tracing::info!("appliance registered");
        let message = self.render(
            MessageKey::ApplianceSuccessfullyRegistered,
            &[name.as_str()],
        );
        Ok(ApplianceRegistered {
            appliance: name,
            message,
        })
    }

    /// Bind a remote slot to a registered appliance.
    ///
    /// The checks run in a fixed order — registration, then whether the
    /// appliance is already bound elsewhere, then slot availability — so
    /// the reported failure kind is deterministic when several
    /// preconditions are violated at once.
    ///
    /// # Errors
    ///
    /// Returns [`HomeHubError::ApplianceNotRegistered`],
    /// [`HomeHubError::ApplianceAlreadyBound`], or
    /// [`HomeHubError::SlotUnavailable`] for the respective violated
    /// precondition.
    #[tracing::instrument(skip(self, slot, appliance), fields(slot = %slot, appliance = %appliance))]
    pub async fn bind_slot(
        &self,
        slot: SlotId,
        appliance: ApplianceName,
    ) -> Result<SlotBound, Rejection> {
        let mut store = self.store.lock().await;
        if !store.is_registered(&appliance) {
            return Err(self.reject(HomeHubError::ApplianceNotRegistered { appliance }));
        }
        if store.is_appliance_bound(&appliance) {
            return Err(self.reject(HomeHubError::ApplianceAlreadyBound { appliance }));
        }
        if !store.is_slot_available(&slot) {
            return Err(self.reject(HomeHubError::SlotUnavailable { slot }));
        }
        store.bind(slot.clone(), appliance.clone());
        drop(store);

        tracing::info!("slot bound");
        let message = self.render(
            MessageKey::BindingSuccessful,
            &[slot.as_str(), appliance.as_str()],
        );
        Ok(SlotBound {
            slot,
            appliance,
            message,
        })
    }

    /// Apply an operation code (`0` = off, `1` = on) to the appliance
    /// bound to `slot`.
    ///
    /// The code is validated before the store is consulted, so an invalid
    /// code never touches any binding.
    ///
    /// # Errors
    ///
    /// Returns [`HomeHubError::InvalidOperation`] for codes outside
    /// `{0, 1}` and [`HomeHubError::SlotNotBound`] when the slot has no
    /// binding.
    #[tracing::instrument(skip(self, slot), fields(slot = %slot))]
    pub async fn operate_appliance(
        &self,
        slot: SlotId,
        code: i64,
    ) -> Result<ApplianceOperated, Rejection> {
        let Some(status) = ApplianceStatus::from_code(code) else {
            return Err(self.reject(HomeHubError::InvalidOperation {
                slot,
                code: code.to_string(),
            }));
        };

        let mut store = self.store.lock().await;
        if store.is_slot_available(&slot) {
            return Err(self.reject(HomeHubError::SlotNotBound { slot }));
        }
        let appliance = store
            .set_status(&slot, status)
            .map_err(|error| self.reject(error))?;
        drop(store);

        tracing::info!(status = %appliance.status, "appliance operated");
        let status_name = appliance.status.to_string();
        let message = self.render(
            MessageKey::ApplianceOperationSuccessful,
            &[appliance.name.as_str(), &status_name],
        );
        Ok(ApplianceOperated { appliance, message })
    }

    /// Invert the status of the appliance at the last-operated slot.
    ///
    /// This is a toggle replay, not an undo stack: the flip itself records
    /// the same slot as last-operated again, so a second consecutive undo
    /// re-flips the same appliance.
    ///
    /// # Errors
    ///
    /// Returns [`HomeHubError::NoPriorOperation`] when no status change
    /// has happened since the hub started.
    #[tracing::instrument(skip(self))]
    pub async fn undo_last_operation(&self) -> Result<ApplianceOperated, Rejection> {
        let mut store = self.store.lock().await;
        if store.last_operated_slot().is_none() {
            return Err(self.reject(HomeHubError::NoPriorOperation));
        }
        let appliance = store.undo_last().map_err(|error| self.reject(error))?;
        drop(store);

        tracing::info!(status = %appliance.status, "operation undone");
        let status_name = appliance.status.to_string();
        let message = self.render(
            MessageKey::ApplianceOperationSuccessful,
            &[appliance.name.as_str(), &status_name],
        );
        Ok(ApplianceOperated { appliance, message })
    }

    /// All currently-bound slots, sorted for stable output.
    ///
    /// The store guarantees no order; sorting here keeps the rendered
    /// list deterministic for callers.
    pub async fn list_bound_slots(&self) -> Vec<SlotId> {
        let store = self.store.lock().await;
        let mut slots = store.bound_slots();
        drop(store);
        slots.sort();
        slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homehub_domain::appliance::Appliance;
    use homehub_domain::error::HomeHubError;
    use std::collections::{HashMap, HashSet};
    use std::sync::{Arc, Mutex as StdMutex};

    use crate::messages::Bundle;

    #[derive(Default)]
    struct FakeInner {
        registry: HashSet<ApplianceName>,
        bindings: HashMap<SlotId, Appliance>,
        last_operated: Option<SlotId>,
        register_calls: usize,
        bind_calls: usize,
        set_status_calls: usize,
    }

    /// Shared-handle fake so tests can inspect call counts after moving a
    /// clone into the service.
    #[derive(Clone, Default)]
    struct FakeStore {
        inner: Arc<StdMutex<FakeInner>>,
    }

    impl StateStore for FakeStore {
        fn is_registered(&self, name: &ApplianceName) -> bool {
            self.inner.lock().unwrap().registry.contains(name)
        }

        fn register(&mut self, name: ApplianceName) {
            let mut inner = self.inner.lock().unwrap();
            inner.register_calls += 1;
            inner.registry.insert(name);
        }

        fn is_slot_available(&self, slot: &SlotId) -> bool {
            !self.inner.lock().unwrap().bindings.contains_key(slot)
        }

        fn is_appliance_bound(&self, name: &ApplianceName) -> bool {
            self.inner
                .lock()
                .unwrap()
                .bindings
                .values()
                .any(|appliance| &appliance.name == name)
        }

        fn bind(&mut self, slot: SlotId, name: ApplianceName) {
            let mut inner = self.inner.lock().unwrap();
            inner.bind_calls += 1;
            inner.bindings.insert(slot, Appliance::new(name));
        }

        fn set_status(
            &mut self,
            slot: &SlotId,
            status: ApplianceStatus,
        ) -> Result<Appliance, HomeHubError> {
            let mut inner = self.inner.lock().unwrap();
            inner.set_status_calls += 1;
            let Some(appliance) = inner.bindings.get_mut(slot) else {
                return Err(HomeHubError::SlotNotBound { slot: slot.clone() });
            };
            appliance.status = status;
            let updated = appliance.clone();
            inner.last_operated = Some(slot.clone());
            Ok(updated)
        }

        fn bound_slots(&self) -> Vec<SlotId> {
            self.inner.lock().unwrap().bindings.keys().cloned().collect()
        }

        fn undo_last(&mut self) -> Result<Appliance, HomeHubError> {
            let last = {
                let inner = self.inner.lock().unwrap();
                inner.last_operated.clone()
            };
            let Some(slot) = last else {
                return Err(HomeHubError::NoPriorOperation);
            };
            let toggled = {
                let inner = self.inner.lock().unwrap();
                inner.bindings[&slot].status.toggled()
            };
            self.set_status(&slot, toggled)
        }

        fn last_operated_slot(&self) -> Option<SlotId> {
            self.inner.lock().unwrap().last_operated.clone()
        }
    }

    impl FakeStore {
        fn register_calls(&self) -> usize {
            self.inner.lock().unwrap().register_calls
        }

        fn bind_calls(&self) -> usize {
            self.inner.lock().unwrap().bind_calls
        }

        fn set_status_calls(&self) -> usize {
            self.inner.lock().unwrap().set_status_calls
        }

        fn status_of(&self, slot: &SlotId) -> Option<ApplianceStatus> {
            self.inner
                .lock()
                .unwrap()
                .bindings
                .get(slot)
                .map(|appliance| appliance.status)
        }
    }

    fn slot(raw: &str) -> SlotId {
        SlotId::parse(raw).unwrap()
    }

    fn appliance(raw: &str) -> ApplianceName {
        ApplianceName::parse(raw).unwrap()
    }

    fn make_service() -> (HomeHubService<FakeStore>, FakeStore) {
        let store = FakeStore::default();
        let service = HomeHubService::new(
            store.clone(),
            MessageCatalog::new(),
            Locale::default(),
        );
        (service, store)
    }

    #[tokio::test]
    async fn should_register_appliance_when_name_is_new() {
        let (svc, _) = make_service();

        let registered = svc.register_appliance(appliance("lamp")).await.unwrap();

        assert_eq!(registered.appliance, appliance("lamp"));
        assert_eq!(
            registered.message,
            "Appliance lamp has been registered with the home hub. Please bind a remote slot to use it."
        );
    }

    #[tokio::test]
    async fn should_reject_second_registration_of_same_name() {
        let (svc, store) = make_service();
        svc.register_appliance(appliance("lamp")).await.unwrap();

        let result = svc.register_appliance(appliance("lamp")).await;

        assert!(matches!(
            result.unwrap_err().error,
            HomeHubError::ApplianceAlreadyRegistered { .. }
        ));
        assert_eq!(store.register_calls(), 1);
    }

    #[tokio::test]
    async fn should_bind_slot_to_registered_appliance() {
        let (svc, store) = make_service();
        svc.register_appliance(appliance("lamp")).await.unwrap();

        let bound = svc.bind_slot(slot("A"), appliance("lamp")).await.unwrap();

        assert_eq!(bound.slot, slot("A"));
        assert_eq!(bound.appliance, appliance("lamp"));
        assert_eq!(
            bound.message,
            "Remote slot A has been bound to appliance lamp."
        );
        assert_eq!(store.status_of(&slot("A")), Some(ApplianceStatus::Off));
    }

    #[tokio::test]
    async fn should_reject_bind_when_appliance_not_registered() {
        let (svc, store) = make_service();

        let result = svc.bind_slot(slot("A"), appliance("lamp")).await;

        assert!(matches!(
            result.unwrap_err().error,
            HomeHubError::ApplianceNotRegistered { .. }
        ));
        assert_eq!(store.bind_calls(), 0);
    }

    #[tokio::test]
    async fn should_reject_bind_when_appliance_already_bound() {
        let (svc, _) = make_service();
        svc.register_appliance(appliance("lamp")).await.unwrap();
        svc.bind_slot(slot("A"), appliance("lamp")).await.unwrap();

        let result = svc.bind_slot(slot("B"), appliance("lamp")).await;

        assert!(matches!(
            result.unwrap_err().error,
            HomeHubError::ApplianceAlreadyBound { .. }
        ));
    }

    #[tokio::test]
    async fn should_reject_bind_when_slot_occupied() {
        let (svc, _) = make_service();
        svc.register_appliance(appliance("lamp")).await.unwrap();
        svc.register_appliance(appliance("heater")).await.unwrap();
        svc.bind_slot(slot("A"), appliance("lamp")).await.unwrap();

        let result = svc.bind_slot(slot("A"), appliance("heater")).await;

        assert!(matches!(
            result.unwrap_err().error,
            HomeHubError::SlotUnavailable { .. }
        ));
    }

    #[tokio::test]
    async fn should_report_not_registered_before_slot_unavailable() {
        let (svc, _) = make_service();
        svc.register_appliance(appliance("lamp")).await.unwrap();
        svc.bind_slot(slot("A"), appliance("lamp")).await.unwrap();

        // Unknown appliance and occupied slot at once: registration wins.
        let result = svc.bind_slot(slot("A"), appliance("heater")).await;

        assert!(matches!(
            result.unwrap_err().error,
            HomeHubError::ApplianceNotRegistered { .. }
        ));
    }

    #[tokio::test]
    async fn should_report_already_bound_before_slot_unavailable() {
        let (svc, _) = make_service();
        svc.register_appliance(appliance("lamp")).await.unwrap();
        svc.register_appliance(appliance("heater")).await.unwrap();
        svc.bind_slot(slot("A"), appliance("lamp")).await.unwrap();
        svc.bind_slot(slot("B"), appliance("heater")).await.unwrap();

        // Bound appliance and occupied slot at once: already-bound wins.
        let result = svc.bind_slot(slot("B"), appliance("lamp")).await;

        assert!(matches!(
            result.unwrap_err().error,
            HomeHubError::ApplianceAlreadyBound { .. }
        ));
    }

    #[tokio::test]
    async fn should_turn_appliance_on_and_report_new_state() {
        let (svc, store) = make_service();
        svc.register_appliance(appliance("lamp")).await.unwrap();
        svc.bind_slot(slot("A"), appliance("lamp")).await.unwrap();

        let operated = svc.operate_appliance(slot("A"), 1).await.unwrap();

        assert_eq!(operated.appliance.status, ApplianceStatus::On);
        assert_eq!(operated.message, "Appliance lamp has been turned ON.");
        assert_eq!(store.status_of(&slot("A")), Some(ApplianceStatus::On));
    }

    #[tokio::test]
    async fn should_undo_turn_on_back_to_off() {
        let (svc, _) = make_service();
        svc.register_appliance(appliance("lamp")).await.unwrap();
        svc.bind_slot(slot("A"), appliance("lamp")).await.unwrap();
        svc.operate_appliance(slot("A"), 1).await.unwrap();

        let undone = svc.undo_last_operation().await.unwrap();

        assert_eq!(undone.appliance.status, ApplianceStatus::Off);
        assert_eq!(undone.message, "Appliance lamp has been turned OFF.");
    }

    #[tokio::test]
    async fn should_undo_turn_off_back_to_on() {
        let (svc, _) = make_service();
        svc.register_appliance(appliance("lamp")).await.unwrap();
        svc.bind_slot(slot("A"), appliance("lamp")).await.unwrap();
        svc.operate_appliance(slot("A"), 0).await.unwrap();

        let undone = svc.undo_last_operation().await.unwrap();

        assert_eq!(undone.appliance.status, ApplianceStatus::On);
    }

    #[tokio::test]
    async fn should_replay_toggle_on_second_consecutive_undo() {
        let (svc, _) = make_service();
        svc.register_appliance(appliance("lamp")).await.unwrap();
        svc.bind_slot(slot("A"), appliance("lamp")).await.unwrap();
        svc.operate_appliance(slot("A"), 1).await.unwrap();

        let first = svc.undo_last_operation().await.unwrap();
        let second = svc.undo_last_operation().await.unwrap();

        assert_eq!(first.appliance.status, ApplianceStatus::Off);
        assert_eq!(second.appliance.status, ApplianceStatus::On);
    }

    #[tokio::test]
    async fn should_reject_undo_with_no_prior_operation() {
        let (svc, _) = make_service();

        let result = svc.undo_last_operation().await;

        assert!(matches!(
            result.unwrap_err().error,
            HomeHubError::NoPriorOperation
        ));
    }

    #[tokio::test]
    async fn should_reject_invalid_operation_code_without_touching_state() {
        let (svc, store) = make_service();
        svc.register_appliance(appliance("lamp")).await.unwrap();
        svc.bind_slot(slot("A"), appliance("lamp")).await.unwrap();

        let result = svc.operate_appliance(slot("A"), 2).await;

        assert!(matches!(
            result.unwrap_err().error,
            HomeHubError::InvalidOperation { ref code, .. } if code == "2"
        ));
        assert_eq!(store.set_status_calls(), 0);
        assert_eq!(store.status_of(&slot("A")), Some(ApplianceStatus::Off));
    }

    #[tokio::test]
    async fn should_check_operation_code_before_slot_binding() {
        let (svc, _) = make_service();

        // Both violated: the code check comes first.
        let result = svc.operate_appliance(slot("unbound"), 7).await;

        assert!(matches!(
            result.unwrap_err().error,
            HomeHubError::InvalidOperation { ref code, .. } if code == "7"
        ));
    }

    #[tokio::test]
    async fn should_reject_operation_on_unbound_slot() {
        let (svc, _) = make_service();

        let result = svc.operate_appliance(slot("A"), 1).await;

        assert!(matches!(
            result.unwrap_err().error,
            HomeHubError::SlotNotBound { .. }
        ));
    }

    #[tokio::test]
    async fn should_list_bound_slots_sorted() {
        let (svc, _) = make_service();
        for (slot_id, name) in [("C", "lamp"), ("A", "heater"), ("B", "fan")] {
            svc.register_appliance(appliance(name)).await.unwrap();
            svc.bind_slot(slot(slot_id), appliance(name)).await.unwrap();
        }

        let slots = svc.list_bound_slots().await;

        assert_eq!(slots, vec![slot("A"), slot("B"), slot("C")]);
    }

    #[tokio::test]
    async fn should_list_no_slots_before_any_binding() {
        let (svc, _) = make_service();
        assert!(svc.list_bound_slots().await.is_empty());
    }

    #[tokio::test]
    async fn should_render_rejection_detail_with_registered_bundle() {
        let locale = Locale::new("fr-FR");
        let catalog = MessageCatalog::new().with_bundle(
            locale.clone(),
            Bundle::new().with(
                MessageKey::NoActionToUndo,
                "Aucune operation precedente a annuler.",
            ),
        );
        let svc = HomeHubService::new(FakeStore::default(), catalog, locale);

        let rejection = svc.undo_last_operation().await.unwrap_err();

        assert_eq!(rejection.detail, "Aucune operation precedente a annuler.");
        assert_eq!(rejection.error, HomeHubError::NoPriorOperation);
    }
}
