//! Host-facing picker session.
//!
//! Wraps an [`InteractionStore`] behind the DTOs of the `shared` crate: the
//! host hands in a [`PickerConfigRequest`] and [`IntentRequest`]s and gets
//! back [`PickerNotification`]s and [`SessionSummary`] snapshots, all with
//! canonical date strings.

use log::info;
use shared::{CalendarMonth, IntentRequest, PickerConfigRequest, PickerNotification, SessionSummary};

use crate::domain::errors::PickerResult;
use crate::domain::interaction_store::InteractionStore;
use crate::domain::observers::PickerCallbacks;
use crate::io::mappers::{ConfigMapper, IntentMapper, SessionMapper};

#[derive(Debug)]
pub struct PickerSession {
    store: InteractionStore,
}

impl PickerSession {
    /// Validate the configuration and create the session
    pub fn from_config(request: PickerConfigRequest, callbacks: PickerCallbacks) -> PickerResult<Self> {
        info!("Creating picker session from host configuration");
        let settings = ConfigMapper::to_settings(request)?;
        let store = InteractionStore::new(settings, callbacks)?;
        Ok(Self { store })
    }

    /// Parse and dispatch one serialized intent
    pub fn apply(&mut self, request: &IntentRequest) -> PickerResult<Vec<PickerNotification>> {
        let intent = IntentMapper::to_domain(request, self.store.engine())?;
        let events = self.store.dispatch(intent)?;
        Ok(IntentMapper::events_to_dto_list(&events))
    }

    pub fn summary(&self) -> SessionSummary {
        SessionMapper::to_summary(self.store.state(), self.store.settings())
    }

    /// Grid for the month currently shown
    pub fn grid(&self) -> PickerResult<CalendarMonth> {
        self.store.active_month_grid()
    }

    pub fn store(&self) -> &InteractionStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut InteractionStore {
        &mut self.store
    }
}
