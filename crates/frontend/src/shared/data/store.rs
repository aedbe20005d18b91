//! Хранилище данных приложения
//!
//! Репозитории живут в сигналах: чтение через `with` подписывает
//! компонент, любая мутация через `try_update` обновляет все списки.

use contracts::domain::a001_customer::aggregate::{Customer, CustomerDto, CustomerId};
use contracts::domain::a001_customer::repository::{CustomerRepository, InMemoryCustomerRepository};
use contracts::domain::a002_measurement::aggregate::{Measurement, MeasurementId, MeasurementPatch};
use contracts::domain::a002_measurement::repository::{
    InMemoryMeasurementRepository, MeasurementRepository,
};
use contracts::domain::common::RepositoryError;
use contracts::shared::list_filter::MeasurementQuery;
use contracts::usecases::u101_new_measurement::{WizardError, WizardSession};
use contracts::enums::MeasurementStatus;
use leptos::prelude::*;

use crate::shared::date_utils;

#[derive(Clone, Copy)]
pub struct AppStore {
    customers: RwSignal<InMemoryCustomerRepository>,
    measurements: RwSignal<InMemoryMeasurementRepository>,
}

fn store_unavailable() -> RepositoryError {
    RepositoryError::validation("Data store is no longer available")
}

impl AppStore {
    pub fn new() -> Self {
        Self {
            customers: RwSignal::new(InMemoryCustomerRepository::new()),
            measurements: RwSignal::new(InMemoryMeasurementRepository::new()),
        }
    }

    // ------------------------------------------------------------------
    // Customers
    // ------------------------------------------------------------------

    pub fn customers(&self) -> Vec<Customer> {
        self.customers.with(|repo| repo.list())
    }

    pub fn customer(&self, id: CustomerId) -> Result<Customer, RepositoryError> {
        self.customers.with(|repo| repo.get(id))
    }

    pub fn create_customer(&self, dto: &CustomerDto) -> Result<Customer, RepositoryError> {
        let now = date_utils::now();
        let result = self
            .customers
            .try_update(|repo| repo.create(dto, now))
            .unwrap_or_else(|| Err(store_unavailable()));
        match &result {
            Ok(c) => log::info!("customer created: {} ({})", c.name, c.id),
            Err(e) => log::warn!("customer not created: {}", e),
        }
        result
    }

    // ------------------------------------------------------------------
    // Measurements
    // ------------------------------------------------------------------

    pub fn measurements(&self) -> Vec<Measurement> {
        self.query_measurements(&MeasurementQuery::default())
    }

    pub fn query_measurements(&self, query: &MeasurementQuery) -> Vec<Measurement> {
        self.measurements.with(|repo| repo.list(query))
    }

    pub fn measurement(&self, id: MeasurementId) -> Result<Measurement, RepositoryError> {
        self.measurements.with(|repo| repo.get(id))
    }

    /// Завершает начатое в мастере сохранение; при ошибке данные сессии не меняются
    pub fn complete_wizard_save(
        &self,
        session: &mut WizardSession,
        status: MeasurementStatus,
    ) -> Result<Measurement, WizardError> {
        let now = date_utils::now();
        match self
            .measurements
            .try_update(|repo| session.complete_save(repo, status, now))
        {
            Some(result) => result,
            None => {
                session.abort_save();
                Err(WizardError::Repository(store_unavailable()))
            }
        }
    }

    pub fn update_measurement(
        &self,
        id: MeasurementId,
        patch: &MeasurementPatch,
    ) -> Result<Measurement, RepositoryError> {
        let now = date_utils::now();
        let result = self
            .measurements
            .try_update(|repo| repo.update(id, patch, now))
            .unwrap_or_else(|| Err(store_unavailable()));
        if let Err(e) = &result {
            log::warn!("measurement {} not updated: {}", id, e);
        }
        result
    }

    pub fn delete_measurement(&self, id: MeasurementId) -> Result<(), RepositoryError> {
        let result = self
            .measurements
            .try_update(|repo| repo.delete(id))
            .unwrap_or_else(|| Err(store_unavailable()));
        match &result {
            Ok(()) => log::info!("measurement deleted: {}", id),
            Err(e) => log::warn!("measurement {} not deleted: {}", id, e),
        }
        result
    }
}

pub fn use_store() -> AppStore {
    use_context::<AppStore>().expect("AppStore not provided in context")
}
