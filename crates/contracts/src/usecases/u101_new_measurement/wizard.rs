//! Мастер создания мерки: выбор клиента, выбор типа изделия, ввод мерок
//!
//! Сессия мастера владеет данными всех трёх шагов, поэтому переходы назад
//! и вперёд ничего не теряют. Введённые значения хранятся как текст
//! отдельно по каждому типу изделия и разбираются только при сохранении.

use crate::domain::a001_customer::aggregate::{Customer, CustomerId};
use crate::domain::a002_measurement::aggregate::{Measurement, MeasurementDto, MeasurementId};
use crate::domain::a002_measurement::repository::MeasurementRepository;
use crate::domain::a002_measurement::schema::{self, FieldDescriptor};
use crate::domain::common::RepositoryError;
use crate::enums::{GarmentType, MeasurementStatus, Priority};
use crate::shared::list_filter::filter_by_text;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WizardStep {
    #[default]
    SelectCustomer,
    SelectType,
    EnterMeasurements,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [
        WizardStep::SelectCustomer,
        WizardStep::SelectType,
        WizardStep::EnterMeasurements,
    ];

    pub fn number(&self) -> u32 {
        match self {
            WizardStep::SelectCustomer => 1,
            WizardStep::SelectType => 2,
            WizardStep::EnterMeasurements => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::SelectCustomer => "Select Customer",
            WizardStep::SelectType => "Choose Type",
            WizardStep::EnterMeasurements => "Take Measurements",
        }
    }

    fn following(&self) -> WizardStep {
        match self {
            WizardStep::SelectCustomer => WizardStep::SelectType,
            WizardStep::SelectType | WizardStep::EnterMeasurements => WizardStep::EnterMeasurements,
        }
    }

    fn preceding(&self) -> WizardStep {
        match self {
            WizardStep::SelectCustomer | WizardStep::SelectType => WizardStep::SelectCustomer,
            WizardStep::EnterMeasurements => WizardStep::SelectType,
        }
    }
}

/// Ошибки мастера. Все восстановимы, данные сессии при ошибке не меняются.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Please select a customer first")]
    MissingSelection,

    #[error("{0}")]
    Validation(String),

    #[error("Measurement is already being saved")]
    SaveInProgress,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WizardSession {
    /// Идентификатор будущей мерки, фиксируется при открытии мастера
    draft_id: MeasurementId,
    step: WizardStep,
    date: NaiveDate,

    customer_query: String,
    customer_id: Option<CustomerId>,

    garment_type: GarmentType,

    raw_values: BTreeMap<GarmentType, BTreeMap<String, String>>,
    due_date: Option<NaiveDate>,
    priority: Priority,
    notes: String,

    saving: bool,
}

impl WizardSession {
    /// `date` становится датой мерки
    pub fn new(date: NaiveDate) -> Self {
        Self {
            draft_id: MeasurementId::new_v4(),
            step: WizardStep::SelectCustomer,
            date,
            customer_query: String::new(),
            customer_id: None,
            garment_type: GarmentType::default(),
            raw_values: BTreeMap::new(),
            due_date: None,
            priority: Priority::default(),
            notes: String::new(),
            saving: false,
        }
    }

    /// Мастер с уже выбранным клиентом (переход со страницы клиента)
    pub fn with_customer(date: NaiveDate, customer_id: CustomerId) -> Self {
        let mut session = Self::new(date);
        session.customer_id = Some(customer_id);
        session
    }

    pub fn draft_id(&self) -> MeasurementId {
        self.draft_id
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn progress_percent(&self) -> u32 {
        self.step.number() * 100 / WizardStep::ALL.len() as u32
    }

    // ------------------------------------------------------------------
    // Step 1
    // ------------------------------------------------------------------

    pub fn customer_query(&self) -> &str {
        &self.customer_query
    }

    pub fn set_customer_query(&mut self, query: impl Into<String>) {
        self.customer_query = query.into();
    }

    pub fn filtered_customers(&self, customers: &[Customer]) -> Vec<Customer> {
        filter_by_text(customers, &self.customer_query)
    }

    pub fn customer_id(&self) -> Option<CustomerId> {
        self.customer_id
    }

    pub fn select_customer(&mut self, id: CustomerId) {
        self.customer_id = Some(id);
    }

    pub fn clear_customer(&mut self) {
        self.customer_id = None;
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Переход вперёд. Без выбранного клиента шаг 1 не покидается.
    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        if self.step == WizardStep::SelectCustomer && self.customer_id.is_none() {
            log::info!("wizard: customer not selected, staying on step 1");
            return Err(WizardError::MissingSelection);
        }
        self.step = self.step.following();
        Ok(self.step)
    }

    pub fn back(&mut self) -> WizardStep {
        self.step = self.step.preceding();
        self.step
    }

    // ------------------------------------------------------------------
    // Step 2
    // ------------------------------------------------------------------

    pub fn garment_type(&self) -> GarmentType {
        self.garment_type
    }

    pub fn select_garment_type(&mut self, garment_type: GarmentType) {
        self.garment_type = garment_type;
    }

    // ------------------------------------------------------------------
    // Step 3
    // ------------------------------------------------------------------

    pub fn fields(&self) -> &'static [FieldDescriptor] {
        schema::fields_for(self.garment_type)
    }

    /// Текст поля текущего типа; пустая строка, если поле не заполнено
    pub fn value(&self, key: &str) -> &str {
        self.raw_values
            .get(&self.garment_type)
            .and_then(|values| values.get(key))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn set_value(&mut self, key: &str, raw: impl Into<String>) -> Result<(), WizardError> {
        if !schema::is_field_allowed(self.garment_type, key) {
            return Err(WizardError::Validation(format!(
                "{} has no field '{}'",
                self.garment_type.label(),
                key
            )));
        }
        let raw = raw.into();
        let values = self.raw_values.entry(self.garment_type).or_default();
        if raw.trim().is_empty() {
            values.remove(key);
        } else {
            values.insert(key.to_string(), raw);
        }
        Ok(())
    }

    pub fn filled_count(&self) -> usize {
        self.fields()
            .iter()
            .filter(|f| !self.value(f.key).trim().is_empty())
            .count()
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    pub fn set_due_date(&mut self, due_date: Option<NaiveDate>) {
        self.due_date = due_date;
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    // ------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Разбирает введённые значения текущего типа в порядке схемы
    pub fn parsed_values(&self) -> Result<BTreeMap<String, f64>, WizardError> {
        let mut parsed = BTreeMap::new();
        for field in self.fields() {
            if let Some(value) =
                schema::parse_field_value(field, self.value(field.key)).map_err(WizardError::Validation)?
            {
                parsed.insert(field.key.to_string(), value);
            }
        }
        Ok(parsed)
    }

    /// Собирает мерку из данных всех шагов. Статус влияет только на поле `status`.
    pub fn build_measurement(
        &self,
        status: MeasurementStatus,
        now: DateTime<Utc>,
    ) -> Result<Measurement, WizardError> {
        let customer_id = self.customer_id.ok_or(WizardError::MissingSelection)?;
        let dto = MeasurementDto {
            customer_id,
            garment_type: self.garment_type,
            values: self.parsed_values()?,
            notes: self.notes.clone(),
            date: self.date,
            status,
            due_date: self.due_date,
            priority: self.priority,
        };
        let measurement = Measurement::new_with_id(self.draft_id, dto, now);
        measurement.validate()?;
        Ok(measurement)
    }

    /// Сохраняет мерку за один вызов: `begin_save` + `complete_save`.
    /// При ошибке данные сессии остаются для повторной попытки.
    pub fn submit<R: MeasurementRepository + ?Sized>(
        &mut self,
        repo: &mut R,
        status: MeasurementStatus,
        now: DateTime<Utc>,
    ) -> Result<Measurement, WizardError> {
        self.begin_save()?;
        self.complete_save(repo, status, now)
    }

    /// Отмечает начало сохранения; пока оно не завершено, повторный запуск отклоняется
    pub fn begin_save(&mut self) -> Result<(), WizardError> {
        if self.saving {
            log::info!("wizard: save already in progress");
            return Err(WizardError::SaveInProgress);
        }
        self.saving = true;
        Ok(())
    }

    /// Пишет мерку в хранилище и снимает признак сохранения при любом исходе
    pub fn complete_save<R: MeasurementRepository + ?Sized>(
        &mut self,
        repo: &mut R,
        status: MeasurementStatus,
        now: DateTime<Utc>,
    ) -> Result<Measurement, WizardError> {
        let result = self
            .build_measurement(status, now)
            .and_then(|measurement| repo.create(measurement).map_err(WizardError::from));
        self.saving = false;
        match &result {
            Ok(saved) => log::info!("wizard: saved measurement {} ({})", saved.id, saved.status),
            Err(e) => log::warn!("wizard: save failed: {}", e),
        }
        result
    }

    /// Снимает признак сохранения, если запись не состоялась
    pub fn abort_save(&mut self) {
        self.saving = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_customer::aggregate::CustomerDto;
    use crate::domain::a002_measurement::repository::InMemoryMeasurementRepository;
    use crate::shared::list_filter::MeasurementQuery;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
    }

    fn session_at_step3() -> WizardSession {
        let mut session = WizardSession::new(today());
        session.select_customer(CustomerId::new_v4());
        session.next().unwrap();
        session.select_garment_type(GarmentType::Shirt);
        session.next().unwrap();
        session
    }

    #[test]
    fn test_next_without_customer_is_refused() {
        let mut session = WizardSession::new(today());
        assert_eq!(session.next(), Err(WizardError::MissingSelection));
        assert_eq!(session.step(), WizardStep::SelectCustomer);
    }

    #[test]
    fn test_linear_transitions() {
        let mut session = WizardSession::new(today());
        session.select_customer(CustomerId::new_v4());
        assert_eq!(session.next(), Ok(WizardStep::SelectType));
        assert_eq!(session.next(), Ok(WizardStep::EnterMeasurements));
        assert_eq!(session.progress_percent(), 100);
        assert_eq!(session.back(), WizardStep::SelectType);
        assert_eq!(session.back(), WizardStep::SelectCustomer);
        assert_eq!(session.back(), WizardStep::SelectCustomer);
        assert_eq!(session.progress_percent(), 33);
    }

    #[test]
    fn test_default_type_is_shirt() {
        let session = WizardSession::new(today());
        assert_eq!(session.garment_type(), GarmentType::Shirt);
        assert_eq!(session.fields().len(), 11);
    }

    #[test]
    fn test_values_survive_back_and_forward() {
        let mut session = session_at_step3();
        session.set_value("neck", "39.5").unwrap();
        session.set_value("chest", "102").unwrap();
        session.set_notes("Slim fit");
        session.set_priority(Priority::Urgent);
        let before = session.clone();

        session.back();
        session.next().unwrap();

        assert_eq!(session, before);
        assert_eq!(session.value("neck"), "39.5");
    }

    #[test]
    fn test_values_are_kept_per_type() {
        let mut session = session_at_step3();
        session.set_value("neck", "40").unwrap();
        session.back();
        session.select_garment_type(GarmentType::Pants);
        session.next().unwrap();
        session.set_value("inseam", "81").unwrap();
        assert_eq!(session.value("neck"), "");

        session.back();
        session.select_garment_type(GarmentType::Shirt);
        session.next().unwrap();
        assert_eq!(session.value("neck"), "40");
        assert_eq!(session.filled_count(), 1);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut session = session_at_step3();
        assert!(matches!(
            session.set_value("inseam", "80"),
            Err(WizardError::Validation(_))
        ));
        session.select_garment_type(GarmentType::Custom);
        assert!(session.set_value("neck", "40").is_err());
    }

    #[test]
    fn test_draft_and_completed_differ_only_in_status() {
        let mut session = session_at_step3();
        session.set_value("neck", "39.5").unwrap();
        session.set_due_date(NaiveDate::from_ymd_opt(2024, 2, 1));
        let now = Utc::now();

        let draft = session.build_measurement(MeasurementStatus::Draft, now).unwrap();
        let mut completed = session
            .build_measurement(MeasurementStatus::Completed, now)
            .unwrap();
        assert_eq!(completed.status, MeasurementStatus::Completed);
        completed.status = MeasurementStatus::Draft;
        assert_eq!(draft, completed);
    }

    #[test]
    fn test_bad_number_blocks_build() {
        let mut session = session_at_step3();
        session.set_value("chest", "abc").unwrap();
        let err = session
            .build_measurement(MeasurementStatus::Draft, Utc::now())
            .unwrap_err();
        assert!(matches!(err, WizardError::Validation(_)));
    }

    #[test]
    fn test_decimal_comma_is_accepted() {
        let mut session = session_at_step3();
        session.set_value("wrist", "17,5").unwrap();
        let values = session.parsed_values().unwrap();
        assert_eq!(values.get("wrist"), Some(&17.5));
    }

    #[test]
    fn test_submit_saves_once() {
        let mut session = session_at_step3();
        session.set_value("neck", "39").unwrap();
        let mut repo = InMemoryMeasurementRepository::new();

        let saved = session
            .submit(&mut repo, MeasurementStatus::Completed, Utc::now())
            .unwrap();
        assert_eq!(saved.id, session.draft_id());
        assert!(!session.is_saving());

        let again = session.submit(&mut repo, MeasurementStatus::Completed, Utc::now());
        assert!(matches!(
            again,
            Err(WizardError::Repository(RepositoryError::Duplicate { .. }))
        ));
        assert_eq!(repo.list(&MeasurementQuery::default()).len(), 1);
    }

    #[test]
    fn test_second_save_refused_while_first_in_flight() {
        let mut session = session_at_step3();
        session.set_value("neck", "39").unwrap();
        let mut repo = InMemoryMeasurementRepository::new();

        session.begin_save().unwrap();
        assert!(session.is_saving());
        assert_eq!(session.begin_save(), Err(WizardError::SaveInProgress));
        assert_eq!(
            session.submit(&mut repo, MeasurementStatus::Draft, Utc::now()),
            Err(WizardError::SaveInProgress)
        );
        assert!(repo.is_empty());

        let saved = session
            .complete_save(&mut repo, MeasurementStatus::Draft, Utc::now())
            .unwrap();
        assert_eq!(saved.id, session.draft_id());
        assert!(!session.is_saving());
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_failed_save_releases_guard() {
        let mut session = session_at_step3();
        session.set_value("chest", "oops").unwrap();
        let mut repo = InMemoryMeasurementRepository::new();

        session.begin_save().unwrap();
        assert!(matches!(
            session.complete_save(&mut repo, MeasurementStatus::Draft, Utc::now()),
            Err(WizardError::Validation(_))
        ));
        assert!(!session.is_saving());
        assert!(session.begin_save().is_ok());
        session.abort_save();
        assert!(!session.is_saving());
    }

    #[test]
    fn test_failed_submit_keeps_state() {
        let mut session = session_at_step3();
        session.set_value("chest", "oops").unwrap();
        let before = session.clone();
        let mut repo = InMemoryMeasurementRepository::new();
        assert!(session
            .submit(&mut repo, MeasurementStatus::Draft, Utc::now())
            .is_err());
        assert_eq!(session, before);
        assert!(repo.is_empty());
    }

    #[test]
    fn test_customer_search() {
        let now = Utc::now();
        let customers = vec![
            Customer::new_for_insert(&CustomerDto::new("John Doe", "+1 555 1234"), now),
            Customer::new_for_insert(&CustomerDto::new("Jane Smith", "+1 555 9876"), now),
        ];
        let mut session = WizardSession::new(today());
        session.set_customer_query("jane");
        let found = session.filtered_customers(&customers);
        assert_eq!(found.len(), 1);
        session.select_customer(found[0].id);
        assert_eq!(session.customer_id(), Some(customers[1].id));
    }
}
