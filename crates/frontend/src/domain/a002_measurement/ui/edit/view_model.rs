use crate::shared::data::AppStore;
use chrono::NaiveDate;
use contracts::domain::a002_measurement::aggregate::{Measurement, MeasurementId, MeasurementPatch};
use contracts::domain::a002_measurement::schema::{self, FieldDescriptor};
use contracts::enums::{GarmentType, MeasurementStatus, Priority};
use leptos::prelude::*;
use std::collections::BTreeMap;

/// Редактируемые поля мерки; числа хранятся как введённый текст
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementEditForm {
    pub garment_type: GarmentType,
    pub raw_values: BTreeMap<String, String>,
    pub notes: String,
    pub status: MeasurementStatus,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
}

impl From<&Measurement> for MeasurementEditForm {
    fn from(m: &Measurement) -> Self {
        Self {
            garment_type: m.garment_type,
            raw_values: m
                .schema_values()
                .into_iter()
                .map(|(field, value)| (field.key.to_string(), value.to_string()))
                .collect(),
            notes: m.notes.clone(),
            status: m.status,
            priority: m.priority,
            due_date: m.due_date,
        }
    }
}

impl MeasurementEditForm {
    pub fn fields(&self) -> &'static [FieldDescriptor] {
        schema::fields_for(self.garment_type)
    }

    pub fn value(&self, key: &str) -> String {
        self.raw_values.get(key).cloned().unwrap_or_default()
    }

    /// Патч со всеми редактируемыми полями; первая ошибка разбора прерывает сборку
    pub fn to_patch(&self) -> Result<MeasurementPatch, String> {
        let mut values = BTreeMap::new();
        for field in self.fields() {
            if let Some(value) = schema::parse_field_value(field, &self.value(field.key))? {
                values.insert(field.key.to_string(), value);
            }
        }
        Ok(MeasurementPatch {
            values: Some(values),
            notes: Some(self.notes.clone()),
            status: Some(self.status),
            due_date: Some(self.due_date),
            priority: Some(self.priority),
        })
    }
}

/// ViewModel for the measurement edit page
#[derive(Clone, Copy)]
pub struct MeasurementEditViewModel {
    pub id: MeasurementId,
    pub form: RwSignal<Option<MeasurementEditForm>>,
    pub error: RwSignal<Option<String>>,
}

impl MeasurementEditViewModel {
    pub fn new(id: MeasurementId) -> Self {
        Self {
            id,
            form: RwSignal::new(None),
            error: RwSignal::new(None),
        }
    }

    /// Load form data from the store
    pub fn load(&self, store: &AppStore) {
        match store.measurement(self.id) {
            Ok(m) => self.form.set(Some(MeasurementEditForm::from(&m))),
            Err(e) => self.error.set(Some(e.to_string())),
        }
    }

    pub fn edit(&self, change: impl FnOnce(&mut MeasurementEditForm)) {
        self.form.update(|f| {
            if let Some(form) = f.as_mut() {
                change(form);
            }
        });
    }

    /// Save changes; on failure the form keeps what was typed
    pub fn save_command(&self, store: &AppStore) -> Option<Measurement> {
        let form = self.form.get_untracked()?;
        let result = form
            .to_patch()
            .and_then(|patch| store.update_measurement(self.id, &patch).map_err(|e| e.to_string()));
        match result {
            Ok(saved) => {
                self.error.set(None);
                Some(saved)
            }
            Err(e) => {
                self.error.set(Some(e));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(values: &[(&str, &str)]) -> MeasurementEditForm {
        MeasurementEditForm {
            garment_type: GarmentType::Pants,
            raw_values: values
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            notes: "  tapered  ".to_string(),
            status: MeasurementStatus::Confirmed,
            priority: Priority::Urgent,
            due_date: NaiveDate::from_ymd_opt(2024, 6, 1),
        }
    }

    #[test]
    fn test_patch_carries_all_edited_fields() {
        let patch = form(&[("waist", "82"), ("inseam", "81,5"), ("knee", " ")])
            .to_patch()
            .unwrap();
        let values = patch.values.unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values["waist"], 82.0);
        assert_eq!(values["inseam"], 81.5);
        assert_eq!(patch.status, Some(MeasurementStatus::Confirmed));
        assert_eq!(patch.priority, Some(Priority::Urgent));
        assert_eq!(patch.due_date, Some(NaiveDate::from_ymd_opt(2024, 6, 1)));
    }

    #[test]
    fn test_bad_number_is_reported() {
        let err = form(&[("waist", "eighty")]).to_patch().unwrap_err();
        assert_eq!(err, "Waist: 'eighty' is not a number");
    }

    #[test]
    fn test_out_of_schema_text_is_ignored() {
        let patch = form(&[("chest", "100")]).to_patch().unwrap();
        assert!(patch.values.unwrap().is_empty());
    }
}
