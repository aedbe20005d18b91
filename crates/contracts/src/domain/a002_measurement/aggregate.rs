use super::schema::{self, FieldDescriptor};
use crate::domain::a001_customer::aggregate::CustomerId;
use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata, RepositoryError};
use crate::enums::{GarmentType, MeasurementStatus, Priority};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MeasurementId(pub Uuid);

impl MeasurementId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for MeasurementId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(MeasurementId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

impl std::fmt::Display for MeasurementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Мерка клиента для одного изделия.
///
/// `values` разреженные: присутствуют только заполненные поля. Ключи вне
/// схемы типа изделия при выводе игнорируются.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub id: MeasurementId,

    /// Ссылка на клиента (не копия)
    #[serde(rename = "customerId")]
    pub customer_id: CustomerId,

    #[serde(rename = "type")]
    pub garment_type: GarmentType,

    #[serde(default)]
    pub values: BTreeMap<String, f64>,

    #[serde(default)]
    pub notes: String,

    /// Дата снятия мерки
    pub date: NaiveDate,

    pub status: MeasurementStatus,

    #[serde(rename = "dueDate", default)]
    pub due_date: Option<NaiveDate>,

    #[serde(default)]
    pub priority: Priority,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Measurement {
    pub fn new_for_insert(dto: MeasurementDto, now: DateTime<Utc>) -> Self {
        Self::new_with_id(MeasurementId::new_v4(), dto, now)
    }

    pub fn new_with_id(id: MeasurementId, dto: MeasurementDto, now: DateTime<Utc>) -> Self {
        Self {
            id,
            customer_id: dto.customer_id,
            garment_type: dto.garment_type,
            values: dto.values,
            notes: dto.notes.trim().to_string(),
            date: dto.date,
            status: dto.status,
            due_date: dto.due_date,
            priority: dto.priority,
            metadata: EntityMetadata::new_at(now),
        }
    }

    /// Значение поля, если оно входит в схему и заполнено
    pub fn value(&self, key: &str) -> Option<f64> {
        if !schema::is_field_allowed(self.garment_type, key) {
            return None;
        }
        self.values.get(key).copied()
    }

    /// Заполненные поля в порядке схемы
    pub fn schema_values(&self) -> Vec<(&'static FieldDescriptor, f64)> {
        schema::fields_for(self.garment_type)
            .iter()
            .filter_map(|f| self.values.get(f.key).map(|v| (f, *v)))
            .collect()
    }

    pub fn filled_count(&self) -> usize {
        self.schema_values().len()
    }

    pub fn validate(&self) -> Result<(), RepositoryError> {
        if let Some(key) = self
            .values
            .keys()
            .find(|k| !schema::is_field_allowed(self.garment_type, k))
        {
            return Err(RepositoryError::validation(format!(
                "Field '{}' is not part of the {} schema",
                key,
                self.garment_type.label()
            )));
        }
        if let Some((key, _)) = self.values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(RepositoryError::validation(format!(
                "Field '{}' must be a number",
                key
            )));
        }
        Ok(())
    }

    pub fn apply_patch(&mut self, patch: &MeasurementPatch, now: DateTime<Utc>) {
        if let Some(values) = &patch.values {
            self.values = values.clone();
        }
        if let Some(notes) = &patch.notes {
            self.notes = notes.trim().to_string();
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        self.metadata.touch_at(now);
    }
}

impl AggregateRoot for Measurement {
    type Id = MeasurementId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.metadata
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "measurement"
    }

    fn element_name() -> &'static str {
        "Measurement"
    }

    fn list_name() -> &'static str {
        "Measurements"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementDto {
    pub customer_id: CustomerId,
    pub garment_type: GarmentType,
    pub values: BTreeMap<String, f64>,
    pub notes: String,
    pub date: NaiveDate,
    pub status: MeasurementStatus,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
}

/// Частичное обновление мерки: `None` означает "не менять".
/// Тип изделия задаётся при создании и не редактируется.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MeasurementPatch {
    pub values: Option<BTreeMap<String, f64>>,
    pub notes: Option<String>,
    pub status: Option<MeasurementStatus>,
    pub due_date: Option<Option<NaiveDate>>,
    pub priority: Option<Priority>,
}

impl MeasurementPatch {
    pub fn status(status: MeasurementStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(garment_type: GarmentType, values: &[(&str, f64)]) -> MeasurementDto {
        MeasurementDto {
            customer_id: CustomerId::new_v4(),
            garment_type,
            values: values.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            notes: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            status: MeasurementStatus::Draft,
            due_date: None,
            priority: Priority::Normal,
        }
    }

    #[test]
    fn test_schema_values_follow_schema_order() {
        let m = Measurement::new_for_insert(
            dto(GarmentType::Shirt, &[("wrist", 17.0), ("neck", 40.5)]),
            Utc::now(),
        );
        let keys: Vec<_> = m.schema_values().iter().map(|(f, _)| f.key).collect();
        assert_eq!(keys, vec!["neck", "wrist"]);
        assert_eq!(m.filled_count(), 2);
    }

    #[test]
    fn test_out_of_schema_values_are_ignored_and_rejected() {
        let mut m = Measurement::new_for_insert(dto(GarmentType::Pants, &[("waist", 80.0)]), Utc::now());
        m.values.insert("neck".into(), 40.0);
        assert_eq!(m.value("neck"), None);
        assert_eq!(m.filled_count(), 1);
        assert!(matches!(m.validate(), Err(RepositoryError::Validation(_))));
    }

    #[test]
    fn test_apply_patch_bumps_version() {
        let now = Utc::now();
        let mut m = Measurement::new_for_insert(dto(GarmentType::Dress, &[]), now);
        m.apply_patch(&MeasurementPatch::status(MeasurementStatus::Completed), now);
        assert_eq!(m.status, MeasurementStatus::Completed);
        assert_eq!(m.metadata.version, 1);
    }

    #[test]
    fn test_full_patch_keeps_garment_type() {
        let now = Utc::now();
        let mut m = Measurement::new_for_insert(dto(GarmentType::Pants, &[("waist", 80.0)]), now);
        let patch = MeasurementPatch {
            values: Some([("inseam".to_string(), 78.0)].into_iter().collect()),
            notes: Some(" slim ".into()),
            status: Some(MeasurementStatus::Confirmed),
            due_date: Some(None),
            priority: Some(Priority::Urgent),
        };
        m.apply_patch(&patch, now);
        assert_eq!(m.garment_type, GarmentType::Pants);
        assert_eq!(m.value("inseam"), Some(78.0));
        assert_eq!(m.value("waist"), None);
        assert_eq!(m.notes, "slim");
    }

    #[test]
    fn test_serialized_field_names() {
        let m = Measurement::new_for_insert(dto(GarmentType::Suit, &[]), Utc::now());
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["type"], "suit");
        assert_eq!(json["status"], "draft");
        assert!(json.get("customerId").is_some());
    }
}
