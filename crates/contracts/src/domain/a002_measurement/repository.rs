use super::aggregate::{Measurement, MeasurementId, MeasurementPatch};
use crate::domain::common::{AggregateRoot, RepositoryError};
use crate::shared::list_filter::MeasurementQuery;
use chrono::{DateTime, Utc};

/// Хранилище мерок
pub trait MeasurementRepository {
    /// Мерки, удовлетворяющие категориальному запросу, в порядке добавления
    fn list(&self, query: &MeasurementQuery) -> Vec<Measurement>;

    fn get(&self, id: MeasurementId) -> Result<Measurement, RepositoryError>;

    fn create(&mut self, measurement: Measurement) -> Result<Measurement, RepositoryError>;

    fn update(
        &mut self,
        id: MeasurementId,
        patch: &MeasurementPatch,
        now: DateTime<Utc>,
    ) -> Result<Measurement, RepositoryError>;

    fn delete(&mut self, id: MeasurementId) -> Result<(), RepositoryError>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryMeasurementRepository {
    items: Vec<Measurement>,
}

impl InMemoryMeasurementRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: MeasurementId) -> Result<usize, RepositoryError> {
        self.items
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| RepositoryError::not_found(Measurement::element_name(), id))
    }
}

impl MeasurementRepository for InMemoryMeasurementRepository {
    fn list(&self, query: &MeasurementQuery) -> Vec<Measurement> {
        self.items
            .iter()
            .filter(|m| query.matches(m))
            .cloned()
            .collect()
    }

    fn get(&self, id: MeasurementId) -> Result<Measurement, RepositoryError> {
        let pos = self.position(id)?;
        Ok(self.items[pos].clone())
    }

    fn create(&mut self, measurement: Measurement) -> Result<Measurement, RepositoryError> {
        measurement.validate()?;
        if self.items.iter().any(|m| m.id == measurement.id) {
            return Err(RepositoryError::Duplicate {
                entity: Measurement::element_name(),
                detail: format!("id {}", measurement.id),
            });
        }
        log::debug!(
            "{}: created {} for customer {} ({})",
            Measurement::full_name(),
            measurement.garment_type,
            measurement.customer_id,
            measurement.status
        );
        self.items.push(measurement.clone());
        Ok(measurement)
    }

    fn update(
        &mut self,
        id: MeasurementId,
        patch: &MeasurementPatch,
        now: DateTime<Utc>,
    ) -> Result<Measurement, RepositoryError> {
        let pos = self.position(id)?;
        let mut updated = self.items[pos].clone();
        updated.apply_patch(patch, now);
        updated.validate()?;
        log::debug!("{}: updated {}", Measurement::full_name(), id);
        self.items[pos] = updated.clone();
        Ok(updated)
    }

    fn delete(&mut self, id: MeasurementId) -> Result<(), RepositoryError> {
        let pos = self.position(id)?;
        self.items.remove(pos);
        log::debug!("{}: deleted {}", Measurement::full_name(), id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_customer::aggregate::CustomerId;
    use crate::domain::a002_measurement::aggregate::MeasurementDto;
    use crate::enums::{GarmentType, MeasurementStatus, Priority};
    use chrono::NaiveDate;

    fn sample(customer_id: CustomerId, garment_type: GarmentType) -> Measurement {
        Measurement::new_for_insert(
            MeasurementDto {
                customer_id,
                garment_type,
                values: Default::default(),
                notes: String::new(),
                date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
                status: MeasurementStatus::Draft,
                due_date: None,
                priority: Priority::Normal,
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_list_by_customer() {
        let mut repo = InMemoryMeasurementRepository::new();
        let a = CustomerId::new_v4();
        let b = CustomerId::new_v4();
        repo.create(sample(a, GarmentType::Shirt)).unwrap();
        repo.create(sample(b, GarmentType::Pants)).unwrap();
        repo.create(sample(a, GarmentType::Suit)).unwrap();

        let query = MeasurementQuery {
            customer_id: Some(a),
            ..Default::default()
        };
        let found = repo.list(&query);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].garment_type, GarmentType::Shirt);
        assert_eq!(found[1].garment_type, GarmentType::Suit);
        assert_eq!(repo.list(&MeasurementQuery::default()).len(), 3);
    }

    #[test]
    fn test_create_rejects_out_of_schema_values() {
        let mut repo = InMemoryMeasurementRepository::new();
        let mut m = sample(CustomerId::new_v4(), GarmentType::Custom);
        m.values.insert("chest".into(), 100.0);
        assert!(matches!(repo.create(m), Err(RepositoryError::Validation(_))));
        assert!(repo.is_empty());
    }

    #[test]
    fn test_create_same_id_twice_is_duplicate() {
        let mut repo = InMemoryMeasurementRepository::new();
        let m = sample(CustomerId::new_v4(), GarmentType::Shirt);
        repo.create(m.clone()).unwrap();
        assert!(matches!(repo.create(m), Err(RepositoryError::Duplicate { .. })));
    }

    #[test]
    fn test_update_and_delete() {
        let mut repo = InMemoryMeasurementRepository::new();
        let m = repo.create(sample(CustomerId::new_v4(), GarmentType::Shirt)).unwrap();

        let updated = repo
            .update(m.id, &MeasurementPatch::status(MeasurementStatus::Confirmed), Utc::now())
            .unwrap();
        assert_eq!(updated.status, MeasurementStatus::Confirmed);
        assert_eq!(repo.get(m.id).unwrap().status, MeasurementStatus::Confirmed);

        repo.delete(m.id).unwrap();
        assert!(matches!(repo.get(m.id), Err(RepositoryError::NotFound { .. })));
        assert!(matches!(repo.delete(m.id), Err(RepositoryError::NotFound { .. })));
    }

    #[test]
    fn test_invalid_update_leaves_record_untouched() {
        let mut repo = InMemoryMeasurementRepository::new();
        let m = repo.create(sample(CustomerId::new_v4(), GarmentType::Shirt)).unwrap();
        let patch = MeasurementPatch {
            values: Some([("inseam".to_string(), 80.0)].into_iter().collect()),
            ..Default::default()
        };
        assert!(repo.update(m.id, &patch, Utc::now()).is_err());
        assert_eq!(repo.get(m.id).unwrap(), m);
    }
}
