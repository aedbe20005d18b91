use crate::shared::export::ExcelExportable;
use contracts::shared::list_filter::MeasurementListItem;

/// Строка CSV-выгрузки списка мерок
pub struct MeasurementExportRow<'a>(pub &'a MeasurementListItem);

impl ExcelExportable for MeasurementExportRow<'_> {
    fn headers() -> Vec<&'static str> {
        vec![
            "Customer",
            "Type",
            "Date",
            "Status",
            "Priority",
            "Due Date",
            "Fields",
            "Measurements",
            "Notes",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        let m = &self.0.measurement;
        let values = m
            .schema_values()
            .iter()
            .map(|(field, value)| format!("{}: {} {}", field.label, value, field.unit.symbol()))
            .collect::<Vec<_>>()
            .join(", ");
        vec![
            self.0.customer_name.clone(),
            m.garment_type.label().to_string(),
            m.date.format("%Y-%m-%d").to_string(),
            m.status.label().to_string(),
            m.priority.label().to_string(),
            m.due_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            m.filled_count().to_string(),
            values,
            m.notes.clone(),
        ]
    }
}

pub fn export_file_name(today: chrono::NaiveDate) -> String {
    format!("measurements_{}.csv", today.format("%Y%m%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::build_csv;
    use chrono::{NaiveDate, TimeZone, Utc};
    use contracts::domain::a001_customer::aggregate::CustomerId;
    use contracts::domain::a002_measurement::aggregate::{Measurement, MeasurementDto};
    use contracts::enums::{GarmentType, MeasurementStatus, Priority};

    fn item() -> MeasurementListItem {
        let dto = MeasurementDto {
            customer_id: CustomerId::new_v4(),
            garment_type: GarmentType::Shirt,
            values: [("neck".to_string(), 38.5), ("chest".to_string(), 96.0)]
                .into_iter()
                .collect(),
            notes: "Slim fit; no pocket".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            status: MeasurementStatus::Confirmed,
            due_date: None,
            priority: Priority::Urgent,
        };
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap();
        MeasurementListItem {
            measurement: Measurement::new_for_insert(dto, now),
            customer_name: "Jane Smith".to_string(),
        }
    }

    #[test]
    fn test_row_lists_values_in_schema_order() {
        let item = item();
        let row = MeasurementExportRow(&item).to_csv_row();
        assert_eq!(row.len(), MeasurementExportRow::headers().len());
        assert_eq!(row[0], "Jane Smith");
        assert_eq!(row[2], "2024-03-05");
        assert_eq!(row[5], "");
        assert_eq!(row[6], "2");
        assert_eq!(
            row[7],
            "Neck Circumference: 38.5 cm, Chest (Around fullest part): 96 cm"
        );
    }

    #[test]
    fn test_notes_with_separator_are_quoted() {
        let item = item();
        let csv = build_csv(&[MeasurementExportRow(&item)]);
        assert!(csv.ends_with("\"Slim fit; no pocket\"\n"));
    }

    #[test]
    fn test_export_file_name() {
        let today = NaiveDate::from_ymd_opt(2024, 11, 2).unwrap();
        assert_eq!(export_file_name(today), "measurements_20241102.csv");
    }
}
