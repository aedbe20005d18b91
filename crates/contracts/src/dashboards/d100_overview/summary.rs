use crate::domain::a002_measurement::aggregate::Measurement;
use crate::enums::{GarmentType, MeasurementStatus};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Сводные показатели для главной страницы и страницы мерок
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OverviewSummary {
    pub total_customers: usize,
    pub total_measurements: usize,
    /// Мерки с датой, равной текущей
    pub measurements_today: usize,
    /// Мерки текущего календарного месяца
    pub this_month: usize,
    pub draft: usize,
    pub confirmed: usize,
    pub completed: usize,
    /// Все незавершённые (draft + confirmed)
    pub pending: usize,
    /// Доля завершённых, в процентах; 0 для пустого списка
    pub completion_rate: u32,
}

impl OverviewSummary {
    pub fn compute(total_customers: usize, measurements: &[Measurement], today: NaiveDate) -> Self {
        let mut summary = Self {
            total_customers,
            total_measurements: measurements.len(),
            ..Default::default()
        };
        for m in measurements {
            if m.date == today {
                summary.measurements_today += 1;
            }
            if m.date.year() == today.year() && m.date.month() == today.month() {
                summary.this_month += 1;
            }
            match m.status {
                MeasurementStatus::Draft => summary.draft += 1,
                MeasurementStatus::Confirmed => summary.confirmed += 1,
                MeasurementStatus::Completed => summary.completed += 1,
            }
        }
        summary.pending = summary.draft + summary.confirmed;
        summary.completion_rate = percent(summary.completed, summary.total_measurements);
        summary
    }
}

/// Строка распределения по типам изделий
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypeShare {
    pub garment_type: GarmentType,
    pub count: usize,
    pub percent: u32,
}

/// Распределение мерок по типам, в порядке перечисления; пустые типы пропускаются
pub fn type_distribution(measurements: &[Measurement]) -> Vec<TypeShare> {
    let total = measurements.len();
    GarmentType::ALL
        .into_iter()
        .filter_map(|garment_type| {
            let count = measurements
                .iter()
                .filter(|m| m.garment_type == garment_type)
                .count();
            (count > 0).then(|| TypeShare {
                garment_type,
                count,
                percent: percent(count, total),
            })
        })
        .collect()
}

/// Последние записанные мерки: по дате мерки, при равной дате по времени создания
pub fn recent_activity(measurements: &[Measurement], limit: usize) -> Vec<Measurement> {
    let mut recent = measurements.to_vec();
    recent.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| b.metadata.created_at.cmp(&a.metadata.created_at))
    });
    recent.truncate(limit);
    recent
}

fn percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_customer::aggregate::CustomerId;
    use crate::domain::a002_measurement::aggregate::MeasurementDto;
    use crate::enums::Priority;
    use chrono::{Duration, TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn measurement(garment_type: GarmentType, on: NaiveDate, status: MeasurementStatus) -> Measurement {
        Measurement::new_for_insert(
            MeasurementDto {
                customer_id: CustomerId::new_v4(),
                garment_type,
                values: Default::default(),
                notes: String::new(),
                date: on,
                status,
                due_date: None,
                priority: Priority::Normal,
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_empty_summary() {
        let summary = OverviewSummary::compute(0, &[], date(2024, 1, 20));
        assert_eq!(summary.total_measurements, 0);
        assert_eq!(summary.completion_rate, 0);
        assert!(type_distribution(&[]).is_empty());
    }

    #[test]
    fn test_summary_counts() {
        let today = date(2024, 1, 20);
        let ms = vec![
            measurement(GarmentType::Suit, today, MeasurementStatus::Completed),
            measurement(GarmentType::Shirt, date(2024, 1, 2), MeasurementStatus::Draft),
            measurement(GarmentType::Shirt, date(2023, 12, 30), MeasurementStatus::Confirmed),
        ];
        let summary = OverviewSummary::compute(2, &ms, today);
        assert_eq!(summary.total_customers, 2);
        assert_eq!(summary.measurements_today, 1);
        assert_eq!(summary.this_month, 2);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.pending, 2);
        assert_eq!(summary.completion_rate, 33);
    }

    #[test]
    fn test_type_distribution() {
        let today = date(2024, 1, 20);
        let ms = vec![
            measurement(GarmentType::Dress, today, MeasurementStatus::Draft),
            measurement(GarmentType::Shirt, today, MeasurementStatus::Draft),
            measurement(GarmentType::Shirt, today, MeasurementStatus::Draft),
            measurement(GarmentType::Shirt, today, MeasurementStatus::Draft),
        ];
        let shares = type_distribution(&ms);
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].garment_type, GarmentType::Shirt);
        assert_eq!(shares[0].count, 3);
        assert_eq!(shares[0].percent, 75);
        assert_eq!(shares[1].garment_type, GarmentType::Dress);
        assert_eq!(shares[1].percent, 25);
    }

    #[test]
    fn test_recent_activity_orders_by_record_date() {
        let base = Utc.with_ymd_and_hms(2024, 1, 20, 9, 0, 0).unwrap();
        let mut older = measurement(GarmentType::Suit, date(2024, 1, 10), MeasurementStatus::Draft);
        older.metadata.created_at = base + Duration::hours(3);
        // правка старой мерки не поднимает её наверх
        older.metadata.updated_at = base + Duration::hours(5);
        let mut morning = measurement(GarmentType::Pants, date(2024, 1, 20), MeasurementStatus::Draft);
        morning.metadata.created_at = base;
        let mut noon = measurement(GarmentType::Dress, date(2024, 1, 20), MeasurementStatus::Draft);
        noon.metadata.created_at = base + Duration::hours(1);

        let recent = recent_activity(&[older.clone(), morning.clone(), noon.clone()], 2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, noon.id);
        assert_eq!(recent[1].id, morning.id);
    }
}
