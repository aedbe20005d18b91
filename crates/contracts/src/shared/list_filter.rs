//! Фильтрация, сортировка и пагинация списков
//!
//! Чистые функции над срезами записей. Страницы только хранят состояние
//! фильтров и вызывают эти функции при каждом изменении. Текущая дата
//! передаётся явно, функции не читают системные часы.

use crate::domain::a001_customer::aggregate::{Customer, CustomerId};
use crate::domain::a002_measurement::aggregate::Measurement;
use crate::enums::{GarmentType, MeasurementStatus};
use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

// ============================================================================
// Text search
// ============================================================================

/// Trait для типов данных, поддерживающих текстовый поиск
pub trait Searchable {
    /// Поля, по которым выполняется поиск
    fn search_fields(&self) -> Vec<&str>;

    /// Регистронезависимое вхождение подстроки хотя бы в одно поле.
    /// Пустой запрос совпадает со всем.
    fn matches_text(&self, query: &str) -> bool {
        text_matches(&self.search_fields(), query)
    }
}

pub fn text_matches(fields: &[&str], query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Фильтрует список по поисковому запросу, сохраняя исходный порядок
pub fn filter_by_text<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.matches_text(query))
        .cloned()
        .collect()
}

impl Searchable for Customer {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.phone.as_str()];
        if let Some(email) = &self.email {
            fields.push(email.as_str());
        }
        fields
    }
}

// ============================================================================
// Period
// ============================================================================

/// Период по дате записи, отсчитывается от переданной "сегодняшней" даты
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    All,
    Today,
    Week,
    Month,
    Quarter,
}

impl Period {
    pub const ALL: [Period; 5] = [
        Period::All,
        Period::Today,
        Period::Week,
        Period::Month,
        Period::Quarter,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Period::All => "all",
            Period::Today => "today",
            Period::Week => "week",
            Period::Month => "month",
            Period::Quarter => "quarter",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::All => "All Time",
            Period::Today => "Today",
            Period::Week => "This Week",
            Period::Month => "This Month",
            Period::Quarter => "This Quarter",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }

    /// Нижняя граница периода (включительно)
    pub fn start(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Period::All => None,
            Period::Today => Some(today),
            Period::Week => today.checked_sub_days(Days::new(7)),
            Period::Month => today.checked_sub_months(Months::new(1)),
            Period::Quarter => today.checked_sub_months(Months::new(3)),
        }
    }

    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Period::All => true,
            Period::Today => date == today,
            _ => self.start(today).map_or(true, |start| date >= start),
        }
    }
}

// ============================================================================
// Sorting
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    Name,
    Type,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::Newest,
        SortOrder::Oldest,
        SortOrder::Name,
        SortOrder::Type,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::Name => "name",
            SortOrder::Type => "type",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest First",
            SortOrder::Oldest => "Oldest First",
            SortOrder::Name => "Customer Name",
            SortOrder::Type => "Measurement Type",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }
}

/// Ключи сортировки записи
pub trait SortKeys {
    fn record_date(&self) -> NaiveDate;
    fn name_key(&self) -> &str;
    fn category_key(&self) -> &str;
}

/// Стабильная сортировка: записи с равными ключами сохраняют порядок
pub fn sort_records<T: SortKeys>(items: &mut [T], order: SortOrder) {
    items.sort_by(|a, b| compare(a, b, order));
}

fn compare<T: SortKeys>(a: &T, b: &T, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Newest => b.record_date().cmp(&a.record_date()),
        SortOrder::Oldest => a.record_date().cmp(&b.record_date()),
        SortOrder::Name => compare_text(a.name_key(), b.name_key()),
        SortOrder::Type => compare_text(a.category_key(), b.category_key()),
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

// ============================================================================
// Measurements
// ============================================================================

/// Строка списка мерок: мерка + имя клиента для поиска и сортировки
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementListItem {
    pub measurement: Measurement,
    pub customer_name: String,
}

pub const UNKNOWN_CUSTOMER: &str = "Unknown customer";

/// Присоединяет имена клиентов к меркам, порядок мерок сохраняется
pub fn join_customers(measurements: Vec<Measurement>, customers: &[Customer]) -> Vec<MeasurementListItem> {
    let names: HashMap<CustomerId, &str> = customers
        .iter()
        .map(|c| (c.id, c.name.as_str()))
        .collect();
    measurements
        .into_iter()
        .map(|measurement| {
            let customer_name = names
                .get(&measurement.customer_id)
                .copied()
                .unwrap_or(UNKNOWN_CUSTOMER)
                .to_string();
            MeasurementListItem {
                measurement,
                customer_name,
            }
        })
        .collect()
}

impl Searchable for MeasurementListItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.customer_name.as_str(),
            self.measurement.garment_type.label(),
        ]
    }
}

impl SortKeys for MeasurementListItem {
    fn record_date(&self) -> NaiveDate {
        self.measurement.date
    }

    fn name_key(&self) -> &str {
        &self.customer_name
    }

    fn category_key(&self) -> &str {
        self.measurement.garment_type.label()
    }
}

/// Категориальный запрос: равенство по клиенту, типу и статусу.
/// `None` означает "все".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MeasurementQuery {
    pub customer_id: Option<CustomerId>,
    pub garment_type: Option<GarmentType>,
    pub status: Option<MeasurementStatus>,
}

impl MeasurementQuery {
    pub fn matches(&self, m: &Measurement) -> bool {
        self.customer_id.map_or(true, |id| m.customer_id == id)
            && self.garment_type.map_or(true, |t| m.garment_type == t)
            && self.status.map_or(true, |s| m.status == s)
    }
}

/// Полный набор фильтров страницы мерок
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MeasurementFilter {
    pub text: String,
    #[serde(flatten)]
    pub query: MeasurementQuery,
    pub period: Period,
}

impl MeasurementFilter {
    pub fn matches(&self, item: &MeasurementListItem, today: NaiveDate) -> bool {
        item.matches_text(&self.text)
            && self.query.matches(&item.measurement)
            && self.period.contains(item.measurement.date, today)
    }

    pub fn is_active(&self) -> bool {
        !self.text.trim().is_empty()
            || self.query != MeasurementQuery::default()
            || self.period != Period::All
    }
}

pub fn filter_measurements(
    items: &[MeasurementListItem],
    filter: &MeasurementFilter,
    today: NaiveDate,
) -> Vec<MeasurementListItem> {
    items
        .iter()
        .filter(|item| filter.matches(item, today))
        .cloned()
        .collect()
}

/// Производное представление: фильтр, затем стабильная сортировка
pub fn derive_measurement_view(
    items: &[MeasurementListItem],
    filter: &MeasurementFilter,
    order: SortOrder,
    today: NaiveDate,
) -> Vec<MeasurementListItem> {
    let mut view = filter_measurements(items, filter, today);
    sort_records(&mut view, order);
    view
}

// ============================================================================
// Customers
// ============================================================================

/// Строка списка клиентов с агрегатами по меркам
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerListItem {
    pub customer: Customer,
    pub measurement_count: usize,
    pub last_visit: Option<NaiveDate>,
    pub active: bool,
}

impl CustomerListItem {
    pub fn activity_label(&self) -> &'static str {
        if self.active {
            "Active"
        } else {
            "Inactive"
        }
    }
}

/// Клиент активен, если последняя мерка снята не раньше `active_window_days` дней назад
pub fn summarize_customers(
    customers: &[Customer],
    measurements: &[Measurement],
    today: NaiveDate,
    active_window_days: u64,
) -> Vec<CustomerListItem> {
    let threshold = today.checked_sub_days(Days::new(active_window_days));
    customers
        .iter()
        .map(|customer| {
            let own = measurements.iter().filter(|m| m.customer_id == customer.id);
            let measurement_count = own.clone().count();
            let last_visit = own.map(|m| m.date).max();
            let active = match (last_visit, threshold) {
                (Some(visit), Some(threshold)) => visit >= threshold,
                (Some(_), None) => true,
                (None, _) => false,
            };
            CustomerListItem {
                customer: customer.clone(),
                measurement_count,
                last_visit,
                active,
            }
        })
        .collect()
}

impl Searchable for CustomerListItem {
    fn search_fields(&self) -> Vec<&str> {
        self.customer.search_fields()
    }
}

impl SortKeys for CustomerListItem {
    fn record_date(&self) -> NaiveDate {
        self.customer.metadata.created_at.date_naive()
    }

    fn name_key(&self) -> &str {
        &self.customer.name
    }

    fn category_key(&self) -> &str {
        self.activity_label()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl ActivityFilter {
    pub const ALL: [ActivityFilter; 3] = [
        ActivityFilter::All,
        ActivityFilter::Active,
        ActivityFilter::Inactive,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ActivityFilter::All => "all",
            ActivityFilter::Active => "active",
            ActivityFilter::Inactive => "inactive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityFilter::All => "All Customers",
            ActivityFilter::Active => "Active",
            ActivityFilter::Inactive => "Inactive",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.code() == code)
    }

    pub fn matches(&self, item: &CustomerListItem) -> bool {
        match self {
            ActivityFilter::All => true,
            ActivityFilter::Active => item.active,
            ActivityFilter::Inactive => !item.active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomerFilter {
    pub text: String,
    pub activity: ActivityFilter,
}

pub fn filter_customers(items: &[CustomerListItem], filter: &CustomerFilter) -> Vec<CustomerListItem> {
    items
        .iter()
        .filter(|item| item.matches_text(&filter.text) && filter.activity.matches(item))
        .cloned()
        .collect()
}

// ============================================================================
// Pagination
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Номер страницы (с нуля), уже приведённый к допустимому диапазону
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

/// Нулевой размер страницы означает "всё на одной странице"
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let total_count = items.len();
    let page_size = if page_size == 0 {
        total_count.max(1)
    } else {
        page_size
    };
    let total_pages = total_count.div_ceil(page_size).max(1);
    let page = page.min(total_pages - 1);
    let start = page * page_size;
    let end = (start + page_size).min(total_count);
    Page {
        items: items[start.min(total_count)..end].to_vec(),
        page,
        page_size,
        total_count,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_customer::aggregate::CustomerDto;
    use crate::domain::a002_measurement::aggregate::MeasurementDto;
    use crate::enums::Priority;
    use chrono::{TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn customer(name: &str, phone: &str, email: Option<&str>) -> Customer {
        let mut dto = CustomerDto::new(name, phone);
        dto.email = email.map(str::to_string);
        Customer::new_for_insert(&dto, Utc::now())
    }

    fn measurement(
        customer: &Customer,
        garment_type: GarmentType,
        on: NaiveDate,
        status: MeasurementStatus,
    ) -> Measurement {
        Measurement::new_for_insert(
            MeasurementDto {
                customer_id: customer.id,
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

    fn item(name: &str, garment_type: GarmentType, on: NaiveDate) -> MeasurementListItem {
        let c = customer(name, "1", None);
        MeasurementListItem {
            measurement: measurement(&c, garment_type, on, MeasurementStatus::Draft),
            customer_name: name.to_string(),
        }
    }

    fn names(items: &[MeasurementListItem]) -> Vec<&str> {
        items.iter().map(|i| i.customer_name.as_str()).collect()
    }

    #[test]
    fn test_search_jane_finds_only_jane() {
        let customers = vec![
            customer("John Doe", "+1 (555) 123-4567", Some("john@example.com")),
            customer("Jane Smith", "+1 (555) 987-6543", Some("jane@example.com")),
        ];
        let found = filter_by_text(&customers, "jane");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Jane Smith");
    }

    #[test]
    fn test_search_matches_phone_and_email_case_insensitive() {
        let customers = vec![
            customer("John Doe", "+1 (555) 123-4567", Some("John@Example.com")),
            customer("Robert Johnson", "+1 (555) 456-7890", None),
        ];
        assert_eq!(filter_by_text(&customers, "456-78").len(), 1);
        assert_eq!(filter_by_text(&customers, "EXAMPLE").len(), 1);
        assert_eq!(filter_by_text(&customers, "   ").len(), 2);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let items = vec![
            item("John Doe", GarmentType::Suit, date(2024, 1, 15)),
            item("Jane Smith", GarmentType::Dress, date(2024, 1, 14)),
            item("Johnny Walker", GarmentType::Suit, date(2023, 6, 1)),
        ];
        let filter = MeasurementFilter {
            text: "joh".into(),
            query: MeasurementQuery {
                garment_type: Some(GarmentType::Suit),
                ..Default::default()
            },
            period: Period::Quarter,
        };
        let today = date(2024, 1, 20);
        let once = filter_measurements(&items, &filter, today);
        let twice = filter_measurements(&once, &filter, today);
        assert_eq!(once, twice);
        assert_eq!(names(&once), vec!["John Doe"]);
    }

    #[test]
    fn test_oldest_sort_is_ascending() {
        let mut items = vec![
            item("A", GarmentType::Shirt, date(2024, 1, 15)),
            item("B", GarmentType::Shirt, date(2024, 1, 10)),
        ];
        sort_records(&mut items, SortOrder::Oldest);
        let dates: Vec<_> = items.iter().map(|i| i.measurement.date).collect();
        assert_eq!(dates, vec![date(2024, 1, 10), date(2024, 1, 15)]);
    }

    #[test]
    fn test_sorts_are_stable() {
        let same_day = date(2024, 1, 14);
        let base = vec![
            item("Zed", GarmentType::Shirt, same_day),
            item("amy", GarmentType::Dress, same_day),
            item("Amy", GarmentType::Shirt, date(2024, 1, 1)),
            item("bob", GarmentType::Shirt, same_day),
        ];

        let mut newest = base.clone();
        sort_records(&mut newest, SortOrder::Newest);
        assert_eq!(names(&newest), vec!["Zed", "amy", "bob", "Amy"]);

        let mut by_name = base.clone();
        sort_records(&mut by_name, SortOrder::Name);
        assert_eq!(names(&by_name), vec!["amy", "Amy", "bob", "Zed"]);

        let mut by_type = base;
        sort_records(&mut by_type, SortOrder::Type);
        assert_eq!(names(&by_type), vec!["amy", "Zed", "Amy", "bob"]);
    }

    #[test]
    fn test_periods_relative_to_injected_today() {
        let today = date(2024, 3, 31);
        assert!(Period::Today.contains(today, today));
        assert!(!Period::Today.contains(date(2024, 3, 30), today));
        assert!(Period::Week.contains(date(2024, 3, 24), today));
        assert!(!Period::Week.contains(date(2024, 3, 23), today));
        assert!(Period::Month.contains(date(2024, 2, 29), today));
        assert!(!Period::Month.contains(date(2024, 2, 28), today));
        assert!(Period::Quarter.contains(date(2023, 12, 31), today));
        assert!(!Period::Quarter.contains(date(2023, 12, 30), today));
        assert!(Period::All.contains(date(1990, 1, 1), today));
    }

    #[test]
    fn test_status_and_type_filters_combine() {
        let c = customer("John Doe", "1", None);
        let items = join_customers(
            vec![
                measurement(&c, GarmentType::Suit, date(2024, 1, 15), MeasurementStatus::Completed),
                measurement(&c, GarmentType::Suit, date(2024, 1, 10), MeasurementStatus::Draft),
                measurement(&c, GarmentType::Shirt, date(2024, 1, 14), MeasurementStatus::Draft),
            ],
            std::slice::from_ref(&c),
        );
        let filter = MeasurementFilter {
            query: MeasurementQuery {
                garment_type: Some(GarmentType::Suit),
                status: Some(MeasurementStatus::Draft),
                ..Default::default()
            },
            ..Default::default()
        };
        let found = filter_measurements(&items, &filter, date(2024, 1, 20));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].measurement.date, date(2024, 1, 10));
    }

    #[test]
    fn test_join_customers_marks_unknown() {
        let known = customer("Jane Smith", "1", None);
        let stranger = customer("Ghost", "2", None);
        let items = join_customers(
            vec![
                measurement(&known, GarmentType::Dress, date(2024, 1, 1), MeasurementStatus::Draft),
                measurement(&stranger, GarmentType::Dress, date(2024, 1, 1), MeasurementStatus::Draft),
            ],
            std::slice::from_ref(&known),
        );
        assert_eq!(names(&items), vec!["Jane Smith", UNKNOWN_CUSTOMER]);
    }

    #[test]
    fn test_search_by_type_label() {
        let items = vec![
            item("John Doe", GarmentType::Suit, date(2024, 1, 15)),
            item("Jane Smith", GarmentType::Dress, date(2024, 1, 14)),
        ];
        let filter = MeasurementFilter {
            text: "dress".into(),
            ..Default::default()
        };
        let found = filter_measurements(&items, &filter, date(2024, 1, 20));
        assert_eq!(names(&found), vec!["Jane Smith"]);
    }

    #[test]
    fn test_summarize_customers_activity() {
        let today = date(2024, 1, 20);
        let john = customer("John Doe", "1", None);
        let rob = customer("Robert Johnson", "2", None);
        let newbie = customer("New Person", "3", None);
        let ms = vec![
            measurement(&john, GarmentType::Suit, date(2024, 1, 15), MeasurementStatus::Completed),
            measurement(&john, GarmentType::Shirt, date(2023, 11, 2), MeasurementStatus::Completed),
            measurement(&rob, GarmentType::Shirt, date(2023, 6, 20), MeasurementStatus::Draft),
        ];
        let rows = summarize_customers(&[john, rob, newbie], &ms, today, 90);
        assert_eq!(rows[0].measurement_count, 2);
        assert_eq!(rows[0].last_visit, Some(date(2024, 1, 15)));
        assert!(rows[0].active);
        assert!(!rows[1].active);
        assert_eq!(rows[2].measurement_count, 0);
        assert!(!rows[2].active);

        let inactive = filter_customers(
            &rows,
            &CustomerFilter {
                text: String::new(),
                activity: ActivityFilter::Inactive,
            },
        );
        assert_eq!(inactive.len(), 2);
    }

    #[test]
    fn test_customer_newest_sort_uses_creation_date() {
        let mut older = customer("Older", "1", None);
        older.metadata.created_at = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let mut newer = customer("Newer", "2", None);
        newer.metadata.created_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut rows = summarize_customers(&[older, newer], &[], date(2024, 1, 2), 90);
        sort_records(&mut rows, SortOrder::Newest);
        assert_eq!(rows[0].customer.name, "Newer");
    }

    #[test]
    fn test_paginate() {
        let items: Vec<u32> = (1..=7).collect();
        let first = paginate(&items, 0, 3);
        assert_eq!(first.items, vec![1, 2, 3]);
        assert_eq!(first.total_pages, 3);

        let last = paginate(&items, 2, 3);
        assert_eq!(last.items, vec![7]);

        let clamped = paginate(&items, 10, 3);
        assert_eq!(clamped.page, 2);
        assert_eq!(clamped.items, vec![7]);

        let all = paginate(&items, 0, 0);
        assert_eq!(all.items.len(), 7);
        assert_eq!(all.total_pages, 1);

        let empty = paginate::<u32>(&[], 3, 10);
        assert_eq!(empty.page, 0);
        assert!(empty.items.is_empty());
        assert_eq!(empty.total_pages, 1);
    }
}
