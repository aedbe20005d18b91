use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata, RepositoryError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub Uuid);

impl CustomerId {
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

impl AggregateId for CustomerId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CustomerId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Customer {
    pub fn new_for_insert(dto: &CustomerDto, now: DateTime<Utc>) -> Self {
        Self::new_with_id(CustomerId::new_v4(), dto, now)
    }

    pub fn new_with_id(id: CustomerId, dto: &CustomerDto, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: dto.name.trim().to_string(),
            phone: dto.phone.trim().to_string(),
            email: non_empty(&dto.email),
            address: non_empty(&dto.address),
            notes: non_empty(&dto.notes),
            metadata: EntityMetadata::new_at(now),
        }
    }

    pub fn validate(&self) -> Result<(), RepositoryError> {
        if self.name.trim().is_empty() {
            return Err(RepositoryError::validation("Customer name is required"));
        }
        if self.phone.trim().is_empty() {
            return Err(RepositoryError::validation("Phone number is required"));
        }
        Ok(())
    }

    /// Телефон без форматирования: только цифры (для поиска дублей)
    pub fn phone_digits(&self) -> String {
        normalize_phone(&self.phone)
    }

    /// Инициалы для аватара в карточке
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

impl AggregateRoot for Customer {
    type Id = CustomerId;

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
        "a001"
    }

    fn collection_name() -> &'static str {
        "customer"
    }

    fn element_name() -> &'static str {
        "Customer"
    }

    fn list_name() -> &'static str {
        "Customers"
    }
}

pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CustomerDto {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}

impl CustomerDto {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            ..Default::default()
        }
    }

    /// Обязательные поля: имя и телефон
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.phone.trim().is_empty()
    }
}

impl From<&Customer> for CustomerDto {
    fn from(c: &Customer) -> Self {
        Self {
            name: c.name.clone(),
            phone: c.phone.clone(),
            email: c.email.clone(),
            address: c.address.clone(),
            notes: c.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_for_insert_trims_and_drops_empty_optionals() {
        let dto = CustomerDto {
            name: "  Jane Smith ".into(),
            phone: "+1 (555) 987-6543".into(),
            email: Some("   ".into()),
            address: Some("12 High St".into()),
            notes: None,
        };
        let c = Customer::new_for_insert(&dto, Utc::now());
        assert_eq!(c.name, "Jane Smith");
        assert_eq!(c.email, None);
        assert_eq!(c.address.as_deref(), Some("12 High St"));
        assert_eq!(c.phone_digits(), "15559876543");
    }

    #[test]
    fn test_validate_requires_name_and_phone() {
        let now = Utc::now();
        let missing_phone = Customer::new_for_insert(&CustomerDto::new("John Doe", ""), now);
        assert!(matches!(
            missing_phone.validate(),
            Err(RepositoryError::Validation(_))
        ));
        let ok = Customer::new_for_insert(&CustomerDto::new("John Doe", "555"), now);
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_initials() {
        let c = Customer::new_for_insert(&CustomerDto::new("robert johnson", "1"), Utc::now());
        assert_eq!(c.initials(), "RJ");
    }
}
