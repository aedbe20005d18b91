use super::aggregate::{normalize_phone, Customer, CustomerDto, CustomerId};
use crate::domain::common::{AggregateRoot, RepositoryError};
use chrono::{DateTime, Utc};

/// Хранилище клиентов
pub trait CustomerRepository {
    /// Все клиенты в порядке добавления
    fn list(&self) -> Vec<Customer>;

    fn get(&self, id: CustomerId) -> Result<Customer, RepositoryError>;

    /// Создать клиента. Дубль определяется по совпадению цифр телефона.
    fn create(&mut self, dto: &CustomerDto, now: DateTime<Utc>) -> Result<Customer, RepositoryError>;
}

/// Хранилище в памяти процесса (данные живут до перезагрузки страницы)
#[derive(Debug, Clone, Default)]
pub struct InMemoryCustomerRepository {
    items: Vec<Customer>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl CustomerRepository for InMemoryCustomerRepository {
    fn list(&self) -> Vec<Customer> {
        self.items.clone()
    }

    fn get(&self, id: CustomerId) -> Result<Customer, RepositoryError> {
        self.items
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(Customer::element_name(), id))
    }

    fn create(&mut self, dto: &CustomerDto, now: DateTime<Utc>) -> Result<Customer, RepositoryError> {
        let customer = Customer::new_for_insert(dto, now);
        customer.validate()?;

        // Телефон без цифр ("n/a") ни с кем не сравнивается
        let digits = normalize_phone(&customer.phone);
        let same_phone = (!digits.is_empty())
            .then(|| self.items.iter().find(|c| c.phone_digits() == digits))
            .flatten();
        if let Some(existing) = same_phone {
            return Err(RepositoryError::Duplicate {
                entity: Customer::element_name(),
                detail: format!("phone {} is already used by {}", customer.phone, existing.name),
            });
        }
        if self.items.iter().any(|c| c.id == customer.id) {
            return Err(RepositoryError::Duplicate {
                entity: Customer::element_name(),
                detail: format!("id {}", customer.id),
            });
        }

        log::debug!("{}: created {} ({})", Customer::full_name(), customer.name, customer.id);
        self.items.push(customer.clone());
        Ok(customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_get() {
        let mut repo = InMemoryCustomerRepository::new();
        let created = repo
            .create(&CustomerDto::new("John Doe", "+1 (555) 123-4567"), Utc::now())
            .unwrap();
        assert_eq!(repo.get(created.id).unwrap(), created);
        assert_eq!(repo.list().len(), 1);
    }

    #[test]
    fn test_duplicate_phone_is_rejected() {
        let mut repo = InMemoryCustomerRepository::new();
        let now = Utc::now();
        repo.create(&CustomerDto::new("John Doe", "+1 (555) 123-4567"), now)
            .unwrap();
        let err = repo
            .create(&CustomerDto::new("Johnny", "15551234567"), now)
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Duplicate { .. }));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_phones_without_digits_are_not_duplicates() {
        let mut repo = InMemoryCustomerRepository::new();
        let now = Utc::now();
        repo.create(&CustomerDto::new("Ann Lee", "ask at desk"), now)
            .unwrap();
        repo.create(&CustomerDto::new("Bob Ray", "n/a"), now).unwrap();
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_missing_required_fields_fail_validation() {
        let mut repo = InMemoryCustomerRepository::new();
        let err = repo
            .create(&CustomerDto::new("", "555"), Utc::now())
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Validation(_)));
        assert!(repo.is_empty());
    }

    #[test]
    fn test_get_unknown_is_not_found() {
        let repo = InMemoryCustomerRepository::new();
        let err = repo.get(CustomerId::new_v4()).unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { entity: "Customer", .. }));
    }
}
