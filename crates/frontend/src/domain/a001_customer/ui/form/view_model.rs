use crate::shared::data::AppStore;
use contracts::domain::a001_customer::aggregate::{Customer, CustomerDto};
use leptos::prelude::*;

/// ViewModel for the new customer form
#[derive(Clone, Copy)]
pub struct CustomerFormViewModel {
    pub form: RwSignal<CustomerDto>,
    pub error: RwSignal<Option<String>>,
    /// Ошибки полей показываются только после первой попытки сохранить
    pub submitted: RwSignal<bool>,
}

impl CustomerFormViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CustomerDto::default()),
            error: RwSignal::new(None),
            submitted: RwSignal::new(false),
        }
    }

    pub fn name_error(&self) -> Option<String> {
        self.field_error(|f| f.name.trim().is_empty(), "Name is required")
    }

    pub fn phone_error(&self) -> Option<String> {
        self.field_error(|f| f.phone.trim().is_empty(), "Phone number is required")
    }

    fn field_error(&self, missing: impl Fn(&CustomerDto) -> bool, message: &str) -> Option<String> {
        (self.submitted.get() && self.form.with(missing)).then(|| message.to_string())
    }

    pub fn set_optional(&self, value: String, field: impl Fn(&mut CustomerDto) -> &mut Option<String>) {
        self.form.update(|f| *field(f) = optional_text(value));
    }

    pub fn reset(&self) {
        self.form.set(CustomerDto::default());
        self.error.set(None);
        self.submitted.set(false);
    }

    /// Save form data to the store; on failure the form keeps its values
    pub fn save_command(&self, store: &AppStore) -> Option<Customer> {
        self.submitted.set(true);
        let current = self.form.get_untracked();

        if !current.is_valid() {
            self.error
                .set(Some("Please fill in the customer's name and phone".to_string()));
            return None;
        }

        match store.create_customer(&current) {
            Ok(customer) => {
                self.error.set(None);
                Some(customer)
            }
            Err(e) => {
                self.error.set(Some(e.to_string()));
                None
            }
        }
    }
}

/// Пустая строка из поля ввода означает отсутствие значения
fn optional_text(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text(String::new()), None);
        assert_eq!(optional_text("   ".to_string()), None);
        assert_eq!(optional_text("12 Oak St".to_string()), Some("12 Oak St".to_string()));
    }
}
