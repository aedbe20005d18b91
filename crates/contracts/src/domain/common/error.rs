use thiserror::Error;

/// Ошибки хранилищ агрегатов
///
/// Все ошибки восстановимы: операция прерывается, состояние формы сохраняется.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("{entity} already exists: {detail}")]
    Duplicate { entity: &'static str, detail: String },

    #[error("{0}")]
    Validation(String),
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
