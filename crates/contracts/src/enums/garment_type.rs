use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Тип изделия, определяющий набор полей мерки
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GarmentType {
    #[default]
    Shirt,
    Pants,
    Suit,
    Blouse,
    Dress,
    Custom,
}

impl GarmentType {
    pub const ALL: [GarmentType; 6] = [
        GarmentType::Shirt,
        GarmentType::Pants,
        GarmentType::Suit,
        GarmentType::Blouse,
        GarmentType::Dress,
        GarmentType::Custom,
    ];

    /// Код типа (используется в URL, CSV и сериализации)
    pub fn code(&self) -> &'static str {
        match self {
            GarmentType::Shirt => "shirt",
            GarmentType::Pants => "pants",
            GarmentType::Suit => "suit",
            GarmentType::Blouse => "blouse",
            GarmentType::Dress => "dress",
            GarmentType::Custom => "custom",
        }
    }

    /// Человекочитаемое название
    pub fn label(&self) -> &'static str {
        match self {
            GarmentType::Shirt => "Shirt",
            GarmentType::Pants => "Pants",
            GarmentType::Suit => "Suit",
            GarmentType::Blouse => "Blouse",
            GarmentType::Dress => "Dress",
            GarmentType::Custom => "Custom",
        }
    }

    /// Название во множественном числе (для фильтров списка)
    pub fn plural_label(&self) -> &'static str {
        match self {
            GarmentType::Shirt => "Shirts",
            GarmentType::Pants => "Pants",
            GarmentType::Suit => "Suits",
            GarmentType::Blouse => "Blouses",
            GarmentType::Dress => "Dresses",
            GarmentType::Custom => "Custom",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            GarmentType::Shirt => "👔",
            GarmentType::Pants => "👖",
            GarmentType::Suit => "🤵",
            GarmentType::Blouse => "👚",
            GarmentType::Dress => "👗",
            GarmentType::Custom => "🎨",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            GarmentType::Shirt => "Formal and casual shirts",
            GarmentType::Pants => "Trousers and pants",
            GarmentType::Suit => "Complete suit with jacket and pants",
            GarmentType::Blouse => "Women's blouses and tops",
            GarmentType::Dress => "Dresses and gowns",
            GarmentType::Custom => "Custom garment measurements",
        }
    }

    /// Популярные типы помечаются в мастере
    pub fn is_popular(&self) -> bool {
        matches!(self, GarmentType::Shirt | GarmentType::Pants)
    }

    /// Парсинг из кода
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

impl fmt::Display for GarmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for GarmentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("Unknown garment type: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_shirt() {
        assert_eq!(GarmentType::default(), GarmentType::Shirt);
    }

    #[test]
    fn test_code_parsing() {
        for t in GarmentType::ALL {
            assert_eq!(t.code().parse::<GarmentType>(), Ok(t));
        }
        assert!("kilt".parse::<GarmentType>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&GarmentType::Dress).unwrap();
        assert_eq!(json, "\"dress\"");
    }
}
