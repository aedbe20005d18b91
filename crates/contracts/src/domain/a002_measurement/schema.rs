//! Реестр схем мерок: тип изделия → упорядоченный список полей
//!
//! Порядок полей определяет порядок виджетов ввода и порядок вывода значений.
//! Для `blouse` и `custom` схема пустая: числовые поля не предусмотрены,
//! мерка описывается заметками.

use crate::enums::GarmentType;

/// Единица измерения поля
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Centimeter,
}

impl Unit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Centimeter => "cm",
        }
    }
}

/// Описание одного числового поля мерки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub unit: Unit,
}

/// Группа полей с заголовком (костюм делится на пиджак и брюки)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSection {
    pub title: &'static str,
    pub fields: &'static [FieldDescriptor],
}

const fn cm(key: &'static str, label: &'static str) -> FieldDescriptor {
    FieldDescriptor {
        key,
        label,
        unit: Unit::Centimeter,
    }
}

const SHIRT_FIELDS: &[FieldDescriptor] = &[
    cm("neck", "Neck Circumference"),
    cm("chest", "Chest (Around fullest part)"),
    cm("waist", "Waist"),
    cm("hips", "Hips"),
    cm("shoulderWidth", "Shoulder Width"),
    cm("sleeveLength", "Sleeve Length"),
    cm("bicep", "Bicep (Around fullest part)"),
    cm("wrist", "Wrist"),
    cm("shirtLength", "Shirt Length (Back)"),
    cm("backLength", "Back Length"),
    cm("frontLength", "Front Length"),
];

const PANTS_FIELDS: &[FieldDescriptor] = &[
    cm("waist", "Waist"),
    cm("hips", "Hips (Around fullest part)"),
    cm("inseam", "Inseam"),
    cm("outseam", "Outseam"),
    cm("thigh", "Thigh (Around fullest part)"),
    cm("knee", "Knee"),
    cm("ankle", "Ankle"),
    cm("rise", "Rise"),
];

/// Первые `SUIT_JACKET_LEN` полей относятся к пиджаку, остальные к брюкам
const SUIT_FIELDS: &[FieldDescriptor] = &[
    cm("jacketChest", "Jacket Chest"),
    cm("jacketWaist", "Jacket Waist"),
    cm("jacketHips", "Jacket Hips"),
    cm("jacketShoulder", "Jacket Shoulder Width"),
    cm("jacketSleeve", "Jacket Sleeve Length"),
    cm("jacketLength", "Jacket Length"),
    cm("pantsWaist", "Pants Waist"),
    cm("pantsHips", "Pants Hips"),
    cm("pantsInseam", "Pants Inseam"),
    cm("pantsOutseam", "Pants Outseam"),
    cm("pantsRise", "Pants Rise"),
];
const SUIT_JACKET_LEN: usize = 6;

const DRESS_FIELDS: &[FieldDescriptor] = &[
    cm("bust", "Bust"),
    cm("underBust", "Under Bust"),
    cm("waist", "Waist"),
    cm("hips", "Hips"),
    cm("shoulderWidth", "Shoulder Width"),
    cm("armhole", "Armhole"),
    cm("sleeveLength", "Sleeve Length"),
    cm("dressLength", "Dress Length"),
    cm("backLength", "Back Length"),
    cm("frontLength", "Front Length"),
];

/// Упорядоченный список полей для типа изделия
pub fn fields_for(garment: GarmentType) -> &'static [FieldDescriptor] {
    match garment {
        GarmentType::Shirt => SHIRT_FIELDS,
        GarmentType::Pants => PANTS_FIELDS,
        GarmentType::Suit => SUIT_FIELDS,
        GarmentType::Dress => DRESS_FIELDS,
        GarmentType::Blouse | GarmentType::Custom => &[],
    }
}

pub fn has_schema(garment: GarmentType) -> bool {
    !fields_for(garment).is_empty()
}

pub fn field(garment: GarmentType, key: &str) -> Option<&'static FieldDescriptor> {
    fields_for(garment).iter().find(|f| f.key == key)
}

pub fn is_field_allowed(garment: GarmentType, key: &str) -> bool {
    field(garment, key).is_some()
}

/// Поля, сгруппированные для формы ввода
pub fn sections_for(garment: GarmentType) -> Vec<FieldSection> {
    match garment {
        GarmentType::Suit => vec![
            FieldSection {
                title: "Jacket Measurements",
                fields: &SUIT_FIELDS[..SUIT_JACKET_LEN],
            },
            FieldSection {
                title: "Pants Measurements",
                fields: &SUIT_FIELDS[SUIT_JACKET_LEN..],
            },
        ],
        GarmentType::Shirt => vec![FieldSection {
            title: "Shirt Measurements",
            fields: SHIRT_FIELDS,
        }],
        GarmentType::Pants => vec![FieldSection {
            title: "Pants Measurements",
            fields: PANTS_FIELDS,
        }],
        GarmentType::Dress => vec![FieldSection {
            title: "Dress Measurements",
            fields: DRESS_FIELDS,
        }],
        GarmentType::Blouse | GarmentType::Custom => Vec::new(),
    }
}

/// Ключевые поля, показываемые на шаге выбора типа
pub fn preview_fields(garment: GarmentType) -> Vec<&'static FieldDescriptor> {
    let keys: &[&str] = match garment {
        GarmentType::Shirt => &["neck", "chest", "sleeveLength", "shirtLength"],
        GarmentType::Pants => &["waist", "hips", "inseam", "outseam"],
        GarmentType::Suit => &["jacketChest", "jacketLength", "pantsWaist", "pantsInseam"],
        GarmentType::Dress => &["bust", "waist", "hips", "dressLength"],
        GarmentType::Blouse | GarmentType::Custom => &[],
    };
    keys.iter().filter_map(|k| field(garment, k)).collect()
}

/// Разбор введённого значения поля; запятая допускается как десятичный разделитель.
/// Пустая строка означает незаполненное поле.
pub fn parse_field_value(field: &FieldDescriptor, raw: &str) -> Result<Option<f64>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Some)
        .ok_or_else(|| format!("{}: '{}' is not a number", field.label, raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(garment: GarmentType) -> Vec<&'static str> {
        fields_for(garment).iter().map(|f| f.key).collect()
    }

    #[test]
    fn test_shirt_schema_order() {
        assert_eq!(
            keys(GarmentType::Shirt),
            vec![
                "neck",
                "chest",
                "waist",
                "hips",
                "shoulderWidth",
                "sleeveLength",
                "bicep",
                "wrist",
                "shirtLength",
                "backLength",
                "frontLength",
            ]
        );
    }

    #[test]
    fn test_field_counts() {
        assert_eq!(fields_for(GarmentType::Shirt).len(), 11);
        assert_eq!(fields_for(GarmentType::Pants).len(), 8);
        assert_eq!(fields_for(GarmentType::Suit).len(), 11);
        assert_eq!(fields_for(GarmentType::Dress).len(), 10);
    }

    #[test]
    fn test_blouse_and_custom_fall_back_to_empty_schema() {
        for garment in [GarmentType::Blouse, GarmentType::Custom] {
            assert!(!has_schema(garment));
            assert!(sections_for(garment).is_empty());
            assert!(!is_field_allowed(garment, "chest"));
        }
    }

    #[test]
    fn test_suit_sections_cover_all_fields() {
        let sections = sections_for(GarmentType::Suit);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].fields.len(), 6);
        assert_eq!(sections[1].fields.len(), 5);
        assert_eq!(sections[0].fields[0].key, "jacketChest");
        assert_eq!(sections[1].fields[0].key, "pantsWaist");
    }

    #[test]
    fn test_keys_are_unique_per_type() {
        for garment in GarmentType::ALL {
            let mut k = keys(garment);
            let before = k.len();
            k.sort_unstable();
            k.dedup();
            assert_eq!(k.len(), before, "duplicate key in {}", garment);
        }
    }

    #[test]
    fn test_preview_fields_exist_in_schema() {
        let preview = preview_fields(GarmentType::Suit);
        let labels: Vec<_> = preview.iter().map(|f| f.label).collect();
        assert_eq!(
            labels,
            vec!["Jacket Chest", "Jacket Length", "Pants Waist", "Pants Inseam"]
        );
        assert!(preview_fields(GarmentType::Custom).is_empty());
    }

    #[test]
    fn test_all_units_are_centimeters() {
        for garment in GarmentType::ALL {
            assert!(fields_for(garment).iter().all(|f| f.unit.symbol() == "cm"));
        }
    }

    #[test]
    fn test_parse_field_value() {
        let neck = field(GarmentType::Shirt, "neck").unwrap();
        assert_eq!(parse_field_value(neck, "  "), Ok(None));
        assert_eq!(parse_field_value(neck, "38.5"), Ok(Some(38.5)));
        assert_eq!(parse_field_value(neck, "38,5"), Ok(Some(38.5)));
        assert_eq!(
            parse_field_value(neck, "abc"),
            Err("Neck Circumference: 'abc' is not a number".to_string())
        );
        assert!(parse_field_value(neck, "inf").is_err());
    }
}
