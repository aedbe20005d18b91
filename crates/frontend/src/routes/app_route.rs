//! Маршруты приложения
//!
//! Путь разбирается в [`AppRoute`] при старте и на `popstate`;
//! переходы внутри приложения идут через `AppGlobalContext::navigate`.

use contracts::domain::a001_customer::aggregate::CustomerId;
use contracts::domain::a002_measurement::aggregate::MeasurementId;
use contracts::domain::common::AggregateId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Dashboard,
    Customers,
    NewCustomer,
    CustomerDetails(CustomerId),
    Measurements,
    /// `/measurements/new?customer=<id>` открывает мастер с выбранным клиентом
    NewMeasurement { customer: Option<CustomerId> },
    MeasurementDetails(MeasurementId),
    EditMeasurement(MeasurementId),
    NotFound(String),
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct RouteQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    customer: Option<String>,
}

impl AppRoute {
    pub fn parse(path: &str, query: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => AppRoute::Dashboard,
            ["customers"] => AppRoute::Customers,
            ["customers", "new"] => AppRoute::NewCustomer,
            ["customers", id] => CustomerId::from_string(id)
                .map(AppRoute::CustomerDetails)
                .unwrap_or_else(|_| AppRoute::NotFound(path.to_string())),
            ["measurements"] => AppRoute::Measurements,
            ["measurements", "new"] => {
                let params: RouteQuery =
                    serde_qs::from_str(query.trim_start_matches('?')).unwrap_or_default();
                AppRoute::NewMeasurement {
                    customer: params
                        .customer
                        .and_then(|id| CustomerId::from_string(&id).ok()),
                }
            }
            ["measurements", id] => MeasurementId::from_string(id)
                .map(AppRoute::MeasurementDetails)
                .unwrap_or_else(|_| AppRoute::NotFound(path.to_string())),
            ["measurements", id, "edit"] => MeasurementId::from_string(id)
                .map(AppRoute::EditMeasurement)
                .unwrap_or_else(|_| AppRoute::NotFound(path.to_string())),
            _ => AppRoute::NotFound(path.to_string()),
        }
    }

    /// Путь вместе со строкой запроса
    pub fn to_path(&self) -> String {
        match self {
            AppRoute::Dashboard => "/".to_string(),
            AppRoute::Customers => "/customers".to_string(),
            AppRoute::NewCustomer => "/customers/new".to_string(),
            AppRoute::CustomerDetails(id) => format!("/customers/{}", id.as_string()),
            AppRoute::Measurements => "/measurements".to_string(),
            AppRoute::NewMeasurement { customer } => {
                let query = RouteQuery {
                    customer: customer.map(|id| id.as_string()),
                };
                match serde_qs::to_string(&query) {
                    Ok(qs) if !qs.is_empty() => format!("/measurements/new?{}", qs),
                    _ => "/measurements/new".to_string(),
                }
            }
            AppRoute::MeasurementDetails(id) => format!("/measurements/{}", id.as_string()),
            AppRoute::EditMeasurement(id) => format!("/measurements/{}/edit", id.as_string()),
            AppRoute::NotFound(path) => path.clone(),
        }
    }

    /// Ключ пункта меню, подсвечиваемого для маршрута
    pub fn nav_key(&self) -> &'static str {
        match self {
            AppRoute::Dashboard | AppRoute::NotFound(_) => "dashboard",
            AppRoute::Customers | AppRoute::NewCustomer | AppRoute::CustomerDetails(_) => {
                "customers"
            }
            AppRoute::NewMeasurement { .. } => "new_measurement",
            AppRoute::Measurements
            | AppRoute::MeasurementDetails(_)
            | AppRoute::EditMeasurement(_) => "measurements",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppRoute::Dashboard => "Dashboard",
            AppRoute::Customers => "Customers",
            AppRoute::NewCustomer => "New Customer",
            AppRoute::CustomerDetails(_) => "Customer",
            AppRoute::Measurements => "Measurements",
            AppRoute::NewMeasurement { .. } => "New Measurement",
            AppRoute::MeasurementDetails(_) => "Measurement",
            AppRoute::EditMeasurement(_) => "Edit Measurement",
            AppRoute::NotFound(_) => "Not Found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_parse_static_routes() {
        assert_eq!(AppRoute::parse("/", ""), AppRoute::Dashboard);
        assert_eq!(AppRoute::parse("", ""), AppRoute::Dashboard);
        assert_eq!(AppRoute::parse("/customers", ""), AppRoute::Customers);
        assert_eq!(AppRoute::parse("/customers/", ""), AppRoute::Customers);
        assert_eq!(AppRoute::parse("/customers/new", ""), AppRoute::NewCustomer);
        assert_eq!(AppRoute::parse("/measurements", ""), AppRoute::Measurements);
        assert_eq!(
            AppRoute::parse("/measurements/new", ""),
            AppRoute::NewMeasurement { customer: None }
        );
    }

    #[test]
    fn test_parse_id_routes() {
        let uuid = Uuid::new_v4();
        let cid = CustomerId::new(uuid);
        let mid = MeasurementId::new(uuid);
        assert_eq!(
            AppRoute::parse(&format!("/customers/{}", uuid), ""),
            AppRoute::CustomerDetails(cid)
        );
        assert_eq!(
            AppRoute::parse(&format!("/measurements/{}", uuid), ""),
            AppRoute::MeasurementDetails(mid)
        );
        assert_eq!(
            AppRoute::parse(&format!("/measurements/{}/edit", uuid), ""),
            AppRoute::EditMeasurement(mid)
        );
    }

    #[test]
    fn test_parse_preselected_customer() {
        let cid = CustomerId::new_v4();
        let route = AppRoute::parse("/measurements/new", &format!("?customer={}", cid.as_string()));
        assert_eq!(route, AppRoute::NewMeasurement { customer: Some(cid) });
        assert_eq!(
            route.to_path(),
            format!("/measurements/new?customer={}", cid.as_string())
        );
    }

    #[test]
    fn test_bad_ids_are_not_found() {
        assert_eq!(
            AppRoute::parse("/customers/42", ""),
            AppRoute::NotFound("/customers/42".to_string())
        );
        assert_eq!(
            AppRoute::parse("/measurements/new", "?customer=nope"),
            AppRoute::NewMeasurement { customer: None }
        );
        assert!(matches!(AppRoute::parse("/settings", ""), AppRoute::NotFound(_)));
    }

    #[test]
    fn test_paths_parse_back() {
        let id = MeasurementId::new_v4();
        for route in [
            AppRoute::Dashboard,
            AppRoute::Customers,
            AppRoute::NewCustomer,
            AppRoute::Measurements,
            AppRoute::NewMeasurement { customer: None },
            AppRoute::MeasurementDetails(id),
            AppRoute::EditMeasurement(id),
        ] {
            let path = route.to_path();
            let (p, q) = path.split_once('?').unwrap_or((path.as_str(), ""));
            assert_eq!(AppRoute::parse(p, q), route);
        }
    }

    #[test]
    fn test_nav_keys() {
        assert_eq!(AppRoute::NewCustomer.nav_key(), "customers");
        assert_eq!(
            AppRoute::EditMeasurement(MeasurementId::new_v4()).nav_key(),
            "measurements"
        );
        assert_eq!(
            AppRoute::NewMeasurement { customer: None }.nav_key(),
            "new_measurement"
        );
    }
}
