//! Workbook snapshot

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ManagementRecord, Reservation};

/// The three workbook collections as one consistent snapshot.
///
/// This is the unit a store loads and saves: a save replaces the whole
/// workbook, partial writes do not exist at this boundary. Credential rows
/// are carried verbatim as raw JSON; this system rewrites them on save but
/// never interprets them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Workbook {
    #[serde(rename = "proveedor_credencial", default)]
    pub credentials: Vec<Value>,
    #[serde(rename = "proveedor_reservas", default)]
    pub reservations: Vec<Reservation>,
    /// Defaults to empty when the collection does not exist yet; the first
    /// save creates it
    #[serde(rename = "proveedor_gestion", default)]
    pub management: Vec<ManagementRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_workbook_column_names() {
        let workbook = Workbook {
            credentials: vec![json!({"Usuario": "vega", "Clave": "1234"})],
            reservations: vec![Reservation {
                order_id: "PO100".to_string(),
                supplier_name: "Transportes Vega".to_string(),
                package_count: 12,
                reservation_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                booked_time_range: "09:00-09:30".to_string(),
            }],
            management: vec![],
        };

        let value = serde_json::to_value(&workbook).unwrap();
        let row = &value["proveedor_reservas"][0];
        assert_eq!(row["Orden_de_compra"], "PO100");
        assert_eq!(row["Proveedor"], "Transportes Vega");
        assert_eq!(row["Numero_de_bultos"], 12);
        assert_eq!(row["Fecha"], "2024-01-01");
        assert_eq!(row["Hora"], "09:00-09:30");
    }

    #[test]
    fn test_management_record_timestamp_format() {
        let record = ManagementRecord {
            order_id: "PO100".to_string(),
            supplier_name: "Transportes Vega".to_string(),
            package_count: 12,
            arrival_time: Some(
                NaiveDate::from_ymd_opt(2024, 1, 1)
                    .unwrap()
                    .and_hms_opt(9, 15, 0)
                    .unwrap(),
            ),
            service_start_time: None,
            service_end_time: None,
            wait_minutes: None,
            service_minutes: None,
            total_minutes: None,
            delay_minutes: Some(15),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["Hora_llegada"], "2024-01-01 09:15:00");
        assert_eq!(value["Hora_inicio_atencion"], serde_json::Value::Null);
        assert_eq!(value["Tiempo_retraso"], 15);

        let back: ManagementRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_missing_management_collection_defaults_to_empty() {
        let raw = json!({
            "proveedor_credencial": [],
            "proveedor_reservas": [],
        });
        let workbook: Workbook = serde_json::from_value(raw).unwrap();
        assert!(workbook.management.is_empty());
    }

    #[test]
    fn test_credential_rows_survive_round_trip() {
        let raw = json!({
            "proveedor_credencial": [
                {"Usuario": "vega", "Clave": "1234", "Extra_columna": "se conserva"}
            ],
            "proveedor_reservas": [],
            "proveedor_gestion": [],
        });
        let workbook: Workbook = serde_json::from_value(raw.clone()).unwrap();
        let back = serde_json::to_value(&workbook).unwrap();
        assert_eq!(back["proveedor_credencial"], raw["proveedor_credencial"]);
    }
}
