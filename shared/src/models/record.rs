//! Management record model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::time;

/// Day-scoped lifecycle state of an order, derived from field presence.
///
/// Strictly forward: `NOT_ARRIVED` → `ARRIVED_PENDING_SERVICE` →
/// `COMPLETED`. There is no stored status flag; classification reads the
/// timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "NOT_ARRIVED")]
    NotArrived,
    #[serde(rename = "ARRIVED_PENDING_SERVICE")]
    ArrivedPendingService,
    #[serde(rename = "COMPLETED")]
    Completed,
}

impl OrderStatus {
    /// Operator-facing label, as shown on the day board
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotArrived => "Pendiente de llegada",
            Self::ArrivedPendingService => "Pendiente de atencion",
            Self::Completed => "Atencion registrada",
        }
    }
}

/// Management record - one row per order per day in the management sheet.
///
/// Created when the arrival is registered, mutated in place when the service
/// window is registered. Durations are computed once, at registration time,
/// and stored; reads never recompute them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagementRecord {
    /// Purchase order id, matches the reservation row
    #[serde(rename = "Orden_de_compra")]
    pub order_id: String,
    #[serde(rename = "Proveedor")]
    pub supplier_name: String,
    #[serde(rename = "Numero_de_bultos")]
    pub package_count: u32,
    /// Truck arrival timestamp
    #[serde(rename = "Hora_llegada", with = "time::option_timestamp", default)]
    pub arrival_time: Option<NaiveDateTime>,
    /// Service window start
    #[serde(rename = "Hora_inicio_atencion", with = "time::option_timestamp", default)]
    pub service_start_time: Option<NaiveDateTime>,
    /// Service window end
    #[serde(rename = "Hora_fin_atencion", with = "time::option_timestamp", default)]
    pub service_end_time: Option<NaiveDateTime>,
    /// Whole minutes between arrival and service start
    #[serde(rename = "Tiempo_espera")]
    pub wait_minutes: Option<i64>,
    /// Whole minutes between service start and end
    #[serde(rename = "Tiempo_atencion")]
    pub service_minutes: Option<i64>,
    /// Whole minutes between arrival and service end
    #[serde(rename = "Tiempo_total")]
    pub total_minutes: Option<i64>,
    /// Signed minutes between the booked start and the arrival
    /// (negative = early); absent when the booked slot did not parse
    #[serde(rename = "Tiempo_retraso")]
    pub delay_minutes: Option<i64>,
}
