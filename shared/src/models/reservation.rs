//! Reservation model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time;

/// A pre-booked delivery slot, one row per order per day.
///
/// Rows are immutable once loaded; the reservation sheet is maintained
/// outside this system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    /// Purchase order id, unique within a day
    #[serde(rename = "Orden_de_compra")]
    pub order_id: String,
    /// Supplier display name
    #[serde(rename = "Proveedor")]
    pub supplier_name: String,
    /// Packages announced for the delivery
    #[serde(rename = "Numero_de_bultos")]
    pub package_count: u32,
    /// Delivery date
    #[serde(rename = "Fecha", with = "time::date")]
    pub reservation_date: NaiveDate,
    /// Booked time slot, free text like "09:00-09:30"
    #[serde(rename = "Hora")]
    pub booked_time_range: String,
}
