//! Order status & duration engine
//!
//! Pure, synchronous computation over in-memory workbook collections: which
//! orders have arrived, which are waiting for service, which are done, and
//! the minute arithmetic around their timestamps. Persistence belongs to the
//! caller; nothing here touches a store or a clock.
//!
//! Lifecycle per order per day, driven by field presence only:
//!
//! ```text
//! NOT_ARRIVED ──register_arrival──▶ ARRIVED_PENDING_SERVICE ──register_service──▶ COMPLETED
//! ```

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use shared::{AppError, AppResult, ManagementRecord, OrderStatus, Reservation};


/// Reservations booked for exactly `today`.
///
/// An empty result means no deliveries are booked; that is a normal outcome
/// for the caller, not an error.
pub fn todays_reservations(reservations: &[Reservation], today: NaiveDate) -> Vec<Reservation> {
    reservations
        .iter()
        .filter(|r| r.reservation_date == today)
        .cloned()
        .collect()
}

/// First `HH:MM` of a booked range like `"09:00-09:30"` or `"09:00 - 09:30"`.
///
/// Returns `None` when the text has no dash or the first half does not parse.
/// The second half is not validated; slots are free text maintained by hand
/// in the reservation sheet.
pub fn parse_booked_start(range: &str) -> Option<NaiveTime> {
    let (start, _) = range.split_once('-')?;
    NaiveTime::parse_from_str(start.trim(), "%H:%M").ok()
}

/// Whole minutes from `from` to `to`, truncated toward zero.
pub fn minutes_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    (to - from).num_minutes()
}

/// The management record for an order, if one exists.
///
/// Lookup is by order id alone: a row carried over from a previous day is
/// still found (and overwritten by re-registration), while [`classify`]
/// scopes it out of today's lifecycle.
pub fn arrival_record<'a>(
    records: &'a [ManagementRecord],
    order_id: &str,
) -> Option<&'a ManagementRecord> {
    records.iter().find(|r| r.order_id == order_id)
}

/// Day-scoped lifecycle state of an order.
///
/// A record only counts once its arrival timestamp falls on `today`;
/// yesterday's row for the same purchase order leaves the order
/// `NOT_ARRIVED` again.
pub fn classify(order_id: &str, records: &[ManagementRecord], today: NaiveDate) -> OrderStatus {
    let Some(record) = arrival_record(records, order_id) else {
        return OrderStatus::NotArrived;
    };

    match record.arrival_time {
        Some(arrival) if arrival.date() == today => {
            if record.service_start_time.is_some() && record.service_end_time.is_some() {
                OrderStatus::Completed
            } else {
                OrderStatus::ArrivedPendingService
            }
        }
        _ => OrderStatus::NotArrived,
    }
}

/// Register a truck arrival against a booked reservation.
///
/// The order must be booked for the arrival's date. An existing record gets
/// its arrival timestamp overwritten in place, no second row; the stored
/// delay keeps the value computed at first registration. A new record is
/// pre-populated from the reservation, with the delay against the booked
/// start when the slot parses.
pub fn register_arrival(
    reservations: &[Reservation],
    records: &mut Vec<ManagementRecord>,
    order_id: &str,
    arrival: NaiveDateTime,
) -> AppResult<ManagementRecord> {
    let today = arrival.date();
    let reservation = todays_reservations(reservations, today)
        .into_iter()
        .find(|r| r.order_id == order_id)
        .ok_or_else(|| {
            AppError::validation(format!("No reservation for order {} on {}", order_id, today))
        })?;

    if let Some(existing) = records.iter_mut().find(|r| r.order_id == order_id) {
        existing.arrival_time = Some(arrival);
        return Ok(existing.clone());
    }

    let delay_minutes = parse_booked_start(&reservation.booked_time_range)
        .map(|start| minutes_between(today.and_time(start), arrival));

    let record = ManagementRecord {
        order_id: reservation.order_id.clone(),
        supplier_name: reservation.supplier_name.clone(),
        package_count: reservation.package_count,
        arrival_time: Some(arrival),
        service_start_time: None,
        service_end_time: None,
        wait_minutes: None,
        service_minutes: None,
        total_minutes: None,
        delay_minutes,
    };
    records.push(record.clone());
    Ok(record)
}

/// Register the service window for an already-arrived order.
///
/// Validates `end > start` and `start >= arrival`, then stores the service
/// timestamps plus the three derived durations; the stored delay is left
/// untouched. There is no completed-state check at this level: callers gate
/// re-registration through [`classify`].
pub fn register_service(
    records: &mut [ManagementRecord],
    order_id: &str,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> AppResult<ManagementRecord> {
    let record = records
        .iter_mut()
        .find(|r| r.order_id == order_id)
        .ok_or_else(|| AppError::not_found(format!("Arrival record for order {}", order_id)))?;

    let arrival = record
        .arrival_time
        .ok_or_else(|| AppError::not_found(format!("Arrival time for order {}", order_id)))?;

    if end <= start {
        return Err(AppError::validation(
            "Service end must be after service start",
        ));
    }
    if start < arrival {
        return Err(AppError::validation(
            "Service start must not precede arrival",
        ));
    }

    record.service_start_time = Some(start);
    record.service_end_time = Some(end);
    record.wait_minutes = Some(minutes_between(arrival, start));
    record.service_minutes = Some(minutes_between(start, end));
    record.total_minutes = Some(minutes_between(arrival, end));
    Ok(record.clone())
}

/// Suggested arrival time for a reservation: the booked start when the slot
/// parses, otherwise `now`, floored to the picker step.
pub fn suggested_arrival(
    reservation: &Reservation,
    now: NaiveDateTime,
    step_minutes: u32,
) -> NaiveTime {
    let base = parse_booked_start(&reservation.booked_time_range).unwrap_or_else(|| now.time());
    floor_to_step(base, step_minutes)
}

/// Floor a wall-clock time to a minute step, dropping seconds.
fn floor_to_step(time: NaiveTime, step_minutes: u32) -> NaiveTime {
    if step_minutes == 0 {
        return time;
    }
    let minute = time.minute() - time.minute() % step_minutes;
    NaiveTime::from_hms_opt(time.hour(), minute, 0).unwrap_or(time)
}
