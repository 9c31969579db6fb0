//! Check-in service
//!
//! Drives the check-in flows headlessly: load a workbook snapshot, run the
//! pure engine, save the whole workbook back. The service performs no
//! locking around that read-modify-write cycle; two sessions registering
//! against the same workbook race last-write-wins. Callers that cannot
//! accept that MUST serialize register calls per business day (see
//! [`DataStore`]).

use std::sync::Arc;

use chrono::NaiveTime;
use serde::Serialize;
use shared::{AppError, AppResult, ManagementRecord, OrderStatus, Reservation};

use crate::clock::Clock;
use crate::engine;
use crate::store::DataStore;

/// One row of the day board: a reservation joined with its lifecycle state
/// and whatever metrics are already stored
#[derive(Debug, Clone, Serialize)]
pub struct DayBoardEntry {
    pub reservation: Reservation,
    pub status: OrderStatus,
    pub record: Option<ManagementRecord>,
}

/// Headless check-in service over a store and a clock
pub struct GateService {
    store: Arc<dyn DataStore>,
    clock: Arc<dyn Clock>,
    /// Minute granularity for suggested times
    time_step_minutes: u32,
}

impl GateService {
    pub fn new(store: Arc<dyn DataStore>, clock: Arc<dyn Clock>, time_step_minutes: u32) -> Self {
        Self {
            store,
            clock,
            time_step_minutes,
        }
    }

    /// Today's reservations with their current classification.
    ///
    /// An empty board means no deliveries are booked today; that is a normal
    /// outcome, not an error.
    pub async fn day_board(&self) -> AppResult<Vec<DayBoardEntry>> {
        let workbook = self.store.load().await?;
        let today = self.clock.today();

        let entries: Vec<DayBoardEntry> =
            engine::todays_reservations(&workbook.reservations, today)
                .into_iter()
                .map(|reservation| {
                    let status =
                        engine::classify(&reservation.order_id, &workbook.management, today);
                    let record = engine::arrival_record(&workbook.management, &reservation.order_id)
                        .cloned();
                    DayBoardEntry {
                        reservation,
                        status,
                        record,
                    }
                })
                .collect();

        if entries.is_empty() {
            tracing::info!(date = %today, "No reservations booked today");
        }
        Ok(entries)
    }

    /// Register a truck arrival.
    ///
    /// Without an explicit time the suggested default applies: the booked
    /// start when the slot parses, otherwise the current time, floored to
    /// the configured step. Re-registration overwrites the stored arrival
    /// in place.
    pub async fn register_arrival(
        &self,
        order_id: &str,
        time: Option<NaiveTime>,
    ) -> AppResult<ManagementRecord> {
        let mut workbook = self.store.load().await?;
        let today = self.clock.today();

        let time = match time {
            Some(t) => t,
            None => {
                let reservation = engine::todays_reservations(&workbook.reservations, today)
                    .into_iter()
                    .find(|r| r.order_id == order_id)
                    .ok_or_else(|| {
                        AppError::validation(format!(
                            "No reservation for order {} on {}",
                            order_id, today
                        ))
                    })?;
                engine::suggested_arrival(&reservation, self.clock.now(), self.time_step_minutes)
            }
        };

        let record = engine::register_arrival(
            &workbook.reservations,
            &mut workbook.management,
            order_id,
            today.and_time(time),
        )?;
        self.store.save(&workbook).await?;

        match record.delay_minutes {
            Some(d) if d > 0 => {
                tracing::warn!(order_id, delay_minutes = d, "Arrival registered late")
            }
            Some(d) if d < 0 => {
                tracing::info!(order_id, early_minutes = -d, "Arrival registered early")
            }
            Some(_) => tracing::info!(order_id, "Arrival registered on time"),
            None => tracing::info!(order_id, "Arrival registered, booked slot not parseable"),
        }
        Ok(record)
    }

    /// Register the service window for an arrived order.
    ///
    /// Rejected once the order is already completed for today. The engine
    /// itself would overwrite; the guard lives here with the rest of the
    /// flow logic, driven by [`engine::classify`].
    pub async fn register_service(
        &self,
        order_id: &str,
        start: NaiveTime,
        end: NaiveTime,
    ) -> AppResult<ManagementRecord> {
        let mut workbook = self.store.load().await?;
        let today = self.clock.today();

        if engine::classify(order_id, &workbook.management, today) == OrderStatus::Completed {
            return Err(AppError::validation(format!(
                "Service already registered for order {}",
                order_id
            )));
        }

        let record = engine::register_service(
            &mut workbook.management,
            order_id,
            today.and_time(start),
            today.and_time(end),
        )?;
        self.store.save(&workbook).await?;

        tracing::info!(
            order_id,
            wait_minutes = record.wait_minutes,
            service_minutes = record.service_minutes,
            total_minutes = record.total_minutes,
            "Service registered"
        );
        Ok(record)
    }
}
