use std::sync::Arc;

use muelle_gate::{Config, GateService, JsonFileStore, SystemClock, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (dotenv, logging)
    setup_environment()?;

    tracing::info!("Muelle gate starting");

    // 2. Configuration
    let config = Config::from_env();
    tracing::info!(
        environment = %config.environment,
        timezone = %config.timezone,
        data_path = %config.data_path,
        "Configuration loaded"
    );

    // 3. Collaborators and service
    let store = Arc::new(JsonFileStore::new(&config.data_path));
    let clock = Arc::new(SystemClock::new(config.timezone));
    let service = GateService::new(store, clock, config.time_step_minutes);

    // 4. Dispatch the requested operation
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None | Some("board") => print_board(&service).await?,
        Some("arrive") => {
            let order_id = args
                .get(1)
                .ok_or("usage: muelle-gate arrive <order-id> [HH:MM]")?;
            let time = match args.get(2) {
                Some(raw) => Some(shared::time::parse_hhmm(raw)?),
                None => None,
            };

            let record = service.register_arrival(order_id, time).await?;
            println!("Llegada registrada para {}", record.order_id);
            match record.delay_minutes {
                Some(d) if d > 0 => println!("Retraso: {} minutos", d),
                Some(d) if d < 0 => println!("Adelanto: {} minutos", -d),
                Some(_) => println!("Llegada puntual"),
                None => {}
            }
        }
        Some("service") => {
            let usage = "usage: muelle-gate service <order-id> <HH:MM> <HH:MM>";
            let order_id = args.get(1).ok_or(usage)?;
            let start = shared::time::parse_hhmm(args.get(2).ok_or(usage)?)?;
            let end = shared::time::parse_hhmm(args.get(3).ok_or(usage)?)?;

            let record = service.register_service(order_id, start, end).await?;
            println!(
                "Atencion registrada para {}: espera {} min, atencion {} min, total {} min",
                record.order_id,
                record.wait_minutes.unwrap_or_default(),
                record.service_minutes.unwrap_or_default(),
                record.total_minutes.unwrap_or_default(),
            );
        }
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Commands: board | arrive <order-id> [HH:MM] | service <order-id> <HH:MM> <HH:MM>");
            std::process::exit(2);
        }
    }

    Ok(())
}

/// Print today's reservations with their lifecycle state
async fn print_board(service: &GateService) -> Result<(), Box<dyn std::error::Error>> {
    let board = service.day_board().await?;

    if board.is_empty() {
        println!("No hay reservas programadas para hoy.");
        return Ok(());
    }

    for entry in board {
        println!(
            "{:<12} {:<24} {:>3} bultos  {:<13} {}",
            entry.reservation.order_id,
            entry.reservation.supplier_name,
            entry.reservation.package_count,
            entry.reservation.booked_time_range,
            entry.status.label(),
        );
    }
    Ok(())
}
