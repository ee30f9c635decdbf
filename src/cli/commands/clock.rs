use crate::cli::parser::{ClockArgs, Commands};
use crate::config::Config;
use crate::core::location::FixedLocation;
use crate::core::observer::StatusObserver;
use crate::core::service::ClockService;
use crate::db::log::ttlog;
use crate::db::sqlite_store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::models::decision::Decision;
use crate::models::event::AttendanceEvent;
use crate::models::event_type::EventType;
use crate::ui::messages::{info, success, warning};
use crate::utils::formatting::{colored_status, format_distance};
use crate::utils::time::now_or;
use rusqlite::Connection;

/// Prints the new status after each accepted clock action.
struct ConsoleObserver;

impl StatusObserver for ConsoleObserver {
    fn on_status_change(&self, event: &AttendanceEvent, decision: &Decision) {
        success(format!(
            "{} recorded for {} at {} ({} from site)",
            event.kind.label(),
            event.actor_id,
            event.get_date_time(),
            format_distance(event.distance_from_site)
        ));
        println!("Status: {}", colored_status(decision.status));
    }
}

/// Appends accepted clock actions to the internal log table.
struct AuditObserver {
    conn: Connection,
}

impl StatusObserver for AuditObserver {
    fn on_status_change(&self, event: &AttendanceEvent, _decision: &Decision) {
        let op = match event.kind {
            EventType::ClockIn => "clock_in",
            EventType::ClockOut => "clock_out",
        };
        let msg = format!(
            "seq {} at {} ({:.1} m from site)",
            event.seq,
            event.occurred_at.to_rfc3339(),
            event.distance_from_site
        );
        if let Err(e) = ttlog(&self.conn, op, &event.actor_id, &msg) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }
}

fn build_service(cfg: &Config, args: &ClockArgs) -> AppResult<ClockService<SqliteStore, FixedLocation>> {
    let store = SqliteStore::open(&cfg.database)?;
    let location = FixedLocation::from_parts(args.lat, args.lng)?;
    Ok(ClockService::new(store, location, cfg.site()?, cfg.policy()))
}

fn print_decision(decision: &Decision) {
    println!("Status:         {}", colored_status(decision.status));
    println!("Allowed action: {}", decision.allowed_label());
    println!("Reason:         {}", decision.reason);
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Status(args) => status(cfg, args),
        Commands::In(args) => clock(cfg, args, EventType::ClockIn),
        Commands::Out(args) => clock(cfg, args, EventType::ClockOut),
        _ => Ok(()),
    }
}

fn status(cfg: &Config, args: &ClockArgs) -> AppResult<()> {
    let staff_id = args.staff.clone().unwrap_or_else(|| cfg.staff_id.clone());
    let now = now_or(args.at.as_ref())?;
    let service = build_service(cfg, args)?;

    info(format!("{} @ {}", staff_id, service.site().name));
    print_decision(&service.status(&staff_id, now)?);
    Ok(())
}

fn clock(cfg: &Config, args: &ClockArgs, action: EventType) -> AppResult<()> {
    let staff_id = args.staff.clone().unwrap_or_else(|| cfg.staff_id.clone());
    let now = now_or(args.at.as_ref())?;
    let mut service = build_service(cfg, args)?;

    service.subscribe(Box::new(ConsoleObserver));
    service.subscribe(Box::new(AuditObserver {
        conn: Connection::open(&cfg.database)?,
    }));

    match service.clock(&staff_id, action, now) {
        Ok(_) => Ok(()),
        Err(e) => {
            if matches!(
                e,
                AppError::IllegalTransition { .. } | AppError::Conflict { .. } | AppError::OutOfOrder { .. }
            ) {
                if let Err(log_err) = ttlog(
                    &service.store().pool().conn,
                    "rejected",
                    &staff_id,
                    &format!("{} refused: {}", action.label(), e),
                ) {
                    warning(format!("Failed to write internal log: {}", log_err));
                }
            }
            Err(e)
        }
    }
}
