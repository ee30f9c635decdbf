use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::location::FixedLocation;
use crate::core::service::ClockService;
use crate::db::sqlite_store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info, warning};
use crate::utils::date::{parse_date, today};
use crate::utils::time::format_hours;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Week { staff, date } = cmd {
        let staff_id = staff.clone().unwrap_or_else(|| cfg.staff_id.clone());
        let day = match date {
            Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => today(),
        };

        let service = ClockService::new(
            SqliteStore::open(&cfg.database)?,
            FixedLocation::unavailable(),
            cfg.site()?,
            cfg.policy(),
        );
        let summary = service.weekly(&staff_id, day)?;

        header(format!(
            "Week {} → {} ({})",
            summary.week_start.format("%Y-%m-%d"),
            summary.week_end.format("%Y-%m-%d"),
            staff_id
        ));

        println!(
            "Hours worked: {:.1} ({})",
            summary.hours,
            format_hours(summary.hours)
        );
        println!("Sessions:     {}", summary.sessions);

        if summary.orphaned_clock_ins > 0 {
            warning(format!(
                "{} clock-in(s) had no matching clock-out and were discarded",
                summary.orphaned_clock_ins
            ));
        }
        if summary.open_session {
            info("A session is still open and is not counted yet.");
        }
    }
    Ok(())
}
