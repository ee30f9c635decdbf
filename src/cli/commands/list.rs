use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::EventStore;
use crate::db::sqlite_store::SqliteStore;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::formatting::format_distance;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { staff, period } = cmd {
        let store = SqliteStore::open(&cfg.database)?;
        let events = ExportLogic::filter_range(store.events(staff.as_deref())?, period.as_deref())?;

        if events.is_empty() {
            println!("⚠️  No events found.");
            return Ok(());
        }

        let staff_w = events
            .iter()
            .map(|e| e.actor_id.len())
            .max()
            .unwrap_or(5)
            .max(5);

        println!(
            "{:>4}  {:<10}  {:<5}  {:<staff_w$}  {:<9}  {:>9}",
            "SEQ", "DATE", "TIME", "STAFF", "KIND", "DISTANCE"
        );

        for e in &events {
            println!(
                "{:>4}  {:<10}  {:<5}  {:<staff_w$}  {:<9}  {:>9}",
                e.seq,
                e.date_str(),
                e.time_str(),
                e.actor_id,
                e.kind.label(),
                format_distance(e.distance_from_site),
            );
        }
    }
    Ok(())
}
