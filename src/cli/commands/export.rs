use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::sqlite_store::SqliteStore;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        staff,
        range,
        force,
    } = cmd
    {
        let store = SqliteStore::open(&cfg.database)?;
        let n = ExportLogic::export(
            &store,
            *format,
            file,
            staff.as_deref(),
            range.as_deref(),
            *force,
        )?;

        if let Err(e) = ttlog(
            &store.pool().conn,
            "export",
            format.as_str(),
            &format!("{} events exported to {}", n, file),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }
    Ok(())
}
