use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        event,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        ExportLogic::export(&mut pool, format.clone(), file, event.as_deref(), *force)?;

        oplog(
            &pool.conn,
            "export",
            file,
            &format!("Roster exported as {}", format.as_str()),
        )?;
    }
    Ok(())
}
