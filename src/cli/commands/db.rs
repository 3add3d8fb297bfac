use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::db_utils::{integrity_check, vacuum};
use crate::db::log::oplog;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats::print_db_info;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum: do_vacuum,
        info: show_info,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *migrate {
            run_pending_migrations(&pool.conn)?;
            success("Database migrations are up to date.");
        }

        if *check {
            let result = integrity_check(&mut pool)?;
            if result == "ok" {
                success("Database integrity: ok");
            } else {
                warning(format!("Database integrity: {}", result));
            }
        }

        if *do_vacuum {
            vacuum(&mut pool)?;
            oplog(&pool.conn, "db_vacuum", "", "Database vacuumed")?;
            success("Database vacuumed.");
        }

        if *show_info {
            print_db_info(&mut pool, &cfg.database)?;
        }

        if !(*migrate || *check || *do_vacuum || *show_info) {
            info("Nothing to do. Use --migrate, --check, --vacuum or --info.");
        }
    }
    Ok(())
}
