use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Run `PRAGMA integrity_check` and return the result string ("ok" when the
/// file is healthy).
pub fn integrity_check(pool: &mut DbPool) -> AppResult<String> {
    let result: String = pool
        .conn
        .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
    Ok(result)
}

/// Reclaim free pages with VACUUM.
pub fn vacuum(pool: &mut DbPool) -> AppResult<()> {
    pool.conn.execute_batch("VACUUM")?;
    Ok(())
}
