use crate::db::log::oplog;
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `attendees` table has a `title` column (added in 0.2).
fn attendees_has_title_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('attendees')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "title" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `communities` table.
fn create_communities_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS communities (
            id   TEXT PRIMARY KEY,
            name TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `attendees` table with the modern schema (including `title`).
/// The CHECK guarantees a check-out is never stored without a check-in.
fn create_attendees_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS attendees (
            id           TEXT PRIMARY KEY,
            community_id TEXT NOT NULL REFERENCES communities(id),
            first_name   TEXT NOT NULL,
            last_name    TEXT NOT NULL,
            company_name TEXT,
            title        TEXT,
            check_in     INTEGER,
            check_out    INTEGER,
            CHECK (check_out IS NULL OR check_in IS NOT NULL)
        );

        CREATE INDEX IF NOT EXISTS idx_attendees_community ON attendees(community_id);
        CREATE INDEX IF NOT EXISTS idx_attendees_checkin ON attendees(community_id, check_in);
        "#,
    )?;
    Ok(())
}

/// Migrate an old `attendees` table to include the `title` column.
fn migrate_add_title_to_attendees(conn: &Connection) -> AppResult<()> {
    if !table_exists(conn, "attendees")? {
        return Ok(());
    }

    if attendees_has_title_column(conn)? {
        return Ok(());
    }

    conn.execute("ALTER TABLE attendees ADD COLUMN title TEXT", [])
        .map_err(|e| AppError::Migration(format!("adding attendees.title: {e}")))?;

    oplog(
        conn,
        "migration_applied",
        "attendees",
        "Added title column to attendees",
    )?;
    Ok(())
}

/// Run every pending migration, oldest first. Safe to call repeatedly.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    if !table_exists(conn, "communities")? {
        create_communities_table(conn)?;
        oplog(
            conn,
            "migration_applied",
            "communities",
            "Created communities table",
        )?;
    }

    if !table_exists(conn, "attendees")? {
        create_attendees_table(conn)?;
        oplog(
            conn,
            "migration_applied",
            "attendees",
            "Created attendees table",
        )?;
    }

    migrate_add_title_to_attendees(conn)?;

    Ok(())
}
