use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::attendee::Attendee;
use crate::models::community::Community;
use crate::store::StampField;
use crate::utils::time::instant_to_millis;
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn millis_to_stamp(col: usize, value: Option<i64>) -> Result<Option<DateTime<Utc>>> {
    match value {
        None => Ok(None),
        Some(ms) => match crate::utils::time::millis_to_instant(ms) {
            Some(t) => Ok(Some(t)),
            None => Err(rusqlite::Error::FromSqlConversionFailure(
                col,
                rusqlite::types::Type::Integer,
                Box::new(AppError::InvalidTimestamp(ms.to_string())),
            )),
        },
    }
}

pub fn map_attendee_row(row: &Row) -> Result<Attendee> {
    let check_in: Option<i64> = row.get("check_in")?;
    let check_out: Option<i64> = row.get("check_out")?;

    Ok(Attendee {
        id: row.get("id")?,
        community_id: row.get("community_id")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        company_name: row.get("company_name")?,
        title: row.get("title")?,
        check_in: millis_to_stamp(6, check_in)?,
        check_out: millis_to_stamp(7, check_out)?,
    })
}

/// Roster for one community, in load order (the order the aggregator and the
/// company grouping see).
pub fn load_attendees_by_community(pool: &DbPool, community_id: &str) -> AppResult<Vec<Attendee>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM attendees
         WHERE community_id = ?1
         ORDER BY rowid ASC",
    )?;

    let rows = stmt.query_map([community_id], map_attendee_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_attendee(pool: &DbPool, attendee_id: &str) -> AppResult<Option<Attendee>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM attendees WHERE id = ?1")?;
    let attendee = stmt
        .query_row([attendee_id], map_attendee_row)
        .optional()?;
    Ok(attendee)
}

pub fn load_communities(pool: &DbPool) -> AppResult<Vec<Community>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT id, name FROM communities ORDER BY rowid ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok(Community {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_community(pool: &DbPool, community_id: &str) -> AppResult<Option<Community>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT id, name FROM communities WHERE id = ?1")?;
    let community = stmt
        .query_row([community_id], |row| {
            Ok(Community {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })
        .optional()?;
    Ok(community)
}

pub fn insert_community(conn: &Connection, community: &Community) -> AppResult<()> {
    conn.execute(
        "INSERT INTO communities (id, name) VALUES (?1, ?2)",
        params![community.id, community.name],
    )?;
    Ok(())
}

pub fn insert_attendee(conn: &Connection, attendee: &Attendee) -> AppResult<()> {
    conn.execute(
        "INSERT INTO attendees
         (id, community_id, first_name, last_name, company_name, title, check_in, check_out)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            attendee.id,
            attendee.community_id,
            attendee.first_name,
            attendee.last_name,
            attendee.company_name,
            attendee.title,
            attendee.check_in.as_ref().map(instant_to_millis),
            attendee.check_out.as_ref().map(instant_to_millis),
        ],
    )?;
    Ok(())
}

/// Write one timestamp field. Atomic per field: either the single column is
/// updated or nothing is.
pub fn update_stamp(
    conn: &Connection,
    attendee_id: &str,
    field: StampField,
    value: Option<DateTime<Utc>>,
) -> AppResult<()> {
    let sql = format!(
        "UPDATE attendees SET {} = ?1 WHERE id = ?2",
        field.column()
    );

    let changed = conn.execute(
        &sql,
        params![value.as_ref().map(instant_to_millis), attendee_id],
    )?;
    if changed == 0 {
        return Err(AppError::AttendeeNotFound(attendee_id.to_string()));
    }
    Ok(())
}

pub fn count_attendees(pool: &DbPool, community_id: &str) -> AppResult<i64> {
    let count = pool.conn.query_row(
        "SELECT COUNT(*) FROM attendees WHERE community_id = ?1",
        [community_id],
        |row| row.get(0),
    )?;
    Ok(count)
}

/// Remove every community and attendee (used by `load --replace`).
pub fn clear_all(conn: &Connection) -> AppResult<()> {
    conn.execute("DELETE FROM attendees", [])?;
    conn.execute("DELETE FROM communities", [])?;
    Ok(())
}
