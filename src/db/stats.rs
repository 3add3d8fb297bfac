use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) EVENTS / ATTENDEES
    //
    let communities: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM communities", [], |row| row.get(0))?;
    println!(
        "{}• Events:{} {}{}{}",
        CYAN, RESET, GREEN, communities, RESET
    );

    let attendees: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM attendees", [], |row| row.get(0))?;
    println!(
        "{}• Attendees:{} {}{}{}",
        CYAN, RESET, GREEN, attendees, RESET
    );

    let in_event: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM attendees WHERE check_in IS NOT NULL AND check_out IS NULL",
        [],
        |row| row.get(0),
    )?;
    println!(
        "{}• Currently in event:{} {}{}{}",
        CYAN, RESET, GREEN, in_event, RESET
    );

    //
    // 3) LAST ACTIVITY
    //
    let last_stamp: Option<i64> = pool
        .conn
        .query_row(
            "SELECT MAX(stamp) FROM (
                 SELECT MAX(check_in) AS stamp FROM attendees
                 UNION ALL
                 SELECT MAX(check_out) FROM attendees
             )",
            [],
            |row| row.get(0),
        )
        .optional()?
        .flatten();

    match last_stamp.and_then(chrono::DateTime::from_timestamp_millis) {
        Some(t) => println!(
            "{}• Last activity:{} {}",
            CYAN,
            RESET,
            crate::utils::time::format_instant(&t)
        ),
        None => println!("{}• Last activity:{} {}none{}", CYAN, RESET, GREY, RESET),
    }

    println!();
    Ok(())
}
