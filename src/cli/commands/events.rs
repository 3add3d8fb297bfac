use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{count_attendees, load_communities};
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::Table;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;

    let communities = load_communities(&pool)?;
    if communities.is_empty() {
        info("No events loaded. Use 'rcheckin load <file>' first.");
        return Ok(());
    }

    let sep = cfg.separator_char.chars().next().unwrap_or('-');
    let mut table = Table::new(vec!["ID", "EVENT", "ATTENDEES"]).with_separator(sep);

    for community in &communities {
        let count = count_attendees(&pool, &community.id)?;
        table.add_row(vec![
            community.id.clone(),
            community.name.clone(),
            count.to_string(),
        ]);
    }

    println!();
    print!("{}", table.render());
    Ok(())
}
