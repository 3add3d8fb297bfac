use crate::cli::parser::Commands;
use crate::cli::commands::resolve_event;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::store::{AttendeeStore, CommunityStore};
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { event } = cmd {
        let event_id = resolve_event(event, cfg)?;

        let store = SqliteStore::open(&cfg.database)?;
        let community = store
            .get_community(&event_id)?
            .ok_or_else(|| AppError::EventNotFound(event_id.clone()))?;

        let attendees = store.find(&event_id)?;
        let summary = Core::build_roster_summary(&attendees);

        header(community.name);
        println!(
            "{}People in the event right now:{} {}{}{}",
            CYAN, RESET, GREEN, summary.present, RESET
        );
        println!(
            "{}People not checked-in yet:{} {}{}{}",
            CYAN, RESET, YELLOW, summary.not_checked_in, RESET
        );
        println!(
            "{}People by company in the event right now:{} {}",
            CYAN,
            RESET,
            summary.by_company.join(", ")
        );
    }
    Ok(())
}
