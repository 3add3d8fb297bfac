use crate::cli::parser::Commands;
use crate::cli::commands::resolve_event;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::policy;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::store::{AttendeeStore, Clock, CommunityStore, SystemClock};
use crate::ui::messages::info;
use crate::utils::colors::{GREY, RESET, color_for_optional_field, color_for_state};
use crate::utils::table::Table;
use crate::utils::time::format_optional;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Roster { event } = cmd {
        let event_id = resolve_event(event, cfg)?;

        let store = SqliteStore::open(&cfg.database)?;
        let community = store
            .get_community(&event_id)?
            .ok_or_else(|| AppError::EventNotFound(event_id.clone()))?;

        let attendees = store.find(&event_id)?;
        if attendees.is_empty() {
            info(format!("No attendees for {}.", community.name));
            return Ok(());
        }

        let now = SystemClock.now();
        let sep = cfg.separator_char.chars().next().unwrap_or('-');
        let mut table =
            Table::new(vec!["ID", "NAME", "COMPANY", "TITLE", "STATE", "CHECK-IN", "CHECK-OUT"])
                .with_separator(sep);

        for attendee in &attendees {
            let state = attendee.state();

            // Mirror the UI gate: no checkout offered during the grace window
            let state_cell = match attendee.check_in {
                Some(t) if attendee.is_in_event() && !policy::checkout_available(t, now) => {
                    format!("{}{}*{}", color_for_state(state), state.as_str(), RESET)
                }
                _ => format!("{}{}{}", color_for_state(state), state.as_str(), RESET),
            };

            let company = attendee
                .company_name
                .clone()
                .unwrap_or_else(|| cfg.placeholder.clone());
            let title = attendee.title.clone().unwrap_or_else(|| cfg.placeholder.clone());

            table.add_row(vec![
                attendee.id.clone(),
                attendee.full_name(),
                format!(
                    "{}{}{}",
                    color_for_optional_field(attendee.company_name.as_deref()),
                    company,
                    RESET
                ),
                format!(
                    "{}{}{}",
                    color_for_optional_field(attendee.title.as_deref()),
                    title,
                    RESET
                ),
                state_cell,
                format_optional(attendee.check_in.as_ref(), &cfg.placeholder),
                format_optional(attendee.check_out.as_ref(), &cfg.placeholder),
            ]);
        }

        println!();
        println!("{}", crate::utils::formatting::bold(&community.name));
        print!("{}", table.render());

        let summary = Core::build_roster_summary(&attendees);
        println!();
        println!("People in the event right now: {}", summary.present);
        println!(
            "People not checked-in yet: {}",
            summary.not_checked_in
        );
        println!(
            "People by company in the event right now: {}",
            summary.by_company.join(", ")
        );
        println!("{}(*) checkout opens {}s after check-in{}", GREY, policy::CHECKOUT_GRACE_SECS, RESET);
    }
    Ok(())
}
