use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries::{clear_all, insert_attendee, insert_community};
use crate::errors::{AppError, AppResult};
use crate::models::{attendee::Attendee, community::Community};
use crate::ui::messages::success;
use crate::utils::formatting::unique_slug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;

/// JSON load file: the same camelCase shape as the original seed data set.
#[derive(Deserialize)]
struct LoadFile {
    communities: Vec<LoadCommunity>,
    people: Vec<LoadPerson>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoadCommunity {
    id: Option<String>,
    name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoadPerson {
    id: Option<String>,
    first_name: String,
    last_name: String,
    company_name: Option<String>,
    title: Option<String>,
    /// Owning event, by id or display name.
    community: String,
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Load { file, replace } = cmd {
        let content = fs::read_to_string(file)?;
        let data: LoadFile =
            serde_json::from_str(&content).map_err(|e| AppError::Load(e.to_string()))?;

        let mut pool = DbPool::new(&cfg.database)?;
        let tx = pool.conn.transaction()?;

        if *replace {
            clear_all(&tx)?;
        }

        // Existing rows still count for id uniqueness and name resolution
        let mut taken: Vec<String> = Vec::new();
        let mut by_name: HashMap<String, String> = HashMap::new();
        {
            let mut stmt = tx.prepare("SELECT id, name FROM communities")?;
            let rows = stmt.query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?;
            for r in rows {
                let (id, name) = r?;
                by_name.insert(name, id.clone());
                taken.push(id);
            }
        }

        let mut loaded_communities = 0usize;
        for c in &data.communities {
            let id = match &c.id {
                Some(id) => id.clone(),
                None => unique_slug(&c.name, &taken),
            };
            insert_community(&tx, &Community::new(id.clone(), c.name.clone()))?;
            by_name.insert(c.name.clone(), id.clone());
            taken.push(id);
            loaded_communities += 1;
        }

        let mut taken_people: Vec<String> = {
            let mut stmt = tx.prepare("SELECT id FROM attendees")?;
            let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
            let mut out = Vec::new();
            for r in rows {
                out.push(r?);
            }
            out
        };

        let mut loaded_people = 0usize;
        for p in &data.people {
            let community_id = by_name
                .get(&p.community)
                .cloned()
                .or_else(|| taken.contains(&p.community).then(|| p.community.clone()))
                .ok_or_else(|| {
                    AppError::Load(format!("unknown community '{}'", p.community))
                })?;

            let id = match &p.id {
                Some(id) => id.clone(),
                None => unique_slug(&format!("{} {}", p.first_name, p.last_name), &taken_people),
            };

            insert_attendee(
                &tx,
                &Attendee::new(
                    id.clone(),
                    community_id,
                    p.first_name.clone(),
                    p.last_name.clone(),
                    p.company_name.clone(),
                    p.title.clone(),
                ),
            )?;
            taken_people.push(id);
            loaded_people += 1;
        }

        oplog(
            &tx,
            "load",
            file,
            &format!(
                "Loaded {} events and {} attendees",
                loaded_communities, loaded_people
            ),
        )?;
        tx.commit()?;

        success(format!(
            "Loaded {} events and {} attendees from {}",
            loaded_communities, loaded_people, file
        ));
    }
    Ok(())
}
