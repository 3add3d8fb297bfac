use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::fs;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: do_migrate,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                println!("# {}\n", path.display());
                println!("{}", content);
            } else {
                warning(format!("No configuration file at {}", path.display()));
            }
            return Ok(());
        }

        if *check {
            if !path.exists() {
                warning(format!("No configuration file at {}", path.display()));
                return Ok(());
            }

            let missing = migrate::missing_fields(&path)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                for field in missing {
                    warning(format!("Missing field: {}", field));
                }
                info("Run 'rcheckin config --migrate' to add the missing fields.");
            }
            return Ok(());
        }

        if *do_migrate {
            if !path.exists() {
                warning(format!("No configuration file at {}", path.display()));
                return Ok(());
            }

            if migrate::ensure_config_fields(&path)? {
                success("Configuration file migrated.");
            } else {
                info("Configuration file already up to date.");
            }
            return Ok(());
        }

        info("Nothing to do. Use --print, --check or --migrate.");
    }
    Ok(())
}
