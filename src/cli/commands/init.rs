//! Init command implementation.

use std::fs;
use std::path::Path;

use ticket_lib::seed::sample_tickets;
use ticket_lib::{Result, TicketError, jsonl};
use tracing::info;

use crate::cli::InitArgs;
use crate::config::{CONFIG_FILE, Config, WORKSPACE_DIR};
use crate::format::{MessageResponse, print_json};

const CONFIG_TEMPLATE: &str = "# Ticket workspace configuration
# data_file: .tickets/tickets.jsonl
# default_type: task
# json: false
";

/// Execute the init command.
///
/// The config template goes to `<root>/.tickets/config.yaml`, the only place
/// config is read from, wherever the data file itself lives.
///
/// # Errors
///
/// Returns `Validation` if the data file already exists and `--force` was
/// not given, or `Io` if the files cannot be written.
pub fn execute(args: &InitArgs, config: &Config, root: &Path) -> Result<()> {
    let path = &config.data_file;
    let lock = jsonl::lock(path)?;
    if path.exists() && !args.force {
        return Err(TicketError::validation(
            "data_file",
            format!("{} already exists; use --force to overwrite", path.display()),
        ));
    }

    let tickets = if args.seed {
        sample_tickets()
    } else {
        Vec::new()
    };
    jsonl::save(path, &tickets)?;
    drop(lock);

    let config_dir = root.join(WORKSPACE_DIR);
    let config_path = config_dir.join(CONFIG_FILE);
    if !config_path.exists() {
        fs::create_dir_all(&config_dir)?;
        fs::write(config_path, CONFIG_TEMPLATE)?;
    }

    info!(path = %path.display(), count = tickets.len(), "initialized ticket store");
    let message = format!(
        "Initialized {} with {} ticket(s)",
        path.display(),
        tickets.len()
    );
    if config.json {
        print_json(&MessageResponse::new(message))?;
    } else {
        println!("{message}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticket_lib::TicketStore;

    fn config_in(dir: &std::path::Path) -> Config {
        Config::defaults(dir)
    }

    #[test]
    fn test_init_seed_writes_samples() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        execute(&InitArgs { seed: true, force: false }, &config, dir.path()).unwrap();

        let store = TicketStore::open(&config.data_file).unwrap();
        assert_eq!(store.list_tickets().unwrap(), sample_tickets());
        assert!(dir.path().join(".tickets").join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        execute(&InitArgs { seed: true, force: false }, &config, dir.path()).unwrap();
        let err = execute(&InitArgs { seed: false, force: false }, &config, dir.path()).unwrap_err();
        assert!(err.is_validation());

        execute(&InitArgs { seed: false, force: true }, &config, dir.path()).unwrap();
        let store = TicketStore::open(&config.data_file).unwrap();
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_init_custom_data_file_writes_config_to_workspace() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.data_file = dir.path().join("custom").join("t.jsonl");

        execute(&InitArgs { seed: false, force: false }, &config, dir.path()).unwrap();

        assert!(config.data_file.exists());
        assert!(dir.path().join(".tickets").join(CONFIG_FILE).exists());
        assert!(!dir.path().join("custom").join(CONFIG_FILE).exists());
    }
}
