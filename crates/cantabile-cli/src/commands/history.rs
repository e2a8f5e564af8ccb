use anyhow::{Context, Result};
use cantabile_core::model::HistoryId;
use cantabile_core::{HistoryFilter, HistoryStore};
use cantabile_enhance::Config;

fn open_store(config: &Config) -> Result<HistoryStore> {
    HistoryStore::open(&config.history_path)
        .with_context(|| format!("Failed to open history at {}", config.history_path.display()))
}

fn parse_id(id: &str) -> Result<HistoryId> {
    id.parse()
        .with_context(|| format!("'{id}' is not a valid history id"))
}

pub fn list_history(
    config: &Config,
    search: Option<&str>,
    filter: HistoryFilter,
    json: bool,
) -> Result<()> {
    let store = open_store(config)?;
    let term = search.unwrap_or_default();

    if json {
        let records: Vec<_> = store.search(term, filter).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    let mut shown = 0;

    for record in store.search(term, filter) {
        let star = if record.favorite { "★" } else { " " };
        println!(
            "{star} {}  {}  [{}]",
            record.id,
            record.created_at.format("%Y-%m-%d %H:%M"),
            record.language
        );
        if !record.genres.is_empty() {
            println!("  Genres: {}", record.genres.join(", "));
        }
        println!("  {}", record.prompt);
        if let Some(secondary) = &record.secondary_prompt {
            println!("  {secondary}");
        }
        println!();
        shown += 1;
    }

    if shown == 0 {
        if store.is_empty() {
            println!("No saved prompts yet. Use --save with 'generate' or 'templates use'.");
        } else {
            println!("No saved prompts match.");
        }
    } else {
        println!("{shown} of {} saved prompt(s)", store.len());
    }

    Ok(())
}

pub fn toggle_favorite(config: &Config, id: &str) -> Result<()> {
    let id = parse_id(id)?;
    let mut store = open_store(config)?;
    let favorite = store.toggle_favorite(&id)?;
    store.save().context("Failed to save history")?;

    if favorite {
        println!("★ Marked {id} as favorite");
    } else {
        println!("Removed {id} from favorites");
    }
    Ok(())
}

pub fn delete_entry(config: &Config, id: &str) -> Result<()> {
    let id = parse_id(id)?;
    let mut store = open_store(config)?;
    store.delete(&id)?;
    store.save().context("Failed to save history")?;
    println!("✓ Deleted {id}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cantabile_core::model::Language;
    use cantabile_core::PromptHistoryRecord;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> Config {
        Config {
            history_path: dir.path().join("history.json"),
            ..Config::default()
        }
    }

    fn seed(config: &Config) -> HistoryId {
        let mut store = open_store(config).unwrap();
        let record = PromptHistoryRecord::new("Lo-fi beats to study to", Language::English);
        let id = record.id;
        store.add(record);
        store.save().unwrap();
        id
    }

    #[test]
    fn test_favorite_round_trip() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let id = seed(&config);

        toggle_favorite(&config, &id.to_string()).unwrap();
        let store = open_store(&config).unwrap();
        assert!(store.get(&id).unwrap().favorite);
    }

    #[test]
    fn test_delete_entry() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let id = seed(&config);

        delete_entry(&config, &id.to_string()).unwrap();
        assert!(open_store(&config).unwrap().is_empty());
        assert!(delete_entry(&config, &id.to_string()).is_err());
    }

    #[test]
    fn test_bad_id_is_rejected() {
        let dir = TempDir::new().unwrap();
        assert!(toggle_favorite(&config_in(&dir), "not-a-uuid").is_err());
    }

    #[test]
    fn test_list_on_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(list_history(&config_in(&dir), None, HistoryFilter::All, false).is_ok());
        assert!(list_history(&config_in(&dir), Some("lo-fi"), HistoryFilter::Favorites, true).is_ok());
    }
}
