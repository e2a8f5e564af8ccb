use anyhow::Result;
use cantabile_enhance::{config, Config};

/// Show the current effective configuration.
pub fn show_config(config: &Config) {
    println!("Current Configuration");
    println!("=====================\n");

    let path = config::config_file_path();
    println!("Config file: {}", path.display());
    println!(
        "File exists: {}\n",
        if path.exists() { "yes" } else { "no (using defaults)" }
    );

    println!("Settings:");
    println!("  gemini_api_key: {}", mask(config.gemini_key()));
    println!("  openrouter_api_key: {}", mask(config.openrouter_key()));
    println!("  gemini_model: {}", config.gemini_model);
    println!("  openrouter_model: {}", config.openrouter_model);
    println!("  request_timeout_secs: {}", config.request_timeout_secs);
    println!("  history_path: {}", config.history_path.display());
    println!("  logging.level: {:?}", config.logging.level());
    println!("  logging.coloured: {}", config.logging.coloured());
    println!("  logging.output: {:?}", config.logging.output());

    if config.gemini_key().is_none() && config.openrouter_key().is_none() {
        println!("\nNo provider keys set: 'enhance' will use local optimization only.");
    }

    println!("\nPriority: CLI args > ENV vars (CANTABILE_*) > Config file > Defaults");
}

fn mask(key: Option<&str>) -> String {
    match key {
        Some(key) if key.chars().count() > 8 => {
            let tail: String = key.chars().skip(key.chars().count() - 4).collect();
            format!("****{tail}")
        }
        Some(_) => "****".to_string(),
        None => "<not set>".to_string(),
    }
}

/// Show the config file path.
pub fn show_path() {
    println!("{}", config::config_file_path().display());
}

/// Show example configuration.
pub fn show_example() {
    print!("{}", config::example_config());
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to add your Gemini or OpenRouter API key.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_hides_most_of_the_key() {
        assert_eq!(mask(Some("AIzaSyExample1234")), "****1234");
        assert_eq!(mask(Some("short")), "****");
        assert_eq!(mask(None), "<not set>");
    }
}
