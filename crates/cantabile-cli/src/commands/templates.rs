use std::path::Path;

use anyhow::{Context, Result};
use cantabile_core::model::{Category, EnhanceOptions, Language, OptimizationLevel};
use cantabile_core::{CategoryTemplate, HistoryStore, Mode, PromptHistoryRecord, TemplateLibrary};
use cantabile_enhance::Config;

use super::enhance::{gateway, print_enhancement};

#[derive(Debug, Clone, Copy, Default)]
pub struct UseOptions {
    pub enhance: bool,
    pub advanced: bool,
    pub save: bool,
}

fn load_library(file: Option<&Path>) -> Result<TemplateLibrary> {
    match file {
        Some(path) => TemplateLibrary::load(path)
            .with_context(|| format!("Failed to load templates from {}", path.display())),
        None => TemplateLibrary::builtin().context("Failed to load built-in templates"),
    }
}

pub fn list_templates(category: Option<&str>, file: Option<&Path>) -> Result<()> {
    let library = load_library(file)?;

    if category.is_none() {
        println!("Quick templates");
        println!("===============\n");
        for template in &library.quick {
            println!("  {:<22} {}", template.id, template.name);
            println!("  {:<22} {}", "", template.tags.join(", "));
        }
        println!();
    }

    let categories: Vec<Category> = match category {
        Some(name) => vec![Category::from_name(name)],
        None => Category::BUILTIN.to_vec(),
    };

    for category in &categories {
        let templates: Vec<&CategoryTemplate> = library.in_category(category).collect();
        if templates.is_empty() {
            continue;
        }
        println!("{} templates", capitalize(category.as_str()));
        for template in templates {
            println!("  {:<26} {} / {}", template.id, template.name, template.name_id);
        }
        println!();
    }

    Ok(())
}

pub fn show_template(id: &str, file: Option<&Path>) -> Result<()> {
    let library = load_library(file)?;

    if let Ok(template) = library.quick(id) {
        println!("{} ({})", template.name, template.id);
        println!("{}\n", template.description);
        println!("  Genres:      {}", template.genres.join(", "));
        println!("  Moods:       {}", template.moods.join(", "));
        println!("  Tempo:       {} BPM", template.tempo);
        println!("  Instruments: {}", template.instruments.join(", "));
        println!(
            "  Vocals:      {} ({})",
            template.vocal_style.gender, template.vocal_style.character
        );
        println!("  Duration:    {}", template.duration);
        println!("  Key:         {}", template.key_signature);
        println!("  Structure:   {}", template.song_structure.join(" → "));
        println!("\n{}", template.prompt);
        return Ok(());
    }

    let template = library.category_template(id)?;
    println!("{} / {} ({})", template.name, template.name_id, template.id);
    println!("Category: {}\n", template.category);
    println!("{}", template.description);
    println!("{}\n", template.description_id);
    if let Some(effect) = &template.effect {
        println!("Effect: {effect}\n");
    }
    println!("English:\n{}\n", template.prompt);
    println!("Indonesian:\n{}", template.prompt_id);
    Ok(())
}

pub async fn use_template(
    config: &Config,
    id: &str,
    opts: UseOptions,
    file: Option<&Path>,
) -> Result<()> {
    let library = load_library(file)?;
    let level = if opts.advanced {
        OptimizationLevel::Advanced
    } else {
        OptimizationLevel::Basic
    };

    let record = if let Ok(template) = library.quick(id) {
        let mut prompt = template.prompt.clone();
        if opts.enhance {
            let options = EnhanceOptions::new(Language::English, Category::General).with_level(level);
            let enhancement = gateway(config)?.enhance(&prompt, &options).await;
            print_enhancement(&enhancement);
            prompt = enhancement.text;
        } else {
            println!("{prompt}");
        }
        PromptHistoryRecord::new(prompt, Language::English)
            .with_selection(&template.selection(Mode::Full))
    } else {
        let template = library.category_template(id)?;
        let (english, indonesian) = bilingual_prompts(config, template, opts.enhance, level).await?;
        PromptHistoryRecord::new(english, Language::English)
            .with_secondary(indonesian)
            .with_genres(template.tags.clone())
            .with_category(template.category.clone())
    };

    if opts.save {
        let mut store = HistoryStore::open(&config.history_path)
            .with_context(|| format!("Failed to open history at {}", config.history_path.display()))?;
        let id = record.id;
        store.add(record);
        store.save().context("Failed to save history")?;
        eprintln!("✓ Saved as {id}");
    }

    Ok(())
}

async fn bilingual_prompts(
    config: &Config,
    template: &CategoryTemplate,
    enhance: bool,
    level: OptimizationLevel,
) -> Result<(String, String)> {
    let english = template.prompt_for(Language::English);
    let indonesian = template.prompt_for(Language::Indonesian);

    if !enhance {
        println!("English:\n{english}\n");
        println!("Indonesian:\n{indonesian}");
        return Ok((english.to_string(), indonesian.to_string()));
    }

    let options = EnhanceOptions::new(Language::English, template.category.clone()).with_level(level);
    let result = gateway(config)?
        .enhance_bilingual(english, indonesian, &options)
        .await;

    println!("English:");
    print_enhancement(&result.english);
    println!("\nIndonesian:");
    print_enhancement(&result.indonesian);

    Ok((result.english.text, result.indonesian.text))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("relaxation"), "Relaxation");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_load_library_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mine.toml");
        fs::write(
            &path,
            r#"
[[category]]
id = "my-lullaby"
category = "relaxation"
name = "Lullaby"
name_id = "Lagu Tidur"
description = "For sleeping babies"
description_id = "Untuk bayi tidur"
prompt = "Gentle lullaby with music box"
prompt_id = "Lagu tidur lembut dengan kotak musik"
"#,
        )
        .unwrap();

        let library = load_library(Some(&path)).unwrap();
        assert!(library.quick.is_empty());
        assert_eq!(library.category_template("my-lullaby").unwrap().name_id, "Lagu Tidur");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(load_library(Some(&dir.path().join("absent.toml"))).is_err());
    }

    #[tokio::test]
    async fn test_use_without_enhance_saves_both_languages() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            history_path: dir.path().join("history.json"),
            ..Config::default()
        };
        let library = TemplateLibrary::builtin().unwrap();
        let template = &library.categories[0];

        let opts = UseOptions {
            save: true,
            ..UseOptions::default()
        };
        use_template(&config, &template.id, opts, None).await.unwrap();

        let store = HistoryStore::open(&config.history_path).unwrap();
        let record = &store.records()[0];
        assert_eq!(record.prompt, template.prompt);
        assert_eq!(record.secondary_prompt.as_deref(), Some(template.prompt_id.as_str()));
        assert_eq!(record.category.as_ref(), Some(&template.category));
    }
}
