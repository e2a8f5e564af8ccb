use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cantabile_core::model::{
    Duration, Mode, ProductionStyle, PromptSelection, SongLanguage, VocalCharacter, VocalGender,
};
use cantabile_core::taxonomy::{self, DEFAULT_STRUCTURE};
use cantabile_core::{
    assemble_with, ExportFormat, HistoryStore, PromptExport, PromptHistoryRecord, RandomPicker,
    TemplateLibrary,
};
use cantabile_enhance::Config;

use super::enhance::{gateway, print_enhancement, OptionArgs};

#[derive(Debug, Clone, clap::Args)]
pub struct GenerateArgs {
    /// full, instrumental, lyrics or custom
    #[arg(long, default_value = "full")]
    pub mode: Mode,

    /// Start from a quick template's preset (flags below override it)
    #[arg(long)]
    pub template: Option<String>,

    /// Genre (repeatable)
    #[arg(long = "genre")]
    pub genres: Vec<String>,

    /// Mood (repeatable)
    #[arg(long = "mood")]
    pub moods: Vec<String>,

    /// Instrument (repeatable)
    #[arg(long = "instrument")]
    pub instruments: Vec<String>,

    /// Tempo in BPM
    #[arg(long)]
    pub tempo: Option<u32>,

    /// 30s, 1min, 2min, 3min or 4min
    #[arg(long)]
    pub duration: Option<Duration>,

    /// Musical key, e.g. "A Minor"
    #[arg(long)]
    pub key: Option<String>,

    #[arg(long)]
    pub vocal_gender: Option<VocalGender>,

    #[arg(long)]
    pub vocal_character: Option<VocalCharacter>,

    /// Song section, in order (repeatable)
    #[arg(long = "section", conflicts_with = "default_structure")]
    pub sections: Vec<String>,

    /// Use Intro-Verse-Chorus-Verse-Chorus-Bridge-Chorus-Outro
    #[arg(long)]
    pub default_structure: bool,

    /// Artist or track to reference ("in the style of ...")
    #[arg(long)]
    pub style_reference: Option<String>,

    #[arg(long)]
    pub production: Option<ProductionStyle>,

    #[arg(long)]
    pub song_language: Option<SongLanguage>,

    /// Audio effect (repeatable)
    #[arg(long = "effect")]
    pub effects: Vec<String>,

    /// Lyric theme for lyrics mode
    #[arg(long)]
    pub theme: Option<String>,

    /// Seed for lyric fragment picks
    #[arg(long)]
    pub seed: Option<u64>,

    /// Accept values outside the built-in catalogs
    #[arg(long)]
    pub allow_custom: bool,

    /// Send the prompt through the enhancement providers
    #[arg(long)]
    pub enhance: bool,

    #[command(flatten)]
    pub options: OptionArgs,

    /// Save the result to history
    #[arg(long)]
    pub save: bool,

    /// Write the prompt to a file, or into a directory as suno-prompt-<date>.<ext>
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Export format: txt or json (default: from the file extension, else txt)
    #[arg(long, requires = "export")]
    pub format: Option<ExportFormat>,
}

pub async fn run_generate(config: &Config, args: GenerateArgs) -> Result<()> {
    let library = TemplateLibrary::builtin().context("Failed to load built-in templates")?;
    let selection = build_selection(&args, &library)?;

    if !args.allow_custom {
        // Template presets carry their own vocabulary; only flags are checked.
        let explicit = GenerateArgs {
            template: None,
            ..args.clone()
        };
        taxonomy::validate_selection(&build_selection(&explicit, &library)?)
            .context("Selection has values outside the catalogs (use --allow-custom to keep them)")?;
    }

    let prompt = match args.seed {
        Some(seed) => assemble_with(&selection, &mut RandomPicker::seeded(seed)),
        None => assemble_with(&selection, &mut RandomPicker::new()),
    };

    let options = args.options.to_options();
    let prompt = if args.enhance {
        let enhancement = gateway(config)?.enhance(&prompt, &options).await;
        print_enhancement(&enhancement);
        enhancement.text
    } else {
        println!("{prompt}");
        prompt
    };

    if let Some(path) = &args.export {
        let format = args.format.unwrap_or_else(|| format_for(path));
        let written = export_prompt(path, &PromptExport::new(prompt.clone(), selection.mode), format)?;
        eprintln!("✓ Exported to {}", written.display());
    }

    if args.save {
        let mut store = HistoryStore::open(&config.history_path)
            .with_context(|| format!("Failed to open history at {}", config.history_path.display()))?;
        let record = PromptHistoryRecord::new(prompt, options.language)
            .with_selection(&selection)
            .with_category(options.category);
        let id = record.id;
        store.add(record);
        store.save().context("Failed to save history")?;
        eprintln!("✓ Saved as {id}");
    }

    Ok(())
}

/// Guess the export format from a file extension.
fn format_for(path: &Path) -> ExportFormat {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| ext.parse().ok())
        .unwrap_or_default()
}

/// Write `export` to `path`, or to its default file name when `path` is a
/// directory. Returns the file written.
pub fn export_prompt(path: &Path, export: &PromptExport, format: ExportFormat) -> Result<PathBuf> {
    let target = if path.is_dir() {
        path.join(export.file_name(format))
    } else {
        path.to_path_buf()
    };
    let contents = export.render(format).context("Failed to render export")?;
    std::fs::write(&target, contents)
        .with_context(|| format!("Failed to write export to {}", target.display()))?;
    Ok(target)
}

/// Merge a template preset (if any) with explicit flags.
pub fn build_selection(args: &GenerateArgs, library: &TemplateLibrary) -> Result<PromptSelection> {
    let mut selection = match &args.template {
        Some(id) => library.quick(id)?.selection(args.mode),
        None => PromptSelection::new(args.mode),
    };

    if !args.genres.is_empty() {
        selection.genres.clone_from(&args.genres);
    }
    if !args.moods.is_empty() {
        selection.moods.clone_from(&args.moods);
    }
    if !args.instruments.is_empty() {
        selection.instruments.clone_from(&args.instruments);
    }
    if let Some(tempo) = args.tempo {
        selection.tempo = tempo;
    }
    if let Some(duration) = args.duration {
        selection.duration = duration;
    }
    if let Some(key) = &args.key {
        selection.key_signature.clone_from(key);
    }
    if let Some(gender) = args.vocal_gender {
        selection.vocal_style.gender = gender;
    }
    if let Some(character) = args.vocal_character {
        selection.vocal_style.character = character;
    }
    if args.default_structure {
        selection.song_structure = DEFAULT_STRUCTURE.iter().map(|s| (*s).to_string()).collect();
    } else if !args.sections.is_empty() {
        selection.song_structure.clone_from(&args.sections);
    }
    if let Some(reference) = &args.style_reference {
        selection.advanced.style_reference.clone_from(reference);
    }
    if let Some(production) = args.production {
        selection.advanced.production_style = production;
    }
    if let Some(language) = args.song_language {
        selection.advanced.language = language;
    }
    if !args.effects.is_empty() {
        selection.advanced.effects.clone_from(&args.effects);
    }
    if let Some(theme) = &args.theme {
        selection.theme = Some(theme.clone());
    }

    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        args: GenerateArgs,
    }

    fn parse(argv: &[&str]) -> GenerateArgs {
        let mut full = vec!["cantabile"];
        full.extend_from_slice(argv);
        Harness::try_parse_from(full).unwrap().args
    }

    #[test]
    fn test_flags_build_selection() {
        let args = parse(&[
            "--mode", "instrumental",
            "--genre", "Jazz",
            "--genre", "Funk",
            "--instrument", "Saxophone",
            "--tempo", "96",
            "--duration", "3min",
            "--production", "lo-fi",
        ]);
        let library = TemplateLibrary::builtin().unwrap();
        let selection = build_selection(&args, &library).unwrap();

        assert_eq!(selection.mode, Mode::Instrumental);
        assert_eq!(selection.genres, vec!["Jazz", "Funk"]);
        assert_eq!(selection.tempo, 96);
        assert_eq!(selection.duration, Duration::ThreeMinutes);
        assert_eq!(selection.advanced.production_style, ProductionStyle::LoFi);
    }

    #[test]
    fn test_template_preset_with_override() {
        let library = TemplateLibrary::builtin().unwrap();
        let template = &library.quick[0];
        let args = parse(&["--template", &template.id, "--tempo", "77"]);
        let selection = build_selection(&args, &library).unwrap();

        assert_eq!(selection.genres, template.genres);
        assert_eq!(selection.tempo, 77);
    }

    #[test]
    fn test_unknown_template_is_an_error() {
        let library = TemplateLibrary::builtin().unwrap();
        let args = parse(&["--template", "no-such-template"]);
        assert!(build_selection(&args, &library).is_err());
    }

    #[test]
    fn test_default_structure_flag() {
        let library = TemplateLibrary::builtin().unwrap();
        let selection = build_selection(&parse(&["--default-structure"]), &library).unwrap();
        assert_eq!(selection.song_structure.len(), DEFAULT_STRUCTURE.len());
    }

    #[test]
    fn test_catalog_check_ignores_template_vocabulary() {
        let library = TemplateLibrary::builtin().unwrap();
        let args = parse(&["--template", "youtube-background"]);
        let explicit = GenerateArgs {
            template: None,
            ..args.clone()
        };
        assert!(taxonomy::validate_selection(&build_selection(&args, &library).unwrap()).is_err());
        assert!(taxonomy::validate_selection(&build_selection(&explicit, &library).unwrap()).is_ok());
    }

    #[test]
    fn test_export_txt_and_json() {
        let dir = TempDir::new().unwrap();
        let export = PromptExport::new("[jazz] Create a jazz song", Mode::Custom);

        let txt = export_prompt(&dir.path().join("out.txt"), &export, ExportFormat::Txt).unwrap();
        assert_eq!(fs::read_to_string(txt).unwrap(), "[jazz] Create a jazz song");

        let json = export_prompt(dir.path(), &export, ExportFormat::Json).unwrap();
        assert_eq!(json, dir.path().join(export.file_name(ExportFormat::Json)));
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(json).unwrap()).unwrap();
        assert_eq!(value["prompt"], "[jazz] Create a jazz song");
        assert_eq!(value["generationMode"], "custom");
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn test_export_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let export = PromptExport::new("p", Mode::Full);
        let err = export_prompt(&dir.path().join("absent/out.txt"), &export, ExportFormat::Txt)
            .unwrap_err();
        assert!(err.to_string().contains("Failed to write export"));
    }

    #[test]
    fn test_export_format_from_extension() {
        assert_eq!(format_for(Path::new("a/prompt.json")), ExportFormat::Json);
        assert_eq!(format_for(Path::new("a/prompt.TXT")), ExportFormat::Txt);
        assert_eq!(format_for(Path::new("a/prompt")), ExportFormat::Txt);
    }

    #[test]
    fn test_format_requires_export() {
        assert!(Harness::try_parse_from(["cantabile", "--format", "json"]).is_err());
        let args = parse(&["--export", "p.json", "--format", "txt"]);
        assert_eq!(args.format, Some(ExportFormat::Txt));
    }

    #[test]
    fn test_bad_mode_rejected_by_parser() {
        let result = Harness::try_parse_from(["cantabile", "--mode", "karaoke"]);
        assert!(result.is_err());
    }
}
