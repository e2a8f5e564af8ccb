use anyhow::{Context, Result};
use cantabile_core::{
    render_song_style, resolve_style, CreativeCategory, RandomPicker, SongStyleRequest,
};

#[derive(Debug, Clone, clap::Args)]
pub struct StyleArgs {
    /// Your vision for the song
    #[arg(long, default_value = "")]
    pub preferences: String,

    /// Fix a category, e.g. --fixed mood=Calm (repeatable)
    #[arg(long = "fixed", value_name = "CATEGORY=VALUE")]
    pub fixed: Vec<String>,

    /// Add a language to the pool (repeatable)
    #[arg(long = "custom-language")]
    pub custom_languages: Vec<String>,

    /// Seed for reproducible picks
    #[arg(long)]
    pub seed: Option<u64>,

    /// List every category and its values instead of generating
    #[arg(long)]
    pub list: bool,
}

pub fn run_style(args: StyleArgs) -> Result<()> {
    if args.list {
        list_options();
        return Ok(());
    }

    let request = build_request(&args)?;
    let style = match args.seed {
        Some(seed) => resolve_style(&request, &mut RandomPicker::seeded(seed)),
        None => resolve_style(&request, &mut RandomPicker::new()),
    };
    println!("{}", render_song_style(&style));
    Ok(())
}

pub fn build_request(args: &StyleArgs) -> Result<SongStyleRequest> {
    let mut request = SongStyleRequest::new().with_preferences(args.preferences.trim());
    for language in &args.custom_languages {
        request = request.with_custom_language(language);
    }
    for spec in &args.fixed {
        let (category, value) = spec
            .split_once('=')
            .with_context(|| format!("Expected CATEGORY=VALUE, got '{spec}'"))?;
        let category: CreativeCategory = category.parse()?;
        request = request.with_fixed(category, value.trim())?;
    }
    Ok(request)
}

fn list_options() {
    for category in CreativeCategory::ALL {
        println!("{category}:");
        for value in category.options() {
            println!("  {value}");
        }
    }
}
