use anyhow::{Context, Result};
use cantabile_core::model::{Category, EnhanceOptions, Language};
use cantabile_core::optimize_locally;
use cantabile_enhance::{Config, Enhancement, Gateway};

/// Flags shared by every command that optimizes or enhances a prompt.
#[derive(Debug, Clone, clap::Args)]
pub struct OptionArgs {
    /// Template category: relaxation, indonesian, international, commercial
    #[arg(long, default_value = "general")]
    pub category: String,

    /// Language of added clauses: english or indonesian
    #[arg(long, default_value = "english")]
    pub language: Language,

    /// Use the advanced optimization level
    #[arg(long)]
    pub advanced: bool,
}

impl OptionArgs {
    pub fn to_options(&self) -> EnhanceOptions {
        let options = EnhanceOptions::new(self.language, Category::from_name(&self.category));
        if self.advanced {
            options.advanced()
        } else {
            options
        }
    }
}

pub fn run_optimize(prompt: &str, args: &OptionArgs) {
    println!("{}", optimize_locally(prompt, &args.to_options()));
}

pub async fn run_enhance(config: &Config, prompt: &str, args: &OptionArgs) -> Result<()> {
    let gateway = gateway(config)?;
    let enhancement = gateway.enhance(prompt, &args.to_options()).await;
    print_enhancement(&enhancement);
    Ok(())
}

pub fn gateway(config: &Config) -> Result<Gateway> {
    let gateway = Gateway::from_config(config).context("Failed to set up enhancement providers")?;
    if !gateway.has_providers() {
        eprintln!("No API keys configured; run 'cantabile config show' for details.");
    }
    Ok(gateway)
}

pub fn print_enhancement(enhancement: &Enhancement) {
    println!("{}", enhancement.text);
    if enhancement.is_fallback() {
        eprintln!("\n(used local optimization)");
    } else {
        eprintln!("\n(enhanced by {})", enhancement.source);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cantabile_core::model::OptimizationLevel;

    #[test]
    fn test_option_args_conversion() {
        let args = OptionArgs {
            category: "Relaxation".into(),
            language: Language::Indonesian,
            advanced: true,
        };
        let options = args.to_options();
        assert_eq!(options.category, Category::Relaxation);
        assert_eq!(options.language, Language::Indonesian);
        assert_eq!(options.level, OptimizationLevel::Advanced);
    }

    #[test]
    fn test_unknown_category_is_carried() {
        let args = OptionArgs {
            category: "lullaby".into(),
            language: Language::English,
            advanced: false,
        };
        assert_eq!(args.to_options().category, Category::Other("lullaby".into()));
    }
}
