//! Gateway behaviour against providers that cannot be reached.

use std::time::Duration;

use cantabile_core::model::{Category, EnhanceOptions, Language};
use cantabile_core::optimize_locally;
use cantabile_enhance::{Gateway, GeminiClient, OpenRouterClient};

const UNREACHABLE: &str = "http://127.0.0.1:1";

fn unreachable_gateway() -> Gateway {
    let timeout = Duration::from_secs(2);
    let gemini = GeminiClient::new("test-key".into(), "gemini-test".into(), timeout)
        .unwrap()
        .with_base_url(UNREACHABLE);
    let openrouter = OpenRouterClient::new("test-key".into(), "router-test".into(), timeout)
        .unwrap()
        .with_base_url(UNREACHABLE);
    Gateway::default()
        .with_provider(gemini)
        .with_provider(openrouter)
}

#[tokio::test]
async fn test_unreachable_providers_fall_back_to_local_optimizer() {
    let gateway = unreachable_gateway();
    let options = EnhanceOptions::new(Language::English, Category::Relaxation).advanced();
    let prompt = "[ambient, new age] Create a calm song at 60 BPM";

    let result = gateway.enhance(prompt, &options).await;

    assert!(result.is_fallback());
    assert_eq!(result.text, optimize_locally(prompt, &options));
}

#[tokio::test]
async fn test_bilingual_fallback_keeps_languages_apart() {
    let gateway = unreachable_gateway();
    let options = EnhanceOptions::new(Language::English, Category::Indonesian);

    let result = gateway
        .enhance_bilingual("A dangdut song", "Lagu dangdut", &options)
        .await;

    assert!(result.english.is_fallback());
    assert!(result.indonesian.is_fallback());
    assert_eq!(
        result.indonesian.text,
        optimize_locally(
            "Lagu dangdut",
            &EnhanceOptions::new(Language::Indonesian, Category::Indonesian)
        )
    );
}
