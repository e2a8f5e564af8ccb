//! Instruction text sent to each provider.
//!
//! Gemini receives a long rule list; OpenRouter a single paragraph. Both
//! embed the prompt, its category and the optimization level.

use cantabile_core::model::{EnhanceOptions, Language, OptimizationLevel};

/// How the level is named inside instructions.
fn level_name(level: OptimizationLevel) -> &'static str {
    match level {
        OptimizationLevel::Basic => "standard",
        OptimizationLevel::Advanced => "advanced",
    }
}

/// The full rule-list instruction used with Gemini.
pub fn detailed(prompt: &str, options: &EnhanceOptions) -> String {
    let level = level_name(options.level);
    let advanced = options.level == OptimizationLevel::Advanced;
    let category = options.category.as_str();

    match options.language {
        Language::Indonesian => {
            let depth = if advanced {
                "Gunakan optimasi tingkat lanjut dengan analisis mendalam."
            } else {
                ""
            };
            let extra = if advanced {
                "8. Tambahkan detail teknis produksi\n\
                 9. Sertakan referensi gaya musik yang spesifik\n\
                 10. Optimalkan untuk hasil audio berkualitas tinggi"
            } else {
                ""
            };
            format!(
                "Optimalkan prompt musik Suno AI ini untuk hasil yang lebih baik. {depth} \
                 Buat lebih spesifik dan efektif sambil mempertahankan maksud asli:\n\n\
                 Prompt asli: {prompt}\n\n\
                 Kategori: {category}\n\
                 Bahasa: Indonesia\n\
                 Level optimasi: {level}\n\n\
                 Aturan optimasi:\n\
                 1. Pertahankan tag genre dalam [kurung] di awal\n\
                 2. Spesifik tentang instrumen, tempo, dan mood\n\
                 3. Tambahkan catatan produksi untuk kualitas audio yang lebih baik\n\
                 4. Pastikan prompt jelas dan dapat ditindaklanjuti untuk generasi musik AI\n\
                 5. Optimalkan khusus untuk Suno AI\n\
                 6. Maksimal 500 karakter\n\
                 7. Gunakan bahasa Indonesia yang natural\n\
                 {extra}\n\n\
                 Kembalikan hanya prompt yang dioptimalkan, tidak ada yang lain."
            )
        }
        Language::English => {
            let depth = if advanced {
                "Use advanced optimization with deep analysis."
            } else {
                ""
            };
            let extra = if advanced {
                "8. Add technical production details\n\
                 9. Include specific musical style references\n\
                 10. Optimize for high-quality audio output"
            } else {
                ""
            };
            format!(
                "Optimize this Suno AI music prompt for better results. {depth} \
                 Make it more specific and effective while maintaining the original intent:\n\n\
                 Original prompt: {prompt}\n\n\
                 Category: {category}\n\
                 Language: English\n\
                 Optimization level: {level}\n\n\
                 Rules for optimization:\n\
                 1. Keep genre tags in [brackets] at the beginning\n\
                 2. Be specific about instruments, tempo, and mood\n\
                 3. Add production notes for better audio quality\n\
                 4. Ensure the prompt is clear and actionable for AI music generation\n\
                 5. Optimize for Suno AI specifically\n\
                 6. Maximum 500 characters\n\
                 7. Use natural, flowing English\n\
                 {extra}\n\n\
                 Return only the optimized prompt, nothing else."
            )
        }
    }
}

/// The one-paragraph instruction used with OpenRouter.
pub fn brief(prompt: &str, options: &EnhanceOptions) -> String {
    let level = level_name(options.level);
    let category = options.category.as_str();
    match options.language {
        Language::Indonesian => format!(
            "Optimalkan prompt musik Suno AI ini: {prompt}. Kategori: {category}. \
             Level: {level}. Buat lebih spesifik untuk hasil yang lebih baik. \
             Maksimal 500 karakter. Gunakan bahasa Indonesia."
        ),
        Language::English => format!(
            "Optimize this Suno AI music prompt: {prompt}. Category: {category}. \
             Level: {level}. Make it more specific for better results. \
             Max 500 characters. Use English."
        ),
    }
}
