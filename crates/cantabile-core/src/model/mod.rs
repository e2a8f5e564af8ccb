pub mod history;
pub mod ids;
pub mod options;
pub mod selection;
pub mod vocab;

pub use history::PromptHistoryRecord;
pub use ids::HistoryId;
pub use options::{Category, EnhanceOptions, Language, OptimizationLevel};
pub use selection::{AdvancedSettings, PromptSelection, VocalStyle};
pub use vocab::{Duration, Mode, ProductionStyle, SongLanguage, VocalCharacter, VocalGender};
