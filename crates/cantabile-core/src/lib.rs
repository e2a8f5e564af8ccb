//! Core prompt model for cantabile.
//!
//! This crate defines the prompt selection model, the catalogs of genres,
//! instruments, moods and keys, the text normalizer and local optimizer,
//! the prompt assembler, lyric selection, the song style generator, the
//! template library, prompt export, and the prompt history store.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod assemble;
pub mod error;
pub mod export;
pub mod lyrics;
pub mod model;
pub mod store;
pub mod style;
pub mod taxonomy;
pub mod templates;
pub mod text;

pub use assemble::{assemble, assemble_with};
pub use error::{Error, Result};
pub use export::{ExportFormat, PromptExport};
pub use lyrics::{render_lyric_sheet, select_lyrics, FragmentPicker, LyricSheetRequest, RandomPicker};
pub use model::{EnhanceOptions, Mode, PromptHistoryRecord, PromptSelection};
pub use store::{HistoryFilter, HistoryStore, MAX_HISTORY};
pub use style::{render_song_style, resolve_style, CreativeCategory, SongStyleRequest, StyleChoice};
pub use templates::{CategoryTemplate, QuickTemplate, TemplateLibrary};
pub use text::{normalize, optimize_locally};
