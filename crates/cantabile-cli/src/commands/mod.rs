pub mod catalog;
pub mod config;
pub mod enhance;
pub mod generate;
pub mod history;
pub mod lyrics;
pub mod style;
pub mod templates;
