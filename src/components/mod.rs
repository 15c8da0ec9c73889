// src/components/mod.rs
pub mod data_table;
pub mod flashcard_reviewer;
pub mod schema_browser;
pub mod stats_viewer;
pub mod text_review;
