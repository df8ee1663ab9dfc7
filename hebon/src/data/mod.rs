//! Romanization tables.
pub mod kana;
