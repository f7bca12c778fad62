//! Spellbound Library
//!
//! Core modules for the Spellbound spelling-practice game.

pub mod compare;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod tts;
pub mod words;
