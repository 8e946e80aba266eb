//! Generative-text market pricing: Gemini client and prompt handling.

pub mod client;
pub mod prompt;

pub use client::{GeminiClient, TextGenerator};
