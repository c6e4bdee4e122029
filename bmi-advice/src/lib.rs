mod client;
mod config;
mod gemini;

pub use client::*;
pub use config::GeminiConfig;
