//! Career report generation — profile + quiz in, structured report out.
//!
//! The generative backend is opaque and pluggable: LLM-backed when a Gemini
//! key is configured, deterministic otherwise, and always able to serve a
//! report.

pub mod fallback;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
