//! Prompt records for the promptops workflows.
//!
//! This crate provides:
//! - YAML-backed prompt records
//! - The publish validation gate
//! - Advisory quality heuristics
//! - Role-tagged chat templates and their hub manifest form

pub mod builder;
pub mod loader;
pub mod quality;
pub mod template;
pub mod types;
pub mod validation;

// Re-export main types
pub use builder::{build_template, extract_prompts, ExtractedPrompts};
pub use loader::{load_record, load_records, save_records};
pub use quality::{assess_quality, QualityReport};
pub use template::{ChatTemplate, Role, TemplateMessage};
pub use types::{FewShotExample, PromptFile, PromptRecord, DEFAULT_USER_PROMPT};
pub use validation::{validate, ValidationReport, MIN_TECHNIQUES};
