//! Check workflow.
//!
//! Runs the publish gate and the advisory quality heuristics against the
//! local prompt without contacting the hub.

use crate::output::section_header;
use promptops_core::{AppConfig, AppError, AppResult};
use promptops_prompt::{assess_quality, load_record, validate, QualityReport};
use std::path::PathBuf;

use super::push::{DEFAULT_INPUT, DEFAULT_RECORD_KEY};

/// Validate the optimized prompt locally.
#[derive(Debug, Clone)]
pub struct CheckCommand {
    /// Input file, relative to the workspace
    pub input: PathBuf,
    pub record_key: String,
}

impl Default for CheckCommand {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            record_key: DEFAULT_RECORD_KEY.to_string(),
        }
    }
}

impl CheckCommand {
    /// Execute the check workflow.
    ///
    /// Fails only when the publish gate fails; quality findings are printed
    /// as warnings.
    pub fn execute(&self, config: &AppConfig) -> AppResult<QualityReport> {
        section_header("CHECK OPTIMIZED PROMPT");

        println!("Loading prompt from: {}", self.input.display());
        let record = load_record(&config.resolve(&self.input), &self.record_key)?;

        let quality = assess_quality(&record);
        let warnings = quality.warnings();
        if warnings.is_empty() {
            println!("✓ Quality heuristics: persona, format and few-shot examples found");
        } else {
            println!("Quality warnings (advisory):");
            for warning in &warnings {
                tracing::warn!("{}", warning);
                println!("   ⚠️  {}", warning);
            }
        }

        let report = validate(&record);
        if !report.is_valid() {
            return Err(AppError::Validation(report.errors));
        }
        println!("✓ Publish gate passed");

        Ok(quality)
    }
}
