//! Advisory content-quality heuristics.
//!
//! These signals never block publishing. They flag prompts that skip common
//! prompt-engineering practice: an explicit persona, output format guidance
//! and few-shot demonstrations.

use crate::types::PromptRecord;

/// Phrases that declare a persona.
pub const ROLE_KEYWORDS: &[&str] = &[
    "você é",
    "voce é",
    "você é um",
    "you are",
    "product manager",
    "persona",
];

/// User-story, Gherkin and Markdown vocabulary.
pub const FORMAT_KEYWORDS: &[&str] = &[
    "markdown",
    "user story",
    "como ",
    "eu quero",
    "para que",
    "critérios de aceitação",
    "criterios de aceitacao",
    "dado que",
    "quando ",
    "então",
    "entao",
];

/// Markers that suggest worked input/output examples.
pub const FEW_SHOT_INDICATORS: &[&str] = &[
    "exemplo",
    "example",
    "relato de bug:",
    "user story:",
    "critérios de aceitação:",
    "dado que estou",
    "como um",
];

/// Distinct few-shot indicators needed before few-shot usage counts as present.
pub const MIN_FEW_SHOT_INDICATORS: usize = 2;

/// Result of the advisory checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityReport {
    pub has_role_definition: bool,
    pub mentions_format: bool,
    /// Few-shot indicators found, in declaration order
    pub few_shot_indicators: Vec<&'static str>,
}

impl QualityReport {
    pub fn has_few_shot_examples(&self) -> bool {
        self.few_shot_indicators.len() >= MIN_FEW_SHOT_INDICATORS
    }

    /// Human-readable findings for every failed heuristic.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if !self.has_role_definition {
            warnings.push(
                "system_prompt should declare an explicit persona (e.g. 'You are a Product Manager')"
                    .to_string(),
            );
        }

        if !self.mentions_format {
            warnings.push(
                "system_prompt should describe the expected format (Markdown, User Story, Gherkin)"
                    .to_string(),
            );
        }

        if !self.has_few_shot_examples() {
            warnings.push(format!(
                "prompt should include few-shot examples (in system_prompt or few_shot_examples); found: {:?}",
                self.few_shot_indicators
            ));
        }

        warnings
    }
}

/// Run the advisory heuristics over a record.
pub fn assess_quality(record: &PromptRecord) -> QualityReport {
    let system_lower = record.system_text().to_lowercase();

    let has_role_definition = ROLE_KEYWORDS.iter().any(|kw| system_lower.contains(kw));
    let mentions_format = FORMAT_KEYWORDS.iter().any(|kw| system_lower.contains(kw));

    let mut search_text = system_lower;
    for example in &record.few_shot_examples {
        search_text.push_str(&example.input.to_lowercase());
        search_text.push_str(&example.output.to_lowercase());
    }

    let few_shot_indicators = FEW_SHOT_INDICATORS
        .iter()
        .copied()
        .filter(|kw| search_text.contains(kw))
        .collect();

    QualityReport {
        has_role_definition,
        mentions_format,
        few_shot_indicators,
    }
}
