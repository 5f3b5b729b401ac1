// Quality checks for the optimized prompt shipped in prompts/.
//
// Mirrors what the publish gate enforces plus the advisory heuristics, so a
// regression in the YAML shows up in `cargo test` before anyone tries a push.

use promptops_prompt::{assess_quality, build_template, load_record, validate, PromptRecord, Role};
use std::path::PathBuf;

const PROMPT_KEY: &str = "bug_to_user_story_v2";

fn prompt_file() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../prompts")
        .join(format!("{PROMPT_KEY}.yml"))
}

fn load() -> PromptRecord {
    load_record(&prompt_file(), PROMPT_KEY).expect("Failed to load optimized prompt")
}

#[test]
fn test_prompt_has_system_prompt() {
    let record = load();
    assert!(record.system_prompt.is_some(), "'system_prompt' key missing");
    assert!(!record.system_text().trim().is_empty(), "'system_prompt' is empty");
}

#[test]
fn test_prompt_has_role_definition() {
    assert!(
        assess_quality(&load()).has_role_definition,
        "system_prompt should declare an explicit persona"
    );
}

#[test]
fn test_prompt_mentions_format() {
    assert!(
        assess_quality(&load()).mentions_format,
        "system_prompt should mention the expected format"
    );
}

#[test]
fn test_prompt_has_few_shot_examples() {
    let report = assess_quality(&load());
    assert!(
        report.has_few_shot_examples(),
        "expected few-shot indicators, found: {:?}",
        report.few_shot_indicators
    );
}

#[test]
fn test_prompt_no_todos() {
    let record = load();
    let full_text = format!("{}{}", record.system_text(), record.user_text());
    assert!(!full_text.contains("[TODO]"));
    assert!(!full_text.contains("TODO"));
}

#[test]
fn test_minimum_techniques() {
    let record = load();
    assert!(
        record.techniques_applied.len() >= 2,
        "found {} techniques",
        record.techniques_applied.len()
    );
}

#[test]
fn test_passes_publish_gate() {
    let report = validate(&load());
    assert!(report.is_valid(), "gate errors: {:?}", report.errors);
}

#[test]
fn test_template_ends_with_bug_report_slot() {
    let record = load();
    let template = build_template(&record);

    assert_eq!(template.messages.len(), 2 + record.few_shot_examples.len() * 2);
    let last = template.messages.last().unwrap();
    assert_eq!(last.role, Role::Human);
    assert_eq!(template.input_variables(), vec!["bug_report".to_string()]);
}
