//! Publish gate for prompt records.
//!
//! Every check runs regardless of the others; the record passes only when
//! no check reports an error.

use crate::types::PromptRecord;

/// Minimum number of entries in `techniques_applied`.
pub const MIN_TECHNIQUES: usize = 2;

/// Outcome of running the publish gate over a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Split into the `(ok, errors)` pair.
    pub fn into_parts(self) -> (bool, Vec<String>) {
        (self.is_valid(), self.errors)
    }
}

/// Run the publish gate over a record.
///
/// Checks, in order:
/// 1. `description`, `system_prompt` and `version` keys are present
/// 2. `system_prompt` is not blank
/// 3. system + user prompt text holds no `[TODO]` or `TODO` marker
/// 4. at least [`MIN_TECHNIQUES`] techniques are listed
pub fn validate(record: &PromptRecord) -> ValidationReport {
    let mut errors = Vec::new();

    let required = [
        ("description", record.description.is_some()),
        ("system_prompt", record.system_prompt.is_some()),
        ("version", record.version.is_some()),
    ];
    for (field, present) in required {
        if !present {
            errors.push(format!("Missing required field: '{}'", field));
        }
    }

    let system_prompt = record.system_text().trim();
    if system_prompt.is_empty() {
        errors.push("'system_prompt' is empty".to_string());
    }

    // Case-sensitive on purpose; "[TODO]" is covered by "TODO" but both are checked
    let full_text = format!("{}{}", system_prompt, record.user_text());
    if full_text.contains("[TODO]") || full_text.contains("TODO") {
        errors.push("Prompt still contains TODO markers; remove them before pushing".to_string());
    }

    let techniques = record.techniques_applied.len();
    if techniques < MIN_TECHNIQUES {
        errors.push(format!(
            "At least {} techniques required in 'techniques_applied'; found: {}",
            MIN_TECHNIQUES, techniques
        ));
    }

    tracing::debug!("Validation finished with {} error(s)", errors.len());

    ValidationReport { errors }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_record() -> PromptRecord {
        PromptRecord {
            description: Some("x".to_string()),
            system_prompt: Some("You are a Product Manager. Example: ...".to_string()),
            version: Some("v1".to_string()),
            techniques_applied: vec!["role-prompting".to_string(), "few-shot".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_record_passes() {
        let (ok, errors) = validate(&valid_record()).into_parts();
        assert!(ok);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_empty_system_prompt_and_no_techniques() {
        let record = PromptRecord {
            system_prompt: Some(String::new()),
            techniques_applied: Vec::new(),
            ..valid_record()
        };

        let (ok, errors) = validate(&record).into_parts();
        assert!(!ok);
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e == "'system_prompt' is empty"));
        assert!(errors
            .iter()
            .any(|e| e.contains("'techniques_applied'") && e.ends_with("found: 0")));
        assert!(!errors.iter().any(|e| e.contains("Missing required field")));
    }

    #[test]
    fn test_one_error_per_missing_field() {
        let record = PromptRecord {
            techniques_applied: vec!["a".to_string(), "b".to_string()],
            ..Default::default()
        };

        let report = validate(&record);
        let missing: Vec<&String> = report
            .errors
            .iter()
            .filter(|e| e.starts_with("Missing required field"))
            .collect();
        assert_eq!(missing.len(), 3);
        assert!(missing.iter().any(|e| e.contains("'description'")));
        assert!(missing.iter().any(|e| e.contains("'system_prompt'")));
        assert!(missing.iter().any(|e| e.contains("'version'")));
        // An absent system prompt is also an empty one
        assert!(report.errors.contains(&"'system_prompt' is empty".to_string()));
    }

    #[test]
    fn test_null_required_keys_count_as_present() {
        let yaml = "description:\nsystem_prompt: You are a PM.\nversion: ~\ntechniques_applied: [a, b]\n";
        let record: PromptRecord = serde_yaml::from_str(yaml).unwrap();
        let (ok, errors) = validate(&record).into_parts();
        assert!(ok, "unexpected errors: {errors:?}");
    }

    #[test]
    fn test_null_system_prompt_is_present_but_empty() {
        let yaml = "description: x\nsystem_prompt: ~\nversion: v1\ntechniques_applied: [a, b]\n";
        let record: PromptRecord = serde_yaml::from_str(yaml).unwrap();
        let report = validate(&record);
        assert_eq!(report.errors, vec!["'system_prompt' is empty".to_string()]);
    }

    #[test]
    fn test_whitespace_system_prompt_is_empty() {
        let record = PromptRecord {
            system_prompt: Some(" \n\t ".to_string()),
            ..valid_record()
        };
        let report = validate(&record);
        assert_eq!(report.errors, vec!["'system_prompt' is empty".to_string()]);
    }

    #[test]
    fn test_todo_markers_rejected() {
        for (system, user) in [
            ("You are a PM. [TODO] add examples", "{bug_report}"),
            ("You are a PM.", "Bug: {bug_report} TODO"),
            ("TODOS os critérios", ""),
        ] {
            let record = PromptRecord {
                system_prompt: Some(system.to_string()),
                user_prompt: Some(user.to_string()),
                ..valid_record()
            };
            let report = validate(&record);
            assert!(!report.is_valid(), "expected rejection for {system:?} / {user:?}");
            assert_eq!(report.errors.len(), 1);
            assert!(report.errors[0].contains("TODO"));
        }
    }

    #[test]
    fn test_todo_check_is_case_sensitive() {
        let record = PromptRecord {
            system_prompt: Some("You are a PM. Review todo o relato.".to_string()),
            ..valid_record()
        };
        assert!(validate(&record).is_valid());
    }

    #[test]
    fn test_marker_split_across_prompts_is_caught() {
        let record = PromptRecord {
            system_prompt: Some("You are a PM. TO".to_string()),
            user_prompt: Some("DO".to_string()),
            ..valid_record()
        };
        assert!(!validate(&record).is_valid());
    }

    #[test]
    fn test_single_technique_cites_count() {
        let record = PromptRecord {
            techniques_applied: vec!["few-shot".to_string()],
            ..valid_record()
        };
        let report = validate(&record);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].ends_with("found: 1"));
    }
}
