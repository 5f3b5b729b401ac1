//! Role-tagged chat templates and their hub manifest form.
//!
//! The hub stores chat prompts as LangChain serialized objects: a
//! `ChatPromptTemplate` constructor whose `messages` are message prompt
//! template constructors, each wrapping an f-string `PromptTemplate`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeSet;

/// Speaker of a message in a chat template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    Human,
    Ai,
}

impl Role {
    /// LangChain message prompt class for this role.
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::System => "SystemMessagePromptTemplate",
            Self::Human => "HumanMessagePromptTemplate",
            Self::Ai => "AIMessagePromptTemplate",
        }
    }

    /// Map a LangChain class name back to a role.
    pub fn from_class_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        if lower.contains("system") {
            Some(Self::System)
        } else if lower.contains("human") {
            Some(Self::Human)
        } else if lower.starts_with("ai") {
            Some(Self::Ai)
        } else {
            None
        }
    }
}

/// One message of a chat template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateMessage {
    pub role: Role,
    pub template: String,
}

/// Ordered sequence of role-tagged message templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTemplate {
    pub messages: Vec<TemplateMessage>,
}

/// Shape shared by every LangChain serialized constructor.
#[derive(Debug, Deserialize)]
struct LcConstructor {
    #[serde(default)]
    id: Vec<String>,
    #[serde(default)]
    kwargs: serde_json::Map<String, Value>,
}

impl ChatTemplate {
    /// Build a template from `(role, text)` pairs, keeping their order.
    pub fn from_messages<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = (Role, S)>,
        S: Into<String>,
    {
        Self {
            messages: messages
                .into_iter()
                .map(|(role, text)| TemplateMessage {
                    role,
                    template: text.into(),
                })
                .collect(),
        }
    }

    /// Placeholders referenced by any message, sorted and de-duplicated.
    pub fn input_variables(&self) -> Vec<String> {
        let mut vars = BTreeSet::new();
        for message in &self.messages {
            vars.extend(fstring_variables(&message.template));
        }
        vars.into_iter().collect()
    }

    /// Serialize into the hub manifest (LangChain constructor JSON).
    pub fn to_manifest(&self) -> Value {
        let messages: Vec<Value> = self
            .messages
            .iter()
            .map(|message| {
                json!({
                    "lc": 1,
                    "type": "constructor",
                    "id": ["langchain", "prompts", "chat", message.role.class_name()],
                    "kwargs": {
                        "prompt": {
                            "lc": 1,
                            "type": "constructor",
                            "id": ["langchain", "prompts", "prompt", "PromptTemplate"],
                            "kwargs": {
                                "input_variables": fstring_variables(&message.template),
                                "template": message.template,
                                "template_format": "f-string",
                            }
                        }
                    }
                })
            })
            .collect();

        json!({
            "lc": 1,
            "type": "constructor",
            "id": ["langchain", "prompts", "chat", "ChatPromptTemplate"],
            "kwargs": {
                "input_variables": self.input_variables(),
                "messages": messages,
            }
        })
    }

    /// Read role-tagged messages out of a hub manifest.
    ///
    /// Messages with an unknown class or without a `prompt.template` (such as
    /// message placeholders) are skipped. A manifest that is not a chat
    /// template yields an empty template.
    pub fn from_manifest(manifest: &Value) -> Self {
        let Some(raw_messages) = manifest
            .get("kwargs")
            .and_then(|kwargs| kwargs.get("messages"))
            .and_then(Value::as_array)
        else {
            tracing::debug!("Manifest has no chat messages");
            return Self::default();
        };

        let messages = raw_messages
            .iter()
            .filter_map(|raw| {
                let constructor: LcConstructor = serde_json::from_value(raw.clone()).ok()?;
                let role = constructor.id.last().and_then(|c| Role::from_class_name(c));
                let template = constructor
                    .kwargs
                    .get("prompt")
                    .and_then(|prompt| prompt.get("kwargs"))
                    .and_then(|kwargs| kwargs.get("template"))
                    .and_then(Value::as_str);

                match (role, template) {
                    (Some(role), Some(template)) => Some(TemplateMessage {
                        role,
                        template: template.to_string(),
                    }),
                    _ => {
                        tracing::debug!("Skipping manifest message: {:?}", constructor.id);
                        None
                    }
                }
            })
            .collect();

        Self { messages }
    }
}

/// Extract `{name}` placeholders from an f-string template.
///
/// Doubled braces are literal. Format specs and conversions (`{x:>4}`,
/// `{x!r}`) contribute only the variable name.
pub fn fstring_variables(template: &str) -> Vec<String> {
    let mut vars = BTreeSet::new();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
            }
            '{' => {
                let mut field = String::new();
                for next in chars.by_ref() {
                    if next == '}' {
                        break;
                    }
                    field.push(next);
                }
                let name = field
                    .split(['!', ':'])
                    .next()
                    .unwrap_or("")
                    .trim();
                if !name.is_empty() {
                    vars.insert(name.to_string());
                }
            }
            _ => {}
        }
    }

    vars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_class_names_round_trip() {
        for role in [Role::System, Role::Human, Role::Ai] {
            assert_eq!(Role::from_class_name(role.class_name()), Some(role));
        }
        assert_eq!(Role::from_class_name("SystemMessage"), Some(Role::System));
        assert_eq!(Role::from_class_name("MessagesPlaceholder"), None);
    }

    #[test]
    fn test_fstring_variables() {
        assert_eq!(fstring_variables("Bug: {bug_report}"), vec!["bug_report"]);
        assert_eq!(
            fstring_variables("{b} {a} {b} {{literal}} {c!r} {d:>4}"),
            vec!["a", "b", "c", "d"]
        );
        assert!(fstring_variables("JSON like {{\"a\": 1}}").is_empty());
    }

    #[test]
    fn test_manifest_structure() {
        let template = ChatTemplate::from_messages([
            (Role::System, "You are a PM."),
            (Role::Human, "Bug: login fails"),
            (Role::Ai, "As a user..."),
            (Role::Human, "{bug_report}"),
        ]);

        let manifest = template.to_manifest();
        assert_eq!(manifest["id"][3], "ChatPromptTemplate");
        assert_eq!(manifest["kwargs"]["input_variables"], json!(["bug_report"]));

        let messages = manifest["kwargs"]["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[2]["id"][3], "AIMessagePromptTemplate");
        assert_eq!(
            messages[3]["kwargs"]["prompt"]["kwargs"]["template"],
            "{bug_report}"
        );
        assert_eq!(
            messages[3]["kwargs"]["prompt"]["kwargs"]["template_format"],
            "f-string"
        );
    }

    #[test]
    fn test_from_manifest_reads_what_to_manifest_writes() {
        let template = ChatTemplate::from_messages([
            (Role::System, "You are a PM."),
            (Role::Human, "{bug_report}"),
        ]);
        assert_eq!(ChatTemplate::from_manifest(&template.to_manifest()), template);
    }

    #[test]
    fn test_from_manifest_skips_placeholders() {
        let manifest = json!({
            "lc": 1,
            "type": "constructor",
            "id": ["langchain", "prompts", "chat", "ChatPromptTemplate"],
            "kwargs": {
                "messages": [
                    {
                        "lc": 1,
                        "type": "constructor",
                        "id": ["langchain", "prompts", "chat", "MessagesPlaceholder"],
                        "kwargs": {"variable_name": "history"}
                    },
                    {
                        "lc": 1,
                        "type": "constructor",
                        "id": ["langchain", "prompts", "chat", "HumanMessagePromptTemplate"],
                        "kwargs": {"prompt": {"kwargs": {"template": "{question}"}}}
                    }
                ]
            }
        });

        let template = ChatTemplate::from_manifest(&manifest);
        assert_eq!(template.messages.len(), 1);
        assert_eq!(template.messages[0].role, Role::Human);
    }

    #[test]
    fn test_from_manifest_non_chat_is_empty() {
        let manifest = json!({
            "id": ["langchain", "prompts", "prompt", "PromptTemplate"],
            "kwargs": {"template": "Summarize {text}"}
        });
        assert!(ChatTemplate::from_manifest(&manifest).messages.is_empty());
    }
}
