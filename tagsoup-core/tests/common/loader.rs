//! Fixture loading from YAML files

use serde::Deserialize;
use std::path::Path;
use tagsoup_core::{Attribute, Event};

/// A single test case from a fixture file
#[derive(Debug, Clone, Deserialize)]
pub struct TestCase {
    pub id: String,
    pub desc: String,
    pub html: String,
    pub events: Vec<ExpectedEvent>,
}

/// Expected event - `[Kind, "payload"]` or `[StartTag, "name", [[attr, value], ...]]`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ExpectedEvent {
    /// Start tag with attributes
    WithAttrs(String, String, Vec<(String, String)>),
    /// Any event with a single payload; start tags here have no attributes
    WithContent(String, String),
}

impl ExpectedEvent {
    /// Build the event the tokenizer should produce.
    pub fn to_event(&self) -> Event {
        match self {
            ExpectedEvent::WithAttrs(kind, name, attrs) => {
                assert_eq!(kind, "StartTag", "only StartTag carries attributes");
                Event::StartTag {
                    name: name.clone(),
                    attrs: attrs.iter().map(|(n, v)| Attribute::new(n.as_str(), v.as_str())).collect(),
                }
            }
            ExpectedEvent::WithContent(kind, payload) => {
                let payload = payload.clone();
                match kind.as_str() {
                    "StartTag" => Event::StartTag { name: payload, attrs: vec![] },
                    "EndTag" => Event::EndTag { name: payload },
                    "Data" => Event::Data { text: payload },
                    "Comment" => Event::Comment { text: payload },
                    "Declaration" => Event::Declaration { text: payload },
                    other => panic!("unknown event kind in fixture: {}", other),
                }
            }
        }
    }
}

/// Load all test cases from a YAML fixture file
pub fn load_fixtures(path: &Path) -> Vec<TestCase> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read fixture file {:?}: {}", path, e));
    serde_yaml::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture file {:?}: {}", path, e))
}

/// Load fixtures from the standard fixtures directory
pub fn load_fixtures_by_name(name: &str) -> Vec<TestCase> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(format!("{}.yaml", name));
    load_fixtures(&path)
}
