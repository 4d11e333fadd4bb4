use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use uuid::Uuid;

use super::duration::IsoDuration;

/// Language tag -> label, as used by verb display maps.
pub type LanguageMap = BTreeMap<String, String>;

/// Identity of the viewer. Opaque to the tracker and copied verbatim onto
/// every statement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Actor(pub Value);

impl Default for Actor {
    fn default() -> Self {
        Self(json!({ "mbox": "mailto:anon@example.com", "name": "anonymous" }))
    }
}

/// Activity descriptor of the tracked video. Opaque, copied verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Activity(pub Value);

impl Default for Activity {
    fn default() -> Self {
        Self(Value::Object(Map::new()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerbDescriptor {
    pub id: String,
    pub display: LanguageMap,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatementResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<IsoDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion: Option<bool>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extensions: BTreeMap<String, IsoDuration>,
}

impl StatementResult {
    /// Final duration plus `completion: true`.
    pub fn completion(duration: IsoDuration) -> Self {
        Self {
            duration: Some(duration),
            completion: Some(true),
            extensions: BTreeMap::new(),
        }
    }

    /// Single result extension carrying the playback time of the event.
    pub fn extension(key: impl Into<String>, time: IsoDuration) -> Self {
        let mut extensions = BTreeMap::new();
        extensions.insert(key.into(), time);
        Self {
            duration: None,
            completion: None,
            extensions,
        }
    }
}

/// One experience statement: actor, verb, object and an optional result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Statement {
    pub id: Uuid,
    pub actor: Actor,
    pub verb: VerbDescriptor,
    pub object: Activity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<StatementResult>,
    pub timestamp: DateTime<Utc>,
}

impl Statement {
    pub fn new(
        actor: Actor,
        verb: VerbDescriptor,
        object: Activity,
        result: Option<StatementResult>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            actor,
            verb,
            object,
            result,
            timestamp: Utc::now(),
        }
    }

    /// Display label for the given language tag, if present.
    pub fn verb_label(&self, language: &str) -> Option<&str> {
        self.verb.display.get(language).map(String::as_str)
    }

    /// Looks up a result extension by key.
    pub fn extension(&self, key: &str) -> Option<&IsoDuration> {
        self.result.as_ref()?.extensions.get(key)
    }
}
