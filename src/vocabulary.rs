use serde::{Deserialize, Serialize};

use crate::models::{LanguageMap, Verb, VerbDescriptor};

/// Verb identifiers and result-extension keys used when building statements.
///
/// Defaults follow the ADL video profile; every entry can be overridden from
/// the tracker configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Vocabulary {
    pub language: String,
    pub initialized: String,
    pub played: String,
    pub paused: String,
    pub seeked: String,
    pub completed: String,
    pub terminated: String,
    pub abandoned: String,
    pub resumed_extension: String,
    pub paused_extension: String,
    pub seeked_extension: String,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            language: "en-US".into(),
            initialized: "http://adlnet.gov/expapi/verbs/initialized".into(),
            played: "https://w3id.org/xapi/video/verbs/played".into(),
            paused: "https://w3id.org/xapi/video/verbs/paused".into(),
            seeked: "https://w3id.org/xapi/video/verbs/seeked".into(),
            completed: "http://adlnet.gov/expapi/verbs/completed".into(),
            terminated: "http://adlnet.gov/expapi/verbs/terminated".into(),
            abandoned: "https://w3id.org/xapi/adl/verbs/abandoned".into(),
            resumed_extension: "resultExt:resumed".into(),
            paused_extension: "resultExt:paused".into(),
            seeked_extension: "resultExt:seeked".into(),
        }
    }
}

impl Vocabulary {
    pub fn verb_id(&self, verb: Verb) -> &str {
        match verb {
            Verb::Initialized => &self.initialized,
            Verb::Played => &self.played,
            Verb::Paused => &self.paused,
            Verb::Seeked => &self.seeked,
            Verb::Completed => &self.completed,
            Verb::Terminated => &self.terminated,
            Verb::Abandoned => &self.abandoned,
        }
    }

    pub fn descriptor(&self, verb: Verb) -> VerbDescriptor {
        VerbDescriptor {
            id: self.verb_id(verb).to_string(),
            display: LanguageMap::from([(self.language.clone(), verb.as_str().to_string())]),
        }
    }

    /// Result-extension key carrying the playback time, for verbs that have one.
    pub fn extension_key(&self, verb: Verb) -> Option<&str> {
        match verb {
            Verb::Played => Some(&self.resumed_extension),
            Verb::Paused => Some(&self.paused_extension),
            Verb::Seeked => Some(&self.seeked_extension),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_verb_has_a_distinct_id() {
        let vocabulary = Vocabulary::default();
        let ids: std::collections::HashSet<&str> = [
            Verb::Initialized,
            Verb::Played,
            Verb::Paused,
            Verb::Seeked,
            Verb::Completed,
            Verb::Terminated,
            Verb::Abandoned,
        ]
        .into_iter()
        .map(|verb| vocabulary.verb_id(verb))
        .collect();
        assert_eq!(ids.len(), 7);
    }

    #[test]
    fn descriptor_uses_configured_language() {
        let vocabulary = Vocabulary {
            language: "en-GB".into(),
            ..Vocabulary::default()
        };
        let descriptor = vocabulary.descriptor(Verb::Seeked);

        assert_eq!(descriptor.id, "https://w3id.org/xapi/video/verbs/seeked");
        assert_eq!(descriptor.display.get("en-GB").map(String::as_str), Some("seeked"));
        assert!(descriptor.display.get("en-US").is_none());
    }

    #[test]
    fn only_timed_verbs_carry_extensions() {
        let vocabulary = Vocabulary::default();
        assert_eq!(vocabulary.extension_key(Verb::Played), Some("resultExt:resumed"));
        assert_eq!(vocabulary.extension_key(Verb::Paused), Some("resultExt:paused"));
        assert_eq!(vocabulary.extension_key(Verb::Seeked), Some("resultExt:seeked"));
        assert_eq!(vocabulary.extension_key(Verb::Completed), None);
        assert_eq!(vocabulary.extension_key(Verb::Abandoned), None);
    }

    #[test]
    fn partial_overrides_keep_defaults() {
        let vocabulary: Vocabulary =
            serde_json::from_str(r#"{ "played": "urn:custom:played" }"#).unwrap();
        assert_eq!(vocabulary.verb_id(Verb::Played), "urn:custom:played");
        assert_eq!(vocabulary.verb_id(Verb::Paused), Vocabulary::default().paused);
    }
}
