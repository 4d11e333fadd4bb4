use serde::{Deserialize, Serialize};

/// Closed set of actions a video statement can describe.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Verb {
    Initialized,
    Played,
    Paused,
    Seeked,
    Completed,
    Terminated,
    Abandoned,
}

impl Verb {
    /// Display label, also used as the default `en-US` entry of the verb's display map.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Initialized => "initialized",
            Verb::Played => "played",
            Verb::Paused => "paused",
            Verb::Seeked => "seeked",
            Verb::Completed => "completed",
            Verb::Terminated => "terminated",
            Verb::Abandoned => "abandoned",
        }
    }
}
