use std::{fmt, str::FromStr};

use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Maximum number of fractional digits kept when encoding a player time.
const FRACTION_DIGITS: usize = 2;

/// Elapsed playback time in ISO-8601 duration form, e.g. `PT12.34S`.
///
/// The textual form is what downstream record stores receive, so it is kept
/// verbatim rather than re-rendered from a float.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IsoDuration(String);

impl IsoDuration {
    /// Encode a player time (seconds) using its shortest decimal form,
    /// truncated (not rounded) to two fractional digits.
    ///
    /// Negative and non-finite inputs encode as `PT0S`.
    pub fn from_secs(secs: f64) -> Self {
        if !secs.is_finite() || secs <= 0.0 {
            return Self("PT0S".to_string());
        }

        let rendered = secs.to_string();
        let digits = match rendered.find('.') {
            Some(dot) => &rendered[..rendered.len().min(dot + 1 + FRACTION_DIGITS)],
            None => rendered.as_str(),
        };

        Self(format!("PT{digits}S"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric seconds carried by the encoded text.
    pub fn as_secs_f64(&self) -> f64 {
        // Constructors guarantee the `PT<decimal>S` shape.
        self.0[2..self.0.len() - 1].parse().unwrap_or_default()
    }
}

impl fmt::Display for IsoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for IsoDuration {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        let digits = value
            .strip_prefix("PT")
            .and_then(|rest| rest.strip_suffix('S'))
            .ok_or_else(|| anyhow!("'{value}' is not a PT<seconds>S duration"))?;

        let well_formed = !digits.is_empty()
            && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
            && digits.matches('.').count() <= 1
            && !digits.starts_with('.')
            && !digits.ends_with('.');
        if !well_formed {
            bail!("invalid seconds component '{digits}' in duration '{value}'");
        }

        digits
            .parse::<f64>()
            .map_err(|err| anyhow!("invalid seconds in duration '{value}': {err}"))?;

        Ok(Self(value.to_string()))
    }
}

impl Serialize for IsoDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for IsoDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
