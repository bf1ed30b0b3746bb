//! Log level definitions

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Ordered severity marker.
///
/// Levels compare by rank only: two levels with the same rank are
/// interchangeable for gating and filtering even when their names differ.
///
/// # Example
///
/// ```
/// use logo::Level;
///
/// let critical = Level::new(100, "MOST_CRITICAL_EVER");
/// assert!(critical.gt(&Level::IMPORTANT));
/// assert!(Level::IMPORTANT.gte(&Level::new(20, "ALSO_IMPORTANT")));
/// ```
///
/// Serialized form: the built-in levels as their name (`"IMPORTANT"`), any
/// other level as `{"rank": 100, "name": "MOST_CRITICAL_EVER"}`. Both forms
/// are accepted when deserializing, names through [`FromStr`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "LevelRepr", try_from = "LevelRepr")]
pub struct Level {
    rank: u32,
    name: Cow<'static, str>,
}

impl Level {
    pub const VERBOSE: Level = Level::from_static(10, "VERBOSE");
    pub const IMPORTANT: Level = Level::from_static(20, "IMPORTANT");

    pub fn new(rank: u32, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            rank,
            name: name.into(),
        }
    }

    const fn from_static(rank: u32, name: &'static str) -> Self {
        Self {
            rank,
            name: Cow::Borrowed(name),
        }
    }

    #[inline]
    pub fn rank(&self) -> u32 {
        self.rank
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn gt(&self, other: &Level) -> bool {
        self.rank > other.rank
    }

    #[inline]
    pub fn gte(&self, other: &Level) -> bool {
        self.rank >= other.rank
    }

    /// Map a `LOG_LEVEL` style value to a level.
    ///
    /// Anything not recognised falls back to [`Level::VERBOSE`].
    pub fn from_env_value(value: &str) -> Self {
        value.trim().parse().unwrap_or(Level::VERBOSE)
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::VERBOSE
    }
}

impl PartialEq for Level {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Level {}

impl PartialOrd for Level {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Level {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl Hash for Level {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so width/alignment flags like {:<9} apply
        f.pad(&self.name)
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" | "debug" | "info" | "trace" => Ok(Level::VERBOSE),
            "critical" | "important" | "fatal" | "error" | "warning" | "err" | "warn" => {
                Ok(Level::IMPORTANT)
            }
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum LevelRepr {
    Name(String),
    Ranked { rank: u32, name: String },
}

impl From<Level> for LevelRepr {
    fn from(level: Level) -> Self {
        let builtin = [Level::VERBOSE, Level::IMPORTANT]
            .iter()
            .any(|known| known.rank == level.rank && known.name == level.name);

        if builtin {
            LevelRepr::Name(level.name.into_owned())
        } else {
            LevelRepr::Ranked {
                rank: level.rank,
                name: level.name.into_owned(),
            }
        }
    }
}

impl TryFrom<LevelRepr> for Level {
    type Error = String;

    fn try_from(repr: LevelRepr) -> Result<Self, Self::Error> {
        match repr {
            LevelRepr::Name(name) => name.parse(),
            LevelRepr::Ranked { rank, name } => Ok(Level::new(rank, name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gt() {
        assert!(Level::IMPORTANT.gt(&Level::VERBOSE));
        assert!(!Level::VERBOSE.gt(&Level::IMPORTANT));
        assert!(!Level::IMPORTANT.gt(&Level::IMPORTANT));
    }

    #[test]
    fn test_gte() {
        assert!(Level::IMPORTANT.gte(&Level::VERBOSE));
        assert!(Level::IMPORTANT.gte(&Level::IMPORTANT));
        assert!(!Level::VERBOSE.gte(&Level::IMPORTANT));
    }

    #[test]
    fn test_equal_rank_is_equivalent() {
        let alias = Level::new(20, "ALERT");
        assert!(alias.gte(&Level::IMPORTANT));
        assert!(Level::IMPORTANT.gte(&alias));
        assert_eq!(alias, Level::IMPORTANT);
        assert_eq!(alias.to_string(), "ALERT");
    }

    #[test]
    fn test_display_is_name() {
        assert_eq!(Level::VERBOSE.to_string(), "VERBOSE");
        assert_eq!(format!("{:<11}|", Level::IMPORTANT), "IMPORTANT  |");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("warn".parse::<Level>().unwrap(), Level::IMPORTANT);
        assert_eq!("CRITICAL".parse::<Level>().unwrap(), Level::IMPORTANT);
        assert_eq!("Verbose".parse::<Level>().unwrap(), Level::VERBOSE);
        assert!("loud".parse::<Level>().is_err());
    }

    #[test]
    fn test_from_env_value() {
        for value in ["critical", "important", "fatal", "error", "warning", "err", "warn"] {
            assert_eq!(Level::from_env_value(value), Level::IMPORTANT, "{}", value);
        }
        assert_eq!(Level::from_env_value(""), Level::VERBOSE);
        assert_eq!(Level::from_env_value("whatever"), Level::VERBOSE);
        assert_eq!(Level::from_env_value(" ERROR "), Level::IMPORTANT);
    }

    #[test]
    fn test_serde_uses_name() {
        let json = serde_json::to_string(&Level::IMPORTANT).unwrap();
        assert_eq!(json, "\"IMPORTANT\"");

        let level: Level = serde_json::from_str("\"verbose\"").unwrap();
        assert_eq!(level, Level::VERBOSE);
        assert!(serde_json::from_str::<Level>("\"nope\"").is_err());
    }

    #[test]
    fn test_serde_custom_level_round_trip() {
        let custom = Level::new(100, "MOST_CRITICAL_EVER");
        let json = serde_json::to_string(&custom).unwrap();
        assert_eq!(json, r#"{"rank":100,"name":"MOST_CRITICAL_EVER"}"#);

        let back: Level = serde_json::from_str(&json).unwrap();
        assert_eq!(back.rank(), 100);
        assert_eq!(back.name(), "MOST_CRITICAL_EVER");

        // Same rank as IMPORTANT but a different name keeps its own name
        let alias = Level::new(20, "ALERT");
        let back: Level = serde_json::from_str(&serde_json::to_string(&alias).unwrap()).unwrap();
        assert_eq!(back.name(), "ALERT");
    }
}
