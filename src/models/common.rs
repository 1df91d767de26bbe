use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EmojiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmojiStyle {
    Cartoon,
    Realistic,
    Pixel,
    Anime,
    Minimalist,
}

impl EmojiStyle {
    pub const ALL: [EmojiStyle; 5] = [
        EmojiStyle::Cartoon,
        EmojiStyle::Realistic,
        EmojiStyle::Pixel,
        EmojiStyle::Anime,
        EmojiStyle::Minimalist,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmojiStyle::Cartoon => "cartoon",
            EmojiStyle::Realistic => "realistic",
            EmojiStyle::Pixel => "pixel",
            EmojiStyle::Anime => "anime",
            EmojiStyle::Minimalist => "minimalist",
        }
    }

    /// Parses a style name, falling back to `Cartoon` for anything unknown.
    pub fn from_name_lossy(name: &str) -> Self {
        name.parse().unwrap_or(EmojiStyle::Cartoon)
    }
}

impl fmt::Display for EmojiStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmojiStyle {
    type Err = EmojiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        EmojiStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == name)
            .ok_or_else(|| EmojiError::Config(format!("unknown emoji style '{}'", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmojiSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl EmojiSize {
    pub const ALL: [EmojiSize; 3] = [EmojiSize::Small, EmojiSize::Medium, EmojiSize::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmojiSize::Small => "small",
            EmojiSize::Medium => "medium",
            EmojiSize::Large => "large",
        }
    }
}

impl fmt::Display for EmojiSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmojiSize {
    type Err = EmojiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        EmojiSize::ALL
            .into_iter()
            .find(|size| size.as_str() == name)
            .ok_or_else(|| EmojiError::Config(format!("unknown emoji size '{}'", s)))
    }
}

/// Categories offered to users when picking what kind of emoji to generate.
pub const CATEGORIES: [&str; 9] = [
    "face", "animal", "food", "nature", "activity", "object", "symbol", "flag", "custom",
];

pub fn is_known_category(category: &str) -> bool {
    let category = category.trim();
    CATEGORIES
        .iter()
        .any(|known| known.eq_ignore_ascii_case(category))
}

pub const ANONYMOUS_CALLER: &str = "anonymous";

/// Opaque caller id forwarded to the generation proxy for its own accounting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallerIdentity(String);

impl CallerIdentity {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn anonymous() -> Self {
        Self(ANONYMOUS_CALLER.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_anonymous(&self) -> bool {
        self.0 == ANONYMOUS_CALLER
    }
}

impl Default for CallerIdentity {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl fmt::Display for CallerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CallerIdentity {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CallerIdentity {
    fn from(id: String) -> Self {
        Self(id)
    }
}
