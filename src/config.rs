use std::env;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://your-proxy-url.vercel.app/api/gemini-generate-emoji";
pub const DEFAULT_WINDOW_SIZE: usize = 3;

#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub endpoint: Option<String>,
    pub window_size: Option<usize>,
    pub timeout_secs: Option<u64>,
    pub validator: ValidatorConfig,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            endpoint: None,
            window_size: None,
            timeout_secs: None,
            validator: ValidatorConfig::short_form(),
        }
    }
}

impl GenerationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let endpoint = env::var("GEMINI_PROXY_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());
        let window_size = env::var("EMOJIGEN_BATCH_WINDOW")
            .ok()
            .and_then(|s| s.parse().ok());
        let timeout_secs = env::var("EMOJIGEN_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok());
        let validator = match env::var("EMOJIGEN_VALIDATOR").ok().as_deref() {
            Some("long") => ValidatorConfig::long_form(),
            _ => ValidatorConfig::short_form(),
        };

        GenerationConfig {
            endpoint,
            window_size,
            timeout_secs,
            validator,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = Some(window_size);
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn with_validator(mut self, validator: ValidatorConfig) -> Self {
        self.validator = validator;
        self
    }

    pub fn endpoint_or_default(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn window_size_or_default(&self) -> usize {
        self.window_size.unwrap_or(DEFAULT_WINDOW_SIZE)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Length bounds and blocklist for prompt validation.
///
/// Blocklist entries are regular expressions matched case-insensitively.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatorConfig {
    pub min_length: usize,
    pub max_length: usize,
    pub blocklist: Vec<String>,
    pub suggestions: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self::short_form()
    }
}

impl ValidatorConfig {
    /// Strict single-request check: up to 200 characters, pattern blocklist.
    pub fn short_form() -> Self {
        ValidatorConfig {
            min_length: 1,
            max_length: 200,
            blocklist: [
                r"personal\s+data",
                r"private\s+information",
                "copyright",
                "trademark",
                "nsfw",
                "adult",
                "violence",
            ]
            .iter()
            .map(|p| p.to_string())
            .collect(),
            suggestions: false,
        }
    }

    /// Looser check: 3..=500 characters, word blocklist, with suggestions.
    pub fn long_form() -> Self {
        ValidatorConfig {
            min_length: 3,
            max_length: 500,
            blocklist: [
                "violence",
                "hate",
                "discrimination",
                "nsfw",
                "adult",
                "explicit",
                "gore",
                "harassment",
                "bullying",
            ]
            .iter()
            .map(|word| regex::escape(word))
            .collect(),
            suggestions: true,
        }
    }

    pub fn with_length_bounds(mut self, min_length: usize, max_length: usize) -> Self {
        self.min_length = min_length;
        self.max_length = max_length;
        self
    }

    pub fn with_blocklist<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blocklist = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_suggestions(mut self, enabled: bool) -> Self {
        self.suggestions = enabled;
        self
    }
}
