use regex::{Regex, RegexBuilder};

use crate::{
    config::ValidatorConfig,
    error::{EmojiError, Result},
    models::{RejectReason, ValidationOutcome},
};

const MAX_SUGGESTIONS: usize = 2;

#[derive(Debug, Clone)]
pub struct PromptValidator {
    min_length: usize,
    max_length: usize,
    blocklist: Vec<Regex>,
    suggestions: bool,
}

impl PromptValidator {
    pub fn new(config: ValidatorConfig) -> Result<Self> {
        if config.max_length < config.min_length {
            return Err(EmojiError::Config(format!(
                "validator max length {} is below min length {}",
                config.max_length, config.min_length
            )));
        }

        let blocklist = config
            .blocklist
            .iter()
            .map(|pattern| {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| {
                        EmojiError::Config(format!("invalid blocklist pattern '{}': {}", pattern, e))
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            min_length: config.min_length,
            max_length: config.max_length,
            blocklist,
            suggestions: config.suggestions,
        })
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Checks emptiness, then length, then the blocklist. First failure wins.
    pub fn validate(&self, prompt: &str) -> ValidationOutcome {
        let trimmed = prompt.trim();
        if trimmed.is_empty() {
            return ValidationOutcome::rejected(RejectReason::Empty);
        }

        if trimmed.chars().count() < self.min_length {
            return ValidationOutcome::rejected(RejectReason::TooShort {
                min: self.min_length,
            });
        }

        if prompt.chars().count() > self.max_length {
            return ValidationOutcome::rejected(RejectReason::TooLong {
                max: self.max_length,
            });
        }

        if let Some(pattern) = self.blocklist.iter().find(|re| re.is_match(prompt)) {
            log::debug!("Prompt rejected by blocklist pattern '{}'", pattern.as_str());
            return ValidationOutcome::rejected(RejectReason::Inappropriate);
        }

        let suggestions = if self.suggestions {
            suggest_improvements(trimmed)
        } else {
            Vec::new()
        };

        ValidationOutcome::accepted(suggestions)
    }
}

fn suggest_improvements(prompt: &str) -> Vec<String> {
    let lower = prompt.to_lowercase();
    let mentions_any = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    let mut suggestions = Vec::new();
    if prompt.chars().count() < 20 {
        suggestions.push("Add more descriptive details");
    }
    if !mentions_any(&["color", "colour"]) {
        suggestions.push("Specify colors");
    }
    if !mentions_any(&["style", "look"]) {
        suggestions.push("Describe the artistic style");
    }
    if !mentions_any(&["expression", "emotion"]) {
        suggestions.push("Add emotional expression");
    }

    suggestions
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn short_form() -> PromptValidator {
        PromptValidator::new(ValidatorConfig::short_form()).unwrap()
    }

    fn long_form() -> PromptValidator {
        PromptValidator::new(ValidatorConfig::long_form()).unwrap()
    }

    #[test]
    fn test_empty_and_whitespace_prompts() {
        let validator = short_form();
        for prompt in ["", "   ", "\n\t "] {
            let outcome = validator.validate(prompt);
            assert!(!outcome.valid);
            assert_eq!(outcome.reason, Some(RejectReason::Empty));
            assert_eq!(outcome.reason.unwrap().to_string(), "empty");
        }
    }

    #[test]
    fn test_max_length() {
        let validator = short_form();
        assert!(validator.validate(&"a".repeat(200)).valid);

        let outcome = validator.validate(&"a".repeat(201));
        assert_eq!(outcome.reason, Some(RejectReason::TooLong { max: 200 }));
        assert_eq!(outcome.reason.unwrap().to_string(), "too long");
    }

    #[test]
    fn test_max_length_counts_characters_not_bytes() {
        let validator = short_form();
        assert!(validator.validate(&"é".repeat(200)).valid);
    }

    #[test]
    fn test_trailing_whitespace_counts_toward_max() {
        let validator = short_form();
        let prompt = format!("{}{}", "a".repeat(199), "   ");
        assert!(!validator.validate(&prompt).valid);
    }

    #[test]
    fn test_min_length_in_long_form() {
        let validator = long_form();
        let outcome = validator.validate("ab");
        assert_eq!(outcome.reason, Some(RejectReason::TooShort { min: 3 }));
        assert_eq!(outcome.reason.unwrap().to_string(), "too short");
        assert!(validator.validate(&"a".repeat(500)).valid);
        assert!(!validator.validate(&"a".repeat(501)).valid);
    }

    #[test]
    fn test_blocklist_is_case_insensitive() {
        let validator = short_form();
        for prompt in [
            "a cat holding PERSONAL   DATA",
            "Copyright logo",
            "nsfw cat",
            "Violence!",
        ] {
            let outcome = validator.validate(prompt);
            assert_eq!(outcome.reason, Some(RejectReason::Inappropriate), "{}", prompt);
        }
    }

    #[test]
    fn test_empty_wins_over_other_rules() {
        let validator = long_form();
        assert_eq!(validator.validate("  ").reason, Some(RejectReason::Empty));
    }

    #[test]
    fn test_clean_prompt_passes() {
        let outcome = short_form().validate("a cute cat");
        assert!(outcome.valid);
        assert!(outcome.reason.is_none());
        assert!(outcome.suggestions.is_empty());
    }

    #[test]
    fn test_long_form_suggestions() {
        let outcome = long_form().validate("a cute cat");
        assert!(outcome.valid);
        assert_eq!(
            outcome.suggestions,
            vec!["Add more descriptive details", "Specify colors"]
        );

        let outcome =
            long_form().validate("an orange colour fox in a watercolor look with a happy expression");
        assert!(outcome.suggestions.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let validator = long_form();
        assert_eq!(validator.validate("sleepy owl"), validator.validate("sleepy owl"));
    }

    #[test]
    fn test_invalid_pattern_is_config_error() {
        let config = ValidatorConfig::short_form().with_blocklist(["(unclosed"]);
        assert!(matches!(
            PromptValidator::new(config),
            Err(EmojiError::Config(_))
        ));
    }

    #[test]
    fn test_inverted_bounds_are_config_error() {
        let config = ValidatorConfig::short_form().with_length_bounds(10, 5);
        assert!(PromptValidator::new(config).is_err());
    }
}
