//! Prompt enhancement.
//!
//! Turns a user prompt into the final text handed to the generation proxy by
//! prefixing style and category phrasing and appending fixed image
//! constraints. Everything here is a pure table lookup.

use crate::models::GenerationRequest;

const FALLBACK_CATEGORY_PHRASE: &str = "emoji design";

const STYLE_PHRASES: [(&str, &str); 5] = [
    (
        "cartoon",
        "cartoon style, vibrant colors, simple shapes, friendly expression",
    ),
    (
        "realistic",
        "realistic style, detailed textures, natural lighting, photographic quality",
    ),
    (
        "pixel",
        "pixel art style, 8-bit aesthetic, retro gaming look, sharp edges",
    ),
    (
        "anime",
        "anime style, Japanese animation aesthetic, expressive eyes, clean lines",
    ),
    (
        "minimalist",
        "minimalist style, simple geometric shapes, clean design, limited colors",
    ),
];

const CATEGORY_PHRASES: [(&str, &str); 9] = [
    ("face", "emoji face, expressive emotion"),
    ("smiley", "emoji face, expressive emotion"),
    ("animal", "cute animal, friendly expression"),
    ("food", "delicious food item, appetizing appearance"),
    ("nature", "natural element, organic shapes"),
    ("activity", "action or activity, dynamic pose"),
    ("object", "everyday object, clear silhouette"),
    ("symbol", "symbolic representation, universal meaning"),
    ("flag", "flag design, national colors"),
];

const REQUIREMENTS: &str = "Requirements:
- Square format, suitable for emoji use
- Clear and recognizable at small sizes
- Transparent or solid background
- High quality, professional design
- Appropriate for all ages
- No text or words in the image";

/// Style phrase for `style`; unknown styles get the cartoon phrase.
pub fn style_phrase(style: &str) -> &'static str {
    let style = style.trim();
    STYLE_PHRASES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(style))
        .unwrap_or(&STYLE_PHRASES[0])
        .1
}

/// Category phrase for `category`; unknown categories get a generic phrase.
pub fn category_phrase(category: &str) -> &'static str {
    let category = category.trim();
    CATEGORY_PHRASES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(category))
        .map(|(_, phrase)| *phrase)
        .unwrap_or(FALLBACK_CATEGORY_PHRASE)
}

pub fn enhance(request: &GenerationRequest) -> String {
    format!(
        "Create a {} emoji in {}.\nThe emoji should be: {}\n\n{}",
        category_phrase(request.category()),
        style_phrase(request.style().as_str()),
        request.prompt().trim(),
        REQUIREMENTS
    )
}
