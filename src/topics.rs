//! Interest-label to emoji classification.
//!
//! Rules are checked top to bottom against the lower-cased label and the
//! first rule with a matching keyword wins. Keywords overlap ("art" is in
//! "party", "ai" is in "mountain"), so the table order is part of the
//! behavior: the specific sports come before the generic `sport`, travel
//! before `aviation`, the creative rules before the short `ai`.

/// Emoji used when no rule matches.
pub const FALLBACK_EMOJI: &str = "🏷️";

/// Ordered (keywords, emoji) rules.
const RULES: &[(&[&str], &str)] = &[
    // Sports
    (&["basketball"], "🏀"),
    (&["cricket"], "🏏"),
    (&["football", "soccer"], "⚽"),
    (&["tennis"], "🎾"),
    (&["baseball"], "⚾"),
    (&["sport", "fitness", "gym"], "💪"),
    (&["boxing", "combat", "mma"], "🥊"),
    (&["swimming"], "🏊"),
    (&["running", "marathon"], "🏃"),
    // Food & drink
    (&["food", "cuisine", "recipe", "cooking"], "🍕"),
    (&["coffee", "café"], "☕"),
    (&["wine", "cocktail", "beer"], "🍷"),
    (&["dessert", "cake", "sweet"], "🍰"),
    (&["vegan", "vegetarian", "healthy eating"], "🥗"),
    // Travel & places
    (&["travel", "vacation", "tourism"], "✈️"),
    (&["aviation", "airline"], "✈️"),
    (&["asia", "destination"], "🌏"),
    (&["beach", "ocean"], "🏖️"),
    (&["mountain", "hiking"], "⛰️"),
    (&["city", "urban"], "🏙️"),
    // Entertainment
    (&["video game", "gaming", "esports"], "🎮"),
    (&["movie", "film", "cinema"], "🎬"),
    (&["tv", "television", "series"], "📺"),
    (&["bollywood", "hollywood"], "🎬"),
    (&["anime", "manga"], "🎌"),
    (&["music", "concert", "band"], "🎵"),
    (&["comedy", "standup"], "😂"),
    // Creative & arts
    (&["fashion", "clothing", "style"], "👗"),
    (&["art", "paint", "draw"], "🎨"),
    (&["photography", "photo"], "📷"),
    (&["design", "graphic"], "🎨"),
    (&["writing", "literature", "poetry"], "✍️"),
    (&["dance", "ballet"], "💃"),
    // Technology
    (&["technology", "tech", "gadget"], "💻"),
    (&["coding", "programming", "software"], "👨‍💻"),
    (&["ai", "artificial intelligence", "machine learning"], "🤖"),
    (&["crypto", "blockchain"], "₿"),
    // Lifestyle
    (&["pet", "dog", "cat"], "🐾"),
    (&["car", "automotive"], "🚗"),
    (&["motorcycle", "bike"], "🏍️"),
    (&["home", "interior", "decor"], "🏠"),
    (&["garden", "plant"], "🌱"),
    // Education & career
    (&["business", "entrepreneur"], "💼"),
    (&["finance", "invest"], "💰"),
    (&["science", "research"], "🔬"),
    (&["education", "learning"], "📚"),
    // Health & wellness
    (&["yoga", "meditation"], "🧘"),
    (&["wellness", "mental health"], "💚"),
];

/// Representative emoji for an interest label.
pub fn classify(label: &str) -> &'static str {
    let label = label.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| label.contains(k)))
        .map_or(FALLBACK_EMOJI, |(_, emoji)| emoji)
}
