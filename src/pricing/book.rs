//! JSON price book (`llm-prices.json` schema) and per-model cost lookup.
//!
//! The book maps model names to a blended USD-per-1M-token rate,
//! `(input_price + output_price) / 2`. Lookup resolves leaderboard-style
//! display names ("Claude 4 Opus Thinking", "o3 High") against the book's
//! plain names:
//!
//! 1. exact match (case-insensitive)
//! 2. match after stripping parenthesized suffixes and variant tokens
//! 3. longest book name contained in the normalized candidate name
//!
//! Variant multipliers:
//!
//! - a `thinking` token anywhere in the name: x2 (CoT multiplier)
//! - a `high` reasoning-effort token: x2 relative to medium

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::AppError;

/// Cost multiplier applied to thinking/CoT model variants.
const THINKING_MULTIPLIER: f64 = 2.0;

/// Cost multiplier applied to "high" reasoning-effort variants.
const HIGH_EFFORT_MULTIPLIER: f64 = 2.0;

#[derive(Debug, Deserialize)]
struct PriceBookFile {
    models: Vec<ProviderEntry>,
}

/// One provider block; the `provider` key itself is not needed for lookup.
#[derive(Debug, Deserialize)]
struct ProviderEntry {
    models: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    name: String,
    /// USD per 1M input tokens.
    input_price: f64,
    /// USD per 1M output tokens.
    output_price: f64,
}

/// A resolved price for one candidate name.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    /// The book entry the name resolved to.
    pub matched: String,
    /// Blended base rate, USD per 1M tokens.
    pub base: f64,
    /// Combined variant multiplier (1.0 when no variant tokens matched).
    pub multiplier: f64,
}

impl PriceQuote {
    /// Final cost: base rate with variant multipliers applied.
    pub fn cost(&self) -> f64 {
        self.base * self.multiplier
    }
}

/// Name -> blended base rate mapping loaded from a price book JSON.
#[derive(Debug, Clone)]
pub struct PriceBook {
    /// Keyed by lowercased book name; value keeps the original name + rate.
    entries: HashMap<String, (String, f64)>,
}

impl PriceBook {
    /// Parse a price book from JSON text.
    pub fn parse(json: &str) -> Result<Self, AppError> {
        let file: PriceBookFile = serde_json::from_str(json)
            .map_err(|e| AppError::usage(format!("Invalid price book JSON: {e}")))?;

        let mut entries = HashMap::new();
        for provider in file.models {
            for model in provider.models {
                if !(model.input_price.is_finite() && model.output_price.is_finite()) {
                    return Err(AppError::invalid_input(format!(
                        "Price book entry '{}' has a non-finite rate.",
                        model.name
                    )));
                }
                if model.input_price < 0.0 || model.output_price < 0.0 {
                    return Err(AppError::invalid_input(format!(
                        "Price book entry '{}' has a negative rate.",
                        model.name
                    )));
                }
                let rate = (model.input_price + model.output_price) / 2.0;
                entries.insert(model.name.to_lowercase(), (model.name, rate));
            }
        }

        if entries.is_empty() {
            return Err(AppError::no_data("Price book contains no models."));
        }

        Ok(Self { entries })
    }

    /// Load a price book from a JSON file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text = fs::read_to_string(path).map_err(|e| {
            AppError::usage(format!(
                "Failed to read price book '{}': {e}",
                path.display()
            ))
        })?;
        Self::parse(&text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a candidate display name to a price quote.
    ///
    /// Returns `None` when the name matches no book entry. Callers must treat
    /// that as "price unknown", not as zero.
    pub fn quote(&self, name: &str) -> Option<PriceQuote> {
        let multiplier = variant_multiplier(name);

        // 1) Exact (case-insensitive) match on the full display name.
        if let Some((matched, base)) = self.entries.get(&name.to_lowercase()) {
            return Some(PriceQuote {
                matched: matched.clone(),
                base: *base,
                multiplier,
            });
        }

        // 2) Match after normalization.
        let normalized = normalize_name(name);
        if let Some((matched, base)) = self.entries.get(&normalized) {
            return Some(PriceQuote {
                matched: matched.clone(),
                base: *base,
                multiplier,
            });
        }

        // 3) Longest book name contained in the normalized candidate name.
        let mut best: Option<(&String, f64, usize)> = None;
        for (key, (matched, base)) in &self.entries {
            if normalized.contains(key.as_str()) {
                let better = match best {
                    Some((_, _, len)) => key.len() > len,
                    None => true,
                };
                if better {
                    best = Some((matched, *base, key.len()));
                }
            }
        }

        best.map(|(matched, base, _)| PriceQuote {
            matched: matched.clone(),
            base,
            multiplier,
        })
    }
}

/// Combined cost multiplier derived from variant tokens in the display name.
pub fn variant_multiplier(name: &str) -> f64 {
    let mut multiplier = 1.0;
    if has_token(name, "thinking") {
        multiplier *= THINKING_MULTIPLIER;
    }
    if has_token(name, "high") {
        multiplier *= HIGH_EFFORT_MULTIPLIER;
    }
    multiplier
}

/// True when `token` appears as a whole word in `name` (case-insensitive).
fn has_token(name: &str, token: &str) -> bool {
    name.to_lowercase()
        .split(|ch: char| !ch.is_ascii_alphanumeric())
        .any(|word| word == token)
}

/// Strip parenthesized suffixes and trailing variant tokens, lowercase.
///
/// `"Gemini 2.5 Pro Preview (2025-06-05 Max Thinking)"` -> `"gemini 2.5 pro preview"`
/// `"o4-Mini High"` -> `"o4-mini"`
fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut depth = 0usize;
    for ch in name.chars() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(ch),
            _ => {}
        }
    }

    let mut words: Vec<&str> = out.split_whitespace().collect();
    while let Some(last) = words.last() {
        let last = last.to_lowercase();
        if matches!(last.as_str(), "thinking" | "high" | "medium" | "low" | "max") {
            words.pop();
        } else {
            break;
        }
    }

    words.join(" ").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOOK: &str = r#"{
        "models": [
            {
                "provider": "anthropic",
                "models": [
                    { "name": "Claude 4 Opus", "input_price": 15.0, "output_price": 75.0 },
                    { "name": "Claude 4 Sonnet", "input_price": 3.0, "output_price": 15.0 }
                ]
            },
            {
                "provider": "openai",
                "models": [
                    { "name": "o4-mini", "input_price": 1.1, "output_price": 4.4 },
                    { "name": "GPT-4o", "input_price": 2.5, "output_price": 10.0 }
                ]
            },
            {
                "provider": "google",
                "models": [
                    { "name": "Gemini 2.5 Pro", "input_price": 1.25, "output_price": 10.0 }
                ]
            }
        ]
    }"#;

    fn book() -> PriceBook {
        PriceBook::parse(BOOK).unwrap()
    }

    #[test]
    fn exact_match_uses_blended_rate() {
        let q = book().quote("Claude 4 Opus").unwrap();
        assert_eq!(q.matched, "Claude 4 Opus");
        assert!((q.base - 45.0).abs() < 1e-12);
        assert!((q.cost() - 45.0).abs() < 1e-12);
    }

    #[test]
    fn thinking_variant_doubles_cost() {
        let q = book().quote("Claude 4 Sonnet Thinking").unwrap();
        assert_eq!(q.matched, "Claude 4 Sonnet");
        assert!((q.base - 9.0).abs() < 1e-12);
        assert!((q.cost() - 18.0).abs() < 1e-12);
    }

    #[test]
    fn high_effort_variant_doubles_cost() {
        let q = book().quote("o4-Mini High").unwrap();
        assert_eq!(q.matched, "o4-mini");
        assert!((q.cost() - 5.5).abs() < 1e-12);
    }

    #[test]
    fn medium_effort_variant_uses_base_rate() {
        let q = book().quote("o4-Mini Medium").unwrap();
        assert!((q.cost() - 2.75).abs() < 1e-12);
    }

    #[test]
    fn parenthesized_suffix_is_ignored_for_matching() {
        let q = book().quote("Gemini 2.5 Pro Preview (2025-06-05)").unwrap();
        assert_eq!(q.matched, "Gemini 2.5 Pro");
        assert!((q.base - 5.625).abs() < 1e-12);
        assert!((q.multiplier - 1.0).abs() < 1e-12);
    }

    #[test]
    fn parenthesized_thinking_suffix_still_multiplies() {
        let q = book()
            .quote("Gemini 2.5 Pro Preview (2025-06-05 Max Thinking)")
            .unwrap();
        assert_eq!(q.matched, "Gemini 2.5 Pro");
        assert!((q.multiplier - 2.0).abs() < 1e-12);
    }

    #[test]
    fn unknown_model_is_none_not_zero() {
        assert!(book().quote("Totally Unheard-Of 9000").is_none());
    }

    #[test]
    fn high_inside_another_word_is_not_a_variant() {
        // "highland" must not trip the high-effort multiplier.
        assert!((variant_multiplier("Highland Chat") - 1.0).abs() < 1e-12);
        assert!((variant_multiplier("o3 (high)") - 2.0).abs() < 1e-12);
    }

    #[test]
    fn negative_rate_is_rejected() {
        let bad = r#"{ "models": [ { "models": [
            { "name": "X", "input_price": -1.0, "output_price": 2.0 }
        ] } ] }"#;
        let err = PriceBook::parse(bad).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn empty_book_is_rejected() {
        let err = PriceBook::parse(r#"{ "models": [] }"#).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
