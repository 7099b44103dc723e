//  ____                 _____
// |  _ \ __ _ ___ ___  |  ___|__  _ __ __ _  ___
// | |_) / _` / __/ __| | |_ / _ \| '__/ _` |/ _ \
// |  __/ (_| \__ \__ \ |  _| (_) | | | (_| |  __/
// |_|   \__,_|___/___/ |_|  \___/|_|  \__, |\___|
//                                     |___/
//
// Date : 2026-08-12
// Version : 0.1.0
// License : MIT
//
// Entropy estimate and strength classification

use std::fmt;

use zxcvbn::{Score, zxcvbn};

use crate::passgen::SYMBOLS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strength::Weak => "Weak",
            Strength::Moderate => "Moderate",
            Strength::Strong => "Strong",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreResult {
    pub entropy_bits: f64,
    pub strength: Strength,
}

/// Count the canonical classes with at least one representative in the
/// password. Always inspects actual content, regardless of which classes the
/// generation policy enabled.
pub fn categories(password: &str) -> usize {
    let mut count = 0;
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        count += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        count += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        count += 1;
    }
    if password.chars().any(|c| SYMBOLS.contains(c)) {
        count += 1;
    }
    count
}

/// Estimate entropy as `log2(pool_size) * length`, rounded to 2 decimals,
/// where `pool_size` sums the sizes of the canonical classes actually
/// present (26 + 26 + 10 + 25). A coarse unpredictability proxy, not a
/// rigorous information-theoretic measure.
///
/// When no canonical class matches any character the pool size defaults to
/// 1, making the entropy 0.
pub fn entropy_bits(password: &str) -> f64 {
    let mut pool_size = 0usize;
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        pool_size += 26;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        pool_size += 26;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        pool_size += 10;
    }
    if password.chars().any(|c| SYMBOLS.contains(c)) {
        pool_size += SYMBOLS.len();
    }
    if pool_size == 0 {
        pool_size = 1;
    }

    let bits = (pool_size as f64).log2() * password.chars().count() as f64;
    (bits * 100.0).round() / 100.0
}

/// Fixed-threshold bucketing, evaluated in order, first match wins.
pub fn classify(password: &str) -> Strength {
    let length = password.chars().count();
    let categories = categories(password);
    let entropy = entropy_bits(password);

    if length >= 12 && categories >= 3 && entropy >= 60.0 {
        Strength::Strong
    } else if length >= 8 && categories >= 2 && entropy >= 40.0 {
        Strength::Moderate
    } else {
        Strength::Weak
    }
}

pub fn score(password: &str) -> ScoreResult {
    ScoreResult {
        entropy_bits: entropy_bits(password),
        strength: classify(password),
    }
}

/// Supplementary zxcvbn assessment: (rating, score 0-4, suggestions).
pub fn assess_password_strength(password: &str) -> (String, u8, String) {
    let strength_result = zxcvbn(password, &[]);
    let score = strength_result.score();
    let feedback = strength_result.feedback().map_or_else(
        || String::new(),
        |f| {
            f.suggestions()
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        },
    );

    let rating = match score {
        Score::Zero => "Very weak",
        Score::One => "Weak",
        Score::Two => "Fair",
        Score::Three => "Strong",
        Score::Four => "Very strong",
        _ => "Unknown",
    }
    .to_string();

    (rating, score as u8, feedback)
}
