//  ____                 _____
// |  _ \ __ _ ___ ___  |  ___|__  _ __ __ _  ___
// | |_) / _` / __/ __| | |_ / _ \| '__/ _` |/ _ \
// |  __/ (_| \__ \__ \ |  _| (_) | | | (_| |  __/
// |_|   \__,_|___/___/ |_|  \___/|_|  \__, |\___|
//                                     |___/
//
// Date : 2026-08-11
// Version : 0.1.0
// License : MIT
//
// Password generator

use rand::rngs::OsRng;
use rand::seq::SliceRandom;

use crate::error::ConfigError;

/// Fixed symbol set, shared by generation and scoring.
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>?";

/// Glyphs easily confused with one another (0/O, 1/l/I).
pub const AMBIGUOUS_CHARS: [char; 5] = ['O', '0', 'I', 'l', '1'];

/// Generation policy. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Policy {
    pub length: usize,
    pub include_upper: bool,
    pub include_lower: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
    pub exclude_ambiguous: bool,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            length: 16,
            include_upper: true,
            include_lower: true,
            include_digits: true,
            include_symbols: true,
            exclude_ambiguous: false,
        }
    }
}

/// One character set per enabled class. The sets are disjoint, and every
/// stored set is non-empty; construction fails otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    classes: Vec<Vec<char>>,
}

impl CharacterPool {
    pub fn from_policy(policy: &Policy) -> Result<Self, ConfigError> {
        let mut classes: Vec<Vec<char>> = Vec::new();
        if policy.include_upper {
            classes.push(('A'..='Z').collect());
        }
        if policy.include_lower {
            classes.push(('a'..='z').collect());
        }
        if policy.include_digits {
            classes.push(('0'..='9').collect());
        }
        if policy.include_symbols {
            classes.push(SYMBOLS.chars().collect());
        }

        if classes.is_empty() {
            return Err(ConfigError::NoClassesEnabled);
        }

        if policy.exclude_ambiguous {
            for class in &mut classes {
                class.retain(|c| !AMBIGUOUS_CHARS.contains(c));
            }
            // The canonical ranges always survive the fixed ambiguous set,
            // but an emptied class would break the coverage guarantee below.
            if classes.iter().any(|class| class.is_empty()) {
                return Err(ConfigError::EmptyPool);
            }
        }

        Ok(Self { classes })
    }

    /// Number of enabled classes.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn classes(&self) -> &[Vec<char>] {
        &self.classes
    }

    /// Union of all class sets. Classes are disjoint, so concatenation keeps
    /// every character exactly once.
    pub fn union(&self) -> Vec<char> {
        self.classes.iter().flatten().copied().collect()
    }
}

/// Generate one password according to `policy`.
///
/// The output always contains at least one character from each enabled
/// class. When the requested length is smaller than the number of enabled
/// classes, the password grows to the class count rather than dropping the
/// coverage guarantee.
pub fn generate_password(policy: &Policy) -> Result<String, ConfigError> {
    let pool = CharacterPool::from_policy(policy)?;
    log::debug!(
        "generating {} chars from {} enabled classes",
        policy.length.max(pool.class_count()),
        pool.class_count()
    );
    Ok(compose(&pool, policy.length))
}

/// Compose `max(length, class_count)` characters from `pool` using the
/// OS cryptographic random source for every selection, including the final
/// shuffle.
pub fn compose(pool: &CharacterPool, length: usize) -> String {
    let all_chars = pool.union();
    let mut rng = OsRng;
    let mut password_chars = Vec::with_capacity(length.max(pool.class_count()));

    // One character from each class guarantees coverage. Pool classes are
    // never empty, so choose() cannot fail here.
    for class in pool.classes() {
        password_chars.push(*class.choose(&mut rng).unwrap());
    }

    // Fill the remainder from the combined pool, with replacement.
    while password_chars.len() < length {
        password_chars.push(*all_chars.choose(&mut rng).unwrap());
    }

    // Shuffle so the guaranteed-class characters are not front-loaded.
    password_chars.shuffle(&mut rng);

    password_chars.into_iter().collect()
}
