//  ____                 _____
// |  _ \ __ _ ___ ___  |  ___|__  _ __ __ _  ___
// | |_) / _` / __/ __| | |_ / _ \| '__/ _` |/ _ \
// |  __/ (_| \__ \__ \ |  _| (_) | | | (_| |  __/
// |_|   \__,_|___/___/ |_|  \___/|_|  \__, |\___|
//                                     |___/
//
// Date : 2026-08-14
// Version : 0.1.0
// License : MIT
//
// Command layer

pub mod interactive;
pub mod password_gen;
pub mod testpass;

use crate::error::ConfigError;
use crate::passgen::{self, Policy};
use crate::scorer;

/// Generate the whole batch up front. All-or-nothing: a configuration error
/// aborts before anything is printed, saved, or copied.
fn generate_batch(policy: &Policy, count: usize) -> Result<Vec<String>, ConfigError> {
    let mut passwords = Vec::with_capacity(count);
    for _ in 0..count {
        passwords.push(passgen::generate_password(policy)?);
    }
    Ok(passwords)
}

fn display_passwords(passwords: &[String], requested_length: usize) {
    // Coverage takes priority over the requested length; say so when it
    // kicked in rather than letting it look like a bug.
    if let Some(first) = passwords.first() {
        let actual = first.chars().count();
        if actual > requested_length {
            println!(
                "Note: length extended to {} so every enabled character class is represented.",
                actual
            );
        }
    }

    for (i, password) in passwords.iter().enumerate() {
        let result = scorer::score(password);
        println!("\nPassword {}: {}", i + 1, password);
        println!(
            " Strength: {} | Entropy: {} bits",
            result.strength, result.entropy_bits
        );
    }
}
