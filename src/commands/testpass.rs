//  ____                 _____
// |  _ \ __ _ ___ ___  |  ___|__  _ __ __ _  ___
// | |_) / _` / __/ __| | |_ / _ \| '__/ _` |/ _ \
// |  __/ (_| \__ \__ \ |  _| (_) | | | (_| |  __/
// |_|   \__,_|___/___/ |_|  \___/|_|  \__, |\___|
//                                     |___/
//
// Date : 2026-08-15
// Version : 0.1.0
// License : MIT
//
// Strength testing for arbitrary passwords

use anyhow::Result;

use crate::scorer;

pub fn run(password: &str) -> Result<()> {
    let result = scorer::score(password);
    println!(
        "Strength: {} | Entropy: {} bits",
        result.strength, result.entropy_bits
    );
    println!(
        "Character classes present: {}/4",
        scorer::categories(password)
    );

    let (rating, score, feedback) = scorer::assess_password_strength(password);
    println!("zxcvbn rating: {} ({}/4)", rating, score);
    if !feedback.is_empty() {
        println!("Suggestions: {}", feedback);
    }

    Ok(())
}
