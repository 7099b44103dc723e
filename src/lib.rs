//  ____                 _____
// |  _ \ __ _ ___ ___  |  ___|__  _ __ __ _  ___
// | |_) / _` / __/ __| | |_ / _ \| '__/ _` |/ _ \
// |  __/ (_| \__ \__ \ |  _| (_) | | | (_| |  __/
// |_|   \__,_|___/___/ |_|  \___/|_|  \__, |\___|
//                                     |___/
//
// Date : 2026-08-10
// Version : 0.1.0
// License : MIT
//
// A policy-driven random password generator with entropy scoring.

pub mod commands;
pub mod error;
pub mod history;
pub mod passgen;
pub mod prompt;
pub mod scorer;
pub mod setclip;
