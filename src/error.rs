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
// Error types

use thiserror::Error;

/// Configuration failures. Never retried: the whole generation batch is
/// aborted, no passwords are printed and no file is written.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("at least one character class must be enabled")]
    NoClassesEnabled,

    #[error("character pool is empty after excluding ambiguous characters")]
    EmptyPool,
}
