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
// Password history file

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

pub const DEFAULT_HISTORY_FILE: &str = "password_history.txt";

/// Append passwords to `path`, one per line, UTF-8. The file is created if
/// missing and existing lines are never altered.
pub fn save_history<P: AsRef<Path>>(passwords: &[String], path: P) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    for password in passwords {
        writeln!(file, "{}", password)?;
    }
    Ok(())
}
