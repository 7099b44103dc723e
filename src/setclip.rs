//  ____                 _____
// |  _ \ __ _ ___ ___  |  ___|__  _ __ __ _  ___
// | |_) / _` / __/ __| | |_ / _ \| '__/ _` |/ _ \
// |  __/ (_| \__ \__ \ |  _| (_) | | | (_| |  __/
// |_|   \__,_|___/___/ |_|  \___/|_|  \__, |\___|
//                                     |___/
//
// Date : 2026-08-13
// Version : 0.1.0
// License : MIT
//
// Clipboard handler

use arboard::Clipboard;

/// Probe for a usable clipboard. Run once at startup; the resulting bool is
/// passed into the interactive flow so the core logic never conditions on
/// the platform itself.
pub fn clipboard_available() -> bool {
    Clipboard::new().is_ok()
}

pub fn copy_to_clipboard(secret: &str) -> Result<(), arboard::Error> {
    let mut ctx = Clipboard::new()?;
    ctx.set_text(secret)?;
    Ok(())
}
