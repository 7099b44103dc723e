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
// Flag-driven generation

use std::path::PathBuf;

use anyhow::Result;

use crate::history;
use crate::passgen::Policy;
use crate::setclip;

pub fn run(policy: Policy, count: usize, save: Option<PathBuf>, copy: bool) -> Result<()> {
    let passwords = super::generate_batch(&policy, count)?;
    super::display_passwords(&passwords, policy.length);

    if let Some(path) = save {
        history::save_history(&passwords, &path)?;
        println!("\nAppended {} password(s) to {}", passwords.len(), path.display());
    }

    if copy {
        if passwords.len() == 1 {
            setclip::copy_to_clipboard(&passwords[0])?;
            println!("\nPassword copied to clipboard.");
        } else {
            log::warn!("--copy only applies to a single password; skipping");
        }
    }

    Ok(())
}
