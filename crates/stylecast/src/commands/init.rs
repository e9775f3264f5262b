//! `init`: creates the config folder, then chains into `config`.

use std::fs;
use std::path::Path;

use anyhow::Result;
use inquire::Confirm;

use crate::commands::{config, safe_prompt, ConfigType, ModuleFlags};
use crate::consts::{config_dir, APP_NAME, CONFIG_DIR_NAME};
use crate::term;

pub struct InitOptions {
    pub config_type: Option<ConfigType>,
    pub force: bool,
}

pub fn run(root: &Path, options: &InitOptions) -> Result<()> {
    term::intro(&format!("{} - project initialization", APP_NAME));

    if config_dir(root).exists() {
        let overwrite = if options.force {
            true
        } else {
            let answer = safe_prompt(
                Confirm::new(&format!(
                    "The \"{}\" folder already exists. Want to start fresh?",
                    CONFIG_DIR_NAME
                ))
                .with_default(false)
                .prompt(),
                "Got it. No changes made.",
            )?;
            match answer {
                Some(answer) => answer,
                None => return Ok(()),
            }
        };

        if !overwrite {
            term::cancel("No worries. Setup was skipped - nothing changed.");
            return Ok(());
        }
    }

    prepare_config_dir(root)?;
    term::success(&format!(
        "Nice! The \"{}\" folder is ready to roll.",
        CONFIG_DIR_NAME
    ));

    // Continue straight into module configuration.
    config::run(
        root,
        &config::ConfigOptions {
            modules: ModuleFlags::default(),
            config_type: options.config_type,
            force: options.force,
        },
    )
}

/// Wipes any existing config folder and creates a fresh one.
pub(crate) fn prepare_config_dir(root: &Path) -> Result<()> {
    let dir = config_dir(root);
    if dir.exists() {
        fs::remove_dir_all(&dir)?;
    }
    fs::create_dir_all(&dir)?;
    Ok(())
}
