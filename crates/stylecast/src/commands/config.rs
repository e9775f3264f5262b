//! `config`: seeds per-module configuration files from the bundled
//! templates.

use std::fs;
use std::path::Path;

use anyhow::Result;
use inquire::{Confirm, MultiSelect, Select};
use stylecast_pipeline::ModuleKind;

use crate::assets;
use crate::commands::{config_file_name, safe_prompt, ConfigType, ModuleFlags};
use crate::consts::{config_dir, APP_NAME, CONFIG_DIR_NAME};
use crate::term;

pub struct ConfigOptions {
    pub modules: ModuleFlags,
    pub config_type: Option<ConfigType>,
    pub force: bool,
}

pub fn run(root: &Path, options: &ConfigOptions) -> Result<()> {
    term::intro(&format!("{} - style configuration files", APP_NAME));

    let dir = config_dir(root);
    if !dir.exists() {
        term::error(&format!(
            "Looks like the \"{}\" folder is missing. Run '{} init' first.",
            CONFIG_DIR_NAME, APP_NAME
        ));
        return Ok(());
    }

    let mut selected = options.modules.selected();
    if selected.is_empty() {
        let answer = safe_prompt(
            MultiSelect::new(
                "Which modules would you like to configure?",
                ModuleKind::ALL.to_vec(),
            )
            .prompt(),
            "No styles selected. Configuration was cancelled.",
        )?;
        match answer {
            Some(picked) => selected = picked,
            None => return Ok(()),
        }
    }

    let config_type = match options.config_type {
        Some(config_type) => config_type,
        None => {
            let answer = safe_prompt(
                Select::new(
                    "Choose a configuration type:",
                    vec![ConfigType::Base, ConfigType::Example],
                )
                .prompt(),
                "No type selected. Configuration was cancelled.",
            )?;
            match answer {
                Some(picked) => picked,
                None => return Ok(()),
            }
        }
    };

    let existing: Vec<ModuleKind> = selected
        .iter()
        .copied()
        .filter(|kind| dir.join(config_file_name(*kind)).exists())
        .collect();

    let overwrite = if options.force {
        existing.clone()
    } else if existing.len() == 1 {
        let kind = existing[0];
        let answer = safe_prompt(
            Confirm::new(&format!(
                "The file \"{}\" already exists. Do you want to replace it?",
                config_file_name(kind)
            ))
            .with_default(false)
            .prompt(),
            "No problem. We didn't overwrite anything.",
        )?;
        match answer {
            Some(true) => vec![kind],
            Some(false) => Vec::new(),
            None => return Ok(()),
        }
    } else if existing.len() > 1 {
        let answer = safe_prompt(
            MultiSelect::new(
                "Some configuration files already exist. Select which ones to overwrite:",
                existing.clone(),
            )
            .prompt(),
            "Overwrite selection cancelled. No files were changed.",
        )?;
        match answer {
            Some(picked) => picked,
            None => return Ok(()),
        }
    } else {
        Vec::new()
    };

    for kind in write_templates(&dir, &selected, config_type, &overwrite)? {
        term::success(&format!("\"{}\" has been created.", config_file_name(kind)));
    }

    term::outro("Style configuration complete. You're all set.");
    Ok(())
}

/// Copies templates for `modules` into `dir`. Existing files are only
/// replaced when listed in `overwrite`. Returns the modules written.
pub(crate) fn write_templates(
    dir: &Path,
    modules: &[ModuleKind],
    config_type: ConfigType,
    overwrite: &[ModuleKind],
) -> Result<Vec<ModuleKind>> {
    let mut written = Vec::new();
    for kind in modules {
        let target = dir.join(config_file_name(*kind));
        if target.exists() && !overwrite.contains(kind) {
            continue;
        }
        fs::write(&target, assets::template(*kind, config_type))?;
        written.push(*kind);
    }
    Ok(written)
}
