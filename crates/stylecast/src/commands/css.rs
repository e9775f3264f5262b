//! `css`: compiles the existing config files into CSS output.

use std::fs;
use std::path::Path;

use anyhow::Result;
use inquire::{Confirm, MultiSelect};
use stylecast_pipeline::{Compiler, ModuleConfig, ModuleKind};

use crate::commands::{config_file_name, safe_prompt, ModuleFlags};
use crate::consts::{config_dir, APP_NAME, CONFIG_DIR_NAME};
use crate::term;

pub struct CssOptions {
    pub modules: ModuleFlags,
    pub force: bool,
}

pub fn run(root: &Path, options: &CssOptions) -> Result<()> {
    term::intro("Generating CSS from configs");

    let dir = config_dir(root);
    if !dir.exists() {
        term::error(&format!(
            "Hmm, couldn't find the \"{}\" folder. Run '{} init' first.",
            CONFIG_DIR_NAME, APP_NAME
        ));
        return Ok(());
    }

    let available = available_modules(&dir);
    if available.is_empty() {
        term::error(&format!(
            "No configuration files found. You can create some using '{} config'.",
            APP_NAME
        ));
        return Ok(());
    }

    let mut selected = if options.modules.all {
        available.clone()
    } else {
        options.modules.selected()
    };

    let missing: Vec<ModuleKind> = selected
        .iter()
        .copied()
        .filter(|kind| !available.contains(kind))
        .collect();
    if !missing.is_empty() {
        for kind in missing {
            term::error(&format!(
                "The \"{}\" module is not configured. Run '{} config --{}' to create it.",
                kind, APP_NAME, kind
            ));
        }
        return Ok(());
    }

    if selected.is_empty() {
        let answer = safe_prompt(
            MultiSelect::new(
                "Choose which modules you want to generate CSS for:",
                available.clone(),
            )
            .prompt(),
            "No worries. CSS generation was cancelled.",
        )?;
        match answer {
            Some(picked) => selected = picked,
            None => return Ok(()),
        }
    }

    // Load configs up front; a broken file drops its module but the
    // rest still compile.
    let mut configs: Vec<(ModuleKind, ModuleConfig)> = Vec::new();
    for kind in selected {
        match read_config(&dir, kind) {
            Ok(config) => configs.push((kind, config)),
            Err(err) => {
                term::error(&format!("Could not read the \"{}\" config: {}", kind, err));
            }
        }
    }

    if !options.force {
        configs = confirm_overwrites(root, configs)?;
    }

    let mut compiler = Compiler::new();
    for (kind, config) in &configs {
        match generate(root, &mut compiler, *kind, config) {
            Ok(count) => term::success(&format!(
                "CSS for \"{}\" has been successfully generated ({} files).",
                kind, count
            )),
            Err(err) => {
                term::error(&format!("Something went wrong while processing \"{}\":", kind));
                term::error(&err.to_string());
            }
        }
    }

    for warning in compiler.take_warnings() {
        term::warn(&warning);
    }

    term::outro("CSS generation complete. You're good to go.");
    Ok(())
}

/// Modules with a config file present, in canonical order.
fn available_modules(dir: &Path) -> Vec<ModuleKind> {
    ModuleKind::ALL
        .into_iter()
        .filter(|kind| dir.join(config_file_name(*kind)).exists())
        .collect()
}

/// Asks before clobbering output folders that already exist. Modules
/// the user declines are dropped from the run.
fn confirm_overwrites(
    root: &Path,
    configs: Vec<(ModuleKind, ModuleConfig)>,
) -> Result<Vec<(ModuleKind, ModuleConfig)>> {
    let existing: Vec<ModuleKind> = configs
        .iter()
        .filter(|(_, config)| root.join(&config.out_dir).exists())
        .map(|(kind, _)| *kind)
        .collect();

    let keep: Vec<ModuleKind> = if existing.is_empty() {
        return Ok(configs);
    } else if existing.len() == 1 {
        let kind = existing[0];
        let answer = safe_prompt(
            Confirm::new(&format!(
                "The output folder for \"{}\" already exists. Should we replace it?",
                kind
            ))
            .with_default(false)
            .prompt(),
            &format!("Skipping \"{}\" as requested.", kind),
        )?;
        match answer {
            Some(true) => vec![kind],
            Some(false) | None => Vec::new(),
        }
    } else {
        let answer = safe_prompt(
            MultiSelect::new(
                "Some output folders already exist. Select the ones you want to replace:",
                existing.clone(),
            )
            .prompt(),
            "CSS generation cancelled.",
        )?;
        match answer {
            Some(picked) => picked,
            None => return Ok(Vec::new()),
        }
    };

    Ok(configs
        .into_iter()
        .filter(|(kind, config)| {
            !root.join(&config.out_dir).exists() || keep.contains(kind)
        })
        .collect())
}

pub(crate) fn read_config(dir: &Path, kind: ModuleKind) -> Result<ModuleConfig> {
    let text = fs::read_to_string(dir.join(config_file_name(kind)))?;
    Ok(serde_json::from_str(&text)?)
}

/// Compiles one module and writes its artifacts, replacing any
/// previous output folder.
pub(crate) fn generate(
    root: &Path,
    compiler: &mut Compiler,
    kind: ModuleKind,
    config: &ModuleConfig,
) -> Result<usize> {
    let artifacts = compiler.compile(kind, config)?;

    let out_dir = root.join(&config.out_dir);
    if out_dir.exists() {
        fs::remove_dir_all(&out_dir)?;
    }
    fs::create_dir_all(&out_dir)?;

    for artifact in &artifacts {
        fs::write(root.join(&artifact.path), &artifact.content)?;
    }
    Ok(artifacts.len())
}
