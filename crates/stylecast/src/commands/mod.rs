//! Command implementations and the option types they share.

pub mod config;
pub mod css;
pub mod init;

use std::fmt;

use anyhow::Result;
use clap::{Args, ValueEnum};
use inquire::InquireError;
use stylecast_pipeline::ModuleKind;

use crate::term;

/// Which bundled template family to copy from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigType {
    /// Minimal skeleton to fill in.
    Base,
    /// Fully worked configuration showing every knob.
    Example,
}

impl fmt::Display for ConfigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigType::Base => f.write_str("base"),
            ConfigType::Example => f.write_str("example"),
        }
    }
}

/// Module selection flags shared by `config` and `css`.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct ModuleFlags {
    /// Select the "colors" module
    #[arg(short = 'C', long)]
    pub colors: bool,

    /// Select the "typography" module
    #[arg(short = 'T', long)]
    pub typography: bool,

    /// Select the "spacing" module
    #[arg(short = 'S', long)]
    pub spacing: bool,

    /// Select the "layout" module
    #[arg(short = 'L', long)]
    pub layout: bool,

    /// Select every module at once
    #[arg(short = 'a', long)]
    pub all: bool,
}

impl ModuleFlags {
    /// Modules picked via flags, in canonical order. Empty when no
    /// flag was given, which sends the command into its prompt flow.
    pub fn selected(&self) -> Vec<ModuleKind> {
        if self.all {
            return ModuleKind::ALL.to_vec();
        }
        let flagged = [self.colors, self.typography, self.spacing, self.layout];
        ModuleKind::ALL
            .into_iter()
            .zip(flagged)
            .filter_map(|(kind, picked)| picked.then_some(kind))
            .collect()
    }
}

/// Unwraps a prompt result, treating Esc/Ctrl-C as a clean exit:
/// prints `cancel_message` and yields `None`.
pub(crate) fn safe_prompt<T>(
    result: std::result::Result<T, InquireError>,
    cancel_message: &str,
) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
            term::cancel(cancel_message);
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

/// Config file name for a module, e.g. `colors.config.json`.
pub(crate) fn config_file_name(kind: ModuleKind) -> String {
    format!("{}.config.json", kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_flag_selects_every_module() {
        let flags = ModuleFlags {
            all: true,
            ..Default::default()
        };
        assert_eq!(flags.selected(), ModuleKind::ALL.to_vec());
    }

    #[test]
    fn test_flags_keep_canonical_order() {
        let flags = ModuleFlags {
            layout: true,
            colors: true,
            ..Default::default()
        };
        assert_eq!(
            flags.selected(),
            vec![ModuleKind::Colors, ModuleKind::Layout]
        );
    }

    #[test]
    fn test_no_flags_selects_nothing() {
        assert!(ModuleFlags::default().selected().is_empty());
    }

    #[test]
    fn test_config_file_names() {
        assert_eq!(config_file_name(ModuleKind::Colors), "colors.config.json");
        assert_eq!(config_file_name(ModuleKind::Layout), "layout.config.json");
    }
}
