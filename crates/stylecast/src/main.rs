//! The stylecast binary: compiles design token configs into CSS.

mod assets;
mod commands;
mod consts;
mod term;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{config, css, init, ConfigType, ModuleFlags};

/// Compile design token configs into CSS
#[derive(Parser)]
#[command(name = consts::APP_NAME)]
#[command(version)]
#[command(about = "A toolkit for managing your project styles")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Set up your project by creating the initial config folder
    Init {
        /// Choose config type: "base" or "example"
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        config_type: Option<ConfigType>,

        /// Skip prompts and overwrite if needed
        #[arg(short, long)]
        force: bool,
    },

    /// Generate style config files for one or more modules
    Config {
        #[command(flatten)]
        modules: ModuleFlags,

        /// Choose config type: "base" or "example"
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        config_type: Option<ConfigType>,

        /// Skip prompts and overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Generate CSS output from your existing style configs
    Css {
        #[command(flatten)]
        modules: ModuleFlags,

        /// Force overwrite of existing output
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let root = std::env::current_dir()?;

    match cli.command {
        Commands::Init { config_type, force } => {
            init::run(&root, &init::InitOptions { config_type, force })
        }
        Commands::Config {
            modules,
            config_type,
            force,
        } => config::run(
            &root,
            &config::ConfigOptions {
                modules,
                config_type,
                force,
            },
        ),
        Commands::Css { modules, force } => {
            css::run(&root, &css::CssOptions { modules, force })
        }
    }
}
