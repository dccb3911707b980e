use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

use myschema::commands::{self, CompareFormat};
use myschema::config::{self, ConfigBuilder, ConfigInput, FlavorArgs, ObjectFilterArgs};
use myschema::constants::CONFIG_FILENAME;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value = CONFIG_FILENAME, global = true)]
    config_file: String,

    /// Enable verbose output (info level)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Suppress all non-essential output (error level only)
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    /// Enable debug output (debug level)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print canonical CREATE statements for a schema file or directory
    Render {
        /// Schema file or directory
        path: PathBuf,

        /// Render only this table
        #[arg(long)]
        table: Option<String>,

        #[command(flatten)]
        flavor_args: FlavorArgs,

        #[command(flatten)]
        object_filter_args: ObjectFilterArgs,
    },

    /// Compare a desired schema with a live one; exits 1 on functional differences
    Compare {
        /// Desired-state schema file or directory
        desired: PathBuf,

        /// Live schema file or directory, e.g. an introspected dump
        live: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "detailed")]
        format: CompareFormat,

        #[command(flatten)]
        flavor_args: FlavorArgs,

        #[command(flatten)]
        object_filter_args: ObjectFilterArgs,
    },

    /// Run lint rules; exits 1 if any rule reports at error severity
    Lint {
        /// Schema file or directory
        #[arg(required_unless_present = "list_rules")]
        path: Option<PathBuf>,

        /// List every rule with its configured severity instead of linting
        #[arg(long)]
        list_rules: bool,

        #[command(flatten)]
        flavor_args: FlavorArgs,

        #[command(flatten)]
        object_filter_args: ObjectFilterArgs,
    },

    /// Show how a flavor renders version-gated features
    Flavor {
        /// Flavor such as mysql:8.0.23, percona:8.0 or mariadb:11.7
        flavor: String,
    },
}

fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    initialize_logging(&cli);

    let failed = run_main(cli)?;
    if failed {
        std::process::exit(1);
    }
    Ok(())
}

fn initialize_logging(cli: &Cli) {
    let level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else if cli.quiet {
        "error"
    } else {
        "warn" // default level
    };

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level)
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Returns true when the command should exit non-zero
fn run_main(cli: Cli) -> Result<bool> {
    if let Commands::Flavor { flavor } = &cli.command {
        commands::cmd_flavor(flavor)?;
        return Ok(false);
    }

    let (file_config, _root_dir) = config::load_config(&cli.config_file)?;

    match cli.command {
        Commands::Flavor { .. } => unreachable!(),
        Commands::Render {
            path,
            table,
            flavor_args,
            object_filter_args,
        } => {
            let config = ConfigBuilder::new()
                .with_file(file_config)
                .with_env()
                .with_cli_args(ConfigInput::from_cli_args(flavor_args, object_filter_args))
                .resolve()?;
            commands::cmd_render(&config, &path, table.as_deref())?;
            Ok(false)
        }
        Commands::Compare {
            desired,
            live,
            format,
            flavor_args,
            object_filter_args,
        } => {
            let config = ConfigBuilder::new()
                .with_file(file_config)
                .with_env()
                .with_cli_args(ConfigInput::from_cli_args(flavor_args, object_filter_args))
                .resolve()?;
            commands::cmd_compare(&config, &desired, &live, format)
        }
        Commands::Lint {
            path,
            list_rules,
            flavor_args,
            object_filter_args,
        } => {
            let config = ConfigBuilder::new()
                .with_file(file_config)
                .with_env()
                .with_cli_args(ConfigInput::from_cli_args(flavor_args, object_filter_args))
                .resolve()?;
            match path {
                Some(path) if !list_rules => commands::cmd_lint(&config, &path),
                _ => {
                    commands::cmd_list_rules(&config)?;
                    Ok(false)
                }
            }
        }
    }
}
