//! # hashfs CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// hashfs: content-hashed static asset names.
///
/// Computes the hashed names that the hashfs asset server verifies, and
/// converts between plain and hashed filenames.
#[derive(Parser, Debug)]
#[command(name = "hashfs", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print the hashed name of files under a root.
    Name(hashfs_cli::names::NameArgs),
    /// Split hashed names into plain path and digest.
    Parse(hashfs_cli::names::ParseArgs),
    /// Build a hashed name from a path and digest.
    Format(hashfs_cli::names::FormatArgs),
    /// Emit a JSON map of every file to its hashed name.
    Manifest(hashfs_cli::manifest::ManifestArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Name(mut args) => {
            args.root = hashfs_cli::resolve_path(&args.root, &cwd);
            hashfs_cli::names::run_name(&args, &mut out)
        }
        Commands::Parse(args) => hashfs_cli::names::run_parse(&args, &mut out),
        Commands::Format(args) => hashfs_cli::names::run_format(&args, &mut out),
        Commands::Manifest(mut args) => {
            args.root = hashfs_cli::resolve_path(&args.root, &cwd);
            hashfs_cli::manifest::run_manifest(&args, &mut out)
        }
    }
}
