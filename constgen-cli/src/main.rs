use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use constgen_schema::Language;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "constgen", about = "Multi-language constants-file generator")]
#[command(version)]
struct Cli {
    /// Input manifest file(s) containing the constants schema
    #[arg(short = 'f', long = "file", value_name = "FILE", num_args = 1.., required = true)]
    files: Vec<PathBuf>,
    /// Root directory in which to dump generated files
    #[arg(short, long, default_value = ".")]
    root: PathBuf,
    /// Language target(s) for generated files: c, asm, py
    #[arg(
        short = 'l',
        long = "lang",
        value_name = "LANG",
        num_args = 1..,
        required = true,
        value_parser = parse_language
    )]
    langs: Vec<Language>,
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn parse_language(s: &str) -> Result<Language, String> {
    s.parse()
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cmd_generate(&cli.files, &cli.root, &cli.langs) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::from(1)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn cmd_generate(files: &[PathBuf], root: &Path, langs: &[Language]) -> Result<()> {
    for manifest in files {
        tracing::debug!(manifest = %manifest.display(), "processing manifest");

        let generated = constgen_codegen::dump_from_file(manifest, langs, root)
            .with_context(|| format!("Failed to generate constants from '{}'", manifest.display()))?;

        println!(
            "{} Generated {} file(s) from {} → {}",
            "✓".green().bold(),
            generated.file_count(),
            manifest.display().to_string().bold(),
            root.display()
        );
        for file_path in generated.files().keys() {
            println!("  {} {}", "→".dimmed(), file_path.display());
        }
    }

    Ok(())
}
