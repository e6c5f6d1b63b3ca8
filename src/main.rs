/// Contract interface generator entry point
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use abigen_codegen::generator::{canonical_signature, function_selector};
use abigen_codegen::{generate_interface_code, AbiParser, GeneratorConfig, TargetLanguage};

#[derive(Parser)]
#[command(name = "abigen")]
#[command(author, version, about = "Generate typed wrappers from contract ABI files", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a source file declaring one method per contract function
    Generate {
        /// Path to the contract ABI JSON file, `-` for stdin
        abi_file: String,

        /// Output file path
        #[arg(short, long, required_unless_present = "dry_run")]
        output: Option<PathBuf>,

        /// Name of the generated class
        #[arg(long, default_value = abigen_codegen::config::DEFAULT_CLASS_NAME)]
        class_name: String,

        /// Target language (python, typescript)
        #[arg(long, default_value_t = TargetLanguage::Python)]
        target: TargetLanguage,

        /// Codec module imported by the generated file
        #[arg(long)]
        codec: Option<String>,

        /// Print the generated source instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// List the functions of an ABI with their selectors
    Signatures {
        /// Path to the contract ABI JSON file, `-` for stdin
        abi_file: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so dry-run output stays clean
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate {
            abi_file,
            output,
            class_name,
            target,
            codec,
            dry_run,
        } => {
            let raw_abi = read_abi(&abi_file)?;
            let config = GeneratorConfig {
                output_path: output.unwrap_or_default(),
                class_name,
                target,
                codec_module: codec,
                dry_run,
            };

            let artifact = generate_interface_code(&raw_abi, &config)
                .with_context(|| format!("Failed to generate code from {}", abi_file))?;

            if dry_run {
                print!("{}", artifact);
            } else {
                tracing::info!(
                    "Generated {} lines into {}",
                    artifact.len(),
                    config.output_path.display()
                );
            }
        }

        Commands::Signatures { abi_file } => {
            let raw_abi = read_abi(&abi_file)?;
            let description = AbiParser::new()
                .parse_content(&raw_abi)
                .with_context(|| format!("Failed to parse {}", abi_file))?;

            for function in description.functions() {
                let selector = function_selector(&canonical_signature(&function.name, &function.inputs));
                println!("{}  {}", selector, function.human_readable());
            }
        }
    }

    Ok(())
}

/// Read ABI JSON from a file, or stdin when the path is `-`
fn read_abi(path: &str) -> Result<String> {
    if path == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read ABI from stdin")?;
        return Ok(content);
    }

    std::fs::read_to_string(path).with_context(|| format!("Failed to read ABI file {}", path))
}
