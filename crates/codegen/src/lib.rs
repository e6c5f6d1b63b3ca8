//! Code generation for contract interfaces
//!
//! This crate turns a contract ABI JSON description into source code that
//! declares one typed callable per contract function.

pub mod config;
pub mod generator;
pub mod mapper;
pub mod parser;
pub mod target;
pub mod writer;

#[cfg(test)]
mod tests;

pub use config::GeneratorConfig;
pub use generator::{CodeEmitter, GeneratedFunction};
pub use mapper::{TypeFamily, TypeMapper};
pub use parser::{AbiParser, InterfaceDescription, InterfaceEntry, Parameter};
pub use target::{Target, TargetLanguage};
pub use writer::{write_artifact, OutputArtifact};

use abigen_common::Result;

/// Main entry point for interface code generation.
///
/// Parses `raw_abi`, generates the artifact and, unless `config.dry_run` is
/// set, writes it to `config.output_path`. Nothing is written on failure.
pub fn generate_interface_code(raw_abi: &str, config: &GeneratorConfig) -> Result<OutputArtifact> {
    config.validate()?;

    let parser = AbiParser::new();
    let description = parser.parse_content(raw_abi)?;

    let emitter = CodeEmitter::new(config.clone());
    let artifact = emitter.generate(&description)?;

    if !config.dry_run {
        write_artifact(&artifact, &config.output_path)?;
    }

    Ok(artifact)
}
