//! Interface code generator
//!
//! Turns a parsed interface description into one source file: the codec
//! import, a container declaration, and a declaration block per function.

use std::collections::HashSet;

use abigen_common::{Error, Result, StateMutability};
use sha3::{Digest, Keccak256};
use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::mapper::TypeMapper;
use crate::parser::{InterfaceDescription, InterfaceEntry, Parameter};
use crate::target::Target;
use crate::writer::{OutputArtifact, SourceWriter};

/// Nesting depth of declarations inside the container
const DECLARATION_DEPTH: usize = 1;

/// One function declaration ready to be rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFunction {
    /// Emitted name, disambiguated and safe for the target
    pub name: String,
    /// `(name, mapped type)` pairs in declaration order
    pub parameters: Vec<(String, String)>,
    pub return_type: String,
    /// Canonical `name(type,...)` signature
    pub signature: String,
    /// `0x`-prefixed 4-byte function selector
    pub selector: String,
    pub state_mutability: StateMutability,
}

/// Code generator for contract interfaces
pub struct CodeEmitter {
    config: GeneratorConfig,
    mapper: TypeMapper,
}

impl CodeEmitter {
    /// Create a new code generator with the given configuration
    pub fn new(config: GeneratorConfig) -> Self {
        let mapper = TypeMapper::new(config.target);
        Self { config, mapper }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the source lines for `description`. Does not touch the filesystem.
    pub fn generate(&self, description: &InterfaceDescription) -> Result<OutputArtifact> {
        self.config.validate_codec_module()?;
        self.config.validate_class_name()?;
        let target = self.config.target.backend();

        let mut out = SourceWriter::new(target.indent_unit());
        target.emit_preamble(&mut out, self.config.codec_module(), &self.config.class_name);

        let mut emitted = HashSet::new();
        let mut function_count = 0;

        for entry in &description.entries {
            if !entry.is_function() {
                debug!(kind = %entry.kind, name = %entry.name, "skipping non-function entry");
                continue;
            }

            let function = self.build_function(entry, &mut emitted)?;

            debug!(function = %function.name, selector = %function.selector, "emitting declaration");
            target.emit_function(&mut out, &function, DECLARATION_DEPTH);
            function_count += 1;
        }

        target.emit_container_end(&mut out, function_count);

        info!(
            class = %self.config.class_name,
            target = %self.config.target,
            functions = function_count,
            "generated interface"
        );
        Ok(out.finish())
    }

    /// Build the declaration for one function entry.
    ///
    /// `emitted` holds the names already declared in the container. A name
    /// that is taken gets the first free `_{n}` suffix, and the chosen name is
    /// added to the set.
    pub fn build_function(
        &self,
        entry: &InterfaceEntry,
        emitted: &mut HashSet<String>,
    ) -> Result<GeneratedFunction> {
        let target = self.config.target.backend();

        let base_name = function_name(target, &entry.name)?;
        let mut name = base_name.clone();
        let mut suffix = 1;
        while emitted.contains(&name) {
            name = format!("{}_{}", base_name, suffix);
            suffix += 1;
        }

        let mut used = HashSet::new();
        let mut parameters = Vec::with_capacity(entry.inputs.len());
        for (index, input) in entry.inputs.iter().enumerate() {
            let param_name = parameter_name(target, &entry.name, input, index, &mut used)?;
            let mapped = self
                .mapper
                .map_type(input.input_type())
                .map_err(|e| e.in_entry(&entry.name))?;
            parameters.push((param_name, mapped));
        }

        let output_types: Vec<&str> = entry.outputs.iter().map(Parameter::output_type).collect();
        let return_type = self
            .mapper
            .combine_return_types(&output_types)
            .map_err(|e| e.in_entry(&entry.name))?;

        let signature = canonical_signature(&entry.name, &entry.inputs);
        let selector = function_selector(&signature);

        emitted.insert(name.clone());
        Ok(GeneratedFunction {
            name,
            parameters,
            return_type,
            signature,
            selector,
            state_mutability: entry.state_mutability,
        })
    }
}

fn function_name(target: &dyn Target, raw: &str) -> Result<String> {
    if !target.is_identifier(raw) {
        return Err(Error::malformed(format!(
            "function name `{}` is not a valid {} identifier",
            raw,
            target.language()
        )));
    }
    Ok(escape_reserved(target, raw))
}

fn parameter_name(
    target: &dyn Target,
    function: &str,
    input: &Parameter,
    index: usize,
    used: &mut HashSet<String>,
) -> Result<String> {
    let mut name = if input.name.is_empty() {
        format!("arg{}", index)
    } else if target.is_identifier(&input.name) {
        escape_reserved(target, &input.name)
    } else {
        return Err(Error::malformed(format!(
            "parameter `{}` of function `{}` is not a valid {} identifier",
            input.name,
            function,
            target.language()
        )));
    };

    while used.contains(&name) {
        name.push('_');
    }
    used.insert(name.clone());
    Ok(name)
}

fn escape_reserved(target: &dyn Target, ident: &str) -> String {
    if target.is_reserved(ident) {
        format!("{}_", ident)
    } else {
        ident.to_string()
    }
}

/// Canonical signature used for selector hashing, e.g. `transfer(address,uint256)`
pub fn canonical_signature(name: &str, inputs: &[Parameter]) -> String {
    let types: Vec<&str> = inputs.iter().map(|p| p.declared_type.as_str()).collect();
    format!("{}({})", name, types.join(","))
}

/// First four bytes of the Keccak-256 hash of `signature`, hex encoded
pub fn function_selector(signature: &str) -> String {
    let mut hasher = Keccak256::new();
    hasher.update(signature.as_bytes());
    let hash = hasher.finalize();
    format!("0x{}", hex::encode(&hash[..4]))
}
