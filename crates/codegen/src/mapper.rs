//! ABI type mapping
//!
//! Translates declared ABI type names into target language type expressions.

use abigen_common::{Error, Result};

use crate::target::{Target, TargetLanguage};

/// Scalar type families the generator knows how to map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFamily {
    /// `uint8` .. `uint256`, `int8` .. `int256`
    Integer,
    Boolean,
    /// `address`, `address payable`
    Address,
    /// `bytes`, `bytes1` .. `bytes32`
    Bytes,
}

impl TypeFamily {
    /// Classify a declared type. Rules are checked in order and the first match wins.
    pub fn classify(declared_type: &str) -> Option<Self> {
        if declared_type.contains("int") {
            Some(TypeFamily::Integer)
        } else if declared_type == "bool" {
            Some(TypeFamily::Boolean)
        } else if declared_type.contains("address") {
            Some(TypeFamily::Address)
        } else if declared_type.contains("bytes") {
            Some(TypeFamily::Bytes)
        } else {
            None
        }
    }
}

/// Maps declared ABI types to the spelling of one target language
#[derive(Clone, Copy)]
pub struct TypeMapper {
    target: &'static dyn Target,
}

impl TypeMapper {
    pub fn new(language: TargetLanguage) -> Self {
        Self {
            target: language.backend(),
        }
    }

    /// Map one declared type to a target type name
    pub fn map_type(&self, declared_type: &str) -> Result<String> {
        TypeFamily::classify(declared_type)
            .map(|family| self.target.type_name(family).to_string())
            .ok_or_else(|| Error::unsupported_type(declared_type))
    }

    /// Map an ordered list of output types into a single return type expression.
    ///
    /// Outputs are joined with the target's union separator; a function without
    /// outputs returns the target's "no value" type.
    pub fn combine_return_types<S: AsRef<str>>(&self, raw_types: &[S]) -> Result<String> {
        if raw_types.is_empty() {
            return Ok(self.target.no_value_type().to_string());
        }

        let mapped = raw_types
            .iter()
            .map(|raw| self.map_type(raw.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(mapped.join(self.target.union_separator()))
    }
}

impl std::fmt::Debug for TypeMapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeMapper")
            .field("target", &self.target.language())
            .finish()
    }
}
