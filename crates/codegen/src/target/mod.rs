//! Target language backends
//!
//! A backend decides how mapped types are spelled, how nesting depth is
//! rendered and how the preamble, declaration blocks and container are laid out.

mod python;
mod typescript;

pub use python::Python;
pub use typescript::TypeScript;

use std::fmt;
use std::str::FromStr;

use abigen_common::{Error, Result};

use crate::generator::GeneratedFunction;
use crate::mapper::TypeFamily;
use crate::writer::SourceWriter;

/// Languages the generator can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetLanguage {
    #[default]
    Python,
    TypeScript,
}

impl TargetLanguage {
    /// Backend implementing this language
    pub fn backend(&self) -> &'static dyn Target {
        match self {
            TargetLanguage::Python => &Python,
            TargetLanguage::TypeScript => &TypeScript,
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetLanguage::Python => write!(f, "python"),
            TargetLanguage::TypeScript => write!(f, "typescript"),
        }
    }
}

impl FromStr for TargetLanguage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "python" | "py" => Ok(TargetLanguage::Python),
            "typescript" | "ts" => Ok(TargetLanguage::TypeScript),
            other => Err(Error::config(format!(
                "Unknown target language '{}' (expected python or typescript)",
                other
            ))),
        }
    }
}

/// Spelling and layout rules of one target language
pub trait Target: Sync {
    /// Language this backend emits
    fn language(&self) -> TargetLanguage;

    /// Whitespace emitted once per nesting level
    fn indent_unit(&self) -> &'static str;

    /// Type name for a supported type family
    fn type_name(&self, family: TypeFamily) -> &'static str;

    /// Return type of a function that returns nothing
    fn no_value_type(&self) -> &'static str;

    fn union_separator(&self) -> &'static str {
        " | "
    }

    /// Codec module referenced by the import line unless overridden
    fn default_codec_module(&self) -> &'static str;

    /// Words that cannot be used as function or parameter names
    fn is_reserved(&self, ident: &str) -> bool;

    fn is_identifier(&self, ident: &str) -> bool {
        let mut chars = ident.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    /// Whether `module` can be named by the import line
    fn is_module_name(&self, module: &str) -> bool;

    /// Emit the import line and open the container declaration
    fn emit_preamble(&self, out: &mut SourceWriter, codec_module: &str, class_name: &str);

    /// Emit one declaration block with its signature at `depth`
    fn emit_function(&self, out: &mut SourceWriter, function: &GeneratedFunction, depth: usize);

    /// Close the container opened by the preamble
    fn emit_container_end(&self, out: &mut SourceWriter, function_count: usize);
}

/// One-line summary placed above each declaration
pub(crate) fn summary(function: &GeneratedFunction) -> String {
    format!(
        "{} selector {} ({})",
        function.signature, function.selector, function.state_mutability
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_language_from_str() {
        assert_eq!("python".parse::<TargetLanguage>().unwrap(), TargetLanguage::Python);
        assert_eq!("TS".parse::<TargetLanguage>().unwrap(), TargetLanguage::TypeScript);
        assert!(matches!(
            "cobol".parse::<TargetLanguage>(),
            Err(Error::Config(_))
        ));
        assert_eq!(TargetLanguage::default(), TargetLanguage::Python);
        assert_eq!(TargetLanguage::TypeScript.to_string(), "typescript");
    }

    #[test]
    fn test_identifier_rules() {
        let python = TargetLanguage::Python.backend();
        assert!(python.is_identifier("balanceOf"));
        assert!(python.is_identifier("_owner2"));
        assert!(!python.is_identifier("2owner"));
        assert!(!python.is_identifier("owner-name"));
        assert!(!python.is_identifier(""));

        let typescript = TargetLanguage::TypeScript.backend();
        assert!(typescript.is_identifier("$owner"));
        assert!(!python.is_identifier("$owner"));
    }

    #[test]
    fn test_module_name_rules() {
        let python = TargetLanguage::Python.backend();
        assert!(python.is_module_name("eth_abi"));
        assert!(python.is_module_name("eth_abi.abi"));
        for bad in ["", "eth-abi", "@ethersproject/abi", "eth_abi.", "import", "eth abi"] {
            assert!(!python.is_module_name(bad), "'{bad}' should be rejected");
        }

        let typescript = TargetLanguage::TypeScript.backend();
        assert!(typescript.is_module_name("ethers"));
        assert!(typescript.is_module_name("@ethersproject/abi"));
        assert!(typescript.is_module_name("./codec.js"));
        for bad in ["", "ethers\"; alert(1); \"", "a\\b", "eth\nabi", "eth abi"] {
            assert!(!typescript.is_module_name(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_backends_report_their_language() {
        for language in [TargetLanguage::Python, TargetLanguage::TypeScript] {
            assert_eq!(language.backend().language(), language);
        }
    }
}
