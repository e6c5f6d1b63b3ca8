//! Generator configuration

use std::path::PathBuf;

use abigen_common::{Error, Result};

use crate::target::TargetLanguage;

/// Container name used when the caller does not pick one
pub const DEFAULT_CLASS_NAME: &str = "ABI";

/// Configuration for interface code generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// File the generated source is written to
    pub output_path: PathBuf,
    /// Name of the generated container class
    pub class_name: String,
    /// Language to emit
    pub target: TargetLanguage,
    /// Codec module named in the import line, target default when unset
    pub codec_module: Option<String>,
    /// Render without writing the output file
    pub dry_run: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::new(),
            class_name: DEFAULT_CLASS_NAME.to_string(),
            target: TargetLanguage::default(),
            codec_module: None,
            dry_run: false,
        }
    }
}

impl GeneratorConfig {
    /// Configuration writing to `output_path` with every other setting defaulted
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            ..Self::default()
        }
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_target(mut self, target: TargetLanguage) -> Self {
        self.target = target;
        self
    }

    /// Module referenced by the generated import line
    pub fn codec_module(&self) -> &str {
        self.codec_module
            .as_deref()
            .unwrap_or_else(|| self.target.backend().default_codec_module())
    }

    /// Validate the configuration before a generation run
    pub fn validate(&self) -> Result<()> {
        if !self.dry_run && self.output_path.as_os_str().is_empty() {
            return Err(Error::config("Output path is required"));
        }

        self.validate_codec_module()?;
        self.validate_class_name()
    }

    /// The codec module must be importable by the target's import line
    pub fn validate_codec_module(&self) -> Result<()> {
        let codec = self.codec_module();
        if !self.target.backend().is_module_name(codec) {
            return Err(Error::config(format!(
                "Invalid {} codec module name '{}'",
                self.target, codec
            )));
        }
        Ok(())
    }

    /// The container name must be an unreserved identifier in the target language
    pub fn validate_class_name(&self) -> Result<()> {
        let target = self.target.backend();
        if !target.is_identifier(&self.class_name) || target.is_reserved(&self.class_name) {
            return Err(Error::config(format!(
                "Class name '{}' is not a valid {} identifier",
                self.class_name, self.target
            )));
        }
        Ok(())
    }
}
