//! Contract ABI parser
//!
//! Parses contract ABI JSON into an ordered interface description. Function
//! entries are checked strictly; other entries are kept but read leniently
//! since the generator never emits them.

use abigen_common::{Error, Result, StateMutability};
use serde_json::Value;

/// Kind of an ABI entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Function,
    Constructor,
    Event,
    Error,
    Fallback,
    Receive,
    /// Unrecognised kind, kept verbatim
    Other(String),
}

impl From<&str> for EntryKind {
    fn from(s: &str) -> Self {
        match s {
            "function" => EntryKind::Function,
            "constructor" => EntryKind::Constructor,
            "event" => EntryKind::Event,
            "error" => EntryKind::Error,
            "fallback" => EntryKind::Fallback,
            "receive" => EntryKind::Receive,
            other => EntryKind::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::Function => write!(f, "function"),
            EntryKind::Constructor => write!(f, "constructor"),
            EntryKind::Event => write!(f, "event"),
            EntryKind::Error => write!(f, "error"),
            EntryKind::Fallback => write!(f, "fallback"),
            EntryKind::Receive => write!(f, "receive"),
            EntryKind::Other(kind) => write!(f, "{}", kind),
        }
    }
}

/// Function input or output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name, empty for unnamed outputs
    pub name: String,
    /// Canonical ABI type (the `type` field)
    pub declared_type: String,
    /// Solidity-level type (the `internalType` field)
    pub internal_type: Option<String>,
}

impl Parameter {
    /// Type an input is mapped from: `internalType`, falling back to `type`
    pub fn input_type(&self) -> &str {
        self.internal_type.as_deref().unwrap_or(&self.declared_type)
    }

    /// Type an output is mapped from
    pub fn output_type(&self) -> &str {
        &self.declared_type
    }
}

/// One entry of the ABI array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceEntry {
    pub kind: EntryKind,
    pub name: String,
    pub inputs: Vec<Parameter>,
    pub outputs: Vec<Parameter>,
    pub state_mutability: StateMutability,
}

impl InterfaceEntry {
    pub fn is_function(&self) -> bool {
        self.kind == EntryKind::Function
    }

    /// Solidity-style signature, e.g. `function transfer(address to, uint256 amount) returns (bool)`
    pub fn human_readable(&self) -> String {
        let input_types: Vec<String> = self
            .inputs
            .iter()
            .map(|param| {
                if param.name.is_empty() {
                    param.declared_type.clone()
                } else {
                    format!("{} {}", param.declared_type, param.name)
                }
            })
            .collect();

        let output_types: Vec<&str> = self.outputs.iter().map(Parameter::output_type).collect();
        let outputs_part = if output_types.is_empty() {
            String::new()
        } else {
            format!(" returns ({})", output_types.join(", "))
        };

        format!("{} {}({}){}", self.kind, self.name, input_types.join(", "), outputs_part)
    }
}

/// Parsed ABI, entries in document order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InterfaceDescription {
    pub entries: Vec<InterfaceEntry>,
}

impl InterfaceDescription {
    /// Function entries in document order
    pub fn functions(&self) -> impl Iterator<Item = &InterfaceEntry> {
        self.entries.iter().filter(|entry| entry.is_function())
    }
}

/// Contract ABI parser
pub struct AbiParser;

impl AbiParser {
    /// Create a new parser instance
    pub fn new() -> Self {
        Self
    }

    /// Parse an ABI file
    pub fn parse_file(&self, file_path: &str) -> Result<InterfaceDescription> {
        let content = std::fs::read_to_string(file_path)
            .map_err(|e| Error::config(format!("Failed to read ABI file {}: {}", file_path, e)))?;
        self.parse_content(&content)
    }

    /// Parse an ABI from JSON text
    pub fn parse_content(&self, content: &str) -> Result<InterfaceDescription> {
        let value: Value = serde_json::from_str(content)?;
        self.parse_abi(&value)
    }

    fn parse_abi(&self, value: &Value) -> Result<InterfaceDescription> {
        let items = value
            .as_array()
            .ok_or_else(|| Error::malformed("ABI must be a JSON array"))?;

        let entries = items
            .iter()
            .enumerate()
            .map(|(index, item)| self.parse_entry(index, item))
            .collect::<Result<Vec<_>>>()?;

        Ok(InterfaceDescription { entries })
    }

    fn parse_entry(&self, index: usize, item: &Value) -> Result<InterfaceEntry> {
        if !item.is_object() {
            return Err(Error::malformed(format!("entry {} is not an object", index)));
        }

        let kind = EntryKind::from(required_str(item, "type", || format!("entry {}", index))?);
        let state_mutability = Self::parse_state_mutability(item);

        if kind != EntryKind::Function {
            let inputs = item
                .get("inputs")
                .and_then(|v| v.as_array())
                .map(|arr| Self::parse_parameters_lenient(arr))
                .unwrap_or_default();
            let outputs = item
                .get("outputs")
                .and_then(|v| v.as_array())
                .map(|arr| Self::parse_parameters_lenient(arr))
                .unwrap_or_default();

            return Ok(InterfaceEntry {
                name: item
                    .get("name")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default()
                    .to_string(),
                kind,
                inputs,
                outputs,
                state_mutability,
            });
        }

        let name = required_str(item, "name", || format!("function entry {}", index))?.to_string();
        let context = format!("function `{}` (entry {})", name, index);
        let inputs = Self::parse_parameters(required_array(item, "inputs", &context)?, &context, "input")?;
        let outputs =
            Self::parse_parameters(required_array(item, "outputs", &context)?, &context, "output")?;

        Ok(InterfaceEntry {
            kind,
            name,
            inputs,
            outputs,
            state_mutability,
        })
    }

    fn parse_parameters(array: &[Value], context: &str, role: &str) -> Result<Vec<Parameter>> {
        array
            .iter()
            .enumerate()
            .map(|(position, param)| {
                let param_context = || format!("{} {} of {}", role, position, context);
                if !param.is_object() {
                    return Err(Error::malformed(format!("{} is not an object", param_context())));
                }

                let declared_type = required_str(param, "type", param_context)?.to_string();
                let name = optional_str(param, "name", param_context)?.unwrap_or_default();
                // empty internalType carries no information, map from `type` instead
                let internal_type = optional_str(param, "internalType", param_context)?
                    .filter(|internal| !internal.is_empty());

                Ok(Parameter {
                    name,
                    declared_type,
                    internal_type,
                })
            })
            .collect()
    }

    fn parse_parameters_lenient(array: &[Value]) -> Vec<Parameter> {
        array
            .iter()
            .filter_map(|param| {
                let declared_type = param.get("type")?.as_str()?.to_string();
                Some(Parameter {
                    name: param
                        .get("name")
                        .and_then(|v| v.as_str())
                        .unwrap_or_default()
                        .to_string(),
                    declared_type,
                    internal_type: param
                        .get("internalType")
                        .and_then(|v| v.as_str())
                        .map(String::from),
                })
            })
            .collect()
    }

    fn parse_state_mutability(item: &Value) -> StateMutability {
        if let Some(mutability) = item.get("stateMutability").and_then(|v| v.as_str()) {
            return StateMutability::from(mutability);
        }

        // Legacy ABIs only carry the constant/payable flags
        if item.get("constant").and_then(|v| v.as_bool()).unwrap_or(false) {
            StateMutability::View
        } else if item.get("payable").and_then(|v| v.as_bool()).unwrap_or(false) {
            StateMutability::Payable
        } else {
            StateMutability::NonPayable
        }
    }
}

impl Default for AbiParser {
    fn default() -> Self {
        Self::new()
    }
}

fn required_str<'a, F>(value: &'a Value, key: &str, context: F) -> Result<&'a str>
where
    F: FnOnce() -> String,
{
    match value.get(key) {
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(Error::malformed(format!("{}: `{}` must be a string", context(), key))),
        None => Err(Error::malformed(format!("{}: missing `{}`", context(), key))),
    }
}

fn optional_str<F>(value: &Value, key: &str, context: F) -> Result<Option<String>>
where
    F: FnOnce() -> String,
{
    match value.get(key) {
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Null) | None => Ok(None),
        Some(_) => Err(Error::malformed(format!("{}: `{}` must be a string", context(), key))),
    }
}

fn required_array<'a>(value: &'a Value, key: &str, context: &str) -> Result<&'a [Value]> {
    match value.get(key) {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(Error::malformed(format!("{}: `{}` must be an array", context, key))),
        None => Err(Error::malformed(format!("{}: missing `{}`", context, key))),
    }
}
