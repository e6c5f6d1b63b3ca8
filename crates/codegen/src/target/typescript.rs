use crate::generator::GeneratedFunction;
use crate::mapper::TypeFamily;
use crate::writer::SourceWriter;

use super::{summary, Target, TargetLanguage};

const RESERVED: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "constructor",
    "continue", "debugger", "default", "delete", "do", "else", "enum", "eval", "export",
    "extends", "false", "finally", "for", "function", "if", "implements", "import", "in",
    "instanceof", "interface", "let", "new", "null", "package", "private", "protected",
    "public", "return", "static", "super", "switch", "this", "throw", "true", "try", "typeof",
    "var", "void", "while", "with", "yield",
];

/// TypeScript backend: an exported class of typed methods
pub struct TypeScript;

impl TypeScript {
    /// Binding name for the codec namespace import, e.g. `@ethersproject/abi` -> `abi`
    fn module_alias(module: &str) -> String {
        let last = module.rsplit('/').next().unwrap_or(module);
        let alias: String = last
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        match alias.chars().next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                if RESERVED.contains(&alias.as_str()) {
                    format!("{}_", alias)
                } else {
                    alias
                }
            }
            _ => format!("_{}", alias),
        }
    }
}

impl Target for TypeScript {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::TypeScript
    }

    fn indent_unit(&self) -> &'static str {
        "  "
    }

    fn type_name(&self, family: TypeFamily) -> &'static str {
        match family {
            TypeFamily::Integer => "bigint",
            TypeFamily::Boolean => "boolean",
            TypeFamily::Address => "string",
            TypeFamily::Bytes => "Uint8Array",
        }
    }

    fn no_value_type(&self) -> &'static str {
        "void"
    }

    fn default_codec_module(&self) -> &'static str {
        "ethers"
    }

    fn is_reserved(&self, ident: &str) -> bool {
        RESERVED.contains(&ident)
    }

    fn is_identifier(&self, ident: &str) -> bool {
        let mut chars = ident.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
    }

    // The specifier is written inside a double-quoted string literal
    fn is_module_name(&self, module: &str) -> bool {
        !module.is_empty()
            && module
                .chars()
                .all(|c| !c.is_control() && !c.is_whitespace() && c != '"' && c != '\\')
    }

    fn emit_preamble(&self, out: &mut SourceWriter, codec_module: &str, class_name: &str) {
        out.line(
            0,
            format!(
                "import * as {} from \"{}\";",
                Self::module_alias(codec_module),
                codec_module
            ),
        );
        out.line(0, format!("export class {} {{", class_name));
    }

    fn emit_function(&self, out: &mut SourceWriter, function: &GeneratedFunction, depth: usize) {
        let params = function
            .parameters
            .iter()
            .map(|(name, ty)| format!("{}: {}", name, ty))
            .collect::<Vec<_>>()
            .join(", ");

        out.line(depth, format!("// {}", summary(function)));
        out.line(
            depth,
            format!("{}({}): {} {{", function.name, params, function.return_type),
        );
        out.line(
            depth + 1,
            format!("throw new Error(\"{} is not implemented\");", function.name),
        );
        out.line(depth, "}");
    }

    fn emit_container_end(&self, out: &mut SourceWriter, _function_count: usize) {
        out.line(0, "}");
    }
}
