use crate::generator::GeneratedFunction;
use crate::mapper::TypeFamily;
use crate::writer::SourceWriter;

use super::{summary, Target, TargetLanguage};

const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

/// Python backend: a class of annotated methods
pub struct Python;

impl Target for Python {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::Python
    }

    fn indent_unit(&self) -> &'static str {
        "    "
    }

    fn type_name(&self, family: TypeFamily) -> &'static str {
        match family {
            TypeFamily::Integer => "int",
            TypeFamily::Boolean => "bool",
            TypeFamily::Address => "str",
            TypeFamily::Bytes => "bytes",
        }
    }

    fn no_value_type(&self) -> &'static str {
        "None"
    }

    fn default_codec_module(&self) -> &'static str {
        "eth_abi"
    }

    // `self` is taken by the receiver of every generated method
    fn is_reserved(&self, ident: &str) -> bool {
        ident == "self" || KEYWORDS.contains(&ident)
    }

    // Dotted path of identifiers, e.g. `eth_abi.abi`
    fn is_module_name(&self, module: &str) -> bool {
        module
            .split('.')
            .all(|segment| self.is_identifier(segment) && !KEYWORDS.contains(&segment))
    }

    fn emit_preamble(&self, out: &mut SourceWriter, codec_module: &str, class_name: &str) {
        out.line(0, format!("import {}", codec_module));
        out.line(0, format!("class {}:", class_name));
    }

    fn emit_function(&self, out: &mut SourceWriter, function: &GeneratedFunction, depth: usize) {
        let params = std::iter::once("self".to_string())
            .chain(
                function
                    .parameters
                    .iter()
                    .map(|(name, ty)| format!("{}: {}", name, ty)),
            )
            .collect::<Vec<_>>()
            .join(", ");

        out.line(depth, format!("# {}", summary(function)));
        out.line(
            depth,
            format!("def {}({}) -> {}:", function.name, params, function.return_type),
        );
        out.line(depth + 1, "...");
    }

    fn emit_container_end(&self, out: &mut SourceWriter, function_count: usize) {
        // An empty class body is a syntax error
        if function_count == 0 {
            out.line(1, "pass");
        }
    }
}
