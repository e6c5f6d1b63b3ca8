//! Tests for contract interface generation

use super::*;


mod codegen_tests {
    use super::*;

    #[test]
    fn test_generator_config_creation() {
        let config = GeneratorConfig::default();
        let emitter = CodeEmitter::new(config.clone());
        assert_eq!(emitter.config(), &config);
    }

    #[test]
    fn test_parser_creation() {
        let parser = AbiParser::new();
        let description = parser.parse_content("[]").unwrap();
        assert!(description.entries.is_empty());
    }

    #[test]
    fn test_parse_missing_file() {
        let parser = AbiParser::new();
        let result = parser.parse_file("./does/not/exist.json");
        assert!(matches!(result, Err(abigen_common::Error::Config(_))));
    }

    #[test]
    fn test_invalid_class_name_is_rejected_before_generation() {
        let config = GeneratorConfig::default().with_class_name("not-a-class");
        let emitter = CodeEmitter::new(config);
        let result = emitter.generate(&InterfaceDescription::default());
        assert!(matches!(result, Err(abigen_common::Error::Config(_))));
    }

    #[test]
    fn test_invalid_codec_module_is_rejected_before_generation() {
        let config = GeneratorConfig {
            codec_module: Some("@ethersproject/abi".to_string()),
            ..GeneratorConfig::default()
        };
        let result = CodeEmitter::new(config).generate(&InterfaceDescription::default());
        assert!(matches!(result, Err(abigen_common::Error::Config(_))));
    }
}
