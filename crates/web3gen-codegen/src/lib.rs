//! web3gen Codegen
//!
//! Compiles a contract ABI into a typed TypeScript client module: filters
//! the ABI down to callable functions, computes Keccak-256 call selectors,
//! maps ABI types to TypeScript types, sanitizes identifiers, synthesizes
//! per-function encode/decode stubs and assembles everything into an
//! ordered module description for a source emitter.

pub mod error;
pub mod generate;
pub mod mapping;
pub mod normalize;
pub mod sanitize;
pub mod selector;

pub use error::{CodegenError, Result};
pub use generate::emit::{ClientModule, ModuleBlock, PlainEmitter, SourceEmitter};
pub use generate::function::GeneratedFunction;
pub use generate::{ClientGenerator, CodegenConfig};
pub use mapping::{map_return_shape, map_token, RecordType, ReturnShape, TsType};
pub use normalize::normalize_functions;
pub use sanitize::{IdentifierKind, ReservedWords, Sanitizer};
pub use selector::{compute_selector, signature, Selector, SignatureStyle};

// Re-export the ABI model for convenience
pub use web3gen_abi::{
    AbiError, AbiType, ContractArtifact, FunctionDescriptor, Parameter, StateMutability,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_targets_client_module() {
        let config = CodegenConfig::default();
        assert_eq!(config.module_name, "client");
        assert_eq!(config.signature_style, SignatureStyle::Concatenated);
        assert!(config.include_builtins);
        assert!(config.skip_functions.is_empty());
    }

    #[test]
    fn test_reserved_words_are_versioned() {
        let reserved = ReservedWords::es2023();
        assert_eq!(reserved.version(), "ES2023");
        assert!(reserved.contains("yield"));
        assert!(!reserved.contains("balanceOf"));
    }
}
