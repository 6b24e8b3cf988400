//! Client module generation
//!
//! Assembles the final module description: state and codec support blocks,
//! the initializer, optional built-ins, then one stub per retained ABI
//! function in source order, with response records emitted directly before
//! the stub that references them.

pub mod emit;
pub mod function;
pub mod runtime;

use std::collections::HashSet;

use web3gen_abi::ContractArtifact;

use crate::error::{CodegenError, Result};
use crate::normalize::normalize_functions;
use crate::sanitize::Sanitizer;
use crate::selector::SignatureStyle;
use emit::ClientModule;
use function::{synthesize_function, GeneratedFunction};

#[derive(Debug, Clone)]
pub struct CodegenConfig {
    /// Output module name, used for the generated file
    pub module_name: String,
    pub signature_style: SignatureStyle,
    /// Emit the built-in account and balance helpers
    pub include_builtins: bool,
    /// Raw function names excluded during normalization
    pub skip_functions: Vec<String>,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            module_name: "client".to_string(),
            signature_style: SignatureStyle::default(),
            include_builtins: true,
            skip_functions: Vec::new(),
        }
    }
}

/// Drives the pipeline from a loaded artifact to a module description
#[derive(Debug, Clone)]
pub struct ClientGenerator {
    artifact: ContractArtifact,
    config: CodegenConfig,
    sanitizer: Sanitizer,
}

impl ClientGenerator {
    pub fn new(artifact: ContractArtifact) -> Self {
        Self::with_config(artifact, CodegenConfig::default())
    }

    pub fn with_config(artifact: ContractArtifact, config: CodegenConfig) -> Self {
        Self { artifact, config, sanitizer: Sanitizer::default() }
    }

    pub fn artifact(&self) -> &ContractArtifact {
        &self.artifact
    }

    pub fn config(&self) -> &CodegenConfig {
        &self.config
    }

    /// Run normalization, synthesis and assembly.
    ///
    /// Fails without producing a module when two stubs would end up with
    /// the same callable name, a stub would shadow a built-in or a
    /// response record, or a record would carry duplicate field names.
    pub fn generate(&self) -> Result<ClientModule> {
        let descriptors = normalize_functions(&self.artifact, &self.config.skip_functions);
        let functions: Vec<GeneratedFunction> = descriptors
            .iter()
            .map(|d| synthesize_function(d, &self.sanitizer, self.config.signature_style))
            .collect();
        self.check_collisions(&functions)?;

        let mut module = ClientModule::new(&self.config.module_name);
        module.push("state", runtime::state_block());
        module.push("support", runtime::support_block());
        module.push("init", runtime::init_block());
        if self.config.include_builtins {
            for (name, text) in runtime::builtin_blocks() {
                module.push(name, text);
            }
        }
        for function in &functions {
            if let Some(record) = &function.record {
                module.push(&record.name, function::render_record(record));
            }
            module.push(&function.sanitized_name, function::render(function));
        }
        Ok(module)
    }

    fn check_collisions(&self, functions: &[GeneratedFunction]) -> Result<()> {
        let mut seen: HashSet<String> = HashSet::new();
        seen.insert("init".to_string());
        if self.config.include_builtins {
            for name in runtime::BUILTIN_NAMES {
                seen.insert((*name).to_string());
            }
        }

        for function in functions {
            if !seen.insert(function.sanitized_name.clone()) {
                return Err(CodegenError::Assembly(format!(
                    "duplicate generated function name '{}'",
                    function.sanitized_name
                )));
            }

            let mut params: HashSet<&str> = HashSet::new();
            for name in &function.param_names {
                if !params.insert(name) {
                    return Err(CodegenError::Assembly(format!(
                        "duplicate parameter name '{}' in function '{}'",
                        name, function.sanitized_name
                    )));
                }
            }

            // record names share the module's top-level namespace
            if let Some(record) = &function.record {
                if !seen.insert(record.name.clone()) {
                    return Err(CodegenError::Assembly(format!(
                        "duplicate generated type name '{}'",
                        record.name
                    )));
                }

                let mut fields: HashSet<&str> = HashSet::new();
                for field in &record.fields {
                    if !fields.insert(&field.name) {
                        return Err(CodegenError::Assembly(format!(
                            "duplicate field name '{}' in record '{}'",
                            field.name, record.name
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}
