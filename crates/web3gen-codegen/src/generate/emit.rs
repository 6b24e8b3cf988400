//! Module description and source emission
//!
//! The assembler produces a [`ClientModule`], an ordered list of named text
//! blocks. Turning that into final source text is behind the
//! [`SourceEmitter`] trait so a pretty-printer can be swapped in without
//! touching the pipeline.

/// One named block of generated source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleBlock {
    pub name: String,
    pub text: String,
}

/// Ordered description of a generated client module
#[derive(Debug, Clone, Default)]
pub struct ClientModule {
    module_name: String,
    blocks: Vec<ModuleBlock>,
}

impl ClientModule {
    pub fn new(module_name: &str) -> Self {
        Self { module_name: module_name.to_string(), blocks: Vec::new() }
    }

    /// Name used for the output file, without extension
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    pub fn blocks(&self) -> &[ModuleBlock] {
        &self.blocks
    }

    /// Append a block; emission order is append order
    pub fn push(&mut self, name: &str, text: String) {
        self.blocks.push(ModuleBlock { name: name.to_string(), text });
    }

    pub fn block_names(&self) -> Vec<&str> {
        self.blocks.iter().map(|b| b.name.as_str()).collect()
    }
}

/// Renders a module description into final source text
pub trait SourceEmitter {
    fn emit(&self, module: &ClientModule) -> String;
}

/// Minimal emitter: a generated-file header, then blocks separated by
/// blank lines. Block texts pass through verbatim.
#[derive(Debug, Clone, Default)]
pub struct PlainEmitter;

impl SourceEmitter for PlainEmitter {
    fn emit(&self, module: &ClientModule) -> String {
        let mut out = format!(
            "// Generated by web3gen v{}. Do not edit by hand.\n",
            env!("CARGO_PKG_VERSION")
        );
        for block in module.blocks() {
            out.push('\n');
            out.push_str(&block.text);
            out.push('\n');
        }
        out
    }
}
