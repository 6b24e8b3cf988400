//! Code generation error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("Assembly error: {0}")]
    Assembly(String),

    #[error(transparent)]
    Abi(#[from] web3gen_abi::AbiError),
}

pub type Result<T> = std::result::Result<T, CodegenError>;
