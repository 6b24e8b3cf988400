//! web3gen ABI
//!
//! Shared contract ABI model and error handling for the web3gen toolkit.
//! This crate loads compiled contract artifacts, interprets the ABI type
//! grammar and exposes the normalized function descriptors consumed by the
//! code generator.

pub mod error;
pub mod types;

// Re-export core types for convenience
pub use error::{AbiError, Result};
pub use types::{
    AbiEntry, AbiEntryKind, AbiParam, AbiType, ContractArtifact, FunctionDescriptor, Parameter,
    StateMutability,
};
