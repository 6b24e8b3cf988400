//! Function selector computation
//!
//! A selector is the first 4 bytes of the Keccak-256 digest of a function's
//! signature string. The signature is built from the function name and the
//! raw ABI type tokens of its inputs, never from mapped output-language
//! types, and never from outputs or mutability.

use sha3::{Digest, Keccak256};
use web3gen_abi::FunctionDescriptor;

/// How input types are joined inside the signature string.
///
/// Historical generated clients joined the types with no separator at all,
/// so `transfer(address,uint256)` hashed as `"transfer(addressuint256)"`.
/// `Canonical` produces the standard comma-separated Ethereum form instead.
/// Pick `Concatenated` only when bit-exact compatibility with clients
/// generated by the old scheme is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureStyle {
    /// Input types concatenated with no separator (legacy-compatible)
    Concatenated,
    /// Input types joined with commas, matching the Ethereum convention
    Canonical,
}

impl Default for SignatureStyle {
    fn default() -> Self {
        Self::Concatenated
    }
}

/// First 4 bytes of the Keccak-256 digest of a function signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selector([u8; 4]);

impl Selector {
    /// The 8-hex-character form used inside generated call data
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Build the signature string hashed for selector computation.
///
/// Uses each input's raw ABI type token as it appeared in the document.
pub fn signature(descriptor: &FunctionDescriptor, style: SignatureStyle) -> String {
    let types: Vec<&str> = descriptor.inputs.iter().map(|p| p.ty.as_str()).collect();
    let joined = match style {
        SignatureStyle::Concatenated => types.concat(),
        SignatureStyle::Canonical => types.join(","),
    };
    format!("{}({})", descriptor.name, joined)
}

/// Compute the 4-byte selector for a function.
///
/// Pure: identical `(name, input types)` always yield the identical
/// selector, regardless of outputs or mutability.
pub fn compute_selector(descriptor: &FunctionDescriptor, style: SignatureStyle) -> Selector {
    let mut hasher = Keccak256::new();
    hasher.update(signature(descriptor, style).as_bytes());
    let digest = hasher.finalize();

    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&digest[..4]);
    Selector(bytes)
}
