//! Contract ABI data model shared across the web3gen toolkit
//!
//! Covers the raw wire form of an ABI document (as emitted by Solidity
//! tooling) and the normalized descriptors the code generator consumes.

use serde::Deserialize;
use std::path::Path;

use crate::error::{AbiError, Result};

/// Integer widths the type mapper treats as numeric.
///
/// Any other width still parses as a valid ABI document but falls back to
/// the dynamic output type during mapping.
pub const SUPPORTED_INT_BITS: [u16; 3] = [8, 16, 256];

/// A compiled contract artifact containing an `abi` array.
///
/// Unknown sibling fields (bytecode, metadata, ...) are ignored so that
/// artifacts produced by Hardhat, Foundry or solc can be loaded directly.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractArtifact {
    /// The ABI entries describing the contract interface
    pub abi: Vec<AbiEntry>,
}

impl ContractArtifact {
    /// Parse an artifact from a JSON string.
    ///
    /// # Examples
    ///
    /// ```
    /// use web3gen_abi::ContractArtifact;
    ///
    /// let artifact = ContractArtifact::from_json(
    ///     r#"{"abi": [{"name": "totalSupply", "type": "function", "inputs": [], "outputs": [{"name": "", "type": "uint256"}]}]}"#,
    /// ).unwrap();
    /// assert_eq!(artifact.abi.len(), 1);
    /// ```
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| AbiError::malformed(e.to_string()))
    }

    /// Read and parse an artifact from a file on disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Iterate over the entries that describe callable functions
    pub fn functions(&self) -> impl Iterator<Item = &AbiEntry> {
        self.abi
            .iter()
            .filter(|entry| entry.kind == AbiEntryKind::Function)
    }
}

/// Discriminates the kind of an ABI entry.
///
/// Kinds outside the Solidity grammar deserialize to `Unknown` instead of
/// failing; an entry with no `type` field at all rejects the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum AbiEntryKind {
    Function,
    Constructor,
    Event,
    Fallback,
    Receive,
    Error,
    Unknown,
}

impl From<String> for AbiEntryKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "function" => Self::Function,
            "constructor" => Self::Constructor,
            "event" => Self::Event,
            "fallback" => Self::Fallback,
            "receive" => Self::Receive,
            "error" => Self::Error,
            _ => Self::Unknown,
        }
    }
}

/// One entry of the `abi` array in its raw wire form
#[derive(Debug, Clone, Deserialize)]
pub struct AbiEntry {
    /// Entry name; events and functions carry one, fallback entries do not
    #[serde(default)]
    pub name: String,
    /// Entry kind, taken from the required `type` field
    #[serde(rename = "type")]
    pub kind: AbiEntryKind,
    /// Declared state mutability, absent on older compiler output
    #[serde(rename = "stateMutability", default)]
    pub state_mutability: StateMutability,
    #[serde(default)]
    pub inputs: Vec<AbiParam>,
    #[serde(default)]
    pub outputs: Vec<AbiParam>,
}

/// A single input or output parameter in its raw wire form.
///
/// A parameter with no `type` field rejects the whole document; the raw
/// token feeds selector computation, so it is never defaulted.
#[derive(Debug, Clone, Deserialize)]
pub struct AbiParam {
    /// Parameter name, frequently empty for outputs
    #[serde(default)]
    pub name: String,
    /// ABI type token such as `uint256` or `address[]`
    #[serde(rename = "type")]
    pub ty: String,
}

/// Declared state mutability of a function entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum StateMutability {
    Pure,
    View,
    Nonpayable,
    Payable,
}

impl From<String> for StateMutability {
    fn from(s: String) -> Self {
        match s.as_str() {
            "pure" => Self::Pure,
            "view" => Self::View,
            "payable" => Self::Payable,
            _ => Self::Nonpayable,
        }
    }
}

impl Default for StateMutability {
    fn default() -> Self {
        Self::Nonpayable
    }
}

impl StateMutability {
    /// Whether the function promises not to modify contract state
    pub fn is_read_only(&self) -> bool {
        matches!(self, Self::Pure | Self::View)
    }
}

/// Structured form of an ABI type token.
///
/// The grammar covers the tokens the type mapper assigns dedicated output
/// types to; everything else is left unparsed and mapped to the dynamic
/// fallback type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbiType {
    /// Unsigned integer of the given bit width
    Uint(u16),
    /// Signed integer of the given bit width
    Int(u16),
    Bool,
    Address,
    String,
    Bytes,
    /// Dynamic array of an element type, e.g. `uint256[]`
    Array(Box<AbiType>),
}

impl AbiType {
    /// Parse an ABI type token into its structured form.
    ///
    /// Fixed-size arrays, tuples and integer widths outside
    /// [`SUPPORTED_INT_BITS`] are rejected; callers treat the rejection as
    /// "map to the dynamic fallback type", not as a hard failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use web3gen_abi::AbiType;
    ///
    /// assert_eq!(AbiType::parse("uint256").unwrap(), AbiType::Uint(256));
    /// assert_eq!(
    ///     AbiType::parse("address[]").unwrap(),
    ///     AbiType::Array(Box::new(AbiType::Address)),
    /// );
    /// assert!(AbiType::parse("uint24").is_err());
    /// ```
    pub fn parse(token: &str) -> Result<Self> {
        if let Some(elem) = token.strip_suffix("[]") {
            let inner = Self::parse(elem).map_err(|_| AbiError::unsupported(token))?;
            return Ok(Self::Array(Box::new(inner)));
        }

        match token {
            "bool" => Ok(Self::Bool),
            "address" => Ok(Self::Address),
            "string" => Ok(Self::String),
            "bytes" => Ok(Self::Bytes),
            _ => {
                if let Some(bits) = token.strip_prefix("uint") {
                    return Self::parse_bits(bits, token).map(Self::Uint);
                }
                if let Some(bits) = token.strip_prefix("int") {
                    return Self::parse_bits(bits, token).map(Self::Int);
                }
                Err(AbiError::unsupported(token))
            }
        }
    }

    fn parse_bits(bits: &str, token: &str) -> Result<u16> {
        let width: u16 = bits
            .parse()
            .map_err(|_| AbiError::unsupported(token))?;
        if SUPPORTED_INT_BITS.contains(&width) {
            Ok(width)
        } else {
            Err(AbiError::unsupported(token))
        }
    }
}

impl std::fmt::Display for AbiType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uint(bits) => write!(f, "uint{}", bits),
            Self::Int(bits) => write!(f, "int{}", bits),
            Self::Bool => write!(f, "bool"),
            Self::Address => write!(f, "address"),
            Self::String => write!(f, "string"),
            Self::Bytes => write!(f, "bytes"),
            Self::Array(elem) => write!(f, "{}[]", elem),
        }
    }
}

/// A normalized function parameter.
///
/// Keeps the raw type token alongside the structured form so that selector
/// computation can always reproduce the original spelling.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// Declared name, possibly empty
    pub name: String,
    /// Raw ABI type token as it appeared in the document
    pub ty: String,
    /// Structured form, `None` when the token is outside the grammar
    pub resolved: Option<AbiType>,
    /// Zero-based position within the parameter list
    pub ordinal: usize,
}

impl Parameter {
    /// Build a parameter from its raw wire form
    pub fn from_abi(param: &AbiParam, ordinal: usize) -> Self {
        Self {
            name: param.name.clone(),
            ty: param.ty.clone(),
            resolved: AbiType::parse(&param.ty).ok(),
            ordinal,
        }
    }
}

/// A normalized callable function extracted from the ABI
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDescriptor {
    /// Declared function name, before any identifier sanitization
    pub name: String,
    pub mutability: StateMutability,
    pub inputs: Vec<Parameter>,
    pub outputs: Vec<Parameter>,
}

impl FunctionDescriptor {
    /// Build a descriptor from a raw entry.
    ///
    /// The caller is expected to have filtered on [`AbiEntryKind::Function`]
    /// already; the entry kind is not re-checked here.
    pub fn from_entry(entry: &AbiEntry) -> Self {
        Self {
            name: entry.name.clone(),
            mutability: entry.state_mutability,
            inputs: entry
                .inputs
                .iter()
                .enumerate()
                .map(|(i, p)| Parameter::from_abi(p, i))
                .collect(),
            outputs: entry
                .outputs
                .iter()
                .enumerate()
                .map(|(i, p)| Parameter::from_abi(p, i))
                .collect(),
        }
    }
}
