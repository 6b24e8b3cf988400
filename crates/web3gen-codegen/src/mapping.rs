//! ABI to TypeScript type mapping
//!
//! Table-driven and recursive over the array suffix. Tokens outside the
//! supported grammar map to `any` rather than failing, so mapping is total
//! over every ABI document the loader accepts.

use web3gen_abi::{AbiType, FunctionDescriptor};

use crate::sanitize::{IdentifierKind, Sanitizer};

/// TypeScript type assigned to an ABI type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsType {
    /// All supported integer widths map to `bigint`
    BigInt,
    Boolean,
    /// Addresses, strings and byte blobs all travel as hex strings
    String,
    /// Fallback for tokens outside the supported grammar
    Any,
    Array(Box<TsType>),
}

impl TsType {
    pub fn from_abi(ty: &AbiType) -> Self {
        match ty {
            AbiType::Uint(_) | AbiType::Int(_) => Self::BigInt,
            AbiType::Bool => Self::Boolean,
            AbiType::Address | AbiType::String | AbiType::Bytes => Self::String,
            AbiType::Array(elem) => Self::Array(Box::new(Self::from_abi(elem))),
        }
    }
}

impl std::fmt::Display for TsType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BigInt => write!(f, "bigint"),
            Self::Boolean => write!(f, "boolean"),
            Self::String => write!(f, "string"),
            Self::Any => write!(f, "any"),
            Self::Array(elem) => write!(f, "{}[]", elem),
        }
    }
}

/// Map a raw ABI type token to its TypeScript type.
///
/// Array suffixes recurse on the element token, so `tuple[]` still maps to
/// `any[]` even though `tuple` itself is outside the grammar.
///
/// # Examples
///
/// ```
/// use web3gen_codegen::mapping::{map_token, TsType};
///
/// assert_eq!(map_token("uint256"), TsType::BigInt);
/// assert_eq!(map_token("uint256[]").to_string(), "bigint[]");
/// assert_eq!(map_token("tuple"), TsType::Any);
/// ```
pub fn map_token(token: &str) -> TsType {
    if let Some(elem) = token.strip_suffix("[]") {
        return TsType::Array(Box::new(map_token(elem)));
    }

    match AbiType::parse(token) {
        Ok(ty) => TsType::from_abi(&ty),
        Err(_) => {
            log::warn!("unsupported ABI type '{}', falling back to any", token);
            TsType::Any
        }
    }
}

/// Shape of a generated function's success value
#[derive(Debug, Clone, PartialEq)]
pub enum ReturnShape {
    /// No outputs; the call can only fail or succeed with no value
    ErrorOnly,
    /// Exactly one output of the given type
    Single(TsType),
    /// Two or more outputs, bundled into a synthesized record type
    Record(RecordType),
}

impl ReturnShape {
    /// The TypeScript spelling of the success value
    pub fn type_name(&self) -> String {
        match self {
            Self::ErrorOnly => "void".to_string(),
            Self::Single(ty) => ty.to_string(),
            Self::Record(record) => record.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordField {
    pub name: String,
    pub ty: TsType,
}

/// A response record synthesized for a multi-output function.
///
/// Emitted once per function, never deduplicated across functions even when
/// two records are structurally identical.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordType {
    pub name: String,
    pub fields: Vec<RecordField>,
}

/// Determine the return shape for a function's outputs.
///
/// Multi-output functions get a record named after the sanitized function
/// name; unnamed outputs become synthetic `value<index>` fields.
pub fn map_return_shape(
    descriptor: &FunctionDescriptor,
    sanitized_name: &str,
    sanitizer: &Sanitizer,
) -> ReturnShape {
    match descriptor.outputs.len() {
        0 => ReturnShape::ErrorOnly,
        1 => ReturnShape::Single(map_token(&descriptor.outputs[0].ty)),
        _ => {
            let fields = descriptor
                .outputs
                .iter()
                .map(|output| {
                    let name = if output.name.is_empty() {
                        format!("value{}", output.ordinal)
                    } else {
                        sanitizer.sanitize(&output.name, IdentifierKind::Parameter, output.ordinal)
                    };
                    RecordField { name, ty: map_token(&output.ty) }
                })
                .collect();
            ReturnShape::Record(RecordType {
                name: format!("{}Response", sanitized_name),
                fields,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use web3gen_abi::ContractArtifact;

    fn descriptor_from(json: &str) -> FunctionDescriptor {
        let artifact = ContractArtifact::from_json(json).unwrap();
        FunctionDescriptor::from_entry(&artifact.abi[0])
    }

    #[test]
    fn test_scalar_mapping_table() {
        assert_eq!(map_token("uint256"), TsType::BigInt);
        assert_eq!(map_token("int8"), TsType::BigInt);
        assert_eq!(map_token("uint16"), TsType::BigInt);
        assert_eq!(map_token("bool"), TsType::Boolean);
        assert_eq!(map_token("address"), TsType::String);
        assert_eq!(map_token("string"), TsType::String);
        assert_eq!(map_token("bytes"), TsType::String);
    }

    #[test]
    fn test_unknown_tokens_fall_back_to_any() {
        assert_eq!(map_token("tuple"), TsType::Any);
        assert_eq!(map_token("uint24"), TsType::Any);
        assert_eq!(map_token("fixed128x18"), TsType::Any);
        assert_eq!(map_token(""), TsType::Any);
    }

    #[test]
    fn test_array_mapping_recurses() {
        assert_eq!(
            map_token("uint256[]"),
            TsType::Array(Box::new(TsType::BigInt))
        );
        assert_eq!(map_token("address[][]").to_string(), "string[][]");
        assert_eq!(map_token("tuple[]").to_string(), "any[]");
    }

    #[test]
    fn test_mapping_is_deterministic() {
        assert_eq!(map_token("uint256[]"), map_token("uint256[]"));
    }

    #[test]
    fn test_empty_outputs_shape() {
        let descriptor = descriptor_from(
            r#"{"abi": [{"name": "pause", "type": "function", "stateMutability": "nonpayable", "inputs": [], "outputs": []}]}"#,
        );
        let shape = map_return_shape(&descriptor, "pause", &Sanitizer::default());
        assert_eq!(shape, ReturnShape::ErrorOnly);
        assert_eq!(shape.type_name(), "void");
    }

    #[test]
    fn test_single_output_shape() {
        let descriptor = descriptor_from(
            r#"{"abi": [{"name": "totalSupply", "type": "function", "stateMutability": "view", "inputs": [], "outputs": [{"name": "", "type": "uint256"}]}]}"#,
        );
        let shape = map_return_shape(&descriptor, "totalSupply", &Sanitizer::default());
        assert_eq!(shape, ReturnShape::Single(TsType::BigInt));
    }

    #[test]
    fn test_multi_output_record_names_unnamed_fields() {
        let descriptor = descriptor_from(
            r#"{"abi": [{"name": "getReserves", "type": "function", "stateMutability": "view", "inputs": [], "outputs": [
                {"name": "", "type": "uint256"},
                {"name": "blockTimestampLast", "type": "uint256"}
            ]}]}"#,
        );
        let shape = map_return_shape(&descriptor, "getReserves", &Sanitizer::default());

        match shape {
            ReturnShape::Record(record) => {
                assert_eq!(record.name, "getReservesResponse");
                assert_eq!(record.fields.len(), 2);
                assert_eq!(record.fields[0].name, "value0");
                assert_eq!(record.fields[1].name, "blockTimestampLast");
                assert_eq!(record.fields[1].ty, TsType::BigInt);
            }
            other => panic!("expected record shape, got {:?}", other),
        }
    }
}
