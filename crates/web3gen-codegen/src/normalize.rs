//! ABI entry filtering
//!
//! Reduces a loaded artifact to the ordered working set of function
//! descriptors the generator emits stubs for. The filter is stable: source
//! order is preserved and same-named overloads are all retained; if their
//! sanitized names clash they are rejected later, at assembly.

use web3gen_abi::{ContractArtifact, FunctionDescriptor};

/// Filter an artifact down to its callable function descriptors.
///
/// Retains entries of kind `function` whose name is not on the skip list.
/// The skip list matches raw names exactly and exists to exclude standard
/// methods the caller does not want stubs for, such as the approval methods
/// of a token standard.
pub fn normalize_functions(
    artifact: &ContractArtifact,
    skip: &[String],
) -> Vec<FunctionDescriptor> {
    artifact
        .functions()
        .filter(|entry| !skip.iter().any(|name| name == &entry.name))
        .map(FunctionDescriptor::from_entry)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use web3gen_abi::ContractArtifact;

    const MIXED_ABI: &str = r#"{"abi": [
        {"name": "Transfer", "type": "event", "inputs": []},
        {"name": "approve", "type": "function", "stateMutability": "nonpayable",
         "inputs": [{"name": "spender", "type": "address"}], "outputs": []},
        {"name": "transfer", "type": "function", "stateMutability": "nonpayable",
         "inputs": [{"name": "to", "type": "address"}], "outputs": []},
        {"type": "fallback", "stateMutability": "payable"}
    ]}"#;

    #[test]
    fn test_only_functions_are_retained() {
        let artifact = ContractArtifact::from_json(MIXED_ABI).unwrap();
        let descriptors = normalize_functions(&artifact, &[]);
        let names: Vec<&str> = descriptors.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["approve", "transfer"]);
    }

    #[test]
    fn test_skip_list_excludes_by_raw_name() {
        let artifact = ContractArtifact::from_json(MIXED_ABI).unwrap();
        let descriptors = normalize_functions(&artifact, &["approve".to_string()]);
        let names: Vec<&str> = descriptors.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["transfer"]);
    }

    #[test]
    fn test_event_plus_skipped_function_yields_nothing() {
        let artifact = ContractArtifact::from_json(
            r#"{"abi": [
                {"name": "Approval", "type": "event", "inputs": []},
                {"name": "approve", "type": "function", "stateMutability": "nonpayable",
                 "inputs": [], "outputs": []}
            ]}"#,
        )
        .unwrap();
        let descriptors = normalize_functions(&artifact, &["approve".to_string()]);
        assert!(descriptors.is_empty());
    }

    #[test]
    fn test_skip_match_is_case_sensitive() {
        let artifact = ContractArtifact::from_json(MIXED_ABI).unwrap();
        let descriptors = normalize_functions(&artifact, &["Approve".to_string()]);
        assert_eq!(descriptors.len(), 2);
    }

    #[test]
    fn test_overloads_are_all_retained() {
        let artifact = ContractArtifact::from_json(
            r#"{"abi": [
                {"name": "mint", "type": "function", "stateMutability": "nonpayable",
                 "inputs": [{"name": "to", "type": "address"}], "outputs": []},
                {"name": "mint", "type": "function", "stateMutability": "nonpayable",
                 "inputs": [{"name": "to", "type": "address"}, {"name": "amount", "type": "uint256"}],
                 "outputs": []}
            ]}"#,
        )
        .unwrap();
        let descriptors = normalize_functions(&artifact, &[]);
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].inputs.len(), 1);
        assert_eq!(descriptors[1].inputs.len(), 2);
    }
}
