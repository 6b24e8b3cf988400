use web3gen_codegen::{normalize_functions, ContractArtifact, StateMutability};

const VENDING_ABI: &str = r#"{"abi": [
    {"inputs": [], "stateMutability": "nonpayable", "type": "constructor"},
    {"name": "Purchase", "type": "event", "inputs": [{"indexed": true, "name": "buyer", "type": "address"}]},
    {"name": "price", "type": "function", "stateMutability": "view",
     "inputs": [], "outputs": [{"name": "", "type": "uint256"}]},
    {"name": "buy", "type": "function", "stateMutability": "payable",
     "inputs": [{"name": "count", "type": "uint16"}], "outputs": []},
    {"name": "approve", "type": "function", "stateMutability": "nonpayable",
     "inputs": [{"name": "spender", "type": "address"}], "outputs": [{"name": "", "type": "bool"}]},
    {"type": "receive", "stateMutability": "payable"}
]}"#;

#[test]
fn test_functions_survive_in_source_order() {
    let artifact = ContractArtifact::from_json(VENDING_ABI).unwrap();
    let descriptors = normalize_functions(&artifact, &[]);

    let names: Vec<&str> = descriptors.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["price", "buy", "approve"]);
}

#[test]
fn test_constructor_event_and_receive_are_dropped() {
    let artifact = ContractArtifact::from_json(VENDING_ABI).unwrap();
    let descriptors = normalize_functions(&artifact, &[]);

    assert_eq!(descriptors.len(), 3);
    assert!(descriptors.iter().all(|d| !d.name.is_empty()));
}

#[test]
fn test_multiple_skip_entries() {
    let artifact = ContractArtifact::from_json(VENDING_ABI).unwrap();
    let skip = vec!["approve".to_string(), "buy".to_string()];
    let descriptors = normalize_functions(&artifact, &skip);

    assert_eq!(descriptors.len(), 1);
    assert_eq!(descriptors[0].name, "price");
    assert_eq!(descriptors[0].mutability, StateMutability::View);
}

#[test]
fn test_descriptors_carry_normalized_parameters() {
    let artifact = ContractArtifact::from_json(VENDING_ABI).unwrap();
    let descriptors = normalize_functions(&artifact, &[]);

    let buy = descriptors.iter().find(|d| d.name == "buy").unwrap();
    assert_eq!(buy.mutability, StateMutability::Payable);
    assert_eq!(buy.inputs[0].name, "count");
    assert_eq!(buy.inputs[0].ty, "uint16");
    assert_eq!(buy.inputs[0].ordinal, 0);
}

#[test]
fn test_empty_abi_normalizes_to_nothing() {
    let artifact = ContractArtifact::from_json(r#"{"abi": []}"#).unwrap();
    assert!(normalize_functions(&artifact, &[]).is_empty());
}
