use web3gen_abi::{AbiError, AbiType, ContractArtifact};

#[test]
fn test_malformed_error_message() {
    let err = AbiError::malformed("expected an object");
    assert_eq!(err.to_string(), "Malformed ABI: expected an object");
}

#[test]
fn test_unsupported_error_carries_token() {
    let err = AbiType::parse("fixed128x18").unwrap_err();
    match err {
        AbiError::UnsupportedType(token) => assert_eq!(token, "fixed128x18"),
        other => panic!("expected UnsupportedType, got {:?}", other),
    }
}

#[test]
fn test_parse_error_mentions_position() {
    let err = ContractArtifact::from_json(r#"{"abi": [}"#).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("Malformed ABI:"));
    assert!(message.contains("column"));
}

#[test]
fn test_errors_are_debuggable() {
    let err = AbiError::unsupported("uint7");
    let debug_str = format!("{:?}", err);
    assert!(debug_str.contains("UnsupportedType"));
}
