//! Fixed TypeScript blocks shared by every generated module
//!
//! Module state, the JSON-RPC transport, the fixed-width hex codec helpers
//! and the optional built-in convenience functions. Everything here is
//! plain text; per-function stubs reference these helpers by name.

/// Built-in convenience functions emitted alongside the contract stubs.
///
/// `init` is not listed because it is always emitted, builtins or not.
pub const BUILTIN_NAMES: &[&str] = &[
    "setContractAddress",
    "getAccounts",
    "getBalance",
    "getBlockNumber",
    "getTransactionCount",
    "weiToEther",
    "ethToWei",
];

/// Module-level connection state and protocol constants
pub fn state_block() -> String {
    r#"const JSONRPC_VERSION = "2.0";
const REQUEST_ID = 1;

let endpoint = "";
let contractAddress = "";"#
        .to_string()
}

/// Transport and codec helpers.
///
/// The encoder is fixed-width: every value becomes one 64-hex-digit word,
/// except addresses, which historically travel as their bare 40-character
/// body. Integers are masked into the unsigned 256-bit ring, so negative
/// values travel as their two's-complement word. Dynamic-type offset
/// headers are not produced.
pub fn support_block() -> String {
    r#"function stripHexPrefix(value: string): string {
    return value.startsWith("0x") ? value.slice(2) : value;
}

async function rpcCall(method: string, params: unknown[]): Promise<any> {
    const response = await fetch(endpoint, {
        method: "POST",
        headers: { "Content-Type": "application/json" },
        body: JSON.stringify({ jsonrpc: JSONRPC_VERSION, method: method, params: params, id: REQUEST_ID }),
    });
    const payload = await response.json();
    if (payload.error) {
        throw new Error(`RPC error ${payload.error.code}: ${payload.error.message}`);
    }
    return payload.result;
}

async function callContract(data: string): Promise<string> {
    return rpcCall("eth_call", [{ to: contractAddress, data: data }, "latest"]);
}

function encodeUint256(value: bigint | number): string {
    return BigInt.asUintN(256, BigInt(value)).toString(16).padStart(64, "0");
}

function encodeBool(value: boolean): string {
    return (value ? "1" : "0").padStart(64, "0");
}

function encodeAddress(value: string): string {
    if (/^0x[0-9a-fA-F]{40}$/.test(value)) {
        return value.slice(2).toLowerCase();
    }
    return encodeString(value);
}

function encodeString(value: string): string {
    let hexed = "";
    for (const byte of new TextEncoder().encode(value)) {
        hexed += byte.toString(16).padStart(2, "0");
    }
    return hexed.slice(0, 64).padEnd(64, "0");
}

function encodeValue(value: unknown): string {
    switch (typeof value) {
        case "bigint":
            return encodeUint256(value as bigint);
        case "number":
            return encodeUint256(value as number);
        case "boolean":
            return encodeBool(value as boolean);
        case "string":
            return encodeAddress(value as string);
        default:
            throw new Error("cannot encode value of unsupported type: " + typeof value);
    }
}

function decodeUint256(hex: string): bigint {
    const body = stripHexPrefix(hex);
    return body === "" ? BigInt(0) : BigInt("0x" + body);
}

function decodeBool(hex: string): boolean {
    return stripHexPrefix(hex) === "1".padStart(64, "0");
}

function decodeAddress(hex: string): string {
    return "0x" + stripHexPrefix(hex).slice(-40).toLowerCase();
}

function decodeString(hex: string): string {
    return stripHexPrefix(hex);
}"#
    .to_string()
}

/// The module initializer: endpoint URL plus optional contract address
pub fn init_block() -> String {
    r#"export function init(url: string, address: string = ""): void {
    endpoint = url;
    contractAddress = address;
}"#
    .to_string()
}

/// Named built-in function blocks, in emission order
pub fn builtin_blocks() -> Vec<(&'static str, String)> {
    vec![
        (
            "setContractAddress",
            r#"export function setContractAddress(address: string): void {
    contractAddress = address;
}"#
            .to_string(),
        ),
        (
            "getAccounts",
            r#"export async function getAccounts(): Promise<string[]> {
    return rpcCall("eth_accounts", []);
}"#
            .to_string(),
        ),
        (
            "getBalance",
            r#"export async function getBalance(address: string): Promise<bigint> {
    const result = await rpcCall("eth_getBalance", [address, "latest"]);
    return decodeUint256(result);
}"#
            .to_string(),
        ),
        (
            "getBlockNumber",
            r#"export async function getBlockNumber(): Promise<bigint> {
    const result = await rpcCall("eth_blockNumber", []);
    return decodeUint256(result);
}"#
            .to_string(),
        ),
        (
            "getTransactionCount",
            r#"export async function getTransactionCount(address: string): Promise<bigint> {
    const result = await rpcCall("eth_getTransactionCount", [address, "latest"]);
    return decodeUint256(result);
}"#
            .to_string(),
        ),
        (
            "weiToEther",
            r#"export function weiToEther(wei: bigint): number {
    return Number(wei) / 1e18;
}"#
            .to_string(),
        ),
        (
            "ethToWei",
            r#"export function ethToWei(ether: number): bigint {
    return BigInt(Math.round(ether * 1e18));
}"#
            .to_string(),
        ),
    ]
}
