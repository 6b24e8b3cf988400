//! Per-function stub synthesis
//!
//! Turns one function descriptor into a self-contained TypeScript function:
//! sanitized signature, fixed-width call-data encoding prefixed with the
//! selector, and result decoding matching the return shape. Stubs share no
//! state with each other; they only reference the module's codec helpers.

use web3gen_abi::{AbiType, FunctionDescriptor, Parameter};

use crate::mapping::{map_return_shape, map_token, RecordType, ReturnShape, TsType};
use crate::sanitize::{IdentifierKind, Sanitizer};
use crate::selector::{compute_selector, Selector, SignatureStyle};

/// A generated function, ready for assembly
#[derive(Debug, Clone)]
pub struct GeneratedFunction {
    pub sanitized_name: String,
    pub selector: Selector,
    /// Sanitized parameter names, in declaration order
    pub param_names: Vec<String>,
    /// Head of the stub, e.g. `export async function f(x: bigint): Promise<void>`
    pub signature: String,
    /// Indented statement lines between the braces
    pub body: String,
    /// Response record for multi-output functions
    pub record: Option<RecordType>,
}

/// Synthesize the stub for one retained descriptor
pub fn synthesize_function(
    descriptor: &FunctionDescriptor,
    sanitizer: &Sanitizer,
    style: SignatureStyle,
) -> GeneratedFunction {
    let sanitized_name = sanitizer.sanitize(&descriptor.name, IdentifierKind::Method, 0);
    let selector = compute_selector(descriptor, style);
    let shape = map_return_shape(descriptor, &sanitized_name, sanitizer);

    let params: Vec<(String, TsType)> = descriptor
        .inputs
        .iter()
        .map(|input| {
            let name = sanitizer.sanitize(&input.name, IdentifierKind::Parameter, input.ordinal);
            (name, map_token(&input.ty))
        })
        .collect();

    let signature = render_signature(&sanitized_name, &params, &shape);
    let body = render_body(descriptor, &selector, &params, &shape);
    let param_names = params.into_iter().map(|(name, _)| name).collect();
    let record = match shape {
        ReturnShape::Record(record) => Some(record),
        _ => None,
    };

    GeneratedFunction { sanitized_name, selector, param_names, signature, body, record }
}

/// Render a stub into its final text
pub fn render(function: &GeneratedFunction) -> String {
    format!("{} {{\n{}\n}}", function.signature, function.body)
}

/// Render a response record interface
pub fn render_record(record: &RecordType) -> String {
    let mut lines = vec![format!("export interface {} {{", record.name)];
    for field in &record.fields {
        lines.push(format!("    {}: {};", field.name, field.ty));
    }
    lines.push("}".to_string());
    lines.join("\n")
}

fn render_signature(name: &str, params: &[(String, TsType)], shape: &ReturnShape) -> String {
    let list = params
        .iter()
        .map(|(name, ty)| format!("{}: {}", name, ty))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "export async function {}({}): Promise<{}>",
        name,
        list,
        shape.type_name()
    )
}

fn render_body(
    descriptor: &FunctionDescriptor,
    selector: &Selector,
    params: &[(String, TsType)],
    shape: &ReturnShape,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    let mut data = format!("const data = \"0x{}\"", selector.to_hex());
    for (input, (name, _)) in descriptor.inputs.iter().zip(params) {
        data.push_str(" + ");
        data.push_str(&encode_expr(input, name));
    }
    data.push(';');
    lines.push(data);

    match shape {
        ReturnShape::ErrorOnly => {
            lines.push("await callContract(data);".to_string());
        }
        ReturnShape::Single(_) => {
            lines.push("const result = await callContract(data);".to_string());
            lines.push(format!("return {};", decode_expr(&descriptor.outputs[0], "result")));
        }
        ReturnShape::Record(record) => {
            let expected = descriptor.outputs.len() * 64;
            lines.push("const result = await callContract(data);".to_string());
            lines.push("const body = stripHexPrefix(result);".to_string());
            lines.push(format!("if (body.length < {}) {{", expected));
            lines.push(format!(
                "    throw new Error(\"result too short: expected {} words\");",
                descriptor.outputs.len()
            ));
            lines.push("}".to_string());
            lines.push("return {".to_string());
            for (output, field) in descriptor.outputs.iter().zip(&record.fields) {
                let word = format!(
                    "body.slice({}, {})",
                    output.ordinal * 64,
                    (output.ordinal + 1) * 64
                );
                lines.push(format!("    {}: {},", field.name, decode_expr(output, &word)));
            }
            lines.push("};".to_string());
        }
    }

    lines
        .iter()
        .map(|line| format!("    {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Encoding rule for one input, keyed by its ABI type.
///
/// Inputs outside the static grammar go through `encodeValue`, which
/// dispatches on the runtime value and throws rather than miscompute.
fn encode_expr(input: &Parameter, ts_name: &str) -> String {
    match &input.resolved {
        Some(AbiType::Uint(_)) | Some(AbiType::Int(_)) => format!("encodeUint256({})", ts_name),
        Some(AbiType::Bool) => format!("encodeBool({})", ts_name),
        Some(AbiType::Address) => format!("encodeAddress({})", ts_name),
        Some(AbiType::String) | Some(AbiType::Bytes) => format!("encodeString({})", ts_name),
        Some(AbiType::Array(_)) | None => format!("encodeValue({})", ts_name),
    }
}

/// Decoding rule for one output word, keyed by its ABI type
fn decode_expr(output: &Parameter, source: &str) -> String {
    match &output.resolved {
        Some(AbiType::Uint(_)) | Some(AbiType::Int(_)) => format!("decodeUint256({})", source),
        Some(AbiType::Bool) => format!("decodeBool({})", source),
        Some(AbiType::Address) => format!("decodeAddress({})", source),
        // hex pass-through; the cast keeps array-typed declarations legal
        Some(AbiType::Array(_)) => format!("decodeString({}) as any", source),
        Some(AbiType::String) | Some(AbiType::Bytes) | None => {
            format!("decodeString({})", source)
        }
    }
}
