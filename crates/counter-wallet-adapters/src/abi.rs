use std::str::FromStr;

use alloy::dyn_abi::{DynSolType, DynSolValue, JsonAbiExt};
use alloy::json_abi::Function;
use alloy::primitives::{Address, Bytes, I256, U256};

use counter_wallet_core::{ContractCallRequest, PortError};

#[derive(Debug, Clone, Default)]
pub struct AbiAdapter;

impl AbiAdapter {
    /// Calldata for `request`: selector followed by the ABI-encoded arguments.
    pub fn encode_call(&self, request: &ContractCallRequest) -> Result<Bytes, PortError> {
        let function = select_function(&request.abi, &request.function_name)?;
        if function.inputs.len() != request.args.len() {
            return Err(PortError::Validation(format!(
                "argument count mismatch: expected {}, got {}",
                function.inputs.len(),
                request.args.len()
            )));
        }

        let mut dyn_args = Vec::with_capacity(request.args.len());
        for (input, arg) in function.inputs.iter().zip(request.args.iter()) {
            let ty: DynSolType = input.ty.parse().map_err(|e| {
                PortError::Validation(format!("unsupported type '{}': {e}", input.ty))
            })?;
            let value = parse_arg(arg, &ty).map_err(|e| {
                PortError::Validation(format!("arg '{}' parse failed: {e}", input.name))
            })?;
            dyn_args.push(value);
        }

        let encoded = function
            .abi_encode_input(&dyn_args)
            .map_err(|e| PortError::Validation(format!("abi encoding failed: {e}")))?;
        if encoded.len() < 4 || encoded[0..4] != function.selector()[..] {
            return Err(PortError::Validation("ABI_SELECTOR_MISMATCH".to_owned()));
        }
        Ok(Bytes::from(encoded))
    }
}

/// Find `name` in the fragment. A full signature such as `setNumber(uint256)`
/// picks a specific overload; a bare name takes the first match.
fn select_function<'a>(abi: &'a [Function], name: &str) -> Result<&'a Function, PortError> {
    if name.contains('(') {
        return abi
            .iter()
            .find(|f| f.signature() == name)
            .ok_or_else(|| PortError::Validation(format!("method signature not found: {name}")));
    }
    abi.iter()
        .find(|f| f.name == name)
        .ok_or_else(|| PortError::Validation(format!("method not found: {name}")))
}

/// Scalar argument from its string form. Integers accept decimal or
/// `0x`-prefixed hex.
fn parse_arg(raw: &str, ty: &DynSolType) -> Result<DynSolValue, String> {
    let raw = raw.trim();
    match ty {
        DynSolType::Uint(bits) => {
            let value = match raw.strip_prefix("0x") {
                Some(hex) => U256::from_str_radix(hex, 16),
                None => U256::from_str_radix(raw, 10),
            }
            .map_err(|e| format!("invalid uint: {e}"))?;
            Ok(DynSolValue::Uint(value, *bits))
        }
        DynSolType::Int(bits) => I256::from_str(raw)
            .map(|value| DynSolValue::Int(value, *bits))
            .map_err(|e| format!("invalid int: {e}")),
        DynSolType::Bool => match raw {
            "true" => Ok(DynSolValue::Bool(true)),
            "false" => Ok(DynSolValue::Bool(false)),
            other => Err(format!("invalid bool: {other}")),
        },
        DynSolType::Address => Address::from_str(raw)
            .map(DynSolValue::Address)
            .map_err(|e| format!("invalid address: {e}")),
        DynSolType::String => Ok(DynSolValue::String(raw.to_owned())),
        _ => Err(format!("type not supported: {ty:?}")),
    }
}
