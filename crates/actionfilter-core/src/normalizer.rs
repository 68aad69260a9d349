//! Normalização dos parâmetros de uma ação.
//!
//! Endereços são convertidos para minúsculas e valores numéricos para a forma
//! decimal canônica de um inteiro de 256 bits. Qualquer entrada mal formada é
//! rejeitada aqui, antes da compilação.

use crate::error::{Error, Result};
use crate::types::{ActionRequest, AmountBound, NormalizedRequest};
use crate::utils::{canonical_address, decimal_to_u256, format_u256};

/// Normaliza uma requisição. A operação é idempotente.
pub fn normalize(request: &ActionRequest) -> Result<NormalizedRequest> {
    Ok(NormalizedRequest {
        chain_id: request.chain_id,
        contract_address: address("contractAddress", &request.contract_address)?,
        token_in: optional_address("tokenIn", request.token_in.as_deref())?,
        token_out: optional_address("tokenOut", request.token_out.as_deref())?,
        amount_in: optional_amount("amountIn", request.amount_in.as_ref())?,
        amount_out: optional_amount("amountOut", request.amount_out.as_ref())?,
        amount_one: optional_amount("amountOne", request.amount_one.as_ref())?,
        amount_two: optional_amount("amountTwo", request.amount_two.as_ref())?,
        recipient: optional_address("recipient", request.recipient.as_deref())?,
    })
}

fn address(field: &'static str, value: &str) -> Result<String> {
    canonical_address(value).ok_or_else(|| Error::InvalidAddress {
        field,
        value: value.to_string(),
    })
}

fn optional_address(field: &'static str, value: Option<&str>) -> Result<Option<String>> {
    value.map(|v| address(field, v)).transpose()
}

fn optional_amount(
    field: &'static str,
    bound: Option<&AmountBound>,
) -> Result<Option<AmountBound>> {
    bound
        .map(|b| {
            let value = decimal_to_u256(&b.value).ok_or_else(|| Error::InvalidAmount {
                field,
                value: b.value.clone(),
            })?;
            Ok(AmountBound {
                op: b.op,
                value: format_u256(&value),
            })
        })
        .transpose()
}
