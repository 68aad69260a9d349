//! Compilação de uma requisição normalizada em um filtro de transação.

use crate::catalog::Catalog;
use crate::registry;
use actionfilter_core::error::{Error, Result};
use actionfilter_core::{
    normalize, ActionRequest, ActionType, InputFilter, NormalizedRequest, TransactionFilter,
};
use tracing::debug;

/// Instancia todas as variantes de (protocolo, ação) e as combina em `$or`.
///
/// A compilação é atômica: qualquer variante que falhe invalida o filtro.
pub fn compile(
    catalog: &Catalog,
    protocol: &str,
    action: ActionType,
    request: &NormalizedRequest,
) -> Result<TransactionFilter> {
    let entry = catalog
        .lookup(protocol, action)
        .ok_or_else(|| Error::UnsupportedAction {
            protocol: protocol.to_string(),
            action: action.to_string(),
        })?;

    let branches = entry
        .templates()
        .iter()
        .map(|template| template.instantiate(request))
        .collect::<Result<Vec<_>>>()?;

    if !registry::is_known_contract(protocol, request.chain_id(), request.contract_address()) {
        debug!(
            protocol,
            chain_id = request.chain_id(),
            contract = request.contract_address(),
            "contrato fora do registro conhecido"
        );
    }

    debug!(
        protocol,
        %action,
        chain_id = request.chain_id(),
        branches = branches.len(),
        "filtro compilado"
    );

    Ok(TransactionFilter {
        chain_id: request.chain_id(),
        to: request.contract_address().to_string(),
        from: request.recipient().map(str::to_string),
        input: InputFilter {
            abi: entry.abi_binding(),
            branches,
        },
    })
}

/// Normaliza e compila
pub fn compile_request(
    catalog: &Catalog,
    protocol: &str,
    action: ActionType,
    request: &ActionRequest,
) -> Result<TransactionFilter> {
    let normalized = normalize(request)?;
    compile(catalog, protocol, action, &normalized)
}
