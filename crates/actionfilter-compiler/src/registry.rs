//! Registro estático de contratos conhecidos por (protocolo, chain).

use crate::protocols;

/// Contratos conhecidos do protocolo na chain
pub fn known_contracts(protocol: &str, chain_id: u64) -> Vec<&'static str> {
    protocols::definition(protocol)
        .and_then(|d| d.contracts.iter().find(|(id, _)| *id == chain_id))
        .map(|(_, contracts)| contracts.to_vec())
        .unwrap_or_default()
}

pub fn is_known_contract(protocol: &str, chain_id: u64, address: &str) -> bool {
    known_contracts(protocol, chain_id)
        .iter()
        .any(|c| c.eq_ignore_ascii_case(address))
}

/// Protocolos com algum contrato conhecido na chain
pub fn protocols_on(chain_id: u64) -> Vec<&'static str> {
    protocols::BUILTIN
        .iter()
        .filter(|d| d.contracts.iter().any(|(id, _)| *id == chain_id))
        .map(|d| d.id)
        .collect()
}
