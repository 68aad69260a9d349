/*!
 * ActionFilter Utils
 *
 * Utilitários de endereço, valores e hashing usados em toda a workspace
 */

use ethereum_types::{Address, U256};
use std::str::FromStr;
use tiny_keccak::{Hasher, Keccak};

/// Converte uma string `0x` + 40 dígitos hexadecimais para Address.
///
/// Aceita qualquer combinação de maiúsculas/minúsculas; rejeita strings sem
/// prefixo ou com tamanho diferente de 20 bytes.
pub fn hex_to_address(hex: &str) -> Option<Address> {
    let hex_str = hex.strip_prefix("0x").or_else(|| hex.strip_prefix("0X"))?;
    if hex_str.len() != 40 || !hex_str.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    Address::from_str(hex_str).ok()
}

/// Formata um Address em minúsculas com prefixo `0x`
pub fn format_address(address: &Address) -> String {
    format!("0x{:x}", address)
}

/// Forma canônica de um endereço (minúsculas), quando válido
pub fn canonical_address(hex: &str) -> Option<String> {
    hex_to_address(hex).map(|addr| format_address(&addr))
}

/// Converte uma string decimal para U256.
///
/// Apenas dígitos ASCII são aceitos: sinais, pontos e expoentes são rejeitados.
pub fn decimal_to_u256(decimal: &str) -> Option<U256> {
    if decimal.is_empty() || !decimal.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    U256::from_dec_str(decimal).ok()
}

/// Formata um U256 em decimal
pub fn format_u256(value: &U256) -> String {
    value.to_string()
}

/// Calcula o hash Keccak-256 de dados
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    let mut result = [0u8; 32];
    hasher.update(data);
    hasher.finalize(&mut result);
    result
}

/// Seletor de 4 bytes de uma assinatura canônica (`name(type,...)`)
pub fn selector(canonical_signature: &str) -> [u8; 4] {
    let hash = keccak256(canonical_signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

/// Formata um seletor como `0x` + 8 dígitos hexadecimais
pub fn format_selector(selector: &[u8; 4]) -> String {
    format!("0x{}", hex::encode(selector))
}
