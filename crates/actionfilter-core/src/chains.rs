//! Registro estático de chains suportadas

pub const ETHEREUM: u64 = 1;
pub const OPTIMISM: u64 = 10;
pub const BSC: u64 = 56;
pub const ARBITRUM_ONE: u64 = 42161;

static CHAIN_NAMES: &[(u64, &str)] = &[
    (ETHEREUM, "ethereum"),
    (OPTIMISM, "optimism"),
    (BSC, "bsc"),
    (ARBITRUM_ONE, "arbitrum-one"),
];

/// Identificador legível da chain
pub fn chain_name(chain_id: u64) -> Option<&'static str> {
    CHAIN_NAMES
        .iter()
        .find(|(id, _)| *id == chain_id)
        .map(|(_, name)| *name)
}

/// Chain id a partir do identificador legível
pub fn chain_id(name: &str) -> Option<u64> {
    CHAIN_NAMES
        .iter()
        .find(|(_, n)| n.eq_ignore_ascii_case(name))
        .map(|(id, _)| *id)
}
