//! Pendle: sem variantes de ação no catálogo, apenas o registro de tokens.
//!
//! A lista vem do backend público (`/core/v1/{chain_id}/assets/all`),
//! descartando os instrumentos derivados (SY, LP, PT, YT).

pub mod fallback;

use super::ProtocolDefinition;
use actionfilter_core::chains::{ARBITRUM_ONE, BSC, ETHEREUM, OPTIMISM};
use actionfilter_tokens::{RemoteTokenResolver, ResolverConfig, StaticTokenList};

pub const ID: &str = "pendle";

pub const ENDPOINT: &str = "https://api-v2.pendle.finance/core/v1/{chain_id}/assets/all";

/// Prefixo das variáveis de ambiente que sobrescrevem a configuração
pub const ENV_PREFIX: &str = "ACTIONFILTER_PENDLE";

pub const EXCLUDED_BASE_TYPES: &[&str] = &["SY", "PENDLE_LP", "PT", "YT"];

pub static DEFINITION: ProtocolDefinition = ProtocolDefinition {
    id: ID,
    chain_ids: &[ARBITRUM_ONE, ETHEREUM, OPTIMISM, BSC],
    actions: &[],
    contracts: &[],
};

/// Configuração padrão com sobrescritas de `ACTIONFILTER_PENDLE_*`
pub fn config() -> ResolverConfig {
    ResolverConfig::new(ENDPOINT)
        .with_excluded_base_types(EXCLUDED_BASE_TYPES.iter().copied())
        .override_from_env(ENV_PREFIX)
}

pub const fn fallback_tokens() -> StaticTokenList {
    StaticTokenList::new(fallback::FALLBACK_TOKENS)
}

pub fn resolver(config: ResolverConfig) -> RemoteTokenResolver {
    RemoteTokenResolver::new(config, fallback_tokens())
}
