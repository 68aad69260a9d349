//! Resolvedores de tokens: listas estáticas e registro remoto com fallback.

use crate::config::ResolverConfig;
use actionfilter_core::utils::canonical_address;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Fonte da lista de tokens suportados em uma chain
#[async_trait]
pub trait TokenResolver: Send + Sync {
    /// Endereços (minúsculos) dos tokens da chain. Nunca falha: uma chain
    /// sem dados resulta em lista vazia.
    async fn resolve_tokens(&self, chain_id: u64) -> Vec<String>;
}

/// Tabela estática mantida manualmente, indexada por chain id
#[derive(Debug, Clone, Copy)]
pub struct StaticTokenList {
    tables: &'static [(u64, &'static [&'static str])],
}

impl StaticTokenList {
    pub const fn new(tables: &'static [(u64, &'static [&'static str])]) -> Self {
        Self { tables }
    }

    pub fn tokens(&self, chain_id: u64) -> Vec<String> {
        self.tables
            .iter()
            .find(|(id, _)| *id == chain_id)
            .map(|(_, tokens)| tokens.iter().map(|t| t.to_string()).collect())
            .unwrap_or_default()
    }

    /// Chains presentes na tabela
    pub fn chain_ids(&self) -> Vec<u64> {
        self.tables.iter().map(|(id, _)| *id).collect()
    }
}

#[async_trait]
impl TokenResolver for StaticTokenList {
    async fn resolve_tokens(&self, chain_id: u64) -> Vec<String> {
        self.tokens(chain_id)
    }
}

/// Falhas da fonte remota. Nunca propagadas ao chamador.
#[derive(Debug, Error)]
enum FetchError {
    #[error("falha na requisição: {0}")]
    Request(#[from] reqwest::Error),

    #[error("status HTTP {0}")]
    Status(u16),

    #[error("endereço inválido no payload: {0}")]
    InvalidAddress(String),
}

/// Entrada do registro remoto de ativos
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssetEntry {
    base_type: String,
    address: String,
}

/// Resolvedor em dois níveis: registro remoto e, em qualquer falha, a tabela
/// estática da chain
pub struct RemoteTokenResolver {
    client: Client,
    config: ResolverConfig,
    fallback: StaticTokenList,
}

impl RemoteTokenResolver {
    pub fn new(config: ResolverConfig, fallback: StaticTokenList) -> Self {
        Self {
            client: Client::new(),
            config,
            fallback,
        }
    }

    async fn fetch(&self, chain_id: u64) -> Result<Vec<String>, FetchError> {
        let resp = self
            .client
            .get(self.config.url_for(chain_id))
            .timeout(self.config.timeout)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let assets: Vec<AssetEntry> = resp.json().await?;
        assets
            .into_iter()
            .filter(|asset| !self.config.is_excluded(&asset.base_type))
            .map(|asset| {
                canonical_address(&asset.address).ok_or(FetchError::InvalidAddress(asset.address))
            })
            .collect()
    }
}

#[async_trait]
impl TokenResolver for RemoteTokenResolver {
    async fn resolve_tokens(&self, chain_id: u64) -> Vec<String> {
        match self.fetch(chain_id).await {
            Ok(tokens) => {
                debug!(
                    chain_id,
                    count = tokens.len(),
                    "lista de tokens obtida da fonte remota"
                );
                tokens
            }
            Err(e) => {
                warn!(chain_id, error = %e, "fonte remota indisponível, usando fallback estático");
                self.fallback.tokens(chain_id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TABLE: &[(u64, &[&str])] = &[(1, &["0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"])];

    #[tokio::test]
    async fn static_list_returns_table_or_empty() {
        let list = StaticTokenList::new(TABLE);
        assert_eq!(
            list.resolve_tokens(1).await,
            vec!["0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48".to_string()]
        );
        assert!(list.resolve_tokens(10).await.is_empty());
        assert_eq!(list.chain_ids(), vec![1]);
    }

    #[tokio::test]
    async fn unreachable_source_falls_back() {
        // porta 9 (discard) fechada em ambientes de teste
        let resolver = RemoteTokenResolver::new(
            ResolverConfig::new("http://127.0.0.1:9/{chain_id}"),
            StaticTokenList::new(TABLE),
        );
        assert_eq!(resolver.resolve_tokens(1).await, StaticTokenList::new(TABLE).tokens(1));
    }
}
