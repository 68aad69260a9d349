//! Configuração dos resolvedores remotos de tokens.

use std::time::Duration;

/// Placeholder substituído pelo chain id no endpoint
pub const CHAIN_ID_PLACEHOLDER: &str = "{chain_id}";

/// Configuração de um resolvedor remoto de tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// URL com `{chain_id}`, ex. `https://api/core/v1/{chain_id}/assets/all`
    pub endpoint: String,
    /// Tempo máximo da requisição antes de cair no fallback
    pub timeout: Duration,
    /// Valores de `baseType` descartados (instrumentos derivados)
    pub excluded_base_types: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            timeout: Duration::from_secs(10),
            excluded_base_types: Vec::new(),
        }
    }
}

impl ResolverConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_excluded_base_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_base_types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Sobrescreve endpoint e timeout a partir de `{prefix}_ENDPOINT` e
    /// `{prefix}_TIMEOUT_MS`, quando definidas
    pub fn override_from_env(self, prefix: &str) -> Self {
        self.override_with(|name| std::env::var(format!("{prefix}_{name}")).ok())
    }

    fn override_with(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(endpoint) = lookup("ENDPOINT").filter(|v| !v.trim().is_empty()) {
            self.endpoint = endpoint;
        }
        if let Some(ms) = lookup("TIMEOUT_MS").and_then(|v| v.trim().parse::<u64>().ok()) {
            self.timeout = Duration::from_millis(ms);
        }
        self
    }

    /// URL final para a chain
    pub fn url_for(&self, chain_id: u64) -> String {
        self.endpoint
            .replace(CHAIN_ID_PLACEHOLDER, &chain_id.to_string())
    }

    pub fn is_excluded(&self, base_type: &str) -> bool {
        self.excluded_base_types.iter().any(|t| t == base_type)
    }
}
