//! Plugins de protocolo: ponto de entrada de alto nível por protocolo.

use crate::catalog::Catalog;
use crate::compiler::compile_request;
use crate::protocols::{self, paraswap, pendle, vela, ProtocolDefinition};
use crate::registry;
use actionfilter_core::error::{Error, Result};
use actionfilter_core::{ActionRequest, ActionType, TransactionFilter};
use actionfilter_tokens::{RemoteTokenResolver, StaticTokenList, TokenResolver};
use async_trait::async_trait;

#[async_trait]
pub trait ProtocolPlugin: Send + Sync {
    fn definition(&self) -> &'static ProtocolDefinition;

    /// Fonte da lista de tokens suportados
    fn token_resolver(&self) -> &dyn TokenResolver;

    fn id(&self) -> &'static str {
        self.definition().id
    }

    fn chain_ids(&self) -> &'static [u64] {
        self.definition().chain_ids
    }

    fn supported_actions(&self) -> Vec<ActionType> {
        Catalog::builtin().actions(self.id())
    }

    fn known_contracts(&self, chain_id: u64) -> Vec<&'static str> {
        registry::known_contracts(self.id(), chain_id)
    }

    /// Normaliza e compila a ação no catálogo embutido
    fn compile(&self, action: ActionType, request: &ActionRequest) -> Result<TransactionFilter> {
        compile_request(Catalog::builtin(), self.id(), action, request)
    }

    async fn supported_tokens(&self, chain_id: u64) -> Vec<String> {
        self.token_resolver().resolve_tokens(chain_id).await
    }

    /// Tokens aceitos por uma ação; por padrão, os mesmos do protocolo
    async fn action_tokens(&self, _action: ActionType, chain_id: u64) -> Vec<String> {
        self.supported_tokens(chain_id).await
    }
}

pub struct ParaswapPlugin {
    tokens: StaticTokenList,
    stake_tokens: StaticTokenList,
}

impl Default for ParaswapPlugin {
    fn default() -> Self {
        Self {
            tokens: paraswap::swap_tokens(),
            stake_tokens: paraswap::stake_tokens(),
        }
    }
}

#[async_trait]
impl ProtocolPlugin for ParaswapPlugin {
    fn definition(&self) -> &'static ProtocolDefinition {
        &paraswap::DEFINITION
    }

    fn token_resolver(&self) -> &dyn TokenResolver {
        &self.tokens
    }

    async fn action_tokens(&self, action: ActionType, chain_id: u64) -> Vec<String> {
        match action {
            ActionType::Stake => self.stake_tokens.resolve_tokens(chain_id).await,
            _ => self.supported_tokens(chain_id).await,
        }
    }
}

pub struct VelaPlugin {
    tokens: StaticTokenList,
}

impl Default for VelaPlugin {
    fn default() -> Self {
        Self { tokens: vela::tokens() }
    }
}

#[async_trait]
impl ProtocolPlugin for VelaPlugin {
    fn definition(&self) -> &'static ProtocolDefinition {
        &vela::DEFINITION
    }

    fn token_resolver(&self) -> &dyn TokenResolver {
        &self.tokens
    }
}

pub struct PendlePlugin {
    resolver: RemoteTokenResolver,
}

impl PendlePlugin {
    pub fn new(resolver: RemoteTokenResolver) -> Self {
        Self { resolver }
    }
}

impl Default for PendlePlugin {
    fn default() -> Self {
        Self::new(pendle::resolver(pendle::config()))
    }
}

#[async_trait]
impl ProtocolPlugin for PendlePlugin {
    fn definition(&self) -> &'static ProtocolDefinition {
        &pendle::DEFINITION
    }

    fn token_resolver(&self) -> &dyn TokenResolver {
        &self.resolver
    }
}

/// Conjunto de plugins indexado pelo id do protocolo
pub struct PluginRegistry {
    plugins: Vec<Box<dyn ProtocolPlugin>>,
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self {
            plugins: vec![
                Box::new(ParaswapPlugin::default()),
                Box::new(VelaPlugin::default()),
                Box::new(PendlePlugin::default()),
            ],
        }
    }
}

impl PluginRegistry {
    pub fn new(plugins: Vec<Box<dyn ProtocolPlugin>>) -> Self {
        Self { plugins }
    }

    pub fn get(&self, id: &str) -> Option<&dyn ProtocolPlugin> {
        self.plugins
            .iter()
            .find(|p| p.id() == id)
            .map(|p| p.as_ref())
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.plugins.iter().map(|p| p.id()).collect()
    }

    /// Plugins com suporte à chain
    pub fn for_chain(&self, chain_id: u64) -> Vec<&dyn ProtocolPlugin> {
        self.plugins
            .iter()
            .filter(|p| p.definition().supports_chain(chain_id))
            .map(|p| p.as_ref())
            .collect()
    }

    pub fn compile(
        &self,
        protocol: &str,
        action: ActionType,
        request: &ActionRequest,
    ) -> Result<TransactionFilter> {
        match self.get(protocol) {
            Some(plugin) => plugin.compile(action, request),
            None => Err(Error::UnsupportedAction {
                protocol: protocol.to_string(),
                action: action.to_string(),
            }),
        }
    }
}

/// Ids de todos os protocolos embutidos
pub fn builtin_ids() -> Vec<&'static str> {
    protocols::BUILTIN.iter().map(|d| d.id).collect()
}
