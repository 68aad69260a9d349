//! Protocolos embutidos.
//!
//! Cada protocolo é descrito por uma [`ProtocolDefinition`] estática: as
//! chains atendidas, as variantes de cada ação e os contratos conhecidos.
//! Catálogo, registro de contratos e plugins são derivados dessas tabelas.

use crate::template::VariantTemplate;
use actionfilter_core::ActionType;

pub mod paraswap;
pub mod pendle;
pub mod vela;

/// Descrição estática de um protocolo
#[derive(Debug)]
pub struct ProtocolDefinition {
    pub id: &'static str,
    pub chain_ids: &'static [u64],
    pub actions: &'static [(ActionType, &'static [VariantTemplate])],
    /// Contratos conhecidos por chain
    pub contracts: &'static [(u64, &'static [&'static str])],
}

impl ProtocolDefinition {
    pub fn supports_chain(&self, chain_id: u64) -> bool {
        self.chain_ids.contains(&chain_id)
    }
}

/// Todos os protocolos embutidos
pub static BUILTIN: &[&ProtocolDefinition] =
    &[&paraswap::DEFINITION, &vela::DEFINITION, &pendle::DEFINITION];

/// Definição de um protocolo embutido pelo id
pub fn definition(id: &str) -> Option<&'static ProtocolDefinition> {
    BUILTIN.iter().copied().find(|d| d.id == id)
}
