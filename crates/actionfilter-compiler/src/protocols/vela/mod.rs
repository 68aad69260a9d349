//! Vela Exchange: abertura de posição pelo vault com argumentos empacotados.
//!
//! `newPositionOrderPacked(a, b, c)` guarda o id do mercado nos 16 bits altos
//! de `a` e o tamanho da posição (30 casas decimais) nos 128 bits altos de
//! `c`. O filtro restringe `a` à faixa do mercado e `c` pela parte alta.

pub mod contracts;

use super::ProtocolDefinition;
use crate::catalog::Catalog;
use crate::compiler::compile_request;
use crate::template::{Projection, Scaling, VariantTemplate};
use actionfilter_core::chains::ARBITRUM_ONE;
use actionfilter_core::error::Result;
use actionfilter_core::{ActionRequest, ActionType, AmountSlot, TokenSlot, TransactionFilter};
use actionfilter_tokens::StaticTokenList;

pub const ID: &str = "vela";

pub const NEW_POSITION_ORDER_PACKED: &str = "newPositionOrderPacked(uint256 a,uint256 b,uint256 c)";

/// Bits abaixo do id de mercado em `a`
pub const MARKET_SHIFT: usize = 240;
/// Bits abaixo do tamanho da posição em `c`
pub const AMOUNT_SHIFT: usize = 128;

pub static DEFINITION: ProtocolDefinition = ProtocolDefinition {
    id: ID,
    chain_ids: &[ARBITRUM_ONE],
    actions: &[(ActionType::Trade, TRADE_VARIANTS)],
    contracts: contracts::CONTRACTS,
};

pub const TRADE_VARIANTS: &[VariantTemplate] = &[VariantTemplate {
    name: "new_position_order_packed",
    signatures: &[NEW_POSITION_ORDER_PACKED],
    required: &[],
    projections: &[
        Projection::MarketBand {
            path: "a",
            slot: TokenSlot::In,
            shift: MARKET_SHIFT,
            markets: contracts::MARKET_IDS,
        },
        Projection::Amount {
            path: "c",
            slot: AmountSlot::In,
            scaling: Scaling::PackedHigh { shift: AMOUNT_SHIFT },
        },
    ],
}];

/// Filtro de trade no catálogo embutido
pub fn trade(request: &ActionRequest) -> Result<TransactionFilter> {
    compile_request(Catalog::builtin(), ID, ActionType::Trade, request)
}

/// Id de mercado do token, quando listado
pub fn market_id(token: &str) -> Option<u64> {
    contracts::MARKET_IDS
        .iter()
        .find(|(address, _)| address.eq_ignore_ascii_case(token))
        .map(|(_, id)| *id)
}

pub const fn tokens() -> StaticTokenList {
    StaticTokenList::new(contracts::TOKENS)
}
