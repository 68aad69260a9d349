//! Paraswap: swaps via AugustusSwapper e stake nos contratos sePSP.

pub mod contracts;
pub mod signatures;

use super::ProtocolDefinition;
use crate::catalog::Catalog;
use crate::compiler::compile_request;
use crate::template::{Projection, Scaling, VariantTemplate};
use actionfilter_core::chains::{ARBITRUM_ONE, ETHEREUM, OPTIMISM};
use actionfilter_core::error::Result;
use actionfilter_core::{ActionRequest, ActionType, AmountSlot, TokenSlot, TransactionFilter};
use actionfilter_tokens::StaticTokenList;
use signatures::*;

pub const ID: &str = "paraswap";

pub static DEFINITION: ProtocolDefinition = ProtocolDefinition {
    id: ID,
    chain_ids: &[ETHEREUM, OPTIMISM, ARBITRUM_ONE],
    actions: &[(ActionType::Swap, SWAP_VARIANTS), (ActionType::Stake, STAKE_VARIANTS)],
    contracts: contracts::CONTRACTS,
};

const PAIR: &[TokenSlot] = &[TokenSlot::In, TokenSlot::Out];

const fn amount(path: &'static str, slot: AmountSlot) -> Projection {
    Projection::Amount {
        path,
        slot,
        scaling: Scaling::Verbatim,
    }
}

const fn token(path: &'static str, slot: TokenSlot) -> Projection {
    Projection::Token { path, slot }
}

/// Formas de swap emitidas pelo AugustusSwapper
pub const SWAP_VARIANTS: &[VariantTemplate] = &[
    VariantTemplate {
        name: "balancer_v2_given_in",
        signatures: &[DIRECT_BALANCER_V2_GIVEN_IN],
        required: &["funds"],
        projections: &[
            Projection::Members { path: "assets", slots: PAIR },
            amount("fromAmount", AmountSlot::In),
            amount("toAmount", AmountSlot::Out),
        ],
    },
    VariantTemplate {
        name: "balancer_v2_given_out",
        signatures: &[DIRECT_BALANCER_V2_GIVEN_OUT],
        required: &["funds"],
        projections: &[
            Projection::Members { path: "assets", slots: PAIR },
            amount("fromAmount", AmountSlot::In),
            amount("toAmount", AmountSlot::Out),
        ],
    },
    VariantTemplate {
        name: "zero_x_v4",
        signatures: &[SWAP_ON_ZERO_X_V4],
        required: &[],
        projections: &[
            token("fromToken", TokenSlot::In),
            token("toToken", TokenSlot::Out),
            amount("fromAmount", AmountSlot::In),
            amount("amountOutMin", AmountSlot::Out),
        ],
    },
    VariantTemplate {
        name: "zero_x_v2",
        signatures: &[SWAP_ON_ZERO_X_V2],
        required: &[],
        projections: &[
            token("fromToken", TokenSlot::In),
            token("toToken", TokenSlot::Out),
            amount("fromAmount", AmountSlot::In),
            amount("amountOutMin", AmountSlot::Out),
        ],
    },
    VariantTemplate {
        name: "uniswap_v3_single",
        signatures: &[EXACT_INPUT_SINGLE],
        required: &["params"],
        projections: &[
            token("params.tokenIn", TokenSlot::In),
            token("params.tokenOut", TokenSlot::Out),
            amount("params.amountIn", AmountSlot::In),
            amount("params.amountOutMinimum", AmountSlot::Out),
        ],
    },
    VariantTemplate {
        name: "uniswap_v3_path",
        signatures: &[EXACT_INPUT],
        required: &["params"],
        projections: &[
            Projection::PackedPath { path: "params.path", slots: PAIR },
            amount("params.amountIn", AmountSlot::In),
            amount("params.amountOutMinimum", AmountSlot::Out),
        ],
    },
    VariantTemplate {
        name: "multi_swap",
        signatures: &[MULTI_SWAP],
        required: &["data"],
        projections: &[
            token("data.fromToken", TokenSlot::In),
            Projection::LastHop {
                path: "data.path",
                key: "to",
                slot: TokenSlot::Out,
            },
            amount("data.fromAmount", AmountSlot::In),
            amount("data.toAmount", AmountSlot::Out),
        ],
    },
    VariantTemplate {
        name: "simple_swap",
        signatures: &[SIMPLE_SWAP, DIRECT_UNI_V3_SWAP, DIRECT_CURVE_V1_SWAP],
        required: &["data"],
        projections: &[
            token("data.fromToken", TokenSlot::In),
            token("data.toToken", TokenSlot::Out),
            amount("data.fromAmount", AmountSlot::In),
            amount("data.toAmount", AmountSlot::Out),
        ],
    },
];

/// Depósitos nos contratos sePSP1/sePSP2
pub const STAKE_VARIANTS: &[VariantTemplate] = &[
    VariantTemplate {
        name: "deposit",
        signatures: &[DEPOSIT],
        required: &[],
        projections: &[amount("assetAmount", AmountSlot::One)],
    },
    VariantTemplate {
        name: "deposit_psp_and_eth",
        signatures: &[DEPOSIT_PSP_AND_ETH],
        required: &[],
        projections: &[amount("pspAmount", AmountSlot::One)],
    },
    VariantTemplate {
        name: "deposit_psp_and_weth",
        signatures: &[DEPOSIT_PSP_AND_WETH],
        required: &[],
        projections: &[
            amount("pspAmount", AmountSlot::One),
            amount("wethAmount", AmountSlot::Two),
        ],
    },
];

/// Filtro de swap no catálogo embutido
pub fn swap(request: &ActionRequest) -> Result<TransactionFilter> {
    compile_request(Catalog::builtin(), ID, ActionType::Swap, request)
}

/// Filtro de stake no catálogo embutido
pub fn stake(request: &ActionRequest) -> Result<TransactionFilter> {
    compile_request(Catalog::builtin(), ID, ActionType::Stake, request)
}

pub const fn swap_tokens() -> StaticTokenList {
    StaticTokenList::new(contracts::SWAP_TOKENS)
}

pub const fn stake_tokens() -> StaticTokenList {
    StaticTokenList::new(contracts::STAKE_TOKENS)
}
