mod common;

use actionfilter_compiler::protocols::paraswap::{self, contracts::OPTIMISM_SEPSP1};
use actionfilter_compiler::protocols::vela::{self, contracts, NEW_POSITION_ORDER_PACKED};
use actionfilter_compiler::{ActionRequest, AmountBound, Error};
use common::*;
use ethereum_types::U256;
use serde_json::{json, Value};

const TRADER: &str = "0xa99f898530df1514a566f1a6562d62809e99557d";

/// deposit(assetAmount) no sePSP1 da Optimism
fn simple_deposit() -> Value {
    json!({
        "chainId": 10,
        "to": OPTIMISM_SEPSP1,
        "input": { "assetAmount": "46128900000000000000000" }
    })
}

/// depositPSPAndEth no Augustus da Optimism
fn multi_deposit() -> Value {
    json!({
        "chainId": 10,
        "to": AUGUSTUS,
        "input": {
            "pspAmount": "659500000000000000000",
            "minBptOut": "0",
            "pspPermit": "0x"
        }
    })
}

fn ether(units: u64) -> U256 {
    U256::from(units) * U256::exp10(18)
}

#[test]
fn stake_matches_simple_deposit() {
    let request = ActionRequest {
        amount_one: Some(AmountBound::gte(ether(46128))),
        ..ActionRequest::new(10, "0x8C934b7dBc782568d14ceaBbEAeDF37cB6348615")
    };
    let filter = paraswap::stake(&request).unwrap();
    assert!(apply(&filter, &simple_deposit()));

    let too_much = ActionRequest {
        amount_one: Some(AmountBound::gte(ether(46129))),
        ..request
    };
    assert!(!apply(&paraswap::stake(&too_much).unwrap(), &simple_deposit()));
}

#[test]
fn stake_matches_multi_deposit() {
    let request = ActionRequest {
        amount_one: Some(AmountBound::gte(ether(659))),
        ..ActionRequest::new(10, AUGUSTUS)
    };
    assert!(apply(&paraswap::stake(&request).unwrap(), &multi_deposit()));
}

#[test]
fn stake_projects_both_legs() {
    let request = ActionRequest {
        amount_one: Some(AmountBound::gte(10u64)),
        amount_two: Some(AmountBound::lt(5u64)),
        ..ActionRequest::new(10, OPTIMISM_SEPSP1)
    };
    let filter = paraswap::stake(&request).unwrap();
    assert_eq!(
        serde_json::to_value(&filter.input.branches).unwrap(),
        json!([
            { "assetAmount": { "$gte": "10" } },
            { "pspAmount": { "$gte": "10" } },
            { "pspAmount": { "$gte": "10" }, "wethAmount": { "$lt": "5" } }
        ])
    );
}

fn vela_request() -> ActionRequest {
    ActionRequest {
        token_in: Some("0x912CE59144191C1204E64559FE8253a0e49E6548".into()),
        amount_in: Some(AmountBound::gte("21880000000000000000000000000000")),
        recipient: Some(TRADER.into()),
        ..ActionRequest::new(42161, contracts::VAULT)
    }
}

/// newPositionOrderPacked no mercado 7 com 21.88 (30 casas) de tamanho
fn vela_trade() -> Value {
    json!({
        "chainId": 42161,
        "to": contracts::VAULT,
        "from": TRADER,
        "input": {
            "a": "12367929453450297245127341495475971572884728440731854909845026201883652153",
            "b": "0",
            "c": "7445378188230133580578636410607088466657280000000000000000000987654321"
        }
    })
}

#[test]
fn vela_trade_compiles_packed_band() {
    let filter = vela::trade(&vela_request()).unwrap();
    assert_eq!(
        serde_json::to_value(&filter).unwrap(),
        json!({
            "chainId": 42161,
            "to": "0xc4abade3a15064f9e3596943c699032748b13352",
            "from": TRADER,
            "input": {
                "$abi": NEW_POSITION_ORDER_PACKED,
                "$or": [{
                    "a": {
                        "$and": [
                            { "$gte": "12367929453448690307083082505200429610792387278129332706851243409048338432" },
                            { "$lt": "14134776518227074636666380005943348126619871175004951664972849610340958208" }
                        ]
                    },
                    "c": { "$gte": "7445378188230133580578636410607088466657280000000000000000000000000000" }
                }]
            }
        })
    );
}

#[test]
fn vela_trade_evaluates_against_packed_arguments() {
    assert!(apply(&vela::trade(&vela_request()).unwrap(), &vela_trade()));

    let bigger = ActionRequest {
        amount_in: Some(AmountBound::gt("21880000000000000000000000000000")),
        ..vela_request()
    };
    assert!(!apply(&vela::trade(&bigger).unwrap(), &vela_trade()));

    let other_market = ActionRequest {
        token_in: Some(contracts::ARBITRUM_BTC.into()),
        ..vela_request()
    };
    assert!(!apply(&vela::trade(&other_market).unwrap(), &vela_trade()));

    let mut other_trader = vela_trade();
    other_trader["from"] = json!("0x0000000000000000000000000000000000000001");
    assert!(!apply(&vela::trade(&vela_request()).unwrap(), &other_trader));
}

#[test]
fn vela_rejects_token_without_market() {
    let request = ActionRequest {
        token_in: Some(USDCE.into()),
        ..vela_request()
    };
    assert_eq!(
        vela::trade(&request),
        Err(Error::InvalidAddress {
            field: "tokenIn",
            value: USDCE.into()
        })
    );
}

#[test]
fn vela_rejects_amount_that_overflows_the_packed_field() {
    let request = ActionRequest {
        amount_in: Some(AmountBound::gte(U256::one() << 128)),
        ..vela_request()
    };
    assert!(matches!(
        vela::trade(&request),
        Err(Error::InvalidAmount { field: "amountIn", .. })
    ));
}
