mod common;

use actionfilter_compiler::protocols::paraswap::{self, signatures::*};
use actionfilter_compiler::{ActionRequest, AmountBound, Error};
use common::*;
use serde_json::{json, Value};

fn swap_request() -> ActionRequest {
    ActionRequest::new(42161, AUGUSTUS)
}

fn usdt_to_usdce(amount_in: u64) -> ActionRequest {
    ActionRequest {
        token_in: Some("0xFd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9".into()),
        token_out: Some("0xFF970A61A04b1cA14834A43f5dE4533eBDDB5CC8".into()),
        amount_in: Some(AmountBound::gte(amount_in)),
        ..swap_request()
    }
}

/// simpleSwap USDT -> USDC.e
fn swap_simple() -> Value {
    json!({
        "chainId": 42161,
        "to": AUGUSTUS,
        "from": "0x4f2e5ba0ca2e3b2a32ff1a4b4c4d8e5b8c5ac2f1",
        "input": {
            "data": {
                "fromToken": USDT,
                "toToken": USDCE,
                "fromAmount": "339000000",
                "toAmount": "338611237",
                "expectedAmount": "339951543",
                "callees": ["0x7c2b5e0d8ff0b3b1f9d2b10e9c6d2e1ad2c0d8b9"],
                "beneficiary": "0x0000000000000000000000000000000000000000",
                "partner": "0x0000000000000000000000000000000000000000",
                "feePercent": "0",
                "deadline": "1700000000"
            }
        }
    })
}

/// multiSwap USDC.e -> WETH -> VELA
fn swap_multi() -> Value {
    json!({
        "chainId": 42161,
        "to": AUGUSTUS,
        "from": "0x4f2e5ba0ca2e3b2a32ff1a4b4c4d8e5b8c5ac2f1",
        "input": {
            "data": {
                "fromToken": USDCE,
                "fromAmount": "50000000",
                "toAmount": "37445563402384251",
                "expectedAmount": "37821780204428536",
                "beneficiary": "0x0000000000000000000000000000000000000000",
                "path": [
                    { "to": WETH, "totalNetworkFee": "0", "adapters": [] },
                    { "to": VELA, "totalNetworkFee": "0", "adapters": [] }
                ],
                "partner": "0x0000000000000000000000000000000000000000",
                "feePercent": "0"
            }
        }
    })
}

/// directBalancerV2GivenInSwap WETH -> USDC.e
fn balancer_weth_usdce() -> Value {
    json!({
        "chainId": 42161,
        "to": AUGUSTUS,
        "input": {
            "swaps": [{ "poolId": "0x64541216bafffeec8ea535bb71fbc927831d0595000100000000000000000002", "assetInIndex": "0", "assetOutIndex": "1", "amount": "1000000000000000000", "userData": "0x" }],
            "assets": [WETH, USDCE],
            "funds": {
                "sender": AUGUSTUS,
                "fromInternalBalance": false,
                "recipient": AUGUSTUS,
                "toInternalBalance": false
            },
            "limits": ["1000000000000000000", "-1800000000"],
            "fromAmount": "1000000000000000000",
            "toAmount": "1790000000",
            "expectedAmount": "1805000000"
        }
    })
}

/// swapOnZeroXv4 USDC.e -> WBTC
fn zero_x_usdce_wbtc() -> Value {
    json!({
        "chainId": 42161,
        "to": AUGUSTUS,
        "input": {
            "fromToken": USDCE,
            "toToken": WBTC,
            "fromAmount": "2500000000",
            "amountOutMin": "6800000",
            "exchange": "0xdef1c0ded9bec7f1a1670819833240f027b25eff",
            "payload": "0x"
        }
    })
}

/// exactInputSingle ETH -> USDC.e
fn uniswap_v3_eth() -> Value {
    json!({
        "chainId": 42161,
        "to": AUGUSTUS,
        "input": {
            "params": {
                "tokenIn": ETH,
                "tokenOut": USDCE,
                "fee": "500",
                "recipient": AUGUSTUS,
                "deadline": "1700000000",
                "amountIn": "200000000000000000",
                "amountOutMinimum": "350000000",
                "sqrtPriceLimitX96": "0"
            }
        }
    })
}

/// directUniV3Swap ZYBER -> ETH
fn zyber_to_eth() -> Value {
    json!({
        "chainId": 42161,
        "to": AUGUSTUS,
        "input": {
            "data": {
                "fromToken": ZYBER,
                "toToken": ETH,
                "exchange": "0xe592427a0aece92de3edee1f18e0157c05861564",
                "fromAmount": "120000000000000000000",
                "toAmount": "1200000000000000",
                "expectedAmount": "1210000000000000",
                "path": "0x"
            }
        }
    })
}

#[test]
fn compiles_the_eight_variant_swap_filter() {
    let filter = paraswap::swap(&usdt_to_usdce(339000000)).unwrap();
    assert_eq!(
        serde_json::to_value(&filter).unwrap(),
        json!({
            "chainId": 42161,
            "to": AUGUSTUS,
            "input": {
                "$abiAbstract": [
                    DIRECT_BALANCER_V2_GIVEN_IN,
                    DIRECT_BALANCER_V2_GIVEN_OUT,
                    SWAP_ON_ZERO_X_V4,
                    SWAP_ON_ZERO_X_V2,
                    EXACT_INPUT_SINGLE,
                    EXACT_INPUT,
                    MULTI_SWAP,
                    SIMPLE_SWAP,
                    DIRECT_UNI_V3_SWAP,
                    DIRECT_CURVE_V1_SWAP
                ],
                "$or": [
                    { "assets": [USDT, USDCE], "fromAmount": { "$gte": "339000000" }, "funds": {} },
                    { "assets": [USDT, USDCE], "fromAmount": { "$gte": "339000000" }, "funds": {} },
                    { "fromAmount": { "$gte": "339000000" }, "fromToken": USDT, "toToken": USDCE },
                    { "fromAmount": { "$gte": "339000000" }, "fromToken": USDT, "toToken": USDCE },
                    { "params": { "amountIn": { "$gte": "339000000" }, "tokenIn": USDT, "tokenOut": USDCE } },
                    {
                        "params": {
                            "amountIn": { "$gte": "339000000" },
                            "path": "0xfd086bc7cd5c481dcc9c85ebe478a1c0b69fcbb9ff970a61a04b1ca14834a43f5de4533ebddb5cc8"
                        }
                    },
                    {
                        "data": {
                            "fromAmount": { "$gte": "339000000" },
                            "fromToken": USDT,
                            "path": { "$last": { "to": USDCE } }
                        }
                    },
                    { "data": { "fromToken": USDT, "fromAmount": { "$gte": "339000000" }, "toToken": USDCE } }
                ]
            }
        })
    );
}

#[test]
fn simple_swap_passes_and_fails_on_amount() {
    assert!(apply(&paraswap::swap(&usdt_to_usdce(339000000)).unwrap(), &swap_simple()));
    assert!(!apply(&paraswap::swap(&usdt_to_usdce(339000000000)).unwrap(), &swap_simple()));
}

#[test]
fn multi_swap_matches_on_final_hop() {
    let request = ActionRequest {
        token_in: Some(USDCE.into()),
        token_out: Some(VELA.into()),
        amount_out: Some(AmountBound::gte(37_000_000_000_000_000u64)),
        ..swap_request()
    };
    assert!(apply(&paraswap::swap(&request).unwrap(), &swap_multi()));

    // intermediário não conta como destino
    let via_weth = ActionRequest {
        token_out: Some(WETH.into()),
        ..request.clone()
    };
    assert!(!apply(&paraswap::swap(&via_weth).unwrap(), &swap_multi()));

    let wrong_input = ActionRequest {
        token_in: Some(USDT.into()),
        ..request
    };
    assert!(!apply(&paraswap::swap(&wrong_input).unwrap(), &swap_multi()));
}

#[test]
fn balancer_swap_matches_by_asset_membership() {
    let request = ActionRequest {
        token_in: Some(WETH.into()),
        token_out: Some(USDCE.into()),
        ..swap_request()
    };
    assert!(apply(&paraswap::swap(&request).unwrap(), &balancer_weth_usdce()));

    let other = ActionRequest {
        token_in: Some(USDT.into()),
        ..request
    };
    assert!(!apply(&paraswap::swap(&other).unwrap(), &balancer_weth_usdce()));
}

#[test]
fn single_sided_token_in_matches_any_output() {
    let usdce_in = ActionRequest {
        token_in: Some(USDCE.into()),
        ..swap_request()
    };
    let filter = paraswap::swap(&usdce_in).unwrap();
    assert!(apply(&filter, &zero_x_usdce_wbtc()));
    assert!(apply(&filter, &swap_multi()));
    assert!(!apply(&filter, &swap_simple()));

    let eth_in = ActionRequest {
        token_in: Some("0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE".into()),
        ..swap_request()
    };
    assert!(apply(&paraswap::swap(&eth_in).unwrap(), &uniswap_v3_eth()));
}

#[test]
fn single_sided_token_out_matches_any_input() {
    let request = ActionRequest {
        token_out: Some(ETH.into()),
        ..swap_request()
    };
    let filter = paraswap::swap(&request).unwrap();
    assert!(apply(&filter, &zyber_to_eth()));
    assert!(!apply(&filter, &swap_simple()));
}

#[test]
fn packed_path_requires_both_tokens() {
    let path_tx = json!({
        "chainId": 42161,
        "to": AUGUSTUS,
        "input": {
            "params": {
                "path": "0xfd086bc7cd5c481dcc9c85ebe478a1c0b69fcbb9ff970a61a04b1ca14834a43f5de4533ebddb5cc8",
                "recipient": AUGUSTUS,
                "deadline": "1700000000",
                "amountIn": "400000000",
                "amountOutMinimum": "399000000"
            }
        }
    });
    assert!(apply(&paraswap::swap(&usdt_to_usdce(339000000)).unwrap(), &path_tx));

    let only_in = ActionRequest {
        token_in: Some(USDT.into()),
        ..swap_request()
    };
    let filter = paraswap::swap(&only_in).unwrap();
    let branch = serde_json::to_value(&filter.input.branches[5]).unwrap();
    assert_eq!(branch, json!({ "params": {} }));
}

#[test]
fn contract_and_chain_are_always_checked() {
    let filter = paraswap::swap(&usdt_to_usdce(339000000)).unwrap();

    let mut other_chain = swap_simple();
    other_chain["chainId"] = json!(10);
    assert!(!apply(&filter, &other_chain));

    let mut other_contract = swap_simple();
    other_contract["to"] = json!("0x1111111254eeb25477b68fb85ed929f73a960582");
    assert!(!apply(&filter, &other_contract));
}

#[test]
fn recipient_becomes_from() {
    let request = ActionRequest {
        recipient: Some("0x4F2E5BA0CA2E3B2A32FF1A4B4C4D8E5B8C5AC2F1".into()),
        ..usdt_to_usdce(339000000)
    };
    let filter = paraswap::swap(&request).unwrap();
    assert_eq!(filter.from.as_deref(), Some("0x4f2e5ba0ca2e3b2a32ff1a4b4c4d8e5b8c5ac2f1"));
    assert!(apply(&filter, &swap_simple()));

    let mut other_sender = swap_simple();
    other_sender["from"] = json!("0x0000000000000000000000000000000000000001");
    assert!(!apply(&filter, &other_sender));
}

#[test]
fn contract_only_request_keeps_discriminators() {
    let filter = paraswap::swap(&swap_request()).unwrap();
    assert_eq!(
        serde_json::to_value(&filter.input.branches).unwrap(),
        json!([
            { "funds": {} },
            { "funds": {} },
            {},
            {},
            { "params": {} },
            { "params": {} },
            { "data": {} },
            { "data": {} }
        ])
    );
    assert!(apply(&filter, &swap_simple()));
    assert!(apply(&filter, &balancer_weth_usdce()));
}

#[test]
fn malformed_inputs_are_rejected() {
    let bad_token = ActionRequest {
        token_in: Some("0x1234".into()),
        ..swap_request()
    };
    assert!(matches!(
        paraswap::swap(&bad_token),
        Err(Error::InvalidAddress { field: "tokenIn", .. })
    ));

    let bad_contract = ActionRequest::new(42161, "def171fe48cf0115b1d80b88dc8eab59176fee57");
    assert!(matches!(
        paraswap::swap(&bad_contract),
        Err(Error::InvalidAddress { field: "contractAddress", .. })
    ));

    let fractional = ActionRequest {
        amount_out: Some(AmountBound::gte("0.037")),
        ..swap_request()
    };
    assert!(matches!(
        paraswap::swap(&fractional),
        Err(Error::InvalidAmount { field: "amountOut", .. })
    ));
}
