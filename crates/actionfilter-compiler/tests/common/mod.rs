//! Avaliador mínimo do vocabulário de filtros, usado apenas nos testes.
//!
//! As transações de teste trazem o `input` já decodificado, com inteiros em
//! decimal; as chaves `$abi`/`$abiAbstract` são ignoradas.

#![allow(dead_code)]

use actionfilter_core::utils::decimal_to_u256;
use actionfilter_core::TransactionFilter;
use serde_json::{Map, Value};

pub const AUGUSTUS: &str = "0xdef171fe48cf0115b1d80b88dc8eab59176fee57";
pub const USDT: &str = "0xfd086bc7cd5c481dcc9c85ebe478a1c0b69fcbb9";
pub const USDCE: &str = "0xff970a61a04b1ca14834a43f5de4533ebddb5cc8";
pub const WETH: &str = "0x82af49447d8a07e3bd95bd0d56f35241523fbab1";
pub const WBTC: &str = "0x2f2a2543b76a4166549f7aab2e75bef0aefc5b0f";
pub const ETH: &str = "0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee";
pub const VELA: &str = "0x088cd8f5ef3652623c22d48b1605dcfe860cd704";
pub const ZYBER: &str = "0x3b475f6f2f41853706afc9fa6a6b8c5df1a2724c";

/// Aplica o filtro compilado a uma transação decodificada
pub fn apply(filter: &TransactionFilter, tx: &Value) -> bool {
    let filter = serde_json::to_value(filter).expect("filtro serializável");
    matches_object(filter.as_object().expect("filtro é objeto"), tx)
}

fn matches_object(filter: &Map<String, Value>, value: &Value) -> bool {
    let Some(fields) = value.as_object() else {
        return false;
    };
    filter.iter().all(|(key, expected)| match key.as_str() {
        "$abi" | "$abiAbstract" => true,
        "$or" => expected
            .as_array()
            .map(|branches| branches.iter().any(|b| matches(b, value)))
            .unwrap_or(false),
        op if op.starts_with('$') => operator(op, expected, value),
        field => fields.get(field).map(|v| matches(expected, v)).unwrap_or(false),
    })
}

fn matches(expected: &Value, value: &Value) -> bool {
    match expected {
        Value::String(s) => value.as_str() == Some(s.as_str()),
        Value::Number(n) => value == &Value::Number(n.clone()),
        Value::Array(list) => match value {
            Value::Array(items) => list.iter().all(|want| items.contains(want)),
            other => list.contains(other),
        },
        Value::Object(map) => matches_object(map, value) || matches_operators_only(map, value),
        _ => false,
    }
}

/// Objetos formados só por operadores também se aplicam a escalares
fn matches_operators_only(map: &Map<String, Value>, value: &Value) -> bool {
    !map.is_empty()
        && !value.is_object()
        && map
            .iter()
            .all(|(op, expected)| op.starts_with('$') && operator(op, expected, value))
}

fn operator(op: &str, expected: &Value, value: &Value) -> bool {
    match op {
        "$and" => expected
            .as_array()
            .map(|items| items.iter().all(|p| matches(p, value)))
            .unwrap_or(false),
        "$or" => expected
            .as_array()
            .map(|items| items.iter().any(|p| matches(p, value)))
            .unwrap_or(false),
        "$last" => value
            .as_array()
            .and_then(|items| items.last())
            .map(|last| matches(expected, last))
            .unwrap_or(false),
        "$gt" | "$gte" | "$lt" | "$lte" | "$eq" => {
            let (Some(bound), Some(actual)) = (expected.as_str(), value.as_str()) else {
                return false;
            };
            let (Some(bound), Some(actual)) = (decimal_to_u256(bound), decimal_to_u256(actual))
            else {
                return false;
            };
            match op {
                "$gt" => actual > bound,
                "$gte" => actual >= bound,
                "$lt" => actual < bound,
                "$lte" => actual <= bound,
                _ => actual == bound,
            }
        }
        _ => false,
    }
}
