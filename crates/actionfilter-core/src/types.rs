/*!
 * ActionFilter Types
 *
 * Tipos de requisição usados em toda a workspace actionfilter
 */

use ethereum_types::U256;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Ação semântica reconhecida pelo compilador
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Swap,
    Stake,
    Trade,
}

impl ActionType {
    /// Representação em string da ação
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Swap => "swap",
            ActionType::Stake => "stake",
            ActionType::Trade => "trade",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "swap" => Ok(ActionType::Swap),
            "stake" => Ok(ActionType::Stake),
            "trade" => Ok(ActionType::Trade),
            other => Err(format!("Ação desconhecida: {}", other)),
        }
    }
}

/// Operador de comparação aplicado a um campo numérico decodificado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Gt,
    Gte,
    Lt,
    Lte,
    Eq,
}

impl Comparison {
    /// Chave usada no vocabulário do avaliador
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparison::Gt => "$gt",
            Comparison::Gte => "$gte",
            Comparison::Lt => "$lt",
            Comparison::Lte => "$lte",
            Comparison::Eq => "$eq",
        }
    }

    /// Converte uma chave do vocabulário (`$gte`, ...) no operador
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "$gt" => Some(Comparison::Gt),
            "$gte" => Some(Comparison::Gte),
            "$lt" => Some(Comparison::Lt),
            "$lte" => Some(Comparison::Lte),
            "$eq" => Some(Comparison::Eq),
            _ => None,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Limite numérico informado pelo chamador: operador + valor decimal.
///
/// O valor é mantido como string; a validação de precisão acontece na
/// normalização.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AmountBound {
    pub op: Comparison,
    pub value: String,
}

impl AmountBound {
    pub fn new(op: Comparison, value: impl fmt::Display) -> Self {
        Self {
            op,
            value: value.to_string(),
        }
    }

    pub fn gt(value: impl fmt::Display) -> Self {
        Self::new(Comparison::Gt, value)
    }

    pub fn gte(value: impl fmt::Display) -> Self {
        Self::new(Comparison::Gte, value)
    }

    pub fn lt(value: impl fmt::Display) -> Self {
        Self::new(Comparison::Lt, value)
    }

    pub fn lte(value: impl fmt::Display) -> Self {
        Self::new(Comparison::Lte, value)
    }

    pub fn equal_to(value: impl fmt::Display) -> Self {
        Self::new(Comparison::Eq, value)
    }

    /// Valor como inteiro de 256 bits, quando representável
    pub fn to_u256(&self) -> Option<U256> {
        crate::utils::decimal_to_u256(&self.value)
    }
}

impl Serialize for AmountBound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.op.as_str(), &self.value)?;
        map.end()
    }
}

/// Texto do valor aceito no JSON: string decimal ou número.
///
/// Números chegam com o texto original (`arbitrary_precision`), então inteiros
/// acima de `u64` não perdem precisão. Frações e expoentes ficam no texto e a
/// normalização os rejeita.
fn amount_text<E: de::Error>(raw: serde_json::Value) -> Result<String, E> {
    match raw {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(E::custom(format!("valor inválido para limite: {other}"))),
    }
}

impl<'de> Deserialize<'de> for AmountBound {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BoundVisitor;

        impl<'de> Visitor<'de> for BoundVisitor {
            type Value = AmountBound;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("um objeto com um único operador, ex. {\"$gte\": \"100\"}")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let key: String = map
                    .next_key()?
                    .ok_or_else(|| de::Error::custom("operador ausente"))?;
                let op = Comparison::from_key(&key)
                    .ok_or_else(|| de::Error::custom(format!("operador desconhecido: {key}")))?;
                let raw: serde_json::Value = map.next_value()?;
                if map.next_key::<String>()?.is_some() {
                    return Err(de::Error::custom("apenas um operador por limite"));
                }
                Ok(AmountBound {
                    op,
                    value: amount_text(raw)?,
                })
            }
        }

        deserializer.deserialize_map(BoundVisitor)
    }
}

/// Ação de alto nível descrita pelo chamador
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequest {
    pub chain_id: u64,
    pub contract_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_out: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_in: Option<AmountBound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_out: Option<AmountBound>,
    /// Primeira perna de ações com dois valores (ex. stake PSP)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_one: Option<AmountBound>,
    /// Segunda perna de ações com dois valores (ex. stake WETH)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_two: Option<AmountBound>,
    /// Remetente esperado da transação (`from` no filtro)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
}

impl ActionRequest {
    /// Cria uma requisição restrita apenas a contrato e chain
    pub fn new(chain_id: u64, contract_address: impl Into<String>) -> Self {
        Self {
            chain_id,
            contract_address: contract_address.into(),
            ..Default::default()
        }
    }
}

/// Campo numérico da requisição
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmountSlot {
    In,
    Out,
    One,
    Two,
}

/// Campo de token da requisição
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenSlot {
    In,
    Out,
}

impl AmountSlot {
    /// Nome do campo na requisição, usado em mensagens de erro
    pub fn field_name(&self) -> &'static str {
        match self {
            AmountSlot::In => "amountIn",
            AmountSlot::Out => "amountOut",
            AmountSlot::One => "amountOne",
            AmountSlot::Two => "amountTwo",
        }
    }
}

impl TokenSlot {
    pub fn field_name(&self) -> &'static str {
        match self {
            TokenSlot::In => "tokenIn",
            TokenSlot::Out => "tokenOut",
        }
    }
}

/// Requisição canônica: endereços em minúsculas e valores decimais exatos.
///
/// Só pode ser obtida via [`crate::normalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRequest {
    pub(crate) chain_id: u64,
    pub(crate) contract_address: String,
    pub(crate) token_in: Option<String>,
    pub(crate) token_out: Option<String>,
    pub(crate) amount_in: Option<AmountBound>,
    pub(crate) amount_out: Option<AmountBound>,
    pub(crate) amount_one: Option<AmountBound>,
    pub(crate) amount_two: Option<AmountBound>,
    pub(crate) recipient: Option<String>,
}

impl NormalizedRequest {
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn contract_address(&self) -> &str {
        &self.contract_address
    }

    pub fn recipient(&self) -> Option<&str> {
        self.recipient.as_deref()
    }

    pub fn token(&self, slot: TokenSlot) -> Option<&str> {
        match slot {
            TokenSlot::In => self.token_in.as_deref(),
            TokenSlot::Out => self.token_out.as_deref(),
        }
    }

    pub fn amount(&self, slot: AmountSlot) -> Option<&AmountBound> {
        match slot {
            AmountSlot::In => self.amount_in.as_ref(),
            AmountSlot::Out => self.amount_out.as_ref(),
            AmountSlot::One => self.amount_one.as_ref(),
            AmountSlot::Two => self.amount_two.as_ref(),
        }
    }
}

impl From<&NormalizedRequest> for ActionRequest {
    fn from(req: &NormalizedRequest) -> Self {
        Self {
            chain_id: req.chain_id,
            contract_address: req.contract_address.clone(),
            token_in: req.token_in.clone(),
            token_out: req.token_out.clone(),
            amount_in: req.amount_in.clone(),
            amount_out: req.amount_out.clone(),
            amount_one: req.amount_one.clone(),
            amount_two: req.amount_two.clone(),
            recipient: req.recipient.clone(),
        }
    }
}
