//! Templates de variantes: uma forma de chamada on-chain por template.

use crate::predicate::PredicateBuilder;
use actionfilter_core::error::{Error, Result};
use actionfilter_core::utils::{decimal_to_u256, format_u256};
use actionfilter_core::{
    AmountBound, AmountSlot, Comparison, NormalizedRequest, Predicate, TokenSlot,
};
use ethereum_types::U256;
use std::collections::BTreeMap;

/// Como o valor do chamador é levado ao campo decodificado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scaling {
    /// Operador e valor repassados sem alteração
    Verbatim,
    /// O valor ocupa os bits altos de um inteiro empacotado:
    /// `campo = valor << shift | bits_baixos`
    PackedHigh { shift: usize },
}

/// Ligação entre um campo da requisição e um caminho do input decodificado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Igualdade exata com um token
    Token { path: &'static str, slot: TokenSlot },
    /// Lista de pertinência com os tokens presentes
    Members { path: &'static str, slots: &'static [TokenSlot] },
    /// `path: { $last: { key: token } }`
    LastHop { path: &'static str, key: &'static str, slot: TokenSlot },
    /// `0x` seguido dos endereços concatenados; só quando todos estão presentes
    PackedPath { path: &'static str, slots: &'static [TokenSlot] },
    /// Comparação numérica
    Amount { path: &'static str, slot: AmountSlot, scaling: Scaling },
    /// Faixa `[id << shift, (id + 1) << shift)` do mercado do token
    MarketBand {
        path: &'static str,
        slot: TokenSlot,
        shift: usize,
        markets: &'static [(&'static str, u64)],
    },
}

impl Projection {
    pub fn path(&self) -> &'static str {
        match self {
            Projection::Token { path, .. }
            | Projection::Members { path, .. }
            | Projection::LastHop { path, .. }
            | Projection::PackedPath { path, .. }
            | Projection::Amount { path, .. }
            | Projection::MarketBand { path, .. } => *path,
        }
    }

    /// Tokens lidos pela projeção
    pub fn token_slots(&self) -> Vec<TokenSlot> {
        match self {
            Projection::Token { slot, .. }
            | Projection::LastHop { slot, .. }
            | Projection::MarketBand { slot, .. } => vec![*slot],
            Projection::Members { slots, .. } | Projection::PackedPath { slots, .. } => {
                slots.to_vec()
            }
            Projection::Amount { .. } => Vec::new(),
        }
    }

    pub fn amount_slot(&self) -> Option<AmountSlot> {
        match self {
            Projection::Amount { slot, .. } => Some(*slot),
            _ => None,
        }
    }

    /// Anexa o sub-predicado, ou nada se a requisição não traz o valor
    fn apply(&self, request: &NormalizedRequest, builder: &mut PredicateBuilder) -> Result<()> {
        let predicate = match *self {
            Projection::Token { slot, .. } => {
                request.token(slot).map(|t| Predicate::Literal(t.to_string()))
            }
            Projection::Members { slots, .. } => {
                let members: Vec<String> = slots
                    .iter()
                    .filter_map(|slot| request.token(*slot))
                    .map(str::to_string)
                    .collect();
                (!members.is_empty()).then_some(Predicate::OneOf(members))
            }
            Projection::LastHop { key, slot, .. } => request.token(slot).map(|t| {
                let hop = BTreeMap::from([(key.to_string(), Predicate::Literal(t.to_string()))]);
                Predicate::Last(Box::new(Predicate::Fields(hop)))
            }),
            Projection::PackedPath { slots, .. } => slots
                .iter()
                .map(|slot| request.token(*slot))
                .collect::<Option<Vec<_>>>()
                .map(|tokens| {
                    let hops: String = tokens
                        .iter()
                        .map(|t| t.trim_start_matches("0x"))
                        .collect();
                    Predicate::Literal(format!("0x{hops}"))
                }),
            Projection::Amount { slot, scaling, .. } => request
                .amount(slot)
                .map(|bound| scale(bound, scaling, slot.field_name()))
                .transpose()?,
            Projection::MarketBand { slot, shift, markets, .. } => request
                .token(slot)
                .map(|token| market_band(token, shift, markets, slot.field_name()))
                .transpose()?,
        };

        if let Some(predicate) = predicate {
            builder.attach(self.path(), predicate)?;
        }
        Ok(())
    }
}

/// Forma de chamada de um protocolo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantTemplate {
    pub name: &'static str,
    /// Assinaturas ABI legíveis que decodificam esta forma
    pub signatures: &'static [&'static str],
    /// Objetos que sempre devem existir (`{}`), discriminando a forma
    pub required: &'static [&'static str],
    pub projections: &'static [Projection],
}

impl VariantTemplate {
    /// Instancia o predicado da variante para a requisição
    pub fn instantiate(&self, request: &NormalizedRequest) -> Result<Predicate> {
        let mut builder = PredicateBuilder::new();
        for path in self.required {
            builder.require(path)?;
        }
        for projection in self.projections {
            projection.apply(request, &mut builder)?;
        }
        Ok(builder.build())
    }
}

fn shifted(value: U256, shift: usize) -> Option<U256> {
    (value.bits() + shift <= 256).then(|| value << shift)
}

/// Aplica a regra de escala a um limite já normalizado
pub fn scale(bound: &AmountBound, scaling: Scaling, field: &'static str) -> Result<Predicate> {
    let shift = match scaling {
        Scaling::Verbatim => return Ok(Predicate::from(bound)),
        Scaling::PackedHigh { shift } => shift,
    };

    let invalid = || Error::InvalidAmount {
        field,
        value: bound.value.clone(),
    };
    let value = decimal_to_u256(&bound.value).ok_or_else(invalid)?;
    let low = || shifted(value, shift).map(|v| format_u256(&v)).ok_or_else(invalid);
    let high = || {
        value
            .checked_add(U256::one())
            .and_then(|next| shifted(next, shift))
            .map(|v| format_u256(&v))
            .ok_or_else(invalid)
    };

    // os bits baixos são livres: v << s cobre [v << s, (v + 1) << s)
    Ok(match bound.op {
        Comparison::Gte => Predicate::Compare(Comparison::Gte, low()?),
        Comparison::Lt => Predicate::Compare(Comparison::Lt, low()?),
        Comparison::Gt => Predicate::Compare(Comparison::Gte, high()?),
        Comparison::Lte => Predicate::Compare(Comparison::Lt, high()?),
        Comparison::Eq => Predicate::All(vec![
            Predicate::Compare(Comparison::Gte, low()?),
            Predicate::Compare(Comparison::Lt, high()?),
        ]),
    })
}

fn market_band(
    token: &str,
    shift: usize,
    markets: &[(&str, u64)],
    field: &'static str,
) -> Result<Predicate> {
    let invalid = || Error::InvalidAddress {
        field,
        value: token.to_string(),
    };
    let id = markets
        .iter()
        .find(|(address, _)| address.eq_ignore_ascii_case(token))
        .map(|(_, id)| U256::from(*id))
        .ok_or_else(invalid)?;
    let low = shifted(id, shift).ok_or_else(invalid)?;
    let high = shifted(id + U256::one(), shift).ok_or_else(invalid)?;
    Ok(Predicate::All(vec![
        Predicate::Compare(Comparison::Gte, format_u256(&low)),
        Predicate::Compare(Comparison::Lt, format_u256(&high)),
    ]))
}
