//! Vocabulário de filtros consumido pelo avaliador externo.
//!
//! A forma serializada é um contrato fixo:
//!
//! ```text
//! {
//!   "chainId": 42161,
//!   "to": "0x...",
//!   "from": "0x...",                 // opcional
//!   "input": {
//!     "$abiAbstract": ["sig", ...],  // ou "$abi": "sig"
//!     "$or": [ { ... }, ... ]
//!   }
//! }
//! ```

use crate::types::{AmountBound, Comparison};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Predicado sobre argumentos decodificados de uma chamada
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Igualdade exata com uma string
    Literal(String),
    /// Pertinência: lista sem ordem significativa
    OneOf(Vec<String>),
    /// Comparação numérica com limite decimal em string
    Compare(Comparison, String),
    /// Todos os predicados devem ser satisfeitos (`$and`)
    All(Vec<Predicate>),
    /// Aplica o predicado ao último elemento de uma sequência (`$last`)
    Last(Box<Predicate>),
    /// Objeto com predicados por campo; vazio exige apenas a presença
    Fields(BTreeMap<String, Predicate>),
}

impl Predicate {
    /// Objeto vazio (`{}`)
    pub fn empty() -> Self {
        Predicate::Fields(BTreeMap::new())
    }

    /// Caminhos (separados por `.`) de todos os campos referenciados
    pub fn paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_paths("", &mut out);
        out
    }

    fn collect_paths(&self, prefix: &str, out: &mut Vec<String>) {
        match self {
            Predicate::Fields(fields) => {
                for (name, child) in fields {
                    let path = if prefix.is_empty() {
                        name.clone()
                    } else {
                        format!("{prefix}.{name}")
                    };
                    out.push(path.clone());
                    child.collect_paths(&path, out);
                }
            }
            Predicate::Last(inner) => inner.collect_paths(&format!("{prefix}.$last"), out),
            _ => {}
        }
    }
}

impl From<&AmountBound> for Predicate {
    fn from(bound: &AmountBound) -> Self {
        Predicate::Compare(bound.op, bound.value.clone())
    }
}

impl Serialize for Predicate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Predicate::Literal(value) => serializer.serialize_str(value),
            Predicate::OneOf(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for v in values {
                    seq.serialize_element(v)?;
                }
                seq.end()
            }
            Predicate::Compare(op, value) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(op.as_str(), value)?;
                map.end()
            }
            Predicate::All(items) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("$and", items)?;
                map.end()
            }
            Predicate::Last(inner) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("$last", inner)?;
                map.end()
            }
            Predicate::Fields(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (name, child) in fields {
                    map.serialize_entry(name, child)?;
                }
                map.end()
            }
        }
    }
}

/// Assinaturas contra as quais o avaliador decodifica a entrada
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AbiBinding {
    /// Exatamente uma assinatura
    #[serde(rename = "$abi")]
    Exact(String),
    /// Qualquer uma das assinaturas listadas
    #[serde(rename = "$abiAbstract")]
    Abstract(Vec<String>),
}

impl AbiBinding {
    /// Escolhe a forma conforme a quantidade de assinaturas
    pub fn for_signatures(mut signatures: Vec<String>) -> Self {
        if signatures.len() == 1 {
            AbiBinding::Exact(signatures.remove(0))
        } else {
            AbiBinding::Abstract(signatures)
        }
    }

    pub fn signatures(&self) -> Vec<&str> {
        match self {
            AbiBinding::Exact(sig) => vec![sig.as_str()],
            AbiBinding::Abstract(sigs) => sigs.iter().map(String::as_str).collect(),
        }
    }
}

/// Filtro sobre o `input` decodificado
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputFilter {
    #[serde(flatten)]
    pub abi: AbiBinding,
    #[serde(rename = "$or")]
    pub branches: Vec<Predicate>,
}

/// Filtro completo de transação (CompiledFilter)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilter {
    pub chain_id: u64,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    pub input: InputFilter,
}
