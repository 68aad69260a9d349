//! Assinaturas ABI legíveis (com nomes de parâmetros) e seus seletores.
//!
//! O avaliador recebe as assinaturas exatamente como declaradas no catálogo;
//! a forma canônica (`name(type,...)`) só é usada para calcular o seletor de
//! 4 bytes e detectar colisões ao carregar o catálogo.

use actionfilter_core::error::{Error, Result};
use actionfilter_core::utils::{format_selector, selector};
use std::fmt;

/// Assinatura de função validada
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbiSignature {
    human: String,
    canonical: String,
    selector: [u8; 4],
}

impl AbiSignature {
    /// Valida uma assinatura legível, ex.
    /// `exactInput((bytes path,address recipient) params)`
    pub fn parse(signature: &str) -> Result<Self> {
        let canonical = canonicalize(signature)?;
        Ok(Self {
            human: signature.to_string(),
            selector: selector(&canonical),
            canonical,
        })
    }

    /// Forma enviada ao avaliador
    pub fn human(&self) -> &str {
        &self.human
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn selector(&self) -> [u8; 4] {
        self.selector
    }

    pub fn name(&self) -> &str {
        self.canonical
            .split('(')
            .next()
            .unwrap_or_default()
    }
}

impl fmt::Display for AbiSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.human, format_selector(&self.selector))
    }
}

/// Remove nomes de parâmetros e espaços: `f(uint256 a,(address b) c)` vira
/// `f(uint256,(address))`
pub fn canonicalize(signature: &str) -> Result<String> {
    let invalid = || Error::InvalidTemplate(format!("assinatura mal formada: {signature}"));

    let trimmed = signature.trim();
    let trimmed = trimmed.strip_prefix("function ").unwrap_or(trimmed).trim_start();
    let open = trimmed.find('(').ok_or_else(invalid)?;
    let name = trimmed[..open].trim();
    if !is_identifier(name) {
        return Err(invalid());
    }

    let close = matching_paren(trimmed, open).ok_or_else(invalid)?;
    if !trimmed[close + 1..].trim().is_empty() {
        return Err(invalid());
    }

    let params = canonical_params(&trimmed[open + 1..close]).ok_or_else(invalid)?;
    Ok(format!("{}({})", name, params.join(",")))
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Índice do `)` que fecha o `(` em `open`
fn matching_paren(s: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in s.char_indices().skip_while(|(i, _)| *i < open) {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Divide a lista de parâmetros nas vírgulas de nível zero
fn split_top_level(list: &str) -> Option<Vec<&str>> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in list.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => {
                parts.push(&list[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&list[start..]);
    Some(parts)
}

fn canonical_params(list: &str) -> Option<Vec<String>> {
    if list.trim().is_empty() {
        return Some(Vec::new());
    }
    split_top_level(list)?
        .into_iter()
        .map(canonical_param)
        .collect()
}

fn canonical_param(param: &str) -> Option<String> {
    let param = param.trim();
    if param.starts_with('(') {
        let close = matching_paren(param, 0)?;
        let inner = canonical_params(&param[1..close])?;
        let rest = &param[close + 1..];
        let dims_len = rest
            .find(|c: char| !(c == '[' || c == ']' || c.is_ascii_digit()))
            .unwrap_or(rest.len());
        let dims = &rest[..dims_len];
        if !valid_dims(dims) || !valid_name(&rest[dims_len..]) {
            return None;
        }
        return Some(format!("({}){}", inner.join(","), dims));
    }

    let mut words = param.split_whitespace();
    let ty = canonical_elementary(words.next()?)?;
    if !valid_name(&words.collect::<Vec<_>>().join(" ")) {
        return None;
    }
    Some(ty)
}

/// Aceita um nome opcional, precedido ou não de `indexed`/local de dados
fn valid_name(rest: &str) -> bool {
    let words: Vec<&str> = rest
        .split_whitespace()
        .filter(|w| !matches!(*w, "indexed" | "memory" | "calldata" | "storage"))
        .collect();
    match words.as_slice() {
        [] => true,
        [name] => is_identifier(name),
        _ => false,
    }
}

fn valid_dims(dims: &str) -> bool {
    let mut rest = dims;
    while !rest.is_empty() {
        let Some(body) = rest.strip_prefix('[') else {
            return false;
        };
        let Some(end) = body.find(']') else {
            return false;
        };
        if !body[..end].bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        rest = &body[end + 1..];
    }
    true
}

fn canonical_elementary(ty: &str) -> Option<String> {
    let split = ty.find('[').unwrap_or(ty.len());
    let (base, dims) = ty.split_at(split);
    if !valid_dims(dims) {
        return None;
    }

    let base = match base {
        "uint" => "uint256",
        "int" => "int256",
        other => other,
    };
    let valid = match base {
        "address" | "bool" | "string" | "bytes" | "function" => true,
        _ => {
            if let Some(n) = base.strip_prefix("bytes") {
                n.parse::<usize>().map(|n| (1..=32).contains(&n)).unwrap_or(false)
            } else if let Some(n) = base.strip_prefix("uint").or_else(|| base.strip_prefix("int")) {
                n.parse::<usize>()
                    .map(|n| n % 8 == 0 && (8..=256).contains(&n))
                    .unwrap_or(false)
            } else {
                false
            }
        }
    };
    valid.then(|| format!("{base}{dims}"))
}
