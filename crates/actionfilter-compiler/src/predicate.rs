//! Montagem incremental de predicados por caminho (`data.path.$last`).

use actionfilter_core::error::{Error, Result};
use actionfilter_core::Predicate;
use std::collections::BTreeMap;

/// Constrói um objeto de predicados anexando sub-predicados em caminhos
/// separados por `.`. Campos nunca anexados simplesmente não aparecem.
#[derive(Debug, Default)]
pub struct PredicateBuilder {
    root: BTreeMap<String, Predicate>,
}

impl PredicateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Garante a presença do objeto em `path` (`{}`)
    pub fn require(&mut self, path: &str) -> Result<&mut Self> {
        let segments = split(path)?;
        object_at(&mut self.root, &segments, path)?;
        Ok(self)
    }

    /// Anexa `predicate` no campo folha de `path`
    pub fn attach(&mut self, path: &str, predicate: Predicate) -> Result<&mut Self> {
        let segments = split(path)?;
        let (leaf, parents) = segments
            .split_last()
            .ok_or_else(|| conflict(path))?;
        let parent = object_at(&mut self.root, parents, path)?;
        if parent.contains_key(*leaf) {
            return Err(conflict(path));
        }
        parent.insert(leaf.to_string(), predicate);
        Ok(self)
    }

    pub fn build(self) -> Predicate {
        Predicate::Fields(self.root)
    }
}

fn split(path: &str) -> Result<Vec<&str>> {
    let segments: Vec<&str> = path.split('.').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(conflict(path));
    }
    Ok(segments)
}

fn conflict(path: &str) -> Error {
    Error::InvalidTemplate(format!("caminho inválido ou duplicado: {path}"))
}

/// Desce pelos objetos de `segments`, criando os que faltam
fn object_at<'a>(
    root: &'a mut BTreeMap<String, Predicate>,
    segments: &[&str],
    path: &str,
) -> Result<&'a mut BTreeMap<String, Predicate>> {
    let mut current = root;
    for segment in segments {
        current = match current
            .entry(segment.to_string())
            .or_insert_with(Predicate::empty)
        {
            Predicate::Fields(fields) => fields,
            _ => return Err(conflict(path)),
        };
    }
    Ok(current)
}
