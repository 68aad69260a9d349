//! Catálogo de variantes indexado por (protocolo, ação).
//!
//! Só aceita inclusões: uma chave registrada não pode ser substituída nem
//! removida. O catálogo embutido é montado uma única vez e depois é somente
//! leitura.

use crate::abi::AbiSignature;
use crate::protocols::{self, ProtocolDefinition};
use crate::template::VariantTemplate;
use actionfilter_core::error::{Error, Result};
use actionfilter_core::utils::format_selector;
use actionfilter_core::{AbiBinding, ActionType};
use once_cell::sync::Lazy;
use std::collections::HashMap;

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_definitions(protocols::BUILTIN).expect("catálogo embutido válido")
});

/// Variantes de uma ação e a união de suas assinaturas
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    templates: &'static [VariantTemplate],
    signatures: Vec<AbiSignature>,
}

impl CatalogEntry {
    fn new(templates: &'static [VariantTemplate]) -> Result<Self> {
        if templates.is_empty() {
            return Err(Error::InvalidTemplate("entrada sem variantes".into()));
        }

        let mut signatures: Vec<AbiSignature> = Vec::new();
        for template in templates {
            if template.signatures.is_empty() {
                return Err(Error::InvalidTemplate(format!(
                    "variante `{}` sem assinatura",
                    template.name
                )));
            }
            for sig in template.signatures {
                if signatures.iter().any(|s| s.human() == *sig) {
                    continue;
                }
                let parsed = AbiSignature::parse(sig)?;
                if let Some(clash) = signatures.iter().find(|s| s.selector() == parsed.selector()) {
                    return Err(Error::InvalidTemplate(format!(
                        "seletor {} duplicado: `{}` e `{}`",
                        format_selector(&parsed.selector()),
                        clash.human(),
                        parsed.human()
                    )));
                }
                signatures.push(parsed);
            }
        }

        Ok(Self { templates, signatures })
    }

    /// Templates na ordem de declaração
    pub fn templates(&self) -> &'static [VariantTemplate] {
        self.templates
    }

    pub fn signatures(&self) -> &[AbiSignature] {
        &self.signatures
    }

    /// `$abi` para uma assinatura, `$abiAbstract` para várias
    pub fn abi_binding(&self) -> AbiBinding {
        AbiBinding::for_signatures(self.signatures.iter().map(|s| s.human().to_string()).collect())
    }
}

/// Tabela (protocolo, ação) → variantes
#[derive(Debug, Default)]
pub struct Catalog {
    entries: HashMap<(String, ActionType), CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catálogo com todos os protocolos embutidos
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Monta um catálogo a partir de definições estáticas de protocolo
    pub fn from_definitions(definitions: &[&ProtocolDefinition]) -> Result<Self> {
        let mut catalog = Self::new();
        for definition in definitions {
            for (action, templates) in definition.actions {
                catalog.register(definition.id, *action, *templates)?;
            }
        }
        Ok(catalog)
    }

    /// Registra as variantes de uma ação. Falha se a chave já existe ou se as
    /// assinaturas não são válidas.
    pub fn register(
        &mut self,
        protocol: &str,
        action: ActionType,
        templates: &'static [VariantTemplate],
    ) -> Result<()> {
        let key = (protocol.to_string(), action);
        if self.entries.contains_key(&key) {
            return Err(Error::InvalidTemplate(format!(
                "entrada já registrada: {protocol}/{action}"
            )));
        }
        let entry = CatalogEntry::new(templates)?;
        self.entries.insert(key, entry);
        Ok(())
    }

    pub fn lookup(&self, protocol: &str, action: ActionType) -> Option<&CatalogEntry> {
        self.entries.get(&(protocol.to_string(), action))
    }

    /// Ações registradas para o protocolo, em ordem estável
    pub fn actions(&self, protocol: &str) -> Vec<ActionType> {
        let mut actions: Vec<ActionType> = self
            .entries
            .keys()
            .filter(|(id, _)| id == protocol)
            .map(|(_, action)| *action)
            .collect();
        actions.sort();
        actions
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
