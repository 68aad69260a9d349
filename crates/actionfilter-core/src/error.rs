use thiserror::Error;

/// Erros expostos pelo compilador de filtros
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Endereço que não é uma string hexadecimal de 20 bytes
    #[error("Endereço inválido em `{field}`: {value}")]
    InvalidAddress { field: &'static str, value: String },

    /// Valor numérico que não pode ser representado sem perda de precisão
    #[error("Valor inválido em `{field}`: {value}")]
    InvalidAmount { field: &'static str, value: String },

    /// Nenhuma entrada no catálogo para o par (protocolo, ação)
    #[error("Ação não suportada: {action} em {protocol}")]
    UnsupportedAction { protocol: String, action: String },

    /// Template ou assinatura ABI mal formada no catálogo
    #[error("Template inválido: {0}")]
    InvalidTemplate(String),
}

/// Tipo de resultado usado em toda a biblioteca
pub type Result<T> = std::result::Result<T, Error>;
