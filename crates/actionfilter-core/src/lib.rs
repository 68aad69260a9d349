/*!
 * ActionFilter Core
 *
 * Tipos, normalização de parâmetros e vocabulário de filtros compartilhados
 * pela workspace actionfilter
 */

pub mod chains;
pub mod error;
pub mod filter;
pub mod normalizer;
pub mod types;
pub mod utils;

// Re-exportações públicas
pub use error::Error;
pub use filter::{AbiBinding, InputFilter, Predicate, TransactionFilter};
pub use normalizer::normalize;
pub use types::*;
