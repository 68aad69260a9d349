/*!
 * ActionFilter Compiler
 *
 * Compila ações de alto nível (swap, stake, trade) em filtros declarativos
 * que reconhecem todas as formas de chamada conhecidas de cada protocolo
 */

pub mod abi;
pub mod catalog;
pub mod compiler;
pub mod plugin;
pub mod predicate;
pub mod protocols;
pub mod registry;
pub mod template;

// Re-exportações públicas
pub use abi::AbiSignature;
pub use catalog::{Catalog, CatalogEntry};
pub use compiler::{compile, compile_request};
pub use plugin::{PluginRegistry, ProtocolPlugin};
pub use predicate::PredicateBuilder;
pub use template::{Projection, Scaling, VariantTemplate};

pub use actionfilter_core::{
    ActionRequest, ActionType, AmountBound, Comparison, Error, Predicate, TransactionFilter,
};
