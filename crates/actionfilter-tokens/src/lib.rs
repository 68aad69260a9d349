/*!
 * ActionFilter Tokens
 *
 * Resolução da lista de tokens suportados por chain: fonte remota com
 * fallback para tabelas estáticas
 */

pub mod config;
pub mod resolver;

pub use config::ResolverConfig;
pub use resolver::{RemoteTokenResolver, StaticTokenList, TokenResolver};
