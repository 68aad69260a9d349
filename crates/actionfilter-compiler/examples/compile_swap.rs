use std::env;

use actionfilter_compiler::{ActionRequest, ActionType, AmountBound, PluginRegistry};
use anyhow::{Context, Result};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // Uso: compile_swap [protocolo] [ação] [requisição.json]
    let args: Vec<String> = env::args().collect();
    let protocol = args.get(1).map(String::as_str).unwrap_or("paraswap");
    let action: ActionType = args
        .get(2)
        .map(String::as_str)
        .unwrap_or("swap")
        .parse()
        .map_err(anyhow::Error::msg)?;

    let request = match args.get(3) {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("falha ao ler {path}"))?;
            serde_json::from_str::<ActionRequest>(&raw).context("requisição inválida")?
        }
        None => ActionRequest {
            token_in: Some("0xFd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9".into()),
            token_out: Some("0xFF970A61A04b1cA14834A43f5dE4533eBDDB5CC8".into()),
            amount_in: Some(AmountBound::gte(339000000u64)),
            ..ActionRequest::new(42161, "0xdef171fe48cf0115b1d80b88dc8eab59176fee57")
        },
    };

    let registry = PluginRegistry::default();
    let plugin = registry
        .get(protocol)
        .with_context(|| format!("protocolo desconhecido: {protocol}"))?;

    let filter = plugin.compile(action, &request).context("falha ao compilar filtro")?;
    info!("{} variantes compiladas para {}/{}", filter.input.branches.len(), protocol, action);
    println!("{}", serde_json::to_string_pretty(&filter)?);

    let tokens = plugin.supported_tokens(request.chain_id).await;
    info!("{} tokens suportados na chain {}", tokens.len(), request.chain_id);
    for contract in plugin.known_contracts(request.chain_id) {
        info!("contrato conhecido: {}", contract);
    }

    Ok(())
}
