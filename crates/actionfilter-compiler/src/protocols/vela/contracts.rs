//! Endereços, mercados e tokens da Vela Exchange (Arbitrum One).

use actionfilter_core::chains::ARBITRUM_ONE;

pub const VAULT: &str = "0xc4abade3a15064f9e3596943c699032748b13352";
pub const TOKEN_FARM: &str = "0x60b8c145235a31f1949a831803768bf37d7ab7aa";

pub const ETHER: &str = "0x0000000000000000000000000000000000000000";
pub const ARBITRUM_BTC: &str = "0x2f2a2543b76a4166549f7aab2e75bef0aefc5b0f";
pub const ARBITRUM_ARB: &str = "0x912ce59144191c1204e64559fe8253a0e49e6548";
pub const ARBITRUM_CRV: &str = "0x11cdb42b0eb46d95f990bedd4695a6e3fa034978";
pub const ARBITRUM_LINK: &str = "0xf97f4df75117a78c1a5a0dbb814af92458539fb4";

/// Id de mercado de cada token, gravado nos 16 bits altos do argumento `a`
pub const MARKET_IDS: &[(&str, u64)] = &[
    (ARBITRUM_BTC, 1),
    (ETHER, 2),
    (ARBITRUM_LINK, 3),
    (ARBITRUM_CRV, 4),
    (ARBITRUM_ARB, 7),
];

pub const CONTRACTS: &[(u64, &[&str])] = &[(ARBITRUM_ONE, &[VAULT, TOKEN_FARM])];

pub const TOKENS: &[(u64, &[&str])] = &[(
    ARBITRUM_ONE,
    &[ETHER, ARBITRUM_ARB, ARBITRUM_BTC, ARBITRUM_CRV, ARBITRUM_LINK],
)];
