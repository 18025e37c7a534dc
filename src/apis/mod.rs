/// Upstream API clients
///
/// Each client owns its `HttpClient`, knows its endpoints, and decodes into
/// all-optional response structures. Nothing here decides which provider wins.
pub mod client;
pub mod de;
pub mod dexscreener;
pub mod jupiter;
pub mod pumpfun;
pub mod solana_rpc;

pub use client::{HttpClient, HttpError};
pub use dexscreener::DexScreenerClient;
pub use jupiter::JupiterClient;
pub use pumpfun::PumpFunClient;
pub use solana_rpc::SolanaRpcClient;
