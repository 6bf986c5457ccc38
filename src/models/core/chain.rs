use serde::{Deserialize, Serialize};

/// Returns true if an RPC URL can be queried over plain HTTP(S).
///
/// WebSocket endpoints and URLs with unresolved template placeholders (`{API_KEY}`,
/// `${INFURA_API_KEY}`) are never attempted.
pub fn is_usable_endpoint(url: &str) -> bool {
	let scheme_ok = url
		.get(..8)
		.is_some_and(|s| s.eq_ignore_ascii_case("https://"))
		|| url
			.get(..7)
			.is_some_and(|s| s.eq_ignore_ascii_case("http://"));

	scheme_ok && !url.contains('{')
}

/// An EVM chain and the RPC endpoints that can answer for it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChainDescriptor {
	pub chain_id: u64,
	pub name: String,
	pub symbol: String,
	/// Candidate endpoints in fallback order
	pub rpc_urls: Vec<String>,
	pub explorer_url: String,
	pub is_testnet: bool,
}

impl ChainDescriptor {
	/// Endpoints that pass [`is_usable_endpoint`], in their listed order
	pub fn usable_endpoints(&self) -> impl Iterator<Item = &str> {
		self.rpc_urls
			.iter()
			.map(String::as_str)
			.filter(|url| is_usable_endpoint(url))
	}

	pub fn has_usable_endpoint(&self) -> bool {
		self.usable_endpoints().next().is_some()
	}
}
