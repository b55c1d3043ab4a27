/// Default per-call timeout (seconds) for supply reads
pub const DEFAULT_CALL_TIMEOUT_SECS: u64 = 30;

/// Capacity of the broadcast channel for board snapshots
pub const BROADCAST_CHANNEL_CAPACITY: usize = 16;

/// Interval (seconds) between SSE keep-alive comments
pub const SSE_KEEP_ALIVE_SECS: u64 = 15;

/// Read function used when a token entry does not name one
pub const DEFAULT_READ_FUNCTION: &str = "totalSupply";

/// Explorer page used when a token entry has no link
pub const DEFAULT_EXPLORER_TOKEN_URL: &str = "https://etherscan.io/token/";
