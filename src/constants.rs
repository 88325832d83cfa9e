/// Configuration file read once at startup, relative to the working directory.
pub const CONFIG_PATH: &str = "lottery.json";

/// Decimal places for currency amounts.
pub const CURRENCY_DP: u32 = 2;

/// Player id reserved for the human player.
pub const USER_PLAYER_ID: u64 = 1;

// Each CPU player requests a uniform ticket count in 0..MAX_CPU_TICKET_REQUEST.
pub const MAX_CPU_TICKET_REQUEST: usize = 10;
