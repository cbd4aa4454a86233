pub const GLOBAL_STATE_SEED:&[u8] = b"global-state";

pub const VAULT_SEED:&[u8] = b"vault";

pub const ROUND_SEED:&[u8] = b"round";

// The fee is expressed in tenths of a percent, 25 => 2.5%
pub const FEE_DENOMINATOR:u64 = 1_000;

pub const MAX_FEE:u64 = FEE_DENOMINATOR; // 100%

pub const ROUND_TIMEOUT:i64 = 60 * 10; // 10 minutes
