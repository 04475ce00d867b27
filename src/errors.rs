// Input errors
pub const ZERO_AMOUNT: &str = "Amount must be greater than zero";
pub const SLIPPAGE_EXCEEDED: &str = "Slippage exceeded";
pub const INSUFFICIENT_SUPPLY: &str = "Burn amount must be below total supply";
pub const MINT_TOO_SMALL: &str = "Deposit too small to mint";
pub const RETURN_TOO_SMALL: &str = "Burn too small to return reserve";
pub const WRONG_PAYMENT_TOKEN: &str = "Payment must be in the reserve token";
pub const WRONG_INITIAL_RESERVE: &str = "Payment must equal the initial reserve";
pub const INSUFFICIENT_BALANCE: &str = "Insufficient balance";
pub const INSUFFICIENT_ALLOWANCE: &str = "Insufficient allowance";
pub const ZERO_ADDRESS: &str = "Zero address not allowed";

// Configuration errors
pub const INVALID_RESERVE_RATIO: &str = "Reserve ratio must be in (0, 1000000]";
pub const INVALID_INITIAL_STATE: &str = "Initial supply and reserve must be positive";
pub const INVALID_TOKEN_ID: &str = "Invalid token identifier";

// Authorization errors
pub const UNAUTHORIZED: &str = "Caller is not the treasury";
pub const NOT_OWNER: &str = "Caller is not the owner";

// Solvency errors
pub const INSOLVENT_WITHDRAWAL: &str = "Withdrawal exceeds reserve differential";
pub const RESERVE_EXHAUSTED: &str = "Burn would empty the reserve";
pub const INSUFFICIENT_LIQUIDITY: &str = "Lending market could not redeem the full amount";
pub const PROTECTED_ASSET: &str = "Cannot sweep a backing asset";

// State errors
pub const NOT_ACTIVATED: &str = "Token not activated";
pub const ALREADY_ACTIVATED: &str = "Token already activated";
pub const REENTRANT_CALL: &str = "Reentrant call";
