#![no_std]

pub static ERROR_INSUFFICIENT_BALANCE: &[u8] = b"Insufficient leveraged token balance.";

pub static ERROR_INSUFFICIENT_LIQUIDITY: &[u8] =
    b"Insufficient liquid balance to cover the debt repayment.";

pub static ERROR_LEVERAGE_CONSTRUCTION_FAILED: &[u8] = b"Leverage construction failed.";

pub static ERROR_DEBT_UNDERFLOW: &[u8] = b"Repaid amount exceeds the recorded debt.";

pub static ERROR_DIVISION_BY_ZERO: &[u8] = b"Division by zero.";

pub static ERROR_SWAP_SLIPPAGE_EXCEEDED: &[u8] = b"Swap slippage exceeded.";

pub static ERROR_SWAP_EXCESSIVE_INPUT: &[u8] = b"Swap input exceeds the allowed maximum.";

pub static ERROR_SWAP_EXPIRED: &[u8] = b"Swap deadline expired.";

pub static ERROR_INVALID_SWAP_FEE: &[u8] = b"Swap fee must not exceed 10000 bps.";

pub static ERROR_SWAP_PAIR_NOT_SUPPORTED: &[u8] = b"Swap pair not supported.";

pub static ERROR_INVALID_SWAP_PATH: &[u8] = b"Invalid swap path.";

pub static ERROR_NEGATIVE_PROCEEDS: &[u8] = b"Negative redemption proceeds.";

pub static ERROR_REDEMPTION_TOO_SMALL: &[u8] =
    b"Redemption too small to buy back its debt share.";

pub static ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_INVALID_SWAP_FACTOR: &[u8] = b"Swap factor must be between 1 and 1000.";

pub static ERROR_INVALID_BASE_PRICE: &[u8] = b"Base price must be greater than zero.";

pub static ERROR_INVALID_PAYMENT_TOKEN: &[u8] = b"Invalid payment token for this pool.";

pub static ERROR_POOL_NOT_FOUND: &[u8] = b"Pool not found.";

pub static ERROR_POOL_ALREADY_INITIALIZED: &[u8] = b"Pool already initialized.";

pub static ERROR_POOL_NOT_INITIALIZED: &[u8] = b"Pool not initialized.";

pub static ERROR_POOL_NOT_CONFIGURED: &[u8] = b"Pool not configured.";

pub static ERROR_ONLY_POOL_MANAGER: &[u8] = b"Endpoint can only be called by the pool manager.";

pub static ERROR_INVALID_LEVERAGE_FACTOR: &[u8] =
    b"Amount per unit collateral must be greater than zero and at most one.";

pub static ERROR_ADDRESS_IS_ZERO: &[u8] = b"Address is zero.";

pub static ERROR_INVALID_VENUE_ADDRESS: &[u8] = b"Venue address must be a smart contract.";

pub static ERROR_SAME_ASSET_PAIR: &[u8] = b"Base and quote assets must differ.";

pub static ERROR_TEMPLATE_EMPTY: &[u8] = b"Leveraged token template is empty.";

pub static ERROR_OPERATION_ONGOING: &[u8] = b"Another operation is ongoing for this pool.";

pub static ERROR_PRICE_NOT_SET: &[u8] = b"Asset price not set.";

pub static ERROR_INSUFFICIENT_COLLATERAL: &[u8] =
    b"Not enough collateral available for this loan.";

pub static ERROR_INSUFFICIENT_DEPOSIT: &[u8] = b"Not enough tokens deposited for this account.";

pub static ERROR_HEALTH_FACTOR_WITHDRAW: &[u8] =
    b"Health factor will be too low after withdrawal.";

pub static ERROR_INSUFFICIENT_MARKET_LIQUIDITY: &[u8] = b"Insufficient liquidity in the market.";

pub static ERROR_NO_DEBT_TO_REPAY: &[u8] = b"No debt to repay for this asset.";
