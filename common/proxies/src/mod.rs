#![no_std]

pub mod proxy_leveraged_token;
pub mod proxy_lending_market;
pub mod proxy_price_oracle;
pub mod proxy_swap_router;
