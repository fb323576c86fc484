//! Walks a pool through bootstrap, trading, and full exit.
//!
//! Logs at `debug`, so every committed transition is printed alongside the
//! demo's own summary lines.
//!
//! ```text
//! cargo run --example pool_lifecycle
//! ```

use hydra_cpmm::prelude::*;
use tracing::{info, Level};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .init();

    let usdc = AssetId::from_bytes([0x01; 32]);
    let weth = AssetId::from_bytes([0x02; 32]);
    let lp = AccountId::from_bytes([0x11; 32]);
    let trader = AccountId::from_bytes([0x22; 32]);

    let mut ledger = InMemoryLedger::new(AccountId::from_bytes([0xff; 32]));
    for who in [lp, trader] {
        for asset in [usdc, weth] {
            ledger.mint(asset, who, Amount::new(1_000_000_000))?;
            ledger.approve(asset, who, Amount::MAX);
        }
    }

    let config = PoolConfig::for_assets(usdc, weth)?;
    let mut pool = ConstantProductPool::from_config(&config)?;
    info!(state = %pool.state(), "pool created");

    let added = pool.add_liquidity(&mut ledger, lp, Amount::new(2_000_000), Amount::new(1_000))?;
    info!(shares = %added.shares_minted, price = %pool.get_price()?, "bootstrapped");

    for round in 0..4u128 {
        let sell = Amount::new(50_000 * (round + 1));
        let preview = pool.preview_swap(SwapDirection::AToB, sell)?;
        let swap = pool.swap_a_for_b(&mut ledger, trader, sell)?;
        assert_eq!(preview, swap.amount_out);
        info!(
            round,
            sold = %swap.amount_in,
            bought = %swap.amount_out,
            price = %pool.get_price()?,
            "A -> B"
        );
    }
    let reserves = pool.get_reserves();
    let back = quote(Amount::new(100), reserves.b, reserves.a)?;
    let swap = pool.swap_b_for_a(&mut ledger, trader, Amount::new(100))?;
    info!(quoted = %back, bought = %swap.amount_out, "B -> A");

    let shares = pool.shares_of(&lp);
    let removed = pool.remove_liquidity(&mut ledger, lp, shares)?;
    info!(
        usdc = %removed.amount_a,
        weth = %removed.amount_b,
        state = %pool.state(),
        "provider exited"
    );

    let event = PoolEvent::from(removed);
    info!(json = %serde_json::to_string(&event)?, "last event");
    Ok(())
}
