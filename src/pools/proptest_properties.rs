//! Property-based tests using `proptest` for pool invariant validation.
//!
//! 1. **Bootstrap minting** — first deposit mints `floor(sqrt(a × b))`.
//! 2. **Ratio-preserving deposits** — price is unchanged, exactly.
//! 3. **Invariant preservation** — reserve product never decreases on swap.
//! 4. **Swap reversibility** — round-trip A→B→A returns ≤ original.
//! 5. **Liquidity round-trip** — add then remove returns ≤ deposited.
//! 6. **Full exit** — burning every share returns the pool to unbootstrapped.
//! 7. **Share accounting** — provider balances always sum to the supply.

use proptest::prelude::*;
use ruint::aliases::U256;

use super::{ConstantProductPool, PoolState};
use crate::config::PoolConfig;
use crate::domain::{AccountId, Amount, AssetId, Shares, SwapDirection};
use crate::ledger::InMemoryLedger;
use crate::math::isqrt;
use crate::traits::{FromConfig, LiquidityPool, SwapPool};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const ASSET_A: AssetId = AssetId::from_bytes([1u8; 32]);
const ASSET_B: AssetId = AssetId::from_bytes([2u8; 32]);
const ALICE: AccountId = AccountId::from_bytes([0xa1; 32]);
const BOB: AccountId = AccountId::from_bytes([0xb0; 32]);
const FUNDING: u128 = 1_000_000_000_000_000_000_000_000;

fn make_pool() -> ConstantProductPool {
    let Ok(cfg) = PoolConfig::for_assets(ASSET_A, ASSET_B) else {
        panic!("valid config");
    };
    let Ok(pool) = ConstantProductPool::from_config(&cfg) else {
        panic!("valid pool");
    };
    pool
}

fn make_ledger() -> InMemoryLedger {
    let mut ledger = InMemoryLedger::new(AccountId::from_bytes([0xff; 32]));
    for who in [ALICE, BOB] {
        for asset in [ASSET_A, ASSET_B] {
            let Ok(()) = ledger.mint(asset, who, Amount::new(FUNDING)) else {
                panic!("mint");
            };
            ledger.approve(asset, who, Amount::MAX);
        }
    }
    ledger
}

fn bootstrapped(ra: u128, rb: u128) -> (ConstantProductPool, InMemoryLedger) {
    let mut pool = make_pool();
    let mut ledger = make_ledger();
    let Ok(_) = pool.add_liquidity(&mut ledger, ALICE, Amount::new(ra), Amount::new(rb)) else {
        panic!("bootstrap");
    };
    (pool, ledger)
}

/// Reserve values in range [10_000, 10_000_000_000].
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000_000u128
}

/// Deposit values spanning dust to large.
fn deposit_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000_000_000u128
}

#[derive(Debug, Clone)]
enum Op {
    Add { bob: bool, a: u128, b: u128 },
    Remove { bob: bool, permille: u128 },
    Swap { from_a: bool, amount: u128 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (any::<bool>(), deposit_strategy(), deposit_strategy())
            .prop_map(|(bob, a, b)| Op::Add { bob, a, b }),
        (any::<bool>(), 1u128..=1_000u128).prop_map(|(bob, permille)| Op::Remove { bob, permille }),
        (any::<bool>(), deposit_strategy()).prop_map(|(from_a, amount)| Op::Swap { from_a, amount }),
    ]
}

// ---------------------------------------------------------------------------
// Property 1: Bootstrap Minting
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_bootstrap_mints_geometric_mean(
        a in deposit_strategy(),
        b in deposit_strategy(),
    ) {
        let (pool, _) = bootstrapped(a, b);
        let expected = isqrt(U256::from(a) * U256::from(b));
        prop_assert_eq!(U256::from(pool.total_shares().get()), expected);
        prop_assert_eq!(pool.shares_of(&ALICE), pool.total_shares());
        prop_assert_eq!(pool.get_reserves().a, Amount::new(a));
        prop_assert_eq!(pool.get_reserves().b, Amount::new(b));
    }
}

// ---------------------------------------------------------------------------
// Property 2: Ratio-Preserving Deposits
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_proportional_deposit_keeps_price(
        a in reserve_strategy(),
        b in reserve_strategy(),
        multiples in prop::collection::vec(1u128..=5u128, 1..5),
    ) {
        let (mut pool, mut ledger) = bootstrapped(a, b);
        let Ok(price_before) = pool.get_price() else {
            return Ok(());
        };
        for k in multiples {
            let result = pool.add_liquidity(
                &mut ledger,
                BOB,
                Amount::new(a * k),
                Amount::new(b * k),
            );
            prop_assert!(result.is_ok(), "proportional deposit failed: {:?}", result);
            prop_assert_eq!(pool.get_price(), Ok(price_before));
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Invariant Preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_never_decreases_invariant(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount in deposit_strategy(),
        from_a in any::<bool>(),
    ) {
        let (mut pool, mut ledger) = bootstrapped(ra, rb);
        let k_before = pool.invariant();
        let direction = SwapDirection::from_a(from_a);
        let Ok(swap) = pool.swap(&mut ledger, BOB, direction, Amount::new(amount)) else {
            return Ok(());
        };
        prop_assert!(!swap.amount_out.is_zero());
        prop_assert!(
            pool.invariant() >= k_before,
            "invariant decreased: before={} after={}",
            k_before, pool.invariant()
        );
    }
}

// ---------------------------------------------------------------------------
// Property 4: Swap Reversibility
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_round_trip_loses_value(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let swap_in = (ra / 1_000).max(1);
        let (mut pool, mut ledger) = bootstrapped(ra, rb);

        let Ok(ab) = pool.swap_a_for_b(&mut ledger, BOB, Amount::new(swap_in)) else {
            return Ok(());
        };
        let Ok(ba) = pool.swap_b_for_a(&mut ledger, BOB, ab.amount_out) else {
            return Ok(());
        };

        prop_assert!(
            ba.amount_out.get() <= swap_in,
            "round-trip should lose value: final={} > original={}",
            ba.amount_out, swap_in
        );
    }
}

// ---------------------------------------------------------------------------
// Property 5: Liquidity Round-Trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_add_then_remove_never_profits(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        da in deposit_strategy(),
        db in deposit_strategy(),
    ) {
        let (mut pool, mut ledger) = bootstrapped(ra, rb);
        let Ok(added) = pool.add_liquidity(&mut ledger, BOB, Amount::new(da), Amount::new(db)) else {
            return Ok(());
        };
        let Ok(removed) = pool.remove_liquidity(&mut ledger, BOB, added.shares_minted) else {
            return Ok(());
        };
        prop_assert!(removed.amount_a <= added.amount_a);
        prop_assert!(removed.amount_b <= added.amount_b);
        prop_assert_eq!(pool.shares_of(&BOB), Shares::ZERO);
    }
}

// ---------------------------------------------------------------------------
// Property 6: Full Exit
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_full_exit_unbootstraps(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        swaps in prop::collection::vec((any::<bool>(), deposit_strategy()), 0..8),
    ) {
        let (mut pool, mut ledger) = bootstrapped(ra, rb);
        for (from_a, amount) in swaps {
            let _ = pool.swap(&mut ledger, BOB, SwapDirection::from_a(from_a), Amount::new(amount));
        }
        let all = pool.shares_of(&ALICE);
        let Ok(removed) = pool.remove_liquidity(&mut ledger, ALICE, all) else {
            return Err(TestCaseError::fail("sole provider exit failed"));
        };
        prop_assert_eq!(removed.shares_burned, all);
        prop_assert_eq!(pool.state(), PoolState::Unbootstrapped);
        prop_assert!(pool.get_reserves().is_empty());
        prop_assert_eq!(ledger.custody_balance(ASSET_A), Amount::ZERO);
        prop_assert_eq!(ledger.custody_balance(ASSET_B), Amount::ZERO);
    }
}

// ---------------------------------------------------------------------------
// Property 7: Share Accounting
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_share_balances_sum_to_supply(
        ops in prop::collection::vec(op_strategy(), 1..24),
    ) {
        let mut pool = make_pool();
        let mut ledger = make_ledger();
        for op in ops {
            let before = pool.clone();
            let result = match op {
                Op::Add { bob, a, b } => {
                    let who = if bob { BOB } else { ALICE };
                    pool.add_liquidity(&mut ledger, who, Amount::new(a), Amount::new(b))
                        .map(|_| ())
                }
                Op::Remove { bob, permille } => {
                    let who = if bob { BOB } else { ALICE };
                    let shares = Shares::new(pool.shares_of(&who).get() * permille / 1_000);
                    pool.remove_liquidity(&mut ledger, who, shares).map(|_| ())
                }
                Op::Swap { from_a, amount } => pool
                    .swap(&mut ledger, BOB, SwapDirection::from_a(from_a), Amount::new(amount))
                    .map(|_| ()),
            };
            if result.is_err() {
                prop_assert_eq!(&pool, &before);
            }

            let sum: u128 = pool.providers().map(|(_, s)| s.get()).sum();
            prop_assert_eq!(sum, pool.total_shares().get());
            let reserves = pool.get_reserves();
            prop_assert_eq!(reserves.a.is_zero(), pool.total_shares().is_zero());
            prop_assert_eq!(reserves.b.is_zero(), pool.total_shares().is_zero());
            prop_assert_eq!(ledger.custody_balance(ASSET_A), reserves.a);
            prop_assert_eq!(ledger.custody_balance(ASSET_B), reserves.b);
        }
    }
}
