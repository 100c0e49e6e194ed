//! The reserve pool store.
//!
//! [`PoolStore`] is the only mutable state of the AMM core: one
//! [`ReservePool`] per non-native denom, the global claim supply, and the
//! per-holder claim balances.  Reads are public; mutations are reserved to
//! the operation handlers, which validate a request fully before the first
//! write.

use std::collections::BTreeMap;

use num_bigint::BigUint;
use tracing::error;

use crate::config::AmmConfig;
use crate::domain::{Address, Claims, Denom};
use crate::error::AmmError;
use crate::traits::FromConfig;

use super::ReservePool;

/// Pool reserves and claim-token accounting.
///
/// # Invariants
///
/// - The native denom never has a pool of its own.
/// - `total_claims` equals the sum of all holder balances.
/// - No holder entry has a zero balance.
///
/// [`check_invariants`](Self::check_invariants) re-verifies all three.
///
/// # Examples
///
/// ```
/// use unipool::config::AmmConfig;
/// use unipool::domain::Denom;
/// use unipool::store::PoolStore;
/// use unipool::traits::FromConfig;
///
/// let store = PoolStore::from_config(&AmmConfig::default()).expect("valid config");
/// assert_eq!(store.native_denom().as_str(), "atom");
/// assert!(store.pool(&Denom::new("btcx").expect("valid")).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolStore {
    native_denom: Denom,
    pools: BTreeMap<Denom, ReservePool>,
    total_claims: Claims,
    claim_balances: BTreeMap<Address, Claims>,
}

impl PoolStore {
    /// Creates an empty store for the given native asset.
    #[must_use]
    pub fn new(native_denom: Denom) -> Self {
        Self {
            native_denom,
            pools: BTreeMap::new(),
            total_claims: Claims::zero(),
            claim_balances: BTreeMap::new(),
        }
    }

    /// Returns the native denom every pool is paired with.
    #[must_use]
    pub const fn native_denom(&self) -> &Denom {
        &self.native_denom
    }

    /// Returns `true` if `denom` is the native denom.
    #[must_use]
    pub fn is_native(&self, denom: &Denom) -> bool {
        *denom == self.native_denom
    }

    /// Returns `true` if a pool exists for `denom`.
    #[must_use]
    pub fn has_pool(&self, denom: &Denom) -> bool {
        self.pools.contains_key(denom)
    }

    /// Looks up the pool for `denom`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolNotFound`] if no deposit ever created it.
    pub fn pool(&self, denom: &Denom) -> Result<&ReservePool, AmmError> {
        self.pools
            .get(denom)
            .ok_or_else(|| AmmError::PoolNotFound(denom.clone()))
    }

    /// Iterates over all pools in denom order.
    pub fn pools(&self) -> impl Iterator<Item = (&Denom, &ReservePool)> {
        self.pools.iter()
    }

    /// Returns the number of pools.
    #[must_use]
    pub fn pool_count(&self) -> usize {
        self.pools.len()
    }

    /// Returns the global claim supply.
    pub const fn total_claims(&self) -> &Claims {
        &self.total_claims
    }

    /// Returns the claims owned by `holder` (zero if none).
    pub fn claims_of(&self, holder: &Address) -> Claims {
        self.claim_balances.get(holder).cloned().unwrap_or_default()
    }

    /// Iterates over holders with a non-zero claim balance.
    pub fn holders(&self) -> impl Iterator<Item = (&Address, &Claims)> {
        self.claim_balances.iter()
    }

    /// Re-verifies the store invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Internal`] if the native denom has a pool, a
    /// holder entry is zero, or the claim supply drifted from the sum of
    /// holder balances.
    pub fn check_invariants(&self) -> Result<(), AmmError> {
        if self.pools.contains_key(&self.native_denom) {
            error!(denom = %self.native_denom, "native denom has a reserve pool");
            return Err(AmmError::Internal("native denom has a reserve pool"));
        }
        if self.claim_balances.values().any(Claims::is_zero) {
            error!("zero claim balance retained");
            return Err(AmmError::Internal("zero claim balance retained"));
        }
        let sum = self
            .claim_balances
            .values()
            .fold(BigUint::default(), |acc, c| acc + c.as_biguint());
        if &sum != self.total_claims.as_biguint() {
            error!(
                supply = %self.total_claims,
                held = %sum,
                "claim supply drifted from holder balances"
            );
            return Err(AmmError::Internal("claim supply drift"));
        }
        Ok(())
    }

    /// Inserts or replaces the pool for a non-native denom.
    ///
    /// Pools are never removed; an emptied pool stays in the store.
    pub(crate) fn put_pool(&mut self, denom: &Denom, pool: ReservePool) -> Result<(), AmmError> {
        if self.is_native(denom) {
            return Err(AmmError::InvalidPair {
                input: denom.clone(),
                output: self.native_denom.clone(),
            });
        }
        self.pools.insert(denom.clone(), pool);
        Ok(())
    }

    /// Credits freshly minted claims to `holder` and the global supply.
    pub(crate) fn mint_claims(&mut self, holder: &Address, minted: &Claims) {
        if minted.is_zero() {
            return;
        }
        self.total_claims = &self.total_claims + minted;
        let balance = self.claim_balances.entry(holder.clone()).or_default();
        *balance = &*balance + minted;
    }

    /// Burns `burned` claims from `holder` and the global supply.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientClaims`] if `holder` owns fewer claims.
    /// - [`AmmError::Internal`] if the supply is smaller than the burn.
    pub(crate) fn burn_claims(&mut self, holder: &Address, burned: &Claims) -> Result<(), AmmError> {
        let held = self.claims_of(holder);
        let Some(remaining) = held.checked_sub(burned) else {
            return Err(AmmError::InsufficientClaims {
                held,
                requested: burned.clone(),
            });
        };
        let Some(supply) = self.total_claims.checked_sub(burned) else {
            error!(supply = %self.total_claims, %burned, "claim supply below holder balance");
            return Err(AmmError::Internal("claim supply below holder balance"));
        };

        self.total_claims = supply;
        if remaining.is_zero() {
            self.claim_balances.remove(holder);
        } else {
            self.claim_balances.insert(holder.clone(), remaining);
        }
        Ok(())
    }

    /// Burns `burned` claims from `holder` and replaces the pool for
    /// `denom` with `updated`, or does neither.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidPair`] if `denom` is the native denom.
    /// - [`AmmError::PoolNotFound`] if no pool exists for `denom`.
    /// - Any error of [`burn_claims`](Self::burn_claims).
    pub(crate) fn redeem(
        &mut self,
        holder: &Address,
        denom: &Denom,
        burned: &Claims,
        updated: ReservePool,
    ) -> Result<(), AmmError> {
        if self.is_native(denom) {
            return Err(AmmError::InvalidPair {
                input: denom.clone(),
                output: self.native_denom.clone(),
            });
        }
        if !self.pools.contains_key(denom) {
            return Err(AmmError::PoolNotFound(denom.clone()));
        }
        self.burn_claims(holder, burned)?;
        self.pools.insert(denom.clone(), updated);
        Ok(())
    }
}

impl FromConfig<AmmConfig> for PoolStore {
    fn from_config(config: &AmmConfig) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self::new(config.native_denom().clone()))
    }
}
