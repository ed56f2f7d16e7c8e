use soroban_sdk::{log, Address, Env};

use crate::errors::Error;
use crate::storage;
use crate::types::{FeeAccount, LeaseConfig, RentalAgreement};

pub fn require_initialized(e: &Env) -> Result<LeaseConfig, Error> {
    storage::get_config(e).ok_or(Error::NotInitialized)
}

pub fn require_fee_account(e: &Env) -> Result<FeeAccount, Error> {
    storage::get_fee_account(e).ok_or(Error::NotInitialized)
}

/// Load the config and check `admin` is the stored administrator.
///
/// The caller must already have called `admin.require_auth()`.
pub fn require_admin(e: &Env, admin: &Address) -> Result<LeaseConfig, Error> {
    let config = require_initialized(e)?;
    if *admin != config.admin {
        return Err(Error::NotAdministrator);
    }
    Ok(config)
}

pub fn require_not_paused(config: &LeaseConfig) -> Result<(), Error> {
    if config.is_paused {
        return Err(Error::ContractPaused);
    }
    Ok(())
}

pub fn require_tenant(agreement: &RentalAgreement, caller: &Address) -> Result<(), Error> {
    if *caller != agreement.tenant {
        return Err(Error::NotTenant);
    }
    Ok(())
}

pub fn require_party(agreement: &RentalAgreement, caller: &Address) -> Result<(), Error> {
    if *caller != agreement.tenant && *caller != agreement.landlord {
        return Err(Error::NotParty);
    }
    Ok(())
}

/// Engine-wide lock held for the duration of a state-mutating call.
///
/// Acquiring sets a flag in instance storage; dropping the guard clears it,
/// so every return path releases the lock. A nested call that reaches a
/// guarded entry point while the flag is set fails with
/// [`Error::ReentrancyDetected`].
pub struct ReentrancyGuard {
    env: Env,
}

impl ReentrancyGuard {
    pub fn acquire(e: &Env) -> Result<Self, Error> {
        if storage::is_locked(e) {
            log!(e, "reentrant call rejected");
            return Err(Error::ReentrancyDetected);
        }
        storage::set_locked(e, true);
        Ok(Self { env: e.clone() })
    }
}

impl Drop for ReentrancyGuard {
    fn drop(&mut self) {
        storage::set_locked(&self.env, false);
    }
}
