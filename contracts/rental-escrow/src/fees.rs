//! Platform fee accounting.
//!
//! Every rent settlement is split here into the landlord's share and the
//! platform fee. Fees stay in contract custody until the administrator
//! withdraws them.

use soroban_sdk::{Address, Env};

use crate::access;
use crate::errors::Error;
use crate::escrow;
use crate::events::{FeePercentageUpdatedEventData, FeesWithdrawnEventData};
use crate::storage;
use crate::types::{FeeAccount, MAX_FEE_PERCENTAGE};

/// Split `gross` into `(landlord_share, fee)`.
///
/// `fee = floor(gross * fee_percentage / 100)`. Small amounts may carry no fee.
pub fn split(gross: i128, fee_percentage: u32) -> Result<(i128, i128), Error> {
    let fee = gross
        .checked_mul(fee_percentage as i128)
        .ok_or(Error::AmountOverflow)?
        / 100;
    Ok((gross - fee, fee))
}

pub fn accrue(e: &Env, account: &mut FeeAccount, fee: i128) -> Result<(), Error> {
    account.accumulated_platform_fees = account
        .accumulated_platform_fees
        .checked_add(fee)
        .ok_or(Error::AmountOverflow)?;
    storage::set_fee_account(e, account);
    Ok(())
}

pub fn validate_percentage(fee_percentage: u32) -> Result<(), Error> {
    if fee_percentage > MAX_FEE_PERCENTAGE {
        return Err(Error::FeeTooHigh);
    }
    Ok(())
}

pub fn set_fee_percentage(e: &Env, admin: Address, new_percentage: u32) -> Result<(), Error> {
    admin.require_auth();
    access::require_admin(e, &admin)?;
    validate_percentage(new_percentage)?;

    let mut account = access::require_fee_account(e)?;
    account.platform_fee_percentage = new_percentage;
    storage::set_fee_account(e, &account);

    FeePercentageUpdatedEventData {
        admin,
        new_percentage,
    }
    .publish(e);

    Ok(())
}

/// Zero the retained fees and pay them to the administrator.
pub fn withdraw(e: &Env, admin: Address) -> Result<i128, Error> {
    admin.require_auth();
    let config = access::require_admin(e, &admin)?;

    let mut account = access::require_fee_account(e)?;
    let amount = account.accumulated_platform_fees;
    if amount <= 0 {
        return Err(Error::NothingToWithdraw);
    }

    account.accumulated_platform_fees = 0;
    storage::set_fee_account(e, &account);
    escrow::disburse(e, &config, &admin, amount);

    FeesWithdrawnEventData {
        admin,
        amount,
        timestamp: e.ledger().timestamp(),
    }
    .publish(e);

    Ok(amount)
}
