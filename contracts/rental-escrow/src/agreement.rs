//! Rental agreement lifecycle.
//!
//! ```text
//! PendingReservation -> Active -> Completed | Terminated
//! Active | Completed -> Disputed -> Completed   (see dispute.rs)
//! ```
//!
//! The reservation payment (first period rent plus deposit) is held in
//! escrow until activation settles the rent. The deposit stays escrowed
//! until a terminal transition disposes of it.

use soroban_sdk::{log, Address, Env};

use crate::access;
use crate::errors::Error;
use crate::escrow;
use crate::events::{
    AgreementActivatedEventData, AgreementCompletedEventData, AgreementCreatedEventData,
    AgreementTerminatedEventData, DepositForfeitedEventData, DepositReturnedEventData,
    RentPaidEventData,
};
use crate::fees;
use crate::property;
use crate::storage;
use crate::types::{
    AgreementStatus, LeaseConfig, RentalAgreement, DAY_IN_SECONDS, MONTH_IN_SECONDS,
};

pub fn load(e: &Env, agreement_id: u64) -> Result<RentalAgreement, Error> {
    storage::get_agreement(e, agreement_id).ok_or(Error::AgreementNotFound)
}

/// Reserve a property, escrowing the first period rent and the deposit.
pub fn reserve(
    e: &Env,
    tenant: Address,
    property_id: u64,
    duration_months: u32,
    extra_days: u32,
    payment: i128,
) -> Result<u64, Error> {
    tenant.require_auth();

    let config = access::require_initialized(e)?;
    access::require_not_paused(&config)?;

    let mut listed = property::load(e, property_id)?;
    if !listed.is_active {
        return Err(Error::Inactive);
    }
    if !listed.is_available {
        return Err(Error::PropertyUnavailable);
    }
    if tenant == listed.owner {
        return Err(Error::LandlordCannotReserve);
    }
    if duration_months == 0 && extra_days == 0 {
        return Err(Error::InvalidDuration);
    }

    // The first period is one base unit for both monthly and daily rent.
    let first_period_rent = listed.rent_base_amount;
    let required = first_period_rent
        .checked_add(listed.security_deposit)
        .ok_or(Error::AmountOverflow)?;
    if payment != required {
        return Err(Error::PaymentMismatch);
    }

    let start_date = e.ledger().timestamp();
    let end_date = start_date
        + duration_months as u64 * MONTH_IN_SECONDS
        + extra_days as u64 * DAY_IN_SECONDS;

    escrow::collect(e, &config, &tenant, payment);

    let agreement_id = storage::next_agreement_id(e);
    let agreement = RentalAgreement {
        id: agreement_id,
        property_id,
        tenant: tenant.clone(),
        landlord: listed.owner.clone(),
        rent_amount: first_period_rent,
        rent_unit: listed.rent_unit,
        security_deposit: listed.security_deposit,
        start_date,
        end_date,
        last_payment_date: 0,
        status: AgreementStatus::PendingReservation,
        total_paid: payment,
        escrow_balance: payment,
    };

    storage::set_agreement(e, &agreement);
    storage::add_tenant_agreement(e, &tenant, agreement_id);
    storage::add_landlord_agreement(e, &listed.owner, agreement_id);
    storage::adjust_escrowed_funds(e, payment)?;
    property::occupy(e, &mut listed);

    AgreementCreatedEventData {
        tenant,
        landlord: listed.owner,
        agreement_id,
        property_id,
        escrowed: payment,
        start_date,
        end_date,
    }
    .publish(e);

    Ok(agreement_id)
}

/// Split `amount` through the fee account and pay the landlord's share.
fn settle_rent(
    e: &Env,
    config: &LeaseConfig,
    agreement: &RentalAgreement,
    amount: i128,
) -> Result<(i128, i128), Error> {
    let mut account = access::require_fee_account(e)?;
    let (landlord_share, fee) = fees::split(amount, account.platform_fee_percentage)?;
    fees::accrue(e, &mut account, fee)?;
    escrow::disburse(e, config, &agreement.landlord, landlord_share);
    Ok((landlord_share, fee))
}

/// Settle the escrowed first period rent and start the lease.
pub fn activate(e: &Env, tenant: Address, agreement_id: u64) -> Result<(), Error> {
    tenant.require_auth();
    let config = access::require_initialized(e)?;

    let mut agreement = load(e, agreement_id)?;
    access::require_tenant(&agreement, &tenant)?;
    if agreement.status != AgreementStatus::PendingReservation {
        return Err(Error::WrongState);
    }

    let rent = agreement.rent_amount;
    let (landlord_share, fee) = settle_rent(e, &config, &agreement, rent)?;

    let now = e.ledger().timestamp();
    agreement.status = AgreementStatus::Active;
    agreement.last_payment_date = now;
    agreement.escrow_balance -= rent;
    storage::set_agreement(e, &agreement);
    storage::adjust_escrowed_funds(e, -rent)?;

    AgreementActivatedEventData {
        agreement_id,
        landlord_share,
        fee,
        timestamp: now,
    }
    .publish(e);

    Ok(())
}

/// Earliest timestamp at which the next rent payment is accepted.
pub fn next_payment_time(agreement: &RentalAgreement) -> u64 {
    agreement.last_payment_date + agreement.rent_unit.min_payment_interval()
}

/// Pay one period of rent on an active lease.
pub fn pay_rent(
    e: &Env,
    tenant: Address,
    agreement_id: u64,
    periods: u32,
    payment: i128,
) -> Result<(), Error> {
    tenant.require_auth();
    let config = access::require_initialized(e)?;

    let mut agreement = load(e, agreement_id)?;
    access::require_tenant(&agreement, &tenant)?;
    if agreement.status != AgreementStatus::Active {
        return Err(Error::WrongState);
    }

    let now = e.ledger().timestamp();
    if now > agreement.end_date {
        return Err(Error::Expired);
    }
    if periods != 1 {
        return Err(Error::UnsupportedPeriodCount);
    }
    if now < next_payment_time(&agreement) {
        log!(e, "rent paid too soon", agreement_id, now);
        return Err(Error::TooSoon);
    }
    if payment != agreement.rent_amount {
        return Err(Error::IncorrectAmount);
    }

    agreement.last_payment_date = now;
    agreement.total_paid = agreement
        .total_paid
        .checked_add(payment)
        .ok_or(Error::AmountOverflow)?;
    storage::set_agreement(e, &agreement);

    escrow::collect(e, &config, &tenant, payment);
    let (landlord_share, fee) = settle_rent(e, &config, &agreement, payment)?;

    RentPaidEventData {
        agreement_id,
        tenant,
        amount: payment,
        landlord_share,
        fee,
        timestamp: now,
    }
    .publish(e);

    Ok(())
}

/// Pay out whatever the agreement still holds in escrow.
///
/// Returns the amount moved. Used by every terminal transition, including
/// dispute resolution, so the deposit leaves escrow at most once.
pub fn dispose_deposit(
    e: &Env,
    config: &LeaseConfig,
    agreement: &mut RentalAgreement,
    to_landlord: bool,
) -> Result<i128, Error> {
    let amount = agreement.escrow_balance;
    agreement.escrow_balance = 0;
    storage::adjust_escrowed_funds(e, -amount)?;

    let now = e.ledger().timestamp();
    if to_landlord {
        escrow::disburse(e, config, &agreement.landlord, amount);
        DepositForfeitedEventData {
            agreement_id: agreement.id,
            landlord: agreement.landlord.clone(),
            amount,
            timestamp: now,
        }
        .publish(e);
    } else {
        escrow::disburse(e, config, &agreement.tenant, amount);
        DepositReturnedEventData {
            agreement_id: agreement.id,
            tenant: agreement.tenant.clone(),
            amount,
            timestamp: now,
        }
        .publish(e);
    }
    Ok(amount)
}

/// Close a lease that reached its end date and return the deposit.
pub fn complete(e: &Env, caller: Address, agreement_id: u64) -> Result<(), Error> {
    caller.require_auth();
    let config = access::require_initialized(e)?;

    let mut agreement = load(e, agreement_id)?;
    access::require_party(&agreement, &caller)?;
    if agreement.status != AgreementStatus::Active {
        return Err(Error::WrongState);
    }
    let now = e.ledger().timestamp();
    if now < agreement.end_date {
        return Err(Error::NotExpired);
    }

    agreement.status = AgreementStatus::Completed;
    dispose_deposit(e, &config, &mut agreement, false)?;
    storage::set_agreement(e, &agreement);
    property::release(e, agreement.property_id)?;

    AgreementCompletedEventData {
        agreement_id,
        property_id: agreement.property_id,
        timestamp: now,
    }
    .publish(e);

    Ok(())
}

/// End an active lease early.
///
/// A landlord exit returns the deposit to the tenant; a tenant exit forfeits
/// it to the landlord.
pub fn terminate(e: &Env, caller: Address, agreement_id: u64) -> Result<(), Error> {
    caller.require_auth();
    let config = access::require_initialized(e)?;

    let mut agreement = load(e, agreement_id)?;
    access::require_party(&agreement, &caller)?;
    if agreement.status != AgreementStatus::Active {
        return Err(Error::WrongState);
    }

    let tenant_exit = caller == agreement.tenant;
    agreement.status = AgreementStatus::Terminated;
    dispose_deposit(e, &config, &mut agreement, tenant_exit)?;
    storage::set_agreement(e, &agreement);
    property::release(e, agreement.property_id)?;

    AgreementTerminatedEventData {
        agreement_id,
        terminated_by: caller,
        property_id: agreement.property_id,
        timestamp: e.ledger().timestamp(),
    }
    .publish(e);

    Ok(())
}
