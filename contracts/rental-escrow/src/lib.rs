#![no_std]

//! # Rental Escrow Contract
//!
//! Soroban smart contract that leases listed properties through an
//! escrow-backed agreement lifecycle. The contract custodies tenant funds
//! (rent and security deposit) in a single token and splits every rent
//! payment between the landlord and a platform fee pool.
//!
//! ## Flow
//!
//! 1. **Listing** ([`property`]): a landlord lists a property with its rent
//!    terms and security deposit.
//! 2. **Reservation** ([`agreement::reserve`]): a tenant pays the first
//!    period rent plus the deposit into escrow; the property is locked.
//! 3. **Activation** ([`agreement::activate`]): the escrowed rent is split
//!    through the [`fees`] account and the landlord's share is paid out.
//! 4. **Rent** ([`agreement::pay_rent`]): one period per call, no earlier
//!    than the unit's minimum interval after the previous payment.
//! 5. **Exit** ([`agreement::complete`], [`agreement::terminate`]) or
//!    **arbitration** ([`dispute`]): the deposit leaves escrow exactly once
//!    and the property becomes available again.
//!
//! Every state-mutating entry point holds a [`access::ReentrancyGuard`] for
//! its whole body. A returned error or a failed token transfer rolls back
//! the entire invocation.

mod access;
mod agreement;
mod dispute;
mod errors;
mod escrow;
mod events;
mod fees;
mod property;
mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub use crate::errors::Error;
pub use crate::types::*;

use crate::access::ReentrancyGuard;
use crate::events::{InitializedEventData, PausedUpdatedEventData};

#[contract]
pub struct RentalEscrow;

#[contractimpl]
impl RentalEscrow {
    // ========================================================================
    // INITIALIZATION & CONFIGURATION
    // ========================================================================

    /// Initialize the contract.
    ///
    /// # Arguments
    /// * `admin` - Platform administrator and dispute arbiter
    /// * `token` - Token contract used for every payment
    /// * `fee_percentage` - Platform fee in whole percent (0-10)
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the contract has already been initialized
    /// * `Error::FeeTooHigh` - If `fee_percentage` exceeds 10
    pub fn initialize(
        e: &Env,
        admin: Address,
        token: Address,
        fee_percentage: u32,
    ) -> Result<(), Error> {
        admin.require_auth();
        let _guard = ReentrancyGuard::acquire(e)?;

        if storage::is_initialized(e) {
            return Err(Error::AlreadyInitialized);
        }
        fees::validate_percentage(fee_percentage)?;

        let config = LeaseConfig {
            admin: admin.clone(),
            token: token.clone(),
            is_paused: false,
            updated_at: e.ledger().timestamp(),
        };
        storage::set_config(e, &config);
        storage::set_fee_account(
            e,
            &FeeAccount {
                platform_fee_percentage: fee_percentage,
                accumulated_platform_fees: 0,
            },
        );
        storage::set_initialized(e);
        storage::extend_instance_ttl(e);

        InitializedEventData {
            admin,
            token,
            fee_percentage,
        }
        .publish(e);

        Ok(())
    }

    pub fn get_config(e: &Env) -> Result<LeaseConfig, Error> {
        access::require_initialized(e)
    }

    /// Pause or resume new listings and reservations (admin only).
    ///
    /// Settlement paths stay open while paused.
    pub fn set_paused(e: &Env, admin: Address, paused: bool) -> Result<(), Error> {
        admin.require_auth();
        let _guard = ReentrancyGuard::acquire(e)?;

        let mut config = access::require_admin(e, &admin)?;
        config.is_paused = paused;
        config.updated_at = e.ledger().timestamp();
        storage::set_config(e, &config);

        PausedUpdatedEventData {
            admin,
            is_paused: paused,
            timestamp: config.updated_at,
        }
        .publish(e);

        storage::extend_instance_ttl(e);
        Ok(())
    }

    pub fn is_paused(e: &Env) -> Result<bool, Error> {
        Ok(access::require_initialized(e)?.is_paused)
    }

    // ========================================================================
    // PROPERTY REGISTRY
    // ========================================================================

    /// List a property for rent.
    ///
    /// # Arguments
    /// * `owner` - Landlord listing the property
    /// * `rent_base_amount` - Rent per period, must be positive
    /// * `security_deposit` - Deposit held in escrow for each lease, may be zero
    /// * `rent_unit` - Billing period
    ///
    /// # Returns
    /// * Property ID
    ///
    /// # Errors
    /// * `Error::InvalidTerms` - Non-positive rent or negative deposit
    /// * `Error::ContractPaused` - Listings are paused
    pub fn list_property(
        e: &Env,
        owner: Address,
        location: String,
        description: String,
        rent_base_amount: i128,
        security_deposit: i128,
        rent_unit: RentUnit,
    ) -> Result<u64, Error> {
        let _guard = ReentrancyGuard::acquire(e)?;
        let property_id = property::list(
            e,
            owner,
            location,
            description,
            rent_base_amount,
            security_deposit,
            rent_unit,
        )?;
        storage::extend_instance_ttl(e);
        Ok(property_id)
    }

    /// Update listing terms (owner only). Existing agreements are unaffected.
    pub fn update_property(
        e: &Env,
        owner: Address,
        property_id: u64,
        location: String,
        description: String,
        rent_base_amount: i128,
        security_deposit: i128,
        rent_unit: RentUnit,
    ) -> Result<(), Error> {
        let _guard = ReentrancyGuard::acquire(e)?;
        property::update(
            e,
            owner,
            property_id,
            location,
            description,
            rent_base_amount,
            security_deposit,
            rent_unit,
        )?;
        storage::extend_instance_ttl(e);
        Ok(())
    }

    /// Delist a property permanently (owner only)
    pub fn delist_property(e: &Env, owner: Address, property_id: u64) -> Result<(), Error> {
        let _guard = ReentrancyGuard::acquire(e)?;
        property::delist(e, owner, property_id)?;
        storage::extend_instance_ttl(e);
        Ok(())
    }

    pub fn get_property(e: &Env, property_id: u64) -> Result<Property, Error> {
        property::load(e, property_id)
    }

    pub fn get_properties_by_owner(e: &Env, owner: Address) -> Vec<u64> {
        storage::get_owner_properties(e, &owner)
    }

    /// IDs of properties open for reservation, ascending
    pub fn list_available(e: &Env) -> Vec<u64> {
        property::list_available(e)
    }

    // ========================================================================
    // AGREEMENT LIFECYCLE
    // ========================================================================

    /// Reserve a property.
    ///
    /// `payment` must equal one period of rent plus the security deposit and
    /// is held in escrow until activation.
    ///
    /// # Returns
    /// * Agreement ID
    pub fn reserve_property(
        e: &Env,
        tenant: Address,
        property_id: u64,
        duration_months: u32,
        extra_days: u32,
        payment: i128,
    ) -> Result<u64, Error> {
        let _guard = ReentrancyGuard::acquire(e)?;
        let agreement_id =
            agreement::reserve(e, tenant, property_id, duration_months, extra_days, payment)?;
        storage::extend_instance_ttl(e);
        Ok(agreement_id)
    }

    /// Activate a reserved agreement (tenant only), paying the landlord the
    /// first period rent net of the platform fee.
    pub fn activate_agreement(e: &Env, tenant: Address, agreement_id: u64) -> Result<(), Error> {
        let _guard = ReentrancyGuard::acquire(e)?;
        agreement::activate(e, tenant, agreement_id)?;
        storage::extend_instance_ttl(e);
        Ok(())
    }

    /// Pay rent on an active agreement (tenant only). `periods` must be 1.
    pub fn pay_rent(
        e: &Env,
        tenant: Address,
        agreement_id: u64,
        periods: u32,
        payment: i128,
    ) -> Result<(), Error> {
        let _guard = ReentrancyGuard::acquire(e)?;
        agreement::pay_rent(e, tenant, agreement_id, periods, payment)?;
        storage::extend_instance_ttl(e);
        Ok(())
    }

    /// Complete an agreement past its end date and refund the deposit.
    pub fn complete_agreement(e: &Env, caller: Address, agreement_id: u64) -> Result<(), Error> {
        let _guard = ReentrancyGuard::acquire(e)?;
        agreement::complete(e, caller, agreement_id)?;
        storage::extend_instance_ttl(e);
        Ok(())
    }

    /// Terminate an active agreement early (tenant or landlord).
    pub fn terminate_agreement(e: &Env, caller: Address, agreement_id: u64) -> Result<(), Error> {
        let _guard = ReentrancyGuard::acquire(e)?;
        agreement::terminate(e, caller, agreement_id)?;
        storage::extend_instance_ttl(e);
        Ok(())
    }

    pub fn get_agreement(e: &Env, agreement_id: u64) -> Result<RentalAgreement, Error> {
        agreement::load(e, agreement_id)
    }

    pub fn get_agreements_by_tenant(e: &Env, tenant: Address) -> Vec<u64> {
        storage::get_tenant_agreements(e, &tenant)
    }

    pub fn get_agreements_by_landlord(e: &Env, landlord: Address) -> Vec<u64> {
        storage::get_landlord_agreements(e, &landlord)
    }

    /// Earliest ledger timestamp at which `pay_rent` accepts the next payment
    pub fn next_payment_time(e: &Env, agreement_id: u64) -> Result<u64, Error> {
        let rental = agreement::load(e, agreement_id)?;
        if rental.status != AgreementStatus::Active {
            return Err(Error::WrongState);
        }
        Ok(agreement::next_payment_time(&rental))
    }

    // ========================================================================
    // DISPUTES
    // ========================================================================

    /// Raise a dispute on an active or completed agreement (tenant or landlord).
    pub fn create_dispute(
        e: &Env,
        caller: Address,
        agreement_id: u64,
        reason: String,
    ) -> Result<u64, Error> {
        let _guard = ReentrancyGuard::acquire(e)?;
        let dispute_id = dispute::create(e, caller, agreement_id, reason)?;
        storage::extend_instance_ttl(e);
        Ok(dispute_id)
    }

    /// Resolve an open dispute (admin only).
    pub fn resolve_dispute(
        e: &Env,
        admin: Address,
        dispute_id: u64,
        favor_landlord: bool,
    ) -> Result<(), Error> {
        let _guard = ReentrancyGuard::acquire(e)?;
        dispute::resolve(e, admin, dispute_id, favor_landlord)?;
        storage::extend_instance_ttl(e);
        Ok(())
    }

    pub fn get_dispute(e: &Env, dispute_id: u64) -> Result<Dispute, Error> {
        dispute::load(e, dispute_id)
    }

    pub fn get_disputes_by_agreement(e: &Env, agreement_id: u64) -> Vec<u64> {
        storage::get_agreement_disputes(e, agreement_id)
    }

    // ========================================================================
    // FEE MANAGEMENT
    // ========================================================================

    /// Update the platform fee percentage (admin only, at most 10)
    pub fn set_fee_percentage(e: &Env, admin: Address, new_percentage: u32) -> Result<(), Error> {
        let _guard = ReentrancyGuard::acquire(e)?;
        fees::set_fee_percentage(e, admin, new_percentage)?;
        storage::extend_instance_ttl(e);
        Ok(())
    }

    /// Withdraw all retained platform fees to the admin.
    ///
    /// # Returns
    /// * Amount withdrawn
    pub fn withdraw_fees(e: &Env, admin: Address) -> Result<i128, Error> {
        let _guard = ReentrancyGuard::acquire(e)?;
        let amount = fees::withdraw(e, admin)?;
        storage::extend_instance_ttl(e);
        Ok(amount)
    }

    pub fn get_fee_account(e: &Env) -> Result<FeeAccount, Error> {
        access::require_fee_account(e)
    }

    /// Split `amount` at the current fee percentage into `(landlord_share, fee)`
    pub fn quote_split(e: &Env, amount: i128) -> Result<(i128, i128), Error> {
        let account = access::require_fee_account(e)?;
        fees::split(amount, account.platform_fee_percentage)
    }

    // ========================================================================
    // STATISTICS
    // ========================================================================

    pub fn get_stats(e: &Env) -> Result<LeaseStats, Error> {
        let account = access::require_fee_account(e)?;
        Ok(LeaseStats {
            total_properties: storage::get_property_count(e),
            total_agreements: storage::get_agreement_count(e),
            total_disputes: storage::get_dispute_count(e),
            accumulated_platform_fees: account.accumulated_platform_fees,
            escrowed_funds: storage::get_escrowed_funds(e),
        })
    }
}
