use soroban_sdk::{log, Address, Env, String};

use crate::access;
use crate::agreement;
use crate::errors::Error;
use crate::events::{DisputeCreatedEventData, DisputeResolvedEventData};
use crate::property;
use crate::storage;
use crate::types::{AgreementStatus, Dispute, DisputeStatus};

pub fn load(e: &Env, dispute_id: u64) -> Result<Dispute, Error> {
    storage::get_dispute(e, dispute_id).ok_or(Error::DisputeNotFound)
}

/// Open a dispute on an active or completed agreement and freeze it.
pub fn create(e: &Env, caller: Address, agreement_id: u64, reason: String) -> Result<u64, Error> {
    caller.require_auth();
    access::require_initialized(e)?;

    let mut disputed = agreement::load(e, agreement_id)?;
    access::require_party(&disputed, &caller)?;
    if !matches!(
        disputed.status,
        AgreementStatus::Active | AgreementStatus::Completed
    ) {
        return Err(Error::WrongState);
    }

    let now = e.ledger().timestamp();
    let dispute_id = storage::next_dispute_id(e);
    let dispute = Dispute {
        id: dispute_id,
        agreement_id,
        initiator: caller.clone(),
        reason,
        status: DisputeStatus::Open,
        created_at: now,
        prior_status: disputed.status,
        resolved_at: None,
        favor_landlord: None,
    };

    disputed.status = AgreementStatus::Disputed;
    storage::set_agreement(e, &disputed);
    storage::set_dispute(e, &dispute);
    storage::add_agreement_dispute(e, agreement_id, dispute_id);

    DisputeCreatedEventData {
        agreement_id,
        initiator: caller,
        dispute_id,
        timestamp: now,
    }
    .publish(e);

    Ok(dispute_id)
}

/// Administrator ruling: complete the agreement and award what remains in
/// escrow to the landlord or the tenant.
pub fn resolve(e: &Env, admin: Address, dispute_id: u64, favor_landlord: bool) -> Result<(), Error> {
    admin.require_auth();
    let config = access::require_admin(e, &admin)?;

    let mut dispute = load(e, dispute_id)?;
    if dispute.status != DisputeStatus::Open {
        return Err(Error::NotOpen);
    }

    let mut disputed = agreement::load(e, dispute.agreement_id)?;
    if disputed.status != AgreementStatus::Disputed {
        return Err(Error::WrongState);
    }

    let now = e.ledger().timestamp();
    dispute.status = DisputeStatus::Resolved;
    dispute.resolved_at = Some(now);
    dispute.favor_landlord = Some(favor_landlord);
    storage::set_dispute(e, &dispute);

    disputed.status = AgreementStatus::Completed;
    let awarded = agreement::dispose_deposit(e, &config, &mut disputed, favor_landlord)?;
    storage::set_agreement(e, &disputed);

    // A completed agreement already gave its property back.
    if dispute.prior_status.holds_property() {
        property::release(e, disputed.property_id)?;
    }

    log!(e, "dispute resolved", dispute_id, awarded);

    DisputeResolvedEventData {
        dispute_id,
        agreement_id: dispute.agreement_id,
        favor_landlord,
        timestamp: now,
    }
    .publish(e);

    Ok(())
}
