use soroban_sdk::{contractevent, Address};

use crate::types::RentUnit;

/// Event emitted when the contract is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEventData {
    #[topic]
    pub admin: Address,
    pub token: Address,
    pub fee_percentage: u32,
}

/// Event emitted when listings and reservations are paused or resumed
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PausedUpdatedEventData {
    #[topic]
    pub admin: Address,
    pub is_paused: bool,
    pub timestamp: u64,
}

// ============================================================================
// PROPERTY EVENTS
// ============================================================================

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PropertyListedEventData {
    #[topic]
    pub owner: Address,
    #[topic]
    pub property_id: u64,
    pub rent_base_amount: i128,
    pub rent_unit: RentUnit,
    pub security_deposit: i128,
    pub timestamp: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PropertyUpdatedEventData {
    #[topic]
    pub owner: Address,
    #[topic]
    pub property_id: u64,
    pub rent_base_amount: i128,
    pub rent_unit: RentUnit,
    pub security_deposit: i128,
    pub timestamp: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PropertyDelistedEventData {
    #[topic]
    pub owner: Address,
    #[topic]
    pub property_id: u64,
    pub timestamp: u64,
}

// ============================================================================
// AGREEMENT EVENTS
// ============================================================================

/// Event emitted when a tenant reserves a property
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AgreementCreatedEventData {
    #[topic]
    pub tenant: Address,
    #[topic]
    pub landlord: Address,
    pub agreement_id: u64,
    pub property_id: u64,
    pub escrowed: i128,
    pub start_date: u64,
    pub end_date: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AgreementActivatedEventData {
    #[topic]
    pub agreement_id: u64,
    pub landlord_share: i128,
    pub fee: i128,
    pub timestamp: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RentPaidEventData {
    #[topic]
    pub agreement_id: u64,
    #[topic]
    pub tenant: Address,
    pub amount: i128,
    pub landlord_share: i128,
    pub fee: i128,
    pub timestamp: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AgreementCompletedEventData {
    #[topic]
    pub agreement_id: u64,
    pub property_id: u64,
    pub timestamp: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AgreementTerminatedEventData {
    #[topic]
    pub agreement_id: u64,
    pub terminated_by: Address,
    pub property_id: u64,
    pub timestamp: u64,
}

/// Event emitted when the security deposit goes back to the tenant
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositReturnedEventData {
    #[topic]
    pub agreement_id: u64,
    pub tenant: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Event emitted when the security deposit is kept by the landlord
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositForfeitedEventData {
    #[topic]
    pub agreement_id: u64,
    pub landlord: Address,
    pub amount: i128,
    pub timestamp: u64,
}

// ============================================================================
// DISPUTE EVENTS
// ============================================================================

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisputeCreatedEventData {
    #[topic]
    pub agreement_id: u64,
    #[topic]
    pub initiator: Address,
    pub dispute_id: u64,
    pub timestamp: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisputeResolvedEventData {
    #[topic]
    pub dispute_id: u64,
    pub agreement_id: u64,
    pub favor_landlord: bool,
    pub timestamp: u64,
}

// ============================================================================
// FEE EVENTS
// ============================================================================

#[contractevent(topics = ["fee_percentage_updated"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeePercentageUpdatedEventData {
    #[topic]
    pub admin: Address,
    pub new_percentage: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeesWithdrawnEventData {
    #[topic]
    pub admin: Address,
    pub amount: i128,
    pub timestamp: u64,
}
