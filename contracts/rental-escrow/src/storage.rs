use soroban_sdk::{Address, Env, IntoVal, TryFromVal, Val, Vec};

use crate::errors::Error;
use crate::types::{
    Dispute, FeeAccount, LeaseConfig, Property, RentalAgreement, StorageKey,
    INSTANCE_TTL_AMOUNT, INSTANCE_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

// ============================================================================
// PERSISTENT HELPERS
// ============================================================================

fn load<V: TryFromVal<Env, Val>>(e: &Env, key: &StorageKey) -> Option<V> {
    let value = e.storage().persistent().get::<_, V>(key);
    if value.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    value
}

fn save<V: IntoVal<Env, Val>>(e: &Env, key: &StorageKey, value: &V) {
    e.storage().persistent().set(key, value);
    e.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

fn load_ids(e: &Env, key: &StorageKey) -> Vec<u64> {
    load(e, key).unwrap_or(Vec::new(e))
}

fn push_id(e: &Env, key: &StorageKey, id: u64) {
    let mut ids = load_ids(e, key);
    ids.push_back(id);
    save(e, key, &ids);
}

/// Extend the TTL of instance storage.
pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

// ============================================================================
// INITIALIZATION & CONFIG
// ============================================================================

pub fn is_initialized(e: &Env) -> bool {
    e.storage()
        .instance()
        .get::<_, bool>(&StorageKey::Initialized)
        .unwrap_or(false)
}

pub fn set_initialized(e: &Env) {
    e.storage().instance().set(&StorageKey::Initialized, &true);
}

pub fn get_config(e: &Env) -> Option<LeaseConfig> {
    e.storage().instance().get(&StorageKey::Config)
}

pub fn set_config(e: &Env, config: &LeaseConfig) {
    e.storage().instance().set(&StorageKey::Config, config);
}

pub fn get_fee_account(e: &Env) -> Option<FeeAccount> {
    e.storage().instance().get(&StorageKey::FeeAccount)
}

pub fn set_fee_account(e: &Env, account: &FeeAccount) {
    e.storage().instance().set(&StorageKey::FeeAccount, account);
}

// ============================================================================
// REENTRANCY LOCK
// ============================================================================

pub fn is_locked(e: &Env) -> bool {
    e.storage()
        .instance()
        .get::<_, bool>(&StorageKey::ReentrancyLock)
        .unwrap_or(false)
}

pub fn set_locked(e: &Env, locked: bool) {
    e.storage()
        .instance()
        .set(&StorageKey::ReentrancyLock, &locked);
}

// ============================================================================
// COUNTERS
// ============================================================================

fn get_counter(e: &Env, key: &StorageKey) -> u64 {
    e.storage().instance().get(key).unwrap_or(0)
}

fn increment_counter(e: &Env, key: &StorageKey) -> u64 {
    let next = get_counter(e, key) + 1;
    e.storage().instance().set(key, &next);
    next
}

pub fn get_property_count(e: &Env) -> u64 {
    get_counter(e, &StorageKey::PropertyCounter)
}

/// Assign the next property ID
pub fn next_property_id(e: &Env) -> u64 {
    increment_counter(e, &StorageKey::PropertyCounter)
}

pub fn get_agreement_count(e: &Env) -> u64 {
    get_counter(e, &StorageKey::AgreementCounter)
}

/// Assign the next agreement ID
pub fn next_agreement_id(e: &Env) -> u64 {
    increment_counter(e, &StorageKey::AgreementCounter)
}

pub fn get_dispute_count(e: &Env) -> u64 {
    get_counter(e, &StorageKey::DisputeCounter)
}

/// Assign the next dispute ID
pub fn next_dispute_id(e: &Env) -> u64 {
    increment_counter(e, &StorageKey::DisputeCounter)
}

// ============================================================================
// ESCROW TOTAL
// ============================================================================

/// Total funds held in escrow across all agreements
pub fn get_escrowed_funds(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&StorageKey::EscrowedFunds)
        .unwrap_or(0)
}

/// Apply a signed change to the escrow total
pub fn adjust_escrowed_funds(e: &Env, delta: i128) -> Result<(), Error> {
    let total = get_escrowed_funds(e)
        .checked_add(delta)
        .ok_or(Error::AmountOverflow)?;
    e.storage()
        .instance()
        .set(&StorageKey::EscrowedFunds, &total);
    Ok(())
}

// ============================================================================
// PROPERTY STORAGE
// ============================================================================

pub fn get_property(e: &Env, property_id: u64) -> Option<Property> {
    load(e, &StorageKey::Property(property_id))
}

pub fn set_property(e: &Env, property: &Property) {
    save(e, &StorageKey::Property(property.id), property);
}

pub fn get_owner_properties(e: &Env, owner: &Address) -> Vec<u64> {
    load_ids(e, &StorageKey::OwnerProperties(owner.clone()))
}

pub fn add_owner_property(e: &Env, owner: &Address, property_id: u64) {
    push_id(e, &StorageKey::OwnerProperties(owner.clone()), property_id);
}

// ============================================================================
// AGREEMENT STORAGE
// ============================================================================

pub fn get_agreement(e: &Env, agreement_id: u64) -> Option<RentalAgreement> {
    load(e, &StorageKey::Agreement(agreement_id))
}

pub fn set_agreement(e: &Env, agreement: &RentalAgreement) {
    save(e, &StorageKey::Agreement(agreement.id), agreement);
}

pub fn get_tenant_agreements(e: &Env, tenant: &Address) -> Vec<u64> {
    load_ids(e, &StorageKey::TenantAgreements(tenant.clone()))
}

pub fn add_tenant_agreement(e: &Env, tenant: &Address, agreement_id: u64) {
    push_id(e, &StorageKey::TenantAgreements(tenant.clone()), agreement_id);
}

pub fn get_landlord_agreements(e: &Env, landlord: &Address) -> Vec<u64> {
    load_ids(e, &StorageKey::LandlordAgreements(landlord.clone()))
}

pub fn add_landlord_agreement(e: &Env, landlord: &Address, agreement_id: u64) {
    push_id(e, &StorageKey::LandlordAgreements(landlord.clone()), agreement_id);
}

// ============================================================================
// DISPUTE STORAGE
// ============================================================================

pub fn get_dispute(e: &Env, dispute_id: u64) -> Option<Dispute> {
    load(e, &StorageKey::Dispute(dispute_id))
}

pub fn set_dispute(e: &Env, dispute: &Dispute) {
    save(e, &StorageKey::Dispute(dispute.id), dispute);
}

pub fn get_agreement_disputes(e: &Env, agreement_id: u64) -> Vec<u64> {
    load_ids(e, &StorageKey::AgreementDisputes(agreement_id))
}

pub fn add_agreement_dispute(e: &Env, agreement_id: u64, dispute_id: u64) {
    push_id(e, &StorageKey::AgreementDisputes(agreement_id), dispute_id);
}
