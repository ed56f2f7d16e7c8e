use soroban_sdk::{Address, Env, String, Vec};

use crate::access;
use crate::errors::Error;
use crate::events::{PropertyDelistedEventData, PropertyListedEventData, PropertyUpdatedEventData};
use crate::storage;
use crate::types::{Property, RentUnit};

fn validate_terms(rent_base_amount: i128, security_deposit: i128) -> Result<(), Error> {
    if rent_base_amount <= 0 || security_deposit < 0 {
        return Err(Error::InvalidTerms);
    }
    Ok(())
}

pub fn load(e: &Env, property_id: u64) -> Result<Property, Error> {
    storage::get_property(e, property_id).ok_or(Error::PropertyNotFound)
}

/// List a new property and return its ID.
pub fn list(
    e: &Env,
    owner: Address,
    location: String,
    description: String,
    rent_base_amount: i128,
    security_deposit: i128,
    rent_unit: RentUnit,
) -> Result<u64, Error> {
    owner.require_auth();

    let config = access::require_initialized(e)?;
    access::require_not_paused(&config)?;
    validate_terms(rent_base_amount, security_deposit)?;

    let now = e.ledger().timestamp();
    let property_id = storage::next_property_id(e);

    let property = Property {
        id: property_id,
        owner: owner.clone(),
        location,
        description,
        rent_base_amount,
        rent_unit,
        security_deposit,
        is_available: true,
        is_active: true,
        created_at: now,
        updated_at: now,
    };

    storage::set_property(e, &property);
    storage::add_owner_property(e, &owner, property_id);

    PropertyListedEventData {
        owner,
        property_id,
        rent_base_amount,
        rent_unit,
        security_deposit,
        timestamp: now,
    }
    .publish(e);

    Ok(property_id)
}

/// Overwrite the listing terms. Existing agreements keep their snapshot.
pub fn update(
    e: &Env,
    owner: Address,
    property_id: u64,
    location: String,
    description: String,
    rent_base_amount: i128,
    security_deposit: i128,
    rent_unit: RentUnit,
) -> Result<(), Error> {
    owner.require_auth();
    access::require_initialized(e)?;

    let mut property = load(e, property_id)?;
    if owner != property.owner {
        return Err(Error::NotOwner);
    }
    if !property.is_active {
        return Err(Error::Inactive);
    }
    validate_terms(rent_base_amount, security_deposit)?;

    let now = e.ledger().timestamp();
    property.location = location;
    property.description = description;
    property.rent_base_amount = rent_base_amount;
    property.security_deposit = security_deposit;
    property.rent_unit = rent_unit;
    property.updated_at = now;
    storage::set_property(e, &property);

    PropertyUpdatedEventData {
        owner,
        property_id,
        rent_base_amount,
        rent_unit,
        security_deposit,
        timestamp: now,
    }
    .publish(e);

    Ok(())
}

/// Permanently withdraw a property from the market.
pub fn delist(e: &Env, owner: Address, property_id: u64) -> Result<(), Error> {
    owner.require_auth();
    access::require_initialized(e)?;

    let mut property = load(e, property_id)?;
    if owner != property.owner {
        return Err(Error::NotOwner);
    }
    if !property.is_active {
        return Err(Error::Inactive);
    }

    let now = e.ledger().timestamp();
    property.is_active = false;
    property.is_available = false;
    property.updated_at = now;
    storage::set_property(e, &property);

    PropertyDelistedEventData {
        owner,
        property_id,
        timestamp: now,
    }
    .publish(e);

    Ok(())
}

/// Mark the property as held by an agreement.
pub fn occupy(e: &Env, property: &mut Property) {
    property.is_available = false;
    property.updated_at = e.ledger().timestamp();
    storage::set_property(e, property);
}

/// Free the property after its agreement left a holding status.
///
/// Delisted properties stay unavailable.
pub fn release(e: &Env, property_id: u64) -> Result<(), Error> {
    let mut property = load(e, property_id)?;
    if !property.is_active {
        return Ok(());
    }
    property.is_available = true;
    property.updated_at = e.ledger().timestamp();
    storage::set_property(e, &property);
    Ok(())
}

/// IDs of active, unoccupied properties in ascending order.
///
/// Scans every property ever listed.
pub fn list_available(e: &Env) -> Vec<u64> {
    let mut ids = Vec::new(e);
    for property_id in 1..=storage::get_property_count(e) {
        if let Some(property) = storage::get_property(e, property_id) {
            if property.is_available && property.is_active {
                ids.push_back(property_id);
            }
        }
    }
    ids
}
