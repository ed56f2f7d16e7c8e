use soroban_sdk::{contracttype, Address, String};

/// Storage keys for the rental escrow contract.
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// Initialization flag
    Initialized,
    /// Admin, token and pause flag
    Config,
    /// Platform fee percentage and retained fees
    FeeAccount,
    /// Set while a guarded operation is executing
    ReentrancyLock,
    /// Property data by ID
    Property(u64),
    /// Agreement data by ID
    Agreement(u64),
    /// Dispute data by ID
    Dispute(u64),
    /// Property IDs by owner address
    OwnerProperties(Address),
    /// Agreement IDs by tenant address
    TenantAgreements(Address),
    /// Agreement IDs by landlord address
    LandlordAgreements(Address),
    /// Dispute IDs by agreement
    AgreementDisputes(u64),
    PropertyCounter,
    AgreementCounter,
    DisputeCounter,
    /// Sum of `escrow_balance` over all agreements
    EscrowedFunds,
}

/// Billing period of a lease
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RentUnit {
    Monthly = 0,
    Daily = 1,
}

impl RentUnit {
    /// Minimum seconds between two accepted rent payments.
    pub fn min_payment_interval(&self) -> u64 {
        match self {
            RentUnit::Monthly => MONTHLY_PAYMENT_INTERVAL,
            RentUnit::Daily => DAY_IN_SECONDS,
        }
    }
}

/// Lifecycle of a rental agreement
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AgreementStatus {
    /// Reserved and fully escrowed, waiting for the tenant to activate
    PendingReservation = 0,
    /// First period settled, rent due every period
    Active = 1,
    /// Ran to its end date, or a dispute was resolved
    Completed = 2,
    /// Ended early by either party
    Terminated = 3,
    /// Frozen pending administrator resolution
    Disputed = 4,
}

impl AgreementStatus {
    /// Whether an agreement in this status still holds its property.
    pub fn holds_property(&self) -> bool {
        matches!(
            self,
            AgreementStatus::PendingReservation | AgreementStatus::Active | AgreementStatus::Disputed
        )
    }
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum DisputeStatus {
    Open = 0,
    Resolved = 1,
    /// Declared for indexers; no transition produces it.
    Rejected = 2,
}

/// A listed property
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Property {
    /// Unique property identifier, never reused
    pub id: u64,
    /// Landlord address
    pub owner: Address,
    pub location: String,
    pub description: String,
    /// Rent per period in the token's smallest unit
    pub rent_base_amount: i128,
    pub rent_unit: RentUnit,
    pub security_deposit: i128,
    /// False while an agreement holds the property
    pub is_available: bool,
    /// False once delisted, permanently
    pub is_active: bool,
    pub created_at: u64,
    pub updated_at: u64,
}

/// A lease between a tenant and a landlord.
///
/// Rent terms are a snapshot of the property at reservation time.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RentalAgreement {
    pub id: u64,
    pub property_id: u64,
    pub tenant: Address,
    pub landlord: Address,
    pub rent_amount: i128,
    pub rent_unit: RentUnit,
    pub security_deposit: i128,
    pub start_date: u64,
    pub end_date: u64,
    /// Zero until the first rent is settled
    pub last_payment_date: u64,
    pub status: AgreementStatus,
    /// Cumulative tenant payments, never decreases
    pub total_paid: i128,
    /// Funds the contract holds on behalf of this agreement
    pub escrow_balance: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Dispute {
    pub id: u64,
    pub agreement_id: u64,
    pub initiator: Address,
    pub reason: String,
    pub status: DisputeStatus,
    pub created_at: u64,
    /// Agreement status when the dispute was raised
    pub prior_status: AgreementStatus,
    pub resolved_at: Option<u64>,
    pub favor_landlord: Option<bool>,
}

/// Platform fee accounting
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeAccount {
    /// Whole percent, 0 to 10 inclusive
    pub platform_fee_percentage: u32,
    /// Retained fees awaiting withdrawal
    pub accumulated_platform_fees: i128,
}

/// Contract configuration
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LeaseConfig {
    /// Platform administrator and dispute arbiter
    pub admin: Address,
    /// Token contract used for every payment
    pub token: Address,
    /// Blocks new listings and reservations
    pub is_paused: bool,
    pub updated_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LeaseStats {
    pub total_properties: u64,
    pub total_agreements: u64,
    pub total_disputes: u64,
    pub accumulated_platform_fees: i128,
    pub escrowed_funds: i128,
}

/// Highest platform fee, in whole percent
pub const MAX_FEE_PERCENTAGE: u32 = 10;

pub const DAY_IN_SECONDS: u64 = 86_400;

/// A billing month is fixed at 30 days
pub const MONTH_IN_SECONDS: u64 = 30 * DAY_IN_SECONDS;

/// Monthly rent may be paid up to five days early
pub const MONTHLY_PAYMENT_INTERVAL: u64 = 25 * DAY_IN_SECONDS;

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending instance storage
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold for persistent storage
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;
