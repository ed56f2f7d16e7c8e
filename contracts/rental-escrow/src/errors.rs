use soroban_sdk::contracterror;

/// Error codes for the rental escrow contract.
///
/// Codes are grouped by cause and never renumbered; integrators branch on them.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // Lifecycle
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// New listings and reservations are paused
    ContractPaused = 3,
    /// A guarded operation is already in flight
    ReentrancyDetected = 4,

    // Lookup
    PropertyNotFound = 10,
    AgreementNotFound = 11,
    DisputeNotFound = 12,

    // Authorization
    /// Caller is not the property owner
    NotOwner = 20,
    /// Caller is not the agreement tenant
    NotTenant = 21,
    /// Caller is neither tenant nor landlord of the agreement
    NotParty = 22,
    /// Caller is not the platform administrator
    NotAdministrator = 23,
    /// A landlord may not rent their own property
    LandlordCannotReserve = 24,

    // State machine
    /// Agreement is not in a status that allows the operation
    WrongState = 30,
    /// Property has been delisted
    Inactive = 31,
    /// Dispute is no longer open
    NotOpen = 32,
    /// Property is held by another agreement
    PropertyUnavailable = 33,

    // Validation
    /// Rent must be positive and the deposit non-negative
    InvalidTerms = 40,
    /// Reservation payment differs from first period rent plus deposit
    PaymentMismatch = 41,
    /// Rent payment differs from the agreed rent amount
    IncorrectAmount = 42,
    /// Only one period may be paid per call
    UnsupportedPeriodCount = 43,
    /// Lease duration must be at least one day
    InvalidDuration = 44,
    /// Amount arithmetic overflowed
    AmountOverflow = 45,

    // Timing
    /// Minimum interval since the last payment has not elapsed
    TooSoon = 50,
    /// Lease end date has passed
    Expired = 51,
    /// Lease end date has not been reached
    NotExpired = 52,

    // Administration
    /// Platform fee above the 10 percent cap
    FeeTooHigh = 60,
    /// No accumulated platform fees
    NothingToWithdraw = 61,
}
