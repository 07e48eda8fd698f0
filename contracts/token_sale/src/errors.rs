use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SaleError {
    // --- Lifecycle (1–2) ---
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // --- Authorization (3) ---
    Unauthorized = 3,

    // --- Input validation (4–6) ---
    InvalidAmount = 4,
    InvalidWindow = 5,
    InvalidRate = 6,

    // --- Sale window (7–9) ---
    NotYetOpen = 7,
    AlreadyClosed = 8,
    NotYetClosed = 9,

    // --- Supply and settlement (10–12) ---
    SupplyExhausted = 10,
    AlreadyFinalized = 11,
    NothingToRefund = 12,

    // --- Configuration (13) ---
    SameAsset = 13,
}
