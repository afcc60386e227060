use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    // Campaign configuration
    InvalidRoot = 4,
    InvalidAmount = 5,
    InvalidTimeRange = 6,
    CampaignNotFound = 7,
    // Campaign window
    CampaignNotStarted = 8,
    CampaignEnded = 9,
    CampaignPaused = 10,
    CampaignNotPaused = 11,
    CampaignNotEnded = 12,
    // Claims
    AlreadyClaimed = 13,
    InvalidProof = 14,
    InsufficientCampaignBalance = 15,
    NoVestingGrant = 16,
    NothingToRelease = 17,
    AlreadyFinalized = 18,
    ArithmeticOverflow = 19,
}
