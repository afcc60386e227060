use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    InvalidAmount = 4,
    InvalidDuration = 5,
    InvalidBeneficiary = 6,
    ScheduleExists = 7,
    ScheduleNotFound = 8,
    NothingToRelease = 9,
    NotRevocable = 10,
    AlreadyRevoked = 11,
    InsufficientBalance = 12,
    ArithmeticOverflow = 13,
    ScheduleCompleted = 14,
}
