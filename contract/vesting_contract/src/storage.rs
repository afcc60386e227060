use release_schedule::{accrual_time, LinearSchedule};
use soroban_sdk::{contracttype, Address, Env};

use crate::error::Error;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Token,
    TotalAllocated,
}

#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Schedule(Address),
    Role(Role, Address),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Role {
    VestingManager = 0,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VestingSchedule {
    pub beneficiary: Address,
    pub total_amount: i128,
    pub start_time: u64,
    pub cliff_duration: u64,
    pub vesting_duration: u64,
    pub released_amount: i128,
    pub revocable: bool,
    pub revoked: bool,
    pub revoked_at: Option<u64>,
}

impl VestingSchedule {
    fn curve(&self) -> LinearSchedule {
        LinearSchedule::new(
            self.total_amount,
            self.start_time,
            self.cliff_duration,
            self.vesting_duration,
        )
    }

    /// Vested at `now`, frozen at the revocation time once revoked.
    pub fn vested_amount(&self, now: u64) -> i128 {
        self.curve()
            .vested_amount(accrual_time(now, self.revoked_at))
    }

    pub fn releasable_amount(&self, now: u64) -> i128 {
        self.curve()
            .releasable_amount(self.released_amount, accrual_time(now, self.revoked_at))
    }

    /// Still owed to the beneficiary, either vested or not.
    pub fn outstanding(&self) -> i128 {
        if self.revoked {
            0
        } else {
            self.total_amount - self.released_amount
        }
    }

    pub fn is_live(&self) -> bool {
        self.outstanding() > 0
    }
}

/// Outcome of a revocation: what went to the beneficiary and what came back.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Settlement {
    pub released: i128,
    pub returned: i128,
}

pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days

pub fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn get_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn get_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(Error::NotInitialized)
}

pub fn total_allocated(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalAllocated)
        .unwrap_or(0)
}

/// Shift the allocated total by `delta`, keeping it non-negative.
pub fn adjust_allocated(env: &Env, delta: i128) -> Result<(), Error> {
    let updated = total_allocated(env)
        .checked_add(delta)
        .filter(|total| *total >= 0)
        .ok_or(Error::ArithmeticOverflow)?;
    env.storage()
        .instance()
        .set(&DataKey::TotalAllocated, &updated);
    extend_instance(env);
    Ok(())
}

pub fn load_schedule(env: &Env, beneficiary: &Address) -> Option<VestingSchedule> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Schedule(beneficiary.clone()))
}

pub fn save_schedule(env: &Env, schedule: &VestingSchedule) {
    let key = PersistentKey::Schedule(schedule.beneficiary.clone());
    env.storage().persistent().set(&key, schedule);
    extend_persistent(env, &key);
}
