use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::storage::Role;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScheduleCreatedEvent {
    pub beneficiary: Address,
    pub total_amount: i128,
    pub start_time: u64,
    pub cliff_duration: u64,
    pub vesting_duration: u64,
    pub revocable: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokensReleasedEvent {
    pub beneficiary: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VestingRevokedEvent {
    pub beneficiary: Address,
    pub released: i128,
    pub returned: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmergencyWithdrawEvent {
    pub recipient: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleChangedEvent {
    pub role: Role,
    pub account: Address,
}

pub fn emit_schedule_created(env: &Env, event: ScheduleCreatedEvent) {
    env.events()
        .publish((Symbol::new(env, "schedule_created"),), event);
}

pub fn emit_tokens_released(env: &Env, event: TokensReleasedEvent) {
    env.events()
        .publish((Symbol::new(env, "tokens_released"),), event);
}

pub fn emit_vesting_revoked(env: &Env, event: VestingRevokedEvent) {
    env.events()
        .publish((Symbol::new(env, "vesting_revoked"),), event);
}

pub fn emit_emergency_withdraw(env: &Env, event: EmergencyWithdrawEvent) {
    env.events()
        .publish((Symbol::new(env, "emergency_withdraw"),), event);
}

pub fn emit_role_granted(env: &Env, event: RoleChangedEvent) {
    env.events().publish((Symbol::new(env, "role_granted"),), event);
}

pub fn emit_role_revoked(env: &Env, event: RoleChangedEvent) {
    env.events().publish((Symbol::new(env, "role_revoked"),), event);
}
