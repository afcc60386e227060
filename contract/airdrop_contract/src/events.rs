use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::storage::Role;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreatedEvent {
    pub campaign_id: u32,
    pub total_amount: i128,
    pub start_time: u64,
    pub end_time: u64,
    pub vesting_duration: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokensClaimedEvent {
    pub campaign_id: u32,
    pub claimant: Address,
    pub amount: i128,
    pub vested: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VestedReleasedEvent {
    pub campaign_id: u32,
    pub claimant: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignFinalizedEvent {
    pub campaign_id: u32,
    pub treasury: Address,
    pub remainder: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleChangedEvent {
    pub role: Role,
    pub account: Address,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_created"),), event);
}

pub fn emit_tokens_claimed(env: &Env, event: TokensClaimedEvent) {
    env.events()
        .publish((Symbol::new(env, "tokens_claimed"),), event);
}

pub fn emit_vested_released(env: &Env, event: VestedReleasedEvent) {
    env.events()
        .publish((Symbol::new(env, "vested_released"),), event);
}

pub fn emit_campaign_paused(env: &Env, campaign_id: u32) {
    env.events()
        .publish((Symbol::new(env, "campaign_paused"),), campaign_id);
}

pub fn emit_campaign_unpaused(env: &Env, campaign_id: u32) {
    env.events()
        .publish((Symbol::new(env, "campaign_unpaused"),), campaign_id);
}

pub fn emit_campaign_finalized(env: &Env, event: CampaignFinalizedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_finalized"),), event);
}

pub fn emit_role_granted(env: &Env, event: RoleChangedEvent) {
    env.events().publish((Symbol::new(env, "role_granted"),), event);
}

pub fn emit_role_revoked(env: &Env, event: RoleChangedEvent) {
    env.events().publish((Symbol::new(env, "role_revoked"),), event);
}

pub fn emit_treasury_updated(env: &Env, treasury: Address) {
    env.events()
        .publish((Symbol::new(env, "treasury_updated"),), treasury);
}
