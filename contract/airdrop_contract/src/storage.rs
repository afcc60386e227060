use soroban_sdk::{contracttype, Address, BytesN, Env};

use crate::error::Error;

// Storage keys for instance data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Token,
    Treasury,
    CampaignCount,
}

// Storage keys for persistent data
#[contracttype]
#[derive(Clone)]
pub enum PersistentKey {
    Campaign(u32),
    Claim(u32, Address), // (CampaignID, Claimant)
    Role(Role, Address),
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    CampaignManager = 0,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HashScheme {
    Sha256 = 0,
    Keccak256 = 1,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CampaignStatus {
    Scheduled = 0,
    Active = 1,
    Paused = 2,
    Ended = 3,
    Finalized = 4,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    pub id: u32,
    pub root: BytesN<32>,
    pub hash_scheme: HashScheme,
    pub total_amount: i128,
    pub claimed_amount: i128,
    pub start_time: u64,
    pub end_time: u64,
    pub vesting_duration: u64, // 0 = paid out at claim time
    pub paused: bool,
    pub finalized: bool,
}

impl Campaign {
    pub fn status(&self, now: u64) -> CampaignStatus {
        if self.finalized {
            CampaignStatus::Finalized
        } else if now >= self.end_time {
            CampaignStatus::Ended
        } else if now < self.start_time {
            CampaignStatus::Scheduled
        } else if self.paused {
            CampaignStatus::Paused
        } else {
            CampaignStatus::Active
        }
    }

    pub fn unclaimed(&self) -> i128 {
        self.total_amount - self.claimed_amount
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VestingGrant {
    pub total_amount: i128,
    pub released_amount: i128,
    pub start_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimRecord {
    pub amount: i128,
    pub claimed_at: u64,
    pub grant: Option<VestingGrant>,
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

pub fn get_treasury(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Treasury)
        .ok_or(Error::NotInitialized)
}

pub fn campaign_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

pub fn load_campaign(env: &Env, campaign_id: u32) -> Result<Campaign, Error> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id))
        .ok_or(Error::CampaignNotFound)
}

pub fn save_campaign(env: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    extend_persistent(env, &key);
}

pub fn load_claim(env: &Env, campaign_id: u32, claimant: &Address) -> Option<ClaimRecord> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Claim(campaign_id, claimant.clone()))
}

pub fn has_claim(env: &Env, campaign_id: u32, claimant: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&PersistentKey::Claim(campaign_id, claimant.clone()))
}

pub fn save_claim(env: &Env, campaign_id: u32, claimant: &Address, record: &ClaimRecord) {
    let key = PersistentKey::Claim(campaign_id, claimant.clone());
    env.storage().persistent().set(&key, record);
    extend_persistent(env, &key);
}
