#![no_std]
use release_schedule::LinearSchedule;
use soroban_sdk::{contract, contractimpl, log, token, Address, BytesN, Env, Vec};

mod access;
mod error;
mod events;
mod merkle;
mod storage;


pub use crate::error::Error;
pub use crate::merkle::{oracle_for, Keccak256Oracle, MembershipOracle, Sha256Oracle};
pub use crate::storage::{Campaign, CampaignStatus, ClaimRecord, HashScheme, Role, VestingGrant};

use crate::storage::DataKey;

#[contract]
pub struct AirdropContract;

#[contractimpl]
impl AirdropContract {
    /// Set the owner and the distributed token. The owner is also the
    /// treasury that receives finalized remainders until `set_treasury`.
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Token, &token);
        env.storage().instance().set(&DataKey::Treasury, &admin);
        env.storage().instance().set(&DataKey::CampaignCount, &0u32);
        storage::extend_instance(&env);
        Ok(())
    }

    pub fn set_treasury(env: Env, caller: Address, treasury: Address) -> Result<(), Error> {
        access::require_admin(&env, &caller)?;
        env.storage().instance().set(&DataKey::Treasury, &treasury);
        storage::extend_instance(&env);
        events::emit_treasury_updated(&env, treasury);
        Ok(())
    }

    pub fn grant_role(
        env: Env,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<(), Error> {
        access::require_admin(&env, &caller)?;
        access::set_role(&env, role, &account, true);
        events::emit_role_granted(&env, events::RoleChangedEvent { role, account });
        Ok(())
    }

    pub fn revoke_role(
        env: Env,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<(), Error> {
        access::require_admin(&env, &caller)?;
        access::set_role(&env, role, &account, false);
        events::emit_role_revoked(&env, events::RoleChangedEvent { role, account });
        Ok(())
    }

    /// Register a campaign over a pre-funded pool. No tokens move here.
    pub fn create_campaign(
        env: Env,
        caller: Address,
        root: BytesN<32>,
        total_amount: i128,
        start_time: u64,
        end_time: u64,
        vesting_duration: u64,
        hash_scheme: HashScheme,
    ) -> Result<u32, Error> {
        access::require_privileged(&env, &caller, Role::CampaignManager)?;

        if merkle::is_zero(&root) {
            return Err(Error::InvalidRoot);
        }
        if total_amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        if end_time <= start_time {
            return Err(Error::InvalidTimeRange);
        }

        let campaign_id = storage::campaign_count(&env);
        let next_id = campaign_id
            .checked_add(1)
            .ok_or(Error::ArithmeticOverflow)?;

        let campaign = Campaign {
            id: campaign_id,
            root,
            hash_scheme,
            total_amount,
            claimed_amount: 0,
            start_time,
            end_time,
            vesting_duration,
            paused: false,
            finalized: false,
        };

        storage::save_campaign(&env, &campaign);
        env.storage().instance().set(&DataKey::CampaignCount, &next_id);
        storage::extend_instance(&env);

        events::emit_campaign_created(
            &env,
            events::CampaignCreatedEvent {
                campaign_id,
                total_amount,
                start_time,
                end_time,
                vesting_duration,
            },
        );

        Ok(campaign_id)
    }

    /// Claim an allocation proven against the campaign root.
    ///
    /// Campaigns without vesting pay out immediately. Otherwise the full
    /// amount is earmarked as a grant released through `release_vested`.
    pub fn claim(
        env: Env,
        campaign_id: u32,
        claimant: Address,
        amount: i128,
        proof: Vec<BytesN<32>>,
    ) -> Result<(), Error> {
        claimant.require_auth();

        let mut campaign = storage::load_campaign(&env, campaign_id)?;
        let now = env.ledger().timestamp();
        check_claimable(&campaign, now)?;

        if storage::has_claim(&env, campaign_id, &claimant) {
            return Err(Error::AlreadyClaimed);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let oracle = merkle::oracle_for(campaign.hash_scheme);
        let leaf = oracle.leaf(&env, &claimant, amount);
        if !oracle.verify(&env, &campaign.root, leaf, &proof) {
            log!(&env, "invalid proof", campaign_id, claimant.clone(), amount);
            return Err(Error::InvalidProof);
        }

        let claimed_amount = campaign
            .claimed_amount
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        if claimed_amount > campaign.total_amount {
            return Err(Error::InsufficientCampaignBalance);
        }
        campaign.claimed_amount = claimed_amount;

        let vested = campaign.vesting_duration > 0;
        let grant = if vested {
            Some(VestingGrant {
                total_amount: amount,
                released_amount: 0,
                start_time: now,
            })
        } else {
            None
        };

        let record = ClaimRecord {
            amount,
            claimed_at: now,
            grant,
        };
        storage::save_claim(&env, campaign_id, &claimant, &record);
        storage::save_campaign(&env, &campaign);
        storage::extend_instance(&env);

        if !vested {
            transfer_out(&env, &claimant, amount)?;
        }

        events::emit_tokens_claimed(
            &env,
            events::TokensClaimedEvent {
                campaign_id,
                claimant,
                amount,
                vested,
            },
        );

        Ok(())
    }

    /// Pay out whatever the claimant's grant has vested so far.
    pub fn release_vested(env: Env, campaign_id: u32, claimant: Address) -> Result<i128, Error> {
        claimant.require_auth();

        let campaign = storage::load_campaign(&env, campaign_id)?;
        let mut record =
            storage::load_claim(&env, campaign_id, &claimant).ok_or(Error::NoVestingGrant)?;
        let mut grant = record.grant.ok_or(Error::NoVestingGrant)?;

        let now = env.ledger().timestamp();
        let releasable =
            grant_schedule(&campaign, &grant).releasable_amount(grant.released_amount, now);
        if releasable == 0 {
            return Err(Error::NothingToRelease);
        }

        grant.released_amount = grant
            .released_amount
            .checked_add(releasable)
            .ok_or(Error::ArithmeticOverflow)?;
        record.grant = Some(grant);
        storage::save_claim(&env, campaign_id, &claimant, &record);
        storage::extend_instance(&env);

        transfer_out(&env, &claimant, releasable)?;

        events::emit_vested_released(
            &env,
            events::VestedReleasedEvent {
                campaign_id,
                claimant,
                amount: releasable,
            },
        );

        Ok(releasable)
    }

    pub fn pause_campaign(env: Env, caller: Address, campaign_id: u32) -> Result<(), Error> {
        access::require_privileged(&env, &caller, Role::CampaignManager)?;

        let mut campaign = storage::load_campaign(&env, campaign_id)?;
        if campaign.finalized {
            return Err(Error::AlreadyFinalized);
        }
        if campaign.paused {
            return Err(Error::CampaignPaused);
        }

        campaign.paused = true;
        storage::save_campaign(&env, &campaign);
        events::emit_campaign_paused(&env, campaign_id);
        Ok(())
    }

    pub fn unpause_campaign(env: Env, caller: Address, campaign_id: u32) -> Result<(), Error> {
        access::require_privileged(&env, &caller, Role::CampaignManager)?;

        let mut campaign = storage::load_campaign(&env, campaign_id)?;
        if campaign.finalized {
            return Err(Error::AlreadyFinalized);
        }
        if !campaign.paused {
            return Err(Error::CampaignNotPaused);
        }

        campaign.paused = false;
        storage::save_campaign(&env, &campaign);
        events::emit_campaign_unpaused(&env, campaign_id);
        Ok(())
    }

    /// Close an ended campaign and sweep the unclaimed remainder to the
    /// treasury. Earmarked grants stay in the pool for their holders.
    pub fn finalize_campaign(env: Env, caller: Address, campaign_id: u32) -> Result<i128, Error> {
        access::require_privileged(&env, &caller, Role::CampaignManager)?;

        let mut campaign = storage::load_campaign(&env, campaign_id)?;
        if env.ledger().timestamp() < campaign.end_time {
            return Err(Error::CampaignNotEnded);
        }
        if campaign.finalized {
            return Err(Error::AlreadyFinalized);
        }

        let remainder = campaign.unclaimed();
        campaign.finalized = true;
        storage::save_campaign(&env, &campaign);

        let treasury = storage::get_treasury(&env)?;
        if remainder > 0 {
            transfer_out(&env, &treasury, remainder)?;
        }

        log!(&env, "campaign finalized", campaign_id, remainder);
        events::emit_campaign_finalized(
            &env,
            events::CampaignFinalizedEvent {
                campaign_id,
                treasury,
                remainder,
            },
        );

        Ok(remainder)
    }

    // View functions

    pub fn get_campaign(env: Env, campaign_id: u32) -> Result<Campaign, Error> {
        storage::load_campaign(&env, campaign_id)
    }

    pub fn campaign_count(env: Env) -> u32 {
        storage::campaign_count(&env)
    }

    pub fn campaign_status(env: Env, campaign_id: u32) -> Result<CampaignStatus, Error> {
        let campaign = storage::load_campaign(&env, campaign_id)?;
        Ok(campaign.status(env.ledger().timestamp()))
    }

    pub fn has_claimed(env: Env, campaign_id: u32, account: Address) -> bool {
        storage::has_claim(&env, campaign_id, &account)
    }

    pub fn get_claim(env: Env, campaign_id: u32, account: Address) -> Option<ClaimRecord> {
        storage::load_claim(&env, campaign_id, &account)
    }

    /// Check a (account, amount, proof) triple without claiming.
    pub fn verify_eligibility(
        env: Env,
        campaign_id: u32,
        account: Address,
        amount: i128,
        proof: Vec<BytesN<32>>,
    ) -> Result<bool, Error> {
        let campaign = storage::load_campaign(&env, campaign_id)?;
        let oracle = merkle::oracle_for(campaign.hash_scheme);
        let leaf = oracle.leaf(&env, &account, amount);
        Ok(oracle.verify(&env, &campaign.root, leaf, &proof))
    }

    /// Amount vested to `account` so far; immediate claims count as fully vested.
    pub fn vested_amount(env: Env, campaign_id: u32, account: Address) -> Result<i128, Error> {
        let campaign = storage::load_campaign(&env, campaign_id)?;
        let vested = match storage::load_claim(&env, campaign_id, &account) {
            None => 0,
            Some(ClaimRecord { grant: None, amount, .. }) => amount,
            Some(ClaimRecord { grant: Some(grant), .. }) => {
                grant_schedule(&campaign, &grant).vested_amount(env.ledger().timestamp())
            }
        };
        Ok(vested)
    }

    pub fn releasable_amount(env: Env, campaign_id: u32, account: Address) -> Result<i128, Error> {
        let campaign = storage::load_campaign(&env, campaign_id)?;
        let releasable = match storage::load_claim(&env, campaign_id, &account) {
            Some(ClaimRecord { grant: Some(grant), .. }) => grant_schedule(&campaign, &grant)
                .releasable_amount(grant.released_amount, env.ledger().timestamp()),
            _ => 0,
        };
        Ok(releasable)
    }

    pub fn admin(env: Env) -> Result<Address, Error> {
        storage::get_admin(&env)
    }

    pub fn token(env: Env) -> Result<Address, Error> {
        storage::get_token(&env)
    }

    pub fn treasury(env: Env) -> Result<Address, Error> {
        storage::get_treasury(&env)
    }

    pub fn has_role(env: Env, role: Role, account: Address) -> bool {
        access::has_role(&env, role, &account)
    }
}

fn check_claimable(campaign: &Campaign, now: u64) -> Result<(), Error> {
    if now < campaign.start_time {
        return Err(Error::CampaignNotStarted);
    }
    if now >= campaign.end_time {
        return Err(Error::CampaignEnded);
    }
    if campaign.paused {
        return Err(Error::CampaignPaused);
    }
    if campaign.finalized {
        return Err(Error::AlreadyFinalized);
    }
    Ok(())
}

// Grants vest linearly from the claim with no cliff.
fn grant_schedule(campaign: &Campaign, grant: &VestingGrant) -> LinearSchedule {
    LinearSchedule::without_cliff(grant.total_amount, grant.start_time, campaign.vesting_duration)
}

fn transfer_out(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    let token_address = storage::get_token(env)?;
    let token_client = token::Client::new(env, &token_address);
    token_client.transfer(&env.current_contract_address(), to, &amount);
    Ok(())
}
