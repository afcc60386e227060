#![no_std]

mod access;
mod error;
mod events;
mod storage;


use soroban_sdk::{contract, contractimpl, log, token, Address, Env};

pub use crate::error::Error;
pub use crate::storage::{Role, Settlement, VestingSchedule};

use crate::storage::DataKey;

#[contract]
pub struct VestingContract;

#[contractimpl]
impl VestingContract {
    /// Initialize the registry with its owner and the vested token
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Token, &token);
        env.storage().instance().set(&DataKey::TotalAllocated, &0i128);
        storage::extend_instance(&env);
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

    /// Create a vesting schedule backed by the registry's unallocated balance
    pub fn create_vesting_schedule(
        env: Env,
        caller: Address,
        beneficiary: Address,
        total_amount: i128,
        start_time: u64,
        cliff_duration: u64,
        vesting_duration: u64,
        revocable: bool,
    ) -> Result<(), Error> {
        access::require_privileged(&env, &caller, Role::VestingManager)?;

        if beneficiary == env.current_contract_address() {
            return Err(Error::InvalidBeneficiary);
        }
        if total_amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        if vesting_duration == 0 {
            return Err(Error::InvalidDuration);
        }
        if let Some(existing) = storage::load_schedule(&env, &beneficiary) {
            if existing.is_live() {
                return Err(Error::ScheduleExists);
            }
        }

        let unallocated = token_balance(&env)? - storage::total_allocated(&env);
        if total_amount > unallocated {
            log!(&env, "schedule exceeds unallocated balance", total_amount, unallocated);
            return Err(Error::InsufficientBalance);
        }

        let schedule = VestingSchedule {
            beneficiary: beneficiary.clone(),
            total_amount,
            start_time,
            cliff_duration,
            vesting_duration,
            released_amount: 0,
            revocable,
            revoked: false,
            revoked_at: None,
        };
        storage::save_schedule(&env, &schedule);
        storage::adjust_allocated(&env, total_amount)?;

        events::emit_schedule_created(
            &env,
            events::ScheduleCreatedEvent {
                beneficiary,
                total_amount,
                start_time,
                cliff_duration,
                vesting_duration,
                revocable,
            },
        );

        Ok(())
    }

    /// Release everything vested so far to the beneficiary
    pub fn release(env: Env, beneficiary: Address) -> Result<i128, Error> {
        beneficiary.require_auth();

        let mut schedule =
            storage::load_schedule(&env, &beneficiary).ok_or(Error::ScheduleNotFound)?;
        let releasable = schedule.releasable_amount(env.ledger().timestamp());
        if releasable == 0 {
            return Err(Error::NothingToRelease);
        }

        schedule.released_amount = schedule
            .released_amount
            .checked_add(releasable)
            .ok_or(Error::ArithmeticOverflow)?;
        storage::save_schedule(&env, &schedule);
        storage::adjust_allocated(&env, -releasable)?;

        transfer_out(&env, &beneficiary, releasable)?;

        events::emit_tokens_released(
            &env,
            events::TokensReleasedEvent {
                beneficiary,
                amount: releasable,
            },
        );

        Ok(releasable)
    }

    /// Revoke a schedule: settle what has vested, return the rest to the owner
    pub fn revoke(env: Env, caller: Address, beneficiary: Address) -> Result<Settlement, Error> {
        access::require_privileged(&env, &caller, Role::VestingManager)?;

        let mut schedule =
            storage::load_schedule(&env, &beneficiary).ok_or(Error::ScheduleNotFound)?;
        if !schedule.revocable {
            return Err(Error::NotRevocable);
        }
        if schedule.revoked {
            return Err(Error::AlreadyRevoked);
        }
        if !schedule.is_live() {
            return Err(Error::ScheduleCompleted);
        }

        let now = env.ledger().timestamp();
        let released = schedule.releasable_amount(now);
        let outstanding = schedule.outstanding();
        let returned = outstanding - released;

        schedule.released_amount += released;
        schedule.revoked = true;
        schedule.revoked_at = Some(now);
        storage::save_schedule(&env, &schedule);
        storage::adjust_allocated(&env, -outstanding)?;

        if released > 0 {
            transfer_out(&env, &beneficiary, released)?;
        }
        if returned > 0 {
            let owner = storage::get_admin(&env)?;
            transfer_out(&env, &owner, returned)?;
        }

        log!(&env, "vesting revoked", beneficiary.clone(), released, returned);
        events::emit_vesting_revoked(
            &env,
            events::VestingRevokedEvent {
                beneficiary,
                released,
                returned,
            },
        );

        Ok(Settlement { released, returned })
    }

    /// Move untracked balance to the owner. Allocated amounts stay put.
    pub fn emergency_withdraw(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        access::require_privileged(&env, &caller, Role::VestingManager)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        let excess = token_balance(&env)? - storage::total_allocated(&env);
        if amount > excess {
            return Err(Error::InsufficientBalance);
        }

        let owner = storage::get_admin(&env)?;
        transfer_out(&env, &owner, amount)?;

        events::emit_emergency_withdraw(
            &env,
            events::EmergencyWithdrawEvent {
                recipient: owner,
                amount,
            },
        );

        Ok(())
    }

    // View functions

    pub fn get_schedule(env: Env, beneficiary: Address) -> Option<VestingSchedule> {
        storage::load_schedule(&env, &beneficiary)
    }

    pub fn vested_amount(env: Env, beneficiary: Address) -> i128 {
        storage::load_schedule(&env, &beneficiary)
            .map(|s| s.vested_amount(env.ledger().timestamp()))
            .unwrap_or(0)
    }

    pub fn releasable_amount(env: Env, beneficiary: Address) -> i128 {
        storage::load_schedule(&env, &beneficiary)
            .map(|s| s.releasable_amount(env.ledger().timestamp()))
            .unwrap_or(0)
    }

    pub fn total_allocated(env: Env) -> i128 {
        storage::total_allocated(&env)
    }

    pub fn admin(env: Env) -> Result<Address, Error> {
        storage::get_admin(&env)
    }

    pub fn token(env: Env) -> Result<Address, Error> {
        storage::get_token(&env)
    }

    pub fn has_role(env: Env, role: Role, account: Address) -> bool {
        access::has_role(&env, role, &account)
    }
}

fn token_balance(env: &Env) -> Result<i128, Error> {
    let token_address = storage::get_token(env)?;
    Ok(token::Client::new(env, &token_address).balance(&env.current_contract_address()))
}

fn transfer_out(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    let token_address = storage::get_token(env)?;
    let token_client = token::Client::new(env, &token_address);
    token_client.transfer(&env.current_contract_address(), to, &amount);
    Ok(())
}
