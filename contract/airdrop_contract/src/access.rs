use soroban_sdk::{log, Address, Env};

use crate::error::Error;
use crate::storage::{self, PersistentKey, Role};

pub fn has_role(env: &Env, role: Role, account: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&PersistentKey::Role(role, account.clone()))
}

/// Caller must authenticate and be the owner.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if *caller != storage::get_admin(env)? {
        log!(env, "caller is not the owner", caller.clone());
        return Err(Error::Unauthorized);
    }
    Ok(())
}

/// Caller must authenticate and be the owner or hold `role`.
pub fn require_privileged(env: &Env, caller: &Address, role: Role) -> Result<(), Error> {
    caller.require_auth();
    if *caller == storage::get_admin(env)? || has_role(env, role, caller) {
        return Ok(());
    }
    log!(env, "caller lacks role", caller.clone(), role);
    Err(Error::Unauthorized)
}

pub fn set_role(env: &Env, role: Role, account: &Address, granted: bool) {
    let key = PersistentKey::Role(role, account.clone());
    if granted {
        env.storage().persistent().set(&key, &true);
        storage::extend_persistent(env, &key);
    } else {
        env.storage().persistent().remove(&key);
    }
}
