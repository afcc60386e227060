use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env, Vec};

use crate::storage::HashScheme;

/// Membership check against a sorted-pair Merkle root.
///
/// Implementors only choose the hash function. Leaves are
/// `H(xdr(account) || xdr(amount))` and inner nodes hash the two children in
/// ascending byte order, so proofs carry no left/right flags.
pub trait MembershipOracle {
    fn hash(&self, env: &Env, data: &Bytes) -> BytesN<32>;

    fn leaf(&self, env: &Env, account: &Address, amount: i128) -> BytesN<32> {
        let mut bytes = account.clone().to_xdr(env);
        bytes.append(&amount.to_xdr(env));
        self.hash(env, &bytes)
    }

    fn hash_pair(&self, env: &Env, a: &BytesN<32>, b: &BytesN<32>) -> BytesN<32> {
        let (a, b) = (a.to_array(), b.to_array());
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

        let mut data = [0u8; 64];
        data[..32].copy_from_slice(&lo);
        data[32..].copy_from_slice(&hi);
        self.hash(env, &Bytes::from_array(env, &data))
    }

    fn verify(
        &self,
        env: &Env,
        root: &BytesN<32>,
        leaf: BytesN<32>,
        proof: &Vec<BytesN<32>>,
    ) -> bool {
        if is_zero(root) {
            return false;
        }

        let mut computed_hash = leaf;
        for node in proof.iter() {
            computed_hash = self.hash_pair(env, &computed_hash, &node);
        }

        computed_hash == *root
    }
}

pub struct Sha256Oracle;

impl MembershipOracle for Sha256Oracle {
    fn hash(&self, env: &Env, data: &Bytes) -> BytesN<32> {
        env.crypto().sha256(data).to_bytes()
    }
}

pub struct Keccak256Oracle;

impl MembershipOracle for Keccak256Oracle {
    fn hash(&self, env: &Env, data: &Bytes) -> BytesN<32> {
        env.crypto().keccak256(data).to_bytes()
    }
}

pub fn oracle_for(scheme: HashScheme) -> &'static dyn MembershipOracle {
    match scheme {
        HashScheme::Sha256 => &Sha256Oracle,
        HashScheme::Keccak256 => &Keccak256Oracle,
    }
}

pub fn is_zero(root: &BytesN<32>) -> bool {
    root.to_array() == [0u8; 32]
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;

    #[test]
    fn single_leaf_tree_needs_no_proof() {
        let env = Env::default();
        let user = Address::generate(&env);
        let leaf = Sha256Oracle.leaf(&env, &user, 1_000);

        assert!(Sha256Oracle.verify(&env, &leaf, leaf.clone(), &Vec::new(&env)));
    }

    #[test]
    fn pair_hash_is_commutative() {
        let env = Env::default();
        let a = BytesN::from_array(&env, &[1u8; 32]);
        let b = BytesN::from_array(&env, &[2u8; 32]);

        assert_eq!(
            Sha256Oracle.hash_pair(&env, &a, &b),
            Sha256Oracle.hash_pair(&env, &b, &a)
        );
        assert_eq!(
            Keccak256Oracle.hash_pair(&env, &a, &b),
            Keccak256Oracle.hash_pair(&env, &b, &a)
        );
    }

    #[test]
    fn zero_root_never_verifies() {
        let env = Env::default();
        let zero = BytesN::from_array(&env, &[0u8; 32]);

        assert!(!Sha256Oracle.verify(&env, &zero, zero.clone(), &Vec::new(&env)));
    }

    #[test]
    fn leaf_binds_account_and_amount() {
        let env = Env::default();
        let user = Address::generate(&env);
        let other = Address::generate(&env);
        let leaf = Sha256Oracle.leaf(&env, &user, 1_000);

        assert_ne!(leaf, Sha256Oracle.leaf(&env, &user, 1_001));
        assert_ne!(leaf, Sha256Oracle.leaf(&env, &other, 1_000));
        assert_ne!(leaf, Keccak256Oracle.leaf(&env, &user, 1_000));
    }
}
