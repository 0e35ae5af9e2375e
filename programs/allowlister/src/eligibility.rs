use anchor_lang::prelude::*;
use solana_keccak_hasher::hashv;

/// Capability that decides who may register for a raffle.
///
/// `evidence` is whatever the registrant presents alongside the request
/// (a Merkle proof for allowlist gates); gates that need none ignore it.
pub trait RegistrationGate {
    fn authorize(&self, identity: &Pubkey, evidence: &[[u8; 32]]) -> bool;
}

/// Anyone may register.
pub struct OpenRegistration;

impl RegistrationGate for OpenRegistration {
    fn authorize(&self, _identity: &Pubkey, _evidence: &[[u8; 32]]) -> bool {
        true
    }
}

/// Only identities inside a keccak Merkle tree may register.
///
/// The tree is built off-chain by whatever eligibility check applies
/// (follower count, follow age, ...) and only its root is stored.
pub struct MerkleAllowlist {
    pub root: [u8; 32],
}

impl RegistrationGate for MerkleAllowlist {
    fn authorize(&self, identity: &Pubkey, evidence: &[[u8; 32]]) -> bool {
        verify_proof(compute_leaf_hash(identity), evidence, &self.root)
    }
}

/// Gate configuration stored on the raffle at creation
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug)]
pub enum EligibilityRule {
    Open,
    Allowlist { root: [u8; 32] },
}

impl RegistrationGate for EligibilityRule {
    fn authorize(&self, identity: &Pubkey, evidence: &[[u8; 32]]) -> bool {
        match self {
            EligibilityRule::Open => OpenRegistration.authorize(identity, evidence),
            EligibilityRule::Allowlist { root } => {
                MerkleAllowlist { root: *root }.authorize(identity, evidence)
            }
        }
    }
}

/// Compute keccak256 hash of the input
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    hashv(&[data]).0
}

/// Leaf for an allowlisted identity: keccak256(identity)
pub fn compute_leaf_hash(identity: &Pubkey) -> [u8; 32] {
    keccak256(identity.as_ref())
}

/// Compute hash of two sibling nodes.
/// The pair is sorted first so proofs carry no left/right flags.
pub fn hash_pair(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
    if left <= right {
        hashv(&[left, right]).0
    } else {
        hashv(&[right, left]).0
    }
}

/// Returns true if `proof` links `leaf` to `root`
pub fn verify_proof(leaf: [u8; 32], proof: &[[u8; 32]], root: &[u8; 32]) -> bool {
    let mut current = leaf;

    for sibling in proof.iter() {
        current = hash_pair(&current, sibling);
    }

    current == *root
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_pair_ordering() {
        let a = [1u8; 32];
        let b = [2u8; 32];

        assert_eq!(hash_pair(&a, &b), hash_pair(&b, &a));
    }

    #[test]
    fn test_open_accepts_anyone() {
        let gate = EligibilityRule::Open;
        assert!(gate.authorize(&Pubkey::new_unique(), &[]));
    }

    #[test]
    fn test_allowlist_membership() {
        let members: Vec<Pubkey> = (0..4).map(|_| Pubkey::new_unique()).collect();
        let leaves: Vec<[u8; 32]> = members.iter().map(compute_leaf_hash).collect();

        // four leaves, two levels
        let left = hash_pair(&leaves[0], &leaves[1]);
        let right = hash_pair(&leaves[2], &leaves[3]);
        let root = hash_pair(&left, &right);
        let gate = EligibilityRule::Allowlist { root };

        assert!(gate.authorize(&members[0], &[leaves[1], right]));
        assert!(gate.authorize(&members[3], &[leaves[2], left]));

        // wrong proof for a real member
        assert!(!gate.authorize(&members[0], &[leaves[2], right]));
        // outsider replaying a member's proof
        assert!(!gate.authorize(&Pubkey::new_unique(), &[leaves[1], right]));
        // missing proof
        assert!(!gate.authorize(&members[2], &[]));
    }

    #[test]
    fn test_single_member_tree() {
        let member = Pubkey::new_unique();
        let gate = MerkleAllowlist {
            root: compute_leaf_hash(&member),
        };
        assert!(gate.authorize(&member, &[]));
    }
}
