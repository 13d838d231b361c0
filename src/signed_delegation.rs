multiversx_sc::imports!();

use crate::errors::{ERR_EXPIRED, ERR_INVALID_NONCE, ERR_INVALID_SIGNATURE, ERR_NONCE_OVERFLOW};
use crate::{DELEGATION_TYPE, DOMAIN_TYPE, TOKEN_NAME};

const ED25519_SIGNATURE_LEN: usize = 64;

/// Prefix of the signed digest, kept from typed-data signing.
const DIGEST_PREFIX: &[u8] = b"\x19\x01";

// ============================================================
// Signed delegation
//
// Addresses are Ed25519 public keys, so the claimed signer is
// authenticated by verifying the signature against its own
// address. A verified payload runs the same delegation
// transition as a direct `delegate` call.
// ============================================================

#[multiversx_sc::module]
pub trait SignedDelegationModule: crate::storage::StorageModule + crate::votes::VotesModule {
    #[endpoint(delegateBySig)]
    fn delegate_by_sig(
        &self,
        signer: ManagedAddress,
        delegatee: ManagedAddress,
        nonce: u64,
        expiry: u64,
        signature: ManagedBuffer,
    ) {
        require!(
            !signer.is_zero() && signature.len() == ED25519_SIGNATURE_LEN,
            ERR_INVALID_SIGNATURE
        );
        let digest = self.get_delegation_digest(&delegatee, nonce, expiry);
        self.crypto()
            .verify_ed25519(signer.as_managed_buffer(), digest.as_managed_buffer(), &signature);

        require!(
            self.blockchain().get_block_timestamp() <= expiry,
            ERR_EXPIRED
        );

        let expected_nonce = self.signature_nonce(&signer).get();
        require!(nonce == expected_nonce, ERR_INVALID_NONCE);
        let next_nonce = expected_nonce
            .checked_add(1)
            .unwrap_or_else(|| sc_panic!(ERR_NONCE_OVERFLOW));
        self.signature_nonce(&signer).set(next_nonce);

        self.delegate_internal(&signer, delegatee);
    }

    // ========================================================
    // INTERNAL: message construction
    // ========================================================

    fn domain_separator(&self) -> ManagedByteArray<Self::Api, 32> {
        let mut encoded = ManagedBuffer::new();
        encoded.append(self.hash_bytes(DOMAIN_TYPE).as_managed_buffer());
        encoded.append(self.hash_bytes(TOKEN_NAME).as_managed_buffer());
        encoded.append(self.blockchain().get_sc_address().as_managed_buffer());
        self.crypto().sha256(&encoded)
    }

    fn hash_bytes(&self, bytes: &[u8]) -> ManagedByteArray<Self::Api, 32> {
        self.crypto().sha256(&ManagedBuffer::new_from_bytes(bytes))
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// The 32 bytes a signer must sign for `delegateBySig`.
    #[view(getDelegationDigest)]
    fn get_delegation_digest(
        &self,
        delegatee: &ManagedAddress,
        nonce: u64,
        expiry: u64,
    ) -> ManagedByteArray<Self::Api, 32> {
        let mut struct_encoded = ManagedBuffer::new();
        struct_encoded.append(self.hash_bytes(DELEGATION_TYPE).as_managed_buffer());
        struct_encoded.append(delegatee.as_managed_buffer());
        struct_encoded.append_bytes(&nonce.to_be_bytes());
        struct_encoded.append_bytes(&expiry.to_be_bytes());
        let struct_hash = self.crypto().sha256(&struct_encoded);

        let mut digest_input = ManagedBuffer::new_from_bytes(DIGEST_PREFIX);
        digest_input.append(self.domain_separator().as_managed_buffer());
        digest_input.append(struct_hash.as_managed_buffer());
        self.crypto().sha256(&digest_input)
    }

    #[view(nonces)]
    fn nonces(&self, account: &ManagedAddress) -> u64 {
        self.signature_nonce(account).get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("signatureNonce")]
    fn signature_nonce(&self, account: &ManagedAddress) -> SingleValueMapper<u64>;
}
