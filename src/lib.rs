#![no_std]

multiversx_sc::imports!();

pub mod access_control;
pub mod allowlist;
pub mod blink_galaxy_proxy;
pub mod emergency;
pub mod errors;
pub mod ledger;
pub mod signed_delegation;
pub mod storage;
pub mod types;
pub mod votes;

use errors::ERR_INVALID_RECIPIENT;
use types::Role;

// ============================================================
// Constants
// ============================================================

pub const TOKEN_NAME: &[u8] = b"Blink Galaxy";
pub const TOKEN_TICKER: &[u8] = b"BG";
pub const TOKEN_DECIMALS: u32 = 18;

/// Supply cap in whole tokens: 10 billion BG
const CAP_WHOLE_TOKENS: u64 = 10_000_000_000;

/// Type strings hashed into the signed-delegation digest
pub const DOMAIN_TYPE: &[u8] = b"Domain(string name,address verifyingContract)";
pub const DELEGATION_TYPE: &[u8] = b"Delegation(address delegatee,uint64 nonce,uint64 expiry)";

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait BlinkGalaxy:
    storage::StorageModule
    + access_control::AccessControlModule
    + allowlist::AllowlistModule
    + votes::VotesModule
    + ledger::LedgerModule
    + signed_delegation::SignedDelegationModule
    + emergency::EmergencyModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// `admin` receives every role; supply starts at zero and the
    /// allow-list starts disabled.
    #[init]
    fn init(&self, admin: ManagedAddress) {
        require!(!admin.is_zero(), ERR_INVALID_RECIPIENT);

        let deployer = self.blockchain().get_caller();
        for role in Role::ALL {
            self.grant_role_internal(role, &admin, &deployer);
        }

        let one_token = BigUint::from(10u64).pow(TOKEN_DECIMALS);
        self.cap().set(BigUint::from(CAP_WHOLE_TOKENS) * one_token);
        self.total_supply().set(BigUint::zero());
        self.allowlist_enabled().set(false);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // VIEWS: token metadata
    // ========================================================

    #[view(name)]
    fn name(&self) -> ManagedBuffer {
        ManagedBuffer::new_from_bytes(TOKEN_NAME)
    }

    #[view(symbol)]
    fn symbol(&self) -> ManagedBuffer {
        ManagedBuffer::new_from_bytes(TOKEN_TICKER)
    }

    #[view(decimals)]
    fn decimals(&self) -> u32 {
        TOKEN_DECIMALS
    }
}
