multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Role: flat registry keys for the access gate
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Role {
    /// Administers every role, itself included.
    Admin,
    /// May mint up to the cap.
    Minter,
    /// Maintains the allow-list flags.
    WhitelistAdmin,
    /// May rescue foreign tokens held by the contract.
    EmergencyWithdraw,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Admin,
        Role::Minter,
        Role::WhitelistAdmin,
        Role::EmergencyWithdraw,
    ];
}

// ============================================================
// Checkpoint: one vote snapshot of a delegate
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Checkpoint<M: ManagedTypeApi> {
    /// Block nonce at which `votes` became effective.
    pub block_nonce: u64,
    pub votes: BigUint<M>,
}
