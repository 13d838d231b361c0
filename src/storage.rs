multiversx_sc::imports!();

// ============================================================
// Ledger state shared by the ledger and vote modules
// ============================================================

#[multiversx_sc::module]
pub trait StorageModule {
    /// Maximum total supply; written once in `init`.
    #[view(cap)]
    #[storage_mapper("cap")]
    fn cap(&self) -> SingleValueMapper<BigUint>;

    #[view(totalSupply)]
    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("balance")]
    fn balance(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("allowance")]
    fn allowance_of(
        &self,
        owner: &ManagedAddress,
        spender: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;
}
