multiversx_sc::imports!();

use crate::errors::{
    ERR_BURN_NOT_ALLOWLISTED, ERR_CAP_EXCEEDED, ERR_INSUFFICIENT_ALLOWANCE,
    ERR_INSUFFICIENT_BALANCE, ERR_INVALID_RECIPIENT, ERR_MINT_NOT_ALLOWLISTED,
    ERR_TRANSFER_NOT_ALLOWLISTED,
};
use crate::types::Role;

// ============================================================
// Ledger
//
// Balances, allowances and the capped total supply. Every
// balance change is mirrored onto the delegates of the
// accounts involved.
// ============================================================

#[multiversx_sc::module]
pub trait LedgerModule:
    crate::storage::StorageModule
    + crate::access_control::AccessControlModule
    + crate::allowlist::AllowlistModule
    + crate::votes::VotesModule
{
    // ========================================================
    // ENDPOINT: mint
    // Minter only, bounded by the cap.
    // ========================================================

    #[endpoint(mint)]
    fn mint(&self, to: ManagedAddress, amount: BigUint) {
        self.require_role(Role::Minter);
        require!(!to.is_zero(), ERR_INVALID_RECIPIENT);
        require!(self.is_allowed(&to), ERR_MINT_NOT_ALLOWLISTED);

        let new_supply = self.total_supply().get() + &amount;
        require!(new_supply <= self.cap().get(), ERR_CAP_EXCEEDED);

        self.total_supply().set(&new_supply);
        self.balance(&to).update(|balance| *balance += &amount);

        let zero = ManagedAddress::zero();
        self.move_delegates(&zero, &self.delegate_of(&to), &amount);

        let caller = self.blockchain().get_caller();
        self.transfer_event(&zero, &to, &amount);
        self.minted_event(&caller, &to, &amount);
    }

    // ========================================================
    // ENDPOINT: burn
    // Holders burn from their own balance.
    // ========================================================

    #[endpoint(burn)]
    fn burn(&self, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(self.is_allowed(&caller), ERR_BURN_NOT_ALLOWLISTED);

        let balance = self.balance(&caller).get();
        require!(balance >= amount, ERR_INSUFFICIENT_BALANCE);

        self.balance(&caller).set(&(balance - &amount));
        self.total_supply().update(|supply| *supply -= &amount);

        let zero = ManagedAddress::zero();
        self.move_delegates(&self.delegate_of(&caller), &zero, &amount);

        self.transfer_event(&caller, &zero, &amount);
        self.burned_event(&caller, &amount);
    }

    // ========================================================
    // ENDPOINTS: transfers and approvals
    // ========================================================

    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.transfer_internal(&caller, &to, &amount);
    }

    #[endpoint(transferFrom)]
    fn transfer_from(&self, from: ManagedAddress, to: ManagedAddress, amount: BigUint) {
        let spender = self.blockchain().get_caller();

        let allowance = self.allowance_of(&from, &spender).get();
        require!(allowance >= amount, ERR_INSUFFICIENT_ALLOWANCE);
        self.allowance_of(&from, &spender).set(&(allowance - &amount));

        self.transfer_internal(&from, &to, &amount);
    }

    /// Overwrites any previous allowance of `spender`.
    #[endpoint(approve)]
    fn approve(&self, spender: ManagedAddress, amount: BigUint) {
        require!(!spender.is_zero(), ERR_INVALID_RECIPIENT);
        let owner = self.blockchain().get_caller();
        self.allowance_of(&owner, &spender).set(&amount);
        self.approval_event(&owner, &spender, &amount);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn transfer_internal(&self, from: &ManagedAddress, to: &ManagedAddress, amount: &BigUint) {
        require!(!to.is_zero(), ERR_INVALID_RECIPIENT);
        require!(
            self.is_allowed(from) && self.is_allowed(to),
            ERR_TRANSFER_NOT_ALLOWLISTED
        );

        let from_balance = self.balance(from).get();
        require!(from_balance >= *amount, ERR_INSUFFICIENT_BALANCE);

        self.balance(from).set(&(from_balance - amount));
        self.balance(to).update(|balance| *balance += amount);

        self.move_delegates(&self.delegate_of(from), &self.delegate_of(to), amount);
        self.transfer_event(from, to, amount);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(balanceOf)]
    fn balance_of(&self, account: &ManagedAddress) -> BigUint {
        self.balance(account).get()
    }

    #[view(allowance)]
    fn allowance(&self, owner: &ManagedAddress, spender: &ManagedAddress) -> BigUint {
        self.allowance_of(owner, spender).get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("approval")]
    fn approval_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] spender: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("minted")]
    fn minted_event(
        &self,
        #[indexed] actor: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("burned")]
    fn burned_event(&self, #[indexed] account: &ManagedAddress, amount: &BigUint);
}
