multiversx_sc::imports!();

use crate::errors::ERR_INVALID_RECIPIENT;
use crate::types::Role;

// ============================================================
// Allow-list gate
//
// A global switch plus per-address flags. While the switch is
// off every address passes the gate.
// ============================================================

#[multiversx_sc::module]
pub trait AllowlistModule: crate::access_control::AccessControlModule {
    #[endpoint(setAllowlistEnabled)]
    fn set_allowlist_enabled(&self, enabled: bool) {
        self.require_any_role(&[Role::Admin, Role::WhitelistAdmin]);
        self.allowlist_enabled().set(enabled);
        self.whitelist_toggled_event(enabled);
    }

    #[endpoint(setAllowlistFlag)]
    fn set_allowlist_flag(&self, account: ManagedAddress, allowed: bool) {
        self.require_role(Role::WhitelistAdmin);
        require!(!account.is_zero(), ERR_INVALID_RECIPIENT);
        self.write_flag(&account, allowed);
    }

    /// Applies one flag to every listed account. The whole batch is
    /// validated before the first flag is written.
    #[endpoint(setAllowlistFlagBatch)]
    fn set_allowlist_flag_batch(&self, allowed: bool, accounts: MultiValueEncoded<ManagedAddress>) {
        self.require_role(Role::WhitelistAdmin);
        let accounts = accounts.to_vec();
        for account in accounts.iter() {
            require!(!account.is_zero(), ERR_INVALID_RECIPIENT);
        }
        for account in accounts.iter() {
            self.write_flag(&account, allowed);
        }
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn write_flag(&self, account: &ManagedAddress, allowed: bool) {
        if allowed {
            self.allowlisted(account).set(true);
        } else {
            self.allowlisted(account).clear();
        }
        self.whitelist_set_event(account, allowed);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isAllowlistEnabled)]
    fn is_allowlist_enabled(&self) -> bool {
        self.allowlist_enabled().get()
    }

    /// Raw stored flag, regardless of the global switch.
    #[view(isAllowlisted)]
    fn is_allowlisted(&self, account: &ManagedAddress) -> bool {
        self.allowlisted(account).get()
    }

    /// Gate decision used by mint, burn and transfers.
    #[view(isAllowed)]
    fn is_allowed(&self, account: &ManagedAddress) -> bool {
        !self.allowlist_enabled().get() || self.allowlisted(account).get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("whitelistToggled")]
    fn whitelist_toggled_event(&self, #[indexed] enabled: bool);

    #[event("whitelistSet")]
    fn whitelist_set_event(&self, #[indexed] account: &ManagedAddress, #[indexed] allowed: bool);

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("allowlistEnabled")]
    fn allowlist_enabled(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("allowlisted")]
    fn allowlisted(&self, account: &ManagedAddress) -> SingleValueMapper<bool>;
}
