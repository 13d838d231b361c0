multiversx_sc::imports!();

use crate::errors::{ERR_RENOUNCE_FOR_OTHER, ERR_UNAUTHORIZED};
use crate::types::Role;

// ============================================================
// Access registry
//
// Flat role -> member-set table. Every gated endpoint checks
// membership of the caller at call time; there is no role
// hierarchy beyond Admin administering all roles.
// ============================================================

#[multiversx_sc::module]
pub trait AccessControlModule {
    #[endpoint(grantRole)]
    fn grant_role(&self, role: Role, account: ManagedAddress) {
        self.require_role(self.get_role_admin(role));
        let sender = self.blockchain().get_caller();
        self.grant_role_internal(role, &account, &sender);
    }

    #[endpoint(revokeRole)]
    fn revoke_role(&self, role: Role, account: ManagedAddress) {
        self.require_role(self.get_role_admin(role));
        let sender = self.blockchain().get_caller();
        self.revoke_role_internal(role, &account, &sender);
    }

    /// Holders drop their own roles; no further authorization applies.
    #[endpoint(renounceRole)]
    fn renounce_role(&self, role: Role, account: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        require!(account == caller, ERR_RENOUNCE_FOR_OTHER);
        self.revoke_role_internal(role, &account, &caller);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn grant_role_internal(&self, role: Role, account: &ManagedAddress, sender: &ManagedAddress) {
        self.role_members(role).insert(account.clone());
        self.role_granted_event(role, account, sender);
    }

    fn revoke_role_internal(&self, role: Role, account: &ManagedAddress, sender: &ManagedAddress) {
        self.role_members(role).swap_remove(account);
        self.role_revoked_event(role, account, sender);
    }

    fn require_role(&self, role: Role) {
        let caller = self.blockchain().get_caller();
        require!(self.role_members(role).contains(&caller), ERR_UNAUTHORIZED);
    }

    fn require_any_role(&self, roles: &[Role]) {
        let caller = self.blockchain().get_caller();
        let authorized = roles
            .iter()
            .any(|role| self.role_members(*role).contains(&caller));
        require!(authorized, ERR_UNAUTHORIZED);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(hasRole)]
    fn has_role(&self, role: Role, account: &ManagedAddress) -> bool {
        self.role_members(role).contains(account)
    }

    #[view(getRoleAdmin)]
    fn get_role_admin(&self, _role: Role) -> Role {
        Role::Admin
    }

    #[view(getRoleMembers)]
    fn get_role_members(&self, role: Role) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for member in self.role_members(role).iter() {
            result.push(member);
        }
        result
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("roleGranted")]
    fn role_granted_event(
        &self,
        #[indexed] role: Role,
        #[indexed] account: &ManagedAddress,
        #[indexed] sender: &ManagedAddress,
    );

    #[event("roleRevoked")]
    fn role_revoked_event(
        &self,
        #[indexed] role: Role,
        #[indexed] account: &ManagedAddress,
        #[indexed] sender: &ManagedAddress,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("roleMembers")]
    fn role_members(&self, role: Role) -> UnorderedSetMapper<ManagedAddress>;
}
