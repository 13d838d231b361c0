multiversx_sc::imports!();

use crate::errors::{ERR_INVALID_RECIPIENT, ERR_NOTHING_TO_WITHDRAW};
use crate::types::Role;

// ============================================================
// Emergency rescue
//
// Sends out EGLD or ESDT tokens that ended up on the contract
// account. The BG ledger itself lives in storage and is never
// touched here.
// ============================================================

#[multiversx_sc::module]
pub trait EmergencyModule: crate::access_control::AccessControlModule {
    #[endpoint(emergencyWithdraw)]
    fn emergency_withdraw(&self, token: EgldOrEsdtTokenIdentifier, to: ManagedAddress) {
        self.require_role(Role::EmergencyWithdraw);
        require!(!to.is_zero(), ERR_INVALID_RECIPIENT);

        let held = self.blockchain().get_sc_balance(&token, 0);
        require!(held > 0u64, ERR_NOTHING_TO_WITHDRAW);

        self.send().direct(&to, &token, 0, &held);
        self.emergency_withdraw_event(&token, &to, &held);
    }

    #[event("emergencyWithdraw")]
    fn emergency_withdraw_event(
        &self,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );
}
