use multiversx_sc::proxy_imports::*;

use crate::types::{Checkpoint, Role};

pub struct BlinkGalaxyProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for BlinkGalaxyProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = BlinkGalaxyProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        BlinkGalaxyProxyMethods { wrapped_tx: tx }
    }
}

pub struct BlinkGalaxyProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> BlinkGalaxyProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        admin: Arg0,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&admin)
            .original_result()
    }
}

impl<Env, From, To, Gas> BlinkGalaxyProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

impl<Env, From, To, Gas> BlinkGalaxyProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{

    pub fn grant_role<
        Arg0: ProxyArg<Role>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        role: Arg0,
        account: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("grantRole")
            .argument(&role)
            .argument(&account)
            .original_result()
    }

    pub fn revoke_role<
        Arg0: ProxyArg<Role>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        role: Arg0,
        account: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("revokeRole")
            .argument(&role)
            .argument(&account)
            .original_result()
    }

    pub fn renounce_role<
        Arg0: ProxyArg<Role>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        role: Arg0,
        account: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("renounceRole")
            .argument(&role)
            .argument(&account)
            .original_result()
    }

    pub fn has_role<
        Arg0: ProxyArg<Role>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        role: Arg0,
        account: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("hasRole")
            .argument(&role)
            .argument(&account)
            .original_result()
    }

    pub fn get_role_admin<
        Arg0: ProxyArg<Role>,
    >(
        self,
        role: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Role> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRoleAdmin")
            .argument(&role)
            .original_result()
    }

    pub fn get_role_members<
        Arg0: ProxyArg<Role>,
    >(
        self,
        role: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRoleMembers")
            .argument(&role)
            .original_result()
    }

    pub fn set_allowlist_enabled<
        Arg0: ProxyArg<bool>,
    >(
        self,
        enabled: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setAllowlistEnabled")
            .argument(&enabled)
            .original_result()
    }

    pub fn set_allowlist_flag<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<bool>,
    >(
        self,
        account: Arg0,
        allowed: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setAllowlistFlag")
            .argument(&account)
            .argument(&allowed)
            .original_result()
    }

    pub fn set_allowlist_flag_batch<
        Arg0: ProxyArg<bool>,
        Arg1: ProxyArg<MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>,
    >(
        self,
        allowed: Arg0,
        accounts: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setAllowlistFlagBatch")
            .argument(&allowed)
            .argument(&accounts)
            .original_result()
    }

    pub fn is_allowlist_enabled(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isAllowlistEnabled")
            .original_result()
    }

    pub fn is_allowlisted<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        account: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isAllowlisted")
            .argument(&account)
            .original_result()
    }

    pub fn is_allowed<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        account: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isAllowed")
            .argument(&account)
            .original_result()
    }

    pub fn mint<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        to: Arg0,
        amount: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("mint")
            .argument(&to)
            .argument(&amount)
            .original_result()
    }

    pub fn burn<
        Arg0: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        amount: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("burn")
            .argument(&amount)
            .original_result()
    }

    pub fn transfer<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        to: Arg0,
        amount: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("transfer")
            .argument(&to)
            .argument(&amount)
            .original_result()
    }

    pub fn transfer_from<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        from: Arg0,
        to: Arg1,
        amount: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("transferFrom")
            .argument(&from)
            .argument(&to)
            .argument(&amount)
            .original_result()
    }

    pub fn approve<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        spender: Arg0,
        amount: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("approve")
            .argument(&spender)
            .argument(&amount)
            .original_result()
    }

    pub fn balance_of<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        account: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("balanceOf")
            .argument(&account)
            .original_result()
    }

    pub fn allowance<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        owner: Arg0,
        spender: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("allowance")
            .argument(&owner)
            .argument(&spender)
            .original_result()
    }

    pub fn cap(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("cap")
            .original_result()
    }

    pub fn total_supply(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("totalSupply")
            .original_result()
    }

    pub fn delegate<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        delegatee: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("delegate")
            .argument(&delegatee)
            .original_result()
    }

    pub fn delegates<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        account: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("delegates")
            .argument(&account)
            .original_result()
    }

    pub fn get_current_votes<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        account: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCurrentVotes")
            .argument(&account)
            .original_result()
    }

    pub fn get_prior_votes<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        account: Arg0,
        block_nonce: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPriorVotes")
            .argument(&account)
            .argument(&block_nonce)
            .original_result()
    }

    pub fn num_checkpoints<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        account: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, usize> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("numCheckpoints")
            .argument(&account)
            .original_result()
    }

    pub fn get_checkpoint<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<usize>,
    >(
        self,
        account: Arg0,
        index: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Checkpoint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCheckpoint")
            .argument(&account)
            .argument(&index)
            .original_result()
    }

    pub fn delegate_by_sig<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<u64>,
        Arg3: ProxyArg<u64>,
        Arg4: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        signer: Arg0,
        delegatee: Arg1,
        nonce: Arg2,
        expiry: Arg3,
        signature: Arg4,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("delegateBySig")
            .argument(&signer)
            .argument(&delegatee)
            .argument(&nonce)
            .argument(&expiry)
            .argument(&signature)
            .original_result()
    }

    pub fn get_delegation_digest<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<u64>,
    >(
        self,
        delegatee: Arg0,
        nonce: Arg1,
        expiry: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedByteArray<Env::Api, 32>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getDelegationDigest")
            .argument(&delegatee)
            .argument(&nonce)
            .argument(&expiry)
            .original_result()
    }

    pub fn nonces<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        account: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("nonces")
            .argument(&account)
            .original_result()
    }

    pub fn emergency_withdraw<
        Arg0: ProxyArg<EgldOrEsdtTokenIdentifier<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        token: Arg0,
        to: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("emergencyWithdraw")
            .argument(&token)
            .argument(&to)
            .original_result()
    }

    pub fn name(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedBuffer<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("name")
            .original_result()
    }

    pub fn symbol(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedBuffer<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("symbol")
            .original_result()
    }

    pub fn decimals(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u32> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("decimals")
            .original_result()
    }
}
