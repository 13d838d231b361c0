multiversx_sc::imports!();

use crate::errors::{ERR_CHECKPOINT_OUT_OF_RANGE, ERR_INVALID_QUERY_POINT, ERR_VOTE_UNDERFLOW};
use crate::types::Checkpoint;

// ============================================================
// Vote checkpoints
//
// Each account may delegate its full balance to one delegate.
// Every change of a delegate's vote total is recorded in that
// delegate's append-only checkpoint history, keyed by block
// nonce, so past totals stay exactly queryable.
// ============================================================

#[multiversx_sc::module]
pub trait VotesModule: crate::storage::StorageModule {
    /// Points the caller's voting weight at `delegatee`. The zero
    /// address removes the delegation.
    #[endpoint(delegate)]
    fn delegate(&self, delegatee: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.delegate_internal(&caller, delegatee);
    }

    // ========================================================
    // INTERNAL: delegation and vote movement
    // ========================================================

    /// Shared by direct and signature-authenticated delegation.
    fn delegate_internal(&self, delegator: &ManagedAddress, delegatee: ManagedAddress) {
        let current_delegate = self.delegate_of(delegator);
        let delegator_balance = self.balance(delegator).get();

        if delegatee.is_zero() {
            self.delegate_to(delegator).clear();
        } else {
            self.delegate_to(delegator).set(&delegatee);
        }

        self.delegate_changed_event(delegator, &current_delegate, &delegatee);
        self.move_delegates(&current_delegate, &delegatee, &delegator_balance);
    }

    /// Moves `amount` votes from `src` to `dst`. A zero address on
    /// either side means "no delegate" and is skipped.
    fn move_delegates(&self, src: &ManagedAddress, dst: &ManagedAddress, amount: &BigUint) {
        if src == dst || *amount == 0u64 {
            return;
        }

        if !src.is_zero() {
            let old_votes = self.current_votes(src);
            require!(old_votes >= *amount, ERR_VOTE_UNDERFLOW);
            let new_votes = &old_votes - amount;
            self.write_checkpoint(src, &old_votes, new_votes);
        }

        if !dst.is_zero() {
            let old_votes = self.current_votes(dst);
            let new_votes = &old_votes + amount;
            self.write_checkpoint(dst, &old_votes, new_votes);
        }
    }

    /// Appends a checkpoint, or overwrites the latest one when it was
    /// written in the current block.
    fn write_checkpoint(&self, delegatee: &ManagedAddress, old_votes: &BigUint, new_votes: BigUint) {
        let block_nonce = self.blockchain().get_block_nonce();
        let mut history = self.checkpoints(delegatee);
        let count = history.len();

        if count > 0 {
            let mut latest = history.get(count);
            if latest.block_nonce == block_nonce {
                latest.votes = new_votes.clone();
                history.set(count, &latest);
                self.delegate_votes_changed_event(delegatee, old_votes, &new_votes);
                return;
            }
        }

        history.push(&Checkpoint {
            block_nonce,
            votes: new_votes.clone(),
        });
        self.delegate_votes_changed_event(delegatee, old_votes, &new_votes);
    }

    fn delegate_of(&self, account: &ManagedAddress) -> ManagedAddress {
        let mapper = self.delegate_to(account);
        if mapper.is_empty() {
            ManagedAddress::zero()
        } else {
            mapper.get()
        }
    }

    fn current_votes(&self, account: &ManagedAddress) -> BigUint {
        let history = self.checkpoints(account);
        let count = history.len();
        if count == 0 {
            BigUint::zero()
        } else {
            history.get(count).votes
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Current delegate, or the zero address when none is set.
    #[view(delegates)]
    fn delegates(&self, account: &ManagedAddress) -> ManagedAddress {
        self.delegate_of(account)
    }

    #[view(getCurrentVotes)]
    fn get_current_votes(&self, account: &ManagedAddress) -> BigUint {
        self.current_votes(account)
    }

    /// Votes held by `account` as of the end of block `block_nonce`.
    /// Only finished blocks can be queried.
    #[view(getPriorVotes)]
    fn get_prior_votes(&self, account: &ManagedAddress, block_nonce: u64) -> BigUint {
        require!(
            block_nonce < self.blockchain().get_block_nonce(),
            ERR_INVALID_QUERY_POINT
        );

        let history = self.checkpoints(account);
        let count = history.len();
        if count == 0 {
            return BigUint::zero();
        }

        let latest = history.get(count);
        if latest.block_nonce <= block_nonce {
            return latest.votes;
        }
        if history.get(1).block_nonce > block_nonce {
            return BigUint::zero();
        }

        // history[lower].block_nonce <= block_nonce < history[count].block_nonce
        let mut lower = 1usize;
        let mut upper = count - 1;
        while upper > lower {
            let center = upper - (upper - lower) / 2;
            let checkpoint = history.get(center);
            if checkpoint.block_nonce == block_nonce {
                return checkpoint.votes;
            }
            if checkpoint.block_nonce < block_nonce {
                lower = center;
            } else {
                upper = center - 1;
            }
        }
        history.get(lower).votes
    }

    #[view(numCheckpoints)]
    fn num_checkpoints(&self, account: &ManagedAddress) -> usize {
        self.checkpoints(account).len()
    }

    /// 1-based, in insertion order.
    #[view(getCheckpoint)]
    fn get_checkpoint(&self, account: &ManagedAddress, index: usize) -> Checkpoint<Self::Api> {
        let history = self.checkpoints(account);
        require!(index >= 1 && index <= history.len(), ERR_CHECKPOINT_OUT_OF_RANGE);
        history.get(index)
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("delegateChanged")]
    fn delegate_changed_event(
        &self,
        #[indexed] delegator: &ManagedAddress,
        #[indexed] from_delegate: &ManagedAddress,
        #[indexed] to_delegate: &ManagedAddress,
    );

    #[event("delegateVotesChanged")]
    fn delegate_votes_changed_event(
        &self,
        #[indexed] delegate: &ManagedAddress,
        #[indexed] previous_votes: &BigUint,
        new_votes: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("delegateTo")]
    fn delegate_to(&self, account: &ManagedAddress) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("checkpoints")]
    fn checkpoints(&self, account: &ManagedAddress) -> VecMapper<Checkpoint<Self::Api>>;
}
