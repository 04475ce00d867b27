multiversx_sc::imports!();

use crate::errors::ZERO_ADDRESS;

// ============================================================
// Voting weight with live delegation
//
// Every holder delegates to itself until it calls `delegate`.
// votes(d) == sum of balances of holders whose delegatee is d.
// There are no checkpoints: weight changes take effect at once.
// ============================================================

#[multiversx_sc::module]
pub trait VotingModule: crate::ledger::LedgerModule {
    #[endpoint(delegate)]
    fn delegate(&self, delegatee: ManagedAddress) {
        require!(!delegatee.is_zero(), ZERO_ADDRESS);
        let delegator = self.blockchain().get_caller();
        let previous = self.delegate_of(&delegator);
        let weight = self.balance_of(&delegator).get();

        self.delegates(&delegator).set(&delegatee);
        self.delegate_changed_event(&delegator, &previous, &delegatee);
        self.move_voting_weight(&previous, &delegatee, &weight);
    }

    #[view(delegates)]
    fn delegate_of(&self, holder: &ManagedAddress) -> ManagedAddress {
        let delegate_mapper = self.delegates(holder);
        if delegate_mapper.is_empty() {
            holder.clone()
        } else {
            delegate_mapper.get()
        }
    }

    // ========================================================
    // Balance mutation that keeps voting weight in step
    // ========================================================

    fn move_tokens(&self, from: &ManagedAddress, to: &ManagedAddress, amount: &BigUint) {
        self.debit_balance(from, amount);
        self.credit_balance(to, amount);
        self.move_voting_weight(&self.delegate_of(from), &self.delegate_of(to), amount);
        self.transfer_event(from, to, amount);
    }

    fn mint_tokens(&self, to: &ManagedAddress, amount: &BigUint) {
        self.credit_balance(to, amount);
        self.total_supply().update(|supply| *supply += amount);
        self.add_votes(&self.delegate_of(to), amount);
        self.transfer_event(&ManagedAddress::zero(), to, amount);
    }

    fn burn_tokens(&self, from: &ManagedAddress, amount: &BigUint) {
        self.debit_balance(from, amount);
        self.total_supply().update(|supply| *supply -= amount);
        self.remove_votes(&self.delegate_of(from), amount);
        self.transfer_event(from, &ManagedAddress::zero(), amount);
    }

    fn move_voting_weight(&self, from: &ManagedAddress, to: &ManagedAddress, amount: &BigUint) {
        if from == to || *amount == 0u64 {
            return;
        }
        self.remove_votes(from, amount);
        self.add_votes(to, amount);
    }

    fn add_votes(&self, delegatee: &ManagedAddress, amount: &BigUint) {
        if *amount == 0u64 {
            return;
        }
        let new_votes = self.votes(delegatee).update(|votes| {
            *votes += amount;
            votes.clone()
        });
        self.delegate_votes_changed_event(delegatee, &new_votes);
    }

    fn remove_votes(&self, delegatee: &ManagedAddress, amount: &BigUint) {
        if *amount == 0u64 {
            return;
        }
        let new_votes = self.votes(delegatee).update(|votes| {
            *votes -= amount;
            votes.clone()
        });
        self.delegate_votes_changed_event(delegatee, &new_votes);
    }

    #[event("delegateChanged")]
    fn delegate_changed_event(
        &self,
        #[indexed] delegator: &ManagedAddress,
        #[indexed] from_delegate: &ManagedAddress,
        #[indexed] to_delegate: &ManagedAddress,
    );

    #[event("delegateVotesChanged")]
    fn delegate_votes_changed_event(&self, #[indexed] delegatee: &ManagedAddress, votes: &BigUint);

    #[view(getCurrentVotes)]
    #[storage_mapper("votes")]
    fn votes(&self, delegatee: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("delegates")]
    fn delegates(&self, holder: &ManagedAddress) -> SingleValueMapper<ManagedAddress>;
}
