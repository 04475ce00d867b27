multiversx_sc::imports!();

use crate::errors::{INSUFFICIENT_ALLOWANCE, INSUFFICIENT_BALANCE, ZERO_ADDRESS};

// ============================================================
// Fungible balance ledger
//
// Raw supply/balance/allowance bookkeeping. Voting weight is moved
// by the callers in `voting`, never here.
// ============================================================

#[multiversx_sc::module]
pub trait LedgerModule {
    #[endpoint(approve)]
    fn approve(&self, spender: ManagedAddress, amount: BigUint) -> bool {
        require!(!spender.is_zero(), ZERO_ADDRESS);
        let owner = self.blockchain().get_caller();
        self.allowance(&owner, &spender).set(&amount);
        self.approval_event(&owner, &spender, &amount);
        true
    }

    fn spend_allowance(&self, owner: &ManagedAddress, spender: &ManagedAddress, amount: &BigUint) {
        let allowance_mapper = self.allowance(owner, spender);
        let allowance = allowance_mapper.get();
        require!(&allowance >= amount, INSUFFICIENT_ALLOWANCE);
        allowance_mapper.set(allowance - amount);
    }

    fn debit_balance(&self, holder: &ManagedAddress, amount: &BigUint) {
        let balance_mapper = self.balance_of(holder);
        let balance = balance_mapper.get();
        require!(&balance >= amount, INSUFFICIENT_BALANCE);
        balance_mapper.set(balance - amount);
    }

    fn credit_balance(&self, holder: &ManagedAddress, amount: &BigUint) {
        require!(!holder.is_zero(), ZERO_ADDRESS);
        self.balance_of(holder).update(|balance| *balance += amount);
    }

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

    #[view(totalSupply)]
    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    #[view(balanceOf)]
    #[storage_mapper("balance")]
    fn balance_of(&self, holder: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(allowance)]
    #[storage_mapper("allowance")]
    fn allowance(
        &self,
        owner: &ManagedAddress,
        spender: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;
}
