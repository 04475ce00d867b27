multiversx_sc::imports!();

use crate::errors::{NOT_OWNER, UNAUTHORIZED, ZERO_ADDRESS};

// ============================================================
// Authority handle
//
// The single privileged slot of the token. It starts as the
// deployer and is expected to be handed to the Timelock, after
// which only a queued-and-executed governance action can move it.
// ============================================================

#[multiversx_sc::module]
pub trait AuthorityModule {
    #[endpoint(transferOwnership)]
    fn transfer_ownership(&self, new_owner: ManagedAddress) {
        let previous_owner = self.require_owner(NOT_OWNER);
        require!(!new_owner.is_zero(), ZERO_ADDRESS);

        self.owner().set(&new_owner);
        self.ownership_transferred_event(&previous_owner, &new_owner);
    }

    /// Treasury actions (interest skim, token sweep) report `Unauthorized`.
    fn require_treasury(&self) -> ManagedAddress {
        self.require_owner(UNAUTHORIZED)
    }

    fn require_owner(&self, error: &str) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(caller == self.owner().get(), error);
        caller
    }

    #[event("ownershipTransferred")]
    fn ownership_transferred_event(
        &self,
        #[indexed] previous_owner: &ManagedAddress,
        #[indexed] new_owner: &ManagedAddress,
    );

    #[view(owner)]
    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;
}
