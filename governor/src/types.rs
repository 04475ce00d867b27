multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal State: derived on every read, never stored
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalState {
    /// Created, voting has not opened yet.
    Pending,
    /// Voting window open.
    Active,
    /// Canceled by the guardian, the proposer, or after the proposer lost threshold.
    Canceled,
    /// Voting closed without a majority or without quorum.
    Defeated,
    /// Voting closed with a majority and quorum, not queued yet.
    Succeeded,
    /// Queued in the timelock, waiting for its eta.
    Queued,
    /// Queued but not executed within the timelock grace period.
    Expired,
    /// Executed through the timelock. Terminal.
    Executed,
}

// ============================================================
// Proposal Action: one call routed through the timelock
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ProposalAction<M: ManagedTypeApi> {
    pub target: ManagedAddress<M>,
    /// EGLD forwarded with the call.
    pub value: BigUint<M>,
    /// Endpoint name. Empty means a plain EGLD transfer.
    pub function: ManagedBuffer<M>,
    /// Top-encoded endpoint arguments.
    pub arguments: ManagedVec<M, ManagedBuffer<M>>,
}

// ============================================================
// Proposal: the governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    pub description: ManagedBuffer<M>,
    /// Timelock timestamp; 0 until queued.
    pub eta: u64,
    pub start_block: u64,
    pub end_block: u64,
    pub for_votes: BigUint<M>,
    pub against_votes: BigUint<M>,
    /// Quorum fixed at creation from the supply at that time.
    pub quorum_votes: BigUint<M>,
    pub canceled: bool,
    pub executed: bool,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Receipt<M: ManagedTypeApi> {
    pub has_voted: bool,
    pub support: bool,
    pub votes: BigUint<M>,
}
