#![no_std]

multiversx_sc::imports!();

pub mod governor_proxy;
pub mod timelock_proxy;
pub mod types;
pub mod vote_token_proxy;

use timelock_proxy::TimelockProxy;
use types::{Proposal, ProposalAction, ProposalState, Receipt};
use vote_token_proxy::VoteTokenProxy;

// ============================================================
// Constants
// ============================================================

/// Upper bound on the calls a single proposal may carry.
pub const MAX_ACTIONS: usize = 10;

/// Basis points denominator
const BPS_DENOMINATOR: u64 = 10_000;

const INVALID_PROPOSAL_ID: &str = "Invalid proposal id";
const INVALID_BPS: &str = "Basis points must be between 1 and 10000";
const INVALID_VOTING_PERIOD: &str = "Voting period must be greater than zero";
const ZERO_ADDRESS: &str = "Zero address not allowed";
const BELOW_THRESHOLD: &str = "Proposer votes below proposal threshold";
const NO_ACTIONS: &str = "Must provide actions";
const TOO_MANY_ACTIONS: &str = "Too many actions";
const LIVE_PROPOSAL_EXISTS: &str = "Proposer already has an active or pending proposal";
const VOTING_CLOSED: &str = "Voting is closed";
const ALREADY_VOTED: &str = "Voter already voted";
const NOT_SUCCEEDED: &str = "Proposal can only be queued if it is succeeded";
const NOT_QUEUED: &str = "Proposal can only be executed if it is queued";
const ACTION_ALREADY_QUEUED: &str = "Identical proposal action already queued at eta";
const CANNOT_CANCEL_EXECUTED: &str = "Cannot cancel executed proposal";
const CANCEL_NOT_ALLOWED: &str = "Proposer at or above threshold";
const NOT_GUARDIAN: &str = "Sender must be gov guardian";

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait Governor {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        timelock: ManagedAddress,
        token: ManagedAddress,
        voting_delay: u64,
        voting_period: u64,
        quorum_bps: u64,
        proposal_threshold_bps: u64,
        guardian: OptionalValue<ManagedAddress>,
    ) {
        require!(!timelock.is_zero() && !token.is_zero(), ZERO_ADDRESS);
        require!(voting_period > 0, INVALID_VOTING_PERIOD);
        require!(
            (1..=BPS_DENOMINATOR).contains(&quorum_bps)
                && (1..=BPS_DENOMINATOR).contains(&proposal_threshold_bps),
            INVALID_BPS
        );

        self.timelock().set(&timelock);
        self.token().set(&token);
        self.voting_delay().set(voting_delay);
        self.voting_period().set(voting_period);
        self.quorum_bps().set(quorum_bps);
        self.proposal_threshold_bps().set(proposal_threshold_bps);
        if let Some(guardian) = guardian.into_option() {
            self.guardian().set(&guardian);
        }
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: propose
    // Token holders above the threshold open a vote on a batch
    // of timelocked calls.
    // ========================================================

    #[endpoint(propose)]
    fn propose(
        &self,
        description: ManagedBuffer,
        actions: MultiValueEncoded<ProposalAction<Self::Api>>,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        require!(
            self.current_votes(&caller) >= self.proposal_threshold(),
            BELOW_THRESHOLD
        );

        let latest_id = self.latest_proposal_id(&caller).get();
        if latest_id != 0 {
            let latest_state = self.state(latest_id);
            require!(
                latest_state != ProposalState::Active && latest_state != ProposalState::Pending,
                LIVE_PROPOSAL_EXISTS
            );
        }

        let start_block = self.blockchain().get_block_nonce() + self.voting_delay().get();
        let end_block = start_block + self.voting_period().get();
        let proposal_id = self.proposal_count().get() + 1;

        let proposal = Proposal {
            id: proposal_id,
            proposer: caller.clone(),
            description: description.clone(),
            eta: 0,
            start_block,
            end_block,
            for_votes: BigUint::zero(),
            against_votes: BigUint::zero(),
            quorum_votes: self.quorum_votes(),
            canceled: false,
            executed: false,
        };

        let mut action_count = 0usize;
        for action in actions.into_iter() {
            action_count += 1;
            require!(action_count <= MAX_ACTIONS, TOO_MANY_ACTIONS);
            self.proposal_actions(proposal_id).push(&action);
        }
        require!(action_count > 0, NO_ACTIONS);

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id);
        self.latest_proposal_id(&caller).set(proposal_id);

        self.proposal_created_event(proposal_id, &caller, start_block, end_block, &description);
        proposal_id
    }

    // ========================================================
    // ENDPOINT: castVote
    // Weight is the voter's delegated votes at the time of voting.
    // ========================================================

    #[endpoint(castVote)]
    fn cast_vote(&self, proposal_id: u64, support: bool) {
        require!(
            self.state(proposal_id) == ProposalState::Active,
            VOTING_CLOSED
        );
        let voter = self.blockchain().get_caller();
        let receipt_mapper = self.receipts(proposal_id, &voter);
        require!(receipt_mapper.is_empty(), ALREADY_VOTED);

        let votes = self.current_votes(&voter);
        self.proposals(proposal_id).update(|proposal| {
            if support {
                proposal.for_votes += &votes;
            } else {
                proposal.against_votes += &votes;
            }
        });
        receipt_mapper.set(Receipt {
            has_voted: true,
            support,
            votes: votes.clone(),
        });

        self.vote_cast_event(&voter, proposal_id, support, &votes);
    }

    // ========================================================
    // ENDPOINT: queue
    // Schedules every action of a succeeded proposal in the
    // timelock at now + delay.
    // ========================================================

    #[endpoint(queue)]
    fn queue(&self, proposal_id: u64) {
        require!(
            self.state(proposal_id) == ProposalState::Succeeded,
            NOT_SUCCEEDED
        );

        let timelock = self.timelock().get();
        let delay = self
            .tx()
            .to(&timelock)
            .typed(TimelockProxy)
            .delay()
            .returns(ReturnsResult)
            .sync_call();
        let eta = self.blockchain().get_block_timestamp() + delay;

        for action in self.proposal_actions(proposal_id).iter() {
            let ProposalAction {
                target,
                value,
                function,
                arguments,
            } = action;

            let already_queued = self
                .tx()
                .to(&timelock)
                .typed(TimelockProxy)
                .is_queued(
                    target.clone(),
                    value.clone(),
                    function.clone(),
                    arguments.clone(),
                    eta,
                )
                .returns(ReturnsResult)
                .sync_call();
            require!(!already_queued, ACTION_ALREADY_QUEUED);

            self.tx()
                .to(&timelock)
                .typed(TimelockProxy)
                .queue_transaction(target, value, function, arguments, eta)
                .sync_call();
        }

        self.proposals(proposal_id).update(|proposal| proposal.eta = eta);
        self.proposal_queued_event(proposal_id, eta);
    }

    // ========================================================
    // ENDPOINT: execute
    // Runs a queued proposal through the timelock. The EGLD sent
    // along covers the values of its actions.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(execute)]
    fn execute(&self, proposal_id: u64) {
        require!(
            self.state(proposal_id) == ProposalState::Queued,
            NOT_QUEUED
        );

        let mut proposal = self.proposals(proposal_id).get();
        proposal.executed = true;
        self.proposals(proposal_id).set(&proposal);

        let timelock = self.timelock().get();
        for action in self.proposal_actions(proposal_id).iter() {
            let ProposalAction {
                target,
                value,
                function,
                arguments,
            } = action;

            self.tx()
                .to(&timelock)
                .typed(TimelockProxy)
                .execute_transaction(target, value.clone(), function, arguments, proposal.eta)
                .egld(value)
                .sync_call();
        }

        self.proposal_executed_event(proposal_id);
    }

    // ========================================================
    // ENDPOINT: cancel
    // Guardian or proposer at any time before execution, anyone
    // once the proposer dropped below the threshold.
    // ========================================================

    #[endpoint(cancel)]
    fn cancel(&self, proposal_id: u64) {
        require!(
            self.state(proposal_id) != ProposalState::Executed,
            CANNOT_CANCEL_EXECUTED
        );

        let mut proposal = self.proposals(proposal_id).get();
        let caller = self.blockchain().get_caller();
        let privileged = caller == proposal.proposer || self.is_guardian(&caller);
        require!(
            privileged || self.current_votes(&proposal.proposer) < self.proposal_threshold(),
            CANCEL_NOT_ALLOWED
        );

        proposal.canceled = true;
        self.proposals(proposal_id).set(&proposal);

        if proposal.eta != 0 {
            let timelock = self.timelock().get();
            for action in self.proposal_actions(proposal_id).iter() {
                self.tx()
                    .to(&timelock)
                    .typed(TimelockProxy)
                    .cancel_transaction(
                        action.target,
                        action.value,
                        action.function,
                        action.arguments,
                        proposal.eta,
                    )
                    .sync_call();
            }
        }

        self.proposal_canceled_event(proposal_id);
    }

    // ========================================================
    // Timelock administration
    // ========================================================

    /// Completes the timelock hand-off once the timelock named this
    /// contract as its pending admin.
    #[endpoint(acceptAdmin)]
    fn accept_admin(&self) {
        let timelock = self.timelock().get();
        self.tx()
            .to(&timelock)
            .typed(TimelockProxy)
            .accept_admin()
            .sync_call();
    }

    #[endpoint(abdicate)]
    fn abdicate(&self) {
        let caller = self.blockchain().get_caller();
        require!(self.is_guardian(&caller), NOT_GUARDIAN);
        self.guardian().clear();
        self.guardian_abdicated_event(&caller);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn current_votes(&self, account: &ManagedAddress) -> BigUint {
        self.tx()
            .to(&self.token().get())
            .typed(VoteTokenProxy)
            .get_current_votes(account)
            .returns(ReturnsResult)
            .sync_call()
    }

    fn token_supply(&self) -> BigUint {
        self.tx()
            .to(&self.token().get())
            .typed(VoteTokenProxy)
            .total_supply()
            .returns(ReturnsResult)
            .sync_call()
    }

    fn timelock_grace_period(&self) -> u64 {
        self.tx()
            .to(&self.timelock().get())
            .typed(TimelockProxy)
            .grace_period()
            .returns(ReturnsResult)
            .sync_call()
    }

    fn is_guardian(&self, address: &ManagedAddress) -> bool {
        !self.guardian().is_empty() && &self.guardian().get() == address
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(state)]
    fn state(&self, proposal_id: u64) -> ProposalState {
        require!(
            proposal_id > 0 && proposal_id <= self.proposal_count().get(),
            INVALID_PROPOSAL_ID
        );
        let proposal = self.proposals(proposal_id).get();
        let block = self.blockchain().get_block_nonce();

        if proposal.canceled {
            ProposalState::Canceled
        } else if block < proposal.start_block {
            ProposalState::Pending
        } else if block <= proposal.end_block {
            ProposalState::Active
        } else if proposal.for_votes <= proposal.against_votes
            || proposal.for_votes < proposal.quorum_votes
        {
            ProposalState::Defeated
        } else if proposal.eta == 0 {
            ProposalState::Succeeded
        } else if proposal.executed {
            ProposalState::Executed
        } else if self.blockchain().get_block_timestamp()
            > proposal.eta + self.timelock_grace_period()
        {
            ProposalState::Expired
        } else {
            ProposalState::Queued
        }
    }

    /// Votes required for a proposal created now to pass.
    #[view(quorumVotes)]
    fn quorum_votes(&self) -> BigUint {
        self.token_supply() * self.quorum_bps().get() / BPS_DENOMINATOR
    }

    /// Votes a proposer must hold to open a proposal.
    #[view(proposalThreshold)]
    fn proposal_threshold(&self) -> BigUint {
        self.token_supply() * self.proposal_threshold_bps().get() / BPS_DENOMINATOR
    }

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(!self.proposals(proposal_id).is_empty(), INVALID_PROPOSAL_ID);
        self.proposals(proposal_id).get()
    }

    #[view(getActions)]
    fn get_actions(&self, proposal_id: u64) -> MultiValueEncoded<ProposalAction<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for action in self.proposal_actions(proposal_id).iter() {
            result.push(action);
        }
        result
    }

    #[view(getReceipt)]
    fn get_receipt(&self, proposal_id: u64, voter: ManagedAddress) -> Receipt<Self::Api> {
        let mapper = self.receipts(proposal_id, &voter);
        if mapper.is_empty() {
            return Receipt {
                has_voted: false,
                support: false,
                votes: BigUint::zero(),
            };
        }
        mapper.get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] start_block: u64,
        #[indexed] end_block: u64,
        description: &ManagedBuffer,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] voter: &ManagedAddress,
        #[indexed] proposal_id: u64,
        #[indexed] support: bool,
        votes: &BigUint,
    );

    #[event("proposalQueued")]
    fn proposal_queued_event(&self, #[indexed] proposal_id: u64, #[indexed] eta: u64);

    #[event("proposalExecuted")]
    fn proposal_executed_event(&self, #[indexed] proposal_id: u64);

    #[event("proposalCanceled")]
    fn proposal_canceled_event(&self, #[indexed] proposal_id: u64);

    #[event("guardianAbdicated")]
    fn guardian_abdicated_event(&self, #[indexed] guardian: &ManagedAddress);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Config ──

    #[view(getTimelock)]
    #[storage_mapper("timelock")]
    fn timelock(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getToken)]
    #[storage_mapper("token")]
    fn token(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getGuardian)]
    #[storage_mapper("guardian")]
    fn guardian(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(votingDelay)]
    #[storage_mapper("votingDelay")]
    fn voting_delay(&self) -> SingleValueMapper<u64>;

    #[view(votingPeriod)]
    #[storage_mapper("votingPeriod")]
    fn voting_period(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("quorumBps")]
    fn quorum_bps(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposalThresholdBps")]
    fn proposal_threshold_bps(&self) -> SingleValueMapper<u64>;

    // ── Proposals ──

    #[view(proposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("proposalActions")]
    fn proposal_actions(&self, id: u64) -> VecMapper<ProposalAction<Self::Api>>;

    #[storage_mapper("receipts")]
    fn receipts(&self, id: u64, voter: &ManagedAddress) -> SingleValueMapper<Receipt<Self::Api>>;

    #[view(latestProposalId)]
    #[storage_mapper("latestProposalIds")]
    fn latest_proposal_id(&self, proposer: &ManagedAddress) -> SingleValueMapper<u64>;
}
