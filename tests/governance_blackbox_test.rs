use multiversx_sc::codec::TopEncode;
use multiversx_sc_scenario::imports::*;

use continuous_token::continuous_token_proxy::ContinuousTokenProxy;
use governor::governor_proxy::GovernorProxy;
use governor::types::{ProposalAction, ProposalState};
use lending_market_mock::lending_market_mock_proxy::LendingMarketMockProxy;
use timelock::timelock_proxy::TimelockProxy;

const OWNER: TestAddress = TestAddress::new("owner");
const VOTER: TestAddress = TestAddress::new("voter");
const OUTSIDER: TestAddress = TestAddress::new("outsider");
const BORROWER: TestAddress = TestAddress::new("borrower");

const TOKEN: TestSCAddress = TestSCAddress::new("continuous-token");
const MARKET: TestSCAddress = TestSCAddress::new("lending-market");
const TIMELOCK: TestSCAddress = TestSCAddress::new("timelock");
const GOVERNOR: TestSCAddress = TestSCAddress::new("governor");

const TOKEN_CODE: MxscPath = MxscPath::new("output/continuous-token.mxsc.json");
const MARKET_CODE: MxscPath = MxscPath::new("lending-market-mock/output/lending-market-mock.mxsc.json");
const TIMELOCK_CODE: MxscPath = MxscPath::new("timelock/output/timelock.mxsc.json");
const GOVERNOR_CODE: MxscPath = MxscPath::new("governor/output/governor.mxsc.json");

const DAI: TestTokenIdentifier = TestTokenIdentifier::new("DAI-123456");
const CDAI: TestTokenIdentifier = TestTokenIdentifier::new("CDAI-123456");

const START_BLOCK: u64 = 100;
const START_TIME: u64 = 1_000_000;
const HANDOFF_TIME: u64 = START_TIME - 2 * TIMELOCK_DELAY;
const TIMELOCK_DELAY: u64 = 600;
const VOTING_DELAY: u64 = 1;
const VOTING_PERIOD: u64 = 20;
const QUORUM_BPS: u64 = 400;
const THRESHOLD_BPS: u64 = 100;

fn dai(units: u64) -> BigUint<StaticApi> {
    BigUint::from(units) * BigUint::from(10u64).pow(18)
}

fn dai_num(units: u64) -> BigUint<StaticApi> {
    BigUint::from(units) * BigUint::from(10u64).pow(18)
}

fn world() -> ScenarioWorld {
    let mut world = ScenarioWorld::new();
    world.register_contract(TOKEN_CODE, continuous_token::ContractBuilder);
    world.register_contract(MARKET_CODE, lending_market_mock::ContractBuilder);
    world.register_contract(TIMELOCK_CODE, timelock::ContractBuilder);
    world.register_contract(GOVERNOR_CODE, governor::ContractBuilder);
    world
}

fn withdraw_interest_action(amount: BigUint<StaticApi>) -> ProposalAction<StaticApi> {
    let mut encoded_amount = ManagedBuffer::new();
    amount.top_encode(&mut encoded_amount).unwrap();
    let mut arguments = ManagedVec::new();
    arguments.push(encoded_amount);

    ProposalAction {
        target: TOKEN.to_managed_address(),
        value: BigUint::zero(),
        function: ManagedBuffer::from("withdrawInterest"),
        arguments,
    }
}

fn encoded_address(
    address: ManagedAddress<StaticApi>,
) -> ManagedVec<StaticApi, ManagedBuffer<StaticApi>> {
    let mut buffer = ManagedBuffer::new();
    address.top_encode(&mut buffer).unwrap();
    let mut arguments = ManagedVec::new();
    arguments.push(buffer);
    arguments
}

fn actions_of(
    actions: Vec<ProposalAction<StaticApi>>,
) -> MultiValueEncoded<StaticApi, ProposalAction<StaticApi>> {
    let mut encoded = MultiValueEncoded::new();
    for action in actions {
        encoded.push(action);
    }
    encoded
}

struct GovernanceState {
    world: ScenarioWorld,
}

impl GovernanceState {
    /// Deploys the token, its market, the timelock and the governor, then
    /// hands the timelock to the governor and the token to the timelock.
    fn new() -> Self {
        let mut world = world();
        world
            .account(OWNER)
            .nonce(1)
            .esdt_balance(DAI, dai_num(100_000));
        world.account(VOTER).nonce(1);
        world.account(OUTSIDER).nonce(1);
        world
            .account(BORROWER)
            .nonce(1)
            .esdt_balance(DAI, dai_num(10_000));
        world
            .current_block()
            .block_nonce(START_BLOCK)
            .block_timestamp(HANDOFF_TIME);

        world
            .tx()
            .from(OWNER)
            .typed(LendingMarketMockProxy)
            .init(DAI)
            .code(MARKET_CODE)
            .code_metadata(CodeMetadata::PAYABLE_BY_SC)
            .new_address(MARKET)
            .run();

        world
            .tx()
            .from(OWNER)
            .typed(ContinuousTokenProxy)
            .init(
                "Continuous",
                "CONT",
                dai(1_000),
                dai(1_000),
                500_000u32,
                DAI,
                MARKET,
                CDAI,
            )
            .code(TOKEN_CODE)
            .code_metadata(CodeMetadata::PAYABLE | CodeMetadata::PAYABLE_BY_SC)
            .new_address(TOKEN)
            .run();

        world
            .tx()
            .from(OWNER)
            .to(TOKEN)
            .typed(ContinuousTokenProxy)
            .activate(OptionalValue::<ManagedAddress<StaticApi>>::None)
            .single_esdt(&DAI.to_token_identifier(), 0, &dai(1_000))
            .run();

        world
            .tx()
            .from(OWNER)
            .typed(TimelockProxy)
            .init(OWNER, TIMELOCK_DELAY)
            .code(TIMELOCK_CODE)
            .code_metadata(CodeMetadata::PAYABLE_BY_SC)
            .new_address(TIMELOCK)
            .run();

        world
            .tx()
            .from(OWNER)
            .typed(GovernorProxy)
            .init(
                TIMELOCK,
                TOKEN,
                VOTING_DELAY,
                VOTING_PERIOD,
                QUORUM_BPS,
                THRESHOLD_BPS,
                OptionalValue::Some(OWNER.to_managed_address::<StaticApi>()),
            )
            .code(GOVERNOR_CODE)
            .new_address(GOVERNOR)
            .run();

        // the deployer is the first admin and nominates the governor
        // through its own queue
        let handoff_eta = HANDOFF_TIME + TIMELOCK_DELAY;
        world
            .tx()
            .from(OWNER)
            .to(TIMELOCK)
            .typed(TimelockProxy)
            .queue_transaction(
                TIMELOCK,
                0u64,
                "setPendingAdmin",
                encoded_address(GOVERNOR.to_managed_address()),
                handoff_eta,
            )
            .run();
        world.current_block().block_timestamp(handoff_eta);
        world
            .tx()
            .from(OWNER)
            .to(TIMELOCK)
            .typed(TimelockProxy)
            .execute_transaction(
                TIMELOCK,
                0u64,
                "setPendingAdmin",
                encoded_address(GOVERNOR.to_managed_address()),
                handoff_eta,
            )
            .run();

        // anyone may complete the hand-off
        world
            .tx()
            .from(OUTSIDER)
            .to(GOVERNOR)
            .typed(GovernorProxy)
            .accept_admin()
            .run();

        world
            .tx()
            .from(OWNER)
            .to(TOKEN)
            .typed(ContinuousTokenProxy)
            .transfer_ownership(TIMELOCK)
            .run();

        world.current_block().block_timestamp(START_TIME);
        Self { world }
    }

    fn accrue_interest(&mut self, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(BORROWER)
            .to(MARKET)
            .typed(LendingMarketMockProxy)
            .accrue_interest(TOKEN)
            .single_esdt(&DAI.to_token_identifier(), 0, &amount)
            .run();
    }

    fn transfer_tokens(&mut self, from: TestAddress, to: TestAddress, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from)
            .to(TOKEN)
            .typed(ContinuousTokenProxy)
            .transfer(to, amount)
            .run();
    }

    fn propose(&mut self, proposer: TestAddress, actions: Vec<ProposalAction<StaticApi>>) -> u64 {
        self.world
            .tx()
            .from(proposer)
            .to(GOVERNOR)
            .typed(GovernorProxy)
            .propose("Withdraw accrued interest", actions_of(actions))
            .returns(ReturnsResult)
            .run()
    }

    fn vote(&mut self, voter: TestAddress, proposal_id: u64, support: bool) {
        self.world
            .tx()
            .from(voter)
            .to(GOVERNOR)
            .typed(GovernorProxy)
            .cast_vote(proposal_id, support)
            .run();
    }

    fn queue(&mut self, proposal_id: u64) {
        self.world
            .tx()
            .from(OUTSIDER)
            .to(GOVERNOR)
            .typed(GovernorProxy)
            .queue(proposal_id)
            .run();
    }

    /// Runs as a transaction: state reads the timelock grace period
    /// through a cross-contract call.
    fn state(&mut self, proposal_id: u64) -> ProposalState {
        self.world
            .tx()
            .from(OUTSIDER)
            .to(GOVERNOR)
            .typed(GovernorProxy)
            .state(proposal_id)
            .returns(ReturnsResult)
            .run()
    }

    fn set_block(&mut self, nonce: u64) {
        self.world.current_block().block_nonce(nonce).block_timestamp(START_TIME);
    }

    fn set_time(&mut self, timestamp: u64) {
        self.world
            .current_block()
            .block_nonce(START_BLOCK + VOTING_DELAY + VOTING_PERIOD + 1)
            .block_timestamp(timestamp);
    }

    /// Proposes the interest withdrawal and carries it through a winning vote.
    fn succeeded_proposal(&mut self) -> u64 {
        let proposal_id = self.propose(OWNER, vec![withdraw_interest_action(dai(50))]);
        self.set_block(START_BLOCK + VOTING_DELAY + 1);
        self.vote(OWNER, proposal_id, true);
        self.set_block(START_BLOCK + VOTING_DELAY + VOTING_PERIOD + 1);
        proposal_id
    }
}

// ============================================================
// Full lifecycle
// ============================================================

#[test]
fn test_interest_withdrawal_through_governance() {
    let mut state = GovernanceState::new();
    state.accrue_interest(dai(50));

    let proposal_id = state.propose(OWNER, vec![withdraw_interest_action(dai(50))]);
    assert_eq!(proposal_id, 1);
    assert_eq!(state.state(proposal_id), ProposalState::Pending);

    // voting opens at the start block
    state.set_block(START_BLOCK + VOTING_DELAY);
    assert_eq!(state.state(proposal_id), ProposalState::Active);

    state.vote(OWNER, proposal_id, true);
    let receipt = state
        .world
        .query()
        .to(GOVERNOR)
        .typed(GovernorProxy)
        .get_receipt(proposal_id, OWNER)
        .returns(ReturnsResult)
        .run();
    assert!(receipt.has_voted && receipt.support);
    assert_eq!(receipt.votes, dai(1_000));

    state
        .world
        .tx()
        .from(OWNER)
        .to(GOVERNOR)
        .typed(GovernorProxy)
        .cast_vote(proposal_id, true)
        .returns(ExpectError(4, "Voter already voted"))
        .run();

    // the end block itself is still inside the window
    state.set_block(START_BLOCK + VOTING_DELAY + VOTING_PERIOD);
    assert_eq!(state.state(proposal_id), ProposalState::Active);
    state
        .world
        .tx()
        .from(OUTSIDER)
        .to(GOVERNOR)
        .typed(GovernorProxy)
        .queue(proposal_id)
        .returns(ExpectError(4, "Proposal can only be queued if it is succeeded"))
        .run();

    state.set_block(START_BLOCK + VOTING_DELAY + VOTING_PERIOD + 1);
    assert_eq!(state.state(proposal_id), ProposalState::Succeeded);
    state.queue(proposal_id);
    assert_eq!(state.state(proposal_id), ProposalState::Queued);

    let eta = START_TIME + TIMELOCK_DELAY;
    let proposal = state
        .world
        .query()
        .to(GOVERNOR)
        .typed(GovernorProxy)
        .get_proposal(proposal_id)
        .returns(ReturnsResult)
        .run();
    assert_eq!(proposal.eta, eta);
    assert_eq!(proposal.for_votes, dai(1_000));

    // the timelock refuses before eta
    state
        .world
        .tx()
        .from(OUTSIDER)
        .to(GOVERNOR)
        .typed(GovernorProxy)
        .execute(proposal_id)
        .returns(ExpectStatus(4))
        .run();

    state.set_time(eta);
    state
        .world
        .tx()
        .from(OUTSIDER)
        .to(GOVERNOR)
        .typed(GovernorProxy)
        .execute(proposal_id)
        .run();

    assert_eq!(state.state(proposal_id), ProposalState::Executed);
    state
        .world
        .check_account(TIMELOCK)
        .esdt_balance(DAI, dai_num(50));

    state
        .world
        .tx()
        .from(OUTSIDER)
        .to(GOVERNOR)
        .typed(GovernorProxy)
        .execute(proposal_id)
        .returns(ExpectError(4, "Proposal can only be executed if it is queued"))
        .run();
}

#[test]
fn test_token_treasury_is_locked_to_timelock() {
    let mut state = GovernanceState::new();
    state.accrue_interest(dai(50));

    state
        .world
        .tx()
        .from(OWNER)
        .to(TOKEN)
        .typed(ContinuousTokenProxy)
        .withdraw_interest(dai(50))
        .returns(ExpectError(4, "Caller is not the treasury"))
        .run();

    state
        .world
        .tx()
        .from(OWNER)
        .to(TIMELOCK)
        .typed(TimelockProxy)
        .set_pending_admin(OWNER)
        .returns(ExpectError(4, "Call must come from Timelock"))
        .run();
}

#[test]
fn test_expired_proposal_cannot_execute() {
    let mut state = GovernanceState::new();
    state.accrue_interest(dai(50));
    let proposal_id = state.succeeded_proposal();
    state.queue(proposal_id);

    // the last second of the grace period still counts as queued
    state.set_time(START_TIME + TIMELOCK_DELAY + timelock::GRACE_PERIOD);
    assert_eq!(state.state(proposal_id), ProposalState::Queued);

    state.set_time(START_TIME + TIMELOCK_DELAY + timelock::GRACE_PERIOD + 1);
    assert_eq!(state.state(proposal_id), ProposalState::Expired);

    state
        .world
        .tx()
        .from(OUTSIDER)
        .to(GOVERNOR)
        .typed(GovernorProxy)
        .execute(proposal_id)
        .returns(ExpectError(4, "Proposal can only be executed if it is queued"))
        .run();
}

#[test]
fn test_execute_in_last_second_of_grace_period() {
    let mut state = GovernanceState::new();
    state.accrue_interest(dai(50));
    let proposal_id = state.succeeded_proposal();
    state.queue(proposal_id);

    state.set_time(START_TIME + TIMELOCK_DELAY + timelock::GRACE_PERIOD);
    state
        .world
        .tx()
        .from(OUTSIDER)
        .to(GOVERNOR)
        .typed(GovernorProxy)
        .execute(proposal_id)
        .run();

    assert_eq!(state.state(proposal_id), ProposalState::Executed);
    state
        .world
        .check_account(TIMELOCK)
        .esdt_balance(DAI, dai_num(50));
}

#[test]
fn test_failed_action_leaves_proposal_queued() {
    let mut state = GovernanceState::new();
    // no interest accrued: the withdrawal exceeds the differential
    let proposal_id = state.succeeded_proposal();
    state.queue(proposal_id);

    state.set_time(START_TIME + TIMELOCK_DELAY);
    state
        .world
        .tx()
        .from(OUTSIDER)
        .to(GOVERNOR)
        .typed(GovernorProxy)
        .execute(proposal_id)
        .returns(ExpectStatus(4))
        .run();

    assert_eq!(state.state(proposal_id), ProposalState::Queued);
}

// ============================================================
// Proposal creation
// ============================================================

#[test]
fn test_propose_requires_votes_at_threshold() {
    let mut state = GovernanceState::new();

    // 1% of 1000 is 10
    state.transfer_tokens(OWNER, VOTER, dai(9));
    state
        .world
        .tx()
        .from(VOTER)
        .to(GOVERNOR)
        .typed(GovernorProxy)
        .propose("Too small", actions_of(vec![withdraw_interest_action(dai(1))]))
        .returns(ExpectError(4, "Proposer votes below proposal threshold"))
        .run();

    state.transfer_tokens(OWNER, VOTER, dai(1));
    let proposal_id = state.propose(VOTER, vec![withdraw_interest_action(dai(1))]);
    assert_eq!(proposal_id, 1);
    state
        .world
        .tx()
        .from(OUTSIDER)
        .to(GOVERNOR)
        .typed(GovernorProxy)
        .proposal_threshold()
        .returns(ExpectValue(dai(10)))
        .run();
}

#[test]
fn test_propose_bounds_action_count() {
    let mut state = GovernanceState::new();

    state
        .world
        .tx()
        .from(OWNER)
        .to(GOVERNOR)
        .typed(GovernorProxy)
        .propose("Empty", actions_of(Vec::new()))
        .returns(ExpectError(4, "Must provide actions"))
        .run();

    let too_many: Vec<ProposalAction<StaticApi>> = (1..=11u64)
        .map(|units| withdraw_interest_action(dai(units)))
        .collect();
    state
        .world
        .tx()
        .from(OWNER)
        .to(GOVERNOR)
        .typed(GovernorProxy)
        .propose("Too many", actions_of(too_many))
        .returns(ExpectError(4, "Too many actions"))
        .run();

    let ten: Vec<ProposalAction<StaticApi>> = (1..=10u64)
        .map(|units| withdraw_interest_action(dai(units)))
        .collect();
    assert_eq!(state.propose(OWNER, ten), 1);
    state
        .world
        .query()
        .to(GOVERNOR)
        .typed(GovernorProxy)
        .proposal_count()
        .returns(ExpectValue(1u64))
        .run();
}

#[test]
fn test_one_live_proposal_per_proposer() {
    let mut state = GovernanceState::new();
    state.propose(OWNER, vec![withdraw_interest_action(dai(1))]);

    state
        .world
        .tx()
        .from(OWNER)
        .to(GOVERNOR)
        .typed(GovernorProxy)
        .propose("Second", actions_of(vec![withdraw_interest_action(dai(2))]))
        .returns(ExpectError(4, "Proposer already has an active or pending proposal"))
        .run();

    // once voting closed a new proposal is accepted
    state.set_block(START_BLOCK + VOTING_DELAY + VOTING_PERIOD + 1);
    assert_eq!(state.propose(OWNER, vec![withdraw_interest_action(dai(2))]), 2);
    state
        .world
        .query()
        .to(GOVERNOR)
        .typed(GovernorProxy)
        .latest_proposal_id(OWNER)
        .returns(ExpectValue(2u64))
        .run();
}

// ============================================================
// Voting outcome
// ============================================================

#[test]
fn test_majority_against_defeats_proposal() {
    let mut state = GovernanceState::new();
    state.transfer_tokens(OWNER, VOTER, dai(600));

    let proposal_id = state.propose(OWNER, vec![withdraw_interest_action(dai(1))]);
    state.set_block(START_BLOCK + VOTING_DELAY + 1);
    state.vote(OWNER, proposal_id, true);
    state.vote(VOTER, proposal_id, false);

    state.set_block(START_BLOCK + VOTING_DELAY + VOTING_PERIOD + 1);
    assert_eq!(state.state(proposal_id), ProposalState::Defeated);
    state
        .world
        .tx()
        .from(OUTSIDER)
        .to(GOVERNOR)
        .typed(GovernorProxy)
        .queue(proposal_id)
        .returns(ExpectError(4, "Proposal can only be queued if it is succeeded"))
        .run();
}

#[test]
fn test_majority_without_quorum_is_defeated() {
    let mut state = GovernanceState::new();
    // quorum is 4% of 1000 = 40
    state.transfer_tokens(OWNER, VOTER, dai(30));

    let proposal_id = state.propose(VOTER, vec![withdraw_interest_action(dai(1))]);
    state.set_block(START_BLOCK + VOTING_DELAY + 1);
    state.vote(VOTER, proposal_id, true);

    state.set_block(START_BLOCK + VOTING_DELAY + VOTING_PERIOD + 1);
    assert_eq!(state.state(proposal_id), ProposalState::Defeated);
}

#[test]
fn test_votes_outside_window_are_rejected() {
    let mut state = GovernanceState::new();
    let proposal_id = state.propose(OWNER, vec![withdraw_interest_action(dai(1))]);

    state
        .world
        .tx()
        .from(OWNER)
        .to(GOVERNOR)
        .typed(GovernorProxy)
        .cast_vote(proposal_id, true)
        .returns(ExpectError(4, "Voting is closed"))
        .run();

    state.set_block(START_BLOCK + VOTING_DELAY + VOTING_PERIOD + 1);
    state
        .world
        .tx()
        .from(OWNER)
        .to(GOVERNOR)
        .typed(GovernorProxy)
        .cast_vote(proposal_id, true)
        .returns(ExpectError(4, "Voting is closed"))
        .run();
}

#[test]
fn test_unknown_proposal_id() {
    let mut state = GovernanceState::new();
    state
        .world
        .tx()
        .from(OUTSIDER)
        .to(GOVERNOR)
        .typed(GovernorProxy)
        .state(7u64)
        .returns(ExpectError(4, "Invalid proposal id"))
        .run();
}

// ============================================================
// Cancellation
// ============================================================

#[test]
fn test_guardian_cancels_queued_proposal() {
    let mut state = GovernanceState::new();
    state.accrue_interest(dai(50));
    let proposal_id = state.succeeded_proposal();
    state.queue(proposal_id);

    let eta = START_TIME + TIMELOCK_DELAY;
    let action = withdraw_interest_action(dai(50));
    state
        .world
        .query()
        .to(TIMELOCK)
        .typed(TimelockProxy)
        .is_queued(
            action.target.clone(),
            action.value.clone(),
            action.function.clone(),
            action.arguments.clone(),
            eta,
        )
        .returns(ExpectValue(true))
        .run();

    state
        .world
        .tx()
        .from(OUTSIDER)
        .to(GOVERNOR)
        .typed(GovernorProxy)
        .cancel(proposal_id)
        .returns(ExpectError(4, "Proposer at or above threshold"))
        .run();

    // OWNER is the guardian
    state
        .world
        .tx()
        .from(OWNER)
        .to(GOVERNOR)
        .typed(GovernorProxy)
        .cancel(proposal_id)
        .run();

    assert_eq!(state.state(proposal_id), ProposalState::Canceled);
    state
        .world
        .query()
        .to(TIMELOCK)
        .typed(TimelockProxy)
        .is_queued(action.target, action.value, action.function, action.arguments, eta)
        .returns(ExpectValue(false))
        .run();
}

#[test]
fn test_anyone_cancels_once_proposer_drops_below_threshold() {
    let mut state = GovernanceState::new();
    state.transfer_tokens(OWNER, VOTER, dai(20));
    let proposal_id = state.propose(VOTER, vec![withdraw_interest_action(dai(1))]);

    // holding exactly the threshold still protects the proposal
    state.transfer_tokens(VOTER, OWNER, dai(10));
    state
        .world
        .tx()
        .from(OUTSIDER)
        .to(GOVERNOR)
        .typed(GovernorProxy)
        .cancel(proposal_id)
        .returns(ExpectError(4, "Proposer at or above threshold"))
        .run();

    state.transfer_tokens(VOTER, OWNER, dai(1));
    state
        .world
        .tx()
        .from(OUTSIDER)
        .to(GOVERNOR)
        .typed(GovernorProxy)
        .cancel(proposal_id)
        .run();

    assert_eq!(state.state(proposal_id), ProposalState::Canceled);
}

#[test]
fn test_executed_proposal_cannot_be_canceled() {
    let mut state = GovernanceState::new();
    state.accrue_interest(dai(50));
    let proposal_id = state.succeeded_proposal();
    state.queue(proposal_id);
    state.set_time(START_TIME + TIMELOCK_DELAY);
    state
        .world
        .tx()
        .from(OUTSIDER)
        .to(GOVERNOR)
        .typed(GovernorProxy)
        .execute(proposal_id)
        .run();

    state
        .world
        .tx()
        .from(OWNER)
        .to(GOVERNOR)
        .typed(GovernorProxy)
        .cancel(proposal_id)
        .returns(ExpectError(4, "Cannot cancel executed proposal"))
        .run();
}

#[test]
fn test_guardian_abdicates() {
    let mut state = GovernanceState::new();

    state
        .world
        .tx()
        .from(OUTSIDER)
        .to(GOVERNOR)
        .typed(GovernorProxy)
        .abdicate()
        .returns(ExpectError(4, "Sender must be gov guardian"))
        .run();

    state
        .world
        .tx()
        .from(OWNER)
        .to(GOVERNOR)
        .typed(GovernorProxy)
        .abdicate()
        .run();

    state
        .world
        .tx()
        .from(OWNER)
        .to(GOVERNOR)
        .typed(GovernorProxy)
        .abdicate()
        .returns(ExpectError(4, "Sender must be gov guardian"))
        .run();
}
