use multiversx_sc::proxy_imports::*;

use crate::types::{Proposal, ProposalAction, ProposalState, Receipt};

pub struct GovernorProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for GovernorProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = GovernorProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        GovernorProxyMethods { wrapped_tx: tx }
    }
}

pub struct GovernorProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

#[rustfmt::skip]
impl<Env, From, Gas> GovernorProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    #[allow(clippy::too_many_arguments)]
    #[allow(clippy::type_complexity)]
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<u64>,
        Arg3: ProxyArg<u64>,
        Arg4: ProxyArg<u64>,
        Arg5: ProxyArg<u64>,
        Arg6: ProxyArg<OptionalValue<ManagedAddress<Env::Api>>>,
    >(
        self,
        timelock: Arg0,
        token: Arg1,
        voting_delay: Arg2,
        voting_period: Arg3,
        quorum_bps: Arg4,
        proposal_threshold_bps: Arg5,
        guardian: Arg6,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&timelock)
            .argument(&token)
            .argument(&voting_delay)
            .argument(&voting_period)
            .argument(&quorum_bps)
            .argument(&proposal_threshold_bps)
            .argument(&guardian)
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> GovernorProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn propose<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<MultiValueEncoded<Env::Api, ProposalAction<Env::Api>>>,
    >(
        self,
        description: Arg0,
        actions: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("propose")
            .argument(&description)
            .argument(&actions)
            .original_result()
    }

    pub fn cast_vote<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<bool>,
    >(
        self,
        proposal_id: Arg0,
        support: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("castVote")
            .argument(&proposal_id)
            .argument(&support)
            .original_result()
    }

    pub fn queue<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("queue")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn execute<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("execute")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn cancel<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("cancel")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn accept_admin(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("acceptAdmin")
            .original_result()
    }

    pub fn abdicate(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("abdicate")
            .original_result()
    }

    pub fn state<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ProposalState> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("state")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn quorum_votes(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("quorumVotes")
            .original_result()
    }

    pub fn proposal_threshold(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("proposalThreshold")
            .original_result()
    }

    pub fn get_proposal<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Proposal<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposal")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn get_actions<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ProposalAction<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getActions")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn get_receipt<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        proposal_id: Arg0,
        voter: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Receipt<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getReceipt")
            .argument(&proposal_id)
            .argument(&voter)
            .original_result()
    }

    pub fn proposal_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("proposalCount")
            .original_result()
    }

    pub fn latest_proposal_id<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        proposer: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("latestProposalId")
            .argument(&proposer)
            .original_result()
    }

    pub fn guardian(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getGuardian")
            .original_result()
    }

    pub fn voting_delay(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("votingDelay")
            .original_result()
    }

    pub fn voting_period(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("votingPeriod")
            .original_result()
    }
}
