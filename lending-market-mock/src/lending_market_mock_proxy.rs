use multiversx_sc::proxy_imports::*;

pub struct LendingMarketMockProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for LendingMarketMockProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = LendingMarketMockProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        LendingMarketMockProxyMethods { wrapped_tx: tx }
    }
}

pub struct LendingMarketMockProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

#[rustfmt::skip]
impl<Env, From, Gas> LendingMarketMockProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<Arg0: ProxyArg<TokenIdentifier<Env::Api>>>(
        self,
        underlying: Arg0,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&underlying)
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> LendingMarketMockProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn deposit(self) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx.raw_call("deposit").original_result()
    }

    pub fn withdraw<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        amount: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdraw")
            .argument(&amount)
            .original_result()
    }

    pub fn redeemable_balance<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        account: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("redeemableBalance")
            .argument(&account)
            .original_result()
    }

    pub fn available_liquidity(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("availableLiquidity")
            .original_result()
    }

    pub fn accrue_interest<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        account: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("accrueInterest")
            .argument(&account)
            .original_result()
    }

    pub fn apply_loss<Arg0: ProxyArg<ManagedAddress<Env::Api>>, Arg1: ProxyArg<BigUint<Env::Api>>>(
        self,
        account: Arg0,
        amount: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("applyLoss")
            .argument(&account)
            .argument(&amount)
            .original_result()
    }

    pub fn set_liquidity_cap<Arg0: ProxyArg<OptionalValue<BigUint<Env::Api>>>>(
        self,
        cap: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setLiquidityCap")
            .argument(&cap)
            .original_result()
    }

    pub fn set_partial_fill<Arg0: ProxyArg<bool>>(
        self,
        enabled: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setPartialFill")
            .argument(&enabled)
            .original_result()
    }

    pub fn set_deposits_paused<Arg0: ProxyArg<bool>>(
        self,
        paused: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setDepositsPaused")
            .argument(&paused)
            .original_result()
    }
}
