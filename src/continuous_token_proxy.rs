use multiversx_sc::proxy_imports::*;

pub struct ContinuousTokenProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for ContinuousTokenProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = ContinuousTokenProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        ContinuousTokenProxyMethods { wrapped_tx: tx }
    }
}

pub struct ContinuousTokenProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

#[rustfmt::skip]
impl<Env, From, Gas> ContinuousTokenProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    #[allow(clippy::too_many_arguments)]
    #[allow(clippy::type_complexity)]
    pub fn init<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
        Arg3: ProxyArg<BigUint<Env::Api>>,
        Arg4: ProxyArg<u32>,
        Arg5: ProxyArg<TokenIdentifier<Env::Api>>,
        Arg6: ProxyArg<ManagedAddress<Env::Api>>,
        Arg7: ProxyArg<TokenIdentifier<Env::Api>>,
    >(
        self,
        name: Arg0,
        symbol: Arg1,
        initial_supply: Arg2,
        initial_reserve: Arg3,
        reserve_ratio: Arg4,
        reserve_token: Arg5,
        lending_market: Arg6,
        market_receipt_token: Arg7,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&name)
            .argument(&symbol)
            .argument(&initial_supply)
            .argument(&initial_reserve)
            .argument(&reserve_ratio)
            .argument(&reserve_token)
            .argument(&lending_market)
            .argument(&market_receipt_token)
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> ContinuousTokenProxyMethods<Env, From, To, Gas>
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

#[rustfmt::skip]
impl<Env, From, To, Gas> ContinuousTokenProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    // ── Curve entry points ──

    pub fn activate<Arg0: ProxyArg<OptionalValue<ManagedAddress<Env::Api>>>>(
        self,
        initial_holder: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("activate")
            .argument(&initial_holder)
            .original_result()
    }

    pub fn mint<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        min_mint_amount: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .raw_call("mint")
            .argument(&min_mint_amount)
            .original_result()
    }

    pub fn burn<Arg0: ProxyArg<BigUint<Env::Api>>, Arg1: ProxyArg<BigUint<Env::Api>>>(
        self,
        burn_amount: Arg0,
        min_return_amount: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("burn")
            .argument(&burn_amount)
            .argument(&min_return_amount)
            .original_result()
    }

    // ── Transfers ──

    pub fn transfer<Arg0: ProxyArg<ManagedAddress<Env::Api>>, Arg1: ProxyArg<BigUint<Env::Api>>>(
        self,
        to: Arg0,
        amount: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
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
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("transferFrom")
            .argument(&from)
            .argument(&to)
            .argument(&amount)
            .original_result()
    }

    pub fn approve<Arg0: ProxyArg<ManagedAddress<Env::Api>>, Arg1: ProxyArg<BigUint<Env::Api>>>(
        self,
        spender: Arg0,
        amount: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("approve")
            .argument(&spender)
            .argument(&amount)
            .original_result()
    }

    pub fn delegate<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        delegatee: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("delegate")
            .argument(&delegatee)
            .original_result()
    }

    // ── Treasury ──

    pub fn transfer_ownership<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        new_owner: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("transferOwnership")
            .argument(&new_owner)
            .original_result()
    }

    pub fn withdraw_interest<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        amount: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdrawInterest")
            .argument(&amount)
            .original_result()
    }

    pub fn withdraw_token<
        Arg0: ProxyArg<EgldOrEsdtTokenIdentifier<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        asset: Arg0,
        amount: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdrawToken")
            .argument(&asset)
            .argument(&amount)
            .original_result()
    }

    // ── Views ──

    pub fn reserve_differential(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue2<bool, BigUint<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("reserveDifferential")
            .original_result()
    }

    pub fn reserve_interest(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("reserveInterest")
            .original_result()
    }

    pub fn reserve_balance(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("reserveBalance")
            .original_result()
    }

    pub fn is_activated(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isActivated")
            .original_result()
    }

    pub fn current_price(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("currentPrice")
            .original_result()
    }

    pub fn calculate_mint_return<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        deposit: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("calculateMintReturn")
            .argument(&deposit)
            .original_result()
    }

    pub fn calculate_burn_return<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        burn_amount: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("calculateBurnReturn")
            .argument(&burn_amount)
            .original_result()
    }

    pub fn total_supply(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("totalSupply")
            .original_result()
    }

    pub fn balance_of<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        holder: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("balanceOf")
            .argument(&holder)
            .original_result()
    }

    pub fn allowance<Arg0: ProxyArg<ManagedAddress<Env::Api>>, Arg1: ProxyArg<ManagedAddress<Env::Api>>>(
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

    pub fn get_current_votes<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        holder: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCurrentVotes")
            .argument(&holder)
            .original_result()
    }

    pub fn delegates<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        holder: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("delegates")
            .argument(&holder)
            .original_result()
    }

    pub fn owner(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("owner")
            .original_result()
    }

    pub fn decimals(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u8> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("decimals")
            .original_result()
    }

    pub fn name(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedBuffer<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("name")
            .original_result()
    }

    pub fn symbol(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedBuffer<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("symbol")
            .original_result()
    }

    pub fn reserve_ratio(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u32> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getReserveRatio")
            .original_result()
    }
}
