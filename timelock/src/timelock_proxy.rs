use multiversx_sc::proxy_imports::*;

pub struct TimelockProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for TimelockProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = TimelockProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        TimelockProxyMethods { wrapped_tx: tx }
    }
}

pub struct TimelockProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

#[rustfmt::skip]
impl<Env, From, Gas> TimelockProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        admin: Arg0,
        delay: Arg1,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&admin)
            .argument(&delay)
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> TimelockProxyMethods<Env, From, To, Gas>
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

    pub fn set_delay<Arg0: ProxyArg<u64>>(
        self,
        delay: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setDelay")
            .argument(&delay)
            .original_result()
    }

    pub fn set_pending_admin<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        pending_admin: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setPendingAdmin")
            .argument(&pending_admin)
            .original_result()
    }

    pub fn accept_admin(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("acceptAdmin")
            .original_result()
    }

    pub fn queue_transaction<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg3: ProxyArg<ManagedVec<Env::Api, ManagedBuffer<Env::Api>>>,
        Arg4: ProxyArg<u64>,
    >(
        self,
        target: Arg0,
        value: Arg1,
        function: Arg2,
        arguments: Arg3,
        eta: Arg4,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedByteArray<Env::Api, 32>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("queueTransaction")
            .argument(&target)
            .argument(&value)
            .argument(&function)
            .argument(&arguments)
            .argument(&eta)
            .original_result()
    }

    pub fn cancel_transaction<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg3: ProxyArg<ManagedVec<Env::Api, ManagedBuffer<Env::Api>>>,
        Arg4: ProxyArg<u64>,
    >(
        self,
        target: Arg0,
        value: Arg1,
        function: Arg2,
        arguments: Arg3,
        eta: Arg4,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("cancelTransaction")
            .argument(&target)
            .argument(&value)
            .argument(&function)
            .argument(&arguments)
            .argument(&eta)
            .original_result()
    }

    pub fn execute_transaction<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg3: ProxyArg<ManagedVec<Env::Api, ManagedBuffer<Env::Api>>>,
        Arg4: ProxyArg<u64>,
    >(
        self,
        target: Arg0,
        value: Arg1,
        function: Arg2,
        arguments: Arg3,
        eta: Arg4,
    ) -> TxTypedCall<Env, From, To, (), Gas, ManagedVec<Env::Api, ManagedBuffer<Env::Api>>> {
        self.wrapped_tx
            .raw_call("executeTransaction")
            .argument(&target)
            .argument(&value)
            .argument(&function)
            .argument(&arguments)
            .argument(&eta)
            .original_result()
    }

    pub fn get_tx_hash<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg3: ProxyArg<ManagedVec<Env::Api, ManagedBuffer<Env::Api>>>,
        Arg4: ProxyArg<u64>,
    >(
        self,
        target: Arg0,
        value: Arg1,
        function: Arg2,
        arguments: Arg3,
        eta: Arg4,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedByteArray<Env::Api, 32>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTxHash")
            .argument(&target)
            .argument(&value)
            .argument(&function)
            .argument(&arguments)
            .argument(&eta)
            .original_result()
    }

    pub fn is_queued<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg3: ProxyArg<ManagedVec<Env::Api, ManagedBuffer<Env::Api>>>,
        Arg4: ProxyArg<u64>,
    >(
        self,
        target: Arg0,
        value: Arg1,
        function: Arg2,
        arguments: Arg3,
        eta: Arg4,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isQueued")
            .argument(&target)
            .argument(&value)
            .argument(&function)
            .argument(&arguments)
            .argument(&eta)
            .original_result()
    }

    pub fn grace_period(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("gracePeriod")
            .original_result()
    }

    pub fn admin(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("admin")
            .original_result()
    }

    pub fn pending_admin(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("pendingAdmin")
            .original_result()
    }

    pub fn delay(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("delay")
            .original_result()
    }
}
