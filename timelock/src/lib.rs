#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod timelock_proxy;

// ============================================================
// Constants
// ============================================================

/// How long a transaction stays executable after its eta: 14 days.
pub const GRACE_PERIOD: u64 = 14 * 86_400;

/// Shortest allowed delay: 10 minutes.
pub const MINIMUM_DELAY: u64 = 600;

/// Longest allowed delay: 30 days.
pub const MAXIMUM_DELAY: u64 = 30 * 86_400;

const DELAY_OUT_OF_RANGE: &str = "Delay must be between minimum and maximum delay";
const NOT_ADMIN: &str = "Call must come from admin";
const NOT_SELF: &str = "Call must come from Timelock";
const NOT_PENDING_ADMIN: &str = "Call must come from pendingAdmin";
const ZERO_ADDRESS: &str = "Zero address not allowed";
const ETA_BEFORE_DELAY: &str = "Estimated execution time must satisfy delay";
const NOT_QUEUED: &str = "Transaction hasn't been queued";
const STALE_OR_PREMATURE: &str = "Transaction is stale or premature";
const ENCODING_FAILED: &str = "Could not encode transaction";

/// Identity of a queued call. Its keccak256 is the queue key.
#[derive(TopEncode)]
pub struct QueuedCall<M: ManagedTypeApi> {
    pub target: ManagedAddress<M>,
    pub value: BigUint<M>,
    pub function: ManagedBuffer<M>,
    pub arguments: ManagedVec<M, ManagedBuffer<M>>,
    pub eta: u64,
}

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait Timelock {
    #[init]
    fn init(&self, admin: ManagedAddress, delay: u64) {
        require!(!admin.is_zero(), ZERO_ADDRESS);
        require!(
            (MINIMUM_DELAY..=MAXIMUM_DELAY).contains(&delay),
            DELAY_OUT_OF_RANGE
        );
        self.admin().set(&admin);
        self.delay().set(delay);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Funds the EGLD values forwarded by executed transactions.
    #[payable("EGLD")]
    #[endpoint(deposit)]
    fn deposit(&self) {}

    // ========================================================
    // Self-administered parameters
    // Reachable only through a queued-and-executed transaction
    // that targets this contract.
    // ========================================================

    #[endpoint(setDelay)]
    fn set_delay(&self, delay: u64) {
        self.require_self();
        require!(
            (MINIMUM_DELAY..=MAXIMUM_DELAY).contains(&delay),
            DELAY_OUT_OF_RANGE
        );
        self.delay().set(delay);
        self.new_delay_event(delay);
    }

    #[endpoint(setPendingAdmin)]
    fn set_pending_admin(&self, pending_admin: ManagedAddress) {
        self.require_self();
        require!(!pending_admin.is_zero(), ZERO_ADDRESS);
        self.pending_admin().set(&pending_admin);
        self.new_pending_admin_event(&pending_admin);
    }

    #[endpoint(acceptAdmin)]
    fn accept_admin(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            !self.pending_admin().is_empty() && caller == self.pending_admin().get(),
            NOT_PENDING_ADMIN
        );
        self.admin().set(&caller);
        self.pending_admin().clear();
        self.new_admin_event(&caller);
    }

    // ========================================================
    // Queue
    // ========================================================

    #[endpoint(queueTransaction)]
    fn queue_transaction(
        &self,
        target: ManagedAddress,
        value: BigUint,
        function: ManagedBuffer,
        arguments: ManagedVec<ManagedBuffer>,
        eta: u64,
    ) -> ManagedByteArray<Self::Api, 32> {
        self.require_admin();
        let earliest = self.blockchain().get_block_timestamp() + self.delay().get();
        require!(eta >= earliest, ETA_BEFORE_DELAY);

        let tx_hash = self.tx_hash(&target, &value, &function, &arguments, eta);
        self.queued_transactions(&tx_hash).set(true);

        self.queue_transaction_event(&tx_hash, &target, eta, &function);
        tx_hash
    }

    #[endpoint(cancelTransaction)]
    fn cancel_transaction(
        &self,
        target: ManagedAddress,
        value: BigUint,
        function: ManagedBuffer,
        arguments: ManagedVec<ManagedBuffer>,
        eta: u64,
    ) {
        self.require_admin();
        let tx_hash = self.tx_hash(&target, &value, &function, &arguments, eta);
        self.queued_transactions(&tx_hash).clear();

        self.cancel_transaction_event(&tx_hash, &target, eta, &function);
    }

    /// Runs a queued call whose eta has been reached and whose grace window
    /// has not closed. The entry is dequeued before the call is made. An
    /// empty `function` is a plain EGLD transfer of `value`.
    #[payable("EGLD")]
    #[endpoint(executeTransaction)]
    fn execute_transaction(
        &self,
        target: ManagedAddress,
        value: BigUint,
        function: ManagedBuffer,
        arguments: ManagedVec<ManagedBuffer>,
        eta: u64,
    ) -> ManagedVec<ManagedBuffer> {
        self.require_admin();
        let tx_hash = self.tx_hash(&target, &value, &function, &arguments, eta);
        require!(self.queued_transactions(&tx_hash).get(), NOT_QUEUED);

        let now = self.blockchain().get_block_timestamp();
        require!(
            now >= eta && now <= eta + GRACE_PERIOD,
            STALE_OR_PREMATURE
        );

        self.queued_transactions(&tx_hash).clear();

        let results = if function.is_empty() {
            self.tx().to(&target).egld(&value).transfer();
            ManagedVec::new()
        } else {
            self.tx()
                .to(&target)
                .egld(&value)
                .raw_call(function.clone())
                .arguments_raw(ManagedArgBuffer::from(arguments))
                .returns(ReturnsRawResult)
                .sync_call()
        };

        self.execute_transaction_event(&tx_hash, &target, eta, &function);
        results
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn tx_hash(
        &self,
        target: &ManagedAddress,
        value: &BigUint,
        function: &ManagedBuffer,
        arguments: &ManagedVec<ManagedBuffer>,
        eta: u64,
    ) -> ManagedByteArray<Self::Api, 32> {
        let call = QueuedCall::<Self::Api> {
            target: target.clone(),
            value: value.clone(),
            function: function.clone(),
            arguments: arguments.clone(),
            eta,
        };
        let mut encoded = ManagedBuffer::new();
        if call.top_encode(&mut encoded).is_err() {
            sc_panic!(ENCODING_FAILED);
        }
        self.crypto().keccak256(&encoded)
    }

    fn require_admin(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.admin().get(), NOT_ADMIN);
    }

    fn require_self(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.blockchain().get_sc_address(), NOT_SELF);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getTxHash)]
    fn get_tx_hash(
        &self,
        target: ManagedAddress,
        value: BigUint,
        function: ManagedBuffer,
        arguments: ManagedVec<ManagedBuffer>,
        eta: u64,
    ) -> ManagedByteArray<Self::Api, 32> {
        self.tx_hash(&target, &value, &function, &arguments, eta)
    }

    #[view(isQueued)]
    fn is_queued(
        &self,
        target: ManagedAddress,
        value: BigUint,
        function: ManagedBuffer,
        arguments: ManagedVec<ManagedBuffer>,
        eta: u64,
    ) -> bool {
        let tx_hash = self.tx_hash(&target, &value, &function, &arguments, eta);
        self.queued_transactions(&tx_hash).get()
    }

    #[view(gracePeriod)]
    fn grace_period(&self) -> u64 {
        GRACE_PERIOD
    }

    #[view(minimumDelay)]
    fn minimum_delay(&self) -> u64 {
        MINIMUM_DELAY
    }

    #[view(maximumDelay)]
    fn maximum_delay(&self) -> u64 {
        MAXIMUM_DELAY
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("newAdmin")]
    fn new_admin_event(&self, #[indexed] admin: &ManagedAddress);

    #[event("newPendingAdmin")]
    fn new_pending_admin_event(&self, #[indexed] pending_admin: &ManagedAddress);

    #[event("newDelay")]
    fn new_delay_event(&self, #[indexed] delay: u64);

    #[event("queueTransaction")]
    fn queue_transaction_event(
        &self,
        #[indexed] tx_hash: &ManagedByteArray<Self::Api, 32>,
        #[indexed] target: &ManagedAddress,
        #[indexed] eta: u64,
        function: &ManagedBuffer,
    );

    #[event("cancelTransaction")]
    fn cancel_transaction_event(
        &self,
        #[indexed] tx_hash: &ManagedByteArray<Self::Api, 32>,
        #[indexed] target: &ManagedAddress,
        #[indexed] eta: u64,
        function: &ManagedBuffer,
    );

    #[event("executeTransaction")]
    fn execute_transaction_event(
        &self,
        #[indexed] tx_hash: &ManagedByteArray<Self::Api, 32>,
        #[indexed] target: &ManagedAddress,
        #[indexed] eta: u64,
        function: &ManagedBuffer,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(admin)]
    #[storage_mapper("admin")]
    fn admin(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(pendingAdmin)]
    #[storage_mapper("pendingAdmin")]
    fn pending_admin(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(delay)]
    #[storage_mapper("delay")]
    fn delay(&self) -> SingleValueMapper<u64>;

    #[view(queuedTransactions)]
    #[storage_mapper("queuedTransactions")]
    fn queued_transactions(
        &self,
        tx_hash: &ManagedByteArray<Self::Api, 32>,
    ) -> SingleValueMapper<bool>;
}
