#![no_std]

multiversx_sc::imports!();

pub mod lending_market_mock_proxy;

const WRONG_TOKEN: &str = "Only the underlying token is accepted";
const DEPOSIT_REJECTED: &str = "Deposit rejected";
const WITHDRAWAL_REJECTED: &str = "Withdrawal rejected";

// ============================================================
// Lending market test double
//
// Implements the three calls the reserve ledger depends on
// (deposit / withdraw / redeemableBalance) on top of a plain
// per-account ledger. Interest, market losses and illiquidity
// are injected by the test harness.
// ============================================================

#[multiversx_sc::contract]
pub trait LendingMarketMock {
    #[init]
    fn init(&self, underlying: TokenIdentifier) {
        self.underlying().set(&underlying);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // Market interface
    // ========================================================

    #[payable("*")]
    #[endpoint(deposit)]
    fn deposit(&self) {
        let payment = self.call_value().single_esdt();
        require!(payment.token_identifier == self.underlying().get(), WRONG_TOKEN);
        require!(!self.deposits_paused().get(), DEPOSIT_REJECTED);

        let caller = self.blockchain().get_caller();
        self.supplied(&caller).update(|supplied| *supplied += &payment.amount);
    }

    /// Pays out `amount` or fails. With partial fills enabled it pays out
    /// whatever liquidity is left instead of failing.
    #[endpoint(withdraw)]
    fn withdraw(&self, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        let supplied = self.supplied(&caller).get();
        require!(supplied >= amount, WITHDRAWAL_REJECTED);

        let available = self.available_liquidity();
        let paid_out = if amount <= available {
            amount
        } else {
            require!(self.partial_fill().get(), WITHDRAWAL_REJECTED);
            available
        };

        self.supplied(&caller).set(&supplied - &paid_out);
        if paid_out > 0u64 {
            self.send()
                .direct_esdt(&caller, &self.underlying().get(), 0, &paid_out);
        }
    }

    #[view(availableLiquidity)]
    fn available_liquidity(&self) -> BigUint {
        let cash = self.blockchain().get_sc_balance(
            &EgldOrEsdtTokenIdentifier::esdt(self.underlying().get()),
            0,
        );
        if self.liquidity_cap().is_empty() {
            return cash;
        }
        let cap = self.liquidity_cap().get();
        if cap < cash {
            cap
        } else {
            cash
        }
    }

    // ========================================================
    // Harness controls
    // ========================================================

    /// A borrower repaying interest that accrues to `account`.
    #[payable("*")]
    #[endpoint(accrueInterest)]
    fn accrue_interest(&self, account: ManagedAddress) {
        let payment = self.call_value().single_esdt();
        require!(payment.token_identifier == self.underlying().get(), WRONG_TOKEN);
        self.supplied(&account).update(|supplied| *supplied += &payment.amount);
    }

    /// Market-side loss written off against `account`.
    #[only_owner]
    #[endpoint(applyLoss)]
    fn apply_loss(&self, account: ManagedAddress, amount: BigUint) {
        self.supplied(&account).update(|supplied| {
            if *supplied > amount {
                *supplied -= &amount;
            } else {
                *supplied = BigUint::zero();
            }
        });
    }

    #[only_owner]
    #[endpoint(setLiquidityCap)]
    fn set_liquidity_cap(&self, cap: OptionalValue<BigUint>) {
        match cap.into_option() {
            Some(cap) => self.liquidity_cap().set(&cap),
            None => self.liquidity_cap().clear(),
        }
    }

    #[only_owner]
    #[endpoint(setPartialFill)]
    fn set_partial_fill(&self, enabled: bool) {
        self.partial_fill().set(enabled);
    }

    #[only_owner]
    #[endpoint(setDepositsPaused)]
    fn set_deposits_paused(&self, paused: bool) {
        self.deposits_paused().set(paused);
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getUnderlying)]
    #[storage_mapper("underlying")]
    fn underlying(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(redeemableBalance)]
    #[storage_mapper("supplied")]
    fn supplied(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("liquidityCap")]
    fn liquidity_cap(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("partialFill")]
    fn partial_fill(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("depositsPaused")]
    fn deposits_paused(&self) -> SingleValueMapper<bool>;
}
