multiversx_sc::imports!();

use crate::{
    curve,
    errors::{
        ALREADY_ACTIVATED, INSOLVENT_WITHDRAWAL, INSUFFICIENT_BALANCE, INSUFFICIENT_LIQUIDITY,
        INSUFFICIENT_SUPPLY, MINT_TOO_SMALL, NOT_ACTIVATED, PROTECTED_ASSET, REENTRANT_CALL,
        RESERVE_EXHAUSTED, RETURN_TOO_SMALL, SLIPPAGE_EXCEEDED, WRONG_INITIAL_RESERVE, ZERO_AMOUNT,
    },
    lending_market_proxy::LendingMarketProxy,
};

// ============================================================
// Reserve ledger
//
// nominalReserve is what the curve says backs the supply. The
// lending market holds the actual reserve, which grows with
// interest. Their difference is the only thing the treasury can
// skim. Amounts are always fixed before the market is called and
// storage is written only after the call returned.
// ============================================================

#[multiversx_sc::module]
pub trait ReserveModule:
    crate::authority::AuthorityModule + crate::ledger::LedgerModule
{
    // ========================================================
    // Lifecycle
    // ========================================================

    /// Locks the initial reserve into the market. Returns the initial supply
    /// the caller must credit.
    fn activate_reserve(&self, payment_amount: &BigUint) -> BigUint {
        require!(!self.activated().get(), ALREADY_ACTIVATED);
        let initial_reserve = self.initial_reserve().get();
        require!(*payment_amount == initial_reserve, WRONG_INITIAL_RESERVE);

        self.market_deposit(&initial_reserve);

        self.nominal_reserve().set(&initial_reserve);
        self.activated().set(true);
        self.initial_supply().get()
    }

    /// Prices a deposit, forwards it to the market and books it.
    fn on_mint(&self, deposit: &BigUint, min_mint_amount: &BigUint) -> BigUint {
        require!(self.activated().get(), NOT_ACTIVATED);
        require!(*deposit > 0u64, ZERO_AMOUNT);

        let nominal_reserve = self.nominal_reserve().get();
        let mint_amount = curve::calculate_mint(
            &self.total_supply().get(),
            &nominal_reserve,
            self.reserve_ratio().get(),
            deposit,
        );
        require!(mint_amount > 0u64, MINT_TOO_SMALL);
        require!(&mint_amount >= min_mint_amount, SLIPPAGE_EXCEEDED);

        self.market_deposit(deposit);

        self.nominal_reserve().set(&nominal_reserve + deposit);
        mint_amount
    }

    /// Prices a burn, pulls the reserve out of the market and books it.
    /// The reserve is left on the contract for the caller to pay out.
    fn on_burn(&self, burn_amount: &BigUint, min_return_amount: &BigUint) -> BigUint {
        require!(self.activated().get(), NOT_ACTIVATED);
        require!(*burn_amount > 0u64, ZERO_AMOUNT);

        let supply = self.total_supply().get();
        require!(burn_amount < &supply, INSUFFICIENT_SUPPLY);

        let nominal_reserve = self.nominal_reserve().get();
        let return_amount = curve::calculate_burn(
            &supply,
            &nominal_reserve,
            self.reserve_ratio().get(),
            burn_amount,
        );
        require!(return_amount > 0u64, RETURN_TOO_SMALL);
        require!(return_amount < nominal_reserve, RESERVE_EXHAUSTED);
        require!(&return_amount >= min_return_amount, SLIPPAGE_EXCEEDED);

        self.market_withdraw(&return_amount);

        self.nominal_reserve().set(nominal_reserve - &return_amount);
        return_amount
    }

    // ========================================================
    // Treasury
    // ========================================================

    #[endpoint(withdrawInterest)]
    fn withdraw_interest(&self, amount: BigUint) {
        let caller = self.require_treasury();
        require!(amount > 0u64, ZERO_AMOUNT);
        self.enter_guarded();

        let (is_solvent, differential) = self.compute_differential();
        require!(is_solvent && amount <= differential, INSOLVENT_WITHDRAWAL);

        self.market_withdraw(&amount);
        self.send()
            .direct_esdt(&caller, &self.reserve_token().get(), 0, &amount);

        self.interest_withdrawn_event(&caller, &amount);
        self.exit_guarded();
    }

    /// Sweeps EGLD or any ESDT held by the contract, except the assets that
    /// back the supply.
    #[endpoint(withdrawToken)]
    fn withdraw_token(&self, asset: EgldOrEsdtTokenIdentifier, amount: BigUint) {
        let caller = self.require_treasury();
        require!(amount > 0u64, ZERO_AMOUNT);
        require!(!self.is_protected_asset(&asset), PROTECTED_ASSET);

        let held = self.blockchain().get_sc_balance(&asset, 0);
        require!(held >= amount, INSUFFICIENT_BALANCE);

        self.send().direct(&caller, &asset, 0, &amount);
        self.token_swept_event(&caller, &asset, &amount);
    }

    fn is_protected_asset(&self, asset: &EgldOrEsdtTokenIdentifier) -> bool {
        *asset == EgldOrEsdtTokenIdentifier::esdt(self.reserve_token().get())
            || *asset == EgldOrEsdtTokenIdentifier::esdt(self.market_receipt_token().get())
    }

    // ========================================================
    // Solvency
    // ========================================================

    /// `(isSolvent, |redeemable - nominal|)`.
    #[view(reserveDifferential)]
    fn reserve_differential(&self) -> MultiValue2<bool, BigUint> {
        self.compute_differential().into()
    }

    /// Interest available to the treasury, zero while insolvent.
    #[view(reserveInterest)]
    fn reserve_interest(&self) -> BigUint {
        let (is_solvent, differential) = self.compute_differential();
        if is_solvent {
            differential
        } else {
            BigUint::zero()
        }
    }

    fn compute_differential(&self) -> (bool, BigUint) {
        let redeemable = self.redeemable_balance();
        let nominal_reserve = self.nominal_reserve().get();
        if redeemable >= nominal_reserve {
            (true, redeemable - nominal_reserve)
        } else {
            (false, nominal_reserve - redeemable)
        }
    }

    // ========================================================
    // Lending market calls
    // ========================================================

    fn market_deposit(&self, amount: &BigUint) {
        self.tx()
            .to(&self.lending_market().get())
            .typed(LendingMarketProxy)
            .deposit()
            .single_esdt(&self.reserve_token().get(), 0, amount)
            .sync_call();
    }

    /// The market must hand back exactly `amount`; a partial redemption
    /// aborts the whole operation.
    fn market_withdraw(&self, amount: &BigUint) {
        let reserve_asset = EgldOrEsdtTokenIdentifier::esdt(self.reserve_token().get());
        let held_before = self.blockchain().get_sc_balance(&reserve_asset, 0);

        self.tx()
            .to(&self.lending_market().get())
            .typed(LendingMarketProxy)
            .withdraw(amount)
            .sync_call();

        let held_after = self.blockchain().get_sc_balance(&reserve_asset, 0);
        require!(held_after >= held_before + amount, INSUFFICIENT_LIQUIDITY);
    }

    fn redeemable_balance(&self) -> BigUint {
        self.tx()
            .to(&self.lending_market().get())
            .typed(LendingMarketProxy)
            .redeemable_balance(self.blockchain().get_sc_address())
            .returns(ReturnsResult)
            .sync_call()
    }

    // ========================================================
    // Reentrancy lock
    // ========================================================

    fn enter_guarded(&self) {
        require!(!self.reentrancy_lock().get(), REENTRANT_CALL);
        self.reentrancy_lock().set(true);
    }

    fn exit_guarded(&self) {
        self.reentrancy_lock().clear();
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("interestWithdrawn")]
    fn interest_withdrawn_event(&self, #[indexed] treasury: &ManagedAddress, amount: &BigUint);

    #[event("tokenSwept")]
    fn token_swept_event(
        &self,
        #[indexed] treasury: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getReserveToken)]
    #[storage_mapper("reserveToken")]
    fn reserve_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getMarketReceiptToken)]
    #[storage_mapper("marketReceiptToken")]
    fn market_receipt_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getLendingMarket)]
    #[storage_mapper("lendingMarket")]
    fn lending_market(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getReserveRatio)]
    #[storage_mapper("reserveRatio")]
    fn reserve_ratio(&self) -> SingleValueMapper<u32>;

    #[view(getInitialSupply)]
    #[storage_mapper("initialSupply")]
    fn initial_supply(&self) -> SingleValueMapper<BigUint>;

    #[view(getInitialReserve)]
    #[storage_mapper("initialReserve")]
    fn initial_reserve(&self) -> SingleValueMapper<BigUint>;

    #[view(reserveBalance)]
    #[storage_mapper("nominalReserve")]
    fn nominal_reserve(&self) -> SingleValueMapper<BigUint>;

    #[view(isActivated)]
    #[storage_mapper("activated")]
    fn activated(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("reentrancyLock")]
    fn reentrancy_lock(&self) -> SingleValueMapper<bool>;
}
