#![no_std]

multiversx_sc::imports!();

pub mod authority;
pub mod continuous_token_proxy;
pub mod curve;
pub mod errors;
pub mod ledger;
pub mod lending_market_proxy;
pub mod reserve;
pub mod voting;

use errors::{
    INSUFFICIENT_BALANCE, INVALID_INITIAL_STATE, INVALID_RESERVE_RATIO, INVALID_TOKEN_ID,
    WRONG_PAYMENT_TOKEN, ZERO_ADDRESS, ZERO_AMOUNT,
};

/// Token amounts and reserve amounts both carry 18 decimals.
const DECIMALS: u8 = 18;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait ContinuousToken:
    authority::AuthorityModule
    + ledger::LedgerModule
    + voting::VotingModule
    + reserve::ReserveModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        name: ManagedBuffer,
        symbol: ManagedBuffer,
        initial_supply: BigUint,
        initial_reserve: BigUint,
        reserve_ratio: u32,
        reserve_token: TokenIdentifier,
        lending_market: ManagedAddress,
        market_receipt_token: TokenIdentifier,
    ) {
        require!(
            reserve_ratio > 0 && reserve_ratio <= curve::MAX_RESERVE_RATIO,
            INVALID_RESERVE_RATIO
        );
        require!(
            initial_supply > 0u64 && initial_reserve > 0u64,
            INVALID_INITIAL_STATE
        );
        require!(
            reserve_token.is_valid_esdt_identifier()
                && market_receipt_token.is_valid_esdt_identifier(),
            INVALID_TOKEN_ID
        );
        require!(!lending_market.is_zero(), ZERO_ADDRESS);

        self.name().set(&name);
        self.symbol().set(&symbol);
        self.initial_supply().set(&initial_supply);
        self.initial_reserve().set(&initial_reserve);
        self.reserve_ratio().set(reserve_ratio);
        self.reserve_token().set(&reserve_token);
        self.lending_market().set(&lending_market);
        self.market_receipt_token().set(&market_receipt_token);
        self.owner().set(&self.blockchain().get_caller());
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: activate
    // One-time bootstrap: the owner locks the initial reserve and
    // the initial supply is minted without touching the curve.
    // ========================================================

    #[payable("*")]
    #[endpoint(activate)]
    fn activate(&self, initial_holder: OptionalValue<ManagedAddress>) {
        let caller = self.require_owner(errors::NOT_OWNER);
        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.reserve_token().get(),
            WRONG_PAYMENT_TOKEN
        );
        let holder = initial_holder.into_option().unwrap_or(caller);
        require!(!holder.is_zero(), ZERO_ADDRESS);

        self.enter_guarded();
        let initial_supply = self.activate_reserve(&payment.amount);
        self.mint_tokens(&holder, &initial_supply);

        self.activated_event(&holder, &payment.amount, &initial_supply);
        self.exit_guarded();
    }

    // ========================================================
    // ENDPOINT: mint
    // Deposit reserve, receive tokens priced on the curve.
    // ========================================================

    #[payable("*")]
    #[endpoint(mint)]
    fn mint(&self, min_mint_amount: BigUint) -> BigUint {
        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.reserve_token().get(),
            WRONG_PAYMENT_TOKEN
        );
        let caller = self.blockchain().get_caller();

        self.enter_guarded();
        let mint_amount = self.on_mint(&payment.amount, &min_mint_amount);
        self.mint_tokens(&caller, &mint_amount);

        self.minted_event(&caller, &payment.amount, &mint_amount);
        self.exit_guarded();
        mint_amount
    }

    // ========================================================
    // ENDPOINT: burn
    // Return tokens, receive reserve priced on the curve.
    // ========================================================

    #[endpoint(burn)]
    fn burn(&self, burn_amount: BigUint, min_return_amount: BigUint) -> BigUint {
        let caller = self.blockchain().get_caller();
        require!(burn_amount > 0u64, ZERO_AMOUNT);
        require!(
            self.balance_of(&caller).get() >= burn_amount,
            INSUFFICIENT_BALANCE
        );

        self.enter_guarded();
        let return_amount = self.on_burn(&burn_amount, &min_return_amount);
        self.burn_tokens(&caller, &burn_amount);
        self.send()
            .direct_esdt(&caller, &self.reserve_token().get(), 0, &return_amount);

        self.burned_event(&caller, &burn_amount, &return_amount);
        self.exit_guarded();
        return_amount
    }

    // ========================================================
    // Transfers
    // ========================================================

    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) -> bool {
        let caller = self.blockchain().get_caller();
        self.move_tokens(&caller, &to, &amount);
        true
    }

    #[endpoint(transferFrom)]
    fn transfer_from(&self, from: ManagedAddress, to: ManagedAddress, amount: BigUint) -> bool {
        let spender = self.blockchain().get_caller();
        self.spend_allowance(&from, &spender, &amount);
        self.move_tokens(&from, &to, &amount);
        true
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(decimals)]
    fn decimals(&self) -> u8 {
        DECIMALS
    }

    #[view(currentPrice)]
    fn current_price(&self) -> BigUint {
        curve::spot_price(
            &self.total_supply().get(),
            &self.nominal_reserve().get(),
            self.reserve_ratio().get(),
        )
    }

    /// Tokens a deposit would mint right now.
    #[view(calculateMintReturn)]
    fn calculate_mint_return(&self, deposit: BigUint) -> BigUint {
        let supply = self.total_supply().get();
        if supply == 0u64 || deposit == 0u64 {
            return BigUint::zero();
        }
        curve::calculate_mint(
            &supply,
            &self.nominal_reserve().get(),
            self.reserve_ratio().get(),
            &deposit,
        )
    }

    /// Reserve a burn would return right now.
    #[view(calculateBurnReturn)]
    fn calculate_burn_return(&self, burn_amount: BigUint) -> BigUint {
        let supply = self.total_supply().get();
        if burn_amount == 0u64 || burn_amount >= supply {
            return BigUint::zero();
        }
        curve::calculate_burn(
            &supply,
            &self.nominal_reserve().get(),
            self.reserve_ratio().get(),
            &burn_amount,
        )
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("activated")]
    fn activated_event(
        &self,
        #[indexed] initial_holder: &ManagedAddress,
        #[indexed] initial_reserve: &BigUint,
        initial_supply: &BigUint,
    );

    #[event("minted")]
    fn minted_event(
        &self,
        #[indexed] depositor: &ManagedAddress,
        #[indexed] deposit: &BigUint,
        mint_amount: &BigUint,
    );

    #[event("burned")]
    fn burned_event(
        &self,
        #[indexed] holder: &ManagedAddress,
        #[indexed] burn_amount: &BigUint,
        return_amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(name)]
    #[storage_mapper("name")]
    fn name(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(symbol)]
    #[storage_mapper("symbol")]
    fn symbol(&self) -> SingleValueMapper<ManagedBuffer>;
}
