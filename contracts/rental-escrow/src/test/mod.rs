pub mod fees_test;

use crate::{RentUnit, RentalEscrow, RentalEscrowClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env, String,
};

pub const RENT: i128 = 100;
pub const DEPOSIT: i128 = 200;
pub const FEE_PERCENT: u32 = 2;
pub const TENANT_FUNDS: i128 = 10_000;
pub const DAY: u64 = 86_400;

pub struct TestContext {
    pub env: Env,
    pub contract_id: Address,
    pub client: RentalEscrowClient<'static>,
    pub admin: Address,
    pub landlord: Address,
    pub tenant: Address,
    pub token_address: Address,
    pub token: token::TokenClient<'static>,
    pub token_admin: token::StellarAssetClient<'static>,
}

pub fn setup_test() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(1_000_000);

    let contract_id = env.register(RentalEscrow, ());
    let client = RentalEscrowClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let landlord = Address::generate(&env);
    let tenant = Address::generate(&env);

    let token_issuer = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_issuer);
    let token_address = token_contract.address();
    let token = token::TokenClient::new(&env, &token_address);
    let token_admin = token::StellarAssetClient::new(&env, &token_address);

    token_admin.mint(&tenant, &TENANT_FUNDS);

    client.initialize(&admin, &token_address, &FEE_PERCENT);

    TestContext {
        env,
        contract_id,
        client,
        admin,
        landlord,
        tenant,
        token_address,
        token,
        token_admin,
    }
}

impl TestContext {
    pub fn list_property(&self, rent_unit: RentUnit) -> u64 {
        self.list_property_with(RENT, DEPOSIT, rent_unit)
    }

    pub fn list_property_with(&self, rent: i128, deposit: i128, rent_unit: RentUnit) -> u64 {
        self.client.list_property(
            &self.landlord,
            &String::from_str(&self.env, "12 Harbour Street"),
            &String::from_str(&self.env, "Two bedroom flat"),
            &rent,
            &deposit,
            &rent_unit,
        )
    }

    pub fn reserve(&self, property_id: u64, months: u32, days: u32) -> u64 {
        self.client
            .reserve_property(&self.tenant, &property_id, &months, &days, &(RENT + DEPOSIT))
    }

    /// List, reserve and activate a default lease. Returns `(property_id, agreement_id)`.
    pub fn active_agreement(&self, rent_unit: RentUnit, months: u32, days: u32) -> (u64, u64) {
        let property_id = self.list_property(rent_unit);
        let agreement_id = self.reserve(property_id, months, days);
        self.client.activate_agreement(&self.tenant, &agreement_id);
        (property_id, agreement_id)
    }

    pub fn funded_user(&self, amount: i128) -> Address {
        let user = Address::generate(&self.env);
        self.token_admin.mint(&user, &amount);
        user
    }

    pub fn reason(&self) -> String {
        String::from_str(&self.env, "Boiler broken for three weeks")
    }

    pub fn advance(&self, seconds: u64) {
        self.env.ledger().with_mut(|li| li.timestamp += seconds);
    }

    pub fn contract_balance(&self) -> i128 {
        self.token.balance(&self.contract_id)
    }
}
