use soroban_sdk::{testutils::Address as _, Address, Env, String};

use crate::test::{setup_test, DEPOSIT, FEE_PERCENT, RENT};
use crate::{Error, RentUnit, RentalEscrow, RentalEscrowClient};

#[test]
fn test_initialize_stores_config() {
    let ctx = setup_test();

    let config = ctx.client.get_config();
    assert_eq!(config.admin, ctx.admin);
    assert_eq!(config.token, ctx.token_address);
    assert!(!config.is_paused);

    let account = ctx.client.get_fee_account();
    assert_eq!(account.platform_fee_percentage, FEE_PERCENT);
    assert_eq!(account.accumulated_platform_fees, 0);
}

#[test]
fn test_initialize_twice() {
    let ctx = setup_test();
    assert_eq!(
        ctx.client
            .try_initialize(&ctx.admin, &ctx.token_address, &FEE_PERCENT),
        Err(Ok(Error::AlreadyInitialized))
    );
}

#[test]
fn test_initialize_rejects_high_fee() {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(RentalEscrow, ());
    let client = RentalEscrowClient::new(&env, &contract_id);
    let admin = Address::generate(&env);
    let token = Address::generate(&env);

    assert_eq!(
        client.try_initialize(&admin, &token, &11),
        Err(Ok(Error::FeeTooHigh))
    );
    client.initialize(&admin, &token, &10);
}

#[test]
fn test_calls_before_initialize() {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(RentalEscrow, ());
    let client = RentalEscrowClient::new(&env, &contract_id);
    let owner = Address::generate(&env);

    let result = client.try_list_property(
        &owner,
        &String::from_str(&env, "1 Main Road"),
        &String::from_str(&env, "Studio"),
        &RENT,
        &DEPOSIT,
        &RentUnit::Monthly,
    );
    assert_eq!(result, Err(Ok(Error::NotInitialized)));
    assert_eq!(client.try_get_fee_account(), Err(Ok(Error::NotInitialized)));
    assert_eq!(client.try_get_stats(), Err(Ok(Error::NotInitialized)));
}

#[test]
fn test_set_fee_percentage() {
    let ctx = setup_test();

    ctx.client.set_fee_percentage(&ctx.admin, &10);
    assert_eq!(ctx.client.get_fee_account().platform_fee_percentage, 10);

    assert_eq!(
        ctx.client.try_set_fee_percentage(&ctx.admin, &11),
        Err(Ok(Error::FeeTooHigh))
    );
    assert_eq!(
        ctx.client.try_set_fee_percentage(&ctx.landlord, &5),
        Err(Ok(Error::NotAdministrator))
    );
    assert_eq!(ctx.client.get_fee_account().platform_fee_percentage, 10);
}

#[test]
fn test_fee_at_maximum_percentage() {
    let ctx = setup_test();
    ctx.client.set_fee_percentage(&ctx.admin, &10);

    ctx.active_agreement(RentUnit::Monthly, 1, 0);

    assert_eq!(ctx.token.balance(&ctx.landlord), 90);
    assert_eq!(ctx.client.get_fee_account().accumulated_platform_fees, 10);
}

#[test]
fn test_fee_uses_percentage_at_settlement() {
    let ctx = setup_test();
    let property_id = ctx.list_property(RentUnit::Monthly);
    let agreement_id = ctx.reserve(property_id, 1, 0);

    ctx.client.set_fee_percentage(&ctx.admin, &5);
    ctx.client.activate_agreement(&ctx.tenant, &agreement_id);

    assert_eq!(ctx.token.balance(&ctx.landlord), 95);
    assert_eq!(ctx.client.get_fee_account().accumulated_platform_fees, 5);
}

#[test]
fn test_small_rent_carries_no_fee() {
    let ctx = setup_test();
    let property_id = ctx.list_property_with(49, 0, RentUnit::Daily);
    let agreement_id = ctx
        .client
        .reserve_property(&ctx.tenant, &property_id, &0, &3, &49);

    ctx.client.activate_agreement(&ctx.tenant, &agreement_id);

    assert_eq!(ctx.token.balance(&ctx.landlord), 49);
    assert_eq!(ctx.client.get_fee_account().accumulated_platform_fees, 0);
}

#[test]
fn test_withdraw_fees() {
    let ctx = setup_test();

    assert_eq!(
        ctx.client.try_withdraw_fees(&ctx.admin),
        Err(Ok(Error::NothingToWithdraw))
    );

    ctx.active_agreement(RentUnit::Monthly, 1, 0);
    assert_eq!(
        ctx.client.try_withdraw_fees(&ctx.landlord),
        Err(Ok(Error::NotAdministrator))
    );

    assert_eq!(ctx.client.withdraw_fees(&ctx.admin), 2);
    assert_eq!(ctx.token.balance(&ctx.admin), 2);
    assert_eq!(ctx.client.get_fee_account().accumulated_platform_fees, 0);
    // Only the deposit is left in custody.
    assert_eq!(ctx.contract_balance(), DEPOSIT);

    assert_eq!(
        ctx.client.try_withdraw_fees(&ctx.admin),
        Err(Ok(Error::NothingToWithdraw))
    );
}

#[test]
fn test_quote_split() {
    let ctx = setup_test();
    assert_eq!(ctx.client.quote_split(&RENT), (98, 2));
    assert_eq!(ctx.client.quote_split(&49), (49, 0));
}

#[test]
fn test_stats() {
    let ctx = setup_test();
    let (_, agreement_id) = ctx.active_agreement(RentUnit::Monthly, 2, 0);
    ctx.list_property(RentUnit::Daily);
    ctx.client
        .create_dispute(&ctx.tenant, &agreement_id, &ctx.reason());

    let stats = ctx.client.get_stats();
    assert_eq!(stats.total_properties, 2);
    assert_eq!(stats.total_agreements, 1);
    assert_eq!(stats.total_disputes, 1);
    assert_eq!(stats.accumulated_platform_fees, 2);
    assert_eq!(stats.escrowed_funds, DEPOSIT);
}
