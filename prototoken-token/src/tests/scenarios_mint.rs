// Copyright (c) 2022 MASSA LABS <info@massa.net>

use super::tools::{address_from_byte, assert_conservation, setup_token};
use crate::TokenError;
use prototoken_models::{Amount, TokenEvent, GENESIS_SUPPLY};
use prototoken_time::TokenTime;

#[test]
fn test_mint_once() {
    let (mut token, owner) = setup_token();
    let minted = Amount::from_raw(100);
    let now = TokenTime::from_secs(1_000_000);

    token.set_mint_amount(owner, minted).unwrap();
    token.mint(owner, owner, now).unwrap();

    assert_eq!(
        token.balance_of(&owner),
        GENESIS_SUPPLY.checked_add(minted).unwrap()
    );
    assert_eq!(
        token.total_supply(),
        GENESIS_SUPPLY.checked_add(minted).unwrap()
    );
    assert_eq!(token.mint_controller().last_mint(), Some(now));
    assert_eq!(
        token.take_events(),
        vec![TokenEvent::Transfer {
            from: None,
            to: owner,
            amount: minted,
        }]
    );
    assert_conservation(&token);
}

#[test]
fn test_mint_requires_configured_amount() {
    let (mut token, owner) = setup_token();

    let err = token
        .mint(owner, owner, TokenTime::from_secs(1_000_000))
        .unwrap_err();
    assert_eq!(err, TokenError::MintingDisabled);

    assert_eq!(token.total_supply(), GENESIS_SUPPLY);
    assert_eq!(token.mint_controller().last_mint(), None);
    assert!(token.take_events().is_empty());
}

#[test]
fn test_mint_rejected_for_non_owner() {
    let (mut token, owner) = setup_token();
    let other = address_from_byte(2);

    token.set_mint_amount(owner, Amount::from_raw(100)).unwrap();
    let err = token
        .mint(other, other, TokenTime::from_secs(1_000_000))
        .unwrap_err();
    assert_eq!(err, TokenError::NotAuthorized(other));

    assert_eq!(token.balance_of(&other), Amount::zero());
    assert_eq!(token.total_supply(), GENESIS_SUPPLY);
    assert_eq!(token.mint_controller().last_mint(), None);
    assert!(token.take_events().is_empty());
}

#[test]
fn test_set_mint_amount_rejected_for_non_owner() {
    let (mut token, _) = setup_token();
    let other = address_from_byte(2);

    let err = token
        .set_mint_amount(other, Amount::from_raw(100))
        .unwrap_err();
    assert_eq!(err, TokenError::NotAuthorized(other));
    assert_eq!(token.mint_controller().mint_amount(), Amount::zero());
}

#[test]
fn test_set_mint_delay_rejected_for_non_owner() {
    let (mut token, _) = setup_token();
    let other = address_from_byte(2);

    let err = token
        .set_mint_delay(other, TokenTime::from_secs(172_800))
        .unwrap_err();
    assert_eq!(err, TokenError::NotAuthorized(other));
    assert_eq!(
        token.mint_controller().mint_delay(),
        TokenTime::from_secs(0)
    );
}

#[test]
fn test_immediate_second_mint_allowed_with_zero_delay() {
    // minting is unthrottled until a delay is explicitly configured:
    // with the default delay of zero, a second mint at the same instant
    // satisfies the elapsed >= delay rule
    let (mut token, owner) = setup_token();
    let now = TokenTime::from_secs(1_000_000);

    token.set_mint_amount(owner, Amount::from_raw(100)).unwrap();
    token.mint(owner, owner, now).unwrap();
    token.mint(owner, owner, now).unwrap();

    assert_eq!(
        token.total_supply(),
        GENESIS_SUPPLY.checked_add(Amount::from_raw(200)).unwrap()
    );
    assert_conservation(&token);
}

#[test]
fn test_mint_cooldown_boundary() {
    let (mut token, owner) = setup_token();
    let start = TokenTime::from_secs(100);
    let delay = TokenTime::from_secs(10);
    let ready_at = start.checked_add(delay).unwrap();

    token.set_mint_amount(owner, Amount::from_raw(100)).unwrap();
    token.set_mint_delay(owner, delay).unwrap();
    token.mint(owner, owner, start).unwrap();

    // one second short of the delay: still cooling
    let err = token
        .mint(owner, owner, ready_at.checked_sub(TokenTime::EPSILON).unwrap())
        .unwrap_err();
    assert_eq!(err, TokenError::MintCooldownActive(ready_at));
    assert_eq!(token.mint_controller().last_mint(), Some(start));

    // exactly the delay: ready again
    token.mint(owner, owner, ready_at).unwrap();
    assert_eq!(token.mint_controller().last_mint(), Some(ready_at));
}

#[test]
fn test_cooldown_failure_leaves_state_unchanged() {
    let (mut token, owner) = setup_token();
    let start = TokenTime::from_secs(100);

    token.set_mint_amount(owner, Amount::from_raw(100)).unwrap();
    token
        .set_mint_delay(owner, TokenTime::from_secs(3_600))
        .unwrap();
    token.mint(owner, owner, start).unwrap();
    let supply_after_first = token.total_supply();
    token.take_events();

    let err = token
        .mint(owner, owner, TokenTime::from_secs(101))
        .unwrap_err();
    assert!(matches!(err, TokenError::MintCooldownActive(_)));

    assert_eq!(token.total_supply(), supply_after_first);
    assert_eq!(token.mint_controller().last_mint(), Some(start));
    assert!(token.take_events().is_empty());
}

#[test]
fn test_mint_delay_two_days() {
    let (mut token, owner) = setup_token();
    let minted = Amount::from_raw(100);
    let start = TokenTime::from_secs(1_000_000);
    let two_days = TokenTime::from_secs(60 * 60 * 24 * 2);
    let three_days = TokenTime::from_secs(60 * 60 * 24 * 3);

    token.set_mint_delay(owner, two_days).unwrap();
    token.set_mint_amount(owner, minted).unwrap();

    token.mint(owner, owner, start).unwrap();
    token
        .mint(owner, owner, start.checked_add(three_days).unwrap())
        .unwrap();

    assert_eq!(
        token.balance_of(&owner),
        GENESIS_SUPPLY
            .checked_add(minted.checked_mul_u64(2).unwrap())
            .unwrap()
    );
    assert_conservation(&token);
}

#[test]
fn test_shortening_delay_applies_to_running_cooldown() {
    // the delay is read at mint time, not captured when the cooldown starts
    let (mut token, owner) = setup_token();
    let start = TokenTime::from_secs(100);

    token.set_mint_amount(owner, Amount::from_raw(100)).unwrap();
    token
        .set_mint_delay(owner, TokenTime::from_secs(1_000))
        .unwrap();
    token.mint(owner, owner, start).unwrap();

    token.set_mint_delay(owner, TokenTime::from_secs(0)).unwrap();
    token
        .mint(owner, owner, TokenTime::from_secs(101))
        .unwrap();

    assert_eq!(
        token.total_supply(),
        GENESIS_SUPPLY.checked_add(Amount::from_raw(200)).unwrap()
    );
}

#[test]
fn test_genesis_transfer_then_mint_scenario() {
    let (mut token, owner) = setup_token();
    let recipient = address_from_byte(2);
    let moved = Amount::from_raw(100);

    token.transfer(owner, recipient, moved).unwrap();
    assert_eq!(
        token.balance_of(&owner),
        GENESIS_SUPPLY.checked_sub(moved).unwrap()
    );
    assert_eq!(token.balance_of(&recipient), moved);

    token.set_mint_amount(owner, moved).unwrap();
    token
        .mint(owner, owner, TokenTime::from_secs(1_000_000))
        .unwrap();

    // the mint exactly compensates the earlier debit
    assert_eq!(token.balance_of(&owner), GENESIS_SUPPLY);
    assert_eq!(
        token.total_supply(),
        GENESIS_SUPPLY.checked_add(moved).unwrap()
    );
    assert_conservation(&token);
}
