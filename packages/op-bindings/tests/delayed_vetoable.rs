//! Generated `DelayedVetoable` bindings: custom errors, fallback calls and
//! bytes32-indexed events

mod common;

use alloy::primitives::{keccak256, Address, Bytes, U256};
use contract_bind::testing::{assert_bind_error, assert_custom_error};
use contract_bind::{BindError, CallOpts, Capabilities, FilterOpts, TransactOpts};
use op_bindings::{deploy_delayed_vetoable, DelayedVetoable};

use common::{alice, bob, carol, setup, ONE_WEEK};

fn vetoer() -> Address {
    alice()
}

fn initiator() -> Address {
    bob()
}

fn target() -> Address {
    Address::repeat_byte(0x7a)
}

async fn deploy(caps: Capabilities, delay: u64) -> DelayedVetoable {
    let (_, _, vetoable) = deploy_delayed_vetoable(
        &TransactOpts::new(carol()),
        caps,
        vetoer(),
        initiator(),
        target(),
        U256::from(delay),
    )
    .await
    .unwrap();
    vetoable
}

fn payload() -> Bytes {
    Bytes::from_static(&[0xde, 0xad, 0xbe, 0xef, 0x01])
}

#[tokio::test]
async fn test_getters_answer_the_zero_address() {
    let (_backend, caps) = setup();
    let vetoable = deploy(caps, ONE_WEEK).await;
    let contract = vetoable.bound();
    let opts = CallOpts::default();

    let delay: U256 = contract.call_single(&opts, "delay", vec![]).await.unwrap();
    let initiator_address: Address = contract.call_single(&opts, "initiator", vec![]).await.unwrap();
    let vetoer_address: Address = contract.call_single(&opts, "vetoer", vec![]).await.unwrap();
    let target_address: Address = contract.call_single(&opts, "target", vec![]).await.unwrap();

    assert_eq!(delay, U256::from(ONE_WEEK));
    assert_eq!(initiator_address, initiator());
    assert_eq!(vetoer_address, vetoer());
    assert_eq!(target_address, target());
    assert_eq!(vetoable.caller.version(&opts).await.unwrap(), "1.0.0");
}

#[tokio::test]
async fn test_unknown_sender_gets_custom_error() {
    let (_backend, caps) = setup();
    let vetoable = deploy(caps, ONE_WEEK).await;

    let err = vetoable
        .transactor
        .delay(&TransactOpts::new(carol()))
        .await
        .unwrap_err();
    let revert = err.revert().unwrap();
    assert_eq!(revert.custom_error(), Some("Unauthorized"));

    let read = CallOpts {
        from: Some(carol()),
        ..CallOpts::default()
    };
    assert_custom_error(
        vetoable.bound().call(&read, "delay", vec![]).await,
        "Unauthorized",
    )
    .unwrap();
}

#[tokio::test]
async fn test_initiate_and_forward_after_delay() {
    let (backend, caps) = setup();
    let vetoable = deploy(caps, ONE_WEEK).await;
    let hash = keccak256(payload());

    vetoable
        .transactor
        .fallback(&TransactOpts::new(initiator()), payload())
        .await
        .unwrap();

    let mut initiated = vetoable
        .filterer
        .filter_initiated(&FilterOpts::range(0, None), &[hash])
        .await
        .unwrap();
    assert!(initiated.advance().await);
    let event = initiated.take().unwrap();
    assert_eq!(event.call_hash, hash);
    assert_eq!(event.data, payload());
    assert_eq!(
        vetoable.filterer.parse_initiated(&event.raw).unwrap().data,
        payload()
    );

    assert_custom_error(
        vetoable
            .transactor
            .fallback(&TransactOpts::new(carol()), payload())
            .await,
        "ForwardingEarly",
    )
    .unwrap();

    backend.advance_time(ONE_WEEK);
    vetoable
        .transactor
        .fallback(&TransactOpts::new(carol()), payload())
        .await
        .unwrap();

    let mut forwarded = vetoable
        .filterer
        .filter_forwarded(&FilterOpts::range(0, None), &[])
        .await
        .unwrap();
    assert!(forwarded.advance().await);
    assert_eq!(forwarded.current().unwrap().call_hash, hash);
    assert!(!forwarded.advance().await);
}

#[tokio::test]
async fn test_vetoer_cancels_queued_call() {
    let (_backend, caps) = setup();
    let vetoable = deploy(caps, ONE_WEEK).await;

    vetoable
        .transactor
        .fallback(&TransactOpts::new(initiator()), payload())
        .await
        .unwrap();
    vetoable
        .transactor
        .fallback(&TransactOpts::new(vetoer()), payload())
        .await
        .unwrap();

    let mut vetoed = vetoable
        .filterer
        .filter_vetoed(&FilterOpts::range(0, None), &[keccak256(payload())])
        .await
        .unwrap();
    assert!(vetoed.advance().await);
    assert_eq!(vetoed.current().unwrap().data, payload());

    // the queue entry is gone, so forwarding is no longer authorized
    assert_custom_error(
        vetoable
            .transactor
            .fallback(&TransactOpts::new(carol()), payload())
            .await,
        "Unauthorized",
    )
    .unwrap();
}

#[tokio::test]
async fn test_zero_delay_forwards_immediately() {
    let (_backend, caps) = setup();
    let vetoable = deploy(caps, 0).await;

    vetoable
        .transactor
        .fallback(&TransactOpts::new(initiator()), payload())
        .await
        .unwrap();

    let mut initiated = vetoable
        .filterer
        .filter_initiated(&FilterOpts::range(0, None), &[])
        .await
        .unwrap();
    assert!(!initiated.advance().await);

    let mut forwarded = vetoable
        .filterer
        .filter_forwarded(&FilterOpts::range(0, None), &[keccak256(payload())])
        .await
        .unwrap();
    assert!(forwarded.advance().await);
}

#[tokio::test]
async fn test_fallback_requires_calldata() {
    let (_backend, caps) = setup();
    let vetoable = deploy(caps, ONE_WEEK).await;

    assert_bind_error(
        vetoable
            .transactor
            .fallback(&TransactOpts::new(initiator()), Bytes::new())
            .await,
        |err| matches!(err, BindError::TypeMismatch { .. }),
    )
    .unwrap();

    // an empty call reaches the contract through receive()
    vetoable
        .transactor
        .receive(&TransactOpts::new(initiator()))
        .await
        .unwrap();
    let mut initiated = vetoable
        .filterer
        .filter_initiated(&FilterOpts::range(0, None), &[keccak256(Bytes::new())])
        .await
        .unwrap();
    assert!(initiated.advance().await);
    assert!(initiated.current().unwrap().data.is_empty());
}
