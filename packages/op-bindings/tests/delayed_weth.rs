//! Generated `DelayedWETH` bindings against the simulated chain

mod common;

use std::time::Duration;

use alloy::primitives::{Address, U256};
use contract_bind::testing::{assert_bind_error, assert_reverted_with};
use contract_bind::{
    wait_deployed, wait_mined, BindError, CallOpts, Capabilities, Context, FilterOpts,
    TransactOpts, WatchOpts, DEFAULT_POLL_INTERVAL,
};
use op_bindings::{
    deploy_delayed_weth, DelayedWETH, DelayedWETHCaller, DelayedWETHCallerSession,
    DelayedWETHSession, DelayedWETHTransactorSession, DelayedWETHWithdrawalsOutput,
};
use tokio::sync::mpsc;

use common::{alice, bob, carol, ether, setup, ONE_WEEK};

async fn deploy(caps: Capabilities) -> DelayedWETH {
    let (_, _, weth) = deploy_delayed_weth(&TransactOpts::new(alice()), caps, U256::from(ONE_WEEK))
        .await
        .unwrap();
    weth
}

async fn deposit(weth: &DelayedWETH, from: Address, amount: U256) {
    weth.transactor
        .deposit(&TransactOpts::new(from).with_value(amount))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_deploy_and_read_constants() {
    let (backend, caps) = setup();
    let (address, tx, weth) =
        deploy_delayed_weth(&TransactOpts::new(alice()), caps, U256::from(ONE_WEEK))
            .await
            .unwrap();

    let deployed = wait_deployed(backend.as_ref(), &tx, &Context::background(), DEFAULT_POLL_INTERVAL)
        .await
        .unwrap();
    assert_eq!(deployed, address);
    assert_eq!(weth.address(), address);

    let opts = CallOpts::default();
    assert_eq!(weth.caller.delay(&opts).await.unwrap(), U256::from(ONE_WEEK));
    assert_eq!(weth.caller.decimals(&opts).await.unwrap(), 18u8);
    assert_eq!(weth.caller.name(&opts).await.unwrap(), "Wrapped Ether");
    assert_eq!(weth.caller.symbol(&opts).await.unwrap(), "WETH");
    assert_eq!(weth.caller.total_supply(&opts).await.unwrap(), U256::ZERO);
}

#[tokio::test]
async fn test_deposit_and_receive_credit_balance() {
    let (backend, caps) = setup();
    let weth = deploy(caps).await;

    deposit(&weth, alice(), ether(2)).await;
    let tx = weth
        .transactor
        .receive(&TransactOpts::new(bob()).with_value(ether(1)))
        .await
        .unwrap();
    let receipt = wait_mined(backend.as_ref(), &tx, &Context::background(), DEFAULT_POLL_INTERVAL)
        .await
        .unwrap();
    assert!(receipt.status);
    assert_eq!(receipt.logs.len(), 1);

    let opts = CallOpts::default();
    assert_eq!(weth.caller.balance_of(&opts, alice()).await.unwrap(), ether(2));
    assert_eq!(weth.caller.balance_of(&opts, bob()).await.unwrap(), ether(1));
    assert_eq!(weth.caller.total_supply(&opts).await.unwrap(), ether(3));
    assert_eq!(backend.balance(weth.address()), ether(3));

    let deposit = weth.filterer.parse_deposit(&receipt.logs[0]).unwrap();
    assert_eq!((deposit.dst, deposit.wad), (bob(), ether(1)));
    assert_eq!(deposit.raw, receipt.logs[0]);
}

#[tokio::test]
async fn test_filter_deposits_by_depositor() {
    let (_backend, caps) = setup();
    let weth = deploy(caps).await;

    deposit(&weth, alice(), ether(1)).await;
    deposit(&weth, bob(), ether(2)).await;
    deposit(&weth, alice(), ether(3)).await;

    let mut events = weth
        .filterer
        .filter_deposit(&FilterOpts::range(0, None), &[alice()])
        .await
        .unwrap();
    let mut amounts = Vec::new();
    while events.advance().await {
        amounts.push(events.take().unwrap().wad);
    }
    assert!(events.last_error().is_none());
    assert_eq!(amounts, vec![ether(1), ether(3)]);
}

#[tokio::test]
async fn test_delayed_withdrawal() {
    let (backend, caps) = setup();
    let weth = deploy(caps).await;
    deposit(&weth, alice(), ether(5)).await;

    let opts = TransactOpts::new(alice());
    assert_reverted_with(
        weth.transactor.withdraw(&opts, ether(1)).await,
        "DelayedWETH: insufficient unlocked withdrawal",
    )
    .unwrap();

    weth.transactor.unlock(&opts, alice(), ether(2)).await.unwrap();
    let pending = weth
        .caller
        .withdrawals(&CallOpts::default(), alice(), alice())
        .await
        .unwrap();
    assert_eq!(
        pending,
        DelayedWETHWithdrawalsOutput {
            amount: ether(2),
            timestamp: U256::from(backend.timestamp()),
        }
    );

    assert_reverted_with(
        weth.transactor.withdraw(&opts, ether(1)).await,
        "DelayedWETH: withdrawal delay not met",
    )
    .unwrap();

    backend.advance_time(ONE_WEEK);
    weth.transactor.withdraw0(&opts, alice(), ether(2)).await.unwrap();

    let call = CallOpts::default();
    assert_eq!(weth.caller.balance_of(&call, alice()).await.unwrap(), ether(3));
    let pending = weth.caller.withdrawals(&call, alice(), alice()).await.unwrap();
    assert_eq!(pending.amount, U256::ZERO);

    let mut withdrawals = weth
        .filterer
        .filter_withdrawal(&FilterOpts::range(0, None), &[alice()])
        .await
        .unwrap();
    assert!(withdrawals.advance().await);
    assert_eq!(withdrawals.current().unwrap().wad, ether(2));
    assert!(!withdrawals.advance().await);
}

#[tokio::test]
async fn test_withdraw_for_other_account_needs_unlock() {
    let (_backend, caps) = setup();
    let weth = deploy(caps).await;
    deposit(&weth, alice(), ether(1)).await;

    weth.transactor
        .unlock(&TransactOpts::new(alice()), bob(), U256::ZERO)
        .await
        .unwrap();
    // unlocking zero still stamps the entry, so only the amount check fails
    assert_reverted_with(
        weth.transactor
            .withdraw0(&TransactOpts::new(alice()), bob(), ether(1))
            .await,
        "DelayedWETH: insufficient unlocked withdrawal",
    )
    .unwrap();
}

#[tokio::test]
async fn test_overloads_resolve_to_distinct_selectors() {
    let (_backend, caps) = setup();
    let weth = deploy(caps).await;
    let abi = weth.bound().abi();

    let withdraw = abi.method("withdraw").unwrap();
    let withdraw0 = abi.method("withdraw0").unwrap();
    assert_eq!(withdraw.signature, "withdraw(uint256)");
    assert_eq!(withdraw0.signature, "withdraw(address,uint256)");
    assert_eq!(withdraw0.name, "withdraw");
    assert_ne!(withdraw.selector, withdraw0.selector);
}

#[tokio::test]
async fn test_transfers_and_filters() {
    let (_backend, caps) = setup();
    let weth = deploy(caps).await;
    deposit(&weth, alice(), ether(10)).await;
    deposit(&weth, bob(), ether(10)).await;

    weth.transactor
        .transfer(&TransactOpts::new(alice()), bob(), ether(1))
        .await
        .unwrap();
    weth.transactor
        .transfer(&TransactOpts::new(bob()), carol(), ether(2))
        .await
        .unwrap();
    weth.transactor
        .approve(&TransactOpts::new(alice()), carol(), ether(4))
        .await
        .unwrap();
    weth.transactor
        .transfer_from(&TransactOpts::new(carol()), alice(), carol(), ether(3))
        .await
        .unwrap();

    let call = CallOpts::default();
    assert_eq!(weth.caller.allowance(&call, alice(), carol()).await.unwrap(), ether(1));
    assert_eq!(weth.caller.balance_of(&call, carol()).await.unwrap(), ether(5));

    let mut from_alice = weth
        .filterer
        .filter_transfer(&FilterOpts::range(0, None), &[alice()], &[])
        .await
        .unwrap();
    let mut seen = Vec::new();
    while from_alice.advance().await {
        let event = from_alice.take().unwrap();
        assert_eq!(event.src, alice());
        seen.push((event.dst, event.wad));
    }
    assert_eq!(seen, vec![(bob(), ether(1)), (carol(), ether(3))]);

    let mut to_carol = weth
        .filterer
        .filter_transfer(&FilterOpts::range(0, None), &[], &[carol()])
        .await
        .unwrap();
    let mut senders = Vec::new();
    while to_carol.advance().await {
        senders.push(to_carol.take().unwrap().src);
    }
    assert_eq!(senders, vec![bob(), alice()]);

    // transfer_from beyond the remaining allowance fails without a reason
    let err = weth
        .transactor
        .transfer_from(&TransactOpts::new(carol()), alice(), carol(), ether(2))
        .await
        .unwrap_err();
    assert!(matches!(err, BindError::ExecutionReverted(_)));
    assert_eq!(err.revert().unwrap().reason_message(), None);
}

#[tokio::test]
async fn test_watch_transfer_into_sink() {
    let (_backend, caps) = setup();
    let weth = deploy(caps).await;
    deposit(&weth, alice(), ether(3)).await;

    let (tx, mut rx) = mpsc::channel(8);
    let mut subscription = weth
        .filterer
        .watch_transfer(&WatchOpts::default(), tx, &[], &[carol()])
        .await
        .unwrap();

    weth.transactor
        .transfer(&TransactOpts::new(alice()), bob(), ether(1))
        .await
        .unwrap();
    weth.transactor
        .transfer(&TransactOpts::new(alice()), carol(), ether(2))
        .await
        .unwrap();

    let event = tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!((event.src, event.dst, event.wad), (alice(), carol(), ether(2)));

    subscription.unsubscribe().await;
    assert!(subscription.err().await.is_none());
}

#[tokio::test]
async fn test_subscribe_deposit_iterates_live_events() {
    let (_backend, caps) = setup();
    let weth = deploy(caps).await;
    deposit(&weth, alice(), ether(1)).await;

    let mut events = weth
        .filterer
        .subscribe_deposit(&WatchOpts::default(), &[])
        .await
        .unwrap();
    deposit(&weth, bob(), ether(4)).await;

    assert!(events.advance().await);
    let event = events.current().unwrap();
    assert_eq!((event.dst, event.wad), (bob(), ether(4)));
    events.close();
    assert!(events.is_closed());
}

#[tokio::test]
async fn test_initialize_once() {
    let (_backend, caps) = setup();
    let weth = deploy(caps).await;
    let config = Address::repeat_byte(0xcf);

    weth.transactor
        .initialize(&TransactOpts::new(alice()), bob(), config)
        .await
        .unwrap();

    let call = CallOpts::default();
    assert_eq!(weth.caller.owner(&call).await.unwrap(), bob());
    assert_eq!(weth.caller.config(&call).await.unwrap(), config);

    let mut initialized = weth
        .filterer
        .filter_initialized(&FilterOpts::range(0, None))
        .await
        .unwrap();
    assert!(initialized.advance().await);
    assert_eq!(initialized.current().unwrap().version, 1u8);

    let mut owners = weth
        .filterer
        .filter_ownership_transferred(&FilterOpts::range(0, None), &[], &[bob()])
        .await
        .unwrap();
    assert!(owners.advance().await);
    let event = owners.take().unwrap();
    assert_eq!((event.previous_owner, event.new_owner), (Address::ZERO, bob()));

    assert_reverted_with(
        weth.transactor
            .initialize(&TransactOpts::new(alice()), alice(), config)
            .await,
        "Initializable: contract is already initialized",
    )
    .unwrap();
}

#[tokio::test]
async fn test_owner_only_entry_points() {
    let (_backend, caps) = setup();
    let weth = deploy(caps).await;
    weth.transactor
        .initialize(&TransactOpts::new(alice()), bob(), Address::ZERO)
        .await
        .unwrap();

    assert_reverted_with(
        weth.transactor
            .hold(&TransactOpts::new(alice()), carol(), ether(1))
            .await,
        "DelayedWETH: not owner",
    )
    .unwrap();
    weth.transactor
        .hold(&TransactOpts::new(bob()), carol(), ether(1))
        .await
        .unwrap();
    assert_eq!(
        weth.caller
            .allowance(&CallOpts::default(), carol(), bob())
            .await
            .unwrap(),
        ether(1)
    );

    assert_reverted_with(
        weth.transactor.transfer_ownership(&TransactOpts::new(carol()), carol()).await,
        "Ownable: caller is not the owner",
    )
    .unwrap();
    weth.transactor
        .transfer_ownership(&TransactOpts::new(bob()), carol())
        .await
        .unwrap();
    weth.transactor
        .renounce_ownership(&TransactOpts::new(carol()))
        .await
        .unwrap();
    assert_eq!(
        weth.caller.owner(&CallOpts::default()).await.unwrap(),
        Address::ZERO
    );
}

#[tokio::test]
async fn test_sessions_carry_options() {
    let (_backend, caps) = setup();
    let weth = deploy(caps).await;

    let session = DelayedWETHSession::new(
        weth.clone(),
        CallOpts::default(),
        TransactOpts::new(bob()).with_value(ether(2)),
    );
    session.deposit().await.unwrap();
    assert_eq!(session.balance_of(bob()).await.unwrap(), ether(2));
    assert_eq!(session.version().await.unwrap(), "1.0.0");

    let transactor = DelayedWETHTransactorSession::new(
        weth.transactor.clone(),
        TransactOpts::new(bob()),
    );
    transactor.transfer(alice(), ether(1)).await.unwrap();

    let caller = DelayedWETHCallerSession::new(weth.caller.clone(), CallOpts::default());
    assert_eq!(caller.balance_of(alice()).await.unwrap(), ether(1));
    assert_eq!(caller.total_supply().await.unwrap(), ether(2));
}

#[tokio::test]
async fn test_caller_only_binding() {
    let (backend, caps) = setup();
    let weth = deploy(caps).await;

    let caller = DelayedWETHCaller::new(weth.address(), backend.clone()).unwrap();
    assert_eq!(caller.delay(&CallOpts::default()).await.unwrap(), U256::from(ONE_WEEK));

    let read_only = DelayedWETH::new(
        weth.address(),
        Capabilities::new().with_caller(backend.clone()),
    )
    .unwrap();
    assert_bind_error(
        read_only.transactor.deposit(&TransactOpts::new(alice())).await,
        |err| matches!(err, BindError::MissingCapability("transactor")),
    )
    .unwrap();
    assert_bind_error(
        read_only
            .filterer
            .filter_deposit(&FilterOpts::range(0, None), &[])
            .await,
        |err| matches!(err, BindError::MissingCapability("filterer")),
    )
    .unwrap();
}

#[tokio::test]
async fn test_calls_respect_cancelled_context() {
    let (_backend, caps) = setup();
    let weth = deploy(caps).await;

    let token = contract_bind::CancelToken::new();
    token.cancel();
    let opts = CallOpts {
        context: Context::with_cancel(token),
        ..CallOpts::default()
    };
    assert_bind_error(weth.caller.delay(&opts).await, |err| {
        matches!(err, BindError::Cancelled)
    })
    .unwrap();
}
