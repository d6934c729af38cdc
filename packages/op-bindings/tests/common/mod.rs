//! Simulated `DelayedWETH` and `DelayedVetoable` contracts
//!
//! Both contracts are written in Rust against the generated ABI, so the typed
//! bindings talk to them through the real encoder and decoder. Their behaviour
//! follows the Solidity sources closely enough for the bindings to be driven
//! through realistic flows (deposits, delayed withdrawals, vetoable calls).

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use alloy::dyn_abi::{DynSolType, DynSolValue};
use alloy::primitives::{keccak256, Address, Bytes, Selector, B256, U256};
use contract_bind::testing::{CallEnv, SimulatedBackend, SimulatedContract};
use contract_bind::{AbiDescriptor, BindError, Capabilities, Result, Revert};
use op_bindings::{DELAYED_VETOABLE_METADATA, DELAYED_WETH_METADATA};

type Outcome = std::result::Result<Bytes, Revert>;

pub const ONE_WEEK: u64 = 604_800;

pub fn alice() -> Address {
    Address::repeat_byte(0xa1)
}

pub fn bob() -> Address {
    Address::repeat_byte(0xb0)
}

pub fn carol() -> Address {
    Address::repeat_byte(0xc4)
}

pub fn ether(amount: u64) -> U256 {
    U256::from(amount) * U256::from(10u64).pow(U256::from(18u64))
}

pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("contract_bind=debug")
        .with_test_writer()
        .try_init();
}

fn uint(value: Option<DynSolValue>) -> U256 {
    match value {
        Some(DynSolValue::Uint(v, _)) => v,
        _ => U256::ZERO,
    }
}

fn address(value: Option<DynSolValue>) -> Address {
    value.and_then(|v| v.as_address()).unwrap_or(Address::ZERO)
}

fn known_selector(abi: &AbiDescriptor, input: &[u8]) -> bool {
    input.len() >= 4
        && abi
            .method_by_selector(Selector::from_slice(&input[..4]))
            .is_some()
}

fn custom_error(abi: &AbiDescriptor, name: &str, args: Vec<DynSolValue>) -> Result<Outcome> {
    let error = abi
        .error(name)
        .ok_or_else(|| BindError::UnknownMethod(name.to_string()))?;
    Ok(Err(Revert::new(error.encode(args)?)))
}

fn require(condition: bool, message: &str) -> Option<Outcome> {
    (!condition).then(|| Err(Revert::message(message)))
}

// =============================================================================
// DelayedWETH
// =============================================================================

/// WETH9 with owner-controlled holds and delayed withdrawals.
#[derive(Clone)]
pub struct SimDelayedWeth {
    abi: Arc<AbiDescriptor>,
    delay: U256,
    owner: Address,
    config: Address,
    initialized: bool,
    balances: HashMap<Address, U256>,
    allowances: HashMap<(Address, Address), U256>,
    /// (owner, guy) -> (amount, unlock timestamp)
    withdrawals: HashMap<(Address, Address), (U256, U256)>,
}

impl SimDelayedWeth {
    pub fn new(delay: U256) -> Self {
        Self {
            abi: DELAYED_WETH_METADATA.abi().unwrap(),
            delay,
            owner: Address::ZERO,
            config: Address::ZERO,
            initialized: false,
            balances: HashMap::new(),
            allowances: HashMap::new(),
            withdrawals: HashMap::new(),
        }
    }

    fn balance(&self, who: Address) -> U256 {
        self.balances.get(&who).copied().unwrap_or_default()
    }

    fn emit(&self, env: &mut CallEnv<'_>, event: &str, values: Vec<DynSolValue>) -> Result<()> {
        env.emit(self.abi.encode_event(event, values)?);
        Ok(())
    }

    fn deposit(&mut self, env: &mut CallEnv<'_>) -> Result<Outcome> {
        *self.balances.entry(env.sender).or_default() += env.value;
        self.emit(
            env,
            "Deposit",
            vec![DynSolValue::Address(env.sender), DynSolValue::Uint(env.value, 256)],
        )?;
        Ok(Ok(Bytes::new()))
    }

    fn move_tokens(
        &mut self,
        env: &mut CallEnv<'_>,
        src: Address,
        dst: Address,
        wad: U256,
    ) -> Result<Option<Outcome>> {
        if self.balance(src) < wad {
            return Ok(Some(Err(Revert::default())));
        }
        if src != env.sender {
            let allowance = self.allowances.entry((src, env.sender)).or_default();
            if *allowance != U256::MAX {
                if *allowance < wad {
                    return Ok(Some(Err(Revert::default())));
                }
                *allowance -= wad;
            }
        }
        *self.balances.entry(src).or_default() -= wad;
        *self.balances.entry(dst).or_default() += wad;
        self.emit(
            env,
            "Transfer",
            vec![
                DynSolValue::Address(src),
                DynSolValue::Address(dst),
                DynSolValue::Uint(wad, 256),
            ],
        )?;
        Ok(None)
    }

    fn withdraw(&mut self, env: &mut CallEnv<'_>, guy: Address, wad: U256) -> Result<Outcome> {
        let (amount, unlocked_at) = self
            .withdrawals
            .get(&(env.sender, guy))
            .copied()
            .unwrap_or_default();
        let now = U256::from(env.timestamp);
        let checks = require(amount >= wad, "DelayedWETH: insufficient unlocked withdrawal")
            .or_else(|| require(unlocked_at > U256::ZERO, "DelayedWETH: withdrawal not unlocked"))
            .or_else(|| {
                require(
                    unlocked_at + self.delay <= now,
                    "DelayedWETH: withdrawal delay not met",
                )
            });
        if let Some(revert) = checks {
            return Ok(revert);
        }
        if self.balance(env.sender) < wad {
            return Ok(Err(Revert::default()));
        }
        self.withdrawals
            .insert((env.sender, guy), (amount - wad, unlocked_at));
        *self.balances.entry(env.sender).or_default() -= wad;
        self.emit(
            env,
            "Withdrawal",
            vec![DynSolValue::Address(env.sender), DynSolValue::Uint(wad, 256)],
        )?;
        Ok(Ok(Bytes::new()))
    }

    fn dispatch(&mut self, env: &mut CallEnv<'_>) -> Result<Outcome> {
        if !known_selector(&self.abi, env.input) {
            return self.deposit(env);
        }
        let (entry, args) = self.abi.decode_input(env.input)?;
        let key = entry.key.clone();
        let mut args = args.into_iter();
        let sender = env.sender;

        let out = match key.as_str() {
            "allowance" => {
                let (src, guy) = (address(args.next()), address(args.next()));
                let value = self.allowances.get(&(src, guy)).copied().unwrap_or_default();
                vec![DynSolValue::Uint(value, 256)]
            }
            "balanceOf" => vec![DynSolValue::Uint(self.balance(address(args.next())), 256)],
            "config" => vec![DynSolValue::Address(self.config)],
            "decimals" => vec![DynSolValue::Uint(U256::from(18u8), 8)],
            "delay" => vec![DynSolValue::Uint(self.delay, 256)],
            "name" => vec![DynSolValue::String("Wrapped Ether".into())],
            "owner" => vec![DynSolValue::Address(self.owner)],
            "symbol" => vec![DynSolValue::String("WETH".into())],
            "totalSupply" => {
                let total = self.balances.values().fold(U256::ZERO, |acc, v| acc + *v);
                vec![DynSolValue::Uint(total, 256)]
            }
            "version" => vec![DynSolValue::String("1.0.0".into())],
            "withdrawals" => {
                let (owner, guy) = (address(args.next()), address(args.next()));
                let (amount, timestamp) =
                    self.withdrawals.get(&(owner, guy)).copied().unwrap_or_default();
                vec![DynSolValue::Uint(amount, 256), DynSolValue::Uint(timestamp, 256)]
            }
            "deposit" => return self.deposit(env),
            "approve" => {
                let (guy, wad) = (address(args.next()), uint(args.next()));
                self.allowances.insert((sender, guy), wad);
                self.emit(
                    env,
                    "Approval",
                    vec![
                        DynSolValue::Address(sender),
                        DynSolValue::Address(guy),
                        DynSolValue::Uint(wad, 256),
                    ],
                )?;
                vec![DynSolValue::Bool(true)]
            }
            "transfer" => {
                let (dst, wad) = (address(args.next()), uint(args.next()));
                if let Some(revert) = self.move_tokens(env, sender, dst, wad)? {
                    return Ok(revert);
                }
                vec![DynSolValue::Bool(true)]
            }
            "transferFrom" => {
                let (src, dst, wad) = (address(args.next()), address(args.next()), uint(args.next()));
                if let Some(revert) = self.move_tokens(env, src, dst, wad)? {
                    return Ok(revert);
                }
                vec![DynSolValue::Bool(true)]
            }
            "hold" => {
                if let Some(revert) = require(sender == self.owner, "DelayedWETH: not owner") {
                    return Ok(revert);
                }
                let (guy, wad) = (address(args.next()), uint(args.next()));
                self.allowances.insert((guy, sender), wad);
                self.emit(
                    env,
                    "Approval",
                    vec![
                        DynSolValue::Address(guy),
                        DynSolValue::Address(sender),
                        DynSolValue::Uint(wad, 256),
                    ],
                )?;
                vec![]
            }
            "initialize" => {
                if let Some(revert) = require(
                    !self.initialized,
                    "Initializable: contract is already initialized",
                ) {
                    return Ok(revert);
                }
                let (owner, config) = (address(args.next()), address(args.next()));
                self.initialized = true;
                self.config = config;
                let previous = std::mem::replace(&mut self.owner, owner);
                self.emit(env, "Initialized", vec![DynSolValue::Uint(U256::from(1u8), 8)])?;
                self.emit(
                    env,
                    "OwnershipTransferred",
                    vec![DynSolValue::Address(previous), DynSolValue::Address(owner)],
                )?;
                vec![]
            }
            "recover" => {
                if let Some(revert) = require(sender == self.owner, "DelayedWETH: not owner") {
                    return Ok(revert);
                }
                vec![]
            }
            "renounceOwnership" | "transferOwnership" => {
                if let Some(revert) =
                    require(sender == self.owner, "Ownable: caller is not the owner")
                {
                    return Ok(revert);
                }
                let next = address(args.next());
                if key == "transferOwnership" {
                    if let Some(revert) =
                        require(next != Address::ZERO, "Ownable: new owner is the zero address")
                    {
                        return Ok(revert);
                    }
                }
                let previous = std::mem::replace(&mut self.owner, next);
                self.emit(
                    env,
                    "OwnershipTransferred",
                    vec![DynSolValue::Address(previous), DynSolValue::Address(next)],
                )?;
                vec![]
            }
            "unlock" => {
                let (guy, wad) = (address(args.next()), uint(args.next()));
                let entry = self.withdrawals.entry((sender, guy)).or_default();
                entry.0 += wad;
                entry.1 = U256::from(env.timestamp);
                vec![]
            }
            "withdraw" => return self.withdraw(env, sender, uint(args.next())),
            "withdraw0" => {
                let (guy, wad) = (address(args.next()), uint(args.next()));
                return self.withdraw(env, guy, wad);
            }
            _ => return Ok(Err(Revert::default())),
        };
        Ok(Ok(self.abi.encode_returns(&key, out)?))
    }
}

impl SimulatedContract for SimDelayedWeth {
    fn execute(&mut self, env: &mut CallEnv<'_>) -> Outcome {
        self.dispatch(env)
            .unwrap_or_else(|err| Err(Revert::message(err.to_string())))
    }

    fn snapshot(&self) -> Box<dyn SimulatedContract> {
        Box::new(self.clone())
    }
}

// =============================================================================
// DelayedVetoable
// =============================================================================

/// Queues calls from the initiator, lets the vetoer cancel them and forwards
/// them once the delay has passed.
#[derive(Clone)]
pub struct SimDelayedVetoable {
    abi: Arc<AbiDescriptor>,
    vetoer: Address,
    initiator: Address,
    target: Address,
    delay: U256,
    queued_at: HashMap<B256, u64>,
}

impl SimDelayedVetoable {
    pub fn new(vetoer: Address, initiator: Address, target: Address, delay: U256) -> Self {
        Self {
            abi: DELAYED_VETOABLE_METADATA.abi().unwrap(),
            vetoer,
            initiator,
            target,
            delay,
            queued_at: HashMap::new(),
        }
    }

    fn emit(&self, env: &mut CallEnv<'_>, event: &str, hash: B256) -> Result<()> {
        let log = self.abi.encode_event(
            event,
            vec![
                DynSolValue::FixedBytes(hash, 32),
                DynSolValue::Bytes(env.input.to_vec()),
            ],
        )?;
        env.emit(log);
        Ok(())
    }

    fn handle_call(&mut self, env: &mut CallEnv<'_>) -> Result<Outcome> {
        let hash = keccak256(env.input);
        let queued = self.queued_at.get(&hash).copied();

        if env.sender == self.initiator && self.delay.is_zero() {
            self.emit(env, "Forwarded", hash)?;
            return Ok(Ok(Bytes::new()));
        }
        if env.sender == self.initiator && queued.is_none() {
            self.queued_at.insert(hash, env.timestamp);
            self.emit(env, "Initiated", hash)?;
            return Ok(Ok(Bytes::new()));
        }
        if env.sender == self.vetoer && queued.is_some() {
            self.queued_at.remove(&hash);
            self.emit(env, "Vetoed", hash)?;
            return Ok(Ok(Bytes::new()));
        }

        let Some(queued_at) = queued else {
            return custom_error(
                &self.abi,
                "Unauthorized",
                vec![
                    DynSolValue::Address(self.initiator),
                    DynSolValue::Address(env.sender),
                ],
            );
        };
        if U256::from(queued_at) + self.delay > U256::from(env.timestamp) {
            return custom_error(&self.abi, "ForwardingEarly", vec![]);
        }
        self.queued_at.remove(&hash);
        self.emit(env, "Forwarded", hash)?;
        Ok(Ok(Bytes::new()))
    }

    fn dispatch(&mut self, env: &mut CallEnv<'_>) -> Result<Outcome> {
        if !known_selector(&self.abi, env.input) {
            return self.handle_call(env);
        }
        let (entry, _) = self.abi.decode_input(env.input)?;
        let key = entry.key.clone();

        // Getters answer only calls from the zero address; anything else is
        // treated as a call to forward.
        let out = match key.as_str() {
            "version" => DynSolValue::String("1.0.0".into()),
            _ if env.sender != Address::ZERO => return self.handle_call(env),
            "delay" => DynSolValue::Uint(self.delay, 256),
            "initiator" => DynSolValue::Address(self.initiator),
            "target" => DynSolValue::Address(self.target),
            "vetoer" => DynSolValue::Address(self.vetoer),
            _ => return Ok(Err(Revert::default())),
        };
        Ok(Ok(self.abi.encode_returns(&key, vec![out])?))
    }
}

impl SimulatedContract for SimDelayedVetoable {
    fn execute(&mut self, env: &mut CallEnv<'_>) -> Outcome {
        self.dispatch(env)
            .unwrap_or_else(|err| Err(Revert::message(err.to_string())))
    }

    fn snapshot(&self) -> Box<dyn SimulatedContract> {
        Box::new(self.clone())
    }
}

// =============================================================================
// Setup
// =============================================================================

/// A simulated chain with both generated artifacts registered.
pub fn setup() -> (Arc<SimulatedBackend>, Capabilities) {
    init_logging();
    let backend = Arc::new(SimulatedBackend::new());

    backend.register_artifact(DELAYED_WETH_METADATA.bytecode().unwrap(), |args, _env| {
        match DynSolType::Uint(256).abi_decode(args) {
            Ok(DynSolValue::Uint(delay, _)) => Ok(Box::new(SimDelayedWeth::new(delay))),
            _ => Err(Revert::message("bad constructor arguments")),
        }
    });

    backend.register_artifact(
        DELAYED_VETOABLE_METADATA.bytecode().unwrap(),
        |args, _env| {
            let params = DynSolType::Tuple(vec![
                DynSolType::Address,
                DynSolType::Address,
                DynSolType::Address,
                DynSolType::Uint(256),
            ]);
            let Ok(DynSolValue::Tuple(values)) = params.abi_decode_params(args) else {
                return Err(Revert::message("bad constructor arguments"));
            };
            let mut values = values.into_iter();
            let (vetoer, initiator, target) = (
                address(values.next()),
                address(values.next()),
                address(values.next()),
            );
            Ok(Box::new(SimDelayedVetoable::new(
                vetoer,
                initiator,
                target,
                uint(values.next()),
            )))
        },
    );

    let caps = Capabilities::from_backend(backend.clone());
    (backend, caps)
}
