//! Shared fixture for the simulated-chain tests
//!
//! `Fixture` is a small contract implemented in Rust on top of the same ABI
//! descriptor the bindings use, so calldata and logs go through the real
//! encoder and decoder on both sides.

#![allow(dead_code)]

use std::sync::Arc;

use alloy::dyn_abi::DynSolValue;
use alloy::primitives::{Address, Bytes, U256};
use alloy::rpc::types::Log;
use contract_bind::testing::{CallEnv, SimulatedBackend, SimulatedContract};
use contract_bind::{
    AbiDescriptor, BoundContract, Capabilities, ContractEvent, ContractMetadata, EventRecord,
    Result, Revert, TransactOpts,
};

pub const FIXTURE_ABI: &str = r#"[
  {"type":"constructor","inputs":[{"name":"delay","type":"uint256"}],"stateMutability":"nonpayable"},
  {"type":"function","name":"echo","inputs":[{"name":"message","type":"string"}],"outputs":[{"name":"","type":"string"}],"stateMutability":"pure"},
  {"type":"function","name":"owner","inputs":[],"outputs":[{"name":"","type":"address"}],"stateMutability":"view"},
  {"type":"function","name":"delay","inputs":[],"outputs":[{"name":"","type":"uint256"}],"stateMutability":"view"},
  {"type":"function","name":"value","inputs":[],"outputs":[{"name":"","type":"uint256"}],"stateMutability":"view"},
  {"type":"function","name":"setValue","inputs":[{"name":"newValue","type":"uint256"}],"outputs":[],"stateMutability":"nonpayable"},
  {"type":"function","name":"guarded","inputs":[],"outputs":[],"stateMutability":"nonpayable"},
  {"type":"function","name":"withdraw","inputs":[{"name":"wad","type":"uint256"}],"outputs":[],"stateMutability":"nonpayable"},
  {"type":"function","name":"withdraw","inputs":[{"name":"wad","type":"uint256"},{"name":"to","type":"address"}],"outputs":[],"stateMutability":"nonpayable"},
  {"type":"function","name":"emitTransfer","inputs":[{"name":"dst","type":"address"},{"name":"wad","type":"uint256"}],"outputs":[],"stateMutability":"nonpayable"},
  {"type":"function","name":"note","inputs":[{"name":"tag","type":"string"},{"name":"body","type":"string"}],"outputs":[],"stateMutability":"nonpayable"},
  {"type":"event","name":"Transfer","inputs":[{"name":"src","type":"address","indexed":true},{"name":"dst","type":"address","indexed":true},{"name":"wad","type":"uint256","indexed":false}],"anonymous":false},
  {"type":"event","name":"Withdrawal","inputs":[{"name":"src","type":"address","indexed":true},{"name":"wad","type":"uint256","indexed":false},{"name":"to","type":"address","indexed":false}],"anonymous":false},
  {"type":"event","name":"Note","inputs":[{"name":"tag","type":"string","indexed":true},{"name":"body","type":"string","indexed":false}],"anonymous":false},
  {"type":"error","name":"Unauthorized","inputs":[{"name":"caller","type":"address"},{"name":"owner","type":"address"}]},
  {"type":"receive","stateMutability":"payable"}
]"#;

pub static FIXTURE: ContractMetadata =
    ContractMetadata::new("Fixture", FIXTURE_ABI, "0x608060405234801561001057600080fd5b50");

pub const ONE_WEEK: u64 = 604_800;

pub fn alice() -> Address {
    Address::repeat_byte(0xa1)
}

pub fn bob() -> Address {
    Address::repeat_byte(0xb0)
}

pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("contract_bind=debug")
        .with_test_writer()
        .try_init();
}

// =============================================================================
// Fixture contract
// =============================================================================

#[derive(Clone)]
pub struct Fixture {
    abi: Arc<AbiDescriptor>,
    owner: Address,
    delay: U256,
    value: U256,
}

impl Fixture {
    fn dispatch(&mut self, env: &mut CallEnv<'_>) -> Result<std::result::Result<Bytes, Revert>> {
        if env.input.is_empty() {
            return Ok(Ok(Bytes::new()));
        }
        let (entry, args) = self.abi.decode_input(env.input)?;
        let key = entry.key.clone();
        let mut args = args.into_iter();
        let out = match key.as_str() {
            "echo" => vec![args.next().unwrap_or(DynSolValue::String(String::new()))],
            "owner" => vec![DynSolValue::Address(self.owner)],
            "delay" => vec![DynSolValue::Uint(self.delay, 256)],
            "value" => vec![DynSolValue::Uint(self.value, 256)],
            "setValue" => {
                if env.sender != self.owner {
                    return Ok(Err(Revert::message("not owner")));
                }
                if let Some(DynSolValue::Uint(value, _)) = args.next() {
                    self.value = value;
                }
                vec![]
            }
            "guarded" => {
                if env.sender != self.owner {
                    let error = self.abi.error("Unauthorized").ok_or(
                        contract_bind::BindError::UnknownMethod("Unauthorized".into()),
                    )?;
                    let data = error.encode(vec![
                        DynSolValue::Address(env.sender),
                        DynSolValue::Address(self.owner),
                    ])?;
                    return Ok(Err(Revert::new(data)));
                }
                vec![]
            }
            "withdraw" | "withdraw0" => {
                let wad = args.next().unwrap_or(DynSolValue::Uint(U256::ZERO, 256));
                let to = args.next().unwrap_or(DynSolValue::Address(env.sender));
                let log = self.abi.encode_event(
                    "Withdrawal",
                    vec![DynSolValue::Address(env.sender), wad, to],
                )?;
                env.emit(log);
                vec![]
            }
            "emitTransfer" => {
                let mut values = vec![DynSolValue::Address(env.sender)];
                values.extend(args);
                env.emit(self.abi.encode_event("Transfer", values)?);
                vec![]
            }
            "note" => {
                env.emit(self.abi.encode_event("Note", args.collect())?);
                vec![]
            }
            _ => return Ok(Err(Revert::default())),
        };
        Ok(Ok(self.abi.encode_returns(&key, out)?))
    }
}

impl SimulatedContract for Fixture {
    fn execute(&mut self, env: &mut CallEnv<'_>) -> std::result::Result<Bytes, Revert> {
        self.dispatch(env).unwrap_or_else(|err| Err(Revert::message(err.to_string())))
    }

    fn snapshot(&self) -> Box<dyn SimulatedContract> {
        Box::new(self.clone())
    }
}

/// Emits a `Transfer` log with a missing indexed topic on every call.
#[derive(Clone)]
pub struct Rogue {
    abi: Arc<AbiDescriptor>,
}

impl Rogue {
    pub fn new() -> Self {
        Self {
            abi: FIXTURE.abi().unwrap(),
        }
    }
}

impl SimulatedContract for Rogue {
    fn execute(&mut self, env: &mut CallEnv<'_>) -> std::result::Result<Bytes, Revert> {
        let topic0 = self.abi.event("Transfer").unwrap().topic0;
        env.emit(alloy::primitives::LogData::new_unchecked(
            vec![topic0, env.sender.into_word()],
            Bytes::from(vec![0u8; 32]),
        ));
        Ok(Bytes::new())
    }

    fn snapshot(&self) -> Box<dyn SimulatedContract> {
        Box::new(self.clone())
    }
}

// =============================================================================
// Setup
// =============================================================================

/// A simulated chain with the fixture artifact registered.
pub fn setup() -> (Arc<SimulatedBackend>, Capabilities) {
    init_logging();
    let backend = Arc::new(SimulatedBackend::new());
    let abi = FIXTURE.abi().unwrap();
    backend.register_artifact(FIXTURE.bytecode().unwrap(), move |args, env| {
        let delay = match args.get(..32) {
            Some(word) => U256::from_be_slice(word),
            None => return Err(Revert::message("missing delay")),
        };
        Ok(Box::new(Fixture {
            abi: abi.clone(),
            owner: env.sender,
            delay,
            value: U256::ZERO,
        }))
    });
    let caps = Capabilities::from_backend(backend.clone());
    (backend, caps)
}

/// Deploy the fixture from alice with a one-week delay.
pub async fn deploy(caps: &Capabilities) -> BoundContract {
    let (_, _, contract) = contract_bind::deploy_contract(
        &TransactOpts::new(alice()),
        &FIXTURE,
        caps.clone(),
        vec![DynSolValue::Uint(U256::from(ONE_WEEK), 256)],
    )
    .await
    .unwrap();
    contract
}

// =============================================================================
// Typed events
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Transfer {
    pub src: Address,
    pub dst: Address,
    pub wad: U256,
    pub raw: Log,
}

impl ContractEvent for Transfer {
    const NAME: &'static str = "Transfer";

    fn from_record(record: EventRecord) -> Result<Self> {
        let (mut fields, raw) = record.into_reader();
        Ok(Self {
            src: fields.next("src")?,
            dst: fields.next("dst")?,
            wad: fields.next("wad")?,
            raw,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Withdrawal {
    pub src: Address,
    pub wad: U256,
    pub to: Address,
    pub raw: Log,
}

impl ContractEvent for Withdrawal {
    const NAME: &'static str = "Withdrawal";

    fn from_record(record: EventRecord) -> Result<Self> {
        let (mut fields, raw) = record.into_reader();
        Ok(Self {
            src: fields.next("src")?,
            wad: fields.next("wad")?,
            to: fields.next("to")?,
            raw,
        })
    }
}
