//! Typed bindings for the `DelayedVetoable` contract.
//!
//! Generated by `bindgen`; do not edit. Regenerate with `bindgen generate`.

#![allow(unused_imports, clippy::too_many_arguments)]

use std::sync::Arc;

use contract_bind::alloy::dyn_abi::DynSolValue;
use contract_bind::alloy::primitives::{Address, Bytes, FixedBytes, B256, I256, U256};
use contract_bind::alloy::rpc::types::Log;
use contract_bind::{
    deploy_contract, topic_values, BoundContract, CallOpts, Caller, Capabilities, ContractEvent,
    ContractMetadata, EventIterator, EventRecord, FieldReader, FilterOpts, Filterer, IntoSolValue,
    Result, Subscription, TransactOpts, Transactor, TxHandle, WatchOpts,
};
use tokio::sync::mpsc;

/// ABI of `DelayedVetoable`.
pub const DELAYED_VETOABLE_ABI: &str = r#"[{"inputs":[{"internalType":"address","name":"vetoer_","type":"address"},{"internalType":"address","name":"initiator_","type":"address"},{"internalType":"address","name":"target_","type":"address"},{"internalType":"uint256","name":"delay_","type":"uint256"}],"stateMutability":"nonpayable","type":"constructor"},{"inputs":[],"name":"ForwardingEarly","type":"error"},{"inputs":[],"name":"TargetUnitialized","type":"error"},{"inputs":[{"internalType":"address","name":"expected","type":"address"},{"internalType":"address","name":"actual","type":"address"}],"name":"Unauthorized","type":"error"},{"anonymous":false,"inputs":[{"indexed":true,"internalType":"bytes32","name":"callHash","type":"bytes32"},{"indexed":false,"internalType":"bytes","name":"data","type":"bytes"}],"name":"Forwarded","type":"event"},{"anonymous":false,"inputs":[{"indexed":true,"internalType":"bytes32","name":"callHash","type":"bytes32"},{"indexed":false,"internalType":"bytes","name":"data","type":"bytes"}],"name":"Initiated","type":"event"},{"anonymous":false,"inputs":[{"indexed":true,"internalType":"bytes32","name":"callHash","type":"bytes32"},{"indexed":false,"internalType":"bytes","name":"data","type":"bytes"}],"name":"Vetoed","type":"event"},{"stateMutability":"payable","type":"fallback"},{"inputs":[],"name":"delay","outputs":[{"internalType":"uint256","name":"","type":"uint256"}],"stateMutability":"nonpayable","type":"function"},{"inputs":[],"name":"initiator","outputs":[{"internalType":"address","name":"","type":"address"}],"stateMutability":"nonpayable","type":"function"},{"inputs":[],"name":"target","outputs":[{"internalType":"address","name":"","type":"address"}],"stateMutability":"nonpayable","type":"function"},{"inputs":[],"name":"version","outputs":[{"internalType":"string","name":"","type":"string"}],"stateMutability":"view","type":"function"},{"inputs":[],"name":"vetoer","outputs":[{"internalType":"address","name":"","type":"address"}],"stateMutability":"nonpayable","type":"function"},{"stateMutability":"payable","type":"receive"}]"#;

/// Creation bytecode of `DelayedVetoable`.
pub const DELAYED_VETOABLE_BIN: &str = "0x60e060405234801561001057600080fd5b50604051610a27380380610a2783398101604081905261002f9161009f565b6000608081905260a0819052600160c081905280546001600160a01b03199081166001600160a01b0397881617909155600280548216958716959095179094558054909316919093161790556004556100ea565b80516001600160a01b038116811461009a57600080fd5b919050565b600080600080608085870312156100b557600080fd5b6100be85610083565b93506100cc60208601610083565b92506100da60408601610083565b6060959095015193969295505050565b60805160a05160c05161090e61011960003960006104560152600061042d01526000610404015261090e6000f3fe60806040526004361061005e5760003560e01c80636a42b8f8116100435780636a42b8f8146100da578063d4b83992146100fd578063d8bff440146101125761006d565b806354fd4d50146100755780635c39fcc1146100a05761006d565b3661006d5761006b610127565b005b61006b610127565b34801561008157600080fd5b5061008a6103fd565b6040516100979190610692565b60405180910390f35b3480156100ac57600080fd5b506100b56104a0565b60405173ffffffffffffffffffffffffffffffffffffffff9091168152602001610097565b3480156100e657600080fd5b506100ef6104cf565b604051908152602001610097565b34801561010957600080fd5b506100b56104dd565b34801561011e57600080fd5b506100b5610501565b600080366040516101399291906106e3565b60405190819003902060025490915073ffffffffffffffffffffffffffffffffffffffff16331480156101785750600081815260036020526040902054155b156101cb576000818152600360205260408082204290555182917f87a332a414acbc7da074543639ce7ae02ff1ea72e88379da9f261b080beb5a13916101c0919036906106f3565b60405180910390a250565b60015473ffffffffffffffffffffffffffffffffffffffff16331480156101ff575060008181526003602052604090205415155b80156102265750600454600082815260036020526040902054610222919061076f565b4211155b1561026e576000818152600360205260408082208290555182917fbede6852c1d97d93ff557f676de76670cd0dec861e7fe8beb13aa0ba2b0ab040916101c0919036906106f3565b60008181526003602052604081205490036102db576002546040517f295a81c100000000000000000000000000000000000000000000000000000000815273ffffffffffffffffffffffffffffffffffffffff909116600482015233602482015260440160405180910390fd5b60045460008281526003602052604090205442916102f89161076f565b1015610330576040517f43dc986d00000000000000000000000000000000000000000000000000000000815260040160405180910390fd5b6000818152600360205260408082208290555182917f4c109d85bcd0bb5c735b4be850953d652afe4cd9aa2e0b1426a65a4dcb2e122991610373919036906106f3565b60405180910390a26000805460405173ffffffffffffffffffffffffffffffffffffffff909116906103a890839036906106e3565b6000604051808303816000865af19150503d80600081146103e5576040519150601f19603f3d011682016040523d82523d6000602084013e6103ea565b606091505b50509050806103f8573d6000fd5b3d6000f35b60606104287f0000000000000000000000000000000000000000000000000000000000000000610525565b6104517f0000000000000000000000000000000000000000000000000000000000000000610525565b61047a7f0000000000000000000000000000000000000000000000000000000000000000610525565b60405160200161048c93929190610787565b604051602081830303815290604052905090565b6000336104c4575060025473ffffffffffffffffffffffffffffffffffffffff1690565b6104cc610127565b90565b6000336104c4575060045490565b6000336104c4575060005473ffffffffffffffffffffffffffffffffffffffff1690565b6000336104c4575060015473ffffffffffffffffffffffffffffffffffffffff1690565b60608160000361056857505060408051808201909152600181527f3000000000000000000000000000000000000000000000000000000000000000602082015290565b8160005b8115610592578061057c816107fd565b915061058b9050600a83610864565b915061056c565b60008167ffffffffffffffff8111156105ad576105ad610878565b6040519080825280601f01601f1916602001820160405280156105d7576020820181803683370190505b5090505b841561065a576105ec6001836108a7565b91506105f9600a866108be565b61060490603061076f565b60f81b818381518110610619576106196108d2565b60200101907effffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff1916908160001a905350610653600a86610864565b94506105db565b949350505050565b60005b8381101561067d578181015183820152602001610665565b8381111561068c576000848401525b50505050565b60208152600082518060208401526106b1816040850160208701610662565b601f017fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe0169190910160400192915050565b8183823760009101908152919050565b60208152816020820152818360408301376000818301604090810191909152601f9092017fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe0160101919050565b7f4e487b7100000000000000000000000000000000000000000000000000000000600052601160045260246000fd5b6000821982111561078257610782610740565b500190565b60008451610799818460208901610662565b80830190507f2e0000000000000000000000000000000000000000000000000000000000000080825285516107d5816001850160208a01610662565b600192019182015283516107f0816002840160208801610662565b0160020195945050505050565b60007fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff820361082e5761082e610740565b5060010190565b7f4e487b7100000000000000000000000000000000000000000000000000000000600052601260045260246000fd5b60008261087357610873610835565b500490565b7f4e487b7100000000000000000000000000000000000000000000000000000000600052604160045260246000fd5b6000828210156108b9576108b9610740565b500390565b6000826108cd576108cd610835565b500690565b7f4e487b7100000000000000000000000000000000000000000000000000000000600052603260045260246000fdfea164736f6c634300080f000a";

/// Runtime bytecode of `DelayedVetoable`, immutables zero-filled.
pub const DELAYED_VETOABLE_DEPLOYED_BIN: &str = "0x60806040526004361061005e5760003560e01c80636a42b8f8116100435780636a42b8f8146100da578063d4b83992146100fd578063d8bff440146101125761006d565b806354fd4d50146100755780635c39fcc1146100a05761006d565b3661006d5761006b610127565b005b61006b610127565b34801561008157600080fd5b5061008a6103fd565b6040516100979190610692565b60405180910390f35b3480156100ac57600080fd5b506100b56104a0565b60405173ffffffffffffffffffffffffffffffffffffffff9091168152602001610097565b3480156100e657600080fd5b506100ef6104cf565b604051908152602001610097565b34801561010957600080fd5b506100b56104dd565b34801561011e57600080fd5b506100b5610501565b600080366040516101399291906106e3565b60405190819003902060025490915073ffffffffffffffffffffffffffffffffffffffff16331480156101785750600081815260036020526040902054155b156101cb576000818152600360205260408082204290555182917f87a332a414acbc7da074543639ce7ae02ff1ea72e88379da9f261b080beb5a13916101c0919036906106f3565b60405180910390a250565b60015473ffffffffffffffffffffffffffffffffffffffff16331480156101ff575060008181526003602052604090205415155b80156102265750600454600082815260036020526040902054610222919061076f565b4211155b1561026e576000818152600360205260408082208290555182917fbede6852c1d97d93ff557f676de76670cd0dec861e7fe8beb13aa0ba2b0ab040916101c0919036906106f3565b60008181526003602052604081205490036102db576002546040517f295a81c100000000000000000000000000000000000000000000000000000000815273ffffffffffffffffffffffffffffffffffffffff909116600482015233602482015260440160405180910390fd5b60045460008281526003602052604090205442916102f89161076f565b1015610330576040517f43dc986d00000000000000000000000000000000000000000000000000000000815260040160405180910390fd5b6000818152600360205260408082208290555182917f4c109d85bcd0bb5c735b4be850953d652afe4cd9aa2e0b1426a65a4dcb2e122991610373919036906106f3565b60405180910390a26000805460405173ffffffffffffffffffffffffffffffffffffffff909116906103a890839036906106e3565b6000604051808303816000865af19150503d80600081146103e5576040519150601f19603f3d011682016040523d82523d6000602084013e6103ea565b606091505b50509050806103f8573d6000fd5b3d6000f35b60606104287f0000000000000000000000000000000000000000000000000000000000000000610525565b6104517f0000000000000000000000000000000000000000000000000000000000000000610525565b61047a7f0000000000000000000000000000000000000000000000000000000000000000610525565b60405160200161048c93929190610787565b604051602081830303815290604052905090565b6000336104c4575060025473ffffffffffffffffffffffffffffffffffffffff1690565b6104cc610127565b90565b6000336104c4575060045490565b6000336104c4575060005473ffffffffffffffffffffffffffffffffffffffff1690565b6000336104c4575060015473ffffffffffffffffffffffffffffffffffffffff1690565b60608160000361056857505060408051808201909152600181527f3000000000000000000000000000000000000000000000000000000000000000602082015290565b8160005b8115610592578061057c816107fd565b915061058b9050600a83610864565b915061056c565b60008167ffffffffffffffff8111156105ad576105ad610878565b6040519080825280601f01601f1916602001820160405280156105d7576020820181803683370190505b5090505b841561065a576105ec6001836108a7565b91506105f9600a866108be565b61060490603061076f565b60f81b818381518110610619576106196108d2565b60200101907effffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff1916908160001a905350610653600a86610864565b94506105db565b949350505050565b60005b8381101561067d578181015183820152602001610665565b8381111561068c576000848401525b50505050565b60208152600082518060208401526106b1816040850160208701610662565b601f017fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe0169190910160400192915050565b8183823760009101908152919050565b60208152816020820152818360408301376000818301604090810191909152601f9092017fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe0160101919050565b7f4e487b7100000000000000000000000000000000000000000000000000000000600052601160045260246000fd5b6000821982111561078257610782610740565b500190565b60008451610799818460208901610662565b80830190507f2e0000000000000000000000000000000000000000000000000000000000000080825285516107d5816001850160208a01610662565b600192019182015283516107f0816002840160208801610662565b0160020195945050505050565b60007fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff820361082e5761082e610740565b5060010190565b7f4e487b7100000000000000000000000000000000000000000000000000000000600052601260045260246000fd5b60008261087357610873610835565b500490565b7f4e487b7100000000000000000000000000000000000000000000000000000000600052604160045260246000fd5b6000828210156108b9576108b9610740565b500390565b6000826108cd576108cd610835565b500690565b7f4e487b7100000000000000000000000000000000000000000000000000000000600052603260045260246000fdfea164736f6c634300080f000a";

/// solc storage layout of `DelayedVetoable`.
pub const DELAYED_VETOABLE_STORAGE_LAYOUT: &str = r#"{"storage":[{"astId":60811,"contract":"src/L1/DelayedVetoable.sol:DelayedVetoable","label":"_delay","offset":0,"slot":"0","type":"t_uint256"},{"astId":60816,"contract":"src/L1/DelayedVetoable.sol:DelayedVetoable","label":"_queuedAt","offset":0,"slot":"1","type":"t_mapping(t_bytes32,t_uint256)"}],"types":{"t_bytes32":{"encoding":"inplace","label":"bytes32","numberOfBytes":"32"},"t_mapping(t_bytes32,t_uint256)":{"encoding":"mapping","key":"t_bytes32","label":"mapping(bytes32 => uint256)","numberOfBytes":"32","value":"t_uint256"},"t_uint256":{"encoding":"inplace","label":"uint256","numberOfBytes":"32"}}}"#;

/// Metadata used to deploy and bind `DelayedVetoable`.
pub static DELAYED_VETOABLE_METADATA: ContractMetadata = ContractMetadata::with_runtime(
    "DelayedVetoable",
    DELAYED_VETOABLE_ABI,
    DELAYED_VETOABLE_BIN,
    DELAYED_VETOABLE_DEPLOYED_BIN,
    DELAYED_VETOABLE_STORAGE_LAYOUT,
);

/// Deploy a new `DelayedVetoable` and bind it.
pub async fn deploy_delayed_vetoable(
    opts: &TransactOpts,
    caps: Capabilities,
    vetoer_: Address,
    initiator_: Address,
    target_: Address,
    delay_: U256,
) -> Result<(Address, TxHandle, DelayedVetoable)> {
    let (address, tx, contract) = deploy_contract(
        opts,
        &DELAYED_VETOABLE_METADATA,
        caps,
        vec![
            vetoer_.into_sol_value(),
            initiator_.into_sol_value(),
            target_.into_sol_value(),
            delay_.into_sol_value(),
        ],
    )
    .await?;
    Ok((address, tx, DelayedVetoable::from_bound(contract)))
}

// =============================================================================
// Facade
// =============================================================================

/// Binding to a deployed `DelayedVetoable`, split by capability.
#[derive(Clone)]
pub struct DelayedVetoable {
    pub caller: DelayedVetoableCaller,
    pub transactor: DelayedVetoableTransactor,
    pub filterer: DelayedVetoableFilterer,
}

impl DelayedVetoable {
    /// Bind every capability present in `caps` at `address`.
    pub fn new(address: Address, caps: Capabilities) -> Result<Self> {
        let contract = DELAYED_VETOABLE_METADATA.bind(address, caps)?;
        Ok(Self::from_bound(contract))
    }

    pub fn from_bound(contract: BoundContract) -> Self {
        Self {
            caller: DelayedVetoableCaller {
                contract: contract.clone(),
            },
            transactor: DelayedVetoableTransactor {
                contract: contract.clone(),
            },
            filterer: DelayedVetoableFilterer { contract },
        }
    }

    pub fn address(&self) -> Address {
        self.caller.contract.address()
    }

    /// The untyped contract all entry points delegate to.
    pub fn bound(&self) -> &BoundContract {
        &self.caller.contract
    }
}

/// Read-only binding to `DelayedVetoable`.
#[derive(Clone)]
pub struct DelayedVetoableCaller {
    contract: BoundContract,
}

impl DelayedVetoableCaller {
    pub fn new(address: Address, caller: Arc<dyn Caller>) -> Result<Self> {
        let caps = Capabilities::new().with_caller(caller);
        Ok(Self {
            contract: DELAYED_VETOABLE_METADATA.bind(address, caps)?,
        })
    }

    /// Calls `version()`.
    pub async fn version(&self, opts: &CallOpts) -> Result<String> {
        self.contract.call_single(opts, "version", vec![]).await
    }
}

/// Write-only binding to `DelayedVetoable`.
#[derive(Clone)]
pub struct DelayedVetoableTransactor {
    contract: BoundContract,
}

impl DelayedVetoableTransactor {
    pub fn new(address: Address, transactor: Arc<dyn Transactor>) -> Result<Self> {
        let caps = Capabilities::new().with_transactor(transactor);
        Ok(Self {
            contract: DELAYED_VETOABLE_METADATA.bind(address, caps)?,
        })
    }

    /// Transacts `delay()`.
    pub async fn delay(&self, opts: &TransactOpts) -> Result<TxHandle> {
        self.contract.transact(opts, "delay", vec![]).await
    }

    /// Transacts `initiator()`.
    pub async fn initiator(&self, opts: &TransactOpts) -> Result<TxHandle> {
        self.contract.transact(opts, "initiator", vec![]).await
    }

    /// Transacts `target()`.
    pub async fn target(&self, opts: &TransactOpts) -> Result<TxHandle> {
        self.contract.transact(opts, "target", vec![]).await
    }

    /// Transacts `vetoer()`.
    pub async fn vetoer(&self, opts: &TransactOpts) -> Result<TxHandle> {
        self.contract.transact(opts, "vetoer", vec![]).await
    }

    /// Sends `calldata` to the fallback function.
    pub async fn fallback(&self, opts: &TransactOpts, calldata: Bytes) -> Result<TxHandle> {
        self.contract.raw_transact(opts, calldata).await
    }

    /// Sends `opts.value` with empty calldata to the receive function.
    pub async fn receive(&self, opts: &TransactOpts) -> Result<TxHandle> {
        self.contract.transfer(opts).await
    }
}

/// Log filtering binding to `DelayedVetoable`.
#[derive(Clone)]
pub struct DelayedVetoableFilterer {
    contract: BoundContract,
}

impl DelayedVetoableFilterer {
    pub fn new(address: Address, filterer: Arc<dyn Filterer>) -> Result<Self> {
        let caps = Capabilities::new().with_filterer(filterer);
        Ok(Self {
            contract: DELAYED_VETOABLE_METADATA.bind(address, caps)?,
        })
    }

    /// Historical `Forwarded` events; an empty slice matches any value.
    pub async fn filter_forwarded(
        &self,
        opts: &FilterOpts,
        call_hash: &[FixedBytes<32>],
    ) -> Result<DelayedVetoableForwardedIterator> {
        self.contract
            .filter_events(opts, &[topic_values(call_hash)])
            .await
    }

    /// Push live `Forwarded` events into `sink` until unsubscribed.
    pub async fn watch_forwarded(
        &self,
        opts: &WatchOpts,
        sink: mpsc::Sender<DelayedVetoableForwarded>,
        call_hash: &[FixedBytes<32>],
    ) -> Result<Subscription> {
        self.contract
            .watch_with(opts, sink, &[topic_values(call_hash)])
            .await
    }

    /// Live `Forwarded` events as an iterator.
    pub async fn subscribe_forwarded(
        &self,
        opts: &WatchOpts,
        call_hash: &[FixedBytes<32>],
    ) -> Result<DelayedVetoableForwardedIterator> {
        self.contract
            .watch_events(opts, &[topic_values(call_hash)])
            .await
    }

    /// Decode one `Forwarded` log.
    pub fn parse_forwarded(&self, log: &Log) -> Result<DelayedVetoableForwarded> {
        self.contract
            .unpack_log(DelayedVetoableForwarded::NAME, log)
            .and_then(DelayedVetoableForwarded::from_record)
    }

    /// Historical `Initiated` events; an empty slice matches any value.
    pub async fn filter_initiated(
        &self,
        opts: &FilterOpts,
        call_hash: &[FixedBytes<32>],
    ) -> Result<DelayedVetoableInitiatedIterator> {
        self.contract
            .filter_events(opts, &[topic_values(call_hash)])
            .await
    }

    /// Push live `Initiated` events into `sink` until unsubscribed.
    pub async fn watch_initiated(
        &self,
        opts: &WatchOpts,
        sink: mpsc::Sender<DelayedVetoableInitiated>,
        call_hash: &[FixedBytes<32>],
    ) -> Result<Subscription> {
        self.contract
            .watch_with(opts, sink, &[topic_values(call_hash)])
            .await
    }

    /// Live `Initiated` events as an iterator.
    pub async fn subscribe_initiated(
        &self,
        opts: &WatchOpts,
        call_hash: &[FixedBytes<32>],
    ) -> Result<DelayedVetoableInitiatedIterator> {
        self.contract
            .watch_events(opts, &[topic_values(call_hash)])
            .await
    }

    /// Decode one `Initiated` log.
    pub fn parse_initiated(&self, log: &Log) -> Result<DelayedVetoableInitiated> {
        self.contract
            .unpack_log(DelayedVetoableInitiated::NAME, log)
            .and_then(DelayedVetoableInitiated::from_record)
    }

    /// Historical `Vetoed` events; an empty slice matches any value.
    pub async fn filter_vetoed(
        &self,
        opts: &FilterOpts,
        call_hash: &[FixedBytes<32>],
    ) -> Result<DelayedVetoableVetoedIterator> {
        self.contract
            .filter_events(opts, &[topic_values(call_hash)])
            .await
    }

    /// Push live `Vetoed` events into `sink` until unsubscribed.
    pub async fn watch_vetoed(
        &self,
        opts: &WatchOpts,
        sink: mpsc::Sender<DelayedVetoableVetoed>,
        call_hash: &[FixedBytes<32>],
    ) -> Result<Subscription> {
        self.contract
            .watch_with(opts, sink, &[topic_values(call_hash)])
            .await
    }

    /// Live `Vetoed` events as an iterator.
    pub async fn subscribe_vetoed(
        &self,
        opts: &WatchOpts,
        call_hash: &[FixedBytes<32>],
    ) -> Result<DelayedVetoableVetoedIterator> {
        self.contract
            .watch_events(opts, &[topic_values(call_hash)])
            .await
    }

    /// Decode one `Vetoed` log.
    pub fn parse_vetoed(&self, log: &Log) -> Result<DelayedVetoableVetoed> {
        self.contract
            .unpack_log(DelayedVetoableVetoed::NAME, log)
            .and_then(DelayedVetoableVetoed::from_record)
    }
}

// =============================================================================
// Sessions
// =============================================================================

/// `DelayedVetoable` with call and transact options fixed.
#[derive(Clone)]
pub struct DelayedVetoableSession {
    pub contract: DelayedVetoable,
    pub call_opts: CallOpts,
    pub transact_opts: TransactOpts,
}

impl DelayedVetoableSession {
    pub fn new(
        contract: DelayedVetoable,
        call_opts: CallOpts,
        transact_opts: TransactOpts,
    ) -> Self {
        Self {
            contract,
            call_opts,
            transact_opts,
        }
    }

    pub async fn version(&self) -> Result<String> {
        self.contract.caller.version(&self.call_opts).await
    }

    pub async fn delay(&self) -> Result<TxHandle> {
        self.contract.transactor.delay(&self.transact_opts).await
    }

    pub async fn initiator(&self) -> Result<TxHandle> {
        self.contract
            .transactor
            .initiator(&self.transact_opts)
            .await
    }

    pub async fn target(&self) -> Result<TxHandle> {
        self.contract.transactor.target(&self.transact_opts).await
    }

    pub async fn vetoer(&self) -> Result<TxHandle> {
        self.contract.transactor.vetoer(&self.transact_opts).await
    }

    pub async fn fallback(&self, calldata: Bytes) -> Result<TxHandle> {
        self.contract
            .transactor
            .fallback(&self.transact_opts, calldata)
            .await
    }

    pub async fn receive(&self) -> Result<TxHandle> {
        self.contract.transactor.receive(&self.transact_opts).await
    }
}

/// `DelayedVetoableCaller` with call options fixed.
#[derive(Clone)]
pub struct DelayedVetoableCallerSession {
    pub contract: DelayedVetoableCaller,
    pub call_opts: CallOpts,
}

impl DelayedVetoableCallerSession {
    pub fn new(contract: DelayedVetoableCaller, call_opts: CallOpts) -> Self {
        Self {
            contract,
            call_opts,
        }
    }

    pub async fn version(&self) -> Result<String> {
        self.contract.version(&self.call_opts).await
    }
}

/// `DelayedVetoableTransactor` with transact options fixed.
#[derive(Clone)]
pub struct DelayedVetoableTransactorSession {
    pub contract: DelayedVetoableTransactor,
    pub transact_opts: TransactOpts,
}

impl DelayedVetoableTransactorSession {
    pub fn new(contract: DelayedVetoableTransactor, transact_opts: TransactOpts) -> Self {
        Self {
            contract,
            transact_opts,
        }
    }

    pub async fn delay(&self) -> Result<TxHandle> {
        self.contract.delay(&self.transact_opts).await
    }

    pub async fn initiator(&self) -> Result<TxHandle> {
        self.contract.initiator(&self.transact_opts).await
    }

    pub async fn target(&self) -> Result<TxHandle> {
        self.contract.target(&self.transact_opts).await
    }

    pub async fn vetoer(&self) -> Result<TxHandle> {
        self.contract.vetoer(&self.transact_opts).await
    }

    pub async fn fallback(&self, calldata: Bytes) -> Result<TxHandle> {
        self.contract.fallback(&self.transact_opts, calldata).await
    }

    pub async fn receive(&self) -> Result<TxHandle> {
        self.contract.receive(&self.transact_opts).await
    }
}

// =============================================================================
// Forwarded
// =============================================================================

/// `Forwarded(bytes32,bytes)`
#[derive(Debug, Clone, PartialEq)]
pub struct DelayedVetoableForwarded {
    pub call_hash: FixedBytes<32>,
    pub data: Bytes,
    /// The log this event was decoded from
    pub raw: Log,
}

impl ContractEvent for DelayedVetoableForwarded {
    const NAME: &'static str = "Forwarded";

    fn from_record(record: EventRecord) -> Result<Self> {
        let (mut reader, raw) = record.into_reader();
        Ok(Self {
            call_hash: reader.next("call_hash")?,
            data: reader.next("data")?,
            raw,
        })
    }
}

/// Iterator over `Forwarded` events.
pub type DelayedVetoableForwardedIterator = EventIterator<DelayedVetoableForwarded>;

// =============================================================================
// Initiated
// =============================================================================

/// `Initiated(bytes32,bytes)`
#[derive(Debug, Clone, PartialEq)]
pub struct DelayedVetoableInitiated {
    pub call_hash: FixedBytes<32>,
    pub data: Bytes,
    /// The log this event was decoded from
    pub raw: Log,
}

impl ContractEvent for DelayedVetoableInitiated {
    const NAME: &'static str = "Initiated";

    fn from_record(record: EventRecord) -> Result<Self> {
        let (mut reader, raw) = record.into_reader();
        Ok(Self {
            call_hash: reader.next("call_hash")?,
            data: reader.next("data")?,
            raw,
        })
    }
}

/// Iterator over `Initiated` events.
pub type DelayedVetoableInitiatedIterator = EventIterator<DelayedVetoableInitiated>;

// =============================================================================
// Vetoed
// =============================================================================

/// `Vetoed(bytes32,bytes)`
#[derive(Debug, Clone, PartialEq)]
pub struct DelayedVetoableVetoed {
    pub call_hash: FixedBytes<32>,
    pub data: Bytes,
    /// The log this event was decoded from
    pub raw: Log,
}

impl ContractEvent for DelayedVetoableVetoed {
    const NAME: &'static str = "Vetoed";

    fn from_record(record: EventRecord) -> Result<Self> {
        let (mut reader, raw) = record.into_reader();
        Ok(Self {
            call_hash: reader.next("call_hash")?,
            data: reader.next("data")?,
            raw,
        })
    }
}

/// Iterator over `Vetoed` events.
pub type DelayedVetoableVetoedIterator = EventIterator<DelayedVetoableVetoed>;
