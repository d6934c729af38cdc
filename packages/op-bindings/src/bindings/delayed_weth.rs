//! Typed bindings for the `DelayedWETH` contract.
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

/// ABI of `DelayedWETH`.
pub const DELAYED_WETH_ABI: &str = r#"[{"inputs":[{"internalType":"uint256","name":"_delay","type":"uint256"}],"stateMutability":"nonpayable","type":"constructor"},{"stateMutability":"payable","type":"fallback"},{"stateMutability":"payable","type":"receive"},{"inputs":[{"internalType":"address","name":"","type":"address"},{"internalType":"address","name":"","type":"address"}],"name":"allowance","outputs":[{"internalType":"uint256","name":"","type":"uint256"}],"stateMutability":"view","type":"function"},{"inputs":[{"internalType":"address","name":"guy","type":"address"},{"internalType":"uint256","name":"wad","type":"uint256"}],"name":"approve","outputs":[{"internalType":"bool","name":"","type":"bool"}],"stateMutability":"nonpayable","type":"function"},{"inputs":[{"internalType":"address","name":"","type":"address"}],"name":"balanceOf","outputs":[{"internalType":"uint256","name":"","type":"uint256"}],"stateMutability":"view","type":"function"},{"inputs":[],"name":"config","outputs":[{"internalType":"contractSuperchainConfig","name":"","type":"address"}],"stateMutability":"view","type":"function"},{"inputs":[],"name":"decimals","outputs":[{"internalType":"uint8","name":"","type":"uint8"}],"stateMutability":"view","type":"function"},{"inputs":[],"name":"delay","outputs":[{"internalType":"uint256","name":"","type":"uint256"}],"stateMutability":"view","type":"function"},{"inputs":[],"name":"deposit","outputs":[],"stateMutability":"payable","type":"function"},{"inputs":[{"internalType":"address","name":"_guy","type":"address"},{"internalType":"uint256","name":"_wad","type":"uint256"}],"name":"hold","outputs":[],"stateMutability":"nonpayable","type":"function"},{"inputs":[{"internalType":"address","name":"_owner","type":"address"},{"internalType":"contractSuperchainConfig","name":"_config","type":"address"}],"name":"initialize","outputs":[],"stateMutability":"nonpayable","type":"function"},{"inputs":[],"name":"name","outputs":[{"internalType":"string","name":"","type":"string"}],"stateMutability":"view","type":"function"},{"inputs":[],"name":"owner","outputs":[{"internalType":"address","name":"","type":"address"}],"stateMutability":"view","type":"function"},{"inputs":[{"internalType":"uint256","name":"_wad","type":"uint256"}],"name":"recover","outputs":[],"stateMutability":"nonpayable","type":"function"},{"inputs":[],"name":"renounceOwnership","outputs":[],"stateMutability":"nonpayable","type":"function"},{"inputs":[],"name":"symbol","outputs":[{"internalType":"string","name":"","type":"string"}],"stateMutability":"view","type":"function"},{"inputs":[],"name":"totalSupply","outputs":[{"internalType":"uint256","name":"","type":"uint256"}],"stateMutability":"view","type":"function"},{"inputs":[{"internalType":"address","name":"dst","type":"address"},{"internalType":"uint256","name":"wad","type":"uint256"}],"name":"transfer","outputs":[{"internalType":"bool","name":"","type":"bool"}],"stateMutability":"nonpayable","type":"function"},{"inputs":[{"internalType":"address","name":"src","type":"address"},{"internalType":"address","name":"dst","type":"address"},{"internalType":"uint256","name":"wad","type":"uint256"}],"name":"transferFrom","outputs":[{"internalType":"bool","name":"","type":"bool"}],"stateMutability":"nonpayable","type":"function"},{"inputs":[{"internalType":"address","name":"newOwner","type":"address"}],"name":"transferOwnership","outputs":[],"stateMutability":"nonpayable","type":"function"},{"inputs":[{"internalType":"address","name":"_guy","type":"address"},{"internalType":"uint256","name":"_wad","type":"uint256"}],"name":"unlock","outputs":[],"stateMutability":"nonpayable","type":"function"},{"inputs":[],"name":"version","outputs":[{"internalType":"string","name":"","type":"string"}],"stateMutability":"view","type":"function"},{"inputs":[{"internalType":"uint256","name":"_wad","type":"uint256"}],"name":"withdraw","outputs":[],"stateMutability":"nonpayable","type":"function"},{"inputs":[{"internalType":"address","name":"_guy","type":"address"},{"internalType":"uint256","name":"_wad","type":"uint256"}],"name":"withdraw","outputs":[],"stateMutability":"nonpayable","type":"function"},{"inputs":[{"internalType":"address","name":"","type":"address"},{"internalType":"address","name":"","type":"address"}],"name":"withdrawals","outputs":[{"internalType":"uint256","name":"amount","type":"uint256"},{"internalType":"uint256","name":"timestamp","type":"uint256"}],"stateMutability":"view","type":"function"},{"anonymous":false,"inputs":[{"indexed":true,"internalType":"address","name":"src","type":"address"},{"indexed":true,"internalType":"address","name":"guy","type":"address"},{"indexed":false,"internalType":"uint256","name":"wad","type":"uint256"}],"name":"Approval","type":"event"},{"anonymous":false,"inputs":[{"indexed":true,"internalType":"address","name":"dst","type":"address"},{"indexed":false,"internalType":"uint256","name":"wad","type":"uint256"}],"name":"Deposit","type":"event"},{"anonymous":false,"inputs":[{"indexed":false,"internalType":"uint8","name":"version","type":"uint8"}],"name":"Initialized","type":"event"},{"anonymous":false,"inputs":[{"indexed":true,"internalType":"address","name":"previousOwner","type":"address"},{"indexed":true,"internalType":"address","name":"newOwner","type":"address"}],"name":"OwnershipTransferred","type":"event"},{"anonymous":false,"inputs":[{"indexed":true,"internalType":"address","name":"src","type":"address"},{"indexed":true,"internalType":"address","name":"dst","type":"address"},{"indexed":false,"internalType":"uint256","name":"wad","type":"uint256"}],"name":"Transfer","type":"event"},{"anonymous":false,"inputs":[{"indexed":true,"internalType":"address","name":"src","type":"address"},{"indexed":false,"internalType":"uint256","name":"wad","type":"uint256"}],"name":"Unwrap","type":"event"},{"anonymous":false,"inputs":[{"indexed":true,"internalType":"address","name":"src","type":"address"},{"indexed":false,"internalType":"uint256","name":"wad","type":"uint256"}],"name":"Withdrawal","type":"event"}]"#;

/// Creation bytecode of `DelayedWETH`.
pub const DELAYED_WETH_BIN: &str = "0x60a06040523480156200001157600080fd5b50604051620018aa380380620018aa8339810160408190526200003491620002d7565b6080819052620000466000806200004d565b50620002f1565b600054610100900460ff16158080156200006e5750600054600160ff909116105b806200009e57506200008b30620001a760201b6200107f1760201c565b1580156200009e575060005460ff166001145b620001075760405162461bcd60e51b815260206004820152602e60248201527f496e697469616c697a61626c653a20636f6e747261637420697320616c72656160448201526d191e481a5b9a5d1a585b1a5e995960921b60648201526084015b60405180910390fd5b6000805460ff1916600117905580156200012b576000805461ff0019166101001790555b62000135620001b6565b62000140836200021e565b606880546001600160a01b0319166001600160a01b0384161790558015620001a2576000805461ff0019169055604051600181527f7f26b83ff96e1f2b6a682f133852f6798a09c465da95921460cefb38474024989060200160405180910390a15b505050565b6001600160a01b03163b151590565b600054610100900460ff16620002125760405162461bcd60e51b815260206004820152602b60248201526000805160206200188a83398151915260448201526a6e697469616c697a696e6760a81b6064820152608401620000fe565b6200021c62000270565b565b603380546001600160a01b038381166001600160a01b0319831681179093556040519116919082907f8be0079c531659141344cd1fd0a4f28419497f9722a3daafe3b4186f6b6457e090600090a35050565b600054610100900460ff16620002cc5760405162461bcd60e51b815260206004820152602b60248201526000805160206200188a83398151915260448201526a6e697469616c697a696e6760a81b6064820152608401620000fe565b6200021c336200021e565b600060208284031215620002ea57600080fd5b5051919050565b608051611576620003146000396000818161033f0152610fa001526115766000f3fe6080604052600436106101845760003560e01c8063715018a6116100d6578063a9059cbb1161007f578063dd62ed3e11610059578063dd62ed3e1461051c578063f2fde38b14610554578063f3fef3a31461057457610193565b8063a9059cbb146104a8578063cd47bde1146104c8578063d0e30db01461019357610193565b80638da5cb5b116100b05780638da5cb5b1461041757806395d89b4114610442578063977a5ec51461048857610193565b8063715018a61461039057806379502c55146103a55780637eee288d146103f757610193565b80632e1a7d4d1161013857806354fd4d501161011257806354fd4d50146102e75780636a42b8f81461033057806370a082311461036357610193565b80632e1a7d4d14610280578063313ce567146102a0578063485cc955146102c757610193565b80630ca35682116101695780630ca356821461022357806318160ddd1461024357806323b872dd1461026057610193565b806306fdde031461019b578063095ea7b3146101f357610193565b3661019357610191610594565b005b610191610594565b3480156101a757600080fd5b5060408051808201909152600d81527f577261707065642045746865720000000000000000000000000000000000000060208201525b6040516101ea9190611378565b60405180910390f35b3480156101ff57600080fd5b5061021361020e36600461140d565b6105ef565b60405190151581526020016101ea565b34801561022f57600080fd5b5061019161023e366004611439565b610668565b34801561024f57600080fd5b50475b6040519081526020016101ea565b34801561026c57600080fd5b5061021361027b366004611452565b610734565b34801561028c57600080fd5b5061019161029b366004611439565b61094b565b3480156102ac57600080fd5b506102b5601281565b60405160ff90911681526020016101ea565b3480156102d357600080fd5b506101916102e2366004611493565b610958565b3480156102f357600080fd5b506101dd6040518060400160405280600581526020017f302e322e3000000000000000000000000000000000000000000000000000000081525081565b34801561033c57600080fd5b507f0000000000000000000000000000000000000000000000000000000000000000610252565b34801561036f57600080fd5b5061025261037e3660046114cc565b60656020526000908152604090205481565b34801561039c57600080fd5b50610191610b34565b3480156103b157600080fd5b506068546103d29073ffffffffffffffffffffffffffffffffffffffff1681565b60405173ffffffffffffffffffffffffffffffffffffffff90911681526020016101ea565b34801561040357600080fd5b5061019161041236600461140d565b610b48565b34801561042357600080fd5b5060335473ffffffffffffffffffffffffffffffffffffffff166103d2565b34801561044e57600080fd5b5060408051808201909152600481527f574554480000000000000000000000000000000000000000000000000000000060208201526101dd565b34801561049457600080fd5b506101916104a336600461140d565b610b9c565b3480156104b457600080fd5b506102136104c336600461140d565b610c89565b3480156104d457600080fd5b506105076104e3366004611493565b60676020908152600092835260408084209091529082529020805460019091015482565b604080519283526020830191909152016101ea565b34801561052857600080fd5b50610252610537366004611493565b606660209081526000928352604080842090915290825290205481565b34801561056057600080fd5b5061019161056f3660046114cc565b610c9d565b34801561058057600080fd5b5061019161058f36600461140d565b610d51565b33600090815260656020526040812080543492906105b3908490611518565b909155505060405134815233907fe1fffcc4923d04b559f4d29a8bfc6cda04eb5b0d3c460751c2402c5c5cc9109c9060200160405180910390a2565b33600081815260666020908152604080832073ffffffffffffffffffffffffffffffffffffffff8716808552925280832085905551919290917f8c5be1e5ebec7d5bd14f71427d1e84f3dd0314c0f7b2291e5b200ac8c7c3b925906106579086815260200190565b60405180910390a350600192915050565b60335473ffffffffffffffffffffffffffffffffffffffff1633146106ee576040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152601660248201527f44656c61796564574554483a206e6f74206f776e65720000000000000000000060448201526064015b60405180910390fd5b60004782106106fd57476106ff565b815b604051909150339082156108fc029083906000818181858888f1935050505015801561072f573d6000803e3d6000fd5b505050565b73ffffffffffffffffffffffffffffffffffffffff831660009081526065602052604081205482111561076657600080fd5b73ffffffffffffffffffffffffffffffffffffffff841633148015906107dc575073ffffffffffffffffffffffffffffffffffffffff841660009081526066602090815260408083203384529091529020547fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff14155b156108645773ffffffffffffffffffffffffffffffffffffffff8416600090815260666020908152604080832033845290915290205482111561081e57600080fd5b73ffffffffffffffffffffffffffffffffffffffff841660009081526066602090815260408083203384529091528120805484929061085e908490611530565b90915550505b73ffffffffffffffffffffffffffffffffffffffff841660009081526065602052604081208054849290610899908490611530565b909155505073ffffffffffffffffffffffffffffffffffffffff8316600090815260656020526040812080548492906108d3908490611518565b925050819055508273ffffffffffffffffffffffffffffffffffffffff168473ffffffffffffffffffffffffffffffffffffffff167fddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef8460405161093991815260200190565b60405180910390a35060019392505050565b6109553382610d51565b50565b600054610100900460ff16158080156109785750600054600160ff909116105b806109925750303b158015610992575060005460ff166001145b610a1e576040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152602e60248201527f496e697469616c697a61626c653a20636f6e747261637420697320616c72656160448201527f647920696e697469616c697a656400000000000000000000000000000000000060648201526084016106e5565b600080547fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff001660011790558015610a7c57600080547fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff00ff166101001790555b610a8461109b565b610a8d8361113a565b606880547fffffffffffffffffffffffff00000000000000000000000000000000000000001673ffffffffffffffffffffffffffffffffffffffff8416179055801561072f57600080547fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff00ff169055604051600181527f7f26b83ff96e1f2b6a682f133852f6798a09c465da95921460cefb38474024989060200160405180910390a1505050565b610b3c6111b1565b610b46600061113a565b565b33600090815260676020908152604080832073ffffffffffffffffffffffffffffffffffffffff861684529091528120426001820155805490918391839190610b92908490611518565b9091555050505050565b60335473ffffffffffffffffffffffffffffffffffffffff163314610c1d576040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152601660248201527f44656c61796564574554483a206e6f74206f776e65720000000000000000000060448201526064016106e5565b73ffffffffffffffffffffffffffffffffffffffff821660008181526066602090815260408083203380855290835292819020859055518481529192917f8c5be1e5ebec7d5bd14f71427d1e84f3dd0314c0f7b2291e5b200ac8c7c3b925910160405180910390a35050565b6000610c96338484610734565b9392505050565b610ca56111b1565b73ffffffffffffffffffffffffffffffffffffffff8116610d48576040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152602660248201527f4f776e61626c653a206e6577206f776e657220697320746865207a65726f206160448201527f646472657373000000000000000000000000000000000000000000000000000060648201526084016106e5565b6109558161113a565b606860009054906101000a900473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16635c975abb6040518163ffffffff1660e01b8152600401602060405180830381865afa158015610dbe573d6000803e3d6000fd5b505050506040513d601f19601f82011682018060405250810190610de29190611547565b15610e49576040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152601f60248201527f44656c61796564574554483a20636f6e7472616374206973207061757365640060448201526064016106e5565b33600090815260676020908152604080832073ffffffffffffffffffffffffffffffffffffffff8616845290915290208054821115610f0a576040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152602d60248201527f44656c61796564574554483a20696e73756666696369656e7420756e6c6f636b60448201527f6564207769746864726177616c0000000000000000000000000000000000000060648201526084016106e5565b6000816001015411610f9d576040517f08c379a0000000000000000000000000000000000000000000000000000000008152602060048201526024808201527f44656c61796564574554483a207769746864726177616c206e6f7420756e6c6f60448201527f636b65640000000000000000000000000000000000000000000000000000000060648201526084016106e5565b427f00000000000000000000000000000000000000000000000000000000000000008260010154610fce9190611518565b111561105c576040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152602560248201527f44656c61796564574554483a207769746864726177616c2064656c6179206e6f60448201527f74206d657400000000000000000000000000000000000000000000000000000060648201526084016106e5565b818160000160008282546110709190611530565b9091555061072f905082611232565b73ffffffffffffffffffffffffffffffffffffffff163b151590565b600054610100900460ff16611132576040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152602b60248201527f496e697469616c697a61626c653a20636f6e7472616374206973206e6f74206960448201527f6e697469616c697a696e6700000000000000000000000000000000000000000060648201526084016106e5565b610b466112d8565b6033805473ffffffffffffffffffffffffffffffffffffffff8381167fffffffffffffffffffffffff0000000000000000000000000000000000000000831681179093556040519116919082907f8be0079c531659141344cd1fd0a4f28419497f9722a3daafe3b4186f6b6457e090600090a35050565b60335473ffffffffffffffffffffffffffffffffffffffff163314610b46576040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820181905260248201527f4f776e61626c653a2063616c6c6572206973206e6f7420746865206f776e657260448201526064016106e5565b3360009081526065602052604090205481111561124e57600080fd5b336000908152606560205260408120805483929061126d908490611530565b9091555050604051339082156108fc029083906000818181858888f1935050505015801561129f573d6000803e3d6000fd5b5060405181815233907f7fcf532c15f0a6db0bd6d0e038bea71d30d808c7d98cb3bf7268a95bf5081b659060200160405180910390a250565b600054610100900460ff1661136f576040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152602b60248201527f496e697469616c697a61626c653a20636f6e7472616374206973206e6f74206960448201527f6e697469616c697a696e6700000000000000000000000000000000000000000060648201526084016106e5565b610b463361113a565b600060208083528351808285015260005b818110156113a557858101830151858201604001528201611389565b818111156113b7576000604083870101525b50601f017fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe016929092016040019392505050565b73ffffffffffffffffffffffffffffffffffffffff8116811461095557600080fd5b6000806040838503121561142057600080fd5b823561142b816113eb565b946020939093013593505050565b60006020828403121561144b57600080fd5b5035919050565b60008060006060848603121561146757600080fd5b8335611472816113eb565b92506020840135611482816113eb565b929592945050506040919091013590565b600080604083850312156114a657600080fd5b82356114b1816113eb565b915060208301356114c1816113eb565b809150509250929050565b6000602082840312156114de57600080fd5b8135610c96816113eb565b7f4e487b7100000000000000000000000000000000000000000000000000000000600052601160045260246000fd5b6000821982111561152b5761152b6114e9565b500190565b600082821015611542576115426114e9565b500390565b60006020828403121561155957600080fd5b81518015158114610c9657600080fdfea164736f6c634300080f000a496e697469616c697a61626c653a20636f6e7472616374206973206e6f742069";

/// Runtime bytecode of `DelayedWETH`, immutables zero-filled.
pub const DELAYED_WETH_DEPLOYED_BIN: &str = "0x6080604052600436106101845760003560e01c8063715018a6116100d6578063a9059cbb1161007f578063dd62ed3e11610059578063dd62ed3e1461051c578063f2fde38b14610554578063f3fef3a31461057457610193565b8063a9059cbb146104a8578063cd47bde1146104c8578063d0e30db01461019357610193565b80638da5cb5b116100b05780638da5cb5b1461041757806395d89b4114610442578063977a5ec51461048857610193565b8063715018a61461039057806379502c55146103a55780637eee288d146103f757610193565b80632e1a7d4d1161013857806354fd4d501161011257806354fd4d50146102e75780636a42b8f81461033057806370a082311461036357610193565b80632e1a7d4d14610280578063313ce567146102a0578063485cc955146102c757610193565b80630ca35682116101695780630ca356821461022357806318160ddd1461024357806323b872dd1461026057610193565b806306fdde031461019b578063095ea7b3146101f357610193565b3661019357610191610594565b005b610191610594565b3480156101a757600080fd5b5060408051808201909152600d81527f577261707065642045746865720000000000000000000000000000000000000060208201525b6040516101ea9190611378565b60405180910390f35b3480156101ff57600080fd5b5061021361020e36600461140d565b6105ef565b60405190151581526020016101ea565b34801561022f57600080fd5b5061019161023e366004611439565b610668565b34801561024f57600080fd5b50475b6040519081526020016101ea565b34801561026c57600080fd5b5061021361027b366004611452565b610734565b34801561028c57600080fd5b5061019161029b366004611439565b61094b565b3480156102ac57600080fd5b506102b5601281565b60405160ff90911681526020016101ea565b3480156102d357600080fd5b506101916102e2366004611493565b610958565b3480156102f357600080fd5b506101dd6040518060400160405280600581526020017f302e322e3000000000000000000000000000000000000000000000000000000081525081565b34801561033c57600080fd5b507f0000000000000000000000000000000000000000000000000000000000000000610252565b34801561036f57600080fd5b5061025261037e3660046114cc565b60656020526000908152604090205481565b34801561039c57600080fd5b50610191610b34565b3480156103b157600080fd5b506068546103d29073ffffffffffffffffffffffffffffffffffffffff1681565b60405173ffffffffffffffffffffffffffffffffffffffff90911681526020016101ea565b34801561040357600080fd5b5061019161041236600461140d565b610b48565b34801561042357600080fd5b5060335473ffffffffffffffffffffffffffffffffffffffff166103d2565b34801561044e57600080fd5b5060408051808201909152600481527f574554480000000000000000000000000000000000000000000000000000000060208201526101dd565b34801561049457600080fd5b506101916104a336600461140d565b610b9c565b3480156104b457600080fd5b506102136104c336600461140d565b610c89565b3480156104d457600080fd5b506105076104e3366004611493565b60676020908152600092835260408084209091529082529020805460019091015482565b604080519283526020830191909152016101ea565b34801561052857600080fd5b50610252610537366004611493565b606660209081526000928352604080842090915290825290205481565b34801561056057600080fd5b5061019161056f3660046114cc565b610c9d565b34801561058057600080fd5b5061019161058f36600461140d565b610d51565b33600090815260656020526040812080543492906105b3908490611518565b909155505060405134815233907fe1fffcc4923d04b559f4d29a8bfc6cda04eb5b0d3c460751c2402c5c5cc9109c9060200160405180910390a2565b33600081815260666020908152604080832073ffffffffffffffffffffffffffffffffffffffff8716808552925280832085905551919290917f8c5be1e5ebec7d5bd14f71427d1e84f3dd0314c0f7b2291e5b200ac8c7c3b925906106579086815260200190565b60405180910390a350600192915050565b60335473ffffffffffffffffffffffffffffffffffffffff1633146106ee576040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152601660248201527f44656c61796564574554483a206e6f74206f776e65720000000000000000000060448201526064015b60405180910390fd5b60004782106106fd57476106ff565b815b604051909150339082156108fc029083906000818181858888f1935050505015801561072f573d6000803e3d6000fd5b505050565b73ffffffffffffffffffffffffffffffffffffffff831660009081526065602052604081205482111561076657600080fd5b73ffffffffffffffffffffffffffffffffffffffff841633148015906107dc575073ffffffffffffffffffffffffffffffffffffffff841660009081526066602090815260408083203384529091529020547fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff14155b156108645773ffffffffffffffffffffffffffffffffffffffff8416600090815260666020908152604080832033845290915290205482111561081e57600080fd5b73ffffffffffffffffffffffffffffffffffffffff841660009081526066602090815260408083203384529091528120805484929061085e908490611530565b90915550505b73ffffffffffffffffffffffffffffffffffffffff841660009081526065602052604081208054849290610899908490611530565b909155505073ffffffffffffffffffffffffffffffffffffffff8316600090815260656020526040812080548492906108d3908490611518565b925050819055508273ffffffffffffffffffffffffffffffffffffffff168473ffffffffffffffffffffffffffffffffffffffff167fddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef8460405161093991815260200190565b60405180910390a35060019392505050565b6109553382610d51565b50565b600054610100900460ff16158080156109785750600054600160ff909116105b806109925750303b158015610992575060005460ff166001145b610a1e576040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152602e60248201527f496e697469616c697a61626c653a20636f6e747261637420697320616c72656160448201527f647920696e697469616c697a656400000000000000000000000000000000000060648201526084016106e5565b600080547fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff001660011790558015610a7c57600080547fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff00ff166101001790555b610a8461109b565b610a8d8361113a565b606880547fffffffffffffffffffffffff00000000000000000000000000000000000000001673ffffffffffffffffffffffffffffffffffffffff8416179055801561072f57600080547fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff00ff169055604051600181527f7f26b83ff96e1f2b6a682f133852f6798a09c465da95921460cefb38474024989060200160405180910390a1505050565b610b3c6111b1565b610b46600061113a565b565b33600090815260676020908152604080832073ffffffffffffffffffffffffffffffffffffffff861684529091528120426001820155805490918391839190610b92908490611518565b9091555050505050565b60335473ffffffffffffffffffffffffffffffffffffffff163314610c1d576040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152601660248201527f44656c61796564574554483a206e6f74206f776e65720000000000000000000060448201526064016106e5565b73ffffffffffffffffffffffffffffffffffffffff821660008181526066602090815260408083203380855290835292819020859055518481529192917f8c5be1e5ebec7d5bd14f71427d1e84f3dd0314c0f7b2291e5b200ac8c7c3b925910160405180910390a35050565b6000610c96338484610734565b9392505050565b610ca56111b1565b73ffffffffffffffffffffffffffffffffffffffff8116610d48576040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152602660248201527f4f776e61626c653a206e6577206f776e657220697320746865207a65726f206160448201527f646472657373000000000000000000000000000000000000000000000000000060648201526084016106e5565b6109558161113a565b606860009054906101000a900473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16635c975abb6040518163ffffffff1660e01b8152600401602060405180830381865afa158015610dbe573d6000803e3d6000fd5b505050506040513d601f19601f82011682018060405250810190610de29190611547565b15610e49576040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152601f60248201527f44656c61796564574554483a20636f6e7472616374206973207061757365640060448201526064016106e5565b33600090815260676020908152604080832073ffffffffffffffffffffffffffffffffffffffff8616845290915290208054821115610f0a576040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152602d60248201527f44656c61796564574554483a20696e73756666696369656e7420756e6c6f636b60448201527f6564207769746864726177616c0000000000000000000000000000000000000060648201526084016106e5565b6000816001015411610f9d576040517f08c379a0000000000000000000000000000000000000000000000000000000008152602060048201526024808201527f44656c61796564574554483a207769746864726177616c206e6f7420756e6c6f60448201527f636b65640000000000000000000000000000000000000000000000000000000060648201526084016106e5565b427f00000000000000000000000000000000000000000000000000000000000000008260010154610fce9190611518565b111561105c576040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152602560248201527f44656c61796564574554483a207769746864726177616c2064656c6179206e6f60448201527f74206d657400000000000000000000000000000000000000000000000000000060648201526084016106e5565b818160000160008282546110709190611530565b9091555061072f905082611232565b73ffffffffffffffffffffffffffffffffffffffff163b151590565b600054610100900460ff16611132576040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152602b60248201527f496e697469616c697a61626c653a20636f6e7472616374206973206e6f74206960448201527f6e697469616c697a696e6700000000000000000000000000000000000000000060648201526084016106e5565b610b466112d8565b6033805473ffffffffffffffffffffffffffffffffffffffff8381167fffffffffffffffffffffffff0000000000000000000000000000000000000000831681179093556040519116919082907f8be0079c531659141344cd1fd0a4f28419497f9722a3daafe3b4186f6b6457e090600090a35050565b60335473ffffffffffffffffffffffffffffffffffffffff163314610b46576040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820181905260248201527f4f776e61626c653a2063616c6c6572206973206e6f7420746865206f776e657260448201526064016106e5565b3360009081526065602052604090205481111561124e57600080fd5b336000908152606560205260408120805483929061126d908490611530565b9091555050604051339082156108fc029083906000818181858888f1935050505015801561129f573d6000803e3d6000fd5b5060405181815233907f7fcf532c15f0a6db0bd6d0e038bea71d30d808c7d98cb3bf7268a95bf5081b659060200160405180910390a250565b600054610100900460ff1661136f576040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152602b60248201527f496e697469616c697a61626c653a20636f6e7472616374206973206e6f74206960448201527f6e697469616c697a696e6700000000000000000000000000000000000000000060648201526084016106e5565b610b463361113a565b600060208083528351808285015260005b818110156113a557858101830151858201604001528201611389565b818111156113b7576000604083870101525b50601f017fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe016929092016040019392505050565b73ffffffffffffffffffffffffffffffffffffffff8116811461095557600080fd5b6000806040838503121561142057600080fd5b823561142b816113eb565b946020939093013593505050565b60006020828403121561144b57600080fd5b5035919050565b60008060006060848603121561146757600080fd5b8335611472816113eb565b92506020840135611482816113eb565b929592945050506040919091013590565b600080604083850312156114a657600080fd5b82356114b1816113eb565b915060208301356114c1816113eb565b809150509250929050565b6000602082840312156114de57600080fd5b8135610c96816113eb565b7f4e487b7100000000000000000000000000000000000000000000000000000000600052601160045260246000fd5b6000821982111561152b5761152b6114e9565b500190565b600082821015611542576115426114e9565b500390565b60006020828403121561155957600080fd5b81518015158114610c9657600080fdfea164736f6c634300080f000a";

/// solc storage layout of `DelayedWETH`.
pub const DELAYED_WETH_STORAGE_LAYOUT: &str = r#"{"storage":[{"astId":49661,"contract":"@openzeppelin/contracts-upgradeable/proxy/utils/Initializable.sol:Initializable","label":"_initialized","offset":0,"slot":"0","type":"t_uint8"},{"astId":49664,"contract":"@openzeppelin/contracts-upgradeable/proxy/utils/Initializable.sol:Initializable","label":"_initializing","offset":1,"slot":"0","type":"t_bool"},{"astId":50140,"contract":"@openzeppelin/contracts-upgradeable/utils/ContextUpgradeable.sol:ContextUpgradeable","label":"__gap","offset":0,"slot":"1","type":"t_array(t_uint256)50_storage"},{"astId":49533,"contract":"@openzeppelin/contracts-upgradeable/access/OwnableUpgradeable.sol:OwnableUpgradeable","label":"_owner","offset":0,"slot":"51","type":"t_address"},{"astId":49653,"contract":"@openzeppelin/contracts-upgradeable/access/OwnableUpgradeable.sol:OwnableUpgradeable","label":"__gap","offset":0,"slot":"52","type":"t_array(t_uint256)49_storage"},{"astId":78229,"contract":"src/dispute/weth/WETH98.sol:WETH98","label":"balanceOf","offset":0,"slot":"101","type":"t_mapping(t_address,t_uint256)"},{"astId":78235,"contract":"src/dispute/weth/WETH98.sol:WETH98","label":"allowance","offset":0,"slot":"102","type":"t_mapping(t_address,t_mapping(t_address,t_uint256))"},{"astId":77872,"contract":"src/dispute/weth/DelayedWETH.sol:DelayedWETH","label":"withdrawals","offset":0,"slot":"103","type":"t_mapping(t_address,t_mapping(t_address,t_struct(WithdrawalRequest)77862_storage))"},{"astId":77875,"contract":"src/dispute/weth/DelayedWETH.sol:DelayedWETH","label":"config","offset":0,"slot":"104","type":"t_contract(SuperchainConfig)72331"}],"types":{"t_address":{"encoding":"inplace","label":"address","numberOfBytes":"20"},"t_array(t_uint256)49_storage":{"base":"t_uint256","encoding":"inplace","label":"uint256[49]","numberOfBytes":"1568"},"t_array(t_uint256)50_storage":{"base":"t_uint256","encoding":"inplace","label":"uint256[50]","numberOfBytes":"1600"},"t_bool":{"encoding":"inplace","label":"bool","numberOfBytes":"1"},"t_contract(SuperchainConfig)72331":{"encoding":"inplace","label":"contract SuperchainConfig","numberOfBytes":"20"},"t_mapping(t_address,t_mapping(t_address,t_struct(WithdrawalRequest)77862_storage))":{"encoding":"mapping","key":"t_address","label":"mapping(address => mapping(address => struct IDelayedWETH.WithdrawalRequest))","numberOfBytes":"32","value":"t_mapping(t_address,t_struct(WithdrawalRequest)77862_storage)"},"t_mapping(t_address,t_mapping(t_address,t_uint256))":{"encoding":"mapping","key":"t_address","label":"mapping(address => mapping(address => uint256))","numberOfBytes":"32","value":"t_mapping(t_address,t_uint256)"},"t_mapping(t_address,t_struct(WithdrawalRequest)77862_storage)":{"encoding":"mapping","key":"t_address","label":"mapping(address => struct IDelayedWETH.WithdrawalRequest)","numberOfBytes":"32","value":"t_struct(WithdrawalRequest)77862_storage"},"t_mapping(t_address,t_uint256)":{"encoding":"mapping","key":"t_address","label":"mapping(address => uint256)","numberOfBytes":"32","value":"t_uint256"},"t_struct(WithdrawalRequest)77862_storage":{"encoding":"inplace","label":"struct IDelayedWETH.WithdrawalRequest","members":[{"astId":77859,"contract":"src/dispute/interfaces/IDelayedWETH.sol:IDelayedWETH","label":"amount","offset":0,"slot":"0","type":"t_uint256"},{"astId":77861,"contract":"src/dispute/interfaces/IDelayedWETH.sol:IDelayedWETH","label":"timestamp","offset":0,"slot":"1","type":"t_uint256"}],"numberOfBytes":"64"},"t_uint256":{"encoding":"inplace","label":"uint256","numberOfBytes":"32"},"t_uint8":{"encoding":"inplace","label":"uint8","numberOfBytes":"1"}}}"#;

/// Metadata used to deploy and bind `DelayedWETH`.
pub static DELAYED_WETH_METADATA: ContractMetadata = ContractMetadata::with_runtime(
    "DelayedWETH",
    DELAYED_WETH_ABI,
    DELAYED_WETH_BIN,
    DELAYED_WETH_DEPLOYED_BIN,
    DELAYED_WETH_STORAGE_LAYOUT,
);

/// Deploy a new `DelayedWETH` and bind it.
pub async fn deploy_delayed_weth(
    opts: &TransactOpts,
    caps: Capabilities,
    delay: U256,
) -> Result<(Address, TxHandle, DelayedWETH)> {
    let (address, tx, contract) = deploy_contract(
        opts,
        &DELAYED_WETH_METADATA,
        caps,
        vec![delay.into_sol_value()],
    )
    .await?;
    Ok((address, tx, DelayedWETH::from_bound(contract)))
}

// =============================================================================
// Facade
// =============================================================================

/// Binding to a deployed `DelayedWETH`, split by capability.
#[derive(Clone)]
pub struct DelayedWETH {
    pub caller: DelayedWETHCaller,
    pub transactor: DelayedWETHTransactor,
    pub filterer: DelayedWETHFilterer,
}

impl DelayedWETH {
    /// Bind every capability present in `caps` at `address`.
    pub fn new(address: Address, caps: Capabilities) -> Result<Self> {
        let contract = DELAYED_WETH_METADATA.bind(address, caps)?;
        Ok(Self::from_bound(contract))
    }

    pub fn from_bound(contract: BoundContract) -> Self {
        Self {
            caller: DelayedWETHCaller {
                contract: contract.clone(),
            },
            transactor: DelayedWETHTransactor {
                contract: contract.clone(),
            },
            filterer: DelayedWETHFilterer { contract },
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

/// Read-only binding to `DelayedWETH`.
#[derive(Clone)]
pub struct DelayedWETHCaller {
    contract: BoundContract,
}

impl DelayedWETHCaller {
    pub fn new(address: Address, caller: Arc<dyn Caller>) -> Result<Self> {
        let caps = Capabilities::new().with_caller(caller);
        Ok(Self {
            contract: DELAYED_WETH_METADATA.bind(address, caps)?,
        })
    }

    /// Calls `allowance(address,address)`.
    pub async fn allowance(&self, opts: &CallOpts, arg0: Address, arg1: Address) -> Result<U256> {
        self.contract
            .call_single(
                opts,
                "allowance",
                vec![arg0.into_sol_value(), arg1.into_sol_value()],
            )
            .await
    }

    /// Calls `balanceOf(address)`.
    pub async fn balance_of(&self, opts: &CallOpts, arg0: Address) -> Result<U256> {
        self.contract
            .call_single(opts, "balanceOf", vec![arg0.into_sol_value()])
            .await
    }

    /// Calls `config()`.
    pub async fn config(&self, opts: &CallOpts) -> Result<Address> {
        self.contract.call_single(opts, "config", vec![]).await
    }

    /// Calls `decimals()`.
    pub async fn decimals(&self, opts: &CallOpts) -> Result<u8> {
        self.contract.call_single(opts, "decimals", vec![]).await
    }

    /// Calls `delay()`.
    pub async fn delay(&self, opts: &CallOpts) -> Result<U256> {
        self.contract.call_single(opts, "delay", vec![]).await
    }

    /// Calls `name()`.
    pub async fn name(&self, opts: &CallOpts) -> Result<String> {
        self.contract.call_single(opts, "name", vec![]).await
    }

    /// Calls `owner()`.
    pub async fn owner(&self, opts: &CallOpts) -> Result<Address> {
        self.contract.call_single(opts, "owner", vec![]).await
    }

    /// Calls `symbol()`.
    pub async fn symbol(&self, opts: &CallOpts) -> Result<String> {
        self.contract.call_single(opts, "symbol", vec![]).await
    }

    /// Calls `totalSupply()`.
    pub async fn total_supply(&self, opts: &CallOpts) -> Result<U256> {
        self.contract.call_single(opts, "totalSupply", vec![]).await
    }

    /// Calls `version()`.
    pub async fn version(&self, opts: &CallOpts) -> Result<String> {
        self.contract.call_single(opts, "version", vec![]).await
    }

    /// Calls `withdrawals(address,address)`.
    pub async fn withdrawals(
        &self,
        opts: &CallOpts,
        arg0: Address,
        arg1: Address,
    ) -> Result<DelayedWETHWithdrawalsOutput> {
        let values = self
            .contract
            .call(
                opts,
                "withdrawals",
                vec![arg0.into_sol_value(), arg1.into_sol_value()],
            )
            .await?;
        let mut reader = FieldReader::returns("withdrawals", values);
        Ok(DelayedWETHWithdrawalsOutput {
            amount: reader.next("amount")?,
            timestamp: reader.next("timestamp")?,
        })
    }
}

/// Write-only binding to `DelayedWETH`.
#[derive(Clone)]
pub struct DelayedWETHTransactor {
    contract: BoundContract,
}

impl DelayedWETHTransactor {
    pub fn new(address: Address, transactor: Arc<dyn Transactor>) -> Result<Self> {
        let caps = Capabilities::new().with_transactor(transactor);
        Ok(Self {
            contract: DELAYED_WETH_METADATA.bind(address, caps)?,
        })
    }

    /// Transacts `approve(address,uint256)`.
    pub async fn approve(&self, opts: &TransactOpts, guy: Address, wad: U256) -> Result<TxHandle> {
        self.contract
            .transact(
                opts,
                "approve",
                vec![guy.into_sol_value(), wad.into_sol_value()],
            )
            .await
    }

    /// Transacts `deposit()`.
    ///
    /// Payable: `opts.value` is sent along.
    pub async fn deposit(&self, opts: &TransactOpts) -> Result<TxHandle> {
        self.contract.transact(opts, "deposit", vec![]).await
    }

    /// Transacts `hold(address,uint256)`.
    pub async fn hold(&self, opts: &TransactOpts, guy: Address, wad: U256) -> Result<TxHandle> {
        self.contract
            .transact(
                opts,
                "hold",
                vec![guy.into_sol_value(), wad.into_sol_value()],
            )
            .await
    }

    /// Transacts `initialize(address,address)`.
    pub async fn initialize(
        &self,
        opts: &TransactOpts,
        owner: Address,
        config: Address,
    ) -> Result<TxHandle> {
        self.contract
            .transact(
                opts,
                "initialize",
                vec![owner.into_sol_value(), config.into_sol_value()],
            )
            .await
    }

    /// Transacts `recover(uint256)`.
    pub async fn recover(&self, opts: &TransactOpts, wad: U256) -> Result<TxHandle> {
        self.contract
            .transact(opts, "recover", vec![wad.into_sol_value()])
            .await
    }

    /// Transacts `renounceOwnership()`.
    pub async fn renounce_ownership(&self, opts: &TransactOpts) -> Result<TxHandle> {
        self.contract
            .transact(opts, "renounceOwnership", vec![])
            .await
    }

    /// Transacts `transfer(address,uint256)`.
    pub async fn transfer(&self, opts: &TransactOpts, dst: Address, wad: U256) -> Result<TxHandle> {
        self.contract
            .transact(
                opts,
                "transfer",
                vec![dst.into_sol_value(), wad.into_sol_value()],
            )
            .await
    }

    /// Transacts `transferFrom(address,address,uint256)`.
    pub async fn transfer_from(
        &self,
        opts: &TransactOpts,
        src: Address,
        dst: Address,
        wad: U256,
    ) -> Result<TxHandle> {
        self.contract
            .transact(
                opts,
                "transferFrom",
                vec![
                    src.into_sol_value(),
                    dst.into_sol_value(),
                    wad.into_sol_value(),
                ],
            )
            .await
    }

    /// Transacts `transferOwnership(address)`.
    pub async fn transfer_ownership(
        &self,
        opts: &TransactOpts,
        new_owner: Address,
    ) -> Result<TxHandle> {
        self.contract
            .transact(opts, "transferOwnership", vec![new_owner.into_sol_value()])
            .await
    }

    /// Transacts `unlock(address,uint256)`.
    pub async fn unlock(&self, opts: &TransactOpts, guy: Address, wad: U256) -> Result<TxHandle> {
        self.contract
            .transact(
                opts,
                "unlock",
                vec![guy.into_sol_value(), wad.into_sol_value()],
            )
            .await
    }

    /// Transacts `withdraw(uint256)`.
    pub async fn withdraw(&self, opts: &TransactOpts, wad: U256) -> Result<TxHandle> {
        self.contract
            .transact(opts, "withdraw", vec![wad.into_sol_value()])
            .await
    }

    /// Transacts `withdraw(address,uint256)`.
    pub async fn withdraw0(
        &self,
        opts: &TransactOpts,
        guy: Address,
        wad: U256,
    ) -> Result<TxHandle> {
        self.contract
            .transact(
                opts,
                "withdraw0",
                vec![guy.into_sol_value(), wad.into_sol_value()],
            )
            .await
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

/// Log filtering binding to `DelayedWETH`.
#[derive(Clone)]
pub struct DelayedWETHFilterer {
    contract: BoundContract,
}

impl DelayedWETHFilterer {
    pub fn new(address: Address, filterer: Arc<dyn Filterer>) -> Result<Self> {
        let caps = Capabilities::new().with_filterer(filterer);
        Ok(Self {
            contract: DELAYED_WETH_METADATA.bind(address, caps)?,
        })
    }

    /// Historical `Approval` events; an empty slice matches any value.
    pub async fn filter_approval(
        &self,
        opts: &FilterOpts,
        src: &[Address],
        guy: &[Address],
    ) -> Result<DelayedWETHApprovalIterator> {
        self.contract
            .filter_events(opts, &[topic_values(src), topic_values(guy)])
            .await
    }

    /// Push live `Approval` events into `sink` until unsubscribed.
    pub async fn watch_approval(
        &self,
        opts: &WatchOpts,
        sink: mpsc::Sender<DelayedWETHApproval>,
        src: &[Address],
        guy: &[Address],
    ) -> Result<Subscription> {
        self.contract
            .watch_with(opts, sink, &[topic_values(src), topic_values(guy)])
            .await
    }

    /// Live `Approval` events as an iterator.
    pub async fn subscribe_approval(
        &self,
        opts: &WatchOpts,
        src: &[Address],
        guy: &[Address],
    ) -> Result<DelayedWETHApprovalIterator> {
        self.contract
            .watch_events(opts, &[topic_values(src), topic_values(guy)])
            .await
    }

    /// Decode one `Approval` log.
    pub fn parse_approval(&self, log: &Log) -> Result<DelayedWETHApproval> {
        self.contract
            .unpack_log(DelayedWETHApproval::NAME, log)
            .and_then(DelayedWETHApproval::from_record)
    }

    /// Historical `Deposit` events; an empty slice matches any value.
    pub async fn filter_deposit(
        &self,
        opts: &FilterOpts,
        dst: &[Address],
    ) -> Result<DelayedWETHDepositIterator> {
        self.contract
            .filter_events(opts, &[topic_values(dst)])
            .await
    }

    /// Push live `Deposit` events into `sink` until unsubscribed.
    pub async fn watch_deposit(
        &self,
        opts: &WatchOpts,
        sink: mpsc::Sender<DelayedWETHDeposit>,
        dst: &[Address],
    ) -> Result<Subscription> {
        self.contract
            .watch_with(opts, sink, &[topic_values(dst)])
            .await
    }

    /// Live `Deposit` events as an iterator.
    pub async fn subscribe_deposit(
        &self,
        opts: &WatchOpts,
        dst: &[Address],
    ) -> Result<DelayedWETHDepositIterator> {
        self.contract.watch_events(opts, &[topic_values(dst)]).await
    }

    /// Decode one `Deposit` log.
    pub fn parse_deposit(&self, log: &Log) -> Result<DelayedWETHDeposit> {
        self.contract
            .unpack_log(DelayedWETHDeposit::NAME, log)
            .and_then(DelayedWETHDeposit::from_record)
    }

    /// Historical `Initialized` events; an empty slice matches any value.
    pub async fn filter_initialized(
        &self,
        opts: &FilterOpts,
    ) -> Result<DelayedWETHInitializedIterator> {
        self.contract.filter_events(opts, &[]).await
    }

    /// Push live `Initialized` events into `sink` until unsubscribed.
    pub async fn watch_initialized(
        &self,
        opts: &WatchOpts,
        sink: mpsc::Sender<DelayedWETHInitialized>,
    ) -> Result<Subscription> {
        self.contract.watch_with(opts, sink, &[]).await
    }

    /// Live `Initialized` events as an iterator.
    pub async fn subscribe_initialized(
        &self,
        opts: &WatchOpts,
    ) -> Result<DelayedWETHInitializedIterator> {
        self.contract.watch_events(opts, &[]).await
    }

    /// Decode one `Initialized` log.
    pub fn parse_initialized(&self, log: &Log) -> Result<DelayedWETHInitialized> {
        self.contract
            .unpack_log(DelayedWETHInitialized::NAME, log)
            .and_then(DelayedWETHInitialized::from_record)
    }

    /// Historical `OwnershipTransferred` events; an empty slice matches any value.
    pub async fn filter_ownership_transferred(
        &self,
        opts: &FilterOpts,
        previous_owner: &[Address],
        new_owner: &[Address],
    ) -> Result<DelayedWETHOwnershipTransferredIterator> {
        self.contract
            .filter_events(
                opts,
                &[topic_values(previous_owner), topic_values(new_owner)],
            )
            .await
    }

    /// Push live `OwnershipTransferred` events into `sink` until unsubscribed.
    pub async fn watch_ownership_transferred(
        &self,
        opts: &WatchOpts,
        sink: mpsc::Sender<DelayedWETHOwnershipTransferred>,
        previous_owner: &[Address],
        new_owner: &[Address],
    ) -> Result<Subscription> {
        self.contract
            .watch_with(
                opts,
                sink,
                &[topic_values(previous_owner), topic_values(new_owner)],
            )
            .await
    }

    /// Live `OwnershipTransferred` events as an iterator.
    pub async fn subscribe_ownership_transferred(
        &self,
        opts: &WatchOpts,
        previous_owner: &[Address],
        new_owner: &[Address],
    ) -> Result<DelayedWETHOwnershipTransferredIterator> {
        self.contract
            .watch_events(
                opts,
                &[topic_values(previous_owner), topic_values(new_owner)],
            )
            .await
    }

    /// Decode one `OwnershipTransferred` log.
    pub fn parse_ownership_transferred(
        &self,
        log: &Log,
    ) -> Result<DelayedWETHOwnershipTransferred> {
        self.contract
            .unpack_log(DelayedWETHOwnershipTransferred::NAME, log)
            .and_then(DelayedWETHOwnershipTransferred::from_record)
    }

    /// Historical `Transfer` events; an empty slice matches any value.
    pub async fn filter_transfer(
        &self,
        opts: &FilterOpts,
        src: &[Address],
        dst: &[Address],
    ) -> Result<DelayedWETHTransferIterator> {
        self.contract
            .filter_events(opts, &[topic_values(src), topic_values(dst)])
            .await
    }

    /// Push live `Transfer` events into `sink` until unsubscribed.
    pub async fn watch_transfer(
        &self,
        opts: &WatchOpts,
        sink: mpsc::Sender<DelayedWETHTransfer>,
        src: &[Address],
        dst: &[Address],
    ) -> Result<Subscription> {
        self.contract
            .watch_with(opts, sink, &[topic_values(src), topic_values(dst)])
            .await
    }

    /// Live `Transfer` events as an iterator.
    pub async fn subscribe_transfer(
        &self,
        opts: &WatchOpts,
        src: &[Address],
        dst: &[Address],
    ) -> Result<DelayedWETHTransferIterator> {
        self.contract
            .watch_events(opts, &[topic_values(src), topic_values(dst)])
            .await
    }

    /// Decode one `Transfer` log.
    pub fn parse_transfer(&self, log: &Log) -> Result<DelayedWETHTransfer> {
        self.contract
            .unpack_log(DelayedWETHTransfer::NAME, log)
            .and_then(DelayedWETHTransfer::from_record)
    }

    /// Historical `Unwrap` events; an empty slice matches any value.
    pub async fn filter_unwrap(
        &self,
        opts: &FilterOpts,
        src: &[Address],
    ) -> Result<DelayedWETHUnwrapIterator> {
        self.contract
            .filter_events(opts, &[topic_values(src)])
            .await
    }

    /// Push live `Unwrap` events into `sink` until unsubscribed.
    pub async fn watch_unwrap(
        &self,
        opts: &WatchOpts,
        sink: mpsc::Sender<DelayedWETHUnwrap>,
        src: &[Address],
    ) -> Result<Subscription> {
        self.contract
            .watch_with(opts, sink, &[topic_values(src)])
            .await
    }

    /// Live `Unwrap` events as an iterator.
    pub async fn subscribe_unwrap(
        &self,
        opts: &WatchOpts,
        src: &[Address],
    ) -> Result<DelayedWETHUnwrapIterator> {
        self.contract.watch_events(opts, &[topic_values(src)]).await
    }

    /// Decode one `Unwrap` log.
    pub fn parse_unwrap(&self, log: &Log) -> Result<DelayedWETHUnwrap> {
        self.contract
            .unpack_log(DelayedWETHUnwrap::NAME, log)
            .and_then(DelayedWETHUnwrap::from_record)
    }

    /// Historical `Withdrawal` events; an empty slice matches any value.
    pub async fn filter_withdrawal(
        &self,
        opts: &FilterOpts,
        src: &[Address],
    ) -> Result<DelayedWETHWithdrawalIterator> {
        self.contract
            .filter_events(opts, &[topic_values(src)])
            .await
    }

    /// Push live `Withdrawal` events into `sink` until unsubscribed.
    pub async fn watch_withdrawal(
        &self,
        opts: &WatchOpts,
        sink: mpsc::Sender<DelayedWETHWithdrawal>,
        src: &[Address],
    ) -> Result<Subscription> {
        self.contract
            .watch_with(opts, sink, &[topic_values(src)])
            .await
    }

    /// Live `Withdrawal` events as an iterator.
    pub async fn subscribe_withdrawal(
        &self,
        opts: &WatchOpts,
        src: &[Address],
    ) -> Result<DelayedWETHWithdrawalIterator> {
        self.contract.watch_events(opts, &[topic_values(src)]).await
    }

    /// Decode one `Withdrawal` log.
    pub fn parse_withdrawal(&self, log: &Log) -> Result<DelayedWETHWithdrawal> {
        self.contract
            .unpack_log(DelayedWETHWithdrawal::NAME, log)
            .and_then(DelayedWETHWithdrawal::from_record)
    }
}

// =============================================================================
// Sessions
// =============================================================================

/// `DelayedWETH` with call and transact options fixed.
#[derive(Clone)]
pub struct DelayedWETHSession {
    pub contract: DelayedWETH,
    pub call_opts: CallOpts,
    pub transact_opts: TransactOpts,
}

impl DelayedWETHSession {
    pub fn new(contract: DelayedWETH, call_opts: CallOpts, transact_opts: TransactOpts) -> Self {
        Self {
            contract,
            call_opts,
            transact_opts,
        }
    }

    pub async fn allowance(&self, arg0: Address, arg1: Address) -> Result<U256> {
        self.contract
            .caller
            .allowance(&self.call_opts, arg0, arg1)
            .await
    }

    pub async fn balance_of(&self, arg0: Address) -> Result<U256> {
        self.contract.caller.balance_of(&self.call_opts, arg0).await
    }

    pub async fn config(&self) -> Result<Address> {
        self.contract.caller.config(&self.call_opts).await
    }

    pub async fn decimals(&self) -> Result<u8> {
        self.contract.caller.decimals(&self.call_opts).await
    }

    pub async fn delay(&self) -> Result<U256> {
        self.contract.caller.delay(&self.call_opts).await
    }

    pub async fn name(&self) -> Result<String> {
        self.contract.caller.name(&self.call_opts).await
    }

    pub async fn owner(&self) -> Result<Address> {
        self.contract.caller.owner(&self.call_opts).await
    }

    pub async fn symbol(&self) -> Result<String> {
        self.contract.caller.symbol(&self.call_opts).await
    }

    pub async fn total_supply(&self) -> Result<U256> {
        self.contract.caller.total_supply(&self.call_opts).await
    }

    pub async fn version(&self) -> Result<String> {
        self.contract.caller.version(&self.call_opts).await
    }

    pub async fn withdrawals(
        &self,
        arg0: Address,
        arg1: Address,
    ) -> Result<DelayedWETHWithdrawalsOutput> {
        self.contract
            .caller
            .withdrawals(&self.call_opts, arg0, arg1)
            .await
    }

    pub async fn approve(&self, guy: Address, wad: U256) -> Result<TxHandle> {
        self.contract
            .transactor
            .approve(&self.transact_opts, guy, wad)
            .await
    }

    pub async fn deposit(&self) -> Result<TxHandle> {
        self.contract.transactor.deposit(&self.transact_opts).await
    }

    pub async fn hold(&self, guy: Address, wad: U256) -> Result<TxHandle> {
        self.contract
            .transactor
            .hold(&self.transact_opts, guy, wad)
            .await
    }

    pub async fn initialize(&self, owner: Address, config: Address) -> Result<TxHandle> {
        self.contract
            .transactor
            .initialize(&self.transact_opts, owner, config)
            .await
    }

    pub async fn recover(&self, wad: U256) -> Result<TxHandle> {
        self.contract
            .transactor
            .recover(&self.transact_opts, wad)
            .await
    }

    pub async fn renounce_ownership(&self) -> Result<TxHandle> {
        self.contract
            .transactor
            .renounce_ownership(&self.transact_opts)
            .await
    }

    pub async fn transfer(&self, dst: Address, wad: U256) -> Result<TxHandle> {
        self.contract
            .transactor
            .transfer(&self.transact_opts, dst, wad)
            .await
    }

    pub async fn transfer_from(&self, src: Address, dst: Address, wad: U256) -> Result<TxHandle> {
        self.contract
            .transactor
            .transfer_from(&self.transact_opts, src, dst, wad)
            .await
    }

    pub async fn transfer_ownership(&self, new_owner: Address) -> Result<TxHandle> {
        self.contract
            .transactor
            .transfer_ownership(&self.transact_opts, new_owner)
            .await
    }

    pub async fn unlock(&self, guy: Address, wad: U256) -> Result<TxHandle> {
        self.contract
            .transactor
            .unlock(&self.transact_opts, guy, wad)
            .await
    }

    pub async fn withdraw(&self, wad: U256) -> Result<TxHandle> {
        self.contract
            .transactor
            .withdraw(&self.transact_opts, wad)
            .await
    }

    pub async fn withdraw0(&self, guy: Address, wad: U256) -> Result<TxHandle> {
        self.contract
            .transactor
            .withdraw0(&self.transact_opts, guy, wad)
            .await
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

/// `DelayedWETHCaller` with call options fixed.
#[derive(Clone)]
pub struct DelayedWETHCallerSession {
    pub contract: DelayedWETHCaller,
    pub call_opts: CallOpts,
}

impl DelayedWETHCallerSession {
    pub fn new(contract: DelayedWETHCaller, call_opts: CallOpts) -> Self {
        Self {
            contract,
            call_opts,
        }
    }

    pub async fn allowance(&self, arg0: Address, arg1: Address) -> Result<U256> {
        self.contract.allowance(&self.call_opts, arg0, arg1).await
    }

    pub async fn balance_of(&self, arg0: Address) -> Result<U256> {
        self.contract.balance_of(&self.call_opts, arg0).await
    }

    pub async fn config(&self) -> Result<Address> {
        self.contract.config(&self.call_opts).await
    }

    pub async fn decimals(&self) -> Result<u8> {
        self.contract.decimals(&self.call_opts).await
    }

    pub async fn delay(&self) -> Result<U256> {
        self.contract.delay(&self.call_opts).await
    }

    pub async fn name(&self) -> Result<String> {
        self.contract.name(&self.call_opts).await
    }

    pub async fn owner(&self) -> Result<Address> {
        self.contract.owner(&self.call_opts).await
    }

    pub async fn symbol(&self) -> Result<String> {
        self.contract.symbol(&self.call_opts).await
    }

    pub async fn total_supply(&self) -> Result<U256> {
        self.contract.total_supply(&self.call_opts).await
    }

    pub async fn version(&self) -> Result<String> {
        self.contract.version(&self.call_opts).await
    }

    pub async fn withdrawals(
        &self,
        arg0: Address,
        arg1: Address,
    ) -> Result<DelayedWETHWithdrawalsOutput> {
        self.contract.withdrawals(&self.call_opts, arg0, arg1).await
    }
}

/// `DelayedWETHTransactor` with transact options fixed.
#[derive(Clone)]
pub struct DelayedWETHTransactorSession {
    pub contract: DelayedWETHTransactor,
    pub transact_opts: TransactOpts,
}

impl DelayedWETHTransactorSession {
    pub fn new(contract: DelayedWETHTransactor, transact_opts: TransactOpts) -> Self {
        Self {
            contract,
            transact_opts,
        }
    }

    pub async fn approve(&self, guy: Address, wad: U256) -> Result<TxHandle> {
        self.contract.approve(&self.transact_opts, guy, wad).await
    }

    pub async fn deposit(&self) -> Result<TxHandle> {
        self.contract.deposit(&self.transact_opts).await
    }

    pub async fn hold(&self, guy: Address, wad: U256) -> Result<TxHandle> {
        self.contract.hold(&self.transact_opts, guy, wad).await
    }

    pub async fn initialize(&self, owner: Address, config: Address) -> Result<TxHandle> {
        self.contract
            .initialize(&self.transact_opts, owner, config)
            .await
    }

    pub async fn recover(&self, wad: U256) -> Result<TxHandle> {
        self.contract.recover(&self.transact_opts, wad).await
    }

    pub async fn renounce_ownership(&self) -> Result<TxHandle> {
        self.contract.renounce_ownership(&self.transact_opts).await
    }

    pub async fn transfer(&self, dst: Address, wad: U256) -> Result<TxHandle> {
        self.contract.transfer(&self.transact_opts, dst, wad).await
    }

    pub async fn transfer_from(&self, src: Address, dst: Address, wad: U256) -> Result<TxHandle> {
        self.contract
            .transfer_from(&self.transact_opts, src, dst, wad)
            .await
    }

    pub async fn transfer_ownership(&self, new_owner: Address) -> Result<TxHandle> {
        self.contract
            .transfer_ownership(&self.transact_opts, new_owner)
            .await
    }

    pub async fn unlock(&self, guy: Address, wad: U256) -> Result<TxHandle> {
        self.contract.unlock(&self.transact_opts, guy, wad).await
    }

    pub async fn withdraw(&self, wad: U256) -> Result<TxHandle> {
        self.contract.withdraw(&self.transact_opts, wad).await
    }

    pub async fn withdraw0(&self, guy: Address, wad: U256) -> Result<TxHandle> {
        self.contract.withdraw0(&self.transact_opts, guy, wad).await
    }

    pub async fn fallback(&self, calldata: Bytes) -> Result<TxHandle> {
        self.contract.fallback(&self.transact_opts, calldata).await
    }

    pub async fn receive(&self) -> Result<TxHandle> {
        self.contract.receive(&self.transact_opts).await
    }
}

/// Outputs of `withdrawals(address,address)`.
#[derive(Debug, Clone, PartialEq)]
pub struct DelayedWETHWithdrawalsOutput {
    pub amount: U256,
    pub timestamp: U256,
}

// =============================================================================
// Approval
// =============================================================================

/// `Approval(address,address,uint256)`
#[derive(Debug, Clone, PartialEq)]
pub struct DelayedWETHApproval {
    pub src: Address,
    pub guy: Address,
    pub wad: U256,
    /// The log this event was decoded from
    pub raw: Log,
}

impl ContractEvent for DelayedWETHApproval {
    const NAME: &'static str = "Approval";

    fn from_record(record: EventRecord) -> Result<Self> {
        let (mut reader, raw) = record.into_reader();
        Ok(Self {
            src: reader.next("src")?,
            guy: reader.next("guy")?,
            wad: reader.next("wad")?,
            raw,
        })
    }
}

/// Iterator over `Approval` events.
pub type DelayedWETHApprovalIterator = EventIterator<DelayedWETHApproval>;

// =============================================================================
// Deposit
// =============================================================================

/// `Deposit(address,uint256)`
#[derive(Debug, Clone, PartialEq)]
pub struct DelayedWETHDeposit {
    pub dst: Address,
    pub wad: U256,
    /// The log this event was decoded from
    pub raw: Log,
}

impl ContractEvent for DelayedWETHDeposit {
    const NAME: &'static str = "Deposit";

    fn from_record(record: EventRecord) -> Result<Self> {
        let (mut reader, raw) = record.into_reader();
        Ok(Self {
            dst: reader.next("dst")?,
            wad: reader.next("wad")?,
            raw,
        })
    }
}

/// Iterator over `Deposit` events.
pub type DelayedWETHDepositIterator = EventIterator<DelayedWETHDeposit>;

// =============================================================================
// Initialized
// =============================================================================

/// `Initialized(uint8)`
#[derive(Debug, Clone, PartialEq)]
pub struct DelayedWETHInitialized {
    pub version: u8,
    /// The log this event was decoded from
    pub raw: Log,
}

impl ContractEvent for DelayedWETHInitialized {
    const NAME: &'static str = "Initialized";

    fn from_record(record: EventRecord) -> Result<Self> {
        let (mut reader, raw) = record.into_reader();
        Ok(Self {
            version: reader.next("version")?,
            raw,
        })
    }
}

/// Iterator over `Initialized` events.
pub type DelayedWETHInitializedIterator = EventIterator<DelayedWETHInitialized>;

// =============================================================================
// OwnershipTransferred
// =============================================================================

/// `OwnershipTransferred(address,address)`
#[derive(Debug, Clone, PartialEq)]
pub struct DelayedWETHOwnershipTransferred {
    pub previous_owner: Address,
    pub new_owner: Address,
    /// The log this event was decoded from
    pub raw: Log,
}

impl ContractEvent for DelayedWETHOwnershipTransferred {
    const NAME: &'static str = "OwnershipTransferred";

    fn from_record(record: EventRecord) -> Result<Self> {
        let (mut reader, raw) = record.into_reader();
        Ok(Self {
            previous_owner: reader.next("previous_owner")?,
            new_owner: reader.next("new_owner")?,
            raw,
        })
    }
}

/// Iterator over `OwnershipTransferred` events.
pub type DelayedWETHOwnershipTransferredIterator = EventIterator<DelayedWETHOwnershipTransferred>;

// =============================================================================
// Transfer
// =============================================================================

/// `Transfer(address,address,uint256)`
#[derive(Debug, Clone, PartialEq)]
pub struct DelayedWETHTransfer {
    pub src: Address,
    pub dst: Address,
    pub wad: U256,
    /// The log this event was decoded from
    pub raw: Log,
}

impl ContractEvent for DelayedWETHTransfer {
    const NAME: &'static str = "Transfer";

    fn from_record(record: EventRecord) -> Result<Self> {
        let (mut reader, raw) = record.into_reader();
        Ok(Self {
            src: reader.next("src")?,
            dst: reader.next("dst")?,
            wad: reader.next("wad")?,
            raw,
        })
    }
}

/// Iterator over `Transfer` events.
pub type DelayedWETHTransferIterator = EventIterator<DelayedWETHTransfer>;

// =============================================================================
// Unwrap
// =============================================================================

/// `Unwrap(address,uint256)`
#[derive(Debug, Clone, PartialEq)]
pub struct DelayedWETHUnwrap {
    pub src: Address,
    pub wad: U256,
    /// The log this event was decoded from
    pub raw: Log,
}

impl ContractEvent for DelayedWETHUnwrap {
    const NAME: &'static str = "Unwrap";

    fn from_record(record: EventRecord) -> Result<Self> {
        let (mut reader, raw) = record.into_reader();
        Ok(Self {
            src: reader.next("src")?,
            wad: reader.next("wad")?,
            raw,
        })
    }
}

/// Iterator over `Unwrap` events.
pub type DelayedWETHUnwrapIterator = EventIterator<DelayedWETHUnwrap>;

// =============================================================================
// Withdrawal
// =============================================================================

/// `Withdrawal(address,uint256)`
#[derive(Debug, Clone, PartialEq)]
pub struct DelayedWETHWithdrawal {
    pub src: Address,
    pub wad: U256,
    /// The log this event was decoded from
    pub raw: Log,
}

impl ContractEvent for DelayedWETHWithdrawal {
    const NAME: &'static str = "Withdrawal";

    fn from_record(record: EventRecord) -> Result<Self> {
        let (mut reader, raw) = record.into_reader();
        Ok(Self {
            src: reader.next("src")?,
            wad: reader.next("wad")?,
            raw,
        })
    }
}

/// Iterator over `Withdrawal` events.
pub type DelayedWETHWithdrawalIterator = EventIterator<DelayedWETHWithdrawal>;
