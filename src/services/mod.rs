//! Business logic services module.

pub mod bytecode;
pub mod deploy;
pub mod storage;
pub mod transaction;

pub use bytecode::load_bytecode;
pub use deploy::DeployService;
pub use storage::StorageService;
pub use transaction::TransactionService;
