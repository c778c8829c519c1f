//! Interactive command-line interface.

pub mod app;
pub mod menu;

pub use app::{ActionOutcome, ContractCli};
pub use menu::{parse_selection, Action, MenuOption, SelectionError};
