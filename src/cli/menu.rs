//! Main menu and selection parsing.

use std::collections::BTreeSet;
use std::fmt;
use std::io::Write;

use thiserror::Error;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MenuOption {
    Deploy,
    CheckTransaction,
    Set,
    Get,
    Exit,
}

impl MenuOption {
    /// Every option, in display order.
    pub const ALL: [MenuOption; 5] = [
        MenuOption::Deploy,
        MenuOption::CheckTransaction,
        MenuOption::Set,
        MenuOption::Get,
        MenuOption::Exit,
    ];

    /// Label shown in the menu.
    pub fn label(self) -> &'static str {
        match self {
            MenuOption::Deploy => "Deploy the contract",
            MenuOption::CheckTransaction => "Check a transaction",
            MenuOption::Set => "Use the SET function",
            MenuOption::Get => "Use the GET function",
            MenuOption::Exit => "Exit",
        }
    }

    /// 1-based number the operator types.
    pub fn number(self) -> usize {
        Self::ALL.iter().position(|o| *o == self).map_or(0, |i| i + 1)
    }

    /// Action run for this entry, `None` for Exit.
    pub fn action(self) -> Option<Action> {
        match self {
            MenuOption::Deploy => Some(Action::Deploy),
            MenuOption::CheckTransaction => Some(Action::CheckTransaction),
            MenuOption::Set => Some(Action::Set),
            MenuOption::Get => Some(Action::Get),
            MenuOption::Exit => None,
        }
    }

    fn from_number(n: usize) -> Option<Self> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

/// Menu entries that talk to the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Deploy,
    CheckTransaction,
    Set,
    Get,
}

impl fmt::Display for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a menu answer was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Zero or several options were picked.
    #[error("Please select only one option (got {0})")]
    Count(usize),

    /// A token is not an option number.
    #[error("Unknown option '{0}', enter a number between 1 and 5")]
    Unknown(String),
}

/// Parse one menu answer.
///
/// Option numbers may be separated by spaces or commas; repeating a number
/// selects it once. Exactly one distinct option must remain.
pub fn parse_selection(input: &str) -> Result<MenuOption, SelectionError> {
    let mut selected = BTreeSet::new();

    for token in input.split(|c: char| c.is_whitespace() || c == ',').filter(|t| !t.is_empty()) {
        let option = token
            .parse::<usize>()
            .ok()
            .and_then(MenuOption::from_number)
            .ok_or_else(|| SelectionError::Unknown(token.to_string()))?;
        selected.insert(option);
    }

    let count = selected.len();
    match (count, selected.into_iter().next()) {
        (1, Some(option)) => Ok(option),
        _ => Err(SelectionError::Count(count)),
    }
}

/// Print the menu and the selection prompt.
pub fn render_menu<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "What do you want to do? (select one)")?;
    for option in MenuOption::ALL {
        writeln!(out, "  {}. {}", option.number(), option.label())?;
    }
    write!(out, "> ")?;
    out.flush()
}
