//! Numbered-option console front end.
//!
//! Provides the logic behind the `avl-menu` binary: a loop that prints the
//! option list, reads an option number (and a key, for options that take
//! one), and applies it to an [`AvlTree`]. All I/O goes through the reader
//! and writer handed to [`run`], so the loop can be driven from tests.

use std::io::{BufRead, Write};

use crate::error::MenuError;
use crate::print::DEFAULT_INDENT;
use crate::traverse::Order;
use crate::tree::AvlTree;
use crate::types::Key;

pub const MENU_TEXT: &str = "\
0 - Exit
1 - Insert key
2 - Remove key
3 - Search key
4 - Pre-order traversal
5 - Post-order traversal
6 - In-order traversal
";

// ── Configuration ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuConfig {
    /// Spaces per level when printing the tree.
    pub indent: usize,
    /// Print the tree after every insert and remove.
    pub show_tree: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            show_tree: true,
        }
    }
}

impl MenuConfig {
    /// Parses `--indent <n>` and `--quiet`.
    pub fn from_args<I>(args: I) -> Result<Self, MenuError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--indent" => {
                    let value = args.next().ok_or(MenuError::MissingValue("--indent"))?;
                    config.indent = value
                        .trim()
                        .parse()
                        .map_err(|_| MenuError::InvalidNumber(value.clone()))?;
                }
                "--quiet" | "-q" => config.show_tree = false,
                _ => return Err(MenuError::UnknownFlag(arg)),
            }
        }
        Ok(config)
    }
}

// ── Commands ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Exit,
    Insert(Key),
    Remove(Key),
    Search(Key),
    Traverse(Order),
}

impl Command {
    /// Prompt for the key an option needs, or `None` if it takes no key.
    pub fn prompt(option: i64) -> Option<&'static str> {
        match option {
            1 => Some("Enter the key to insert: "),
            2 => Some("Enter the key to remove: "),
            3 => Some("Enter the key to search for: "),
            _ => None,
        }
    }

    pub fn from_option(option: i64, key: Option<Key>) -> Result<Self, MenuError> {
        let required = || key.ok_or(MenuError::MissingValue("key"));
        match option {
            0 => Ok(Command::Exit),
            1 => Ok(Command::Insert(required()?)),
            2 => Ok(Command::Remove(required()?)),
            3 => Ok(Command::Search(required()?)),
            4 => Ok(Command::Traverse(Order::Pre)),
            5 => Ok(Command::Traverse(Order::Post)),
            6 => Ok(Command::Traverse(Order::In)),
            other => Err(MenuError::InvalidOption(other)),
        }
    }
}

pub fn parse_option(line: &str) -> Result<i64, MenuError> {
    let line = line.trim();
    line.parse().map_err(|_| MenuError::InvalidNumber(line.to_string()))
}

pub fn parse_key(line: &str) -> Result<Key, MenuError> {
    let line = line.trim();
    line.parse().map_err(|_| MenuError::InvalidNumber(line.to_string()))
}

// ── Session ───────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct Session {
    pub tree: AvlTree,
    pub config: MenuConfig,
}

impl Session {
    pub fn new(config: MenuConfig) -> Self {
        Self {
            tree: AvlTree::new(),
            config,
        }
    }

    /// Applies `command` and returns the text to show the user.
    pub fn execute(&mut self, command: Command) -> Result<String, MenuError> {
        let mut out = String::new();
        match command {
            Command::Exit => out.push_str("Exiting.\n"),
            Command::Insert(key) => {
                if !self.tree.insert(key)? {
                    out.push_str(&format!("Key {key} is already in the tree\n"));
                }
                self.push_tree(&mut out);
            }
            Command::Remove(key) => {
                if !self.tree.delete(key) {
                    out.push_str(&format!("Key {key} is not in the tree\n"));
                }
                self.push_tree(&mut out);
            }
            Command::Search(key) => {
                if self.tree.search(key) {
                    out.push_str("Value exists in the tree\n");
                } else {
                    out.push_str("Value does not exist in the tree\n");
                }
            }
            Command::Traverse(order) => {
                let keys: Vec<String> = self
                    .tree
                    .traverse(order)
                    .iter()
                    .map(|k| k.to_string())
                    .collect();
                out.push_str(&keys.join(" "));
                out.push('\n');
            }
        }
        Ok(out)
    }

    fn push_tree(&self, out: &mut String) {
        if self.config.show_tree {
            out.push_str(&self.tree.render(self.config.indent));
        }
    }
}

// ── Loop ──────────────────────────────────────────────────────────────────

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, MenuError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Runs the menu until option `0` or end of input.
///
/// Bad option numbers and unparsable keys are reported on `output` and the
/// loop continues; only I/O and allocation failures end it with an error.
pub fn run<R, W>(mut input: R, mut output: W, config: &MenuConfig) -> Result<Session, MenuError>
where
    R: BufRead,
    W: Write,
{
    let mut session = Session::new(config.clone());
    loop {
        writeln!(output, "{MENU_TEXT}")?;
        output.flush()?;
        let Some(line) = read_line(&mut input)? else {
            break;
        };
        let option = match parse_option(&line) {
            Ok(option) => option,
            Err(e) => {
                writeln!(output, "\n{e}\n")?;
                continue;
            }
        };

        let key = match Command::prompt(option) {
            Some(prompt) => {
                write!(output, "\n{prompt}")?;
                output.flush()?;
                let Some(line) = read_line(&mut input)? else {
                    break;
                };
                match parse_key(&line) {
                    Ok(key) => Some(key),
                    Err(e) => {
                        writeln!(output, "\n{e}\n")?;
                        continue;
                    }
                }
            }
            None => None,
        };

        let command = match Command::from_option(option, key) {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "\n{e}\n")?;
                continue;
            }
        };
        log::debug!("menu command {command:?}");

        let text = session.execute(command)?;
        writeln!(output, "\n{text}")?;
        if command == Command::Exit {
            break;
        }
    }
    Ok(session)
}
