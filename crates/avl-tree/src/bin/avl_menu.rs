//! `avl-menu` — interactive AVL tree console.
//!
//! Usage:
//!   avl-menu [--indent <n>] [--quiet]
//!
//! Reads option numbers (and keys) from stdin. Set `RUST_LOG=debug` to see
//! each insert and delete, or `RUST_LOG=trace` to see every rotation.

use avl_tree::menu::{run, MenuConfig};
use std::io;

fn main() {
    env_logger::init();

    let config = match MenuConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run(stdin.lock(), stdout.lock(), &config) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
