// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the swapwise command-line interface.
//!
//! Three subcommands: `demo` runs the built-in example cases, `reverse` and
//! `push-zeros` apply one rearrangement to values given on the command line.
//! Every subcommand can emit JSON instead of the terminal display, and can
//! check each result against a copy of its input with `--verify`.

pub mod cases;
pub mod display;
pub mod logging;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use swapwise::Operation;

#[derive(Parser)]
#[command(
    name = "swapwise",
    about = "In-place two-pointer sequence rearrangements",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print results as JSON instead of the terminal display
    #[arg(long, global = true)]
    pub json: bool,

    /// Check every result against a copy of its input; exit 1 on violation
    #[arg(long, global = true)]
    pub verify: bool,

    /// Raise log verbosity (-v debug, -vv trace). `RUST_LOG` wins if set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the built-in demonstration cases
    Demo {
        /// Only run the cases for one operation
        #[arg(long, value_enum)]
        op: Option<OpArg>,
    },

    /// Reverse the given values in place
    Reverse {
        /// Integers to reverse
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Move zeros to the end, keeping non-zero order
    PushZeros {
        /// Integers to rearrange
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
}

/// Operation selector for `demo --op`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OpArg {
    Reverse,
    PushZeros,
}

impl From<OpArg> for Operation {
    fn from(op: OpArg) -> Self {
        match op {
            OpArg::Reverse => Operation::Reverse,
            OpArg::PushZeros => Operation::PushZeros,
        }
    }
}
