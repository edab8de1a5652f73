//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::domain::{GraphPath, Rule, Step};

/// Alpha existential graphs: inspect graphs and apply double-cut, erasure and deiteration
#[derive(Parser, Debug)]
#[command(name = "aegraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file (default: ~/.config/aegraph/aegraph.toml)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Graph arguments take the bracket notation, `-` for stdin or `@file`.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the canonical form of a graph
    Show {
        /// Graph, e.g. "(A, [B, [C]])"
        graph: String,
        /// Also print the tree outline
        #[arg(short, long)]
        tree: bool,
    },

    /// Print the tree outline with the path of every element
    Tree {
        /// Graph, e.g. "(A, [B, [C]])"
        graph: String,
    },

    /// List the paths at which rules can be applied
    Moves {
        /// Graph, e.g. "(A, [B, [C]])"
        graph: String,
        /// Only this rule (repeatable; default: configured rules)
        #[arg(short, long = "rule")]
        rules: Vec<Rule>,
    },

    /// Apply one rule at one path
    Apply {
        /// double-cut | erasure | deiteration
        rule: Rule,
        /// Path, e.g. 0.1
        path: GraphPath,
        /// Graph, e.g. "(A, [B, [C]])"
        graph: String,
    },

    /// Replay proof steps and print every intermediate graph
    Check {
        /// Starting graph
        graph: String,
        /// Steps as rule:path, e.g. double-cut:0 erasure:0.0.1
        #[arg(required = true)]
        steps: Vec<Step>,
        /// Expected conclusion; fails if the final graph differs
        #[arg(short, long)]
        expect: Option<String>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,
    /// Print a commented config template
    Template,
    /// Print config file locations
    Path,
}
