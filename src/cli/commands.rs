//! Command dispatch: reads graphs, calls the proof service and prints results.

use std::io;
use std::path::Path;

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::application::services::ProofService;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{Graph, GraphPath, GraphTreeConvert, Rule, Step};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!(?settings, "settings loaded");
    if !settings.color {
        colored::control::set_override(false);
    }
    let service = ProofService::new(settings.rules.clone());

    match &cli.command {
        Some(Commands::Show { graph, tree }) => _show(&service, &settings, graph, *tree),
        Some(Commands::Tree { graph }) => _tree(&service, graph),
        Some(Commands::Moves { graph, rules }) => _moves(&service, graph, rules),
        Some(Commands::Apply { rule, path, graph }) => {
            _apply(&service, &settings, *rule, path, graph)
        }
        Some(Commands::Check {
            graph,
            steps,
            expect,
        }) => _check(&service, &settings, graph, steps, expect.as_deref()),
        Some(Commands::Config { command }) => _config(&settings, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(*shell, &mut cmd, "aegraph", &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage("no command given, try --help".into())),
    }
}

/// Reads a graph argument: `-` for stdin, `@file` for a file, else the notation itself.
fn read_graph(service: &ProofService, arg: &str) -> CliResult<Graph> {
    if arg == "-" {
        let text = io::read_to_string(io::stdin()).map_err(|e| CliError::Io {
            context: "read graph from stdin".into(),
            source: e,
        })?;
        return Ok(service.load(&text)?);
    }
    if let Some(file) = arg.strip_prefix('@') {
        return Ok(service.load_file(Path::new(file))?);
    }
    Ok(service.load(arg)?)
}

fn print_graph(graph: &Graph, with_tree: bool) {
    output::graph(graph);
    if with_tree {
        output::info(&graph.to_tree_string());
    }
}

#[instrument(skip(service, settings))]
fn _show(service: &ProofService, settings: &Settings, graph: &str, tree: bool) -> CliResult<()> {
    let graph = read_graph(service, graph)?;
    print_graph(&graph, tree || settings.show_tree);
    Ok(())
}

#[instrument(skip(service))]
fn _tree(service: &ProofService, graph: &str) -> CliResult<()> {
    let graph = read_graph(service, graph)?;
    output::info(&graph.to_tree_string());
    Ok(())
}

#[instrument(skip(service))]
fn _moves(service: &ProofService, graph: &str, rules: &[Rule]) -> CliResult<()> {
    let graph = read_graph(service, graph)?;
    let moves = if rules.is_empty() {
        service.all_moves(&graph)
    } else {
        rules
            .iter()
            .map(|rule| Ok((*rule, service.moves(&graph, *rule)?)))
            .collect::<CliResult<Vec<_>>>()?
    };

    for (rule, paths) in moves {
        output::header(&format!("{} ({})", rule, paths.len()));
        for path in paths {
            let target = graph
                .resolve(&path)
                .map(|e| e.to_string())
                .unwrap_or_default();
            output::candidate(&path, &target);
        }
    }
    Ok(())
}

#[instrument(skip(service, settings))]
fn _apply(
    service: &ProofService,
    settings: &Settings,
    rule: Rule,
    path: &GraphPath,
    graph: &str,
) -> CliResult<()> {
    let graph = read_graph(service, graph)?;
    let result = service.apply(&graph, &Step::new(rule, path.clone()))?;
    print_graph(&result, settings.show_tree);
    Ok(())
}

#[instrument(skip(service, settings))]
fn _check(
    service: &ProofService,
    settings: &Settings,
    graph: &str,
    steps: &[Step],
    expect: Option<&str>,
) -> CliResult<()> {
    let start = read_graph(service, graph)?;
    let trace = service.replay(&start, steps)?;

    print_graph(&trace.start, settings.show_tree);
    for (step, graph) in &trace.steps {
        output::step(step);
        print_graph(graph, settings.show_tree);
    }

    if let Some(expected) = expect {
        let expected = service.load(expected)?;
        let actual = trace.conclusion();
        if &expected != actual {
            return Err(CliError::ConclusionMismatch {
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
        }
        output::success(&format!("conclusion {} reached", actual));
    }
    Ok(())
}

fn _config(settings: &Settings, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("no config directory available on this platform"),
        },
    }
    Ok(())
}
