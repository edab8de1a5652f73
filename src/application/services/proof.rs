//! Proof service
//!
//! Loads graphs, lists candidate rule applications and applies or replays
//! proof steps, accepting only steps offered by the rule enumerators.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{Graph, GraphPath, Rule, Step};

/// Every graph produced while replaying a sequence of steps.
#[derive(Debug, Clone)]
pub struct ProofTrace {
    /// Starting graph
    pub start: Graph,
    /// Applied steps paired with the graph each one produced
    pub steps: Vec<(Step, Graph)>,
}

impl ProofTrace {
    /// Graph after the last step (the start graph if there were none).
    pub fn conclusion(&self) -> &Graph {
        self.steps.last().map(|(_, g)| g).unwrap_or(&self.start)
    }
}

/// Service for checking and applying proof steps.
#[derive(Debug, Clone)]
pub struct ProofService {
    rules: Vec<Rule>,
}

impl Default for ProofService {
    fn default() -> Self {
        Self::new(Rule::ALL.to_vec())
    }
}

impl ProofService {
    /// Create a proof service that accepts only the given rules.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Parse a graph from its bracket notation.
    pub fn load(&self, text: &str) -> ApplicationResult<Graph> {
        Ok(Graph::parse(text)?)
    }

    /// Read and parse a graph stored in a text file.
    #[instrument(level = "debug", skip(self))]
    pub fn load_file(&self, path: &Path) -> ApplicationResult<Graph> {
        let text = std::fs::read_to_string(path).with_path_context("read graph", path)?;
        self.load(&text)
    }

    /// Candidate paths for one rule.
    pub fn moves(&self, graph: &Graph, rule: Rule) -> ApplicationResult<Vec<GraphPath>> {
        self.ensure_enabled(rule)?;
        Ok(rule.possible(graph))
    }

    /// Candidate paths for every enabled rule, in configuration order.
    pub fn all_moves(&self, graph: &Graph) -> Vec<(Rule, Vec<GraphPath>)> {
        self.rules
            .iter()
            .map(|rule| (*rule, rule.possible(graph)))
            .collect()
    }

    /// Apply one step after checking it against the rule's enumerator.
    #[instrument(level = "debug", skip(self, graph, step), fields(graph = %graph, step = %step))]
    pub fn apply(&self, graph: &Graph, step: &Step) -> ApplicationResult<Graph> {
        self.ensure_enabled(step.rule)?;
        if !step.rule.possible(graph).contains(&step.path) {
            return Err(ApplicationError::NotApplicable {
                rule: step.rule,
                path: step.path.clone(),
            });
        }
        let result = step.rule.apply(graph, &step.path)?;
        debug!(%result, "step applied");
        Ok(result)
    }

    /// Apply `steps` in order, stopping at the first illegal one.
    #[instrument(
        level = "debug",
        skip(self, start, steps),
        fields(start = %start, steps = steps.len())
    )]
    pub fn replay(&self, start: &Graph, steps: &[Step]) -> ApplicationResult<ProofTrace> {
        let mut trace = ProofTrace {
            start: start.clone(),
            steps: Vec::with_capacity(steps.len()),
        };
        for (index, step) in steps.iter().enumerate() {
            let next = self
                .apply(trace.conclusion(), step)
                .map_err(|e| ApplicationError::StepFailed {
                    index: index + 1,
                    step: step.to_string(),
                    source: Box::new(e),
                })?;
            trace.steps.push((step.clone(), next));
        }
        info!(conclusion = %trace.conclusion(), "replayed {} steps", steps.len());
        Ok(trace)
    }

    fn ensure_enabled(&self, rule: Rule) -> ApplicationResult<()> {
        if self.rules.contains(&rule) {
            Ok(())
        } else {
            Err(ApplicationError::RuleDisabled(rule))
        }
    }
}
