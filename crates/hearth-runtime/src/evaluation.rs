//! Scenario replay.
//!
//! Loads scripted conversations, runs every turn through one [`Agent`] and
//! writes the transcripts out. Scenarios share the agent's memory, so facts
//! remembered in one scenario are visible in the next.

use std::io::Write;
use std::path::{Path, PathBuf};

use hearth_config::EvaluationConfig;
use hearth_core::{AgentResponse, HearthError, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::agent::Agent;

/// One scripted conversation from the scenario file.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub scenario: Vec<ScenarioTurn>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioTurn {
    #[serde(default)]
    pub user: String,
}

/// Transcript of one replayed scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub name: Option<String>,
    pub conversation: Vec<Exchange>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub user: String,
    pub agent: AgentResponse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalOutcome {
    /// Nothing to replay; the scenario file does not exist.
    MissingScenarios { path: PathBuf },
    Completed {
        results_path: PathBuf,
        scenarios: usize,
        turns: usize,
    },
}

/// Replays scenarios through an agent, echoing the conversation to `out`.
pub struct Evaluator<'a> {
    agent: &'a Agent,
    config: &'a EvaluationConfig,
}

impl<'a> Evaluator<'a> {
    pub fn new(agent: &'a Agent, config: &'a EvaluationConfig) -> Self {
        Self { agent, config }
    }

    /// Read the scenario file. `Ok(None)` when it does not exist.
    pub fn load_scenarios(path: &Path) -> Result<Option<Vec<Scenario>>> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let scenarios: Vec<Scenario> = serde_json::from_str(&raw)?;
        Ok(Some(scenarios))
    }

    /// Load, replay, and save. A missing scenario file is reported, not an error.
    pub fn run(&self, out: &mut impl Write) -> Result<EvalOutcome> {
        let scenarios_path = &self.config.scenarios_path;
        let Some(scenarios) = Self::load_scenarios(scenarios_path)? else {
            warn!(path = ?scenarios_path, "no evaluation file");
            writeln!(out, "No evaluation file found at: {}", scenarios_path.display())?;
            return Ok(EvalOutcome::MissingScenarios {
                path: scenarios_path.clone(),
            });
        };

        info!(count = scenarios.len(), path = ?scenarios_path, "running evaluation");
        let results = self.replay(&scenarios, out)?;
        let turns: usize = results.iter().map(|r| r.conversation.len()).sum();

        let results_path = &self.config.results_path;
        save_results(results_path, &results)?;
        writeln!(out)?;
        writeln!(
            out,
            "Evaluation complete. Results saved to {}",
            results_path.display()
        )?;
        info!(scenarios = results.len(), turns, path = ?results_path, "evaluation complete");

        Ok(EvalOutcome::Completed {
            results_path: results_path.clone(),
            scenarios: results.len(),
            turns,
        })
    }

    /// Run every turn of every scenario, in order.
    pub fn replay(&self, scenarios: &[Scenario], out: &mut impl Write) -> Result<Vec<ScenarioResult>> {
        let mut results = Vec::with_capacity(scenarios.len());
        for scenario in scenarios {
            let label = scenario.name.as_deref().unwrap_or("(unnamed)");
            writeln!(out)?;
            writeln!(out, "--- Running scenario: {label} ---")?;

            let mut conversation = Vec::with_capacity(scenario.scenario.len());
            for turn in &scenario.scenario {
                writeln!(out, "User: {}", turn.user)?;
                let response = self.agent.handle(&turn.user)?;
                writeln!(out, "Agent: {}", response.text)?;
                conversation.push(Exchange {
                    user: turn.user.clone(),
                    agent: response,
                });
            }
            results.push(ScenarioResult {
                name: scenario.name.clone(),
                conversation,
            });
        }
        Ok(results)
    }
}

fn save_results(path: &Path, results: &[ScenarioResult]) -> Result<()> {
    let body = serde_json::to_vec_pretty(results)?;
    hearth_core::fs::write_atomic(path, &body).map_err(|e| {
        HearthError::Evaluation(format!("failed to write {}: {}", path.display(), e))
    })
}
