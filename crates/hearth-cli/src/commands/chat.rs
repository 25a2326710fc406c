use std::io::Write;

use hearth_config::HearthConfig;
use hearth_runtime::{Evaluator, agent::Agent};
use tokio::io::AsyncBufReadExt;
use tracing::{debug, error};

/// What a single console line asks the loop to do.
#[derive(Debug, PartialEq, Eq)]
enum LineCommand<'a> {
    Skip,
    Exit,
    RunEval,
    Message(&'a str),
}

impl<'a> LineCommand<'a> {
    fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineCommand::Skip;
        }
        match trimmed.to_lowercase().as_str() {
            "exit" | "quit" => LineCommand::Exit,
            "run_eval" => LineCommand::RunEval,
            _ => LineCommand::Message(trimmed),
        }
    }
}

pub(super) async fn cmd_chat(config: HearthConfig) -> hearth_core::Result<()> {
    let agent = super::open_agent(&config)?;

    println!("🏠 Hearth interactive mode");
    println!("   Type 'exit' to quit or 'run_eval' to run simulation tests");
    println!("   Type 'help' for example commands");
    println!();

    // Interactive loop reading from stdin
    let stdin = tokio::io::stdin();
    let reader = tokio::io::BufReader::new(stdin);
    let mut lines = reader.lines();

    loop {
        prompt(&mut std::io::stdout()).ok();

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break, // EOF
            Err(e) => {
                error!(error = %e, "failed to read from stdin");
                break;
            }
        };

        match LineCommand::parse(&line) {
            LineCommand::Skip => continue,
            LineCommand::Exit => {
                println!("Goodbye.");
                break;
            }
            LineCommand::RunEval => run_eval(&agent, &config),
            LineCommand::Message(text) => reply(&agent, text),
        }
    }

    Ok(())
}

/// The prompt shares stdout with the replies so transcripts read in order.
fn prompt(out: &mut impl Write) -> std::io::Result<()> {
    write!(out, "\x1b[36mYou:\x1b[0m ")?;
    out.flush()
}

fn reply(agent: &Agent, text: &str) {
    match agent.handle(text) {
        Ok(resp) => println!("Agent: {}", resp.text),
        Err(e) => println!("\x1b[31m❌ {e}\x1b[0m"),
    }
}

fn run_eval(agent: &Agent, config: &HearthConfig) {
    let mut stdout = std::io::stdout().lock();
    match Evaluator::new(agent, &config.evaluation).run(&mut stdout) {
        Ok(outcome) => debug!(?outcome, "evaluation finished"),
        Err(e) => println!("\x1b[31m❌ Evaluation failed: {e}\x1b[0m"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_are_skipped() {
        assert_eq!(LineCommand::parse(""), LineCommand::Skip);
        assert_eq!(LineCommand::parse("   \t"), LineCommand::Skip);
    }

    #[test]
    fn test_exit_sentinels_case_insensitive() {
        assert_eq!(LineCommand::parse("exit"), LineCommand::Exit);
        assert_eq!(LineCommand::parse("  QUIT "), LineCommand::Exit);
        assert_eq!(LineCommand::parse("Exit"), LineCommand::Exit);
    }

    #[test]
    fn test_run_eval_sentinel() {
        assert_eq!(LineCommand::parse("run_eval"), LineCommand::RunEval);
        assert_eq!(LineCommand::parse("RUN_EVAL"), LineCommand::RunEval);
    }

    #[test]
    fn test_sentinels_must_be_whole_line() {
        assert_eq!(
            LineCommand::parse("please exit"),
            LineCommand::Message("please exit")
        );
        assert_eq!(
            LineCommand::parse("run_eval now"),
            LineCommand::Message("run_eval now")
        );
    }

    #[test]
    fn test_prompt_written_without_newline() {
        let mut out = Vec::new();
        prompt(&mut out).unwrap();
        assert_eq!(out, b"\x1b[36mYou:\x1b[0m ");
    }

    #[test]
    fn test_messages_are_trimmed() {
        assert_eq!(
            LineCommand::parse("  turn on the kitchen light \n"),
            LineCommand::Message("turn on the kitchen light")
        );
    }
}
