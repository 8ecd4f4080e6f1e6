use std::io::Read;
use std::path::{Path, PathBuf};

use eyre::WrapErr;

use carepath_core::models::answer::AnswerSet;
use carepath_scoring::config::ScoringConfig;

/// Read an answer set from `path`, or from stdin when `path` is `-`.
pub fn read_answers(path: &Path) -> eyre::Result<AnswerSet> {
    let contents = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .wrap_err("failed to read answers from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read answers at {}", path.display()))?
    };

    parse_answers(&contents)
}

pub fn parse_answers(contents: &str) -> eyre::Result<AnswerSet> {
    let answers: AnswerSet =
        serde_json::from_str(contents).wrap_err("answers must be a JSON object")?;
    tracing::debug!(keys = answers.len(), "answers parsed");
    Ok(answers)
}

/// The scoring config to use: an override file when given, else the built-in.
pub fn resolve_config(path: Option<&PathBuf>) -> eyre::Result<ScoringConfig> {
    match path {
        Some(path) => Ok(ScoringConfig::load(path)?),
        None => Ok(ScoringConfig::builtin().clone()),
    }
}
