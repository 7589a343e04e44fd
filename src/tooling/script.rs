//! Line-oriented namespace scripts
//!
//! One command per line; blank lines and `#` comments are ignored.
//!
//! ```text
//! mkdir <parent> <name>
//! touch <parent> <name> <size>
//! size <name>
//! biggest
//! show
//! stats
//! rm <name>
//! ```

use crate::error::ApiError;

/// A single parsed script command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Mkdir { parent: String, name: String },
    Touch { parent: String, name: String, size: i64 },
    Size { name: String },
    Biggest,
    Show,
    Stats,
    Rm { name: String },
}

impl ScriptCommand {
    /// Keyword the command was written with
    pub fn keyword(&self) -> &'static str {
        match self {
            ScriptCommand::Mkdir { .. } => "mkdir",
            ScriptCommand::Touch { .. } => "touch",
            ScriptCommand::Size { .. } => "size",
            ScriptCommand::Biggest => "biggest",
            ScriptCommand::Show => "show",
            ScriptCommand::Stats => "stats",
            ScriptCommand::Rm { .. } => "rm",
        }
    }
}

/// A command together with its 1-based line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: ScriptCommand,
}

/// Parse a whole script. Fails on the first malformed line.
pub fn parse_script(source: &str) -> Result<Vec<ScriptLine>, ApiError> {
    let mut lines = Vec::new();
    for (i, text) in source.lines().enumerate() {
        if let Some(command) = parse_line(i + 1, text)? {
            lines.push(ScriptLine {
                line: i + 1,
                command,
            });
        }
    }
    Ok(lines)
}

/// Parse one line; `Ok(None)` for blank and comment lines
pub fn parse_line(line: usize, text: &str) -> Result<Option<ScriptCommand>, ApiError> {
    let text = text.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }
    let words: Vec<&str> = text.split_whitespace().collect();
    let error = |message: String| ApiError::ScriptError { line, message };
    let arity = |expected: usize| -> Result<(), ApiError> {
        if words.len() - 1 != expected {
            return Err(error(format!(
                "'{}' takes {} argument(s), got {}",
                words[0],
                expected,
                words.len() - 1
            )));
        }
        Ok(())
    };

    let command = match words[0] {
        "mkdir" => {
            arity(2)?;
            ScriptCommand::Mkdir {
                parent: words[1].to_string(),
                name: words[2].to_string(),
            }
        }
        "touch" => {
            arity(3)?;
            let size = words[3]
                .parse::<i64>()
                .map_err(|_| error(format!("invalid size '{}'", words[3])))?;
            ScriptCommand::Touch {
                parent: words[1].to_string(),
                name: words[2].to_string(),
                size,
            }
        }
        "size" => {
            arity(1)?;
            ScriptCommand::Size {
                name: words[1].to_string(),
            }
        }
        "rm" => {
            arity(1)?;
            ScriptCommand::Rm {
                name: words[1].to_string(),
            }
        }
        "biggest" => {
            arity(0)?;
            ScriptCommand::Biggest
        }
        "show" => {
            arity(0)?;
            ScriptCommand::Show
        }
        "stats" => {
            arity(0)?;
            ScriptCommand::Stats
        }
        other => return Err(error(format!("unknown command '{}'", other))),
    };
    Ok(Some(command))
}
