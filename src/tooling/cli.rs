//! CLI Tooling
//!
//! Thin command-line driver around the namespace. Every invocation works on a
//! fresh in-memory namespace; nothing outlives the process.

use crate::config::{ConfigLoader, NsfsConfig};
use crate::error::{ApiError, NamespaceError};
use crate::logging::LoggingConfig;
use crate::namespace::{Namespace, NamespaceStats};
use crate::tooling::format::{format_biggest_text, format_section_heading, format_stats_text};
use crate::tooling::script::{parse_script, ScriptCommand, ScriptLine};
use crate::views::{RenderLine, RenderOptions};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{json, Value};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

/// Script run by `nsfs demo`
pub const DEMO_SCRIPT: &str = "\
# build a small tree
mkdir / Documents
touch Documents report.txt 1024
mkdir Documents Archive
touch Archive old-report.txt 256
touch / file1.txt 512
touch / file2.txt 1024
touch / file3.txt 256
mkdir / Projects
size report.txt
biggest
show
stats
# Projects can only be deleted once, the root never
rm Projects
rm Projects
rm /
rm Documents
size report.txt
show
";

/// nsfs - in-memory hierarchical namespace
#[derive(Parser)]
#[command(name = "nsfs")]
#[command(about = "In-memory hierarchical namespace with globally unique entry names")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (layered over the global config file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Fold the logging flags over the configured logging settings
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.file = Some(file.clone());
        }
        config
    }
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Build a sample namespace and print each query result
    Demo {
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Execute a namespace script ("-" reads stdin)
    Run {
        /// Script file
        script: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
        /// Stop at the first failing command
        #[arg(long)]
        fail_fast: bool,
    },
    /// Print the effective configuration as TOML
    Config,
}

/// Rendered result of a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    /// Number of script commands the namespace rejected
    pub failed: usize,
}

/// Result of one successful script step
enum StepResult<'a> {
    Done,
    Size { name: &'a str, size: u64 },
    Biggest(Option<(&'a str, u64)>),
    Show(Vec<RenderLine<'a>>),
    Stats(NamespaceStats),
}

/// CLI execution context
pub struct CliContext {
    config: NsfsConfig,
    color: bool,
}

impl CliContext {
    /// Load configuration (global file, `config_path`, environment) and build a context
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = ConfigLoader::load(config_path.as_deref())?;
        Ok(Self::with_config(config))
    }

    pub fn with_config(config: NsfsConfig) -> Self {
        Self {
            config,
            color: false,
        }
    }

    /// Enable ANSI styling of headings
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn config(&self) -> &NsfsConfig {
        &self.config
    }

    pub fn execute(&self, command: &Commands) -> Result<CommandOutput, ApiError> {
        match command {
            Commands::Demo { format } => {
                let outcome = self.run_script(DEMO_SCRIPT, *format, false)?;
                // the demo rejects a few commands on purpose
                Ok(CommandOutput {
                    failed: 0,
                    ..outcome
                })
            }
            Commands::Run {
                script,
                format,
                fail_fast,
            } => {
                let source = read_script(script)?;
                self.run_script(&source, *format, *fail_fast)
            }
            Commands::Config => Ok(CommandOutput {
                text: toml::to_string_pretty(&self.config)?,
                failed: 0,
            }),
        }
    }

    /// Run a script against a fresh namespace
    pub fn run_script(
        &self,
        source: &str,
        format: OutputFormat,
        fail_fast: bool,
    ) -> Result<CommandOutput, ApiError> {
        let script = parse_script(source)?;
        let mut namespace = Namespace::from_config(&self.config.namespace);
        info!(
            commands = script.len(),
            strategy = %namespace.strategy(),
            "running script"
        );

        let mut text = Vec::new();
        let mut json_steps = Vec::new();
        let mut failed = 0;
        for step in &script {
            // mutations need `&mut`; everything else borrows the namespace
            let result = apply_mutation(&mut namespace, &step.command);
            let outcome = match result {
                Ok(true) => Ok(StepResult::Done),
                Ok(false) => query(&namespace, &step.command, self.config.render),
                Err(e) => Err(e),
            };
            match format {
                OutputFormat::Text => {
                    if let Some(line) = self.step_text(step, &outcome) {
                        text.push(line);
                    }
                }
                OutputFormat::Json => json_steps.push(step_json(step, &outcome)?),
            }
            if outcome.is_err() {
                failed += 1;
                if fail_fast {
                    break;
                }
            }
        }

        let text = match format {
            OutputFormat::Text => text.join("\n"),
            OutputFormat::Json => serde_json::to_string_pretty(&json_steps)?,
        };
        Ok(CommandOutput { text, failed })
    }

    fn step_text(
        &self,
        step: &ScriptLine,
        outcome: &Result<StepResult<'_>, NamespaceError>,
    ) -> Option<String> {
        match outcome {
            Ok(StepResult::Done) => None,
            Ok(StepResult::Size { name, size }) => Some(format!("{}: {}", name, size)),
            Ok(StepResult::Biggest(file)) => Some(format_biggest_text(*file)),
            Ok(StepResult::Show(lines)) => {
                let mut out = format_section_heading("File System:", self.color);
                for line in lines {
                    out.push('\n');
                    out.push_str(&line.to_string());
                }
                Some(out)
            }
            Ok(StepResult::Stats(stats)) => Some(format_stats_text(stats)),
            Err(e) => Some(format!(
                "line {}: {}: error: {}",
                step.line,
                step.command.keyword(),
                e
            )),
        }
    }
}

/// Apply `command` if it mutates; `Ok(false)` means it is a query
fn apply_mutation(namespace: &mut Namespace, command: &ScriptCommand) -> Result<bool, NamespaceError> {
    match command {
        ScriptCommand::Mkdir { parent, name } => namespace.add_dir(parent, name).map(|_| true),
        ScriptCommand::Touch { parent, name, size } => {
            namespace.add_file(parent, name, *size).map(|_| true)
        }
        ScriptCommand::Rm { name } => namespace.delete(name).map(|_| true),
        ScriptCommand::Size { .. }
        | ScriptCommand::Biggest
        | ScriptCommand::Show
        | ScriptCommand::Stats => Ok(false),
    }
}

fn query<'a>(
    namespace: &'a Namespace,
    command: &'a ScriptCommand,
    render: RenderOptions,
) -> Result<StepResult<'a>, NamespaceError> {
    match command {
        ScriptCommand::Size { name } => namespace
            .get_file_size(name)
            .map(|size| StepResult::Size { name, size }),
        ScriptCommand::Biggest => Ok(StepResult::Biggest(
            namespace
                .get_biggest_file()
                .map(|file| (file.name.as_str(), file.size)),
        )),
        ScriptCommand::Show => Ok(StepResult::Show(namespace.render(render).collect())),
        ScriptCommand::Stats => Ok(StepResult::Stats(namespace.stats())),
        ScriptCommand::Mkdir { .. } | ScriptCommand::Touch { .. } | ScriptCommand::Rm { .. } => {
            Ok(StepResult::Done)
        }
    }
}

fn step_json(
    step: &ScriptLine,
    outcome: &Result<StepResult<'_>, NamespaceError>,
) -> Result<Value, ApiError> {
    let mut value = json!({
        "line": step.line,
        "command": step.command.keyword(),
    });
    match outcome {
        Ok(result) => {
            value["status"] = json!("ok");
            let payload = match result {
                StepResult::Done => Value::Null,
                StepResult::Size { name, size } => json!({ "name": name, "size": size }),
                StepResult::Biggest(Some((name, size))) => json!({ "name": name, "size": size }),
                StepResult::Biggest(None) => Value::Null,
                StepResult::Show(lines) => serde_json::to_value(lines)?,
                StepResult::Stats(stats) => serde_json::to_value(stats)?,
            };
            if !payload.is_null() {
                value["result"] = payload;
            }
        }
        Err(e) => {
            value["status"] = json!("error");
            value["error"] = json!(e.to_string());
        }
    }
    Ok(value)
}

fn read_script(path: &Path) -> Result<String, ApiError> {
    if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }
    Ok(std::fs::read_to_string(path)?)
}
