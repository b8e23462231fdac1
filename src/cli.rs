//! Command-line front-end: feeds text commands into the motion service and
//! prints the resulting rig frame.

use crate::motion::{self, MatchMode, MotionService, RigSnapshot, RigState, SpeedPrecedence};
use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// `--match-mode` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MatchModeArg {
    /// Plain containment (default)
    Substring,
    /// Whole words only
    WordBoundary,
}

impl From<MatchModeArg> for MatchMode {
    fn from(arg: MatchModeArg) -> Self {
        match arg {
            MatchModeArg::Substring => MatchMode::Substring,
            MatchModeArg::WordBoundary => MatchMode::WordBoundary,
        }
    }
}

/// `--speed-precedence` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SpeedPrecedenceArg {
    /// Legacy table order (default)
    FirstMatch,
    /// Longer phrases first
    MostSpecific,
}

impl From<SpeedPrecedenceArg> for SpeedPrecedence {
    fn from(arg: SpeedPrecedenceArg) -> Self {
        match arg {
            SpeedPrecedenceArg::FirstMatch => SpeedPrecedence::FirstMatch,
            SpeedPrecedenceArg::MostSpecific => SpeedPrecedence::MostSpecific,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "kokoro-motion",
    version,
    about = "Drive a character rig with plain-language commands"
)]
pub struct MotionArgs {
    /// Command to interpret, e.g. `run very fast`. Reads one command per
    /// line from stdin when omitted.
    pub command: Vec<String>,

    /// Motion config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the keyword match mode from the config
    #[arg(long, value_enum)]
    pub match_mode: Option<MatchModeArg>,

    /// Override the speed modifier precedence from the config
    #[arg(long, value_enum)]
    pub speed_precedence: Option<SpeedPrecedenceArg>,

    /// Print each rig frame as a JSON line
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl MotionArgs {
    fn log_filter(&self) -> EnvFilter {
        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    }

    fn build_service(&self) -> MotionService {
        let path = self
            .config
            .clone()
            .unwrap_or_else(motion::config::default_config_path);
        let mut config = motion::load_config(&path);
        if let Some(mode) = self.match_mode {
            config.match_mode = mode.into();
        }
        if let Some(precedence) = self.speed_precedence {
            config.speed_precedence = precedence.into();
        }
        info!(
            "[Motion] match_mode={:?} speed_precedence={:?}",
            config.match_mode, config.speed_precedence
        );
        MotionService::from_config(&config)
    }
}

fn render(snapshot: &RigSnapshot, json: bool) -> anyhow::Result<String> {
    if json {
        return serde_json::to_string(snapshot).context("Failed to serialize rig frame");
    }
    let state = if snapshot.is_running {
        "running"
    } else if snapshot.is_walking {
        "walking"
    } else {
        "idle"
    };
    let mut line = format!("{} @ {:.1}x", state, snapshot.playback_rate);
    for trigger in &snapshot.pending_triggers {
        line.push_str(" +");
        line.push_str(trigger.name());
    }
    Ok(line)
}

/// Submit one command and write the resulting frame. Triggers are consumed
/// once printed, like the rig consumes them on playback.
fn step(
    service: &MotionService,
    rig: &mut RigState,
    text: &str,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    service.submit(text, rig);
    let line = render(&rig.snapshot(), json)?;
    rig.take_triggers();
    writeln!(out, "{}", line).context("Failed to write to stdout")
}

/// Run every command through one rig, then log the session counters.
/// Used for both the argument and the stdin input paths.
fn session<I>(
    service: &MotionService,
    commands: I,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()>
where
    I: IntoIterator<Item = std::io::Result<String>>,
{
    let mut rig = RigState::new();
    for command in commands {
        let command = command.context("Failed to read command from stdin")?;
        step(service, &mut rig, &command, json, &mut *out)?;
    }

    let stats = service.stats();
    info!(
        total = stats.total(),
        unknown = stats.unknown,
        "[Motion] Session finished"
    );
    Ok(())
}

pub fn run(args: MotionArgs) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(args.log_filter())
        .with_writer(std::io::stderr)
        .init();

    let service = args.build_service();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.command.is_empty() {
        session(&service, std::io::stdin().lock().lines(), args.json, &mut out)
    } else {
        let command = args.command.join(" ");
        session(&service, std::iter::once(Ok(command)), args.json, &mut out)
    }
}
