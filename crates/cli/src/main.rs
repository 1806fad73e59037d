use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use polyfence::geom2::{FillRule, SketchCfg, CLOSING_THRESHOLD};
use tracing_subscriber::fmt::SubscriberBuilder;

mod commands;
mod provenance;

#[derive(Parser)]
#[command(name = "polyfence")]
#[command(about = "Self-intersection and point-in-polygon checks on JSON input")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Would the last edge of a vertex trail cross an earlier edge?
    Check {
        /// JSON file: {"vertices": [[x, y], ...]}
        #[arg(long)]
        input: PathBuf,
        /// Input is a closed ring (last vertex repeats the first)
        #[arg(long)]
        ring: bool,
        #[arg(long, default_value_t = CLOSING_THRESHOLD)]
        closing_threshold: f64,
        /// Also write the result (plus a provenance sidecar) here
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Is a point inside a polygon? Missing inputs give "unavailable".
    Contains {
        /// JSON file: {"polygon": [[x, y], ...] | null, "point": [x, y] | null}
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = Rule::EvenOdd)]
        rule: Rule,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Rule {
    EvenOdd,
    NonZero,
}

impl From<Rule> for FillRule {
    fn from(r: Rule) -> Self {
        match r {
            Rule::EvenOdd => FillRule::EvenOdd,
            Rule::NonZero => FillRule::NonZero,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let result = match cmd.action {
        Action::Check {
            input,
            ring,
            closing_threshold,
            out,
        } => {
            let cfg = SketchCfg {
                closing_threshold,
                ..SketchCfg::default()
            };
            commands::check(&input, ring, &cfg, out.as_deref())?
        }
        Action::Contains { input, rule, out } => {
            commands::contains(&input, rule.into(), out.as_deref())?
        }
        Action::Report => commands::report(),
    };
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
