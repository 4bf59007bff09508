use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

mod associations;
mod correlations;
mod descriptives;
mod encode;
mod group_tests;
mod proof;
mod report;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What to run
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Encode the raw form export into the clean survey CSV
    Encode(#[clap(flatten)] encode::EncodeArg),
    /// Descriptive summaries and distributions
    Descriptives(#[clap(flatten)] AnalyzeArg),
    /// Spearman rank correlation battery
    Correlations(#[clap(flatten)] AnalyzeArg),
    /// Kruskal-Wallis group tests with Mann-Whitney post-hoc
    GroupTests(#[clap(flatten)] AnalyzeArg),
    /// Fisher's exact / chi-square association tests
    Associations(#[clap(flatten)] AnalyzeArg),
    /// Three-part burden comparison (noise vs air vs community)
    Proof(#[clap(flatten)] AnalyzeArg),
    /// Run every analysis section in order
    Report(#[clap(flatten)] AnalyzeArg),
}

/// Common arguments for the analysis subcommands.
#[derive(Debug, Clone, Args)]
pub(crate) struct AnalyzeArg {
    /// Path to the clean survey CSV (produced by `encode`)
    pub clean: PathBuf,

    /// Directory to write per-analysis chart-input JSON files
    #[arg(long)]
    pub chart_data: Option<PathBuf>,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Encode(arg) => encode::run(&arg)?,
        Mode::Descriptives(arg) => descriptives::run(&arg)?,
        Mode::Correlations(arg) => correlations::run(&arg)?,
        Mode::GroupTests(arg) => group_tests::run(&arg)?,
        Mode::Associations(arg) => associations::run(&arg)?,
        Mode::Proof(arg) => proof::run(&arg)?,
        Mode::Report(arg) => report::run(&arg)?,
    }
    Ok(())
}
