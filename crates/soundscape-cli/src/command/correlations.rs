//! Spearman correlation battery command.

use soundscape_analysis::{
    chart,
    correlation::{self, CorrelationOutcome, CorrelationResult},
};
use soundscape_model::record::CleanTable;

use crate::{command::AnalyzeArg, io, report};

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let table = io::read_clean_table(&arg.clean)?;
    render(&table, arg)
}

pub(crate) fn render(table: &CleanTable, arg: &AnalyzeArg) -> anyhow::Result<()> {
    let results = correlation::run_battery(table);

    report::heading("SPEARMAN'S RANK CORRELATION RESULTS");
    println!("{:<52} {:>7} {:>8}  Interpretation", "Pair", "rho", "p");
    report::rule(100);
    for result in &results {
        match result.outcome {
            CorrelationOutcome::Computed { rho, p_value, interpretation } => {
                println!(
                    "{:<52} {:>+7.3} {:>8.4}  {}",
                    result.spec.title, rho, p_value, interpretation,
                );
            }
            CorrelationOutcome::InsufficientData => {
                println!(
                    "{:<52} {:>7} {:>8}  insufficient data (n={})",
                    result.spec.title, "-", "-", result.effective_n,
                );
            }
        }
    }
    report::rule(100);
    println!("\nNote: subgroups may be smaller after missing-value exclusion.");

    println!();
    report::heading("DETAILED FINDINGS");
    for result in &results {
        println!("\n[{}]", result.spec.title);
        match result.outcome {
            CorrelationOutcome::Computed { rho, p_value, interpretation } => {
                println!("  rho = {rho:+.3}, p = {p_value:.4}, n = {}", result.effective_n);
                println!("  -> {interpretation}");
                if interpretation.significant {
                    println!("  -> This pair supports a statistically significant association.");
                } else {
                    println!(
                        "  -> Result is indicative only; do NOT over-claim given n={}.",
                        result.effective_n,
                    );
                }
            }
            CorrelationOutcome::InsufficientData => {
                println!(
                    "  insufficient data: only {} usable pair(s), coefficient undefined",
                    result.effective_n,
                );
            }
        }
    }

    print_magnitude_ranking(&results);

    if let Some(dir) = &arg.chart_data {
        for result in &results {
            let chart_data = chart::correlation_chart(result);
            io::write_chart_data(dir, chart_data.key, &chart_data)?;
        }
        let ranking = chart::magnitude_ranking_chart(&results);
        io::write_chart_data(dir, ranking.key, &ranking)?;
        println!("\nChart data written to {}", dir.display());
    }

    Ok(())
}

fn print_magnitude_ranking(results: &[CorrelationResult]) {
    println!();
    report::heading("CORRELATION MAGNITUDE RANKING");
    for result in correlation::rank_by_magnitude(results) {
        let CorrelationOutcome::Computed { rho, p_value, interpretation } = result.outcome else {
            continue;
        };
        let marker = report::significance_marker(interpretation.significant);
        println!("  |rho|={:.3}  {}  p={:.3}  {}", rho.abs(), marker, p_value, result.spec.title);
    }
}
