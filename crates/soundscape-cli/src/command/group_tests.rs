//! Kruskal-Wallis group tests command.

use soundscape_analysis::{
    chart,
    group_diff::{self, GroupDifferenceResult, OmnibusOutcome},
};
use soundscape_model::record::CleanTable;

use crate::{command::AnalyzeArg, io, report};

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let table = io::read_clean_table(&arg.clean)?;
    render(&table, arg)
}

pub(crate) fn render(table: &CleanTable, arg: &AnalyzeArg) -> anyhow::Result<()> {
    let results = group_diff::run_battery(table);

    report::heading("KRUSKAL-WALLIS TESTS");
    for result in &results {
        println!("\n{}", result.spec.title);
        print_group_sizes(result);
        match result.omnibus {
            OmnibusOutcome::Computed { h, df, p_value, interpretation } => {
                println!("   H = {h:.3},  df = {df},  p = {p_value:.4}  ->  {interpretation}");
            }
            OmnibusOutcome::InsufficientData => {
                println!(
                    "   insufficient data: needs at least 2 non-empty groups with outcome variation",
                );
            }
        }
        print_post_hoc(result);
    }

    if let Some(dir) = &arg.chart_data {
        for result in &results {
            let chart_data = chart::group_chart(result);
            io::write_chart_data(dir, chart_data.key, &chart_data)?;
        }
        println!("\nChart data written to {}", dir.display());
    }

    Ok(())
}

fn print_group_sizes(result: &GroupDifferenceResult) {
    let sizes = result
        .groups
        .iter()
        .map(|g| format!("{} (n={})", g.label, g.values.len()))
        .collect::<Vec<_>>()
        .join(", ");
    println!("   groups: {sizes}");
}

fn print_post_hoc(result: &GroupDifferenceResult) {
    if result.pairwise.is_empty() {
        return;
    }
    println!("\n   -- Mann-Whitney U Pairwise Post-hoc ({}) --", result.spec.title);
    println!("      (uncorrected p-values)");
    for comparison in &result.pairwise {
        println!(
            "      {:<2}  U={:<6.1} p={:.3}  ({} vs {})",
            report::significance_marker(comparison.significant),
            comparison.u,
            comparison.p_value,
            comparison.group_a,
            comparison.group_b,
        );
    }
}
