//! Association (contingency) tests command.

use soundscape_analysis::{
    association::{self, AssociationOutcome},
    chart,
};
use soundscape_model::record::CleanTable;
use soundscape_stats::contingency::ContingencyTable;

use crate::{command::AnalyzeArg, io, report};

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let table = io::read_clean_table(&arg.clean)?;
    render(&table, arg)
}

pub(crate) fn render(table: &CleanTable, arg: &AnalyzeArg) -> anyhow::Result<()> {
    let results = association::run_battery(table);

    report::heading("FISHER'S EXACT / CHI-SQUARE TESTS (categorical x categorical)");
    println!("Note: tables larger than 2x2 fall back to chi-square, an approximation");
    println!("that is unreliable with small expected cell counts.");

    for result in &results {
        println!("\n{}", result.spec.title);
        print_crosstab(&result.table);
        match result.outcome {
            AssociationOutcome::Fisher { odds_ratio, p_value } => {
                println!("   Fisher's Exact  p = {p_value:.4},  Odds Ratio = {odds_ratio:.3}");
            }
            AssociationOutcome::ChiSquare { statistic, df, p_value, low_expected } => {
                println!(
                    "   [{}x{} table]  Chi-square = {statistic:.3},  df = {df},  p = {p_value:.4}",
                    result.table.n_rows(),
                    result.table.n_cols(),
                );
                println!("   Table > 2x2: chi-square approximation used; interpret with caution.");
                if low_expected {
                    println!("   Expected cell counts < 5: approximation unreliable at this n.");
                }
            }
            AssociationOutcome::InsufficientData => {
                println!("   insufficient data: observed categories collapse below a 2x2 table");
                continue;
            }
        }
        let verdict = if result.outcome.significant() {
            "SIGNIFICANT"
        } else {
            "not significant"
        };
        println!("   -> {verdict}  (n={})", result.effective_n);
    }

    if let Some(dir) = &arg.chart_data {
        for result in &results {
            let chart_data = chart::association_chart(result);
            io::write_chart_data(dir, chart_data.key, &chart_data)?;
        }
        println!("\nChart data written to {}", dir.display());
    }

    Ok(())
}

fn print_crosstab(table: &ContingencyTable) {
    print!("   {:<16}", "");
    for col in table.col_labels() {
        print!(" {col:>14}");
    }
    println!();
    for (r, row_label) in table.row_labels().iter().enumerate() {
        print!("   {row_label:<16}");
        for c in 0..table.n_cols() {
            print!(" {:>14}", table.count(r, c));
        }
        println!();
    }
}
