//! Burden proof command: the three-part noise-dominance argument.

use soundscape_analysis::{burden, chart, correlation};
use soundscape_model::record::CleanTable;

use crate::{command::AnalyzeArg, io, report};

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let table = io::read_clean_table(&arg.clean)?;
    render(&table, arg)
}

#[expect(clippy::cast_precision_loss)]
pub(crate) fn render(table: &CleanTable, arg: &AnalyzeArg) -> anyhow::Result<()> {
    report::heading("PROOF 1 - RAW BURDEN LEVELS (0-10 scale, higher = worse)");
    let summaries = burden::summaries(table);
    for summary in &summaries {
        let pct_high = if summary.n == 0 {
            0.0
        } else {
            100.0 * summary.high_count as f64 / summary.n as f64
        };
        println!(
            "  {:<34} mean={}/10   {:.0}% rated >={:.0}",
            summary.factor.title(),
            report::fmt_opt_mean(summary.mean),
            pct_high,
            burden::HIGH_BURDEN_THRESHOLD,
        );
    }

    println!();
    report::heading("PROOF 2 - SPEARMAN CORRELATION WITH QoL DAMAGE");
    println!("  (QoL coded 1=Improves ... 4=Reduces - higher rho = more damage)");
    let correlations = burden::qol_correlations(table);
    for ranked in burden::rank_correlations(&correlations) {
        match (ranked.rho, ranked.p_value) {
            (Some(rho), Some(p_value)) => {
                println!(
                    "  {:<34} rho={rho:+.3}  p={p_value:.3} ({})",
                    ranked.factor.title(),
                    report::significance_marker(ranked.significant()),
                );
            }
            _ => {
                println!(
                    "  {:<34} insufficient data (n={})",
                    ranked.factor.title(),
                    ranked.effective_n,
                );
            }
        }
    }

    // mechanism check reuses the battery's first pair (noise vs concentration)
    let mechanism = correlation::run(table, correlation::CORRELATION_BATTERY[0]);
    match mechanism.outcome {
        correlation::CorrelationOutcome::Computed { rho, p_value, .. } => {
            println!(
                "\n  Mechanism check (Q4 <-> Q7 Rest/Concentration):  rho={rho:+.3}  p={p_value:.3}",
            );
        }
        correlation::CorrelationOutcome::InsufficientData => {
            println!("\n  Mechanism check (Q4 <-> Q7): insufficient data");
        }
    }

    println!();
    report::heading("PROOF 3 - MECHANISM: HIGH NOISE -> POOR REST / CONCENTRATION");
    let severe = burden::severe_rest_respondents(table);
    if severe.is_empty() {
        println!("  No respondents report high rest impact (Q7 >= 5).");
    } else {
        println!("  Respondents with HIGH rest impact (Q7 >= 5: Highly / Severely):");
        println!("  {:>3}  {:<22} {:>8}  {:<30} {}", "ID", "Site", "Q4 Noise", "Q7 Impact", "Q11 QoL");
        for row in &severe {
            println!(
                "  {:>3}  {:<22} {:>8}  {:<30} {}",
                row.respondent_id,
                row.site,
                report::fmt_opt_u32(row.noise_rating),
                row.concentration_raw,
                row.quality_of_life_raw,
            );
        }
    }

    print_summary(table, &summaries, &correlations, &mechanism);

    if let Some(dir) = &arg.chart_data {
        let comparison = chart::burden_comparison_chart(table);
        io::write_chart_data(dir, comparison.key, &comparison)?;
        let ranking = chart::burden_ranking_chart(&correlations);
        io::write_chart_data(dir, ranking.key, &ranking)?;
        let mechanism_chart = chart::correlation_chart(&mechanism);
        io::write_chart_data(dir, "proof_3_noise_to_rest_mechanism", &mechanism_chart)?;
        println!("\nChart data written to {}", dir.display());
    }

    Ok(())
}

fn print_summary(
    table: &CleanTable,
    summaries: &[burden::BurdenSummary],
    correlations: &[burden::BurdenCorrelation],
    mechanism: &correlation::CorrelationResult,
) {
    println!();
    report::heading("SUMMARY - WHAT THE DATA SHOWS");

    let mean_of = |factor: burden::BurdenFactor| {
        summaries
            .iter()
            .find(|s| s.factor == factor)
            .and_then(|s| s.mean)
    };
    let noise_mean = report::fmt_opt_mean(mean_of(burden::BurdenFactor::Noise));
    let air_mean = report::fmt_opt_mean(mean_of(burden::BurdenFactor::PoorAir));
    let community_mean = report::fmt_opt_mean(mean_of(burden::BurdenFactor::LackOfCommunity));
    let noise_high = summaries
        .iter()
        .find(|s| s.factor == burden::BurdenFactor::Noise)
        .map_or(0, |s| s.high_count);

    println!(
        "\n1. EXPOSURE - Noise burden ({noise_mean}/10) vs poor air ({air_mean}/10) vs lack of \
         community ({community_mean}/10)."
    );
    println!(
        "   {noise_high}/{} respondents rated noise >={:.0}/10.",
        table.len(),
        burden::HIGH_BURDEN_THRESHOLD,
    );

    let strongest = burden::rank_correlations(correlations)
        .into_iter()
        .find(|c| c.rho.is_some());
    match strongest {
        Some(c) => println!(
            "\n2. CORRELATION - {} has the strongest rho with QoL damage ({:+.3}).",
            c.factor.title(),
            c.rho.unwrap_or_default(),
        ),
        None => println!("\n2. CORRELATION - no burden correlation could be computed."),
    }

    if let correlation::CorrelationOutcome::Computed { rho, p_value, .. } = mechanism.outcome {
        println!(
            "\n3. MECHANISM - Noise -> rest quality (Q4 <-> Q7): rho={rho:+.3}, p={p_value:.3}.",
        );
    }

    println!(
        "\nLIMITATION: n={} (small per-site subgroups). All results are perceptual and",
        table.len(),
    );
    println!("indicative. No causation can be claimed from correlational data.");
}
