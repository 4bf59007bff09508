//! Descriptive summary command.

use soundscape_analysis::{chart, descriptive};
use soundscape_model::record::CleanTable;

use crate::{command::AnalyzeArg, io, report};

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let table = io::read_clean_table(&arg.clean)?;
    render(&table, arg)
}

pub(crate) fn render(table: &CleanTable, arg: &AnalyzeArg) -> anyhow::Result<()> {
    let summary = descriptive::build(table);

    report::heading("DESCRIPTIVE SUMMARY");
    println!("\nTotal respondents : {}", summary.total_respondents);
    println!("Sites             : {}", summary.site_count);

    for field_summary in &summary.summaries {
        println!("\n-- {} --", field_summary.field.label());
        match &field_summary.stats {
            Some(stats) => {
                println!("  count  {:>7}", stats.count);
                println!("  mean   {:>7.2}", stats.mean);
                println!("  std    {:>7.2}", stats.std_dev);
                println!("  min    {:>7.2}", stats.min);
                println!("  25%    {:>7.2}", stats.q1);
                println!("  50%    {:>7.2}", stats.median);
                println!("  75%    {:>7.2}", stats.q3);
                println!("  max    {:>7.2}", stats.max);
            }
            None => println!("  no data (all values missing)"),
        }
    }

    println!("\n-- Site x Q4 Noise Mean --");
    for site_mean in &summary.site_noise_means {
        println!(
            "  {:<22} {:>6}  (n={})",
            site_mean.site,
            report::fmt_opt_mean(site_mean.mean),
            site_mean.n,
        );
    }

    for distribution in &summary.distributions {
        println!("\n-- {} --", distribution.field.title());
        for &(label, count) in &distribution.counts {
            println!("  {label:<28} {count:>3}");
        }
    }

    println!("\n-- Main Noise Sources (Q5, multi-select) --");
    for &(label, count) in &summary.noise_sources {
        println!("  {label:<40} {count:>3}");
    }

    println!("\n-- Noise Spike (Q6) --");
    println!("  {:<40} {:>3}", "Yes - noise spikes at specific times", summary.spike.yes);
    println!("  {:<40} {:>3}", "No - constant / baseline", summary.spike.no);

    if let Some(dir) = &arg.chart_data {
        for chart_data in chart::distribution_charts(&summary) {
            io::write_chart_data(dir, chart_data.key, &chart_data)?;
        }
        println!("\nChart data written to {}", dir.display());
    }

    Ok(())
}
