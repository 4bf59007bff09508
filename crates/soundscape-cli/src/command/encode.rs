//! Encode command: raw form export → clean survey CSV.

use std::path::PathBuf;

use clap::Args;
use soundscape_model::{encoding::EncodingTables, record::Encoder, schema::RawColumns};

use crate::{io, report};

#[derive(Debug, Clone, Args)]
pub(crate) struct EncodeArg {
    /// Path to the raw Google-Form export CSV
    pub raw: PathBuf,

    /// Output path for the clean CSV
    #[arg(long, default_value = "survey_clean.csv")]
    pub output: PathBuf,
}

pub(crate) fn run(arg: &EncodeArg) -> anyhow::Result<()> {
    let columns = RawColumns::default();
    let raw_records = io::read_raw_records(&arg.raw, &columns)?;

    let encoder = Encoder::new(EncodingTables::default());
    let table = encoder.encode_all(&raw_records);
    io::write_clean_table(&arg.output, &table)?;

    println!("Written {} rows -> {}", table.len(), arg.output.display());

    println!("\nSanity check - encoded values:");
    println!("{:>3}  {:<22} {:>4} {:>4} {:>4} {:>4}", "ID", "Site", "Q4", "Q7", "Q8", "Q11");
    report::rule(45);
    for record in &table {
        println!(
            "{:>3}  {:<22} {:>4} {:>4} {:>4} {:>4}",
            record.respondent_id,
            record.site,
            report::fmt_opt_u32(record.noise_rating),
            report::fmt_opt_u32(record.concentration),
            report::fmt_opt_u32(record.air_quality),
            report::fmt_opt_u32(record.quality_of_life),
        );
    }

    Ok(())
}
