//! Full report command: every analysis section in its fixed order.

use crate::{
    command::{AnalyzeArg, associations, correlations, descriptives, group_tests, proof},
    io,
};

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let table = io::read_clean_table(&arg.clean)?;

    descriptives::render(&table, arg)?;
    println!();
    correlations::render(&table, arg)?;
    println!();
    group_tests::render(&table, arg)?;
    println!();
    associations::render(&table, arg)?;
    println!();
    proof::render(&table, arg)?;

    Ok(())
}
