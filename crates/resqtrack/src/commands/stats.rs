//! Dashboard counters.

use resqtrack_core::view::format;
use resqtrack_core::{Client, Stats};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

fn detail(stats: &Stats) -> String {
    format!(
        "Total cases:      {}\n\
         Total donations:  {}\n\
         Total hospitals:  {}\n\
         Amount raised:    {}",
        stats.total_cases,
        stats.total_donations,
        stats.total_hospitals,
        format::total_amount(&stats.total_amount),
    )
}

pub async fn handle(client: &Client, global: &GlobalOpts) -> Result<(), CliError> {
    let stats = client.stats().await?;
    let out = output::render_single(global.output(), &stats, detail, |s| {
        format!(
            "{}\n{}\n{}\n{}",
            s.total_cases,
            s.total_donations,
            s.total_hospitals,
            format::total_amount(&s.total_amount)
        )
    });
    output::print_output(&out, global.quiet);
    Ok(())
}
