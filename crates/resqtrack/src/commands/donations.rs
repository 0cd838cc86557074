//! Donation command handlers.

use tabled::Tabled;

use resqtrack_core::{Client, Donation};

use crate::cli::{DonationsArgs, DonationsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct DonationRow {
    #[tabled(rename = "Donor Name")]
    donor: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Date")]
    date: String,
}

impl From<&Donation> for DonationRow {
    fn from(d: &Donation) -> Self {
        Self {
            donor: d.donor_name.clone(),
            email: d.donor_email.clone(),
            amount: format!("₹{}", d.amount),
            category: d.category.clone(),
            date: d.created_at.clone(),
        }
    }
}

pub async fn handle(
    client: &Client,
    args: DonationsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        DonationsCommand::List => {
            let donations = client.list_donations().await?;
            let out = output::render_list(
                global.output(),
                &donations,
                "No donations found.",
                |d| DonationRow::from(d),
                |d| d.donor_email.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
