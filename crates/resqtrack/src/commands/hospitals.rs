//! Hospital command handlers.

use std::io::{self, IsTerminal};

use dialoguer::MultiSelect;
use tabled::Tabled;

use resqtrack_core::fetch::normalize_city;
use resqtrack_core::{
    Client, Hospital, HospitalSearchResult, NewHospital, Notifier, Severity, location_from_address,
    mutate,
};

use crate::cli::{GlobalOpts, HospitalsArgs, HospitalsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct HospitalRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Coordinates")]
    coordinates: String,
}

impl From<&Hospital> for HospitalRow {
    fn from(h: &Hospital) -> Self {
        Self {
            name: h.name.clone(),
            address: h.address.clone(),
            phone: h
                .phone
                .clone()
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| "N/A".into()),
            location: h.location.clone(),
            coordinates: format!("{}, {}", h.api_lat, h.api_lon),
        }
    }
}

#[derive(Tabled)]
struct SearchRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Latitude")]
    lat: String,
    #[tabled(rename = "Longitude")]
    lon: String,
    #[tabled(rename = "Location")]
    location: String,
}

impl From<&HospitalSearchResult> for SearchRow {
    fn from(r: &HospitalSearchResult) -> Self {
        Self {
            name: r.name.clone(),
            address: r.address.clone(),
            lat: r.lat.clone(),
            lon: r.lon.clone(),
            location: location_from_address(&r.address).to_owned(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &Client,
    args: HospitalsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        HospitalsCommand::List => {
            let hospitals = client.list_hospitals().await?;
            let out = output::render_list(
                global.output(),
                &hospitals,
                "No hospitals found.",
                |h| HospitalRow::from(h),
                |h| h.name.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        HospitalsCommand::Add {
            name,
            address,
            location,
            phone,
            lat,
            lon,
        } => {
            let hospital = NewHospital {
                name,
                address,
                phone: util::non_blank(phone),
                location,
                api_lat: util::non_blank(lat),
                api_lon: util::non_blank(lon),
            };
            let message = client.add_hospital(&hospital).await?;
            mutate::confirm(&util::notifier(global), &message, mutate::HOSPITAL_ADDED);
            Ok(())
        }

        HospitalsCommand::Search { city } => {
            let results = search(client, &city).await?;
            let out = output::render_list(
                global.output(),
                &results,
                "No hospitals found.",
                |r| SearchRow::from(r),
                |r| r.name.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        HospitalsCommand::Import { city, all } => {
            let results = search(client, &city).await?;
            let notifier = util::notifier(global);
            if results.is_empty() {
                notifier.notify("No hospitals found.", Severity::Error);
                return Ok(());
            }

            let chosen = choose(&results, all || global.yes)?;
            let mut failed = 0_usize;
            for result in chosen {
                if !mutate::add_hospital_from_search(client, &notifier, result).await {
                    failed += 1;
                }
            }
            if failed > 0 {
                return Err(CliError::Rejected {
                    message: format!("{failed} hospital(s) could not be added"),
                });
            }
            Ok(())
        }
    }
}

/// Search with a trimmed city; a blank city is a usage error.
async fn search(client: &Client, city: &str) -> Result<Vec<HospitalSearchResult>, CliError> {
    let city = normalize_city(city).ok_or_else(|| CliError::Validation {
        field: "city".into(),
        reason: resqtrack_core::EMPTY_CITY_MESSAGE.into(),
    })?;
    Ok(client.search_hospitals(city).await?)
}

/// Pick which results to import: everything, or an interactive selection.
fn choose(
    results: &[HospitalSearchResult],
    all: bool,
) -> Result<Vec<&HospitalSearchResult>, CliError> {
    if all {
        return Ok(results.iter().collect());
    }
    if !io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: "hospitals import".into(),
        });
    }
    let labels: Vec<String> = results
        .iter()
        .map(|r| format!("{} ({})", r.name, location_from_address(&r.address)))
        .collect();
    let picked = MultiSelect::new()
        .with_prompt("Hospitals to add (space to select, enter to confirm)")
        .items(&labels)
        .interact()
        .map_err(util::prompt_err)?;
    Ok(picked.into_iter().filter_map(|i| results.get(i)).collect())
}
