//! Command implementations for the HAQ CLI.
//!
//! Each subcommand loads the same files the dashboard fetches and prints
//! what the dashboard would show, so data problems (unparseable values,
//! country names that never match a boundary) surface before deployment.

use clap::Subcommand;
use haq_core::geo::parse_features;
use log::info;

pub mod report;
pub mod source;

#[derive(Subcommand)]
pub enum Command {
    /// List the distinct years in the dataset, as the year selector shows them
    Years {
        /// Path to the dataset CSV (optionally .gz)
        #[arg(short = 'd', long)]
        dataset: String,
    },

    /// Print the HAQ Index lookup the map is colored from, as CSV
    Lookup {
        /// Path to the dataset CSV (optionally .gz)
        #[arg(short = 'd', long)]
        dataset: String,

        /// Year to look up (exact match against year_id)
        #[arg(short = 'y', long)]
        year: String,
    },

    /// Print the drill-down a click on a country produces
    Country {
        /// Path to the dataset CSV (optionally .gz)
        #[arg(short = 'd', long)]
        dataset: String,

        /// Country name as it appears in the boundary file
        #[arg(short = 'n', long)]
        name: String,

        /// Print the drill-down as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List boundary features drawn in the neutral color for a year
    Unmatched {
        /// Path to the dataset CSV (optionally .gz)
        #[arg(short = 'd', long)]
        dataset: String,

        /// Path to the world GeoJSON (optionally .gz)
        #[arg(short = 'g', long)]
        geojson: String,

        /// Year to check; defaults to the earliest year, as on first load
        #[arg(short = 'y', long)]
        year: Option<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Years { dataset } => {
            let db = source::load_database(&dataset).await?;
            print!("{}", report::format_years(&db.query_year_index()?));
            Ok(())
        }
        Command::Lookup { dataset, year } => {
            let db = source::load_database(&dataset).await?;
            let lookup = db.query_haq_lookup(&year)?;
            print!("{}", report::format_lookup(&lookup)?);
            Ok(())
        }
        Command::Country {
            dataset,
            name,
            json,
        } => {
            let db = source::load_database(&dataset).await?;
            let drill = db.query_drill_down(&name)?;
            if json {
                println!("{}", report::drill_down_json(&drill)?);
            } else {
                print!("{}", report::format_drill_down(&drill));
            }
            Ok(())
        }
        Command::Unmatched {
            dataset,
            geojson,
            year,
        } => {
            let (csv_data, geojson) = source::read_pair(&dataset, &geojson).await?;
            let db = source::database_from_csv(&csv_data)?;
            let features = parse_features(&geojson)?;
            info!("Parsed {} boundary features", features.len());

            let year = match year {
                Some(year) => year,
                None => db
                    .query_year_index()?
                    .into_iter()
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("dataset has no years"))?,
            };
            let lookup = db.query_haq_lookup(&year)?;
            let locations = db.query_location_names()?;
            let unmatched = report::unmatched_features(&features, &lookup);
            let unlisted = report::unlisted_locations(&locations, &features);
            print!("{}", report::format_unmatched(&year, &unmatched, &unlisted));
            Ok(())
        }
    }
}
