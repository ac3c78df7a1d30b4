use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use gridpulse_core::{load_app_config, Category, Query};
use gridpulse_emaps::zone_code;
use gridpulse_entsoe::area_code;
use gridpulse_stats::worldbank::INDICATOR_ELECTRICITY_ACCESS;

mod chains;
mod countries;

use countries::iso3_code;

#[derive(Debug, Parser)]
#[command(name = "gridpulse")]
#[command(about = "Electricity-sector data aggregation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Day-ahead generation forecast for a European country.
    Generation {
        country: String,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
    },
    /// Day-ahead load forecast for a European country.
    Load {
        country: String,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
    },
    /// Physical cross-border flows between two European countries.
    Flows {
        from: String,
        to: String,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
    },
    /// Carbon intensity for a country: latest reading, or history with --history.
    Carbon {
        country: String,
        #[arg(long)]
        history: bool,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
    },
    /// Current electricity production mix for a country.
    Mix { country: String },
    /// World Bank indicator series for a country.
    Indicator {
        country: String,
        /// World Bank indicator code.
        #[arg(long, default_value = INDICATOR_ELECTRICITY_ACCESS)]
        code: String,
    },
    /// Renewable generation observations for a country and year.
    Renewables {
        country: String,
        #[arg(long, default_value_t = 2023)]
        year: i32,
    },
    /// Electricity import/export records for a country and year.
    Trade {
        country: String,
        #[arg(long, default_value_t = 2023)]
        year: i32,
        #[arg(long)]
        partner: Option<String>,
    },
    /// Latest energy-sector news articles.
    News,
    /// Energy commodity prices.
    Prices,
    /// Cross-border interconnection catalog, optionally by region.
    Interconnections {
        #[arg(long)]
        region: Option<String>,
    },
    /// Report which provider credentials are configured.
    Tokens,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_app_config().context("failed to load configuration")?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generation { country, start, end } => {
            let area = resolve_area(&country)?;
            let query = with_period(
                Query::new(Category::GenerationForecast).with_param("area", area),
                start,
                end,
            );
            print_json(&chains::generation_chain(&config).resolve(&query).await)
        }
        Commands::Load { country, start, end } => {
            let area = resolve_area(&country)?;
            let query = with_period(
                Query::new(Category::LoadForecast).with_param("area", area),
                start,
                end,
            );
            print_json(&chains::load_chain(&config).resolve(&query).await)
        }
        Commands::Flows { from, to, start, end } => {
            let from_area = resolve_area(&from)?;
            let to_area = resolve_area(&to)?;
            let query = with_period(
                Query::new(Category::CrossBorderFlows)
                    .with_param("from_area", from_area)
                    .with_param("to_area", to_area),
                start,
                end,
            );
            print_json(&chains::flows_chain(&config).resolve(&query).await)
        }
        Commands::Carbon {
            country,
            history,
            start,
            end,
        } => {
            let zone = resolve_zone(&country)?;
            let query = with_period(
                Query::new(Category::CarbonIntensity).with_param("zone", zone),
                start,
                end,
            );
            if history {
                print_json(&chains::carbon_history_chain(&config).resolve(&query).await)
            } else {
                print_json(&chains::carbon_latest_chain(&config).resolve(&query).await)
            }
        }
        Commands::Mix { country } => {
            let zone = resolve_zone(&country)?;
            let query = Query::new(Category::ElectricityMix).with_param("zone", zone);
            print_json(&chains::mix_chain(&config).resolve(&query).await)
        }
        Commands::Indicator { country, code } => {
            let iso3 = iso3_code(&country)
                .ok_or_else(|| anyhow::anyhow!("no ISO-3 code configured for '{country}'"))?;
            let query = Query::new(Category::Indicator)
                .with_param("country", iso3)
                .with_param("indicator", code);
            print_json(&chains::indicator_chain(&config).resolve(&query).await)
        }
        Commands::Renewables { country, year } => {
            let query = Query::new(Category::Indicator)
                .with_param("country", country)
                .with_param("year", year.to_string());
            print_json(&chains::renewables_chain(&config).resolve(&query).await)
        }
        Commands::Trade {
            country,
            year,
            partner,
        } => {
            let mut query = Query::new(Category::ElectricityTrade)
                .with_param("country", country)
                .with_param("year", year.to_string());
            if let Some(partner) = partner {
                query = query.with_param("partner", partner);
            }
            print_json(&chains::trade_chain(&config).resolve(&query).await)
        }
        Commands::News => {
            let query = Query::new(Category::News);
            print_json(&chains::news_chain(&config).resolve(&query).await)
        }
        Commands::Prices => {
            let query = Query::new(Category::CommodityPrices);
            print_json(&chains::prices_chain(&config).resolve(&query).await)
        }
        Commands::Interconnections { region } => {
            let mut query = Query::new(Category::Interconnections);
            if let Some(region) = region {
                query = query.with_param("region", region);
            }
            print_json(&chains::interconnections_chain().resolve(&query).await)
        }
        Commands::Tokens => {
            for (provider, configured) in config.credential_status() {
                let state = if configured { "configured" } else { "missing" };
                println!("{provider}: {state}");
            }
            Ok(())
        }
    }
}

fn resolve_area(country: &str) -> anyhow::Result<&'static str> {
    area_code(country)
        .ok_or_else(|| anyhow::anyhow!("no ENTSO-E area code configured for '{country}'"))
}

fn resolve_zone(country: &str) -> anyhow::Result<&'static str> {
    zone_code(country)
        .ok_or_else(|| anyhow::anyhow!("no Electricity Maps zone configured for '{country}'"))
}

fn with_period(mut query: Query, start: Option<String>, end: Option<String>) -> Query {
    if let Some(start) = start {
        query = query.with_param("start", start);
    }
    if let Some(end) = end {
        query = query.with_param("end", end);
    }
    query
}

fn print_json<T: Serialize>(records: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(records)?);
    Ok(())
}
