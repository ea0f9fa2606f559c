//! Developer utility to inspect a launch dataset and explain the derived views.

use std::path::PathBuf;

use launchboard::config;
use launchboard::dashboard::DashboardContext;
use launchboard::logging;
use launchboard::view::{PayloadRange, SiteFilter};

fn main() {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let Some(options) = parse_args(std::env::args().skip(1).collect())? else {
        return Ok(());
    };
    let data_path = match options.data_path {
        Some(path) => path,
        None => config::load_or_default()
            .map_err(|err| err.to_string())?
            .dataset_path,
    };

    println!("Dataset: {}", data_path.display());
    if let Ok(meta) = std::fs::metadata(&data_path) {
        println!("Size: {} bytes", meta.len());
    }

    let context = DashboardContext::load(&data_path).map_err(|err| err.to_string())?;
    let bounds = context.payload_bounds();
    println!("Records: {}", context.records().len());
    println!("Payload range: {:.0}-{:.0} kg", bounds.min_kg, bounds.max_kg);

    println!();
    println!("Launch sites:");
    for site in context.site_options() {
        println!("- {site}");
    }

    println!();
    println!("Successful launches by site:");
    for (site, count) in context.success_summary() {
        println!("- {site}: {count}");
    }

    println!();
    println!("Outcome counts by site:");
    for (site, outcomes) in context.outcome_matrix() {
        for (outcome, count) in outcomes {
            println!("- {site} / {outcome}: {count}");
        }
    }

    println!();
    println!("Pie data (all sites), as served to the renderer:");
    let slices = context.pie_view(&SiteFilter::All).unwrap_or_default();
    let json = serde_json::to_string_pretty(&slices).map_err(|err| err.to_string())?;
    println!("{json}");

    let full_range = PayloadRange::new(bounds.min_kg, bounds.max_kg);
    let points = context.scatter_view(&SiteFilter::All, full_range);
    println!();
    println!("Scatter points within the full payload range: {}", points.len());

    Ok(())
}

#[derive(Debug, Clone)]
struct CliOptions {
    data_path: Option<PathBuf>,
}

fn parse_args(args: Vec<String>) -> Result<Option<CliOptions>, String> {
    let mut data_path: Option<PathBuf> = None;
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                return Ok(None);
            }
            "--data" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--data requires a value".to_string())?;
                data_path = Some(PathBuf::from(value));
            }
            unknown => return Err(format!("Unknown argument: {unknown}\n\n{}", help_text())),
        }
        idx += 1;
    }
    Ok(Some(CliOptions { data_path }))
}

fn help_text() -> String {
    [
        "launchboard-inspect",
        "",
        "Usage:",
        "  launchboard-inspect [--data <path-to-launches.csv>]",
        "",
        "Without --data, the dataset path comes from the settings file.",
    ]
    .join("\n")
}
