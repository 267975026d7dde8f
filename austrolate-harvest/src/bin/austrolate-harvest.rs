use austrolate_harvest::{
    DEFAULT_MAX_PAGES, DEFAULT_START_URL, DEFAULT_TABLE_ID, Harvester, HttpPageSource,
    TableParser, write_dictionary,
};
use clap::{Arg, ArgAction, Command, value_parser};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("austrolate-harvest")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Harvest Standard German / Viennese phrase pairs into a dictionary file")
        .arg(
            Arg::new("url")
                .long("url")
                .short('u')
                .help("First page of the phrase table")
                .default_value(DEFAULT_START_URL),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Dictionary JSON to write")
                .default_value("data/dictionary.json")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("max-pages")
                .long("max-pages")
                .help("Stop after this many pages (default: 200)")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("table-id")
                .long("table-id")
                .help("HTML id of the phrase table")
                .default_value(DEFAULT_TABLE_ID),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log every fetched page")
                .action(ArgAction::SetTrue),
        )
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = cli().get_matches();

    let default_level = if matches.get_flag("verbose") { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let start_url = matches.get_one::<String>("url").expect("url has a default");
    let output = matches
        .get_one::<PathBuf>("output")
        .expect("output has a default")
        .clone();
    let max_pages = matches
        .get_one::<usize>("max-pages")
        .copied()
        .unwrap_or(DEFAULT_MAX_PAGES);
    let table_id = matches
        .get_one::<String>("table-id")
        .expect("table-id has a default");

    let harvester = Harvester::new(HttpPageSource::new()?, TableParser::new(table_id)?)
        .with_max_pages(max_pages);

    let harvest = match harvester.harvest(start_url).await {
        Ok(harvest) => harvest,
        Err(e) => {
            error!("Harvest failed: {}", e);
            return Err(e.into());
        }
    };

    if harvest.pairs.is_empty() {
        error!("No phrase pairs found, leaving {} untouched", output.display());
        return Err("empty harvest".into());
    }

    write_dictionary(&output, &harvest.to_json(start_url))?;
    info!(
        "Wrote {} phrase pairs to {}",
        harvest.pairs.len(),
        output.display()
    );

    Ok(())
}
