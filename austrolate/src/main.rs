use austrolate::{Dictionaries, Direction, TranslatorConfig, load_dictionaries};
use clap::{Arg, ArgAction, Command, value_parser};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("austrolate")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate between Standard German and Viennese")
        .arg(
            Arg::new("text")
                .help("Text to translate (read from stdin when omitted)")
                .index(1),
        )
        .arg(
            Arg::new("direction")
                .long("direction")
                .short('d')
                .help("to-viennese (wien) or to-standard (de)")
                .default_value("to-viennese"),
        )
        .arg(
            Arg::new("dictionary")
                .long("dictionary")
                .short('f')
                .help("Dictionary JSON file (Standard German -> Viennese)")
                .env("AUSTROLATE_DICTIONARY")
                .default_value("data/dictionary.json")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("max-phrase-length")
                .long("max-phrase-length")
                .short('n')
                .help("Longest phrase in tokens (default: longest dictionary key)")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .short('l')
                .help("Print the dictionary for the chosen direction and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log matched phrases")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = cli().get_matches();

    let verbose = matches.get_flag("verbose");
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let direction: Direction = matches
        .get_one::<String>("direction")
        .expect("direction has a default")
        .parse()?;

    let dictionary_path = matches
        .get_one::<PathBuf>("dictionary")
        .expect("dictionary has a default")
        .clone();

    let dictionaries = match load_dictionaries(&dictionary_path) {
        Ok(dictionaries) => dictionaries,
        Err(e) => {
            eprintln!("Could not load dictionary: {}", e);
            eprintln!("Continuing with an empty dictionary; text will not be translated.");
            Dictionaries::empty()
        }
    };
    let dictionary = dictionaries.get(direction);

    if matches.get_flag("list") {
        for (phrase, translation) in dictionary.iter() {
            println!("{}\t{}", phrase, translation);
        }
        return Ok(());
    }

    let text = match matches.get_one::<String>("text") {
        Some(text) => text.clone(),
        None => {
            if io::stdin().is_terminal() {
                eprintln!("Reading text from stdin (Ctrl-D to finish)...");
            }
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let config = match matches.get_one::<usize>("max-phrase-length") {
        Some(&n) => TranslatorConfig::default().with_max_phrase_length(n),
        None => TranslatorConfig::fitted(dictionary),
    };
    debug!(
        "Translating {} ({} phrases, max phrase length {})",
        direction,
        dictionary.len(),
        config.max_phrase_length
    );

    let translation = dictionaries.translate(&text, direction, config);
    if translation.is_truncated() {
        eprintln!(
            "Warning: input too long, only {} of {} tokens were translated",
            translation.consumed, translation.total
        );
    }

    print!("{}", translation.text);
    if !translation.text.ends_with('\n') {
        println!();
    }

    Ok(())
}
