use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use rand::rngs::StdRng;
use rand::SeedableRng;

use strategy_sort_rs::input::{self, RandomListConfig};
use strategy_sort_rs::{SortStrategy, Strategy};

fn cli() -> Command {
    Command::new("strategy-sort")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Sort integers with an interchangeable algorithm and show what it cost")
        .arg(
            Arg::new("algorithm")
                .short('a')
                .long("algorithm")
                .value_name("LABEL")
                .help("Sorting algorithm, e.g. \"Bubble Sort\" or \"insertion\"")
                .default_value(Strategy::LABELS[0]),
        )
        .arg(
            Arg::new("random")
                .short('r')
                .long("random")
                .help("Sort a randomly generated list instead of the given numbers")
                .action(ArgAction::SetTrue)
                .conflicts_with("numbers"),
        )
        .arg(
            Arg::new("max-len")
                .long("max-len")
                .value_name("N")
                .help("Exclusive upper bound of the random list length, at most 100000")
                .value_parser(value_parser!(usize))
                .default_value("10000"),
        )
        .arg(
            Arg::new("max-value")
                .long("max-value")
                .value_name("N")
                .help("Exclusive upper bound of the random values")
                .value_parser(value_parser!(i32))
                .default_value("10000"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .help("Seed for the random list")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the sort report as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .help("List the available algorithms and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("numbers")
                .value_name("NUMBERS")
                .help("Numbers to sort, read from stdin when absent or \"-\"")
                .num_args(0..)
                .allow_negative_numbers(true),
        )
}

fn read_numbers(matches: &ArgMatches) -> Result<Vec<i32>> {
    if matches.get_flag("random") {
        let config = RandomListConfig {
            max_len: *matches
                .get_one::<usize>("max-len")
                .unwrap_or(&RandomListConfig::DEFAULT_MAX_LEN),
            value_bound: *matches
                .get_one::<i32>("max-value")
                .unwrap_or(&RandomListConfig::DEFAULT_VALUE_BOUND),
        };
        let mut rng = match matches.get_one::<u64>("seed") {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_entropy(),
        };
        return input::random_list(&config, &mut rng).context("generating random list");
    }

    let tokens = matches
        .get_many::<String>("numbers")
        .map(|values| values.cloned().collect::<Vec<_>>())
        .unwrap_or_default();

    let text = if tokens.is_empty() || tokens == ["-"] {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading numbers from stdin")?;
        buf
    } else {
        tokens.join(" ")
    };

    Ok(input::parse_numbers(&text)?)
}

fn run(matches: &ArgMatches) -> Result<()> {
    if matches.get_flag("list") {
        for label in Strategy::LABELS {
            println!("{label}");
        }
        return Ok(());
    }

    let label = matches
        .get_one::<String>("algorithm")
        .map(String::as_str)
        .unwrap_or(Strategy::LABELS[0]);
    let mut strategy = Strategy::from_label(label)?;

    let mut numbers = read_numbers(matches)?;
    if numbers.is_empty() {
        log::warn!("random list came out empty, nothing to sort");
    }
    let json = matches.get_flag("json");
    if matches.get_flag("random") && !json {
        println!("Input:  {}", input::format_numbers(&numbers));
    }

    log::info!("sorting {} numbers with {}", numbers.len(), strategy.label());
    let report = strategy.sort(&mut numbers);

    if json {
        let rendered = serde_json::to_string_pretty(report).context("serializing sort report")?;
        println!("{rendered}");
    } else {
        println!("Sorted: {}", input::format_numbers(&numbers));
        println!();
        println!("{}", strategy.sort_info());
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = cli().get_matches();
    run(&matches)
}
