mod cli;

use cheevo_gap::core::{self, Source, CONFIG_FILE_NAME};
use cheevo_gap::normalize::{normalize, normalize_with};
use cheevo_gap::reconcile::Reconciliation;
use cheevo_gap::Game;
use chrono::Local;
use cli::{Cli, Command};
use exitfailure::ExitFailure;
use failure::{Error, err_msg};
use log::LevelFilter;
use reqwest::blocking::Client;
use simplelog::{TermLogger, TerminalMode};
use std::io::Write;
use std::path::Path;
use structopt::StructOpt;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn main() -> Result<(), ExitFailure> {
    let cli = Cli::from_args();
    init_logger(cli.verbose)?;
    match cli.command {
        Command::New { } => create_config()?,
        Command::Normalize { titles, region, extension } => print_keys(&titles, &region, &extension),
        Command::Check { first, second } => check_titles(&first, &second),
        Command::Missing { matched, json } => find_missing(matched, json)?
    }
    Ok(())
}

fn init_logger(verbose: u8) -> Result<(), Error> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace
    };
    TermLogger::init(level, simplelog::Config::default(), TerminalMode::Stderr, simplelog::ColorChoice::Auto)
        .map_err(|e| err_msg(e.to_string()))
}

fn create_config() -> Result<(), Error> {
    core::create_config(Path::new(CONFIG_FILE_NAME))?;
    println!("Created {}.", CONFIG_FILE_NAME);
    Ok(())
}

fn print_keys(titles: &[String], region: &str, extension: &str) {
    for title in titles {
        println!("{}\t{}", normalize_with(title, region, extension), title);
    }
}

fn check_titles(first: &str, second: &str) {
    let (a, b) = (normalize(first), normalize(second));
    println!("{}\t{}", a, first);
    println!("{}\t{}", b, second);
    if a == b {
        println!("Match.");
    } else {
        println!("No match.");
    }
}

fn find_missing(show_matched: bool, json: bool) -> Result<(), Error> {
    let config = core::config(Path::new(CONFIG_FILE_NAME))?;
    eprintln!("Starting download.");
    let result = core::find_missing(&Client::new(), &config, |source: &Source, found| {
        eprintln!("Downloaded {}: {} games.", source.url, found);
    })?;
    eprintln!("Finished download.");

    if json {
        print_json(&result, show_matched)
    } else {
        print_report(&result, show_matched)
    }
}

fn print_json(result: &Reconciliation, show_matched: bool) -> Result<(), Error> {
    let out = if show_matched {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string_pretty(&result.missing)?
    };
    println!("{}", out);
    Ok(())
}

fn print_report(result: &Reconciliation, show_matched: bool) -> Result<(), Error> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    if show_matched {
        print_games(&mut stdout, "Matched", &result.matched, Color::Green)?;
    }
    print_games(&mut stdout, "Missing", &result.missing, Color::Red)?;
    stdout.reset()?;
    writeln!(&mut stdout, "{} missing, {} matched. Checked on {}.",
        result.missing.len(), result.matched.len(), Local::now().format("%Y-%m-%d %H:%M"))?;
    Ok(())
}

fn print_games(stdout: &mut StandardStream, title: &str, games: &[Game], color: Color) -> Result<(), Error> {
    stdout.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(stdout, "{}\nName\tKey\tUrl", title)?;
    stdout.set_color(ColorSpec::new().set_fg(Some(color)))?;
    for game in games {
        writeln!(stdout, "{}\t{}\t{}", game.name, game.keyword, game.url)?;
    }
    stdout.reset()?;
    Ok(())
}
