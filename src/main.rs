extern crate clap;
extern crate pretty_env_logger;
extern crate termcolor;
extern crate tokio;

use acedit::{
    cache::TestCaseCache,
    config::Settings,
    downloader::Downloader,
    error::{Error, Result},
    judge::Judge,
    types::ScrapeOutcome,
};
use clap::{crate_description, crate_name, App, Arg, ArgMatches};
use pretty_env_logger::init_timed;
use std::{io::Write, process::exit};
use termcolor::{ColorChoice, StandardStream};

#[macro_use]
mod color;

fn resolve_site(matches: &ArgMatches) -> Result<String> {
    if let Some(site) = matches.value_of("site") {
        return Ok(site.to_lowercase());
    }
    match Settings::load()?.default_site {
        Some(site) => Ok(site.to_lowercase()),
        None => Err(Error::Config(String::from(
            "no site given and no default_site in the settings file",
        ))),
    }
}

async fn run(stdout: &mut StandardStream, matches: &ArgMatches) -> Result<i32> {
    let site = resolve_site(matches)?;
    let judge = Judge::from_site(&site);
    let contest = matches
        .value_of("contest")
        .ok_or_else(|| Error::Config(String::from("no contest given")))?;
    let force = matches.is_present("force");
    let root = TestCaseCache::default_root()
        .ok_or_else(|| Error::Config(String::from("can't determine home directory")))?;
    let cache = TestCaseCache::new(root);
    let downloader = Downloader::new(judge, cache)?;

    match matches.value_of("problem") {
        Some(raw) => {
            let problem = judge.normalize_problem(raw);
            match downloader.scrape_problem(contest, &problem, force).await? {
                ScrapeOutcome::Cached => {
                    write_info!(stdout, "Test cases found in cache...");
                }
                ScrapeOutcome::Fetched(count) => {
                    write_ok!(
                        stdout,
                        "Cached {} test case(s) for {}-{}",
                        count,
                        contest,
                        problem
                    );
                }
            }
        }
        None => {
            write_progress!(
                stdout,
                "Checking problems available for contest {}...",
                contest
            );
            let summary = downloader.scrape_contest(contest, force).await?;
            write_ok!(stdout, "{}", summary);
        }
    }
    Ok(0)
}

#[tokio::main]
async fn main() {
    init_timed();
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let matches = App::new(crate_name!())
        .about(crate_description!())
        .version(get_version!("version"))
        .long_version(get_version!("long_version"))
        .arg(
            Arg::new("site")
                .short('s')
                .long("site")
                .takes_value(true)
                .about("The judge site, e.g. codeforces, codechef"),
        )
        .arg(
            Arg::new("contest")
                .short('c')
                .long("contest")
                .takes_value(true)
                .about("The contest id, e.g. 1234, JUNE17"),
        )
        .arg(
            Arg::new("problem")
                .short('p')
                .long("problem")
                .takes_value(true)
                .about("The problem code, e.g. A, PRMQ"),
        )
        .arg(
            Arg::new("force")
                .short('f')
                .long("force")
                .about("Force download even when the test cases are cached"),
        )
        .get_matches();
    let code = match run(&mut stdout, &matches).await {
        Ok(code) => code,
        Err(err) => {
            write_error!(&mut stdout, "{}", err);
            1
        }
    };
    exit(code);
}
