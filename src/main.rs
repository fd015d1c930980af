use anyhow::{anyhow, Result};
use clap::{crate_version, App as ClapApp, Arg};
use log::LevelFilter;
use photo_timeline::app::{App, Overrides};
use photo_timeline::config::Config;
use photo_timeline::logger;
use photo_timeline::ui::Theme;

fn main() -> Result<()> {
    let matches = ClapApp::new("photo-timeline")
        .version(crate_version!())
        .about("Browse photos by year, month and day from the terminal")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Use a custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("theme")
                .short("t")
                .long("theme")
                .value_name("NAME")
                .help("Override the configured theme")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("N")
                .help("Seed for the thumbnail scatter")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Show debug messages in the log panel"),
        )
        .get_matches();

    let level = if matches.is_present("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let log_buffer = logger::init(level)?;

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;

    let mut overrides = Overrides::default();
    if let Some(name) = matches.value_of("theme") {
        if Theme::from_name(name).is_none() {
            return Err(anyhow!(
                "Unknown theme '{}', expected one of: {}",
                name,
                Theme::available_themes().join(", ")
            ));
        }
        overrides.theme_name = Some(name.to_string());
    }

    if let Some(seed) = matches.value_of("seed") {
        let seed = seed
            .parse::<u64>()
            .map_err(|e| anyhow!("Invalid seed '{}': {}", seed, e))?;
        overrides.jitter_seed = Some(seed);
    }

    App::start(config, overrides, log_buffer)
}
