#[macro_use]
extern crate failure;

#[macro_use]
extern crate log;

mod terminal_host;

use clap::{Parser, Subcommand};
use failure::Error;
use jenkins_dashboard::config_file::{load_global_layer, load_project_layer};
use jenkins_dashboard::{
    build_job, get_dashboard, is_enabled, show_dashboard, CommandOutcome, Settings,
    SettingsResolver,
};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use terminal_host::{TerminalPicker, TextPanel};

const GLOBAL_CONFIG_FILE: &str = "config.toml";
const PROJECT_CONFIG_FILE: &str = ".jenkins-dashboard.toml";
const WATCH_TICK: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "jenkins-dashboard", version, about = "Browse and build Jenkins jobs")]
struct Cli {
    /// Global settings file (defaults to config.toml next to the executable)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Project settings file holding a [jenkins-dashboard] table
    #[arg(long, global = true)]
    project: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pick a job and show its details
    Show,
    /// Pick a job and request a build
    Build,
    /// Print the dashboard every few seconds until Ctrl-C
    Watch {
        /// Seconds between two polls
        #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
        interval: u64,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let global_path = cli.config.unwrap_or_else(default_global_path);
    let project_path = cli
        .project
        .unwrap_or_else(|| PathBuf::from(PROJECT_CONFIG_FILE));

    let mut resolver = SettingsResolver::new(
        load_global_layer(&global_path)?,
        load_project_layer(&project_path)?,
    );
    let log_handle = log4rs::init_config(logging_config(resolver.settings().show_debug)?)?;

    if !is_enabled(resolver.settings()) {
        return Err(format_err!(
            "No jenkins_url is configured in {:?} or {:?}.",
            global_path,
            project_path
        ));
    }

    match cli.command {
        Command::Show => {
            let settings = resolver.resolve();
            let outcome = show_dashboard(&settings, &mut picker(), &mut panel());
            report(&settings, outcome);
        }
        Command::Build => {
            let settings = resolver.resolve();
            let outcome = build_job(&settings, &mut picker(), &mut panel());
            report(&settings, outcome);
        }
        Command::Watch { interval } => {
            resolver.add_listener(move |settings: &Settings| {
                info!("Settings changed, now watching {}.", settings.jenkins_url);
                match logging_config(settings.show_debug) {
                    Ok(config) => log_handle.set_config(config),
                    Err(e) => warn!("Unable to reconfigure logging: {}", e),
                }
            });
            watch(
                &mut resolver,
                &global_path,
                &project_path,
                Duration::from_secs(interval),
            )?;
        }
    }
    Ok(())
}

fn default_global_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(GLOBAL_CONFIG_FILE)))
        .unwrap_or_else(|| PathBuf::from(GLOBAL_CONFIG_FILE))
}

fn logging_config(show_debug: bool) -> Result<Config, Error> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} {h({l})} - {m}{n}",
        )))
        .build();
    let level = if show_debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder =
        Config::builder().appender(Appender::builder().build("stderr", Box::new(stderr)));
    for noisy in &["reqwest", "hyper", "hyper_util", "rustls"] {
        builder = builder.logger(Logger::builder().build(*noisy, LevelFilter::Warn));
    }
    Ok(builder.build(Root::builder().appender("stderr").build(level))?)
}

fn picker() -> TerminalPicker<io::StdinLock<'static>, io::Stdout> {
    TerminalPicker::new(io::stdin().lock(), io::stdout())
}

fn panel() -> TextPanel<io::Stdout> {
    TextPanel::new(io::stdout())
}

fn report(settings: &Settings, outcome: CommandOutcome) {
    match outcome {
        CommandOutcome::Disabled => println!("No jenkins_url is configured."),
        CommandOutcome::NoJobs => println!("No jobs found on {}.", settings.jenkins_url),
        CommandOutcome::Cancelled => info!("Cancelled."),
        CommandOutcome::Shown(_) => {}
    }
}

fn watch(
    resolver: &mut SettingsResolver,
    global_path: &Path,
    project_path: &Path,
    interval: Duration,
) -> Result<(), Error> {
    let running = Arc::new(AtomicBool::new(true));
    let handler_flag = Arc::clone(&running);
    ctrlc::set_handler(move || handler_flag.store(false, Ordering::SeqCst))?;

    while running.load(Ordering::SeqCst) {
        reload(resolver, global_path, project_path);

        let settings = resolver.resolve();
        let jobs = get_dashboard(&settings);
        println!(
            "{} - {} ({} jobs)",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            settings.jenkins_url,
            jobs.len()
        );
        for job in &jobs {
            println!("  {:<8} {}", job.status, job.name);
        }

        let next_tick = Instant::now() + interval;
        while running.load(Ordering::SeqCst) && Instant::now() < next_tick {
            thread::sleep(WATCH_TICK);
        }
    }

    info!("Stopped watching.");
    Ok(())
}

// A broken settings file keeps the previous settings instead of ending the watch.
fn reload(resolver: &mut SettingsResolver, global_path: &Path, project_path: &Path) {
    let layers = load_global_layer(global_path)
        .and_then(|global| load_project_layer(project_path).map(|project| (global, project)));
    match layers {
        Ok((global, project)) => {
            resolver.update(global, project);
        }
        Err(e) => warn!("Keeping the previous settings: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_interval_must_be_positive() {
        assert!(Cli::try_parse_from(["jenkins-dashboard", "watch", "--interval", "0"]).is_err());

        let cli = Cli::try_parse_from(["jenkins-dashboard", "watch", "--interval", "5"]).unwrap();
        match cli.command {
            Command::Watch { interval } => assert_eq!(interval, 5),
            _ => panic!("expected the watch command"),
        }
    }

    #[test]
    fn watch_interval_defaults_to_thirty_seconds() {
        let cli = Cli::try_parse_from(["jenkins-dashboard", "watch"]).unwrap();
        match cli.command {
            Command::Watch { interval } => assert_eq!(interval, 30),
            _ => panic!("expected the watch command"),
        }
    }
}
