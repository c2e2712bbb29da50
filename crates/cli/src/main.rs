// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # unitstat - File ownership and permission checks for Juju models
//!
//! Reads a file assertion document (by default `./file-assertions.yaml`),
//! generates one test per assertion of every deployed application, and runs
//! `stat` on each unit of that application through `juju exec`.
//!
//! ## Commands
//!
//! - `unitstat run` runs every generated test and prints a report
//! - `unitstat list` prints the generated test names without contacting units
//!
//! ## Exit status
//!
//! - `0` when no test failed (skips are not failures)
//! - `1` when a test failed, or the suite could not be built

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use unitstat::{GeneratedTest, SuiteReport, discover_tests, filter_tests, run_suite};
use unitstat_domain::{ApplicationFileSet, DEFAULT_CONFIG_PATH, load_file_assertions};
use unitstat_juju::{JujuClient, OpenStackReleases};

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match args.run() {
        Ok(true) => (),
        Ok(false) => std::process::exit(1),
        Err(err) => {
            tracing::error!("{err:#}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(
    name = "unitstat",
    author,
    version,
    about = "Check file ownership and permissions on deployed units",
    styles = clap_cargo::style::CLAP_STYLING
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    /// Returns whether every test passed or was skipped.
    fn run(self) -> Result<bool> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Run the file assertions against every unit of each deployed application
    #[command(visible_alias = "r")]
    Run {
        #[command(flatten)]
        target: Target,

        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the generated tests without running them
    #[command(visible_alias = "l")]
    List {
        #[command(flatten)]
        target: Target,
    },
}

impl Command {
    fn run(self) -> Result<bool> {
        match self {
            Self::Run { target, json } => run(&target, json),
            Self::List { target } => list(&target),
        }
    }
}

/// Where the assertions come from and which deployment they run against.
#[derive(Clone, Debug, clap::Args)]
struct Target {
    /// Path to the file assertion document
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Juju model to check; the current model when omitted
    #[arg(short, long)]
    model: Option<String>,

    /// Only keep tests whose name contains this text
    #[arg(short, long)]
    filter: Option<String>,
}

impl Target {
    fn client(&self) -> JujuClient {
        JujuClient::new(self.model.clone())
    }

    /// Loads the assertions and generates the tests for deployed applications.
    fn discover(&self, client: &JujuClient) -> Result<Vec<GeneratedTest>> {
        let config: ApplicationFileSet = load_file_assertions(&self.config)
            .wrap_err("failed to load file assertions")?;
        tracing::info!(
            "loaded {} assertion(s) for {} application(s) from {}",
            config.assertion_count(),
            config.len(),
            self.config.display()
        );

        let tests: Vec<GeneratedTest> =
            discover_tests(&config, client).wrap_err("failed to generate tests")?;
        Ok(match &self.filter {
            Some(pattern) => filter_tests(tests, pattern),
            None => tests,
        })
    }
}

/// Run every generated test and print the report
fn run(target: &Target, json: bool) -> Result<bool> {
    let client: JujuClient = target.client();
    let tests: Vec<GeneratedTest> = target.discover(&client)?;
    tracing::info!("running {} test(s)", tests.len());

    let releases: OpenStackReleases<'_> = OpenStackReleases::new(&client);
    let report: SuiteReport = run_suite(&tests, &client, &releases);

    if json {
        println!(
            "{}",
            report.to_json().wrap_err("failed to serialize report")?
        );
    } else {
        print!("{}", render_text(&report));
    }

    Ok(report.is_success())
}

/// Print the generated test names
fn list(target: &Target) -> Result<bool> {
    let tests: Vec<GeneratedTest> = target.discover(&target.client())?;
    for test in &tests {
        println!("{}", test.name());
    }
    tracing::info!("{} test(s)", tests.len());
    Ok(true)
}

/// One line per test in execution order, then the summary.
fn render_text(report: &SuiteReport) -> String {
    let mut text: String = String::new();
    for result in report.results() {
        text.push_str(&format!("{} ... {}\n", result.name, result.outcome));
    }
    text.push('\n');
    text.push_str(&report.summary());
    text.push('\n');
    text
}
