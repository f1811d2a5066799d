//! Futhark compiler wrapper which deals with generated files

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use futhark_stage::{Backend, BuildRequest, Driver, SourceMapping};

#[derive(Parser, Debug)]
#[command(name = "compile-futhark")]
#[command(about = "Futhark compiler wrapper which deals with generated files")]
#[command(version)]
struct Args {
    /// Directory to place futhark sources in
    #[arg(long, value_name = "DIR")]
    dir: PathBuf,

    /// Futhark compiler binary path
    #[arg(long, value_name = "PATH")]
    futhark: PathBuf,

    /// Futhark compilation backend (cuda, opencl, multicore, c)
    #[arg(long, value_name = "BACKEND")]
    futhark_backend: Backend,

    /// Output basename
    #[arg(long, value_name = "NAME")]
    output: String,

    /// Main futhark file (relative to --dir)
    #[arg(long, value_name = "FILE")]
    main: PathBuf,

    /// Source file and its path relative to --dir (repeatable)
    #[arg(
        short = 'f',
        num_args = 2,
        value_names = ["SRC", "RELATIVE_SRC"],
        action = ArgAction::Append,
    )]
    sources: Vec<PathBuf>,
}

impl Args {
    fn mappings(&self) -> Vec<SourceMapping> {
        self.sources
            .chunks_exact(2)
            .map(|pair| SourceMapping::from((&pair[0], &pair[1])))
            .collect()
    }

    fn into_request(self) -> BuildRequest {
        BuildRequest::new(self.dir, self.futhark, self.futhark_backend, self.output, self.main)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("compile-futhark: {:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(args: Args) -> anyhow::Result<u8> {
    let mappings = args.mappings();
    let driver = Driver::new(args.into_request());

    let outcome = driver
        .run(&mappings)
        .with_context(|| format!("building {}", driver.request().main_path().display()))?;

    Ok(outcome.exit_code())
}
