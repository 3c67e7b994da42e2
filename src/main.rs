use clap::Parser;
use fitcalc::{
    config::{ConfigStore, FileConfigStore},
    package::{demo_packages, load_packages},
    OutputFormat, Package, Training,
};
use log::{debug, info};
use std::{
    error::Error,
    io::{self, Write},
    path::PathBuf,
    process,
};

/// workout calculator: distance, mean speed and calories from raw sensor counts
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Computes distance, mean speed and calories for running (RUN), sports walking (WLK) and swimming (SWM) sessions. Pass a single package as CODE followed by its values, point --input at a .json or .csv file of packages, or run without arguments for the demo set."
)]
pub struct Cli {
    /// workout code: RUN, WLK or SWM
    #[clap(conflicts_with = "input")]
    code: Option<String>,

    /// package values: strides, hours, kg, then height (WLK) or pool length and laps (SWM)
    #[clap(allow_negative_numbers = true)]
    data: Vec<f64>,

    /// read packages from a .json or .csv file
    #[clap(short = 'i', long)]
    input: Option<PathBuf>,

    /// output format, defaults to the saved config
    #[clap(short = 'f', long, value_enum)]
    format: Option<OutputFormat>,

    /// store the effective output format as the new default
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    fn packages(&self) -> Result<Vec<Package>, fitcalc::PackageError> {
        match (&self.code, &self.input) {
            (Some(code), _) => Ok(vec![Package::new(code.clone(), self.data.clone())]),
            (None, Some(path)) => load_packages(path),
            (None, None) => {
                debug!("no packages given, using demo set");
                Ok(demo_packages())
            }
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let store = FileConfigStore::new();
    let mut config = store.load();
    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.save_config {
        store.save(&config)?;
        info!("saved config to {}", store.path().display());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = match cli.packages() {
        Ok(packages) => run(&packages, config.format, &mut out),
        Err(e) => Err(e.into()),
    };

    // Bad input data is not a usage error: plain message, exit status 1.
    if let Err(e) = result {
        out.flush()?;
        eprintln!("fitcalc: {e}");
        process::exit(1);
    }

    Ok(())
}

/// Print one summary per package, stopping at the first bad package
fn run<W: Write>(
    packages: &[Package],
    format: OutputFormat,
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    for package in packages {
        let workout = package.parse()?;
        let info = workout.show_training_info();
        writeln!(out, "{}", info.render(format)?)?;
    }
    Ok(())
}
