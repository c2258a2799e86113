use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;
use make_deb::{GenerateOptions, RunSettings};

#[derive(Parser)]
#[command(name = "make-deb")]
#[command(version)]
#[command(
    about = "Generate Debian packaging files from setup.py metadata and git history",
    long_about = None
)]
struct Cli {
    /// Project root containing setup.py
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Target Python version for the generated dependency constraints
    #[arg(long, value_name = "VERSION")]
    python_version: Option<String>,

    /// Extra options appended to the dh --with python-virtualenv invocation
    #[arg(long, value_name = "OPTS")]
    dh_virtualenv_options: Option<String>,

    /// Shell commands embedded in the generated postinst script
    #[arg(long, value_name = "CMDS")]
    postinst_commands: Option<String>,

    /// Pre-supplied value for a missing required field (repeatable)
    #[arg(long = "field", value_name = "NAME=VALUE", value_parser = parse_field)]
    fields: Vec<(String, String)>,

    /// Never prompt; fail if a required field is missing
    #[arg(long)]
    non_interactive: bool,

    /// Replace an existing debian directory without asking
    #[arg(short = 'y', long = "yes")]
    assume_yes: bool,
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.trim().to_string(), value.to_string()))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))
}

fn main() {
    let cli = Cli::parse();

    let options = GenerateOptions {
        python_version: cli.python_version,
        dh_virtualenv_options: cli.dh_virtualenv_options,
        postinst_commands: cli.postinst_commands,
    };
    let settings = RunSettings {
        fields: cli.fields.into_iter().collect::<HashMap<_, _>>(),
        non_interactive: cli.non_interactive,
        assume_yes: cli.assume_yes,
    };

    match make_deb::generate(&cli.path, &options, &settings) {
        Ok(report) => {
            println!("✅ Wrote debian configuration to {}", report.output_dir.display());
            for file in &report.files {
                if let Some(name) = file.file_name() {
                    println!("   {}", name.to_string_lossy());
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
