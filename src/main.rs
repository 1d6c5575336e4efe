//! Parses Android Chrome version codes, or generates them for a build.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use android_chrome_version::{
    generate, generate_for_all_architectures, translate_version_code, Architecture, Result,
    VersionCodeError, VersionCodes, VersionValues,
};

#[derive(Parser, Debug)]
#[command(name = "android-chrome-version")]
#[command(about = "Parses version codes.")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Version code (e.g. 529700010).
    version_code: Option<String>,

    /// Whether this is a webview version code.
    #[arg(long)]
    webview: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the version codes of a build as NAME=CODE lines.
    Generate {
        /// Chromium VERSION file providing BUILD and PATCH.
        #[arg(long, conflicts_with_all = ["build", "patch"])]
        version_file: Option<PathBuf>,

        #[arg(long, requires = "patch")]
        build: Option<u32>,

        #[arg(long, requires = "build")]
        patch: Option<u32>,

        /// Build config architecture; every architecture when omitted.
        #[arg(long, value_parser = parse_architecture)]
        arch: Option<Architecture>,

        /// Generate codes for a "next" build.
        #[arg(long)]
        next: bool,
    },
}

fn parse_architecture(value: &str) -> std::result::Result<Architecture, String> {
    value.parse().map_err(|e: VersionCodeError| e.to_string())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("ERROR: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Command::Generate {
            version_file,
            build,
            patch,
            arch,
            next,
        }) => {
            let values = match (version_file, build, patch) {
                (Some(path), _, _) => VersionValues::from_path(path)?,
                (None, Some(build), Some(patch)) => VersionValues::from_build_and_patch(build, patch),
                _ => {
                    return Err(VersionCodeError::InvalidVersionFile(
                        "either --version-file or --build and --patch is required".to_string(),
                    ))
                }
            };
            let (build_number, patch_number) = (values.build_number()?, values.patch_number()?);

            match arch {
                Some(arch) => print_codes(&generate(build_number, patch_number, arch, next)?, false),
                None => {
                    for codes in generate_for_all_architectures(build_number, patch_number, next)? {
                        print_codes(&codes, true);
                    }
                }
            }
            Ok(())
        }
        None => {
            let version_code = cli.version_code.ok_or_else(|| {
                VersionCodeError::MalformedVersionCode(
                    "parse: no version code given".to_string(),
                )
            })?;
            println!("{}", translate_version_code(&version_code, cli.webview)?);
            Ok(())
        }
    }
}

fn print_codes(codes: &VersionCodes, with_header: bool) {
    if with_header {
        println!("# {}", codes.architecture);
    }
    for code in codes.iter() {
        println!("{}={}", code.key(), code.version_code);
    }
}
