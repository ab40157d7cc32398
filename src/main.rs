use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::Path;

use release_gate::config::{self, Config};
use release_gate::domain::release::ReleaseSet;
use release_gate::host::{GhCli, ReleaseHost};
use release_gate::initial::{self, InitialOutcome};
use release_gate::reconciler::{self, Decision, VersionSources};
use release_gate::{manifest, promote, ui};

#[derive(clap::Parser)]
#[command(
    name = "release-gate",
    about = "Version-consistency checks and promotion for draft/prerelease/latest releases"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, global = true, help = "Project directory holding the manifests")]
    dir: Option<String>,

    #[arg(long, global = true, help = "Print debugging output")]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print versions from the release host and the project manifests
    Versions(VersionsArgs),

    /// Run the version-consistency checks
    Check,

    /// Promote a draft release to prerelease, or a prerelease to full release
    Promote {
        #[arg(long, help = "Promote the draft release to a prerelease")]
        prerelease: bool,

        #[arg(long, help = "Promote the prerelease to a full release")]
        release: bool,
    },

    /// Create the initial draft release when the repository has none
    Init,
}

#[derive(clap::Args)]
struct VersionsArgs {
    #[arg(long, help = "The draft release version in the repository")]
    draft: bool,

    #[arg(long, help = "The prerelease version in the repository")]
    prerelease: bool,

    #[arg(long, help = "The latest release version in the repository")]
    latest: bool,

    #[arg(long, help = "The version recorded in Cargo.toml")]
    cargo: bool,

    #[arg(long, help = "The version recorded in package.json")]
    npm: bool,

    #[arg(long, help = "The new draft release version to set in the repository")]
    propose: bool,

    #[arg(long, help = "The Rust toolchain version required by Cargo.toml")]
    rust_version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let mut config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    if let Some(dir) = args.dir {
        config.project_dir = dir;
    }

    let host = GhCli::new();

    let result = match args.command {
        Command::Versions(flags) => run_versions(&host, &config, &flags),
        Command::Check => run_check(&host, &config, args.debug),
        Command::Promote {
            prerelease,
            release,
        } => run_promote(&host, prerelease, release),
        Command::Init => run_init(&host, &config),
    };

    if let Err(e) = result {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

/// Fetch the releases and manifests once and build the reconciliation snapshot.
fn gather_sources<H: ReleaseHost>(
    host: &H,
    config: &Config,
) -> release_gate::Result<VersionSources> {
    let releases = ReleaseSet::new(host.list_releases()?);
    let dir = Path::new(&config.project_dir);

    VersionSources::from_releases(
        &releases,
        manifest::cargo_version(dir)?,
        manifest::npm_version(dir)?,
    )
}

fn run_versions<H: ReleaseHost>(
    host: &H,
    config: &Config,
    flags: &VersionsArgs,
) -> release_gate::Result<()> {
    let dir = Path::new(&config.project_dir);

    if flags.cargo {
        if let Some(version) = manifest::cargo_version(dir)? {
            println!("{}", version);
        }
    }

    if flags.npm {
        if let Some(version) = manifest::npm_version(dir)? {
            println!("{}", version);
        }
    }

    if flags.rust_version {
        println!("{}", manifest::rust_version(dir)?);
    }

    if flags.draft || flags.prerelease || flags.latest {
        let releases = ReleaseSet::new(host.list_releases()?);

        if flags.draft {
            if let Some(tag) = releases.draft_tag()? {
                println!("{}", tag);
            }
        }

        if flags.prerelease {
            if let Some(tag) = releases.prerelease_tag()? {
                println!("{}", tag);
            }
        }

        if flags.latest {
            if let Some(tag) = releases.latest_tag()? {
                println!("{}", tag);
            }
        }
    }

    if flags.propose {
        let sources = gather_sources(host, config)?;
        match reconciler::reconcile(&sources)? {
            Decision::ProposedDraft(version) => println!("v{}", version),
            Decision::NoDraftNeeded => {}
        }
    }

    Ok(())
}

fn run_check<H: ReleaseHost>(host: &H, config: &Config, debug: bool) -> release_gate::Result<()> {
    ui::display_status("Running version-consistency checks...");

    let sources = gather_sources(host, config)?;
    if debug {
        ui::display_sources(&sources);
    }

    match reconciler::reconcile(&sources)? {
        Decision::NoDraftNeeded => {
            ui::display_success("Existing draft release is consistent with all sources");
        }
        Decision::ProposedDraft(version) => {
            ui::display_success(&format!("All checks passed - proposed draft: v{}", version));
        }
    }

    Ok(())
}

fn run_promote<H: ReleaseHost>(host: &H, prerelease: bool, release: bool) -> release_gate::Result<()> {
    if prerelease {
        ui::display_info("Promoting draft release to prerelease");
        let tag = promote::promote_to_prerelease(host)?;
        ui::display_success(&format!("Promoted {} to prerelease", tag));
    }

    if release {
        ui::display_info("Promoting prerelease to full release");
        let tag = promote::promote_to_release(host)?;
        ui::display_success(&format!("Promoted {} to full release", tag));
    }

    if !prerelease && !release {
        ui::display_error("Nothing to do: pass --prerelease or --release");
        std::process::exit(1);
    }

    Ok(())
}

fn run_init<H: ReleaseHost>(host: &H, config: &Config) -> release_gate::Result<()> {
    match initial::create_initial_release(host, &config.release)? {
        InitialOutcome::Created(tag) => {
            ui::display_success(&format!("Initial release {} created successfully", tag));
        }
        InitialOutcome::AlreadyExists => {
            ui::display_info("Initial release already exists, nothing to do.");
        }
    }

    Ok(())
}
