use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use release_bump::cli::{run_release, ReleaseArgs};
use release_bump::config;
use release_bump::git::Git2Repository;
use release_bump::ui;

#[derive(clap::Parser)]
#[command(
    name = "release-bump",
    version,
    about = "Compute the next release version from the branch and the latest release"
)]
struct Args {
    #[arg(help = "Branch the release is built from (e.g. main, develop)")]
    branch: String,

    #[arg(
        required_unless_present = "from_git",
        conflicts_with = "from_git",
        help = "Latest release version (e.g. v1.2.3)"
    )]
    latest_version: Option<String>,

    #[arg(
        required_unless_present = "from_git",
        conflicts_with = "from_git",
        help = "Whether the latest commit is a breaking change (true/false)"
    )]
    has_breaking: Option<String>,

    #[arg(
        long,
        help = "Read the latest release tag and commit message from the repository"
    )]
    from_git: bool,

    #[arg(long, help = "Create an annotated tag for the computed version")]
    tag: bool,

    #[arg(long, help = "Preview without creating a tag")]
    dry_run: bool,

    #[arg(long, default_value = ".", help = "Path inside the git repository")]
    repo: String,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Print diagnostic logs to stderr")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let release_args = ReleaseArgs {
        branch: args.branch,
        latest_version: if args.from_git {
            None
        } else {
            args.latest_version
        },
        has_breaking: if args.from_git {
            None
        } else {
            args.has_breaking
        },
        create_tag: args.tag,
        dry_run: args.dry_run,
    };

    let repo = if release_args.needs_repository() {
        match Git2Repository::open(&args.repo) {
            Ok(repo) => Some(repo),
            Err(e) => {
                ui::display_error(&format!("Git repository error: {}", e));
                std::process::exit(1);
            }
        }
    } else {
        None
    };

    let outcome = match run_release(&release_args, &config, repo.as_ref()) {
        Ok(outcome) => outcome,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    for warning in &outcome.warnings {
        ui::display_boundary_warning(warning);
    }

    if let Some(tag) = &outcome.tag {
        if outcome.tag_created {
            ui::display_success(&format!("Created tag: {}", tag));
        } else {
            ui::display_status(&format!("Dry run: would create tag {}", tag));
        }
    }

    println!("{}", outcome.decision);
    Ok(())
}
