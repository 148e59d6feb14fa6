//! bili-picker - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use bili_picker::{
    api::{parse_target, BiliApi, RemoteSource},
    catalog::{save_catalog, FileSource, MetadataSource},
    cli::Args,
    config::{validate_config, Config},
    error::{exit_codes, Error, Result},
    output::{
        create_spinner, print_banner, print_catalog_summary, print_error, print_info,
        print_outcome, print_success, print_tree, print_warning, write_plan, ConsolePrompt,
    },
    selection::{AutoConfirm, ConfirmPrompt, Resolution, SelectionSession},
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run() -> Result<i32> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    // Load configuration
    let mut config = load_config(&args)?;

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    // Reject malformed toggles before any network traffic
    let leaf_toggles = args.leaf_toggles()?;

    // Load metadata
    let source: Box<dyn MetadataSource> = match (&args.input, &args.target) {
        (Some(path), _) => {
            print_info(&format!("Reading catalog from {}", path.display()));
            Box::new(FileSource::new(path.clone()))
        }
        (None, Some(input)) => {
            let target = parse_target(input)?;
            tracing::debug!("Parsed target: {:?}", target);
            let api = BiliApi::new(&config.network, &config.user.sessdata)?;
            Box::new(RemoteSource::new(api, target))
        }
        (None, None) => {
            return Err(Error::Config(
                "Either a target or --input is required".to_string(),
            ))
        }
    };

    let spinner = create_spinner("Fetching metadata...");
    let loaded = source.load().await;
    spinner.finish_and_clear();
    let catalog = loaded?;

    if let Some(path) = &args.save_catalog {
        save_catalog(path, &catalog)?;
        print_success(&format!("Saved catalog to {}", path.display()));
    }

    let authenticated = config.is_authenticated();
    print_catalog_summary(&catalog, config.misc.show_sections, authenticated);

    // Apply clicks: whole groups first, then single items
    let mut session = SelectionSession::new(catalog, config.misc.show_sections);

    for group in &args.group_toggles {
        match session.on_group_toggled(group) {
            Some(state) => tracing::debug!("Group '{}' is now {}", group, state),
            None => print_warning(&format!("No group named '{}'", group)),
        }
    }

    for (group, key) in &leaf_toggles {
        match session.on_leaf_toggled(group, key) {
            Some(state) => tracing::debug!("Group '{}' is now {} after '{}'", group, state, key),
            None => print_warning(&format!("No item '{}' in group '{}'", key, group)),
        }
    }

    print_tree(session.tree());

    // Resolve
    let mut prompt: Box<dyn ConfirmPrompt> = if args.yes {
        Box::new(AutoConfirm(true))
    } else {
        Box::new(ConsolePrompt::new())
    };

    match session.resolve(authenticated, prompt.as_mut())? {
        Resolution::Proceed(outcome) => {
            print_outcome(&outcome);
            if let Some(path) = &args.plan {
                write_plan(path, &outcome)?;
                print_success(&format!("Wrote download plan to {}", path.display()));
            }
            Ok(exit_codes::SUCCESS)
        }
        Resolution::Cancelled => {
            print_warning("Cancelled, nothing will be downloaded");
            Ok(exit_codes::ABORT)
        }
    }
}

/// Explicit `--config` must exist; the per-user file is optional.
fn load_config(args: &Args) -> Result<Config> {
    if let Some(path) = &args.config {
        return Config::load(path);
    }

    match Config::default_path() {
        Some(path) if path.exists() => {
            tracing::debug!("Using configuration at {}", path.display());
            Config::load(&path)
        }
        _ => {
            tracing::debug!("No configuration file, using defaults");
            Ok(Config::default())
        }
    }
}
