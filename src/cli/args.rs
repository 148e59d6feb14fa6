//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::{Error, Result};

/// Bilibili media picker CLI.
#[derive(Parser, Debug)]
#[command(
    name = "bili-picker",
    version,
    about = "Browse Bilibili media and pick what to download",
    long_about = "Lists the parts of a video, the episodes of a series, a live room or an audio \
                  track as a checkbox tree, applies your toggles and prints what would be \
                  downloaded.\n\n\
                  Everything starts checked; use --toggle and --toggle-group to deselect."
)]
pub struct Args {
    /// Video, series, live room or audio address, or a bare BV/av/ep/ss/au id.
    #[arg(required_unless_present = "input", conflicts_with = "input")]
    pub target: Option<String>,

    /// Load a saved catalog (JSON) instead of fetching one.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Save the fetched catalog to this file.
    #[arg(long)]
    pub save_catalog: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// SESSDATA login cookie.
    #[arg(long, env = "BILI_SESSDATA", hide_env_values = true)]
    pub sessdata: Option<String>,

    /// Flip one item, given as GROUP:KEY (for example 正片:3). Repeatable.
    #[arg(short, long = "toggle", value_name = "GROUP:KEY")]
    pub toggles: Vec<String>,

    /// Click a whole group. Repeatable; applied before item toggles.
    #[arg(short = 'g', long = "toggle-group", value_name = "GROUP")]
    pub group_toggles: Vec<String>,

    /// List extra series sections next to the main feature.
    #[arg(long, conflicts_with = "no_sections")]
    pub show_sections: bool,

    /// List only the main feature of a series.
    #[arg(long)]
    pub no_sections: bool,

    /// Answer yes to the member-only confirmation.
    #[arg(short, long)]
    pub yes: bool,

    /// Write the resolved download list to this JSON file.
    #[arg(long)]
    pub plan: Option<PathBuf>,

    /// Proxy URL for API requests.
    #[arg(long)]
    pub proxy: Option<String>,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// Split a `GROUP:KEY` toggle. The last colon separates the key.
pub fn parse_leaf_ref(input: &str) -> Result<(String, String)> {
    match input.rsplit_once(':') {
        Some((group, key)) if !group.is_empty() && !key.is_empty() => {
            Ok((group.to_string(), key.to_string()))
        }
        _ => Err(Error::ConfigValidation {
            field: "toggle".to_string(),
            message: format!("Expected GROUP:KEY, got '{}'", input),
        }),
    }
}

impl Args {
    /// Parsed `--toggle` values, in the order given.
    pub fn leaf_toggles(&self) -> Result<Vec<(String, String)>> {
        self.toggles.iter().map(|t| parse_leaf_ref(t)).collect()
    }

    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(sessdata) = &self.sessdata {
            config.user.sessdata = sessdata.trim().to_string();
        }

        if let Some(proxy) = &self.proxy {
            config.network.proxy = Some(proxy.clone());
        }

        // Boolean flags (only override if set)
        if self.show_sections {
            config.misc.show_sections = true;
        }

        if self.no_sections {
            config.misc.show_sections = false;
        }
    }
}
