//! Console output utilities.

use console::style;

use crate::catalog::Catalog;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     bili-picker                                       ║
║     Browse Bilibili media and pick what to download   ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print what was loaded and under which settings.
pub fn print_catalog_summary(catalog: &Catalog, show_sections: bool, authenticated: bool) {
    println!();
    println!("{}", style("Catalog:").bold());
    println!("  Title: {}", catalog.title());
    println!("  Kind: {}", catalog.domain());
    match catalog {
        Catalog::Live(live) => {
            let status = if live.is_live() { "live" } else { "offline" };
            println!("  Status: {}", status);
        }
        Catalog::Video(video) if !video.qualities.is_empty() => {
            let names: Vec<_> = video
                .qualities
                .iter()
                .map(|q| q.description.as_str())
                .collect();
            println!("  Qualities: {}", names.join(", "));
            if let Some(best) = video.best_quality(authenticated) {
                println!("  Best available: {}", best.description);
            }
        }
        _ => {}
    }
    println!(
        "  Sections: {}",
        if show_sections { "all" } else { "main only" }
    );
    println!(
        "  Login: {}",
        if authenticated { "yes" } else { "no" }
    );

    if let Catalog::Video(video) = catalog {
        let locked = video.locked_qualities(authenticated);
        if !locked.is_empty() {
            let names: Vec<_> = locked.iter().map(|q| q.description.as_str()).collect();
            print_warning(&format!(
                "{} need a member SESSDATA cookie to download",
                names.join(", ")
            ));
        }
    }
    println!();
}
