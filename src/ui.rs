pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message); // Red color
}

pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message); // Green color
}

pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message); // Yellow color
}

pub fn display_info(message: &str) {
    println!("\x1b[36m[INFO]\x1b[0m {}", message); // Cyan color
}

/// Print the sources found for one reconciliation pass.
pub fn display_sources(sources: &crate::reconciler::VersionSources) {
    println!("\n\x1b[1mVersions found:\x1b[0m");
    display_source_line("Draft release", sources.draft.as_deref());
    display_source_line("Prerelease", sources.prerelease.as_deref());
    display_source_line("Latest release", sources.latest.as_deref());
    display_source_line("Cargo.toml", sources.cargo.as_deref());
    display_source_line("package.json", sources.npm.as_deref());
}

fn display_source_line(label: &str, value: Option<&str>) {
    match value {
        Some(v) => println!("  {}: \x1b[32m{}\x1b[0m", label, v),
        None => println!("  {}: \x1b[90m(none)\x1b[0m", label),
    }
}
