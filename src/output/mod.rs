//! Output module for persisting the extracted version list
//!
//! The list is echoed to stdout for quick inspection, its size is logged,
//! and the entries are written to a plain text file, one per line,
//! truncating whatever a previous run left behind.

use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Formats the version list as file content, one entry per line
///
/// # Arguments
///
/// * `versions` - The extracted version strings, in document order
///
/// # Returns
///
/// The entries joined with trailing newlines, e.g. `"a\nb\nc\n"`
pub fn format_version_lines(versions: &[String]) -> String {
    let mut lines = String::new();
    for version in versions {
        lines.push_str(version);
        lines.push('\n');
    }
    lines
}

/// Writes the version list to the given path
///
/// Prints the full sequence to stdout, logs the count, then creates or
/// truncates the file and writes every entry followed by a newline. The
/// file handle is released when this function returns on any path.
///
/// # Arguments
///
/// * `versions` - The extracted version strings
/// * `path` - Where to write the list
///
/// # Returns
///
/// * `Ok(())` - File written
/// * `Err(io::Error)` - Create or write failed; the run aborts
pub fn save_versions(versions: &[String], path: &Path) -> std::io::Result<()> {
    println!("{:?}", versions);
    tracing::info!("versions count: {}", versions.len());

    let mut file = File::create(path)?;
    file.write_all(format_version_lines(versions).as_bytes())?;

    Ok(())
}
