//! Indented tree rendering of a directory structure
//!
//! Writes one line per entry, indented two spaces per depth level, with a
//! directory glyph for directories and a file glyph for files. Listing
//! failures are annotated inline; the traversal continues past them.

use crate::error::GraftError;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

const DIR_MARKER: &str = "\u{1F4C1}";
const FILE_MARKER: &str = "\u{1F4C4}";
const WARN_MARKER: &str = "\u{26A0}\u{FE0F}";

const INDENT: &str = "  ";

/// Counts of entries written during a render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    /// Directories rendered, the start directory included
    pub directories: usize,
    /// Files rendered
    pub files: usize,
    /// Listing failures annotated inline
    pub unreadable: usize,
}

impl RenderReport {
    /// Total entry lines written, annotation markers included.
    pub fn lines(&self) -> usize {
        self.directories + self.files + self.unreadable
    }
}

/// Render the tree under `start` to `out`: a header line, a blank separator,
/// then the recursive listing starting with the start directory itself.
pub fn render_tree<W: Write>(start: &Path, out: &mut W) -> Result<RenderReport, GraftError> {
    if !start.exists() {
        return Err(GraftError::PathNotFound(start.to_path_buf()));
    }

    writeln!(out, "Directory Structure for: {}", start.display())?;
    writeln!(out)?;

    let mut report = RenderReport::default();
    write_directory(start, out, 0, &mut report)?;
    Ok(report)
}

/// Render the tree under `start` into a UTF-8 text file at `output`.
pub fn write_report(start: &Path, output: &Path) -> Result<RenderReport, GraftError> {
    if !start.exists() {
        return Err(GraftError::PathNotFound(start.to_path_buf()));
    }

    let file = fs::File::create(output)?;
    let mut out = io::BufWriter::new(file);
    let report = render_tree(start, &mut out)?;
    out.flush()?;
    Ok(report)
}

fn write_directory<W: Write>(
    path: &Path,
    out: &mut W,
    depth: usize,
    report: &mut RenderReport,
) -> Result<(), GraftError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    writeln!(out, "{}{} {}", INDENT.repeat(depth), DIR_MARKER, name)?;
    report.directories += 1;

    let reader = match fs::read_dir(path) {
        Ok(reader) => reader,
        Err(e) => {
            write_listing_error(out, depth + 1, &e)?;
            report.unreadable += 1;
            return Ok(());
        }
    };

    let mut entries = Vec::new();
    for entry in reader {
        match entry {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                write_listing_error(out, depth + 1, &e)?;
                report.unreadable += 1;
                return Ok(());
            }
        }
    }

    // Byte-wise name sort keeps sibling order stable across platforms.
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        // file_type does not traverse symlinks, so linked directories render
        // as leaf entries and link cycles cannot recurse.
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if is_dir {
            write_directory(&entry.path(), out, depth + 1, report)?;
        } else {
            writeln!(
                out,
                "{}{} {}",
                INDENT.repeat(depth + 1),
                FILE_MARKER,
                entry.file_name().to_string_lossy()
            )?;
            report.files += 1;
        }
    }

    Ok(())
}

fn write_listing_error<W: Write>(out: &mut W, depth: usize, err: &io::Error) -> io::Result<()> {
    if err.kind() == io::ErrorKind::PermissionDenied {
        writeln!(out, "{}{} [Permission Denied]", INDENT.repeat(depth), WARN_MARKER)
    } else {
        writeln!(out, "{}{} [Error: {}]", INDENT.repeat(depth), WARN_MARKER, err)
    }
}
