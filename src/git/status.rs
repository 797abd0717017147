//! Parsing of `git status --porcelain` output into a [`ChangeSet`].

use std::fmt;

use tracing::debug;

/// Category of a changed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileStatus {
    Added,
    Modified,
    Deleted,
    Renamed,
}

impl FileStatus {
    /// All categories in the order they appear in a commit message.
    pub const ALL: [FileStatus; 4] = [
        FileStatus::Added,
        FileStatus::Modified,
        FileStatus::Deleted,
        FileStatus::Renamed,
    ];

    /// Route a two-character porcelain code to a category.
    ///
    /// The code is trimmed first, so `"M "` and `" M"` both land in
    /// `Modified`. Codes outside A/M/D/R (`??`, `UU`, `!!`) yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        if code.starts_with('A') {
            Some(FileStatus::Added)
        } else if code.starts_with('M') {
            Some(FileStatus::Modified)
        } else if code.starts_with('D') {
            Some(FileStatus::Deleted)
        } else if code.starts_with('R') {
            Some(FileStatus::Renamed)
        } else {
            None
        }
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileStatus::Added => write!(f, "added"),
            FileStatus::Modified => write!(f, "modified"),
            FileStatus::Deleted => write!(f, "deleted"),
            FileStatus::Renamed => write!(f, "renamed"),
        }
    }
}

/// A file reported by the status output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedFile {
    pub path: String,
    pub status: FileStatus,
    /// Source path for renamed files (None for non-rename changes).
    pub old_path: Option<String>,
}

/// Changed paths grouped by category, each group in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    files: Vec<ChangedFile>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, file: ChangedFile) {
        self.files.push(file);
    }

    /// Paths in the given category, in the order they were reported.
    pub fn paths(&self, status: FileStatus) -> Vec<&str> {
        self.files
            .iter()
            .filter(|f| f.status == status)
            .map(|f| f.path.as_str())
            .collect()
    }

    pub fn added(&self) -> Vec<&str> {
        self.paths(FileStatus::Added)
    }

    pub fn modified(&self) -> Vec<&str> {
        self.paths(FileStatus::Modified)
    }

    pub fn deleted(&self) -> Vec<&str> {
        self.paths(FileStatus::Deleted)
    }

    pub fn renamed(&self) -> Vec<&str> {
        self.paths(FileStatus::Renamed)
    }

    /// Every changed file across all categories.
    pub fn files(&self) -> &[ChangedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Parse porcelain v1 status text.
///
/// Each line is `XY PATH` (or `XY OLD -> NEW` for renames). Lines are not
/// trimmed before slicing so a leading-space code like `" M"` survives.
pub fn parse_status(status: &str) -> ChangeSet {
    let mut changes = ChangeSet::new();

    for line in status.lines() {
        let line = line.trim_end_matches('\r');
        let (Some(code), Some(rest)) = (line.get(..2), line.get(3..)) else {
            continue;
        };

        let Some(status) = FileStatus::from_code(code) else {
            debug!("Skipping status line with unhandled code {:?}: {}", code, line);
            continue;
        };

        let (path, old_path) = match status {
            FileStatus::Renamed => match rest.split_once(" -> ") {
                Some((old, new)) => (unquote(new), Some(unquote(old))),
                None => (unquote(rest), None),
            },
            _ => (unquote(rest), None),
        };

        if path.is_empty() {
            continue;
        }

        changes.push(ChangedFile {
            path,
            status,
            old_path,
        });
    }

    changes
}

/// Strip the C-style quotes git puts around paths with special characters.
///
/// Escapes are decoded to bytes first so octal sequences like `\303\251`
/// reassemble into UTF-8.
fn unquote(path: &str) -> String {
    let path = path.trim();
    let Some(inner) = path.strip_prefix('"').and_then(|p| p.strip_suffix('"')) else {
        return path.to_string();
    };

    let mut bytes = Vec::with_capacity(inner.len());
    let mut rest = inner.as_bytes();
    while let Some((&b, tail)) = rest.split_first() {
        rest = tail;
        if b != b'\\' {
            bytes.push(b);
            continue;
        }
        let Some((&esc, tail)) = rest.split_first() else {
            bytes.push(b'\\');
            break;
        };
        rest = tail;
        match esc {
            b'n' => bytes.push(b'\n'),
            b't' => bytes.push(b'\t'),
            b'r' => bytes.push(b'\r'),
            b'a' => bytes.push(0x07),
            b'b' => bytes.push(0x08),
            b'f' => bytes.push(0x0c),
            b'v' => bytes.push(0x0b),
            b'0'..=b'7' => {
                let mut value = u32::from(esc - b'0');
                let mut digits = 1;
                while digits < 3 {
                    match rest.first() {
                        Some(&d @ b'0'..=b'7') => {
                            value = value * 8 + u32::from(d - b'0');
                            rest = &rest[1..];
                            digits += 1;
                        }
                        _ => break,
                    }
                }
                bytes.push((value & 0xff) as u8);
            }
            other => bytes.push(other),
        }
    }

    String::from_utf8_lossy(&bytes).into_owned()
}
