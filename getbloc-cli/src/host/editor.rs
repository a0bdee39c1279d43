//! Editor buffers for the wrap commands

use anyhow::{bail, Context, Result};
use getbloc::snippet::{Snippet, TextEditor};
use std::fs;
use std::io::Write;
use std::ops::Range;
use std::path::{Path, PathBuf};

/// Parse a `START..END` byte range
///
/// # Errors
///
/// Returns an error if the range is malformed or `START > END`.
pub fn parse_range(input: &str) -> Result<Range<usize>> {
    let (start, end) = input
        .split_once("..")
        .with_context(|| format!("Invalid range '{input}'. Expected 'START..END'"))?;
    let start: usize = start
        .trim()
        .parse()
        .with_context(|| format!("Invalid range start in '{input}'"))?;
    let end: usize = end
        .trim()
        .parse()
        .with_context(|| format!("Invalid range end in '{input}'"))?;

    if start > end {
        bail!("Invalid range '{input}': start is after end");
    }
    Ok(start..end)
}

/// A file on disk with a selected byte range
///
/// Replacing the selection rewrites the file in place.
#[derive(Debug)]
pub struct FileRangeEditor {
    path: PathBuf,
    content: String,
    selection: Range<usize>,
}

impl FileRangeEditor {
    /// Open `path` selecting `range`, or the whole file when `range` is `None`
    ///
    /// The whole-file selection stops before a single trailing line ending.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the range does not fall
    /// on character boundaries inside the file.
    pub fn open(path: &Path, range: Option<Range<usize>>) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        let selection = range.unwrap_or_else(|| 0..content_end(&content));

        if selection.end > content.len()
            || !content.is_char_boundary(selection.start)
            || !content.is_char_boundary(selection.end)
        {
            bail!(
                "Range {}..{} is outside {} ({} bytes)",
                selection.start,
                selection.end,
                path.display(),
                content.len()
            );
        }

        Ok(Self {
            path: path.to_path_buf(),
            content,
            selection,
        })
    }

    /// Current buffer content
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl TextEditor for FileRangeEditor {
    type Error = anyhow::Error;

    fn selected_text(&self) -> Result<String> {
        Ok(self.content[self.selection.clone()].to_string())
    }

    fn replace_selection(&mut self, snippet: &Snippet) -> Result<()> {
        let replacement = snippet.to_plain_text();
        self.content.replace_range(self.selection.clone(), &replacement);
        self.selection = self.selection.start..self.selection.start + replacement.len();

        fs::write(&self.path, &self.content)
            .with_context(|| format!("Failed to write file: {}", self.path.display()))
    }
}

/// Byte length of `content` without one trailing `\n` or `\r\n`
fn content_end(content: &str) -> usize {
    content
        .strip_suffix('\n')
        .map_or(content, |s| s.strip_suffix('\r').unwrap_or(s))
        .len()
}

/// Selection read from stdin, replacement written to an output stream
#[derive(Debug)]
pub struct StdioEditor<W> {
    selection: String,
    output: W,
    snippet_syntax: bool,
}

impl<W: Write> StdioEditor<W> {
    /// Create an editor over an already-read selection
    ///
    /// A single trailing line ending is dropped from the selection and
    /// restored on output. With `snippet_syntax`, the replacement keeps its
    /// tab-stops for a snippet-aware host.
    pub fn new(selection: &str, output: W, snippet_syntax: bool) -> Self {
        let selection = &selection[..content_end(selection)];
        Self {
            selection: selection.to_string(),
            output,
            snippet_syntax,
        }
    }

    /// Consume the editor, returning the output stream
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<W: Write> TextEditor for StdioEditor<W> {
    type Error = anyhow::Error;

    fn selected_text(&self) -> Result<String> {
        Ok(self.selection.clone())
    }

    fn replace_selection(&mut self, snippet: &Snippet) -> Result<()> {
        let rendered = if self.snippet_syntax {
            snippet.to_snippet_string()
        } else {
            snippet.to_plain_text()
        };
        writeln!(self.output, "{rendered}").context("Failed to write replacement")?;
        self.output.flush().context("Failed to flush output")
    }
}
