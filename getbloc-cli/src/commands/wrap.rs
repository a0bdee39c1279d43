//! Wrap commands (`wrap-obx`, `wrap-listenerwidget`, `wrap-observerwidget`)
//! and the code action listing

use anyhow::{Context, Result};
use clap::Args;
use getbloc::snippet::{code_actions, wrap_selection, CodeAction, SnippetShape};
use std::io::{Read, Write};
use std::path::PathBuf;

use crate::host::{parse_range, FileRangeEditor, StdioEditor};

/// Where the selection comes from
#[derive(Debug, Clone, Default, Args)]
pub struct WrapArgs {
    /// Rewrite this file in place instead of reading stdin
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Selected byte range in `--file`, as `START..END` (default: whole file)
    #[arg(short, long, requires = "file")]
    pub range: Option<String>,

    /// Print host snippet syntax (tab-stops) instead of plain text
    #[arg(long, conflicts_with = "file")]
    pub snippet: bool,
}

/// One wrap invocation
#[derive(Debug, Clone)]
pub struct WrapCommand {
    shape: SnippetShape,
    args: WrapArgs,
}

impl WrapCommand {
    /// Command wrapping the selection in `shape`
    #[must_use]
    pub const fn new(shape: SnippetShape, args: WrapArgs) -> Self {
        Self { shape, args }
    }

    /// Execute against the file in `--file`, or against `input`/`output`
    ///
    /// Returns whether anything was wrapped; an empty selection is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is invalid or the buffer cannot be
    /// read or written.
    pub fn execute<R: Read, W: Write>(&self, mut input: R, output: W) -> Result<bool> {
        if let Some(path) = &self.args.file {
            let range = self.args.range.as_deref().map(parse_range).transpose()?;
            let mut editor = FileRangeEditor::open(path, range)?;
            let wrapped = wrap_selection(&mut editor, self.shape)?;
            if wrapped {
                tracing::info!(path = %path.display(), shape = %self.shape, "Wrapped selection");
            }
            return Ok(wrapped);
        }

        let mut selection = String::new();
        input
            .read_to_string(&mut selection)
            .context("Failed to read selection from stdin")?;
        let mut editor = StdioEditor::new(&selection, output, self.args.snippet);
        wrap_selection(&mut editor, self.shape)
    }
}

/// List the wrap actions available for the selection on `input`
///
/// # Errors
///
/// Returns an error if the input cannot be read or the output written.
pub fn list_code_actions<R: Read, W: Write>(mut input: R, mut output: W) -> Result<Vec<CodeAction>> {
    let mut selection = String::new();
    input
        .read_to_string(&mut selection)
        .context("Failed to read selection from stdin")?;

    let actions = code_actions(selection.trim_end_matches(['\r', '\n']));
    for action in &actions {
        writeln!(output, "{}\t{}\t{}", action.command, action.kind, action.title)?;
    }
    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdin_wrap_plain() {
        let command = WrapCommand::new(SnippetShape::Obx, WrapArgs::default());
        let mut output = Vec::new();

        assert!(command.execute("Text('hi')\n".as_bytes(), &mut output).unwrap());
        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("Obx(() {"));
        assert!(text.contains("return Text('hi');"));
    }

    #[test]
    fn test_stdin_empty_is_noop() {
        let command = WrapCommand::new(SnippetShape::ObserverWidget, WrapArgs::default());
        let mut output = Vec::new();

        assert!(!command.execute("".as_bytes(), &mut output).unwrap());
        assert!(output.is_empty());
    }

    #[test]
    fn test_list_code_actions() {
        let mut output = Vec::new();
        let actions = list_code_actions("Text('hi')".as_bytes(), &mut output).unwrap();
        assert_eq!(actions.len(), 2);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("wrap-obx\trefactor\tWrap with Obx"));

        let mut output = Vec::new();
        assert!(list_code_actions("\n".as_bytes(), &mut output).unwrap().is_empty());
        assert!(output.is_empty());
    }
}
