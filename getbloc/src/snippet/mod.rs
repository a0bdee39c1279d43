//! Wrapping selected widget code in reactive builders
//!
//! A [`Snippet`] keeps the selected text apart from the fixed wrapper text so
//! it can be rendered either in host snippet syntax (tab-stops, escaping) or
//! as plain text with placeholder defaults filled in.

use std::fmt;

/// Tab-stop index used for stub bodies
const STUB_TAB_STOP: u32 = 3;

/// Code action kind reported for the wrap actions
pub const REFACTOR_KIND: &str = "refactor";

/// Fixed wrapper shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnippetShape {
    /// `Obx(() { ... return <child>; })`
    Obx,
    /// `ListenerWidget(controller, (state) { ... }, child: <child>)`
    ListenerWidget,
    /// `ObserverWidget(controller, (state) { ... return <child>; })`
    ObserverWidget,
}

impl SnippetShape {
    /// Every shape
    pub const ALL: [Self; 3] = [Self::Obx, Self::ListenerWidget, Self::ObserverWidget];

    /// Command id, e.g. `wrap-obx`
    #[must_use]
    pub const fn command(self) -> &'static str {
        match self {
            Self::Obx => "wrap-obx",
            Self::ListenerWidget => "wrap-listenerwidget",
            Self::ObserverWidget => "wrap-observerwidget",
        }
    }

    /// Human-readable action title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Obx => "Wrap with Obx",
            Self::ListenerWidget => "Wrap with ListenerWidget",
            Self::ObserverWidget => "Wrap with ObserverWidget",
        }
    }

    fn build(self, child: &str) -> Snippet {
        let mut snippet = Snippet::default();
        match self {
            Self::Obx => {
                snippet
                    .text("Obx(() {\n    final state = controller.state;\n    return ")
                    .embed(child)
                    .text(";\n  },\n)");
            }
            Self::ListenerWidget => {
                snippet
                    .text("ListenerWidget(\n  controller,\n  (state) {\n    ")
                    .placeholder(STUB_TAB_STOP, "// TODO: implement listener")
                    .text("\n  },\n  child: ")
                    .embed(child)
                    .text(",\n)");
            }
            Self::ObserverWidget => {
                snippet
                    .text("ObserverWidget(\n  controller,\n  (state) {\n    ")
                    .placeholder(
                        STUB_TAB_STOP,
                        "// TODO: return widget here based on Controller's state",
                    )
                    .text("\n    return ")
                    .embed(child)
                    .text(";\n  },\n)");
            }
        }
        snippet
    }
}

impl fmt::Display for SnippetShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(&'static str),
    Embedded(String),
    Placeholder { index: u32, default: &'static str },
}

/// Rendered wrapper around a piece of selected code
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snippet {
    segments: Vec<Segment>,
}

impl Snippet {
    fn text(&mut self, text: &'static str) -> &mut Self {
        self.segments.push(Segment::Text(text));
        self
    }

    fn embed(&mut self, child: &str) -> &mut Self {
        self.segments.push(Segment::Embedded(child.to_string()));
        self
    }

    fn placeholder(&mut self, index: u32, default: &'static str) -> &mut Self {
        self.segments.push(Segment::Placeholder { index, default });
        self
    }

    /// Render in host snippet syntax
    ///
    /// Stub positions become `${n:default}` tab-stops. `$`, `}` and `\` in
    /// the embedded code are escaped so the host inserts them literally.
    #[must_use]
    pub fn to_snippet_string(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Text(text) => (*text).to_string(),
                Segment::Embedded(child) => escape_snippet(child),
                Segment::Placeholder { index, default } => {
                    format!("${{{index}:{}}}", escape_snippet(default))
                }
            })
            .collect()
    }

    /// Render with placeholder defaults inline
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Text(text) | Segment::Placeholder { default: text, .. } => *text,
                Segment::Embedded(child) => child.as_str(),
            })
            .collect()
    }
}

fn escape_snippet(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '$' | '}' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Wrap `selected` in `shape`
///
/// Returns `None` when the selection is empty or only whitespace. The
/// selection is embedded verbatim.
///
/// # Examples
///
/// ```
/// # use getbloc::snippet::{wrap, SnippetShape};
/// let snippet = wrap("Text('hi')", SnippetShape::Obx).unwrap();
/// assert!(snippet.to_plain_text().contains("return Text('hi');"));
/// assert!(wrap("", SnippetShape::Obx).is_none());
/// ```
#[must_use]
pub fn wrap(selected: &str, shape: SnippetShape) -> Option<Snippet> {
    if selected.trim().is_empty() {
        return None;
    }
    Some(shape.build(selected))
}

/// Editor buffer port used by the wrap commands
pub trait TextEditor {
    /// Error raised by the host
    type Error;

    /// Text of the current selection (empty if nothing is selected)
    ///
    /// # Errors
    ///
    /// Returns the host's error if the selection cannot be read.
    fn selected_text(&self) -> Result<String, Self::Error>;

    /// Replace the current selection with `snippet`
    ///
    /// # Errors
    ///
    /// Returns the host's error if the buffer cannot be edited.
    fn replace_selection(&mut self, snippet: &Snippet) -> Result<(), Self::Error>;
}

/// Wrap the editor's current selection in place
///
/// Returns `Ok(false)` without touching the buffer when the selection is
/// empty.
///
/// # Errors
///
/// Propagates host errors from reading or editing the buffer.
pub fn wrap_selection<E: TextEditor>(editor: &mut E, shape: SnippetShape) -> Result<bool, E::Error> {
    let selected = editor.selected_text()?;
    let Some(snippet) = wrap(&selected, shape) else {
        tracing::debug!(%shape, "Empty selection, nothing to wrap");
        return Ok(false);
    };
    editor.replace_selection(&snippet)?;
    Ok(true)
}

/// Quick-fix entry offered for a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeAction {
    /// Title shown to the user
    pub title: &'static str,
    /// Command run when chosen
    pub command: &'static str,
    /// Action kind
    pub kind: &'static str,
}

/// Wrap actions available for `selected`
///
/// `Obx` and `ListenerWidget` are offered whenever [`wrap`] would accept the
/// selection; the observer wrapper is only reachable as a command.
#[must_use]
pub fn code_actions(selected: &str) -> Vec<CodeAction> {
    if selected.trim().is_empty() {
        return Vec::new();
    }
    [SnippetShape::Obx, SnippetShape::ListenerWidget]
        .into_iter()
        .map(|shape| CodeAction {
            title: shape.title(),
            command: shape.command(),
            kind: REFACTOR_KIND,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obx_plain() {
        let snippet = wrap("Text('hi')", SnippetShape::Obx).unwrap();
        assert_eq!(
            snippet.to_plain_text(),
            "Obx(() {\n    final state = controller.state;\n    return Text('hi');\n  },\n)"
        );
        assert_eq!(snippet.to_snippet_string(), snippet.to_plain_text());
    }

    #[test]
    fn test_listener_widget_snippet_syntax() {
        let snippet = wrap("Text('hi')", SnippetShape::ListenerWidget).unwrap();
        assert_eq!(
            snippet.to_snippet_string(),
            "ListenerWidget(\n  controller,\n  (state) {\n    ${3:// TODO: implement listener}\n  },\n  child: Text('hi'),\n)"
        );
        assert!(snippet.to_plain_text().contains("    // TODO: implement listener\n"));
    }

    #[test]
    fn test_observer_widget_returns_child() {
        let snippet = wrap("const Counter()", SnippetShape::ObserverWidget).unwrap();
        let text = snippet.to_plain_text();
        assert!(text.starts_with("ObserverWidget(\n  controller,\n  (state) {\n"));
        assert!(text.contains("// TODO: return widget here based on Controller's state\n    return const Counter();"));
        assert!(snippet.to_snippet_string().contains("${3:// TODO: return widget here"));
    }

    #[test]
    fn test_embedded_text_is_escaped_in_snippet_syntax() {
        let snippet = wrap("Text('${count}')", SnippetShape::Obx).unwrap();
        assert!(snippet.to_snippet_string().contains("return Text('\\${count\\}');"));
        assert!(snippet.to_plain_text().contains("return Text('${count}');"));
    }

    #[test]
    fn test_empty_selection_is_noop() {
        for shape in SnippetShape::ALL {
            assert!(wrap("", shape).is_none());
            assert!(wrap("  \n", shape).is_none());
        }
    }

    struct Buffer {
        selection: String,
        replaced: Option<String>,
    }

    impl TextEditor for Buffer {
        type Error = std::convert::Infallible;

        fn selected_text(&self) -> Result<String, Self::Error> {
            Ok(self.selection.clone())
        }

        fn replace_selection(&mut self, snippet: &Snippet) -> Result<(), Self::Error> {
            self.replaced = Some(snippet.to_plain_text());
            Ok(())
        }
    }

    #[test]
    fn test_wrap_selection_mutates_only_non_empty() {
        let mut empty = Buffer {
            selection: String::new(),
            replaced: None,
        };
        assert!(!wrap_selection(&mut empty, SnippetShape::Obx).unwrap());
        assert!(empty.replaced.is_none());

        let mut buffer = Buffer {
            selection: "Text('hi')".to_string(),
            replaced: None,
        };
        assert!(wrap_selection(&mut buffer, SnippetShape::ListenerWidget).unwrap());
        assert!(buffer.replaced.unwrap().contains("child: Text('hi'),"));
    }

    #[test]
    fn test_code_actions() {
        assert!(code_actions("").is_empty());
        assert!(code_actions(" \n\t").is_empty());

        let actions = code_actions("Text('hi')");
        let titles: Vec<_> = actions.iter().map(|action| action.title).collect();
        assert_eq!(titles, vec!["Wrap with Obx", "Wrap with ListenerWidget"]);
        assert!(actions.iter().all(|action| action.kind == REFACTOR_KIND));
    }
}
