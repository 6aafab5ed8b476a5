//! Text highlighting by semantic category

use console::style;

/// Semantic category of a console message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Error,
    Warn,
    Success,
    Info,
    Dim,
}

/// Output stream a styled message is headed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Category {
    /// Stream the category is written to by default
    pub fn stream(self) -> Stream {
        match self {
            Category::Error | Category::Warn => Stream::Stderr,
            Category::Success | Category::Info | Category::Dim => Stream::Stdout,
        }
    }
}

/// Turns plain text into styled text for a category
pub trait Highlighter {
    /// Style `text` for `category`, knowing it will be written to `stream`
    fn paint_for(&self, category: Category, stream: Stream, text: &str) -> String;

    fn paint(&self, category: Category, text: &str) -> String {
        self.paint_for(category, category.stream(), text)
    }
}

/// ANSI styling via `console`.
///
/// Colours are dropped when the target stream is not a colour terminal or
/// `CLICOLOR=0` is set, and forced on by `CLICOLOR_FORCE=1`. `NO_COLOR` and
/// `--no-color` are handled by the CLI choosing [`PlainHighlighter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleHighlighter;

impl Highlighter for ConsoleHighlighter {
    fn paint_for(&self, category: Category, stream: Stream, text: &str) -> String {
        let styled = match category {
            Category::Error => style(text).red(),
            Category::Warn => style(text).yellow(),
            Category::Success => style(text).green(),
            Category::Info => style(text).cyan(),
            Category::Dim => style(text).dim(),
        };
        // colour support is checked against the stream actually written to
        match stream {
            Stream::Stderr => styled.for_stderr().to_string(),
            Stream::Stdout => styled.for_stdout().to_string(),
        }
    }
}

/// No styling at all (`--no-color`, `NO_COLOR`, tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn paint_for(&self, _category: Category, _stream: Stream, text: &str) -> String {
        text.to_string()
    }
}
