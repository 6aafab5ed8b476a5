//! Console output for vue-doctor
//!
//! User-facing messages go through [`Logger`], which tags each message with a
//! [`Category`] and hands it to a [`Highlighter`] before writing. Errors and
//! warnings go to stderr; everything else to stdout.
//!
//! Internal diagnostics use `tracing` instead and never pass through here.

mod highlighter;

pub use highlighter::{Category, ConsoleHighlighter, Highlighter, PlainHighlighter, Stream};

use std::io::{self, Write};

/// Category-aware console writer
pub struct Logger {
    highlighter: Box<dyn Highlighter>,
    out: Box<dyn Write>,
    err: Box<dyn Write>,
}

impl Logger {
    /// Logger writing to the process stdout/stderr
    pub fn new(highlighter: impl Highlighter + 'static) -> Self {
        Self::with_writers(highlighter, io::stdout(), io::stderr())
    }

    /// Logger writing to arbitrary sinks
    pub fn with_writers(
        highlighter: impl Highlighter + 'static,
        out: impl Write + 'static,
        err: impl Write + 'static,
    ) -> Self {
        Self {
            highlighter: Box::new(highlighter),
            out: Box::new(out),
            err: Box::new(err),
        }
    }

    /// Colored logger unless `no_color` is set
    pub fn for_terminal(no_color: bool) -> Self {
        if no_color {
            Self::new(PlainHighlighter)
        } else {
            Self::new(ConsoleHighlighter)
        }
    }

    /// Unstyled line on stdout
    pub fn log(&mut self, message: &str) {
        write_line(&mut self.out, message);
    }

    pub fn error(&mut self, message: &str) {
        let text = self.highlighter.paint(Category::Error, message);
        write_line(&mut self.err, &text);
    }

    pub fn warn(&mut self, message: &str) {
        let text = self.highlighter.paint(Category::Warn, message);
        write_line(&mut self.err, &text);
    }

    pub fn success(&mut self, message: &str) {
        let text = self.highlighter.paint(Category::Success, message);
        write_line(&mut self.out, &text);
    }

    pub fn info(&mut self, message: &str) {
        let text = self.highlighter.paint(Category::Info, message);
        write_line(&mut self.out, &text);
    }

    pub fn dim(&mut self, message: &str) {
        let text = self.highlighter.paint(Category::Dim, message);
        write_line(&mut self.out, &text);
    }

    /// Stdout line styled like `category`, regardless of where that category
    /// is normally written
    pub fn styled(&mut self, category: Category, message: &str) {
        let text = self
            .highlighter
            .paint_for(category, Stream::Stdout, message);
        write_line(&mut self.out, &text);
    }

    /// Blank line on stdout
    pub fn break_line(&mut self) {
        write_line(&mut self.out, "");
    }
}

// Console output is best-effort: a closed pipe must not abort the run.
fn write_line(sink: &mut Box<dyn Write>, text: &str) {
    let _ = writeln!(sink, "{text}");
    let _ = sink.flush();
}
