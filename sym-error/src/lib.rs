//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that carries one of them along with the source spans it
//! points to.

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::Debug, ops::Range};

#[cfg(test)]
extern crate self as sym_error;

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send + Sync {
    /// Returns the error kind as [`Any`], so that callers can recover the concrete kind.
    fn as_any(&self) -> &dyn Any;

    /// Returns the message shown at the top of the report.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
///
/// Errors that did not originate from source code (for example, errors that occur while
/// evaluating an expression tree) have no spans.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns the kind of this error as `K`, if it is one.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Renders the report for this error against the given source code.
    ///
    /// The output contains the ANSI color codes `ariadne` emits.
    pub fn report_to_string(&self, src_id: &str, src: &str) -> String {
        let mut buf = Vec::new();
        // writing into a `Vec` cannot fail
        let _ = self.build_report(src_id).write((src_id, Source::from(src)), &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Writes the message of the error's kind, without the spans or labels.
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind.message())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use ariadne::Fmt;
    use super::*;
    use sym_attrs::ErrorKind;

    #[derive(Debug, ErrorKind)]
    #[error(
        message = format!("`{}` is not allowed here", name),
        labels = ["this name".to_string(), format!("conflicts with {}", "this one".fg(EXPR))],
        help = "rename one of them",
    )]
    struct Conflict {
        name: String,
    }

    #[derive(Debug, ErrorKind)]
    #[error(message = "nothing to point at", labels = ["unused"])]
    struct Spanless;

    #[test]
    fn downcast_kind() {
        let err = Error::new(vec![0..1, 4..5], Conflict { name: "x".to_string() });
        assert!(err.is::<Conflict>());
        assert!(!err.is::<Spanless>());
        assert_eq!(err.downcast_ref::<Conflict>().map(|c| c.name.as_str()), Some("x"));
    }

    #[test]
    fn display_message() {
        let err = Error::new(vec![0..1, 4..5], Conflict { name: "x".to_string() });
        assert_eq!(err.to_string(), "`x` is not allowed here");
        assert_eq!(Error::new(vec![], Spanless).to_string(), "nothing to point at");
    }

    #[test]
    fn report_text() {
        let err = Error::new(vec![0..1, 4..5], Conflict { name: "x".to_string() });
        let report = err.report_to_string("input", "x + x");
        let stripped = String::from_utf8(strip_ansi_escapes::strip(report)).unwrap();
        assert!(stripped.contains("`x` is not allowed here"));
        assert!(stripped.contains("this name"));
        assert!(stripped.contains("conflicts with this one"));
        assert!(stripped.contains("rename one of them"));
    }

    #[test]
    fn report_without_spans() {
        let err = Error::new(vec![], Spanless);
        let report = err.report_to_string("input", "a/0");
        let stripped = String::from_utf8(strip_ansi_escapes::strip(report)).unwrap();
        assert!(stripped.contains("nothing to point at"));
    }
}
