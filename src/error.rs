//! Error types for coercion failures.
//!
//! Uses `thiserror` for ergonomic error definition. Every failure carries
//! the caller-supplied [`Ctx`] annotation so error messages can be traced
//! back to the call site that requested the coercion.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::kind::Kind;

/// The error type for coercion operations.
#[derive(Debug)]
pub struct Error {
    /// The kind of failure that occurred.
    pub kind: ErrorKind,
    /// Caller-supplied annotation, when one was provided.
    pub ctx: Option<Ctx>,
}

impl Error {
    /// Creates a new error of the given kind, annotated with `ctx`.
    #[must_use]
    pub fn new(ctx: &Ctx, kind: ErrorKind) -> Self {
        Self {
            kind,
            ctx: if ctx.is_empty() {
                None
            } else {
                Some(ctx.clone())
            },
        }
    }

    /// Creates a grammar-mismatch error: `text` is not a valid literal of
    /// the target type.
    #[must_use]
    pub fn invalid_text(ctx: &Ctx, target: &'static str, text: impl Into<String>) -> Self {
        Self::new(
            ctx,
            ErrorKind::InvalidText {
                target,
                text: text.into(),
            },
        )
    }

    /// Creates a type-mismatch error: values of `actual` kind cannot
    /// produce the target type by any resolution path.
    #[must_use]
    pub fn unsupported(ctx: &Ctx, target: &'static str, actual: Kind) -> Self {
        Self::new(ctx, ErrorKind::Unsupported { target, actual })
    }

    /// Creates a range error: the numeric value does not fit the target
    /// width.
    #[must_use]
    pub fn out_of_range(ctx: &Ctx, target: &'static str, value: impl Into<String>) -> Self {
        Self::new(
            ctx,
            ErrorKind::OutOfRange {
                target,
                value: value.into(),
            },
        )
    }

    /// Wraps a per-element failure with the index of the offending element.
    #[must_use]
    pub fn element(ctx: &Ctx, index: usize, source: Error) -> Self {
        Self::new(
            ctx,
            ErrorKind::Element {
                index,
                source: Box::new(source),
            },
        )
    }

    /// Creates a time-parse error.
    #[must_use]
    pub fn invalid_time(
        ctx: &Ctx,
        text: impl Into<String>,
        format: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(
            ctx,
            ErrorKind::InvalidTime {
                text: text.into(),
                format: format.into(),
                message: message.into(),
            },
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(ctx) = &self.ctx {
            write!(f, " ({ctx})")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Element { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// Categorized failure kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A string was obtained but fails the target type's textual grammar.
    #[error("cannot parse {text:?} as {target}")]
    InvalidText {
        /// The target type name.
        target: &'static str,
        /// The rejected textual form.
        text: String,
    },

    /// The value's concrete kind cannot produce the target type.
    #[error("unsupported type {actual} for {target}")]
    Unsupported {
        /// The target type name.
        target: &'static str,
        /// The kind of the rejected value.
        actual: Kind,
    },

    /// A numeric value does not fit the target width.
    #[error("value {value} out of range for {target}")]
    OutOfRange {
        /// The target type name.
        target: &'static str,
        /// Textual rendering of the out-of-range value.
        value: String,
    },

    /// An element of a collection failed its per-element coercion.
    #[error("element {index}: {source}")]
    Element {
        /// Zero-based index of the failing element.
        index: usize,
        /// The underlying failure.
        #[source]
        source: Box<Error>,
    },

    /// A textual value does not match the requested time format.
    #[error("cannot parse {text:?} with format {format:?}: {message}")]
    InvalidTime {
        /// The rejected textual form.
        text: String,
        /// The strftime format string.
        format: String,
        /// The underlying parser message.
        message: String,
    },
}

/// Caller-supplied annotation threaded through every coercion.
///
/// Purely descriptive: it enriches error messages with tracing metadata and
/// never influences execution (nothing blocks, so there is nothing to
/// cancel).
#[derive(Debug, Clone, Default)]
pub struct Ctx {
    /// Logical scope of the caller (e.g. a config key or document path).
    pub scope: Option<Arc<str>>,
    /// Call frames, outermost first.
    pub frames: Vec<Arc<str>>,
}

impl Ctx {
    /// Creates an empty annotation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the logical scope.
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<Arc<str>>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Adds a call frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<Arc<str>>) -> Self {
        self.frames.push(frame.into());
        self
    }

    /// Returns true if no annotation was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scope.is_none() && self.frames.is_empty()
    }
}

impl fmt::Display for Ctx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scope) = &self.scope {
            write!(f, "at {scope}")?;
        }
        for (i, frame) in self.frames.iter().enumerate() {
            if i > 0 || self.scope.is_some() {
                write!(f, ", ")?;
            }
            write!(f, "in {frame}")?;
        }
        Ok(())
    }
}
