//! User-facing frac diagnostics.
//!
//! Renders [evaluation errors][crate::eval::EvalError] as annotated source snippets.

use crate::eval::{EvalError, Span};

use annotate_snippets::{
    display_list::{DisplayList, FormatOptions},
    snippet::{Annotation, AnnotationType, Slice, Snippet, SourceAnnotation},
};

pub fn sanitize_source_for_diagnostics(source: &str) -> String {
    let source = source.to_owned();
    source + " " // we might emit an EOF diagnostic, so add extra space.
}

/// Spans are byte offsets, but snippets are annotated by character position.
fn char_range(source: &str, span: Span) -> (usize, usize) {
    let lo = source[..span.lo].chars().count();
    (lo, lo + source[span.lo..span.hi].chars().count())
}

pub fn emit_eval_error(source: &str, error: &EvalError, color: bool) -> String {
    let source = sanitize_source_for_diagnostics(source);
    let title = error.kind.to_string();
    let snippet = Snippet {
        title: Some(Annotation {
            label: Some(title.as_str()),
            id: None,
            annotation_type: AnnotationType::Error,
        }),
        footer: vec![],
        slices: vec![Slice {
            source: &source,
            line_start: 1,
            origin: None,
            fold: true,
            annotations: vec![SourceAnnotation {
                label: error.kind.label(),
                annotation_type: AnnotationType::Error,
                range: char_range(&source, error.span),
            }],
        }],
        opt: FormatOptions {
            color,
            ..Default::default()
        },
    };
    format!("{}", DisplayList::from(snippet))
}
