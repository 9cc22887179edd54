//! core::path
//!
//! Canonical path rendering and parsing.
//!
//! # Format
//!
//! A path is a `.`-separated list of segments. Each segment is either a bare
//! name (`layout`) or a name with a bracketed selector (`screen[1]`). The
//! empty path addresses the graph root.
//!
//! ```text
//! screen[1].layout          object path
//! group[work].info          call on a selected group
//! window[main.py].kill      selectors may contain dots
//! ```
//!
//! # Round Trip
//!
//! [`format_path`] and [`parse_path`] are inverses for every path whose
//! selectors contain neither `[` nor `]`.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::SelectorStep;

/// Errors from parsing a textual path.
///
/// Positions are byte offsets into the trimmed input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("empty path segment at position {position}")]
    EmptySegment { position: usize },

    #[error("selector without a name at position {position}")]
    EmptyName { position: usize },

    #[error("unclosed selector starting at position {position}")]
    UnclosedSelector { position: usize },

    #[error("nested selector at position {position}")]
    NestedSelector { position: usize },

    #[error("unexpected ']' at position {position}")]
    UnexpectedClose { position: usize },

    #[error("expected '.' after selector at position {position}")]
    TrailingInput { position: usize },
}

/// One parsed, not yet resolved, path segment.
///
/// The name may be an object kind or a command name; which one it is depends
/// on where in the graph it is navigated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSegment {
    pub name: String,
    pub selector: Option<String>,
}

impl PathSegment {
    pub fn new(name: impl Into<String>, selector: Option<String>) -> Self {
        Self {
            name: name.into(),
            selector,
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.selector {
            Some(selector) => write!(f, "{}[{}]", self.name, selector),
            None => f.write_str(&self.name),
        }
    }
}

impl From<SelectorStep> for PathSegment {
    fn from(step: SelectorStep) -> Self {
        Self::new(step.kind.as_str(), step.selector)
    }
}

/// Render a selector chain as a canonical dotted path.
///
/// # Example
///
/// ```
/// use cmdgraph::core::path::format_path;
/// use cmdgraph::core::types::{ObjectKind, SelectorStep};
///
/// let steps = [
///     SelectorStep::selected(ObjectKind::Screen, "1"),
///     SelectorStep::bare(ObjectKind::Layout),
/// ];
/// assert_eq!(format_path(&steps), "screen[1].layout");
/// assert_eq!(format_path(&[]), "");
/// ```
pub fn format_path(steps: &[SelectorStep]) -> String {
    steps
        .iter()
        .map(|step| step.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

/// Parse a dotted path into segments.
///
/// Leading and trailing whitespace is ignored; an empty path yields no
/// segments.
///
/// # Example
///
/// ```
/// use cmdgraph::core::path::parse_path;
///
/// let segments = parse_path("screen[1].layout.next").unwrap();
/// assert_eq!(segments.len(), 3);
/// assert_eq!(segments[0].name, "screen");
/// assert_eq!(segments[0].selector.as_deref(), Some("1"));
/// assert_eq!(segments[2].name, "next");
///
/// assert!(parse_path("screen..layout").is_err());
/// ```
pub fn parse_path(input: &str) -> Result<Vec<PathSegment>, PathError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let mut segments = Vec::new();
    let mut name = String::new();
    let mut selector: Option<String> = None;
    let mut segment_start = 0;
    let mut selector_start = 0;
    let mut in_selector = false;
    let mut closed = false;

    for (pos, c) in input.char_indices() {
        if in_selector {
            match c {
                ']' => {
                    in_selector = false;
                    closed = true;
                }
                '[' => return Err(PathError::NestedSelector { position: pos }),
                _ => selector.get_or_insert_with(String::new).push(c),
            }
            continue;
        }

        if closed && c != '.' {
            return Err(PathError::TrailingInput { position: pos });
        }

        match c {
            '.' => {
                if name.is_empty() {
                    return Err(PathError::EmptySegment {
                        position: segment_start,
                    });
                }
                segments.push(PathSegment::new(
                    std::mem::take(&mut name),
                    selector.take(),
                ));
                closed = false;
                segment_start = pos + 1;
            }
            '[' => {
                if name.is_empty() {
                    return Err(PathError::EmptyName { position: pos });
                }
                in_selector = true;
                selector_start = pos;
                selector = Some(String::new());
            }
            ']' => return Err(PathError::UnexpectedClose { position: pos }),
            _ => name.push(c),
        }
    }

    if in_selector {
        return Err(PathError::UnclosedSelector {
            position: selector_start,
        });
    }
    if name.is_empty() {
        return Err(PathError::EmptySegment {
            position: segment_start,
        });
    }
    segments.push(PathSegment::new(name, selector));

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ObjectKind;

    fn seg(name: &str, selector: Option<&str>) -> PathSegment {
        PathSegment::new(name, selector.map(str::to_string))
    }

    mod format {
        use super::*;

        #[test]
        fn empty_chain() {
            assert_eq!(format_path(&[]), "");
        }

        #[test]
        fn mixed_chain() {
            let steps = vec![
                SelectorStep::selected(ObjectKind::Screen, "1"),
                SelectorStep::bare(ObjectKind::Layout),
            ];
            assert_eq!(format_path(&steps), "screen[1].layout");
        }

        #[test]
        fn single_bare_step() {
            assert_eq!(format_path(&[SelectorStep::bare(ObjectKind::Bar)]), "bar");
        }
    }

    mod parse {
        use super::*;

        #[test]
        fn empty_input_is_root() {
            assert!(parse_path("").unwrap().is_empty());
            assert!(parse_path("   ").unwrap().is_empty());
        }

        #[test]
        fn bare_names() {
            assert_eq!(
                parse_path("group.layout.next").unwrap(),
                vec![seg("group", None), seg("layout", None), seg("next", None)]
            );
        }

        #[test]
        fn selectors() {
            assert_eq!(
                parse_path("screen[1].layout").unwrap(),
                vec![seg("screen", Some("1")), seg("layout", None)]
            );
        }

        #[test]
        fn selector_may_contain_dots() {
            assert_eq!(
                parse_path("window[main.py].kill").unwrap(),
                vec![seg("window", Some("main.py")), seg("kill", None)]
            );
        }

        #[test]
        fn empty_selector_is_kept() {
            assert_eq!(parse_path("group[]").unwrap(), vec![seg("group", Some(""))]);
        }

        #[test]
        fn surrounding_whitespace_is_trimmed() {
            assert_eq!(parse_path("  status \n").unwrap(), vec![seg("status", None)]);
        }

        #[test]
        fn double_dot() {
            assert_eq!(
                parse_path("screen..layout"),
                Err(PathError::EmptySegment { position: 7 })
            );
        }

        #[test]
        fn leading_dot() {
            assert_eq!(
                parse_path(".screen"),
                Err(PathError::EmptySegment { position: 0 })
            );
        }

        #[test]
        fn trailing_dot() {
            assert_eq!(
                parse_path("screen."),
                Err(PathError::EmptySegment { position: 7 })
            );
        }

        #[test]
        fn selector_without_name() {
            assert_eq!(parse_path("[1]"), Err(PathError::EmptyName { position: 0 }));
        }

        #[test]
        fn unclosed_selector() {
            assert_eq!(
                parse_path("screen[1"),
                Err(PathError::UnclosedSelector { position: 6 })
            );
        }

        #[test]
        fn nested_selector() {
            assert_eq!(
                parse_path("screen[a[b]]"),
                Err(PathError::NestedSelector { position: 8 })
            );
        }

        #[test]
        fn stray_close() {
            assert_eq!(
                parse_path("screen]"),
                Err(PathError::UnexpectedClose { position: 6 })
            );
        }

        #[test]
        fn text_after_selector() {
            assert_eq!(
                parse_path("screen[1]layout"),
                Err(PathError::TrailingInput { position: 9 })
            );
        }
    }

    #[test]
    fn formatted_paths_parse_back() {
        let steps = vec![
            SelectorStep::selected(ObjectKind::Window, "0x2a"),
            SelectorStep::bare(ObjectKind::Group),
            SelectorStep::selected(ObjectKind::Screen, "0"),
        ];
        let parsed = parse_path(&format_path(&steps)).unwrap();
        let expected: Vec<PathSegment> = steps.into_iter().map(PathSegment::from).collect();
        assert_eq!(parsed, expected);
    }
}
