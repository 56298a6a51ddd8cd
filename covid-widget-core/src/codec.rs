//! Textual list grammar for the persisted widget state.
//!
//! The persisted format is a small S-expression-like encoding: an atom is
//! any string containing no parentheses, and a list of N encoded children
//! renders as `(` + children joined by `,` + `)`. Every structured value in
//! [`crate::state`] encodes itself as a list of its encoded children, so
//! the grammar nests: `((1),(IN),(CONFIRMED),((1),(2),(1)))`.
//!
//! [`decode_list`] parses exactly one level: it strips one outer pair of
//! parentheses and returns the raw encoded substrings of the top-level
//! children, unparsed. Each structured type recurses on the substrings it
//! owns. Commas inside nested children are handled by tracking parenthesis
//! depth in a single scan; atoms never contain parentheses, so no escaping
//! is needed and the output is identical to the original split-then-merge
//! repair loop for every well-formed input.

use thiserror::Error;

/// A persisted state string could not be decoded.
///
/// Every variant means "corrupt state": the widget never substitutes a
/// default for a value it cannot decode.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Parentheses in the encoded string do not balance.
    #[error("unbalanced parentheses in encoded value {0:?}")]
    Unbalanced(String),

    /// A container decoded to fewer children than its field count.
    #[error("{container} expects {expected} fields, found {found}")]
    MissingFields {
        container: &'static str,
        expected: usize,
        found: usize,
    },

    /// A leaf identifier is not in its variant table.
    #[error("unknown {kind} identifier {identifier:?}")]
    UnknownIdentifier {
        kind: &'static str,
        identifier: String,
    },

    /// A numeric leaf identifier did not parse as a number.
    #[error("{kind} identifier {value:?} is not a number")]
    NotANumber { kind: &'static str, value: String },

    /// A location identifier is not in the static catalog.
    #[error("location {identifier:?} is not in the catalog")]
    UnknownLocation { identifier: String },
}

/// Encode children as a comma-joined, parenthesized list.
pub fn encode_list<I, S>(children: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::from("(");
    for (i, child) in children.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(child.as_ref());
    }
    out.push(')');
    out
}

/// Decode one nesting level: strip the outer parentheses and split the
/// interior on top-level commas, returning the raw child substrings.
///
/// Input without an outer `(`…`)` pair is treated as already-stripped
/// interior (the original tolerated this). An empty interior decodes to a
/// single empty child, matching `encode_list([""])`.
pub fn decode_list(encoded: &str) -> Result<Vec<String>, DecodeError> {
    let interior = match encoded.strip_prefix('(') {
        Some(rest) => match rest.strip_suffix(')') {
            Some(interior) => interior,
            None => return Err(DecodeError::Unbalanced(encoded.to_string())),
        },
        None => encoded,
    };

    let mut children = Vec::new();
    let mut current = String::new();
    let mut depth: u32 = 0;

    for ch in interior.chars() {
        match ch {
            '(' => {
                depth += 1;
                current.push(ch);
            }
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| DecodeError::Unbalanced(encoded.to_string()))?;
                current.push(ch);
            }
            ',' if depth == 0 => children.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }

    if depth != 0 {
        return Err(DecodeError::Unbalanced(encoded.to_string()));
    }
    children.push(current);
    Ok(children)
}

/// Decode one level and take the first `N` children in encode order.
///
/// Containers read their fields by fixed, documented position; fewer
/// children than fields is corrupt state, extra children are ignored so a
/// future schema version can append fields without breaking old readers.
pub fn decode_fields<const N: usize>(
    encoded: &str,
    container: &'static str,
) -> Result<[String; N], DecodeError> {
    let children = decode_list(encoded)?;
    if children.len() < N {
        return Err(DecodeError::MissingFields {
            container,
            expected: N,
            found: children.len(),
        });
    }
    let mut children = children.into_iter();
    Ok(std::array::from_fn(|_| children.next().unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_joins_and_wraps() {
        assert_eq!(encode_list(["a", "b", "c"]), "(a,b,c)");
        assert_eq!(encode_list(["1"]), "(1)");
        assert_eq!(encode_list(["(x)", "(y,z)"]), "((x),(y,z))");
    }

    #[test]
    fn test_decode_flat_list() {
        assert_eq!(
            decode_list("(a,b,c)"),
            Ok(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
    }

    #[test]
    fn test_decode_keeps_nested_children_unparsed() {
        assert_eq!(
            decode_list("(a,(b,c),d)"),
            Ok(vec!["a".to_string(), "(b,c)".to_string(), "d".to_string()])
        );
        assert_eq!(
            decode_list("(1,(2,(3,4)))"),
            Ok(vec!["1".to_string(), "(2,(3,4))".to_string()])
        );
    }

    #[test]
    fn test_decode_deep_nesting() {
        // Depth 4: the splitter must never cut inside a nested child.
        let encoded = "((a,(b,(c,d))),(e),(f,(g,h)))";
        assert_eq!(
            decode_list(encoded),
            Ok(vec![
                "(a,(b,(c,d)))".to_string(),
                "(e)".to_string(),
                "(f,(g,h))".to_string(),
            ])
        );
    }

    #[test]
    fn test_decode_single_child() {
        assert_eq!(decode_list("(CONFIRMED)"), Ok(vec!["CONFIRMED".to_string()]));
    }

    #[test]
    fn test_decode_empty_interior() {
        assert_eq!(decode_list("()"), Ok(vec![String::new()]));
    }

    #[test]
    fn test_decode_unwrapped_input_is_interior() {
        assert_eq!(decode_list("a,b"), Ok(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_decode_rejects_unbalanced() {
        assert!(matches!(decode_list("(a,(b"), Err(DecodeError::Unbalanced(_))));
        assert!(matches!(decode_list("(a))("), Err(DecodeError::Unbalanced(_))));
        assert!(matches!(decode_list("(a,b"), Err(DecodeError::Unbalanced(_))));
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let children = ["(1)", "(IN)", "(CONFIRMED)", "((1),(2),(1))"];
        let encoded = encode_list(children);
        assert_eq!(encoded, "((1),(IN),(CONFIRMED),((1),(2),(1)))");

        let decoded = decode_list(&encoded).unwrap();
        assert_eq!(decoded, children);
    }

    #[test]
    fn test_decode_fields_exact() {
        let [a, b] = decode_fields::<2>("(x,(y,z))", "pair").unwrap();
        assert_eq!(a, "x");
        assert_eq!(b, "(y,z)");
    }

    #[test]
    fn test_decode_fields_ignores_extras() {
        let [a] = decode_fields::<1>("(x,y,z)", "leaf").unwrap();
        assert_eq!(a, "x");
    }

    #[test]
    fn test_decode_fields_too_few() {
        let err = decode_fields::<4>("(a,b)", "widget state").unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingFields {
                container: "widget state",
                expected: 4,
                found: 2,
            }
        );
    }
}
