//! Trace-file decoding: one agent trajectory per line.
//!
//! ```text
//! Agent 0: (0,0)->(0,1)->(1,1)
//! Agent 1: (2,0)->(1,0)
//! ```
//!
//! Everything before the first `:` is an ignored label; the payload is
//! split on `->` and each segment decodes as a parenthesised
//! `(row,col)` pair. Lines without at least two segments carry no
//! trajectory and are skipped silently; agent indices are dense over
//! the lines that do parse.

use waymark_core::{AgentPath, FormatError, TraceSet};

/// Decode a trace file into a [`TraceSet`].
///
/// Fails only when a line that carries a trajectory marker (`->`) has
/// a segment whose coordinates cannot be decoded. A failed parse
/// produces no partial trace set.
pub fn parse_traces(text: &str) -> Result<TraceSet, FormatError> {
    let mut paths = Vec::new();

    for (line_no, raw) in text.lines().enumerate() {
        let line = raw.trim_end();
        // Label/timestamp separator. Lines without one carry no
        // trajectory.
        let Some(colon) = line.find(':') else { continue };
        // The payload starts two characters past the separator (the
        // character immediately after the `:` is part of the label
        // formatting and always discarded).
        let payload = line.get(colon + 2..).unwrap_or("");

        let segments: Vec<&str> = payload.split("->").collect();
        if segments.len() < 2 {
            continue;
        }

        let mut pairs = Vec::with_capacity(segments.len());
        for segment in &segments {
            let pair = parse_segment(segment).ok_or_else(|| FormatError::MalformedWaypoint {
                line: line_no,
                segment: (*segment).to_string(),
            })?;
            pairs.push(pair);
        }
        if let Some(path) = AgentPath::from_pairs(pairs) {
            paths.push(path);
        }
    }

    Ok(TraceSet::from_paths(paths))
}

/// Decode one `(row,col)` segment.
///
/// The first and last characters are the enclosing delimiters and are
/// always discarded; between them, exactly one `,` separates two
/// decimal digit runs. Anything else (a stray character, a missing or
/// doubled comma, an empty digit run) is a malformed waypoint.
fn parse_segment(segment: &str) -> Option<(i32, i32)> {
    let mut chars = segment.chars();
    chars.next()?;
    chars.next_back()?;

    let mut row: Option<i64> = None;
    let mut acc: i64 = 0;
    let mut seen_digit = false;
    for c in chars {
        match c.to_digit(10) {
            Some(d) => {
                acc = acc.checked_mul(10)?.checked_add(i64::from(d))?;
                seen_digit = true;
            }
            None if c == ',' => {
                if row.is_some() || !seen_digit {
                    return None;
                }
                row = Some(acc);
                acc = 0;
                seen_digit = false;
            }
            None => return None,
        }
    }
    if !seen_digit {
        return None;
    }
    let row = i32::try_from(row?).ok()?;
    let col = i32::try_from(acc).ok()?;
    Some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use waymark_core::AgentId;

    #[test]
    fn single_line_decodes_flat_row_col_pairs() {
        let set = parse_traces("0: (0,0)->(0,1)->(1,1)").unwrap();
        assert_eq!(set.agent_count(), 1);
        let path = set.path_of(AgentId(0)).unwrap();
        assert_eq!(path.as_flat(), &[0, 0, 0, 1, 1, 1]);
    }

    #[test]
    fn label_before_colon_is_ignored() {
        let set = parse_traces("Agent 12 at t=3: (4,5)->(4,6)").unwrap();
        assert_eq!(set.path_of(AgentId(0)).unwrap().as_flat(), &[4, 5, 4, 6]);
    }

    #[test]
    fn line_without_trajectory_marker_is_skipped() {
        let set = parse_traces("0: nothing\n").unwrap();
        assert_eq!(set.agent_count(), 0);
    }

    #[test]
    fn line_without_colon_is_skipped() {
        let set = parse_traces("just some prose\n0: (1,1)->(1,2)\n").unwrap();
        assert_eq!(set.agent_count(), 1);
    }

    #[test]
    fn skipped_lines_keep_agent_indices_dense() {
        let text = "0: (0,0)->(0,1)\nsolver: done\n2: (3,3)->(3,4)\n";
        let set = parse_traces(text).unwrap();
        assert_eq!(set.agent_count(), 2);
        assert_eq!(set.path_of(AgentId(0)).unwrap().as_flat(), &[0, 0, 0, 1]);
        assert_eq!(set.path_of(AgentId(1)).unwrap().as_flat(), &[3, 3, 3, 4]);
    }

    #[test]
    fn crlf_line_endings_do_not_leak_into_final_segment() {
        let set = parse_traces("0: (0,0)->(0,1)\r\n1: (2,2)->(2,3)\r\n").unwrap();
        assert_eq!(set.agent_count(), 2);
        assert_eq!(set.path_of(AgentId(1)).unwrap().as_flat(), &[2, 2, 2, 3]);
    }

    #[test]
    fn multi_digit_coordinates_decode() {
        let set = parse_traces("0: (10,200)->(11,199)").unwrap();
        assert_eq!(
            set.path_of(AgentId(0)).unwrap().as_flat(),
            &[10, 200, 11, 199]
        );
    }

    #[test]
    fn stray_character_in_segment_is_an_error() {
        let err = parse_traces("0: (1,x)->(2,2)").unwrap_err();
        assert_eq!(
            err,
            FormatError::MalformedWaypoint {
                line: 0,
                segment: "(1,x)".into(),
            }
        );
    }

    #[test]
    fn missing_comma_is_an_error() {
        let err = parse_traces("0: (11)->(2,2)").unwrap_err();
        assert!(matches!(err, FormatError::MalformedWaypoint { line: 0, .. }));
    }

    #[test]
    fn doubled_comma_is_an_error() {
        assert!(parse_traces("0: (1,,2)->(2,2)").is_err());
    }

    #[test]
    fn empty_segment_is_an_error() {
        assert!(parse_traces("0: (1,1)->").is_err());
        assert!(parse_traces("0: ->(1,1)").is_err());
    }

    #[test]
    fn error_reports_the_offending_line_number() {
        let text = "0: (0,0)->(0,1)\n1: (bad)->(2,2)\n";
        let err = parse_traces(text).unwrap_err();
        assert!(matches!(err, FormatError::MalformedWaypoint { line: 1, .. }));
    }

    #[test]
    fn empty_input_yields_empty_trace_set() {
        let set = parse_traces("").unwrap();
        assert_eq!(set.agent_count(), 0);
    }
}
