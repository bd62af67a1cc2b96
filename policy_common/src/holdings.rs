//! Client-side policy lookup over the raw holdings payload.
//!
//! The payload returned by `/api/details` is treated as opaque text. A lookup
//! is a plain substring search and a hit returns the whole payload reformatted
//! by [`pretty_print`], not an extracted record.
//!
//! The last search candidate is the bare identifier itself, so `"101"` also
//! matches a payload where `101` only appears inside an unrelated field. A hit
//! does not mean a `policyNumber` field matched.

/// Indentation unit emitted per nesting level.
const INDENT: &str = "    ";

/// Substrings whose presence marks `policy_id` as found, in check order.
pub fn search_candidates(policy_id: &str) -> [String; 3] {
    [
        format!("\"policyNumber\":{}", policy_id),
        format!("\"policyNumber\":\"{}\"", policy_id),
        policy_id.to_string(),
    ]
}

/// Looks for `policy_id` in `payload`.
///
/// Returns the pretty-printed payload when any candidate from
/// [`search_candidates`] is contained in it, `None` otherwise. Callers reject
/// empty identifiers beforehand since the bare candidate would match anything.
pub fn locate(payload: &str, policy_id: &str) -> Option<String> {
    search_candidates(policy_id)
        .iter()
        .any(|candidate| payload.contains(candidate.as_str()))
        .then(|| pretty_print(payload))
}

/// Re-indents JSON-looking text by inserting newlines and 4-space indentation.
///
/// Purely syntactic: brackets and commas inside string values are treated as
/// structure, and nothing is validated. Depth may go negative on unbalanced
/// input; a negative depth indents by zero spaces.
pub fn pretty_print(payload: &str) -> String {
    let mut pretty = String::with_capacity(payload.len() * 2);
    let mut depth: i32 = 0;

    for ch in payload.chars() {
        match ch {
            '{' | '[' => {
                depth += 1;
                pretty.push(ch);
                pretty.push('\n');
                push_indent(&mut pretty, depth);
            }
            '}' | ']' => {
                depth -= 1;
                pretty.push('\n');
                push_indent(&mut pretty, depth);
                pretty.push(ch);
            }
            ',' => {
                pretty.push(ch);
                pretty.push('\n');
                push_indent(&mut pretty, depth);
            }
            _ => pretty.push(ch),
        }
    }
    pretty
}

fn push_indent(out: &mut String, depth: i32) {
    let levels = usize::try_from(depth).unwrap_or(0);
    for _ in 0..levels {
        out.push_str(INDENT);
    }
}
