//! Line-oriented text comparison.

use difference::{Changeset, Difference};

/// Renders a line diff: `  ` for unchanged lines, `- ` for removed and `+ `
/// for added ones, followed by a summary line.
pub fn lines(original: &str, changed: &str) -> String {
    if original == changed {
        return "No differences".to_string();
    }

    let changeset = Changeset::new(original, changed, "\n");
    let mut out = Vec::new();
    let mut added = 0;
    let mut removed = 0;

    for diff in &changeset.diffs {
        let (prefix, chunk) = match diff {
            Difference::Same(chunk) => ("  ", chunk),
            Difference::Add(chunk) => ("+ ", chunk),
            Difference::Rem(chunk) => ("- ", chunk),
        };
        for line in chunk.split('\n') {
            match diff {
                Difference::Add(_) => added += 1,
                Difference::Rem(_) => removed += 1,
                Difference::Same(_) => {}
            }
            out.push(format!("{prefix}{line}"));
        }
    }

    out.push(String::new());
    out.push(format!("{added} added, {removed} removed"));
    out.join("\n")
}
