//! Line-oriented unified diff for small canonical documents.

/// Render a unified diff of `old` against `new` with full context in a
/// single hunk. Returns an empty string when the inputs are identical.
pub fn unified_diff(old: &str, new: &str, old_label: &str, new_label: &str) -> String {
    if old == new {
        return String::new();
    }
    let a: Vec<&str> = old.lines().collect();
    let b: Vec<&str> = new.lines().collect();
    let ops = line_ops(&a, &b);

    let mut out = format!("--- {old_label}\n+++ {new_label}\n");
    out.push_str(&format!(
        "@@ -{} +{} @@\n",
        hunk_range(a.len()),
        hunk_range(b.len())
    ));
    for op in ops {
        let (prefix, line) = match op {
            LineOp::Keep(line) => (' ', line),
            LineOp::Remove(line) => ('-', line),
            LineOp::Add(line) => ('+', line),
        };
        out.push(prefix);
        out.push_str(line);
        out.push('\n');
    }
    out
}

#[derive(Debug, PartialEq, Eq)]
enum LineOp<'a> {
    Keep(&'a str),
    Remove(&'a str),
    Add(&'a str),
}

fn hunk_range(len: usize) -> String {
    match len {
        0 => "0,0".to_string(),
        1 => "1".to_string(),
        n => format!("1,{n}"),
    }
}

/// Longest-common-subsequence edit script. Removals are emitted before
/// additions inside a changed block.
fn line_ops<'a>(a: &[&'a str], b: &[&'a str]) -> Vec<LineOp<'a>> {
    let (n, m) = (a.len(), b.len());
    // lcs[i][j] = LCS length of a[i..] and b[j..]
    let mut lcs = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i][j] = if a[i] == b[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut ops = Vec::with_capacity(n + m);
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if a[i] == b[j] {
            ops.push(LineOp::Keep(a[i]));
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            ops.push(LineOp::Remove(a[i]));
            i += 1;
        } else {
            ops.push(LineOp::Add(b[j]));
            j += 1;
        }
    }
    ops.extend(a[i..].iter().copied().map(LineOp::Remove));
    ops.extend(b[j..].iter().copied().map(LineOp::Add));
    ops
}
