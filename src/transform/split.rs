//! Structural helpers: one line in, zero or more pieces out.
//!
//! These are not [`Transform`](crate::transform::Transform)s because they
//! change the number of lines. The cleaner wraps each of them into a single
//! flat-map operation.

/// Split on `sep`, keeping empty pieces. An empty separator leaves the line
/// whole.
pub fn split_on(line: &str, sep: &str) -> Vec<String> {
    if sep.is_empty() {
        return vec![line.to_owned()];
    }
    line.split(sep).map(str::to_owned).collect()
}

/// Split on `delim` and return the requested columns in the requested order.
/// Indices past the last column are skipped.
pub fn select_columns(line: &str, delim: &str, columns: &[usize]) -> Vec<String> {
    if delim.is_empty() {
        return columns
            .iter()
            .filter(|&&i| i == 0)
            .map(|_| line.to_owned())
            .collect();
    }
    let fields: Vec<&str> = line.split(delim).collect();
    columns
        .iter()
        .filter_map(|&i| fields.get(i).map(|f| (*f).to_owned()))
        .collect()
}

/// Rejoin cleaned fields of one record.
#[inline]
pub fn join_columns<S: AsRef<str>>(fields: &[S], delim: &str) -> String {
    let mut out = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push_str(delim);
        }
        out.push_str(field.as_ref());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_empty_pieces() {
        assert_eq!(split_on("أ..ب", "."), vec!["أ", "", "ب"]);
        assert_eq!(split_on("سطر", ""), vec!["سطر"]);
    }

    #[test]
    fn selects_columns_in_requested_order() {
        let line = "1\tنص عربي\tlabel";
        assert_eq!(select_columns(line, "\t", &[2, 1]), vec!["label", "نص عربي"]);
        assert_eq!(select_columns(line, "\t", &[1, 7]), vec!["نص عربي"]);
    }

    #[test]
    fn join_is_inverse_of_full_selection() {
        let line = "a,b,,c";
        let fields = select_columns(line, ",", &[0, 1, 2, 3]);
        assert_eq!(join_columns(&fields, ","), line);
    }
}
