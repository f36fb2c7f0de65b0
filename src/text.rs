/// Collapse whitespace runs (spaces, tabs, newlines) to single spaces and trim.
pub fn clean_text(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_runs() {
        assert_eq!(clean_text("a  b\t\tc\n\nd"), "a b c d");
    }

    #[test]
    fn trims_ends() {
        assert_eq!(clean_text("  padded value \n"), "padded value");
    }

    #[test]
    fn empty_and_blank() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text(" \t\n "), "");
    }

    #[test]
    fn idempotent() {
        let once = clean_text("Agency :   Forest\nService ");
        assert_eq!(clean_text(&once), once);
    }
}
