/// Drops the dangling separator from the last fragment, in place: trailing
/// commas plus any whitespace written after them. Whitespace that is not
/// followed by a comma belongs to the fragment and is kept. Does nothing on
/// an empty slice.
pub fn strip_last_comma(fragments: &mut [String]) {
    if let Some(last) = fragments.last_mut() {
        let unpadded = last.trim_end();
        if unpadded.ends_with(',') {
            let keep = unpadded.trim_end_matches(',').len();
            last.truncate(keep);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn strips_only_the_last_fragment() {
        let mut parts = owned(&["a,", "b,", "c,"]);
        strip_last_comma(&mut parts);
        assert_eq!(parts, owned(&["a,", "b,", "c"]));
    }

    #[test]
    fn strips_separator_whitespace() {
        let mut parts = owned(&["x, "]);
        strip_last_comma(&mut parts);
        assert_eq!(parts, owned(&["x"]));
    }

    #[test]
    fn keeps_whitespace_that_is_part_of_the_fragment() {
        let mut parts = owned(&["a,", "b "]);
        strip_last_comma(&mut parts);
        assert_eq!(parts, owned(&["a,", "b "]));

        let mut parts = owned(&["b ,"]);
        strip_last_comma(&mut parts);
        assert_eq!(parts, owned(&["b "]));
    }

    #[test]
    fn strips_repeated_commas() {
        let mut parts = owned(&["x,,"]);
        strip_last_comma(&mut parts);
        assert_eq!(parts, owned(&["x"]));
    }

    #[test]
    fn leaves_fragment_without_separator_alone() {
        let mut parts = owned(&["CREATE TABLE IF NOT EXISTS `t` ("]);
        strip_last_comma(&mut parts);
        assert_eq!(parts, owned(&["CREATE TABLE IF NOT EXISTS `t` ("]));
    }

    #[test]
    fn empty_is_a_noop() {
        let mut parts: Vec<String> = Vec::new();
        strip_last_comma(&mut parts);
        assert!(parts.is_empty());
    }
}
