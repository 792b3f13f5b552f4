/// First line whose lowercase form contains the lowercase keyword, returned
/// verbatim. Lines are expected to be pre-trimmed by the extractor.
pub fn find_keyword_line<'a>(lines: &'a [String], keyword: &str) -> Option<&'a str> {
    let needle = keyword.to_lowercase();
    lines
        .iter()
        .map(String::as_str)
        .find(|line| line.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn returns_first_matching_line_in_order() {
        let input = lines(&["Weapon Equipped", "New Camo Unlocked: Gold"]);
        assert_eq!(
            find_keyword_line(&input, "camo"),
            Some("New Camo Unlocked: Gold")
        );
    }

    #[test]
    fn match_is_case_insensitive_but_line_is_verbatim() {
        let input = lines(&["NEW CAMO UNLOCKED: DIAMOND"]);
        assert_eq!(
            find_keyword_line(&input, "Camo"),
            Some("NEW CAMO UNLOCKED: DIAMOND")
        );
    }

    #[test]
    fn earlier_match_wins_over_later_ones() {
        let input = lines(&["", "camo challenge done", "Gold Camo unlocked"]);
        assert_eq!(find_keyword_line(&input, "camo"), Some("camo challenge done"));
    }

    #[test]
    fn no_match_yields_none() {
        let input = lines(&["Weapon Equipped", "", "Level Up"]);
        assert_eq!(find_keyword_line(&input, "camo"), None);
    }

    #[test]
    fn empty_input_yields_none() {
        assert_eq!(find_keyword_line(&[], "camo"), None);
    }
}
