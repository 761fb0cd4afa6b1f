// Case-insensitive prefix matching shared by stage names and prompt commands

/// Every candidate that begins with `prefix`, in candidate order
pub fn prefix_matches<'a>(prefix: &str, candidates: &[&'a str]) -> Vec<&'a str> {
    let wanted = prefix.to_lowercase();
    candidates
        .iter()
        .filter(|name| name.to_lowercase().starts_with(&wanted))
        .copied()
        .collect()
}

/// Resolve a typed word against a fixed vocabulary.
///
/// A full name always wins, so `gold` still picks `gold` when a longer
/// `golden-hour` exists. Otherwise the prefix must single out one name.
/// The error carries the competing names, empty when nothing matched.
pub fn resolve_prefix<'a>(word: &str, candidates: &[&'a str]) -> Result<&'a str, Vec<&'a str>> {
    if let Some(exact) = candidates.iter().find(|name| name.eq_ignore_ascii_case(word)) {
        return Ok(*exact);
    }

    match prefix_matches(word, candidates).as_slice() {
        [only] => Ok(*only),
        many => Err(many.to_vec()),
    }
}
