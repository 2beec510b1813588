//! Display-name helpers.

/// Capitalise the first letter of every word and turn underscores into
/// spaces: `"dar es salaam"` becomes `"Dar Es Salaam"`.
pub fn titleize(input: &str) -> String {
    input
        .split(|c: char| c == ' ' || c == '_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titleizes_words() {
        assert_eq!(titleize("dar es salaam"), "Dar Es Salaam");
        assert_eq!(titleize("hostel"), "Hostel");
    }

    #[test]
    fn underscores_become_spaces() {
        assert_eq!(titleize("family_young"), "Family Young");
    }

    #[test]
    fn empty_input() {
        assert_eq!(titleize(""), "");
    }
}
