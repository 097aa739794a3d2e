/// Upper-cased initials of every whitespace separated word in `name`.
///
/// Used for the collection badges in the sidebar, e.g. "Lethal Company" -> "LC".
pub fn acronym(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::acronym;

    #[test]
    fn test_single_word() {
        assert_eq!(acronym("Home"), "H");
        assert_eq!(acronym("Collections"), "C");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(acronym(""), "");
        assert_eq!(acronym("  "), "");
        assert_eq!(acronym("\t\n"), "");
    }

    #[test]
    fn test_consecutive_spaces_are_skipped() {
        assert_eq!(acronym("my  modded   run"), "MMR");
        assert_eq!(acronym(" lethal company "), "LC");
    }

    #[test]
    fn test_non_ascii_initials_are_uppercased() {
        assert_eq!(acronym("élan vital"), "ÉV");
        assert_eq!(acronym("ßeta"), "SS");
    }
}
