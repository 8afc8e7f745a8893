//! Cleanup of recipe names and instructions before they enter the catalog.

/// Symbols stripped from recipe names
const NAME_SYMBOLS: &[char] = &['@', '#', '$', '%', '^', '&', '*', '!', '`', '~'];

/// Artifacts left at the start of exported instruction lists, e.g. `c("`
const INSTRUCTION_LEADING: &[char] = &['c', '(', '"'];

/// Artifacts left at the end of exported instruction lists, e.g. `",)`
const INSTRUCTION_TRAILING: &[char] = &['"', ')', ','];

/// Lowercases a name, drops decorative symbols and collapses whitespace.
///
/// Idempotent: normalizing an already normalized name returns it unchanged.
pub fn normalize_name(text: &str) -> String {
    let lowered: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !NAME_SYMBOLS.contains(c))
        .collect();

    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strips export artifacts and ASCII punctuation from instructions.
///
/// Leading and trailing characters are trimmed as sets, not literal
/// sequences, so any run of `c`, `(` or `"` at the start goes. Case is kept.
pub fn normalize_instructions(text: &str) -> String {
    text.trim_start_matches(INSTRUCTION_LEADING)
        .trim_end_matches(INSTRUCTION_TRAILING)
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect()
}

/// [`normalize_name`] for a value that may be missing
pub fn normalize_optional_name(text: Option<&str>) -> String {
    text.map(normalize_name).unwrap_or_default()
}

/// [`normalize_instructions`] for a value that may be missing
pub fn normalize_optional_instructions(text: Option<&str>) -> String {
    text.map(normalize_instructions).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name_strips_symbols_and_whitespace() {
        assert_eq!(
            normalize_name("  Low-Fat   Berry Blue* Frozen\tDessert!! "),
            "low-fat berry blue frozen dessert"
        );
        assert_eq!(normalize_name("#1 Chili @ Home ~"), "1 chili home");
    }

    #[test]
    fn test_normalize_name_is_idempotent() {
        for raw in [
            "Mom's   BEST  @Meatloaf!",
            "\n\t~`^&*\n",
            "already clean",
            "",
        ] {
            let once = normalize_name(raw);
            assert_eq!(normalize_name(&once), once);
        }
    }

    #[test]
    fn test_normalize_instructions_strips_export_artifacts() {
        let raw = r#"c("Toss 2 cups of greens, lightly.", "Serve chilled!")"#;
        assert_eq!(
            normalize_instructions(raw),
            "Toss 2 cups of greens lightly Serve chilled"
        );
    }

    #[test]
    fn test_normalize_instructions_trims_character_sets() {
        // Leading "c" belongs to the trim set, so "cook" loses its first letter
        assert_eq!(normalize_instructions("cook it"), "ook it");
        assert_eq!(normalize_instructions("((\"Bake\",),"), "Bake");
    }

    #[test]
    fn test_normalize_instructions_keeps_case() {
        assert_eq!(normalize_instructions("Add Vegan Cheese."), "Add Vegan Cheese");
    }

    #[test]
    fn test_missing_text_becomes_empty() {
        assert_eq!(normalize_optional_name(None), "");
        assert_eq!(normalize_optional_instructions(None), "");
        assert_eq!(normalize_instructions(""), "");
        assert_eq!(normalize_optional_name(Some(" Pie ")), "pie");
    }
}
