/// Languages the frontend can translate stories into. Order is the order
/// shown to clients, so keep it stable.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("English", "en"),
    ("Nepali", "ne"),
    ("Hindi", "hi"),
    ("Spanish", "es"),
    ("French", "fr"),
    ("Chinese", "zh"),
    ("Japanese", "ja"),
    ("Korean", "ko"),
    ("Russian", "ru"),
    ("German", "de"),
];

pub fn display_names() -> Vec<&'static str> {
    SUPPORTED_LANGUAGES.iter().map(|(name, _)| *name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_order_stable() {
        let names = display_names();
        assert_eq!(names.first(), Some(&"English"));
        assert_eq!(names.last(), Some(&"German"));
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn pairs_display_names_with_iso_codes() {
        assert!(SUPPORTED_LANGUAGES.contains(&("Nepali", "ne")));
        assert!(SUPPORTED_LANGUAGES.contains(&("Chinese", "zh")));
    }
}
