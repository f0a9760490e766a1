use derive_more::Display;

/// Characters that mark a name as a directory when they end it.
const DIRECTORY_SEPARATORS: &[char] = &['/', std::path::MAIN_SEPARATOR];

/// One `(depth, name)` pair parsed from a diagram line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{name} (depth {depth})")]
pub struct TreeEntry<'a> {
    pub depth: usize,
    pub name: &'a str,
}

impl<'a> TreeEntry<'a> {
    pub fn new(depth: usize, name: &'a str) -> Self {
        Self { depth, name }
    }

    /// A trailing path separator denotes a directory; anything else is a file,
    /// extension or not.
    pub fn is_directory(&self) -> bool {
        self.name.ends_with(DIRECTORY_SEPARATORS)
    }

    /// The name as it should appear on disk, without trailing separators.
    pub fn node_name(&self) -> &'a str {
        self.name.trim_end_matches(DIRECTORY_SEPARATORS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("src/", true)]
    #[case("node_modules/", true)]
    #[case("App.tsx", false)]
    #[case("Makefile", false)]
    #[case(".gitignore", false)]
    fn classifies_by_trailing_separator(#[case] name: &str, #[case] is_directory: bool) {
        assert_eq!(TreeEntry::new(0, name).is_directory(), is_directory);
    }

    #[rstest]
    #[case("src/", "src")]
    #[case("src//", "src")]
    #[case("App.tsx", "App.tsx")]
    fn node_name_strips_trailing_separators(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(TreeEntry::new(1, name).node_name(), expected);
    }

    #[test]
    fn display_includes_depth() {
        assert_eq!(TreeEntry::new(2, "App.tsx").to_string(), "App.tsx (depth 2)");
    }
}
