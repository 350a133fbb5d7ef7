#![forbid(unsafe_code)]

//! Command-line argument classification and option lookup
//!
//! Arguments beginning with `--` are flags; everything else is a file path.
//! Flags are normalized (leading dashes stripped, lowercased) and kept in
//! command-line order so that later occurrences can override earlier ones.

/// Marker that distinguishes a flag from a positional file argument
pub const FLAG_PREFIX: &str = "--";

/// A single normalized flag, e.g. `output=html` or `console`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    text: String,
    raw: String,
}

impl Flag {
    /// Normalizes a raw `--Name=Value` argument into a flag
    ///
    /// Every leading `-` is stripped and the remainder is lowercased.
    pub fn new(raw: &str) -> Self {
        let raw = raw.trim_start_matches('-');
        Flag {
            text: raw.to_lowercase(),
            raw: raw.to_string(),
        }
    }

    /// The part before the first `=`, or the whole flag when there is none
    pub fn name(&self) -> &str {
        match self.text.split_once('=') {
            Some((name, _)) => name,
            None => &self.text,
        }
    }

    /// The part after the first `=`, if the flag carries one
    pub fn value(&self) -> Option<&str> {
        self.text.split_once('=').map(|(_, value)| value)
    }

    /// Value with its original casing, for values naming files
    pub fn raw_value(&self) -> Option<&str> {
        self.raw.split_once('=').map(|(_, value)| value)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Ordered, read-only collection of every flag from one invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionBag {
    flags: Vec<Flag>,
}

impl OptionBag {
    pub fn new(flags: Vec<Flag>) -> Self {
        OptionBag { flags }
    }

    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Value of the last `name=` occurrence
    ///
    /// Returns `None` when the flag never appears with a value, or when the
    /// last occurrence has an empty value.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.valued(name)
            .into_iter()
            .last()
            .filter(|value| !value.is_empty())
    }

    /// Like [`OptionBag::value`], substituting `default` when unset
    pub fn value_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.value(name).unwrap_or(default)
    }

    /// Values of every `name=` occurrence, de-duplicated in first-seen order
    pub fn values(&self, name: &str) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for value in self.valued(name) {
            if !seen.contains(&value) {
                seen.push(value);
            }
        }
        seen
    }

    /// Like [`OptionBag::values`], returning `[default]` when nothing was given
    pub fn values_or<'a>(&'a self, name: &str, default: &'a str) -> Vec<&'a str> {
        let values = self.values(name);
        if values.is_empty() {
            vec![default]
        } else {
            values
        }
    }

    /// Like [`OptionBag::value`], but with the value's original casing
    pub fn raw_value(&self, name: &str) -> Option<&str> {
        self.flags
            .iter()
            .filter(|flag| flag.name() == name)
            .filter_map(Flag::raw_value)
            .last()
            .filter(|value| !value.is_empty())
    }

    /// True if any flag is named by one of `names`, regardless of value
    pub fn contains_any(&self, names: &[&str]) -> bool {
        self.flags.iter().any(|flag| names.contains(&flag.name()))
    }

    fn valued(&self, name: &str) -> Vec<&str> {
        self.flags
            .iter()
            .filter(|flag| flag.name() == name)
            .filter_map(Flag::value)
            .collect()
    }
}

/// Command-line arguments split into files and flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    /// Positional arguments in command-line order
    pub files: Vec<String>,
    /// Flags in command-line order
    pub options: OptionBag,
}

/// Partitions raw arguments (without the program name) into files and flags
pub fn parse_args<I, S>(args: I) -> ParsedArgs
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut files = Vec::new();
    let mut flags = Vec::new();

    for arg in args {
        let arg = arg.as_ref();
        if arg.starts_with(FLAG_PREFIX) {
            flags.push(Flag::new(arg));
        } else {
            files.push(arg.to_string());
        }
    }

    ParsedArgs {
        files,
        options: OptionBag::new(flags),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag(args: &[&str]) -> OptionBag {
        parse_args(args.iter().copied()).options
    }

    #[test]
    fn test_partitions_files_and_flags_in_order() {
        let parsed = parse_args(["a.rs", "--output=html", "b.py", "--console", "c.go"]);

        assert_eq!(parsed.files, vec!["a.rs", "b.py", "c.go"]);
        let names: Vec<&str> = parsed.options.flags().iter().map(Flag::name).collect();
        assert_eq!(names, vec!["output", "console"]);
    }

    #[test]
    fn test_single_dash_is_positional() {
        let parsed = parse_args(["-h", "-", "--h"]);

        assert_eq!(parsed.files, vec!["-h", "-"]);
        assert!(parsed.options.contains_any(&["h"]));
    }

    #[test]
    fn test_flag_normalization_strips_dashes_and_lowercases() {
        let flag = Flag::new("---Style=Solarized");

        assert_eq!(flag.as_str(), "style=solarized");
        assert_eq!(flag.name(), "style");
        assert_eq!(flag.value(), Some("solarized"));
    }

    #[test]
    fn test_flag_value_splits_at_first_equals() {
        let flag = Flag::new("--language=a=b");

        assert_eq!(flag.name(), "language");
        assert_eq!(flag.value(), Some("a=b"));
    }

    #[test]
    fn test_raw_value_keeps_case() {
        let options = bag(&["--Config=Old.toml", "--CONFIG=Conf/Shade.TOML"]);

        assert_eq!(options.value("config"), Some("conf/shade.toml"));
        assert_eq!(options.raw_value("config"), Some("Conf/Shade.TOML"));
        assert_eq!(options.raw_value("style"), None);
    }

    #[test]
    fn test_flag_without_value() {
        let flag = Flag::new("--Console");

        assert_eq!(flag.name(), "console");
        assert_eq!(flag.value(), None);
    }

    #[test]
    fn test_value_last_occurrence_wins() {
        let options = bag(&["--style=monokai", "--style=scite", "--style=github"]);

        assert_eq!(options.value("style"), Some("github"));
        assert_eq!(options.value_or("style", "default"), "github");
    }

    #[test]
    fn test_value_absent_returns_default() {
        let options = bag(&["--output=html"]);

        assert_eq!(options.value("style"), None);
        assert_eq!(options.value_or("style", "scite"), "scite");
    }

    #[test]
    fn test_value_empty_last_occurrence_returns_default() {
        let options = bag(&["--style=monokai", "--style="]);

        assert_eq!(options.value("style"), None);
        assert_eq!(options.value_or("style", "scite"), "scite");
    }

    #[test]
    fn test_value_ignores_flag_without_equals() {
        let options = bag(&["--style"]);

        assert_eq!(options.value_or("style", "scite"), "scite");
    }

    #[test]
    fn test_value_requires_exact_name() {
        let options = bag(&["--styles=monokai", "--sty=x"]);

        assert_eq!(options.value("style"), None);
    }

    #[test]
    fn test_values_deduplicates_in_first_seen_order() {
        let options = bag(&["--output=html", "--output=rtf", "--output=html"]);

        assert_eq!(options.values("output"), vec!["html", "rtf"]);
    }

    #[test]
    fn test_values_are_case_folded_before_deduplication() {
        let options = bag(&["--OUTPUT=HTML", "--output=html", "--Output=Rtf"]);

        assert_eq!(options.values("output"), vec!["html", "rtf"]);
    }

    #[test]
    fn test_values_or_returns_default_when_absent() {
        let options = bag(&["--style=scite"]);

        assert!(options.values("output").is_empty());
        assert_eq!(options.values_or("output", "html"), vec!["html"]);
    }

    #[test]
    fn test_values_keeps_empty_value() {
        let options = bag(&["--output=", "--output=html"]);

        assert_eq!(options.values("output"), vec!["", "html"]);
    }

    #[test]
    fn test_contains_any_matches_aliases() {
        let options = bag(&["--C", "--output=html"]);

        assert!(options.contains_any(&["console", "c"]));
        assert!(!options.contains_any(&["help", "?", "h"]));
    }

    #[test]
    fn test_contains_any_ignores_value() {
        let options = bag(&["--help=yes"]);

        assert!(options.contains_any(&["help"]));
    }

    #[test]
    fn test_empty_arguments() {
        let parsed = parse_args(Vec::<String>::new());

        assert!(parsed.files.is_empty());
        assert!(parsed.options.is_empty());
    }
}
