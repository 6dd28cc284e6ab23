/// Top-level labels that are left in place unless stripping is forced.
pub const KNOWN_SUFFIXES: &[&str] = &[
    "com", "org", "net", "edu", "gov", "io", "co", "us", "in", "info", "biz", "online", "xyz",
];

/// Options applied to every line of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanOptions {
    pub add_on: Option<String>,
    pub remove_count: i64,
    pub force: bool,
}

impl CleanOptions {
    pub fn clean(&self, domain: &str) -> String {
        clean_domain(domain, self.add_on.as_deref(), self.remove_count, self.force)
    }
}

pub fn is_known_suffix(label: &str) -> bool {
    KNOWN_SUFFIXES
        .iter()
        .any(|suffix| suffix.eq_ignore_ascii_case(label))
}

/// Strips trailing labels from `domain` and makes sure it ends with `add_on`.
///
/// With two or more labels, stripping happens when `force` is set, when
/// `remove_count` is positive, or when the last label is not a known suffix.
/// A `remove_count` below the label count removes that many labels; any other
/// value removes just the last one. A domain without dots is never stripped.
///
/// The add-on is appended as `.{add_on}` unless the result already ends with
/// it. An empty add-on counts as none.
pub fn clean_domain(domain: &str, add_on: Option<&str>, remove_count: i64, force: bool) -> String {
    let mut labels: Vec<&str> = domain.split('.').collect();

    if labels.len() > 1 {
        let last = labels[labels.len() - 1];
        if force || remove_count > 0 || !is_known_suffix(last) {
            let keep = match usize::try_from(remove_count) {
                Ok(count) if count > 0 && count < labels.len() => labels.len() - count,
                _ => labels.len() - 1,
            };
            labels.truncate(keep);
        }
    }

    let mut cleaned = labels.join(".");
    if let Some(add_on) = add_on.filter(|s| !s.is_empty()) {
        let suffix = format!(".{}", add_on);
        if !cleaned.ends_with(&suffix) {
            cleaned.push_str(&suffix);
        }
    }

    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_suffix_ignores_case() {
        assert!(is_known_suffix("com"));
        assert!(is_known_suffix("COM"));
        assert!(is_known_suffix("Online"));
        assert!(!is_known_suffix("c"));
        assert!(!is_known_suffix(""));
        assert!(!is_known_suffix("uk"));
    }

    #[test]
    fn keeps_known_suffix() {
        assert_eq!(clean_domain("a.b.com", None, 0, false), "a.b.com");
        assert_eq!(clean_domain("sub.example.net", None, 0, false), "sub.example.net");
        assert_eq!(clean_domain("Example.ORG", None, 0, false), "Example.ORG");
    }

    #[test]
    fn strips_unknown_last_label() {
        assert_eq!(clean_domain("a.b.c", None, 0, false), "a.b");
        assert_eq!(clean_domain("api.example.internal", None, 0, false), "api.example");
    }

    #[test]
    fn single_label_is_untouched() {
        assert_eq!(clean_domain("justoneword", None, 0, false), "justoneword");
        assert_eq!(clean_domain("justoneword", None, 3, true), "justoneword");
    }

    #[test]
    fn remove_count_strips_that_many() {
        assert_eq!(clean_domain("a.b.c.d", None, 2, false), "a.b");
        assert_eq!(clean_domain("www.example.com", None, 1, false), "www.example");
    }

    #[test]
    fn remove_count_too_large_strips_one() {
        assert_eq!(clean_domain("a.b.c", None, 3, false), "a.b");
        assert_eq!(clean_domain("a.b.c", None, 10, false), "a.b");
    }

    #[test]
    fn negative_remove_count_acts_like_zero() {
        assert_eq!(clean_domain("a.b.com", None, -2, false), "a.b.com");
        assert_eq!(clean_domain("a.b.c", None, -2, false), "a.b");
    }

    #[test]
    fn force_strips_known_suffix() {
        assert_eq!(clean_domain("example.com", None, 0, true), "example");
        assert_eq!(clean_domain("a.b.c.com", None, 2, true), "a.b");
    }

    #[test]
    fn add_on_appended_after_strip() {
        assert_eq!(clean_domain("a.b", Some("org"), 0, false), "a.org");
        assert_eq!(clean_domain("host", Some("corp.net"), 0, false), "host.corp.net");
    }

    #[test]
    fn add_on_not_duplicated() {
        assert_eq!(clean_domain("example.com", Some("com"), 0, false), "example.com");
        assert_eq!(clean_domain("example.com", Some("com"), 0, true), "example.com");
    }

    #[test]
    fn add_on_requires_dot_boundary() {
        assert_eq!(clean_domain("telecom", Some("com"), 0, false), "telecom.com");
    }

    #[test]
    fn empty_add_on_is_ignored() {
        assert_eq!(clean_domain("a.b", Some(""), 0, false), "a");
    }

    #[test]
    fn empty_and_dotted_edges() {
        assert_eq!(clean_domain("", None, 0, false), "");
        assert_eq!(clean_domain("", Some("org"), 0, false), ".org");
        assert_eq!(clean_domain("a.b.", None, 0, false), "a.b");
        assert_eq!(clean_domain(".", None, 0, false), "");
    }

    #[test]
    fn options_delegate_to_clean_domain() {
        let options = CleanOptions {
            add_on: Some("io".to_string()),
            remove_count: 1,
            force: false,
        };
        assert_eq!(options.clean("svc.cluster.local"), "svc.cluster.io");
    }
}
