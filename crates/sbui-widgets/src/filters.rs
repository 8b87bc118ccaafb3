#![forbid(unsafe_code)]

//! Exclusion lists for the game-type and country filter grids.
//!
//! Stored the way the settings persist them: names joined by commas. Names
//! compare ASCII case-insensitively and keep the case they were added with.

use std::fmt;
use std::str::FromStr;

/// Ordered set of excluded names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", from = "String")
)]
pub struct ExclusionList {
    names: Vec<String>,
}

impl ExclusionList {
    /// Empty list: nothing excluded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-separated list. Blank items are skipped.
    pub fn parse(text: &str) -> Self {
        let mut list = Self::new();
        for name in text.split(',') {
            list.add(name);
        }
        list
    }

    /// Whether `name` is excluded.
    pub fn contains(&self, name: &str) -> bool {
        let name = name.trim();
        self.names.iter().any(|n| n.eq_ignore_ascii_case(name))
    }

    /// Exclude `name`. Returns whether it was newly added.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || name.contains(',') || self.contains(name) {
            return false;
        }
        self.names.push(name.to_owned());
        true
    }

    /// Stop excluding `name`. Returns whether it was excluded.
    pub fn remove(&mut self, name: &str) -> bool {
        let name = name.trim();
        let before = self.names.len();
        self.names.retain(|n| !n.eq_ignore_ascii_case(name));
        self.names.len() != before
    }

    /// Flip `name` between excluded and shown. Returns whether it is
    /// excluded afterwards.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.remove(name) {
            false
        } else {
            self.add(name)
        }
    }

    /// Exclude everything in `all` except `keep`.
    pub fn exclusive<'a, I>(&mut self, all: I, keep: &str)
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.names.clear();
        for name in all {
            if !name.trim().eq_ignore_ascii_case(keep.trim()) {
                self.add(name);
            }
        }
    }

    /// Exclude nothing.
    pub fn clear(&mut self) {
        self.names.clear();
    }

    /// Excluded names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of excluded names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether nothing is excluded.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl fmt::Display for ExclusionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

impl FromStr for ExclusionList {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for ExclusionList {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<ExclusionList> for String {
    fn from(list: ExclusionList) -> Self {
        list.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_format() {
        let list = ExclusionList::parse(" GER, ,USA,GER");
        assert_eq!(list.len(), 2);
        assert_eq!(list.to_string(), "GER,USA");
        assert_eq!("".parse::<ExclusionList>().map(|l| l.is_empty()), Ok(true));
    }

    #[test]
    fn toggle_and_exclusive() {
        let mut list = ExclusionList::new();
        assert!(list.toggle("Novice"));
        assert!(list.contains("Novice"));
        assert!(!list.toggle("Novice"));
        assert!(list.is_empty());

        let all = ["Novice", "Moderate", "Brutal"];
        list.exclusive(all, "Moderate");
        assert!(list.contains("Novice"));
        assert!(!list.contains("Moderate"));
        assert!(list.contains("Brutal"));
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn names_compare_without_case() {
        let mut list = ExclusionList::parse("ger");
        assert!(list.contains("GER"));
        assert!(!list.add("Ger"));
        assert_eq!(list.len(), 1);

        assert!(!list.toggle("GER"));
        assert!(list.is_empty());

        list.exclusive(["CTF", "DM", "Race"], "dm");
        assert_eq!(list.to_string(), "CTF,Race");
    }

    #[test]
    fn rejects_separator_in_names() {
        let mut list = ExclusionList::new();
        assert!(!list.add("a,b"));
        assert!(!list.add("   "));
    }
}
