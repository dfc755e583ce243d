// src/data.rs
//
// Shapes the extractor hands around.
//
// - RankEntry: one `<td>rank</td><td>boy</td><td>girl</td>` row, consumed
//              straight into the map.
// - NameRankMap: name -> rank, first rank seen for a name sticks.
// - ResultSequence: `[year, "name rank", ...]`, the only thing that leaves
//                   an extraction.

use std::collections::BTreeMap;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankEntry {
    pub rank: String,
    pub name_a: String,
    pub name_b: String,
}

impl RankEntry {
    pub fn new(rank: impl Into<String>, name_a: impl Into<String>, name_b: impl Into<String>) -> Self {
        Self { rank: rank.into(), name_a: name_a.into(), name_b: name_b.into() }
    }
}

/// Name -> rank, ordered by name (byte order, which for UTF-8 is code-point order).
/// Ranks are opaque strings; nothing parses them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameRankMap {
    inner: BTreeMap<String, String>,
}

impl NameRankMap {
    pub fn new() -> Self { Self::default() }

    /// Fold rows in scan order. Both names of a row are offered the row's rank.
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a RankEntry>,
    {
        let mut map = Self::new();
        for row in rows {
            map.insert_first(&row.name_a, &row.rank);
            map.insert_first(&row.name_b, &row.rank);
        }
        map
    }

    /// Insert unless `name` is already present; an existing rank is never replaced.
    pub fn insert_first(&mut self, name: &str, rank: &str) {
        if !self.inner.contains_key(name) {
            self.inner.insert(s!(name), s!(rank));
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner.get(name).map(String::as_str)
    }

    #[inline] pub fn len(&self) -> usize { self.inner.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.inner.is_empty() }

    /// `(name, rank)` pairs, ascending by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(n, r)| (n.as_str(), r.as_str()))
    }
}

/// Year line followed by sorted `"name rank"` lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultSequence {
    lines: Vec<String>,
}

impl ResultSequence {
    pub fn new(year: String, names: &NameRankMap) -> Self {
        let mut lines = Vec::with_capacity(names.len() + 1);
        lines.push(year);
        lines.extend(names.iter().map(|(name, rank)| join!(name, " ", rank)));
        Self { lines }
    }

    /// Rebuild from newline-joined text (what `to_text` or a summary file holds).
    pub fn from_text(text: &str) -> Self {
        Self { lines: text.split('\n').map(String::from).collect() }
    }

    pub fn year(&self) -> &str {
        // never empty: `new` always pushes the year and `split` yields at least one item
        self.lines.first().map(String::as_str).unwrap_or_default()
    }

    pub fn entries(&self) -> &[String] {
        self.lines.get(1..).unwrap_or_default()
    }

    pub fn lines(&self) -> &[String] { &self.lines }

    /// Newline-joined, no trailing newline.
    pub fn to_text(&self) -> String { self.lines.join("\n") }
}

impl fmt::Display for ResultSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_rank_sticks() {
        let rows = vec![
            RankEntry::new("1", "Aaron", "Amy"),
            RankEntry::new("2", "Brian", "Amy"),
            RankEntry::new("3", "Aaron", "Cara"),
        ];
        let map = NameRankMap::from_rows(&rows);
        assert_eq!(map.get("Amy"), Some("1"));
        assert_eq!(map.get("Aaron"), Some("1"));
        assert_eq!(map.get("Cara"), Some("3"));
        assert_eq!(map.len(), 4);
        assert!(!map.is_empty());
    }

    #[test]
    fn insert_first_keeps_existing_rank() {
        let mut map = NameRankMap::new();
        map.insert_first("Amy", "1");
        map.insert_first("Amy", "2");
        assert_eq!(map.get("Amy"), Some("1"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn same_name_both_columns_is_one_key() {
        let rows = vec![RankEntry::new("7", "Jordan", "Jordan")];
        let map = NameRankMap::from_rows(&rows);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("Jordan"), Some("7"));
    }

    #[test]
    fn names_are_case_sensitive_and_code_point_sorted() {
        let rows = vec![
            RankEntry::new("1", "amy", "Amy"),
            RankEntry::new("2", "Zoe", "_x"),
        ];
        let seq = ResultSequence::new(s!("2000"), &NameRankMap::from_rows(&rows));
        assert_eq!(seq.entries(), ["Amy 1", "Zoe 2", "_x 2", "amy 1"]);
    }

    #[test]
    fn empty_sequence_is_just_the_year() {
        let names = NameRankMap::new();
        assert!(names.is_empty());
        let seq = ResultSequence::new(s!(), &names);
        assert_eq!(seq.lines(), [""]);
        assert_eq!(seq.year(), "");
        assert!(seq.entries().is_empty());
        assert_eq!(seq.to_text(), "");
    }

    #[test]
    fn text_form_has_no_trailing_newline_and_splits_back() {
        let rows = vec![RankEntry::new("5", "Bo", "Al")];
        let seq = ResultSequence::new(s!("1990"), &NameRankMap::from_rows(&rows));
        let text = seq.to_text();
        assert_eq!(text, "1990\nAl 5\nBo 5");
        assert_eq!(ResultSequence::from_text(&text), seq);
        assert_eq!(seq.to_string(), text);
    }
}
