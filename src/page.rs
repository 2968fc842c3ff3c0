use serde::Serialize;
use std::fmt;
use std::str::SplitWhitespace;

/// `PageId` is an opaque token naming a page requested by a process. Two identifiers refer to the
/// same page only when their text matches exactly, so `"1"` and `"01"` are different pages.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PageId {
    /// Wrap a single token as a page identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use fifo_page_sim::page::PageId;
    /// let page = PageId::from("7");
    /// assert_eq!(page.as_str(), "7");
    /// assert_ne!(page, PageId::from("07"));
    /// ```
    fn from(value: &str) -> Self {
        Self(String::from(value))
    }
}

impl From<String> for PageId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `PageReader` is a utility type responsible for sequentially obtaining page identifiers from
/// free-form text. Any run of whitespace (spaces, tabs, newlines) separates two tokens, and leading
/// or trailing whitespace is ignored.
pub struct PageReader<'a> {
    tokens: SplitWhitespace<'a>,
    pub position: usize,
}

impl<'a> PageReader<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            tokens: raw.split_whitespace(),
            position: 0,
        }
    }
}

impl Iterator for PageReader<'_> {
    type Item = PageId;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.tokens.next()?;
        self.position += 1;
        Some(PageId::from(token))
    }
}

/// Collect every page identifier found in `raw`.
pub fn tokenize(raw: &str) -> Vec<PageId> {
    PageReader::new(raw).collect()
}
