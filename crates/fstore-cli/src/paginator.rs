//! Page window around the current page

/// Pages shown on each side of the current page
pub const RANGE: u64 = 3;

/// Visible page numbers plus jump markers to the first and last page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub current: u64,
    pub last: u64,
    /// `current - RANGE ..= current + RANGE`, restricted to `1..=last`
    pub pages: Vec<u64>,
    /// Page 1 lies outside the window
    pub show_first: bool,
    /// The last page lies outside the window
    pub show_last: bool,
}

pub fn page_window(current: u64, last: u64) -> PageWindow {
    let start = current.saturating_sub(RANGE).max(1);
    let end = current.saturating_add(RANGE).min(last);

    PageWindow {
        current,
        last,
        pages: (start..=end).collect(),
        show_first: current.saturating_sub(RANGE) > 1,
        show_last: current.saturating_add(RANGE) < last,
    }
}

impl std::fmt::Display for PageWindow {
    /// Renders e.g. `1 ... 4 5 6 [7] 8 9 10 ... 20`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::with_capacity(self.pages.len() + 4);
        if self.show_first {
            parts.push("1".to_string());
            parts.push("...".to_string());
        }
        for page in &self.pages {
            if *page == self.current {
                parts.push(format!("[{}]", page));
            } else {
                parts.push(page.to_string());
            }
        }
        if self.show_last {
            parts.push("...".to_string());
            parts.push(self.last.to_string());
        }
        write!(f, "{}", parts.join(" "))
    }
}
