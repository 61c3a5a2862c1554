use core::fmt;

use crate::{date::ComparableDate, DateInterval};

/// Placeholder rendered for an open bound unless told otherwise.
pub const DEFAULT_PLACEHOLDER: &str = "?";

impl DateInterval {
    /// Render the interval as `[start; end]`, passing every concrete bound
    /// through `render` and substituting `placeholder` for an open one.
    ///
    /// ```
    /// # use datintrval::DateInterval;
    /// let interval = DateInterval::since("2024-01-01");
    /// let s = interval.render_with("open", |date| date.as_str().replace('-', "/"));
    /// assert_eq!(s, "[2024/01/01; open]");
    /// ```
    pub fn render_with<F>(&self, placeholder: &str, mut render: F) -> String
    where
        F: FnMut(&ComparableDate) -> String,
    {
        let mut side = |bound: Option<&ComparableDate>| match bound {
            Some(date) => render(date),
            None => placeholder.to_owned(),
        };

        let start = side(self.start());
        let end = side(self.end());
        format!("[{start}; {end}]")
    }
}

impl fmt::Display for DateInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        match self.start() {
            Some(start) => start.fmt(f)?,
            None => f.write_str(DEFAULT_PLACEHOLDER)?,
        }
        f.write_str("; ")?;
        match self.end() {
            Some(end) => end.fmt(f)?,
            None => f.write_str(DEFAULT_PLACEHOLDER)?,
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_end() {
        let i = DateInterval::since("2024-01-01");
        assert_eq!(i.to_string(), "[2024-01-01; ?]");
    }

    #[test]
    fn open_start() {
        let i = DateInterval::until("2024-01-01 12:00:00");
        assert_eq!(i.to_string(), "[?; 2024-01-01 12:00:00]");
    }

    #[test]
    fn closed() {
        let i = DateInterval::between("2024-01-01", "2024-12-31").unwrap();
        assert_eq!(i.to_string(), "[2024-01-01; 2024-12-31]");
    }

    #[test]
    fn custom_placeholder() {
        let i = DateInterval::until("2024-01-01");
        assert_eq!(
            i.render_with("-", |d| format!("<{d}>")),
            "[-; <2024-01-01>]"
        );
    }

    #[test]
    fn render_is_not_called_for_open_bound() {
        let i = DateInterval::since("2024-01-01");
        let mut calls = 0;
        let _ = i.render_with("?", |d| {
            calls += 1;
            d.to_string()
        });
        assert_eq!(calls, 1);
    }
}
