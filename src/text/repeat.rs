use std::fmt;

/// Repeats `source` `n` times. `n == 0` yields an empty string.
pub fn repeat(source: &str, n: usize) -> String {
    source.repeat(n)
}

/// Writes `item` to a formatter `n` times without building an intermediate string.
#[derive(Debug, Clone, Copy)]
pub struct Repeat<T> {
    item: T,
    times: usize,
}

impl<T: fmt::Display> fmt::Display for Repeat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.times {
            self.item.fmt(f)?;
        }
        Ok(())
    }
}

pub fn repeated<T: fmt::Display>(item: T, times: usize) -> Repeat<T> {
    Repeat { item, times }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_concatenates() {
        assert_eq!(repeat("ab", 3), "ababab");
        assert_eq!(repeat("-", 5), "-----");
    }

    #[test]
    fn test_repeat_zero_times() {
        assert_eq!(repeat("x", 0), "");
        assert_eq!(repeat("", 10), "");
    }

    #[test]
    fn test_repeat_length() {
        for n in 0..8 {
            let s = repeat("héllo", n);
            assert_eq!(s.len(), n * "héllo".len());
            assert_eq!(s.chars().count(), n * 5);
        }
    }

    #[test]
    fn test_repeated_display() {
        assert_eq!(repeated('=', 4).to_string(), "====");
        assert_eq!(repeated("ab", 2).to_string(), "abab");
        assert_eq!(format!("[{}]", repeated(' ', 0)), "[]");
    }

    #[test]
    fn test_repeated_matches_repeat() {
        assert_eq!(repeated("xyz", 7).to_string(), repeat("xyz", 7));
    }
}
