use std::borrow::Borrow;

/// Static code table, sorted by key.
pub type CodeTable<K> = &'static [(K, &'static str)];

/// Binary search of a sorted code table.
pub fn lookup<K, Q>(table: &[(K, &'static str)], key: &Q) -> Option<&'static str>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    table
        .binary_search_by(|(k, _)| k.borrow().cmp(key))
        .ok()
        .map(|i| table[i].1)
}

#[cfg(test)]
pub(crate) fn assert_sorted<K: Ord + std::fmt::Debug>(name: &str, table: &[(K, &'static str)]) {
    for window in table.windows(2) {
        assert!(
            window[0].0 < window[1].0,
            "{} not sorted: {:?} >= {:?}",
            name,
            window[0].0,
            window[1].0
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static NUMBERS: CodeTable<u32> = &[(1, "one"), (5, "five"), (9, "nine")];
    static LETTERS: CodeTable<&str> = &[("A0", "a zero"), ("AA", "double a")];

    #[test]
    fn test_lookup_numeric() {
        assert_eq!(lookup(NUMBERS, &5u32), Some("five"));
        assert_eq!(lookup(NUMBERS, &0u32), None);
        assert_eq!(lookup(NUMBERS, &10u32), None);
    }

    #[test]
    fn test_lookup_str() {
        let key = String::from("AA");
        assert_eq!(lookup(LETTERS, key.as_str()), Some("double a"));
        assert_eq!(lookup(LETTERS, "A1"), None);
        assert_eq!(lookup(LETTERS, ""), None);
    }

    #[test]
    fn test_tables_sorted() {
        assert_sorted("numbers", NUMBERS);
        assert_sorted("letters", LETTERS);
    }
}
