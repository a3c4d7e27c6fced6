// Reference resolution between catalog records

/// Records addressable by their store identifier.
pub trait Identified {
    fn id(&self) -> &str;
}

/// Outcome of following a reference. A broken reference is `NotFound`, not an error.
#[derive(Debug, PartialEq)]
pub enum Lookup<'a, T> {
    Found(&'a T),
    NotFound,
}

/// First record with the given id. An absent reference never resolves.
pub fn find_by_id<'a, T: Identified>(records: &'a [T], id: Option<&str>) -> Lookup<'a, T> {
    let Some(id) = id else {
        return Lookup::NotFound;
    };

    find_first(records, |record| record.id() == id)
}

pub fn find_first<'a, T>(records: &'a [T], predicate: impl Fn(&T) -> bool) -> Lookup<'a, T> {
    match records.iter().find(|record| predicate(record)) {
        Some(record) => Lookup::Found(record),
        None => Lookup::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row(&'static str, u8);

    impl Identified for Row {
        fn id(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_find_by_id() {
        let rows = [Row("a", 1), Row("b", 2), Row("b", 3)];

        assert_eq!(find_by_id(&rows, Some("a")), Lookup::Found(&Row("a", 1)));
        // first match wins on duplicate ids
        assert_eq!(find_by_id(&rows, Some("b")), Lookup::Found(&Row("b", 2)));
        assert_eq!(find_by_id(&rows, Some("z")), Lookup::NotFound);
        assert_eq!(find_by_id(&rows, None), Lookup::NotFound);
    }
}
