use collections::{HashTable, TableError};
use log::{debug, info, warn};

use crate::DemoError;

/// Capacity used when none is given on the command line
pub const DEFAULT_CAPACITY: usize = 5;

/// Pairs written after the delete, a full table only skips them
const FILL: [(&str, &str); 3] = [
    ("Hi", "fam!"),
    ("aaldfjalkfj", "Fam!"),
    ("hi hi hi", "Bruv!"),
];

/// What a replayed session observed
#[derive(Debug)]
pub struct Outcome {
    pub table: HashTable<&'static str>,
    /// value read back for "hello"
    pub greeting: &'static str,
    /// result of the last insert before the delete
    pub inserted: bool,
    /// value removed with "ayy"
    pub removed: &'static str,
    /// fill keys that did not fit
    pub skipped: Vec<&'static str>,
}

/// Reads the table capacity from the first command line argument
pub fn parse_capacity(arg: Option<String>) -> Result<usize, DemoError> {
    match arg {
        None => Ok(DEFAULT_CAPACITY),
        Some(arg) => arg
            .trim()
            .parse()
            .map_err(|source| DemoError::InvalidCapacityArg { arg, source }),
    }
}

/// Runs the hello/yo/ayy session against a fresh table of `capacity` slots
pub fn replay(capacity: usize) -> Result<Outcome, DemoError> {
    let mut table: HashTable<&'static str> = HashTable::new(capacity)?;
    info!(target: "replay", "created table with {capacity} slots");

    let mut inserted = table.set("hello", "World!")?;
    debug!(target: "replay", "set hello: {inserted}");
    inserted = table.set("hello", "World!")?;
    debug!(target: "replay", "set hello again: {inserted}");

    let (greeting, slot) = table.get("hello")?;
    let greeting = *greeting;
    debug!(target: "replay", "get hello: {greeting:?} from slot {slot}");

    inserted = table.set("yo", "What up!")?;
    debug!(target: "replay", "set yo: {inserted}");
    inserted = table.set("ayy", "lmao")?;
    debug!(target: "replay", "set ayy: {inserted}");

    let removed = table.delete("ayy")?;
    debug!(target: "replay", "delete ayy: {removed:?}");

    let mut skipped = Vec::new();
    for (key, value) in FILL {
        match table.set(key, value) {
            Ok(stored) => debug!(target: "replay", "set {key}: {stored}"),
            Err(e @ TableError::TableFull { .. }) => {
                warn!(target: "replay", "skipping {key:?}: {e}");
                skipped.push(key);
            }
            Err(e) => return Err(e.into()),
        }
    }

    info!(target: "replay", "load factor: {}", table.load_factor());
    Ok(Outcome {
        table,
        greeting,
        inserted,
        removed,
        skipped,
    })
}

#[cfg(test)]
mod test {
    use collections::TableError;

    use super::{DEFAULT_CAPACITY, parse_capacity, replay};
    use crate::DemoError;

    #[test]
    fn default_capacity() {
        let out = replay(DEFAULT_CAPACITY).unwrap();

        assert_eq!(out.greeting, "World!");
        assert!(out.inserted);
        assert_eq!(out.removed, "lmao");
        assert!(out.skipped.is_empty());
        assert!(out.table.is_full());
        assert_eq!(
            out.table.get("ayy").unwrap_err(),
            TableError::KeyNotFound("ayy".into())
        );
        dbg!(out);
    }

    #[test]
    fn small_table_skips_fill() {
        let out = replay(3).unwrap();

        assert_eq!(out.skipped, vec!["aaldfjalkfj", "hi hi hi"]);
        assert_eq!(out.table.load_factor(), 1.0);
        assert_eq!(out.table.get("Hi").map(|(v, _)| *v), Ok("fam!"));
    }

    #[test]
    fn too_small_table() {
        assert!(matches!(
            replay(2),
            Err(DemoError::Table(TableError::TableFull { capacity: 2 }))
        ));
        assert!(matches!(
            replay(0),
            Err(DemoError::Table(TableError::InvalidCapacity(0)))
        ));
    }

    #[test]
    fn capacity_arg() {
        assert_eq!(parse_capacity(None).unwrap(), DEFAULT_CAPACITY);
        assert_eq!(parse_capacity(Some(" 12 ".into())).unwrap(), 12);
        assert!(matches!(
            parse_capacity(Some("lots".into())),
            Err(DemoError::InvalidCapacityArg { .. })
        ));
    }
}
