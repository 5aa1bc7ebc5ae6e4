use std::collections::HashMap;
use std::hash::Hash;

/// One distinct value with the input position where it first appeared and
/// how many times it has been seen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tally<T> {
    pub value: T,
    pub first_seen: usize,
    pub count: usize,
}

/// Occurrence counts kept in first-seen order.
///
/// Entries are stored in the order values were first pushed, so the mode
/// tie-break (earliest value wins) does not depend on hash iteration order.
/// The running maximum is maintained on every push.
#[derive(Clone, Debug)]
pub struct FrequencyTable<T> {
    entries: Vec<Tally<T>>,
    index: HashMap<T, usize>,
    total: usize,
    best: Option<usize>,
}

impl<T> Default for FrequencyTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            total: 0,
            best: None,
        }
    }
}

impl<T: Eq + Hash + Clone> FrequencyTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: T) {
        let slot = match self.index.get(&value) {
            Some(&slot) => {
                self.entries[slot].count += 1;
                slot
            }
            None => {
                let slot = self.entries.len();
                self.index.insert(value.clone(), slot);
                self.entries.push(Tally {
                    value,
                    first_seen: self.total,
                    count: 1,
                });
                slot
            }
        };
        self.total += 1;

        let count = self.entries[slot].count;
        self.best = match self.best {
            Some(best) if self.entries[best].count > count => Some(best),
            Some(best) if self.entries[best].count == count && best < slot => Some(best),
            _ => Some(slot),
        };
    }

    /// Occurrences of `value`, zero if never pushed.
    pub fn count(&self, value: &T) -> usize {
        self.index
            .get(value)
            .map_or(0, |&slot| self.entries[slot].count)
    }

    /// Number of values pushed, counting repeats.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Tally<T>] {
        &self.entries
    }

    /// The most frequent value and its count; the first-seen value wins ties.
    pub fn most_common(&self) -> Option<(&T, usize)> {
        self.best.map(|slot| {
            let tally = &self.entries[slot];
            (&tally.value, tally.count)
        })
    }

    pub fn into_most_common(mut self) -> (Option<T>, usize) {
        match self.best {
            Some(slot) => {
                let tally = self.entries.swap_remove(slot);
                (Some(tally.value), tally.count)
            }
            None => (None, 0),
        }
    }
}

impl<T: Eq + Hash + Clone> Extend<T> for FrequencyTable<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Eq + Hash + Clone> FromIterator<T> for FrequencyTable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

/// Most frequent value in `values` with its count, `(None, 0)` when empty.
///
/// When several values share the highest count, the one that appeared first
/// in the input is returned.
pub fn most_common<T, I>(values: I) -> (Option<T>, usize)
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    values.into_iter().collect::<FrequencyTable<T>>().into_most_common()
}
