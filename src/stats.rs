use hashbrown::HashMap;

/// Mistake counts, keyed by term. Carries no ordering of its own; callers pass
/// the card order in when they need entries listed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Stats {
    mistakes: HashMap<String, u32>,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            mistakes: HashMap::new(),
        }
    }

    ///Starts tracking `term` at zero. Existing counts are left alone.
    pub fn track(&mut self, term: &str) {
        if !self.mistakes.contains_key(term) {
            self.mistakes.insert(term.to_owned(), 0);
        }
    }

    pub fn increment(&mut self, term: &str) -> u32 {
        let count = self.mistakes.entry_ref(term).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    pub fn set(&mut self, term: &str, count: u32) {
        self.mistakes.insert(term.to_owned(), count);
    }

    pub fn reset(&mut self) {
        self.mistakes.values_mut().for_each(|count| *count = 0);
    }

    pub fn get(&self, term: &str) -> u32 {
        self.mistakes.get(term).copied().unwrap_or(0)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.mistakes.contains_key(term)
    }

    pub fn forget(&mut self, term: &str) -> Option<u32> {
        self.mistakes.remove(term)
    }

    ///Tracked `(term, count)` pairs, in the order given by `order`.
    ///Terms in `order` that aren't tracked are skipped.
    pub fn entries<'a>(
        &'a self,
        order: impl IntoIterator<Item = &'a String>,
    ) -> impl Iterator<Item = (&'a str, u32)> {
        order.into_iter().filter_map(|term| {
            self.mistakes
                .get(term.as_str())
                .map(|count| (term.as_str(), *count))
        })
    }

    pub fn max(&self) -> u32 {
        self.mistakes.values().copied().max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.mistakes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mistakes.is_empty()
    }
}
