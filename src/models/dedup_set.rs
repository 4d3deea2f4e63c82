use std::collections::HashSet;

/// Lowercased names already seen by the importer.
#[derive(Debug, Default, Clone)]
pub struct DedupSet {
    names: HashSet<String>,
}

impl DedupSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str) -> bool {
        self.names.insert(name.to_lowercase())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.to_lowercase())
    }

    pub fn extend<'a, I>(&mut self, names: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for name in names {
            self.insert(name);
        }
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }
}
