//! Equivalence classes over name keys.
//!
//! Diminutive tables and transliteration-equivalence tables are both
//! many-to-many relations that must be symmetric and transitive. They are
//! built with a union-find and then frozen into a class index, so those
//! properties hold by construction: adding `{robert, bob}` and `{bob, bobby}`
//! yields one class `{bob, bobby, robert}`.

use fxhash::FxHashMap;

/// Immutable partition of name keys into equivalence classes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquivalenceGraph {
    index: FxHashMap<String, usize>,
    classes: Vec<Vec<String>>,
}

/// Per-language diminutive relation ({Robert, Bob, Rob, Bobby} is one class).
pub type DiminutiveGraph = EquivalenceGraph;

impl EquivalenceGraph {
    pub fn builder() -> EquivalenceBuilder {
        EquivalenceBuilder::default()
    }

    /// Builds a graph from a list of classes. Classes sharing a member merge.
    pub fn from_classes<C, S>(classes: &[C]) -> Self
    where
        C: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut builder = Self::builder();
        for class in classes {
            builder.add_class(class.as_ref().iter().map(|m| AsRef::<str>::as_ref(m)));
        }
        builder.build()
    }

    /// Sorted members of the class containing `key`, if `key` is known.
    pub fn class_of(&self, key: &str) -> Option<&[String]> {
        self.index
            .get(key)
            .map(|&id| self.classes[id].as_slice())
    }

    /// Whether `a` and `b` are distinct known keys of one class, or equal.
    pub fn equivalent(&self, a: &str, b: &str) -> bool {
        if a == b {
            return true;
        }
        match (self.index.get(a), self.index.get(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn classes(&self) -> impl Iterator<Item = &[String]> {
        self.classes.iter().map(Vec::as_slice)
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Reopens the graph for extension.
    pub fn to_builder(&self) -> EquivalenceBuilder {
        let mut builder = Self::builder();
        for class in &self.classes {
            builder.add_class(class.iter().map(String::as_str));
        }
        builder
    }
}

/// Union-find accumulator for [`EquivalenceGraph`].
#[derive(Debug, Default)]
pub struct EquivalenceBuilder {
    ids: FxHashMap<String, usize>,
    names: Vec<String>,
    parent: Vec<usize>,
}

impl EquivalenceBuilder {
    /// Adds a class. Members are folded to comparison keys; empty members
    /// are ignored.
    pub fn add_class<'a, I>(&mut self, members: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut first: Option<usize> = None;
        for member in members {
            let key = canonical::fold(member);
            if key.is_empty() {
                continue;
            }
            let id = self.intern(key);
            match first {
                Some(root) => self.union(root, id),
                None => first = Some(id),
            }
        }
        self
    }

    fn intern(&mut self, key: String) -> usize {
        if let Some(&id) = self.ids.get(&key) {
            return id;
        }
        let id = self.names.len();
        self.ids.insert(key.clone(), id);
        self.names.push(key);
        self.parent.push(id);
        id
    }

    fn find(&mut self, mut id: usize) -> usize {
        while self.parent[id] != id {
            self.parent[id] = self.parent[self.parent[id]];
            id = self.parent[id];
        }
        id
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            let (lo, hi) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[hi] = lo;
        }
    }

    /// Freezes the partition. Classes and their members come out sorted, so
    /// the same input always yields the same graph.
    pub fn build(mut self) -> EquivalenceGraph {
        let mut groups: FxHashMap<usize, Vec<String>> = FxHashMap::default();
        for id in 0..self.names.len() {
            let root = self.find(id);
            groups
                .entry(root)
                .or_default()
                .push(self.names[id].clone());
        }

        let mut classes: Vec<Vec<String>> = groups
            .into_values()
            .map(|mut members| {
                members.sort();
                members
            })
            .collect();
        classes.sort();

        let mut index = FxHashMap::default();
        for (id, class) in classes.iter().enumerate() {
            for member in class {
                index.insert(member.clone(), id);
            }
        }
        EquivalenceGraph { index, classes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_classes_merge_transitively() {
        let graph = EquivalenceGraph::from_classes(&[
            vec!["Robert", "Bob"],
            vec!["bob", "Bobby"],
            vec!["William", "Bill"],
        ]);
        assert_eq!(graph.len(), 2);
        assert_eq!(
            graph.class_of("robert"),
            Some(&["bob".to_string(), "bobby".to_string(), "robert".to_string()][..])
        );
        assert!(graph.equivalent("bobby", "robert"));
        assert!(graph.equivalent("robert", "bobby"));
        assert!(!graph.equivalent("bill", "bob"));
    }

    #[test]
    fn unknown_keys_are_only_equivalent_to_themselves() {
        let graph = EquivalenceGraph::from_classes(&[["bin", "ibn"]]);
        assert!(graph.equivalent("zed", "zed"));
        assert!(!graph.equivalent("zed", "bin"));
        assert_eq!(graph.class_of("zed"), None);
    }

    #[test]
    fn rebuilding_from_builder_is_stable() {
        let graph = EquivalenceGraph::from_classes(&[["b", "a"], ["c", "a"], ["x", "y"]]);
        let mut builder = graph.to_builder();
        builder.add_class(["y", "z"]);
        let extended = builder.build();
        assert_eq!(extended.len(), 2);
        assert!(extended.equivalent("x", "z"));
        assert_eq!(graph.to_builder().build(), graph);
    }
}
