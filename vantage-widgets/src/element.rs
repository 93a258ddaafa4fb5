use std::collections::{BTreeMap, BTreeSet};

/// Class list and attributes of one page element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    id: String,
    classes: BTreeSet<String>,
    attrs: BTreeMap<String, String>,
}

impl Element {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_class(mut self, classes: &str) -> Self {
        self.add_class(classes);
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Whether every whitespace-separated class in `classes` is present.
    pub fn has_classes(&self, classes: &str) -> bool {
        let mut wanted = classes.split_whitespace().peekable();
        wanted.peek().is_some() && wanted.all(|class| self.has_class(class))
    }

    /// Add one or more whitespace-separated classes.
    pub fn add_class(&mut self, classes: &str) {
        self.classes
            .extend(classes.split_whitespace().map(ToOwned::to_owned));
    }

    /// Remove one or more whitespace-separated classes.
    pub fn remove_class(&mut self, classes: &str) {
        for class in classes.split_whitespace() {
            self.classes.remove(class);
        }
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.remove(name);
    }
}
