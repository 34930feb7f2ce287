//! In-memory navigation history.

/// Stack of visited locations with a cursor, like a browser tab's history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    index: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry after the current one, dropping any forward entries.
    pub fn push(&mut self, location: impl Into<String>) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
        self.entries.push(location.into());
        self.index = self.entries.len() - 1;
    }

    /// Overwrite the current entry.
    pub fn replace(&mut self, location: impl Into<String>) {
        match self.entries.get_mut(self.index) {
            Some(entry) => *entry = location.into(),
            None => self.push(location),
        }
    }

    /// Move the cursor by `delta` entries. Returns the new current entry, or
    /// `None` (cursor unchanged) when that would leave the stack.
    pub fn go(&mut self, delta: isize) -> Option<&str> {
        let target = self.index.checked_add_signed(delta)?;
        if target >= self.entries.len() {
            return None;
        }
        self.index = target;
        self.current()
    }

    pub fn back(&mut self) -> Option<&str> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Option<&str> {
        self.go(1)
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.index).map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_navigate() {
        let mut history = History::new();
        assert_eq!(history.current(), None);
        assert_eq!(history.back(), None);

        history.push("/");
        history.push("/GetUser");
        history.push("/DelUser");
        assert_eq!(history.current(), Some("/DelUser"));

        assert_eq!(history.back(), Some("/GetUser"));
        assert_eq!(history.back(), Some("/"));
        assert_eq!(history.back(), None);
        assert_eq!(history.current(), Some("/"));
        assert_eq!(history.forward(), Some("/GetUser"));
    }

    #[test]
    fn test_push_drops_forward_entries() {
        let mut history = History::new();
        history.push("/");
        history.push("/GetUser");
        history.back();
        history.push("/InsUser");

        assert_eq!(history.entries(), ["/", "/InsUser"]);
        assert_eq!(history.forward(), None);
    }

    #[test]
    fn test_replace() {
        let mut history = History::new();
        history.replace("/");
        assert_eq!(history.len(), 1);

        history.push("/nope");
        history.replace("/");
        assert_eq!(history.entries(), ["/", "/"]);
    }
}
