//! Default names for newly created objects.

/// Hands out names like `New Class-3`.
///
/// The counter is shared across stems and only grows within a session; the
/// store still rejects a name that already exists.
#[derive(Debug, Clone, Default)]
pub struct ObjectNamer {
    counter: u32,
}

impl ObjectNamer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_name(&mut self, stem: &str) -> String {
        self.counter = self.counter.wrapping_add(1);
        format!("{}-{}", stem, self.counter)
    }
}
