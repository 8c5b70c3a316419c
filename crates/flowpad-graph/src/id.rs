use uuid::Uuid;

/// Source of unique node identifiers.
///
/// Uniqueness within one session is the whole contract - no ordering or
/// format is promised. The trait exists so tests and reproducible scripts
/// can substitute a deterministic sequence for the default random source.
pub trait IdSource {
  /// Produce the next identifier.
  fn next_id(&mut self) -> String;
}

/// Default id source backed by v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
  fn next_id(&mut self) -> String {
    Uuid::new_v4().to_string()
  }
}

/// Deterministic id source: `n1`, `n2`, `n3`, ...
#[derive(Debug, Clone, Default)]
pub struct SequentialIdSource {
  counter: u64,
}

impl SequentialIdSource {
  pub fn new() -> Self {
    Self::default()
  }
}

impl IdSource for SequentialIdSource {
  fn next_id(&mut self) -> String {
    self.counter += 1;
    format!("n{}", self.counter)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_sequential_ids() {
    let mut ids = SequentialIdSource::new();
    assert_eq!(ids.next_id(), "n1");
    assert_eq!(ids.next_id(), "n2");
    assert_eq!(ids.next_id(), "n3");
  }

  #[test]
  fn test_uuid_ids_are_distinct() {
    let mut ids = UuidIdSource;
    let a = ids.next_id();
    let b = ids.next_id();
    assert_ne!(a, b);
  }
}
