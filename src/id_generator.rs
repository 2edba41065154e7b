/// Stable, never-reused handle to a shape in a `ShapeCollection`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(usize);

impl ShapeId {
    pub fn get(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Per-collection counter issuing `ShapeId`s
#[derive(Debug)]
pub struct IdGenerator {
    next: usize,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdGenerator {
    pub fn generate_id(&mut self) -> ShapeId {
        let id = ShapeId(self.next);
        self.next += 1;
        id
    }
}
