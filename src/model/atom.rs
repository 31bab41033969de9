use serde::Serialize;

use super::types::Element;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Atom {
    pub element: Element,
    pub position: [f64; 2],
    pub id: u64,
}

impl Atom {
    pub fn new(element: Element, position: [f64; 2], id: u64) -> Self {
        Self {
            element,
            position,
            id,
        }
    }

    /// Whether `point` falls inside the rendered disc of this atom.
    pub fn contains(&self, point: [f64; 2]) -> bool {
        let dx = point[0] - self.position[0];
        let dy = point[1] - self.position[1];
        (dx * dx + dy * dy).sqrt() <= self.element.radius()
    }
}
