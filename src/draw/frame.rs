//! Frame container for the ordered shape collection.

use super::shape::Shape;

/// Container for all shapes on the canvas.
///
/// Shapes are kept in paint order: the first shape is the bottom layer and
/// the last one is drawn on top of everything else.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    shapes: Vec<Shape>,
}

impl Frame {
    /// Creates a new empty frame with no shapes.
    pub fn new() -> Self {
        Self::default()
    }

    /// All shapes in paint order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Shape> {
        self.shapes.get_mut(index)
    }

    /// Attempts to add a shape on top, enforcing a maximum shape count when `max` > 0.
    ///
    /// Returns the index of the new shape, or `None` if the limit would be exceeded.
    pub fn try_add_shape(&mut self, shape: Shape, max: usize) -> Option<usize> {
        if max == 0 || self.shapes.len() < max {
            self.shapes.push(shape);
            Some(self.shapes.len() - 1)
        } else {
            None
        }
    }

    /// Removes and returns the shape at `index`, shifting later shapes down.
    pub fn remove(&mut self, index: usize) -> Option<Shape> {
        (index < self.shapes.len()).then(|| self.shapes.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{GREEN, RED};

    #[test]
    fn try_add_shape_respects_limit() {
        let mut frame = Frame::new();
        assert_eq!(
            frame.try_add_shape(Shape::line(0.0, 0.0, 1.0, 1.0, RED, 2), 1),
            Some(0)
        );
        assert_eq!(
            frame.try_add_shape(Shape::line(1.0, 1.0, 2.0, 2.0, GREEN, 2), 1),
            None
        );
        assert_eq!(frame.len(), 1);
    }

    #[test]
    fn remove_keeps_paint_order() {
        let mut frame = Frame::new();
        for i in 0..3 {
            frame.try_add_shape(Shape::line(i as f64, 0.0, 5.0, 5.0, RED, 1), 0);
        }
        assert!(frame.remove(1).is_some());
        assert!(frame.remove(7).is_none());
        let starts: Vec<f64> = frame
            .shapes()
            .iter()
            .map(|s| s.bounding_box().x)
            .collect();
        assert_eq!(starts, vec![0.0, 2.0]);
    }
}
