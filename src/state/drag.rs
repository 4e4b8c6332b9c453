// Active pointer gesture state, shared between the piece views and the
// window-level move/up listeners. Never part of the session reducer: the
// core only sees begin/delta/end events.
#[derive(Default, Debug, Clone)]
pub struct DragState {
    pub piece: Option<usize>,
    pub last_x: f64,
    pub last_y: f64,
}

impl DragState {
    pub fn begin(&mut self, piece: usize, x: f64, y: f64) {
        self.piece = Some(piece);
        self.last_x = x;
        self.last_y = y;
    }

    /// Advances the pointer and returns (piece, dx, dy) while a drag is live.
    pub fn advance(&mut self, x: f64, y: f64) -> Option<(usize, f64, f64)> {
        let piece = self.piece?;
        let dx = x - self.last_x;
        let dy = y - self.last_y;
        self.last_x = x;
        self.last_y = y;
        Some((piece, dx, dy))
    }

    pub fn finish(&mut self) -> Option<usize> {
        self.piece.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_yields_deltas_only_while_dragging() {
        let mut drag = DragState::default();
        assert_eq!(drag.advance(5.0, 5.0), None);
        drag.begin(3, 10.0, 20.0);
        assert_eq!(drag.advance(13.0, 18.0), Some((3, 3.0, -2.0)));
        assert_eq!(drag.advance(13.0, 18.0), Some((3, 0.0, 0.0)));
        assert_eq!(drag.finish(), Some(3));
        assert_eq!(drag.advance(0.0, 0.0), None);
        assert_eq!(drag.finish(), None);
    }
}
