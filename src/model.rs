//! Core data model for the jigsaw puzzle.
//! Layout (target/staging positions, uniform scale) is computed once at
//! session start; placement state then mutates only through the reducer.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

/// Snap tolerance in screen units, per axis. Strict: a piece exactly this
/// far from its target does not lock.
pub const SNAP_TOLERANCE: f64 = 20.0;

/// Fraction of a staging cell used for cosmetic scatter of staged pieces.
pub const STAGING_JITTER_FRAC: f64 = 0.15;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridShape {
    pub rows: u32,
    pub cols: u32,
}

impl GridShape {
    pub fn piece_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }
}

/// Placement lifecycle of a single piece. `Locked` is terminal: a locked
/// piece ignores every further drag event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementPhase {
    Staged,
    Dragging,
    Locked,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    /// Stable identity, 0..rows*cols; row = index / cols, col = index % cols.
    pub index: usize,
    /// Source-image pixel size, fixed at creation.
    pub native_size: Size,
    /// Native size times the session scale factor; immutable after layout.
    pub scaled_size: Size,
    /// Correct placement in board coordinates; immutable after layout.
    pub target: Point,
    /// Current on-screen position, updated by drags and by snapping.
    pub current: Point,
    pub phase: PlacementPhase,
}

impl Piece {
    pub fn locked(&self) -> bool {
        self.phase == PlacementPhase::Locked
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("piece count {actual} does not match grid {rows}x{cols}")]
    InvalidGrid { rows: u32, cols: u32, actual: usize },
    #[error("{what} must be positive")]
    InvalidDimension { what: &'static str },
}

/// Inputs to `compute_layout`. Native sizes come from the image catalog;
/// everything else from the hosting screen and game configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutParams {
    pub board_native: Size,
    /// One entry per piece, in index order; length must equal rows*cols.
    pub piece_natives: Vec<Size>,
    pub grid: GridShape,
    pub screen_width: f64,
    /// Explicit scale factor; `None` derives screen_width / board width.
    pub scale_override: Option<f64>,
    pub snap_tolerance: f64,
    /// Top-left of the staging grid. `None` places it directly below the
    /// scaled board at x = 0.
    pub staging_origin: Option<Point>,
    /// Seed for deterministic staging scatter; `None` disables jitter.
    pub jitter_seed: Option<u32>,
}

impl LayoutParams {
    pub fn new(
        board_native: Size,
        piece_natives: Vec<Size>,
        grid: GridShape,
        screen_width: f64,
    ) -> Self {
        Self {
            board_native,
            piece_natives,
            grid,
            screen_width,
            scale_override: None,
            snap_tolerance: SNAP_TOLERANCE,
            staging_origin: None,
            jitter_seed: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    pub grid: GridShape,
    pub scale_factor: f64,
    /// Board size after scaling; the board's vertical extent gates snapping.
    pub board_size: Size,
    /// Horizontal offset centering the board within the screen width.
    pub board_offset_x: f64,
    pub snap_tolerance: f64,
    /// Index order; position i holds the piece with index i.
    pub pieces: Vec<Piece>,
    /// Flipped by the start/reference toggle; never touches piece state.
    pub started: bool,
}

impl GameSession {
    pub fn solved(&self) -> bool {
        !self.pieces.is_empty() && self.pieces.iter().all(|p| p.locked())
    }

    pub fn placed_count(&self) -> usize {
        self.pieces.iter().filter(|p| p.locked()).count()
    }
}

// splitmix32 mix for staging jitter: cheap, seedable, no global state.
fn splitmix32(mut value: u32) -> u32 {
    value = value.wrapping_add(0x9E37_79B9);
    let mut z = value;
    z = (z ^ (z >> 16)).wrapping_mul(0x85EB_CA6B);
    z = (z ^ (z >> 13)).wrapping_mul(0xC2B2_AE35);
    z ^ (z >> 16)
}

fn jitter_unit(seed: u32, salt: u32) -> f64 {
    let mixed = splitmix32(seed ^ salt);
    (mixed >> 8) as f64 / (1u32 << 24) as f64
}

/// Builds a fresh session: validates inputs, derives the uniform scale
/// factor, and assigns each piece its target cell plus a staging position.
pub fn compute_layout(params: &LayoutParams) -> Result<GameSession, LayoutError> {
    let grid = params.grid;
    if grid.rows == 0 || grid.cols == 0 || params.piece_natives.len() != grid.piece_count() {
        return Err(LayoutError::InvalidGrid {
            rows: grid.rows,
            cols: grid.cols,
            actual: params.piece_natives.len(),
        });
    }
    if params.board_native.width <= 0.0 || params.board_native.height <= 0.0 {
        return Err(LayoutError::InvalidDimension {
            what: "board native size",
        });
    }
    if params.screen_width <= 0.0 {
        return Err(LayoutError::InvalidDimension {
            what: "screen width",
        });
    }
    if params
        .piece_natives
        .iter()
        .any(|n| n.width <= 0.0 || n.height <= 0.0)
    {
        return Err(LayoutError::InvalidDimension {
            what: "piece native size",
        });
    }

    let scale = params
        .scale_override
        .unwrap_or(params.screen_width / params.board_native.width);
    let board_size = Size {
        width: params.board_native.width * scale,
        height: params.board_native.height * scale,
    };
    let board_offset_x = ((params.screen_width - board_size.width) / 2.0).max(0.0);
    let cell_w = params.board_native.width / grid.cols as f64 * scale;
    let cell_h = params.board_native.height / grid.rows as f64 * scale;

    // Staging grid cell: max scaled piece extent, so staged pieces never
    // overlap regardless of their heterogeneous native sizes.
    let mut stage_cell_w: f64 = 0.0;
    let mut stage_cell_h: f64 = 0.0;
    for n in &params.piece_natives {
        stage_cell_w = stage_cell_w.max(n.width * scale);
        stage_cell_h = stage_cell_h.max(n.height * scale);
    }
    let stage_origin = params.staging_origin.unwrap_or(Point {
        x: 0.0,
        y: board_size.height,
    });

    let mut pieces = Vec::with_capacity(grid.piece_count());
    for (i, native) in params.piece_natives.iter().enumerate() {
        let row = i / grid.cols as usize;
        let col = i % grid.cols as usize;
        let target = Point {
            x: board_offset_x + col as f64 * cell_w,
            y: row as f64 * cell_h,
        };
        let mut current = Point {
            x: stage_origin.x + col as f64 * stage_cell_w,
            y: stage_origin.y + row as f64 * stage_cell_h,
        };
        if let Some(seed) = params.jitter_seed {
            let i = i as u32;
            current.x += jitter_unit(seed, i * 2) * stage_cell_w * STAGING_JITTER_FRAC;
            current.y += jitter_unit(seed, i * 2 + 1) * stage_cell_h * STAGING_JITTER_FRAC;
        }
        pieces.push(Piece {
            index: i,
            native_size: *native,
            scaled_size: Size {
                width: native.width * scale,
                height: native.height * scale,
            },
            target,
            current,
            phase: PlacementPhase::Staged,
        });
    }

    Ok(GameSession {
        grid,
        scale_factor: scale,
        board_size,
        board_offset_x,
        snap_tolerance: params.snap_tolerance,
        pieces,
        started: false,
    })
}

// ---------------- Reducer & Actions -----------------

/// Drag events from the UI plus the start/reference toggle. Events naming
/// an unknown or locked piece are no-ops, never errors: they can only
/// arise from stale or duplicate input.
#[derive(Clone, Debug)]
pub enum SessionAction {
    BeginDrag { index: usize },
    DragBy { index: usize, dx: f64, dy: f64 },
    EndDrag { index: usize },
    ToggleStarted,
}

impl Reducible for GameSession {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use SessionAction::*;
        match action {
            ToggleStarted => {
                let mut new = (*self).clone();
                new.started = !new.started;
                Rc::new(new)
            }
            BeginDrag { index } => {
                let Some(piece) = self.pieces.get(index) else {
                    return self;
                };
                if piece.phase != PlacementPhase::Staged {
                    return self;
                }
                let mut new = (*self).clone();
                new.pieces[index].phase = PlacementPhase::Dragging;
                Rc::new(new)
            }
            DragBy { index, dx, dy } => {
                let Some(piece) = self.pieces.get(index) else {
                    return self;
                };
                if piece.locked() {
                    return self;
                }
                let mut new = (*self).clone();
                let tolerance = new.snap_tolerance;
                let board_height = new.board_size.height;
                let p = &mut new.pieces[index];
                p.current.x += dx;
                p.current.y += dy;
                // Snap is evaluated on every delta. Over-board uses the
                // y-extent only; the missing x check is deliberate.
                let over_board = p.current.y < board_height;
                if over_board
                    && (p.current.x - p.target.x).abs() < tolerance
                    && (p.current.y - p.target.y).abs() < tolerance
                {
                    p.current = p.target;
                    p.phase = PlacementPhase::Locked;
                }
                Rc::new(new)
            }
            EndDrag { index } => {
                let Some(piece) = self.pieces.get(index) else {
                    return self;
                };
                if piece.phase != PlacementPhase::Dragging {
                    return self;
                }
                let mut new = (*self).clone();
                new.pieces[index].phase = PlacementPhase::Staged;
                Rc::new(new)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARD: Size = Size {
        width: 1024.0,
        height: 768.0,
    };
    const GRID: GridShape = GridShape { rows: 3, cols: 4 };
    const SCREEN: f64 = 410.0;

    fn uniform_natives() -> Vec<Size> {
        // Exact cell-sized natives: 1024/4 = 768/3 = 256.
        vec![
            Size {
                width: 256.0,
                height: 256.0,
            };
            12
        ]
    }

    fn params() -> LayoutParams {
        LayoutParams::new(BOARD, uniform_natives(), GRID, SCREEN)
    }

    fn session() -> GameSession {
        compute_layout(&params()).unwrap()
    }

    fn dispatch(session: GameSession, action: SessionAction) -> GameSession {
        let rc = Rc::new(session).reduce(action);
        (*rc).clone()
    }

    fn drag_to(mut s: GameSession, index: usize, x: f64, y: f64) -> GameSession {
        let from = s.pieces[index].current;
        s = dispatch(s, SessionAction::BeginDrag { index });
        dispatch(
            s,
            SessionAction::DragBy {
                index,
                dx: x - from.x,
                dy: y - from.y,
            },
        )
    }

    #[test]
    fn targets_tile_the_board_without_gaps_or_overlaps() {
        let s = session();
        let cell_w = BOARD.width / 4.0 * s.scale_factor;
        let cell_h = BOARD.height / 3.0 * s.scale_factor;
        for p in &s.pieces {
            let row = p.index / 4;
            let col = p.index % 4;
            assert!((p.target.x - (s.board_offset_x + col as f64 * cell_w)).abs() < 1e-9);
            assert!((p.target.y - row as f64 * cell_h).abs() < 1e-9);
            assert!((p.scaled_size.width - cell_w).abs() < 1e-9);
            assert!((p.scaled_size.height - cell_h).abs() < 1e-9);
        }
        // Right/bottom edges of the last column/row close the board exactly.
        let last = &s.pieces[11];
        assert!(
            (last.target.x + last.scaled_size.width - (s.board_offset_x + s.board_size.width))
                .abs()
                < 1e-9
        );
        assert!((last.target.y + last.scaled_size.height - s.board_size.height).abs() < 1e-9);
    }

    #[test]
    fn scale_factor_derived_from_screen_width() {
        let s = session();
        assert!((s.scale_factor - 410.0 / 1024.0).abs() < 1e-12);
        assert!((s.board_size.width - 410.0).abs() < 1e-9);
        // Board fills the screen width, so no centering offset.
        assert_eq!(s.board_offset_x, 0.0);
    }

    #[test]
    fn piece_five_target_matches_reference_scenario() {
        let s = session();
        let scale = 410.0 / 1024.0;
        let p = &s.pieces[5]; // row 1, col 1
        assert!((p.target.x - (1024.0 / 4.0) * scale).abs() < 1e-9);
        assert!((p.target.y - (768.0 / 3.0) * scale).abs() < 1e-9);
    }

    #[test]
    fn explicit_scale_override_is_honored() {
        let mut params = params();
        params.scale_override = Some(0.4013672);
        let s = compute_layout(&params).unwrap();
        assert!((s.scale_factor - 0.4013672).abs() < 1e-12);
        // Scaled board is slightly wider than the screen; offset clamps to 0.
        assert!(s.board_size.width > SCREEN);
        assert_eq!(s.board_offset_x, 0.0);
        let p = &s.pieces[5];
        assert!((p.target.x - 256.0 * 0.4013672).abs() < 1e-9);
    }

    #[test]
    fn narrow_board_is_centered_horizontally() {
        let mut params = params();
        params.scale_override = Some(0.25);
        let s = compute_layout(&params).unwrap();
        assert!((s.board_size.width - 256.0).abs() < 1e-9);
        assert!((s.board_offset_x - (410.0 - 256.0) / 2.0).abs() < 1e-9);
        assert!((s.pieces[0].target.x - s.board_offset_x).abs() < 1e-9);
    }

    #[test]
    fn staging_grid_sits_below_the_board() {
        let s = session();
        for p in &s.pieces {
            assert!(p.current.y >= s.board_size.height);
            assert_eq!(p.phase, PlacementPhase::Staged);
        }
        // Distinct staging cells: no two pieces share a position.
        for a in &s.pieces {
            for b in &s.pieces {
                if a.index != b.index {
                    assert!(a.current != b.current);
                }
            }
        }
    }

    #[test]
    fn staging_jitter_is_deterministic_per_seed() {
        let mut with_seed = params();
        with_seed.jitter_seed = Some(42);
        let a = compute_layout(&with_seed).unwrap();
        let b = compute_layout(&with_seed).unwrap();
        assert_eq!(a.pieces, b.pieces);

        let plain = session();
        let cell_w = 256.0 * plain.scale_factor;
        let cell_h = 256.0 * plain.scale_factor;
        for (j, p) in a.pieces.iter().zip(&plain.pieces) {
            // Jitter stays within the configured fraction of a staging cell.
            assert!(j.current.x >= p.current.x);
            assert!(j.current.x - p.current.x <= cell_w * STAGING_JITTER_FRAC);
            assert!(j.current.y >= p.current.y);
            assert!(j.current.y - p.current.y <= cell_h * STAGING_JITTER_FRAC);
            assert_eq!(j.target, p.target);
        }

        let mut other_seed = params();
        other_seed.jitter_seed = Some(43);
        let c = compute_layout(&other_seed).unwrap();
        assert_ne!(a.pieces, c.pieces);
    }

    #[test]
    fn grid_mismatch_is_rejected() {
        let mut params = params();
        params.piece_natives.pop();
        assert_eq!(
            compute_layout(&params),
            Err(LayoutError::InvalidGrid {
                rows: 3,
                cols: 4,
                actual: 11
            })
        );
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        let mut bad_screen = params();
        bad_screen.screen_width = 0.0;
        assert!(matches!(
            compute_layout(&bad_screen),
            Err(LayoutError::InvalidDimension { .. })
        ));

        let mut bad_piece = params();
        bad_piece.piece_natives[3].height = -1.0;
        assert!(matches!(
            compute_layout(&bad_piece),
            Err(LayoutError::InvalidDimension { .. })
        ));

        let mut bad_board = params();
        bad_board.board_native.width = 0.0;
        assert!(matches!(
            compute_layout(&bad_board),
            Err(LayoutError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn zero_sum_drag_returns_to_prior_position() {
        let mut s = session();
        let before = s.pieces[7].current;
        s = dispatch(s, SessionAction::BeginDrag { index: 7 });
        for (dx, dy) in [(30.0, -12.5), (-17.25, 40.0), (-12.75, -27.5)] {
            s = dispatch(s, SessionAction::DragBy { index: 7, dx, dy });
        }
        let after = s.pieces[7].current;
        assert!((after.x - before.x).abs() < 1e-9);
        assert!((after.y - before.y).abs() < 1e-9);
        assert_eq!(s.pieces[7].phase, PlacementPhase::Dragging);
    }

    #[test]
    fn near_target_drag_snaps_and_locks() {
        let mut s = session();
        let target = s.pieces[0].target;
        s = drag_to(s, 0, target.x + 10.0, target.y + 10.0);
        let p = &s.pieces[0];
        assert_eq!(p.phase, PlacementPhase::Locked);
        // Exact snap, not a visual nudge.
        assert_eq!(p.current, p.target);
    }

    #[test]
    fn tolerance_boundary_is_strict() {
        let eps = 1e-6;
        let s = session();
        let target = s.pieces[0].target;

        let near = drag_to(
            s.clone(),
            0,
            target.x + SNAP_TOLERANCE - eps,
            target.y + SNAP_TOLERANCE - eps,
        );
        assert_eq!(near.pieces[0].phase, PlacementPhase::Locked);

        let at = drag_to(s, 0, target.x + SNAP_TOLERANCE, target.y + SNAP_TOLERANCE);
        assert_eq!(at.pieces[0].phase, PlacementPhase::Dragging);
        assert!((at.pieces[0].current.x - (target.x + SNAP_TOLERANCE)).abs() < 1e-9);
    }

    #[test]
    fn piece_below_board_extent_never_snaps() {
        // Widen the tolerance so only the y-extent guard can decide.
        let mut params = params();
        params.snap_tolerance = 500.0;
        let s = compute_layout(&params).unwrap();
        let bottom = &s.pieces[8]; // row 2, col 0
        let target = bottom.target;
        let board_height = s.board_size.height;
        assert!(board_height - target.y < 500.0);

        let outside = drag_to(s.clone(), 8, target.x, board_height);
        assert_eq!(outside.pieces[8].phase, PlacementPhase::Dragging);
        assert!((outside.pieces[8].current.y - board_height).abs() < 1e-9);

        let inside = drag_to(s, 8, target.x, board_height - 1.0);
        assert_eq!(inside.pieces[8].phase, PlacementPhase::Locked);
    }

    #[test]
    fn released_piece_keeps_dragged_position() {
        let mut s = session();
        let start = s.pieces[2].current;
        s = dispatch(s, SessionAction::BeginDrag { index: 2 });
        s = dispatch(
            s,
            SessionAction::DragBy {
                index: 2,
                dx: 5.0,
                dy: 9.0,
            },
        );
        s = dispatch(s, SessionAction::EndDrag { index: 2 });
        let p = &s.pieces[2];
        assert_eq!(p.phase, PlacementPhase::Staged);
        assert!((p.current.x - (start.x + 5.0)).abs() < 1e-9);
        assert!((p.current.y - (start.y + 9.0)).abs() < 1e-9);
    }

    #[test]
    fn locked_piece_ignores_all_drag_events() {
        let mut s = session();
        let target = s.pieces[0].target;
        s = drag_to(s, 0, target.x + 1.0, target.y + 1.0);
        assert!(s.pieces[0].locked());

        s = dispatch(s, SessionAction::BeginDrag { index: 0 });
        s = dispatch(
            s,
            SessionAction::DragBy {
                index: 0,
                dx: 100.0,
                dy: 100.0,
            },
        );
        s = dispatch(s, SessionAction::EndDrag { index: 0 });
        let p = &s.pieces[0];
        assert_eq!(p.phase, PlacementPhase::Locked);
        assert_eq!(p.current, p.target);
    }

    #[test]
    fn unknown_piece_index_is_a_no_op() {
        let s = session();
        let after = dispatch(
            s.clone(),
            SessionAction::DragBy {
                index: 99,
                dx: 5.0,
                dy: 5.0,
            },
        );
        assert_eq!(after, s);
        let after = dispatch(s.clone(), SessionAction::BeginDrag { index: 99 });
        assert_eq!(after, s);
        let after = dispatch(s.clone(), SessionAction::EndDrag { index: 99 });
        assert_eq!(after, s);
    }

    #[test]
    fn toggle_started_leaves_piece_state_alone() {
        let mut s = session();
        let pieces_before = s.pieces.clone();
        assert!(!s.started);
        s = dispatch(s, SessionAction::ToggleStarted);
        assert!(s.started);
        assert_eq!(s.pieces, pieces_before);
        s = dispatch(s, SessionAction::ToggleStarted);
        assert!(!s.started);
    }

    #[test]
    fn session_solves_when_every_piece_locks() {
        let mut s = session();
        assert!(!s.solved());
        for i in 0..12 {
            let target = s.pieces[i].target;
            s = drag_to(s, i, target.x + 1.0, target.y + 1.0);
        }
        assert_eq!(s.placed_count(), 12);
        assert!(s.solved());
    }
}
