use crate::model::{Piece, PlacementPhase};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PieceViewProps {
    pub piece: Piece,
    pub asset: &'static str,
    /// (index, client_x, client_y) on mouse/touch down.
    pub on_pointer_down: Callback<(usize, f64, f64)>,
}

#[function_component(PieceView)]
pub fn piece_view(props: &PieceViewProps) -> Html {
    let piece = props.piece;

    let onmousedown = {
        let cb = props.on_pointer_down.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            cb.emit((piece.index, e.client_x() as f64, e.client_y() as f64));
        })
    };
    let ontouchstart = {
        let cb = props.on_pointer_down.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(t0) = e.touches().item(0) {
                e.prevent_default();
                cb.emit((piece.index, t0.client_x() as f64, t0.client_y() as f64));
            }
        })
    };

    let cursor = if piece.locked() { "default" } else { "grab" };
    let z = match piece.phase {
        PlacementPhase::Dragging => 3,
        PlacementPhase::Locked => 1,
        PlacementPhase::Staged => 2,
    };
    let style = format!(
        "position:absolute; left:{}px; top:{}px; width:{}px; height:{}px; cursor:{}; z-index:{}; user-select:none; -webkit-user-drag:none; touch-action:none;",
        piece.current.x,
        piece.current.y,
        piece.scaled_size.width,
        piece.scaled_size.height,
        cursor,
        z
    );

    html! {
        <img
            src={props.asset}
            alt={format!("Puzzle piece {}", piece.index + 1)}
            draggable="false"
            {style}
            {onmousedown}
            {ontouchstart}
        />
    }
}
