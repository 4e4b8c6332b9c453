use super::game_view::GameView;
use crate::catalog;
use crate::model::{compute_layout, GameSession, LayoutError, LayoutParams};
use crate::util::{clog, format_scale, format_size};
use yew::prelude::*;

fn screen_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(800.0)
}

fn build_session() -> Result<GameSession, LayoutError> {
    let width = screen_width();
    // Cosmetic staging scatter; the seed is the only entropy in the core.
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u32;
    let mut params = LayoutParams::new(
        catalog::BOARD_NATIVE,
        catalog::piece_natives(),
        catalog::GRID,
        width,
    );
    params.jitter_seed = Some(seed);
    let session = compute_layout(&params)?;
    clog(&format!(
        "board native {}, scaled {} (scale {})",
        format_size(&catalog::BOARD_NATIVE),
        format_size(&session.board_size),
        format_scale(session.scale_factor)
    ));
    for piece in &session.pieces {
        clog(&format!(
            "piece {} native {} scaled {}",
            piece.index + 1,
            format_size(&piece.native_size),
            format_size(&piece.scaled_size)
        ));
    }
    Ok(session)
}

#[function_component(App)]
pub fn app() -> Html {
    let session = use_state(build_session);
    match &*session {
        Ok(initial) => html! { <GameView initial={initial.clone()} /> },
        Err(err) => html! {
            <div style="padding:24px; color:#f85149; font-family:sans-serif;">
                <h2>{"Puzzle layout failed"}</h2>
                <p>{ err.to_string() }</p>
            </div>
        },
    }
}
