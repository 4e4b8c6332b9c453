use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::TouchEvent;
use yew::prelude::*;

use super::controls_panel::ControlsPanel;
use super::piece_view::PieceView;
use super::ruler::Ruler;
use super::solved_overlay::SolvedOverlay;
use super::stats_panel::StatsPanel;
use crate::catalog;
use crate::model::{GameSession, SessionAction};
use crate::state::DragState;

#[derive(Properties, PartialEq, Clone)]
pub struct GameViewProps {
    pub initial: GameSession,
}

#[function_component(GameView)]
pub fn game_view(props: &GameViewProps) -> Html {
    let session = {
        let initial = props.initial.clone();
        use_reducer(move || initial)
    };
    let drag = use_mut_ref(DragState::default);

    // Window-level move/up listeners so a drag survives leaving the piece.
    // Piece views only report pointer-down; everything else flows through
    // DragState into reducer dispatches.
    {
        let session = session.clone();
        let drag = drag.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");

            let mousemove_cb = {
                let session = session.clone();
                let drag = drag.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    let mut d = drag.borrow_mut();
                    if let Some((index, dx, dy)) = d.advance(e.client_x() as f64, e.client_y() as f64)
                    {
                        session.dispatch(SessionAction::DragBy { index, dx, dy });
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                )
                .unwrap();

            let mouseup_cb = {
                let session = session.clone();
                let drag = drag.clone();
                Closure::wrap(Box::new(move |_e: web_sys::MouseEvent| {
                    if let Some(index) = drag.borrow_mut().finish() {
                        session.dispatch(SessionAction::EndDrag { index });
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref())
                .unwrap();

            let touchmove_cb = {
                let session = session.clone();
                let drag = drag.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    if let Some(t0) = e.touches().item(0) {
                        let mut d = drag.borrow_mut();
                        if let Some((index, dx, dy)) =
                            d.advance(t0.client_x() as f64, t0.client_y() as f64)
                        {
                            session.dispatch(SessionAction::DragBy { index, dx, dy });
                            e.prevent_default();
                        }
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback(
                    "touchmove",
                    touchmove_cb.as_ref().unchecked_ref(),
                )
                .ok();

            let touchend_cb = {
                let session = session.clone();
                let drag = drag.clone();
                Closure::wrap(Box::new(move |_e: TouchEvent| {
                    if let Some(index) = drag.borrow_mut().finish() {
                        session.dispatch(SessionAction::EndDrag { index });
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("touchend", touchend_cb.as_ref().unchecked_ref())
                .ok();
            window
                .add_event_listener_with_callback(
                    "touchcancel",
                    touchend_cb.as_ref().unchecked_ref(),
                )
                .ok();

            let window_clone = window.clone();
            move || {
                let _ = window_clone.remove_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "mouseup",
                    mouseup_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "touchmove",
                    touchmove_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "touchend",
                    touchend_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "touchcancel",
                    touchend_cb.as_ref().unchecked_ref(),
                );
                let _keep_alive = (&mousemove_cb, &mouseup_cb, &touchmove_cb, &touchend_cb);
            }
        });
    }

    let on_pointer_down = {
        let session = session.clone();
        let drag = drag.clone();
        Callback::from(move |(index, x, y): (usize, f64, f64)| {
            drag.borrow_mut().begin(index, x, y);
            session.dispatch(SessionAction::BeginDrag { index });
        })
    };

    let on_toggle = {
        let session = session.clone();
        Callback::from(move |_| session.dispatch(SessionAction::ToggleStarted))
    };

    let s: GameSession = (*session).clone();
    let board_w = s.board_size.width;
    let board_h = s.board_size.height;
    let started = s.started;
    let first_piece = &s.pieces[0];
    // Ruler tick stride follows the first piece's scaled extent.
    let step_x = first_piece.scaled_size.width * 0.36;
    let step_y = first_piece.scaled_size.height * 0.36;

    let reference_style = if started {
        "width:100%; height:100%; filter:grayscale(1); opacity:0.3;"
    } else {
        "width:100%; height:100%;"
    };

    html! {
        <div style="position:relative; width:100vw; height:100vh; overflow:hidden; background:#0e1116; color:#e6edf3; font-family:sans-serif;">
            // Board layer: reference image, rulers, cell grid boundary.
            <div style={format!(
                "position:absolute; left:{}px; top:0; width:{}px; height:{}px; background:#161b22;",
                s.board_offset_x, board_w, board_h
            )}>
                <img src={catalog::BOARD_IMAGE} alt="Complete puzzle" draggable="false" style={reference_style} />
                <Ruler horizontal={true} length={board_w} scale_factor={s.scale_factor} step={step_x} />
                <Ruler horizontal={false} length={board_h} scale_factor={s.scale_factor} step={step_y} />
            </div>
            // Staging area background, directly below the board's extent.
            <div style={format!(
                "position:absolute; left:0; top:{}px; right:0; bottom:0; background:rgba(31,111,235,0.08); border-top:2px solid #1f6feb;",
                board_h
            )}>
                <div style="position:absolute; bottom:8px; width:100%; text-align:center; font-size:13px; opacity:0.7;">
                    {"Assemble from these pieces"}
                </div>
            </div>
            // Piece layer: board and staging share one coordinate space.
            <div style="position:absolute; inset:0;">
                { for s.pieces.iter().filter(|p| !p.locked() || started).map(|p| html! {
                    <PieceView
                        key={p.index}
                        piece={*p}
                        asset={catalog::PIECES[p.index].asset}
                        on_pointer_down={on_pointer_down.clone()}
                    />
                }) }
            </div>
            <StatsPanel
                board_size={s.board_size}
                scale_factor={s.scale_factor}
                placed={s.placed_count()}
                total={s.pieces.len()}
            />
            <ControlsPanel started={started} on_toggle={on_toggle} />
            { if s.solved() { html! { <SolvedOverlay /> } } else { html! {} } }
        </div>
    }
}
