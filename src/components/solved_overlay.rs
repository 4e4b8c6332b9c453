use yew::prelude::*;

#[function_component]
pub fn SolvedOverlay() -> Html {
    html! {
        <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.85); border:2px solid #2ea043; padding:24px 32px; border-radius:12px; text-align:center; min-width:280px; z-index:20;">
            <h2 style="margin:0 0 12px 0; color:#2ea043;">{"Puzzle Complete"}</h2>
            <p style="margin:4px 0;">{"Every piece is locked in place."}</p>
        </div>
    }
}
