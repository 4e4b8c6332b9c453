use crate::model::Size;
use crate::util::{format_scale, format_size};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub board_size: Size,
    pub scale_factor: f64,
    pub placed: usize,
    pub total: usize,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:180px; display:flex; flex-direction:column; gap:6px; z-index:10;">
            <div>{ format!("Scaled size: {} (scale: {})", format_size(&props.board_size), format_scale(props.scale_factor)) }</div>
            <div>{ format!("Placed: {}/{}", props.placed, props.total) }</div>
        </div>
    }
}
