use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const BAND_PX: f64 = 40.0;

/// On-screen ruler along a board edge. Minor ticks follow the piece-derived
/// stride; major ticks with labels mark every 100 native-image pixels.
#[derive(Properties, PartialEq, Clone)]
pub struct RulerProps {
    pub horizontal: bool,
    /// Board extent along this edge, in screen pixels.
    pub length: f64,
    pub scale_factor: f64,
    /// Minor tick stride in screen pixels.
    pub step: f64,
}

#[function_component(Ruler)]
pub fn ruler(props: &RulerProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let p = props.clone();
        use_effect_with(
            (p.horizontal, p.length, p.scale_factor, p.step),
            move |_| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    let (w, h) = if p.horizontal {
                        (p.length, BAND_PX)
                    } else {
                        (BAND_PX, p.length)
                    };
                    canvas.set_width(w.max(0.0) as u32);
                    canvas.set_height(h.max(0.0) as u32);
                    if let Some(ctx) = canvas
                        .get_context("2d")
                        .ok()
                        .flatten()
                        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
                    {
                        draw_ruler(&ctx, &p);
                    }
                }
                || ()
            },
        );
    }

    let style = if props.horizontal {
        format!(
            "position:absolute; left:0; top:0; width:{}px; height:{}px; pointer-events:none;",
            props.length, BAND_PX
        )
    } else {
        format!(
            "position:absolute; left:0; top:0; width:{}px; height:{}px; pointer-events:none;",
            BAND_PX, props.length
        )
    };

    html! { <canvas ref={canvas_ref} {style}></canvas> }
}

fn draw_ruler(ctx: &CanvasRenderingContext2d, p: &RulerProps) {
    if p.scale_factor <= 0.0 || p.length <= 0.0 {
        return;
    }

    ctx.set_stroke_style_str("#ffffff");
    ctx.set_line_width(3.0);

    // Minor ticks on the piece-derived stride.
    if p.step > 1.0 {
        let mut pos = 0.0;
        while pos <= p.length {
            ctx.begin_path();
            if p.horizontal {
                ctx.move_to(pos, 0.0);
                ctx.line_to(pos, 20.0);
            } else {
                ctx.move_to(0.0, pos);
                ctx.line_to(20.0, pos);
            }
            ctx.stroke();
            pos += p.step;
        }
    }

    // Major ticks with native-pixel labels every 100 source units.
    ctx.set_font("bold 12px sans-serif");
    ctx.set_fill_style_str("#ffffff");
    let major = 100.0 * p.scale_factor;
    let mut native = 0.0;
    let mut pos = 0.0;
    while pos <= p.length {
        ctx.begin_path();
        if p.horizontal {
            ctx.move_to(pos, 0.0);
            ctx.line_to(pos, 35.0);
        } else {
            ctx.move_to(0.0, pos);
            ctx.line_to(35.0, pos);
        }
        ctx.stroke();
        let label = format!("{}", native as i64);
        if p.horizontal {
            let _ = ctx.fill_text(&label, pos + 3.0, 14.0);
        } else {
            let _ = ctx.fill_text(&label, 4.0, pos + 14.0);
        }
        native += 100.0;
        pos += major;
    }
}
