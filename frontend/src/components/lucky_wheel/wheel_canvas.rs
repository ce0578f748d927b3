use std::f64::consts::PI;

use shared::shared_wheel_game::slice_angle;
use shared::PrizeSet;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const RIM_WIDTH: f64 = 20.0;
const RIM_LIGHTS: u32 = 24;
const HUB_RADIUS: f64 = 30.0;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub prizes: PrizeSet,
    pub size: u32,
}

/// Degrees clockwise from 12 o'clock to canvas radians (0 = 3 o'clock).
fn to_canvas_angle(degrees: f64) -> f64 {
    (degrees - 90.0) * PI / 180.0
}

fn draw_wheel(context: &CanvasRenderingContext2d, prizes: &PrizeSet, size: f64) {
    let radius = size / 2.0;
    let center = radius;

    context.clear_rect(0.0, 0.0, size, size);

    // Outer rim
    context.begin_path();
    context.set_fill_style_str("#ff9f43");
    let _ = context.arc(center, center, radius - 2.0, 0.0, 2.0 * PI);
    context.fill();
    context.set_stroke_style_str("#ffffff");
    context.set_line_width(4.0);
    context.stroke();

    context.begin_path();
    context.set_fill_style_str("#b33939");
    let _ = context.arc(center, center, radius - RIM_WIDTH, 0.0, 2.0 * PI);
    context.fill();

    // Alternating rim lights
    let light_radius = radius - RIM_WIDTH / 2.0;
    for i in 0..RIM_LIGHTS {
        let angle = i as f64 * 2.0 * PI / RIM_LIGHTS as f64;
        context.begin_path();
        context.set_fill_style_str(if i % 2 == 0 { "#feca57" } else { "#ffffff" });
        let _ = context.arc(
            center + angle.cos() * light_radius,
            center + angle.sin() * light_radius,
            5.0,
            0.0,
            2.0 * PI,
        );
        context.fill();
    }

    // Slices, slot 0 starting at the top and running clockwise
    let slice = slice_angle(prizes.len());
    let slice_radius = radius - RIM_WIDTH - 5.0;
    for (index, prize) in prizes.iter().enumerate() {
        let start = to_canvas_angle(index as f64 * slice);
        let end = to_canvas_angle((index + 1) as f64 * slice);

        context.begin_path();
        context.move_to(center, center);
        let _ = context.arc(center, center, slice_radius, start, end);
        context.close_path();
        context.set_fill_style_str(&prize.color);
        context.fill();
        context.set_stroke_style_str("#ffffff");
        context.set_line_width(2.0);
        context.stroke();

        let mid = (start + end) / 2.0;
        context.save();
        let _ = context.translate(center, center);
        let _ = context.rotate(mid);
        context.set_fill_style_str(&prize.text_color);
        context.set_font("800 12px Inter, sans-serif");
        context.set_text_align("center");
        context.set_text_baseline("middle");
        let _ = context.fill_text(&prize.label.to_uppercase(), radius * 0.6, 0.0);

        context.begin_path();
        context.set_fill_style_str("rgba(255,255,255,0.5)");
        let _ = context.arc(radius * 0.85, 0.0, 3.0, 0.0, 2.0 * PI);
        context.fill();
        context.restore();
    }

    // Hole for the spin button
    context.begin_path();
    context.set_fill_style_str("#ffffff");
    let _ = context.arc(center, center, HUB_RADIUS, 0.0, 2.0 * PI);
    context.fill();
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with((props.prizes.clone(), props.size), move |(prizes, size)| {
            let context = canvas_ref
                .cast::<HtmlCanvasElement>()
                .and_then(|canvas| canvas.get_context("2d").ok().flatten())
                .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok());

            match context {
                Some(context) => draw_wheel(&context, prizes, *size as f64),
                None => log::error!("Wheel canvas has no 2d context"),
            }
            || ()
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            width={props.size.to_string()}
            height={props.size.to_string()}
        />
    }
}
