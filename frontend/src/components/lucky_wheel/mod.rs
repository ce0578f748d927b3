mod wheel_canvas;

use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use shared::shared_wheel_game::{pointer_slot, SpinConfig, WheelGame};
use shared::{Prize, PrizeSet};
use yew::prelude::*;

use crate::styles;
use wheel_canvas::WheelCanvas;

const WHEEL_SIZE: u32 = 380;

// Ease-out curve; the duration comes from the spin config
const SPIN_EASING: &str = "cubic-bezier(0.15, 0, 0.15, 1)";

#[derive(Properties, PartialEq)]
pub struct LuckyWheelProps {
    pub prizes: PrizeSet,
    pub config: SpinConfig,
    /// Set while a result is on screen; no spin until it is dismissed.
    pub locked: bool,
    pub on_finished: Callback<Prize>,
}

#[function_component(LuckyWheel)]
pub fn lucky_wheel(props: &LuckyWheelProps) -> Html {
    // Spin guard and rotation accumulator, read synchronously by the click handler
    let game = {
        let config = props.config.clone();
        use_mut_ref(move || WheelGame::with_config(config))
    };
    let rotation = use_state(|| 0.0_f64);
    let is_spinning = use_state(|| false);

    let onclick = {
        let game = game.clone();
        let rotation = rotation.clone();
        let is_spinning = is_spinning.clone();
        let prizes = props.prizes.clone();
        let on_finished = props.on_finished.clone();
        let locked = props.locked;

        Callback::from(move |_: MouseEvent| {
            if locked {
                warn!("Spin refused while a result is shown");
                return;
            }

            let started = game
                .borrow_mut()
                .start_spin(prizes.prizes(), &mut rand::thread_rng());

            let result = match started {
                Ok(result) => result,
                Err(e) => {
                    warn!("Spin refused: {}", e);
                    return;
                }
            };

            info!(
                "Spinning to {} ({} extra turns)",
                result.prize.label, result.extra_spins
            );
            rotation.set(result.target_rotation_degrees);
            is_spinning.set(true);

            // Guard stays held through the pause before the result shows
            let hold = {
                let config = &game.borrow().config;
                config.spin_duration_ms + config.result_delay_ms
            };
            let game = game.clone();
            let is_spinning = is_spinning.clone();
            let on_finished = on_finished.clone();
            let slot_count = prizes.len();

            Timeout::new(hold, move || {
                let finished = game.borrow_mut().complete_spin();
                is_spinning.set(false);

                if let Some(prize) = finished {
                    let landed = pointer_slot(result.target_rotation_degrees, slot_count);
                    debug!("Wheel stopped on slot {} (drawn slot {})", landed, result.slot_index);
                    on_finished.emit(prize);
                }
            })
            .forget();
        })
    };

    let button_disabled = *is_spinning || props.locked;

    let transition = if *is_spinning {
        format!("transform {}ms {}", props.config.spin_duration_ms, SPIN_EASING)
    } else {
        "none".to_string()
    };
    let wheel_style = format!(
        "width: {size}px; height: {size}px; transform: rotate({rotation}deg); transition: {transition};",
        size = WHEEL_SIZE,
        rotation = *rotation,
        transition = transition,
    );

    html! {
        <div class={styles::WHEEL_STAGE}>
            // Pointer at 12 o'clock
            <div class={styles::WHEEL_POINTER}>
                <svg width="60" height="60" viewBox="0 0 60 60">
                    <path d="M30 60 L10 10 L50 10 Z" fill="#ff4757" stroke="white" stroke-width="2" />
                    <circle cx="30" cy="10" r="5" fill="white" />
                </svg>
            </div>

            <div class={styles::WHEEL_FRAME}>
                <div style={wheel_style}>
                    <WheelCanvas prizes={props.prizes.clone()} size={WHEEL_SIZE} />
                </div>

                <div class={styles::WHEEL_HUB}>
                    <button
                        {onclick}
                        disabled={button_disabled}
                        class={if button_disabled { styles::SPIN_BUTTON_DISABLED } else { styles::SPIN_BUTTON }}
                    >
                        <span class="text-white font-bold text-xs uppercase leading-tight">{"Quay"}</span>
                        <span class="text-white font-black text-sm uppercase leading-tight">{"Ngay"}</span>
                    </button>
                </div>
            </div>

            <div class="w-48 h-12 bg-black/20 rounded-[100%] absolute -bottom-2 blur-md z-0"></div>
        </div>
    }
}
