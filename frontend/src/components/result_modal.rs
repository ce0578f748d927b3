use shared::validation::UserData;
use shared::Prize;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::get_company_name;
use crate::services::gemini::generate_congratulation_message;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ResultModalProps {
    pub prize: Prize,
    pub user: UserData,
    pub on_reset: Callback<()>,
}

#[function_component(ResultModal)]
pub fn result_modal(props: &ResultModalProps) -> Html {
    let message = use_state(|| None::<String>);

    {
        let message = message.clone();
        use_effect_with(
            (props.prize.clone(), props.user.store_name.clone()),
            move |(prize, store_name)| {
                message.set(None);
                let prize_label = prize.label.clone();
                let store_name = store_name.clone();
                spawn_local(async move {
                    let text = generate_congratulation_message(
                        &store_name,
                        &prize_label,
                        get_company_name(),
                    )
                    .await;
                    message.set(Some(text));
                });
                || ()
            },
        );
    }

    let on_close = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| on_reset.emit(()))
    };

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center px-4">
            <div class={styles::MODAL_OVERLAY} onclick={on_close.clone()}></div>

            <div class={styles::MODAL}>
                <button onclick={on_close.clone()} class={styles::MODAL_CLOSE}>{"✕"}</button>

                <div class={styles::MODAL_BODY}>
                    <h2 class="text-xl font-black text-white uppercase drop-shadow-sm mb-4 leading-tight">
                        {"Chúc Mừng Bạn"}<br/>{"Đã Trúng Thưởng"}
                    </h2>

                    <div class="relative w-full max-h-56 mx-auto mb-4 flex items-center justify-center">
                        <span class="text-8xl">{"🎁"}</span>
                    </div>

                    <h3 class="text-2xl font-black text-white uppercase mb-2 drop-shadow-md">
                        {props.prize.label.clone()}
                    </h3>

                    <div class="min-h-[40px] mb-4 flex items-center justify-center">
                        {
                            match &*message {
                                Some(text) => html! {
                                    <p class="text-white font-medium text-sm px-2">{format!("\"{}\"", text)}</p>
                                },
                                None => html! {
                                    <span class="text-white/70 text-xs animate-pulse">{"Đang tải lời chúc..."}</span>
                                },
                            }
                        }
                    </div>

                    <div class="relative z-20 mx-4">
                        <button onclick={on_close} class={styles::MODAL_ACTION}>{"Nhận Quà"}</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
