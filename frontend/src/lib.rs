pub mod components;
pub mod config;
pub mod services;
pub mod styles;

use log::{error, info};
use shared::session::{AppStep, PlayerSession};
use shared::validation::UserData;
use shared::Prize;
use yew::prelude::*;

use crate::components::{LuckyWheel, RegistrationForm, ResultModal};
use crate::config::{get_prize_catalog, get_spin_config};

#[function_component(App)]
pub fn app() -> Html {
    let session = use_state(PlayerSession::new);
    let prizes = use_memo((), |_| get_prize_catalog());
    let spin_config = use_memo((), |_| get_spin_config());

    let on_register = {
        let session = session.clone();
        Callback::from(move |user: UserData| {
            let mut next = (*session).clone();
            match next.submit_registration(user) {
                Ok(()) => session.set(next),
                Err(e) => error!("Registration rejected: {}", e),
            }
        })
    };

    let on_spin_finished = {
        let session = session.clone();
        Callback::from(move |prize: Prize| {
            info!("Player won {}", prize.label);
            let mut next = (*session).clone();
            match next.finish_spin(prize) {
                Ok(()) => session.set(next),
                Err(e) => error!("Could not show result: {}", e),
            }
        })
    };

    let on_reset = {
        let session = session.clone();
        Callback::from(move |_: ()| {
            let mut next = (*session).clone();
            match next.reset() {
                Ok(()) => session.set(next),
                Err(e) => error!("Could not return to the wheel: {}", e),
            }
        })
    };

    let year = js_sys::Date::new_0().get_full_year();

    // Wheel stays mounted under the result modal; rotation accumulates per session
    let content = match (session.step, session.user.as_ref()) {
        (AppStep::Form, _) | (_, None) => html! {
            <div class="w-full flex justify-center">
                <RegistrationForm on_submit={on_register} />
            </div>
        },
        (step, Some(user)) => html! {
            <>
                <div class="flex flex-col items-center w-full">
                    <div class={styles::PLAYER_BADGE}>
                        <p class="text-white font-medium text-lg">
                            {"Người chơi: "}<span class="font-bold text-[#ffeaa7]">{user.store_name.clone()}</span>
                        </p>
                    </div>
                    <LuckyWheel
                        prizes={(*prizes).clone()}
                        config={(*spin_config).clone()}
                        locked={!session.can_spin()}
                        on_finished={on_spin_finished}
                    />
                </div>
                {
                    match (step, session.winning_prize.as_ref()) {
                        (AppStep::Result, Some(prize)) => html! {
                            <ResultModal prize={prize.clone()} user={user.clone()} {on_reset} />
                        },
                        _ => html! {},
                    }
                }
            </>
        },
    };

    html! {
        <div class={styles::PAGE}>
            <div class={styles::PAGE_BACKDROP}></div>
            <div
                class={styles::PAGE_RAYS}
                style="background-image: repeating-conic-gradient(#fff 0 15deg, transparent 15deg 30deg);"
            ></div>

            <header class={styles::HEADER}>
                <h1 class={styles::HEADER_TITLE}>
                    {"Vòng Quay"}
                    <span class={styles::HEADER_SUBTITLE} style="text-shadow: 4px 4px 0px #d67d0a;">{"May Mắn"}</span>
                </h1>
            </header>

            <main class={styles::MAIN}>
                { content }
            </main>

            <footer class={styles::FOOTER}>
                {format!("© {} Chương trình tri ân khách hàng.", year)}
            </footer>
        </div>
    }
}
