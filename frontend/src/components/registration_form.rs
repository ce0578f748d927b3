use std::collections::HashMap;

use log::info;
use shared::validation::{normalize_phone_number, UserData};
use web_sys::{HtmlInputElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct RegistrationFormProps {
    pub on_submit: Callback<UserData>,
}

fn bind_input(
    form: &UseStateHandle<UserData>,
    update: fn(&mut UserData, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        update(&mut next, input.value());
        form.set(next);
    })
}

#[function_component(RegistrationForm)]
pub fn registration_form(props: &RegistrationFormProps) -> Html {
    let form = use_state(UserData::default);
    let errors = use_state(HashMap::<&'static str, String>::new);

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let found = form.form_errors();
            if !found.is_empty() {
                errors.set(found);
                return;
            }

            errors.set(HashMap::new());
            let mut data = (*form).clone();
            data.store_name = data.store_name.trim().to_string();
            data.phone_number = normalize_phone_number(&data.phone_number);
            info!("Registration accepted for store {}", data.store_name);
            on_submit.emit(data);
        })
    };

    let input_class = |field: &str| {
        if errors.contains_key(field) { styles::INPUT_ERROR } else { styles::INPUT }
    };
    let error_text = |field: &str| match errors.get(field) {
        Some(message) => html! { <p class={styles::TEXT_ERROR}>{message.clone()}</p> },
        None => html! {},
    };

    html! {
        <div class={styles::FORM_CARD}>
            <div class={styles::FORM_PROMO}>
                <div class="inline-block bg-red-600 text-white text-xs font-bold px-3 py-1 rounded-full mb-4 animate-pulse uppercase tracking-wider shadow-md">
                    {"Chương Trình Đặc Biệt"}
                </div>
                <h2 class="text-3xl lg:text-4xl font-black uppercase leading-tight mb-2 drop-shadow-md">
                    {"Quay Ngay"}<br/>
                    <span class="text-yellow-300 text-4xl lg:text-5xl">{"Trúng Lớn"}</span>
                </h2>
                <p class="text-white/90 font-medium mb-8 text-sm lg:text-base">
                    {"Hàng ngàn phần quà hấp dẫn đang chờ đón Quý Đại Lý & Khách Hàng."}
                </p>
                <p class="text-xs italic opacity-80">{"*Áp dụng cho khách hàng có hóa đơn từ 500k"}</p>
            </div>

            <div class={styles::FORM_BODY}>
                <h3 class="text-2xl font-bold text-gray-800 mb-1">{"Thông Tin Tham Gia"}</h3>
                <p class="text-gray-500 text-sm mb-8">{"Nhập chính xác để nhận giải thưởng"}</p>

                <form {onsubmit} class={styles::FORM}>
                    <div>
                        <label for="storeName" class={styles::LABEL}>
                            {"Tên Cửa Hàng / Đại Lý "}<span class="text-red-500">{"*"}</span>
                        </label>
                        <input
                            type="text"
                            id="storeName"
                            class={input_class("store_name")}
                            placeholder="Ví dụ: Tạp hóa Minh Anh"
                            value={form.store_name.clone()}
                            oninput={bind_input(&form, |data, value| data.store_name = value)}
                        />
                        { error_text("store_name") }
                    </div>

                    <div>
                        <label for="phoneNumber" class={styles::LABEL}>
                            {"Số Điện Thoại "}<span class="text-red-500">{"*"}</span>
                        </label>
                        <input
                            type="tel"
                            id="phoneNumber"
                            class={input_class("phone_number")}
                            placeholder="0912 xxx xxx"
                            value={form.phone_number.clone()}
                            oninput={bind_input(&form, |data, value| data.phone_number = value)}
                        />
                        { error_text("phone_number") }
                    </div>

                    <div>
                        <label for="customerCode" class={styles::LABEL}>{"Mã Khách Hàng (Tùy chọn)"}</label>
                        <input
                            type="text"
                            id="customerCode"
                            class={styles::INPUT}
                            placeholder="Mã trên hóa đơn"
                            value={form.customer_code.clone()}
                            oninput={bind_input(&form, |data, value| data.customer_code = value)}
                        />
                    </div>

                    <div class="pt-4">
                        <button type="submit" class={styles::SUBMIT_BUTTON}>
                            {"Bắt Đầu Quay ➔"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
