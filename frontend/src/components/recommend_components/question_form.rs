use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use crate::components::recommend_components::filter_panel::FilterPanel;


/// Question box plus filters. Submitting only fires `on_submit`; the browser's own form submission is suppressed.
#[component]
pub fn QuestionForm(mut question: Signal<String>, on_submit: Callback<()>) -> Element {
    rsx! {
        form {
            id: "question-form",
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                width: 100%;
            ",
            onsubmit: move |e: FormEvent| {
                e.prevent_default();
                on_submit(());
            },
            div {
                style: "
                    display:flex;
                    align-items:center;
                    gap: 10px;
                    background-color: white;
                    border-radius: 9999px;
                    padding: 10px 14px;
                    height: 44px;
                    color: #111827;
                    border: 1px solid rgba(101, 101, 101, 0.8);
                    max-width: 720px;
                ",
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
                input {
                    r#type: "text",
                    id: "question",
                    placeholder: "Waar heb je zin in?",
                    style: "
                        flex:1;
                        border: none;
                        outline: none;
                        background: transparent;
                        color: #111827;
                        font-size: 18px;
                    ",
                    value: "{question}",
                    oninput: move |e| {
                        *question.write() = e.value();
                    },
                }
                button {
                    r#type: "submit",
                    style: "
                        height: 34px;
                        padding: 0 14px;
                        font-size: 15px;
                        border-radius: 9999px;
                        background: #4F46E5;
                        color: white;
                        border: none;
                        cursor: pointer;
                    ",
                    "Zoeken"
                }
            }
            FilterPanel {}
        }
    }
}
