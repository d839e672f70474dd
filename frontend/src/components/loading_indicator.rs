use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            id: "loading-spinner",
            style: "
                width: 100%;
                display: flex;
                align-items: center;
                justify-content: center;
            ",
            div {
                style: "color:black; font-size: 26px; border: 1px solid black; padding: 10px; border-radius: 5px; margin: 15px;",
                "Laden..."
            }
        }
    }
}
