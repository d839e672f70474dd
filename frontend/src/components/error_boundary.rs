//! Error boundary for rendering failures inside a page section.

use dioxus::prelude::*;

#[component]
pub fn SectionErrorBoundary(section: String, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                let details = match err.error() {
                    Some(error) => format!("{:#?}", error.0),
                    None => "Onbekende fout".to_string(),
                };
                dioxus::logger::tracing::error!("render failure in {}: {}", section, details);
                rsx! {
                    SectionErrorNotice {
                        section: section.clone(),
                        details,
                        button {
                            style: "color: #4F46E5; font-size: 16px; border: 1px solid #4F46E5; background: white; padding: 6px 12px; border-radius: 6px; cursor: pointer;",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Opnieuw proberen"
                        }
                    }
                }
            },
            {children}
        }
    }
}

#[component]
fn SectionErrorNotice(section: String, details: String, children: Element) -> Element {
    rsx! {
        div {
            class: "x-section-error",
            style: "
                display: flex;
                flex-direction: column;
                align-items: flex-start;
                gap: 8px;
                padding: 16px;
                border: 1px solid #DC2626;
                border-radius: 8px;
                background: #FEF2F2;
            ",
            h2 {
                style: "color: #B91C1C; font-size: 20px; margin: 0px;",
                "Er ging iets mis ({section})"
            }
            pre {
                style: "color: #7F1D1D; margin: 0px; text-wrap: auto; max-height: 240px; overflow-y: auto;",
                "{details}"
            }
            {children}
        }
    }
}
