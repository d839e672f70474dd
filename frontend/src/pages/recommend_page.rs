use dioxus::prelude::*;

use crate::{
    api::recommend_api::{RecommendationApi, ServerRecommendationApi, run_submission},
    components::{
        error_boundary::SectionErrorBoundary,
        recommend_components::{question_form::QuestionForm, recommendation_list::RecommendationList},
        user_alert::show_request_failure,
    },
    data_definitions::page_state::PageState,
};


#[derive(Debug, Clone, PartialEq, Copy)]
pub struct PageContext {
    pub page_state: Signal<PageState>,
}

/// Restaurant recommendation page
#[component]
pub fn RecommendPage() -> Element {
    let mut page_state = use_signal(PageState::default);
    let question = use_signal(|| "".to_string());
    use_context_provider(move || PageContext { page_state });

    // load the filter options once, on the client
    use_effect(move || {
        spawn(async move {
            let loaded = ServerRecommendationApi.filter_options().await;
            let failure = page_state.write().apply_filter_options(loaded);
            if let Some(failure) = failure {
                show_request_failure(&failure);
            }
        });
    });

    let submit = Callback::new(move |_: ()| {
        let filters = page_state.read().selected_filters();
        let question = question.read().clone();
        let ticket = page_state.write().begin_submission();
        spawn(async move {
            let outcome = run_submission(&ServerRecommendationApi, question, &filters).await;
            let failure = page_state.write().complete_submission(ticket, outcome);
            if let Some(failure) = failure {
                show_request_failure(&failure);
            }
        });
    });

    rsx! {
        Title { "Restaurant aanbevelingen" }
        div {
            id: "x-recommend-page-root",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                min-height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
            ",
            div {
                style: "
                    color: #0F172A;
                    font-size: 40px;
                    font-weight: 500;
                    letter-spacing: -0.02em;
                ",
                "Waar gaan we eten?"
            }
            QuestionForm { question, on_submit: submit }
            SectionErrorBoundary {
                section: "Aanbevelingen".to_string(),
                RecommendationList {}
            }
        }
    }
}
