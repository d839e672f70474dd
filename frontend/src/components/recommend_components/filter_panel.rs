//! Collapsible filter panel with one checkbox group per filter category.

use common::{filter_options::FilterCategory, recommend_const::VISIBLE_OPTION_LIMIT};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdChevronRight, MdExpandMore}};

use crate::pages::recommend_page::PageContext;


#[component]
pub fn FilterPanel() -> Element {
    let mut page_state = use_context::<PageContext>().page_state;
    let open = use_memo(move || page_state.read().filter_panel_open);
    let max_height = use_memo(move || if open() { "2000px" } else { "0px" });

    rsx! {
        div {
            id: "x-filter-panel",
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
            ",
            button {
                id: "toggle-filters",
                r#type: "button",
                style: "
                    display: flex;
                    align-items: center;
                    gap: 6px;
                    border: none;
                    background: none;
                    cursor: pointer;
                    font-size: 18px;
                    color: #1C212D;
                    padding: 6px 0px;
                ",
                onclick: move |_| {
                    page_state.write().toggle_filter_panel();
                },
                if open() {
                    Icon { icon: MdExpandMore, style: "width: 22px; height: 22px;" }
                } else {
                    Icon { icon: MdChevronRight, style: "width: 22px; height: 22px;" }
                }
                "Filters"
            }
            div {
                id: "filter-section",
                style: "
                    overflow: hidden;
                    max-height: {max_height()};
                    transition: max-height 300ms ease-in-out;
                    display: flex;
                    flex-direction: row;
                    flex-wrap: wrap;
                    gap: 24px;
                ",
                for category in FilterCategory::ALL {
                    FilterGroup { key: "{category.field_name()}", category }
                }
            }
        }
    }
}


#[component]
fn FilterGroup(category: FilterCategory) -> Element {
    let mut page_state = use_context::<PageContext>().page_state;
    let Some(group) = page_state.read().group(category).cloned() else {
        return rsx! {};
    };
    let container_id = category.container_id();
    let toggle_label = group.toggle_label();
    let rows = group
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| (option.clone(), group.is_checked(option), group.is_visible(index), index >= VISIBLE_OPTION_LIMIT))
        .collect::<Vec<_>>();

    rsx! {
        div {
            class: "x-filter-group",
            style: "
                display: flex;
                flex-direction: column;
                gap: 4px;
                min-width: 180px;
            ",
            h6 {
                style: "font-size: 16px; font-weight: 500; margin: 4px 0px;",
                "{category.display_name()}"
            }
            div {
                id: "{container_id}",
                for (option, checked, visible, extra) in rows {
                    FilterOption {
                        key: "{option}",
                        category,
                        option: option.clone(),
                        checked,
                        visible,
                        extra,
                    }
                }
            }
            if group.has_extra_options() {
                button {
                    class: "toggle-options",
                    r#type: "button",
                    style: "
                        align-self: flex-start;
                        border: none;
                        background: none;
                        color: #4F46E5;
                        cursor: pointer;
                        padding: 2px 0px;
                    ",
                    onclick: move |_| {
                        page_state.write().toggle_extra_options(category);
                    },
                    "{toggle_label}"
                }
            }
        }
    }
}


#[component]
fn FilterOption(category: FilterCategory, option: String, checked: bool, visible: bool, extra: bool) -> Element {
    let mut page_state = use_context::<PageContext>().page_state;
    let checkbox_id = category.checkbox_id(&option);
    let display = if visible { "flex" } else { "none" };
    let class = if extra { "form-check extra-option" } else { "form-check" };
    let toggled_option = option.clone();

    rsx! {
        div {
            class: "{class}",
            style: "
                display: {display};
                flex-direction: row;
                align-items: center;
                gap: 8px;
            ",
            input {
                r#type: "checkbox",
                class: "form-check-input",
                id: "{checkbox_id}",
                name: "{category.field_name()}",
                value: "{option}",
                checked,
                onchange: move |_| {
                    page_state.write().toggle_checked(category, &toggled_option);
                },
            }
            label {
                class: "form-check-label",
                r#for: "{checkbox_id}",
                "{option}"
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use common::filter_options::FilterOptionSet;

    use super::*;
    use crate::{
        api::recommend_api::{Endpoint, RequestFailed},
        data_definitions::page_state::PageState,
    };

    #[component]
    fn WithPageState(state: PageState, category: Option<FilterCategory>) -> Element {
        let page_state = use_signal(|| state.clone());
        use_context_provider(move || PageContext { page_state });
        match category {
            Some(category) => rsx! { FilterGroup { category } },
            None => rsx! { FilterPanel {} },
        }
    }

    fn render(state: PageState, category: Option<FilterCategory>) -> String {
        let mut dom = VirtualDom::new_with_props(WithPageState, WithPageStateProps { state, category });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn loaded(districts: usize) -> PageState {
        let mut state = PageState::default();
        let options = FilterOptionSet {
            district: (0..districts).map(|i| format!("Wijk {i}")).collect(),
            ..Default::default()
        };
        state.apply_filter_options(Ok(options));
        state
    }

    #[test]
    fn options_past_the_fifth_are_hidden() {
        let html = render(loaded(8), Some(FilterCategory::District));

        assert_eq!(html.matches("type=\"checkbox\"").count(), 8);
        assert_eq!(html.matches("display: none").count(), 3);
        assert_eq!(html.matches("extra-option").count(), 3);
        assert!(html.contains("id=\"district_options_Wijk 7\""));
        assert!(html.contains("toggle-options"));
        assert!(html.contains(">Meer<"));
    }

    #[test]
    fn expanded_group_shows_everything() {
        let mut state = loaded(8);
        state.toggle_extra_options(FilterCategory::District);
        let html = render(state, Some(FilterCategory::District));

        assert_eq!(html.matches("display: none").count(), 0);
        assert!(html.contains(">Minder<"));
    }

    #[test]
    fn no_toggle_for_five_options_or_fewer() {
        let html = render(loaded(5), Some(FilterCategory::District));

        assert_eq!(html.matches("type=\"checkbox\"").count(), 5);
        assert_eq!(html.matches("display: none").count(), 0);
        assert!(!html.contains("toggle-options"));
    }

    #[test]
    fn failed_load_renders_no_checkboxes() {
        let mut state = PageState::default();
        let failure = state.apply_filter_options(Err(RequestFailed::new(Endpoint::FilterOptions, "502")));
        assert!(failure.is_some());

        let html = render(state, None);
        assert!(html.contains("toggle-filters"));
        assert_eq!(html.matches("type=\"checkbox\"").count(), 0);
        assert!(!html.contains("toggle-options"));
    }
}
