//! State of the recommendation page and the transitions driving it.

use std::collections::BTreeSet;

use common::{
    filter_options::{FilterCategory, FilterOptionSet, SelectedFilters},
    recommend_const::{COLLAPSE_LABEL, EXPAND_LABEL, VISIBLE_OPTION_LIMIT},
    recommendation::Restaurant,
};
use dioxus::logger::tracing;

use crate::api::recommend_api::RequestFailed;


#[derive(Debug, Clone, PartialEq)]
pub struct FilterGroupState {
    pub category: FilterCategory,
    pub options: Vec<String>,
    pub checked: BTreeSet<String>,
    pub expanded: bool,
}

impl FilterGroupState {
    pub fn new(category: FilterCategory, options: Vec<String>) -> Self {
        Self { category, options, checked: BTreeSet::new(), expanded: false }
    }

    pub fn has_extra_options(&self) -> bool {
        self.options.len() > VISIBLE_OPTION_LIMIT
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.expanded || index < VISIBLE_OPTION_LIMIT
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.expanded { COLLAPSE_LABEL } else { EXPAND_LABEL }
    }

    pub fn is_checked(&self, option: &str) -> bool {
        self.checked.contains(option)
    }

    pub fn toggle_checked(&mut self, option: &str) {
        if !self.options.iter().any(|o| o == option) {
            return;
        }
        if !self.checked.remove(option) {
            self.checked.insert(option.to_string());
        }
    }

    /// Checked options in document order.
    pub fn selected(&self) -> Vec<String> {
        self.options.iter().filter(|o| self.checked.contains(*o)).cloned().collect()
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket(u64);


#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub groups: Vec<FilterGroupState>,
    pub filter_panel_open: bool,
    pub loading: bool,
    pub results: Vec<Restaurant>,
    generation: u64,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            groups: FilterCategory::ALL.iter().map(|c| FilterGroupState::new(*c, Vec::new())).collect(),
            filter_panel_open: false,
            loading: false,
            results: Vec::new(),
            generation: 0,
        }
    }
}

impl PageState {
    pub fn group(&self, category: FilterCategory) -> Option<&FilterGroupState> {
        self.groups.iter().find(|g| g.category == category)
    }

    fn group_mut(&mut self, category: FilterCategory) -> Option<&mut FilterGroupState> {
        self.groups.iter_mut().find(|g| g.category == category)
    }

    /// Fills the groups on success; on failure the groups stay empty and the failure is handed back for the alert.
    pub fn apply_filter_options(&mut self, loaded: Result<FilterOptionSet, RequestFailed>) -> Option<RequestFailed> {
        match loaded {
            Ok(options) => {
                self.groups = FilterCategory::ALL
                    .iter()
                    .map(|c| FilterGroupState::new(*c, options.normalized_options(*c)))
                    .collect();
                let counts = self.groups.iter().map(|g| (g.category.field_name(), g.options.len())).collect::<Vec<_>>();
                tracing::info!("filter options loaded: {:?}", counts);
                None
            }
            Err(failure) => {
                tracing::error!("{failure}");
                Some(failure)
            }
        }
    }

    pub fn toggle_extra_options(&mut self, category: FilterCategory) {
        if let Some(group) = self.group_mut(category) {
            group.expanded = !group.expanded;
        }
    }

    pub fn toggle_checked(&mut self, category: FilterCategory, option: &str) {
        if let Some(group) = self.group_mut(category) {
            group.toggle_checked(option);
        }
    }

    pub fn toggle_filter_panel(&mut self) {
        self.filter_panel_open = !self.filter_panel_open;
    }

    pub fn selected_filters(&self) -> SelectedFilters {
        let mut selected = SelectedFilters::default();
        for group in &self.groups {
            *selected.values_mut(group.category) = group.selected();
        }
        selected
    }

    /// Shows the loading indicator, clears old results and invalidates any submission still in flight.
    pub fn begin_submission(&mut self) -> SubmissionTicket {
        self.generation += 1;
        self.loading = true;
        self.results.clear();
        tracing::info!("submission {} started", self.generation);
        SubmissionTicket(self.generation)
    }

    pub fn is_current(&self, ticket: SubmissionTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Applies the outcome of the submission behind `ticket` if it is still the latest one.
    /// Returns the failure that should be alerted, if any.
    pub fn complete_submission(
        &mut self,
        ticket: SubmissionTicket,
        outcome: Result<Vec<Restaurant>, RequestFailed>,
    ) -> Option<RequestFailed> {
        if !self.is_current(ticket) {
            tracing::info!("submission {} superseded by {}, outcome dropped", ticket.0, self.generation);
            return None;
        }
        self.loading = false;
        match outcome {
            Ok(results) => {
                tracing::info!("submission {} finished with {} results", ticket.0, results.len());
                self.results = results;
                None
            }
            Err(failure) => {
                tracing::error!("submission {}: {failure}", ticket.0);
                Some(failure)
            }
        }
    }
}
