pub mod filter_panel;
pub mod question_form;
pub mod recommendation_list;
pub mod restaurant_card;
