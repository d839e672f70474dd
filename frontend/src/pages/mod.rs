pub mod recommend_page;
