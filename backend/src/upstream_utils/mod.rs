pub mod recommender_client;
