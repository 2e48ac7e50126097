pub mod client;
pub mod image_search;
pub mod recognizer;
