//! Gazetteer Places: turns the Census Gazetteer national places file into
//! a slugged CSV (`country_code,state_slug,name,slug,population`).

pub mod gazetteer;
pub mod slug;

pub use slug::slugify;
