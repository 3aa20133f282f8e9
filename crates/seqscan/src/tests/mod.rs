
mod property_search;
