// Application layer - Use cases and the view pipeline
pub mod chart_builder;
pub mod data_fetcher;
pub mod graph_view;
pub mod range_selector;
pub mod series_mapper;
pub mod temperature_page;
pub mod temperature_source;
pub mod viewport_monitor;
