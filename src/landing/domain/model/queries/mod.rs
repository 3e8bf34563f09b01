pub mod render_landing_query;
