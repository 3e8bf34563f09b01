pub mod landing_html_renderer;
