pub mod landing_rest_controller;
