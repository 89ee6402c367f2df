pub mod palette_listing;
