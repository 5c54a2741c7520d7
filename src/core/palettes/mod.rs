pub mod hsl;
pub mod kinds;
pub mod palette;
