pub mod parse_component;
pub mod pixel_to_complex_coords;
