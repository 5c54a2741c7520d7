pub mod escape_colour_map;
pub mod escape_time;
pub mod fractal_kinds;
pub mod julia;
pub mod mandelbrot;
