pub mod declaration;
pub mod params;

pub use declaration::parse_declaration;
pub use params::split_parameters;
