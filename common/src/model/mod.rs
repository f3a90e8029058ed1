pub mod block;
pub mod markup;
pub mod params;
