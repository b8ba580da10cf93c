pub mod catalog;
pub mod poster;
pub mod providers;

pub use catalog::Catalog;
pub use poster::PosterDecorator;
