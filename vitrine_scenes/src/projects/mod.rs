pub mod carousel;
pub mod showcase;

pub use carousel::ProjectCarousel;
pub use showcase::ProjectShowcase;
