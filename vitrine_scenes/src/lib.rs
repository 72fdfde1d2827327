//! The portfolio's decorative 3D scenes. Each one lays out its points once at
//! mount, derives connectors from them, then animates a handful of transforms
//! as a function of the scene's elapsed time.

pub mod common;
pub mod contact;
pub mod preloader;
pub mod projects;
pub mod skills;

pub use common::{Entrance, scene_rng, texture_data};
pub use contact::{ContactForm, TypingBot, mailto_link};
pub use preloader::PreloaderBackdrop;
pub use projects::{ProjectCarousel, ProjectShowcase};
pub use skills::{SkillsCube, SkillsHelix, SkillsNetwork, SkillsOrbit, SkillsPolyhedron};
