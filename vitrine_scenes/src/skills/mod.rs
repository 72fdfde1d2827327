pub mod cube;
pub mod helix;
pub mod network;
pub mod orbit;
pub mod polyhedron;

pub use cube::SkillsCube;
pub use helix::SkillsHelix;
pub use network::SkillsNetwork;
pub use orbit::SkillsOrbit;
pub use polyhedron::SkillsPolyhedron;
