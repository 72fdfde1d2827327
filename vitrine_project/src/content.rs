//! Read-only site content and per-scene parameters. Every default reproduces the stock portfolio.

use serde::{Deserialize, Serialize};
use vitrine_structs::Color;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    pub title: String,
    pub owner: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "ANJANI'S PORTFOLIO".to_string(),
            owner: "anjani-kr-singh-ai".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: u32,
    pub height: u32,
    /// Widths below this use the compact layouts.
    pub mobile_breakpoint: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            mobile_breakpoint: 768,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Mixed with each scene's name to seed its decorative randomness.
    pub base: u64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { base: 0x5EED_2025 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealMode {
    Once,
    Repeat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionConfig {
    pub name: String,
    pub threshold: f32,
    pub mode: RevealMode,
}

pub fn default_sections() -> Vec<SectionConfig> {
    [
        ("projects", RevealMode::Once),
        ("skills", RevealMode::Once),
        ("experience", RevealMode::Repeat),
        ("contact", RevealMode::Repeat),
    ]
    .into_iter()
    .map(|(name, mode)| SectionConfig {
        name: name.to_string(),
        threshold: 0.25,
        mode,
    })
    .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub recipient: String,
    pub delivery_delay_ms: u64,
    pub reset_delay_ms: u64,
    /// Height the rocket climbs per second while a message is sending.
    pub rocket_climb: f32,
    /// The bot's screen reveals the draft one character per tick.
    pub typing_interval_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient: "anjani.kumar.singhh@gmail.com".to_string(),
            delivery_delay_ms: 1500,
            reset_delay_ms: 3000,
            rocket_climb: 1.5,
            typing_interval_ms: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreloaderConfig {
    pub progress_interval_ms: u64,
    pub type_interval_ms: u64,
    pub shapes: usize,
    pub points: usize,
    pub link_distance: f32,
    pub particles: usize,
    /// Fraction of the remaining camera offset covered each frame.
    pub camera_damping: f32,
}

impl Default for PreloaderConfig {
    fn default() -> Self {
        Self {
            progress_interval_ms: 100,
            type_interval_ms: 120,
            shapes: 20,
            points: 12,
            link_distance: 6.0,
            particles: 100,
            camera_damping: 0.01,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

pub fn default_projects() -> Vec<ProjectEntry> {
    let repo = "https://github.com/anjani-kr-singh-ai/AI_PROJECT";
    vec![
        ProjectEntry {
            id: "proj-001".to_string(),
            name: "Brief AI – Smart News Summarizer Bot".to_string(),
            description: "Telegram bot that summarizes news articles, detects tone, assigns categories, and generates catchy titles in real-time.".to_string(),
            technologies: names(&["Python", "Telegram Bot API", "facebook/bart-large-cnn", "google/pegasus-xsum", "BERTopic", "newspaper3k", "facebook/bart-large-mnli"]),
            link: Some(repo.to_string()),
        },
        ProjectEntry {
            id: "proj-002".to_string(),
            name: "News AI – Category-based News Bot".to_string(),
            description: "A Telegram bot that fetches and summarizes real-time news based on user-defined categories like Tech or Health.".to_string(),
            technologies: names(&["Python", "Telegram Bot API", "GNews API", "facebook/bart-large-cnn", "google/pegasus-xsum", "cardiffnlp/twitter-roberta-base-sentiment"]),
            link: Some(repo.to_string()),
        },
        ProjectEntry {
            id: "proj-003".to_string(),
            name: "Solasta2k25 Website".to_string(),
            description: "Frontend development for IIITDM Kurnool’s official tech-fest website with dynamic sliders, flip cards, and smooth UX.".to_string(),
            technologies: names(&["React", "Framer Motion", "Tailwind CSS", "HTML5", "CSS3"]),
            link: Some("solasta.iiitk.ac.in".to_string()),
        },
        ProjectEntry {
            id: "proj-004".to_string(),
            name: "The Raghav – Short Film".to_string(),
            description: "Lead actor in ‘The Raghav’, a short film created for Vision 2.0 portraying intense emotions and character depth.".to_string(),
            technologies: names(&["Acting", "Storytelling", "Film Production"]),
            link: None,
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub radius: f32,
    pub wave_amplitude: f32,
    pub connector_radius: f32,
    pub particles: usize,
    pub particle_radius: f32,
    pub colors: Vec<Color>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            radius: 2.5,
            wave_amplitude: 0.4,
            connector_radius: 0.01,
            particles: 50,
            particle_radius: 5.0,
            colors: vec![
                Color::rgb(0x4f, 0x46, 0xe5),
                Color::rgb(0xec, 0x48, 0x99),
                Color::rgb(0x08, 0x91, 0xb2),
                Color::rgb(0xf5, 0x9e, 0x0b),
                Color::rgb(0x10, 0xb9, 0x81),
                Color::rgb(0x8b, 0x5c, 0xf6),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub radius: f32,
    pub compact_radius: f32,
    /// Radians per second. The stock page turns 0.005 rad per frame at 60 fps.
    pub spin: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            radius: 5.0,
            compact_radius: 3.0,
            spin: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelixConfig {
    pub radius: f32,
    pub pitch: f32,
    pub length: f32,
    pub samples: usize,
    pub strand_radius: f32,
    pub rung_radius: f32,
    pub label_scale: f32,
    pub spin: f32,
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
    pub primary_color: Color,
    pub secondary_color: Color,
}

impl Default for HelixConfig {
    fn default() -> Self {
        Self {
            radius: 1.2,
            pitch: 1.5,
            length: 12.0,
            samples: 100,
            strand_radius: 0.1,
            rung_radius: 0.03,
            label_scale: 1.3,
            spin: 0.2,
            primary: names(&["JavaScript", "React", "Node.js", "TypeScript", "HTML", "CSS"]),
            secondary: names(&["MongoDB", "Git", "AWS", "Docker", "GraphQL", "Redux"]),
            primary_color: Color::rgb(0x8A, 0x2B, 0xE2),
            secondary_color: Color::rgb(0x00, 0xBF, 0xFF),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerConfig {
    pub name: String,
    pub color: Color,
    pub nodes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub layer_spacing: f32,
    pub node_spacing: f32,
    pub title_height: f32,
    pub layers: Vec<LayerConfig>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        let layer = |name: &str, color: Color, nodes: &[&str]| LayerConfig {
            name: name.to_string(),
            color,
            nodes: names(nodes),
        };
        Self {
            layer_spacing: 4.0,
            node_spacing: 1.2,
            title_height: 2.5,
            layers: vec![
                layer("Core", Color::rgb(0x61, 0xDA, 0xFB), &["HTML", "CSS", "JavaScript", "Python"]),
                layer("Frameworks", Color::rgb(0x8A, 0x2B, 0xE2), &["React", "Vue", "Node.js", "Express", "Django"]),
                layer("Tools", Color::rgb(0xFF, 0x99, 0x00), &["Git", "Docker", "AWS", "MongoDB", "GraphQL"]),
                layer("Expertise", Color::rgb(0x00, 0xBF, 0xFF), &["Frontend", "Backend", "DevOps"]),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub name: String,
    pub color: Color,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolyhedronConfig {
    pub radius: f32,
    pub label_scale: f32,
    pub categories: Vec<CategoryConfig>,
}

impl Default for PolyhedronConfig {
    fn default() -> Self {
        let category = |name: &str, color: Color, skills: &[&str]| CategoryConfig {
            name: name.to_string(),
            color,
            skills: names(skills),
        };
        Self {
            radius: 2.5,
            label_scale: 0.8,
            categories: vec![
                category("Frontend", Color::rgb(0x61, 0xDA, 0xFB), &["React", "JavaScript", "TypeScript", "HTML/CSS", "Vue.js"]),
                category("Backend", Color::rgb(0x3C, 0x87, 0x3A), &["Node.js", "Python", "Express", "GraphQL", "Java"]),
                category("Database", Color::rgb(0xFF, 0x99, 0x00), &["MongoDB", "PostgreSQL", "MySQL", "Redis"]),
                category("DevOps", Color::rgb(0x00, 0xA4, 0xEF), &["Docker", "AWS", "Kubernetes", "CI/CD"]),
                category("AI/ML", Color::rgb(0xFF, 0x40, 0x81), &["TensorFlow", "PyTorch", "NLP", "Data Science"]),
                category("Design", Color::rgb(0x8A, 0x2B, 0xE2), &["Figma", "UI/UX", "Accessibility"]),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitSkill {
    pub name: String,
    pub color: Color,
    pub radius: f32,
    /// Fixed azimuth around the core.
    pub theta: f32,
    pub importance: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    pub spin: f32,
    pub skills: Vec<OrbitSkill>,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        let skill = |name: &str, hex: (u8, u8, u8), radius: f32, theta: f32, importance: f32| OrbitSkill {
            name: name.to_string(),
            color: Color::rgb(hex.0, hex.1, hex.2),
            radius,
            theta,
            importance,
        };
        Self {
            spin: 0.1,
            skills: vec![
                skill("React", (0x61, 0xDA, 0xFB), 2.2, 0.4, 1.0),
                skill("JavaScript", (0xF7, 0xDF, 0x1E), 2.1, 1.2, 1.0),
                skill("Node.js", (0x3C, 0x87, 0x3A), 2.3, 2.1, 0.95),
                skill("TypeScript", (0x31, 0x78, 0xC6), 2.2, 2.9, 0.9),
                skill("HTML/CSS", (0xE3, 0x4F, 0x26), 2.1, 3.8, 0.9),
                skill("Python", (0x37, 0x76, 0xAB), 2.4, 4.7, 0.85),
                skill("MongoDB", (0x47, 0xA2, 0x48), 3.3, 0.8, 0.8),
                skill("AWS", (0xFF, 0x99, 0x00), 3.2, 1.9, 0.75),
                skill("GraphQL", (0xE5, 0x35, 0xAB), 3.4, 3.1, 0.75),
                skill("Git", (0xF0, 0x50, 0x32), 3.2, 4.2, 0.75),
                skill("Express", (0x00, 0x00, 0x00), 3.3, 5.3, 0.7),
                skill("Docker", (0x24, 0x96, 0xED), 4.3, 0.5, 0.65),
                skill("Redux", (0x76, 0x4A, 0xBC), 4.2, 2.2, 0.6),
                skill("Tailwind", (0x38, 0xB2, 0xAC), 4.1, 3.7, 0.6),
                skill("Firebase", (0xFF, 0xCA, 0x28), 4.2, 5.0, 0.6),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceConfig {
    pub bg: Color,
    pub accent: Color,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeConfig {
    pub half_extent: f32,
    pub tile_size: f32,
    pub texture_size: u32,
    /// Radians per second around Y. The stock page adds 0.001 rad per frame.
    pub spin: f32,
    pub initial_tilt: [f32; 2],
    pub faces: Vec<FaceConfig>,
}

impl Default for CubeConfig {
    fn default() -> Self {
        let face = |bg: (u8, u8, u8), accent: (u8, u8, u8), skills: &[&str]| FaceConfig {
            bg: Color::rgb(bg.0, bg.1, bg.2),
            accent: Color::rgb(accent.0, accent.1, accent.2),
            skills: names(skills),
        };
        Self {
            half_extent: 2.0,
            tile_size: 0.65,
            texture_size: 256,
            spin: 0.06,
            initial_tilt: [0.4, 0.5],
            faces: vec![
                face((0x8A, 0x2B, 0xE2), (0x00, 0xBF, 0xFF), &["React", "Vue", "Angular", "HTML5", "CSS3", "JavaScript", "TypeScript", "Redux", "Webpack"]),
                face((0x4B, 0x00, 0x82), (0xFF, 0x00, 0xFF), &["Node.js", "Express", "Django", "Flask", "GraphQL", "REST API", "Python", "Java", "Go"]),
                face((0x6A, 0x0D, 0xAD), (0x00, 0xBF, 0xFF), &["TensorFlow", "PyTorch", "NLP", "Computer Vision", "Data Science", "ML Ops", "Neural Networks", "Scikit-learn", "Pandas"]),
                face((0x4B, 0x00, 0x82), (0x8A, 0x2B, 0xE2), &["AWS", "Azure", "GCP", "Kubernetes", "Docker", "Terraform", "CI/CD", "Serverless", "Microservices"]),
                face((0x6A, 0x0D, 0xAD), (0x00, 0xBF, 0xFF), &["MongoDB", "PostgreSQL", "MySQL", "Redis", "Elasticsearch", "Firebase", "DynamoDB", "Neo4j", "SQL"]),
                face((0x4B, 0x00, 0x82), (0xFF, 0x00, 0xFF), &["Figma", "Adobe XD", "Photoshop", "Illustrator", "UI Design", "UX Research", "Accessibility", "Animation", "Design Systems"]),
            ],
        }
    }
}
