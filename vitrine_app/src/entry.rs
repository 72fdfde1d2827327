use crate::App;
use std::path::Path;
use vitrine_graphics::GraphicsBackend;
use vitrine_project::{ProjectError, RevealMode, SiteConfig};
use vitrine_runtime::{EntranceGate, RevealPolicy, Runtime, RuntimeError, Scene, Viewport};
use vitrine_scenes::{
    ContactForm, Entrance, PreloaderBackdrop, ProjectCarousel, ProjectShowcase, SkillsCube,
    SkillsHelix, SkillsNetwork, SkillsOrbit, SkillsPolyhedron, TypingBot,
};

pub const SKILLS_SECTION: &str = "skills";
pub const PROJECTS_SECTION: &str = "projects";
pub const CONTACT_SECTION: &str = "contact";

/// Scenes in a section that has a gate wait for its reveal; the rest show from the start.
fn entrance_for(config: &SiteConfig, section: &str) -> Entrance {
    if config.sections.iter().any(|s| s.name == section) {
        Entrance::on_section(section)
    } else {
        Entrance::always()
    }
}

fn policy(mode: RevealMode) -> RevealPolicy {
    match mode {
        RevealMode::Once => RevealPolicy::Once,
        RevealMode::Repeat => RevealPolicy::Repeat,
    }
}

pub fn register_gates(runtime: &mut Runtime, config: &SiteConfig) {
    for section in &config.sections {
        runtime.register_gate(
            section.name.as_str(),
            EntranceGate::new(section.threshold, policy(section.mode)),
        );
    }
}

fn site_scenes(config: &SiteConfig) -> Vec<Box<dyn Scene>> {
    let seed = config.seeds.base;
    let skills = || entrance_for(config, SKILLS_SECTION);
    let projects = || entrance_for(config, PROJECTS_SECTION);

    vec![
        Box::new(PreloaderBackdrop::new(
            config.preloader.clone(),
            config.site.title.as_str(),
            seed,
        )),
        Box::new(SkillsHelix::new(config.helix.clone()).with_entrance(skills())),
        Box::new(SkillsNetwork::new(config.network.clone(), seed).with_entrance(skills())),
        Box::new(SkillsPolyhedron::new(config.polyhedron.clone()).with_entrance(skills())),
        Box::new(SkillsOrbit::new(config.orbit.clone(), seed).with_entrance(skills())),
        Box::new(SkillsCube::new(config.cube.clone()).with_entrance(skills())),
        Box::new(
            ProjectShowcase::new(config.showcase.clone(), config.projects.clone(), seed)
                .with_entrance(projects()),
        ),
        Box::new(
            ProjectCarousel::new(config.carousel.clone(), config.projects.clone())
                .with_breakpoint(config.viewport.mobile_breakpoint)
                .with_entrance(projects()),
        ),
        Box::new(ContactForm::new(config.contact.clone())),
        Box::new(TypingBot::new(&config.contact)),
    ]
}

/// Mounts every scene of the page. A scene that fails to mount is left out and
/// its error returned; the others mount regardless.
pub fn mount_site(runtime: &mut Runtime, config: &SiteConfig) -> Vec<RuntimeError> {
    let failures: Vec<RuntimeError> = site_scenes(config)
        .into_iter()
        .filter_map(|scene| runtime.mount_boxed(scene).err())
        .collect();

    log::info!(
        "site `{}` mounted: {} scenes, {} transforms, {} failed",
        config.site.title,
        runtime.scene_count(),
        runtime.transform_count(),
        failures.len()
    );
    failures
}

pub fn create_site_runtime(config: &SiteConfig) -> Runtime {
    let mut runtime = Runtime::with_viewport(Viewport {
        width: config.viewport.width,
        height: config.viewport.height,
        scroll: 0.0,
    });
    register_gates(&mut runtime, config);
    for failure in mount_site(&mut runtime, config) {
        log::error!("scene left out of the page: {failure}");
    }
    runtime
}

pub fn create_site_app<B: GraphicsBackend>(config: &SiteConfig, graphics: B) -> App<B> {
    App::new(create_site_runtime(config), graphics)
}

/// Loads `site.toml` from `path`, or the stock site when `path` is `None`.
pub fn load_site_app<B: GraphicsBackend>(
    path: Option<&Path>,
    graphics: B,
) -> Result<(App<B>, SiteConfig), ProjectError> {
    let config = match path {
        Some(path) => SiteConfig::load(path)?,
        None => SiteConfig::default(),
    };
    let app = create_site_app(&config, graphics);
    Ok((app, config))
}
