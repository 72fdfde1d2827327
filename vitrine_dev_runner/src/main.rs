use anyhow::Context;
use env_logger::Env;
use std::{env, fs, path::Path, path::PathBuf};
use vitrine_app::{
    entry,
    headless_runner::{ContactDraft, HeadlessRunner, RunnerOptions},
};
use vitrine_graphics::HeadlessGraphics;
use vitrine_project::SiteConfig;
use vitrine_scenes::scene_rng;

fn parse_flag_value(args: &[String], flag: &str) -> Option<String> {
    let idx = args.iter().position(|a| a == flag)?;
    args.get(idx + 1).cloned()
}

fn parse_number<T: std::str::FromStr>(args: &[String], flag: &str) -> anyhow::Result<Option<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    parse_flag_value(args, flag)
        .map(|raw| raw.parse::<T>().with_context(|| format!("{flag} expects a number, got `{raw}`")))
        .transpose()
}

fn dump_textures(config: &SiteConfig, dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let seed = config.seeds.base;

    let planet = vitrine_texture::generate(&vitrine_texture::planet(), &mut scene_rng(seed, "planet"));
    planet.save_png(&dir.join("planet.png"))?;

    let backdrop = vitrine_texture::generate(
        &vitrine_texture::preloader_backdrop(),
        &mut scene_rng(seed, "preloader"),
    );
    backdrop.save_png(&dir.join("preloader_backdrop.png"))?;

    for (i, face) in config.cube.faces.iter().enumerate() {
        let tile = vitrine_texture::tile_face(face.bg, face.accent, config.cube.texture_size);
        tile.save(dir.join(format!("cube_face_{i}.png")))?;
    }
    log::info!("textures written to {}", dir.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args: Vec<String> = env::args().collect();

    let path = parse_flag_value(&args, "--path").map(PathBuf::from);
    let (mut app, config) = entry::load_site_app(path.as_deref(), HeadlessGraphics::new())
        .context("failed to start the site")?;

    if let Some(dir) = parse_flag_value(&args, "--dump-textures") {
        dump_textures(&config, Path::new(&dir))?;
    }

    let defaults = RunnerOptions::default();
    let mut draft = ContactDraft::default();
    if let Some(email) = parse_flag_value(&args, "--email") {
        draft.email = email;
    }
    let options = RunnerOptions {
        frames: parse_number(&args, "--frames")?.unwrap_or(defaults.frames),
        fps: parse_number(&args, "--fps")?.unwrap_or(defaults.fps),
        scroll_speed: parse_number(&args, "--scroll")?,
        submit_at: parse_number(&args, "--submit-at")?,
        draft,
    };

    let report = HeadlessRunner::new(options).run(&mut app, &config);
    log::info!(
        "`{}` ran {} frames: {} status changes, {} mail links, {} reveals, {} transforms alive",
        config.site.title,
        report.frames,
        report.statuses.len(),
        report.mail_links.len(),
        report.reveals.len(),
        report.transforms
    );
    if report.failed_assets > 0 {
        log::warn!("{} assets failed to load", report.failed_assets);
    }
    Ok(())
}
