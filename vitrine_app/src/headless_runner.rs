use crate::App;
use std::time::{Duration, Instant};
use vitrine_animation::SubmissionStatus;
use vitrine_graphics::GraphicsBackend;
use vitrine_ids::SceneID;
use vitrine_project::SiteConfig;
use vitrine_runtime::{SceneEvent, Signal, visible_ratio};
use vitrine_scenes::{ContactForm, PreloaderBackdrop, TypingBot};

const DEFAULT_FPS: f32 = 60.0;
const LOG_INTERVAL_FRAMES: u32 = 150;

/// What the simulated visitor types into the contact form.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Default for ContactDraft {
    fn default() -> Self {
        Self {
            name: "Visitor".to_string(),
            email: "visitor@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunnerOptions {
    pub frames: u32,
    pub fps: f32,
    /// Pixels per second; `None` scrolls one viewport height per second.
    pub scroll_speed: Option<f32>,
    /// Frame on which the draft is submitted. The visitor starts typing a second earlier.
    pub submit_at: Option<u32>,
    pub draft: ContactDraft,
}

impl Default for RunnerOptions {
    fn default() -> Self {
        Self {
            frames: 600,
            fps: DEFAULT_FPS,
            scroll_speed: None,
            submit_at: None,
            draft: ContactDraft::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    pub frames: u32,
    pub statuses: Vec<SubmissionStatus>,
    pub mail_links: Vec<String>,
    pub reveals: Vec<(String, bool)>,
    pub preloader_done_at: Option<u32>,
    pub transforms: usize,
    pub pending_assets: usize,
    pub failed_assets: usize,
}

/// Drives an [`App`] without a window: fixed frame steps, a scripted scroll
/// down the page and an optional contact submission.
pub struct HeadlessRunner {
    options: RunnerOptions,
}

struct Scripted {
    form: Option<SceneID>,
    bot: Option<SceneID>,
    preloader: Option<SceneID>,
}

impl HeadlessRunner {
    pub fn new(options: RunnerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RunnerOptions {
        &self.options
    }

    fn draft_frame(&self, submit_at: u32) -> u32 {
        submit_at.saturating_sub(self.options.fps.round() as u32)
    }

    pub fn run<B: GraphicsBackend>(&self, app: &mut App<B>, config: &SiteConfig) -> RunReport {
        let fps = self.options.fps.max(1.0);
        let delta = 1.0 / fps;
        let height = config.viewport.height as f32;
        let speed = self.options.scroll_speed.unwrap_or(height);
        // A hero block fills the first screen; each section takes one more.
        let sections: Vec<(&str, f32)> = config
            .sections
            .iter()
            .enumerate()
            .map(|(i, s)| (s.name.as_str(), (i + 1) as f32 * height))
            .collect();
        let max_scroll = sections.len() as f32 * height;

        let mut scripted = Scripted {
            form: app.runtime.find_scene(ContactForm::NAME),
            bot: app.runtime.find_scene(TypingBot::NAME),
            preloader: app.runtime.find_scene(PreloaderBackdrop::NAME),
        };
        if self.options.submit_at.is_some() && scripted.form.is_none() {
            log::warn!("no contact form mounted, submission skipped");
        }

        let mut report = RunReport::default();
        let mut signals = Vec::new();
        let mut batch_work = Duration::ZERO;

        for frame in 0..self.options.frames {
            let scroll = (frame as f32 * delta * speed).min(max_scroll);
            app.runtime.set_scroll(scroll);
            for &(name, top) in &sections {
                let ratio = visible_ratio(scroll, height, top, height);
                if let Some(revealed) = app.runtime.report_visibility(name, ratio) {
                    log::debug!("section `{name}` revealed={revealed} at frame {frame}");
                    report.reveals.push((name.to_string(), revealed));
                }
            }

            if let Some(submit_at) = self.options.submit_at {
                self.script_contact(app, &scripted, frame, submit_at);
            }

            let work_start = Instant::now();
            app.frame(delta);
            batch_work += work_start.elapsed();

            app.drain_signals(&mut signals);
            for signal in signals.drain(..) {
                match signal {
                    Signal::StatusChanged { status, .. } => {
                        log::info!("contact status: {status:?}");
                        if let Some(bot) = scripted.bot {
                            app.runtime.dispatch(bot, SceneEvent::StatusChanged(status));
                        }
                        report.statuses.push(status);
                    }
                    Signal::OpenMail { link } => {
                        log::info!("open mail client: {link}");
                        report.mail_links.push(link);
                    }
                }
            }

            if let Some(preloader) = scripted.preloader {
                let done = app
                    .runtime
                    .with_scene::<PreloaderBackdrop, _, _>(preloader, |p| p.is_complete())
                    .unwrap_or(true);
                if done {
                    match app.runtime.unmount(preloader) {
                        Ok(released) => log::info!(
                            "preloader finished at frame {frame}, released {} transforms",
                            released.transforms
                        ),
                        Err(err) => log::warn!("preloader already gone: {err}"),
                    }
                    scripted.preloader = None;
                    report.preloader_done_at = Some(frame);
                }
            }

            report.frames = frame + 1;
            if report.frames % LOG_INTERVAL_FRAMES == 0 {
                let stats = app.graphics.stats();
                let avg_work_us = batch_work.as_secs_f64() * 1_000_000.0 / LOG_INTERVAL_FRAMES as f64;
                log::info!(
                    "frame {} | scroll {:.0}px | {} transforms | {} draws ({} textured) | {:.1}us avg work",
                    report.frames,
                    scroll,
                    app.runtime.transform_count(),
                    stats.draws,
                    stats.textured_draws,
                    avg_work_us
                );
                batch_work = Duration::ZERO;
            }
        }

        report.transforms = app.runtime.transform_count();
        report.pending_assets = app.runtime.pending_assets();
        report.failed_assets = app.runtime.failed_assets();
        report
    }

    fn script_contact<B: GraphicsBackend>(
        &self,
        app: &mut App<B>,
        scripted: &Scripted,
        frame: u32,
        submit_at: u32,
    ) {
        let draft = &self.options.draft;
        if frame == self.draft_frame(submit_at) {
            if let Some(bot) = scripted.bot {
                app.runtime.dispatch(bot, SceneEvent::Draft(draft.message.clone()));
            }
        }
        if frame == submit_at {
            if let Some(form) = scripted.form {
                app.runtime.dispatch(
                    form,
                    SceneEvent::Submit {
                        name: draft.name.clone(),
                        email: draft.email.clone(),
                        message: draft.message.clone(),
                    },
                );
            }
        }
    }
}

impl Default for HeadlessRunner {
    fn default() -> Self {
        Self::new(RunnerOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{SKILLS_SECTION, create_site_app};
    use vitrine_graphics::HeadlessGraphics;
    use vitrine_scenes::SkillsHelix;

    fn small_site() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.cube.texture_size = 8;
        config
    }

    #[test]
    fn scripted_submission_reaches_the_bot() {
        let config = small_site();
        let mut app = create_site_app(&config, HeadlessGraphics::new());
        let runner = HeadlessRunner::new(RunnerOptions {
            frames: 400,
            submit_at: Some(30),
            ..RunnerOptions::default()
        });
        let report = runner.run(&mut app, &config);

        assert_eq!(report.frames, 400);
        assert_eq!(
            report.statuses,
            vec![
                SubmissionStatus::Sending,
                SubmissionStatus::Success,
                SubmissionStatus::Idle
            ]
        );
        assert_eq!(report.mail_links.len(), 1);
        assert!(report.mail_links[0].contains("Contact%20from%20Visitor"));

        let bot = app.runtime.find_scene(TypingBot::NAME).unwrap();
        let speech = app
            .runtime
            .with_scene::<TypingBot, _, _>(bot, |b| b.speech().to_string())
            .unwrap();
        assert_eq!(speech, vitrine_scenes::contact::bot::READY);
    }

    #[test]
    fn scrolling_reveals_the_sections() {
        let config = small_site();
        let mut app = create_site_app(&config, HeadlessGraphics::new());
        let report = HeadlessRunner::new(RunnerOptions {
            frames: 300,
            ..RunnerOptions::default()
        })
        .run(&mut app, &config);

        assert!(report.reveals.contains(&("projects".to_string(), true)));
        assert!(app.runtime.gate(SKILLS_SECTION).unwrap().is_revealed());
        assert!(report.statuses.is_empty());

        let helix = app.runtime.find_scene(SkillsHelix::NAME).unwrap();
        let group = app
            .runtime
            .with_scene::<SkillsHelix, _, _>(helix, |s| s.group())
            .unwrap();
        assert!(app.runtime.element(group).unwrap().transform.scale.x > 0.9);
    }

    #[test]
    fn finished_preloader_is_unmounted() {
        let mut config = small_site();
        config.preloader.progress_interval_ms = 1;
        let mut app = create_site_app(&config, HeadlessGraphics::new());
        let report = HeadlessRunner::new(RunnerOptions {
            frames: 120,
            ..RunnerOptions::default()
        })
        .run(&mut app, &config);

        assert!(report.preloader_done_at.is_some());
        assert!(app.runtime.find_scene(PreloaderBackdrop::NAME).is_none());
        assert_eq!(app.runtime.scene_count(), 9);
        assert_eq!(report.transforms, app.runtime.transform_count());
    }
}
