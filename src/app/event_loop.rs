use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::app::{App, Message, Model, update};
use crate::logging;
use crate::ui::style::Theme;

/// Delay before a terminal resize is applied.
const RESIZE_DEBOUNCE_MS: u64 = 100;

pub(super) struct ResizeDebouncer {
    delay_ms: u64,
    pending: Option<(u16, u16, u64)>,
}

impl ResizeDebouncer {
    pub(super) const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    /// Queue a size; a later call replaces it and restarts the delay.
    pub(super) const fn queue(&mut self, width: u16, height: u16, now_ms: u64) {
        self.pending = Some((width, height, now_ms));
    }

    pub(super) fn take_ready(&mut self, now_ms: u64) -> Option<(u16, u16)> {
        let (width, height, queued_at) = self.pending?;
        if now_ms.saturating_sub(queued_at) >= self.delay_ms {
            self.pending = None;
            Some((width, height))
        } else {
            None
        }
    }

    pub(super) const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be initialized or an I/O
    /// failure occurs while polling events or drawing.
    pub fn run(&mut self) -> Result<()> {
        let _run_scope = logging::scope("app.run.total");

        // Create image picker BEFORE initializing terminal (queries stdio)
        let picker = if self.images_enabled {
            let _picker_scope = logging::scope("app.create_picker");
            crate::image::create_picker(self.force_half_cell)
        } else {
            None
        };

        let init_scope = logging::scope("app.ratatui_init");
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal: wisata requires an interactive terminal")?;
        let size = terminal.size()?;
        drop(init_scope);

        let mut model = Model::new((size.width, size.height), self.image_rows).with_picker(picker);
        model.theme = Theme::for_mode(self.theme);
        model.assets = crate::image::AssetLoader::new(self.assets_dir.clone());
        model.images_enabled = self.images_enabled;
        model
            .config_global_path
            .clone_from(&self.config_global_path);
        model.config_local_path.clone_from(&self.config_local_path);
        tracing::debug!(
            width = size.width,
            height = size.height,
            assets = %self.assets_dir.display(),
            images = self.images_enabled,
            "model ready"
        );

        let images_scope = logging::scope("app.load_nearby_images.initial");
        model.load_nearby_images();
        drop(images_scope);

        let result = execute!(stdout(), EnableMouseCapture)
            .context("Failed to enable mouse capture")
            .and_then(|()| Self::event_loop(&mut terminal, &mut model));

        // Restore terminal
        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();

        result
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let start = Instant::now();
        let mut resize_debouncer = ResizeDebouncer::new(RESIZE_DEBOUNCE_MS);
        let mut frame_idx: u64 = 0;
        let mut needs_render = true;

        loop {
            let now_ms = elapsed_ms(start);

            if let Some((width, height)) = resize_debouncer.take_ready(now_ms) {
                tracing::debug!(frame = frame_idx, width, height, "resize applied");
                *model = update(std::mem::take(model), Message::Resize(width, height));
                needs_render = true;
            }

            model.set_resize_pending(resize_debouncer.is_pending());

            // Handle events
            let poll_ms = if needs_render {
                0
            } else if resize_debouncer.is_pending() {
                10
            } else {
                250
            };
            if event::poll(Duration::from_millis(poll_ms))? {
                // Refresh timestamp after poll wait so the debouncer uses accurate times.
                let event_ms = elapsed_ms(start);
                if let Some(msg) =
                    Self::handle_event(&event::read()?, model, event_ms, &mut resize_debouncer)
                {
                    tracing::trace!(frame = frame_idx, ?msg, "message");
                    *model = update(std::mem::take(model), msg);
                    needs_render = true;
                }

                // Coalesce key repeat bursts into a single render.
                let mut drained = 0_u32;
                while event::poll(Duration::from_millis(0))? {
                    let drain_ms = elapsed_ms(start);
                    if let Some(msg) =
                        Self::handle_event(&event::read()?, model, drain_ms, &mut resize_debouncer)
                    {
                        drained += 1;
                        *model = update(std::mem::take(model), msg);
                        needs_render = true;
                    }
                }
                if drained > 0 {
                    tracing::trace!(frame = frame_idx, drained, "events drained");
                }
            }

            if needs_render {
                frame_idx += 1;

                // Load images near viewport before rendering (skipped during resize)
                let load_start = Instant::now();
                model.load_nearby_images();
                if logging::perf_enabled() {
                    tracing::info!(
                        target: "wisata::perf",
                        frame = frame_idx,
                        prep_ms = load_start.elapsed().as_secs_f64() * 1000.0,
                        offset = model.viewport.offset(),
                        resize_pending = resize_debouncer.is_pending(),
                        "frame.prep"
                    );
                }

                let _draw_scope = logging::scope("frame.draw");
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                needs_render = false;
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
