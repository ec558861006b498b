use web_time::Instant;

use keel_core::{Color, DrawSink, FontId, Rect};
use keel_ui::{Context, FrameStats};

pub struct Hud {
    pub inspector_enabled: bool,
    pub hovered: Option<Rect>,
    frame_count: u64,
    last_frame: Option<Instant>,
    fps_smooth: f32,
    pub stats: Option<FrameStats>,
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

impl Hud {
    pub fn new() -> Self {
        Self {
            inspector_enabled: false,
            hovered: None,
            frame_count: 0,
            last_frame: None,
            fps_smooth: 0.0,
            stats: None,
        }
    }

    pub fn toggle_inspector(&mut self) {
        self.inspector_enabled = !self.inspector_enabled;
        log::debug!("inspector {}", if self.inspector_enabled { "on" } else { "off" });
    }

    pub fn set_hovered(&mut self, r: Option<Rect>) {
        self.hovered = r;
    }

    pub fn fps(&self) -> f32 {
        self.fps_smooth
    }

    /// Feeds one frame interval into the smoothed FPS.
    pub fn tick(&mut self, dt: f32) {
        self.frame_count += 1;
        if dt > 0.0 {
            let fps = 1.0 / dt;
            // simple EMA
            let a = 0.2;
            self.fps_smooth = if self.fps_smooth == 0.0 {
                fps
            } else {
                (1.0 - a) * self.fps_smooth + a * fps
            };
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("frame: {}", self.frame_count),
            format!("fps: {:.1}", self.fps_smooth),
        ];
        if let Some(s) = &self.stats {
            lines.push(format!("build: {:.2} ms", s.build_ms));
            lines.push(format!("widgets: {}/{}", s.widgets_drawn, s.widgets_built));
            lines.push(format!("windows: {}", s.windows));
        }
        lines
    }

    pub fn overlay(&mut self, sink: &mut dyn DrawSink) {
        let now = Instant::now();
        let dt = self
            .last_frame
            .replace(now)
            .map(|prev| (now - prev).as_secs_f32())
            .unwrap_or(0.0);
        self.tick(dt);

        let text = self.lines().join("  |  ");
        sink.draw_text(
            Rect::new(8.0, 8.0, 200.0, 16.0),
            &text,
            FontId(0),
            Color::from_hex("#AAAAAA"),
        );

        if let Some(r) = self.hovered {
            sink.draw_rect(r, 0.0, 2.0, Color::from_hex("#44AAFF"));
        }
    }
}

/// HUD plus an outline around the focused widget. Draw it after
/// [`Context::end`] so it lands on top.
pub struct Inspector {
    pub hud: Hud,
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

impl Inspector {
    pub fn new() -> Self {
        Self { hud: Hud::new() }
    }

    pub fn frame(&mut self, ctx: &Context, sink: &mut dyn DrawSink) {
        if !self.hud.inspector_enabled {
            return;
        }
        self.hud.stats = Some(ctx.last_stats());
        self.hud.hovered = ctx.focus().and_then(|id| ctx.rect_of(id));
        self.hud.overlay(sink);
    }
}
