//! SFML window, textures and drawing
//!
//! Everything here is created once at startup; any failure is fatal and is
//! reported as a [`FrontendError`].

use std::path::Path;
use std::time::Instant;

use glam::DVec2;

use sfml::cpp::FBox;
use sfml::graphics::{
    Color, Font, IntRect, RenderTarget, RenderTexture, RenderWindow, Sprite, Text, Texture,
    Transformable,
};
use sfml::window::{ContextSettings, Event, Key, Style};

use super::frame::{Frame, centered_origin, sheet_frame};
use crate::error::FrontendError;
use crate::game::{FrameInput, Frontend};
use crate::settings::{LoseText, Settings};
use crate::sim::Rect;

// Fields drop top to bottom: reverse order of creation.
pub struct SfmlFrontend {
    last_frame: Instant,
    /// Pre-rendered game-over caption
    lose_text: FBox<Texture>,
    obstacle: FBox<Texture>,
    player_sheet: FBox<Texture>,
    background: FBox<Texture>,
    window: RenderWindow,
}

impl SfmlFrontend {
    pub fn new(settings: &Settings) -> Result<Self, FrontendError> {
        let (width, height) = settings.window_size();
        let mut window = RenderWindow::new(
            (width, height),
            settings.title.as_str(),
            Style::CLOSE,
            &ContextSettings::default(),
        )
        .map_err(|err| FrontendError::Window {
            reason: err.to_string(),
        })?;
        window.set_vertical_sync_enabled(settings.vsync);
        log::info!("Window {}x{} created (vsync: {})", width, height, settings.vsync);

        let assets = &settings.assets;
        let background = load_texture(&assets.background_path())?;
        let player_sheet = load_texture(&assets.player_sheet_path())?;
        let obstacle = load_texture(&assets.obstacle_path())?;

        let font_path = assets.font_path();
        let font = Font::from_file(&font_path.to_string_lossy()).map_err(|err| {
            FrontendError::Font {
                path: font_path.clone(),
                reason: err.to_string(),
            }
        })?;
        let lose_text = render_text(&font, &settings.lose_text)?;

        Ok(Self {
            last_frame: Instant::now(),
            lose_text,
            obstacle,
            player_sheet,
            background,
            window,
        })
    }
}

impl Frontend for SfmlFrontend {
    fn poll_input(&mut self) -> FrameInput {
        let mut quit = false;
        while let Some(event) = self.window.poll_event() {
            if let Event::Closed = event {
                quit = true;
            }
        }
        FrameInput {
            flap: Key::Up.is_pressed(),
            quit,
        }
    }

    fn frame_seconds(&mut self) -> f64 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame).as_secs_f64();
        self.last_frame = now;
        elapsed
    }

    fn present(&mut self, frame: &Frame) {
        let window = &mut self.window;
        window.clear(Color::BLACK);

        draw_stretched(window, &self.background, None, &frame.background);

        for sprite in &frame.obstacles {
            draw_stretched(window, &self.obstacle, None, &sprite.rect);
        }

        let sheet = self.player_sheet.size();
        let src = sheet_frame(sheet.x, sheet.y, frame.player_frame_count, frame.player_frame);
        let src = IntRect::new(src.left, src.top, src.width, src.height);
        draw_stretched(window, &self.player_sheet, Some(src), &frame.player);

        if let Some(center) = frame.lose_overlay {
            let size = self.lose_text.size();
            let size = DVec2::new(size.x as f64, size.y as f64);
            let origin = centered_origin(center, size);
            let dest = Rect::new(origin.x, origin.y, size.x, size.y);
            draw_stretched(window, &self.lose_text, None, &dest);
        }

        window.display();
    }
}

/// Draw `texture` (or the `src` part of it) scaled to fill `dest`
fn draw_stretched(window: &mut RenderWindow, texture: &Texture, src: Option<IntRect>, dest: &Rect) {
    let mut sprite = Sprite::with_texture(texture);
    let (src_w, src_h) = match src {
        Some(rect) => {
            sprite.set_texture_rect(rect);
            (rect.width as f32, rect.height as f32)
        }
        None => {
            let size = texture.size();
            (size.x as f32, size.y as f32)
        }
    };
    if src_w <= 0.0 || src_h <= 0.0 {
        return;
    }
    sprite.set_position((dest.left as f32, dest.top as f32));
    sprite.set_scale((dest.width as f32 / src_w, dest.height as f32 / src_h));
    window.draw(&sprite);
}

fn load_texture(path: &Path) -> Result<FBox<Texture>, FrontendError> {
    let texture = Texture::from_file(&path.to_string_lossy()).map_err(|err| {
        FrontendError::Texture {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }
    })?;
    log::debug!("Loaded texture {}", path.display());
    Ok(texture)
}

/// Render the caption once into a texture sized to its glyph bounds
fn render_text(font: &Font, caption: &LoseText) -> Result<FBox<Texture>, FrontendError> {
    let [r, g, b] = caption.color;
    let mut text = Text::new(caption.text.as_str(), font, caption.size);
    text.set_fill_color(Color::rgb(r, g, b));

    let bounds = text.local_bounds();
    let width = (bounds.left + bounds.width).ceil().max(1.0) as u32;
    let height = (bounds.top + bounds.height).ceil().max(1.0) as u32;

    let mut target = RenderTexture::new(width, height).map_err(|err| FrontendError::Text {
        reason: err.to_string(),
    })?;
    target.clear(Color::TRANSPARENT);
    target.draw(&text);
    target.display();

    let image = target
        .texture()
        .copy_to_image()
        .map_err(|err| FrontendError::Text {
            reason: err.to_string(),
        })?;
    Texture::from_image(&image, IntRect::new(0, 0, width as i32, height as i32)).map_err(|err| {
        FrontendError::Text {
            reason: err.to_string(),
        }
    })
}
