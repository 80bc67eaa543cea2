//=========================================================================
// Software Canvas
//=========================================================================
//
// RGBA framebuffer the logic thread draws into each tick.
//
// Architecture:
//   Scene::render(&mut Canvas) → Canvas::snapshot() → FrameSnapshot
//                                      ↓ (crossbeam channel)
//   Platform: copies FrameSnapshot into the pixels surface
//
// World space and canvas space coincide (1 world pixel = 1 texel); the
// platform scales the surface to the window.
//
//=========================================================================

//=== Submodules ==========================================================

mod color;

//=== Public API ==========================================================

pub use color::Color;

//=== External Dependencies ===============================================

use glam::Vec2;

//=== FrameSnapshot =======================================================

/// A finished frame handed to the platform thread.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8 pixels, `width * height * 4` bytes.
    pub rgba: Vec<u8>,
    /// HUD text of the top scene, mirrored into the window title.
    pub status: Option<String>,
}

//=== Canvas ==============================================================

/// Fixed-size RGBA framebuffer with clipped rectangle fills.
pub struct Canvas {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            rgba: vec![0; (width * height * 4) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.rgba
    }

    /// Fills the whole canvas.
    pub fn clear(&mut self, color: Color) {
        let px = color.to_rgba();
        for chunk in self.rgba.chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
    }

    /// Fills a world-space rectangle given by its top-left corner and size.
    ///
    /// Edges are rounded to the nearest texel and clipped to the canvas.
    pub fn fill_rect(&mut self, top_left: Vec2, size: Vec2, color: Color) {
        let x0 = (top_left.x.round() as i64).max(0);
        let y0 = (top_left.y.round() as i64).max(0);
        let x1 = ((top_left.x + size.x).round() as i64).min(self.width as i64);
        let y1 = ((top_left.y + size.y).round() as i64).min(self.height as i64);

        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let px = color.to_rgba();
        for y in y0..y1 {
            let row = (y as usize) * self.width as usize;
            for x in x0..x1 {
                let offset = (row + x as usize) * 4;
                self.rgba[offset..offset + 4].copy_from_slice(&px);
            }
        }
    }

    /// Draws a one texel wide rectangle border.
    pub fn fill_rect_outline(&mut self, top_left: Vec2, size: Vec2, color: Color) {
        self.fill_rect(top_left, Vec2::new(size.x, 1.0), color);
        self.fill_rect(Vec2::new(top_left.x, top_left.y + size.y - 1.0), Vec2::new(size.x, 1.0), color);
        self.fill_rect(top_left, Vec2::new(1.0, size.y), color);
        self.fill_rect(Vec2::new(top_left.x + size.x - 1.0, top_left.y), Vec2::new(1.0, size.y), color);
    }

    /// Reads one texel; `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = ((y * self.width + x) * 4) as usize;
        let p = &self.rgba[offset..offset + 4];
        Some(Color::rgba(p[0], p[1], p[2], p[3]))
    }

    /// Copies the current contents into a snapshot for the platform thread.
    pub fn snapshot(&self, status: Option<String>) -> FrameSnapshot {
        FrameSnapshot {
            width: self.width,
            height: self.height,
            rgba: self.rgba.clone(),
            status,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
