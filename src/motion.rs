use rand::Rng;

/// Hero content scroll rate relative to the page.
const PARALLAX_RATE: f64 = -0.3;

/// Maximum card tilt in degrees on either axis.
pub const MAX_TILT_DEG: f64 = 8.0;

/// Vertical offset for the hero content at a scroll depth. None once the
/// hero has scrolled out of the viewport.
pub fn parallax_offset(scrolled: f64, viewport_height: f64) -> Option<f64> {
    (scrolled < viewport_height).then_some(scrolled * PARALLAX_RATE)
}

/// Rotation pair applied to a tilting card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
}

/// Map a pointer position inside a card of the given size to its 3D tilt.
/// The center is flat; edges reach [`MAX_TILT_DEG`].
pub fn card_tilt(width: f64, height: f64, pointer_x: f64, pointer_y: f64) -> Tilt {
    let cx = width / 2.0;
    let cy = height / 2.0;
    Tilt {
        rotate_x_deg: ((pointer_y - cy) / cy) * -MAX_TILT_DEG,
        rotate_y_deg: ((pointer_x - cx) / cx) * MAX_TILT_DEG,
    }
}

/// Per-frame drift offset for a floating icon tracking the mouse. Icons
/// further down the list move faster.
pub fn float_offset(
    index: usize,
    mouse_x: f64,
    mouse_y: f64,
    viewport_w: f64,
    viewport_h: f64,
) -> (f64, f64) {
    let speed = (index + 1) as f64 * 0.02;
    (
        mouse_x * speed - (viewport_w / 2.0) * speed,
        mouse_y * speed - (viewport_h / 2.0) * speed,
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub speed: f64,
    pub alpha: f64,
}

/// Decorative starfield state. Stars drift downward each step and wrap back
/// to the top edge at a fresh horizontal position.
#[derive(Debug, Default)]
pub struct Starfield {
    width: f64,
    height: f64,
    stars: Vec<Star>,
}

impl Starfield {
    /// Re-seed for a canvas size. Density scales with area, clamped to keep
    /// small and huge viewports reasonable; a reduced-motion preference
    /// seeds no stars at all.
    pub fn resize<R: Rng>(&mut self, width: f64, height: f64, reduced_motion: bool, rng: &mut R) {
        self.width = width;
        self.height = height;
        self.stars.clear();
        if reduced_motion || width <= 0.0 || height <= 0.0 {
            return;
        }

        let area = width * height;
        let density = (area / (1200.0 * 800.0) * 0.08).clamp(0.06, 0.12);
        let count = (area * density / 1200.0) as usize;

        self.stars = (0..count)
            .map(|_| Star {
                x: rng.gen::<f64>() * width,
                y: rng.gen::<f64>() * height,
                radius: rng.gen::<f64>() * 1.8 + 0.2,
                speed: rng.gen::<f64>() * 0.6 + 0.1,
                alpha: rng.gen::<f64>() * 0.6 + 0.4,
            })
            .collect();
    }

    /// Advance every star one frame.
    pub fn step<R: Rng>(&mut self, rng: &mut R) {
        for star in &mut self.stars {
            star.y += star.speed;
            if star.y > self.height {
                star.y = -2.0;
                star.x = rng.gen::<f64>() * self.width;
            }
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }
}
