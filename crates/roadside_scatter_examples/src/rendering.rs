//! Shared helpers for the scene examples: tracing setup, layout summaries and
//! PNG previews of roadside layouts in the (s, t) plane.
use std::collections::HashMap;
use std::path::Path;

use glam::DVec2;
use image::{Rgb, RgbImage};
use roadside_scatter::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs a `tracing` subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Ignore the error when a subscriber is already installed.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Logs object counts per kind and the covered (s, t) extent.
pub fn log_layout_summary(name: &str, layout: &RoadsideLayout) {
    let kinds = [
        ObjectKind::Tree,
        ObjectKind::LampPost,
        ObjectKind::Residential,
        ObjectKind::Commercial,
    ];
    let counts = kinds
        .iter()
        .filter_map(|&k| match layout.count_of(k) {
            0 => None,
            n => Some(format!("{k}={n}")),
        })
        .collect::<Vec<_>>()
        .join(", ");

    match layout.bounds() {
        Some(((min_s, min_t), (max_s, max_t))) => info!(
            "Layout '{}': {} objects ({}), s in [{:.1}, {:.1}], t in [{:.1}, {:.1}]",
            name,
            layout.len(),
            counts,
            min_s,
            max_s,
            min_t,
            max_t
        ),
        None => info!("Layout '{}' is empty.", name),
    }
}

/// How objects of one kind are drawn.
#[derive(Debug, Clone, Copy)]
pub enum KindStyle {
    Circle { color: [u8; 3], radius: i32 },
    Square { color: [u8; 3], half_size: i32 },
}

/// Image size, visible (s, t) window and per-kind styles for a preview.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    /// Lower-left corner of the visible window in road coordinates.
    pub view_min: DVec2,
    /// Upper-right corner of the visible window in road coordinates.
    pub view_max: DVec2,
    pub background: [u8; 3],
    /// Half width of the paved band drawn around `t = 0`, if any.
    pub road_half_width: Option<f64>,
    pub road_color: [u8; 3],
    styles: HashMap<ObjectKind, KindStyle>,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), view_min: DVec2, view_max: DVec2) -> Self {
        let mut styles = HashMap::new();
        styles.insert(
            ObjectKind::Tree,
            KindStyle::Circle {
                color: [34, 139, 34],
                radius: 3,
            },
        );
        styles.insert(
            ObjectKind::LampPost,
            KindStyle::Circle {
                color: [250, 220, 60],
                radius: 2,
            },
        );
        styles.insert(
            ObjectKind::Residential,
            KindStyle::Square {
                color: [178, 34, 34],
                half_size: 4,
            },
        );
        styles.insert(
            ObjectKind::Commercial,
            KindStyle::Square {
                color: [70, 130, 180],
                half_size: 6,
            },
        );

        Self {
            image_size,
            view_min,
            view_max,
            background: [26, 26, 26],
            road_half_width: None,
            road_color: [90, 90, 90],
            styles,
        }
    }

    /// Fits the window to the layout bounds plus `margin` on every side.
    pub fn fit(image_size: (u32, u32), layout: &RoadsideLayout, margin: f64) -> Self {
        let ((min_s, min_t), (max_s, max_t)) = layout.bounds().unwrap_or(((0.0, 0.0), (1.0, 1.0)));
        Self::new(
            image_size,
            DVec2::new(min_s - margin, min_t - margin),
            DVec2::new(max_s + margin, max_t + margin),
        )
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_road(mut self, half_width: f64) -> Self {
        self.road_half_width = Some(half_width);
        self
    }

    pub fn set_kind_style(&mut self, kind: ObjectKind, style: KindStyle) -> &mut Self {
        self.styles.insert(kind, style);
        self
    }

    /// Maps road coordinates to pixel coordinates; `t` grows upwards.
    fn to_pixel(&self, s: f64, t: f64) -> (i64, i64) {
        let (w, h) = self.image_size;
        let span = self.view_max - self.view_min;
        let u = (s - self.view_min.x) / span.x.max(f64::EPSILON);
        let v = (self.view_max.y - t) / span.y.max(f64::EPSILON);
        ((u * w as f64).floor() as i64, (v * h as f64).floor() as i64)
    }
}

/// Renders `layout` into an image according to `config`.
pub fn render_layout(layout: &RoadsideLayout, config: &RenderConfig) -> RgbImage {
    let (w, h) = config.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(config.background));

    if let Some(half) = config.road_half_width {
        let (_, top) = config.to_pixel(config.view_min.x, half);
        let (_, bottom) = config.to_pixel(config.view_min.x, -half);
        for y in top.max(0)..bottom.min(h as i64) {
            for x in 0..w {
                img.put_pixel(x, y as u32, Rgb(config.road_color));
            }
        }
    }

    for object in layout {
        let Some(style) = config.styles.get(&object.kind) else {
            continue;
        };
        let (cx, cy) = config.to_pixel(object.s, object.t);
        match *style {
            KindStyle::Circle { color, radius } => {
                let r = radius as i64;
                fill(&mut img, cx, cy, r, color, |dx, dy| dx * dx + dy * dy <= r * r);
            }
            KindStyle::Square { color, half_size } => {
                fill(&mut img, cx, cy, half_size as i64, color, |_, _| true);
            }
        }
    }

    img
}

fn fill(
    img: &mut RgbImage,
    cx: i64,
    cy: i64,
    extent: i64,
    color: [u8; 3],
    inside: impl Fn(i64, i64) -> bool,
) {
    let (w, h) = (img.width() as i64, img.height() as i64);
    for dy in -extent..=extent {
        for dx in -extent..=extent {
            let (x, y) = (cx + dx, cy + dy);
            if x < 0 || y < 0 || x >= w || y >= h || !inside(dx, dy) {
                continue;
            }
            img.put_pixel(x as u32, y as u32, Rgb(color));
        }
    }
}

/// Renders `layout` and writes it as PNG to `path`.
pub fn render_layout_to_png(
    layout: &RoadsideLayout,
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    render_layout(layout, config).save(path)?;
    info!("Wrote preview to {}", path.display());
    Ok(())
}
