// Copyright @yucwang 2026

use std::path::Path;

use image::{ ImageResult, Rgb, RgbImage };

use crate::core::plot::{ Curve, LineStyle, PlotAxes, RecordingAxes };
use crate::math::constants::{ Float, Matrix2x3f, Vector2f, Vector3f };
use crate::math::range::{ AxisRange, Bounds };

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const DEFAULT_COLOR: [u8; 3] = [0, 0, 0];
const DASH_LENGTH: usize = 6;

// Orthographic view matching the usual 3-D axes defaults.
const VIEW_AZIMUTH_DEG: Float = -60.0;
const VIEW_ELEVATION_DEG: Float = 30.0;

/// Plot context that rasterises its curves into an RGB image.
pub struct RasterAxes {
    width: u32,
    height: u32,
    recording: RecordingAxes,
}

impl RasterAxes {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width: width.max(2), height: height.max(2), recording: RecordingAxes::new() }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn curves(&self) -> &[Curve] {
        &self.recording.curves
    }

    pub fn render(&self) -> RgbImage {
        let mut image = RgbImage::from_pixel(self.width, self.height, BACKGROUND);
        let in_3d = self.recording.curves.iter().any(|c| c.is_3d());
        let projection = if in_3d { view_projection() } else { planar_projection() };

        let (u_range, v_range) = self.screen_ranges(&projection);
        let to_pixel = |p: Vector3f| -> Vector2f {
            let uv = projection * p;
            let sx = safe_span(&u_range);
            let sy = safe_span(&v_range);
            Vector2f::new(
                (uv.x - u_range.min) / sx * (self.width - 1) as Float,
                (1.0 - (uv.y - v_range.min) / sy) * (self.height - 1) as Float,
            )
        };

        for curve in &self.recording.curves {
            let pixels: Vec<Vector2f> = curve.points().map(|p| to_pixel(p)).collect();
            draw_polyline(&mut image, &pixels, &curve.style);
        }

        image
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        let path = path.as_ref();
        log::info!("Starting writing plot image: {}.", path.display());
        self.render().save(path)
    }

    // Limits that were set win; unset axes fall back to the extent of the data.
    fn data_bounds(&self) -> Bounds {
        let mut x = AxisRange::empty();
        let mut y = AxisRange::empty();
        let mut z = AxisRange::empty();
        for p in self.recording.curves.iter().flat_map(|c| c.points()) {
            x.expand_by(p.x);
            y.expand_by(p.y);
            z.expand_by(p.z);
        }

        let pick = |limit: Option<AxisRange>, data: AxisRange| {
            limit.or_else(|| if data.is_valid() { Some(data) } else { None })
                .unwrap_or_else(AxisRange::unit)
        };
        Bounds::new(
            pick(self.recording.xlim, x),
            pick(self.recording.ylim, y),
            pick(self.recording.zlim, z),
        )
    }

    fn screen_ranges(&self, projection: &Matrix2x3f) -> (AxisRange, AxisRange) {
        let mut u = AxisRange::empty();
        let mut v = AxisRange::empty();
        for corner in self.data_bounds().corners().iter() {
            let uv = projection * corner;
            u.expand_by(uv.x);
            v.expand_by(uv.y);
        }
        (u, v)
    }
}

impl PlotAxes for RasterAxes {
    fn plot(&mut self, xs: &[Float], ys: &[Float], zs: Option<&[Float]>, style: &LineStyle) {
        self.recording.plot(xs, ys, zs, style);
    }

    fn set_xlim(&mut self, range: AxisRange) {
        self.recording.set_xlim(range);
    }

    fn set_ylim(&mut self, range: AxisRange) {
        self.recording.set_ylim(range);
    }

    fn set_zlim(&mut self, range: AxisRange) {
        self.recording.set_zlim(range);
    }
}

fn planar_projection() -> Matrix2x3f {
    Matrix2x3f::new(1.0, 0.0, 0.0,
                    0.0, 1.0, 0.0)
}

fn view_projection() -> Matrix2x3f {
    let (sa, ca) = VIEW_AZIMUTH_DEG.to_radians().sin_cos();
    let (se, ce) = VIEW_ELEVATION_DEG.to_radians().sin_cos();
    Matrix2x3f::new(-sa, ca, 0.0,
                    -se * ca, -se * sa, ce)
}

fn safe_span(range: &AxisRange) -> Float {
    let span = range.span();
    if span > 0.0 { span } else { 1.0 }
}

fn draw_polyline(image: &mut RgbImage, pixels: &[Vector2f], style: &LineStyle) {
    let color = Rgb(style.color.unwrap_or(DEFAULT_COLOR));
    let brush = style.line_width.unwrap_or(1.0).round().max(1.0) as i64;
    let mut step: usize = 0;

    for segment in pixels.windows(2) {
        let (a, b) = (segment[0], segment[1]);
        let steps = (b - a).amax().ceil().max(1.0) as usize;
        for i in 0..=steps {
            step += 1;
            if style.dashed && (step / DASH_LENGTH) % 2 == 1 {
                continue;
            }
            let p = a.lerp(&b, i as Float / steps as Float);
            stamp(image, p.x.round() as i64, p.y.round() as i64, brush, color);
        }
    }
}

fn stamp(image: &mut RgbImage, cx: i64, cy: i64, brush: i64, color: Rgb<u8>) {
    let lo = -(brush - 1) / 2;
    for dy in lo..lo + brush {
        for dx in lo..lo + brush {
            let (x, y) = (cx + dx, cy + dy);
            if x >= 0 && y >= 0 && x < image.width() as i64 && y < image.height() as i64 {
                image.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}
