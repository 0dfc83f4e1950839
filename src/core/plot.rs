// Copyright @yucwang 2026

use crate::math::constants::{ Float, Vector3f };
use crate::math::range::AxisRange;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dimensionality {
    TwoD,
    ThreeD,
}

impl Dimensionality {
    pub fn is_3d(self) -> bool {
        self == Dimensionality::ThreeD
    }
}

/// Line appearance handed unchanged to every `PlotAxes::plot` call.
/// `None` leaves the choice to the plot context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineStyle {
    pub color: Option<[u8; 3]>,
    pub line_width: Option<Float>,
    pub label: Option<String>,
    pub dashed: bool,
}

impl LineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: [u8; 3]) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_line_width(mut self, line_width: Float) -> Self {
        self.line_width = Some(line_width);
        self
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn with_dashed(mut self, dashed: bool) -> Self {
        self.dashed = dashed;
        self
    }
}

/// A caller-owned 2-D or 3-D drawing surface.
pub trait PlotAxes {
    /// Draws one polyline. `zs` is `Some` only on 3-D axes.
    fn plot(&mut self, xs: &[Float], ys: &[Float], zs: Option<&[Float]>, style: &LineStyle);
    fn set_xlim(&mut self, range: AxisRange);
    fn set_ylim(&mut self, range: AxisRange);
    fn set_zlim(&mut self, range: AxisRange);
}

#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    pub xs: Vec<Float>,
    pub ys: Vec<Float>,
    pub zs: Option<Vec<Float>>,
    pub style: LineStyle,
}

impl Curve {
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn is_3d(&self) -> bool {
        self.zs.is_some()
    }

    /// Points of the curve; 2-D curves lie in the `z = 0` plane.
    pub fn points(&self) -> impl Iterator<Item = Vector3f> + '_ {
        (0..self.len()).map(move |i| {
            let z = self.zs.as_ref().map_or(0.0, |zs| zs[i]);
            Vector3f::new(self.xs[i], self.ys[i], z)
        })
    }
}

/// Plot context that only remembers what was drawn.
#[derive(Clone, Debug, Default)]
pub struct RecordingAxes {
    pub curves: Vec<Curve>,
    pub xlim: Option<AxisRange>,
    pub ylim: Option<AxisRange>,
    pub zlim: Option<AxisRange>,
}

impl RecordingAxes {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlotAxes for RecordingAxes {
    fn plot(&mut self, xs: &[Float], ys: &[Float], zs: Option<&[Float]>, style: &LineStyle) {
        let n = xs.len().min(ys.len());
        let n = zs.map_or(n, |zs| n.min(zs.len()));
        if n != xs.len() || n != ys.len() {
            log::warn!("Curve coordinates differ in length, truncating to {} points.", n);
        }

        self.curves.push(Curve {
            xs: xs[..n].to_vec(),
            ys: ys[..n].to_vec(),
            zs: zs.map(|zs| zs[..n].to_vec()),
            style: style.clone(),
        });
    }

    fn set_xlim(&mut self, range: AxisRange) {
        self.xlim = Some(range);
    }

    fn set_ylim(&mut self, range: AxisRange) {
        self.ylim = Some(range);
    }

    fn set_zlim(&mut self, range: AxisRange) {
        self.zlim = Some(range);
    }
}
