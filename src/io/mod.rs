// Copyright @yucwang 2026

pub mod raster_plot;
