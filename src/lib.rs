// Copyright @yucwang 2021

pub extern crate nalgebra as na;

pub mod core;
pub mod io;
pub mod math;
pub mod volumes;

pub use crate::core::params::{ load_params, ConfigError, ParamStore };
pub use crate::core::plot::{ Dimensionality, LineStyle, PlotAxes };
pub use crate::volumes::{ get_tracking_volume, TrackingVolume };
