// Copyright @yucwang 2021

pub mod params;
pub mod plot;
