// Copyright 2020 TwoCookingMice

pub extern crate nalgebra as na;

pub mod core;
pub mod emitters;
pub mod materials;
pub mod math;
pub mod renderers;
pub mod sensors;
pub mod shapes;
