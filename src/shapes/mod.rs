// Copyright @yucwang 2023

pub mod sphere;
pub mod triangle;
