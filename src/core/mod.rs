// Copyright @yucwang 2021

pub mod computation_node;
pub mod interaction;
pub mod material;
pub mod renderable;
pub mod scene;
pub mod sensor;
