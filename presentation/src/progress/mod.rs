//! Progress indication while the model is generating

pub mod spinner;
