//! Prompts sent to the model on the user's behalf.

pub mod self_care;
