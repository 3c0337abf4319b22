/// Domain layer: projects, comparisons and the rules that relate them
pub mod domain;
pub mod policies;
pub mod services;
