// Services module for the scaffolding steps
pub mod project_generator;
pub mod repository;
pub mod scaffolder;
