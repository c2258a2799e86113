pub mod assets;
pub mod output_dir;
pub mod renderer;
