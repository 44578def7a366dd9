pub mod draft;
pub mod engine;
pub mod font;
pub mod measure;
pub mod wrap;
