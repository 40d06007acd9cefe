//! Value types for the three color models. Each one is a plain triple of
//! [`Component`](crate::Component)s generated by `gen_model!`.

pub mod hls;
pub mod hsv;
pub mod rgb;

pub use hls::Hls;
pub use hsv::Hsv;
pub use rgb::Rgb;
