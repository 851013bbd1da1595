#![warn(rust_2018_idioms)]
// 一貫性を保つために以下のclippy警告は無効化
#![allow(clippy::too_many_arguments)]

pub mod model;
pub mod render;
pub mod util;
pub mod view;
