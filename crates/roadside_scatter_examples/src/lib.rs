#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{
    init_tracing, log_layout_summary, render_layout, render_layout_to_png, KindStyle, RenderConfig,
};
