mod panels;
mod plot_view;
mod styles;

pub(crate) use styles::setup_custom_visuals;
