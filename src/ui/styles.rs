use eframe::egui::{Color32, Context, Visuals};

/// Process-wide look of the dashboard. Applied once at startup.
pub(crate) fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = Color32::from_rgb(16, 16, 20);
    visuals.panel_fill = Color32::from_rgb(22, 22, 28);
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
