//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub candle_bullish_color: Color32,
    pub candle_bearish_color: Color32,
    pub candle_width_pct: f64,  // 0.0 to 1.0 (relative to the interval step)
    pub candle_wick_width: f32, // Pixels

    pub plot_y_padding_pct: f64, // Y-Axis padding factor (0.05 = 5% top and bottom)

    pub color_error: Color32,
    pub color_rate: Color32,
    pub color_buy: Color32,
    pub color_sell: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    candle_bullish_color: Color32::from_rgb(37, 130, 37),
    candle_bearish_color: Color32::from_rgb(173, 18, 18),
    candle_width_pct: 0.7,
    candle_wick_width: 1.0,

    plot_y_padding_pct: 0.05,

    color_error: Color32::from_rgb(239, 68, 68),
    color_rate: Color32::LIGHT_GRAY,
    color_buy: Color32::from_rgb(37, 130, 37),
    color_sell: Color32::from_rgb(173, 18, 18),
};
