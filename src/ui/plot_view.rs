use eframe::egui::Ui;
use egui_plot::{
    Axis, AxisHints, GridMark, HPlacement, Line, Plot, PlotPoints, PlotUi, Polygon, VPlacement,
};

use crate::{
    config::plot::PLOT_CONFIG,
    domain::{Candle, CandleDirection, ChartDataset, Interval},
    utils::{epoch_ms_to_date_string, epoch_ms_to_time_string},
};

/// Candlestick chart for the active dataset. X is the candle open time in
/// epoch milliseconds; candle width derives from the selected timeframe.
pub(crate) fn render_chart(ui: &mut Ui, dataset: &ChartDataset, interval: Interval) {
    let candles = &dataset.candles;
    if candles.is_empty() {
        // Transformer rejects empty windows; nothing to draw if we ever
        // get here anyway.
        return;
    }

    let step = interval.interval_ms() as f64;
    let half_w = step * PLOT_CONFIG.candle_width_pct / 2.0;
    let (y_min, y_max) = price_bounds(candles);
    let y_pad = (y_max - y_min) * PLOT_CONFIG.plot_y_padding_pct;

    Plot::new("kline_plot")
        .custom_x_axes(vec![time_axis()])
        .custom_y_axes(vec![price_axis()])
        .include_y(y_min - y_pad)
        .include_y(y_max + y_pad)
        .label_formatter(|_name, value| {
            format!(
                "{}\nPrice: {:.2}",
                epoch_ms_to_date_string(value.x as i64),
                value.y
            )
        })
        .show(ui, |plot_ui| {
            for candle in candles {
                draw_candle(plot_ui, candle, half_w);
            }
        });
}

fn price_bounds(candles: &[Candle]) -> (f64, f64) {
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for c in candles {
        y_min = y_min.min(c.low);
        y_max = y_max.max(c.high);
    }
    (y_min, y_max)
}

// Axis with smart time labels (HH:MM, matching the timeframe granularity)
fn time_axis() -> AxisHints<'static> {
    AxisHints::new(Axis::X)
        .label("Time")
        .formatter(move |mark: GridMark, _range| epoch_ms_to_time_string(mark.value as i64))
        .placement(VPlacement::Bottom)
}

fn price_axis() -> AxisHints<'static> {
    AxisHints::new(Axis::Y)
        .label("Price")
        .placement(HPlacement::Left)
}

fn draw_candle(plot_ui: &mut PlotUi, candle: &Candle, half_w: f64) {
    let color = match candle.direction() {
        CandleDirection::Up => PLOT_CONFIG.candle_bullish_color,
        CandleDirection::Down => PLOT_CONFIG.candle_bearish_color,
    };
    let x = candle.open_time_ms as f64;

    // 1. Wick
    if candle.high > candle.low {
        draw_wick_line(plot_ui, x, candle.high, candle.low, color);
    }

    // 2. Body
    let (body_bot, body_top_raw) = candle.body_range();
    // Doji check: nudge a flat body so it still renders one pixel tall
    let body_top = if (body_top_raw - body_bot).abs() < f64::EPSILON {
        body_bot * 1.0001
    } else {
        body_top_raw
    };
    draw_body_rect(plot_ui, x, body_top, body_bot, half_w, color);
}

#[inline]
fn draw_wick_line(ui: &mut PlotUi, x: f64, top: f64, bottom: f64, color: eframe::egui::Color32) {
    ui.line(
        Line::new("", PlotPoints::new(vec![[x, bottom], [x, top]]))
            .color(color)
            .width(PLOT_CONFIG.candle_wick_width),
    );
}

#[inline]
fn draw_body_rect(
    ui: &mut PlotUi,
    x: f64,
    top: f64,
    bottom: f64,
    half_w: f64,
    color: eframe::egui::Color32,
) {
    let pts = vec![
        [x - half_w, bottom],
        [x + half_w, bottom],
        [x + half_w, top],
        [x - half_w, top],
    ];

    ui.polygon(
        Polygon::new("", PlotPoints::new(pts))
            .fill_color(color)
            .stroke(eframe::egui::Stroke::NONE),
    );
}
