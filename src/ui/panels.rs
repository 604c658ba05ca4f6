use {
    eframe::egui::{Button, CentralPanel, ComboBox, Context, TextEdit, TopBottomPanel},
    strum::IntoEnumIterator,
};

use crate::{
    app::App,
    config::{DF, plot::PLOT_CONFIG},
    domain::{Interval, Symbol},
    ui::plot_view::render_chart,
};

impl App {
    /// Heading, the two selectors, and the error banner.
    pub(crate) fn render_controls_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("controls_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("Cryptocurrency Live Chart");
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                let before = self.selection;

                ui.label("Select Cryptocurrency:");
                ComboBox::from_id_salt("crypto_select")
                    .selected_text(self.selection.symbol.label())
                    .show_ui(ui, |ui| {
                        for symbol in Symbol::iter() {
                            ui.selectable_value(
                                &mut self.selection.symbol,
                                symbol,
                                symbol.label(),
                            );
                        }
                    });

                ui.label("Select Timeframe:");
                ComboBox::from_id_salt("timeframe_select")
                    .selected_text(self.selection.interval.label())
                    .show_ui(ui, |ui| {
                        for interval in Interval::iter() {
                            ui.selectable_value(
                                &mut self.selection.interval,
                                interval,
                                interval.label(),
                            );
                        }
                    });

                if self.feed.state().is_loading() {
                    ui.spinner();
                }

                if self.selection != before {
                    if DF.log_selection {
                        log::info!("Selection changed: {} -> {}", before, self.selection);
                    }
                    self.feed.request(self.selection);
                }
            });

            // One generic message whatever the failure kind; the specific
            // kind already went to the log.
            let user_message = self.feed.state().error().map(|e| e.user_message());
            if let Some(message) = user_message {
                ui.horizontal(|ui| {
                    ui.colored_label(PLOT_CONFIG.color_error, message);
                    if ui.button("Retry").clicked() {
                        self.feed.request(self.selection);
                    }
                });
            }
            ui.add_space(4.0);
        });
    }

    /// Rate display plus the buy/sell order inputs. The inputs only capture
    /// text; there is no backing trade logic.
    pub(crate) fn render_order_panel(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("order_panel").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let mut rate_text = format!("{}", self.feed.state().current_rate());
                ui.add(
                    TextEdit::singleline(&mut rate_text)
                        .interactive(false)
                        .desired_width(120.0)
                        .text_color(PLOT_CONFIG.color_rate),
                );
                let _ = ui.add(Button::new("Buy").fill(PLOT_CONFIG.color_buy));
            });
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.add(
                    TextEdit::singleline(&mut self.sell_amount)
                        .hint_text("Amount to Sell")
                        .desired_width(120.0),
                );
                let _ = ui.add(Button::new("Sell").fill(PLOT_CONFIG.color_sell));
            });
            ui.add_space(6.0);
        });
    }

    /// The chart itself, or stale data while a run is in flight / failed.
    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            match self.feed.state().snapshot() {
                Some(snapshot) => render_chart(ui, &snapshot.dataset, self.selection.interval),
                None => {
                    ui.centered_and_justified(|ui| {
                        ui.label("Waiting for first chart data...");
                    });
                }
            }
        });
    }
}
