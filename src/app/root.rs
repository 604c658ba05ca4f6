use {
    anyhow::Result,
    eframe::{Frame, egui::Context},
    std::sync::Arc,
};

use crate::{
    Cli,
    data::BinanceRest,
    domain::Selection,
    pipeline::MarketFeed,
    ui::setup_custom_visuals,
};

pub struct App {
    pub(crate) selection: Selection,
    pub(crate) feed: MarketFeed,
    pub(crate) sell_amount: String,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Result<Self> {
        // One-time visual setup, the equivalent of registering the chart
        // library at startup.
        setup_custom_visuals(&cc.egui_ctx);

        let selection = Selection {
            symbol: args.symbol,
            interval: args.interval,
        };
        let mut feed = MarketFeed::new(Arc::new(BinanceRest::new()?));
        // Initial mount counts as a selection change.
        feed.request(selection);

        Ok(Self {
            selection,
            feed,
            sell_amount: String::new(),
        })
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.feed.poll();
        if self.feed.state().is_loading() {
            // Keep ticking while a run is in flight so poll() sees the
            // result promptly.
            ctx.request_repaint();
        }

        self.render_controls_panel(ctx);
        self.render_order_panel(ctx);
        self.render_central_panel(ctx);
    }
}
