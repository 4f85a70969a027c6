mod scenes;
mod widgets;

use std::time::Instant;

use crate::scenes::CipherPanelState;
use eframe::egui;
use eframe::egui::{CentralPanel, Color32, Frame, Margin, Vec2};

pub struct App {
    last_render: Instant,
    cipher_panel: CipherPanelState,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            last_render: Instant::now(),
            cipher_panel: CipherPanelState::setup(),
        }
    }

    pub(crate) fn update(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        Frame::default()
            .outer_margin(Margin::same(20))
            .inner_margin(Margin::same(10))
            .show(ui, |ui| self.cipher_panel.render(ui, ctx));
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        log::trace!(
            "Frame rendering time: {}",
            self.last_render.elapsed().as_millis()
        );

        // Redefine frame for some custom properties with light theme
        let my_frame = Frame {
            fill: Color32::from_rgb(248, 248, 248), // Light background
            shadow: eframe::epaint::Shadow::NONE,
            inner_margin: Margin::same(0),
            ..Default::default()
        };

        CentralPanel::default().frame(my_frame).show(ctx, |ui| {
            self.update(ui, ctx);
        });

        self.last_render = Instant::now();
    }
}

fn main() -> eframe::Result {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::init();

    let window_size = Vec2::new(640.0, 640.0);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(window_size),
        ..Default::default()
    };

    let app = App::new();
    eframe::run_native(
        "Affine Cipher - Monoalphabetic substitution over the Latin alphabet",
        options,
        Box::new(move |ctx| {
            let mut visuals = egui::Visuals::light();
            visuals.override_text_color = Some(Color32::BLACK);
            visuals.panel_fill = Color32::from_rgb(248, 248, 248); // Light panel background
            visuals.window_fill = Color32::from_rgb(255, 255, 255); // White window background
            visuals.extreme_bg_color = Color32::from_rgb(240, 240, 240); // Light extreme background

            ctx.egui_ctx.set_visuals(visuals);

            Ok(Box::new(app))
        }),
    )
}
