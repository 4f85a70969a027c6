use crate::widgets::error_popup::ErrorPopup;

use eframe::egui;
use eframe::egui::{
    Color32, FontId, Frame, Margin, RichText, ScrollArea, TextEdit, Ui, Vec2,
};

use affine_crypto::cipher::AffineKey;

/// The single scene of the application: key parameters, input text, the
/// Encrypt/Decrypt/Clear actions and the result area.
pub struct CipherPanelState {
    // String representations for input fields
    a_str: String,
    b_str: String,
    input_text: String,
    output_text: String,
    error_popup: ErrorPopup,
}

impl CipherPanelState {
    pub fn setup() -> Self {
        Self {
            a_str: "5".to_string(),
            b_str: "8".to_string(),
            input_text: String::new(),
            output_text: String::new(),
            error_popup: ErrorPopup::new(),
        }
    }

    pub fn render(&mut self, ui: &mut Ui, ctx: &egui::Context) {
        self.error_popup.update(ctx);

        ScrollArea::vertical().show(ui, |ui| {
            ui.vertical(|ui| {
                ui.heading(RichText::new("Affine Cipher").size(24.0));
                ui.add_space(15.0);

                self.render_key_params(ui);
                ui.add_space(15.0);

                ui.label(
                    RichText::new("Input text:")
                        .size(14.0)
                        .color(Color32::DARK_GRAY),
                );
                ui.add_space(5.0);
                ui.add_sized(
                    Vec2::new(ui.available_width(), 80.0),
                    TextEdit::multiline(&mut self.input_text)
                        .font(FontId::monospace(14.0))
                        .hint_text("Type the text to encrypt or decrypt"),
                );

                ui.add_space(15.0);
                self.render_actions(ui);
                ui.add_space(15.0);

                ui.label(
                    RichText::new("Result:")
                        .size(14.0)
                        .color(Color32::DARK_GRAY),
                );
                ui.add_space(5.0);
                ui.add_sized(
                    Vec2::new(ui.available_width(), 80.0),
                    TextEdit::multiline(&mut self.output_text)
                        .font(FontId::monospace(14.0))
                        .interactive(false),
                );
            });
        });
    }

    fn render_key_params(&mut self, ui: &mut Ui) {
        Frame::group(ui.style())
            .outer_margin(Margin::same(5))
            .show(ui, |ui| {
                ui.label(
                    RichText::new("Cipher parameters")
                        .size(14.0)
                        .strong(),
                );
                ui.add_space(5.0);

                ui.horizontal(|ui| {
                    ui.label("Multiplier 'a' (coprime with 26):");
                    ui.add(
                        TextEdit::singleline(&mut self.a_str)
                            .hint_text(RichText::new("5").color(Color32::from_gray(128)))
                            .margin(Margin::symmetric(10, 5))
                            .desired_width(80.0),
                    );
                });

                ui.horizontal(|ui| {
                    ui.label("Shift 'b':");
                    ui.add(
                        TextEdit::singleline(&mut self.b_str)
                            .hint_text(RichText::new("8").color(Color32::from_gray(128)))
                            .margin(Margin::symmetric(10, 5))
                            .desired_width(80.0),
                    );
                });
            });
    }

    fn render_actions(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if ui
                .add_sized(Vec2::new(120.0, 30.0), egui::Button::new("Encrypt"))
                .clicked()
            {
                self.handle_transform(Action::Encrypt);
            }

            if ui
                .add_sized(Vec2::new(120.0, 30.0), egui::Button::new("Decrypt"))
                .clicked()
            {
                self.handle_transform(Action::Decrypt);
            }

            if ui
                .add_sized(Vec2::new(120.0, 30.0), egui::Button::new("Clear"))
                .clicked()
            {
                self.handle_clear();
            }
        });
    }

    fn handle_transform(&mut self, action: Action) {
        let key = match self.parse_and_validate_key() {
            Ok(key) => key,
            Err(error_msg) => {
                self.error_popup.show_error_timed(error_msg, 5.0);
                return;
            }
        };

        let text = self.input_text.trim();
        if text.is_empty() {
            self.error_popup
                .show_error_timed("Type a text to process.", 5.0);
            return;
        }

        self.output_text = match action {
            Action::Encrypt => key.encrypt(text),
            Action::Decrypt => key.decrypt(text),
        };

        log::debug!(
            "{:?} with a={}, b={}: {} characters",
            action,
            key.multiplier(),
            key.shift(),
            text.chars().count()
        );
    }

    fn handle_clear(&mut self) {
        self.a_str.clear();
        self.b_str.clear();
        self.input_text.clear();
        self.output_text.clear();
    }

    fn parse_and_validate_key(&self) -> Result<AffineKey, String> {
        let a = self
            .a_str
            .trim()
            .parse::<i64>()
            .map_err(|_| "Invalid multiplier 'a': must be an integer")?;

        let b = self
            .b_str
            .trim()
            .parse::<i64>()
            .map_err(|_| "Invalid shift 'b': must be an integer")?;

        AffineKey::try_with(a, b).map_err(|e| e.to_string())
    }
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Encrypt,
    Decrypt,
}
