/// Chat transcript rendering and input row
use eframe::egui;

use crate::agent::{ChatAgent, Message, Role};

/// Constants for transcript styling
pub const BUBBLE_CORNER: u8 = 8;
pub const BUBBLE_MAX_WIDTH_FRAC: f32 = 0.8;

/// One-line model health indicator under the header, standing in for
/// the original form's success/error banner.
pub fn draw_status_line(ui: &mut egui::Ui, agent: &ChatAgent) {
    if agent.model_loaded() {
        ui.colored_label(
            egui::Color32::from_rgb(40, 150, 100),
            "ML model loaded successfully",
        );
    } else {
        let text = agent.load_error().unwrap_or("ML model unavailable");
        ui.colored_label(egui::Color32::from_rgb(200, 60, 60), text);
    }
}

/// Renders the scrolling transcript, pinned to the latest message.
pub fn draw_messages(ui: &mut egui::Ui, messages: &[Message], bot_name: &str) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in messages {
                draw_bubble(ui, message, bot_name);
            }
        });
}

fn draw_bubble(ui: &mut egui::Ui, message: &Message, bot_name: &str) {
    let is_user = message.role == Role::User;

    let (sender, fill, text_color, align) = if is_user {
        (
            "You",
            egui::Color32::from_rgb(100, 200, 100),
            egui::Color32::WHITE,
            egui::Align::Max,
        )
    } else {
        (
            bot_name,
            egui::Color32::from_rgb(230, 230, 230),
            egui::Color32::from_rgb(40, 40, 40),
            egui::Align::Min,
        )
    };

    ui.with_layout(egui::Layout::top_down(align), |ui| {
        ui.label(egui::RichText::new(sender).small().weak());

        let max_width = ui.available_width() * BUBBLE_MAX_WIDTH_FRAC;
        egui::Frame::new()
            .fill(fill)
            .corner_radius(BUBBLE_CORNER)
            .inner_margin(egui::Margin::symmetric(10, 6))
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.label(egui::RichText::new(message.content.as_str()).color(text_color));
            });
    });
    ui.add_space(4.0);
}

/// Renders the input field and send button. Returns true when the user
/// submitted, via either the button or Enter.
pub fn draw_input_row(ui: &mut egui::Ui, input_text: &mut String) -> bool {
    let mut submitted = false;

    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        let send_clicked = ui.button("Send").clicked();

        let response = ui.add_sized(
            [ui.available_width(), 24.0],
            egui::TextEdit::singleline(input_text).hint_text("Type your message..."),
        );

        let enter_pressed =
            response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if enter_pressed {
            // Keep the caret in the field for the next message.
            response.request_focus();
        }

        submitted = send_clicked || enter_pressed;
    });

    submitted
}
