/// Main application structure and lifecycle management
use crate::agent::ChatAgent;
use crate::config::Config;
use eframe::egui;

use super::chat;

pub struct ChatApp {
    pub config: Config,
    pub agent: ChatAgent,
    pub input_text: String,
    pub style_initialized: bool,
}

impl ChatApp {
    pub fn new(config: Config) -> Self {
        let agent = ChatAgent::new(&config);

        Self {
            config,
            agent,
            input_text: String::new(),
            style_initialized: false,
        }
    }

    /// Submits the current input as one blocking turn. Empty input is
    /// ignored, matching the form's submit behavior.
    pub fn send_message(&mut self) {
        if self.input_text.trim().is_empty() {
            return;
        }

        let user_input = std::mem::take(&mut self.input_text);
        self.agent.handle_turn(&user_input);
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // One-time style setup.
        if !self.style_initialized {
            let mut style = (*ctx.style()).clone();
            style.spacing.item_spacing = egui::vec2(8.0, 8.0);
            ctx.set_style(style);
            self.style_initialized = true;
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading(&self.config.app_title);
            ui.label(egui::RichText::new("Powered by a pretrained emotion model").weak());
            chat::draw_status_line(ui, &self.agent);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("input").show(ctx, |ui| {
            ui.add_space(6.0);
            if chat::draw_input_row(ui, &mut self.input_text) {
                self.send_message();
            }
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            chat::draw_messages(ui, self.agent.transcript(), &self.config.bot_name);
        });
    }
}
