//! SocDesk Demo Shell - Main Entry Point
//!
//! A small eframe shell hosting the directory user picker: it starts the
//! background directory load, forwards selection notifications into an
//! "assigned to" value, and carries the light/dark toggle.

use eframe::egui;

use socdesk::app::directory::spawn_load_users;
use socdesk::app::picker::{self, SelectionChange, UserPickerOptions, UserPickerState};
use socdesk::app::theme::{styles, ThemeMode};
use socdesk::app::Config;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 420.0])
            .with_min_inner_size([360.0, 320.0]),
        ..Default::default()
    };
    eframe::run_native(
        "SocDesk - Assign Task",
        options,
        Box::new(|cc| {
            let app = SocDeskApp::new();
            styles::apply_theme(&cc.egui_ctx, app.theme_mode);
            Ok(Box::new(app))
        }),
    )
}

/// Main application state
struct SocDeskApp {
    theme_mode: ThemeMode,
    picker: UserPickerState,
    picker_options: UserPickerOptions,
    /// Last selection notification, i.e. the form's "assigned to" value
    assigned: Option<SelectionChange>,
    load_started: bool,
}

impl SocDeskApp {
    fn new() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            picker: UserPickerState::new(),
            picker_options: UserPickerOptions::default(),
            assigned: None,
            load_started: false,
        }
    }
}

impl eframe::App for SocDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.load_started {
            self.load_started = true;
            self.picker.begin_load(spawn_load_users(Config::new()));
        }

        let palette = self.theme_mode.palette();

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("SocDesk").strong().size(18.0));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let icon = match self.theme_mode {
                        ThemeMode::Light => "🌙",
                        ThemeMode::Dark => "☀",
                    };
                    if ui.button(icon).clicked() {
                        self.theme_mode.toggle();
                        styles::apply_theme(ctx, self.theme_mode);
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(12.0);

            if self.picker.is_loading() {
                ui.colored_label(palette.text_secondary, "Loading directory...");
                ui.add_space(8.0);
            }

            let response = picker::render(ui, &mut self.picker, &self.picker_options, palette);
            if let Some(change) = response.change {
                self.assigned = Some(change);
            }

            ui.add_space(16.0);
            match &self.assigned {
                Some(change) if !change.is_cleared() => {
                    ui.colored_label(
                        palette.text_secondary,
                        format!("Assigned to {} <{}>", change.name, change.email),
                    );
                }
                _ => {
                    ui.colored_label(palette.text_secondary, "Nobody assigned yet");
                }
            }
        });
    }
}
