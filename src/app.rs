// src/app.rs
use eframe::egui;
use std::path::Path;
use tracing::error;

use crate::data::DATA_PATH;
use crate::state::scene::ActiveScene;
use crate::state::AppState;
use crate::ui;

/// The session outcome: either a loaded dataset or the load error that
/// ended it. A failed load renders no scene and runs no aggregation, and
/// there are no retries; the user has to restart with the file in place.
enum Session {
    Ready(AppState),
    Failed(String),
}

pub struct StoryApp {
    session: Session,
}

impl StoryApp {
    pub fn new() -> Self {
        let session = match AppState::load(Path::new(DATA_PATH)) {
            Ok(state) => Session::Ready(state),
            Err(err) => {
                let message = format!("{err:#}");
                error!(error = %message, "dataset load failed");
                Session::Failed(message)
            }
        };
        Self { session }
    }

    fn show_controls(&mut self, ui: &mut egui::Ui) {
        let Session::Ready(state) = &mut self.session else {
            return;
        };
        let AppState {
            controller,
            summary,
            ..
        } = state;

        ui.horizontal(|ui| {
            if ui
                .add_enabled(
                    controller.can_go_previous(),
                    egui::Button::new("◀ Previous"),
                )
                .clicked()
            {
                controller.previous(summary);
            }

            ui.label(controller.indicator());

            if ui
                .add_enabled(controller.can_go_next(), egui::Button::new("Next ▶"))
                .clicked()
            {
                controller.next(summary);
            }
        });
    }
}

impl eframe::App for StoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            self.show_controls(ui);
            ui.add_space(4.0);
        });

        if let Session::Ready(state) = &self.session {
            if state.skipped_rows > 0 {
                egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
                    ui.label(format!(
                        "{} malformed rows skipped during load",
                        state.skipped_rows
                    ));
                });
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| match &mut self.session {
            Session::Failed(message) => {
                ui.heading("Error");
                ui.colored_label(
                    egui::Color32::RED,
                    format!("Could not load data: {message}"),
                );
            }
            Session::Ready(state) => {
                let AppState {
                    controller,
                    summary,
                    records,
                    ..
                } = state;
                match &mut controller.active {
                    ActiveScene::StateBreakdown(scene) => {
                        ui::state_breakdown::show_state_breakdown(ui, scene, summary)
                    }
                    ActiveScene::CategoryTotals => {
                        ui::category_totals::show_category_totals(ui, summary)
                    }
                    ActiveScene::DiscountScatter => {
                        ui::discount_scatter::show_discount_scatter(ui, records)
                    }
                }
            }
        });
    }
}
