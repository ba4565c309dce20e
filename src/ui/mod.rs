mod filters_view;
mod modals;
mod race_listing;

use chrono::{DateTime, Utc};
use egui::{Align, Layout, Visuals};

use crate::data::Catalogs;
use crate::settings::Modal;
use crate::settings::controller::SettingsController;

/// `PlannerApp` renders the week planner: a filters side panel, the race
/// listing for the selected day, the season time slider, and the content
/// dialogs. All settings mutations go through the controller; the app
/// itself only owns the selected date.
pub struct PlannerApp {
    catalogs: Catalogs,
    controller: SettingsController,
    selected_date: DateTime<Utc>,
}

impl PlannerApp {
    pub fn new(
        catalogs: Catalogs,
        controller: SettingsController,
        initial_date: DateTime<Utc>,
        cc: &eframe::CreationContext<'_>,
    ) -> Self {
        cc.egui_ctx.set_visuals(Visuals::dark());
        Self {
            catalogs,
            controller,
            selected_date: initial_date,
        }
    }

    fn navbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Raceweek");
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("About").clicked() {
                    self.controller.open_modal(Modal::About);
                }
                if ui.button("Options").clicked() {
                    self.controller.open_modal(Modal::Options);
                }
                if ui.button("Set favourite series").clicked() {
                    self.controller.open_modal(Modal::FavouriteSeries);
                }
                if ui.button("Set my cars").clicked() {
                    self.controller.open_modal(Modal::MyCars);
                }
                if ui.button("Set my tracks").clicked() {
                    self.controller.open_modal(Modal::MyTracks);
                }
            });
        });
    }
}

impl eframe::App for PlannerApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // parting snapshot write; every mutation already persisted on its own
        self.controller.flush();
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("navbar").show(ctx, |ui| self.navbar(ui));
        egui::SidePanel::left("filters")
            .default_width(220.)
            .show(ctx, |ui| self.filters_view(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.schedule_view(ui));
        self.modal_views(ctx);
    }
}
