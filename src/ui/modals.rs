use std::collections::BTreeSet;

use egui::ScrollArea;
use itertools::Itertools;

use crate::data::{AVAILABLE_COLUMNS, ColumnId, Discipline};
use crate::settings::controller::SettingsUpdate;
use crate::settings::{Modal, Mode};
use crate::ui::PlannerApp;

struct ContentRow {
    id: u32,
    name: String,
    discipline: Discipline,
}

/// Owned/favourite checkbox rows for a content catalog, restricted to the
/// disciplines the mode allows. Returns the edited sets when anything
/// changed this frame.
fn content_rows(
    ui: &mut egui::Ui,
    rows: &[ContentRow],
    owned: &BTreeSet<u32>,
    favourites: &BTreeSet<u32>,
    mode: Mode,
) -> Option<(BTreeSet<u32>, BTreeSet<u32>)> {
    let mut new_owned = owned.clone();
    let mut new_favourites = favourites.clone();
    let mut changed = false;

    for row in rows {
        if !mode.allows(row.discipline) {
            continue;
        }
        ui.horizontal(|ui| {
            let mut own = new_owned.contains(&row.id);
            if ui.checkbox(&mut own, &row.name).changed() {
                if own {
                    new_owned.insert(row.id);
                } else {
                    new_owned.remove(&row.id);
                }
                changed = true;
            }
            let mut favourite = new_favourites.contains(&row.id);
            if ui.checkbox(&mut favourite, "Favourite").changed() {
                if favourite {
                    new_favourites.insert(row.id);
                } else {
                    new_favourites.remove(&row.id);
                }
                changed = true;
            }
        });
    }

    changed.then_some((new_owned, new_favourites))
}

impl PlannerApp {
    pub(crate) fn modal_views(&mut self, ctx: &egui::Context) {
        let Some(modal) = self.controller.settings().current_modal else {
            return;
        };
        let mut open = true;
        match modal {
            Modal::MyTracks => self.my_tracks_modal(ctx, &mut open),
            Modal::MyCars => self.my_cars_modal(ctx, &mut open),
            Modal::FavouriteSeries => self.favourite_series_modal(ctx, &mut open),
            Modal::Options => self.options_modal(ctx, &mut open),
            Modal::About => self.about_modal(ctx, &mut open),
        }
        if !open {
            self.controller.close_modal();
        }
    }

    fn my_tracks_modal(&mut self, ctx: &egui::Context, open: &mut bool) {
        let (owned, favourites, mode) = {
            let settings = self.controller.settings();
            (
                settings.owned_tracks.clone(),
                settings.favourite_tracks.clone(),
                settings.mode,
            )
        };
        let rows: Vec<ContentRow> = self
            .catalogs
            .tracks
            .iter()
            .map(|track| ContentRow {
                id: track.id,
                name: track.name.clone(),
                discipline: track.primary_type,
            })
            .collect();
        let default_owned = self.controller.defaults().owned_tracks.clone();

        let mut updates: Vec<SettingsUpdate> = Vec::new();
        egui::Window::new("Set My Tracks")
            .open(open)
            .collapsible(false)
            .show(ctx, |ui| {
                if ui.button("Select default content").clicked() {
                    updates.push(SettingsUpdate::OwnedTracks(default_owned.clone()));
                }
                ui.separator();
                ScrollArea::vertical().max_height(400.).show(ui, |ui| {
                    if let Some((new_owned, new_favourites)) =
                        content_rows(ui, &rows, &owned, &favourites, mode)
                    {
                        updates.push(SettingsUpdate::OwnedTracks(new_owned));
                        updates.push(SettingsUpdate::FavouriteTracks(new_favourites));
                    }
                });
            });
        for update in updates {
            self.controller.apply(update);
        }
    }

    fn my_cars_modal(&mut self, ctx: &egui::Context, open: &mut bool) {
        let (owned, favourites, mode) = {
            let settings = self.controller.settings();
            (
                settings.owned_cars.clone(),
                settings.favourite_cars.clone(),
                settings.mode,
            )
        };
        let rows: Vec<ContentRow> = self
            .catalogs
            .cars
            .iter()
            .map(|car| ContentRow {
                id: car.sku,
                name: car.name.clone(),
                discipline: car.discipline,
            })
            .collect();
        let default_owned = self.controller.defaults().owned_cars.clone();

        let mut updates: Vec<SettingsUpdate> = Vec::new();
        egui::Window::new("Set My Cars")
            .open(open)
            .collapsible(false)
            .show(ctx, |ui| {
                if ui.button("Select default content").clicked() {
                    updates.push(SettingsUpdate::OwnedCars(default_owned.clone()));
                }
                ui.separator();
                ScrollArea::vertical().max_height(400.).show(ui, |ui| {
                    if let Some((new_owned, new_favourites)) =
                        content_rows(ui, &rows, &owned, &favourites, mode)
                    {
                        updates.push(SettingsUpdate::OwnedCars(new_owned));
                        updates.push(SettingsUpdate::FavouriteCars(new_favourites));
                    }
                });
            });
        for update in updates {
            self.controller.apply(update);
        }
    }

    fn favourite_series_modal(&mut self, ctx: &egui::Context, open: &mut bool) {
        let (favourites, mode) = {
            let settings = self.controller.settings();
            (settings.favourite_series.clone(), settings.mode)
        };
        // one row per series, in catalog order
        let series: Vec<(u32, String, Discipline)> = self
            .catalogs
            .races
            .iter()
            .unique_by(|race| race.series_id)
            .map(|race| (race.series_id, race.series.clone(), race.discipline))
            .collect();

        let mut update: Option<SettingsUpdate> = None;
        egui::Window::new("Set Favourite Series")
            .open(open)
            .collapsible(false)
            .show(ctx, |ui| {
                ScrollArea::vertical().max_height(400.).show(ui, |ui| {
                    let mut new_favourites = favourites.clone();
                    let mut changed = false;
                    for (series_id, name, discipline) in &series {
                        if !mode.allows(*discipline) {
                            continue;
                        }
                        let mut favourite = new_favourites.contains(series_id);
                        if ui.checkbox(&mut favourite, name).changed() {
                            if favourite {
                                new_favourites.insert(*series_id);
                            } else {
                                new_favourites.remove(series_id);
                            }
                            changed = true;
                        }
                    }
                    if changed {
                        update = Some(SettingsUpdate::FavouriteSeries(new_favourites));
                    }
                });
            });
        if let Some(update) = update {
            self.controller.apply(update);
        }
    }

    fn options_modal(&mut self, ctx: &egui::Context, open: &mut bool) {
        let (columns, mode) = {
            let settings = self.controller.settings();
            (settings.columns.clone(), settings.mode)
        };

        let mut updates: Vec<SettingsUpdate> = Vec::new();
        egui::Window::new("Options")
            .open(open)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.label("Mode");
                let mut new_mode = mode;
                ui.horizontal(|ui| {
                    ui.radio_value(&mut new_mode, Mode::Both, "Road and oval");
                    ui.radio_value(&mut new_mode, Mode::Road, "Road only");
                    ui.radio_value(&mut new_mode, Mode::Oval, "Oval only");
                });
                if new_mode != mode {
                    updates.push(SettingsUpdate::Mode(new_mode));
                }

                ui.separator();
                ui.label("Columns");
                let mut changed = false;
                let mut selected: Vec<ColumnId> = columns.clone();
                for column in AVAILABLE_COLUMNS {
                    let mut on = selected.contains(&column.id);
                    if ui.checkbox(&mut on, column.id.label()).changed() {
                        if on {
                            selected.push(column.id);
                        } else {
                            selected.retain(|c| *c != column.id);
                        }
                        changed = true;
                    }
                }
                if changed {
                    // keep the visible columns in presentation order
                    let ordered: Vec<ColumnId> = AVAILABLE_COLUMNS
                        .iter()
                        .map(|c| c.id)
                        .filter(|id| selected.contains(id))
                        .collect();
                    updates.push(SettingsUpdate::Columns(ordered));
                }
            });
        for update in updates {
            self.controller.apply(update);
        }
    }

    fn about_modal(&mut self, ctx: &egui::Context, open: &mut bool) {
        egui::Window::new("About Raceweek")
            .open(open)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.label(
                    "Raceweek lists the season's race schedule and lets you filter it \
                     down to the content you own and the series you love.",
                );
                ui.add_space(6.);
                ui.label(
                    "Your filters, owned content, favourites and display options are \
                     saved on this machine and restored on the next start.",
                );
            });
    }
}
