use egui::Checkbox;

use crate::data::{Discipline, Licence};
use crate::ui::PlannerApp;

const ALL_DISCIPLINES: [Discipline; 2] = [Discipline::Road, Discipline::Oval];
const ALL_LICENCES: [Licence; 6] = [
    Licence::R,
    Licence::D,
    Licence::C,
    Licence::B,
    Licence::A,
    Licence::P,
];

/// Rebuilds a categorical filter set after a toggle, keeping the values in
/// their canonical enumeration order regardless of click order.
fn set_membership<T: Copy + PartialEq>(current: &mut Vec<T>, ordering: &[T], value: T, on: bool) {
    let updated: Vec<T> = ordering
        .iter()
        .copied()
        .filter(|v| if *v == value { on } else { current.contains(v) })
        .collect();
    *current = updated;
}

impl PlannerApp {
    pub(crate) fn filters_view(&mut self, ui: &mut egui::Ui) {
        let (mode, mut filters) = {
            let settings = self.controller.settings();
            (settings.mode, settings.filters.clone())
        };
        let mut changed = false;

        ui.heading("Filters");
        ui.add_space(4.);

        ui.label("Type");
        for discipline in ALL_DISCIPLINES {
            let mut on = filters.types.contains(&discipline);
            let response = ui.add_enabled(
                mode.allows(discipline),
                Checkbox::new(&mut on, discipline.label()),
            );
            if response.changed() {
                set_membership(&mut filters.types, &ALL_DISCIPLINES, discipline, on);
                changed = true;
            }
        }

        ui.separator();
        ui.label("Licence");
        ui.horizontal_wrapped(|ui| {
            for licence in ALL_LICENCES {
                let mut on = filters.licence.contains(&licence);
                if ui.add(Checkbox::new(&mut on, licence.letter())).changed() {
                    set_membership(&mut filters.licence, &ALL_LICENCES, licence, on);
                    changed = true;
                }
            }
        });

        ui.separator();
        for (label, value) in [("Official", true), ("Unofficial", false)] {
            let mut on = filters.official.contains(&value);
            if ui.add(Checkbox::new(&mut on, label)).changed() {
                set_membership(&mut filters.official, &[false, true], value, on);
                changed = true;
            }
        }
        for (label, value) in [("Fixed setup", true), ("Open setup", false)] {
            let mut on = filters.fixed.contains(&value);
            if ui.add(Checkbox::new(&mut on, label)).changed() {
                set_membership(&mut filters.fixed, &[false, true], value, on);
                changed = true;
            }
        }

        ui.separator();
        changed |= ui
            .checkbox(&mut filters.owned_cars, "Owned cars only")
            .changed();
        changed |= ui
            .checkbox(&mut filters.owned_tracks, "Owned tracks only")
            .changed();
        changed |= ui
            .checkbox(&mut filters.favourite_series, "Favourite series only")
            .changed();
        changed |= ui
            .checkbox(&mut filters.favourite_cars_only, "Favourite cars only")
            .changed();
        changed |= ui
            .checkbox(&mut filters.favourite_tracks_only, "Favourite tracks only")
            .changed();

        if changed {
            self.controller.update_filters(filters);
        }

        ui.add_space(8.);
        if ui.button("Reset filters").clicked() {
            self.controller.reset_filters();
        }
        if ui.button("Reset all settings").clicked() {
            self.controller.reset_settings();
        }
    }
}
