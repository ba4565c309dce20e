use egui_extras::{Column, TableBuilder};
use itertools::Itertools;

use crate::data::{ColumnId, Race, season_end, season_start, week_season_start};
use crate::schedule::{visible_races, week_number};
use crate::settings::controller::SettingsUpdate;
use crate::settings::{Sort, SortOrder};
use crate::ui::PlannerApp;

const DAY_SECONDS: f64 = 24. * 60. * 60.;

impl PlannerApp {
    pub(crate) fn schedule_view(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(format!(
                "Races for {}",
                self.selected_date.format("%Y %b %d")
            ));
            ui.with_layout(
                egui::Layout::right_to_left(egui::Align::Center),
                |ui| {
                    ui.heading(format!(
                        "Week {}",
                        week_number(week_season_start(), self.selected_date)
                    ));
                },
            );
        });

        let mut epoch = self.selected_date.timestamp();
        let slider = ui.add(
            egui::Slider::new(&mut epoch, season_start().timestamp()..=season_end().timestamp())
                .step_by(DAY_SECONDS)
                .show_value(false),
        );
        if slider.changed()
            && let Some(date) = self.controller.update_date(epoch)
        {
            self.selected_date = date;
        }

        ui.add_space(10.);
        self.race_listing(ui);
    }

    fn race_listing(&mut self, ui: &mut egui::Ui) {
        let (columns, sort) = {
            let settings = self.controller.settings();
            (settings.columns.clone(), settings.sort)
        };
        if columns.is_empty() {
            ui.label("No columns selected. Pick some under Options.");
            return;
        }

        let races = visible_races(
            &self.catalogs.races,
            self.controller.settings(),
            self.selected_date,
        );

        let mut clicked_column: Option<ColumnId> = None;
        TableBuilder::new(ui)
            .striped(true)
            .columns(Column::auto().resizable(true), columns.len() - 1)
            .column(Column::remainder())
            .header(22.0, |mut header| {
                for column in &columns {
                    header.col(|ui| {
                        let marker = if sort.key == *column {
                            match sort.order {
                                SortOrder::Asc => " ^",
                                SortOrder::Desc => " v",
                            }
                        } else {
                            ""
                        };
                        if ui.button(format!("{}{}", column.label(), marker)).clicked() {
                            clicked_column = Some(*column);
                        }
                    });
                }
            })
            .body(|body| {
                body.rows(20.0, races.len(), |mut row| {
                    let race = &races[row.index()];
                    for column in &columns {
                        row.col(|ui| {
                            ui.label(self.cell_text(race, *column));
                        });
                    }
                });
            });

        if let Some(column) = clicked_column {
            // clicking the active column flips the order, any other column
            // starts ascending
            let next = if sort.key == column {
                Sort {
                    key: column,
                    order: match sort.order {
                        SortOrder::Asc => SortOrder::Desc,
                        SortOrder::Desc => SortOrder::Asc,
                    },
                }
            } else {
                Sort {
                    key: column,
                    order: SortOrder::Asc,
                }
            };
            self.controller.apply(SettingsUpdate::Sort(next));
        }
    }

    fn cell_text(&self, race: &Race, column: ColumnId) -> String {
        match column {
            ColumnId::Licence => race.licence.letter().to_string(),
            ColumnId::Type => race.discipline.label().to_string(),
            ColumnId::Series => race.series.clone(),
            ColumnId::Track => race.track_name.clone(),
            ColumnId::Cars => race
                .cars
                .iter()
                .map(|sku| self.catalogs.car_name(*sku).unwrap_or("Unknown car"))
                .join(", "),
            ColumnId::Start => race.start_time.format("%H:%M").to_string(),
            ColumnId::Official => yes_no(race.official),
            ColumnId::Fixed => yes_no(race.fixed),
        }
    }
}

fn yes_no(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}
