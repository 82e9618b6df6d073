// ui.rs - egui front end: paints the board and forwards mouse and keyboard input

use std::sync::Arc;

use conway::{SharedController, lock};
use eframe::egui;
use egui::{Color32, Rect, Vec2};
use log::debug;

use crate::clock::Clock;
use crate::layout::{self, CELL_SPACING, DrawStroke, FOOTER_HEIGHT};

const HELP_TEXT: &str =
    "Draw cells with [LEFT MOUSE BUTTON] | Press [SPACE] to start/stop simulation | Press [R] to reset";

pub struct GameOfLife {
    controller: SharedController,
    _clock: Clock,
    live_color: Color32,
    dead_color: Color32,
    stroke: DrawStroke,
}

impl GameOfLife {
    pub fn new(controller: SharedController, clock: Clock) -> Self {
        Self {
            controller,
            _clock: clock,
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            stroke: DrawStroke::default(),
        }
    }

    fn handle_keys(&self, ctx: &egui::Context) {
        let (toggle, reset) = ctx.input(|i| (i.key_pressed(egui::Key::Space), i.key_pressed(egui::Key::R)));
        if toggle {
            let state = lock(&self.controller).toggle_run();
            debug!("space pressed, now {state:?}");
        }
        if reset {
            lock(&self.controller).reset();
            debug!("r pressed, board cleared");
        }
    }

    fn draw_footer(&self, ui: &mut egui::Ui) {
        let (generation, live_cells, running) = {
            let sim = lock(&self.controller);
            (sim.generation(), sim.grid().live_count(), sim.is_running())
        };

        ui.vertical_centered(|ui| {
            ui.heading("Game Of Life");
            ui.label(HELP_TEXT);
            ui.label(format!(
                "Generation: {generation} | Live cells: {live_cells} | {}",
                if running { "Running" } else { "Paused" }
            ));
        });
    }

    fn draw_board(&mut self, ui: &mut egui::Ui) {
        let controller = Arc::clone(&self.controller);
        let mut sim = lock(&controller);
        let (rows, columns) = (sim.grid().rows(), sim.grid().columns());

        let size = layout::cell_size(ui.available_size(), rows, columns);
        let board = Vec2::new(size * columns as f32, size * rows as f32);
        let (response, painter) = ui.allocate_painter(board, egui::Sense::click_and_drag());
        let origin = response.rect.min;

        // Drawing: toggle whichever cell the held primary button enters
        let pointer = ui.input(|i| i.pointer.interact_pos().filter(|_| i.pointer.primary_down()));
        let hovered = pointer.and_then(|pos| layout::cell_at(origin, size, pos, rows, columns));
        if let Some((row, column)) = self.stroke.advance(hovered) {
            sim.toggle_cell(row, column);
        }

        painter.rect_filled(response.rect, 0.0, Color32::BLACK);
        for row in 0..rows {
            for column in 0..columns {
                let min = origin + Vec2::new(column as f32 * size, row as f32 * size);
                let rect = Rect::from_min_size(min, Vec2::splat(size)).shrink(CELL_SPACING);
                let color = if sim.grid().get(row, column) { self.live_color } else { self.dead_color };
                painter.rect_filled(rect, 0.0, color);
            }
        }
    }
}

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        egui::TopBottomPanel::bottom("user_interface")
            .exact_height(FOOTER_HEIGHT)
            .show(ctx, |ui| self.draw_footer(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::BLACK))
            .show(ctx, |ui| self.draw_board(ui));
    }
}
