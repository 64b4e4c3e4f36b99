mod config;
mod session;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use eframe::egui::{Response, ScrollArea, Ui};
use eframe::run_native;
use life_engine::{Controller, Grid, PatternEditor};

use crate::config::Config;
use crate::session::Session;

const CONTROLS_HEIGHT: f32 = 90.0;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = Config::parse();
    let (rows, cols) = config.dimensions();

    let session = if config.random {
        let mut controller = Controller::random(rows, cols).context("create random grid")?;
        if let Some(limit) = config.history_limit {
            controller = controller.with_history_limit(limit);
        }
        Session::simulating(controller)
    } else {
        log::info!("draw your initial pattern, then press Start Simulation");
        Session::drawing(PatternEditor::new(rows, cols).context("create drawing grid")?, config.history_limit)
    };
    // Shared with the ticker thread; every controller call goes through this lock.
    let shared_session = Arc::new(Mutex::new(session));

    let window_size = [
        (cols as f32 * config.cell_size).max(480.0) + 32.0,
        rows as f32 * config.cell_size + CONTROLS_HEIGHT + 32.0,
    ];
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Game of Life")
            .with_inner_size(window_size),
        ..Default::default()
    };
    let tick_interval = config.tick_interval();
    let cell_size = config.cell_size;

    run_native(
        "Game of Life",
        options,
        Box::new(move |cc| {
            let ctx = cc.egui_ctx.clone();
            let ticker_session = Arc::clone(&shared_session);
            spawn_ticker(ticker_session, ctx, tick_interval);

            Ok(Box::new(GuiOfLife::new(cc, shared_session, cell_size)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("window closed with error: {err}"))
}

/// Calls `tick` every `interval`. A slow tick only delays the next one.
fn spawn_ticker(session: Arc<Mutex<Session>>, ctx: egui::Context, interval: Duration) {
    thread::spawn(move || loop {
        thread::sleep(interval);
        if lock(&session).tick() {
            ctx.request_repaint();
        }
    });
}

fn lock(session: &Mutex<Session>) -> MutexGuard<'_, Session> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

struct GuiOfLife {
    session: Arc<Mutex<Session>>,
    cell_size: f32,
}

impl GuiOfLife {
    fn new(_cc: &eframe::CreationContext<'_>, session: Arc<Mutex<Session>>, cell_size: f32) -> Self {
        Self { session, cell_size }
    }

    fn drawing_controls(&mut self, ui: &mut Ui) {
        let mut session = lock(&self.session);
        let start_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
        ui.horizontal(|ui| {
            if ui.button("Start Simulation").clicked() || start_pressed {
                session.start_simulation();
                return;
            }
            if ui.button("Clear").clicked() {
                if let Some(editor) = session.editor_mut() {
                    editor.clear();
                }
            }
            ui.label("Click to toggle a cell, drag to draw.");
        });
    }

    fn simulation_controls(&mut self, ui: &mut Ui) {
        let mut session = lock(&self.session);
        let Some(controller) = session.controller_mut() else {
            return;
        };

        ui.input(|i| {
            if i.key_pressed(egui::Key::Space) {
                controller.toggle_running();
            }
            if i.key_pressed(egui::Key::ArrowRight) {
                controller.step_forward();
            }
            if i.key_pressed(egui::Key::ArrowLeft) {
                controller.step_backward();
            }
        });

        let paused = !controller.is_running();
        ui.horizontal(|ui| {
            if ui.add_enabled(paused, egui::Button::new("Play")).clicked() {
                controller.play();
            }
            if ui.add_enabled(!paused, egui::Button::new("Pause")).clicked() {
                controller.pause();
            }
            if ui.add_enabled(paused, egui::Button::new("Step Forward")).clicked() {
                controller.step_forward();
            }
            if ui
                .add_enabled(controller.can_step_backward(), egui::Button::new("Step Backward"))
                .clicked()
            {
                controller.step_backward();
            }
        });
        ui.label(format!(
            "Generation {} | {} | {} live | {} in history",
            controller.generation(),
            controller.run_state(),
            controller.current_grid().live_count(),
            controller.history_len(),
        ));
    }

    fn create_grid(&mut self, ui: &mut Ui) {
        let mut session = lock(&self.session);
        let Some(grid) = session.grid() else {
            return;
        };

        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(self.cell_size * grid.cols() as f32, self.cell_size * grid.rows() as f32),
            egui::Sense::click_and_drag(),
        );
        paint_cells(ui, rect, grid, self.cell_size);

        if let Some(editor) = session.editor_mut() {
            if edit_pattern(editor, rect, &response, self.cell_size) {
                ui.ctx().request_repaint();
            }
        }
    }
}

fn paint_cells(ui: &Ui, rect: egui::Rect, grid: &Grid, cell_size: f32) {
    let painter = ui.painter();
    for (row_index, row) in grid.iter_rows().enumerate() {
        for (col_index, cell) in row.iter().enumerate() {
            let pos = rect.min + egui::vec2(col_index as f32 * cell_size, row_index as f32 * cell_size);

            let color = if cell.is_alive() {
                egui::Color32::WHITE
            } else {
                egui::Color32::DARK_GRAY
            };

            // One-pixel gap keeps the grid lines visible.
            painter.rect_filled(
                egui::Rect::from_min_size(pos, egui::vec2(cell_size - 1.0, cell_size - 1.0)),
                cell_size / 8f32,
                color,
            );
        }
    }
}

/// Click toggles the cell under the pointer, dragging only brings cells to life.
fn edit_pattern(editor: &mut PatternEditor, rect: egui::Rect, response: &Response, cell_size: f32) -> bool {
    let Some(pointer) = response.interact_pointer_pos() else {
        return false;
    };
    let offset = pointer - rect.min;
    let Some((row, col)) = editor.cell_at(offset.x, offset.y, cell_size) else {
        return false;
    };

    if response.clicked() {
        editor.toggle(row, col).is_ok()
    } else if response.dragged() {
        editor.paint(row, col).unwrap_or(false)
    } else {
        false
    }
}

impl eframe::App for GuiOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::both().show(ui, |ui| {
                ui.heading("Game of Life");
                let drawing = lock(&self.session).controller().is_none();
                if drawing {
                    self.drawing_controls(ui);
                } else {
                    self.simulation_controls(ui);
                }

                self.create_grid(ui);
            });
        });
    }
}
