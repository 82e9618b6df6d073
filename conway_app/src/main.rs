// main.rs - Game of Life host: window, input and the generation clock

use std::sync::Arc;

use conway::{LifeConfig, SimulationController};
use eframe::egui;
use log::info;

mod clock;
mod layout;
mod ui;

use clock::Clock;
use layout::{FOOTER_HEIGHT, WINDOW_HEIGHT, WINDOW_WIDTH};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // The window opens at this size, so it is the viewport the board fills.
    let (rows, columns) = layout::board_dimensions(WINDOW_WIDTH, WINDOW_HEIGHT - FOOTER_HEIGHT);
    let config = LifeConfig::new(rows, columns);
    let controller = SimulationController::new(&config)?;
    info!(
        "board {}x{} cells, one generation every {:?}",
        controller.grid().rows(),
        controller.grid().columns(),
        config.tick_period
    );
    let controller = controller.into_shared();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("generation-clock")
        .enable_time()
        .build()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        "Game Of Life",
        options,
        Box::new(move |cc| {
            let ctx = cc.egui_ctx.clone();
            let clock = Clock::start(runtime, Arc::clone(&controller), config.tick_period, move || {
                ctx.request_repaint()
            });
            Box::new(ui::GameOfLife::new(controller, clock))
        }),
    )?;
    Ok(())
}
