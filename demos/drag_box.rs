#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use eframe::egui;
use egui_draggable::{
    ContainmentOptions, DragEvent, DragEventKind, Draggable, ElementId, LayoutQuery as _,
    SceneHost,
};

use std::cell::RefCell;
use std::rc::Rc;

struct App {
    host: SceneHost,
    board: ElementId,
    card: ElementId,
    handle: ElementId,
    draggable: Draggable,
    last_event: Rc<RefCell<Option<DragEvent>>>,
}

impl App {
    fn new() -> Self {
        let board = ElementId::new("board");
        let card = ElementId::new("card");
        let handle = ElementId::new("card_handle");

        let mut host = SceneHost::new();
        host.insert_root(
            board,
            egui::Rect::from_min_size(egui::pos2(40.0, 80.0), egui::vec2(480.0, 320.0)),
        );
        host.insert_child(card, board, egui::vec2(20.0, 20.0), egui::vec2(120.0, 80.0));
        host.insert_child(handle, card, egui::Vec2::ZERO, egui::vec2(120.0, 20.0));

        let mut draggable = Draggable::new(&host, card);
        draggable
            .set_handle(handle)
            .set_containment(
                board,
                ContainmentOptions {
                    middle_x: true,
                    middle_y: false,
                },
            )
            .build();

        let last_event = Rc::new(RefCell::new(None));
        for kind in [
            DragEventKind::Start,
            DragEventKind::Drag,
            DragEventKind::Pause,
            DragEventKind::End,
        ] {
            let last_event = last_event.clone();
            draggable.on(kind, move |e| {
                if matches!(e, DragEvent::Pause { .. }) {
                    log::info!("paused: {e:?}");
                }
                *last_event.borrow_mut() = Some(*e);
            });
        }

        Self {
            host,
            board,
            card,
            handle,
            draggable,
            last_event,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.draggable.feed_egui(ctx, &mut self.host);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Drag the card by its title bar");
            ui.horizontal(|ui| {
                let last = *self.last_event.borrow();
                ui.label(format!("last event: {:?}", last.map(|e| e.kind())));
                if let Some(pos) = last.and_then(|e| e.pos()) {
                    ui.label(format!("at ({:.0}, {:.0})", pos.x, pos.y));
                }
                if ui.button("Reset").clicked() {
                    self.draggable.move_to(&mut self.host, 20.0, 20.0);
                    self.draggable.refresh_origin(&self.host);
                }
            });

            let painter = ui.painter();
            let visuals = ui.visuals();
            if let Some(rect) = self.host.rect(self.board) {
                painter.rect_filled(rect, 4.0, visuals.extreme_bg_color);
            }
            if let Some(rect) = self.host.rect(self.card) {
                painter.rect_filled(rect, 4.0, visuals.widgets.inactive.bg_fill);
            }
            if let Some(rect) = self.host.rect(self.handle) {
                let fill = if self.host.has_class(self.card, "dragging") {
                    visuals.selection.bg_fill
                } else {
                    visuals.widgets.active.bg_fill
                };
                painter.rect_filled(rect, 4.0, fill);
            }
        });
    }
}

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([560.0, 440.0]),
        ..Default::default()
    };
    eframe::run_native(
        "egui_draggable demo",
        options,
        Box::new(|_cc| Ok(Box::new(App::new()))),
    )
}
