//! Drives a small UI through a scripted sequence of inputs with no window
//! system attached, and logs what would have been drawn.
//!
//! `RUST_LOG=debug cargo run -p keel-headless`

use keel_core::{DrawList, InputSnapshot, KeyFlags, MonospaceFont, Rect, Size, UiConfig, Vec2};
use keel_devtools::Inspector;
use keel_ui::{Context, WidgetOptions};

const SCREEN: Size = Size::new(1024.0, 768.0);

struct App {
    count: i32,
    show_log: bool,
    submitted: Vec<String>,
}

fn app(ui: &mut Context, state: &mut App) {
    let counter = Rect::new(40.0, 40.0, 260.0, 180.0);
    ui.window("Counter", counter, WidgetOptions::DRAGGABLE, |ui| {
        let caption = format!("Count: {}###count", state.count);
        ui.label(&caption);
        ui.set_layout_column_sizes(&[120.0, 120.0]);
        ui.row(|ui| {
            if ui.button("Increment").clicked() {
                state.count += 1;
            }
            if ui.button("Decrement").clicked() {
                state.count -= 1;
            }
        });
        ui.checkbox("Show log", &mut state.show_log);
    });

    let notes = Rect::new(340.0, 40.0, 320.0, 420.0);
    let opts = WidgetOptions::DRAGGABLE | WidgetOptions::RESIZABLE;
    ui.window("Notes", notes, opts, |ui| {
        let entry = ui.text_box("entry", "");
        if entry.submitted() {
            if let Some(text) = ui.text_from_widget(entry.id) {
                state.submitted.push(text.to_string());
            }
        }
        if state.show_log {
            ui.scroll_view("log", 200.0, |ui| {
                for (i, line) in state.submitted.iter().enumerate() {
                    ui.label(&format!("{line}##{i}"));
                }
            });
        }
        ui.tree_node("Details", |ui| {
            ui.label(&format!("{} notes", state.submitted.len()));
        });
    });
}

fn script() -> Vec<InputSnapshot> {
    let at = |x, y| InputSnapshot::at(Vec2::new(x, y), SCREEN);
    let increment = Vec2::new(60.0, 100.0);
    let entry = Vec2::new(400.0, 80.0);
    let title = Vec2::new(100.0, 50.0);

    let mut frames = vec![at(0.0, 0.0)];
    for _ in 0..3 {
        frames.push(at(increment.x, increment.y).press());
        frames.push(at(increment.x, increment.y).release());
    }
    frames.push(at(60.0, 130.0).press());
    frames.push(at(60.0, 130.0).release());
    frames.push(at(entry.x, entry.y).press());
    frames.push(at(entry.x, entry.y).release());
    for c in "hello".chars() {
        frames.push(at(entry.x, entry.y).with_char(c));
    }
    frames.push(at(entry.x, entry.y).with_keys(KeyFlags::RETURN));
    frames.push(at(title.x, title.y).press());
    frames.push(InputSnapshot::moved(title, Vec2::new(30.0, 20.0), SCREEN).hold());
    frames.push(at(title.x + 30.0, title.y + 20.0).release());
    frames
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut ctx = Context::new(UiConfig::default(), Box::new(MonospaceFont::default()))?;
    let mut inspector = Inspector::new();
    inspector.hud.toggle_inspector();
    let mut state = App {
        count: 0,
        show_log: false,
        submitted: Vec::new(),
    };
    let mut list = DrawList::new();

    for input in script() {
        list.clear();
        ctx.begin(input);
        app(&mut ctx, &mut state);
        let stats = ctx.end(&mut list);
        inspector.frame(&ctx, &mut list);
        log::debug!(
            "frame {}: {} commands, {} widgets drawn",
            stats.frame,
            list.cmds.len(),
            stats.widgets_drawn
        );
    }

    log::info!("count = {}", state.count);
    log::info!("notes = {:?}", state.submitted);
    for (id, rect, depth) in ctx.windows() {
        log::info!("window {:?} at {:?} depth {}", id, rect, depth);
    }
    for (_, text) in list.texts() {
        println!("{text}");
    }
    Ok(())
}
