#[cfg(test)]
mod tests {
    use crate::*;
    use keel_core::*;

    const SCREEN: Size = Size::new(800.0, 600.0);

    fn ctx() -> Context {
        Context::new(UiConfig::default(), Box::new(MonospaceFont::default())).unwrap()
    }

    fn idle(at: Vec2) -> InputSnapshot {
        InputSnapshot::at(at, SCREEN)
    }

    fn frame(ctx: &mut Context, input: InputSnapshot, f: impl FnOnce(&mut Context)) -> DrawList {
        ctx.begin(input);
        f(ctx);
        let mut list = DrawList::new();
        ctx.end(&mut list);
        list
    }

    fn texts(list: &DrawList) -> Vec<String> {
        list.texts().map(|(_, t)| t.to_string()).collect()
    }

    #[test]
    fn test_identity_is_stable_across_frames() {
        let mut ctx = ctx();
        let mut seen = Vec::new();
        for _ in 0..3 {
            frame(&mut ctx, idle(Vec2::ZERO), |ui| {
                seen.push(ui.button("ok").id);
            });
        }
        assert!(seen.iter().all(|&id| id == hash_identity("ok", Identity::ROOT)));
        // Root plus the button.
        assert_eq!(ctx.widget_count(), 2);
        assert_eq!(ctx.identity_count(), 1);
    }

    #[test]
    fn test_same_label_under_different_parents() {
        let mut ctx = ctx();
        let mut ids = Vec::new();
        frame(&mut ctx, idle(Vec2::ZERO), |ui| {
            for name in ["a", "b"] {
                ui.window(name, Rect::new(0.0, 0.0, 100.0, 100.0), WidgetOptions::empty(), |ui| {
                    ids.push(ui.button("ok").id);
                });
            }
        });
        assert_ne!(ids[0], ids[1]);
        assert_eq!(ids[0], hash_identity("ok", hash_identity("a", Identity::ROOT)));
    }

    #[test]
    fn test_repeated_label_gets_its_own_widget() {
        let mut ctx = ctx();
        let mut ids = Vec::new();
        for _ in 0..2 {
            let list = frame(&mut ctx, idle(Vec2::ZERO), |ui| {
                ids.push(ui.label("Name:").id);
                ids.push(ui.label("Name:").id);
            });
            assert_eq!(texts(&list), vec!["Name:", "Name:"]);
        }
        assert_ne!(ids[0], ids[1]);
        assert_eq!(ids[0..2], ids[2..4]);
        assert_eq!(ctx.widget_count(), 3);
    }

    #[test]
    fn test_hidden_suffix_is_not_shown() {
        let mut ctx = ctx();
        let mut ids = Vec::new();
        for caption in ["Count: 1###count", "Count: 2###count"] {
            let list = frame(&mut ctx, idle(Vec2::ZERO), |ui| {
                ids.push(ui.label(caption).id);
            });
            assert_eq!(texts(&list).len(), 1);
            assert!(texts(&list)[0].starts_with("Count: "));
        }
        assert_eq!(ids[0], ids[1]);
        assert_eq!(ctx.text_from_widget(ids[0]), Some("Count: 2"));
    }

    #[test]
    fn test_click_needs_press_and_release_over_widget() {
        let mut ctx = ctx();
        let at = Vec2::new(10.0, 10.0);
        let mut responses = Vec::new();
        for input in [idle(at), idle(at).press(), idle(at).release()] {
            frame(&mut ctx, input, |ui| responses.push(ui.button("ok")));
        }
        assert!(responses[0].hovered() && !responses[0].focused());
        assert!(responses[1].pressed() && responses[1].focused() && !responses[1].clicked());
        assert!(responses[2].clicked());
        assert_eq!(ctx.focus(), Some(responses[0].id));
    }

    #[test]
    fn test_release_elsewhere_drops_focus_without_click() {
        let mut ctx = ctx();
        let at = Vec2::new(10.0, 10.0);
        frame(&mut ctx, idle(at).press(), |ui| {
            ui.button("ok");
        });
        assert!(ctx.focus().is_some());

        let mut r = None;
        frame(&mut ctx, idle(Vec2::new(10.0, 300.0)).release(), |ui| {
            r = Some(ui.button("ok"));
        });
        let r = r.unwrap();
        assert!(!r.clicked() && !r.focused());
        assert_eq!(ctx.focus(), None);
    }

    #[test]
    fn test_press_on_nothing_clears_focus() {
        let mut ctx = ctx();
        let at = Vec2::new(10.0, 10.0);
        frame(&mut ctx, idle(at).press(), |ui| {
            ui.text_box("name", "");
        });
        frame(&mut ctx, idle(at).release(), |ui| {
            ui.text_box("name", "");
        });
        assert!(ctx.focus().is_some());

        frame(&mut ctx, idle(Vec2::new(400.0, 500.0)).press(), |ui| {
            ui.text_box("name", "");
        });
        assert_eq!(ctx.focus(), None);
    }

    #[test]
    fn test_innermost_widget_wins_focus() {
        let mut ctx = ctx();
        let rect = Rect::new(100.0, 100.0, 300.0, 200.0);
        let build = |ui: &mut Context| {
            let w = ui.begin_window("win", rect, WidgetOptions::DRAGGABLE);
            let b = ui.button("ok");
            ui.end_window();
            (w, b)
        };
        frame(&mut ctx, idle(Vec2::ZERO), |ui| {
            build(ui);
        });
        let mut ids = None;
        frame(&mut ctx, idle(Vec2::new(150.0, 140.0)).press(), |ui| {
            ids = Some(build(ui));
        });
        let (w, b) = ids.unwrap();
        assert_eq!(ctx.focus(), Some(b.id));
        assert!(ctx.widget(b.id).unwrap().flags.contains(Interaction::FOCUSED));
        assert!(!ctx.widget(w.id).unwrap().flags.contains(Interaction::FOCUSED));
        // A press on the button is not a window drag.
        assert_eq!(ctx.drag_mode(), DragMode::None);
    }

    #[test]
    fn test_only_front_window_is_hit() {
        let mut ctx = ctx();
        let rect = Rect::new(100.0, 100.0, 300.0, 200.0);
        let mut ids = Vec::new();
        let build = |ui: &mut Context, ids: &mut Vec<Identity>| {
            for name in ["back", "front"] {
                ui.window(name, rect, WidgetOptions::empty(), |ui| {
                    ids.push(ui.button("x").id);
                });
            }
        };
        frame(&mut ctx, idle(Vec2::ZERO), |ui| build(ui, &mut Vec::new()));
        frame(&mut ctx, idle(Vec2::new(150.0, 140.0)).press(), |ui| build(ui, &mut ids));
        assert_eq!(ctx.focus(), Some(ids[1]));
        assert!(!ctx.widget(ids[0]).unwrap().flags.contains(Interaction::HOVERED));
    }

    #[test]
    fn test_drag_moves_window_and_children_together() {
        let mut ctx = ctx();
        let rect = Rect::new(100.0, 100.0, 300.0, 200.0);
        let mut ids = None;
        let grab = Vec2::new(150.0, 110.0);
        let inputs = [
            idle(grab),
            idle(grab).press(),
            InputSnapshot::moved(grab, Vec2::new(10.0, 5.0), SCREEN).hold(),
        ];
        let mut last = None;
        for input in inputs {
            frame(&mut ctx, input, |ui| {
                let w = ui.begin_window("win", rect, WidgetOptions::DRAGGABLE);
                let l = ui.label("hello");
                ui.end_window();
                ids = Some((w.id, l.id));
                last = Some(w);
            });
        }
        let (w, l) = ids.unwrap();
        assert!(last.unwrap().dragging());
        assert!(!last.unwrap().resizing());
        let wr = ctx.rect_of(w).unwrap();
        let lr = ctx.rect_of(l).unwrap();
        assert_eq!(wr, Rect::new(110.0, 105.0, 300.0, 200.0));
        assert_eq!((lr.x - wr.x, lr.y - wr.y), (4.0, 28.0));
        assert_eq!(ctx.click_anchor(), grab);

        frame(&mut ctx, idle(Vec2::new(160.0, 115.0)).release(), |ui| {
            ui.window("win", rect, WidgetOptions::DRAGGABLE, |_| {});
        });
        assert_eq!(ctx.drag_mode(), DragMode::None);
        assert_eq!(ctx.rect_of(w).unwrap(), Rect::new(110.0, 105.0, 300.0, 200.0));
    }

    #[test]
    fn test_corner_press_resizes_and_never_drags() {
        let mut ctx = ctx();
        let rect = Rect::new(100.0, 100.0, 300.0, 200.0);
        let opts = WidgetOptions::DRAGGABLE | WidgetOptions::RESIZABLE;
        let corner = Vec2::new(395.0, 295.0);
        let mut r = None;
        let run = |ctx: &mut Context, input: InputSnapshot, r: &mut Option<Response>| {
            frame(ctx, input, |ui| *r = Some(ui.window("win", rect, opts, |_| {})));
        };
        run(&mut ctx, idle(corner), &mut r);
        run(&mut ctx, idle(corner).press(), &mut r);
        assert_eq!(ctx.drag_mode(), DragMode::Resize);

        run(&mut ctx, InputSnapshot::moved(corner, Vec2::new(20.0, 10.0), SCREEN).hold(), &mut r);
        let resp = r.unwrap();
        assert!(resp.resizing() && !resp.dragging());
        assert_eq!(ctx.rect_of(resp.id).unwrap(), Rect::new(100.0, 100.0, 320.0, 210.0));

        let moved = corner + Vec2::new(20.0, 10.0);
        run(&mut ctx, InputSnapshot::moved(moved, Vec2::new(-500.0, -500.0), SCREEN).hold(), &mut r);
        let min = UiConfig::default().min_window_size;
        assert_eq!(ctx.rect_of(resp.id).unwrap(), Rect::new(100.0, 100.0, min, min));
    }

    #[test]
    fn test_window_order_and_raise() {
        let mut ctx = ctx();
        let build = |ui: &mut Context| {
            for (i, name) in ["a", "b", "c"].into_iter().enumerate() {
                let rect = Rect::new(200.0 * i as f32, 0.0, 100.0, 100.0);
                ui.window(name, rect, WidgetOptions::empty(), |_| {});
            }
        };
        let order = |ctx: &Context| ctx.windows().map(|(id, _, _)| id).collect::<Vec<_>>();
        let id = |n: &str| hash_identity(n, Identity::ROOT);

        frame(&mut ctx, idle(Vec2::ZERO), build);
        assert_eq!(order(&ctx), vec![id("a"), id("b"), id("c")]);

        frame(&mut ctx, idle(Vec2::new(50.0, 50.0)).press(), build);
        assert_eq!(order(&ctx), vec![id("b"), id("c"), id("a")]);
        let depths: Vec<u32> = ctx.windows().map(|(_, _, d)| d).collect();
        assert_eq!(depths, vec![2, 1, 0]);
    }

    #[test]
    fn test_windows_paint_back_to_front_after_root() {
        let mut ctx = ctx();
        let list = frame(&mut ctx, idle(Vec2::ZERO), |ui| {
            ui.window("A", Rect::new(0.0, 100.0, 200.0, 100.0), WidgetOptions::empty(), |_| {});
            ui.window("B", Rect::new(50.0, 150.0, 200.0, 100.0), WidgetOptions::empty(), |_| {});
            ui.label("one");
            ui.label("two");
        });
        assert_eq!(texts(&list), vec!["two", "one", "A", "B"]);
    }

    #[test]
    fn test_long_list_draws_only_visible_rows() {
        let mut ctx = ctx();
        let mut region = None;
        let list = frame(&mut ctx, idle(Vec2::new(700.0, 590.0)), |ui| {
            ui.set_layout_spacer(0.0);
            ui.set_layout_box_size(Size::new(0.0, 20.0));
            region = Some(ui.scroll_view("list", 300.0, |ui| {
                for i in 0..500 {
                    ui.label(&format!("item {i}"));
                }
            }));
        });
        let region = ctx.widget(region.unwrap().id).unwrap();
        assert!(region.content.height >= 10_000.0);
        let rows = texts(&list).iter().filter(|t| t.starts_with("item")).count();
        assert!(rows <= 16, "drew {rows} rows");
        assert!(rows >= 15);
    }

    #[test]
    fn test_rows_add_their_height_to_the_scroll_region() {
        let mut ctx = ctx();
        let mut region = None;
        frame(&mut ctx, idle(Vec2::ZERO), |ui| {
            region = Some(ui.scroll_view("rows", 100.0, |ui| {
                ui.set_layout_spacer(0.0);
                ui.set_layout_box_size(Size::new(50.0, 20.0));
                for i in 0..10 {
                    ui.row(|ui| {
                        ui.label(&format!("left {i}"));
                        ui.label(&format!("right {i}"));
                    });
                }
            }));
        });
        let region = ctx.widget(region.unwrap().id).unwrap();
        assert_eq!(region.content, Size::new(100.0, 200.0));
        match region.kind {
            WidgetKind::ScrollRegion(state) => assert_eq!(state.content_height, 200.0),
            _ => panic!("not a scroll region"),
        }
    }

    #[test]
    fn test_columns_and_spacing_count_once_in_panel() {
        let mut ctx = ctx();
        let mut panel = None;
        frame(&mut ctx, idle(Vec2::ZERO), |ui| {
            panel = Some(ui.panel("grid", 200.0, |ui| {
                ui.set_layout_spacer(0.0);
                ui.set_layout_box_size(Size::new(0.0, 20.0));
                ui.set_layout_column_sizes(&[100.0, 100.0]);
                ui.begin_column();
                ui.label("a1");
                ui.label("a2");
                ui.set_next_column();
                ui.label("b1");
                ui.label("b2");
                ui.end_column();
                ui.spacing(30.0);
            }));
        });
        let content = ctx.widget(panel.unwrap().id).unwrap().content;
        assert_eq!(content.height, 70.0);
    }

    #[test]
    fn test_clipped_part_of_scroll_item_is_not_hit() {
        let mut ctx = ctx();
        let build = |ui: &mut Context| {
            ui.scroll_view("list", 100.0, |ui| {
                ui.set_layout_spacer(0.0);
                ui.set_layout_box_size(Size::new(0.0, 30.0));
                for i in 0..4 {
                    ui.button(&format!("item {i}"));
                }
            });
        };
        let last = hash_identity("item 3", hash_identity("list", Identity::ROOT));

        // Item 3 spans y 90..120; only 90..100 is inside the viewport.
        frame(&mut ctx, idle(Vec2::new(10.0, 110.0)).press(), &build);
        assert!(ctx.widget(last).unwrap().drawable);
        assert_eq!(ctx.focus(), None);

        frame(&mut ctx, idle(Vec2::new(10.0, 110.0)).release(), &build);
        frame(&mut ctx, idle(Vec2::new(10.0, 95.0)).press(), &build);
        assert_eq!(ctx.focus(), Some(last));
    }

    #[test]
    fn test_thumb_drag_is_clamped_and_applies_next_frame() {
        let mut ctx = ctx();
        let build = |ui: &mut Context| {
            ui.set_layout_spacer(0.0);
            ui.set_layout_box_size(Size::new(0.0, 20.0));
            ui.scroll_view("list", 300.0, |ui| {
                for i in 0..500 {
                    ui.label(&format!("item {i}"));
                }
            });
        };
        let grip = Vec2::new(795.0, 10.0);
        frame(&mut ctx, idle(grip), build);
        frame(&mut ctx, idle(grip), build);
        frame(&mut ctx, idle(grip).press(), build);
        let thumb_id = ctx.focus().expect("thumb takes focus");

        let drag = frame(
            &mut ctx,
            InputSnapshot::moved(grip, Vec2::new(0.0, 5000.0), SCREEN).hold(),
            build,
        );
        let thumb = ctx.rect_of(thumb_id).unwrap();
        assert!(thumb.y >= 0.0 && thumb.bottom() <= 300.0);
        assert_eq!(thumb.x, 800.0 - UiConfig::default().scrollbar_width);
        // Offset from the drag shows up one frame later.
        assert!(texts(&drag).iter().any(|t| t == "item 0"));

        let after = frame(&mut ctx, idle(grip + Vec2::new(0.0, 5000.0)).hold(), build);
        let shown = texts(&after);
        assert!(shown.iter().any(|t| t == "item 499"));
        assert!(!shown.iter().any(|t| t == "item 0"));
        assert!(shown.iter().filter(|t| t.starts_with("item")).count() <= 16);
    }

    #[test]
    fn test_same_calls_give_same_rects() {
        let mut ctx = ctx();
        let build = |ui: &mut Context| {
            ui.set_layout_column_sizes(&[100.0, 200.0]);
            ui.row(|ui| {
                ui.button("a");
                ui.button("b");
            });
            ui.label("below");
        };
        let rects = |ctx: &Context| {
            ["a", "b", "below"]
                .map(|n| ctx.rect_of(hash_identity(n, Identity::ROOT)).unwrap())
        };
        frame(&mut ctx, idle(Vec2::ZERO), build);
        let first = rects(&ctx);
        frame(&mut ctx, idle(Vec2::ZERO), build);
        assert_eq!(first, rects(&ctx));
        assert_eq!(first[0], Rect::new(0.0, 0.0, 100.0, 24.0));
        assert_eq!(first[1], Rect::new(104.0, 0.0, 200.0, 24.0));
        assert_eq!(first[2].y, 28.0);
    }

    #[test]
    fn test_text_box_editing_and_key_consumption() {
        let mut ctx = ctx();
        let at = Vec2::new(10.0, 10.0);
        let mut r = None;
        let mut step = |ctx: &mut Context, input: InputSnapshot| {
            frame(ctx, input, |ui| r = Some(ui.text_box("name", "abc")));
            r.unwrap()
        };
        step(&mut ctx, idle(at).press());
        let clicked = step(&mut ctx, idle(at).release());
        assert!(clicked.clicked() && clicked.focused());

        let typed = step(&mut ctx, idle(at).with_char('d'));
        assert!(typed.changed());
        assert_eq!(ctx.text_from_widget(typed.id), Some("abcd"));

        let keys = KeyFlags::RETURN | KeyFlags::FRAMEBUFFER_RESIZED;
        let submitted = step(&mut ctx, idle(at).with_keys(keys));
        assert!(submitted.submitted());
        assert_eq!(ctx.last_event(), KeyFlags::FRAMEBUFFER_RESIZED);

        step(&mut ctx, idle(at).with_keys(KeyFlags::WORD_DELETE));
        assert_eq!(ctx.text_from_widget(typed.id), Some(""));

        let escaped = step(&mut ctx, idle(at).with_keys(KeyFlags::ESCAPE));
        assert!(!escaped.focused());
        assert_eq!(ctx.focus(), None);

        // Unfocused boxes ignore keys.
        step(&mut ctx, idle(at).with_char('x').with_keys(KeyFlags::BACKSPACE));
        assert_eq!(ctx.text_from_widget(typed.id), Some(""));
        assert_eq!(ctx.last_event(), KeyFlags::BACKSPACE);
    }

    #[test]
    fn test_text_box_caret_is_painted_when_focused() {
        let mut ctx = ctx();
        let at = Vec2::new(10.0, 10.0);
        frame(&mut ctx, idle(at).press(), |ui| {
            ui.text_box("name", "hi");
        });
        let list = frame(&mut ctx, idle(at), |ui| {
            ui.text_box("name", "ignored");
        });
        assert_eq!(texts(&list), vec!["hi"]);
        let caret = Theme::default().input.active;
        let has_caret = list.cmds.iter().any(|c| {
            matches!(c, DrawCmd::Rect { rect, color, .. } if *color == caret && rect.w == 1.0)
        });
        assert!(has_caret);
    }

    #[test]
    fn test_tree_node_toggles_and_indents() {
        let mut ctx = ctx();
        let at = Vec2::new(10.0, 10.0);
        let mut opened = Vec::new();
        for input in [idle(at).press(), idle(at).release(), idle(at)] {
            let list = frame(&mut ctx, input, |ui| {
                opened.push(ui.tree_node("files", |ui| {
                    ui.label("a.txt");
                }));
            });
            if *opened.last().unwrap() {
                assert!(texts(&list).contains(&"- files".to_string()));
            } else {
                assert_eq!(texts(&list), vec!["+ files"]);
            }
        }
        assert_eq!(opened, vec![false, true, true]);
        let node = hash_identity("files", Identity::ROOT);
        let child = ctx.rect_of(hash_identity("a.txt", node)).unwrap();
        assert_eq!(child.x, UiConfig::default().tree_indent);
    }

    #[test]
    fn test_checkbox_flips_value_on_click() {
        let mut ctx = ctx();
        let at = Vec2::new(10.0, 10.0);
        let mut on = false;
        let mut changed = Vec::new();
        for input in [idle(at).press(), idle(at).release(), idle(at)] {
            frame(&mut ctx, input, |ui| changed.push(ui.checkbox("on", &mut on).changed()));
        }
        assert!(on);
        assert_eq!(changed, vec![false, true, false]);
    }

    #[test]
    fn test_pending_icon_goes_to_next_widget_only() {
        let mut ctx = ctx();
        let uv = Rect::new(0.0, 0.0, 0.25, 0.25);
        let list = frame(&mut ctx, idle(Vec2::ZERO), |ui| {
            ui.set_next_icon(uv);
            ui.button("save");
            ui.button("load");
            ui.icon("logo", uv);
        });
        assert_eq!(list.icons().count(), 2);
    }

    #[test]
    fn test_pushed_theme_applies_inside_bracket() {
        let mut ctx = ctx();
        let red = Color::from_rgb(255, 0, 0);
        let mut theme = Theme::default();
        theme.button.background = red;
        let list = frame(&mut ctx, idle(Vec2::new(700.0, 500.0)), |ui| {
            ui.button("plain");
            ui.push_theme(theme);
            ui.button("red");
            ui.pop_theme();
        });
        let reds = list
            .cmds
            .iter()
            .filter(|c| matches!(c, DrawCmd::Rect { color, .. } if *color == red))
            .count();
        assert_eq!(reds, 1);
    }

    #[test]
    fn test_panel_lays_children_inside() {
        let mut ctx = ctx();
        let mut inner = None;
        let mut panel = None;
        frame(&mut ctx, idle(Vec2::ZERO), |ui| {
            ui.label("title");
            panel = Some(ui.panel("box", 100.0, |ui| {
                inner = Some(ui.button("inside"));
            }));
        });
        let p = ctx.rect_of(panel.unwrap().id).unwrap();
        let b = ctx.rect_of(inner.unwrap().id).unwrap();
        assert_eq!(p, Rect::new(0.0, 28.0, 800.0, 100.0));
        assert_eq!(b.origin(), Vec2::new(4.0, 32.0));
    }

    #[test]
    fn test_pushed_parent_owns_later_widgets() {
        let mut ctx = ctx();
        let mut ids = Vec::new();
        frame(&mut ctx, idle(Vec2::ZERO), |ui| {
            let panel = ui.panel("box", 100.0, |_| {});
            ui.push_parent(panel.id);
            ids.push((panel.id, ui.label("note").id));
            ui.pop_parent();
            ui.push_parent(Identity(0xdead_beef));
            ids.push((Identity::ROOT, ui.label("stray").id));
            ui.pop_parent();
        });
        assert_eq!(ids[0].1, hash_identity("note", ids[0].0));
        assert_eq!(ids[1].1, hash_identity("stray", Identity::ROOT));
        assert_eq!(ctx.widget(ids[0].0).unwrap().content.height, 28.0);
    }

    #[test]
    fn test_frame_stats() {
        let mut ctx = ctx();
        let stats = {
            ctx.begin(idle(Vec2::ZERO));
            ctx.label("a");
            ctx.button("b");
            let mut list = DrawList::new();
            ctx.end(&mut list)
        };
        assert_eq!(stats.frame, 1);
        assert_eq!(stats.widgets_built, 2);
        assert_eq!(stats.widgets_drawn, 2);
        assert_eq!(stats.windows, 0);
        assert_eq!(ctx.last_stats(), stats);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let cfg = UiConfig {
            layout_depth: 0,
            ..UiConfig::default()
        };
        assert!(Context::new(cfg, Box::new(MonospaceFont::default())).is_err());
    }

    #[test]
    #[should_panic(expected = "window stack unbalanced")]
    fn test_unclosed_window_panics_at_end() {
        let mut ctx = ctx();
        ctx.begin(idle(Vec2::ZERO));
        ctx.begin_window("w", Rect::new(0.0, 0.0, 10.0, 10.0), WidgetOptions::empty());
        ctx.end(&mut DrawList::new());
    }

    #[test]
    #[should_panic(expected = "outside a begin()/end() bracket")]
    fn test_widget_outside_frame_panics() {
        ctx().button("x");
    }

    #[test]
    #[should_panic(expected = "already open")]
    fn test_double_begin_panics() {
        let mut ctx = ctx();
        ctx.begin(idle(Vec2::ZERO));
        ctx.begin(idle(Vec2::ZERO));
    }

    #[test]
    #[should_panic(expected = "theme stack overflow")]
    fn test_theme_overflow_panics() {
        let cfg = UiConfig {
            theme_depth: 2,
            ..UiConfig::default()
        };
        let mut ctx = Context::new(cfg, Box::new(MonospaceFont::default())).unwrap();
        ctx.begin(idle(Vec2::ZERO));
        ctx.push_theme(Theme::default());
        ctx.push_theme(Theme::default());
    }

    #[test]
    #[should_panic(expected = "identity table exhausted")]
    fn test_identity_exhaustion_panics() {
        let cfg = UiConfig {
            identity_capacity: 2,
            ..UiConfig::default()
        };
        let mut ctx = Context::new(cfg, Box::new(MonospaceFont::default())).unwrap();
        ctx.begin(idle(Vec2::ZERO));
        for l in ["a", "b", "c"] {
            ctx.label(l);
        }
    }
}
