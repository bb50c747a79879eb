// src/render/tests.rs

#[cfg(test)]
mod render_tests {
    use crate::config::{Numerology, Palette, RenderOptions};
    use crate::render::{render_helix, vesica};
    use crate::surface::{RecordingSurface, SurfaceOp};
    use test_log::test; // For logging within tests

    // Distinct per-layer colors so strokes attribute unambiguously.
    fn test_palette() -> Palette {
        use crate::color::Color;
        Palette {
            background: Color::rgb(0x10, 0x10, 0x18),
            ink: Color::rgb(0x0f, 0x0f, 0x0f),
            layers: [
                Color::rgb(0xd1, 0x1a, 0x1a), // vesica
                Color::rgb(0x1a, 0xd1, 0x1a), // tree edges
                Color::rgb(0x1a, 0x1a, 0xd1), // tree nodes
                Color::rgb(0xd1, 0xd1, 0x1a), // fibonacci
                Color::rgb(0xd1, 0x1a, 0xd1), // helix A
                Color::rgb(0x1a, 0xd1, 0xd1), // helix B
            ],
        }
    }

    fn options(width: f64, height: f64) -> RenderOptions {
        RenderOptions {
            width,
            height,
            palette: test_palette(),
            num: Numerology::default(),
        }
    }

    fn render(opts: &RenderOptions) -> RecordingSurface {
        let mut surface = RecordingSurface::new();
        render_helix(&mut surface, opts).expect("recording surface never fails");
        surface
    }

    fn count(surface: &RecordingSurface, op: &SurfaceOp) -> usize {
        surface.count_where(|o| o == op)
    }

    #[test]
    fn background_fill_is_exactly_one_full_rect() {
        let opts = options(300.0, 200.0);
        let surface = render(&opts);

        let fill_rects: Vec<_> = surface
            .ops()
            .iter()
            .filter(|op| matches!(op, SurfaceOp::FillRect(..)))
            .collect();
        assert_eq!(fill_rects.len(), 1);
        assert_eq!(*fill_rects[0], SurfaceOp::FillRect(0.0, 0.0, 300.0, 200.0));

        // Background color is set before the fill.
        let set_bg = surface
            .ops()
            .iter()
            .position(|op| *op == SurfaceOp::SetFillStyle(opts.palette.background))
            .expect("background fill style set");
        let rect = surface
            .ops()
            .iter()
            .position(|op| matches!(op, SurfaceOp::FillRect(..)))
            .unwrap();
        assert!(set_bg < rect);
    }

    #[test]
    fn call_log_is_bracketed_by_save_and_restore() {
        let opts = options(90.0, 90.0);
        let surface = render(&opts);

        assert_eq!(surface.ops().first(), Some(&SurfaceOp::Save));
        assert_eq!(surface.ops().last(), Some(&SurfaceOp::Restore));
        // Outer pair plus one per layer.
        assert_eq!(count(&surface, &SurfaceOp::Save), 5);
        assert_eq!(count(&surface, &SurfaceOp::Restore), 5);
    }

    #[test]
    fn layer_colors_appear_in_depth_order() {
        let opts = options(210.0, 210.0);
        let surface = render(&opts);
        let palette = &opts.palette;

        let first_use = |color| {
            surface
                .ops()
                .iter()
                .position(|op| *op == SurfaceOp::SetStrokeStyle(color))
                .unwrap_or(usize::MAX)
        };

        let vesica = first_use(palette.layers[0]);
        let tree = first_use(palette.layers[1]);
        let spiral = first_use(palette.layers[3]);
        let strand_a = first_use(palette.layers[4]);
        let strand_b = first_use(palette.layers[5]);
        let rungs = first_use(palette.ink);

        assert!(vesica < tree, "vesica before tree");
        assert!(tree < spiral, "tree before fibonacci");
        assert!(spiral < strand_a, "fibonacci before helix");
        assert!(strand_a < strand_b, "strand A before strand B");
        assert!(strand_b < rungs, "strands before rungs");
    }

    #[test]
    fn tree_scaffold_has_22_edges_and_10_nodes_at_any_size() {
        for (w, h) in [(300.0, 200.0), (90.0, 90.0), (1.0, 1000.0), (0.0, 0.0)] {
            let opts = options(w, h);
            let surface = render(&opts);
            assert_eq!(
                surface.strokes_with(opts.palette.layers[1]),
                22,
                "22 edge strokes at {w}x{h}"
            );
            assert_eq!(
                surface.fills_with(opts.palette.layers[2]),
                10,
                "10 node fills at {w}x{h}"
            );
        }
    }

    #[test]
    fn vesica_arc_count_matches_closed_form() {
        for (w, h) in [(90.0, 90.0), (300.0, 200.0), (210.0, 210.0), (640.0, 360.0)] {
            let opts = options(w, h);
            let surface = render(&opts);
            let cells = vesica::cell_count(w, h, 3, 7, 9);
            assert_eq!(
                surface.stroked_arcs(),
                2 * cells,
                "two stroked circles per cell at {w}x{h}"
            );
        }
    }

    #[test]
    fn fibonacci_strokes_once_with_default_constants() {
        let opts = options(300.0, 200.0);
        let surface = render(&opts);
        assert_eq!(surface.strokes_with(opts.palette.layers[3]), 1);
    }

    #[test]
    fn fibonacci_early_returns_for_single_sample() {
        for onefortyfour in [0, 1] {
            let mut opts = options(300.0, 200.0);
            opts.num.onefortyfour = onefortyfour;
            let surface = render(&opts);
            assert_eq!(
                surface.strokes_with(opts.palette.layers[3]),
                0,
                "no spiral stroke when ONEFORTYFOUR={onefortyfour}"
            );
            // Other layers are unaffected.
            assert_eq!(surface.strokes_with(opts.palette.layers[1]), 22);
            assert_eq!(surface.strokes_with(opts.palette.ink), 33);
        }
    }

    #[test]
    fn helix_strands_stroke_once_each() {
        let opts = options(300.0, 200.0);
        let surface = render(&opts);
        assert_eq!(surface.strokes_with(opts.palette.layers[4]), 1);
        assert_eq!(surface.strokes_with(opts.palette.layers[5]), 1);
    }

    #[test]
    fn helix_rung_count_is_exactly_thirtythree() {
        let opts = options(300.0, 200.0);
        let surface = render(&opts);
        assert_eq!(surface.strokes_with(opts.palette.ink), 33);
    }

    #[test]
    fn degenerate_strand_samples_skip_strands_but_not_rungs() {
        for ninetynine in [0, 1] {
            let mut opts = options(300.0, 200.0);
            opts.num.ninetynine = ninetynine;
            let surface = render(&opts);
            assert_eq!(
                surface.strokes_with(opts.palette.layers[4]),
                0,
                "no strand A with NINETYNINE={ninetynine}"
            );
            assert_eq!(surface.strokes_with(opts.palette.layers[5]), 0);
            assert_eq!(
                surface.strokes_with(opts.palette.ink),
                33,
                "rungs draw independently of the strand sample loop"
            );
        }
    }

    #[test]
    fn rung_count_follows_the_constant() {
        for (thirtythree, expected) in [(0, 0), (1, 1), (5, 5)] {
            let mut opts = options(300.0, 200.0);
            opts.num.thirtythree = thirtythree;
            let surface = render(&opts);
            assert_eq!(surface.strokes_with(opts.palette.ink), expected);
        }
    }

    #[test]
    fn end_to_end_90_by_90_scenario() {
        let opts = options(90.0, 90.0);
        let surface = render(&opts);

        // 2x2 grid of cells, two circles each.
        assert_eq!(vesica::cell_count(90.0, 90.0, 3, 7, 9), 4);
        assert_eq!(surface.stroked_arcs(), 8);

        assert_eq!(surface.strokes_with(opts.palette.layers[1]), 22);
        assert_eq!(surface.fills_with(opts.palette.layers[2]), 10);
        assert_eq!(surface.strokes_with(opts.palette.layers[3]), 1);
        assert_eq!(surface.strokes_with(opts.palette.layers[4]), 1);
        assert_eq!(surface.strokes_with(opts.palette.layers[5]), 1);
        assert_eq!(surface.strokes_with(opts.palette.ink), 33);
        assert_eq!(
            surface.count_where(|op| matches!(op, SurfaceOp::FillRect(..))),
            1
        );
        assert_eq!(surface.ops().first(), Some(&SurfaceOp::Save));
        assert_eq!(surface.ops().last(), Some(&SurfaceOp::Restore));
    }

    #[test]
    fn zero_dimensions_fill_background_and_keep_fixed_counts() {
        let opts = options(0.0, 0.0);
        let surface = render(&opts);

        let fill_rects: Vec<_> = surface
            .ops()
            .iter()
            .filter(|op| matches!(op, SurfaceOp::FillRect(..)))
            .collect();
        assert_eq!(fill_rects.len(), 1);
        assert_eq!(*fill_rects[0], SurfaceOp::FillRect(0.0, 0.0, 0.0, 0.0));

        assert_eq!(surface.stroked_arcs(), 0, "no vesica cells on a 0x0 surface");
        assert_eq!(surface.strokes_with(opts.palette.layers[1]), 22);
        assert_eq!(surface.fills_with(opts.palette.layers[2]), 10);
        assert_eq!(surface.strokes_with(opts.palette.ink), 33);
    }

    #[test]
    fn negative_dimensions_do_not_panic() {
        let opts = options(-100.0, -50.0);
        let surface = render(&opts);
        assert_eq!(surface.stroked_arcs(), 0);
        assert_eq!(surface.strokes_with(opts.palette.layers[1]), 22);
    }

    #[test]
    fn degenerate_constants_produce_empty_layers_without_hanging() {
        for field in ["three", "seven", "nine"] {
            let mut opts = options(300.0, 200.0);
            match field {
                "three" => opts.num.three = 0,
                "seven" => opts.num.seven = 0,
                _ => opts.num.nine = 0,
            }
            let surface = render(&opts);
            assert_eq!(
                surface.stroked_arcs(),
                0,
                "vesica grid collapses when {field}=0"
            );
            // The rest of the composition is untouched.
            assert_eq!(surface.strokes_with(opts.palette.layers[1]), 22);
            assert_eq!(surface.strokes_with(opts.palette.layers[3]), 1);
        }
    }

    #[test]
    fn all_constants_zero_still_renders_without_panicking() {
        let mut opts = options(300.0, 200.0);
        opts.num = Numerology {
            three: 0,
            seven: 0,
            nine: 0,
            eleven: 0,
            twentytwo: 0,
            thirtythree: 0,
            ninetynine: 0,
            onefortyfour: 0,
        };
        let surface = render(&opts);

        assert_eq!(surface.stroked_arcs(), 0);
        assert_eq!(surface.strokes_with(opts.palette.layers[3]), 0);
        assert_eq!(surface.strokes_with(opts.palette.layers[4]), 0);
        assert_eq!(surface.strokes_with(opts.palette.ink), 0);
        // The fixed graph still draws.
        assert_eq!(surface.strokes_with(opts.palette.layers[1]), 22);
        assert_eq!(surface.fills_with(opts.palette.layers[2]), 10);
    }

    #[test]
    fn identical_inputs_produce_identical_call_logs() {
        let opts = options(640.0, 360.0);
        let first = render(&opts);
        let second = render(&opts);
        assert_eq!(first.ops(), second.ops());
    }

    #[test]
    fn vesica_cell_count_closed_form_examples() {
        // 90x90: base radius 30, stride 30/7*9; two strides fit per axis.
        assert_eq!(vesica::cell_count(90.0, 90.0, 3, 7, 9), 4);
        // 300x200: base radius 200/3, stride ~85.7; 3 columns, 2 rows.
        assert_eq!(vesica::cell_count(300.0, 200.0, 3, 7, 9), 6);
        // Degenerate constants yield zero cells.
        assert_eq!(vesica::cell_count(300.0, 200.0, 0, 7, 9), 0);
        assert_eq!(vesica::cell_count(300.0, 200.0, 3, 0, 9), 0);
        assert_eq!(vesica::cell_count(300.0, 200.0, 3, 7, 0), 0);
        assert_eq!(vesica::cell_count(0.0, 0.0, 3, 7, 9), 0);
    }
}
