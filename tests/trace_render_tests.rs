use strip_chart::core::{PlotArea, SampleStore, Viewport};
use strip_chart::extensions::{MarkerLine, MarkerLineSet};
use strip_chart::render::{
    Color, DrawCommand, LineDash, RecordingSurface, RenderStats, TraceRenderer, TraceStyle,
};

fn ramp_store(capacity: usize, samples: u32, channels: usize) -> SampleStore {
    let mut store = SampleStore::new(capacity, channels).expect("store");
    let mut values = vec![0.0; channels];
    for t in 0..samples {
        let t = f64::from(t);
        for (channel, value) in values.iter_mut().enumerate() {
            *value = (t * 0.1 + channel as f64).sin();
        }
        store.append(t, &values).expect("append");
    }
    store
}

fn paint_with(
    style: &TraceStyle,
    viewport: &Viewport,
    area: PlotArea,
    store: &SampleStore,
    markers: &MarkerLineSet,
) -> (RenderStats, RecordingSurface) {
    let mut surface = RecordingSurface::new();
    let stats = TraceRenderer::new(style)
        .paint(viewport, area, store, markers, &mut surface)
        .expect("paint");
    (stats, surface)
}

#[test]
fn redraw_cost_is_bounded_by_visible_samples() {
    let area = PlotArea::new(400, 200);
    let style = TraceStyle::default();
    let markers = MarkerLineSet::new();
    let viewport = Viewport::new(1.0, 0.1, 100_000, -1.0, 1.0).expect("viewport");
    assert_eq!(viewport.x_bounds(), (-100.0, 0.0));

    let small = ramp_store(100_000, 1_000, 2);
    let large = ramp_store(100_000, 100_000, 2);
    let (small_stats, _) = paint_with(&style, &viewport, area, &small, &markers);
    let (large_stats, _) = paint_with(&style, &viewport, area, &large, &markers);

    assert_eq!(small_stats.samples_visited, 101);
    assert_eq!(large_stats.samples_visited, 101);
    assert_eq!(large_stats.segments_drawn, 200);
}

#[test]
fn all_vertices_stay_inside_the_plot() {
    let area = PlotArea::new(300, 120);
    let store = ramp_store(500, 500, 3);
    let mut viewport = Viewport::new(1.0, 0.1, 500, -1.0, 1.0).expect("viewport");
    viewport.shift(137.0, 0.0, 300.0);
    viewport.zoom(1.7, 0.5, 0.5);

    let (stats, surface) = paint_with(
        &TraceStyle::default(),
        &viewport,
        area,
        &store,
        &MarkerLineSet::new(),
    );
    assert!(stats.segments_drawn > 0);
    for (x, y) in surface.path_points() {
        assert!((-300.0 - 1e-9..=1e-9).contains(&x), "x out of plot: {x}");
        assert!((-1e-9..=120.0 + 1e-9).contains(&y), "y out of plot: {y}");
    }
    assert_eq!(surface.depth(), 0);
}

#[test]
fn one_stroke_per_visible_channel() {
    let store = ramp_store(50, 50, 3);
    let viewport = Viewport::new(1.0, 0.1, 50, -1.0, 1.0).expect("viewport");
    let style = TraceStyle::default()
        .with_channel_colors(vec![Color::rgb(1.0, 0.0, 0.0), Color::rgb(0.0, 1.0, 0.0)])
        .with_hidden_channel(2);

    let (stats, surface) = paint_with(
        &style,
        &viewport,
        PlotArea::new(200, 100),
        &store,
        &MarkerLineSet::new(),
    );
    assert_eq!(surface.stroke_count(), 2);
    assert_eq!(stats.head_markers, 2);

    let colors: Vec<Color> = surface
        .commands()
        .iter()
        .filter_map(|command| match command {
            DrawCommand::StrokeColor(color) => Some(*color),
            _ => None,
        })
        .collect();
    assert_eq!(
        colors,
        vec![Color::rgb(1.0, 0.0, 0.0), Color::rgb(0.0, 1.0, 0.0)]
    );
}

#[test]
fn marker_lines_draw_after_traces_in_registration_order() {
    let store = ramp_store(20, 20, 1);
    let viewport = Viewport::new(1.0, 0.1, 20, -1.0, 1.0).expect("viewport");
    let mut markers = MarkerLineSet::new();
    markers
        .insert("upper", MarkerLine::new(0.5, Color::rgb(0.8, 0.2, 0.2)))
        .expect("upper");
    markers
        .insert(
            "zero",
            MarkerLine::new(0.0, Color::rgb(0.5, 0.5, 0.5)).with_dash(LineDash::Dotted),
        )
        .expect("zero");

    let (stats, surface) = paint_with(
        &TraceStyle::default(),
        &viewport,
        PlotArea::new(100, 100),
        &store,
        &markers,
    );
    assert_eq!(stats.marker_lines, 2);

    let points = surface.path_points();
    let tail = &points[points.len() - 4..];
    assert_eq!(tail, &[(-100.0, 75.0), (0.0, 75.0), (-100.0, 50.0), (0.0, 50.0)]);
    assert_eq!(surface.commands().last(), Some(&DrawCommand::Restore));
}
