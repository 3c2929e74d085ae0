//! End-to-end tests for Arabic chart labeling and the plot lifecycle

use plot_helpers::{
    apply_labels_horizontal, apply_labels_vertical, begin_plot, end_plot, shape_for_display,
    BeginPlotConfig, EndPlotOptions, HeadlessViewer, LabelDictionary, PlotSettings,
};

// Arabic words used across tests
const OLIVE: &str = "\u{0632}\u{064A}\u{062A}\u{0648}\u{0646}";
const PALM: &str = "\u{0646}\u{062E}\u{064A}\u{0644}";
const CITRUS: &str = "\u{062D}\u{0645}\u{0636}\u{064A}\u{0627}\u{062A}";
const TITLE: &str =
    "\u{0625}\u{0646}\u{062A}\u{0627}\u{062C} \u{0627}\u{0644}\u{0623}\u{0634}\u{062C}\u{0627}\u{0631}";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

#[test]
fn ascii_text_passes_through() {
    for text in ["", "Yield (tons)", "2023-2024", "a < b & c"] {
        assert_eq!(shape_for_display(text), text);
    }
}

#[test]
fn dictionary_keys_replace_matching_ticks() {
    init_tracing();
    let mut figure = begin_plot(&BeginPlotConfig::default()).unwrap();
    figure.axes_mut().bar(&["X", "Y"], &[3.0, 4.0]);
    let dictionary = LabelDictionary::from([("a", "X"), ("b", "Y")]);

    apply_labels_horizontal(figure.axes_mut(), &dictionary, "t", "x", "y");

    assert_eq!(
        figure.axes().xticklabels(),
        &[shape_for_display("a"), shape_for_display("b")]
    );
}

#[test]
fn unmatched_tick_shortens_label_list() {
    let mut figure = begin_plot(&BeginPlotConfig::default()).unwrap();
    figure.axes_mut().bar(&["olive", "palm", "unknown"], &[3.0, 4.0, 1.0]);
    let dictionary = LabelDictionary::from([(OLIVE, "olive"), (PALM, "palm")]);

    apply_labels_horizontal(figure.axes_mut(), &dictionary, TITLE, "", "");

    let axes = figure.axes();
    assert_eq!(axes.x_axis().ticks().len(), 3);
    assert_eq!(axes.xticklabels().len(), 2);
}

#[test]
fn shared_value_lengthens_label_list() {
    let mut figure = begin_plot(&BeginPlotConfig::default()).unwrap();
    figure.axes_mut().barh(&["citrus", "palm"], &[2.0, 5.0]);
    let dictionary =
        LabelDictionary::from([(CITRUS, "citrus"), ("lemon", "citrus"), (PALM, "palm")]);

    apply_labels_vertical(figure.axes_mut(), &dictionary, TITLE, "", "");

    assert_eq!(
        figure.axes().yticklabels(),
        &[
            shape_for_display(CITRUS),
            "lemon".to_string(),
            shape_for_display(PALM)
        ]
    );
    assert_eq!(figure.axes().y_axis().ticks().len(), 2);
}

#[test]
fn begin_plot_reports_requested_size() {
    for size in [(10.0, 8.0), (4.0, 3.0), (12.5, 6.25)] {
        let figure = begin_plot(&BeginPlotConfig {
            figsize: size,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(figure.size_inches(), size);
    }
}

#[test]
fn end_plot_saves_only_when_asked() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trees.svg");
    let mut viewer = HeadlessViewer::new();

    let mut figure = begin_plot(&BeginPlotConfig::default()).unwrap();
    figure.axes_mut().bar(&["olive"], &[3.0]);
    end_plot(
        &mut figure,
        &EndPlotOptions {
            save_figure: false,
            filename: path.clone(),
            ..Default::default()
        },
        &mut viewer,
    )
    .unwrap();
    assert!(!path.exists());

    end_plot(
        &mut figure,
        &EndPlotOptions {
            save_figure: true,
            filename: path.clone(),
            ..Default::default()
        },
        &mut viewer,
    )
    .unwrap();
    assert!(path.exists());
    assert_eq!(viewer.shown(), 2);

    // 10 x 8 inches at 300 dpi
    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains(r#"width="3000""#));
    assert!(svg.contains(r#"height="2400""#));
}

#[test]
fn end_plot_saves_bitmaps_at_300_dpi() {
    let dir = tempfile::tempdir().unwrap();
    let mut viewer = HeadlessViewer::new();

    for name in ["yield.png", "yield.jpg", "yield.bmp"] {
        let path = dir.path().join(name);
        let mut figure = begin_plot(&BeginPlotConfig::default()).unwrap();
        figure.axes_mut().bar(&["olive", "palm"], &[3.0, 5.0]);
        end_plot(
            &mut figure,
            &EndPlotOptions {
                title: Some("Yield".to_string()),
                xticks_rotation: 90.0,
                save_figure: true,
                filename: path.clone(),
                ..Default::default()
            },
            &mut viewer,
        )
        .unwrap();

        assert!(path.exists());
        assert_eq!(image::image_dimensions(&path).unwrap(), (3000, 2400));
    }
    assert_eq!(viewer.shown(), 3);
}

#[test]
fn flat_data_saves_without_nan() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flat.svg");
    let mut figure = begin_plot(&BeginPlotConfig::default()).unwrap();
    figure.axes_mut().bar(&["a", "b"], &[0.0, 0.0]);
    end_plot(
        &mut figure,
        &EndPlotOptions {
            save_figure: true,
            filename: path.clone(),
            ..Default::default()
        },
        &mut HeadlessViewer::new(),
    )
    .unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(!svg.contains("NaN"));
}

#[test]
fn full_arabic_chart_with_subtitle() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("arabic.svg");

    let mut figure = begin_plot(&BeginPlotConfig {
        figsize: (8.0, 6.0),
        style: "whitegrid".to_string(),
        context: "talk".to_string(),
        subtitle: Some(shape_for_display(TITLE)),
        ..Default::default()
    })
    .unwrap();
    figure.axes_mut().bar(&["olive", "palm", "citrus"], &[12.0, 30.0, 7.5]);

    let dictionary =
        LabelDictionary::from([(OLIVE, "olive"), (PALM, "palm"), (CITRUS, "citrus")]);
    apply_labels_horizontal(figure.axes_mut(), &dictionary, TITLE, OLIVE, PALM);

    end_plot(
        &mut figure,
        &EndPlotOptions {
            xticks_rotation: 90.0,
            save_figure: true,
            filename: path.clone(),
            ..Default::default()
        },
        &mut HeadlessViewer::new(),
    )
    .unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains(&shape_for_display(CITRUS)));
    assert!(svg.contains(&shape_for_display(TITLE)));
    assert!(svg.contains("stroke-dasharray"));
}

#[test]
fn settings_drive_the_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let settings_path = dir.path().join("plot.json");
    let image_path = dir.path().join("from-settings.svg");

    let mut settings = PlotSettings::default();
    settings.begin.figsize = (5.0, 4.0);
    settings.end.save_figure = true;
    settings.end.filename = image_path.clone();
    settings.save(&settings_path).unwrap();

    let settings = PlotSettings::load(&settings_path).unwrap();
    let mut figure = begin_plot(&settings.begin).unwrap();
    assert_eq!(figure.size_inches(), (5.0, 4.0));
    end_plot(&mut figure, &settings.end, &mut HeadlessViewer::new()).unwrap();
    assert!(image_path.exists());
}
