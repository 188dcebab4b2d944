//! End-to-end tests for the QQ dataset pipeline: add series, read
//! coordinates and bands, exercise the error paths a renderer would hit.

use qqplot_core::{QqDataset, QqError, Series, DEFAULT_ALPHA};

#[test]
fn pipeline_produces_paired_ascending_coordinates() {
    let mut ds = QqDataset::new();
    ds.add(Series::new("study", vec![0.5, 0.05, 0.01, 0.9]));

    let points = ds.coordinates("study").unwrap();
    assert_eq!(points.len(), 4);

    // Observed is -log10 of [0.9, 0.5, 0.05, 0.01]; expected is the
    // flipped -log10 of the n = 4 uniform quantiles
    let want_observed = [0.0458, 0.301, 1.301, 2.0];
    let want_expected = [0.0969, 0.2218, 0.398, 0.699];
    for (i, p) in points.iter().enumerate() {
        assert!((p.observed - want_observed[i]).abs() < 1e-3);
        assert!((p.expected - want_expected[i]).abs() < 1e-3);
    }
}

#[test]
fn band_is_sized_to_largest_series_and_tracks_mutation() {
    let mut ds = QqDataset::new();
    ds.add(Series::new("long", vec![0.1, 0.2, 0.3, 0.4, 0.5]));
    ds.add(Series::new("short", vec![0.6, 0.7]));

    let band = ds.confidence_band(DEFAULT_ALPHA).unwrap();
    assert_eq!(band.len(), 5);

    // Overwriting the long series shrinks the band on the next call
    ds.add(Series::new("long", vec![0.1]));
    let band = ds.confidence_band(DEFAULT_ALPHA).unwrap();
    assert_eq!(band.len(), 2);
}

#[test]
fn single_rank_band_matches_uniform_quantiles() {
    let mut ds = QqDataset::new();
    ds.add(Series::new("solo", vec![0.42]));

    let band = ds.confidence_band(0.01).unwrap();
    assert!((band.lower()[0] - 0.01).abs() < 1e-10);
    assert!((band.median()[0] - 0.5).abs() < 1e-12);
    assert!((band.upper()[0] - 0.99).abs() < 1e-10);
}

#[test]
fn band_brackets_null_data_on_display_scale() {
    // Evenly spread p-values are the null case: every point should sit
    // inside the 99% band on the display scale
    let n = 200;
    let pvalues: Vec<f64> = (1..=n).map(|k| k as f64 / (n + 1) as f64).collect();

    let mut ds = QqDataset::new();
    ds.add(Series::new("null", pvalues));

    let points = ds.coordinates("null").unwrap();
    let band = ds.confidence_band(0.01).unwrap().to_log10_scale();
    for (i, p) in points.iter().enumerate() {
        assert!(
            band.lower()[i] <= p.observed && p.observed <= band.upper()[i],
            "point {} at {} outside [{}, {}]",
            i,
            p.observed,
            band.lower()[i],
            band.upper()[i]
        );
    }
}

#[test]
fn top_fraction_thins_everything_but_the_tail() {
    let pvalues: Vec<f64> = (1..=100).map(|k| k as f64 / 101.0).collect();
    let mut ds = QqDataset::new();
    ds.add(Series::new("dense", pvalues));

    let all = ds.coordinates("dense").unwrap();
    assert_eq!(ds.top_fraction("dense", 100.0).unwrap(), all);
    assert!(ds.top_fraction("dense", 0.0).unwrap().is_empty());

    let top = ds.top_fraction("dense", 10.0).unwrap();
    assert_eq!(top.len(), 10);
    // The kept pairs are the largest observed values
    assert_eq!(top, all[90..].to_vec());
}

#[test]
fn renderer_facing_errors_fail_fast() {
    let mut ds = QqDataset::new();
    assert!(matches!(ds.max_size(), Err(QqError::EmptyDataset)));
    assert!(matches!(
        ds.confidence_band(0.01),
        Err(QqError::EmptyDataset)
    ));

    ds.add(Series::new("ok", vec![0.5]));
    assert!(matches!(
        ds.coordinates("nope"),
        Err(QqError::UnknownLabel { .. })
    ));
    assert!(matches!(ds.confidence_band(0.0), Err(QqError::Stats(_))));

    ds.add(Series::new("zero", vec![0.0]));
    assert!(matches!(ds.coordinates("zero"), Err(QqError::Stats(_))));
}

#[test]
fn display_attributes_pass_through_untouched() {
    let mut ds = QqDataset::new();
    ds.add(
        Series::new("styled", vec![0.5, 0.25])
            .with_color("crimson")
            .with_property("marker", "x"),
    );

    let series = ds.get("styled").unwrap();
    assert_eq!(series.color(), Some("crimson"));
    assert_eq!(
        series.properties().get("marker").map(String::as_str),
        Some("x")
    );

    // Styling has no effect on the numbers
    let mut plain = QqDataset::new();
    plain.add(Series::new("styled", vec![0.5, 0.25]));
    assert_eq!(
        ds.coordinates("styled").unwrap(),
        plain.coordinates("styled").unwrap()
    );
}
