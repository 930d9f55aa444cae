use fbm_core::{fractal_noise_2d, Field, FieldConfig, FractalParams};

fn small_config() -> FieldConfig {
    FieldConfig {
        width: 32,
        height: 24,
        periods: 4.0,
        fractal: FractalParams {
            octaves: 4,
            ..FractalParams::default()
        },
    }
}

#[test]
fn test_dimensions_and_row_major_layout() {
    let config = small_config();
    let field = Field::generate(99, &config);
    assert_eq!(field.width, 32);
    assert_eq!(field.height, 24);
    assert_eq!(field.values.len(), 32 * 24);

    // Row i maps to x, column j maps to y
    for (row, col) in [(0, 0), (5, 17), (23, 31)] {
        let x = row as f64 / config.height as f64 * config.periods;
        let y = col as f64 / config.width as f64 * config.periods;
        let expected = fractal_noise_2d(99, x, y, 4, 2.0, 0.5);
        assert_eq!(
            field.value(row, col),
            expected,
            "cell ({}, {}) does not match the mapped coordinate",
            row,
            col
        );
    }
}

#[test]
fn test_generate_deterministic() {
    let config = small_config();
    let a = Field::generate(7, &config);
    let b = Field::generate(7, &config);
    assert_eq!(a.values, b.values);
}

#[test]
fn test_seeds_produce_distinct_fields() {
    let config = small_config();
    let a = Field::generate(1, &config);
    let b = Field::generate(2, &config);
    assert_ne!(a.values, b.values);
}

#[test]
fn test_min_max_scan() {
    let field = Field {
        width: 2,
        height: 2,
        values: vec![0.25, -1.5, 3.0, 0.0],
    };
    assert_eq!(field.min_max(), (-1.5, 3.0));
}

#[test]
fn test_min_max_empty_field() {
    let field = Field {
        width: 0,
        height: 0,
        values: vec![],
    };
    assert_eq!(field.min_max(), (0.0, 0.0));
}

#[test]
fn test_normalize_spans_full_display_range() {
    let field = Field::generate(123, &small_config());
    let normalized = field.normalize();
    assert_eq!(normalized.len(), field.values.len());
    assert_eq!(
        normalized.iter().min().copied(),
        Some(0),
        "minimum cell must normalize to 0"
    );
    assert_eq!(
        normalized.iter().max().copied(),
        Some(255),
        "maximum cell must normalize to 255"
    );
}

#[test]
fn test_normalize_is_monotone() {
    let field = Field {
        width: 5,
        height: 1,
        values: vec![-2.0, -0.5, 0.0, 0.5, 2.0],
    };
    let normalized = field.normalize();
    assert_eq!(normalized[0], 0);
    assert_eq!(normalized[4], 255);
    for pair in normalized.windows(2) {
        assert!(pair[0] <= pair[1], "normalization broke ordering: {:?}", normalized);
    }
}

#[test]
fn test_normalize_rounds() {
    // Three evenly spaced samples: the midpoint lands on 127.5 and rounds up
    let field = Field {
        width: 3,
        height: 1,
        values: vec![0.0, 0.5, 1.0],
    };
    assert_eq!(field.normalize(), vec![0, 128, 255]);
}

#[test]
fn test_flat_field_falls_back_to_mid_gray() {
    let field = Field {
        width: 4,
        height: 2,
        values: vec![0.75; 8],
    };
    assert_eq!(field.normalize(), vec![128; 8]);
}

#[test]
fn test_default_config_matches_demo_parameters() {
    let config = FieldConfig::default();
    assert_eq!((config.width, config.height), (600, 600));
    assert_eq!(config.periods, 10.0);
    assert_eq!(config.fractal, FractalParams::default());
}

#[test]
fn test_coordinates_stay_non_negative() {
    // The pixel-to-domain mapping must honor the kernel's precondition
    let config = small_config();
    for i in 0..config.height {
        let x = i as f64 / config.height as f64 * config.periods;
        assert!(x >= 0.0);
    }
    for j in 0..config.width {
        let y = j as f64 / config.width as f64 * config.periods;
        assert!(y >= 0.0);
    }
}
