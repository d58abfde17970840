use std::f32::consts::PI;

use unistroke_recognizer::{
    builtin_definitions, Point, Recognizer, RecognizerError, RecognizerParameters, Strategy,
    TemplateStore,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn rotate(points: &[Point], degrees: f32) -> Vec<Point> {
    let (sin, cos) = (degrees * PI / 180.0).sin_cos();
    points
        .iter()
        .map(|p| Point::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos))
        .collect()
}

fn transform(points: &[Point], scale: f32, dx: f32, dy: f32) -> Vec<Point> {
    points
        .iter()
        .map(|p| Point::new(p.x * scale + dx, p.y * scale + dy))
        .collect()
}

/// A closed loop with a five-lobe wobble, traced counterclockwise from `start` radians
fn rough_circle(n: usize, radius: f32, center: Point, start: f32, wobble: f32, phase: f32) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let t = 2.0 * PI * i as f32 / (n - 1) as f32;
            let r = radius * (1.0 + wobble * (5.0 * t + phase).sin());
            Point::new(center.x + r * (start + t).cos(), center.y + r * (start + t).sin())
        })
        .collect()
}

fn triangle() -> Vec<Point> {
    polyline(&[(137.0, 139.0), (60.0, 225.0), (206.0, 238.0), (136.0, 148.0)], 20)
}

fn rectangle() -> Vec<Point> {
    polyline(
        &[(78.0, 149.0), (83.0, 231.0), (201.0, 235.0), (190.0, 128.0), (76.0, 133.0)],
        20,
    )
}

/// Densely samples a polyline through the given corners
fn polyline(corners: &[(f32, f32)], per_segment: usize) -> Vec<Point> {
    let mut points = Vec::new();
    for w in corners.windows(2) {
        let ((x0, y0), (x1, y1)) = (w[0], w[1]);
        for i in 0..per_segment {
            let t = i as f32 / per_segment as f32;
            points.push(Point::new(x0 + t * (x1 - x0), y0 + t * (y1 - y0)));
        }
    }
    let (x, y) = corners[corners.len() - 1];
    points.push(Point::new(x, y));
    points
}

fn store_of(templates: &[(&str, Vec<Point>)]) -> TemplateStore {
    let mut store = TemplateStore::new(RecognizerParameters::default()).unwrap();
    for (name, raw) in templates {
        store.register(name, raw).unwrap();
    }
    store
}

#[test]
fn rotated_duplicate_matches_with_golden_section() {
    init_logging();
    let recognizer = Recognizer::new().unwrap();
    for definition in builtin_definitions() {
        let rotated = rotate(&definition.points, 20.0);
        let result = recognizer
            .recognize_with(&rotated, Strategy::GoldenSection)
            .unwrap()
            .unwrap();
        assert_eq!(result.name, definition.name);
        assert!(result.distance < 1.0, "{}: distance {}", definition.name, result.distance);
    }
}

#[test]
fn builtin_templates_survive_similarity_transforms() {
    init_logging();
    let recognizer = Recognizer::new().unwrap();
    for definition in builtin_definitions() {
        let raw = &definition.points;
        let variants = [
            rotate(raw, -20.0),
            transform(raw, 2.0, 0.0, 0.0),
            transform(raw, 0.5, 0.0, 0.0),
            transform(raw, 1.0, 500.0, 500.0),
        ];
        for variant in &variants {
            let fast = recognizer.recognize(variant, true).unwrap().unwrap();
            assert_eq!(fast.name, definition.name);
            assert!(fast.distance < 0.02, "{}: protractor distance {}", fast.name, fast.distance);

            let classic = recognizer.recognize(variant, false).unwrap().unwrap();
            assert_eq!(classic.name, definition.name);
            assert!(classic.distance < 1.0, "{}: golden distance {}", classic.name, classic.distance);
        }
    }
}

#[test]
fn recognition_is_deterministic() {
    let recognizer = Recognizer::new().unwrap();
    let stroke = rough_circle(40, 33.0, Point::new(12.0, -4.0), 0.4, 0.08, 2.0);
    for use_protractor in [true, false] {
        let first = recognizer.recognize(&stroke, use_protractor).unwrap();
        let second = recognizer.recognize(&stroke, use_protractor).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn rough_circle_matches_circle_template() {
    init_logging();
    let template = rough_circle(64, 100.0, Point::new(150.0, 150.0), 0.0, 0.03, 0.0);
    let recognizer = Recognizer::with_templates(store_of(&[("circle", template)]));
    let query = rough_circle(50, 40.0, Point::new(300.0, 200.0), 1.3, 0.05, 1.0);

    let result = recognizer.recognize(&query, true).unwrap().unwrap();
    assert_eq!(result.name, "circle");
    assert!(result.score > 1.0, "score {}", result.score);

    let result = recognizer.recognize(&query, false).unwrap().unwrap();
    assert_eq!(result.name, "circle");
}

#[test]
fn triangle_is_closer_to_triangle_than_rectangle() {
    let recognizer = Recognizer::with_templates(store_of(&[
        ("triangle", triangle()),
        ("rectangle", rectangle()),
    ]));
    let jittered: Vec<Point> = triangle()
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let jx = ((i * 7) % 3) as f32 - 1.0;
            let jy = ((i * 5) % 3) as f32 - 1.0;
            Point::new(p.x + jx, p.y + jy)
        })
        .collect();
    let candidate = recognizer.normalize(&jittered).unwrap();
    let templates = recognizer.templates().all();

    for strategy in [Strategy::GoldenSection, Strategy::Protractor] {
        let result = recognizer.recognize_with(&jittered, strategy).unwrap().unwrap();
        assert_eq!(result.name, "triangle");
        let to_triangle = recognizer.distance(&candidate, &templates[0], strategy);
        let to_rectangle = recognizer.distance(&candidate, &templates[1], strategy);
        assert_eq!(result.distance, to_triangle);
        assert!(to_triangle < to_rectangle, "{:?}: {} vs {}", strategy, to_triangle, to_rectangle);
    }
}

#[test]
fn strategies_agree_on_clean_duplicates() {
    let recognizer = Recognizer::new().unwrap();
    for definition in builtin_definitions() {
        let fast = recognizer
            .recognize_with(&definition.points, Strategy::Protractor)
            .unwrap()
            .unwrap();
        let classic = recognizer
            .recognize_with(&definition.points, Strategy::GoldenSection)
            .unwrap()
            .unwrap();
        assert_eq!(fast.name, definition.name);
        assert_eq!(classic.name, fast.name);
        assert!(fast.score > classic.score);
    }
}

#[test]
fn invalid_strokes_are_reported() {
    let recognizer = Recognizer::new().unwrap();
    assert_eq!(
        recognizer.recognize(&[], true),
        Err(RecognizerError::TooFewPoints { len: 0 })
    );
    assert_eq!(
        recognizer.recognize(&[Point::new(4.0, 4.0), Point::new(4.0, 4.0)], false),
        Err(RecognizerError::ZeroLength)
    );
    let vertical = [Point::new(10.0, 0.0), Point::new(10.0, 40.0), Point::new(10.0, 90.0)];
    assert!(matches!(
        recognizer.recognize(&vertical, true),
        Err(RecognizerError::DegenerateBoundingBox { .. })
    ));
}

#[test]
fn shared_recognizer_across_threads() {
    let recognizer = Recognizer::new().unwrap();
    let definitions = builtin_definitions();
    std::thread::scope(|s| {
        for definition in &definitions {
            let recognizer = &recognizer;
            s.spawn(move || {
                let result = recognizer.recognize(&definition.points, true).unwrap().unwrap();
                assert_eq!(result.name, definition.name);
            });
        }
    });
}

#[test]
fn invalid_parameters_never_reach_the_search() {
    let params = RecognizerParameters {
        angle_precision: 0.0,
        ..Default::default()
    };
    assert!(matches!(
        TemplateStore::builtin(params),
        Err(RecognizerError::InvalidParameters { .. })
    ));
    let params = RecognizerParameters {
        num_points: 1,
        ..Default::default()
    };
    assert!(matches!(
        TemplateStore::new(params),
        Err(RecognizerError::InvalidParameters { .. })
    ));
}
