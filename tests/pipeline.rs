mod common;

use boxcar_converter::classify::Rule;
use boxcar_converter::image::io::RgbaImage;
use boxcar_converter::image::ImageRgba;
use boxcar_converter::mesh::PartKind;
use boxcar_converter::sampler::DrawingBounds;
use boxcar_converter::{
    BoxcarConverter, CanvasKind, CarType, ConvertError, ConverterParams, TemplateId,
};
use common::synthetic_drawing::{
    fill_rect, silhouette, three_block_drawing, white_canvas, INK, WINDOW_BLUE,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn desktop() -> BoxcarConverter {
    BoxcarConverter::new(ConverterParams::for_canvas(CanvasKind::Desktop))
}

#[test]
fn sedan_drawing_300_by_100() {
    init_logging();
    // Front and rear sit low, the cabin reaches the top of the bounds.
    let img = three_block_drawing((400, 200), 50, 100, [(80, 120), (20, 110), (75, 120)]);
    let report = desktop().analyze(&img.as_view()).unwrap();

    assert_eq!(
        report.bounds,
        DrawingBounds {
            x: 50,
            y: 20,
            width: 300,
            height: 100
        }
    );
    assert_eq!(report.profile.height_profile, [40, 90, 45]);
    assert_eq!(report.classification.car_type, CarType::Sedan);
    assert_eq!(report.classification.rule, Rule::Sedan);
    // 300 / 100 is long enough for the stretched sedan body.
    assert_eq!(report.mapping.template, TemplateId::SedanType2);
}

#[test]
fn truck_drawing() {
    init_logging();
    let img = silhouette((400, 200), 20, 100, 150, [90, 60, 40]);
    let report = desktop().analyze(&img.as_view()).unwrap();
    assert_eq!(report.profile.height_profile, [90, 60, 40]);
    assert_eq!(report.classification.car_type, CarType::Truck);
    assert_eq!(report.mapping.template, TemplateId::Truck);
}

#[test]
fn bus_drawing_300_by_100() {
    init_logging();
    let img = three_block_drawing((400, 200), 50, 100, [(40, 120), (20, 102), (41, 120)]);
    let report = desktop().analyze(&img.as_view()).unwrap();
    assert_eq!(
        report.bounds,
        DrawingBounds {
            x: 50,
            y: 20,
            width: 300,
            height: 100
        }
    );
    assert_eq!(report.profile.height_profile, [80, 82, 79]);
    assert_eq!(report.classification.car_type, CarType::Bus);
    assert_eq!(report.mapping.template, TemplateId::Bus);
}

#[test]
fn bus_does_not_depend_on_drawing_length() {
    init_logging();
    for segment in [80, 90, 100, 110] {
        let img = silhouette((400, 200), 20, segment, 150, [80, 82, 79]);
        let report = desktop().analyze(&img.as_view()).unwrap();
        assert_eq!(
            report.classification.car_type,
            CarType::Bus,
            "length {}",
            report.bounds.width
        );
    }
}

#[test]
fn blank_canvases_are_low_confidence_sedans() {
    init_logging();
    for img in [RgbaImage::blank(320, 240), white_canvas(320, 240)] {
        let report = desktop().convert(&img.as_view()).unwrap();
        let a = &report.analysis;
        assert_eq!(a.classification.car_type, CarType::Sedan);
        assert_eq!(a.classification.rule, Rule::Blank);
        assert!(a.classification.confidence <= 0.5);
        assert_eq!(a.bounds.width, 0);
        assert_eq!(a.bounds.height, 0);
        assert_eq!(a.trace.ink_pixels, 0);
        // A generic car is still produced.
        assert_eq!(report.mesh.parts_of(PartKind::Body).count(), 1);
    }
}

#[test]
fn sparse_ink_falls_back_to_default() {
    init_logging();
    let mut img = RgbaImage::blank(400, 300);
    // 50 pixels, below max(100, 0.1% of 120000).
    fill_rect(&mut img, 10, 10, 20, 15, INK);
    let report = desktop().analyze(&img.as_view()).unwrap();
    assert_eq!(report.trace.min_ink_pixels, 120);
    assert_eq!(report.trace.ink_pixels, 50);
    assert_eq!(report.classification.rule, Rule::Sparse);
    assert_eq!(report.classification.car_type, CarType::Sedan);
    assert!(report.classification.confidence <= 0.5);
}

#[test]
fn scattered_dots_are_sparse() {
    init_logging();
    let mut img = RgbaImage::blank(400, 300);
    // 200 isolated pixels: enough ink overall, but no region worth keeping.
    for j in 0..10 {
        for i in 0..20 {
            img.put_pixel(10 + i * 15, 10 + j * 15, INK);
        }
    }
    let report = desktop().analyze(&img.as_view()).unwrap();
    assert_eq!(report.trace.ink_pixels, 200);
    assert_eq!(report.trace.kept_ink_pixels, 1);
    assert!(report.trace.ink_pixels >= report.trace.min_ink_pixels);
    assert_eq!(report.classification.rule, Rule::Sparse);
    assert_eq!(report.classification.car_type, CarType::Sedan);
    assert_eq!(report.classification.confidence, 0.3);
}

#[test]
fn stray_marks_do_not_move_bounds() {
    init_logging();
    let clean = silhouette((400, 200), 20, 100, 150, [90, 60, 40]);
    let mut noisy = clean.clone();
    fill_rect(&mut noisy, 380, 5, 383, 8, INK);

    let a = desktop().analyze(&clean.as_view()).unwrap();
    let b = desktop().analyze(&noisy.as_view()).unwrap();
    assert_eq!(a.bounds, b.bounds);
    assert_eq!(a.profile, b.profile);
    assert_eq!(b.trace.ink_pixels, a.trace.ink_pixels + 9);
    assert_eq!(b.trace.kept_ink_pixels, a.trace.ink_pixels);

    let keep_all = BoxcarConverter::new(ConverterParams {
        ink: boxcar_converter::sampler::InkOptions {
            isolate_largest_region: false,
            ..Default::default()
        },
        ..Default::default()
    });
    let c = keep_all.analyze(&noisy.as_view()).unwrap();
    assert_ne!(c.bounds, a.bounds);
}

#[test]
fn pipeline_is_idempotent() {
    init_logging();
    let img = three_block_drawing((400, 200), 50, 100, [(80, 120), (20, 110), (75, 120)]);
    let converter = desktop();
    let first = converter.convert(&img.as_view()).unwrap();
    let second = converter.convert(&img.as_view()).unwrap();
    assert_eq!(first.analysis.classification, second.analysis.classification);
    assert_eq!(first.analysis.mapping, second.analysis.mapping);
    assert_eq!(first.analysis.profile, second.analysis.profile);
    assert_eq!(first.mesh, second.mesh);
    assert_eq!(first.camera, second.camera);
}

#[test]
fn canvas_kind_selects_truck_threshold() {
    init_logging();
    // front / rear = 63 / 44 ~ 1.43: truck only on the mobile preset.
    let img = silhouette((400, 200), 20, 100, 150, [63, 60, 44]);
    let desktop = desktop().analyze(&img.as_view()).unwrap();
    let mut converter = BoxcarConverter::default();
    converter.set_canvas(CanvasKind::Mobile);
    let mobile = converter.analyze(&img.as_view()).unwrap();
    assert_ne!(desktop.classification.car_type, CarType::Truck);
    assert_eq!(mobile.classification.car_type, CarType::Truck);
    assert_eq!(mobile.trace.input.canvas, CanvasKind::Mobile);
}

#[test]
fn blue_windows_drive_window_placement() {
    init_logging();
    let mut img = silhouette((400, 200), 40, 80, 150, [80, 82, 79]);
    fill_rect(&mut img, 60, 80, 90, 100, WINDOW_BLUE);
    fill_rect(&mut img, 130, 80, 160, 100, WINDOW_BLUE);
    fill_rect(&mut img, 200, 80, 230, 100, WINDOW_BLUE);

    let report = desktop().convert(&img.as_view()).unwrap();
    let a = &report.analysis;
    assert_eq!(a.classification.car_type, CarType::Bus);
    assert_eq!(a.windows.len(), 3);
    assert!(a.windows[0].bounds.x < a.windows[1].bounds.x);
    // Two sides per detected window instead of the bus's five-window pattern.
    assert_eq!(report.mesh.parts_of(PartKind::Window).count(), 6);
}

#[test]
fn convert_frames_the_mesh() {
    init_logging();
    let img = silhouette((400, 200), 20, 100, 150, [90, 60, 40]);
    let report = desktop().convert(&img.as_view()).unwrap();
    let bounds = report.mesh.bounds;
    assert!(!bounds.is_empty());
    assert_eq!(report.camera.target, bounds.center());
    assert!(report.camera.distance > bounds.size().norm() * 0.5);
    assert!(report.analysis.trace.timings.stage_ms("mesh").is_some());
}

#[test]
fn unreadable_surface_is_an_error() {
    let data = vec![0u8; 10];
    let view = ImageRgba {
        w: 64,
        h: 64,
        stride: 64,
        data: &data,
    };
    let err = desktop().analyze(&view).unwrap_err();
    assert!(matches!(err, ConvertError::UnavailableSurface { .. }));
    let err = desktop().convert(&view).unwrap_err();
    assert!(matches!(err, ConvertError::UnavailableSurface { .. }));
}
