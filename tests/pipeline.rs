mod common;

use common::mock_server::serve_once;
use common::synthetic_image::{encode, gradient_rgb, strokes_rgba};
use image::{DynamicImage, GrayImage, ImageBuffer, ImageFormat, Luma};
use imgprep::{
    ColorMode, Error, HeadlessViewer, OutputFormat, PipelineEvent, ProcessingParams, decode_image,
    load_image_from_url, process_image, process_url_to_path, process_url_to_path_with_progress,
    try_load_image_from_url,
};

#[test]
fn served_rgb_drawing_ends_up_as_28x28_grayscale_file() {
    let png = encode(&gradient_rgb(200, 200), ImageFormat::Png);
    let url = serve_once(200, "image/png", png);
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("processed_drawing.png");

    let params = ProcessingParams {
        url,
        output: output.clone(),
        display: false,
        sidecar: true,
        ..Default::default()
    };
    let mut viewer = HeadlessViewer::default();
    let report = process_url_to_path(&params, &mut viewer)
        .unwrap()
        .expect("image should load");

    assert_eq!(report.source_size, (200, 200));
    assert_eq!(report.source_mode, ColorMode::Rgb);
    assert_eq!(report.summary.shape, vec![28, 28]);
    assert!(viewer.shown.is_empty());

    let saved = decode_image(&std::fs::read(&output).unwrap()).unwrap();
    assert_eq!(saved.size(), (28, 28));
    assert_eq!(saved.mode(), ColorMode::Luma);
    assert_eq!(saved, report.processed);

    let sidecar = report.sidecar.expect("sidecar requested");
    assert!(sidecar.exists());
}

#[test]
fn display_shows_original_then_processed() {
    let png = encode(&gradient_rgb(200, 200), ImageFormat::Png);
    let url = serve_once(200, "image/png", png);
    let dir = tempfile::tempdir().unwrap();

    let params = ProcessingParams {
        url,
        output: dir.path().join("out.png"),
        ..Default::default()
    };
    let mut viewer = HeadlessViewer::default();
    process_url_to_path(&params, &mut viewer).unwrap().unwrap();

    assert_eq!(
        viewer.shown,
        vec![
            "Original Drawing (200x200)".to_string(),
            "Processed Image (28x28 Grayscale)".to_string(),
        ]
    );
}

#[test]
fn progress_events_arrive_in_pipeline_order() {
    let png = encode(&gradient_rgb(200, 200), ImageFormat::Png);
    let url = serve_once(200, "image/png", png);
    let dir = tempfile::tempdir().unwrap();

    let params = ProcessingParams {
        url,
        output: dir.path().join("out.png"),
        ..Default::default()
    };
    let mut steps = Vec::new();
    process_url_to_path_with_progress(&params, &mut HeadlessViewer::default(), &mut |event| {
        steps.push(match event {
            PipelineEvent::Loading { .. } => "loading",
            PipelineEvent::Loaded { .. } => "loaded",
            PipelineEvent::ShowingOriginal => "show-original",
            PipelineEvent::Processing => "processing",
            PipelineEvent::ShowingProcessed => "show-processed",
            PipelineEvent::Summarized { .. } => "summarized",
            PipelineEvent::Saved { sidecar, .. } => {
                assert!(sidecar.is_none());
                "saved"
            }
        });
        Ok(())
    })
    .unwrap()
    .unwrap();

    assert_eq!(
        steps,
        [
            "loading",
            "loaded",
            "show-original",
            "processing",
            "show-processed",
            "summarized",
            "saved"
        ]
    );
}

#[test]
fn non_success_status_is_absent_not_fatal() {
    let url = serve_once(404, "text/html", b"<h1>missing</h1>".to_vec());
    assert!(load_image_from_url(&url).is_none());

    let url = serve_once(500, "text/plain", Vec::new());
    match try_load_image_from_url(&url, None) {
        Err(Error::HttpStatus { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[test]
fn undecodable_payload_is_absent_via_same_path() {
    let url = serve_once(200, "image/png", b"definitely not a png".to_vec());
    assert!(load_image_from_url(&url).is_none());

    let url = serve_once(200, "image/png", b"definitely not a png".to_vec());
    let err = try_load_image_from_url(&url, None).unwrap_err();
    assert!(err.is_decode());
    assert!(err.is_fetch_failure());
}

#[test]
fn failed_load_writes_nothing() {
    let url = serve_once(404, "text/html", Vec::new());
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("never.png");

    let params = ProcessingParams {
        url,
        output: output.clone(),
        display: false,
        ..Default::default()
    };
    let report = process_url_to_path(&params, &mut HeadlessViewer::default()).unwrap();
    assert!(report.is_none());
    assert!(!output.exists());
}

#[test]
fn unwritable_output_is_an_error() {
    let png = encode(&gradient_rgb(64, 64), ImageFormat::Png);
    let url = serve_once(200, "image/png", png);
    let dir = tempfile::tempdir().unwrap();

    let params = ProcessingParams {
        url,
        output: dir.path().join("missing-dir").join("out.png"),
        format: OutputFormat::PNG,
        display: false,
        ..Default::default()
    };
    assert!(process_url_to_path(&params, &mut HeadlessViewer::default()).is_err());
}

#[test]
fn every_decodable_format_and_mode_becomes_28x28_luma() {
    let wide_gray: ImageBuffer<Luma<u16>, Vec<u16>> =
        ImageBuffer::from_fn(300, 90, |x, _| Luma([(x * 200) as u16]));
    let payloads = vec![
        encode(&gradient_rgb(200, 200), ImageFormat::Png),
        encode(&gradient_rgb(320, 240), ImageFormat::Jpeg),
        encode(&strokes_rgba(200, 200), ImageFormat::Png),
        encode(&DynamicImage::ImageLuma16(wide_gray), ImageFormat::Png),
        encode(
            &DynamicImage::ImageLuma8(GrayImage::from_pixel(3, 7, Luma([9]))),
            ImageFormat::Bmp,
        ),
    ];

    for (i, bytes) in payloads.iter().enumerate() {
        let image = decode_image(bytes).unwrap();
        let processed = process_image(&image).unwrap();
        assert_eq!(processed.size(), (28, 28), "payload {i}");
        assert_eq!(processed.mode(), ColorMode::Luma, "payload {i}");
    }
}

#[test]
fn processing_a_processed_image_changes_nothing() {
    let image = decode_image(&encode(&gradient_rgb(200, 200), ImageFormat::Png)).unwrap();
    let once = process_image(&image).unwrap();
    let twice = process_image(&once).unwrap();
    assert_eq!(once.as_bytes(), twice.as_bytes());
}
