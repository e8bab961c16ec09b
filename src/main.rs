use boxcar_converter::config::{load_config, RuntimeConfig};
use boxcar_converter::image::io::{load_rgba_image, save_mask_png, write_json_file, RgbaImage};
use boxcar_converter::mesh::obj::write_obj;
use boxcar_converter::sampler::InkMask;
use boxcar_converter::{BoxcarConverter, ConversionReport, ConverterParams};
use std::env;
use std::path::Path;
use std::process;

fn main() {
    env_logger::init();
    let result = match env::args().nth(1) {
        Some(path) => run_config(Path::new(&path)),
        None => run_demo(),
    };
    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run_config(path: &Path) -> boxcar_converter::Result<()> {
    let RuntimeConfig {
        input_path,
        output,
        params,
    } = load_config(path)?;
    let drawing = load_rgba_image(&input_path)?;
    let converter = BoxcarConverter::new(params);
    let report = converter.convert(&drawing.as_view())?;
    print_summary(&report);

    if let Some(json_out) = &output.json_out {
        write_json_file(json_out, &report)?;
    }
    if let Some(obj_out) = &output.obj_out {
        write_obj(obj_out, &report.mesh)?;
    }
    if let Some(mask_out) = &output.mask_out {
        let mask = InkMask::from_image(&drawing.as_view(), &converter.params().ink)?;
        save_mask_png(&mask, mask_out)?;
    }
    Ok(())
}

/// Demo stub: draws a two-box sedan silhouette and converts it.
fn run_demo() -> boxcar_converter::Result<()> {
    let (w, h) = (640usize, 360usize);
    let mut drawing = RgbaImage::blank(w, h);
    let ink = [20, 20, 20, 255];
    // Lower body across the full length, cabin on the middle third.
    for y in 200..260 {
        for x in 80..560 {
            drawing.put_pixel(x, y, ink);
        }
    }
    for y in 130..200 {
        for x in 240..400 {
            drawing.put_pixel(x, y, ink);
        }
    }
    let converter = BoxcarConverter::new(ConverterParams::default());
    let report = converter.convert(&drawing.as_view())?;
    print_summary(&report);
    Ok(())
}

fn print_summary(report: &ConversionReport) {
    let a = &report.analysis;
    println!(
        "type={} confidence={:.2} template={:?} triangles={} latency_ms={:.3}",
        a.classification.car_type,
        a.classification.confidence,
        a.mapping.template,
        report.mesh.triangle_count(),
        a.trace.timings.total_ms
    );
}
