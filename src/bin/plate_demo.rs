use plate_detector::config;
use plate_detector::diagnostics::DetectionReport;
use plate_detector::image::io::{
    load_rgb_channels, save_binary_u8, save_grayscale_u8, save_label_grid, write_json_file,
};
use plate_detector::PlateDetector;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "plate_demo".to_string());
    let config_path = args
        .next()
        .ok_or_else(|| format!("Usage: {program} <config.json>"))?;
    let config = config::load_config(Path::new(&config_path))?;

    let rgb = load_rgb_channels(&config.input)?;
    let channels = rgb.as_channels();

    let detector = PlateDetector::new(config.params.clone());
    let report = detector
        .process_with_diagnostics(&channels)
        .map_err(|e| format!("Detection failed on {}: {e}", config.input.display()))?;

    print_text_summary(&report);

    if let Some(path) = &config.output.json_out {
        write_json_file(path, &report)?;
        println!("\nJSON report written to {}", path.display());
    }

    if let Some(dir) = &config.output.debug_dir {
        save_debug_artifacts(dir, &report)?;
        println!("Debug artifacts written to {}", dir.display());
    }

    Ok(())
}

fn print_text_summary(report: &DetectionReport) {
    let res = &report.result;
    println!("Detection summary");
    println!(
        "  bbox: x=[{}, {}] y=[{}, {}]",
        res.bbox.min_x, res.bbox.max_x, res.bbox.min_y, res.bbox.max_y
    );
    println!("  label: {} ({} px)", res.label, res.pixel_count);
    println!("  regions rejected: {}", res.regions_rejected);
    println!("  latency_ms: {:.3}", res.latency_ms);

    let trace = &report.trace;
    println!("\nStages");
    println!(
        "  grayscale[{}]: mean={:.1} ({:.3} ms)",
        trace.grayscale.policy, trace.grayscale.mean_intensity, trace.grayscale.elapsed_ms
    );
    println!(
        "  normalize: input [{}, {}]{} ({:.3} ms)",
        trace.normalize.input_min,
        trace.normalize.input_max,
        if trace.normalize.flat { " flat" } else { "" },
        trace.normalize.elapsed_ms
    );
    println!(
        "  variability: peak={} ({:.3} ms)",
        trace.variability.peak_response, trace.variability.elapsed_ms
    );
    println!(
        "  binarize@{}: {} foreground px ({:.3} ms)",
        trace.binarize.threshold, trace.binarize.foreground, trace.binarize.elapsed_ms
    );
    println!(
        "  morphology {}d/{}e: {} -> {} px ({:.3} ms)",
        trace.morphology.dilate_passes,
        trace.morphology.erode_passes,
        trace.morphology.foreground_in,
        trace.morphology.foreground_out,
        trace.morphology.elapsed_ms
    );
    println!(
        "  labeling: {} components ({:.3} ms)",
        trace.labeling.components, trace.labeling.elapsed_ms
    );
    for rej in &trace.selection.rejected {
        match rej.aspect_ratio {
            Some(r) => println!(
                "  rejected label {} ({} px, ratio {:.2})",
                rej.label, rej.pixel_count, r
            ),
            None => println!(
                "  rejected label {} ({} px, one pixel tall)",
                rej.label, rej.pixel_count
            ),
        }
    }
}

fn save_debug_artifacts(dir: &Path, report: &DetectionReport) -> Result<(), String> {
    let grids = &report.grids;
    save_grayscale_u8(&grids.grayscale, &dir.join("01_grayscale.png"))?;
    save_grayscale_u8(&grids.normalized, &dir.join("02_normalized.png"))?;
    save_grayscale_u8(&grids.variability, &dir.join("03_variability.png"))?;
    save_grayscale_u8(&grids.renormalized, &dir.join("04_renormalized.png"))?;
    save_binary_u8(&grids.binary, &dir.join("05_binary.png"))?;
    save_binary_u8(&grids.smoothed, &dir.join("06_smoothed.png"))?;
    save_label_grid(&grids.labels, &dir.join("07_labels.png"))?;
    Ok(())
}
