use console::Style;
use histostretch_core::pipeline::{Analysis, StretchReport};
use histostretch_core::region::RegionSource;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    warning: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            warning: Style::new().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_stretch_summary(report: &StretchReport) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Histogram Stretch"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(17)));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(report.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(report.output.display())
    );
    println!();

    print_analysis_sections(&s, &report.analysis);
}

pub fn print_bounds_summary(input: &std::path::Path, analysis: &Analysis) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Stretch Bounds"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(14)));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );
    println!();

    print_analysis_sections(&s, analysis);
}

fn print_analysis_sections(s: &Styles, analysis: &Analysis) {
    // Image
    println!("  {}", s.header.apply_to("Image"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(format!("{}x{}", analysis.width, analysis.height))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Bit depth"),
        s.value.apply_to(analysis.bit_depth)
    );
    println!();

    // Region
    println!("  {}", s.header.apply_to("Region"));
    let source = match analysis.region_source {
        RegionSource::Explicit => "center + diameter",
        RegionSource::WholeImage { .. } => "whole image",
    };
    println!(
        "    {:<12}{}",
        s.label.apply_to("Source"),
        s.method.apply_to(source)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Rect"),
        s.value.apply_to(analysis.region)
    );
    println!();

    // Histogram
    println!("  {}", s.header.apply_to("Histogram"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Range"),
        s.value.apply_to(format!(
            "[{}, {}]",
            analysis.histogram.hist_min(),
            analysis.histogram.hist_max()
        ))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Bin size"),
        s.value.apply_to(format!("{:.4}", analysis.histogram.bin_size()))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Pixels"),
        s.value.apply_to(analysis.pixel_count)
    );
    println!();

    // Bounds
    let b = &analysis.bounds;
    println!("  {}", s.header.apply_to("Bounds"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Min"),
        s.value.apply_to(format!("{:.3} (bin {})", b.min_val, b.min_bin))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Max"),
        s.value.apply_to(format!("{:.3} (bin {})", b.max_val, b.max_bin))
    );
    println!();

    let notes = analysis.diagnostics();
    if !notes.is_empty() {
        println!("  {}", s.header.apply_to("Notes"));
        for note in notes {
            println!("    {}", s.warning.apply_to(note));
        }
        println!();
    }
}
