use std::path::Path;

use console::Style;
use pixscale_core::analysis::{Analysis, ScaleOrigin};
use pixscale_core::error::PixscaleError;
use pixscale_core::pipeline::PipelineReport;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    detected: Style,
    fallback: Style,
    error: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            detected: Style::new().green(),
            fallback: Style::new().dim().yellow(),
            error: Style::new().red().bold(),
            path: Style::new().underlined(),
        }
    }

    fn origin(&self, origin: &ScaleOrigin) -> &Style {
        match origin {
            ScaleOrigin::Detected { .. } => &self.detected,
            ScaleOrigin::Retained | ScaleOrigin::Default => &self.fallback,
        }
    }
}

pub fn print_analysis(path: &Path, analysis: &Analysis, show_runs: bool) {
    let s = Styles::new();
    let decision = &analysis.decision;

    println!("  {}", s.path.apply_to(path.display()));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Scale"),
        s.value.apply_to(format!("{}x", decision.factor))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Origin"),
        s.origin(&decision.origin).apply_to(decision.origin)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Runs"),
        s.value.apply_to(analysis.runs.len())
    );

    if show_runs {
        for run in &analysis.runs {
            println!(
                "      {}",
                s.label
                    .apply_to(format!("rows {}..{} ({})", run.start, run.end, run.len()))
            );
        }
        if !analysis.histogram.is_empty() {
            println!("    {}", s.title.apply_to("Run lengths"));
            for tally in analysis.histogram.entries() {
                println!(
                    "      {:<8}{}",
                    s.value.apply_to(tally.value),
                    s.label.apply_to(format!("x{}", tally.count))
                );
            }
        }
    }
    println!();
}

pub fn print_failure(path: &Path, error: &PixscaleError) {
    let s = Styles::new();
    println!("  {}", s.path.apply_to(path.display()));
    println!("    {}", s.error.apply_to(error));
    println!();
}

pub fn print_report(input: &Path, output: &Path, report: &PipelineReport) {
    let s = Styles::new();
    let (in_w, in_h) = report.input_size;
    let (out_w, out_h) = report.output_size;

    println!();
    println!("  {}", s.title.apply_to("pixscale"));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(format!("{in_w}x{in_h}"))
    );
    println!(
        "  {:<14}{} {}",
        s.label.apply_to("Scale"),
        s.value.apply_to(format!("{}x", report.render_scale)),
        s.origin(&report.decision.origin)
            .apply_to(format!("({})", report.decision.origin))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Runs"),
        s.value.apply_to(report.run_count)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output size"),
        s.value.apply_to(format!("{out_w}x{out_h}"))
    );
    println!();
}
