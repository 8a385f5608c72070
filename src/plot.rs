use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use svg::Document;
use svg::node::element::{Circle, Line, Rectangle, Text};

use crate::instance::Instance;

/// Drawing options for the result scatter plot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotOptions {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub selected_color: String,
    pub ignored_color: String,
    pub selected_radius: f64,
    pub ignored_radius: f64,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 600.0,
            margin: 70.0,
            selected_color: "red".into(),
            ignored_color: "gray".into(),
            selected_radius: 7.0,
            ignored_radius: 4.0,
        }
    }
}

/// Render the instance as a weight/value scatter plot: ignored items as
/// small translucent dots, selected items as larger highlighted dots.
pub fn scatter_plot(instance: &Instance, selected: &[usize], options: &PlotOptions) -> Document {
    let PlotOptions {
        width,
        height,
        margin,
        ..
    } = *options;

    // Data ranges with a little headroom so no dot sits on the plot edge.
    let x_max = instance.weights.iter().max().copied().unwrap_or(0) as f64 + 1.0;
    let y_max = instance.values.iter().max().copied().unwrap_or(0) as f64 * 1.1 + 10.0;

    let to_px = |weight: f64| margin + (weight / x_max) * (width - 2.0 * margin);
    let to_py = |value: f64| height - margin - (value / y_max) * (height - 2.0 * margin);

    let mut document = Document::new()
        .set("viewBox", (0.0, 0.0, width, height))
        .set("width", width)
        .set("height", height)
        .add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", width)
                .set("height", height)
                .set("fill", "white"),
        );

    // Dashed grid with tick labels on both axes.
    const N_TICKS: usize = 5;
    for tick in 0..=N_TICKS {
        let frac = tick as f64 / N_TICKS as f64;

        let x = to_px(frac * x_max);
        document = document
            .add(
                Line::new()
                    .set("x1", x)
                    .set("y1", to_py(0.0))
                    .set("x2", x)
                    .set("y2", to_py(y_max))
                    .set("stroke", "lightgray")
                    .set("stroke-dasharray", "4 4"),
            )
            .add(
                Text::new(format!("{:.0}", frac * x_max))
                    .set("x", x)
                    .set("y", height - margin + 20.0)
                    .set("text-anchor", "middle")
                    .set("font-size", 12),
            );

        let y = to_py(frac * y_max);
        document = document
            .add(
                Line::new()
                    .set("x1", to_px(0.0))
                    .set("y1", y)
                    .set("x2", to_px(x_max))
                    .set("y2", y)
                    .set("stroke", "lightgray")
                    .set("stroke-dasharray", "4 4"),
            )
            .add(
                Text::new(format!("{:.0}", frac * y_max))
                    .set("x", margin - 10.0)
                    .set("y", y + 4.0)
                    .set("text-anchor", "end")
                    .set("font-size", 12),
            );
    }

    // Axes.
    document = document
        .add(
            Line::new()
                .set("x1", to_px(0.0))
                .set("y1", to_py(0.0))
                .set("x2", to_px(x_max))
                .set("y2", to_py(0.0))
                .set("stroke", "black"),
        )
        .add(
            Line::new()
                .set("x1", to_px(0.0))
                .set("y1", to_py(0.0))
                .set("x2", to_px(0.0))
                .set("y2", to_py(y_max))
                .set("stroke", "black"),
        );

    // Ignored items first so selected dots are drawn on top of them.
    let is_selected = |i: usize| selected.contains(&i);
    for (i, (&weight, &value)) in instance.weights.iter().zip(&instance.values).enumerate() {
        if !is_selected(i) {
            document = document.add(
                Circle::new()
                    .set("cx", to_px(weight as f64))
                    .set("cy", to_py(value as f64))
                    .set("r", options.ignored_radius)
                    .set("fill", options.ignored_color.as_str())
                    .set("fill-opacity", 0.5),
            );
        }
    }
    for &i in selected {
        document = document.add(
            Circle::new()
                .set("cx", to_px(instance.weights[i] as f64))
                .set("cy", to_py(instance.values[i] as f64))
                .set("r", options.selected_radius)
                .set("fill", options.selected_color.as_str()),
        );
    }

    // Title, axis labels and legend.
    document = document
        .add(
            Text::new("Knapsack Optimization Result")
                .set("x", width / 2.0)
                .set("y", margin / 2.0)
                .set("text-anchor", "middle")
                .set("font-size", 20),
        )
        .add(
            Text::new("Weight")
                .set("x", width / 2.0)
                .set("y", height - margin / 3.0)
                .set("text-anchor", "middle")
                .set("font-size", 14),
        )
        .add(
            Text::new("Value")
                .set("x", margin / 3.0)
                .set("y", height / 2.0)
                .set("text-anchor", "middle")
                .set("font-size", 14)
                .set(
                    "transform",
                    format!("rotate(-90 {} {})", margin / 3.0, height / 2.0),
                ),
        )
        .add(
            Circle::new()
                .set("cx", width - margin - 150.0)
                .set("cy", margin + 10.0)
                .set("r", options.selected_radius)
                .set("fill", options.selected_color.as_str()),
        )
        .add(
            Text::new("Selected (Optimal)")
                .set("x", width - margin - 135.0)
                .set("y", margin + 14.0)
                .set("font-size", 12),
        )
        .add(
            Circle::new()
                .set("cx", width - margin - 150.0)
                .set("cy", margin + 30.0)
                .set("r", options.ignored_radius)
                .set("fill", options.ignored_color.as_str())
                .set("fill-opacity", 0.5),
        )
        .add(
            Text::new("Ignored")
                .set("x", width - margin - 135.0)
                .set("y", margin + 34.0)
                .set("font-size", 12),
        );

    document
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)
        .with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!("svg written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_contains_one_dot_per_item_plus_legend() {
        let instance = Instance::generate(30, 42);
        let selected = vec![0, 3, 7];

        let document = scatter_plot(&instance, &selected, &PlotOptions::default());
        let rendered = document.to_string();

        // 30 item dots + 2 legend dots.
        assert_eq!(rendered.matches("<circle").count(), 32);
        assert!(rendered.contains("Knapsack Optimization Result"));
    }

    #[test]
    fn empty_instance_still_renders_a_frame() {
        let instance = Instance::generate(0, 42);
        let document = scatter_plot(&instance, &[], &PlotOptions::default());
        let rendered = document.to_string();

        assert_eq!(rendered.matches("<circle").count(), 2);
        assert!(rendered.contains("Weight"));
        assert!(rendered.contains("Value"));
    }
}
