//! Chart Component
//!
//! Line chart of one exercise over the entry dates, drawn on an HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::series::{Exercise, SeriesPoint};

const LINE_COLOR: &str = "rgba(75, 192, 192, 1)";
const GRID_COLOR: &str = "#374151"; // gray-700
const TEXT_COLOR: &str = "#9ca3af"; // gray-400
const BACKGROUND: &str = "#1f2937"; // gray-800

/// Canvas size in device pixels
const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 320.0;

/// Plot area inside the canvas, leaving room for titles and labels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn for_canvas(width: f64, height: f64) -> Self {
        let (left, right, top, bottom) = (70.0, 20.0, 36.0, 56.0);
        Self {
            left,
            top,
            width: (width - left - right).max(1.0),
            height: (height - top - bottom).max(1.0),
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Category axis: first and last labels sit on the edges, a single
    /// label sits in the middle
    pub fn x_at(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.left + self.width / 2.0;
        }
        self.left + self.width * index as f64 / (count - 1) as f64
    }

    pub fn y_at(&self, value: f64, (min, max): (f64, f64)) -> f64 {
        self.top + (max - value) / (max - min) * self.height
    }
}

/// Y range covering every numeric value with 10% padding
pub fn y_bounds(points: &[SeriesPoint]) -> (f64, f64) {
    let values: Vec<f64> = points.iter().filter_map(SeriesPoint::numeric).collect();
    if values.is_empty() {
        return (0.0, 1.0);
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    let padding = if range > 0.0 { range * 0.1 } else { 1.0 };

    (min - padding, max + padding)
}

/// Runs of consecutive numeric points; a non-numeric value breaks the line
pub fn segments(points: &[SeriesPoint]) -> Vec<Vec<(usize, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();

    for (index, point) in points.iter().enumerate() {
        match point.numeric() {
            Some(value) => current.push((index, value)),
            None if !current.is_empty() => runs.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Every n-th x label is drawn so they don't overlap
pub fn label_step(count: usize, plot_width: f64) -> usize {
    let fits = (plot_width / 80.0).floor().max(1.0) as usize;
    count.div_ceil(fits).max(1)
}

/// 2D context of a mounted canvas, cleared when dropped via `dispose`
struct CanvasChart {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasChart {
    fn bind(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    fn dispose(self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw(&self, exercise: Exercise, points: &[SeriesPoint]) {
        let ctx = &self.ctx;
        let area = PlotArea::for_canvas(self.width, self.height);
        let bounds = y_bounds(points);

        ctx.set_fill_style(&BACKGROUND.into());
        ctx.fill_rect(0.0, 0.0, self.width, self.height);

        self.draw_legend(exercise);
        self.draw_grid(&area, bounds);
        self.draw_titles(&area, exercise);

        if points.is_empty() {
            ctx.set_fill_style(&TEXT_COLOR.into());
            ctx.set_font("14px sans-serif");
            ctx.set_text_align("center");
            let _ = ctx.fill_text(
                "No entries yet",
                area.left + area.width / 2.0,
                area.top + area.height / 2.0,
            );
            return;
        }

        self.draw_labels(&area, points);

        ctx.set_stroke_style(&LINE_COLOR.into());
        ctx.set_fill_style(&LINE_COLOR.into());
        ctx.set_line_width(2.0);

        for run in segments(points) {
            ctx.begin_path();
            for (i, &(index, value)) in run.iter().enumerate() {
                let x = area.x_at(index, points.len());
                let y = area.y_at(value, bounds);
                if i == 0 {
                    ctx.move_to(x, y);
                } else {
                    ctx.line_to(x, y);
                }
            }
            ctx.stroke();

            for &(index, value) in &run {
                ctx.begin_path();
                let _ = ctx.arc(
                    area.x_at(index, points.len()),
                    area.y_at(value, bounds),
                    3.0,
                    0.0,
                    std::f64::consts::TAU,
                );
                ctx.fill();
            }
        }
    }

    fn draw_legend(&self, exercise: Exercise) {
        let ctx = &self.ctx;
        let center = self.width / 2.0;

        ctx.set_fill_style(&LINE_COLOR.into());
        ctx.fill_rect(center - 70.0, 10.0, 24.0, 10.0);

        ctx.set_fill_style(&TEXT_COLOR.into());
        ctx.set_font("12px sans-serif");
        ctx.set_text_align("left");
        let _ = ctx.fill_text(exercise.dataset_label(), center - 40.0, 19.0);
    }

    fn draw_grid(&self, area: &PlotArea, (min, max): (f64, f64)) {
        let ctx = &self.ctx;
        ctx.set_stroke_style(&GRID_COLOR.into());
        ctx.set_line_width(1.0);
        ctx.set_font("12px sans-serif");
        ctx.set_text_align("right");

        for i in 0..=5 {
            let y = area.top + (i as f64 / 5.0) * area.height;
            ctx.begin_path();
            ctx.move_to(area.left, y);
            ctx.line_to(area.right(), y);
            ctx.stroke();

            let value = max - (i as f64 / 5.0) * (max - min);
            ctx.set_fill_style(&TEXT_COLOR.into());
            let _ = ctx.fill_text(&format!("{:.1}", value), area.left - 8.0, y + 4.0);
        }
    }

    fn draw_titles(&self, area: &PlotArea, exercise: Exercise) {
        let ctx = &self.ctx;
        ctx.set_fill_style(&TEXT_COLOR.into());
        ctx.set_font("bold 12px sans-serif");
        ctx.set_text_align("center");

        let _ = ctx.fill_text("Date", area.left + area.width / 2.0, self.height - 8.0);

        ctx.save();
        let _ = ctx.translate(16.0, area.top + area.height / 2.0);
        let _ = ctx.rotate(-std::f64::consts::FRAC_PI_2);
        let _ = ctx.fill_text(exercise.y_axis_title(), 0.0, 0.0);
        ctx.restore();
    }

    fn draw_labels(&self, area: &PlotArea, points: &[SeriesPoint]) {
        let ctx = &self.ctx;
        let step = label_step(points.len(), area.width);

        ctx.set_fill_style(&TEXT_COLOR.into());
        ctx.set_font("11px sans-serif");
        ctx.set_text_align("center");

        for (index, point) in points.iter().enumerate().step_by(step) {
            let _ = ctx.fill_text(
                &point.label,
                area.x_at(index, points.len()),
                area.bottom() + 18.0,
            );
        }
    }
}

/// Line chart of one exercise
#[component]
pub fn LineChart(
    exercise: Exercise,
    #[prop(into)]
    series: Signal<Vec<SeriesPoint>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let chart = store_value(None::<CanvasChart>);

    // Repaint from scratch whenever the series changes
    create_effect(move |_| {
        let points = series.get();
        let Some(canvas) = canvas_ref.get() else {
            return;
        };

        chart.update_value(|slot| {
            if let Some(previous) = slot.take() {
                previous.dispose();
            }
            *slot = CanvasChart::bind(&canvas);
            if let Some(current) = slot.as_ref() {
                current.draw(exercise, &points);
            }
        });
    });

    on_cleanup(move || {
        chart.try_update_value(|slot| {
            if let Some(previous) = slot.take() {
                previous.dispose();
            }
        });
    });

    view! {
        <div class="bg-gray-800 rounded-lg p-4">
            <canvas
                id=exercise.canvas_id()
                node_ref=canvas_ref
                width=WIDTH.to_string()
                height=HEIGHT.to_string()
                class="w-full h-64 rounded-lg"
            />
        </div>
    }
}
