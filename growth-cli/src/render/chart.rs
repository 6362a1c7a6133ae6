//! Text line chart for the progress view.
//!
//! X is the entry date, Y the running entry count. Points are drawn as `o`
//! and joined with `.` in row order, the way a plotted line would be.
use chrono::NaiveDate;
use growth_core::ProgressPoint;

pub const CHART_TITLE: &str = "Progress Over Time";
pub const X_LABEL: &str = "Date";
pub const Y_LABEL: &str = "Entries";

const MARKER: char = 'o';
const LINE: char = '.';

#[derive(Debug, Clone, Copy)]
pub struct ChartSize {
    pub width: usize,
    pub height: usize,
}

impl Default for ChartSize {
    fn default() -> Self {
        Self {
            width: 60,
            height: 12,
        }
    }
}

/// Lays out the chart as lines of text. Returns no lines for no points.
pub fn render_chart(points: &[ProgressPoint], size: ChartSize) -> Vec<String> {
    let Some(first) = points.first() else {
        return Vec::new();
    };
    let width = size.width.max(2);
    let y_max = points.iter().map(|p| p.entries).max().unwrap_or(1).max(1);
    let rows = y_max.min(size.height.max(1));

    let min_date = points.iter().map(|p| p.date).min().unwrap_or(first.date);
    let max_date = points.iter().map(|p| p.date).max().unwrap_or(first.date);
    let span = (max_date - min_date).num_days();

    let col_of = |date: NaiveDate| -> usize {
        if span == 0 {
            width / 2
        } else {
            let offset = (date - min_date).num_days() as f64;
            (offset / span as f64 * (width - 1) as f64).round() as usize
        }
    };
    let row_of = |entries: usize| -> usize {
        if rows == 1 || y_max == 1 {
            0
        } else {
            ((entries - 1) as f64 * (rows - 1) as f64 / (y_max - 1) as f64).round() as usize
        }
    };

    // grid[0] is the bottom row.
    let mut grid = vec![vec![' '; width]; rows];
    let cells: Vec<(usize, usize)> = points
        .iter()
        .map(|p| (col_of(p.date), row_of(p.entries)))
        .collect();

    for pair in cells.windows(2) {
        let (c0, r0) = (pair[0].0 as f64, pair[0].1 as f64);
        let (c1, r1) = (pair[1].0 as f64, pair[1].1 as f64);
        let steps = (c1 - c0).abs().max((r1 - r0).abs()) as usize;
        for s in 1..steps {
            let t = s as f64 / steps as f64;
            let c = (c0 + (c1 - c0) * t).round() as usize;
            let r = (r0 + (r1 - r0) * t).round() as usize;
            grid[r][c] = LINE;
        }
    }
    for &(c, r) in &cells {
        grid[r][c] = MARKER;
    }

    let label_width = y_max.to_string().len().max(Y_LABEL.len());
    let mut lines = Vec::with_capacity(rows + 4);
    lines.push(CHART_TITLE.to_string());
    lines.push(format!("{Y_LABEL:>label_width$}"));
    for r in (0..rows).rev() {
        let value = if rows == 1 {
            1
        } else {
            1 + ((r * (y_max - 1)) as f64 / (rows - 1) as f64).round() as usize
        };
        let row: String = grid[r].iter().collect();
        lines.push(format!("{value:>label_width$} | {}", row.trim_end()));
    }
    lines.push(format!("{:>label_width$} +-{}", "", "-".repeat(width)));

    let left = min_date.format("%Y-%m-%d").to_string();
    let axis = if span == 0 {
        format!("{left:^width$}")
    } else {
        let right = max_date.format("%Y-%m-%d").to_string();
        let gap = width.saturating_sub(left.len() + right.len()).max(1);
        format!("{left}{}{right}", " ".repeat(gap))
    };
    lines.push(format!("{:>label_width$}   {}", "", axis.trim_end()));
    lines.push(format!("{:>label_width$}   {X_LABEL:^width$}", "").trim_end().to_string());
    lines
}
