use super::chart::{ChartSize, render_chart};
use super::theme::Garden;
use growth_core::{JournalEntry, ProgressPoint, View};
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

pub const APP_TITLE: &str = "Growth Mindset Tracker";
pub const NO_DATA: &str =
    "No data available yet. Start adding your reflections and habits to see progress.";

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
    pub chart_size: ChartSize,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        let opts = match config {
            Some(config) => config,
            None => RenderOptions {
                date_format: "%A, %d %b %Y".to_string(),
                use_color: true,
                chart_size: ChartSize::default(),
            },
        };
        // Markdown is still laid out without colour, just unstyled.
        let skin = if opts.use_color {
            Garden::default_skin()
        } else {
            MadSkin::no_style()
        };
        Self { skin, opts }
    }

    pub fn print_md(&self, md: &str) {
        self.skin.print_text(md);
    }

    pub fn print_info(&self, message: &str) {
        let md = format!("|-|\n| {message} |\n|-|\n");
        if self.opts.use_color {
            self.print_md(&md);
        } else {
            println!("{}", message);
        }
    }

    pub fn print_success(&self, message: &str) {
        if self.opts.use_color {
            println!("{}", message.with(Garden::GREEN));
        } else {
            println!("{message}");
        }
    }

    pub fn print_view_header(&self, view: View) {
        self.print_md(&format!("# {APP_TITLE}\n## {view}"));
        if let Some(blurb) = view.blurb() {
            self.print_md(blurb);
        }
    }

    /// The "Recent Reflections" block: date and reflection per entry, oldest first.
    pub fn print_recent(&self, entries: &[JournalEntry]) {
        self.print_md("### Recent Reflections");
        for entry in entries {
            let date = entry.date.format(&self.opts.date_format);
            self.print_md(&format!(
                "**Date:** {date}\n**Reflection:** {}\n",
                entry.reflection.trim_end()
            ));
        }
    }

    pub fn print_progress(&self, points: &[ProgressPoint], heading: bool) {
        if heading {
            self.print_md("### Progress Chart");
        }
        for line in progress_lines(points, self.opts.chart_size) {
            if self.opts.use_color {
                println!("{}", line.with(Garden::GREEN));
            } else {
                println!("{line}");
            }
        }
    }

    pub fn print_entry_line(&self, entry: &JournalEntry) {
        let mut date = entry.date.format(&self.opts.date_format).to_string();
        let mut reflection = entry.reflection.lines().next().unwrap_or("").to_string();
        let mut habits = if entry.habits.is_empty() {
            String::new()
        } else {
            format!("[{}]", entry.habits)
        };
        if self.opts.use_color {
            date = date.with(Color::Cyan).to_string();
            reflection = reflection.with(Color::Yellow).to_string();
            habits = habits.with(Garden::GREEN).to_string();
        }
        println!("{} - {} {}", date, reflection, habits);
    }

    pub fn print_habits(&self, options: &[String], today: Option<&JournalEntry>) {
        for line in habit_checklist(options, today, self.opts.use_color) {
            println!("{line}");
        }
    }
}

/// The chart lines, or the no-data message when there is nothing to plot.
pub fn progress_lines(points: &[ProgressPoint], size: ChartSize) -> Vec<String> {
    if points.is_empty() {
        return vec![NO_DATA.to_string()];
    }
    render_chart(points, size)
}

/// Checkbox list: ticked when today's entry already records the habit.
pub fn habit_checklist(
    options: &[String],
    today: Option<&JournalEntry>,
    use_color: bool,
) -> Vec<String> {
    let done: Vec<&str> = today.map(|e| e.habit_names()).unwrap_or_default();
    options
        .iter()
        .map(|habit| {
            let ticked = done.iter().any(|d| d.eq_ignore_ascii_case(habit));
            let mark = match (ticked, use_color) {
                (true, true) => "☑".with(Garden::GREEN).to_string(),
                (false, true) => "☐".to_string(),
                (true, false) => "[x]".to_string(),
                (false, false) => "[ ]".to_string(),
            };
            format!("{mark} {habit}")
        })
        .collect()
}
