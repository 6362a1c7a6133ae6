use crate::{
    RenderOptions,
    common::{
        BaseCli, CliModeResult, HabitsArgs, ReflectArgs, ViewCommand, edit_template,
        resolve_editor,
    },
    render::{ChartSize, Renderer},
};
use anyhow::Result;
use growth_core::{
    Growth, RECENT_COUNT, RecordSet, ReflectionInput, View,
    reflection::{parse_reflection_template, reflection_template},
};
use tracing::debug;

pub struct GrowthCli {
    cli: BaseCli,
    renderer: Renderer,
    growth: Growth,
}

impl GrowthCli {
    pub fn new(cli: BaseCli, growth: Growth) -> Self {
        let renderer = Renderer::new(Some(RenderOptions {
            date_format: growth.config.date_format.to_string(),
            use_color: cli.color.use_color(),
            chart_size: ChartSize::default(),
        }));
        GrowthCli {
            cli,
            renderer,
            growth,
        }
    }

    /// Loads the record set, runs the selected view, then saves on the way out.
    pub fn run(&self) -> Result<()> {
        if let CliModeResult::Finish = self.path_mode() {
            return Ok(());
        }

        let records = self.growth.load()?;
        let records = match &self.cli.view {
            None | Some(ViewCommand::Dashboard) => {
                self.dashboard(&records);
                records
            }
            Some(ViewCommand::Reflect(args)) => self.reflect(records, args)?,
            Some(ViewCommand::Habits(args)) => self.habits(records, args)?,
            Some(ViewCommand::Progress) => {
                self.progress(&records);
                records
            }
        };

        debug!(total = records.len(), "session finished");
        self.growth.close(&records)
    }

    fn path_mode(&self) -> CliModeResult {
        if self.cli.path {
            self.renderer
                .print_info(&format!("{}", self.growth.config.data_file.display()));
            CliModeResult::Finish
        } else {
            CliModeResult::NothingToDo
        }
    }

    fn dashboard(&self, records: &RecordSet) {
        self.renderer.print_view_header(View::Dashboard);
        self.renderer.print_recent(records.recent(RECENT_COUNT));
        self.renderer.print_progress(&records.progress(), true);
    }

    fn progress(&self, records: &RecordSet) {
        self.renderer.print_view_header(View::ProgressTracker);
        self.renderer.print_progress(&records.progress(), false);
    }

    fn reflect(&self, records: RecordSet, args: &ReflectArgs) -> Result<RecordSet> {
        self.renderer.print_view_header(View::DailyReflections);
        let date = self.growth.parse_date(&args.date)?;

        let input = if args.has_text() {
            ReflectionInput {
                date,
                reflection: args.learned.clone().unwrap_or_default(),
                challenges: args.challenges.clone().unwrap_or_default(),
                successes: args.successes.clone().unwrap_or_default(),
            }
        } else {
            let editor = resolve_editor(self.growth.config.editor.as_deref());
            let input = edit_template(&editor, &reflection_template())?
                .map(|text| parse_reflection_template(date, &text));
            let Some(input) = input.filter(|i| !i.is_blank()) else {
                self.renderer
                    .print_info("No reflection to save, because no text was received.");
                return Ok(records);
            };
            input
        };

        let records = self.growth.submit_reflection(records, input)?;
        if let Some(entry) = records.entries().last() {
            self.renderer.print_entry_line(entry);
        }
        self.renderer.print_success("Reflection saved!");
        Ok(records)
    }

    fn habits(&self, records: RecordSet, args: &HabitsArgs) -> Result<RecordSet> {
        self.renderer.print_view_header(View::HabitTracker);
        let today = self.growth.today();

        if !args.is_submit() {
            let todays = records.entries().iter().rev().find(|e| e.date == today);
            self.renderer.print_habits(&self.growth.config.habits, todays);
            return Ok(records);
        }

        let selection = self.growth.habit_selection(&args.checked)?;
        let saved = self.growth.submit_habits(records, &selection)?;
        if saved.updated == 0 {
            self.renderer.print_info(&format!(
                "No entry for {} yet, so nothing was recorded. Save today's reflection first.",
                today.format(&self.growth.config.date_format)
            ));
        }
        let todays = saved.records.entries().iter().rev().find(|e| e.date == today);
        self.renderer.print_habits(&self.growth.config.habits, todays);
        self.renderer.print_success("Habits saved!");
        Ok(saved.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use clap::Parser;
    use growth_core::{Config, habits::default_habits};
    use std::path::Path;
    use tempfile::tempdir;

    fn mk_cli(args: &[&str], data_file: &Path, today: NaiveDate) -> GrowthCli {
        let cli = BaseCli::try_parse_from(args).unwrap();
        let config = Config {
            data_file: data_file.to_path_buf(),
            editor: None,
            habits: default_habits(),
            date_format: "%Y-%m-%d".to_string(),
            input_date_formats: vec!["%d/%m/%Y".to_string()],
            reference_date: today,
        };
        GrowthCli::new(cli, Growth::with_config(config))
    }

    #[test]
    fn reflect_then_habits_round_trip_through_the_file() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("data.csv");
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        mk_cli(
            &["growth", "--color", "never", "reflect", "--learned", "Learned X"],
            &file,
            today,
        )
        .run()
        .unwrap();
        mk_cli(
            &["growth", "--color", "never", "habits", "-c", "Exercise", "-c", "Read a book"],
            &file,
            today,
        )
        .run()
        .unwrap();

        let records = growth_core::Store::new(&file).load().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records.entries()[0].reflection, "Learned X");
        assert_eq!(records.entries()[0].habits, "Read a book, Exercise");
    }

    #[test]
    fn dashboard_on_empty_journal_saves_header_only() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("data.csv");
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        mk_cli(&["growth", "--color", "never"], &file, today)
            .run()
            .unwrap();

        let content = std::fs::read_to_string(&file).unwrap();
        assert_eq!(content, "Date,Reflection,Challenges,Successes,Habits\n");
    }

    #[test]
    fn path_mode_does_not_touch_the_file() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("data.csv");
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        mk_cli(&["growth", "--path", "--color", "never"], &file, today)
            .run()
            .unwrap();

        assert!(!file.exists());
    }

    #[test]
    fn unknown_habit_is_an_error() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("data.csv");
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let err = mk_cli(&["growth", "--color", "never", "habits", "-c", "Juggle"], &file, today)
            .run()
            .unwrap_err();

        assert!(err.to_string().contains("Juggle"));
    }

    #[test]
    fn habit_option_with_comma_is_refused_before_saving() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("data.csv");
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut cli = mk_cli(
            &["growth", "--color", "never", "habits", "-c", "Read, write"],
            &file,
            today,
        );
        cli.growth.config.habits = vec!["Read, write".to_string(), "Run".to_string()];

        let err = cli.run().unwrap_err();

        assert!(err.to_string().contains("must not contain ','"));
        assert!(!file.exists());
    }

    #[cfg(unix)]
    #[test]
    fn reflect_with_untouched_editor_buffer_saves_nothing() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("data.csv");
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut cli = mk_cli(&["growth", "--color", "never", "reflect"], &file, today);
        cli.growth.config.editor = Some("true".to_string());

        cli.run().unwrap();

        assert!(growth_core::Store::new(&file).load().unwrap().is_empty());
    }
}
