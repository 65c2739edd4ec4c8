//! Text rendering of a month view: a week grid with markers on days that
//! have events, followed by the labels of each marked day.

use crate::core::month::MonthView;
use crate::utils::colors::{GREEN, RESET};
use chrono::{Datelike, Weekday};

const CELL: usize = 4;

pub struct GridStyle<'a> {
    pub week_start: Weekday,
    pub date_format: &'a str,
    pub time_format: &'a str,
    pub color: bool,
}

fn weekday_header(start: Weekday) -> String {
    let mut out = String::new();
    let mut wd = start;
    for _ in 0..7 {
        let name = match wd {
            Weekday::Mon => "Mo",
            Weekday::Tue => "Tu",
            Weekday::Wed => "We",
            Weekday::Thu => "Th",
            Weekday::Fri => "Fr",
            Weekday::Sat => "Sa",
            Weekday::Sun => "Su",
        };
        out.push_str(&format!("{:>3} ", name));
        wd = wd.succ();
    }
    out.trim_end().to_string()
}

fn column_of(wd: Weekday, start: Weekday) -> usize {
    match start {
        Weekday::Sun => wd.num_days_from_sunday() as usize,
        _ => wd.num_days_from_monday() as usize,
    }
}

/// Render the grid. Marked days carry a trailing `*`.
pub fn render_grid(view: &MonthView, style: &GridStyle) -> String {
    let mut out = String::new();

    if let Some(first) = view.days.first() {
        let title = first.date.format("%B %Y").to_string();
        let width = 7 * CELL - 1;
        out.push_str(&format!("{:^width$}", title, width = width));
        out.push('\n');
    }
    out.push_str(&weekday_header(style.week_start));
    out.push('\n');

    let mut row = String::new();
    let mut col = 0;

    if let Some(first) = view.days.first() {
        col = column_of(first.date.weekday(), style.week_start);
        row.push_str(&" ".repeat(col * CELL));
    }

    for cell in &view.days {
        let text = format!(
            "{:>3}{}",
            cell.date.day(),
            if cell.has_marker() { "*" } else { " " }
        );
        if cell.has_marker() && style.color {
            row.push_str(&format!("{GREEN}{text}{RESET}"));
        } else {
            row.push_str(&text);
        }

        col += 1;
        if col == 7 {
            out.push_str(row.trim_end());
            out.push('\n');
            row.clear();
            col = 0;
        }
    }

    if !row.trim().is_empty() {
        out.push_str(row.trim_end());
        out.push('\n');
    }

    out
}

/// Render `date` heading plus `time - notes` lines for every marked day.
pub fn render_labels(view: &MonthView, style: &GridStyle) -> String {
    let mut out = String::new();
    for cell in view.marked_days() {
        out.push_str(&format!("{}\n", cell.date.format(style.date_format)));
        for ev in &cell.events {
            out.push_str(&format!(
                "  {} - {}\n",
                ev.time_str(style.time_format),
                ev.display_notes()
            ));
        }
    }
    out
}
