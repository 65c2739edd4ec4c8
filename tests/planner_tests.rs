mod common;
use chrono::NaiveDate;
use common::{form, utc};
use rplanner::core::Planner;
use rplanner::db::{DbPool, EventStore};
use rplanner::errors::{AppError, AppResult};
use rplanner::models::{Event, EventForm, RecurrenceKind};

/// Vec-backed store that counts full reads.
#[derive(Default)]
struct CountingStore {
    events: Vec<Event>,
    next_id: i64,
    full_reads: usize,
}

impl EventStore for CountingStore {
    fn create(&mut self, form: &EventForm) -> AppResult<Event> {
        self.next_id += 1;
        let ev = Event::new(
            self.next_id,
            form.anchor(),
            form.kind(),
            form.notes().to_string(),
        );
        self.events.push(ev.clone());
        Ok(ev)
    }

    fn get_all(&mut self) -> AppResult<Vec<Event>> {
        self.full_reads += 1;
        Ok(self.events.clone())
    }

    fn get_by_id(&mut self, id: i64) -> AppResult<Event> {
        self.events
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(AppError::NotFound(id))
    }

    fn update(&mut self, id: i64, form: &EventForm) -> AppResult<()> {
        let ev = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(AppError::NotFound(id))?;
        *ev = Event::new(id, form.anchor(), form.kind(), form.notes().to_string());
        Ok(())
    }

    fn delete(&mut self, id: i64) -> AppResult<()> {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        if self.events.len() == before {
            return Err(AppError::NotFound(id));
        }
        Ok(())
    }
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn weekly_friday_event_shows_on_later_fridays_only() {
    let mut planner = Planner::new(DbPool::in_memory().unwrap());
    planner
        .create(&form(utc(2024, 3, 15, 9, 0), RecurrenceKind::Weekly, "standup"))
        .unwrap();

    assert_eq!(planner.events_on(day(2024, 3, 22)).unwrap().len(), 1);
    assert!(planner.events_on(day(2024, 3, 21)).unwrap().is_empty());
    assert!(planner.events_on(day(2024, 3, 8)).unwrap().is_empty());
}

#[test]
fn day_query_is_ordered_and_repeatable() {
    let mut planner = Planner::new(DbPool::in_memory().unwrap());
    planner
        .create(&form(utc(2024, 1, 1, 20, 0), RecurrenceKind::Daily, "walk"))
        .unwrap();
    planner
        .create(&form(utc(2024, 5, 10, 8, 0), RecurrenceKind::Once, "dentist"))
        .unwrap();
    planner
        .create(&form(utc(2020, 5, 10, 12, 0), RecurrenceKind::Yearly, "birthday"))
        .unwrap();

    let first = planner.events_on(day(2024, 5, 10)).unwrap();
    let notes: Vec<&str> = first.iter().map(|e| e.notes.as_str()).collect();
    assert_eq!(notes, vec!["dentist", "birthday", "walk"]);

    let second = planner.events_on(day(2024, 5, 10)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn month_view_marks_the_same_days_the_day_query_finds() {
    let mut planner = Planner::new(DbPool::in_memory().unwrap());
    planner
        .create(&form(utc(2024, 3, 15, 9, 0), RecurrenceKind::Weekly, "standup"))
        .unwrap();
    planner
        .create(&form(utc(2024, 3, 3, 18, 0), RecurrenceKind::Once, "concert"))
        .unwrap();

    let expected: Vec<NaiveDate> = (1..=31)
        .map(|d| day(2024, 3, d))
        .filter(|d| !planner.events_on(*d).unwrap().is_empty())
        .collect();

    let view = planner.month(2024, 3).unwrap();
    let marked: Vec<NaiveDate> = view.marked_days().map(|c| c.date).collect();
    assert_eq!(marked, expected);
    assert_eq!(
        marked,
        vec![day(2024, 3, 3), day(2024, 3, 15), day(2024, 3, 22), day(2024, 3, 29)]
    );
}

#[test]
fn month_views_are_memoized_until_a_mutation() {
    let mut planner = Planner::new(CountingStore::default());
    let ev = planner
        .create(&form(utc(2024, 3, 15, 9, 0), RecurrenceKind::Weekly, "standup"))
        .unwrap();

    assert!(!planner.is_cached(2024, 3));
    assert_eq!(planner.month(2024, 3).unwrap().marked_days().count(), 3);
    assert!(planner.is_cached(2024, 3));
    planner.month(2024, 3).unwrap();
    planner.month(2024, 4).unwrap();
    assert!(planner.is_cached(2024, 4));

    planner
        .update(
            ev.id,
            &form(utc(2024, 3, 15, 9, 0), RecurrenceKind::Once, "standup"),
        )
        .unwrap();
    assert!(!planner.is_cached(2024, 3));
    assert!(!planner.is_cached(2024, 4));
    assert_eq!(planner.month(2024, 3).unwrap().marked_days().count(), 1);

    planner.delete(ev.id).unwrap();
    assert!(!planner.is_cached(2024, 3));
    assert_eq!(planner.month(2024, 3).unwrap().marked_days().count(), 0);
}

#[test]
fn cached_month_reads_the_store_once() {
    let mut store = CountingStore::default();
    store
        .create(&form(utc(2024, 3, 15, 9, 0), RecurrenceKind::Daily, "x"))
        .unwrap();
    let mut planner = Planner::new(store);

    planner.month(2024, 3).unwrap();
    planner.month(2024, 3).unwrap();
    planner.month(2024, 3).unwrap();
    assert_eq!(planner.store().full_reads, 1);

    // a second month costs one more read
    planner.month(2024, 4).unwrap();
    assert_eq!(planner.store().full_reads, 2);
}

#[test]
fn failed_mutation_keeps_the_cache() {
    let mut planner = Planner::new(CountingStore::default());
    planner.month(2024, 3).unwrap();

    assert!(matches!(planner.delete(99), Err(AppError::NotFound(99))));
    assert!(planner.is_cached(2024, 3));
}

#[test]
fn invalid_month_is_a_validation_error() {
    let mut planner = Planner::new(CountingStore::default());
    let err = planner.month(2024, 0).err().unwrap();
    assert!(matches!(err, AppError::InvalidMonth(_)));
    assert!(!planner.is_cached(2024, 0));
}
