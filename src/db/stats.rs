use crate::db::pool::DbPool;
use crate::db::queries::{count_by_kind, load_all_events};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) EVENTS PER KIND
    //
    let per_kind = count_by_kind(&pool.conn)?;
    let total: i64 = per_kind.iter().map(|(_, n)| n).sum();

    println!(
        "{}• Total events:{} {}{}{}",
        CYAN, RESET, GREEN, total, RESET
    );
    for (kind, n) in &per_kind {
        println!("    {:<7} {}", kind.label(), n);
    }

    //
    // 3) ANCHOR RANGE
    //
    let events = load_all_events(&pool.conn)?;
    let first = events.iter().map(|e| e.anchor).min();
    let last = events.iter().map(|e| e.anchor).max();

    let fmt = |v: Option<chrono::DateTime<chrono::FixedOffset>>| {
        v.map(|dt| dt.format("%Y-%m-%d %H:%M %:z").to_string())
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    };

    println!("{}• Anchor range:{}", CYAN, RESET);
    println!("    from: {}", fmt(first));
    println!("    to:   {}", fmt(last));

    println!();
    Ok(())
}
