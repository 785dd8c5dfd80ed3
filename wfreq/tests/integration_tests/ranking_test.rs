// tests/integration_tests/ranking_test.rs
use wfreq::{FrequencyTable, RankedEntry, rank, render_entry};

fn quick_fox_table() -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for (word, times) in [("the", 5), ("quick", 3), ("fox", 3), ("jumps", 1)] {
        for _ in 0..times {
            table.increment(word);
        }
    }
    table
}

#[test]
fn test_top_two() {
    let entries = rank(&quick_fox_table(), 2);

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0], RankedEntry::new("the", 5));
    assert_eq!(entries[1].count, 3);
    assert!(["quick", "fox"].contains(&entries[1].word.as_str()));
}

#[test]
fn test_limits() {
    let table = quick_fox_table();

    assert!(rank(&table, 0).is_empty());
    assert!(rank(&table, -1).is_empty());
    assert_eq!(rank(&table, 4).len(), 4);
    assert_eq!(rank(&table, 40).len(), table.len());
}

#[test]
fn test_rendered_lines() {
    let lines: Vec<String> = rank(&quick_fox_table(), 4)
        .iter()
        .map(render_entry)
        .collect();

    assert_eq!(lines[0], "Word '<the>' occured <5> times");
    assert_eq!(lines[3], "Word '<jumps>' occured <1> times");
}
