use freq_tally_engine::backup::{load_backup, save};
use freq_tally_engine::counter::FrequencyCounter;
use freq_tally_engine::processor::count_tokens;
use freq_tally_engine::table::FrequencyTable;
use proptest::prelude::*;
use std::io::Cursor;

fn tokens() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z][a-zA-Z0-9_.,-]{0,8}", 0..60)
}

fn separators() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(vec![" ", "\n", "\t", "  ", "\r\n"]), 60)
}

proptest! {
    #[test]
    fn test_query_equals_occurrences(words in tokens(), seps in separators()) {
        let mut text = String::new();
        for (word, sep) in words.iter().zip(seps.iter()) {
            text.push_str(word);
            text.push_str(sep);
        }
        let table = count_tokens(&mut Cursor::new(text)).unwrap();

        for word in &words {
            let expected = words.iter().filter(|w| *w == word).count() as u64;
            prop_assert_eq!(table.get(word), expected);
        }
        prop_assert_eq!(table.total(), words.len() as u64);
    }

    #[test]
    fn test_list_all_sorted_and_idempotent(words in tokens()) {
        let counter = FrequencyCounter::from_table(words.iter().collect(), '*');
        let first = counter.list_all();

        prop_assert!(first.windows(2).all(|pair| pair[0].0 < pair[1].0));
        prop_assert_eq!(first.iter().map(|(_, c)| c).sum::<u64>(), words.len() as u64);
        prop_assert_eq!(&first, &counter.list_all());
    }

    #[test]
    fn test_histogram_marks_match_counts(words in tokens()) {
        let counter = FrequencyCounter::from_table(words.iter().collect(), '*');
        let listed = counter.list_all();
        let histogram = counter.histogram();

        prop_assert_eq!(listed.len(), histogram.len());
        for ((name, count), row) in listed.iter().zip(histogram.iter()) {
            prop_assert_eq!(*name, row.name);
            prop_assert_eq!(row.marks.chars().count() as u64, *count);
            prop_assert!(row.marks.chars().all(|c| c == '*'));
        }
    }

    #[test]
    fn test_backup_round_trip(words in tokens()) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frequency.dat");
        let table: FrequencyTable = words.iter().collect();

        save(&table, &path).unwrap();
        prop_assert_eq!(load_backup(&path).unwrap(), table);
    }
}
