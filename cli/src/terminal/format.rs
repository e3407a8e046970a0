use std::collections::BTreeMap;

use cashpoint_common::money::Banknote;
use colored::*;

use crate::terminal::colors;

/// Groups notes by face value for tree printing, smallest value first.
pub fn notes_to_detail(notes: &[Banknote]) -> Vec<(String, ColoredString)> {
    let mut grouped: BTreeMap<u32, (usize, String)> = BTreeMap::new();
    for note in notes {
        let entry = grouped
            .entry(note.value())
            .or_insert_with(|| (0, note.currency().to_string()));
        entry.0 += 1;
    }

    grouped
        .into_iter()
        .map(|(value, (count, currency))| {
            let key: String = format!("{value} {currency}");
            let detail: ColoredString = format!("x {count}").color(colors::NOTE_VALUE);
            (key, detail)
        })
        .collect()
}
