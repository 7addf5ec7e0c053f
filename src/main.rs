use csv::ReaderBuilder;
use edit_align::{calc_wer_report, Tokenizer};
use log::{error, info, warn};
use std::io;

fn main() {
    // Initialize the logger
    env_logger::init();

    // `words` (default) or `chars`
    let tokenizer = match std::env::args().nth(1).as_deref() {
        None | Some("words") => Tokenizer::word_parser(true),
        Some("chars") => Tokenizer::char_parser(true),
        Some(other) => {
            error!("Unknown tokenization mode: {} (expected `words` or `chars`)", other);
            std::process::exit(2);
        }
    };

    // Each stdin record is `reference,hypothesis`
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(io::stdin());

    let mut scored = 0;

    for (row_idx, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                error!("Failed to read record {}: {}", row_idx, e);
                std::process::exit(1);
            }
        };

        let (reference_text, hypothesis_text) = match (record.get(0), record.get(1)) {
            (Some(reference_text), Some(hypothesis_text)) => (reference_text, hypothesis_text),
            _ => {
                warn!("Skipping invalid row {}: {:?}", row_idx, record);
                continue;
            }
        };

        let reference = tokenizer.tokenize(reference_text);
        let hypothesis = tokenizer.tokenize(hypothesis_text);

        match calc_wer_report(&reference, &hypothesis) {
            Ok(report) => {
                println!(
                    "{}\t{}\t{}\t{}\t{:.4}",
                    report.edit_distance,
                    report.counts.insertions,
                    report.counts.deletions,
                    report.counts.substitutions,
                    report.wer
                );
                scored += 1;
            }
            Err(e) => {
                error!("Skipping row {}: {}", row_idx, e);
            }
        }
    }

    info!("Scored {} records", scored);
}
